use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use wb_session::session::roster_text;

use super::Context;

pub fn run(ctx: &Context, key: &str) -> Result<(), String> {
    let (session, id) = ctx.session_for(key)?;
    let c = session.character(id).map_err(|e| e.to_string())?;
    let xp_per_level = session.engine().rules().xp_per_level;

    println!();
    println!(
        "  {} {}",
        c.name.bold(),
        format!("({} level {})", c.class, c.level).dimmed()
    );
    println!("  {}", c.id.0.to_string().dimmed());
    println!();
    println!("  {}", super::hp_line(&c));
    println!("  XP {}/{}", c.experience, xp_per_level * c.level);
    println!("  Gold {}", c.gold.to_string().yellow());
    println!();

    let a = &c.attributes;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["STR", "DEX", "CON", "INT", "WIS", "CHA"]);
    table.add_row(vec![
        a.strength,
        a.dexterity,
        a.constitution,
        a.intelligence,
        a.wisdom,
        a.charisma,
    ]);
    println!("{table}");

    if !c.equipment.is_empty() {
        println!();
        println!("  {}:", "Equipment".bold());
        for (slot, item) in &c.equipment {
            println!("    {slot}: {item}");
        }
    }
    if !c.inventory.is_empty() {
        println!();
        println!("  {}: {}", "Inventory".bold(), c.inventory.join(", "));
    }
    if !c.abilities.is_empty() {
        println!();
        println!("  {}: {}", "Abilities".bold(), c.abilities.join(", "));
    }

    if let Some(state) = session.combat(id).map_err(|e| e.to_string())? {
        println!();
        for line in roster_text(&state).lines() {
            println!("  {line}");
        }
    }
    println!();
    Ok(())
}
