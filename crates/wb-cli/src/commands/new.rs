use colored::Colorize;
use wb_core::CharacterClass;

use super::Context;

pub fn run(ctx: &Context, name: &str, class: &str, rolled: bool) -> Result<(), String> {
    let class: CharacterClass = class.parse().map_err(|e| format!("{e}"))?;
    let mut session = ctx.session()?;
    let character = if rolled {
        session.create_rolled_character(name, class)
    } else {
        session.create_character(name, class)
    }
    .map_err(|e| e.to_string())?;

    println!(
        "{} {} the {} ({})",
        "Created".green().bold(),
        character.name.bold(),
        character.class,
        character.id.to_string().dimmed()
    );
    println!("  {}", super::hp_line(&character));
    if !character.abilities.is_empty() {
        println!("  Abilities: {}", character.abilities.join(", "));
    }
    Ok(())
}
