use comfy_table::{ContentArrangement, Table};
use wb_session::GameStore;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let session = ctx.session()?;
    let characters = session.store().list().map_err(|e| e.to_string())?;

    if characters.is_empty() {
        println!("  No characters yet. Create one with `wb new <name>`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Id", "Class", "Level", "HP", "Gold", "Wave"]);

    for c in &characters {
        let wave = session
            .combat(c.id)
            .map_err(|e| e.to_string())?
            .map(|s| s.wave.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            c.name.clone(),
            c.id.to_string(),
            c.class.to_string(),
            c.level.to_string(),
            format!("{}/{}", c.hp, c.max_hp),
            c.gold.to_string(),
            wave,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} character(s)", characters.len());
    Ok(())
}
