use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, key: &str) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let character = session.delete_character(id).map_err(|e| e.to_string())?;
    println!(
        "{} {} ({})",
        "Deleted".red().bold(),
        character.name.bold(),
        character.id.to_string().dimmed()
    );
    Ok(())
}
