use colored::Colorize;

use super::Context;

pub fn buy(ctx: &Context, key: &str, item: &str) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let message = session.purchase(id, item).map_err(|e| e.to_string())?;
    println!("{message}");
    Ok(())
}

pub fn drink(ctx: &Context, key: &str, item: &str) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let message = session.use_item(id, item).map_err(|e| e.to_string())?;
    println!("{message}");
    let character = session.character(id).map_err(|e| e.to_string())?;
    println!("{}", super::hp_line(&character).dimmed());
    Ok(())
}
