use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, key: &str, times: u32) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let times = times.max(1);
    let mut shop = false;
    for i in 0..times {
        let outcome = session.explore(id).map_err(|e| e.to_string())?;
        if times > 1 {
            println!("{}", format!("[{}]", i + 1).dimmed());
        }
        println!("{}", outcome.narrative);
        shop = outcome.shop;
    }
    if shop {
        println!();
        println!("{}", "Buy with `wb buy <character> <item>`.".dimmed());
    }
    Ok(())
}
