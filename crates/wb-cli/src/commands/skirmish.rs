use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context, key: &str, monster: &str) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let outcome = session.skirmish(id, monster).map_err(|e| e.to_string())?;
    for line in &outcome.log {
        println!("{line}");
    }
    println!();
    if outcome.victory {
        println!(
            "{} +{} XP",
            "Victory!".green().bold(),
            outcome.xp_gained
        );
    } else {
        println!("{}", format!("The {} gets away.", outcome.monster.name).yellow());
    }
    println!("{}", super::hp_line(&outcome.character));
    Ok(())
}
