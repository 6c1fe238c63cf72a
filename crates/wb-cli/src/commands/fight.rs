use std::io::{self, BufRead, Write};

use colored::Colorize;
use wb_mechanics::WavePhase;
use wb_session::session::roster_text;

use super::Context;

pub fn run(ctx: &Context, key: &str) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let character = session.character(id).map_err(|e| e.to_string())?;

    println!("  {} {}", "Fighting as".bold(), character.name.bold());
    println!("  Type 'help' for commands, 'quit' to leave (progress is saved).\n");

    let opening = session.engage(id).map_err(|e| e.to_string())?;
    println!("{opening}\n");
    let mut last = session.combat(id).map_err(|e| e.to_string())?;
    if let Some(state) = &last {
        println!("{}\n", roster_text(state));
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match session.process(id, input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) if e.is_user_error() => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
            Err(e) => {
                tracing::error!(character = %id, error = %e, "fight aborted");
                return Err(e.to_string());
            }
        }

        let now = session.combat(id).map_err(|e| e.to_string())?;
        match &now {
            None => {
                println!("{}", "The fight is over.".dimmed());
                break;
            }
            Some(state) if state.phase() == WavePhase::Cleared => {
                println!(
                    "{}\n",
                    "The wave is beaten. Type 'fight' to claim your reward and face the next one."
                        .green()
                );
            }
            Some(state) if state.phase() == WavePhase::Active && now != last => {
                println!("{}\n", roster_text(state));
            }
            _ => {}
        }
        last = now;
    }

    Ok(())
}
