use wb_session::Journal;

use super::Context;

pub fn run(ctx: &Context, key: &str, format: &str, last: Option<usize>) -> Result<(), String> {
    let (session, id) = ctx.session_for(key)?;
    let character = session.character(id).map_err(|e| e.to_string())?;
    let mut journal = session.journal(id).map_err(|e| e.to_string())?;

    if let Some(n) = last {
        let mut tail = Journal::new();
        for entry in journal.recent(n) {
            tail.append(entry.clone());
        }
        journal = tail;
    }

    let text = match format {
        "markdown" | "md" => journal.export_markdown(&character.name),
        "text" | "txt" => journal.export_text(),
        other => return Err(format!("unknown journal format '{other}' (use markdown or text)")),
    };
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
