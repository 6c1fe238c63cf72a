use super::Context;

pub fn run(ctx: &Context, key: &str, long: bool) -> Result<(), String> {
    let (mut session, id) = ctx.session_for(key)?;
    let message = if long {
        session.long_rest(id)
    } else {
        session.rest(id)
    }
    .map_err(|e| e.to_string())?;
    println!("{message}");
    Ok(())
}
