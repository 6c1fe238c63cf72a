use comfy_table::{ContentArrangement, Table};
use wb_mechanics::AbilityEffect;

use super::Context;

pub fn run(ctx: &Context, key: Option<&str>) -> Result<(), String> {
    let session = ctx.session()?;
    let known = match key {
        Some(key) => {
            let id = session.find(key).map_err(|e| e.to_string())?;
            Some(session.character(id).map_err(|e| e.to_string())?)
        }
        None => None,
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Type", "Effect", "Description"]);

    let mut rows = 0;
    for ability in session.engine().catalog().iter() {
        if known.as_ref().is_some_and(|c| !c.has_ability(ability.name)) {
            continue;
        }
        let effect = effect_summary(&ability.effect);
        table.add_row(vec![
            ability.name.to_string(),
            ability.effect.kind().to_string(),
            effect,
            ability.description.to_string(),
        ]);
        rows += 1;
    }

    if rows == 0 {
        println!("  No abilities known.");
        return Ok(());
    }
    println!("{table}");
    Ok(())
}

fn effect_summary(effect: &AbilityEffect) -> String {
    match effect {
        AbilityEffect::AttackAll { damage } | AbilityEffect::AttackSingle { damage } => {
            format!("{damage} damage")
        }
        AbilityEffect::Heal { amount } => format!("heal {amount}"),
        AbilityEffect::Shield { amount } => format!("shield {amount}"),
        AbilityEffect::Dodge { chance } => format!("+{:.0}% dodge", chance * 100.0),
    }
}
