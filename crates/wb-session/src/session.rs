//! Game session management.
//!
//! `GameSession` owns a store, the rules engine, and the random source. Every
//! operation loads one character record, applies the engine, appends to the
//! journal, and saves the record back with one `save` call.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strsim::jaro_winkler;

use wb_core::{Character, CharacterClass, CharacterId};
use wb_mechanics::encounter::WavePhase;
use wb_mechanics::{
    EncounterEngine, ExplorationOutcome, ExplorationTable, PlayerAction, RoundKind, RoundOutcome,
    SessionState, SkirmishOutcome, market, progression, resolve_exploration, resolve_skirmish,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult, did_you_mean};
use crate::journal::{Journal, JournalEntry};
use crate::store::{GameStore, SaveRecord};

/// Commands understood by [`GameSession::process`].
const COMMANDS: &[&str] = &[
    "explore",
    "fight",
    "attack",
    "use",
    "flee",
    "rest",
    "status",
    "abilities",
    "inventory",
    "buy",
    "drink",
    "skirmish",
    "help",
];

/// Minimum similarity for a "did you mean" suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.7;

/// A game session over a character store.
pub struct GameSession<S: GameStore> {
    store: S,
    engine: EncounterEngine,
    table: ExplorationTable,
    rng: StdRng,
}

impl<S: GameStore> GameSession<S> {
    /// Create a session over `store`.
    pub fn new(store: S, config: SessionConfig) -> SessionResult<Self> {
        let engine = EncounterEngine::new(config.rules);
        let table = ExplorationTable::standard();
        table.validate(engine.catalog())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            store,
            engine,
            table,
            rng,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The rules engine.
    pub fn engine(&self) -> &EncounterEngine {
        &self.engine
    }

    /// Resolve a name, short id, or full id to a stored character's id.
    pub fn find(&self, key: &str) -> SessionResult<CharacterId> {
        self.store.find(key)
    }

    /// Create a character from its class template.
    pub fn create_character(&mut self, name: &str, class: CharacterClass) -> SessionResult<Character> {
        let name = validate_name(name)?;
        self.register(Character::from_class(name, class), false)
    }

    /// Create a character with rolled attributes.
    pub fn create_rolled_character(
        &mut self,
        name: &str,
        class: CharacterClass,
    ) -> SessionResult<Character> {
        let name = validate_name(name)?;
        let character = progression::roll_character(name, class, &mut self.rng);
        self.register(character, true)
    }

    fn register(&mut self, character: Character, rolled: bool) -> SessionResult<Character> {
        let mut record = SaveRecord::new(character);
        record.journal.append(JournalEntry::Created {
            name: record.character.name.clone(),
            class: record.character.class.to_string(),
            rolled,
            timestamp: Utc::now(),
        });
        self.store.save(&record)?;
        tracing::info!(character = %record.id(), name = %record.character.name, "character created");
        Ok(record.character)
    }

    /// Load a character.
    pub fn character(&self, id: CharacterId) -> SessionResult<Character> {
        Ok(self.store.load(id)?.character)
    }

    /// The character's combat state, if a fight is in progress.
    pub fn combat(&self, id: CharacterId) -> SessionResult<Option<SessionState>> {
        Ok(self.store.load(id)?.combat)
    }

    /// The character's journal.
    pub fn journal(&self, id: CharacterId) -> SessionResult<Journal> {
        Ok(self.store.load(id)?.journal)
    }

    /// Explore once.
    pub fn explore(&mut self, id: CharacterId) -> SessionResult<ExplorationOutcome> {
        let mut record = self.store.load(id)?;
        let outcome = resolve_exploration(&record.character, &self.table, &mut self.rng);
        record.character = outcome.character.clone();
        record.shop_open = outcome.shop;
        record.journal.append(JournalEntry::Exploration {
            narrative: outcome.narrative.clone(),
            timestamp: Utc::now(),
        });
        self.store.save(&record)?;
        Ok(outcome)
    }

    /// Enter combat. Spawns the current wave if none is on the field, and
    /// settles an already cleared wave. Returns the narrative.
    pub fn engage(&mut self, id: CharacterId) -> SessionResult<String> {
        let mut record = self.store.load(id)?;
        record.shop_open = false;
        let state = record.combat.take().unwrap_or_default();
        if state.phase() == WavePhase::Active {
            let narrative = format!(
                "Wave {} continues! Remaining enemies: {}",
                state.wave,
                state.living_count()
            );
            record.combat = Some(state);
            self.store.save(&record)?;
            return Ok(narrative);
        }
        let outcome = self.engine.resolve_round(
            &record.character,
            &state,
            &PlayerAction::attack(0),
            &mut self.rng,
        )?;
        let narrative = outcome.narrative.clone();
        apply_round(&mut record, &state, outcome);
        self.store.save(&record)?;
        Ok(narrative)
    }

    /// Take one combat action.
    pub fn act(&mut self, id: CharacterId, action: &PlayerAction) -> SessionResult<RoundOutcome> {
        let mut record = self.store.load(id)?;
        let state = record.combat.clone().ok_or(SessionError::NoActiveCombat)?;
        let outcome = self
            .engine
            .resolve_round(&record.character, &state, action, &mut self.rng)?;
        apply_round(&mut record, &state, outcome.clone());
        self.store.save(&record)?;
        Ok(outcome)
    }

    /// Leave combat. The roster is lost and the next fight starts at wave 1.
    pub fn flee(&mut self, id: CharacterId) -> SessionResult<String> {
        let mut record = self.store.load(id)?;
        let mut state = record.combat.take().ok_or(SessionError::NoActiveCombat)?;
        let wave = state.wave;
        state.abandon();
        record.journal.append(JournalEntry::Fled {
            wave,
            timestamp: Utc::now(),
        });
        self.store.save(&record)?;
        Ok(format!("You flee from wave {wave}. The monsters scatter."))
    }

    /// Take a short rest. Not allowed while monsters are on the field.
    pub fn rest(&mut self, id: CharacterId) -> SessionResult<String> {
        let rules = self.engine.rules().clone();
        self.rest_with(id, "You rest and recover some HP.", |c| {
            progression::rest(c, &rules)
        })
    }

    /// Take a long rest, restoring every hit point. Not allowed while
    /// monsters are on the field.
    pub fn long_rest(&mut self, id: CharacterId) -> SessionResult<String> {
        self.rest_with(
            id,
            "You take a long rest and recover all your HP.",
            progression::full_rest,
        )
    }

    fn rest_with(
        &mut self,
        id: CharacterId,
        text: &str,
        heal: impl FnOnce(&mut Character) -> i32,
    ) -> SessionResult<String> {
        let mut record = self.store.load(id)?;
        if record
            .combat
            .as_ref()
            .is_some_and(|s| s.phase() == WavePhase::Active)
        {
            return Err(SessionError::InvalidChoice(
                "you cannot rest with enemies nearby".to_string(),
            ));
        }
        let before = record.character.hp;
        let healed = heal(&mut record.character);
        record.journal.append(JournalEntry::Rest {
            healed,
            timestamp: Utc::now(),
        });
        let message = format!("{text} HP: {before} → {}", record.character.hp);
        self.store.save(&record)?;
        Ok(message)
    }

    /// Delete a character and everything saved with it.
    pub fn delete_character(&mut self, id: CharacterId) -> SessionResult<Character> {
        let character = self.character(id)?;
        self.store.delete(id)?;
        tracing::info!(character = %id, name = %character.name, "character deleted");
        Ok(character)
    }

    /// Fight a one-exchange skirmish for experience.
    pub fn skirmish(&mut self, id: CharacterId, monster: &str) -> SessionResult<SkirmishOutcome> {
        let mut record = self.store.load(id)?;
        let outcome = resolve_skirmish(
            &record.character,
            monster,
            self.engine.bestiary(),
            self.engine.rules(),
            &mut self.rng,
        )?;
        record.character = outcome.character.clone();
        record.journal.append(JournalEntry::Skirmish {
            monster: outcome.monster.name.clone(),
            victory: outcome.victory,
            xp: outcome.xp_gained,
            timestamp: Utc::now(),
        });
        self.store.save(&record)?;
        Ok(outcome)
    }

    /// Buy from the merchant found by the last exploration.
    pub fn purchase(&mut self, id: CharacterId, item: &str) -> SessionResult<String> {
        let mut record = self.store.load(id)?;
        if !record.shop_open {
            return Err(SessionError::InvalidChoice(
                "there is no merchant here".to_string(),
            ));
        }
        let message = market::purchase(&mut record.character, item)?;
        let bought = market::find_stock(item)?.name;
        record.journal.append(JournalEntry::Purchase {
            item: bought.to_string(),
            gold: record.character.gold,
            timestamp: Utc::now(),
        });
        self.store.save(&record)?;
        Ok(message)
    }

    /// Use up an inventory item.
    pub fn use_item(&mut self, id: CharacterId, item: &str) -> SessionResult<String> {
        let mut record = self.store.load(id)?;
        let message = market::use_item(&mut record.character, item)?;
        record.journal.append(JournalEntry::ItemUsed {
            item: item.trim().to_string(),
            message: message.clone(),
            timestamp: Utc::now(),
        });
        self.store.save(&record)?;
        Ok(message)
    }

    /// Process a line of user input for a character and return a response.
    pub fn process(&mut self, id: CharacterId, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "explore" | "e" => Ok(self.explore(id)?.narrative),
            "fight" | "f" => self.engage(id),
            "attack" | "a" => {
                let target = parse_target(rest)?.ok_or_else(|| {
                    SessionError::InvalidChoice("usage: attack <number>".to_string())
                })?;
                Ok(self.act(id, &PlayerAction::attack(target))?.narrative)
            }
            "use" | "u" => {
                let action = self.parse_ability(id, rest)?;
                Ok(self.act(id, &action)?.narrative)
            }
            "flee" => self.flee(id),
            "rest" | "r" => match rest.to_lowercase().as_str() {
                "" | "short" => self.rest(id),
                "long" => self.long_rest(id),
                other => Err(SessionError::InvalidChoice(format!(
                    "'{other}' is not a kind of rest (short or long)"
                ))),
            },
            "status" | "s" => self.do_status(id),
            "abilities" => self.do_abilities(id),
            "inventory" | "i" => self.do_inventory(id),
            "buy" => {
                if rest.is_empty() {
                    return Err(SessionError::InvalidChoice("usage: buy <item>".to_string()));
                }
                self.purchase(id, rest)
            }
            "drink" => {
                if rest.is_empty() {
                    return Err(SessionError::InvalidChoice("usage: drink <item>".to_string()));
                }
                self.use_item(id, rest)
            }
            "skirmish" => {
                if rest.is_empty() {
                    return Err(SessionError::InvalidChoice(
                        "usage: skirmish <goblin|skeleton|orc>".to_string(),
                    ));
                }
                Ok(self.skirmish(id, rest)?.log.join("\n"))
            }
            "help" | "?" => Ok(help_text().to_string()),
            _ => Err(SessionError::UnknownCommand {
                input: parts[0].to_string(),
                suggestion: suggest(&cmd, COMMANDS.iter().copied()).map(str::to_string),
            }),
        }
    }

    fn parse_ability(&self, id: CharacterId, rest: &str) -> SessionResult<PlayerAction> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: use <ability> [number]".to_string(),
            ));
        }
        let (name, target) = match rest.rsplit_once(' ') {
            Some((head, tail)) if tail.parse::<usize>().is_ok() => {
                (head.trim(), parse_target(tail)?)
            }
            _ => (rest, None),
        };

        let character = self.character(id)?;
        let known = character
            .abilities
            .iter()
            .find(|a| a.eq_ignore_ascii_case(name))
            .cloned();
        match known {
            Some(name) => {
                let needs_target = self
                    .engine
                    .catalog()
                    .find(&name)
                    .is_some_and(|a| a.effect.needs_target());
                if needs_target && target.is_none() {
                    return Err(SessionError::InvalidChoice(format!(
                        "{name} needs a target: use {name} <number>"
                    )));
                }
                Ok(PlayerAction::Ability { name, target })
            }
            None => {
                let hint = did_you_mean(
                    &suggest(name, character.abilities.iter().map(String::as_str))
                        .map(str::to_string),
                );
                Err(SessionError::InvalidChoice(format!(
                    "you don't know '{name}'{hint}"
                )))
            }
        }
    }

    fn do_status(&self, id: CharacterId) -> SessionResult<String> {
        let record = self.store.load(id)?;
        let c = &record.character;
        let mut out = format!(
            "{} the {} (level {})\nHP: {}/{}\nStrength: {}\nGold: {}\nXP: {}",
            c.name,
            c.class,
            c.level,
            c.hp,
            c.max_hp,
            c.attributes.strength,
            c.gold,
            c.experience
        );
        if let Some(state) = &record.combat {
            out.push_str(&format!("\n\n{}", roster_text(state)));
        }
        Ok(out)
    }

    fn do_abilities(&self, id: CharacterId) -> SessionResult<String> {
        let character = self.character(id)?;
        if character.abilities.is_empty() {
            return Ok("You know no abilities.".to_string());
        }
        let mut out = String::from("Abilities:");
        for name in &character.abilities {
            match self.engine.catalog().find(name) {
                Some(ability) => out.push_str(&format!(
                    "\n  {} ({}): {}",
                    ability.name,
                    ability.effect.kind(),
                    ability.description
                )),
                None => out.push_str(&format!("\n  {name} (unknown)")),
            }
        }
        Ok(out)
    }

    fn do_inventory(&self, id: CharacterId) -> SessionResult<String> {
        let character = self.character(id)?;
        if character.inventory.is_empty() {
            Ok("Your inventory is empty".to_string())
        } else {
            Ok(format!("Your inventory: {}", character.inventory.join(", ")))
        }
    }
}

/// Fold an engine outcome into the save record and journal it.
fn apply_round(record: &mut SaveRecord, before: &SessionState, outcome: RoundOutcome) {
    let now = Utc::now();
    let entry = match outcome.kind {
        RoundKind::WaveStarted => JournalEntry::WaveStarted {
            wave: outcome.state.wave,
            monsters: outcome.state.monsters.iter().map(|m| m.name.clone()).collect(),
            timestamp: now,
        },
        RoundKind::Fought => JournalEntry::Round {
            wave: outcome.state.wave,
            narrative: outcome.narrative.clone(),
            timestamp: now,
        },
        RoundKind::WaveCleared => JournalEntry::WaveCleared {
            wave: before.wave,
            level: outcome.character.level,
            timestamp: now,
        },
        RoundKind::Defeated => JournalEntry::Defeated {
            wave: before.wave,
            timestamp: now,
        },
    };
    record.journal.append(entry);
    record.character = outcome.character;
    record.combat = match outcome.kind {
        RoundKind::Defeated => None,
        _ => Some(outcome.state),
    };
}

/// Monster list with 1-based numbers, as typed in `attack <n>`.
pub fn roster_text(state: &SessionState) -> String {
    let mut out = format!("Wave {}", state.wave);
    if state.monsters.is_empty() {
        out.push_str("\n  (no enemies on the field, use 'fight')");
    }
    for (i, m) in state.monsters.iter().enumerate() {
        let status = if m.is_alive() { "" } else { " [dead]" };
        out.push_str(&format!(
            "\n  {}. {} (HP: {}/{}){status}",
            i + 1,
            m.name,
            m.display_hp(),
            m.max_hp
        ));
    }
    out
}

/// Parse a 1-based monster number into a roster index.
fn parse_target(input: &str) -> SessionResult<Option<usize>> {
    let input = input.trim().trim_start_matches('#');
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(Some(n - 1)),
        _ => Err(SessionError::InvalidChoice(format!(
            "'{input}' is not a monster number"
        ))),
    }
}

fn validate_name(name: &str) -> SessionResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(wb_core::CoreError::Validation("character name is empty".to_string()).into());
    }
    Ok(name)
}

/// Closest candidate to `input` by Jaro-Winkler similarity, if close enough.
fn suggest<'a>(input: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .map(|c| (c, jaro_winkler(&input, &c.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

fn help_text() -> &'static str {
    "\
Commands:
  explore                       Look around for treasure, trouble, or trade
  fight                         Start (or resume) the current wave
  attack <n>                    Hit monster number n
  use <ability> [n]             Use an ability, with a target for single-target ones
  flee                          Leave the fight (back to wave 1)
  rest [long]                   Recover some HP, or all of it (not during a fight)
  status                        Show your character and the battlefield
  abilities                     List your abilities
  inventory                     List your items
  buy <item>                    Buy from a merchant you found
  drink <item>                  Use a potion or other consumable
  skirmish <monster>            Quick fight for XP (goblin, skeleton, orc)
  help                          Show this help"
}
