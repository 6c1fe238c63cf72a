//! The multi-wave encounter engine.
//!
//! A character fights waves of monsters one round at a time. Each call to
//! [`EncounterEngine::resolve_round`] takes a character snapshot and the
//! previous [`SessionState`] and returns updated copies. Inputs are never
//! mutated, so a rejected action leaves the caller's values untouched.
//!
//! The wave cycle runs `NoWave → Active → Cleared → NoWave`, with defeat
//! sending an active wave straight back to `NoWave` at wave 1.

pub mod action;
pub mod state;

pub use action::PlayerAction;
pub use state::{SessionState, WavePhase};

use wb_core::Character;

use crate::abilities::{AbilityCatalog, AbilityEffect};
use crate::bestiary::Bestiary;
use crate::dice::RandomSource;
use crate::error::{MechError, MechResult};
use crate::progression::level_up_flat;
use crate::rules::EncounterRules;

/// What kind of round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    /// A new roster was generated; no action was taken.
    WaveStarted,
    /// The player acted and the monsters answered.
    Fought,
    /// The wave was already cleared; the character leveled up.
    WaveCleared,
    /// The character fell and was revived at wave 1.
    Defeated,
}

/// Result of one engine call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    /// The updated character.
    pub character: Character,
    /// The updated combat state.
    pub state: SessionState,
    /// Human-readable account of the round, one event per line.
    pub narrative: String,
    /// Whether this encounter ended (wave cleared or character defeated).
    pub combat_over: bool,
    /// What happened.
    pub kind: RoundKind,
}

/// Resolves combat rounds against a catalog, a bestiary, and a rule set.
#[derive(Debug, Clone, Default)]
pub struct EncounterEngine {
    catalog: AbilityCatalog,
    bestiary: Bestiary,
    rules: EncounterRules,
}

impl EncounterEngine {
    /// An engine using the standard catalog and bestiary with `rules`.
    pub fn new(rules: EncounterRules) -> Self {
        Self {
            catalog: AbilityCatalog::standard(),
            bestiary: Bestiary::standard(),
            rules,
        }
    }

    /// Replace the ability catalog.
    pub fn with_catalog(mut self, catalog: AbilityCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The ability catalog.
    pub fn catalog(&self) -> &AbilityCatalog {
        &self.catalog
    }

    /// The bestiary.
    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    /// The numeric rules.
    pub fn rules(&self) -> &EncounterRules {
        &self.rules
    }

    /// Generate the roster for the state's current wave, replacing any
    /// existing roster.
    pub fn begin_wave<D: RandomSource + ?Sized>(
        &self,
        state: &SessionState,
        dice: &mut D,
    ) -> SessionState {
        let mut next = state.clone();
        next.wave = next.wave.max(1);
        next.monsters = self.bestiary.spawn_wave(next.wave, &self.rules, dice);
        tracing::debug!(wave = next.wave, monsters = next.monsters.len(), "wave spawned");
        next
    }

    /// Resolve one engine step for `character` in `state`.
    ///
    /// With no roster this spawns the wave and ignores `action`. With every
    /// monster dead it advances the wave and levels the character up, also
    /// ignoring `action`. Otherwise the action is validated and applied,
    /// surviving monsters retaliate, and buffs expire.
    pub fn resolve_round<D: RandomSource + ?Sized>(
        &self,
        character: &Character,
        state: &SessionState,
        action: &PlayerAction,
        dice: &mut D,
    ) -> MechResult<RoundOutcome> {
        let mut character = character.clone();
        character.clamp_hp();

        match state.phase() {
            WavePhase::NoWave => {
                let state = self.begin_wave(state, dice);
                let narrative = format!("Wave {} begins!", state.wave);
                Ok(RoundOutcome {
                    character,
                    state,
                    narrative,
                    combat_over: false,
                    kind: RoundKind::WaveStarted,
                })
            }
            WavePhase::Cleared => Ok(self.clear_wave(character, state)),
            WavePhase::Active => self.fight(character, state, action, dice),
        }
    }

    fn clear_wave(&self, mut character: Character, state: &SessionState) -> RoundOutcome {
        let mut state = state.clone();
        let completed = state.wave;
        state.wave += 1;
        state.monsters.clear();
        state.reset_buffs();

        let report = level_up_flat(&mut character, &self.rules);
        character.clamp_hp();
        tracing::debug!(wave = completed, level = character.level, "wave cleared");

        let narrative = format!(
            "Wave {completed} completed! Level Up!\n{report}\nYou've been healed and enemies grow stronger!"
        );
        RoundOutcome {
            character,
            state,
            narrative,
            combat_over: true,
            kind: RoundKind::WaveCleared,
        }
    }

    fn check_target(state: &SessionState, target: Option<usize>) -> MechResult<usize> {
        let index = target.ok_or_else(|| MechError::InvalidTarget("no target given".into()))?;
        match state.monsters.get(index) {
            Some(m) if m.is_alive() => Ok(index),
            Some(m) => Err(MechError::InvalidTarget(format!(
                "#{index} ({}) is already dead",
                m.name
            ))),
            None => Err(MechError::InvalidTarget(format!(
                "#{index} is not in the roster of {}",
                state.monsters.len()
            ))),
        }
    }

    fn fight<D: RandomSource + ?Sized>(
        &self,
        mut character: Character,
        state: &SessionState,
        action: &PlayerAction,
        dice: &mut D,
    ) -> MechResult<RoundOutcome> {
        let mut state = state.clone();
        let mut lines = Vec::new();
        let attackers = state.living();

        match action {
            PlayerAction::Attack { target } => {
                let index = Self::check_target(&state, Some(*target)).inspect_err(|e| {
                    tracing::warn!(error = %e, "attack rejected");
                })?;
                let damage = dice.roll_die(self.rules.basic_attack_die) as i32
                    + character.strength_bonus();
                let monster = &mut state.monsters[index];
                monster.take_damage(damage);
                lines.push(format!("You hit {} for {damage} damage!", monster.name));
            }
            PlayerAction::Ability { name, target } => {
                if !character.has_ability(name) {
                    tracing::warn!(ability = %name, "ability not known by character");
                    return Err(MechError::InvalidAction(format!(
                        "{} does not know {name}",
                        character.name
                    )));
                }
                let ability = self.catalog.get(name).inspect_err(|e| {
                    tracing::error!(character = %character.id, error = %e, "catalog mismatch");
                })?;
                match ability.effect {
                    AbilityEffect::AttackAll { damage } => {
                        for monster in state.monsters.iter_mut().filter(|m| m.is_alive()) {
                            monster.take_damage(damage);
                        }
                        lines.push(format!(
                            "You use {name} and deal {damage} damage to all enemies!"
                        ));
                    }
                    AbilityEffect::AttackSingle { damage } => {
                        let index = Self::check_target(&state, *target).inspect_err(|e| {
                            tracing::warn!(ability = %name, error = %e, "ability target rejected");
                        })?;
                        let monster = &mut state.monsters[index];
                        monster.take_damage(damage);
                        lines.push(format!(
                            "You use {name} and deal {damage} damage to {}!",
                            monster.name
                        ));
                    }
                    AbilityEffect::Heal { amount } => {
                        let healed = character.heal(amount);
                        lines.push(format!("You use {name} and heal for {healed} HP!"));
                    }
                    AbilityEffect::Shield { amount } => {
                        state.shield = amount.max(0);
                        lines.push(format!("You use {name} and gain {amount} shield!"));
                    }
                    AbilityEffect::Dodge { chance } => {
                        state.dodge = chance.clamp(0.0, 1.0);
                        lines.push(format!("You use {name} and gain increased dodge chance!"));
                    }
                }
            }
        }

        let mut total_taken = 0;
        for index in attackers {
            let monster = &state.monsters[index];
            if !monster.is_alive() {
                continue;
            }
            if state.dodge > 0.0 && dice.chance() < state.dodge {
                lines.push(format!("You dodged {}'s attack!", monster.name));
                continue;
            }
            let mut damage = monster.damage.roll(dice) as i32;
            if state.shield > 0 {
                let absorbed = state.shield.min(damage);
                state.shield -= absorbed;
                damage -= absorbed;
                lines.push(format!("Shield absorbed {absorbed} damage!"));
            }
            total_taken += damage;
            lines.push(format!("{} hits for {damage}", monster.name));
        }
        character.hp -= total_taken;
        state.reset_buffs();

        if character.is_defeated() {
            character.restore_full();
            character.clamp_hp();
            state.abandon();
            tracing::debug!(character = %character.id, "character defeated");
            lines.push("You were defeated! But the gods have revived you. Starting from wave 1.".into());
            return Ok(RoundOutcome {
                character,
                state,
                narrative: lines.join("\n"),
                combat_over: true,
                kind: RoundKind::Defeated,
            });
        }

        character.clamp_hp();
        let narrative = format!(
            "Wave {}\n{}\nRemaining enemies: {}",
            state.wave,
            lines.join("\n"),
            state.living_count()
        );
        Ok(RoundOutcome {
            character,
            state,
            narrative,
            combat_over: false,
            kind: RoundKind::Fought,
        })
    }
}
