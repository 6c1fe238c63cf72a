//! Game sessions backed by a JSON save directory.

use tempfile::TempDir;
use wb_core::CharacterClass;
use wb_session::{GameSession, GameStore, JournalEntry, JsonStore, SessionConfig, SessionError};

fn open(dir: &TempDir, seed: u64) -> GameSession<JsonStore> {
    let store = JsonStore::open(dir.path()).unwrap();
    GameSession::new(store, SessionConfig::default().with_seed(seed)).unwrap()
}

#[test]
fn progress_survives_reopening() {
    let dir = TempDir::new().unwrap();
    let id = {
        let mut s = open(&dir, 1);
        let id = s.create_character("Ivy", CharacterClass::Mage).unwrap().id;
        s.engage(id).unwrap();
        s.process(id, "use Fireball").unwrap();
        s.process(id, "use Fireball").unwrap();
        id
    };

    let mut s = open(&dir, 2);
    let c = s.character(id).unwrap();
    assert_eq!(c.level, 2);
    assert_eq!(c.max_hp, 84);
    assert_eq!(s.combat(id).unwrap().unwrap().wave, 2);

    let msg = s.engage(id).unwrap();
    assert_eq!(msg, "Wave 2 begins!");
    let journal = s.journal(id).unwrap();
    assert!(matches!(
        journal.entries().last(),
        Some(JournalEntry::WaveStarted { wave: 2, .. })
    ));
}

#[test]
fn characters_are_listed_and_found() {
    let dir = TempDir::new().unwrap();
    let mut s = open(&dir, 1);
    let brom = s.create_character("Brom", CharacterClass::Warrior).unwrap();
    s.create_character("Ada", CharacterClass::Rogue).unwrap();

    let names: Vec<String> = s
        .store()
        .list()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Ada", "Brom"]);
    assert_eq!(s.find("BROM").unwrap(), brom.id);
    assert_eq!(s.find(&brom.id.to_string()).unwrap(), brom.id);
    assert!(matches!(s.find("Cid"), Err(SessionError::CharacterNotFound(_))));
}

#[test]
fn defeat_ends_combat() {
    let dir = TempDir::new().unwrap();
    let mut s = open(&dir, 3);
    let id = s.create_character("Frail", CharacterClass::Mage).unwrap().id;

    let mut store = JsonStore::open(dir.path()).unwrap();
    let mut record = store.load(id).unwrap();
    record.character.hp = 1;
    store.save(&record).unwrap();

    s.engage(id).unwrap();
    // at least three monsters survive the swing and each hits for 1 or more
    let out = s.process(id, "attack 1").unwrap();
    assert!(out.ends_with("You were defeated! But the gods have revived you. Starting from wave 1."));
    let c = s.character(id).unwrap();
    assert_eq!(c.hp, c.max_hp);
    assert!(s.combat(id).unwrap().is_none());
    assert!(matches!(
        s.process(id, "attack 1"),
        Err(SessionError::NoActiveCombat)
    ));
}

#[test]
fn catalog_faults_are_not_user_errors() {
    let dir = TempDir::new().unwrap();
    let mut s = open(&dir, 4);
    let id = s.create_character("Odd", CharacterClass::Warrior).unwrap().id;

    let mut store = JsonStore::open(dir.path()).unwrap();
    let mut record = store.load(id).unwrap();
    record.character.grant_ability("Meteor");
    store.save(&record).unwrap();

    s.engage(id).unwrap();
    let err = s.process(id, "use Meteor").unwrap_err();
    assert!(!err.is_user_error());
    let typo = s.process(id, "use Cleeve").unwrap_err();
    assert!(typo.is_user_error());
}
