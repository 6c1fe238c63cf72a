//! Tests for the `wb` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wb").unwrap();
    cmd.arg("--data-dir").arg(dir.path()).arg("--seed").arg("7");
    cmd
}

/// A save directory holding one warrior named Brom.
fn with_brom() -> TempDir {
    let dir = TempDir::new().unwrap();
    wb(&dir).args(["new", "Brom"]).assert().success();
    dir
}

// -----------------------------------------------------------------------
// new / list / show
// -----------------------------------------------------------------------

#[test]
fn new_creates_a_save_file() {
    let dir = TempDir::new().unwrap();
    wb(&dir)
        .args(["new", "Ivy", "--class", "mage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Ivy"))
        .stdout(predicate::str::contains("Fireball"));

    let saves: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(saves.len(), 1);
}

#[test]
fn new_rolled_character() {
    let dir = TempDir::new().unwrap();
    wb(&dir)
        .args(["new", "Ada", "--class", "rogue", "--rolled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn new_rejects_unknown_class() {
    let dir = TempDir::new().unwrap();
    wb(&dir)
        .args(["new", "Zed", "--class", "bard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown character class"));
}

#[test]
fn new_rejects_blank_name() {
    let dir = TempDir::new().unwrap();
    wb(&dir)
        .args(["new", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character name is empty"));
}

#[test]
fn list_empty() {
    let dir = TempDir::new().unwrap();
    wb(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters yet"));
}

#[test]
fn list_shows_characters() {
    let dir = with_brom();
    wb(&dir).args(["new", "Ivy", "-c", "mage"]).assert().success();
    wb(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brom"))
        .stdout(predicate::str::contains("Ivy"))
        .stdout(predicate::str::contains("2 character(s)"));
}

#[test]
fn show_character_sheet() {
    let dir = with_brom();
    wb(&dir)
        .args(["show", "brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brom"))
        .stdout(predicate::str::contains("warrior level 1"))
        .stdout(predicate::str::contains("STR"))
        .stdout(predicate::str::contains("Cleave"));
}

#[test]
fn show_unknown_character() {
    let dir = with_brom();
    wb(&dir)
        .args(["show", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found: Nobody"));
}

// -----------------------------------------------------------------------
// abilities
// -----------------------------------------------------------------------

#[test]
fn abilities_lists_catalog() {
    let dir = TempDir::new().unwrap();
    wb(&dir)
        .arg("abilities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fireball"))
        .stdout(predicate::str::contains("Evasion"))
        .stdout(predicate::str::contains("attack_all"));
}

#[test]
fn abilities_for_character() {
    let dir = with_brom();
    wb(&dir)
        .args(["abilities", "Brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleave"))
        .stdout(predicate::str::contains("Fireball").not());
}

// -----------------------------------------------------------------------
// explore / rest / skirmish / shop
// -----------------------------------------------------------------------

#[test]
fn explore_several_times() {
    let dir = with_brom();
    wb(&dir)
        .args(["explore", "Brom", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[3]"));
}

#[test]
fn rest_heals() {
    let dir = with_brom();
    wb(&dir)
        .args(["rest", "Brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You rest and recover some HP."));
}

#[test]
fn long_rest() {
    let dir = with_brom();
    wb(&dir)
        .args(["rest", "Brom", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You take a long rest and recover all your HP. HP: 80 → 80",
        ));
}

#[test]
fn rest_heal_flag_sets_amount() {
    let dir = with_brom();
    let save = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap().path();
    let mut record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&save).unwrap()).unwrap();
    record["character"]["hp"] = 10.into();
    fs::write(&save, serde_json::to_string(&record).unwrap()).unwrap();

    wb(&dir)
        .args(["--rest-heal", "5", "rest", "Brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HP: 10 → 15"));
}

#[test]
fn skirmish_fights_a_monster() {
    let dir = with_brom();
    wb(&dir)
        .args(["skirmish", "Brom", "goblin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A Goblin appears!"));
}

#[test]
fn skirmish_unknown_monster() {
    let dir = with_brom();
    wb(&dir)
        .args(["skirmish", "Brom", "dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown monster"));
}

#[test]
fn buy_without_merchant() {
    let dir = with_brom();
    wb(&dir)
        .args(["buy", "Brom", "Health Potion"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("there is no merchant here"));
}

#[test]
fn drink_missing_item() {
    let dir = with_brom();
    wb(&dir)
        .args(["drink", "Brom", "Elixir of Life"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown item"));
}

// -----------------------------------------------------------------------
// fight
// -----------------------------------------------------------------------

#[test]
fn fight_spawns_wave_and_attacks() {
    let dir = with_brom();
    wb(&dir)
        .args(["fight", "Brom"])
        .write_stdin("attack 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wave 1 begins!"))
        .stdout(predicate::str::contains("You hit"));
}

#[test]
fn fight_reports_bad_commands_and_continues() {
    let dir = with_brom();
    wb(&dir)
        .args(["fight", "Brom"])
        .write_stdin("atack 1\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("did you mean 'attack'?"))
        .stdout(predicate::str::contains("Brom the warrior"));
}

#[test]
fn fight_resumes_wave() {
    let dir = with_brom();
    wb(&dir).args(["fight", "Brom"]).write_stdin("").assert().success();
    wb(&dir)
        .args(["fight", "Brom"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wave 1 continues!"));
}

#[test]
fn flee_ends_fight() {
    let dir = with_brom();
    wb(&dir)
        .args(["fight", "Brom"])
        .write_stdin("flee\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You flee from wave 1."))
        .stdout(predicate::str::contains("The fight is over."))
        .stdout(predicate::str::contains("Brom the warrior").not());
}

#[test]
fn rest_blocked_mid_wave() {
    let dir = with_brom();
    wb(&dir).args(["fight", "Brom"]).write_stdin("").assert().success();
    wb(&dir)
        .args(["rest", "Brom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("you cannot rest with enemies nearby"));
}

// -----------------------------------------------------------------------
// journal
// -----------------------------------------------------------------------

#[test]
fn journal_markdown() {
    let dir = with_brom();
    wb(&dir).args(["rest", "Brom"]).assert().success();
    wb(&dir)
        .args(["journal", "Brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Brom's Journal"));
}

#[test]
fn journal_text() {
    let dir = with_brom();
    wb(&dir)
        .args(["journal", "Brom", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Brom the warrior"));
}

#[test]
fn journal_last_entries() {
    let dir = with_brom();
    wb(&dir).args(["rest", "Brom"]).assert().success();
    wb(&dir)
        .args(["journal", "Brom", "--format", "text", "--last", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rested (+0 HP)"))
        .stdout(predicate::str::contains("Created Brom").not());
}

#[test]
fn journal_unknown_format() {
    let dir = with_brom();
    wb(&dir)
        .args(["journal", "Brom", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown journal format 'pdf'"));
}

// -----------------------------------------------------------------------
// delete
// -----------------------------------------------------------------------

#[test]
fn delete_removes_character() {
    let dir = with_brom();
    wb(&dir)
        .args(["delete", "Brom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    wb(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters yet"));
    wb(&dir)
        .args(["delete", "Brom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found: Brom"));
}

// -----------------------------------------------------------------------
// errors
// -----------------------------------------------------------------------

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("wb")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn fight_aborts_on_catalog_fault() {
    let dir = with_brom();
    let save = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap().path();
    let mut record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&save).unwrap()).unwrap();
    record["character"]["abilities"]
        .as_array_mut()
        .unwrap()
        .push("Meteor".into());
    fs::write(&save, serde_json::to_string(&record).unwrap()).unwrap();

    wb(&dir)
        .args(["fight", "Brom"])
        .write_stdin("use Meteor\nstatus\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: ability \"Meteor\" is not in the catalog",
        ))
        .stdout(predicate::str::contains("Brom the warrior").not());
}
