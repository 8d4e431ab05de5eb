//! QA tests for roster data integrity.
//!
//! These tests verify the static data holds the properties consumers rely
//! on:
//! - Record counts per collection
//! - Non-empty display names and de facto name uniqueness
//! - Authored ordering of list fields
//! - Name lookups within a collection

use codex_core::{roster, Game};
use std::collections::HashSet;

// =============================================================================
// COLLECTION SHAPE
// =============================================================================

#[test]
fn qa_collection_counts() {
    assert_eq!(roster::characters(Game::ProjectIgi).len(), 9);
    assert_eq!(roster::characters(Game::TheThing).len(), 39);
}

#[test]
fn qa_every_record_has_a_name() {
    for game in Game::all() {
        for character in roster::characters(game) {
            assert!(
                !character.name.is_empty(),
                "unnamed record in {}",
                game.slug()
            );
        }
    }
}

#[test]
fn qa_names_are_unique_within_a_collection() {
    for game in Game::all() {
        let mut seen = HashSet::new();
        for character in roster::characters(game) {
            assert!(
                seen.insert(character.name.as_str()),
                "duplicate name '{}' in {}",
                character.name,
                game.slug()
            );
        }
    }
}

#[test]
fn qa_loading_twice_is_idempotent() {
    for game in Game::all() {
        let first = roster::characters(game);
        let second = roster::characters(game);
        assert_eq!(first, second);
    }
}

// =============================================================================
// AUTHORED ORDER
// =============================================================================

#[test]
fn qa_history_preserves_narrative_order() {
    let blake = roster::find(Game::TheThing, "Blake").unwrap();
    let history = blake.history.as_ref().unwrap();
    assert_eq!(history.len(), 4);
    assert!(history[0].starts_with("Blake leads Bravo Team"));
    assert!(history[1].starts_with("He uncovers the body of Childs"));
    assert!(history[3].starts_with("He confronts Colonel Whitley"));
}

#[test]
fn qa_roster_preserves_display_order() {
    let igi: Vec<&str> = roster::characters(Game::ProjectIgi)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        igi,
        [
            "David Jones",
            "Anya",
            "Jach Priboi",
            "Josef Priboi",
            "Ekk",
            "Captain Harrison",
            "Nagochi",
            "Skinner",
            "Leonard"
        ]
    );
}

// =============================================================================
// LOOKUPS
// =============================================================================

#[test]
fn qa_anya_lookup() {
    let anya = roster::find(Game::ProjectIgi, "Anya").unwrap();
    let abilities = anya.abilities.as_ref().unwrap();
    assert_eq!(abilities.len(), 3);
    assert_eq!(abilities[0].name, "Mission Coordination");
    assert!(anya.ability("cybersecurity expertise").is_some());
}

#[test]
fn qa_ryder_cutscene_dialogue() {
    let ryder = roster::find(Game::TheThing, "Ryder").unwrap();
    let scene = ryder.cutscene.as_ref().unwrap();
    assert_eq!(scene.location, "Strata Medical Facility");
    assert!(scene.dialogue.contains_key("blake"));
    assert!(scene.dialogue.contains_key("ryder"));
    assert_eq!(
        scene.line("ryder"),
        Some("Uh, yeah, yeah, the sequence is: er, on, off, off, on.")
    );
}

#[test]
fn qa_pilot_is_the_final_record() {
    let pilot = roster::characters(Game::TheThing).last().unwrap();
    assert_eq!(pilot.name, "Pilot");
    assert_eq!(pilot.role.as_deref(), Some("Pilot"));
    assert_eq!(pilot.team.as_deref(), Some("Arctic Marines' Alpha Team"));
    assert_eq!(
        pilot.history.as_deref(),
        Some(&["Pilot of Alpha Team, brings the Alpha Team to U.S Outpost 31.".to_string()][..])
    );
    assert!(pilot.description.is_none());
    assert!(pilot.abilities.is_none());
}
