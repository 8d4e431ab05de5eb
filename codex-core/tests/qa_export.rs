//! QA tests for the JSON export path.
//!
//! These tests verify the exported JSON keeps the authored shape:
//! - Absent optional fields are omitted, empty lists are kept
//! - Gallery entries serialize as bare strings or objects per variant
//! - The `type` field keeps its source name
//! - File round-trips reproduce the in-memory roster exactly

use codex_core::{export, roster, Game};
use serde_json::Value;

fn exported_value(game: Game) -> Value {
    let json = export::roster_json(game).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn qa_export_is_an_ordered_array_per_collection() {
    let igi = exported_value(Game::ProjectIgi);
    assert_eq!(igi.as_array().unwrap().len(), 9);
    assert_eq!(igi[0]["name"], "David Jones");

    let thething = exported_value(Game::TheThing);
    assert_eq!(thething.as_array().unwrap().len(), 39);
    assert_eq!(thething[38]["name"], "Pilot");
}

#[test]
fn qa_absent_fields_are_omitted_but_empty_lists_survive() {
    let thething = exported_value(Game::TheThing);
    let pilot = &thething[38];

    assert!(pilot.get("img").is_none());
    assert!(pilot.get("description").is_none());
    assert_eq!(pilot["strategy_to_keep_alive"], Value::Array(vec![]));
    assert_eq!(pilot["gallery"], Value::Array(vec![]));
    assert_eq!(pilot["trivia"], Value::Array(vec![]));
}

#[test]
fn qa_gallery_keeps_both_source_shapes() {
    let thething = exported_value(Game::TheThing);

    let hawk = thething
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Hawk")
        .unwrap();
    assert!(hawk["gallery"][0].is_string());

    let pace = thething
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Pace")
        .unwrap();
    let entry = &pace["gallery"][0];
    assert_eq!(entry["image"], "Pacething");
    assert!(entry["description"].as_str().unwrap().starts_with("The Pace-Thing"));
}

#[test]
fn qa_kind_exports_under_its_source_name() {
    let thething = exported_value(Game::TheThing);
    let black_ops = thething
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Whitley's Black Ops")
        .unwrap();
    assert_eq!(black_ops["type"], "Covert U.S. Special Forces unit");
    assert!(black_ops.get("kind").is_none());
}

#[test]
fn qa_cutscene_dialogue_exports_as_a_speaker_map() {
    let thething = exported_value(Game::TheThing);
    let ryder = thething
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Ryder")
        .unwrap();
    let dialogue = ryder["cutscene"]["dialogue"].as_object().unwrap();
    assert_eq!(dialogue.len(), 2);
    assert!(dialogue.contains_key("blake"));
    assert!(dialogue.contains_key("ryder"));
}

#[tokio::test]
async fn qa_file_round_trip() {
    for game in Game::all() {
        let path = std::env::temp_dir().join(format!(
            "codex-qa-export-{}-{}.json",
            game.slug(),
            std::process::id()
        ));

        export::write_roster(game, &path).await.unwrap();
        let loaded = export::read_roster(&path).await.unwrap();
        assert_eq!(loaded.as_slice(), roster::characters(game));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
