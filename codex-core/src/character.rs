//! Character record schema shared by both game rosters.
//!
//! A roster entry is one `Character`: a display name plus whatever
//! descriptive material the source wiki has for that entry. Which fields
//! are filled in varies wildly between records, so everything except
//! `name` is optional. Nested shapes that the source authored
//! inconsistently (galleries, strategy notes) are kept inconsistent on
//! purpose rather than normalized.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A gameplay capability attributed to a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

impl Ability {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// One gallery entry.
///
/// Source galleries mix bare caption strings with captioned image
/// references. The untagged representation keeps both shapes on the wire
/// exactly as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryEntry {
    Caption(String),
    Image { image: String, description: String },
}

impl GalleryEntry {
    /// Bare caption with no image reference.
    pub fn caption(text: &str) -> Self {
        GalleryEntry::Caption(text.to_string())
    }

    /// Captioned image reference.
    pub fn image(image: &str, description: &str) -> Self {
        GalleryEntry::Image {
            image: image.to_string(),
            description: description.to_string(),
        }
    }

    /// Caption text regardless of shape.
    pub fn text(&self) -> &str {
        match self {
            GalleryEntry::Caption(text) => text,
            GalleryEntry::Image { description, .. } => description,
        }
    }

    /// Image reference, if this entry has one.
    pub fn image_ref(&self) -> Option<&str> {
        match self {
            GalleryEntry::Caption(_) => None,
            GalleryEntry::Image { image, .. } => Some(image),
        }
    }
}

/// Survival advice authored as a single prose block.
///
/// Distinct from the `strategy_to_keep_alive` bullet list some records
/// use; the source has both shapes and they are kept separate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub description: String,
}

/// A scripted scene tied to an in-game location.
///
/// Dialogue is keyed by ad hoc speaker labels; there is no fixed key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cutscene {
    pub location: String,
    pub dialogue: HashMap<String, String>,
}

impl Cutscene {
    pub fn new(location: &str, lines: &[(&str, &str)]) -> Self {
        Self {
            location: location.to_string(),
            dialogue: lines
                .iter()
                .map(|(speaker, line)| (speaker.to_string(), line.to_string()))
                .collect(),
        }
    }

    /// Line spoken by the given speaker label, if any.
    pub fn line(&self, speaker: &str) -> Option<&str> {
        self.dialogue.get(speaker).map(String::as_str)
    }
}

/// One roster entry.
///
/// The field set is the union of everything observed across both games.
/// Absent fields are omitted when serialized so the exported JSON matches
/// the hand-authored source records. List fields preserve authored order;
/// a present-but-empty list is `Some(vec![])`, distinct from an absent
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,

    /// Relative portrait path, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Voice/performance credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fate: Option<String>,

    /// Serialized as `type`; used for group entries like a whole unit.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_actor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_appearance: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_appearance: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_dialogue: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Ability>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trivia: Option<Vec<String>>,

    /// Narrative timeline; entry order is chronological and meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_to_keep_alive: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_get_in_team: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutscene: Option<Cutscene>,
}

impl Character {
    /// Record with only the name set; roster literals fill in the rest.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Look up an ability by name (case-insensitive).
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities
            .as_deref()?
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn has_portrait(&self) -> bool {
        self.img.is_some()
    }

    pub fn has_cutscene(&self) -> bool {
        self.cutscene.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_entries_keep_their_source_shape() {
        let caption = GalleryEntry::caption("Hawk's voice files.");
        let json = serde_json::to_string(&caption).unwrap();
        assert_eq!(json, "\"Hawk's voice files.\"");

        let image = GalleryEntry::image("Pacething", "The Pace-Thing.");
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(
            json,
            "{\"image\":\"Pacething\",\"description\":\"The Pace-Thing.\"}"
        );
    }

    #[test]
    fn gallery_entries_round_trip_untagged() {
        let entries = vec![
            GalleryEntry::caption("A bare caption."),
            GalleryEntry::image("ref", "A captioned image."),
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let back: Vec<GalleryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
        assert_eq!(back[0].image_ref(), None);
        assert_eq!(back[1].image_ref(), Some("ref"));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let record = Character::new("Pilot");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{\"name\":\"Pilot\"}");
    }

    #[test]
    fn kind_serializes_as_type() {
        let record = Character {
            kind: Some("Covert U.S. Special Forces unit".to_string()),
            ..Character::new("Whitley's Black Ops")
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"Covert U.S. Special Forces unit\""));
        assert!(!json.contains("\"kind\""));

        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn empty_lists_survive_serialization() {
        let record = Character {
            trivia: Some(vec![]),
            ..Character::new("Pilot")
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"trivia\":[]"));

        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trivia, Some(vec![]));
    }

    #[test]
    fn cutscene_lines_are_keyed_by_speaker() {
        let scene = Cutscene::new(
            "Strata Medical Facility",
            &[("blake", "I need the sequence."), ("ryder", "Uh, yeah.")],
        );
        assert_eq!(scene.line("blake"), Some("I need the sequence."));
        assert_eq!(scene.line("ryder"), Some("Uh, yeah."));
        assert_eq!(scene.line("whitley"), None);
    }

    #[test]
    fn ability_lookup_is_case_insensitive() {
        let record = Character {
            abilities: Some(vec![Ability::new("Healing", "Heals the team.")]),
            ..Character::new("Blake")
        };
        assert!(record.ability("healing").is_some());
        assert!(record.ability("Junction Box Fixing").is_none());
    }
}
