//! Collection-level access to the two game rosters.
//!
//! The rendering layer imports one collection at a time, keyed by the
//! collection slug it was authored under. Nothing here merges or relates
//! the two rosters; they are fully independent.

use crate::character::Character;
use crate::{igi, thething};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two games the codex covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    ProjectIgi,
    TheThing,
}

impl Game {
    /// Collection name the rendering layer keys off.
    pub fn slug(&self) -> &'static str {
        match self {
            Game::ProjectIgi => "igi-characters",
            Game::TheThing => "thething-characters",
        }
    }

    /// Human-readable game title.
    pub fn title(&self) -> &'static str {
        match self {
            Game::ProjectIgi => "Project IGI",
            Game::TheThing => "The Thing (2002)",
        }
    }

    /// Resolve a collection slug back to its game.
    pub fn from_slug(slug: &str) -> Option<Game> {
        match slug {
            "igi-characters" => Some(Game::ProjectIgi),
            "thething-characters" => Some(Game::TheThing),
            _ => None,
        }
    }

    pub fn all() -> [Game; 2] {
        [Game::ProjectIgi, Game::TheThing]
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Ordered roster for a collection.
pub fn characters(game: Game) -> &'static [Character] {
    match game {
        Game::ProjectIgi => igi::characters(),
        Game::TheThing => thething::characters(),
    }
}

/// Look up a character by display name within one collection
/// (case-insensitive).
pub fn find(game: Game, name: &str) -> Option<&'static Character> {
    match game {
        Game::ProjectIgi => igi::get(name),
        Game::TheThing => thething::get(name),
    }
}

/// Characters in a collection that carry a scripted cutscene.
pub fn with_cutscenes(game: Game) -> impl Iterator<Item = &'static Character> {
    characters(game).iter().filter(|c| c.has_cutscene())
}

/// Characters in a collection that have a portrait asset.
pub fn with_portraits(game: Game) -> impl Iterator<Item = &'static Character> {
    characters(game).iter().filter(|c| c.has_portrait())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for game in Game::all() {
            assert_eq!(Game::from_slug(game.slug()), Some(game));
        }
        assert_eq!(Game::from_slug("half-life-characters"), None);
    }

    #[test]
    fn collections_stay_independent() {
        assert!(find(Game::ProjectIgi, "Blake").is_none());
        assert!(find(Game::TheThing, "Anya").is_none());
    }

    #[test]
    fn cutscene_filter_matches_the_thing_scripted_scenes() {
        let with_scenes: Vec<&str> = with_cutscenes(Game::TheThing)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            with_scenes,
            [
                "Ryder",
                "Dr. Shaun Faraday",
                "Stanmore",
                "Stolls",
                "Temple",
                "Unnamed Medic"
            ]
        );
        assert_eq!(with_cutscenes(Game::ProjectIgi).count(), 0);
    }

    #[test]
    fn only_the_pilot_lacks_a_portrait() {
        assert_eq!(with_portraits(Game::ProjectIgi).count(), 9);
        assert_eq!(with_portraits(Game::TheThing).count(), 38);
    }
}
