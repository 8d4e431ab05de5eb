//! Character codex for Project IGI and The Thing (2002).
//!
//! This crate provides:
//! - A union record schema covering every field the source material uses
//! - Both rosters as static, immutable in-memory tables
//! - Name lookups and collection-level accessors
//! - JSON export for the web rendering layer
//!
//! # Quick Start
//!
//! ```
//! use codex_core::{roster, Game};
//!
//! let igi = roster::characters(Game::ProjectIgi);
//! assert_eq!(igi.len(), 9);
//!
//! let anya = roster::find(Game::ProjectIgi, "anya").unwrap();
//! assert_eq!(anya.abilities.as_ref().unwrap().len(), 3);
//! ```

pub mod character;
pub mod export;
pub mod igi;
pub mod roster;
pub mod thething;

// Primary public API
pub use character::{Ability, Character, Cutscene, GalleryEntry, Strategy};
pub use export::ExportError;
pub use roster::Game;
