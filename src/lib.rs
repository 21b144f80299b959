//! # root-scoreboard
//!
//! OCR-backed score extraction for Root board-game league play.
//!
//! A scoreboard photo goes through an OCR engine elsewhere; this crate
//! takes the raw transcript and turns it into structured game data:
//! the map, the factions in play, and per-player scores. Matching is
//! deliberately forgiving, because OCR output is noisy and players
//! write shorthand.
//!
//! ## Quick start
//!
//! ```
//! use root_scoreboard::{parse_game_text, ReferenceData};
//!
//! let data = ReferenceData::builtin();
//! let parsed = parse_game_text("Fall\nMarquise de Cat 28\nbirds 30", &data);
//!
//! assert_eq!(parsed.map.as_deref(), Some("Fall"));
//! assert_eq!(parsed.players[0].faction, "Marquise de Cat");
//! assert_eq!(parsed.players[1].faction, "Eyrie");
//! assert_eq!(parsed.players[1].score, Some(30));
//! ```
//!
//! ## From transcript to validated record
//!
//! ```
//! use chrono::NaiveDate;
//! use root_scoreboard::{parse_game_text, GameRecord, ReferenceData};
//!
//! let data = ReferenceData::builtin();
//! let parsed = parse_game_text("Winter\nEyrie 30\nmoles 28", &data);
//!
//! let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
//! let mut record = GameRecord::from_parsed(&parsed, date);
//! record.players[0].player_name = "Avery".to_string();
//! record.players[1].player_name = "Sam".to_string();
//! record.players[0].is_winner = true;
//!
//! assert!(record.validate(&data).is_ok());
//! ```

pub mod catalog;
pub mod game;
pub mod ocr;
pub mod recognition;

// Re-export the main types for convenience
pub use catalog::{Alias, Catalog, CatalogError, ReferenceData};
pub use game::{EntryMethod, GameRecord, GameValidationError, PlayerRecord};
pub use ocr::{fuzzy_match, parse_game_text, ParsedGame, ParsedPlayer};
pub use recognition::{
    spawn_recognition, CancelToken, RecognitionEvent, RecognitionHandle, RecognitionOutcome,
    Recognizer,
};
