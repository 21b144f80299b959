//! OCR transcript parsing: fuzzy matching plus line-oriented
//! extraction of map and player results.

pub mod extract;
pub mod matcher;

pub use extract::{parse_game_text, ParsedGame, ParsedPlayer};
pub use matcher::fuzzy_match;
