//! Game record types for the entry form.
//!
//! A [`GameRecord`] is the draft the user edits before submission,
//! either typed in manually or prefilled from an OCR parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ocr::ParsedGame;

/// How a game record was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    Manual,
    Ocr,
}

impl std::fmt::Display for EntryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryMethod::Manual => write!(f, "Manual"),
            EntryMethod::Ocr => write!(f, "OCR"),
        }
    }
}

/// One player's row on the game entry form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name, filled in by the user
    pub player_name: String,
    /// Canonical faction name
    pub faction: String,
    /// Final score; absent for dominance victories
    pub score: Option<u32>,
    pub is_winner: bool,
    /// Won by dominance card rather than points
    pub is_dominance: bool,
    /// Row position, matching scoreboard line order
    pub order: u32,
}

/// A complete game entry draft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    /// Canonical map name; empty until the user picks one when the
    /// OCR parse found none
    pub map: String,
    pub entry_method: EntryMethod,
    /// True once the user hand-corrected an OCR prefill
    pub ocr_corrected: bool,
    pub players: Vec<PlayerRecord>,
}

impl GameRecord {
    /// Prefills a draft from a parsed OCR transcript.
    ///
    /// Player names stay empty for the user to fill in. Dominance is
    /// flagged wherever the scoreboard line carried no score; winner
    /// flags start cleared, so the draft does not validate until the
    /// user marks one.
    pub fn from_parsed(parsed: &ParsedGame, date: NaiveDate) -> Self {
        Self {
            date,
            map: parsed.map.clone().unwrap_or_default(),
            entry_method: EntryMethod::Ocr,
            ocr_corrected: false,
            players: parsed
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| PlayerRecord {
                    player_name: String::new(),
                    faction: p.faction.clone(),
                    score: p.score,
                    is_winner: false,
                    is_dominance: p.score.is_none(),
                    order: i as u32,
                })
                .collect(),
        }
    }
}
