//! Line-oriented extraction of game results from raw OCR text.
//!
//! Splits the recognized text into candidate lines, finds at most one
//! map, and recovers (faction, optional score) players in line order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::matcher::fuzzy_match;
use crate::catalog::ReferenceData;

/// Trailing score token: one or more digits at the end of a line.
/// The pattern is a compile-time constant; an expect() failure here
/// means the pattern itself is wrong.
static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*$").expect("static regex must compile"));

/// One recovered player line: a canonical faction and the trailing
/// score, if the line carried one. An absent score encodes a
/// dominance victory, not zero points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedPlayer {
    pub faction: String,
    pub score: Option<u32>,
}

/// Structured result of parsing one OCR transcript.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedGame {
    /// Canonical map, when some line matched one
    pub map: Option<String>,
    /// Players in source-line order
    pub players: Vec<ParsedPlayer>,
}

/// Parses raw OCR text into a map and an ordered player list.
///
/// Lines are trimmed and blank lines dropped. The first line matching
/// the map catalog fixes the map; later candidates are not considered.
/// Every line is then checked for a player: a trailing integer is
/// split off as the score and the remainder matched against the
/// faction catalog. Lines matching nothing are OCR noise and skipped.
///
/// Never fails: worst case is an empty result. Pure function of its
/// inputs, safe to call from any thread.
pub fn parse_game_text(raw: &str, data: &ReferenceData) -> ParsedGame {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut result = ParsedGame::default();

    // First line identifying a map wins, the scan stops there
    for line in &lines {
        if let Some(map) = fuzzy_match(line, &data.maps) {
            result.map = Some(map.to_string());
            break;
        }
    }

    // Every line can still contribute a player, map line included
    for line in &lines {
        let (faction_text, score) = split_trailing_score(line);
        match fuzzy_match(faction_text, &data.factions) {
            Some(faction) => result.players.push(ParsedPlayer {
                faction: faction.to_string(),
                score,
            }),
            None => trace!(line, "no faction in line, skipping"),
        }
    }

    debug!(
        lines = lines.len(),
        map = result.map.as_deref().unwrap_or("-"),
        players = result.players.len(),
        "parsed OCR transcript"
    );

    result
}

/// Splits a trailing integer off a line.
///
/// Returns the remaining faction text and the parsed score. A digit
/// run too large for u32 is OCR smear rather than a score: the digits
/// are still stripped but the score comes back absent. Real scores
/// are at most two digits.
fn split_trailing_score(line: &str) -> (&str, Option<u32>) {
    match SCORE_RE.find(line) {
        Some(m) => {
            let digits = m.as_str().trim_end();
            let text = line[..m.start()].trim();
            (text, digits.parse::<u32>().ok())
        }
        None => (line, None),
    }
}
