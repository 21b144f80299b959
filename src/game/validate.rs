//! Submission rules for game entry drafts.

use std::collections::HashSet;
use thiserror::Error;

use super::record::GameRecord;
use crate::catalog::ReferenceData;

/// Maximum score the form accepts; Root games top out well below this.
const MAX_SCORE: u32 = 100;

/// Rule violations that block a game submission.
#[derive(Debug, Error, PartialEq)]
pub enum GameValidationError {
    #[error("a game needs 2 to 6 players, got {0}")]
    PlayerCount(usize),
    #[error("player {0} has no name")]
    EmptyPlayerName(usize),
    #[error("unknown faction: {0}")]
    UnknownFaction(String),
    #[error("unknown map: {0}")]
    UnknownMap(String),
    #[error("score {score} for player {index} exceeds the maximum of 100")]
    ScoreOutOfRange { index: usize, score: u32 },
    #[error("no player is marked as winner")]
    NoWinner,
    #[error("duplicate faction: {0}")]
    DuplicateFaction(String),
}

impl GameRecord {
    /// Checks a draft against the submission rules: 2 to 6 players,
    /// named players, canonical faction and map, scores capped at 100,
    /// at least one winner, and no faction fielded twice. Vagabond
    /// characters are exempt from the duplicate rule; several can
    /// share a game.
    pub fn validate(&self, data: &ReferenceData) -> Result<(), GameValidationError> {
        if !(2..=6).contains(&self.players.len()) {
            return Err(GameValidationError::PlayerCount(self.players.len()));
        }

        for (index, player) in self.players.iter().enumerate() {
            if player.player_name.trim().is_empty() {
                return Err(GameValidationError::EmptyPlayerName(index));
            }
            if !data.factions.contains(&player.faction) {
                return Err(GameValidationError::UnknownFaction(player.faction.clone()));
            }
            if let Some(score) = player.score {
                if score > MAX_SCORE {
                    return Err(GameValidationError::ScoreOutOfRange { index, score });
                }
            }
        }

        if !data.maps.contains(&self.map) {
            return Err(GameValidationError::UnknownMap(self.map.clone()));
        }

        if !self.players.iter().any(|p| p.is_winner) {
            return Err(GameValidationError::NoWinner);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for player in &self.players {
            if player.faction.contains("Vagabond") {
                continue;
            }
            if !seen.insert(&player.faction) {
                return Err(GameValidationError::DuplicateFaction(player.faction.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::record::{EntryMethod, PlayerRecord};
    use chrono::NaiveDate;

    fn player(name: &str, faction: &str, score: Option<u32>, is_winner: bool) -> PlayerRecord {
        PlayerRecord {
            player_name: name.to_string(),
            faction: faction.to_string(),
            score,
            is_winner,
            is_dominance: score.is_none(),
            order: 0,
        }
    }

    fn game(players: Vec<PlayerRecord>) -> GameRecord {
        GameRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            map: "Fall".to_string(),
            entry_method: EntryMethod::Manual,
            ocr_corrected: false,
            players,
        }
    }

    fn data() -> ReferenceData {
        ReferenceData::builtin()
    }

    #[test]
    fn test_valid_game_passes() {
        let game = game(vec![
            player("Alice", "Eyrie", Some(30), true),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        assert_eq!(game.validate(&data()), Ok(()));
    }

    #[test]
    fn test_rejects_too_few_players() {
        let game = game(vec![player("Alice", "Eyrie", Some(30), true)]);
        assert_eq!(game.validate(&data()), Err(GameValidationError::PlayerCount(1)));
    }

    #[test]
    fn test_rejects_too_many_players() {
        let factions = [
            "Eyrie",
            "Marquise de Cat",
            "Woodland Alliance",
            "Lizard Cult",
            "Riverfolk Company",
            "Corvid Conspiracy",
            "Underground Duchy",
        ];
        let players = factions
            .iter()
            .map(|&f| player("P", f, Some(10), true))
            .collect();
        assert_eq!(game(players).validate(&data()), Err(GameValidationError::PlayerCount(7)));
    }

    #[test]
    fn test_rejects_empty_player_name() {
        let game = game(vec![
            player("Alice", "Eyrie", Some(30), true),
            player("   ", "Marquise de Cat", Some(25), false),
        ]);
        assert_eq!(game.validate(&data()), Err(GameValidationError::EmptyPlayerName(1)));
    }

    #[test]
    fn test_rejects_unknown_faction() {
        let game = game(vec![
            player("Alice", "Eyrie", Some(30), true),
            player("Bob", "birds", Some(25), false),
        ]);
        assert_eq!(
            game.validate(&data()),
            Err(GameValidationError::UnknownFaction("birds".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_map() {
        let mut game = game(vec![
            player("Alice", "Eyrie", Some(30), true),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        game.map = "Atlantis".to_string();
        assert_eq!(
            game.validate(&data()),
            Err(GameValidationError::UnknownMap("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_map_from_prefill() {
        let mut game = game(vec![
            player("Alice", "Eyrie", Some(30), true),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        game.map = String::new();
        assert_eq!(
            game.validate(&data()),
            Err(GameValidationError::UnknownMap(String::new()))
        );
    }

    #[test]
    fn test_score_bounds() {
        let at_limit = game(vec![
            player("Alice", "Eyrie", Some(100), true),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        assert_eq!(at_limit.validate(&data()), Ok(()));

        let over = game(vec![
            player("Alice", "Eyrie", Some(101), true),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        assert_eq!(
            over.validate(&data()),
            Err(GameValidationError::ScoreOutOfRange { index: 0, score: 101 })
        );
    }

    #[test]
    fn test_rejects_no_winner() {
        let game = game(vec![
            player("Alice", "Eyrie", Some(30), false),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        assert_eq!(game.validate(&data()), Err(GameValidationError::NoWinner));
    }

    #[test]
    fn test_rejects_duplicate_faction() {
        let game = game(vec![
            player("Alice", "Eyrie", Some(30), true),
            player("Bob", "Eyrie", Some(25), false),
        ]);
        assert_eq!(
            game.validate(&data()),
            Err(GameValidationError::DuplicateFaction("Eyrie".to_string()))
        );
    }

    #[test]
    fn test_allows_duplicate_vagabond_characters() {
        let game = game(vec![
            player("Alice", "Vagabond - Thief", Some(30), true),
            player("Bob", "Vagabond - Thief", Some(25), false),
            player("Cara", "Vagabond - Ranger", Some(20), false),
        ]);
        assert_eq!(game.validate(&data()), Ok(()));
    }

    #[test]
    fn test_dominance_winner_without_score() {
        let game = game(vec![
            player("Alice", "Eyrie", None, true),
            player("Bob", "Marquise de Cat", Some(25), false),
        ]);
        assert_eq!(game.validate(&data()), Ok(()));
    }
}
