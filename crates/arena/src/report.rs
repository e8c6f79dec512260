//! Series results and JSON reporting.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of one game, seen from White's side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    pub fn notation(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Draw => "1/2",
        }
    }
}

/// Record of a single finished game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub game: u32,
    pub white: String,
    pub black: String,
    pub outcome: GameOutcome,
    pub plies: u32,
}

/// Accumulated series result; wins and losses count for `engine1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesReport {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl SeriesReport {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            games: Vec::new(),
        }
    }

    /// Record a finished game, crediting `engine1` according to the seat
    /// it held.
    pub fn add_game(&mut self, record: GameRecord, engine1_white: bool) {
        match (record.outcome, engine1_white) {
            (GameOutcome::WhiteWins, true) | (GameOutcome::BlackWins, false) => self.wins += 1,
            (GameOutcome::WhiteWins, false) | (GameOutcome::BlackWins, true) => self.losses += 1,
            (GameOutcome::Draw, _) => self.draws += 1,
        }
        self.games.push(record);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective: 1 per win, 0.5 per draw.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write report: {}", e))
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read report: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse report: {}", e))
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Series: {} vs {} ===\n",
            self.engine1, self.engine2
        ));
        out.push_str(&format!(
            "Score: {}-{}-{} ({:.1}%)\n\n",
            self.wins,
            self.losses,
            self.draws,
            self.score() * 100.0
        ));
        out.push_str(&format!(
            "{:<6} {:<16} {:<16} {:>7} {:>6}\n",
            "Game", "White", "Black", "Result", "Plies"
        ));
        out.push_str(&"-".repeat(55));
        out.push('\n');
        for g in &self.games {
            out.push_str(&format!(
                "{:<6} {:<16} {:<16} {:>7} {:>6}\n",
                g.game,
                g.white,
                g.black,
                g.outcome.notation(),
                g.plies
            ));
        }
        out
    }

    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: GameOutcome) -> GameRecord {
        GameRecord {
            game: 1,
            white: "a".to_string(),
            black: "b".to_string(),
            outcome,
            plies: 10,
        }
    }

    #[test]
    fn score_counts_draws_as_half() {
        let mut report = SeriesReport::new("a", "b");
        report.add_game(record(GameOutcome::WhiteWins), true);
        report.add_game(record(GameOutcome::Draw), true);

        assert_eq!(report.wins, 1);
        assert_eq!(report.draws, 1);
        assert!((report.score() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn the_black_seat_flips_the_credit() {
        let mut report = SeriesReport::new("a", "b");
        report.add_game(record(GameOutcome::WhiteWins), false);
        report.add_game(record(GameOutcome::BlackWins), false);

        assert_eq!(report.losses, 1);
        assert_eq!(report.wins, 1);
    }

    #[test]
    fn an_empty_series_scores_half() {
        let report = SeriesReport::new("a", "b");
        assert!((report.score() - 0.5).abs() < 1e-9);
        assert_eq!(report.total_games(), 0);
    }

    #[test]
    fn summary_lists_every_game() {
        let mut report = SeriesReport::new("alpha", "beta");
        report.add_game(record(GameOutcome::Draw), true);
        report.add_game(record(GameOutcome::WhiteWins), false);

        let text = report.summary();
        assert!(text.contains("alpha vs beta"));
        assert!(text.contains("1/2"));
        assert!(text.contains("1-0"));
    }
}
