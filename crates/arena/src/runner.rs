//! Series runner: plays engines against each other through the public
//! game operations.

use chess_core::{Color, Engine, Game};

use crate::config::ArenaConfig;
use crate::report::{GameOutcome, GameRecord, SeriesReport};

pub struct SeriesRunner {
    config: ArenaConfig,
}

impl SeriesRunner {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// Run the configured number of games. The report counts wins from
    /// `engine1`'s perspective.
    pub fn run(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> SeriesReport {
        let mut report = SeriesReport::new(engine1.name(), engine2.name());

        for game_num in 0..self.config.games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (outcome, plies) = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };

            let (white_name, black_name) = if engine1_white {
                (engine1.name(), engine2.name())
            } else {
                (engine2.name(), engine1.name())
            };
            report.add_game(
                GameRecord {
                    game: game_num + 1,
                    white: white_name.to_string(),
                    black: black_name.to_string(),
                    outcome,
                    plies,
                },
                engine1_white,
            );

            if self.config.verbose {
                let seat = if engine1_white { "W" } else { "B" };
                println!(
                    "Game {}/{}: {} ({}) in {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.games,
                    outcome.notation(),
                    seat,
                    plies,
                    report.wins,
                    report.losses,
                    report.draws
                );
            }
        }

        report
    }

    /// Play one game; the outcome is reported from White's side.
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> (GameOutcome, u32) {
        let mut game = Game::new();
        white.new_game();
        black.new_game();

        if self.config.show_boards {
            println!("{}", game.board());
        }

        for ply in 0..self.config.max_plies {
            let side = game.side_to_move();
            let reply = if side == Color::White {
                white.respond(&mut game)
            } else {
                black.respond(&mut game)
            };

            match reply {
                Some(reply) => {
                    if self.config.show_boards {
                        println!(
                            "{:?} moved {} ({} to {})",
                            side, reply.moved, reply.from, reply.to
                        );
                        println!("{}", game.board());
                    }
                    let opponent = game.side_to_move();
                    if game.mate(opponent) {
                        if self.config.show_boards {
                            println!("Checkmate! {:?} wins.", side);
                        }
                        let outcome = match side {
                            Color::White => GameOutcome::WhiteWins,
                            Color::Black => GameOutcome::BlackWins,
                        };
                        return (outcome, ply + 1);
                    }
                    if self.config.show_boards && game.check(opponent) {
                        println!("{:?} is in check!", opponent);
                    }
                }
                None => {
                    // Nothing passed the gate: mated if in check, stuck otherwise.
                    let outcome = if game.check(side) {
                        match side {
                            Color::White => GameOutcome::BlackWins,
                            Color::Black => GameOutcome::WhiteWins,
                        }
                    } else {
                        GameOutcome::Draw
                    };
                    if self.config.show_boards {
                        println!("{:?} has no reply: {}", side, outcome.notation());
                    }
                    return (outcome, ply);
                }
            }
        }

        (GameOutcome::Draw, self.config.max_plies)
    }
}

/// One-call helper for quick, quiet series.
pub fn quick_series(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    games: u32,
) -> SeriesReport {
    let config = ArenaConfig {
        games,
        verbose: false,
        ..Default::default()
    };
    SeriesRunner::new(config).run(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use priority_engine::PriorityEngine;
    use random_engine::RandomEngine;

    #[test]
    fn random_self_play_completes_and_tallies() {
        let mut e1 = RandomEngine::seeded(1);
        let mut e2 = RandomEngine::seeded(2);

        let config = ArenaConfig {
            games: 2,
            max_plies: 60,
            verbose: false,
            ..Default::default()
        };
        let report = SeriesRunner::new(config).run(&mut e1, &mut e2);

        assert_eq!(report.total_games(), 2);
        assert_eq!(report.games.len(), 2);
        for (i, record) in report.games.iter().enumerate() {
            assert_eq!(record.game as usize, i + 1);
            assert!(record.plies <= 60);
        }
    }

    #[test]
    fn seats_alternate_between_games() {
        let mut e1 = PriorityEngine::seeded(3);
        let mut e2 = RandomEngine::seeded(4);

        let config = ArenaConfig {
            games: 2,
            max_plies: 8,
            verbose: false,
            ..Default::default()
        };
        let report = SeriesRunner::new(config).run(&mut e1, &mut e2);

        assert_eq!(report.games[0].white, e1.name());
        assert_eq!(report.games[1].white, e2.name());
        assert_eq!(report.games[0].white, report.games[1].black);
    }

    #[test]
    fn seeded_series_are_reproducible() {
        let config = ArenaConfig {
            games: 2,
            max_plies: 40,
            verbose: false,
            ..Default::default()
        };

        let first = SeriesRunner::new(config.clone()).run(
            &mut PriorityEngine::seeded(5),
            &mut RandomEngine::seeded(6),
        );
        let second = SeriesRunner::new(config).run(
            &mut PriorityEngine::seeded(5),
            &mut RandomEngine::seeded(6),
        );

        assert_eq!(first, second);
    }
}
