//! Arena library for running engine-vs-engine series.
//!
//! This crate provides infrastructure for:
//! - Running series between engines with seat alternation
//! - Tallying outcomes and writing JSON reports
//! - Loading series settings from TOML
//!
//! # Usage
//!
//! ```bash
//! # Play a 20-game series with a fixed seed and save the report
//! cargo run -p arena -- run priority random --games 20 --seed 7 --out series.json
//!
//! # Watch a single game ply by ply
//! cargo run -p arena -- demo priority random
//! ```

pub mod config;
pub mod report;
pub mod runner;

pub use config::ArenaConfig;
pub use report::{GameOutcome, GameRecord, SeriesReport};
pub use runner::{quick_series, SeriesRunner};
