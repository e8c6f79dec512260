//! Arena CLI
//!
//! Play engine-vs-engine series and write JSON reports.

use arena::{ArenaConfig, SeriesRunner};
use chess_core::Engine;
use priority_engine::PriorityEngine;
use random_engine::RandomEngine;
use rand::Rng;
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Chess engine arena");
    println!();
    println!("Usage:");
    println!("  arena run <engine1> <engine2> [--games N] [--max-plies N] [--seed S]");
    println!("            [--config FILE] [--out FILE] [--quiet]");
    println!("  arena demo [engine1] [engine2] [--seed S] [--max-plies N]");
    println!();
    println!("Engines:");
    println!("  priority   - Fixed-priority heuristic (mate, check, captures)");
    println!("  random     - Uniform random legal moves");
    println!();
    println!("Examples:");
    println!("  arena run priority random --games 20 --seed 7 --out series.json");
    println!("  arena demo priority random");
}

fn create_engine(spec: &str, seed: Option<u64>) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "random" => match seed {
            Some(s) => Box::new(RandomEngine::seeded(s)),
            None => Box::new(RandomEngine::new()),
        },
        "priority" => match seed {
            Some(s) => Box::new(PriorityEngine::seeded(s)),
            None => Box::new(PriorityEngine::new()),
        },
        other => {
            eprintln!("Unknown engine: {}, using priority", other);
            match seed {
                Some(s) => Box::new(PriorityEngine::seeded(s)),
                None => Box::new(PriorityEngine::new()),
            }
        }
    }
}

fn run_series(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: run needs two engine names");
        print_usage();
        return;
    }
    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = ArenaConfig::default();
    let mut out_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match ArenaConfig::load(&args[i + 1]) {
                        Ok(loaded) => config = loaded,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            return;
                        }
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games = args[i + 1].parse().unwrap_or(config.games);
                    i += 1;
                }
            }
            "--max-plies" | "-m" => {
                if i + 1 < args.len() {
                    config.max_plies = args[i + 1].parse().unwrap_or(config.max_plies);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--quiet" | "-q" => config.verbose = false,
            _ => {}
        }
        i += 1;
    }

    let seed: u64 = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    println!("=== Series: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, max plies: {}, seed: {}",
        config.games, config.max_plies, seed
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, Some(seed));
    let mut engine2 = create_engine(engine2_spec, Some(seed.wrapping_add(1)));

    let report = SeriesRunner::new(config).run(engine1.as_mut(), engine2.as_mut());

    println!();
    report.print_summary();

    if let Some(path) = out_path {
        match report.save(Path::new(&path)) {
            Ok(()) => println!("Report written to {}", path),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }
}

fn run_demo(args: &[String]) {
    let mut config = ArenaConfig {
        games: 1,
        verbose: false,
        show_boards: true,
        ..Default::default()
    };
    let mut specs: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--max-plies" | "-m" => {
                if i + 1 < args.len() {
                    config.max_plies = args[i + 1].parse().unwrap_or(config.max_plies);
                    i += 1;
                }
            }
            other => {
                if !other.starts_with('-') {
                    specs.push(other.to_string());
                }
            }
        }
        i += 1;
    }

    let engine1_spec = specs.first().map(String::as_str).unwrap_or("priority");
    let engine2_spec = specs.get(1).map(String::as_str).unwrap_or("random");

    let seed: u64 = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    println!(
        "Demo: {} (White) vs {} (Black), seed {}",
        engine1_spec, engine2_spec, seed
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, Some(seed));
    let mut engine2 = create_engine(engine2_spec, Some(seed.wrapping_add(1)));

    let report = SeriesRunner::new(config).run(engine1.as_mut(), engine2.as_mut());
    report.print_summary();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => run_series(&args[2..]),
        "demo" => run_demo(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
