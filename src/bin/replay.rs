//! Flappy Burger headless replay
//!
//! Plays one session without a terminal UI and prints a CSV trace of
//! `tick,player_y,score,collided`. The same seed and jump script always
//! produce the same trace.
//!
//! Usage:
//!   cargo run --bin replay -- [OPTIONS]
//!
//! Options:
//!   --seed N         RNG seed (default: 42)
//!   --ticks N        Maximum ticks to play (default: 3600 = one minute)
//!   --jump-every N   Jump on every Nth tick (default: never)
//!   --jump-at A,B,C  Jump on exactly these ticks
//!   --config PATH    Tuning file (default: built-in tuning)
//!   --quiet          Only print the final line

use flappy_burger::replay::{run_session, JumpScript};
use flappy_burger::GameConfig;
use std::path::PathBuf;

struct ReplayConfig {
    seed: u64,
    ticks: u64,
    script: JumpScript,
    config_path: Option<PathBuf>,
    quiet: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 3_600,
            script: JumpScript::Never,
            config_path: None,
            quiet: false,
        }
    }
}

fn parse_args(args: &[String]) -> ReplayConfig {
    let mut config = ReplayConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "--ticks" => {
                if i + 1 < args.len() {
                    config.ticks = args[i + 1].parse().unwrap_or(3_600);
                    i += 1;
                }
            }
            "--jump-every" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<u64>() {
                        config.script = JumpScript::Every(n);
                    }
                    i += 1;
                }
            }
            "--jump-at" => {
                if i + 1 < args.len() {
                    let ticks = args[i + 1]
                        .split(',')
                        .filter_map(|t| t.trim().parse().ok())
                        .collect();
                    config.script = JumpScript::At(ticks);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--quiet" => config.quiet = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Flappy Burger Replay");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin replay -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>          RNG seed (default: 42)");
    println!("    --ticks <N>         Maximum ticks (default: 3600)");
    println!("    --jump-every <N>    Jump on every Nth tick");
    println!("    --jump-at <A,B,C>   Jump on the listed ticks");
    println!("    --config <PATH>     Tuning file");
    println!("    --quiet             Only print the final line");
    println!("    -h, --help          Show this help");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let replay = parse_args(&args);

    let config = match &replay.config_path {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let trace = run_session(&config, replay.seed, &replay.script, replay.ticks);

    println!("tick,player_y,score,collided");
    let skip = if replay.quiet {
        trace.len().saturating_sub(1)
    } else {
        0
    };
    for row in trace.iter().skip(skip) {
        println!("{}", row.to_csv());
    }
}
