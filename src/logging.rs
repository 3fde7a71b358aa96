use crate::constants::LOG_FILE_NAME;
use crate::persistence;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Initializes the global logger.
///
/// Output goes to `~/.flappy-burger/flappy-burger.log` because the terminal
/// is owned by the game screen. When `verbose` is `true`, debug messages
/// are written as well; `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Without a log file there is nowhere safe to write, so stay silent.
    let file = match persistence::data_path(LOG_FILE_NAME)
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
}
