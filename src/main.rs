use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_burger::assets::Assets;
use flappy_burger::audio::{AudioSink, Silent, TerminalBell};
use flappy_burger::constants::CONFIG_FILE_NAME;
use flappy_burger::runner::{gather_inputs, FrameClock};
use flappy_burger::{build_info, input, logging, persistence, ui};
use flappy_burger::{FrameOutcome, GameConfig, ScreenController};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq)]
struct Options {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    assets_dir: Option<PathBuf>,
    mute: bool,
    verbose: bool,
    write_config: bool,
}

enum Command {
    Play(Options),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                let value = args.get(i + 1).ok_or("--seed needs a value")?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {}", value))?,
                );
                i += 1;
            }
            "-c" | "--config" => {
                let value = args.get(i + 1).ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--assets" => {
                let value = args.get(i + 1).ok_or("--assets needs a directory")?;
                options.assets_dir = Some(PathBuf::from(value));
                i += 1;
            }
            "--mute" => options.mute = true,
            "-v" | "--verbose" => options.verbose = true,
            "--write-config" => options.write_config = true,
            "--version" => return Ok(Command::Version),
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Play(options))
}

fn print_help() {
    println!("Flappy Burger - guide the burger through the fries\n");
    println!("Usage: flappy-burger [OPTIONS]\n");
    println!("Options:");
    println!("  -s, --seed <N>       Seed the obstacle generator (reproducible runs)");
    println!("  -c, --config <PATH>  Load tuning from a JSON file");
    println!("                       (default: ~/.flappy-burger/{})", CONFIG_FILE_NAME);
    println!("      --assets <DIR>   Load sprites from a directory (default: built in)");
    println!("      --mute           Disable the terminal bell");
    println!("  -v, --verbose        Debug logging to ~/.flappy-burger/flappy-burger.log");
    println!("      --write-config   Write the default config file and exit");
    println!("      --version        Show version information");
    println!("  -h, --help           Show this help message");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy-burger --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init(options.verbose);

    if options.write_config {
        let path = match options.config_path {
            Some(path) => path,
            None => persistence::data_path(CONFIG_FILE_NAME)?,
        };
        persistence::save_json(&path, &GameConfig::default())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = GameConfig::load_or_default(options.config_path.as_deref());
    if options.mute {
        config.sound_enabled = false;
    }

    let assets = match &options.assets_dir {
        Some(dir) => {
            log::info!("loading sprites from {}", dir.display());
            Assets::load(dir)
        }
        None => Assets::bundled(),
    };

    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut audio: Box<dyn AudioSink> = if config.sound_enabled {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Silent)
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &config, &assets, &mut rng, audio.as_mut());

    // Restore terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("exiting");
    result
}

/// Frame loop: draw, wait out the frame while collecting input, step.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
    assets: &Assets,
    rng: &mut ChaCha8Rng,
    audio: &mut dyn AudioSink,
) -> io::Result<()> {
    let mut controller = ScreenController::new();
    let mut clock = FrameClock::new(config.frame_interval());

    loop {
        terminal.draw(|frame| ui::draw(frame, &controller, config, assets))?;

        let inputs = gather_inputs(&clock, |timeout| {
            if event::poll(timeout)? {
                Ok(Some(input::map_event(event::read()?)))
            } else {
                Ok(None)
            }
        })?;
        clock.advance();

        if controller.step(&inputs, config, rng, audio) == FrameOutcome::Quit {
            return Ok(());
        }
    }
}
