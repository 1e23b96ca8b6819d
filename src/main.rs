use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use food_snake::config;
use food_snake::input::Keyboard;
use food_snake::render::TerminalScreen;
use food_snake::session::FrameTimer;
use food_snake::terminal::RawModeGuard;
use food_snake::{GameConfig, GameState};

#[derive(Parser, Debug)]
#[command(about = "Snake with poison, fit, fat and king food. Arrow keys steer, Ctrl-C quits.")]
struct Args {
    #[arg(long, default_value_t = config::BOARD_WIDTH, help = "board width in logical units")]
    width: i32,
    #[arg(long, default_value_t = config::BOARD_HEIGHT, help = "board height in logical units")]
    height: i32,
    #[arg(long, default_value_t = config::GRID_STEP, help = "distance the head moves per tick")]
    step: i32,
    #[arg(long, default_value_t = config::INITIAL_DELAY, help = "starting seconds between ticks")]
    delay: f64,
    #[arg(long, default_value_t = config::MIN_DELAY, help = "fastest allowed seconds between ticks")]
    min_delay: f64,
    #[arg(long, default_value_t = config::SPAWN_MARGIN, help = "food keeps this far from the edges")]
    margin: i32,
    #[arg(long, default_value_t = config::INIT_SNAKE_SIZE, help = "starting snake length")]
    length: usize,
    #[arg(long, default_value_t = config::EAT_RADIUS, help = "head-to-food distance that counts as eating")]
    eat_radius: f64,
    #[arg(short, long, help = "seed for a repeatable food sequence")]
    seed: Option<u64>,
    #[arg(long, help = "write logs here, they are discarded otherwise")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            board_width: self.width,
            board_height: self.height,
            step: self.step,
            initial_delay: self.delay,
            min_delay: self.min_delay,
            margin: self.margin,
            initial_length: self.length,
            eat_radius: self.eat_radius,
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // the board owns the terminal, so without a file logs go nowhere
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut state = GameState::new(args.game_config(), rng).context("invalid game settings")?;

    let summary = {
        let _raw_mode = RawModeGuard::enable().context("failed to set up the terminal")?;
        let mut keyboard = Keyboard::spawn();
        let mut timer = FrameTimer::new();
        let mut screen = TerminalScreen::new(io::stdout());
        food_snake::run(&mut state, &mut keyboard, &mut timer, &mut screen)?
    };

    println!("Puntaje: {}", summary.score);
    Ok(())
}
