use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("board must be at least one step wide and tall, got {width}x{height} with step {step}")]
    BoardTooSmall { width: i32, height: i32, step: i32 },
    #[error("board {width}x{height} exceeds the {max} unit limit")]
    BoardTooLarge { width: i32, height: i32, max: i32 },
    #[error("grid of {columns}x{rows} cells exceeds the {max} cell limit per side")]
    GridTooLarge { columns: usize, rows: usize, max: usize },
    #[error("grid step must be positive, got {0}")]
    InvalidStep(i32),
    #[error("margin {margin} leaves no room to spawn food on a {width}x{height} board")]
    MarginTooLarge { margin: i32, width: i32, height: i32 },
    #[error("minimum tick delay must be positive, got {0}s")]
    InvalidMinDelay(f64),
    #[error("initial tick delay {initial}s is below the minimum {min}s")]
    DelayBelowMinimum { initial: f64, min: f64 },
    #[error("snake must start with at least one segment")]
    EmptySnake,
    #[error("snake of {length} segments exceeds the {max} segment limit")]
    SnakeTooLong { length: usize, max: usize },
    #[error("eat radius must be positive, got {0}")]
    InvalidEatRadius(f64),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    Render(#[source] io::Error),
    #[error("keyboard input closed")]
    InputClosed,
}
