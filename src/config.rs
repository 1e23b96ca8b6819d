use crate::error::ConfigError;

pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 600;
pub const GRID_STEP: i32 = 20;
pub const INITIAL_DELAY: f64 = 0.1;
pub const MIN_DELAY: f64 = 0.05;
pub const SPAWN_MARGIN: i32 = 20;
pub const INIT_SNAKE_SIZE: usize = 3;
pub const EAT_RADIUS: f64 = 20.0;
// keeps every coordinate and the drawn grid well inside i32/usize range
pub const MAX_BOARD: i32 = 10_000;
pub const MAX_GRID: usize = 500;
pub const MAX_SNAKE_SIZE: usize = 1_000;

/// Everything that shapes one game session. The defaults reproduce the
/// classic 600x600 board with a 20 unit grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub step: i32,
    /// seconds between ticks at the start of a session
    pub initial_delay: f64,
    /// floor for the tick delay
    pub min_delay: f64,
    /// food never spawns closer than this to the board edge
    pub margin: i32,
    /// starting length, and the length poison can't shrink below
    pub initial_length: usize,
    pub eat_radius: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            step: GRID_STEP,
            initial_delay: INITIAL_DELAY,
            min_delay: MIN_DELAY,
            margin: SPAWN_MARGIN,
            initial_length: INIT_SNAKE_SIZE,
            eat_radius: EAT_RADIUS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step <= 0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.board_width < self.step || self.board_height < self.step {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                step: self.step,
            });
        }
        if self.board_width > MAX_BOARD || self.board_height > MAX_BOARD {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
                max: MAX_BOARD,
            });
        }
        if self.columns() > MAX_GRID || self.rows() > MAX_GRID {
            return Err(ConfigError::GridTooLarge {
                columns: self.columns(),
                rows: self.rows(),
                max: MAX_GRID,
            });
        }
        if self.margin < 0 || self.margin > self.board_width / 2 || self.margin > self.board_height / 2 {
            return Err(ConfigError::MarginTooLarge {
                margin: self.margin,
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.min_delay <= 0.0 || !self.min_delay.is_finite() {
            return Err(ConfigError::InvalidMinDelay(self.min_delay));
        }
        if !self.initial_delay.is_finite() || self.initial_delay < self.min_delay {
            return Err(ConfigError::DelayBelowMinimum {
                initial: self.initial_delay,
                min: self.min_delay,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.initial_length > MAX_SNAKE_SIZE {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_length,
                max: MAX_SNAKE_SIZE,
            });
        }
        if self.eat_radius.is_nan() || self.eat_radius <= 0.0 {
            return Err(ConfigError::InvalidEatRadius(self.eat_radius));
        }
        Ok(())
    }

    /// Inclusive x range food may spawn in.
    pub fn spawn_x_range(&self) -> (i32, i32) {
        let half = self.board_width / 2;
        (-half + self.margin, half - self.margin)
    }

    /// Inclusive y range food may spawn in.
    pub fn spawn_y_range(&self) -> (i32, i32) {
        let half = self.board_height / 2;
        (-half + self.margin, half - self.margin)
    }

    pub fn columns(&self) -> usize {
        (self.board_width / self.step) as usize
    }

    pub fn rows(&self) -> usize {
        (self.board_height / self.step) as usize
    }
}
