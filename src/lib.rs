pub mod config;
pub mod coordinates;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod session;
pub mod snake;
pub mod terminal;

pub use config::GameConfig;
pub use coordinates::{Direction, Position};
pub use error::{ConfigError, GameError};
pub use food::{Effect, Food, FoodFactory, FoodVariant};
pub use game::{GameState, TickOutcome};
pub use session::{run, SessionSummary};
pub use snake::Snake;
