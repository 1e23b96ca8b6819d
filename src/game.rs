use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::coordinates::Direction;
use crate::error::ConfigError;
use crate::food::{Food, FoodFactory, FoodVariant};
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate(FoodVariant),
}

// one game session. there is no lose state, the snake may leave the board
// or cross itself and the session keeps running
#[derive(Debug)]
pub struct GameState<R: Rng> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    factory: FoodFactory<R>,
    direction: Direction,
    score: u32,
    delay: f64,
    ticks: u64,
}

impl<R: Rng> GameState<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let snake = Snake::new(config.initial_length, config.step);
        let mut factory = FoodFactory::new(&config, rng);
        let food = factory.create();
        Ok(GameState {
            delay: config.initial_delay,
            config,
            snake,
            food,
            factory,
            direction: Direction::None,
            score: 0,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    // seconds
    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn place_food(&mut self, food: Food) {
        self.food = food;
    }

    /// Commits `requested` unless it would reverse the snake. `None` is not
    /// a turn and is ignored. Returns whether the direction was taken.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == Direction::None {
            return false;
        }
        if self.direction.opposite() == Some(requested) {
            trace!(?requested, current = ?self.direction, "ignored reversing turn");
            return false;
        }
        if self.direction != requested {
            debug!(from = ?self.direction, to = ?requested, "direction changed");
        }
        self.direction = requested;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;
        self.snake.advance(self.direction, self.config.step);
        let head = self.snake.head();
        trace!(tick = self.ticks, x = head.x, y = head.y, "moved");

        if head.distance(&self.food.position) < self.config.eat_radius {
            let eaten = self.food.variant;
            self.consume(eaten);
            self.food = self.factory.create();
            info!(
                food = eaten.color_name(),
                score = self.score,
                length = self.snake.len(),
                delay = self.delay,
                "food eaten"
            );
            TickOutcome::Ate(eaten)
        } else {
            TickOutcome::Moved
        }
    }

    // body length first, then score, then delay
    pub fn consume(&mut self, variant: FoodVariant) {
        let effect = variant.effect();

        if effect.length_delta > 0 {
            self.snake.grow(effect.length_delta as usize);
        } else {
            for _ in 0..effect.length_delta.unsigned_abs() {
                self.snake.shrink(self.config.initial_length);
            }
        }

        self.score = self.score.saturating_add_signed(effect.score_delta);
        self.delay = (self.delay + effect.delay_delta).max(self.config.min_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn new_game() -> GameState<StdRng> {
        GameState::new(GameConfig::default(), StdRng::seed_from_u64(3)).unwrap()
    }

    fn assert_delay(game: &GameState<StdRng>, expected: f64) {
        assert!((game.delay() - expected).abs() < 1e-9, "delay {} != {}", game.delay(), expected);
    }

    #[test]
    fn fresh_game() {
        let game = new_game();
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.score(), 0);
        assert_eq!(game.direction(), Direction::None);
        assert_delay(&game, 0.1);
    }

    #[test]
    fn poison_at_minimum_length_only_costs_score() {
        let mut game = new_game();
        game.consume(FoodVariant::Fit);
        game.consume(FoodVariant::Poison);
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.score(), 0);

        game.consume(FoodVariant::Poison);
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn king_delay_is_floored() {
        let mut game = new_game();
        for _ in 0..10 {
            game.consume(FoodVariant::King);
        }
        assert_delay(&game, 0.05);
        assert_eq!(game.score(), 50);
        assert_eq!(game.snake().len(), 33);
    }

    #[test]
    fn reversing_is_rejected() {
        let mut game = new_game();
        assert!(game.set_direction(Direction::Right));
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.direction(), Direction::Right);
        assert!(game.set_direction(Direction::Up));
        assert!(!game.set_direction(Direction::Down));
        assert!(game.set_direction(Direction::Left));
        assert_eq!(game.direction(), Direction::Left);
    }

    #[test]
    fn none_is_not_a_turn() {
        let mut game = new_game();
        assert!(game.set_direction(Direction::Up));
        assert!(!game.set_direction(Direction::None));
        assert_eq!(game.direction(), Direction::Up);
    }

    #[test]
    fn out_of_range_settings_fail_instead_of_panicking() {
        let config = GameConfig {
            board_width: 2_000_000_000,
            board_height: 2_000_000_000,
            step: 1_000_000_000,
            margin: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameState::new(config, StdRng::seed_from_u64(1)),
            Err(ConfigError::BoardTooLarge { .. })
        ));

        let config = GameConfig { margin: 1_500_000_000, ..GameConfig::default() };
        assert!(matches!(
            GameState::new(config, StdRng::seed_from_u64(1)),
            Err(ConfigError::MarginTooLarge { .. })
        ));
    }

    #[test]
    fn tick_eats_food_under_the_head() {
        let mut game = new_game();
        game.set_direction(Direction::Right);
        game.place_food(Food::new(FoodVariant::Fat, Position::new(25, 5)));
        assert_eq!(game.tick(), TickOutcome::Ate(FoodVariant::Fat));
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.score(), 3);
        assert_delay(&game, 0.15);
        assert_ne!(*game.food(), Food::new(FoodVariant::Fat, Position::new(25, 5)));
    }

    #[test]
    fn food_at_exactly_the_radius_is_missed() {
        let mut game = new_game();
        game.set_direction(Direction::Right);
        game.place_food(Food::new(FoodVariant::Fit, Position::new(40, 0)));
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 3);
    }
}
