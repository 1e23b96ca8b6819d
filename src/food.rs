use colored::Color;
use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::coordinates::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodVariant {
    Poison,
    Fit,
    Fat,
    King,
}

/// What eating one food item does to the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub length_delta: i32,
    pub score_delta: i32,
    pub delay_delta: f64,
}

impl FoodVariant {
    pub const ALL: [FoodVariant; 4] = [
        FoodVariant::Poison,
        FoodVariant::Fit,
        FoodVariant::Fat,
        FoodVariant::King,
    ];

    pub fn effect(&self) -> Effect {
        match self {
            FoodVariant::Poison => Effect { length_delta: -1, score_delta: -1, delay_delta: 0.0 },
            FoodVariant::Fit => Effect { length_delta: 1, score_delta: 1, delay_delta: 0.0 },
            FoodVariant::Fat => Effect { length_delta: 2, score_delta: 3, delay_delta: 0.05 },
            FoodVariant::King => Effect { length_delta: 3, score_delta: 5, delay_delta: -0.02 },
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FoodVariant::Poison => Color::TrueColor { r: 128, g: 0, b: 128 },
            FoodVariant::Fit => Color::Green,
            FoodVariant::Fat => Color::Yellow,
            FoodVariant::King => Color::TrueColor { r: 255, g: 165, b: 0 },
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            FoodVariant::Poison => "purple",
            FoodVariant::Fit => "green",
            FoodVariant::Fat => "yellow",
            FoodVariant::King => "orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub variant: FoodVariant,
    pub position: Position,
}

impl Food {
    pub fn new(variant: FoodVariant, position: Position) -> Food {
        Food { variant, position }
    }
}

/// Produces food at random spots inside the spawn area.
#[derive(Debug)]
pub struct FoodFactory<R: Rng> {
    rng: R,
    x_range: (i32, i32),
    y_range: (i32, i32),
}

impl<R: Rng> FoodFactory<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        FoodFactory {
            rng,
            x_range: config.spawn_x_range(),
            y_range: config.spawn_y_range(),
        }
    }

    pub fn create(&mut self) -> Food {
        let variant = FoodVariant::ALL[self.rng.random_range(0..FoodVariant::ALL.len())];
        let position = Position::new(
            self.rng.random_range(self.x_range.0..=self.x_range.1),
            self.rng.random_range(self.y_range.0..=self.y_range.1),
        );
        debug!(?variant, x = position.x, y = position.y, "spawned food");
        Food::new(variant, position)
    }
}
