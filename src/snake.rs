// snake body is an ordered list of segment positions, head first.
// every tick each segment takes the place of the one in front of it,
// then the head moves one step
use crate::coordinates::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Position>, // The head is the first element
}

impl Snake {
    /// Lays `length` segments in a row heading right, head at the origin.
    pub fn new(length: usize, step: i32) -> Self {
        let mut segments = Vec::with_capacity(length);
        let mut current_position = Position::new(0, 0);
        for i in 0..length {
            if i > 0 {
                current_position.move_left(step);
            }
            segments.push(current_position);
        }
        Snake { segments }
    }

    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs a head");
        Snake { segments }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn advance(&mut self, direction: Direction, step: i32) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].step(direction, step);
    }

    /// Adds `count` segments on top of the tail; the next moves unstack them.
    pub fn grow(&mut self, count: usize) {
        let tail = self.segments[self.segments.len() - 1];
        for _ in 0..count {
            self.segments.push(tail);
        }
    }

    /// Drops the tail segment unless the snake is already `min_len` long.
    /// Returns whether a segment was removed.
    pub fn shrink(&mut self, min_len: usize) -> bool {
        if self.segments.len() > min_len.max(1) {
            self.segments.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn starts_in_a_row() {
        let snake = Snake::new(3, 20);
        assert_eq!(snake.segments(), &[p(0, 0), p(-20, 0), p(-40, 0)]);
        assert_eq!(snake.head(), p(0, 0));
    }

    #[test]
    fn largest_allowed_snake_fits() {
        let snake = Snake::new(1_000, 10_000);
        assert_eq!(snake.len(), 1_000);
        assert_eq!(snake.segments()[999], p(-9_990_000, 0));
    }

    #[test]
    fn advance_shifts_forward_then_moves_head() {
        let mut snake = Snake::from_segments(vec![p(0, 0), p(-20, 0), p(-20, -20), p(-40, -20)]);
        let before = snake.segments().to_vec();
        snake.advance(Direction::Up, 20);
        let after = snake.segments();
        for i in 1..before.len() {
            assert_eq!(after[i], before[i - 1]);
        }
        assert_eq!(after[0], p(0, 20));
    }

    #[test]
    fn advance_without_direction_keeps_head() {
        let mut snake = Snake::new(3, 20);
        snake.advance(Direction::None, 20);
        assert_eq!(snake.segments(), &[p(0, 0), p(0, 0), p(-20, 0)]);
    }

    #[test]
    fn grown_segments_follow_the_tail() {
        let mut snake = Snake::new(3, 20);
        snake.grow(2);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.segments()[3], p(-40, 0));
        assert_eq!(snake.segments()[4], p(-40, 0));

        snake.advance(Direction::Right, 20);
        snake.advance(Direction::Right, 20);
        assert_eq!(
            snake.segments(),
            &[p(40, 0), p(20, 0), p(0, 0), p(-20, 0), p(-40, 0)]
        );
    }

    #[test]
    fn shrink_stops_at_minimum() {
        let mut snake = Snake::new(4, 20);
        assert!(snake.shrink(3));
        assert_eq!(snake.len(), 3);
        assert!(!snake.shrink(3));
        assert_eq!(snake.len(), 3);
    }
}
