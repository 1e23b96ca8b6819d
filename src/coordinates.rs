// positions live on a logical canvas centred on (0, 0) with y growing upwards,
// so moving "up" increases y

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// The direction that would make the snake reverse onto itself.
    /// `None` has no opposite.
    pub fn opposite(&self) -> Option<Direction> {
        match self {
            Direction::Up => Some(Direction::Down),
            Direction::Down => Some(Direction::Up),
            Direction::Left => Some(Direction::Right),
            Direction::Right => Some(Direction::Left),
            Direction::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn move_left(&mut self, step: i32) {
        self.x = self.x.saturating_sub(step);
    }
    pub fn move_right(&mut self, step: i32) {
        self.x = self.x.saturating_add(step);
    }
    pub fn move_up(&mut self, step: i32) {
        self.y = self.y.saturating_add(step);
    }
    pub fn move_down(&mut self, step: i32) {
        self.y = self.y.saturating_sub(step);
    }

    /// Position one grid step away in `direction`.
    pub fn step(&self, direction: Direction, step: i32) -> Position {
        let mut res = *self;
        match direction {
            Direction::Up => res.move_up(step),
            Direction::Down => res.move_down(step),
            Direction::Left => res.move_left(step),
            Direction::Right => res.move_right(step),
            Direction::None => {}
        }
        res
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Direction::Up.opposite(), Some(Direction::Down));
        assert_eq!(Direction::Down.opposite(), Some(Direction::Up));
        assert_eq!(Direction::Left.opposite(), Some(Direction::Right));
        assert_eq!(Direction::Right.opposite(), Some(Direction::Left));
        assert_eq!(Direction::None.opposite(), None);
    }

    #[test]
    fn step_uses_y_up_axis() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up, 20), Position::new(0, 20));
        assert_eq!(origin.step(Direction::Down, 20), Position::new(0, -20));
        assert_eq!(origin.step(Direction::Left, 20), Position::new(-20, 0));
        assert_eq!(origin.step(Direction::Right, 20), Position::new(20, 0));
        assert_eq!(origin.step(Direction::None, 20), origin);
    }

    #[test]
    fn far_away_moves_stick_at_the_edge() {
        let far = Position::new(i32::MAX - 5, i32::MIN + 5);
        assert_eq!(far.step(Direction::Right, 20), Position::new(i32::MAX, i32::MIN + 5));
        assert_eq!(far.step(Direction::Down, 20), Position::new(i32::MAX - 5, i32::MIN));
        let distance = far.distance(&Position::new(i32::MIN, i32::MAX));
        assert!(distance.is_finite() && distance > 4e9);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0, 0);
        let b = Position::new(3, -4);
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
        assert_eq!(a.distance(&a), 0.0);
    }
}
