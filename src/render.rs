use std::io::Write;

use colored::Colorize;
use rand::Rng;

use crate::config::GameConfig;
use crate::coordinates::Position;
use crate::error::GameError;
use crate::food::FoodVariant;
use crate::game::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Segment,
    Food(FoodVariant),
}

/// A snapshot of the board laid out on the terminal grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    score_line: String,
}

impl Frame {
    pub fn capture<R: Rng>(state: &GameState<R>) -> Frame {
        let config = state.config();
        let columns = config.columns();
        let rows = config.rows();
        let mut frame = Frame {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
            score_line: format!("Puntaje: {}", state.score()),
        };

        let food = state.food();
        if let Some((col, row)) = grid_cell(config, &food.position) {
            frame.cells[row * columns + col] = Cell::Food(food.variant);
        }
        // segments are drawn over the food
        for segment in state.snake().segments() {
            if let Some((col, row)) = grid_cell(config, segment) {
                frame.cells[row * columns + col] = Cell::Segment;
            }
        }
        frame
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// Renders the frame as coloured terminal text.
    pub fn paint(&self) -> String {
        let mut out = String::new();
        // score, centred over the board and its border
        let width = self.columns * 2 + 2;
        let centred = format!("{:^width$}", self.score_line, width = width);
        out.push_str(&format!("{}\n", centred.white().bold()));

        //border up
        out.push('▗');
        for _i in 0..self.columns {
            out.push_str("▄▄");
        }
        out.push_str("▖\n");
        for row in 0..self.rows {
            out.push('▐');
            for col in 0..self.columns {
                let painted = match self.cell(col, row) {
                    Cell::Empty => "  ".on_black(),
                    Cell::Segment => "■ ".white().on_black(),
                    Cell::Food(variant) => "● ".color(variant.color()).on_black(),
                };
                out.push_str(&painted.to_string());
            }
            out.push_str("▌\n");
        }
        //border down
        out.push('▝');
        for _i in 0..self.columns {
            out.push_str("▀▀");
        }
        out.push_str("▘\n");
        out
    }
}

/// Maps a logical position to its (column, row) on the grid, or `None` when
/// it lies outside the board.
pub fn grid_cell(config: &GameConfig, position: &Position) -> Option<(usize, usize)> {
    // floor division, positions left of or below the origin are negative
    let step = config.step as i64;
    let col = num::Integer::div_floor(&(position.x as i64 + (config.board_width / 2) as i64), &step);
    let row = num::Integer::div_floor(&((config.board_height / 2) as i64 - position.y as i64), &step);
    if col < 0 || row < 0 {
        return None;
    }
    let (col, row) = (col as usize, row as usize);
    if col >= config.columns() || row >= config.rows() {
        return None;
    }
    Some((col, row))
}

/// Where frames end up.
pub trait Screen {
    fn show(&mut self, frame: &Frame) -> Result<(), GameError>;
}

pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        TerminalScreen { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show(&mut self, frame: &Frame) -> Result<(), GameError> {
        // clear screen and move the cursor home before drawing
        write!(self.out, "{}[2J{}[1;1H{}", 27 as char, 27 as char, frame.paint())
            .map_err(GameError::Render)?;
        self.out.flush().map_err(GameError::Render)
    }
}
