pub mod instance;
pub mod sprites;
pub mod term;

use crossterm::style::Color;
use glam::IVec2;

use crate::game::{Game, SimulationState};
use crate::maze::Tile;

use self::sprites::{Glyph, SpriteSheet};

/// Room for the widest HUD line: score, dot tally and phase.
const HUD_WIDTH: usize = 24;

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Reset,
    };
}

/// Off-screen character grid. `draw` fills it, the terminal presents it.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Maze plus one HUD row, widened to fit the HUD on small boards.
    pub fn for_game(game: &Game) -> Self {
        let maze = game.maze();
        Self::new(
            (maze.width() as usize).max(HUD_WIDTH),
            maze.height() as usize + 1,
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { ch, color };
    }

    pub fn glyph(&mut self, at: IVec2, glyph: Glyph) {
        self.put(at.x, at.y, glyph.symbol(), glyph.color);
    }

    /// Write a line of text, clipped at the right edge.
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, color);
        }
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Row as plain text.
    #[cfg(test)]
    pub fn row_string(&self, y: usize) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

/// Draw the game into `canvas`. `frame` counts presented frames and only
/// drives animation. Never touches the simulation.
pub fn draw(game: &Game, sheet: &SpriteSheet, frame: u64, canvas: &mut Canvas) {
    canvas.clear();
    let handles = game.sprites();

    match game.state() {
        SimulationState::Playing => {}
        ended => {
            let banner = match ended {
                SimulationState::Won => handles.winlose,
                _ => handles.winlose.offset(1),
            };
            let glyph = sheet.glyph(banner);
            let x = (canvas.width() as i32 - glyph.text.chars().count() as i32) / 2;
            let y = canvas.height() as i32 / 2;
            canvas.text(x.max(0), y, glyph.text, glyph.color);
            return;
        }
    }

    let maze = game.maze();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let at = IVec2::new(x, y);
            let sprite = match maze.tile(at) {
                Tile::Empty => continue,
                Tile::Wall => handles.maze,
                Tile::Door => handles.door,
                Tile::Dot => handles.dot,
                Tile::Energizer => handles.dot.offset(1),
            };
            canvas.glyph(at, sheet.glyph(sprite));
        }
    }

    for actor in instance::collect(game.world(), handles, frame) {
        canvas.glyph(actor.tile, sheet.glyph(actor.sprite));
    }

    let hud = format!(
        "{:>6} {}/{} {}",
        game.score(),
        game.dots_eaten(),
        game.dots_total(),
        game.phase().label(),
    );
    canvas.text(0, maze.height(), &hud, Color::White);
}
