pub mod layout;

use glam::IVec2;
use thiserror::Error;

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Dot,
    Energizer,
    /// Ghost house door. Blocks the player; eaten and leaving ghosts pass.
    Door,
}

/// The ghost house, derived from the door position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct House {
    pub door: IVec2,
    /// Tile directly above the door. Leaving ghosts head here.
    pub exit: IVec2,
    /// Tile directly below the door. Eaten ghosts head here.
    pub entry: IVec2,
}

/// Spawn points read from the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawns {
    pub player: IVec2,
    /// Ghost spawns in personality order: Blinky, Pinky, Inky, Clyde.
    pub ghosts: [IVec2; 4],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze layout is empty")]
    Empty,
    #[error("row {row} is {len} tiles wide, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: i32, y: i32 },
    #[error("spawn {glyph:?} appears more than once")]
    DuplicateSpawn { glyph: char },
    #[error("spawn {glyph:?} is missing")]
    MissingSpawn { glyph: char },
    #[error("maze has no house door")]
    MissingDoor,
    #[error("maze has more than one house door")]
    DuplicateDoor,
    #[error("house door at ({x}, {y}) needs open tiles above and below")]
    BlockedDoor { x: i32, y: i32 },
}

const SPAWN_GLYPHS: [char; 5] = ['P', 'B', 'p', 'I', 'C'];

/// Static walls plus the mutable dot map.
///
/// Rows outside the board count as walls. Columns wrap, so an open tile on
/// the left or right edge is a tunnel to the other side.
#[derive(Debug, Clone)]
pub struct MazeState {
    width: i32,
    height: i32,
    /// Row-major.
    tiles: Vec<Tile>,
    house: House,
    remaining: u32,
}

impl MazeState {
    /// Parse a rectangular text layout. Returns the maze and its spawn points.
    pub fn parse(rows: &[&str]) -> Result<(Self, Spawns), MazeError> {
        let expected = rows.first().map(|r| r.chars().count()).ok_or(MazeError::Empty)?;
        if expected == 0 {
            return Err(MazeError::Empty);
        }

        let mut tiles = Vec::with_capacity(expected * rows.len());
        let mut spawns: [Option<IVec2>; 5] = [None; 5];
        let mut door = None;
        let mut remaining = 0;

        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != expected {
                return Err(MazeError::Ragged { row: y, len, expected });
            }
            for (x, glyph) in row.chars().enumerate() {
                let at = IVec2::new(x as i32, y as i32);
                let tile = match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Dot,
                    'o' => Tile::Energizer,
                    ' ' => Tile::Empty,
                    '-' => {
                        if door.replace(at).is_some() {
                            return Err(MazeError::DuplicateDoor);
                        }
                        Tile::Door
                    }
                    _ => {
                        let Some(slot) = SPAWN_GLYPHS.iter().position(|&g| g == glyph) else {
                            return Err(MazeError::UnknownGlyph { glyph, x: at.x, y: at.y });
                        };
                        if spawns[slot].replace(at).is_some() {
                            return Err(MazeError::DuplicateSpawn { glyph });
                        }
                        Tile::Empty
                    }
                };
                if matches!(tile, Tile::Dot | Tile::Energizer) {
                    remaining += 1;
                }
                tiles.push(tile);
            }
        }

        let mut points = [IVec2::ZERO; 5];
        for (slot, spawn) in spawns.iter().enumerate() {
            points[slot] = spawn.ok_or(MazeError::MissingSpawn { glyph: SPAWN_GLYPHS[slot] })?;
        }

        let door = door.ok_or(MazeError::MissingDoor)?;
        let house = House {
            door,
            exit: door - IVec2::Y,
            entry: door + IVec2::Y,
        };

        let maze = Self {
            width: expected as i32,
            height: rows.len() as i32,
            tiles,
            house,
            remaining,
        };
        if maze.is_wall(house.exit) || maze.is_wall(house.entry) {
            return Err(MazeError::BlockedDoor { x: door.x, y: door.y });
        }

        let spawns = Spawns {
            player: points[0],
            ghosts: [points[1], points[2], points[3], points[4]],
        };
        Ok((maze, spawns))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn house(&self) -> House {
        self.house
    }

    /// Wrap a position horizontally through the tunnel.
    pub fn wrap(&self, pos: IVec2) -> IVec2 {
        IVec2::new(pos.x.rem_euclid(self.width), pos.y)
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.y < 0 || pos.y >= self.height {
            return None;
        }
        let pos = self.wrap(pos);
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn tile(&self, pos: IVec2) -> Tile {
        self.index(pos).map_or(Tile::Wall, |i| self.tiles[i])
    }

    pub fn is_wall(&self, pos: IVec2) -> bool {
        self.tile(pos) == Tile::Wall
    }

    pub fn is_door(&self, pos: IVec2) -> bool {
        self.tile(pos) == Tile::Door
    }

    /// Remove a dot at `pos`. Returns whether one was there.
    pub fn consume_dot_at(&mut self, pos: IVec2) -> bool {
        self.consume(pos, Tile::Dot)
    }

    /// Remove an energizer at `pos`. Returns whether one was there.
    pub fn consume_energizer_at(&mut self, pos: IVec2) -> bool {
        self.consume(pos, Tile::Energizer)
    }

    fn consume(&mut self, pos: IVec2, kind: Tile) -> bool {
        match self.index(pos) {
            Some(i) if self.tiles[i] == kind => {
                self.tiles[i] = Tile::Empty;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Dots plus energizers still on the board.
    pub fn remaining_dot_count(&self) -> u32 {
        self.remaining
    }
}

/// Squared tile distance. Targets may sit outside the board, so no wrapping.
pub fn distance_sq(a: IVec2, b: IVec2) -> i32 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

#[cfg(test)]
pub(crate) const TINY: &[&str] = &[
    "#########",
    "#P. B  o#",
    "####-####",
    "# I p C #",
    "#########",
];
