use glam::IVec2;

use crate::actor::personality::Personality;
use crate::render::sprites::SpriteId;

pub use crate::actor::mode::GhostMode;

/// Current tile position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub IVec2);

/// Previous tick's tile — used to catch player and ghost swapping tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrevPosition(pub IVec2);

/// Tiles per tick. Zero when standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity(pub IVec2);

/// Last direction of travel. Kept while stopped so targets and sprites
/// still know which way an entity faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facing(pub Dir);

/// Turn requested by input, taken as soon as the way is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesiredDir(pub Option<Dir>);

/// Marks the player entity.
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Marks a ghost and its fixed personality.
#[derive(Debug, Clone, Copy)]
pub struct Ghost {
    pub personality: Personality,
}

/// Tile the ghost is currently steering toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target(pub IVec2);

/// Corner the ghost heads for while scattering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterTarget(pub IVec2);

/// Base display handle resolved from the sprite sheet at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite(pub SpriteId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir {
    Up,
    Left,
    Down,
    Right,
}

impl Dir {
    /// Tie-break order used by pursuit when two steps are equally good.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Left, Dir::Down, Dir::Right];

    pub fn offset(self) -> IVec2 {
        match self {
            Dir::Up => IVec2::new(0, -1),
            Dir::Left => IVec2::new(-1, 0),
            Dir::Down => IVec2::new(0, 1),
            Dir::Right => IVec2::new(1, 0),
        }
    }

    pub fn reverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Left => Dir::Right,
            Dir::Down => Dir::Up,
            Dir::Right => Dir::Left,
        }
    }
}
