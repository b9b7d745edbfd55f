use glam::IVec2;

use crate::config::Tuning;
use crate::ecs::components::Dir;
use crate::maze::distance_sq;

/// Clyde gives up the chase inside this many tiles of the player.
const CLYDE_SHY_RADIUS: i32 = 8;
/// How far ahead of the player Pinky aims.
const PINKY_LEAD: i32 = 4;
/// How far ahead of the player Inky's pivot sits.
const INKY_LEAD: i32 = 2;

/// Fixed target-selection rule of one ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Personality {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

/// Everything a chase formula may look at.
#[derive(Debug, Clone, Copy)]
pub struct ChaseContext {
    pub player: IVec2,
    pub facing: Dir,
    /// Blinky's tile. Inky mirrors around it.
    pub anchor: IVec2,
    /// The ghost's own tile.
    pub own: IVec2,
    /// The ghost's scatter corner.
    pub corner: IVec2,
}

impl Personality {
    /// Chase target call order. Inky reads Blinky, so Blinky goes first.
    pub const ALL: [Personality; 4] = [
        Personality::Blinky,
        Personality::Pinky,
        Personality::Inky,
        Personality::Clyde,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Personality::Blinky => "blinky",
            Personality::Pinky => "pinky",
            Personality::Inky => "inky",
            Personality::Clyde => "clyde",
        }
    }

    pub fn chase_target(self, ctx: &ChaseContext) -> IVec2 {
        match self {
            Personality::Blinky => ctx.player,
            Personality::Pinky => ctx.player + ctx.facing.offset() * PINKY_LEAD,
            Personality::Inky => {
                let pivot = ctx.player + ctx.facing.offset() * INKY_LEAD;
                pivot * 2 - ctx.anchor
            }
            Personality::Clyde => {
                if distance_sq(ctx.own, ctx.player) > CLYDE_SHY_RADIUS * CLYDE_SHY_RADIUS {
                    ctx.player
                } else {
                    ctx.corner
                }
            }
        }
    }

    /// Scatter corner, just outside the board so the ghost circles it.
    pub fn scatter_corner(self, width: i32, height: i32) -> IVec2 {
        match self {
            Personality::Blinky => IVec2::new(width - 3, -3),
            Personality::Pinky => IVec2::new(2, -3),
            Personality::Inky => IVec2::new(width - 1, height + 1),
            Personality::Clyde => IVec2::new(0, height + 1),
        }
    }

    /// Ticks spent in the house before the first release.
    /// `None` means the ghost starts outside.
    pub fn release_ticks(self, tuning: &Tuning) -> Option<u32> {
        match self {
            Personality::Blinky => None,
            Personality::Pinky => Some(tuning.pinky_release_ticks),
            Personality::Inky => Some(tuning.inky_release_ticks),
            Personality::Clyde => Some(tuning.clyde_release_ticks),
        }
    }
}
