use glam::IVec2;

use crate::ecs::components::{Facing, Ghost, GhostMode, Player, Position, Sprite, Velocity};
use crate::game::SpriteHandles;
use crate::render::sprites::SpriteId;

/// Scared ghosts start flashing with this many ticks left.
const FLASH_TICKS: u32 = 12;

/// One actor ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorInstance {
    pub tile: IVec2,
    pub sprite: SpriteId,
}

impl ActorInstance {
    /// Player sprite: mouth closed on even frames or while blocked, open
    /// toward the facing direction otherwise.
    pub fn player(pos: &Position, vel: &Velocity, facing: &Facing, handles: &SpriteHandles, frame: u64) -> Self {
        let open = vel.0 != IVec2::ZERO && frame % 2 == 1;
        let sprite = if open {
            handles.pacman.offset(1 + facing.0 as u16)
        } else {
            handles.pacman
        };
        Self { tile: pos.0, sprite }
    }

    /// Ghost sprite by mode: own colors, frightened (flashing near the end)
    /// or eyes on the way home.
    pub fn ghost(pos: &Position, mode: GhostMode, own: &Sprite, handles: &SpriteHandles, frame: u64) -> Self {
        let sprite = match mode {
            GhostMode::Scared { ticks_left, .. } if ticks_left < FLASH_TICKS && frame % 2 == 1 => {
                handles.scared.offset(1)
            }
            GhostMode::Scared { .. } => handles.scared,
            GhostMode::Eaten => handles.eyes,
            _ => own.0,
        };
        Self { tile: pos.0, sprite }
    }
}

/// Every actor in draw order: ghosts in personality order, then the player
/// on top.
pub fn collect(world: &hecs::World, handles: &SpriteHandles, frame: u64) -> Vec<ActorInstance> {
    let mut ghosts: Vec<_> = world
        .query::<(&Ghost, &GhostMode, &Position, &Sprite)>()
        .iter()
        .map(|(_, (ghost, mode, pos, sprite))| {
            (ghost.personality.index(), ActorInstance::ghost(pos, *mode, sprite, handles, frame))
        })
        .collect();
    ghosts.sort_by_key(|(index, _)| *index);

    let mut out: Vec<_> = ghosts.into_iter().map(|(_, inst)| inst).collect();
    out.extend(
        world
            .query::<(&Player, &Position, &Velocity, &Facing)>()
            .iter()
            .map(|(_, (_, pos, vel, facing))| ActorInstance::player(pos, vel, facing, handles, frame)),
    );
    out
}
