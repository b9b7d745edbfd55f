use glam::IVec2;

use crate::ecs::components::{DesiredDir, Facing, GhostMode, Position, PrevPosition, Velocity};
use crate::maze::MazeState;

/// Take the requested turn if the way is open, then step every entity by
/// its velocity. Tunnel wrap happens here; walls are left to `wall_collide`.
pub fn movement(world: &mut hecs::World, maze: &MazeState) {
    for (_, (pos, vel, facing, desired)) in
        world.query_mut::<(&Position, &mut Velocity, &mut Facing, &DesiredDir)>()
    {
        let Some(dir) = desired.0 else { continue };
        let ahead = maze.wrap(pos.0 + dir.offset());
        if !maze.is_wall(ahead) && !maze.is_door(ahead) {
            vel.0 = dir.offset();
            facing.0 = dir;
        }
    }

    for (_, (pos, prev_pos, vel)) in
        world.query_mut::<(&mut Position, &mut PrevPosition, &Velocity)>()
    {
        // Store previous tile for swap detection
        prev_pos.0 = pos.0;
        pos.0 = maze.wrap(pos.0 + vel.0);
    }
}

/// Put anything that moved into a wall back where it came from and stop it.
/// The house door only lets eaten and leaving ghosts through.
pub fn wall_collide(world: &mut hecs::World, maze: &MazeState) {
    for (_, (pos, prev_pos, vel, mode)) in world.query_mut::<(
        &mut Position,
        &PrevPosition,
        &mut Velocity,
        Option<&GhostMode>,
    )>() {
        let through_door = mode.is_some_and(|m| m.uses_door());
        if maze.is_wall(pos.0) || (!through_door && maze.is_door(pos.0)) {
            pos.0 = prev_pos.0;
            vel.0 = IVec2::ZERO;
        }
    }
}
