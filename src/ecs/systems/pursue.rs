use glam::IVec2;

use crate::ecs::components::{Dir, Facing, GhostMode, Position, Target, Velocity};
use crate::maze::{distance_sq, MazeState};

/// Pick each ghost's next step toward its target. Ghosts never reverse
/// unless boxed in. Ghosts waiting in the house stay put, frightened ones
/// only step on even countdown ticks.
pub fn pursue_target(world: &mut hecs::World, maze: &MazeState) {
    for (_, (mode, pos, facing, vel, target)) in world.query_mut::<(
        &GhostMode,
        &Position,
        &mut Facing,
        &mut Velocity,
        &Target,
    )>() {
        let resting = match *mode {
            _ if mode.in_house() => true,
            GhostMode::Scared { ticks_left, .. } => ticks_left % 2 == 1,
            _ => false,
        };
        if resting {
            vel.0 = IVec2::ZERO;
            continue;
        }

        match next_step(maze, pos.0, facing.0, target.0, mode.uses_door()) {
            Some(dir) => {
                facing.0 = dir;
                vel.0 = dir.offset();
            }
            None => vel.0 = IVec2::ZERO,
        }
    }
}

/// Greedy step: of the open non-reversing neighbors, the one closest to
/// `target`, ties broken in `Dir::ALL` order. Reverses at dead ends.
pub fn next_step(
    maze: &MazeState,
    pos: IVec2,
    facing: Dir,
    target: IVec2,
    uses_door: bool,
) -> Option<Dir> {
    let open = |dir: Dir| {
        let tile = maze.wrap(pos + dir.offset());
        !maze.is_wall(tile) && (uses_door || !maze.is_door(tile))
    };

    Dir::ALL
        .into_iter()
        .filter(|&dir| dir != facing.reverse() && open(dir))
        .min_by_key(|&dir| distance_sq(maze.wrap(pos + dir.offset()), target))
        .or_else(|| Some(facing.reverse()).filter(|&dir| open(dir)))
}
