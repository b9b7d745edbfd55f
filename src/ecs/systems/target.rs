use glam::IVec2;

use crate::actor::personality::{ChaseContext, Personality};
use crate::ecs::components::{
    Dir, Facing, Ghost, GhostMode, Player, Position, ScatterTarget, Target,
};
use crate::maze::MazeState;

fn player_state(world: &hecs::World) -> Option<(IVec2, Dir)> {
    world
        .query::<(&Player, &Position, &Facing)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing))| (pos.0, facing.0))
}

fn ghost_position(world: &hecs::World, personality: Personality) -> Option<IVec2> {
    world
        .query::<(&Ghost, &Position)>()
        .iter()
        .find(|(_, (ghost, _))| ghost.personality == personality)
        .map(|(_, (_, pos))| pos.0)
}

/// Chase target for the chasing ghost(s) of one personality.
pub fn set_chase_target(world: &mut hecs::World, personality: Personality) {
    let Some((player, facing)) = player_state(world) else {
        return;
    };
    let anchor = ghost_position(world, Personality::Blinky).unwrap_or(player);

    for (_, (ghost, mode, pos, corner, target)) in world.query_mut::<(
        &Ghost,
        &GhostMode,
        &Position,
        &ScatterTarget,
        &mut Target,
    )>() {
        if ghost.personality != personality || *mode != GhostMode::Chase {
            continue;
        }
        target.0 = personality.chase_target(&ChaseContext {
            player,
            facing,
            anchor,
            own: pos.0,
            corner: corner.0,
        });
    }
}

/// Frightened ghosts out in the maze wander toward a random tile, re-rolled
/// every tick. Ones still in the house keep their exit target.
pub fn set_scared_target(world: &mut hecs::World, maze: &MazeState, rng: &mut fastrand::Rng) {
    for (_, (mode, target)) in world.query_mut::<(&GhostMode, &mut Target)>() {
        if mode.is_edible() && mode.house_stage().is_none() {
            target.0 = IVec2::new(rng.i32(0..maze.width()), rng.i32(0..maze.height()));
        }
    }
}

pub fn set_scatter_target(world: &mut hecs::World) {
    for (_, (mode, corner, target)) in
        world.query_mut::<(&GhostMode, &ScatterTarget, &mut Target)>()
    {
        if *mode == GhostMode::Scatter {
            target.0 = corner.0;
        }
    }
}

pub fn set_eaten_target(world: &mut hecs::World, maze: &MazeState) {
    let entry = maze.house().entry;
    for (_, (mode, target)) in world.query_mut::<(&GhostMode, &mut Target)>() {
        if *mode == GhostMode::Eaten {
            target.0 = entry;
        }
    }
}
