use glam::IVec2;

use crate::ecs::components::{Ghost, GhostMode, Position, Target, Velocity};
use crate::maze::MazeState;
use crate::mode::ModePhase;

/// Ticks an eaten ghost rests in the house before heading out again.
pub const REENTRY_WAIT: u32 = 4;

/// Eaten ghosts that reached the house entry settle in to wait.
pub fn enter_house(world: &mut hecs::World, maze: &MazeState) {
    let entry = maze.house().entry;
    for (_, (ghost, mode, pos, vel)) in
        world.query_mut::<(&Ghost, &mut GhostMode, &Position, &mut Velocity)>()
    {
        if pos.0 == entry && mode.on_house_entry(REENTRY_WAIT) {
            vel.0 = IVec2::ZERO;
            log::debug!("{} back in the house", ghost.personality.name());
        }
    }
}

/// Count down house waits and release ghosts toward the exit. Ghosts that
/// reached the exit tile rejoin the current phase.
pub fn leave_house(world: &mut hecs::World, maze: &MazeState, phase: ModePhase) {
    let exit = maze.house().exit;
    for (_, (ghost, mode, pos, target)) in
        world.query_mut::<(&Ghost, &mut GhostMode, &Position, &mut Target)>()
    {
        if mode.on_house_release() {
            target.0 = exit;
            log::debug!("{} released", ghost.personality.name());
        } else if pos.0 == exit && mode.on_exit(phase) {
            log::debug!("{} left the house", ghost.personality.name());
        }
    }
}
