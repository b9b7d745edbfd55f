use crate::ecs::components::{Player, Position};
use crate::maze::MazeState;

/// Eat the dot under the player. Returns how many were eaten.
pub fn eat_dots(world: &hecs::World, maze: &mut MazeState) -> u32 {
    let mut eaten = 0;
    for (_, (_, pos)) in world.query::<(&Player, &Position)>().iter() {
        if maze.consume_dot_at(pos.0) {
            eaten += 1;
        }
    }
    eaten
}

/// Eat the energizer under the player. Returns whether one was eaten.
pub fn eat_energizer(world: &hecs::World, maze: &mut MazeState) -> bool {
    let mut eaten = false;
    for (_, (_, pos)) in world.query::<(&Player, &Position)>().iter() {
        eaten |= maze.consume_energizer_at(pos.0);
    }
    eaten
}
