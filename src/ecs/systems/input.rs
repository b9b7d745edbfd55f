use crate::ecs::components::{DesiredDir, Dir};

/// Queue a turn for the player. The latest command replaces the previous one.
pub fn player_input(world: &mut hecs::World, player: hecs::Entity, dir: Dir) {
    if let Ok(desired) = world.query_one_mut::<&mut DesiredDir>(player) {
        desired.0 = Some(dir);
    }
}
