use crate::ecs::components::{Ghost, GhostMode};
use crate::mode::ModePhase;

/// Broadcast a new scatter/chase phase to ghosts following the timer.
pub fn ghost_phase(world: &mut hecs::World, phase: ModePhase) {
    let mut switched = 0;
    for (_, mode) in world.query_mut::<&mut GhostMode>() {
        if mode.on_phase(phase) {
            switched += 1;
        }
    }
    log::debug!("{} phase: {} ghosts switched", phase.label(), switched);
}

pub fn ghost_chase(world: &mut hecs::World) {
    ghost_phase(world, ModePhase::Chase);
}

pub fn ghost_scatter(world: &mut hecs::World) {
    ghost_phase(world, ModePhase::Scatter);
}

/// Energizer eaten: frighten every ghost that is not already eaten,
/// including the ones in the house.
pub fn ghost_scared(world: &mut hecs::World, ticks: u32) {
    for (_, mode) in world.query_mut::<&mut GhostMode>() {
        mode.on_scared(ticks);
    }
}

/// Count down each ghost's own scare. Expired ghosts adopt `phase`.
pub fn ghost_scared_timeout(world: &mut hecs::World, phase: ModePhase) {
    for (_, (ghost, mode)) in world.query_mut::<(&Ghost, &mut GhostMode)>() {
        if mode.on_scared_tick(phase) {
            log::debug!("{} no longer scared", ghost.personality.name());
        }
    }
}

/// The player ate `ghost`; it heads back to the house.
pub fn ghost_eaten(world: &mut hecs::World, ghost: hecs::Entity) {
    if let Ok(mode) = world.query_one_mut::<&mut GhostMode>(ghost) {
        mode.on_eaten();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::personality::Personality;

    fn ghost(world: &mut hecs::World, personality: Personality, mode: GhostMode) -> hecs::Entity {
        world.spawn((Ghost { personality }, mode))
    }

    fn mode_of(world: &hecs::World, e: hecs::Entity) -> GhostMode {
        *world.get::<&GhostMode>(e).unwrap()
    }

    #[test]
    fn broadcast_reaches_only_timer_followers() {
        let mut world = hecs::World::new();
        let a = ghost(&mut world, Personality::Blinky, GhostMode::Chase);
        let b = ghost(&mut world, Personality::Pinky, GhostMode::scared(4));
        let c = ghost(&mut world, Personality::Inky, GhostMode::InHouse { wait: 3 });

        ghost_scatter(&mut world);

        assert_eq!(mode_of(&world, a), GhostMode::Scatter);
        assert_eq!(mode_of(&world, b), GhostMode::scared(4));
        assert_eq!(mode_of(&world, c), GhostMode::InHouse { wait: 3 });

        ghost_chase(&mut world);
        assert_eq!(mode_of(&world, a), GhostMode::Chase);
    }

    #[test]
    fn scare_then_timeout() {
        let mut world = hecs::World::new();
        let a = ghost(&mut world, Personality::Blinky, GhostMode::Scatter);
        let waiting = ghost(&mut world, Personality::Inky, GhostMode::InHouse { wait: 7 });
        let eaten = ghost(&mut world, Personality::Clyde, GhostMode::Eaten);

        ghost_scared(&mut world, 1);
        assert_eq!(mode_of(&world, a), GhostMode::scared(1));
        assert!(mode_of(&world, waiting).is_edible());
        assert_eq!(mode_of(&world, eaten), GhostMode::Eaten);

        ghost_scared_timeout(&mut world, ModePhase::Chase);
        assert!(mode_of(&world, a).is_edible());
        ghost_scared_timeout(&mut world, ModePhase::Chase);
        assert_eq!(mode_of(&world, a), GhostMode::Chase);
        assert_eq!(mode_of(&world, waiting), GhostMode::InHouse { wait: 7 });
    }

    #[test]
    fn eaten_only_touches_the_named_ghost() {
        let mut world = hecs::World::new();
        let a = ghost(&mut world, Personality::Blinky, GhostMode::scared(9));
        let b = ghost(&mut world, Personality::Pinky, GhostMode::scared(9));

        ghost_eaten(&mut world, b);

        assert_eq!(mode_of(&world, a), GhostMode::scared(9));
        assert_eq!(mode_of(&world, b), GhostMode::Eaten);
    }
}
