pub mod collide;
pub mod dots;
pub mod ghost_mode;
pub mod house;
pub mod input;
pub mod movement;
pub mod pursue;
pub mod target;

use crate::actor::personality::Personality;
use crate::maze::MazeState;
use crate::mode::ModePhase;
use collide::GhostCollision;

/// Every subsystem the tick pipeline calls, one method per call site.
///
/// `Game::step` drives these in a fixed order. Implementations must not
/// call each other; the order lives in one place.
pub trait Systems {
    fn ghost_chase(&mut self, world: &mut hecs::World);
    fn ghost_scatter(&mut self, world: &mut hecs::World);
    fn movement(&mut self, world: &mut hecs::World, maze: &MazeState);
    fn wall_collide(&mut self, world: &mut hecs::World, maze: &MazeState);
    fn eat_dots(&mut self, world: &hecs::World, maze: &mut MazeState) -> u32;
    fn eat_energizer(&mut self, world: &hecs::World, maze: &mut MazeState) -> bool;
    fn ghost_scared(&mut self, world: &mut hecs::World, ticks: u32);
    fn ghost_scared_timeout(&mut self, world: &mut hecs::World, phase: ModePhase);
    fn enter_house(&mut self, world: &mut hecs::World, maze: &MazeState);
    fn set_chase_target(&mut self, world: &mut hecs::World, personality: Personality);
    fn set_scared_target(
        &mut self,
        world: &mut hecs::World,
        maze: &MazeState,
        rng: &mut fastrand::Rng,
    );
    fn set_scatter_target(&mut self, world: &mut hecs::World);
    fn set_eaten_target(&mut self, world: &mut hecs::World, maze: &MazeState);
    fn leave_house(&mut self, world: &mut hecs::World, maze: &MazeState, phase: ModePhase);
    fn pursue_target(&mut self, world: &mut hecs::World, maze: &MazeState);
    fn player_ghost_collide(&mut self, world: &hecs::World) -> GhostCollision;
    fn ghost_eaten(&mut self, world: &mut hecs::World, ghost: hecs::Entity);
}

/// The real systems.
#[derive(Debug, Default, Clone, Copy)]
pub struct EcsSystems;

impl Systems for EcsSystems {
    fn ghost_chase(&mut self, world: &mut hecs::World) {
        ghost_mode::ghost_chase(world);
    }

    fn ghost_scatter(&mut self, world: &mut hecs::World) {
        ghost_mode::ghost_scatter(world);
    }

    fn movement(&mut self, world: &mut hecs::World, maze: &MazeState) {
        movement::movement(world, maze);
    }

    fn wall_collide(&mut self, world: &mut hecs::World, maze: &MazeState) {
        movement::wall_collide(world, maze);
    }

    fn eat_dots(&mut self, world: &hecs::World, maze: &mut MazeState) -> u32 {
        dots::eat_dots(world, maze)
    }

    fn eat_energizer(&mut self, world: &hecs::World, maze: &mut MazeState) -> bool {
        dots::eat_energizer(world, maze)
    }

    fn ghost_scared(&mut self, world: &mut hecs::World, ticks: u32) {
        ghost_mode::ghost_scared(world, ticks);
    }

    fn ghost_scared_timeout(&mut self, world: &mut hecs::World, phase: ModePhase) {
        ghost_mode::ghost_scared_timeout(world, phase);
    }

    fn enter_house(&mut self, world: &mut hecs::World, maze: &MazeState) {
        house::enter_house(world, maze);
    }

    fn set_chase_target(&mut self, world: &mut hecs::World, personality: Personality) {
        target::set_chase_target(world, personality);
    }

    fn set_scared_target(
        &mut self,
        world: &mut hecs::World,
        maze: &MazeState,
        rng: &mut fastrand::Rng,
    ) {
        target::set_scared_target(world, maze, rng);
    }

    fn set_scatter_target(&mut self, world: &mut hecs::World) {
        target::set_scatter_target(world);
    }

    fn set_eaten_target(&mut self, world: &mut hecs::World, maze: &MazeState) {
        target::set_eaten_target(world, maze);
    }

    fn leave_house(&mut self, world: &mut hecs::World, maze: &MazeState, phase: ModePhase) {
        house::leave_house(world, maze, phase);
    }

    fn pursue_target(&mut self, world: &mut hecs::World, maze: &MazeState) {
        pursue::pursue_target(world, maze);
    }

    fn player_ghost_collide(&mut self, world: &hecs::World) -> GhostCollision {
        collide::player_ghost_collide(world)
    }

    fn ghost_eaten(&mut self, world: &mut hecs::World, ghost: hecs::Entity) {
        ghost_mode::ghost_eaten(world, ghost);
    }
}
