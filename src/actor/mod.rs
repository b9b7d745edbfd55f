pub mod mode;
pub mod personality;

use glam::IVec2;

use crate::config::Tuning;
use crate::ecs::components::*;
use crate::error::GameError;
use crate::maze::{MazeState, Spawns};
use crate::render::sprites::SpriteSheet;
use personality::Personality;

/// Spawn the player at its spawn tile, standing still and facing left.
pub fn spawn_player(
    world: &mut hecs::World,
    spawns: &Spawns,
    sheet: &SpriteSheet,
) -> Result<hecs::Entity, GameError> {
    let pos = spawns.player;
    Ok(world.spawn((
        Player,
        Position(pos),
        PrevPosition(pos),
        Velocity(IVec2::ZERO),
        Facing(Dir::Left),
        DesiredDir::default(),
        Sprite(sheet.lookup("pacman 0")?),
    )))
}

/// Spawn all four ghosts in personality order.
///
/// Blinky starts outside the house in `initial` mode; the others wait in
/// the house for their release delay.
pub fn spawn_ghosts(
    world: &mut hecs::World,
    maze: &MazeState,
    spawns: &Spawns,
    sheet: &SpriteSheet,
    tuning: &Tuning,
    initial: GhostMode,
) -> Result<[hecs::Entity; 4], GameError> {
    let mut ghosts = Vec::with_capacity(Personality::ALL.len());
    for personality in Personality::ALL {
        let pos = spawns.ghosts[personality.index()];
        let corner = personality.scatter_corner(maze.width(), maze.height());
        let mode = match personality.release_ticks(tuning) {
            Some(wait) => GhostMode::InHouse { wait },
            None => initial,
        };
        let entity = world.spawn((
            Ghost { personality },
            mode,
            Position(pos),
            PrevPosition(pos),
            Velocity(IVec2::ZERO),
            Facing(Dir::Up),
            Target(corner),
            ScatterTarget(corner),
            Sprite(sheet.lookup(personality.name())?),
        ));
        ghosts.push(entity);
    }
    log::debug!("Spawned {} ghosts", ghosts.len());
    Ok([ghosts[0], ghosts[1], ghosts[2], ghosts[3]])
}
