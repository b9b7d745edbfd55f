use crate::ecs::components::{Ghost, GhostMode, Player, Position, PrevPosition};

/// Outcome of the player touching ghosts this tick. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostCollision {
    None,
    Eat(hecs::Entity),
    Lose,
}

/// Detect player/ghost contact: same tile, or the two swapped tiles.
///
/// At most one result per tick. Any hostile ghost in contact wins (`Lose`);
/// otherwise the first frightened ghost in personality order is eaten.
/// Eaten ghosts pass through the player.
pub fn player_ghost_collide(world: &hecs::World) -> GhostCollision {
    let Some((pos, prev)) = world
        .query::<(&Player, &Position, &PrevPosition)>()
        .iter()
        .next()
        .map(|(_, (_, pos, prev))| (pos.0, prev.0))
    else {
        return GhostCollision::None;
    };

    let mut touching: Vec<_> = world
        .query::<(&Ghost, &GhostMode, &Position, &PrevPosition)>()
        .iter()
        .filter(|(_, (_, _, gpos, gprev))| {
            gpos.0 == pos || (gpos.0 == prev && gprev.0 == pos)
        })
        .map(|(entity, (ghost, mode, _, _))| (ghost.personality, *mode, entity))
        .collect();
    touching.sort_by_key(|(personality, _, _)| personality.index());

    if touching.iter().any(|(_, mode, _)| mode.is_hostile()) {
        return GhostCollision::Lose;
    }
    touching
        .iter()
        .find(|(_, mode, _)| mode.is_edible())
        .map_or(GhostCollision::None, |&(_, _, entity)| GhostCollision::Eat(entity))
}
