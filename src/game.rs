use crate::actor;
use crate::actor::personality::Personality;
use crate::config::Tuning;
use crate::ecs::components::Dir;
use crate::ecs::systems::collide::GhostCollision;
use crate::ecs::systems::{self, Systems};
use crate::error::GameError;
use crate::maze::{layout, MazeState};
use crate::mode::{ModePhase, ModeTimer};
use crate::render::sprites::{SpriteId, SpriteSheet};

const DOT_POINTS: u32 = 10;
const ENERGIZER_POINTS: u32 = 50;
/// First ghost of an energizer is worth this; each further one doubles, up to 8x.
const GHOST_POINTS: u32 = 200;
const MAX_GHOST_DOUBLINGS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Playing,
    Won,
    Lost,
}

/// Display handles resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct SpriteHandles {
    pub maze: SpriteId,
    pub door: SpriteId,
    /// `+ 1 + facing` opens the mouth.
    pub pacman: SpriteId,
    /// `+ 1` is the energizer.
    pub dot: SpriteId,
    /// `+ 0` won, `+ 1` lost.
    pub winlose: SpriteId,
    /// `+ 1` flashing.
    pub scared: SpriteId,
    pub eyes: SpriteId,
}

impl SpriteHandles {
    fn resolve(sheet: &SpriteSheet) -> Result<Self, GameError> {
        Ok(Self {
            maze: sheet.lookup("maze")?,
            door: sheet.lookup("door")?,
            pacman: sheet.lookup("pacman 0")?,
            dot: sheet.lookup("dot 0")?,
            winlose: sheet.lookup("winlose 0")?,
            scared: sheet.lookup("scared 0")?,
            eyes: sheet.lookup("eyes")?,
        })
    }
}

/// The simulation orchestrator.
///
/// Owns the entity world, the maze, the scatter/chase timer, the dot tally,
/// the RNG and the top-level state, and runs the tick pipeline in its fixed
/// order. Nothing else writes these.
pub struct Game {
    world: hecs::World,
    maze: MazeState,
    player: hecs::Entity,

    state: SimulationState,
    mode: ModeTimer,
    dots_eaten: u32,
    dots_total: u32,
    score: u32,
    /// Ghosts eaten since the last energizer.
    eat_streak: u32,
    ticks_played: u64,
    scared_ticks: u32,

    // Only `set_scared_target` may draw from this.
    rng: fastrand::Rng,

    sprites: SpriteHandles,
}

impl Game {
    /// New session on the arcade board.
    pub fn new(sheet: &SpriteSheet, tuning: &Tuning) -> Result<Self, GameError> {
        Self::with_layout(layout::CLASSIC, sheet, tuning)
    }

    pub fn with_layout(
        rows: &[&str],
        sheet: &SpriteSheet,
        tuning: &Tuning,
    ) -> Result<Self, GameError> {
        let (maze, spawns) = MazeState::parse(rows)?;
        let mode = ModeTimer::new(tuning.scatter_ticks, tuning.chase_ticks);

        let mut world = hecs::World::new();
        let player = actor::spawn_player(&mut world, &spawns, sheet)?;
        actor::spawn_ghosts(
            &mut world,
            &maze,
            &spawns,
            sheet,
            tuning,
            mode.phase().into(),
        )?;

        let rng = match tuning.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let dots_total = maze.remaining_dot_count();
        log::info!(
            "New game: {}x{} maze, {} dots, seed {:?}",
            maze.width(),
            maze.height(),
            dots_total,
            tuning.seed
        );

        Ok(Self {
            world,
            maze,
            player,
            state: SimulationState::Playing,
            mode,
            dots_eaten: 0,
            dots_total,
            score: 0,
            eat_streak: 0,
            ticks_played: 0,
            scared_ticks: tuning.scared_ticks,
            rng,
            sprites: SpriteHandles::resolve(sheet)?,
        })
    }

    /// Deliver one directional command. Ignored once the game is over.
    pub fn input(&mut self, dir: Dir) {
        if self.state == SimulationState::Playing {
            systems::input::player_input(&mut self.world, self.player, dir);
        }
    }

    /// Run one tick.
    ///
    /// Every system reads state some earlier system in this same tick
    /// wrote, so the order below is the contract. Keep it visible here.
    pub fn step<S: Systems>(&mut self, systems: &mut S) {
        if self.state != SimulationState::Playing {
            return;
        }
        self.ticks_played += 1;

        // 1. Mode timer; a flip is broadcast before anything moves.
        if let Some(entered) = self.mode.advance() {
            log::debug!("{} on tick {}", entered.label(), self.ticks_played);
            match entered {
                ModePhase::Chase => systems.ghost_chase(&mut self.world),
                ModePhase::Scatter => systems.ghost_scatter(&mut self.world),
            }
        }
        let phase = self.mode.phase();

        // 2. Movement
        systems.movement(&mut self.world, &self.maze);
        // 3. Walls and the closed door push back
        systems.wall_collide(&mut self.world, &self.maze);

        // 4. Dots
        let dots = systems.eat_dots(&self.world, &mut self.maze);
        self.dots_eaten += dots;
        self.score += dots * DOT_POINTS;
        // 5. Energizer
        if systems.eat_energizer(&self.world, &mut self.maze) {
            self.dots_eaten += 1;
            self.score += ENERGIZER_POINTS;
            self.eat_streak = 0;
            log::debug!("Energizer eaten on tick {}", self.ticks_played);
            systems.ghost_scared(&mut self.world, self.scared_ticks);
        }
        // 6. Scare timeouts
        systems.ghost_scared_timeout(&mut self.world, phase);
        // 7. Eaten ghosts back home
        systems.enter_house(&mut self.world, &self.maze);

        // 8. Targets. Chase first: other targets may anchor on them.
        for personality in Personality::ALL {
            systems.set_chase_target(&mut self.world, personality);
        }
        systems.set_scared_target(&mut self.world, &self.maze, &mut self.rng);
        systems.set_scatter_target(&mut self.world);
        systems.set_eaten_target(&mut self.world, &self.maze);

        // 9. House release and exit
        systems.leave_house(&mut self.world, &self.maze, phase);
        // 10. Next step toward the target
        systems.pursue_target(&mut self.world, &self.maze);

        // 11-12. Contact and its outcome
        match systems.player_ghost_collide(&self.world) {
            GhostCollision::Eat(ghost) => {
                systems.ghost_eaten(&mut self.world, ghost);
                let points = GHOST_POINTS << self.eat_streak.min(MAX_GHOST_DOUBLINGS);
                self.score += points;
                self.eat_streak += 1;
                log::debug!("Ghost eaten for {} points", points);
            }
            GhostCollision::Lose => {
                self.state = SimulationState::Lost;
                log::info!("Caught on tick {} with score {}", self.ticks_played, self.score);
                return;
            }
            GhostCollision::None => {}
        }

        // 13. Win check
        if self.dots_eaten == self.dots_total {
            self.state = SimulationState::Won;
            log::info!("Board cleared on tick {} with score {}", self.ticks_played, self.score);
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn phase(&self) -> ModePhase {
        self.mode.phase()
    }

    pub fn world(&self) -> &hecs::World {
        &self.world
    }

    pub fn maze(&self) -> &MazeState {
        &self.maze
    }

    pub fn dots_eaten(&self) -> u32 {
        self.dots_eaten
    }

    pub fn dots_total(&self) -> u32 {
        self.dots_total
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks_played(&self) -> u64 {
        self.ticks_played
    }

    pub fn sprites(&self) -> &SpriteHandles {
        &self.sprites
    }
}

#[cfg(test)]
use crate::ecs::{components::GhostMode, systems::EcsSystems};

#[cfg(test)]
impl Game {
    /// Run one tick with the real systems.
    pub fn logic(&mut self) {
        self.step(&mut EcsSystems);
    }

    pub fn player(&self) -> hecs::Entity {
        self.player
    }

    /// Ghost entities in personality order.
    pub fn ghosts(&self) -> [hecs::Entity; 4] {
        let mut ghosts = [self.player; 4];
        for (entity, ghost) in self.world.query::<&crate::ecs::components::Ghost>().iter() {
            ghosts[ghost.personality.index()] = entity;
        }
        ghosts
    }

    pub fn ghost_mode(&self, personality: Personality) -> Option<GhostMode> {
        self.world
            .get::<&GhostMode>(self.ghosts()[personality.index()])
            .ok()
            .map(|mode| *mode)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use glam::IVec2;

    use super::*;
    use crate::ecs::components::{Position, Velocity};
    use crate::maze::TINY;

    /// One recorded subsystem call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        GhostChase,
        GhostScatter,
        Movement,
        WallCollide,
        EatDots,
        EatEnergizer,
        GhostScared,
        ScaredTimeout,
        EnterHouse,
        ChaseTarget(Personality),
        ScaredTarget,
        ScatterTarget,
        EatenTarget,
        LeaveHouse,
        Pursue,
        Collide,
        GhostEaten,
    }

    /// Records every call and plays back scripted results keyed by tick
    /// (the n-th `movement` call is tick n, counting from 0).
    #[derive(Default)]
    struct Script {
        calls: Vec<(u64, Call)>,
        movements: u64,
        dots: HashMap<u64, u32>,
        energizers: Vec<u64>,
        collisions: HashMap<u64, GhostCollision>,
    }

    impl Script {
        fn tick(&self) -> u64 {
            self.movements.saturating_sub(1)
        }

        fn record(&mut self, call: Call) {
            // Calls before the first movement belong to tick 0.
            let tick = if call == Call::Movement { self.movements } else { self.tick() };
            self.calls.push((tick, call));
        }

        fn calls_on(&self, tick: u64) -> Vec<Call> {
            self.calls.iter().filter(|(t, _)| *t == tick).map(|(_, c)| *c).collect()
        }
    }

    impl Systems for Script {
        fn ghost_chase(&mut self, _: &mut hecs::World) {
            // Mode flips happen before movement bumps the tick.
            self.calls.push((self.movements, Call::GhostChase));
        }
        fn ghost_scatter(&mut self, _: &mut hecs::World) {
            self.calls.push((self.movements, Call::GhostScatter));
        }
        fn movement(&mut self, _: &mut hecs::World, _: &MazeState) {
            self.record(Call::Movement);
            self.movements += 1;
        }
        fn wall_collide(&mut self, _: &mut hecs::World, _: &MazeState) {
            self.record(Call::WallCollide);
        }
        fn eat_dots(&mut self, _: &hecs::World, _: &mut MazeState) -> u32 {
            self.record(Call::EatDots);
            self.dots.get(&self.tick()).copied().unwrap_or(0)
        }
        fn eat_energizer(&mut self, _: &hecs::World, _: &mut MazeState) -> bool {
            self.record(Call::EatEnergizer);
            self.energizers.contains(&self.tick())
        }
        fn ghost_scared(&mut self, _: &mut hecs::World, _: u32) {
            self.record(Call::GhostScared);
        }
        fn ghost_scared_timeout(&mut self, _: &mut hecs::World, _: ModePhase) {
            self.record(Call::ScaredTimeout);
        }
        fn enter_house(&mut self, _: &mut hecs::World, _: &MazeState) {
            self.record(Call::EnterHouse);
        }
        fn set_chase_target(&mut self, _: &mut hecs::World, personality: Personality) {
            self.record(Call::ChaseTarget(personality));
        }
        fn set_scared_target(&mut self, _: &mut hecs::World, _: &MazeState, _: &mut fastrand::Rng) {
            self.record(Call::ScaredTarget);
        }
        fn set_scatter_target(&mut self, _: &mut hecs::World) {
            self.record(Call::ScatterTarget);
        }
        fn set_eaten_target(&mut self, _: &mut hecs::World, _: &MazeState) {
            self.record(Call::EatenTarget);
        }
        fn leave_house(&mut self, _: &mut hecs::World, _: &MazeState, _: ModePhase) {
            self.record(Call::LeaveHouse);
        }
        fn pursue_target(&mut self, _: &mut hecs::World, _: &MazeState) {
            self.record(Call::Pursue);
        }
        fn player_ghost_collide(&mut self, _: &hecs::World) -> GhostCollision {
            self.record(Call::Collide);
            self.collisions.get(&self.tick()).copied().unwrap_or(GhostCollision::None)
        }
        fn ghost_eaten(&mut self, _: &mut hecs::World, _: hecs::Entity) {
            self.record(Call::GhostEaten);
        }
    }

    /// One quiet tick: no flip, no energizer, no contact.
    const PIPELINE: [Call; 16] = [
        Call::Movement,
        Call::WallCollide,
        Call::EatDots,
        Call::EatEnergizer,
        Call::ScaredTimeout,
        Call::EnterHouse,
        Call::ChaseTarget(Personality::Blinky),
        Call::ChaseTarget(Personality::Pinky),
        Call::ChaseTarget(Personality::Inky),
        Call::ChaseTarget(Personality::Clyde),
        Call::ScaredTarget,
        Call::ScatterTarget,
        Call::EatenTarget,
        Call::LeaveHouse,
        Call::Pursue,
        Call::Collide,
    ];

    fn quiet_pipeline() -> Vec<Call> {
        PIPELINE.to_vec()
    }

    fn tuning(scatter: u32, chase: u32) -> Tuning {
        Tuning {
            scatter_ticks: scatter,
            chase_ticks: chase,
            seed: Some(1),
            ..Tuning::default()
        }
    }

    /// TINY has a dot and an energizer; tests here want a single dot.
    const ONE_DOT: &[&str] = &[
        "#########",
        "#P. B   #",
        "####-####",
        "# I p C #",
        "#########",
    ];

    fn game(rows: &[&str], tuning: &Tuning) -> Game {
        Game::with_layout(rows, &SpriteSheet::builtin(), tuning).unwrap()
    }

    fn run(game: &mut Game, script: &mut Script, ticks: u64) {
        for _ in 0..ticks {
            game.step(script);
        }
    }

    #[test]
    fn every_step_runs_once_in_order() {
        let mut game = game(ONE_DOT, &tuning(100, 100));
        let mut script = Script::default();
        run(&mut game, &mut script, 3);

        for tick in 0..3 {
            assert_eq!(script.calls_on(tick), quiet_pipeline(), "tick {tick}");
        }
        assert_eq!(script.calls.len(), 3 * 16);
    }

    #[test]
    fn energizer_and_eat_slot_into_the_order() {
        let mut game = game(ONE_DOT, &tuning(100, 100));
        let ghost = game.ghosts()[0];
        let mut script = Script {
            energizers: vec![1],
            collisions: HashMap::from([(1, GhostCollision::Eat(ghost))]),
            ..Script::default()
        };
        run(&mut game, &mut script, 2);

        let mut expected = quiet_pipeline();
        expected.insert(4, Call::GhostScared);
        expected.push(Call::GhostEaten);
        assert_eq!(script.calls_on(1), expected);
        assert_eq!(game.score(), ENERGIZER_POINTS + GHOST_POINTS);
    }

    #[test]
    fn mode_flips_come_first_and_start_with_chase_duration() {
        let mut game = game(ONE_DOT, &tuning(2, 3));
        let mut script = Script::default();
        let mut phases = Vec::new();
        for _ in 0..6 {
            game.step(&mut script);
            phases.push(game.phase());
        }

        use ModePhase::*;
        assert_eq!(phases, vec![Chase, Chase, Chase, Scatter, Scatter, Chase]);
        assert_eq!(script.calls_on(3)[0], Call::GhostScatter);
        assert_eq!(script.calls_on(5)[0], Call::GhostChase);
        for tick in [0, 1, 2, 4] {
            assert_eq!(script.calls_on(tick), quiet_pipeline());
        }
    }

    #[test]
    fn won_on_the_tick_the_last_dot_goes() {
        let mut game = game(ONE_DOT, &tuning(100, 100));
        assert_eq!(game.dots_total(), 1);
        let mut script = Script {
            dots: HashMap::from([(4, 1)]),
            ..Script::default()
        };

        run(&mut game, &mut script, 4);
        assert_eq!(game.state(), SimulationState::Playing);
        game.step(&mut script);
        assert_eq!(game.state(), SimulationState::Won);
        assert_eq!(game.ticks_played(), 5);
        assert_eq!(game.score(), DOT_POINTS);
    }

    #[test]
    fn lost_on_contact_and_dots_freeze() {
        let mut game = game(TINY, &tuning(100, 100));
        let mut script = Script {
            dots: HashMap::from([(3, 1), (8, 1)]),
            collisions: HashMap::from([(7, GhostCollision::Lose)]),
            ..Script::default()
        };

        let mut eaten = Vec::new();
        for _ in 0..12 {
            game.step(&mut script);
            eaten.push(game.dots_eaten());
        }

        assert_eq!(game.state(), SimulationState::Lost);
        assert!(eaten.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(eaten[7], 1);
        assert_eq!(*eaten.last().unwrap(), 1);
        // Tick 7 ends at collide; nothing runs afterwards.
        assert_eq!(script.calls.last(), Some(&(7, Call::Collide)));
        assert_eq!(script.movements, 8);
    }

    #[test]
    fn lose_beats_win_on_the_same_tick() {
        let mut game = game(ONE_DOT, &tuning(100, 100));
        let mut script = Script {
            dots: HashMap::from([(2, 1)]),
            collisions: HashMap::from([(2, GhostCollision::Lose)]),
            ..Script::default()
        };
        run(&mut game, &mut script, 3);
        assert_eq!(game.state(), SimulationState::Lost);
        assert_eq!(game.dots_eaten(), 1);
    }

    #[test]
    fn eat_keeps_playing() {
        let mut game = game(TINY, &tuning(100, 100));
        let ghost = game.ghosts()[2];
        let mut script = Script {
            collisions: HashMap::from([(10, GhostCollision::Eat(ghost))]),
            ..Script::default()
        };
        run(&mut game, &mut script, 11);

        assert_eq!(game.state(), SimulationState::Playing);
        assert_eq!(script.calls_on(10).last(), Some(&Call::GhostEaten));
    }

    #[test]
    fn finished_game_is_inert() {
        let mut game = game(ONE_DOT, &tuning(0, 0));
        let mut script = Script {
            dots: HashMap::from([(0, 1)]),
            ..Script::default()
        };
        game.step(&mut script);
        assert_eq!(game.state(), SimulationState::Won);
        let recorded = script.calls.len();
        let phase = game.phase();

        run(&mut game, &mut script, 5);
        game.input(Dir::Up);

        assert_eq!(script.calls.len(), recorded);
        assert_eq!(game.phase(), phase);
        assert_eq!(game.ticks_played(), 1);
    }

    // Real systems from here on.

    fn place(game: &mut Game, entity: hecs::Entity, at: IVec2) {
        let world = &mut game.world;
        world.get::<&mut Position>(entity).unwrap().0 = at;
        world.get::<&mut crate::ecs::components::PrevPosition>(entity).unwrap().0 = at;
        world.get::<&mut Velocity>(entity).unwrap().0 = IVec2::ZERO;
    }

    fn set_mode(game: &mut Game, entity: hecs::Entity, mode: GhostMode) {
        *game.world.get::<&mut GhostMode>(entity).unwrap() = mode;
    }

    #[test]
    fn eating_a_scared_ghost_changes_only_that_ghost() {
        let mut game = game(layout::CLASSIC, &tuning(100, 100));
        let player_at = IVec2::new(13, 23);
        let ghosts = game.ghosts();
        let spots = [player_at, IVec2::new(1, 29), IVec2::new(26, 29), IVec2::new(1, 1)];
        for (ghost, at) in ghosts.iter().zip(spots) {
            place(&mut game, *ghost, at);
            set_mode(&mut game, *ghost, GhostMode::scared(40));
        }

        game.logic();

        assert_eq!(game.state(), SimulationState::Playing);
        assert_eq!(game.ghost_mode(Personality::Blinky), Some(GhostMode::Eaten));
        for p in &Personality::ALL[1..] {
            assert!(game.ghost_mode(*p).unwrap().is_edible(), "{p:?}");
        }
        assert_eq!(game.score(), GHOST_POINTS);
    }

    #[test]
    fn energizer_scares_everyone_until_their_own_timeout() {
        let tuning = Tuning {
            scared_ticks: 6,
            ..tuning(100, 2)
        };
        let mut game = game(layout::CLASSIC, &tuning);
        let player = game.player();
        place(&mut game, player, IVec2::new(1, 3));
        let ghosts = game.ghosts();
        let spots = [IVec2::new(10, 5), IVec2::new(15, 5), IVec2::new(20, 5), IVec2::new(25, 5)];
        let modes = [GhostMode::Chase, GhostMode::Scatter, GhostMode::Chase, GhostMode::Scatter];
        for ((ghost, at), mode) in ghosts.iter().zip(spots).zip(modes) {
            place(&mut game, *ghost, at);
            set_mode(&mut game, *ghost, mode);
        }

        // Tick 0: energizer under the player.
        game.logic();
        for p in Personality::ALL {
            assert_eq!(game.ghost_mode(p), Some(GhostMode::scared(5)));
        }

        // Ticks 1..=5: the timer flips to scatter at tick 2, ghosts stay scared.
        for _ in 1..=5 {
            game.logic();
        }
        assert_eq!(game.phase(), ModePhase::Scatter);
        for p in Personality::ALL {
            assert!(game.ghost_mode(p).unwrap().is_edible());
        }

        // Tick 6: scare runs out into the current phase.
        game.logic();
        assert_eq!(game.state(), SimulationState::Playing);
        for p in Personality::ALL {
            assert_eq!(game.ghost_mode(p), Some(GhostMode::Scatter));
        }
    }

    #[test]
    fn input_steers_the_player() {
        let mut game = game(ONE_DOT, &tuning(100, 100));
        game.input(Dir::Right);
        game.logic();
        let pos = game.world().get::<&Position>(game.player()).unwrap().0;
        assert_eq!(pos, IVec2::new(2, 1));
        assert_eq!(game.state(), SimulationState::Won);
    }

    #[test]
    fn energizer_on_a_fresh_board_scares_the_house_too() {
        let tuning = Tuning {
            scared_ticks: 4,
            ..tuning(100, 100)
        };
        let mut game = game(layout::CLASSIC, &tuning);
        let player = game.player();
        place(&mut game, player, IVec2::new(1, 23));

        game.logic();
        for p in Personality::ALL {
            assert!(game.ghost_mode(p).unwrap().is_edible(), "{p:?}");
        }
        assert!(game.ghost_mode(Personality::Inky).unwrap().in_house());
        assert!(game.ghost_mode(Personality::Clyde).unwrap().in_house());

        for _ in 1..=4 {
            game.logic();
        }
        assert_eq!(game.state(), SimulationState::Playing);
        // Still waiting out their release once the scare is over.
        assert!(matches!(game.ghost_mode(Personality::Inky), Some(GhostMode::InHouse { .. })));
        assert!(matches!(game.ghost_mode(Personality::Clyde), Some(GhostMode::InHouse { .. })));
    }

    /// A long corridor: Blinky at the far end, the house closed below, one
    /// dot locked in the house so the board never clears.
    const CORRIDOR: &[&str] = &[
        "###################",
        "#P...............B#",
        "######-############",
        "#.  I p C         #",
        "###################",
    ];

    #[test]
    fn eating_on_tick_ten_leaves_the_other_ghosts_alone() {
        let tuning = Tuning {
            pinky_release_ticks: 1000,
            inky_release_ticks: 1000,
            clyde_release_ticks: 1000,
            ..tuning(100, 100)
        };
        let mut game = game(CORRIDOR, &tuning);
        let blinky = game.ghosts()[Personality::Blinky.index()];
        set_mode(&mut game, blinky, GhostMode::scared(40));
        game.input(Dir::Right);

        for _ in 0..10 {
            game.logic();
            assert!(game.ghost_mode(Personality::Blinky).unwrap().is_edible());
        }
        let before: Vec<_> = Personality::ALL.iter().map(|p| game.ghost_mode(*p).unwrap()).collect();
        let score = game.score();

        // Tick 10: the player walks onto Blinky's tile.
        game.logic();

        assert_eq!(game.state(), SimulationState::Playing);
        assert_eq!(game.ghost_mode(Personality::Blinky), Some(GhostMode::Eaten));
        for (p, was) in Personality::ALL.iter().zip(&before).skip(1) {
            let now = game.ghost_mode(*p).unwrap();
            assert_eq!(std::mem::discriminant(&now), std::mem::discriminant(was), "{p:?}");
        }
        assert_eq!(game.score(), score + DOT_POINTS + GHOST_POINTS);
    }
}
