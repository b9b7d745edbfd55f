use instant::Instant;

use crate::actor::personality::Personality;
use crate::ecs::systems::collide::GhostCollision;
use crate::ecs::systems::Systems;
use crate::maze::MazeState;
use crate::mode::ModePhase;

/// Which group of pipeline steps is being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SystemPhase {
    Mode = 0,
    Movement = 1,
    Dots = 2,
    Scare = 3,
    House = 4,
    Targets = 5,
    Pursue = 6,
    Collide = 7,
}

impl SystemPhase {
    pub const ALL: [SystemPhase; 8] = [
        Self::Mode,
        Self::Movement,
        Self::Dots,
        Self::Scare,
        Self::House,
        Self::Targets,
        Self::Pursue,
        Self::Collide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mode => "Mode",
            Self::Movement => "Movement",
            Self::Dots => "Dots",
            Self::Scare => "Scare",
            Self::House => "House",
            Self::Targets => "Targets",
            Self::Pursue => "Pursue",
            Self::Collide => "Collide",
        }
    }
}

/// Per-system timing with exponential moving average smoothing.
pub struct SystemTimers {
    /// EMA-smoothed duration in microseconds per phase.
    pub durations_us: [f64; 8],
}

const EMA_ALPHA: f64 = 0.1;

impl SystemTimers {
    pub fn new() -> Self {
        Self {
            durations_us: [0.0; 8],
        }
    }

    /// Time `f` and fold it into `phase`.
    pub fn measure<T>(&mut self, phase: SystemPhase, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(phase, start.elapsed().as_secs_f64() * 1_000_000.0);
        out
    }

    fn record(&mut self, phase: SystemPhase, elapsed_us: f64) {
        let idx = phase as usize;
        self.durations_us[idx] =
            self.durations_us[idx] * (1.0 - EMA_ALPHA) + elapsed_us * EMA_ALPHA;
    }

    /// Sum of all phase durations (microseconds).
    pub fn total_us(&self) -> f64 {
        self.durations_us.iter().sum()
    }

    /// One-line breakdown for the log.
    pub fn summary(&self) -> String {
        SystemPhase::ALL
            .iter()
            .map(|p| format!("{} {:.1}us", p.label(), self.durations_us[*p as usize]))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for SystemTimers {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a [`Systems`] implementation and times every call.
pub struct TimedSystems<S> {
    pub inner: S,
    pub timers: SystemTimers,
}

impl<S: Systems> TimedSystems<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            timers: SystemTimers::new(),
        }
    }
}

impl<S: Systems> Systems for TimedSystems<S> {
    fn ghost_chase(&mut self, world: &mut hecs::World) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Mode, || inner.ghost_chase(world))
    }

    fn ghost_scatter(&mut self, world: &mut hecs::World) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Mode, || inner.ghost_scatter(world))
    }

    fn movement(&mut self, world: &mut hecs::World, maze: &MazeState) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Movement, || inner.movement(world, maze))
    }

    fn wall_collide(&mut self, world: &mut hecs::World, maze: &MazeState) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Movement, || inner.wall_collide(world, maze))
    }

    fn eat_dots(&mut self, world: &hecs::World, maze: &mut MazeState) -> u32 {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Dots, || inner.eat_dots(world, maze))
    }

    fn eat_energizer(&mut self, world: &hecs::World, maze: &mut MazeState) -> bool {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Dots, || inner.eat_energizer(world, maze))
    }

    fn ghost_scared(&mut self, world: &mut hecs::World, ticks: u32) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Scare, || inner.ghost_scared(world, ticks))
    }

    fn ghost_scared_timeout(&mut self, world: &mut hecs::World, phase: ModePhase) {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::Scare, || inner.ghost_scared_timeout(world, phase))
    }

    fn enter_house(&mut self, world: &mut hecs::World, maze: &MazeState) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::House, || inner.enter_house(world, maze))
    }

    fn set_chase_target(&mut self, world: &mut hecs::World, personality: Personality) {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::Targets, || inner.set_chase_target(world, personality))
    }

    fn set_scared_target(
        &mut self,
        world: &mut hecs::World,
        maze: &MazeState,
        rng: &mut fastrand::Rng,
    ) {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::Targets, || inner.set_scared_target(world, maze, rng))
    }

    fn set_scatter_target(&mut self, world: &mut hecs::World) {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::Targets, || inner.set_scatter_target(world))
    }

    fn set_eaten_target(&mut self, world: &mut hecs::World, maze: &MazeState) {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::Targets, || inner.set_eaten_target(world, maze))
    }

    fn leave_house(&mut self, world: &mut hecs::World, maze: &MazeState, phase: ModePhase) {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::House, || inner.leave_house(world, maze, phase))
    }

    fn pursue_target(&mut self, world: &mut hecs::World, maze: &MazeState) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Pursue, || inner.pursue_target(world, maze))
    }

    fn player_ghost_collide(&mut self, world: &hecs::World) -> GhostCollision {
        let inner = &mut self.inner;
        self.timers
            .measure(SystemPhase::Collide, || inner.player_ghost_collide(world))
    }

    fn ghost_eaten(&mut self, world: &mut hecs::World, ghost: hecs::Entity) {
        let inner = &mut self.inner;
        self.timers.measure(SystemPhase::Collide, || inner.ghost_eaten(world, ghost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_moves_toward_samples() {
        let mut timers = SystemTimers::new();
        timers.record(SystemPhase::Pursue, 100.0);
        assert!((timers.durations_us[SystemPhase::Pursue as usize] - 10.0).abs() < 1e-9);
        timers.record(SystemPhase::Pursue, 100.0);
        assert!((timers.durations_us[SystemPhase::Pursue as usize] - 19.0).abs() < 1e-9);
        assert_eq!(timers.total_us(), timers.durations_us[SystemPhase::Pursue as usize]);
    }

    #[test]
    fn measure_passes_the_result_through() {
        let mut timers = SystemTimers::new();
        assert_eq!(timers.measure(SystemPhase::Dots, || 7), 7);
        assert!(timers.summary().starts_with("Mode 0.0us"));
    }
}
