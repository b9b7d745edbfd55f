/// Globally broadcast ghost behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModePhase {
    Scatter,
    Chase,
}

impl ModePhase {
    pub fn label(self) -> &'static str {
        match self {
            ModePhase::Scatter => "Scatter",
            ModePhase::Chase => "Chase",
        }
    }
}

/// Scatter/chase timer.
///
/// Starts out chasing, so the first duration checked is `chase_ticks`.
/// `elapsed` is bumped after the check every tick, including a flip tick,
/// which makes the flip tick the first tick of the new phase. A zero
/// duration flips on every tick.
#[derive(Debug, Clone)]
pub struct ModeTimer {
    phase: ModePhase,
    elapsed: u32,
    scatter_ticks: u32,
    chase_ticks: u32,
}

impl ModeTimer {
    pub fn new(scatter_ticks: u32, chase_ticks: u32) -> Self {
        Self {
            phase: ModePhase::Chase,
            elapsed: 0,
            scatter_ticks,
            chase_ticks,
        }
    }

    pub fn phase(&self) -> ModePhase {
        self.phase
    }

    #[cfg(test)]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Run one tick. Returns the phase just entered, if any.
    pub fn advance(&mut self) -> Option<ModePhase> {
        let entered = match self.phase {
            ModePhase::Scatter if self.elapsed >= self.scatter_ticks => Some(ModePhase::Chase),
            ModePhase::Chase if self.elapsed >= self.chase_ticks => Some(ModePhase::Scatter),
            _ => None,
        };
        if let Some(phase) = entered {
            self.phase = phase;
            self.elapsed = 0;
        }
        self.elapsed += 1;
        entered
    }
}
