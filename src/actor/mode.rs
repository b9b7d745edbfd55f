use crate::mode::ModePhase;

/// Where a ghost is in its house lifecycle. Carried through a scare so the
/// ghost picks up where it left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseStage {
    Waiting { wait: u32 },
    Leaving,
}

/// Per-ghost behavior sub-state.
///
/// `Chase` and `Scatter` follow the broadcast phase. Every other variant
/// overrides it until its own exit condition, after which the ghost adopts
/// whatever phase is current at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostMode {
    Chase,
    Scatter,
    /// Frightened. Counts down independently of the mode timer. `house` is
    /// set while the ghost has not yet left the house.
    Scared {
        ticks_left: u32,
        house: Option<HouseStage>,
    },
    /// Returning to the house after being eaten.
    Eaten,
    /// Waiting in the house.
    InHouse { wait: u32 },
    /// Released from the house, heading for the exit tile.
    Leaving,
}

impl From<ModePhase> for GhostMode {
    fn from(phase: ModePhase) -> Self {
        match phase {
            ModePhase::Chase => GhostMode::Chase,
            ModePhase::Scatter => GhostMode::Scatter,
        }
    }
}

impl From<HouseStage> for GhostMode {
    fn from(stage: HouseStage) -> Self {
        match stage {
            HouseStage::Waiting { wait } => GhostMode::InHouse { wait },
            HouseStage::Leaving => GhostMode::Leaving,
        }
    }
}

impl GhostMode {
    /// Frightened out in the maze.
    pub const fn scared(ticks_left: u32) -> Self {
        GhostMode::Scared {
            ticks_left,
            house: None,
        }
    }

    /// Touching the player loses the game.
    pub fn is_hostile(self) -> bool {
        matches!(
            self,
            GhostMode::Chase | GhostMode::Scatter | GhostMode::InHouse { .. } | GhostMode::Leaving
        )
    }

    /// Touching the player eats the ghost.
    pub fn is_edible(self) -> bool {
        matches!(self, GhostMode::Scared { .. })
    }

    /// House lifecycle stage, frightened or not. `None` once out in the maze.
    pub fn house_stage(self) -> Option<HouseStage> {
        match self {
            GhostMode::InHouse { wait } => Some(HouseStage::Waiting { wait }),
            GhostMode::Leaving => Some(HouseStage::Leaving),
            GhostMode::Scared { house, .. } => house,
            _ => None,
        }
    }

    /// Allowed through the house door.
    pub fn uses_door(self) -> bool {
        self == GhostMode::Eaten || self.house_stage().is_some()
    }

    /// Sitting in the house waiting for release.
    pub fn in_house(self) -> bool {
        matches!(self.house_stage(), Some(HouseStage::Waiting { .. }))
    }

    /// Phase broadcast. Only ghosts already following the timer switch.
    pub fn on_phase(&mut self, phase: ModePhase) -> bool {
        match self {
            GhostMode::Chase | GhostMode::Scatter => {
                *self = phase.into();
                true
            }
            _ => false,
        }
    }

    /// Energizer eaten. Every ghost except the eaten ones (re)starts its
    /// scare, keeping its house stage.
    pub fn on_scared(&mut self, ticks: u32) -> bool {
        if *self == GhostMode::Eaten {
            return false;
        }
        *self = GhostMode::Scared {
            ticks_left: ticks,
            house: self.house_stage(),
        };
        true
    }

    /// One tick of the scare timer. Returns true when the scare ran out.
    /// Ghosts still in the house go back to their house stage, the rest
    /// adopt `phase`.
    pub fn on_scared_tick(&mut self, phase: ModePhase) -> bool {
        match self {
            GhostMode::Scared {
                ticks_left: 0,
                house,
            } => {
                *self = house.map_or(phase.into(), GhostMode::from);
                true
            }
            GhostMode::Scared { ticks_left, .. } => {
                *ticks_left -= 1;
                false
            }
            _ => false,
        }
    }

    pub fn on_eaten(&mut self) -> bool {
        if self.is_edible() {
            *self = GhostMode::Eaten;
            true
        } else {
            false
        }
    }

    /// Eaten ghost reached the house entry.
    pub fn on_house_entry(&mut self, wait: u32) -> bool {
        if *self == GhostMode::Eaten {
            *self = GhostMode::InHouse { wait };
            true
        } else {
            false
        }
    }

    /// One tick of house waiting. Returns true on release. Frightened
    /// ghosts keep counting.
    pub fn on_house_release(&mut self) -> bool {
        let wait = match self {
            GhostMode::InHouse { wait } => wait,
            GhostMode::Scared {
                house: Some(HouseStage::Waiting { wait }),
                ..
            } => wait,
            _ => return false,
        };
        if *wait > 0 {
            *wait -= 1;
            return false;
        }
        match self {
            GhostMode::Scared { house, .. } => *house = Some(HouseStage::Leaving),
            _ => *self = GhostMode::Leaving,
        }
        true
    }

    /// Leaving ghost stepped out of the house. A frightened one stays
    /// frightened, now out in the maze.
    pub fn on_exit(&mut self, phase: ModePhase) -> bool {
        match self {
            GhostMode::Leaving => {
                *self = phase.into();
                true
            }
            GhostMode::Scared {
                house: house @ Some(HouseStage::Leaving),
                ..
            } => {
                *house = None;
                true
            }
            _ => false,
        }
    }
}
