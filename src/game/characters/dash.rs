// Dash lifecycle: a timed action followed by a cooldown

/// Where a dash is in its lifecycle
///
/// `elapsed` is the time since the dash started. Both deadlines are measured from
/// that start, so a dash that overshoots its active window in one long frame still
/// recharges exactly `dash_time + dash_cooldown` after it began.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    /// A dash may start
    #[default]
    Ready,
    /// Dashing; all other per-frame logic is locked out
    Active { elapsed: f32 },
    /// The dash has ended but another may not start yet
    Cooldown { elapsed: f32 },
}

/// Transitions that happened during one `Dash::advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashTick {
    /// The active phase ended; gravity must be restored
    pub ended: bool,
    /// The cooldown expired; a new dash may start
    pub recharged: bool,
}

/// Dash timer driven by the frame clock
#[derive(Debug, Clone, PartialEq)]
pub struct Dash {
    phase: DashPhase,
    dash_time: f32,
    dash_cooldown: f32,
}

impl Dash {
    pub fn new(dash_time: f32, dash_cooldown: f32) -> Self {
        Self {
            phase: DashPhase::Ready,
            dash_time,
            dash_cooldown,
        }
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    /// True while the dash itself is running
    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Active { .. })
    }

    /// True from dash start until the cooldown expires
    pub fn is_on_cooldown(&self) -> bool {
        self.phase != DashPhase::Ready
    }

    /// Time from dash start until a new dash is allowed
    pub fn recharge_time(&self) -> f32 {
        self.dash_time + self.dash_cooldown
    }

    /// Begin a dash. Returns false if one is still running or cooling down.
    pub fn start(&mut self) -> bool {
        if self.is_on_cooldown() {
            return false;
        }
        self.phase = DashPhase::Active { elapsed: 0.0 };
        true
    }

    /// Advance the dash clock by `dt`
    pub fn advance(&mut self, dt: f32) -> DashTick {
        let mut tick = DashTick::default();

        let elapsed = match self.phase {
            DashPhase::Ready => return tick,
            DashPhase::Active { elapsed } | DashPhase::Cooldown { elapsed } => elapsed + dt,
        };

        if self.is_dashing() && elapsed >= self.dash_time {
            log::trace!("Dash active phase ended after {:.3}s", elapsed);
            tick.ended = true;
        }

        self.phase = if elapsed >= self.recharge_time() {
            log::trace!("Dash recharged after {:.3}s", elapsed);
            tick.recharged = true;
            DashPhase::Ready
        } else if self.is_dashing() && !tick.ended {
            DashPhase::Active { elapsed }
        } else {
            DashPhase::Cooldown { elapsed }
        };

        tick
    }

    /// Abort a running dash. The recharge deadline is unchanged.
    /// Returns true if a dash was actually running.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            DashPhase::Active { elapsed } => {
                self.phase = DashPhase::Cooldown { elapsed };
                true
            }
            _ => false,
        }
    }
}
