use std::time::Duration;

/// Timed effects granted by special fruit.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PowerUp {
    /// Halves the effective move interval.
    SpeedBoost,
    /// Self-collision is not lethal.
    GhostMode,
}

/// Two independent frame countdowns; zero means the effect is off.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PowerUpTimers {
    pub speed_boost_ticks: u32,
    pub ghost_mode_ticks: u32,
}

impl PowerUpTimers {
    /// Sets (does not extend) the timer of `power_up` to `ticks`.
    pub fn activate(&mut self, power_up: PowerUp, ticks: u32) {
        match power_up {
            PowerUp::SpeedBoost => self.speed_boost_ticks = ticks,
            PowerUp::GhostMode => self.ghost_mode_ticks = ticks,
        }
    }

    /// Counts both timers down by one frame.
    pub fn tick(&mut self) {
        self.speed_boost_ticks = self.speed_boost_ticks.saturating_sub(1);
        self.ghost_mode_ticks = self.ghost_mode_ticks.saturating_sub(1);
    }

    #[must_use]
    pub fn is_speed_boosted(&self) -> bool {
        self.speed_boost_ticks > 0
    }

    #[must_use]
    pub fn is_ghosted(&self) -> bool {
        self.ghost_mode_ticks > 0
    }

    /// Remaining frames for `power_up`.
    #[must_use]
    pub fn remaining(&self, power_up: PowerUp) -> u32 {
        match power_up {
            PowerUp::SpeedBoost => self.speed_boost_ticks,
            PowerUp::GhostMode => self.ghost_mode_ticks,
        }
    }

    /// Interval between moves given the nominal `move_delay`.
    ///
    /// The nominal delay is left alone so it is back in force when the boost
    /// runs out.
    #[must_use]
    pub fn effective_move_delay(&self, move_delay: Duration) -> Duration {
        if self.is_speed_boosted() {
            move_delay / 2
        } else {
            move_delay
        }
    }

    /// Caps the move accumulator at the effective interval.
    #[must_use]
    pub fn clamp_move_timer(&self, move_timer: Duration, move_delay: Duration) -> Duration {
        move_timer.min(self.effective_move_delay(move_delay))
    }
}
