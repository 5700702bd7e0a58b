// Motion tuning for the player character
//
// Every value is fixed at construction. `MotionConfig::validate` runs before a
// controller is built, so a bad value is a construction error instead of a
// dash that never ends or a timer that drifts negative mid-game.

/// Vertical velocity multiplier applied when jump is released while still rising
pub const DEFAULT_JUMP_CUT_MULTIPLIER: f32 = 0.4;

/// How fast the jump buffer drains, in buffer units per second
///
/// The buffer window is measured in tenths of a second, which is what the
/// game's tuning values were authored in.
pub const JUMP_BUFFER_DECAY_RATE: f32 = 10.0;

/// Configuration errors caught when building a controller
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be within ({min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Motion and action tuning for a character
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    // Horizontal movement
    /// Walk speed at full axis deflection (units/second)
    pub walk_speed: f32,

    // Dash
    /// Horizontal speed during a dash (units/second)
    pub dash_speed: f32,
    /// How long a dash lasts (seconds)
    pub dash_time: f32,
    /// Extra wait after a dash ends before another may start (seconds)
    pub dash_cooldown: f32,

    // Jumping
    /// Vertical velocity set when a jump starts
    pub jump_force: f32,
    /// Jump buffer window, drained at `JUMP_BUFFER_DECAY_RATE` per second
    pub jump_buffer_window: f32,
    /// Extra jumps allowed between two landings
    pub max_air_jumps: u32,
    /// Grace period after leaving ground during which a ground jump still works (seconds)
    pub coyote_time_window: f32,
    /// Multiplier on rising velocity when jump is released early
    pub jump_cut_multiplier: f32,

    // Ground probes
    /// Length of each downward ground probe
    pub ground_probe_length: f32,
    /// Horizontal offset of the two outer probes from the center probe
    pub ground_probe_lateral_offset: f32,

    // Combat
    /// Minimum time between two attacks (seconds)
    pub time_between_attacks: f32,

    // Dimensions (for physics collider and probe placement)
    /// Character width in world units
    pub width: f32,
    /// Character height in world units
    pub height: f32,
}

/// Standard tuning for the player character
pub const STANDARD_MOTION: MotionConfig = MotionConfig {
    walk_speed: 10.0,

    dash_speed: 30.0,
    dash_time: 0.15,
    dash_cooldown: 0.3,

    jump_force: 30.0,
    jump_buffer_window: 1.0,
    max_air_jumps: 1,
    coyote_time_window: 0.1,
    jump_cut_multiplier: DEFAULT_JUMP_CUT_MULTIPLIER,

    ground_probe_length: 0.2,
    ground_probe_lateral_offset: 0.5,

    time_between_attacks: 0.4,

    width: 1.0,
    height: 2.0,
};

impl Default for MotionConfig {
    fn default() -> Self {
        STANDARD_MOTION
    }
}

impl MotionConfig {
    /// Get the standard player tuning
    pub fn standard() -> Self {
        STANDARD_MOTION
    }

    /// Check every value, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("walk_speed", self.walk_speed),
            ("dash_speed", self.dash_speed),
            ("dash_time", self.dash_time),
            ("dash_cooldown", self.dash_cooldown),
            ("jump_force", self.jump_force),
            ("jump_buffer_window", self.jump_buffer_window),
            ("coyote_time_window", self.coyote_time_window),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("ground_probe_length", self.ground_probe_length),
            ("ground_probe_lateral_offset", self.ground_probe_lateral_offset),
            ("time_between_attacks", self.time_between_attacks),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("dash_time", self.dash_time),
            ("jump_force", self.jump_force),
            ("ground_probe_length", self.ground_probe_length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("walk_speed", self.walk_speed),
            ("dash_speed", self.dash_speed),
            ("dash_cooldown", self.dash_cooldown),
            ("jump_buffer_window", self.jump_buffer_window),
            ("coyote_time_window", self.coyote_time_window),
            ("ground_probe_lateral_offset", self.ground_probe_lateral_offset),
            ("time_between_attacks", self.time_between_attacks),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.jump_cut_multiplier <= 0.0 || self.jump_cut_multiplier > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "jump_cut_multiplier",
                value: self.jump_cut_multiplier,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config_is_valid() {
        assert_eq!(MotionConfig::standard().validate(), Ok(()));
        assert_eq!(MotionConfig::default(), MotionConfig::standard());
    }

    #[test]
    fn test_rejects_zero_dash_time() {
        let config = MotionConfig {
            dash_time: 0.0,
            ..MotionConfig::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "dash_time",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_negative_timers() {
        let config = MotionConfig {
            coyote_time_window: -0.1,
            ..MotionConfig::standard()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "coyote_time_window",
                ..
            })
        ));

        let config = MotionConfig {
            dash_cooldown: -1.0,
            ..MotionConfig::standard()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "dash_cooldown",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = MotionConfig {
            walk_speed: f32::NAN,
            ..MotionConfig::standard()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "walk_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_cut_multiplier_out_of_range() {
        let config = MotionConfig {
            jump_cut_multiplier: 1.5,
            ..MotionConfig::standard()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_windows_are_allowed() {
        let config = MotionConfig {
            coyote_time_window: 0.0,
            jump_buffer_window: 0.0,
            dash_cooldown: 0.0,
            time_between_attacks: 0.0,
            max_air_jumps: 0,
            ..MotionConfig::standard()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::NonPositive {
            field: "dash_time",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "dash_time must be greater than zero, got 0");
    }
}
