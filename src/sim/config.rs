//! Session configuration
//!
//! Tunables are fixed for the lifetime of a session and validated once at
//! construction. A session never starts with a config it cannot run.

use std::fmt;

use super::state::ObjectKind;

/// Immutable per-session tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Grapes the player must hold to win
    pub grapes_to_win: u32,
    /// Every Nth grape slot spawns a stone instead
    pub stone_frequency: u32,
    /// Grape fall speed (px per tick)
    pub grape_speed: f32,
    /// Stone fall speed (px per tick)
    pub stone_speed: f32,
    /// Basket travel per tick while a direction is held (px)
    pub basket_speed: f32,
    /// Whether a stone hit costs a collected grape
    pub penalty_on_stone: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grapes_to_win: 50,
            stone_frequency: 5,
            grape_speed: 1.5,
            stone_speed: 2.0,
            basket_speed: 3.5,
            penalty_on_stone: false,
        }
    }
}

impl GameConfig {
    /// Check the config for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grapes_to_win == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        if self.stone_frequency == 0 {
            return Err(ConfigError::ZeroStoneFrequency);
        }
        check_speed("grape_speed", self.grape_speed)?;
        check_speed("stone_speed", self.stone_speed)?;
        check_speed("basket_speed", self.basket_speed)?;
        Ok(())
    }

    /// Fall speed for an object kind (px per tick)
    #[inline]
    pub fn fall_speed(&self, kind: ObjectKind) -> f32 {
        match kind {
            ObjectKind::Grape => self.grape_speed,
            ObjectKind::Stone => self.stone_speed,
        }
    }
}

fn check_speed(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::BadSpeed { field, value });
    }
    Ok(())
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroTarget,
    ZeroStoneFrequency,
    BadSpeed { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTarget => write!(f, "grapes_to_win must be at least 1"),
            Self::ZeroStoneFrequency => {
                write!(f, "stone_frequency must be at least 1 (it is a modulo divisor)")
            }
            Self::BadSpeed { field, value } => {
                write!(f, "{field} must be a finite positive speed, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_target_rejected() {
        let config = GameConfig {
            grapes_to_win: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTarget));
    }

    #[test]
    fn test_zero_stone_frequency_rejected() {
        let config = GameConfig {
            stone_frequency: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStoneFrequency));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = GameConfig {
            basket_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadSpeed {
                field: "basket_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let config = GameConfig {
            stone_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadSpeed {
                field: "stone_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_speed_rejected() {
        let config = GameConfig {
            grape_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadSpeed {
                field: "grape_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_fall_speed_per_kind() {
        let config = GameConfig::default();
        assert_eq!(config.fall_speed(ObjectKind::Grape), 1.5);
        assert_eq!(config.fall_speed(ObjectKind::Stone), 2.0);
    }
}
