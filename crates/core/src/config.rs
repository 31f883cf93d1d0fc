//! Session configuration
//!
//! Defaults come from the constants in the types crate. Front ends override
//! individual fields with the `with_*` builders and the session validates the
//! result once, at construction.

use std::time::Duration;

use thiserror::Error;

use crate::repeat::RepeatTiming;
use crate::scoring::GravityConfig;
use crate::shape::MAX_SIDE;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub gravity: GravityConfig,
    pub repeat: RepeatTiming,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min} cells, got {width}x{height}")]
    BoardTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },
    #[error("repeat interval must be non-zero")]
    ZeroRepeatInterval,
    #[error("minimum fall interval {min:?} exceeds base interval {base:?}")]
    FallFloorAboveBase { min: Duration, base: Duration },
    #[error("minimum fall interval must be non-zero")]
    ZeroFallInterval,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            gravity: GravityConfig::default(),
            repeat: RepeatTiming::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: GravityConfig) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatTiming) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reject configurations the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Every template must fit in every orientation.
        if self.board_width < MAX_SIDE || self.board_height < MAX_SIDE {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                min: MAX_SIDE,
            });
        }
        if self.repeat.repeat_interval.is_zero() {
            return Err(ConfigError::ZeroRepeatInterval);
        }
        if self.gravity.min_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.gravity.min_interval > self.gravity.base_interval {
            return Err(ConfigError::FallFloorAboveBase {
                min: self.gravity.min_interval,
                base: self.gravity.base_interval,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn tiny_board_is_rejected() {
        let err = SessionConfig::default()
            .with_board_size(3, 20)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::BoardTooSmall {
                width: 3,
                height: 20,
                min: 4
            }
        );
        assert!(err.to_string().contains("3x20"));
    }

    #[test]
    fn zero_repeat_interval_is_rejected() {
        let config = SessionConfig::default().with_repeat(RepeatTiming {
            initial_delay: Duration::from_millis(100),
            repeat_interval: Duration::ZERO,
        });
        assert_eq!(config.validate(), Err(ConfigError::ZeroRepeatInterval));
    }

    #[test]
    fn floor_above_base_is_rejected() {
        let config = SessionConfig::default().with_gravity(GravityConfig {
            min_interval: Duration::from_secs(2),
            ..GravityConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FallFloorAboveBase { .. })
        ));
    }
}
