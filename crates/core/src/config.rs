//! Session configuration, validated once at construction.

use thiserror::Error;

use crate::grid::GridDims;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_TICK_MS, DEFAULT_WIDTH, MAX_DIMENSION};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,
    #[error("grid height must be positive")]
    ZeroHeight,
    #[error("tick length must be positive")]
    ZeroTick,
    #[error("grid {width}x{height} exceeds the {max} cell limit per side")]
    TooLarge { width: u16, height: u16, max: u16 },
}

/// Construction parameters for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub width: u16,
    pub height: u16,
    /// Minimum real time between gravity steps
    pub tick_ms: u64,
}

impl SessionConfig {
    pub fn new(width: u16, height: u16, tick_ms: u64) -> Self {
        Self {
            width,
            height,
            tick_ms,
        }
    }

    pub fn validate(&self) -> Result<GridDims, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }
        GridDims::new(i32::from(self.width), i32::from(self.height)).ok_or(ConfigError::ZeroWidth)
    }
}

impl Default for SessionConfig {
    /// The reference configuration: 10x16 grid, 500ms ticks
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_TICK_MS)
    }
}
