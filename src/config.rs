//! HMI configuration parameters
//!
//! All tunable parameters for the climate panel and the media view.
//! Values mirror what the head unit's climate hardware accepts; the
//! climate model clamps every setter against these ranges.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core HMI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmiConfig {
    // --- Fan ---
    /// Lowest fan speed step accepted by the hardware
    pub fan_speed_min: u8,
    /// Highest fan speed step accepted by the hardware
    pub fan_speed_max: u8,
    /// Fan speed the panel starts at
    pub default_fan_speed: u8,

    // --- Cabin temperature ---
    /// Lowest selectable temperature (Celsius)
    pub temp_min_c: f32,
    /// Highest selectable temperature (Celsius)
    pub temp_max_c: f32,
    /// Temperature change per up/down press (Celsius)
    pub temp_step_c: f32,
    /// Temperature the panel starts at (Celsius)
    pub default_temp_c: f32,

    // --- Soft buttons ---
    /// Hold duration separating a SHORT press from a LONG press (ms)
    pub long_press_threshold_ms: u64,
}

impl Default for HmiConfig {
    fn default() -> Self {
        Self {
            // Fan
            fan_speed_min: 0,
            fan_speed_max: 7,
            default_fan_speed: 2,

            // Temperature
            temp_min_c: 16.0,
            temp_max_c: 30.0,
            temp_step_c: 0.5,
            default_temp_c: 22.0,

            // Soft buttons
            long_press_threshold_ms: 1000,
        }
    }
}

impl HmiConfig {
    /// Range-check every field. Callers loading a config from the outside
    /// world (provisioning, persisted settings) must validate before use;
    /// invalid values are rejected, not silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.fan_speed_min > self.fan_speed_max {
            return Err(Error::Config("fan_speed_min above fan_speed_max"));
        }
        if self.default_fan_speed < self.fan_speed_min || self.default_fan_speed > self.fan_speed_max
        {
            return Err(Error::Config("default_fan_speed outside fan range"));
        }
        if self.temp_min_c >= self.temp_max_c {
            return Err(Error::Config("temp_min_c not below temp_max_c"));
        }
        if self.temp_step_c <= 0.0 {
            return Err(Error::Config("temp_step_c must be positive"));
        }
        if self.default_temp_c < self.temp_min_c || self.default_temp_c > self.temp_max_c {
            return Err(Error::Config("default_temp_c outside temperature range"));
        }
        if self.long_press_threshold_ms == 0 {
            return Err(Error::Config("long_press_threshold_ms must be positive"));
        }
        Ok(())
    }
}
