//! In-memory climate data model.
//!
//! Owns the climate control state and enforces the hardware ranges from
//! [`HmiConfig`]: every setter clamps, so the model can never hold a value
//! the device would reject, no matter what the controller forwards.

use serde::{Deserialize, Serialize};

use crate::app::ports::ClimateModel;
use crate::config::HmiConfig;

/// Windshield defrost zone selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DefrostZone {
    None,
    Front,
    Rear,
    All,
}

/// Live climate control state, one per vehicle zone.
#[derive(Debug, Clone)]
pub struct ClimateControlState {
    fan_speed: u8,
    desired_temp: f32,
    ac_enable: bool,
    recirculate_air_enable: bool,
    auto_mode_enable: bool,
    dual_mode_enable: bool,
    defrost_zone: DefrostZone,

    // Hardware limits, fixed at construction.
    fan_speed_min: u8,
    fan_speed_max: u8,
    temp_min_c: f32,
    temp_max_c: f32,
    temp_step_c: f32,
}

impl ClimateControlState {
    pub fn new(config: &HmiConfig) -> Self {
        Self {
            fan_speed: config.default_fan_speed,
            desired_temp: config.default_temp_c,
            ac_enable: false,
            recirculate_air_enable: false,
            auto_mode_enable: false,
            dual_mode_enable: false,
            defrost_zone: DefrostZone::None,

            fan_speed_min: config.fan_speed_min,
            fan_speed_max: config.fan_speed_max,
            temp_min_c: config.temp_min_c,
            temp_max_c: config.temp_max_c,
            temp_step_c: config.temp_step_c,
        }
    }

    fn clamp_speed(&self, value: u8) -> u8 {
        value.clamp(self.fan_speed_min, self.fan_speed_max)
    }

    fn clamp_temp(&self, value: f32) -> f32 {
        value.clamp(self.temp_min_c, self.temp_max_c)
    }
}

impl ClimateModel for ClimateControlState {
    fn increase_speed(&mut self) {
        self.fan_speed = self.clamp_speed(self.fan_speed.saturating_add(1));
    }

    fn decrease_speed(&mut self) {
        self.fan_speed = self.clamp_speed(self.fan_speed.saturating_sub(1));
    }

    fn set_speed(&mut self, value: u8) {
        self.fan_speed = self.clamp_speed(value);
    }

    fn increase_temp(&mut self) {
        self.desired_temp = self.clamp_temp(self.desired_temp + self.temp_step_c);
    }

    fn decrease_temp(&mut self) {
        self.desired_temp = self.clamp_temp(self.desired_temp - self.temp_step_c);
    }

    fn set_temp(&mut self, value: f32) {
        self.desired_temp = self.clamp_temp(value);
    }

    fn set_ac_enable(&mut self, value: bool) {
        self.ac_enable = value;
    }

    fn set_recirculate_air_enable(&mut self, value: bool) {
        self.recirculate_air_enable = value;
    }

    fn set_auto_mode_enable(&mut self, value: bool) {
        self.auto_mode_enable = value;
    }

    fn set_defrost_zone(&mut self, value: DefrostZone) {
        self.defrost_zone = value;
    }

    fn set_dual_mode_enable(&mut self, value: bool) {
        self.dual_mode_enable = value;
    }

    fn toggle_auto_mode(&mut self) {
        self.auto_mode_enable = !self.auto_mode_enable;
    }

    fn fan_speed(&self) -> u8 {
        self.fan_speed
    }

    fn desired_temp(&self) -> f32 {
        self.desired_temp
    }

    fn ac_enable(&self) -> bool {
        self.ac_enable
    }

    fn recirculate_air_enable(&self) -> bool {
        self.recirculate_air_enable
    }

    fn auto_mode_enable(&self) -> bool {
        self.auto_mode_enable
    }

    fn defrost_zone(&self) -> DefrostZone {
        self.defrost_zone
    }

    fn dual_mode_enable(&self) -> bool {
        self.dual_mode_enable
    }
}
