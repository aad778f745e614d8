//! Typed envelope for set-climate requests.
//!
//! The app layer delivers climate writes as a nested JSON envelope:
//!
//! ```text
//! { "params": { "moduleData": { "climateControlData": { "fanSpeed": 3 } } } }
//! ```
//!
//! Each request carries exactly one populated leaf field. The accessors
//! below pull that field out and fail with
//! [`Error::InvalidRequestShape`] when it is absent, instead of letting a
//! missing field surface as an unrelated crash deeper in the model.

use serde::Deserialize;

use crate::climate::model::DefrostZone;
use crate::error::{Error, Result};

/// A single inbound climate write.
#[derive(Debug, Clone, Deserialize)]
pub struct SetClimateRequest {
    pub params: RequestParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestParams {
    #[serde(rename = "moduleData")]
    pub module_data: ModuleData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleData {
    #[serde(rename = "climateControlData")]
    pub climate_control_data: ClimateControlData,
}

/// Leaf payload. Every field is optional on the wire; which one must be
/// present depends on the operation the request was addressed to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateControlData {
    pub fan_speed: Option<u8>,
    pub desired_temp: Option<f32>,
    pub ac_enable: Option<bool>,
    pub recirculate_air_enable: Option<bool>,
    pub auto_mode_enable: Option<bool>,
    pub defrost_zone: Option<DefrostZone>,
    pub dual_mode_enable: Option<bool>,
}

impl SetClimateRequest {
    /// Parse a request from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|_| Error::InvalidRequestShape("climateControlData"))
    }

    fn data(&self) -> &ClimateControlData {
        &self.params.module_data.climate_control_data
    }

    pub fn fan_speed(&self) -> Result<u8> {
        self.data()
            .fan_speed
            .ok_or(Error::InvalidRequestShape("fanSpeed"))
    }

    pub fn desired_temp(&self) -> Result<f32> {
        self.data()
            .desired_temp
            .ok_or(Error::InvalidRequestShape("desiredTemp"))
    }

    pub fn ac_enable(&self) -> Result<bool> {
        self.data()
            .ac_enable
            .ok_or(Error::InvalidRequestShape("acEnable"))
    }

    pub fn recirculate_air_enable(&self) -> Result<bool> {
        self.data()
            .recirculate_air_enable
            .ok_or(Error::InvalidRequestShape("recirculateAirEnable"))
    }

    pub fn auto_mode_enable(&self) -> Result<bool> {
        self.data()
            .auto_mode_enable
            .ok_or(Error::InvalidRequestShape("autoModeEnable"))
    }

    pub fn defrost_zone(&self) -> Result<DefrostZone> {
        self.data()
            .defrost_zone
            .ok_or(Error::InvalidRequestShape("defrostZone"))
    }

    pub fn dual_mode_enable(&self) -> Result<bool> {
        self.data()
            .dual_mode_enable
            .ok_or(Error::InvalidRequestShape("dualModeEnable"))
    }
}
