//! Climate settings controller.
//!
//! Each public method is a one-to-one mapping from a UI intent or inbound
//! request to a model mutation. Only the up/down intents report the change
//! to the remote link: an explicit-value setter is itself an
//! externally-driven write, and echoing it back would loop the
//! notification straight to its originator.

use log::debug;

use crate::app::events::ModuleKind;
use crate::app::ports::{ClimateModel, RemoteLink};
use crate::climate::model::DefrostZone;
use crate::climate::requests::SetClimateRequest;
use crate::error::Result;

/// Forwards climate UI intents to the data model.
///
/// Owns the model; the remote link is injected per call, so methods that
/// never notify simply take no link at all.
pub struct ClimateController<M: ClimateModel> {
    model: M,
}

impl<M: ClimateModel> ClimateController<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    // ── Panel up/down intents (notify the remote link) ────────

    pub fn increase_fan_speed(&mut self, link: &mut impl RemoteLink) {
        self.model.increase_speed();
        link.notify_interior_data_changed(ModuleKind::Climate);
    }

    pub fn decrease_fan_speed(&mut self, link: &mut impl RemoteLink) {
        self.model.decrease_speed();
        link.notify_interior_data_changed(ModuleKind::Climate);
    }

    pub fn increase_temp(&mut self, link: &mut impl RemoteLink) {
        self.model.increase_temp();
        link.notify_interior_data_changed(ModuleKind::Climate);
    }

    pub fn decrease_temp(&mut self, link: &mut impl RemoteLink) {
        self.model.decrease_temp();
        link.notify_interior_data_changed(ModuleKind::Climate);
    }

    // ── Explicit-value writes (no notification) ───────────────
    //
    // Each extracts exactly one leaf field, forwards it unvalidated (range
    // enforcement is the model's job) and returns the model's resulting
    // value, which the caller reports back to the requester.

    pub fn set_fan_speed(&mut self, request: &SetClimateRequest) -> Result<u8> {
        let value = request.fan_speed()?;
        debug!("set climate: fanSpeed={value}");
        self.model.set_speed(value);
        Ok(self.model.fan_speed())
    }

    pub fn set_temp(&mut self, request: &SetClimateRequest) -> Result<f32> {
        let value = request.desired_temp()?;
        debug!("set climate: desiredTemp={value}");
        self.model.set_temp(value);
        Ok(self.model.desired_temp())
    }

    pub fn set_ac_enable(&mut self, request: &SetClimateRequest) -> Result<bool> {
        self.model.set_ac_enable(request.ac_enable()?);
        Ok(self.model.ac_enable())
    }

    pub fn set_recirculate_air_enable(&mut self, request: &SetClimateRequest) -> Result<bool> {
        self.model
            .set_recirculate_air_enable(request.recirculate_air_enable()?);
        Ok(self.model.recirculate_air_enable())
    }

    pub fn set_auto_mode_enable(&mut self, request: &SetClimateRequest) -> Result<bool> {
        self.model.set_auto_mode_enable(request.auto_mode_enable()?);
        Ok(self.model.auto_mode_enable())
    }

    pub fn set_defrost_zone(&mut self, request: &SetClimateRequest) -> Result<DefrostZone> {
        self.model.set_defrost_zone(request.defrost_zone()?);
        Ok(self.model.defrost_zone())
    }

    pub fn set_dual_mode_enable(&mut self, request: &SetClimateRequest) -> Result<bool> {
        self.model.set_dual_mode_enable(request.dual_mode_enable()?);
        Ok(self.model.dual_mode_enable())
    }

    /// Toggle auto mode and return the resulting state.
    pub fn toggle_auto_mode(&mut self) -> bool {
        debug!("toggle auto mode");
        self.model.toggle_auto_mode();
        self.model.auto_mode_enable()
    }

    /// Read access to the underlying model.
    pub fn model(&self) -> &M {
        &self.model
    }
}
