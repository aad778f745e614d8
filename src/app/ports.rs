//! Port traits — the boundary between the HMI core and the outside world.
//!
//! ```text
//!   ClimateController / MediaView ──▶ Port trait ──▶ Adapter
//! ```
//!
//! The remote-link transport and the vehicle's climate data model implement
//! these traits. The controller and view consume them via generics, so the
//! core never reaches for an ambient singleton: dependencies arrive
//! through constructor or call-site injection and tests swap in mocks.

use crate::app::events::{ButtonClass, ButtonEdge, ModuleKind, PressKind};
use crate::climate::model::DefrostZone;

// ───────────────────────────────────────────────────────────────
// Remote link port (domain → head unit / app layer)
// ───────────────────────────────────────────────────────────────

/// Notification API of the remote link.
///
/// Every UI-originated event the app layer cares about leaves through
/// here. All calls are fire-and-forget: no acknowledgement, no retry.
pub trait RemoteLink {
    /// Report that interior vehicle data in `module` changed.
    fn notify_interior_data_changed(&mut self, module: ModuleKind);

    /// Forward a raw button edge (down/up) for the given soft button.
    fn send_button_event(&mut self, class: ButtonClass, edge: ButtonEdge, button_id: u32);

    /// Forward a completed, classified press for the given soft button.
    fn send_button_pressed(&mut self, class: ButtonClass, kind: PressKind, button_id: u32);

    /// Report that the hosted application was deactivated in favour of
    /// `nav_target` (the destination view's path).
    fn notify_app_deactivated(&mut self, nav_target: &str, app_id: u32, app_name: &str);
}

// ───────────────────────────────────────────────────────────────
// Climate model port (domain → vehicle data model)
// ───────────────────────────────────────────────────────────────

/// Mutators and current-value accessors of the climate data model.
///
/// Range enforcement lives behind this trait: implementations must leave
/// every field at a value the underlying hardware accepts. The controller
/// forwards blindly and never validates.
pub trait ClimateModel {
    fn increase_speed(&mut self);
    fn decrease_speed(&mut self);
    fn set_speed(&mut self, value: u8);

    fn increase_temp(&mut self);
    fn decrease_temp(&mut self);
    fn set_temp(&mut self, value: f32);

    fn set_ac_enable(&mut self, value: bool);
    fn set_recirculate_air_enable(&mut self, value: bool);
    fn set_auto_mode_enable(&mut self, value: bool);
    fn set_defrost_zone(&mut self, value: DefrostZone);
    fn set_dual_mode_enable(&mut self, value: bool);
    fn toggle_auto_mode(&mut self);

    fn fan_speed(&self) -> u8;
    fn desired_temp(&self) -> f32;
    fn ac_enable(&self) -> bool;
    fn recirculate_air_enable(&self) -> bool;
    fn auto_mode_enable(&self) -> bool;
    fn defrost_zone(&self) -> DefrostZone;
    fn dual_mode_enable(&self) -> bool;
}
