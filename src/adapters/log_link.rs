//! Log-based remote-link adapter.
//!
//! Implements [`RemoteLink`] by writing every notification to the logger.
//! Used as the transport stand-in in examples and smoke tests; a real
//! head-unit transport implements the same trait.

use log::info;

use crate::app::events::{ButtonClass, ButtonEdge, ModuleKind, PressKind};
use crate::app::ports::RemoteLink;

/// Adapter that logs every outbound notification.
pub struct LogRemoteLink;

impl LogRemoteLink {
    pub fn new() -> Self {
        Self
    }
}

impl RemoteLink for LogRemoteLink {
    fn notify_interior_data_changed(&mut self, module: ModuleKind) {
        info!("RC    | interior data changed | module={module}");
    }

    fn send_button_event(&mut self, class: ButtonClass, edge: ButtonEdge, button_id: u32) {
        info!("BTN   | {class} {edge} | id={button_id}");
    }

    fn send_button_pressed(&mut self, class: ButtonClass, kind: PressKind, button_id: u32) {
        info!("BTN   | {class} pressed {kind} | id={button_id}");
    }

    fn notify_app_deactivated(&mut self, nav_target: &str, app_id: u32, app_name: &str) {
        info!("APP   | deactivated | target={nav_target} id={app_id} name={app_name}");
    }
}
