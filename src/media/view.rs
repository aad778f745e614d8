//! AppLink media view.
//!
//! Three responsibilities, all driven by explicit observations from the
//! host event loop:
//!
//! - mount the control variant matching the active protocol revision,
//!   swapping on every observed flag change;
//! - report app deactivation on the active flag's falling edge, once per
//!   transition;
//! - host the soft-button bar and forward its press traffic, classified
//!   SHORT or LONG by each button's one-shot timer.

use log::{info, warn};

use crate::app::events::{ButtonClass, ButtonEdge, PressKind};
use crate::app::ports::RemoteLink;
use crate::config::HmiConfig;
use crate::media::buttons::{ButtonBar, SoftButtonDescriptor};

/// Protocol-revision-specific control widget set. Exactly one is mounted
/// at any time; the mounted variant *is* this tag, so a swap can never
/// leave zero or two variants behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlVariant {
    V1,
    V2,
}

impl ControlVariant {
    fn for_flag(v2: bool) -> Self {
        if v2 { Self::V2 } else { Self::V1 }
    }
}

/// Composite media view for one hosted application.
pub struct MediaView {
    app_id: u32,
    app_name: String,

    variant: ControlVariant,
    active: bool,

    bar: ButtonBar,
    long_press_ms: u64,
}

impl MediaView {
    /// Build the view for the application `app_id`/`app_name`. The control
    /// variant matching `protocol_v2` is mounted immediately; the view
    /// starts inactive until the first activation is observed.
    pub fn new(config: &HmiConfig, app_id: u32, app_name: impl Into<String>, protocol_v2: bool) -> Self {
        Self {
            app_id,
            app_name: app_name.into(),
            variant: ControlVariant::for_flag(protocol_v2),
            active: false,
            bar: ButtonBar::new(),
            long_press_ms: config.long_press_threshold_ms,
        }
    }

    // ── Observed flags ────────────────────────────────────────

    /// Observe the protocol-version flag. On a change the mounted variant
    /// is swapped; repeat observations of the same value are no-ops.
    pub fn set_protocol_version(&mut self, v2: bool) {
        let next = ControlVariant::for_flag(v2);
        if next != self.variant {
            info!("media view: controls {:?} -> {:?}", self.variant, next);
            self.variant = next;
        }
    }

    /// Observe the hosted app's active flag. Fires the deactivation
    /// notification exactly once per true→false transition; rising edges
    /// and repeat observations fire nothing.
    pub fn set_active(&mut self, active: bool, nav_target: &str, link: &mut impl RemoteLink) {
        if active == self.active {
            return;
        }
        self.active = active;
        if !active {
            info!("media view: app {} deactivated -> {nav_target}", self.app_name);
            link.notify_app_deactivated(nav_target, self.app_id, &self.app_name);
        }
    }

    // ── Soft buttons ──────────────────────────────────────────

    /// Replace the dynamic button set with the supplied descriptor array.
    pub fn set_soft_buttons(&mut self, descriptors: Option<&[SoftButtonDescriptor]>) {
        self.bar.rebuild(descriptors);
    }

    /// Drop every dynamic button, leaving only the static "Options" one.
    pub fn clear_soft_buttons(&mut self) {
        self.bar.clear();
    }

    /// Press-down on soft button `id`: forward the down edge and arm the
    /// button's long-press timer.
    pub fn button_down(&mut self, id: u32, now_ms: u64, link: &mut impl RemoteLink) {
        let threshold = self.long_press_ms;
        let Some(button) = self.bar.get_mut(id) else {
            warn!("media view: down for unknown soft button {id}");
            return;
        };
        link.send_button_event(ButtonClass::CustomButton, ButtonEdge::Down, id);
        button.timer.arm(now_ms, threshold);
    }

    /// Press-up on soft button `id`: forward the up edge, classify the
    /// completed press by the timer's fired flag, forward the pressed
    /// event, and cancel the timer.
    pub fn button_up(&mut self, id: u32, now_ms: u64, link: &mut impl RemoteLink) {
        let Some(button) = self.bar.get_mut(id) else {
            warn!("media view: up for unknown soft button {id}");
            return;
        };
        link.send_button_event(ButtonClass::CustomButton, ButtonEdge::Up, id);

        button.timer.poll(now_ms);
        let kind = if button.timer.fired() {
            PressKind::Long
        } else {
            PressKind::Short
        };
        link.send_button_pressed(ButtonClass::CustomButton, kind, id);
        button.timer.cancel();
    }

    /// Advance every pending press timer. Call from the host event loop.
    pub fn tick(&mut self, now_ms: u64) {
        for button in self.bar.iter_mut() {
            button.timer.poll(now_ms);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// The currently mounted control variant.
    pub fn variant(&self) -> ControlVariant {
        self.variant
    }

    /// Whether the hosted app is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The button bar, including the static "Options" button in its count.
    pub fn bar(&self) -> &ButtonBar {
        &self.bar
    }
}
