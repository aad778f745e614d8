//! Outbound notification vocabulary.
//!
//! The controller and view emit these through the
//! [`RemoteLink`](super::ports::RemoteLink) port. Each enum carries the
//! fixed wire tag the app layer expects; the transport on the other side
//! decides how the tag actually travels.

use std::fmt;

/// Interior module whose data changed, reported alongside
/// interior-vehicle-data notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Climate,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Climate => "CLIMATE",
        }
    }
}

/// Button class reported with soft-button events. Dynamically supplied
/// soft buttons are always custom buttons; statically defined HMI buttons
/// use named classes owned by the app layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    CustomButton,
}

impl ButtonClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CustomButton => "CUSTOM_BUTTON",
        }
    }
}

/// Press/release edge of a button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Down,
    Up,
}

impl ButtonEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Down => "BUTTONDOWN",
            Self::Up => "BUTTONUP",
        }
    }
}

/// Completed-press classification. The remote link distinguishes the two
/// by this tag alone; it never measures the duration itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    Short,
    Long,
}

impl PressKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Long => "LONG",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ButtonClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ButtonEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
