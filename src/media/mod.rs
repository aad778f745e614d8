//! AppLink media application view.
//!
//! [`view::MediaView`] mounts exactly one protocol-version control variant
//! at a time, watches the hosted app's active flag for its falling edge,
//! and hosts the dynamic soft-button bar. [`buttons`] carries the bar and
//! descriptor types; [`press`] holds the cancellable one-shot timer that
//! separates SHORT presses from LONG ones.

pub mod buttons;
pub mod press;
pub mod view;

pub use buttons::{ButtonBar, SoftButtonDescriptor};
pub use view::{ControlVariant, MediaView};
