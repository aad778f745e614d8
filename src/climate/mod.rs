//! Climate-control panel logic.
//!
//! [`controller::ClimateController`] translates discrete UI intents into
//! mutations of a [`ClimateModel`](crate::app::ports::ClimateModel) and,
//! for the up/down intents, reports the change to the remote link.
//! [`requests`] defines the typed envelope for externally supplied
//! set-climate requests; [`model`] carries the in-memory data model.

pub mod controller;
pub mod model;
pub mod requests;

pub use controller::ClimateController;
pub use model::{ClimateControlState, DefrostZone};
pub use requests::SetClimateRequest;
