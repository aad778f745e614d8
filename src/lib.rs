//! AppLink HMI core library.
//!
//! Presentation-layer logic for the head unit: a climate-control settings
//! controller and the AppLink media view with its dynamic soft-button bar.
//! All interaction with the remote link and the climate data model flows
//! through port traits, so the whole crate is testable without a head unit
//! attached. The hosting window manager, the remote-link transport, and the
//! navigation system live elsewhere.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod climate;
pub mod config;
pub mod error;
pub mod media;
