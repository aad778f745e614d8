//! Application core boundary — pure domain logic, zero I/O.
//!
//! The climate controller and the media view never talk to the head unit
//! directly. All outbound traffic goes through **port traits** defined in
//! [`ports`], carrying the typed notification vocabulary from [`events`],
//! keeping both components fully testable without a remote link attached.

pub mod events;
pub mod ports;
