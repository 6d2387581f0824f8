//! Translation core: pure domain logic, no I/O.
//!
//! Turns DPP notifications into framework outcomes.  Everything outside
//! the crate (listener, SSID policy, package lookup, the pre-DPP handler)
//! is reached through the **port traits** in [`ports`], so this layer is
//! fully testable with mock adapters.

pub mod codes;
pub mod events;
pub mod listener;
pub mod network;
pub mod ports;
pub mod service;
pub mod ssid;
pub mod translate;
