//! Supplicant station-interface callback shim.
//!
//! Implements the V1.2 callback surface: DPP provisioning notifications
//! are translated into version-independent framework outcomes, and every
//! older notification is forwarded unchanged.
//!
//! ```text
//!  hal (wire codes, shapes, version table)
//!    └─▶ app (translation core + ports)
//!          └─▶ adapters (log / channel listeners, resolvers, legacy sink)
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod hal;

pub use app::service::DppEventAdapter;
pub use error::{Error, Result};
