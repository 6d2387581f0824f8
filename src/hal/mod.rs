//! HAL-facing side of the shim: raw wire codes, inbound notification
//! shapes and the per-version dispatch table.
//!
//! Nothing here interprets a DPP event; that happens in
//! [`crate::app::translate`].

pub mod decode;
pub mod notification;
pub mod wire;

pub use decode::{DecodeError, Inbound, decode};
pub use notification::{
    AnqpData, DppNotification, HalVersion, Hs20AnqpData, LegacyNotification, Notification,
    StateChange, VersionedNotification,
};
