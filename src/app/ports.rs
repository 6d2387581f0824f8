//! Port traits: the hexagonal boundary between the translation core and
//! the rest of the wifi stack.
//!
//! ```text
//!   HAL transport ──▶ DppEventAdapter ──▶ DppListener
//!                          │
//!                          ├──▶ SsidTranslator
//!                          ├──▶ PrincipalResolver
//!                          └──▶ LegacyCallback
//! ```
//!
//! None of these may fail in a way the adapter has to propagate.  A port
//! that cannot do its job returns a neutral value (`None`, the input
//! unchanged) and logs on its own side.

use crate::hal::LegacyNotification;

use super::codes::{DppEventType, DppFailureCode, DppProgressCode};
use super::events::FailureDetail;
use super::network::NetworkConfig;
use super::ssid::WifiSsid;

// ───────────────────────────────────────────────────────────────
// Listener port (domain → framework)
// ───────────────────────────────────────────────────────────────

/// Receives normalized DPP outcomes.
///
/// Shared between the adapter and whoever registers it, and may be swapped
/// while notifications are in flight, hence `&self` and `Send + Sync`.
pub trait DppListener: Send + Sync {
    /// A configuration object was received.  `config` is owned by the
    /// listener from here on.
    fn on_success_config_received(&self, config: NetworkConfig, pre_validated: bool);

    fn on_success(&self, event: DppEventType);

    fn on_progress(&self, code: DppProgressCode);

    fn on_failure(&self, code: DppFailureCode, detail: FailureDetail);
}

// ───────────────────────────────────────────────────────────────
// SSID translation port
// ───────────────────────────────────────────────────────────────

/// Maps an over-the-air SSID to the form the framework stores (e.g. a
/// legacy-charset SSID to its UTF-8 equivalent).
pub trait SsidTranslator {
    fn translated_ssid(&self, ssid: WifiSsid) -> WifiSsid;
}

// ───────────────────────────────────────────────────────────────
// Principal resolver port
// ───────────────────────────────────────────────────────────────

/// Resolves a system uid to the creator name stamped on new networks.
pub trait PrincipalResolver {
    fn name_for_uid(&self, uid: u32) -> Option<String>;
}

// ───────────────────────────────────────────────────────────────
// Legacy forwarding port
// ───────────────────────────────────────────────────────────────

/// Handler for every non-DPP notification.  Receives them unchanged.
pub trait LegacyCallback {
    fn forward(&mut self, notification: LegacyNotification);
}
