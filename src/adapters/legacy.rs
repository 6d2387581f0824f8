//! Log-based legacy handler.
//!
//! Stands in for the pre-DPP callback handler when the shim runs without
//! one (replay tool, bring-up).  Every forwarded notification is logged
//! with the interface tag; nothing is acted upon.

use log::info;

use crate::app::ports::LegacyCallback;
use crate::hal::LegacyNotification;

#[derive(Debug)]
pub struct LogLegacyCallback {
    iface_name: String,
    forwarded: u64,
}

impl LogLegacyCallback {
    pub fn new(iface_name: impl Into<String>) -> Self {
        Self {
            iface_name: iface_name.into(),
            forwarded: 0,
        }
    }

    /// Number of notifications forwarded so far.
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }
}

impl LegacyCallback for LogLegacyCallback {
    fn forward(&mut self, notification: LegacyNotification) {
        self.forwarded += 1;
        let tag = &self.iface_name;
        match &notification {
            LegacyNotification::NetworkAdded { id } | LegacyNotification::NetworkRemoved { id } => {
                info!("[{}] {} id={}", tag, notification.name(), id);
            }
            LegacyNotification::StateChanged(s) => {
                info!(
                    "[{}] state_changed state={} bssid={} network_id={} fils_hlp_sent={}",
                    tag,
                    s.new_state,
                    hex::encode(s.bssid),
                    s.network_id,
                    s.fils_hlp_sent,
                );
            }
            LegacyNotification::Disconnected {
                bssid,
                locally_generated,
                reason_code,
            } => {
                info!(
                    "[{}] disconnected bssid={} locally_generated={} reason={}",
                    tag,
                    hex::encode(bssid),
                    locally_generated,
                    reason_code,
                );
            }
            LegacyNotification::AssociationRejected {
                bssid,
                status_code,
                timed_out,
            } => {
                info!(
                    "[{}] association_rejected bssid={} status={} timed_out={}",
                    tag,
                    hex::encode(bssid),
                    status_code,
                    timed_out,
                );
            }
            LegacyNotification::EapFailure { code } => {
                info!("[{}] eap_failure code={:?}", tag, code);
            }
            other => info!("[{}] {}", tag, other.name()),
        }
    }
}
