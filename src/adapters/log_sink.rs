//! Log-based listener adapter.
//!
//! Implements [`DppListener`] by writing every outcome to the `log`
//! facade.  Useful as a default registration and in the replay tool.

use log::info;

use crate::app::codes::{DppEventType, DppFailureCode, DppProgressCode};
use crate::app::events::FailureDetail;
use crate::app::network::NetworkConfig;
use crate::app::ports::DppListener;

/// Listener that logs each DPP outcome.
#[derive(Debug, Default)]
pub struct LogListener;

impl LogListener {
    pub fn new() -> Self {
        Self
    }
}

impl DppListener for LogListener {
    fn on_success_config_received(&self, config: NetworkConfig, pre_validated: bool) {
        info!(
            "DPP | config received | ssid={} security={:?} key={} creator={} pre_validated={}",
            config.ssid,
            config.security,
            if config.pre_shared_key.is_some() { "set" } else { "unset" },
            config.creator_name.as_deref().unwrap_or("-"),
            pre_validated,
        );
    }

    fn on_success(&self, event: DppEventType) {
        info!("DPP | success | {:?}", event);
    }

    fn on_progress(&self, code: DppProgressCode) {
        info!("DPP | progress | {} ({})", code, code.code());
    }

    fn on_failure(&self, code: DppFailureCode, _detail: FailureDetail) {
        info!("DPP | failure | {} ({})", code, code.code());
    }
}
