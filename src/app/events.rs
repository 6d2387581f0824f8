//! Normalized DPP outcomes.
//!
//! Every DPP notification, whatever surface version it came from, ends up
//! as exactly one [`ProvisioningOutcome`] (or none, if no listener is
//! registered).  The outcome is then replayed onto a
//! [`DppListener`](super::ports::DppListener).

use serde::{Deserialize, Serialize};

use super::codes::{DppEventType, DppFailureCode, DppProgressCode};
use super::network::NetworkConfig;
use super::ports::DppListener;

/// Auxiliary failure data.  Reserved; always empty from this adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    pub ssid: Option<String>,
    pub channel_list: Option<String>,
    pub band_list: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProvisioningOutcome {
    /// A configuration object was received and is usable.
    SuccessConfigReceived {
        config: NetworkConfig,
        /// Whether the credential was validated before delivery.
        pre_validated: bool,
    },
    SuccessConfigSent,
    Progress {
        code: DppProgressCode,
    },
    Failure {
        code: DppFailureCode,
        #[serde(default)]
        detail: FailureDetail,
    },
}

impl ProvisioningOutcome {
    pub fn failure(code: DppFailureCode) -> Self {
        Self::Failure {
            code,
            detail: FailureDetail::default(),
        }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SuccessConfigReceived { .. } => "success_config_received",
            Self::SuccessConfigSent => "success_config_sent",
            Self::Progress { .. } => "progress",
            Self::Failure { .. } => "failure",
        }
    }

    /// Invoke the matching listener callback.
    pub fn deliver(self, listener: &dyn DppListener) {
        match self {
            Self::SuccessConfigReceived {
                config,
                pre_validated,
            } => listener.on_success_config_received(config, pre_validated),
            Self::SuccessConfigSent => listener.on_success(DppEventType::ConfigurationSent),
            Self::Progress { code } => listener.on_progress(code),
            Self::Failure { code, detail } => listener.on_failure(code, detail),
        }
    }
}
