//! Network configuration produced by a successful DPP exchange.
//!
//! This is the descriptor handed to the listener.  Once delivered it is
//! owned by whichever configuration store the listener feeds.

use serde::{Deserialize, Serialize};

/// Security classification of a provisioned network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityKind {
    /// WPA3-Personal.
    Sae,
    /// WPA2-Personal (also used for PSK/SAE transition networks).
    Psk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkStatus {
    /// Eligible for auto-join.  Every provisioned network starts here.
    Enabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Display form of the (translated) SSID.
    pub ssid: String,
    /// Quoted passphrase or rendered key material.  `None` when the
    /// configurator sent neither.
    pub pre_shared_key: Option<String>,
    pub security: SecurityKind,
    pub creator_name: Option<String>,
    pub status: NetworkStatus,
}

impl NetworkConfig {
    pub fn new(ssid: String, security: SecurityKind) -> Self {
        Self {
            ssid,
            pre_shared_key: None,
            security,
            creator_name: None,
            status: NetworkStatus::Enabled,
        }
    }
}

/// Wrap a passphrase in the double quotes the configuration store uses to
/// tell passphrases apart from raw keys.
pub fn quote_passphrase(password: &str) -> String {
    format!("\"{password}\"")
}

/// Render raw key material as a signed-octet array, e.g. `[1, 2, -3]`.
pub fn render_key_material(key: &[u8]) -> String {
    let signed: Vec<i8> = key.iter().map(|&b| b as i8).collect();
    format!("{signed:?}")
}
