//! Adapter configuration.
//!
//! All values have defaults matching a stock station interface; a JSON
//! document may override any subset of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hal::HalVersion;

/// The wifi service's system uid.  New networks are attributed to it.
pub const WIFI_UID: u32 = 1010;

/// `IFNAMSIZ` minus the terminating NUL.
pub const MAX_IFACE_NAME_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Station interface the callbacks belong to (log tag only).
    pub iface_name: String,
    /// Surface generation the adapter is registered as.  Notifications
    /// tagged with a newer version are rejected.
    pub surface_version: HalVersion,
    /// Principal stamped as creator of provisioned networks.
    pub creator_uid: u32,
    /// uid → name table for the static principal resolver.
    pub principals: BTreeMap<u32, String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        let mut principals = BTreeMap::new();
        principals.insert(WIFI_UID, format!("android.uid.wifi:{WIFI_UID}"));
        Self {
            iface_name: "wlan0".into(),
            surface_version: HalVersion::LATEST,
            creator_uid: WIFI_UID,
            principals,
        }
    }
}

impl AdapterConfig {
    /// Parse a JSON document.  Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iface_name.is_empty() {
            return Err(Error::Config("iface_name must not be empty"));
        }
        if self.iface_name.len() > MAX_IFACE_NAME_LEN {
            return Err(Error::Config("iface_name longer than 15 bytes"));
        }
        if self.iface_name.bytes().any(|b| b == b'/' || b.is_ascii_whitespace()) {
            return Err(Error::Config("iface_name contains '/' or whitespace"));
        }
        Ok(())
    }
}
