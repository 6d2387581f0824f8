//! Raw SSID octets and their display form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Maximum SSID length in octets (IEEE 802.11).
pub const MAX_SSID_OCTETS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsidError {
    /// More than [`MAX_SSID_OCTETS`] octets.
    TooLong(usize),
}

impl fmt::Display for SsidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong(len) => {
                write!(f, "SSID is {len} octets (max {MAX_SSID_OCTETS})")
            }
        }
    }
}

impl std::error::Error for SsidError {}

/// An SSID exactly as it travels over the air.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WifiSsid {
    octets: heapless::Vec<u8, MAX_SSID_OCTETS>,
}

impl WifiSsid {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SsidError> {
        let octets =
            heapless::Vec::from_slice(bytes).map_err(|_| SsidError::TooLong(bytes.len()))?;
        Ok(Self { octets })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.octets
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// The SSID as UTF-8, if it decodes.
    pub fn as_utf8(&self) -> Option<&str> {
        core::str::from_utf8(&self.octets).ok()
    }
}

/// UTF-8 SSIDs render quoted (`"HomeNet"`); anything else renders as
/// unquoted lowercase hex.
impl fmt::Display for WifiSsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_utf8() {
            Some(s) => write!(f, "\"{s}\""),
            None => write!(f, "{}", hex::encode(&self.octets)),
        }
    }
}
