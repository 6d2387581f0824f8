//! Raw wire codes of the V1.2 station-interface callback surface.
//!
//! These are the integers the HAL transport hands us.  They are opaque
//! until translated by [`crate::app::translate`]; nothing outside this
//! crate should compare against them directly.

/// Authentication and key-management identifiers carried by a DPP
/// configuration object.
pub mod dpp_akm {
    pub const PSK: i32 = 0;
    pub const PSK_SAE: i32 = 1;
    pub const SAE: i32 = 2;
    /// DPP connector AKM.  Not supported for configuration provisioning.
    pub const DPP: i32 = 3;
}

/// DPP failure codes as reported by the supplicant.
pub mod dpp_failure {
    pub const INVALID_URI: i32 = 0;
    pub const AUTHENTICATION: i32 = 1;
    pub const NOT_COMPATIBLE: i32 = 2;
    pub const CONFIGURATION: i32 = 3;
    pub const BUSY: i32 = 4;
    pub const TIMEOUT: i32 = 5;
    pub const FAILURE: i32 = 6;
    pub const NOT_SUPPORTED: i32 = 7;
}

/// DPP progress codes as reported by the supplicant.
pub mod dpp_progress {
    pub const AUTHENTICATION_SUCCESS: i32 = 0;
    pub const RESPONSE_PENDING: i32 = 1;
}

/// Length of a BSSID (MAC address) in octets.
pub const BSSID_LEN: usize = 6;

/// A BSSID exactly as delivered by the HAL.
pub type Bssid = [u8; BSSID_LEN];
