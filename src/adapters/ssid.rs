//! SSID translation adapters.

use crate::app::ports::SsidTranslator;
use crate::app::ssid::WifiSsid;

/// Returns every SSID unchanged.  For deployments without a legacy
/// charset policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl SsidTranslator for IdentityTranslator {
    fn translated_ssid(&self, ssid: WifiSsid) -> WifiSsid {
        ssid
    }
}
