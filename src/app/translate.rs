//! Wire → framework translation tables.
//!
//! Pure functions.  Unknown wire values never fail: codes collapse to
//! their `Invalid` member (logged), AKMs collapse to `None`.

use log::error;

use crate::hal::wire::{dpp_akm, dpp_failure, dpp_progress};

use super::codes::{DppFailureCode, DppProgressCode};
use super::network::SecurityKind;

pub fn failure_code_from_wire(code: i32) -> DppFailureCode {
    match code {
        dpp_failure::INVALID_URI => DppFailureCode::InvalidUri,
        dpp_failure::AUTHENTICATION => DppFailureCode::Authentication,
        dpp_failure::NOT_COMPATIBLE => DppFailureCode::NotCompatible,
        dpp_failure::CONFIGURATION => DppFailureCode::Configuration,
        dpp_failure::BUSY => DppFailureCode::Busy,
        dpp_failure::TIMEOUT => DppFailureCode::Timeout,
        dpp_failure::FAILURE => DppFailureCode::Failure,
        dpp_failure::NOT_SUPPORTED => DppFailureCode::NotSupported,
        other => {
            error!("Invalid DppFailureCode received: {}", other);
            DppFailureCode::Invalid
        }
    }
}

pub fn progress_code_from_wire(code: i32) -> DppProgressCode {
    match code {
        dpp_progress::AUTHENTICATION_SUCCESS => DppProgressCode::AuthenticationSuccess,
        dpp_progress::RESPONSE_PENDING => DppProgressCode::ResponsePending,
        other => {
            error!("Invalid DppProgressCode received: {}", other);
            DppProgressCode::Invalid
        }
    }
}

/// Classify a provisioned AKM.  `None` means the network cannot be
/// configured from this event.
pub fn classify_akm(akm: i32) -> Option<SecurityKind> {
    match akm {
        dpp_akm::SAE => Some(SecurityKind::Sae),
        dpp_akm::PSK_SAE | dpp_akm::PSK => Some(SecurityKind::Psk),
        _ => None,
    }
}
