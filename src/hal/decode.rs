//! Version dispatch table.
//!
//! Each surface generation gets one decoder.  A decoder normalises the
//! notification to what that generation can actually express and splits
//! it into the DPP path or the legacy forwarding path:
//!
//! ```text
//!  VersionedNotification ──▶ DECODERS[version] ──▶ Inbound::Dpp    ──▶ translate
//!                                              └─▶ Inbound::Legacy ──▶ forward
//! ```

use core::fmt;

use super::notification::{
    DppNotification, HalVersion, LegacyNotification, Notification, VersionedNotification,
};

/// Decoded notification, ready for the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Dpp(DppNotification),
    Legacy(LegacyNotification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The notification claims a newer surface than the adapter is registered as.
    NewerThanSurface {
        version: HalVersion,
        surface: HalVersion,
    },
    /// The notification kind does not exist in the claimed surface version.
    NotInVersion {
        kind: &'static str,
        version: HalVersion,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewerThanSurface { version, surface } => {
                write!(f, "notification version {version} is newer than surface {surface}")
            }
            Self::NotInVersion { kind, version } => {
                write!(f, "{kind} notifications do not exist in version {version}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

type DecodeFn = fn(Notification) -> Result<Inbound, DecodeError>;

struct VersionDecoder {
    version: HalVersion,
    decode: DecodeFn,
}

const DECODERS: [VersionDecoder; 3] = [
    VersionDecoder {
        version: HalVersion::V1_0,
        decode: decode_v1_0,
    },
    VersionDecoder {
        version: HalVersion::V1_1,
        decode: decode_v1_1,
    },
    VersionDecoder {
        version: HalVersion::V1_2,
        decode: decode_v1_2,
    },
];

/// Decode `n` for an adapter registered as `surface`.
pub fn decode(n: VersionedNotification, surface: HalVersion) -> Result<Inbound, DecodeError> {
    if n.version > surface {
        return Err(DecodeError::NewerThanSurface {
            version: n.version,
            surface,
        });
    }
    let decoder = DECODERS
        .iter()
        .find(|d| d.version == n.version)
        .map_or(decode_v1_2 as DecodeFn, |d| d.decode);
    decoder(n.notification)
}

// ── Per-version decoders ──────────────────────────────────────

fn decode_v1_0(n: Notification) -> Result<Inbound, DecodeError> {
    match legacy_only(n, HalVersion::V1_0)? {
        LegacyNotification::EapFailure { .. } => {
            Ok(Inbound::Legacy(LegacyNotification::EapFailure { code: None }))
        }
        other => Ok(Inbound::Legacy(other)),
    }
}

fn decode_v1_1(n: Notification) -> Result<Inbound, DecodeError> {
    legacy_only(n, HalVersion::V1_1).map(Inbound::Legacy)
}

fn decode_v1_2(n: Notification) -> Result<Inbound, DecodeError> {
    Ok(match n {
        Notification::Dpp(d) => Inbound::Dpp(d),
        Notification::Legacy(l) => Inbound::Legacy(l),
    })
}

/// Pre-DPP surfaces: legacy notifications only, and the state-change
/// shape has no FILS flag.
fn legacy_only(n: Notification, version: HalVersion) -> Result<LegacyNotification, DecodeError> {
    match n {
        Notification::Dpp(_) => Err(DecodeError::NotInVersion { kind: "dpp", version }),
        Notification::Legacy(LegacyNotification::StateChanged(s)) => {
            Ok(LegacyNotification::StateChanged(s.with_fils_hlp_sent(false)))
        }
        Notification::Legacy(l) => Ok(l),
    }
}
