//! Inbound notification shapes, tagged with the HAL surface version that
//! produced them.
//!
//! Every callback the station interface can deliver is represented here as
//! plain data.  DPP notifications are translated by this crate; everything
//! else is [`LegacyNotification`] and is forwarded untouched.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::wire::Bssid;

// ───────────────────────────────────────────────────────────────
// Version tag
// ───────────────────────────────────────────────────────────────

/// Callback surface generation.  Ordered oldest → newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HalVersion {
    #[serde(rename = "1.0")]
    V1_0,
    #[serde(rename = "1.1")]
    V1_1,
    #[serde(rename = "1.2")]
    V1_2,
}

impl HalVersion {
    /// The newest surface this crate understands.
    pub const LATEST: Self = Self::V1_2;
}

impl fmt::Display for HalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_0 => write!(f, "1.0"),
            Self::V1_1 => write!(f, "1.1"),
            Self::V1_2 => write!(f, "1.2"),
        }
    }
}

/// A notification together with the surface version it arrived on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedNotification {
    pub version: HalVersion,
    pub notification: Notification,
}

impl VersionedNotification {
    pub fn new(version: HalVersion, notification: impl Into<Notification>) -> Self {
        Self {
            version,
            notification: notification.into(),
        }
    }
}

/// Either a DPP notification (translated here) or a legacy one (forwarded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Notification {
    Dpp(DppNotification),
    Legacy(LegacyNotification),
}

impl From<DppNotification> for Notification {
    fn from(n: DppNotification) -> Self {
        Self::Dpp(n)
    }
}

impl From<LegacyNotification> for Notification {
    fn from(n: LegacyNotification) -> Self {
        Self::Legacy(n)
    }
}

// ───────────────────────────────────────────────────────────────
// DPP notifications (added in V1.2)
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DppNotification {
    /// The enrollee received a configuration object.
    SuccessConfigReceived {
        ssid: Vec<u8>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        psk: Option<Vec<u8>>,
        akm: i32,
    },
    /// The configurator sent its configuration object.
    SuccessConfigSent,
    Progress {
        code: i32,
    },
    Failure {
        code: i32,
    },
}

// ───────────────────────────────────────────────────────────────
// Legacy notifications (V1.0 / V1.1)
// ───────────────────────────────────────────────────────────────

/// Supplicant state change.  `fils_hlp_sent` is only meaningful on the
/// extended shape; the plain shape always carries `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub new_state: i32,
    pub bssid: Bssid,
    pub network_id: i32,
    pub ssid: Vec<u8>,
    #[serde(default)]
    pub fils_hlp_sent: bool,
}

impl StateChange {
    pub fn new(new_state: i32, bssid: Bssid, network_id: i32, ssid: Vec<u8>) -> Self {
        Self {
            new_state,
            bssid,
            network_id,
            ssid,
            fils_hlp_sent: false,
        }
    }

    #[must_use]
    pub fn with_fils_hlp_sent(mut self, fils_hlp_sent: bool) -> Self {
        self.fils_hlp_sent = fils_hlp_sent;
        self
    }
}

/// ANQP elements returned by a query.  Each field is the raw element body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnqpData {
    pub venue_name: Vec<u8>,
    pub roaming_consortium: Vec<u8>,
    pub ip_addr_type_availability: Vec<u8>,
    pub nai_realm: Vec<u8>,
    pub anqp_3gpp_cellular_network: Vec<u8>,
    pub domain_name: Vec<u8>,
}

/// Hotspot 2.0 ANQP elements returned by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hs20AnqpData {
    pub operator_friendly_name: Vec<u8>,
    pub wan_metrics: Vec<u8>,
    pub connection_capability: Vec<u8>,
    pub osu_providers_list: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LegacyNotification {
    NetworkAdded {
        id: i32,
    },
    NetworkRemoved {
        id: i32,
    },
    StateChanged(StateChange),
    AnqpQueryDone {
        bssid: Bssid,
        data: AnqpData,
        hs20_data: Hs20AnqpData,
    },
    Hs20IconQueryDone {
        bssid: Bssid,
        file_name: String,
        data: Vec<u8>,
    },
    Hs20SubscriptionRemediation {
        bssid: Bssid,
        osu_method: u8,
        url: String,
    },
    Hs20DeauthImminentNotice {
        bssid: Bssid,
        reason_code: i32,
        reauth_delay_secs: i32,
        url: String,
    },
    Disconnected {
        bssid: Bssid,
        locally_generated: bool,
        reason_code: i32,
    },
    AssociationRejected {
        bssid: Bssid,
        status_code: i32,
        timed_out: bool,
    },
    AuthenticationTimeout {
        bssid: Bssid,
    },
    BssidChanged {
        reason: u8,
        bssid: Bssid,
    },
    /// EAP failure.  The code only exists from V1.1 onwards.
    EapFailure {
        #[serde(default)]
        code: Option<i32>,
    },
    WpsEventSuccess,
    WpsEventFail {
        bssid: Bssid,
        config_error: i16,
        error_ind: i16,
    },
    WpsEventPbcOverlap,
    ExtRadioWorkStart {
        id: i32,
    },
    ExtRadioWorkTimeout {
        id: i32,
    },
}

impl LegacyNotification {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NetworkAdded { .. } => "network_added",
            Self::NetworkRemoved { .. } => "network_removed",
            Self::StateChanged(_) => "state_changed",
            Self::AnqpQueryDone { .. } => "anqp_query_done",
            Self::Hs20IconQueryDone { .. } => "hs20_icon_query_done",
            Self::Hs20SubscriptionRemediation { .. } => "hs20_subscription_remediation",
            Self::Hs20DeauthImminentNotice { .. } => "hs20_deauth_imminent_notice",
            Self::Disconnected { .. } => "disconnected",
            Self::AssociationRejected { .. } => "association_rejected",
            Self::AuthenticationTimeout { .. } => "authentication_timeout",
            Self::BssidChanged { .. } => "bssid_changed",
            Self::EapFailure { .. } => "eap_failure",
            Self::WpsEventSuccess => "wps_event_success",
            Self::WpsEventFail { .. } => "wps_event_fail",
            Self::WpsEventPbcOverlap => "wps_event_pbc_overlap",
            Self::ExtRadioWorkStart { .. } => "ext_radio_work_start",
            Self::ExtRadioWorkTimeout { .. } => "ext_radio_work_timeout",
        }
    }
}
