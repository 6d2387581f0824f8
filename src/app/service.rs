//! DPP event adapter: the hexagonal core.
//!
//! [`DppEventAdapter`] sits on the HAL callback thread.  DPP notifications
//! are translated into [`ProvisioningOutcome`]s and delivered to the
//! registered listener; every other notification is forwarded untouched to
//! the legacy handler.
//!
//! ```text
//!  HAL ──▶ dispatch ──▶ decode ──▶ DPP    ──▶ translate ──▶ ListenerSlot ──▶ DppListener
//!                               └─▶ legacy ──────────────────────────────▶ LegacyCallback
//! ```
//!
//! Nothing here returns an error or panics: unmapped codes become
//! `Invalid`, unusable configurations become a `Failure` outcome, and a
//! missing listener drops the notification with an error log.

use std::sync::Arc;

use log::{debug, error, warn};

use crate::config::AdapterConfig;
use crate::hal::wire::Bssid;
use crate::hal::{
    DppNotification, HalVersion, Inbound, LegacyNotification, StateChange, VersionedNotification,
    decode,
};

use super::codes::DppFailureCode;
use super::events::ProvisioningOutcome;
use super::listener::ListenerSlot;
use super::network::{NetworkConfig, quote_passphrase, render_key_material};
use super::ports::{LegacyCallback, PrincipalResolver, SsidTranslator};
use super::ssid::WifiSsid;
use super::translate::{classify_akm, failure_code_from_wire, progress_code_from_wire};

// ───────────────────────────────────────────────────────────────
// DppEventAdapter
// ───────────────────────────────────────────────────────────────

pub struct DppEventAdapter<T, P, L> {
    iface_name: String,
    surface: HalVersion,
    creator_uid: u32,
    listeners: Arc<ListenerSlot>,
    ssid_translator: T,
    principals: P,
    legacy: L,
}

impl<T, P, L> DppEventAdapter<T, P, L>
where
    T: SsidTranslator,
    P: PrincipalResolver,
    L: LegacyCallback,
{
    pub fn new(
        config: &AdapterConfig,
        listeners: Arc<ListenerSlot>,
        ssid_translator: T,
        principals: P,
        legacy: L,
    ) -> Self {
        Self {
            iface_name: config.iface_name.clone(),
            surface: config.surface_version,
            creator_uid: config.creator_uid,
            listeners,
            ssid_translator,
            principals,
            legacy,
        }
    }

    pub fn listeners(&self) -> &Arc<ListenerSlot> {
        &self.listeners
    }

    pub fn surface_version(&self) -> HalVersion {
        self.surface
    }

    pub fn ssid_translator(&self) -> &T {
        &self.ssid_translator
    }

    pub fn legacy_callback(&self) -> &L {
        &self.legacy
    }

    // ── Pipeline entry ────────────────────────────────────────

    /// Decode a version-tagged notification and route it.
    pub fn dispatch(&mut self, notification: VersionedNotification) {
        match decode(notification, self.surface) {
            Ok(Inbound::Dpp(n)) => self.on_dpp(n),
            Ok(Inbound::Legacy(n)) => self.forward_legacy(n),
            Err(e) => warn!("[{}] dropping notification: {}", self.iface_name, e),
        }
    }

    pub fn on_dpp(&self, notification: DppNotification) {
        match notification {
            DppNotification::SuccessConfigReceived {
                ssid,
                password,
                psk,
                akm,
            } => self.on_success_config_received(&ssid, password.as_deref(), psk.as_deref(), akm),
            DppNotification::SuccessConfigSent => self.on_success_config_sent(),
            DppNotification::Progress { code } => self.on_progress(code),
            DppNotification::Failure { code } => self.on_failure(code),
        }
    }

    // ── DPP notifications ─────────────────────────────────────

    pub fn on_success_config_received(
        &self,
        ssid: &[u8],
        password: Option<&str>,
        psk: Option<&[u8]>,
        akm: i32,
    ) {
        self.publish("on_success_config_received", || {
            self.success_outcome(ssid, password, psk, akm)
        });
    }

    pub fn on_success_config_sent(&self) {
        self.publish("on_success_config_sent", || {
            ProvisioningOutcome::SuccessConfigSent
        });
    }

    pub fn on_failure(&self, code: i32) {
        self.publish("on_failure", || {
            ProvisioningOutcome::failure(failure_code_from_wire(code))
        });
    }

    pub fn on_progress(&self, code: i32) {
        self.publish("on_progress", || ProvisioningOutcome::Progress {
            code: progress_code_from_wire(code),
        });
    }

    // ── Legacy notifications ──────────────────────────────────

    pub fn forward_legacy(&mut self, notification: LegacyNotification) {
        debug!("[{}] forwarding {}", self.iface_name, notification.name());
        self.legacy.forward(notification);
    }

    /// Plain state change.  Same as the extended shape with
    /// `fils_hlp_sent = false`.
    pub fn on_state_changed(&mut self, new_state: i32, bssid: Bssid, network_id: i32, ssid: &[u8]) {
        self.on_state_changed_with_fils(new_state, bssid, network_id, ssid, false);
    }

    pub fn on_state_changed_with_fils(
        &mut self,
        new_state: i32,
        bssid: Bssid,
        network_id: i32,
        ssid: &[u8],
        fils_hlp_sent: bool,
    ) {
        let change = StateChange::new(new_state, bssid, network_id, ssid.to_vec())
            .with_fils_hlp_sent(fils_hlp_sent);
        self.forward_legacy(LegacyNotification::StateChanged(change));
    }

    // ── Internal ──────────────────────────────────────────────

    /// Take one listener snapshot; build and deliver the outcome only if a
    /// listener is present.
    fn publish(&self, origin: &'static str, build: impl FnOnce() -> ProvisioningOutcome) {
        let Some(listener) = self.listeners.snapshot() else {
            error!("[{}] {} callback is null", self.iface_name, origin);
            return;
        };
        let outcome = build();
        debug!("[{}] {} -> {}", self.iface_name, origin, outcome.name());
        outcome.deliver(&**listener);
    }

    fn success_outcome(
        &self,
        raw_ssid: &[u8],
        password: Option<&str>,
        psk: Option<&[u8]>,
        akm: i32,
    ) -> ProvisioningOutcome {
        let ssid = match WifiSsid::from_bytes(raw_ssid) {
            Ok(ssid) => self.ssid_translator.translated_ssid(ssid),
            Err(e) => {
                error!("[{}] DPP configuration rejected: {}", self.iface_name, e);
                return ProvisioningOutcome::failure(DppFailureCode::Configuration);
            }
        };

        let Some(security) = classify_akm(akm) else {
            warn!("[{}] DPP configuration has unsupported AKM {}", self.iface_name, akm);
            return ProvisioningOutcome::failure(DppFailureCode::NotSupported);
        };

        let mut config = NetworkConfig::new(ssid.to_string(), security);
        config.pre_shared_key = match (password, psk) {
            (Some(password), _) => Some(quote_passphrase(password)),
            (None, Some(key)) => Some(render_key_material(key)),
            (None, None) => None,
        };
        config.creator_name = self.principals.name_for_uid(self.creator_uid);

        ProvisioningOutcome::SuccessConfigReceived {
            config,
            pre_validated: false,
        }
    }
}
