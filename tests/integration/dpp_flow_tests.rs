//! Integration tests for the DPP translation path.
//!
//! Drives the four DPP entry points and checks exactly what the listener
//! receives.

use supplicant_events::app::codes::{DppEventType, DppFailureCode, DppProgressCode};
use supplicant_events::app::events::FailureDetail;
use supplicant_events::app::network::{NetworkStatus, SecurityKind};
use supplicant_events::config::AdapterConfig;
use supplicant_events::hal::wire::{dpp_akm, dpp_failure, dpp_progress};

use crate::mock_ports::{
    AliasTranslator, ListenerCall, RecordingListener, adapter_with, listening_adapter,
    silent_adapter,
};

fn received_config(call: ListenerCall) -> (supplicant_events::app::network::NetworkConfig, bool) {
    match call {
        ListenerCall::ConfigReceived {
            config,
            pre_validated,
        } => (config, pre_validated),
        other => panic!("expected config, got {:?}", other),
    }
}

// ── Success with configuration ────────────────────────────────

#[test]
fn sae_passphrase_config_is_delivered() {
    let (adapter, listener) = listening_adapter();

    adapter.on_success_config_received(b"HomeNet", Some("hunter2"), None, dpp_akm::SAE);

    let (config, pre_validated) = received_config(listener.single());
    assert!(!pre_validated);
    assert_eq!(config.ssid, "\"HomeNet\"");
    assert_eq!(config.pre_shared_key.as_deref(), Some("\"hunter2\""));
    assert_eq!(config.security, SecurityKind::Sae);
    assert_eq!(config.status, NetworkStatus::Enabled);
    assert_eq!(config.creator_name.as_deref(), Some("android.uid.wifi:1010"));
}

#[test]
fn psk_and_transition_akms_classify_as_psk() {
    for akm in [dpp_akm::PSK, dpp_akm::PSK_SAE] {
        let (adapter, listener) = listening_adapter();
        adapter.on_success_config_received(b"Net", Some("password1"), None, akm);

        let (config, _) = received_config(listener.single());
        assert_eq!(config.security, SecurityKind::Psk, "akm {akm}");
        assert!(listener.failures().is_empty());
    }
}

#[test]
fn key_material_is_rendered_as_array() {
    let (adapter, listener) = listening_adapter();
    let psk = [0x01, 0x7F, 0x80, 0xFF];

    adapter.on_success_config_received(b"Net", None, Some(&psk), dpp_akm::PSK);

    let (config, _) = received_config(listener.single());
    assert_eq!(config.pre_shared_key.as_deref(), Some("[1, 127, -128, -1]"));
}

#[test]
fn missing_credential_still_builds_config() {
    let (adapter, listener) = listening_adapter();

    adapter.on_success_config_received(b"Open", None, None, dpp_akm::SAE);

    let (config, _) = received_config(listener.single());
    assert!(config.pre_shared_key.is_none());
    assert_eq!(config.ssid, "\"Open\"");
}

#[test]
fn unsupported_akm_emits_single_not_supported_failure() {
    let (adapter, listener) = listening_adapter();

    adapter.on_success_config_received(b"Net", Some("pw"), None, dpp_akm::DPP);

    assert_eq!(
        listener.single(),
        ListenerCall::Failure {
            code: DppFailureCode::NotSupported,
            detail: FailureDetail::default(),
        }
    );
}

#[test]
fn ssid_passes_through_translator() {
    let translator = AliasTranslator::new(&[0xC4, 0xE3, 0xBA, 0xC3], "你好".as_bytes());
    let adapter = adapter_with(&AdapterConfig::default(), translator);
    let listener = RecordingListener::new();
    adapter.listeners().register(listener.clone());

    adapter.on_success_config_received(&[0xC4, 0xE3, 0xBA, 0xC3], Some("pw"), None, dpp_akm::SAE);

    let (config, _) = received_config(listener.single());
    assert_eq!(config.ssid, "\"你好\"");
}

#[test]
fn non_utf8_ssid_renders_as_hex() {
    let (adapter, listener) = listening_adapter();

    adapter.on_success_config_received(&[0xFF, 0x00, 0x10], Some("pw"), None, dpp_akm::SAE);

    let (config, _) = received_config(listener.single());
    assert_eq!(config.ssid, "ff0010");
}

#[test]
fn unknown_creator_uid_leaves_creator_unset() {
    let config = AdapterConfig {
        creator_uid: 4242,
        ..AdapterConfig::default()
    };
    let adapter = adapter_with(&config, AliasTranslator::identity());
    let listener = RecordingListener::new();
    adapter.listeners().register(listener.clone());

    adapter.on_success_config_received(b"Net", Some("pw"), None, dpp_akm::SAE);

    let (config, _) = received_config(listener.single());
    assert!(config.creator_name.is_none());
}

// ── Config sent / progress / failure ──────────────────────────

#[test]
fn config_sent_maps_to_success_event() {
    let (adapter, listener) = listening_adapter();
    adapter.on_success_config_sent();
    assert_eq!(
        listener.single(),
        ListenerCall::Success(DppEventType::ConfigurationSent)
    );
}

#[test]
fn progress_codes_are_translated() {
    let (adapter, listener) = listening_adapter();

    adapter.on_progress(dpp_progress::AUTHENTICATION_SUCCESS);
    adapter.on_progress(dpp_progress::RESPONSE_PENDING);
    adapter.on_progress(17);

    assert_eq!(
        listener.calls(),
        vec![
            ListenerCall::Progress(DppProgressCode::AuthenticationSuccess),
            ListenerCall::Progress(DppProgressCode::ResponsePending),
            ListenerCall::Progress(DppProgressCode::Invalid),
        ]
    );
}

#[test]
fn failure_codes_are_translated_with_empty_detail() {
    let (adapter, listener) = listening_adapter();

    adapter.on_failure(dpp_failure::BUSY);
    adapter.on_failure(dpp_failure::TIMEOUT);
    adapter.on_failure(-5);

    assert_eq!(
        listener.failures(),
        vec![
            DppFailureCode::Busy,
            DppFailureCode::Timeout,
            DppFailureCode::Invalid
        ]
    );
    for call in listener.calls() {
        if let ListenerCall::Failure { detail, .. } = call {
            assert_eq!(detail, FailureDetail::default());
        }
    }
}

// ── Listener presence ─────────────────────────────────────────

#[test]
fn absent_listener_drops_everything_without_panicking() {
    let adapter = silent_adapter();

    adapter.on_success_config_received(b"Net", Some("pw"), None, dpp_akm::SAE);
    adapter.on_success_config_received(b"Net", Some("pw"), None, 99);
    adapter.on_success_config_sent();
    adapter.on_progress(dpp_progress::RESPONSE_PENDING);
    adapter.on_failure(dpp_failure::FAILURE);

    // Registering afterwards must not replay anything.
    let listener = RecordingListener::new();
    adapter.listeners().register(listener.clone());
    assert!(listener.calls().is_empty());
}

#[test]
fn absent_listener_skips_ssid_translation() {
    let adapter = adapter_with(&AdapterConfig::default(), AliasTranslator::identity());
    adapter.on_success_config_received(b"Net", Some("pw"), None, dpp_akm::SAE);
    assert_eq!(adapter_translator_calls(&adapter), 0);
}

#[test]
fn swapped_listener_receives_subsequent_outcomes_only() {
    let (adapter, first) = listening_adapter();
    adapter.on_progress(dpp_progress::AUTHENTICATION_SUCCESS);

    let second = RecordingListener::new();
    adapter.listeners().register(second.clone());
    adapter.on_progress(dpp_progress::RESPONSE_PENDING);

    assert_eq!(
        first.single(),
        ListenerCall::Progress(DppProgressCode::AuthenticationSuccess)
    );
    assert_eq!(
        second.single(),
        ListenerCall::Progress(DppProgressCode::ResponsePending)
    );
}

#[test]
fn cleared_listener_stops_delivery() {
    let (adapter, listener) = listening_adapter();
    adapter.listeners().clear();
    adapter.on_success_config_sent();
    assert!(listener.calls().is_empty());
}

fn adapter_translator_calls(adapter: &crate::mock_ports::TestAdapter) -> u32 {
    adapter.ssid_translator().calls.get()
}
