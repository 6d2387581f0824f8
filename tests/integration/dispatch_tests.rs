//! Integration tests for the version-tagged dispatch pipeline.

use supplicant_events::app::codes::{DppEventType, DppFailureCode, DppProgressCode};
use supplicant_events::config::AdapterConfig;
use supplicant_events::hal::wire::{dpp_akm, dpp_failure, dpp_progress};
use supplicant_events::hal::{
    DppNotification, HalVersion, LegacyNotification, StateChange, VersionedNotification,
};

use crate::mock_ports::{
    AliasTranslator, ListenerCall, RecordingListener, adapter_with, listening_adapter,
};

fn v1_2(n: impl Into<supplicant_events::hal::Notification>) -> VersionedNotification {
    VersionedNotification::new(HalVersion::V1_2, n)
}

#[test]
fn dispatch_routes_dpp_to_listener() {
    let (mut adapter, listener) = listening_adapter();

    adapter.dispatch(v1_2(DppNotification::Progress {
        code: dpp_progress::AUTHENTICATION_SUCCESS,
    }));
    adapter.dispatch(v1_2(DppNotification::SuccessConfigSent));
    adapter.dispatch(v1_2(DppNotification::Failure {
        code: dpp_failure::NOT_COMPATIBLE,
    }));

    let calls = listener.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        ListenerCall::Progress(DppProgressCode::AuthenticationSuccess)
    );
    assert_eq!(calls[1], ListenerCall::Success(DppEventType::ConfigurationSent));
    assert!(matches!(
        calls[2],
        ListenerCall::Failure {
            code: DppFailureCode::NotCompatible,
            ..
        }
    ));
    assert!(adapter.legacy_callback().forwarded.is_empty());
}

#[test]
fn dispatch_routes_success_config_through_translation() {
    let (mut adapter, listener) = listening_adapter();

    adapter.dispatch(v1_2(DppNotification::SuccessConfigReceived {
        ssid: b"Net".to_vec(),
        password: Some("pw".into()),
        psk: None,
        akm: dpp_akm::SAE,
    }));

    match listener.single() {
        ListenerCall::ConfigReceived { config, .. } => {
            assert_eq!(config.pre_shared_key.as_deref(), Some("\"pw\""));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn dispatch_routes_legacy_to_handler() {
    let (mut adapter, listener) = listening_adapter();

    adapter.dispatch(VersionedNotification::new(
        HalVersion::V1_0,
        LegacyNotification::NetworkAdded { id: 3 },
    ));

    assert_eq!(
        adapter.legacy_callback().forwarded,
        vec![LegacyNotification::NetworkAdded { id: 3 }]
    );
    assert!(listener.calls().is_empty());
}

#[test]
fn dpp_tagged_with_pre_dpp_version_is_dropped() {
    let (mut adapter, listener) = listening_adapter();

    for version in [HalVersion::V1_0, HalVersion::V1_1] {
        adapter.dispatch(VersionedNotification::new(
            version,
            DppNotification::SuccessConfigSent,
        ));
    }

    assert!(listener.calls().is_empty());
    assert!(adapter.legacy_callback().forwarded.is_empty());
}

#[test]
fn notification_newer_than_surface_is_dropped() {
    let config = AdapterConfig {
        surface_version: HalVersion::V1_1,
        ..AdapterConfig::default()
    };
    let mut adapter = adapter_with(&config, AliasTranslator::identity());
    let listener = RecordingListener::new();
    adapter.listeners().register(listener.clone());

    adapter.dispatch(v1_2(LegacyNotification::NetworkAdded { id: 1 }));
    adapter.dispatch(v1_2(DppNotification::SuccessConfigSent));

    assert!(listener.calls().is_empty());
    assert!(adapter.legacy_callback().forwarded.is_empty());
}

#[test]
fn v1_1_state_change_loses_fils_flag() {
    let (mut adapter, _) = listening_adapter();
    let change = StateChange::new(9, [0; 6], 0, b"Net".to_vec()).with_fils_hlp_sent(true);

    adapter.dispatch(VersionedNotification::new(
        HalVersion::V1_1,
        LegacyNotification::StateChanged(change.clone()),
    ));

    assert_eq!(
        adapter.legacy_callback().forwarded,
        vec![LegacyNotification::StateChanged(
            change.with_fils_hlp_sent(false)
        )]
    );
}

#[test]
fn json_lines_drive_the_pipeline() {
    let (mut adapter, listener) = listening_adapter();
    let lines = [
        r#"{"version":"1.2","notification":{"event":"progress","code":1}}"#,
        r#"{"version":"1.2","notification":{"event":"success_config_received","ssid":[78,101,116],"psk":[1,2],"akm":0}}"#,
        r#"{"version":"1.0","notification":{"event":"wps_event_pbc_overlap"}}"#,
    ];

    for line in lines {
        let n: VersionedNotification = serde_json::from_str(line).unwrap();
        adapter.dispatch(n);
    }

    let calls = listener.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], ListenerCall::Progress(DppProgressCode::ResponsePending));
    match &calls[1] {
        ListenerCall::ConfigReceived { config, .. } => {
            assert_eq!(config.ssid, "\"Net\"");
            assert_eq!(config.pre_shared_key.as_deref(), Some("[1, 2]"));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        adapter.legacy_callback().forwarded,
        vec![LegacyNotification::WpsEventPbcOverlap]
    );
}
