//! Integration tests for the legacy forwarding path.
//!
//! Non-DPP notifications must reach the legacy handler unchanged and must
//! never touch the DPP listener.

use supplicant_events::hal::{AnqpData, Hs20AnqpData, LegacyNotification, StateChange};

use crate::mock_ports::listening_adapter;

const BSSID: [u8; 6] = [0x02, 0x11, 0x22, 0x33, 0x44, 0x55];

#[test]
fn every_legacy_shape_is_forwarded_unchanged() {
    let (mut adapter, listener) = listening_adapter();
    let notifications = vec![
        LegacyNotification::NetworkAdded { id: 1 },
        LegacyNotification::NetworkRemoved { id: 1 },
        LegacyNotification::StateChanged(StateChange::new(9, BSSID, 1, b"Net".to_vec())),
        LegacyNotification::AnqpQueryDone {
            bssid: BSSID,
            data: AnqpData {
                domain_name: b"example.com".to_vec(),
                ..AnqpData::default()
            },
            hs20_data: Hs20AnqpData::default(),
        },
        LegacyNotification::Hs20IconQueryDone {
            bssid: BSSID,
            file_name: "icon.png".into(),
            data: vec![0x89, 0x50],
        },
        LegacyNotification::Hs20SubscriptionRemediation {
            bssid: BSSID,
            osu_method: 1,
            url: "https://osu.example.com".into(),
        },
        LegacyNotification::Hs20DeauthImminentNotice {
            bssid: BSSID,
            reason_code: 1,
            reauth_delay_secs: 60,
            url: "https://example.com".into(),
        },
        LegacyNotification::Disconnected {
            bssid: BSSID,
            locally_generated: true,
            reason_code: 3,
        },
        LegacyNotification::AssociationRejected {
            bssid: BSSID,
            status_code: 17,
            timed_out: false,
        },
        LegacyNotification::AuthenticationTimeout { bssid: BSSID },
        LegacyNotification::BssidChanged {
            reason: 1,
            bssid: BSSID,
        },
        LegacyNotification::EapFailure { code: Some(1031) },
        LegacyNotification::WpsEventSuccess,
        LegacyNotification::WpsEventFail {
            bssid: BSSID,
            config_error: 18,
            error_ind: 0,
        },
        LegacyNotification::WpsEventPbcOverlap,
        LegacyNotification::ExtRadioWorkStart { id: 5 },
        LegacyNotification::ExtRadioWorkTimeout { id: 5 },
    ];

    for n in notifications.clone() {
        adapter.forward_legacy(n);
    }

    assert_eq!(adapter.legacy_callback().forwarded, notifications);
    assert!(listener.calls().is_empty());
}

#[test]
fn plain_state_change_equals_extended_with_false() {
    let (mut plain, _) = listening_adapter();
    let (mut extended, _) = listening_adapter();

    plain.on_state_changed(9, BSSID, 2, b"Net");
    extended.on_state_changed_with_fils(9, BSSID, 2, b"Net", false);

    assert_eq!(
        plain.legacy_callback().forwarded,
        extended.legacy_callback().forwarded
    );
}

#[test]
fn extended_state_change_carries_fils_flag() {
    let (mut adapter, _) = listening_adapter();

    adapter.on_state_changed_with_fils(9, BSSID, 2, b"Net", true);

    assert_eq!(
        adapter.legacy_callback().forwarded,
        vec![LegacyNotification::StateChanged(
            StateChange::new(9, BSSID, 2, b"Net".to_vec()).with_fils_hlp_sent(true)
        )]
    );
}
