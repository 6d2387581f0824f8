//! Fuzz target: DPP entry points with raw callback arguments
//!
//! Splits the input into `(akm, code, flags, ssid, credential)` and drives
//! every DPP entry point with and without a registered listener.
//!
//! Invariants checked:
//! - No panics under any byte sequence, including overlong SSIDs
//! - Each entry point produces exactly one callback when a listener is set
//!
//! cargo fuzz run fuzz_dpp_entry

#![no_main]

use std::sync::{Arc, Mutex};

use libfuzzer_sys::fuzz_target;
use supplicant_events::DppEventAdapter;
use supplicant_events::adapters::legacy::LogLegacyCallback;
use supplicant_events::adapters::principal::StaticPrincipalResolver;
use supplicant_events::adapters::ssid::IdentityTranslator;
use supplicant_events::app::codes::{DppEventType, DppFailureCode, DppProgressCode};
use supplicant_events::app::events::FailureDetail;
use supplicant_events::app::listener::ListenerSlot;
use supplicant_events::app::network::NetworkConfig;
use supplicant_events::app::ports::DppListener;
use supplicant_events::config::AdapterConfig;

#[derive(Clone, Default)]
struct Tally(Arc<Mutex<usize>>);

impl Tally {
    fn bump(&self) {
        *self.0.lock().unwrap() += 1;
    }
    fn take(&self) -> usize {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl DppListener for Tally {
    fn on_success_config_received(&self, _config: NetworkConfig, pre_validated: bool) {
        assert!(!pre_validated);
        self.bump();
    }
    fn on_success(&self, event: DppEventType) {
        assert_eq!(event, DppEventType::ConfigurationSent);
        self.bump();
    }
    fn on_progress(&self, _code: DppProgressCode) {
        self.bump();
    }
    fn on_failure(&self, _code: DppFailureCode, detail: FailureDetail) {
        assert_eq!(detail, FailureDetail::default());
        self.bump();
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let (head, rest) = data.split_at(9);
    let akm = i32::from_le_bytes([head[0], head[1], head[2], head[3]]);
    let code = i32::from_le_bytes([head[4], head[5], head[6], head[7]]);
    let flags = head[8];

    let mid = rest.len() / 2;
    let (ssid, credential) = rest.split_at(mid);
    let password = if flags & 1 != 0 {
        std::str::from_utf8(credential).ok()
    } else {
        None
    };
    let psk = if flags & 2 != 0 { Some(credential) } else { None };

    let config = AdapterConfig::default();
    let tally = Tally::default();
    let listeners = Arc::new(ListenerSlot::new());
    let adapter = DppEventAdapter::new(
        &config,
        Arc::clone(&listeners),
        IdentityTranslator,
        StaticPrincipalResolver::from_config(&config),
        LogLegacyCallback::new(config.iface_name.clone()),
    );

    // No listener: everything is dropped.
    adapter.on_success_config_received(ssid, password, psk, akm);
    adapter.on_progress(code);
    adapter.on_failure(code);

    listeners.register(tally.clone());
    adapter.on_success_config_received(ssid, password, psk, akm);
    assert_eq!(tally.take(), 1);
    adapter.on_success_config_sent();
    assert_eq!(tally.take(), 1);
    adapter.on_progress(code);
    assert_eq!(tally.take(), 1);
    adapter.on_failure(code);
    assert_eq!(tally.take(), 1);
});
