//! Fuzz target: JSON notification decoding and dispatch
//!
//! Feeds arbitrary bytes through the replay tool's input path: parse a
//! `VersionedNotification`, then dispatch it against every surface version.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - A listener sees at most one callback per dispatched notification
//!
//! cargo fuzz run fuzz_notification_json

#![no_main]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

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
use supplicant_events::hal::{HalVersion, VersionedNotification};

#[derive(Clone, Default)]
struct Counter(Arc<AtomicUsize>);

impl DppListener for Counter {
    fn on_success_config_received(&self, _config: NetworkConfig, _pre_validated: bool) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
    fn on_success(&self, _event: DppEventType) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
    fn on_progress(&self, _code: DppProgressCode) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
    fn on_failure(&self, _code: DppFailureCode, _detail: FailureDetail) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(notification) = serde_json::from_slice::<VersionedNotification>(data) else {
        return;
    };

    for surface in [HalVersion::V1_0, HalVersion::V1_1, HalVersion::V1_2] {
        let config = AdapterConfig {
            surface_version: surface,
            ..AdapterConfig::default()
        };
        let counter = Counter::default();
        let listeners = Arc::new(ListenerSlot::new());
        listeners.register(counter.clone());

        let mut adapter = DppEventAdapter::new(
            &config,
            listeners,
            IdentityTranslator,
            StaticPrincipalResolver::from_config(&config),
            LogLegacyCallback::new(config.iface_name.clone()),
        );
        adapter.dispatch(notification.clone());

        assert!(counter.0.load(Ordering::Relaxed) <= 1);
    }
});
