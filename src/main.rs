//! DPP replay tool.
//!
//! Reads version-tagged HAL notifications as JSON lines on stdin, runs them
//! through [`DppEventAdapter`] and prints every normalized outcome as a JSON
//! line on stdout.  Legacy notifications are logged to stderr.
//!
//! ```text
//!   stdin (JSON lines) ──▶ DppEventAdapter ──▶ OUTCOME_CHANNEL   ──▶ stdout
//!                                └──────────▶ LogLegacyCallback ──▶ stderr
//! ```
//!
//! Usage: `dpp-replay [config.json] < notifications.jsonl`
//! Log level follows `RUST_LOG` (default `info`).

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use supplicant_events::DppEventAdapter;
use supplicant_events::adapters::channel::{ChannelListener, OUTCOME_CHANNEL, drain_outcomes};
use supplicant_events::adapters::legacy::LogLegacyCallback;
use supplicant_events::adapters::principal::StaticPrincipalResolver;
use supplicant_events::adapters::ssid::IdentityTranslator;
use supplicant_events::app::events::ProvisioningOutcome;
use supplicant_events::app::listener::ListenerSlot;
use supplicant_events::config::AdapterConfig;
use supplicant_events::hal::VersionedNotification;

// ── Stdout writer ─────────────────────────────────────────────

/// One self-describing JSON object per line.
fn write_outcome(out: &mut impl Write, outcome: &ProvisioningOutcome) {
    let line = match serde_json::to_string(outcome) {
        Ok(line) => line,
        Err(e) => {
            warn!("cannot serialise {}: {}", outcome.name(), e);
            return;
        }
    };
    if let Err(e) = writeln!(out, "{line}") {
        warn!("stdout write failed: {}", e);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            AdapterConfig::from_json(&json).with_context(|| format!("loading config {path}"))?
        }
        None => AdapterConfig::default(),
    };

    let listeners = Arc::new(ListenerSlot::new());
    listeners.register(ChannelListener::new(&OUTCOME_CHANNEL));

    let mut adapter = DppEventAdapter::new(
        &config,
        listeners,
        IdentityTranslator,
        StaticPrincipalResolver::from_config(&config),
        LogLegacyCallback::new(config.iface_name.clone()),
    );
    info!(
        "dpp-replay v{} | iface={} surface={}",
        env!("CARGO_PKG_VERSION"),
        config.iface_name,
        adapter.surface_version()
    );

    let mut out = io::stdout().lock();
    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<VersionedNotification>(&line) {
            Ok(notification) => {
                adapter.dispatch(notification);
                // One notification yields at most one outcome, so the
                // channel never fills between drains.
                drain_outcomes(&OUTCOME_CHANNEL, |o| write_outcome(&mut out, &o));
            }
            Err(e) => warn!("line {}: skipping malformed notification: {}", index + 1, e),
        }
    }

    info!(
        "replay done | legacy notifications forwarded={}",
        adapter.legacy_callback().forwarded()
    );
    Ok(())
}
