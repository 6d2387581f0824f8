//! Channel-backed listener adapter.
//!
//! Instead of calling into the framework on the HAL callback thread, this
//! listener publishes each outcome into a bounded `embassy-sync` channel
//! that a consumer drains on its own schedule.
//!
//! ```text
//! ┌──────────────┐  ProvisioningOutcome  ┌──────────────┐
//! │ HAL callback │──────────────────────▶│   consumer   │
//! │   thread     │   (try_send, drop     │ (drain loop) │
//! └──────────────┘    when full)         └──────────────┘
//! ```

// Links the std `acquire`/`release` pair that `CriticalSectionRawMutex` calls.
use critical_section as _;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use log::warn;

use crate::app::codes::{DppEventType, DppFailureCode, DppProgressCode};
use crate::app::events::{FailureDetail, ProvisioningOutcome};
use crate::app::network::NetworkConfig;
use crate::app::ports::DppListener;

/// Channel depth for provisioning outcomes.  A DPP exchange produces a
/// handful of progress events and one terminal outcome.
pub const OUTCOME_DEPTH: usize = 8;

pub type OutcomeChannel<const N: usize> = Channel<CriticalSectionRawMutex, ProvisioningOutcome, N>;

/// Process-wide outcome channel: HAL callback thread → framework.
pub static OUTCOME_CHANNEL: OutcomeChannel<OUTCOME_DEPTH> = Channel::new();

/// Listener that publishes into a static channel.
pub struct ChannelListener<const N: usize> {
    channel: &'static OutcomeChannel<N>,
}

impl<const N: usize> ChannelListener<N> {
    pub fn new(channel: &'static OutcomeChannel<N>) -> Self {
        Self { channel }
    }

    fn push(&self, outcome: ProvisioningOutcome) {
        if let Err(TrySendError::Full(dropped)) = self.channel.try_send(outcome) {
            warn!("DPP outcome channel full, dropping {}", dropped.name());
        }
    }
}

impl<const N: usize> DppListener for ChannelListener<N> {
    fn on_success_config_received(&self, config: NetworkConfig, pre_validated: bool) {
        self.push(ProvisioningOutcome::SuccessConfigReceived {
            config,
            pre_validated,
        });
    }

    fn on_success(&self, event: DppEventType) {
        match event {
            DppEventType::ConfigurationSent => self.push(ProvisioningOutcome::SuccessConfigSent),
            DppEventType::ConfigurationApplied => {
                warn!("DPP outcome channel has no slot for {:?}", event);
            }
        }
    }

    fn on_progress(&self, code: DppProgressCode) {
        self.push(ProvisioningOutcome::Progress { code });
    }

    fn on_failure(&self, code: DppFailureCode, detail: FailureDetail) {
        self.push(ProvisioningOutcome::Failure { code, detail });
    }
}

/// Drain all pending outcomes into a callback, in FIFO order.
pub fn drain_outcomes<const N: usize>(
    channel: &OutcomeChannel<N>,
    mut handler: impl FnMut(ProvisioningOutcome),
) {
    while let Ok(outcome) = channel.try_receive() {
        handler(outcome);
    }
}
