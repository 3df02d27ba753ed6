//! Usage telemetry and in-process metrics.
//!
//! `MetricsCollector` is the seam the store reports through. Reporting is best
//! effort: the store logs a failed `action` and carries on, so telemetry never
//! decides the outcome of a policy write.

pub mod metrics;

use netpolicy_core::Result;

pub use metrics::{CounterVec, StoreMetrics};

/// Usage events reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsEvent {
    /// An app was added to the data saver blacklist.
    DataSaverBlacklist,
}

impl MetricsEvent {
    /// Settings event id understood by the platform collector.
    pub fn id(self) -> u32 {
        match self {
            MetricsEvent::DataSaverBlacklist => 396,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricsEvent::DataSaverBlacklist => "data_saver_blacklist",
        }
    }
}

/// Usage-event sink.
pub trait MetricsCollector: Send + Sync {
    /// Report a usage event tagged with a human-readable label.
    fn action(&self, event: MetricsEvent, label: &str) -> Result<()>;

    /// Outcome of one authority call.
    fn observe_authority(&self, _op: &'static str, _ok: bool) {}

    /// A blacklist bulk load finished with `uids` entries.
    fn observe_cache_load(&self, _uids: usize) {}
}

/// Collector that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsCollector for NoopMetrics {
    fn action(&self, _event: MetricsEvent, _label: &str) -> Result<()> {
        Ok(())
    }
}
