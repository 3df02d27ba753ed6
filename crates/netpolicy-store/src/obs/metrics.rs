//! Minimal metrics registry for the policy store.
//!
//! Counters with dynamic labels backed by `DashMap`. Labels are flattened into
//! sorted key vectors to keep deterministic ordering; rendering sorts series so
//! the text output is stable.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use netpolicy_core::Result;

use super::{MetricsCollector, MetricsEvent};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for one label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum across all label sets.
    pub fn total(&self) -> u64 {
        self.map.iter().map(|r| r.value().load(Ordering::Relaxed)).sum()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Store-level counters; doubles as the usage-event collector.
#[derive(Default)]
pub struct StoreMetrics {
    pub actions: CounterVec,
    pub authority_calls: CounterVec,
    pub cache_loads: CounterVec,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.actions.render("netpolicy_actions_total", &mut out);
        self.authority_calls.render("netpolicy_authority_calls_total", &mut out);
        self.cache_loads.render("netpolicy_blacklist_loaded_uids_total", &mut out);
        out
    }
}

impl MetricsCollector for StoreMetrics {
    fn action(&self, event: MetricsEvent, label: &str) -> Result<()> {
        let id = event.id().to_string();
        self.actions.inc(&[
            ("event", event.as_str()),
            ("event_id", id.as_str()),
            ("label", label),
        ]);
        Ok(())
    }

    fn observe_authority(&self, op: &'static str, ok: bool) {
        let outcome = if ok { "ok" } else { "error" };
        self.authority_calls.inc(&[("op", op), ("outcome", outcome)]);
    }

    fn observe_cache_load(&self, uids: usize) {
        self.cache_loads.add(&[], uids as u64);
    }
}
