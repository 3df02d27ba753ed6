//! netpolicy store library entry.
//!
//! This crate wires the policy authority seam, the blacklist cache, and the
//! in-process metrics registry into `PolicyStore`, the component the settings
//! surface calls per app. It is consumed by the demo binary (`main.rs`) and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod authority;
pub mod config;
pub mod obs;
pub mod store;

pub use authority::{MemoryAuthority, PolicyAuthority};
pub use obs::{MetricsCollector, MetricsEvent, NoopMetrics, StoreMetrics};
pub use store::{AppRestrictions, PolicyStore};
