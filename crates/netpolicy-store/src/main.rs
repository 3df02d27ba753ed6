//! netpolicy demo
//!
//! Seeds an in-process authority from the config file (first argument,
//! `NETPOLICY_CONFIG`, or `netpolicy.yaml`), applies the listed app toggles
//! through `PolicyStore`, and logs the resulting per-app state.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use netpolicy_core::Result;
use netpolicy_store::{
    config, MemoryAuthority, MetricsCollector, NoopMetrics, PolicyStore, StoreMetrics,
};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run() {
        tracing::error!(code = e.code().as_str(), error = %e, "netpolicy failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = config::resolve_path(std::env::args().nth(1));
    let cfg = config::load_from_file(&path)?;

    let authority = Arc::new(MemoryAuthority::new());
    for entry in &cfg.seed {
        authority.seed(entry.uid, entry.flags()?);
    }
    tracing::info!(path = %path.display(), seeded = authority.len(), "authority seeded");

    let metrics = Arc::new(StoreMetrics::new());
    let collector: Arc<dyn MetricsCollector> = if cfg.store.metrics {
        metrics.clone()
    } else {
        Arc::new(NoopMetrics)
    };
    let store = PolicyStore::from_config(authority.clone(), collector, &cfg.store)?;

    for app in &cfg.apps {
        for (category, restrict) in app.requested() {
            store.set_restriction(app.uid, &app.label, category, restrict)?;
        }
        let r = store.app_restrictions(app.uid)?;
        tracing::info!(
            uid = %app.uid,
            label = %app.label,
            background = r.background_metered_data,
            cellular = r.cellular,
            vpn = r.vpn,
            wifi = r.wifi,
            "app policy"
        );
    }

    for (uid, policy) in authority.snapshot() {
        tracing::info!(uid = %uid, bits = %format!("{:#x}", policy.bits()), "authority state");
    }

    if cfg.store.metrics {
        print!("{}", metrics.render());
    }
    Ok(())
}
