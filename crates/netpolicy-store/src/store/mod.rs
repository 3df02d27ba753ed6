//! Per-app policy store.
//!
//! `PolicyStore` reads cellular/VPN/Wi-Fi restrictions straight from the
//! authority on every call. The background-metered blacklist is served from a
//! cache that is bulk-loaded once and then kept current by the store's own
//! writes. Changes made to the authority by anyone else after that load are
//! not observed.

mod cache;
pub mod policy_store;

pub use policy_store::{AppRestrictions, PolicyStore};
