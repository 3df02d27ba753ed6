//! Top-level facade crate for netpolicy.
//!
//! Re-exports the core policy types and the store library so users can depend on a single crate.

pub mod core {
    pub use netpolicy_core::*;
}

pub mod store {
    pub use netpolicy_store::*;
}
