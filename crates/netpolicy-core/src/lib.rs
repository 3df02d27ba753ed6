//! netpolicy core: identity type, policy flag set, restriction categories, and errors.
//!
//! This crate defines the vocabulary shared by the policy store and any
//! authority backend. It carries no runtime or logging dependencies so it can
//! be reused on both sides of the authority boundary.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `NetPolicyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{NetPolicyError, Result};
pub use policy::{PolicyFlags, RestrictionCategory, Uid};
