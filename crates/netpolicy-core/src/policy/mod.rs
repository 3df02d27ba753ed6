//! Policy vocabulary (identities, flag set, restriction categories).
//!
//! The authority speaks raw `u32` bitmasks. Inside this workspace those masks
//! are always carried as `PolicyFlags`; conversion happens only at the
//! authority boundary via `bits()` / `from_bits_retain()`, so bits this crate
//! does not name survive a read-modify-write untouched.

pub mod category;
pub mod flags;
pub mod uid;

pub use category::RestrictionCategory;
pub use flags::PolicyFlags;
pub use uid::Uid;
