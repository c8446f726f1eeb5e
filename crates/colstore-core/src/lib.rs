#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Leaf primitives shared by every colstore layer.
//!
//! - **NA sentinels** (`na`): the reserved bit pattern that means "missing"
//!   for each fixed-width primitive, plus the predicates that test for it.
//! - **Platform contract** (`platform`): layout assumptions the engine relies
//!   on, checked at compile time where possible and once at startup otherwise.
//! - **Colors** (`colors`): ANSI palette for debug dumps.

pub mod colors;
mod invariants;
pub mod na;
pub mod platform;

pub use colors::Colors;
pub use invariants::ensure_platform;
pub use na::{
    NA_F4, NA_F4_BITS, NA_F8, NA_F8_BITS, NA_I1, NA_I2, NA_I4, NA_I8, NA_U1, NA_U2, NA_U4,
    NaKind, NaValue, ValueClass, is_na,
};
pub use platform::{PlatformError, is_ascii_digit_fast};

#[cfg(test)]
mod na_tests;
