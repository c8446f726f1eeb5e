//! Fatal checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::platform;

/// Abort startup unless the platform contract holds.
///
/// There is no degraded mode: storage layouts built on a broken assumption
/// would corrupt data silently.
pub fn ensure_platform() {
    if let Err(err) = platform::verify() {
        tracing::error!(%err, "platform contract violated");
        panic!("platform contract violated: {err}");
    }
}
