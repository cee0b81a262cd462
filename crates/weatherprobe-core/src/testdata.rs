// crates/weatherprobe-core/src/testdata.rs
// ============================================================================
// Module: Test Data Generation
// Description: Collision-free identities for probes with durable side effects.
// Purpose: Keep repeated runs from tripping over the remote system's state.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The subscription probe leaves a durable record on the remote side, so the
//! email it submits must be fresh on every invocation. Addresses mix a
//! millisecond timestamp with a process-wide sequence number to stay distinct
//! even for cases generated within the same millisecond.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

// ============================================================================
// SECTION: Generators
// ============================================================================

/// Process-wide sequence distinguishing emails generated in the same
/// millisecond.
static EMAIL_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh `test+<timestamp>-<sequence>@example.com` address.
#[must_use]
pub fn unique_email() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
    let sequence = EMAIL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("test+{millis}-{sequence}@example.com")
}
