// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Weatherprobe system-tests.
// Purpose: Provide the in-process weather API stub used by contract suites.
// Dependencies: system-tests, weatherprobe-core
// ============================================================================

//! ## Overview
//! Shared helpers for Weatherprobe system-tests.
//! Invariants:
//! - Suites are deterministic and fail-closed.
//! - The stub stands in for the external API only; the harness under test is
//!   never mocked.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod weather_stub;
