// system-tests/src/lib.rs
// ============================================================================
// Module: Weatherprobe System Tests Library
// Description: Shared session helpers for system test scenarios.
// Purpose: Provide the create-once request context used by live suites.
// Dependencies: weatherprobe-core
// ============================================================================

//! ## Overview
//! This crate hosts shared session helpers used by the Weatherprobe
//! system-test binaries in `system-tests/tests`. The live suites share one
//! lazily-initialized request context per test binary.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod session;
