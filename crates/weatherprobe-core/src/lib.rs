// crates/weatherprobe-core/src/lib.rs
// ============================================================================
// Module: Weatherprobe Core Library
// Description: Contract-verification harness for a weather subscription API.
// Purpose: Own request context lifecycle, base-URL resolution, the assertion
//          contract, and repeatable test data generation.
// Dependencies: reqwest, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Weatherprobe verifies that a remote weather/subscription API honors its
//! documented HTTP contract. The API itself is an external collaborator
//! reached only through its HTTP surface; this crate owns the probe model,
//! the shared request context, endpoint configuration, and test data that
//! stays collision-free across repeated runs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod context;
pub mod probe;
pub mod suite;
pub mod testdata;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use config::ConfigError;
pub use config::EndpointConfig;
pub use context::RequestContext;
pub use probe::ContractViolation;
pub use probe::ProbeCase;
pub use probe::ProbeError;
pub use probe::ProbeReport;
