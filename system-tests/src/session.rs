// system-tests/src/session.rs
// ============================================================================
// Module: Shared Test Session
// Description: Create-once request context for a test binary.
// Purpose: Give every case in a suite the same endpoint-bound handle.
// Dependencies: weatherprobe-core
// ============================================================================

//! ## Overview
//! All cases within one test binary share a single request context created
//! before the first case that needs it and released when the process exits.
//! The context is read-only after creation, so cases tolerate arbitrary
//! interleaving without locking.

use std::sync::OnceLock;

use weatherprobe_core::config::ConfigError;
use weatherprobe_core::config::EndpointConfig;
use weatherprobe_core::context::RequestContext;

/// Returns the shared request context, creating it on first use.
///
/// The endpoint target is resolved from the environment exactly once; every
/// later call observes the same handle.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the environment holds an invalid base URL
/// or timeout, or when the HTTP client cannot be constructed.
pub fn shared_context() -> Result<&'static RequestContext, ConfigError> {
    static CONTEXT: OnceLock<RequestContext> = OnceLock::new();
    if let Some(context) = CONTEXT.get() {
        return Ok(context);
    }
    let config = EndpointConfig::from_env()?;
    let context = RequestContext::new(config)?;
    Ok(CONTEXT.get_or_init(|| context))
}
