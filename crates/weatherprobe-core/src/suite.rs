// crates/weatherprobe-core/src/suite.rs
// ============================================================================
// Module: Canonical Suite
// Description: Probe cases for the weather subscription API contract.
// Purpose: Define one parameterized suite driven solely by the configuration.
// Dependencies: serde_json, url
// ============================================================================

//! ## Overview
//! The canonical suite covers the four documented operations plus the
//! dedicated negative subscription case. Cases carry no base URL; the same
//! suite runs unchanged against any endpoint target, which keeps duplicated
//! per-host suite definitions out of the tree.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::json;
use url::form_urlencoded;

use crate::probe::ProbeCase;
use crate::probe::ProbeMethod;
use crate::probe::StatusExpectation;
use crate::testdata::unique_email;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// City used by the canonical suite.
pub const DEFAULT_CITY: &str = "Kyiv";

/// Well-formed token that cannot resolve to a real pending subscription.
pub const INVALID_TOKEN: &str = "invalid-token";

/// Fields every weather lookup response must carry, non-null.
pub const WEATHER_FIELDS: &[&str] = &["temperature", "description", "humidity"];

// ============================================================================
// SECTION: Frequency
// ============================================================================

/// Delivery frequency accepted by the subscription endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// One update per day.
    Daily,
    /// One update per hour.
    Hourly,
}

impl Frequency {
    /// Returns the wire value for the `frequency` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}

// ============================================================================
// SECTION: Probe Cases
// ============================================================================

/// Weather lookup probe: expects 200 with temperature, description, humidity.
///
/// The city is percent-encoded, so names carrying spaces or query
/// metacharacters reach the endpoint intact.
#[must_use]
pub fn weather_lookup(city: &str) -> ProbeCase {
    let query =
        form_urlencoded::Serializer::new(String::new()).append_pair("city", city).finish();
    ProbeCase {
        name: "weather_lookup",
        method: ProbeMethod::Get,
        path: format!("/api/weather?{query}"),
        body: None,
        status: StatusExpectation::Exactly(200),
        required_fields: WEATHER_FIELDS,
    }
}

/// Subscription probe with a well-formed body; expects acceptance.
///
/// The caller supplies a previously-unused email so repeated runs never
/// collide with subscriptions already held by the remote system.
#[must_use]
pub fn subscribe(email: &str, city: &str, frequency: Frequency) -> ProbeCase {
    ProbeCase {
        name: "subscribe",
        method: ProbeMethod::Post,
        path: "/api/subscribe".to_string(),
        body: Some(json!({
            "email": email,
            "city": city,
            "frequency": frequency.as_str(),
        })),
        status: StatusExpectation::Exactly(200),
        required_fields: &[],
    }
}

/// Negative subscription probe: omitting `frequency` must be rejected.
#[must_use]
pub fn subscribe_missing_frequency(email: &str, city: &str) -> ProbeCase {
    ProbeCase {
        name: "subscribe_missing_frequency",
        method: ProbeMethod::Post,
        path: "/api/subscribe".to_string(),
        body: Some(json!({
            "email": email,
            "city": city,
        })),
        status: StatusExpectation::ClientOrServerError,
        required_fields: &[],
    }
}

/// Confirmation probe with a token that cannot resolve; expects >= 400.
#[must_use]
pub fn confirm_with_token(token: &str) -> ProbeCase {
    ProbeCase {
        name: "confirm_invalid_token",
        method: ProbeMethod::Get,
        path: format!("/api/confirm/{token}"),
        body: None,
        status: StatusExpectation::ClientOrServerError,
        required_fields: &[],
    }
}

/// Unsubscription probe with a token that cannot resolve; expects >= 400.
#[must_use]
pub fn unsubscribe_with_token(token: &str) -> ProbeCase {
    ProbeCase {
        name: "unsubscribe_invalid_token",
        method: ProbeMethod::Get,
        path: format!("/api/unsubscribe/{token}"),
        body: None,
        status: StatusExpectation::ClientOrServerError,
        required_fields: &[],
    }
}

/// Builds the canonical five-case suite with freshly generated emails.
#[must_use]
pub fn contract_suite() -> Vec<ProbeCase> {
    vec![
        weather_lookup(DEFAULT_CITY),
        subscribe(&unique_email(), DEFAULT_CITY, Frequency::Daily),
        subscribe_missing_frequency(&unique_email(), DEFAULT_CITY),
        confirm_with_token(INVALID_TOKEN),
        unsubscribe_with_token(INVALID_TOKEN),
    ]
}
