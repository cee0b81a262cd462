// crates/weatherprobe-core/src/probe.rs
// ============================================================================
// Module: Probe Model
// Description: Probe cases, contract expectations, and response evaluation.
// Purpose: Pair one HTTP request with the assertions it must satisfy.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A probe case is an immutable (method, path, body, expectation) tuple.
//! Evaluation is a pure function over the observed status and parsed body, so
//! the assertion contract is testable without a network. Contract violations
//! are data in the probe report; only transport-level failures surface as
//! errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Case Types
// ============================================================================

/// HTTP method used by a probe case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// `GET` request without a body.
    Get,
    /// `POST` request with an optional JSON body.
    Post,
}

/// Expected HTTP status for a probe case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusExpectation {
    /// The response status must equal the given code.
    Exactly(u16),
    /// The response status must be a client or server error (>= 400).
    ClientOrServerError,
}

impl StatusExpectation {
    /// Returns true when the observed status satisfies the expectation.
    #[must_use]
    pub const fn matches(self, status: u16) -> bool {
        match self {
            Self::Exactly(expected) => status == expected,
            Self::ClientOrServerError => status >= 400,
        }
    }
}

impl std::fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(expected) => write!(f, "status {expected}"),
            Self::ClientOrServerError => write!(f, "a status of 400 or above"),
        }
    }
}

/// Immutable HTTP request/assertion pair verifying one contract operation.
#[derive(Debug, Clone)]
pub struct ProbeCase {
    /// Stable case name used in reports.
    pub name: &'static str,
    /// HTTP method for the request.
    pub method: ProbeMethod,
    /// Path (and optional query) joined against the base URL.
    pub path: String,
    /// Optional JSON request body.
    pub body: Option<Value>,
    /// Expected response status.
    pub status: StatusExpectation,
    /// Fields that must be present and non-null in the response object.
    pub required_fields: &'static [&'static str],
}

// ============================================================================
// SECTION: Violations
// ============================================================================

/// Mismatch between the documented contract and an observed response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// The response status did not satisfy the expectation.
    #[error("expected {expected}, got {actual}")]
    StatusMismatch {
        /// Expected status predicate.
        expected: StatusExpectation,
        /// Observed status code.
        actual: u16,
    },
    /// The response body was not a JSON object where a shape is expected.
    #[error("response body is not a JSON object")]
    NotAnObject,
    /// A required field was absent from the response object.
    #[error("response body is missing required field `{name}`")]
    MissingField {
        /// Missing field name.
        name: &'static str,
    },
    /// A required field was present but null.
    #[error("response body field `{name}` is null")]
    NullField {
        /// Null field name.
        name: &'static str,
    },
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Outcome of one executed probe case.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Case name copied from the probe definition.
    pub name: &'static str,
    /// Observed HTTP status code.
    pub status: u16,
    /// Contract violations detected for this case.
    pub violations: Vec<ContractViolation>,
}

impl ProbeReport {
    /// Returns true when no contract violation was detected.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure to execute a probe at all, as opposed to a contract violation.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The case path did not join cleanly against the base URL.
    #[error("probe path `{path}` is not valid against the base URL: {reason}")]
    InvalidPath {
        /// Offending probe path.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The HTTP request failed at the transport level.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates a probe case against the observed status and parsed body.
///
/// Returns every violation found; an empty list means the contract held.
/// A body is only inspected when the case names required fields.
#[must_use]
pub fn evaluate(case: &ProbeCase, status: u16, body: Option<&Value>) -> Vec<ContractViolation> {
    let mut violations = Vec::new();
    if !case.status.matches(status) {
        violations.push(ContractViolation::StatusMismatch {
            expected: case.status,
            actual: status,
        });
    }
    if case.required_fields.is_empty() {
        return violations;
    }
    let Some(Value::Object(object)) = body else {
        violations.push(ContractViolation::NotAnObject);
        return violations;
    };
    for name in case.required_fields.iter().copied() {
        match object.get(name) {
            None => violations.push(ContractViolation::MissingField {
                name,
            }),
            Some(Value::Null) => violations.push(ContractViolation::NullField {
                name,
            }),
            Some(_) => {}
        }
    }
    violations
}
