// crates/weatherprobe-core/src/context.rs
// ============================================================================
// Module: Request Context
// Description: Owned HTTP handle bound to one endpoint target.
// Purpose: Execute probe cases and evaluate observed responses.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! A request context binds an HTTP client to the endpoint target. It is
//! created once before any case in a suite, shared read-only by every case,
//! and dropped when the suite completes. Network awaits are the only
//! suspension points; nothing is retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Client;
use serde_json::Value;

use crate::config::ConfigError;
use crate::config::EndpointConfig;
use crate::probe::ProbeCase;
use crate::probe::ProbeError;
use crate::probe::ProbeMethod;
use crate::probe::ProbeReport;
use crate::probe::evaluate;

// ============================================================================
// SECTION: Context
// ============================================================================

/// Owned request handle bound to one endpoint target.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Immutable endpoint configuration for this session.
    config: EndpointConfig,
    /// Shared HTTP client with the session timeout applied.
    client: Client,
}

impl RequestContext {
    /// Binds a new context to the given endpoint target.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: EndpointConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout()).build().map_err(|err| {
            ConfigError::ClientBuild {
                reason: err.to_string(),
            }
        })?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the endpoint configuration this context is bound to.
    #[must_use]
    pub const fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Executes one probe case and evaluates the observed response.
    ///
    /// Contract violations land in the returned [`ProbeReport`]; a body that
    /// fails to parse as JSON is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidPath`] for paths that do not join against
    /// the base URL and [`ProbeError::Transport`] for network failures.
    pub async fn run(&self, case: &ProbeCase) -> Result<ProbeReport, ProbeError> {
        let url = self.config.base_url().join(&case.path).map_err(|err| {
            ProbeError::InvalidPath {
                path: case.path.clone(),
                reason: err.to_string(),
            }
        })?;
        let mut request = match case.method {
            ProbeMethod::Get => self.client.get(url),
            ProbeMethod::Post => self.client.post(url),
        };
        if let Some(body) = &case.body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body: Option<Value> = serde_json::from_str(&text).ok();
        Ok(ProbeReport {
            name: case.name,
            status,
            violations: evaluate(case, status, body.as_ref()),
        })
    }

    /// Executes every case in order, collecting one outcome per case.
    ///
    /// Cases are independent: neither a contract violation nor a
    /// transport-level [`ProbeError`] in one case blocks the rest. Outcomes
    /// are returned in case order.
    pub async fn run_all(&self, cases: &[ProbeCase]) -> Vec<Result<ProbeReport, ProbeError>> {
        let mut outcomes = Vec::with_capacity(cases.len());
        for case in cases {
            outcomes.push(self.run(case).await);
        }
        outcomes
    }
}
