// system-tests/tests/helpers/weather_stub.rs
// ============================================================================
// Module: Weather API Stub
// Description: Minimal weather subscription API stub for system-tests.
// Purpose: Exercise the contract harness without the external service.
// Dependencies: axum, serde, tokio
// ============================================================================

//! ## Overview
//! An in-process stand-in for the remote weather subscription API. It honors
//! the documented contract (weather lookup shape, subscription validation,
//! unknown-token rejection) so the harness can be verified hermetically by
//! injecting the stub's base URL.

use std::collections::HashMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Router;
use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Subscription payload accepted and recorded by the stub.
#[derive(Clone, Debug, Deserialize)]
pub struct SubscriptionRecord {
    /// Subscriber email address.
    pub email: String,
    /// City the subscription covers.
    pub city: String,
    /// Delivery frequency; rejected unless `daily` or `hourly`.
    pub frequency: String,
}

#[derive(Clone)]
struct StubState {
    subscriptions: Arc<Mutex<Vec<SubscriptionRecord>>>,
}

/// Handle for the stub weather API server.
pub struct WeatherStubHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    subscriptions: Arc<Mutex<Vec<SubscriptionRecord>>>,
}

impl WeatherStubHandle {
    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns subscriptions accepted by the stub.
    pub fn subscriptions(&self) -> Vec<SubscriptionRecord> {
        self.subscriptions.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for WeatherStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a stub weather API on a loopback port.
pub fn spawn_weather_stub() -> Result<WeatherStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("weather stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("weather stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("weather stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let subscriptions = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        subscriptions: Arc::clone(&subscriptions),
    };
    let app = Router::new()
        .route("/api/weather", get(handle_weather))
        .route("/api/subscribe", post(handle_subscribe))
        .route("/api/confirm/:token", get(handle_confirm))
        .route("/api/unsubscribe/:token", get(handle_unsubscribe))
        .with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(WeatherStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        subscriptions,
    })
}

async fn handle_weather(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    match params.get("city").map(String::as_str) {
        Some(city) if !city.trim().is_empty() => (
            StatusCode::OK,
            axum::Json(json!({
                "temperature": 7.3,
                "description": format!("clear sky over {city}"),
                "humidity": 62,
            })),
        ),
        _ => (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": "city is required" }))),
    }
}

async fn handle_subscribe(State(state): State<StubState>, bytes: Bytes) -> impl IntoResponse {
    match serde_json::from_slice::<SubscriptionRecord>(bytes.as_ref()) {
        Ok(record) if matches!(record.frequency.as_str(), "daily" | "hourly") => {
            record_subscription(&state, record);
            (StatusCode::OK, axum::Json(json!({ "message": "confirmation email sent" })))
        }
        Ok(_) => (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": "invalid frequency" }))),
        Err(_) => {
            (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": "invalid subscription payload" })))
        }
    }
}

async fn handle_confirm(Path(token): Path<String>) -> impl IntoResponse {
    unknown_token(&token)
}

async fn handle_unsubscribe(Path(token): Path<String>) -> impl IntoResponse {
    unknown_token(&token)
}

/// The stub holds no pending subscriptions, so every token fails to resolve.
fn unknown_token(token: &str) -> (StatusCode, axum::Json<Value>) {
    (StatusCode::NOT_FOUND, axum::Json(json!({ "error": format!("token `{token}` not found") })))
}

fn record_subscription(state: &StubState, record: SubscriptionRecord) {
    let Ok(mut guard) = state.subscriptions.lock() else {
        return;
    };
    guard.push(record);
}
