//! HTTP routes for scanner endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    generate_leadership_script, generate_summary_guidance, health, scan_communications,
    ScannerAppState,
};

/// Creates the scanner router with all routes.
pub fn scanner_routes(state: ScannerAppState) -> Router {
    Router::new()
        // POST /api/scan
        .route("/api/scan", post(scan_communications))
        // POST /api/guidance/summary
        .route("/api/guidance/summary", post(generate_summary_guidance))
        // POST /api/guidance/script
        .route("/api/guidance/script", post(generate_leadership_script))
        .route("/health", get(health))
        .with_state(state)
}
