pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaign/{id}      campaign page (GET)
/// /campaign/sign      submit a signature (POST)
/// /campaigns/new      creation form (GET, requires session)
/// /campaigns          create a campaign (POST, requires session)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/campaign/{id}", get(handlers::campaign::show_campaign))
        .route("/campaign/sign", post(handlers::campaign::sign_campaign))
        .route("/campaigns/new", get(handlers::campaign::new_campaign_form))
        .route("/campaigns", post(handlers::campaign::create_campaign))
}
