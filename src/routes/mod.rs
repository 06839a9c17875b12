// src/routes/mod.rs
pub mod practice;
pub mod reply;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use practice::{
    create_campaign, create_client, create_reminder, list_clients, respond_to_missed_call,
    save_settings,
};
use reply::{quiz_handler, reply_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/reply", post(reply_handler))
        .route("/quiz", post(quiz_handler))
        .route("/reminder", post(create_reminder))
        .route("/campaigns", post(create_campaign))
        .route("/missed-calls", post(respond_to_missed_call))
        .route("/settings", post(save_settings))
        .route("/clients", get(list_clients).post(create_client));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
