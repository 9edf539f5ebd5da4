use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::route::app_users;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/appuser", post(app_users::post))
        .route("/appuser/:id", get(app_users::get_one).put(app_users::put))
        .route("/appusers", get(app_users::get_many))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
