use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::app_user_web_input::{decode_body, AppUserWebInput};
use crate::adapter::web::dto::find_app_users_web_query::FindAppUsersWebQuery;
use crate::adapter::web::handler::app_users::get::FindAppUserHandler;
use crate::adapter::web::handler::app_users::list::FindAppUsersHandler;
use crate::adapter::web::handler::app_users::post::CreateAppUserHandler;
use crate::adapter::web::handler::app_users::put::UpdateAppUserHandler;
use crate::core::domain::validation::ValidationError;

pub async fn post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AppUserWebInput>, JsonRejection>,
) -> Response {
    let handler = CreateAppUserHandler::new(state.create_app_user_use_case.clone());
    handler.create_app_user(decode_body(payload)).await
}

pub async fn put(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<AppUserWebInput>, JsonRejection>,
) -> Response {
    let handler = UpdateAppUserHandler::new(state.update_app_user_use_case.clone());
    handler.update_app_user(id, decode_body(payload)).await
}

pub async fn get_one(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let handler = FindAppUserHandler::new(state.find_app_user_use_case.clone());
    handler.find_app_user(id).await
}

pub async fn get_many(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let handler = FindAppUsersHandler::new(state.find_app_users_use_case.clone());
    let input = query
        .map(|Query(pairs)| FindAppUsersWebQuery::from_pairs(pairs).into())
        .map_err(|rejection| ValidationError::global(rejection.body_text()));
    handler.find_app_users(input).await
}
