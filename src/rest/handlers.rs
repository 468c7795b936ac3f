use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    storage::UserStore,
    types::{SearchForm, UserForm},
};

use super::{
    error::ApiError,
    models::{CreatedResponse, ErrorResponse, HealthResponse, UserResponse},
    AppState,
};

pub async fn health<S: UserStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            uptime_secs,
        }),
    )
}

pub async fn create_user<S: UserStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<UserForm>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(form) = body?;
    let user = form.into_new_user()?;
    let id = state.storage.insert(&user)?;
    log::info!("registered user {} ({})", id, user.name);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn get_user<S: UserStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;
    let record = state.storage.get_by_id(id)?;
    Ok(Json(record.into()))
}

pub async fn update_user<S: UserStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserForm>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;
    let Json(form) = body?;
    let user = form.into_new_user()?;
    let record = state.storage.update(id, &user)?;
    log::info!("updated user {}", record.id);
    Ok(Json(record.into()))
}

pub async fn delete_user<S: UserStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;
    let record = state.storage.delete(id)?;
    log::info!("deleted user {}", record.id);
    Ok(Json(record.into()))
}

pub async fn search_users<S: UserStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<SearchForm>, QueryRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Query(form) = query?;
    let filter = form.into_filter()?;
    let record = state.storage.search(&filter)?;
    Ok(Json(record.into()))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "not found".to_string(),
        }),
    )
}
