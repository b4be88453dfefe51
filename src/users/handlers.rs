use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{dto::UserBody, extractors::JsonBody, repo_types::User},
};

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/users/:id",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list(&state.db).await.map_err(|e| {
        error!(error = %e, "list users failed");
        ApiError::Store(e)
    })?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    // any lookup failure reads as a missing user
    match User::find_by_id(&state.db, id).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => {
            warn!(error = %e, id, "user not found");
            Err(ApiError::NotFound)
        }
    }
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UserBody>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = User::create(&state.db, body.name(), body.email())
        .await
        .map_err(|e| {
            error!(error = %e, "create user failed");
            ApiError::Store(e)
        })?;

    info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<UserBody>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let rows = User::update(&state.db, id, body.name(), body.email())
        .await
        .map_err(|e| {
            error!(error = %e, id, "update user failed");
            ApiError::Store(e)
        })?;

    debug!(id, rows, "user updated");
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let rows = User::delete(&state.db, id).await.map_err(|e| {
        error!(error = %e, id, "delete user failed");
        ApiError::Store(e)
    })?;

    debug!(id, rows, "user deleted");
    Ok(StatusCode::OK)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        warn!(raw_id = %raw, "invalid user id");
        ApiError::InvalidId
    })
}
