//! 用户处理器

use axum::{
    body::Bytes,
    extract::{Path, State},
};

use super::{model::User, service::UserService};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResponse<Vec<User>> {
    ApiResponse::Ok(state.user_service.list_users())
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<User>, CoreError> {
    let user = state.user_service.get_user(&id)?;
    Ok(ApiResponse::Ok(user))
}

/// PUT /users/:id
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<ApiResponse<User>, CoreError> {
    let user = state.user_service.upsert_user(&id, &body)?;
    Ok(ApiResponse::Ok(user))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<User>, CoreError> {
    let user = state.user_service.create_user(&body)?;
    Ok(ApiResponse::Created(user))
}

/// DELETE /users/:id
pub async fn remove_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<()> {
    state.user_service.remove_user(&id);
    ApiResponse::NoContent
}
