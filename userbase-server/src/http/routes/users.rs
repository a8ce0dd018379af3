//! User endpoints
//!
//! Five handlers, each a single repository call: create, list, get,
//! update, delete. Collection routes keep the trailing slash
//! (`/users/`), item routes take the id in the path.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Update user request
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
        }
    }
}

/// Delete confirmation response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub detail: &'static str,
}

/// Query parameters for list
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// GET /users/ - list users with offset/limit
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool)
        .list(params.skip, params.limit)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users/ - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).create(&req.name).await?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /users/{id} - rename a user
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool)
        .update_name(id, &req.name)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;

    Ok(Json(DeletedResponse {
        detail: "User deleted",
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
}
