use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use service::user::{
    domain::{LoginInput, NewUser, UpdateUserInput, UserRecord},
    repo::seaorm::SeaOrmUserRepository,
    service::UserService,
};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

fn user_svc(state: &ServerState) -> UserService<SeaOrmUserRepository> {
    UserService::new(Arc::new(SeaOrmUserRepository { db: state.db.clone() }))
}

/// Wire view of a user; the stored password hash never leaves the service.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(u: UserRecord) -> Self {
        Self { id: u.id, name: u.name, email: u.email }
    }
}

/// Rows-affected outcome for update/delete, mirroring the store's report.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcomeResponse {
    pub rows_affected: u64,
}

#[derive(Debug, Deserialize)]
pub struct GetUserParams {
    /// Optional id of the caller; when present it must match the target.
    pub requester: Option<i32>,
}

#[utoipa::path(get, path = "/user/all", tag = "user", responses((status = 200, description = "All users")))]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = user_svc(&state).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(get, path = "/user/{id}", tag = "user", params(("id" = i32, Path,), ("requester" = Option<i32>, Query, description = "Caller id; must match the target when supplied")), responses((status = 200, description = "User"), (status = 400, description = "Invalid id"), (status = 401, description = "Requester mismatch"), (status = 404, description = "Not Found")))]
pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Query(params): Query<GetUserParams>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user_svc(&state).get(id, params.requester).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(post, path = "/user/login", tag = "user", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In"), (status = 404, description = "User not found or incorrect password")))]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user_svc(&state).login(input).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(post, path = "/user/create", tag = "user", request_body = crate::openapi::CreateUserRequest, responses((status = 201, description = "User created"), (status = 400, description = "Bad Request")))]
pub async fn create_user(
    State(state): State<ServerState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let created = user_svc(&state).create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/user/update-infos/{id}", tag = "user", params(("id" = i32, Path,)), request_body = crate::openapi::UpdateUserRequest, responses((status = 200, description = "User updated"), (status = 404, description = "Not Found")))]
pub async fn update_infos(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateUserInput>,
) -> Result<Json<UserResponse>, ApiError> {
    let svc = user_svc(&state);
    let affected = svc.update(id, input).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("user not found".into()));
    }
    // Return the record as stored after the write
    let user = svc.get(id, None).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(put, path = "/user/update-password/{id}", tag = "user", params(("id" = i32, Path,)), request_body = crate::openapi::UpdateUserRequest, responses((status = 200, description = "Update outcome")))]
pub async fn update_password(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateUserInput>,
) -> Result<Json<OutcomeResponse>, ApiError> {
    let affected = user_svc(&state).update(id, input).await?;
    Ok(Json(OutcomeResponse { rows_affected: affected }))
}

#[utoipa::path(delete, path = "/user/{id}", tag = "user", params(("id" = i32, Path,)), responses((status = 200, description = "Delete outcome"), (status = 400, description = "Invalid id")))]
pub async fn delete_user(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<OutcomeResponse>, ApiError> {
    let affected = user_svc(&state).delete(id).await?;
    Ok(Json(OutcomeResponse { rows_affected: affected }))
}
