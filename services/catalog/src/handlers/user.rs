use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::shelf::{
    AddShelfEntryInput, AddShelfEntryUseCase, ListUserVinylsUseCase, RemoveShelfEntryUseCase,
};
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
};
use crate::views::{UserView, VinylSummary};

#[derive(Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserView>,
}

#[derive(Serialize)]
pub struct UserVinylsResponse {
    pub vinyls: Vec<VinylSummary>,
}

// ── GET /api/users/ ──────────────────────────────────────────────────────────

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<UsersListResponse>, CatalogServiceError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
        shelves: state.shelf_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(UsersListResponse { users }))
}

// ── POST /api/users/ ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub bio: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), CatalogServiceError> {
    let username = body
        .username
        .ok_or(CatalogServiceError::MissingField("username"))?;
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            username,
            bio: body.bio,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ── GET /api/users/{id}/ ─────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserView>, CatalogServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        shelves: state.shelf_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user))
}

// ── DELETE /api/users/{id}/ ──────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserView>, CatalogServiceError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
        shelves: state.shelf_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user))
}

// ── GET /api/users/{id}/vinyls/ ──────────────────────────────────────────────

pub async fn get_user_vinyls(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserVinylsResponse>, CatalogServiceError> {
    let usecase = ListUserVinylsUseCase {
        users: state.user_repo(),
        shelves: state.shelf_repo(),
    };
    let vinyls = usecase.execute(user_id).await?;
    Ok(Json(UserVinylsResponse { vinyls }))
}

// ── POST /api/users/{id}/vinyls/add/ ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddVinylRequest {
    pub vinyl_id: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub async fn add_user_vinyl(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(body): Json<AddVinylRequest>,
) -> Result<Json<UserView>, CatalogServiceError> {
    let vinyl_id = body
        .vinyl_id
        .ok_or(CatalogServiceError::MissingField("vinyl_id"))?;
    let kind = body.kind.ok_or(CatalogServiceError::MissingField("type"))?;
    let usecase = AddShelfEntryUseCase {
        users: state.user_repo(),
        vinyls: state.vinyl_repo(),
        shelves: state.shelf_repo(),
    };
    let user = usecase
        .execute(AddShelfEntryInput {
            user_id,
            vinyl_id,
            kind,
        })
        .await?;
    Ok(Json(user))
}

// ── DELETE /api/users/{id}/vinyls/ ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct RemoveVinylQuery {
    pub vinyl_id: Option<i32>,
}

pub async fn remove_user_vinyl(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<RemoveVinylQuery>,
) -> Result<Json<UserView>, CatalogServiceError> {
    let vinyl_id = query
        .vinyl_id
        .ok_or(CatalogServiceError::MissingField("vinyl_id"))?;
    let usecase = RemoveShelfEntryUseCase {
        users: state.user_repo(),
        vinyls: state.vinyl_repo(),
        shelves: state.shelf_repo(),
    };
    let user = usecase.execute(user_id, vinyl_id).await?;
    Ok(Json(user))
}
