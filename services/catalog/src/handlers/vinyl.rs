use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::vinyl::{
    CreateManyVinylsUseCase, CreateVinylInput, CreateVinylUseCase, DeleteVinylUseCase,
    GetVinylUseCase, ListVinylsUseCase,
};
use crate::views::VinylView;

#[derive(Serialize)]
pub struct VinylsListResponse {
    pub vinyls: Vec<VinylView>,
}

#[derive(Deserialize)]
pub struct CreateVinylRequest {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CreateVinylRequest {
    /// Required fields are modeled as `Option` so a missing field maps
    /// to a 400 instead of a body-rejection.
    fn validate(self) -> Result<CreateVinylInput, CatalogServiceError> {
        Ok(CreateVinylInput {
            name: self.name.ok_or(CatalogServiceError::MissingField("name"))?,
            artist: self
                .artist
                .ok_or(CatalogServiceError::MissingField("artist"))?,
            year: self.year,
            kind: self.kind.ok_or(CatalogServiceError::MissingField("type"))?,
        })
    }
}

// ── GET /api/vinyls/ ─────────────────────────────────────────────────────────

pub async fn get_vinyls(
    State(state): State<AppState>,
) -> Result<Json<VinylsListResponse>, CatalogServiceError> {
    let usecase = ListVinylsUseCase {
        vinyls: state.vinyl_repo(),
        songs: state.song_repo(),
        shelves: state.shelf_repo(),
    };
    let vinyls = usecase.execute().await?;
    Ok(Json(VinylsListResponse { vinyls }))
}

// ── POST /api/vinyls/ ────────────────────────────────────────────────────────

pub async fn create_vinyl(
    State(state): State<AppState>,
    Json(body): Json<CreateVinylRequest>,
) -> Result<(StatusCode, Json<VinylView>), CatalogServiceError> {
    let usecase = CreateVinylUseCase {
        vinyls: state.vinyl_repo(),
    };
    let vinyl = usecase.execute(body.validate()?).await?;
    Ok((StatusCode::CREATED, Json(vinyl)))
}

// ── POST /api/vinyls/many/ ───────────────────────────────────────────────────

pub async fn create_many_vinyls(
    State(state): State<AppState>,
    Json(body): Json<BTreeMap<String, CreateVinylRequest>>,
) -> Result<(StatusCode, Json<VinylsListResponse>), CatalogServiceError> {
    let mut inputs = Vec::with_capacity(body.len());
    for (_, entry) in body {
        inputs.push(entry.validate()?);
    }
    let usecase = CreateManyVinylsUseCase {
        vinyls: state.vinyl_repo(),
    };
    let vinyls = usecase.execute(inputs).await?;
    Ok((StatusCode::CREATED, Json(VinylsListResponse { vinyls })))
}

// ── GET /api/vinyls/{id}/ ────────────────────────────────────────────────────

pub async fn get_vinyl(
    State(state): State<AppState>,
    Path(vinyl_id): Path<i32>,
) -> Result<Json<VinylView>, CatalogServiceError> {
    let usecase = GetVinylUseCase {
        vinyls: state.vinyl_repo(),
        songs: state.song_repo(),
        shelves: state.shelf_repo(),
    };
    let vinyl = usecase.execute(vinyl_id).await?;
    Ok(Json(vinyl))
}

// ── DELETE /api/vinyls/{id}/ ─────────────────────────────────────────────────

pub async fn delete_vinyl(
    State(state): State<AppState>,
    Path(vinyl_id): Path<i32>,
) -> Result<Json<VinylView>, CatalogServiceError> {
    let usecase = DeleteVinylUseCase {
        vinyls: state.vinyl_repo(),
        songs: state.song_repo(),
        shelves: state.shelf_repo(),
    };
    let vinyl = usecase.execute(vinyl_id).await?;
    Ok(Json(vinyl))
}
