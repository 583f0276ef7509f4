use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::asset::{AttachVinylImageUseCase, IngestAssetUseCase};
use crate::views::AssetView;

#[derive(Deserialize)]
pub struct UploadRequest {
    pub image_data: Option<String>,
}

// ── POST /upload/ ────────────────────────────────────────────────────────────

pub async fn create_asset(
    State(state): State<AppState>,
    Json(body): Json<UploadRequest>,
) -> Result<(StatusCode, Json<AssetView>), CatalogServiceError> {
    let image_data = body
        .image_data
        .ok_or(CatalogServiceError::MissingField("image_data"))?;
    let usecase = IngestAssetUseCase {
        assets: state.asset_repo(),
        store: state.object_store(),
        upload_timeout: state.upload_timeout,
    };
    let asset = usecase.execute(&image_data).await?;
    Ok((StatusCode::CREATED, Json(AssetView::from(asset))))
}

// ── POST /upload/{vinyl_id}/ ─────────────────────────────────────────────────

pub async fn create_vinyl_asset(
    State(state): State<AppState>,
    Path(vinyl_id): Path<i32>,
    Json(body): Json<UploadRequest>,
) -> Result<(StatusCode, Json<AssetView>), CatalogServiceError> {
    let image_data = body
        .image_data
        .ok_or(CatalogServiceError::MissingField("image_data"))?;
    let usecase = AttachVinylImageUseCase {
        ingest: IngestAssetUseCase {
            assets: state.asset_repo(),
            store: state.object_store(),
            upload_timeout: state.upload_timeout,
        },
        vinyls: state.vinyl_repo(),
    };
    let asset = usecase.execute(vinyl_id, &image_data).await?;
    Ok((StatusCode::CREATED, Json(AssetView::from(asset))))
}
