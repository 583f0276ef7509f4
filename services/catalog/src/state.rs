use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAssetRepository, DbShelfRepository, DbSongRepository, DbUserRepository, DbVinylRepository,
};
use crate::infra::s3::S3ObjectStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub store: S3ObjectStore,
    pub upload_timeout: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn vinyl_repo(&self) -> DbVinylRepository {
        DbVinylRepository {
            db: self.db.clone(),
        }
    }

    pub fn song_repo(&self) -> DbSongRepository {
        DbSongRepository {
            db: self.db.clone(),
        }
    }

    pub fn asset_repo(&self) -> DbAssetRepository {
        DbAssetRepository {
            db: self.db.clone(),
        }
    }

    pub fn shelf_repo(&self) -> DbShelfRepository {
        DbShelfRepository {
            db: self.db.clone(),
        }
    }

    pub fn object_store(&self) -> S3ObjectStore {
        self.store.clone()
    }
}
