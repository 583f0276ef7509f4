#![allow(async_fn_in_trait)]

use std::path::Path;

use crate::domain::types::{Asset, NewAsset, NewVinyl, ShelfEntry, ShelfKind, Song, User, Vinyl};
use crate::error::CatalogServiceError;

/// Repository for collector profiles.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError>;
    async fn create(&self, username: &str, bio: Option<&str>) -> Result<User, CatalogServiceError>;
    async fn update_profile(
        &self,
        id: i32,
        username: Option<&str>,
        bio: Option<&str>,
    ) -> Result<(), CatalogServiceError>;

    /// Delete a user. Association rows go with it; vinyls survive.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for catalog entries.
pub trait VinylRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Vinyl>, CatalogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Vinyl>, CatalogServiceError>;
    async fn create(&self, vinyl: &NewVinyl) -> Result<Vinyl, CatalogServiceError>;
    async fn update_img(&self, id: i32, img: &str) -> Result<(), CatalogServiceError>;

    /// Delete a vinyl. Songs and association rows cascade with it.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for tracks. No HTTP surface of its own — songs are read
/// when vinyls are serialized and die with their vinyl.
pub trait SongRepository: Send + Sync {
    async fn list_by_vinyl(&self, vinyl_id: i32) -> Result<Vec<Song>, CatalogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Song>, CatalogServiceError>;
    async fn create(&self, name: &str, vinyl_id: i32) -> Result<Song, CatalogServiceError>;
    async fn update_name(&self, id: i32, name: &str) -> Result<(), CatalogServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for uploaded cover images.
pub trait AssetRepository: Send + Sync {
    async fn create(&self, asset: &NewAsset) -> Result<Asset, CatalogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Asset>, CatalogServiceError>;
}

/// Repository for the user↔vinyl association rows (the "shelf").
pub trait ShelfRepository: Send + Sync {
    /// A user's shelf entries with their vinyls, in insertion order.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<ShelfEntry>, CatalogServiceError>;

    /// Users holding a vinyl on either shelf, in insertion order.
    async fn users_for_vinyl(&self, vinyl_id: i32) -> Result<Vec<User>, CatalogServiceError>;

    /// Upsert a pairing: re-adding an already-shelved vinyl switches its tag.
    async fn add(
        &self,
        user_id: i32,
        vinyl_id: i32,
        kind: ShelfKind,
    ) -> Result<(), CatalogServiceError>;

    /// Remove a pairing. Returns `true` if a row was deleted.
    async fn remove(&self, user_id: i32, vinyl_id: i32) -> Result<bool, CatalogServiceError>;
}

/// Port for the object-storage bucket holding uploaded images.
pub trait ObjectStorePort: Send + Sync {
    /// Public base URL objects are served from.
    fn base_url(&self) -> &str;

    async fn put_object(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), CatalogServiceError>;

    async fn set_public_read(&self, key: &str) -> Result<(), CatalogServiceError>;
}
