use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder,
};

use spindle_catalog_schema::{assets, associations, songs, users, vinyls};

use crate::domain::repository::{
    AssetRepository, ShelfRepository, SongRepository, UserRepository, VinylRepository,
};
use crate::domain::types::{Asset, NewAsset, NewVinyl, ShelfEntry, ShelfKind, Song, User, Vinyl};
use crate::error::CatalogServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, username: &str, bio: Option<&str>) -> Result<User, CatalogServiceError> {
        let model = users::ActiveModel {
            username: Set(username.to_owned()),
            bio: Set(bio.map(str::to_owned)),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(user_from_model(model))
    }

    async fn update_profile(
        &self,
        id: i32,
        username: Option<&str>,
        bio: Option<&str>,
    ) -> Result<(), CatalogServiceError> {
        if username.is_none() && bio.is_none() {
            return Ok(());
        }
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_username) = username {
            am.username = Set(new_username.to_owned());
        }
        if let Some(new_bio) = bio {
            am.bio = Set(Some(new_bio.to_owned()));
        }
        am.update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let result = users::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        bio: model.bio,
    }
}

// ── Vinyl repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVinylRepository {
    pub db: DatabaseConnection,
}

impl VinylRepository for DbVinylRepository {
    async fn list(&self) -> Result<Vec<Vinyl>, CatalogServiceError> {
        let models = vinyls::Entity::find()
            .order_by_asc(vinyls::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(vinyl_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vinyl>, CatalogServiceError> {
        let model = vinyls::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(vinyl_from_model))
    }

    async fn create(&self, vinyl: &NewVinyl) -> Result<Vinyl, CatalogServiceError> {
        let model = vinyls::ActiveModel {
            name: Set(vinyl.name.clone()),
            artist: Set(vinyl.artist.clone()),
            year: Set(vinyl.year.clone()),
            img: Set(None),
            kind: Set(Some(vinyl.kind.as_str().to_owned())),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(vinyl_from_model(model))
    }

    async fn update_img(&self, id: i32, img: &str) -> Result<(), CatalogServiceError> {
        let am = vinyls::ActiveModel {
            id: Set(id),
            img: Set(Some(img.to_owned())),
            ..Default::default()
        };
        am.update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        // Songs and association rows cascade at the schema level.
        let result = vinyls::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

fn vinyl_from_model(model: vinyls::Model) -> Vinyl {
    Vinyl {
        id: model.id,
        name: model.name,
        artist: model.artist,
        year: model.year,
        img: model.img,
        kind: model.kind,
    }
}

// ── Song repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSongRepository {
    pub db: DatabaseConnection,
}

impl SongRepository for DbSongRepository {
    async fn list_by_vinyl(&self, vinyl_id: i32) -> Result<Vec<Song>, CatalogServiceError> {
        let models = songs::Entity::find()
            .filter(songs::Column::VinylId.eq(vinyl_id))
            .order_by_asc(songs::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(song_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Song>, CatalogServiceError> {
        let model = songs::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(song_from_model))
    }

    async fn create(&self, name: &str, vinyl_id: i32) -> Result<Song, CatalogServiceError> {
        let model = songs::ActiveModel {
            name: Set(name.to_owned()),
            vinyl_id: Set(vinyl_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(song_from_model(model))
    }

    async fn update_name(&self, id: i32, name: &str) -> Result<(), CatalogServiceError> {
        let am = songs::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            ..Default::default()
        };
        am.update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let result = songs::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

fn song_from_model(model: songs::Model) -> Song {
    Song {
        id: model.id,
        name: model.name,
        vinyl_id: model.vinyl_id,
    }
}

// ── Asset repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssetRepository {
    pub db: DatabaseConnection,
}

impl AssetRepository for DbAssetRepository {
    async fn create(&self, asset: &NewAsset) -> Result<Asset, CatalogServiceError> {
        let model = assets::ActiveModel {
            base_url: Set(Some(asset.base_url.clone())),
            salt: Set(asset.salt.clone()),
            extension: Set(asset.extension.clone()),
            width: Set(asset.width),
            height: Set(asset.height),
            created_at: Set(asset.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(asset_from_model(model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Asset>, CatalogServiceError> {
        let model = assets::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(asset_from_model))
    }
}

fn asset_from_model(model: assets::Model) -> Asset {
    Asset {
        id: model.id,
        base_url: model.base_url,
        salt: model.salt,
        extension: model.extension,
        width: model.width,
        height: model.height,
        created_at: model.created_at,
    }
}

// ── Shelf repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbShelfRepository {
    pub db: DatabaseConnection,
}

impl ShelfRepository for DbShelfRepository {
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<ShelfEntry>, CatalogServiceError> {
        // Association ids are serial, so ascending id = insertion order.
        let rows = associations::Entity::find()
            .filter(associations::Column::UserId.eq(user_id))
            .order_by_asc(associations::Column::Id)
            .find_also_related(vinyls::Entity)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(assoc, vinyl)| {
                vinyl.map(|v| ShelfEntry {
                    vinyl: vinyl_from_model(v),
                    kind: assoc.kind,
                })
            })
            .collect())
    }

    async fn users_for_vinyl(&self, vinyl_id: i32) -> Result<Vec<User>, CatalogServiceError> {
        let rows = associations::Entity::find()
            .filter(associations::Column::VinylId.eq(vinyl_id))
            .order_by_asc(associations::Column::Id)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user.map(user_from_model))
            .collect())
    }

    async fn add(
        &self,
        user_id: i32,
        vinyl_id: i32,
        kind: ShelfKind,
    ) -> Result<(), CatalogServiceError> {
        let existing = associations::Entity::find()
            .filter(associations::Column::UserId.eq(user_id))
            .filter(associations::Column::VinylId.eq(vinyl_id))
            .one(&self.db)
            .await?;

        match existing {
            Some(row) if row.kind == kind.as_str() => Ok(()),
            Some(row) => {
                let mut am = row.into_active_model();
                am.kind = Set(kind.as_str().to_owned());
                am.update(&self.db).await?;
                Ok(())
            }
            None => {
                associations::ActiveModel {
                    user_id: Set(user_id),
                    vinyl_id: Set(vinyl_id),
                    kind: Set(kind.as_str().to_owned()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?;
                Ok(())
            }
        }
    }

    async fn remove(&self, user_id: i32, vinyl_id: i32) -> Result<bool, CatalogServiceError> {
        let result = associations::Entity::delete_many()
            .filter(associations::Column::UserId.eq(user_id))
            .filter(associations::Column::VinylId.eq(vinyl_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
