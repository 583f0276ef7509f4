use crate::domain::repository::{ShelfRepository, SongRepository, VinylRepository};
use crate::domain::types::{NewVinyl, ShelfKind, Vinyl};
use crate::error::CatalogServiceError;
use crate::views::VinylView;

// ── ListVinyls ───────────────────────────────────────────────────────────────

pub struct ListVinylsUseCase<V: VinylRepository, T: SongRepository, S: ShelfRepository> {
    pub vinyls: V,
    pub songs: T,
    pub shelves: S,
}

impl<V: VinylRepository, T: SongRepository, S: ShelfRepository> ListVinylsUseCase<V, T, S> {
    pub async fn execute(&self) -> Result<Vec<VinylView>, CatalogServiceError> {
        let vinyls = self.vinyls.list().await?;
        let mut views = Vec::with_capacity(vinyls.len());
        for vinyl in vinyls {
            views.push(self.assemble(vinyl).await?);
        }
        Ok(views)
    }

    async fn assemble(&self, vinyl: Vinyl) -> Result<VinylView, CatalogServiceError> {
        let songs = self.songs.list_by_vinyl(vinyl.id).await?;
        let users = self.shelves.users_for_vinyl(vinyl.id).await?;
        Ok(VinylView::assemble(vinyl, songs, users))
    }
}

// ── GetVinyl ─────────────────────────────────────────────────────────────────

pub struct GetVinylUseCase<V: VinylRepository, T: SongRepository, S: ShelfRepository> {
    pub vinyls: V,
    pub songs: T,
    pub shelves: S,
}

impl<V: VinylRepository, T: SongRepository, S: ShelfRepository> GetVinylUseCase<V, T, S> {
    pub async fn execute(&self, vinyl_id: i32) -> Result<VinylView, CatalogServiceError> {
        let vinyl = self
            .vinyls
            .find_by_id(vinyl_id)
            .await?
            .ok_or(CatalogServiceError::VinylNotFound)?;
        let songs = self.songs.list_by_vinyl(vinyl.id).await?;
        let users = self.shelves.users_for_vinyl(vinyl.id).await?;
        Ok(VinylView::assemble(vinyl, songs, users))
    }
}

// ── CreateVinyl ──────────────────────────────────────────────────────────────

pub struct CreateVinylInput {
    pub name: String,
    pub artist: String,
    pub year: Option<String>,
    pub kind: String,
}

impl CreateVinylInput {
    fn into_new_vinyl(self) -> Result<NewVinyl, CatalogServiceError> {
        let kind = ShelfKind::parse(&self.kind).ok_or(CatalogServiceError::InvalidKind)?;
        Ok(NewVinyl {
            name: self.name,
            artist: self.artist,
            year: self.year,
            kind,
        })
    }
}

pub struct CreateVinylUseCase<V: VinylRepository> {
    pub vinyls: V,
}

impl<V: VinylRepository> CreateVinylUseCase<V> {
    pub async fn execute(&self, input: CreateVinylInput) -> Result<VinylView, CatalogServiceError> {
        let vinyl = self.vinyls.create(&input.into_new_vinyl()?).await?;
        // A fresh vinyl has no songs and no holders.
        Ok(VinylView::assemble(vinyl, Vec::new(), Vec::new()))
    }
}

// ── CreateManyVinyls ─────────────────────────────────────────────────────────

pub struct CreateManyVinylsUseCase<V: VinylRepository> {
    pub vinyls: V,
}

impl<V: VinylRepository> CreateManyVinylsUseCase<V> {
    /// All entries are validated before any row is written, so a bad
    /// entry rejects the whole batch.
    pub async fn execute(
        &self,
        inputs: Vec<CreateVinylInput>,
    ) -> Result<Vec<VinylView>, CatalogServiceError> {
        let mut pending = Vec::with_capacity(inputs.len());
        for input in inputs {
            pending.push(input.into_new_vinyl()?);
        }
        let mut views = Vec::with_capacity(pending.len());
        for new_vinyl in &pending {
            let vinyl = self.vinyls.create(new_vinyl).await?;
            views.push(VinylView::assemble(vinyl, Vec::new(), Vec::new()));
        }
        Ok(views)
    }
}

// ── DeleteVinyl ──────────────────────────────────────────────────────────────

pub struct DeleteVinylUseCase<V: VinylRepository, T: SongRepository, S: ShelfRepository> {
    pub vinyls: V,
    pub songs: T,
    pub shelves: S,
}

impl<V: VinylRepository, T: SongRepository, S: ShelfRepository> DeleteVinylUseCase<V, T, S> {
    /// Deletes the catalog entry and returns its final view. Songs and
    /// association rows cascade with the row.
    pub async fn execute(&self, vinyl_id: i32) -> Result<VinylView, CatalogServiceError> {
        let vinyl = self
            .vinyls
            .find_by_id(vinyl_id)
            .await?
            .ok_or(CatalogServiceError::VinylNotFound)?;
        let songs = self.songs.list_by_vinyl(vinyl.id).await?;
        let users = self.shelves.users_for_vinyl(vinyl.id).await?;
        let view = VinylView::assemble(vinyl, songs, users);
        self.vinyls.delete(vinyl_id).await?;
        Ok(view)
    }
}
