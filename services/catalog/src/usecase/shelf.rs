use crate::domain::repository::{ShelfRepository, UserRepository, VinylRepository};
use crate::domain::types::ShelfKind;
use crate::error::CatalogServiceError;
use crate::views::{UserView, VinylSummary};

// ── AddShelfEntry ────────────────────────────────────────────────────────────

pub struct AddShelfEntryInput {
    pub user_id: i32,
    pub vinyl_id: i32,
    pub kind: String,
}

pub struct AddShelfEntryUseCase<U, V, S>
where
    U: UserRepository,
    V: VinylRepository,
    S: ShelfRepository,
{
    pub users: U,
    pub vinyls: V,
    pub shelves: S,
}

impl<U, V, S> AddShelfEntryUseCase<U, V, S>
where
    U: UserRepository,
    V: VinylRepository,
    S: ShelfRepository,
{
    /// Put a vinyl on a user's shelf under the given tag. Re-adding an
    /// already-shelved vinyl switches its tag. Returns the updated user.
    pub async fn execute(&self, input: AddShelfEntryInput) -> Result<UserView, CatalogServiceError> {
        let kind = ShelfKind::parse(&input.kind).ok_or(CatalogServiceError::InvalidKind)?;
        let user = self
            .users
            .find_by_id(input.user_id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        self.vinyls
            .find_by_id(input.vinyl_id)
            .await?
            .ok_or(CatalogServiceError::VinylNotFound)?;

        self.shelves.add(user.id, input.vinyl_id, kind).await?;

        let shelf = self.shelves.list_for_user(user.id).await?;
        Ok(UserView::assemble(user, shelf))
    }
}

// ── RemoveShelfEntry ─────────────────────────────────────────────────────────

pub struct RemoveShelfEntryUseCase<U, V, S>
where
    U: UserRepository,
    V: VinylRepository,
    S: ShelfRepository,
{
    pub users: U,
    pub vinyls: V,
    pub shelves: S,
}

impl<U, V, S> RemoveShelfEntryUseCase<U, V, S>
where
    U: UserRepository,
    V: VinylRepository,
    S: ShelfRepository,
{
    /// Take a vinyl off a user's shelf. The vinyl itself stays in the
    /// catalog. Returns the updated user.
    pub async fn execute(
        &self,
        user_id: i32,
        vinyl_id: i32,
    ) -> Result<UserView, CatalogServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        self.vinyls
            .find_by_id(vinyl_id)
            .await?
            .ok_or(CatalogServiceError::VinylNotFound)?;

        self.shelves.remove(user_id, vinyl_id).await?;

        let shelf = self.shelves.list_for_user(user.id).await?;
        Ok(UserView::assemble(user, shelf))
    }
}

// ── ListUserVinyls ───────────────────────────────────────────────────────────

pub struct ListUserVinylsUseCase<U: UserRepository, S: ShelfRepository> {
    pub users: U,
    pub shelves: S,
}

impl<U: UserRepository, S: ShelfRepository> ListUserVinylsUseCase<U, S> {
    /// Every vinyl on the user's shelf, both tags, in insertion order.
    pub async fn execute(&self, user_id: i32) -> Result<Vec<VinylSummary>, CatalogServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        let shelf = self.shelves.list_for_user(user.id).await?;
        Ok(shelf.into_iter().map(|entry| entry.vinyl.into()).collect())
    }
}
