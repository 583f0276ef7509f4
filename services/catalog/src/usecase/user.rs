use crate::domain::repository::{ShelfRepository, UserRepository};
use crate::error::CatalogServiceError;
use crate::views::UserView;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository, S: ShelfRepository> {
    pub users: U,
    pub shelves: S,
}

impl<U: UserRepository, S: ShelfRepository> ListUsersUseCase<U, S> {
    pub async fn execute(&self) -> Result<Vec<UserView>, CatalogServiceError> {
        let users = self.users.list().await?;
        let mut views = Vec::with_capacity(users.len());
        for user in users {
            let shelf = self.shelves.list_for_user(user.id).await?;
            views.push(UserView::assemble(user, shelf));
        }
        Ok(views)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository, S: ShelfRepository> {
    pub users: U,
    pub shelves: S,
}

impl<U: UserRepository, S: ShelfRepository> GetUserUseCase<U, S> {
    pub async fn execute(&self, user_id: i32) -> Result<UserView, CatalogServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        let shelf = self.shelves.list_for_user(user.id).await?;
        Ok(UserView::assemble(user, shelf))
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub bio: Option<String>,
}

pub struct CreateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> CreateUserUseCase<U> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<UserView, CatalogServiceError> {
        let user = self
            .users
            .create(&input.username, input.bio.as_deref())
            .await?;
        // A fresh user has no shelf entries yet.
        Ok(UserView::assemble(user, Vec::new()))
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository, S: ShelfRepository> {
    pub users: U,
    pub shelves: S,
}

impl<U: UserRepository, S: ShelfRepository> DeleteUserUseCase<U, S> {
    /// Deletes the user and returns the final view of the deleted row.
    /// Only association rows go with the user — vinyls are shared
    /// catalog entries and stay.
    pub async fn execute(&self, user_id: i32) -> Result<UserView, CatalogServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        let shelf = self.shelves.list_for_user(user.id).await?;
        let view = UserView::assemble(user, shelf);
        self.users.delete(user_id).await?;
        Ok(view)
    }
}
