use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, BlogMutation, MutationOutcome, User};
use crate::error::{DomainError, RepoError};

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their (normalized) email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Load every user whose id is in `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError>;
}

/// Blog aggregate repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// All blogs, newest first.
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError>;

    /// Load the blog under an exclusive lock, apply `mutation` and persist it.
    ///
    /// Returns the stored aggregate and what the mutation did. Nothing is
    /// written when the mutation is rejected.
    async fn apply(
        &self,
        id: Uuid,
        mutation: BlogMutation,
    ) -> Result<(Blog, MutationOutcome), DomainError>;
}
