use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, CleanDraft};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch every entity, in whatever order the store returns them.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Replace title, image and body of the blog with the given ID.
    ///
    /// `id` and `created` are never touched. Fails with [`RepoError::NotFound`]
    /// when no blog has that ID.
    async fn update(&self, id: Uuid, draft: CleanDraft) -> Result<Blog, RepoError>;
}
