use async_trait::async_trait;

use crate::domain::{NewPost, Post, User};
use crate::error::RepoError;

/// Generic read-side repository trait.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// List every entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// User repository. Users are read-only through this API.
pub trait UserRepository: BaseRepository<User, i64> {}

/// Post repository with the lifecycle operations.
///
/// `publish`, `unpublish` and `delete` fail with [`RepoError::NotFound`]
/// when the id does not resolve.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    async fn create(&self, input: NewPost) -> Result<Post, RepoError>;

    async fn publish(&self, id: i64) -> Result<Post, RepoError>;

    async fn unpublish(&self, id: i64) -> Result<Post, RepoError>;

    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
