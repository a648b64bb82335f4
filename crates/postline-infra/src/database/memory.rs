//! In-memory entity store - used when no database is configured.
//!
//! Data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postline_core::domain::{NewPost, Post, User};
use postline_core::error::RepoError;
use postline_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Read-only user table.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Seed the table; users are keyed by their own id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

impl UserRepository for InMemoryUserRepository {}

struct PostTable {
    rows: BTreeMap<i64, Post>,
    next_id: i64,
}

/// Post table with a monotonic id sequence; deleted ids are never reissued.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PostTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    async fn update_with(&self, id: i64, f: impl FnOnce(&mut Post)) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("Post", id))?;
        f(post);
        Ok(post.clone())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let post = Post::new(id, input);
        table.rows.insert(id, post.clone());
        tracing::debug!(post_id = id, "Post created in memory");

        Ok(post)
    }

    async fn publish(&self, id: i64) -> Result<Post, RepoError> {
        self.update_with(id, Post::publish).await
    }

    async fn unpublish(&self, id: i64) -> Result<Post, RepoError> {
        self.update_with(id, Post::unpublish).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Post", id))
    }
}
