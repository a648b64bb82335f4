//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use postline_core::domain::{NewPost, Post};
use postline_core::error::RepoError;
use postline_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::Entity as UserEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl UserRepository for PostgresUserRepository {}

impl PostgresPostRepository {
    async fn load(&self, id: i64) -> Result<Post, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .map(Into::into)
            .ok_or_else(|| RepoError::not_found("Post", id))
    }

    /// Write back a loaded post. A row deleted since `load` is NotFound.
    async fn store(&self, post: Post) -> Result<Post, RepoError> {
        let id = post.id;
        let active: post::ActiveModel = post.into();
        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::not_found("Post", id),
            e => RepoError::Query(e.to_string()),
        })?;
        Ok(model.into())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(author_id = input.author_id, "Creating post");

        let active: post::ActiveModel = input.into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn publish(&self, id: i64) -> Result<Post, RepoError> {
        let mut post = self.load(id).await?;
        post.publish();
        tracing::debug!(post_id = id, "Publishing post");
        self.store(post).await
    }

    async fn unpublish(&self, id: i64) -> Result<Post, RepoError> {
        let mut post = self.load(id).await?;
        post.unpublish();
        tracing::debug!(post_id = id, "Unpublishing post");
        self.store(post).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::not_found("Post", id));
        }

        Ok(())
    }
}
