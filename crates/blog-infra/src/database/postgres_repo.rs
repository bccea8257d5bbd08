//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::ActiveModelTrait;
use uuid::Uuid;

use blog_core::domain::{Blog, CleanDraft};
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

use super::entity::blog::{self, Entity as BlogEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn update(&self, id: Uuid, draft: CleanDraft) -> Result<Blog, RepoError> {
        tracing::debug!(blog_id = %id, "Updating blog");

        // `created` stays NotSet so the UPDATE never writes it.
        let changes = blog::ActiveModel {
            id: Unchanged(id),
            title: Set(draft.title().to_owned()),
            image: Set(draft.image().to_owned()),
            body: Set(draft.body().to_owned()),
            created: NotSet,
        };

        let model = changes.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}
