//! Deadline enforcement for store calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use blog_core::domain::{Blog, CleanDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository};

/// Wraps a blog repository so that every call fails with [`RepoError::Timeout`]
/// once `limit` has elapsed.
pub struct TimedBlogRepository {
    inner: Arc<dyn BlogRepository>,
    limit: Duration,
}

impl TimedBlogRepository {
    pub fn new(inner: Arc<dyn BlogRepository>, limit: Duration) -> Self {
        Self { inner, limit }
    }

    async fn bounded<T>(
        &self,
        op: &'static str,
        fut: impl Future<Output = Result<T, RepoError>>,
    ) -> Result<T, RepoError> {
        match tokio::time::timeout(self.limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation = op, limit = ?self.limit, "Store call timed out");
                Err(RepoError::Timeout(self.limit))
            }
        }
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for TimedBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        self.bounded("find_by_id", self.inner.find_by_id(id)).await
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        self.bounded("find_all", self.inner.find_all()).await
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        self.bounded("insert", self.inner.insert(blog)).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.bounded("delete", self.inner.delete(id)).await
    }
}

#[async_trait]
impl BlogRepository for TimedBlogRepository {
    async fn update(&self, id: Uuid, draft: CleanDraft) -> Result<Blog, RepoError> {
        self.bounded("update", self.inner.update(id, draft)).await
    }
}
