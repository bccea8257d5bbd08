//! In-memory blog store - used when no database is configured, and as a test double.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Blog, CleanDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository};

/// In-memory blog repository backed by a `Vec` behind an async RwLock.
///
/// Blogs are returned in insertion order.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|b| b.id == blog.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        store.push(blog.clone());
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|b| b.id != id);

        if store.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn update(&self, id: Uuid, draft: CleanDraft) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        let blog = store
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(RepoError::NotFound)?;

        blog.apply(draft);
        Ok(blog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::BlogDraft;

    fn blog(title: &str) -> Blog {
        Blog::new(BlogDraft::new(title, "http://i", "body").sanitize())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryBlogRepository::new();
        let saved = repo.insert(blog("First")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryBlogRepository::new();
        repo.insert(blog("First")).await.unwrap();
        repo.insert(blog("Second")).await.unwrap();

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created() {
        let repo = InMemoryBlogRepository::new();
        let saved = repo.insert(blog("First")).await.unwrap();

        let updated = repo
            .update(saved.id, BlogDraft::new("T2", "http://j", "<i>new</i>").sanitize())
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created, saved.created);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.body, "<i>new</i>");
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryBlogRepository::new();
        let result = repo
            .update(Uuid::new_v4(), BlogDraft::new("T", "", "").sanitize())
            .await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryBlogRepository::new();
        let saved = repo.insert(blog("First")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
        assert!(matches!(repo.delete(saved.id).await, Err(RepoError::NotFound)));
    }
}
