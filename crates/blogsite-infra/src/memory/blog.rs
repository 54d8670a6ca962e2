use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogsite_core::DomainError;
use blogsite_core::domain::{Blog, BlogMutation, MutationOutcome};
use blogsite_core::error::RepoError;
use blogsite_core::ports::{BaseRepository, BlogRepository};

/// Blog store backed by a `HashMap` behind an async `RwLock`.
///
/// `apply` holds the write lock for the whole load-mutate-store cycle.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: RwLock<HashMap<Uuid, Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.blogs.read().await.get(&id).cloned())
    }

    async fn create(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut blogs = self.blogs.write().await;
        if blogs.contains_key(&blog.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut blogs = self.blogs.write().await;
        match blogs.get_mut(&blog.id) {
            Some(existing) => {
                *existing = blog.clone();
                Ok(blog)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.blogs
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let mut blogs: Vec<Blog> = self.blogs.read().await.values().cloned().collect();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(blogs)
    }

    async fn apply(
        &self,
        id: Uuid,
        mutation: BlogMutation,
    ) -> Result<(Blog, MutationOutcome), DomainError> {
        let mut blogs = self.blogs.write().await;
        let stored = blogs
            .get_mut(&id)
            .ok_or_else(|| DomainError::blog_not_found(id))?;

        // Work on a copy so a rejected mutation leaves the store untouched.
        let mut updated = stored.clone();
        let outcome = updated.apply(mutation)?;
        *stored = updated.clone();

        Ok((updated, outcome))
    }
}
