//! Rendering of domain aggregates into response DTOs.
//!
//! Authors are looked up once per response so a page of blogs costs a single
//! user query.

use std::collections::HashMap;

use uuid::Uuid;

use blogsite_core::domain::{Blog, Comment, User};
use blogsite_core::error::RepoError;
use blogsite_core::ports::UserRepository;
use blogsite_shared::dto::{AuthorResponse, BlogResponse, CommentResponse, UserResponse};

/// Users referenced by a set of blogs, keyed by id.
#[derive(Debug, Default)]
pub struct Authors(HashMap<Uuid, User>);

impl Authors {
    /// Load the blog authors and every comment author of `blogs`.
    pub async fn load(users: &dyn UserRepository, blogs: &[&Blog]) -> Result<Self, RepoError> {
        let mut ids: Vec<Uuid> = blogs
            .iter()
            .flat_map(|blog| {
                std::iter::once(blog.author_id).chain(blog.comments.iter().map(|c| c.author_id))
            })
            .collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(Self::default());
        }

        let found = users.find_by_ids(&ids).await?;
        Ok(Self(found.into_iter().map(|user| (user.id, user)).collect()))
    }

    fn author(&self, id: Uuid) -> Option<AuthorResponse> {
        self.0.get(&id).map(|user| AuthorResponse {
            id: user.id.to_string(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            name: user.display_name(),
        })
    }

    pub fn comment(&self, comment: &Comment) -> CommentResponse {
        CommentResponse {
            id: comment.id.to_string(),
            author_id: comment.author_id.to_string(),
            author: self.author(comment.author_id),
            text: comment.text.clone(),
            created_at: comment.created_at.to_rfc3339(),
        }
    }

    /// Comments of `blog`, oldest first.
    pub fn comments(&self, blog: &Blog) -> Vec<CommentResponse> {
        blog.comments_by_creation()
            .into_iter()
            .map(|comment| self.comment(comment))
            .collect()
    }

    pub fn blog(&self, blog: &Blog) -> BlogResponse {
        BlogResponse {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            content: blog.content.clone(),
            banner_image: blog.banner_image.clone(),
            category: blog.category.to_string(),
            author_id: blog.author_id.to_string(),
            author: self.author(blog.author_id),
            likes: blog.likes.iter().map(Uuid::to_string).collect(),
            likes_count: blog.likes_count(),
            comments: self.comments(blog),
            created_at: blog.created_at.to_rfc3339(),
            updated_at: blog.updated_at.to_rfc3339(),
        }
    }
}

pub fn user(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        firstname: user.firstname.clone(),
        lastname: user.lastname.clone(),
        email: user.email.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}
