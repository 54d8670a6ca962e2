use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;
use crate::error::DomainError;

/// Banner used when a blog is created without an image.
pub const DEFAULT_BANNER_URL: &str = "https://your-default-banner-url.com/default.jpg";

/// Comment embedded in a blog. Owned by its author, not by the blog's author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a blog.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub banner_image: Option<String>,
}

/// Partial update of a blog. `None` or blank values leave the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub banner_image: Option<String>,
}

impl BlogChanges {
    /// The requested category, if any. Unknown names are rejected here so
    /// callers can validate an edit before doing side effects for it.
    pub fn parsed_category(&self) -> Result<Option<Category>, DomainError> {
        match self.category.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Category::parse(name)
                .map(Some)
                .ok_or_else(|| DomainError::Validation(format!("Unknown category: {name}"))),
            _ => Ok(None),
        }
    }
}

/// Result of flipping a user's like on a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: usize,
}

/// A change to an existing aggregate, applied atomically by the repository.
#[derive(Debug, Clone)]
pub enum BlogMutation {
    Edit { user_id: Uuid, changes: BlogChanges },
    ToggleLike { user_id: Uuid },
    AddComment { author_id: Uuid, text: String },
    RemoveComment { user_id: Uuid, comment_id: Uuid },
}

/// What a [`BlogMutation`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Edited,
    Like(LikeToggle),
    CommentAdded(Comment),
    CommentRemoved(Comment),
}

/// Blog aggregate - a post together with the likes and comments it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub banner_image: String,
    pub category: Category,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog owned by `author_id`.
    ///
    /// Title and content must be non-blank. An absent or unknown category
    /// falls back to [`Category::All`].
    pub fn create(author_id: Uuid, draft: BlogDraft) -> Result<Self, DomainError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        if draft.content.trim().is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }

        let category = draft
            .category
            .as_deref()
            .and_then(Category::parse)
            .unwrap_or_default();
        let banner_image =
            non_blank(draft.banner_image).unwrap_or_else(|| DEFAULT_BANNER_URL.to_string());

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            title: title.to_string(),
            content: draft.content,
            banner_image,
            category,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Fail unless `user_id` wrote this blog.
    pub fn ensure_author(&self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_author(user_id) {
            Ok(())
        } else {
            Err(DomainError::Forbidden("only the author can modify this blog"))
        }
    }

    /// Merge `changes` over the current fields on behalf of `user_id`.
    pub fn apply_changes(
        &mut self,
        user_id: Uuid,
        changes: BlogChanges,
    ) -> Result<(), DomainError> {
        self.ensure_author(user_id)?;

        let category = changes.parsed_category()?;

        if let Some(title) = non_blank(changes.title) {
            self.title = title.trim().to_string();
        }
        if let Some(content) = non_blank(changes.content) {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(banner) = non_blank(changes.banner_image) {
            self.banner_image = banner;
        }
        self.updated_at = Utc::now();

        Ok(())
    }

    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }

    /// Like the blog if `user_id` has not yet, otherwise take the like back.
    pub fn toggle_like(&mut self, user_id: Uuid) -> LikeToggle {
        let liked = match self.likes.iter().position(|id| *id == user_id) {
            Some(index) => {
                self.likes.remove(index);
                false
            }
            None => {
                self.likes.push(user_id);
                true
            }
        };

        LikeToggle {
            liked,
            likes_count: self.likes_count(),
        }
    }

    /// Append a comment by `author_id`. The stored text is trimmed.
    pub fn add_comment(&mut self, author_id: Uuid, text: &str) -> Result<&Comment, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::Validation(
                "Comment text is required".to_string(),
            ));
        }

        self.comments.push(Comment {
            id: Uuid::new_v4(),
            author_id,
            text: text.to_string(),
            created_at: Utc::now(),
        });

        Ok(&self.comments[self.comments.len() - 1])
    }

    /// Remove a comment. Only the comment's own author may do this.
    pub fn remove_comment(
        &mut self,
        user_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Comment, DomainError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| DomainError::comment_not_found(comment_id))?;

        if self.comments[index].author_id != user_id {
            return Err(DomainError::Forbidden(
                "only the comment's author can delete it",
            ));
        }

        Ok(self.comments.remove(index))
    }

    /// Comments ordered by creation time; ties keep insertion order.
    pub fn comments_by_creation(&self) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self.comments.iter().collect();
        comments.sort_by_key(|c| c.created_at);
        comments
    }

    /// Run a mutation against this aggregate.
    pub fn apply(&mut self, mutation: BlogMutation) -> Result<MutationOutcome, DomainError> {
        match mutation {
            BlogMutation::Edit { user_id, changes } => {
                self.apply_changes(user_id, changes)?;
                Ok(MutationOutcome::Edited)
            }
            BlogMutation::ToggleLike { user_id } => {
                Ok(MutationOutcome::Like(self.toggle_like(user_id)))
            }
            BlogMutation::AddComment { author_id, text } => self
                .add_comment(author_id, &text)
                .map(|c| MutationOutcome::CommentAdded(c.clone())),
            BlogMutation::RemoveComment {
                user_id,
                comment_id,
            } => self
                .remove_comment(user_id, comment_id)
                .map(MutationOutcome::CommentRemoved),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
