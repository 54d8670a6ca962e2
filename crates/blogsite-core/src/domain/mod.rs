//! Domain entities - the core business objects.

mod blog;
mod category;
mod user;

pub use blog::{
    Blog, BlogChanges, BlogDraft, BlogMutation, Comment, DEFAULT_BANNER_URL, LikeToggle,
    MutationOutcome,
};
pub use category::{Category, UnknownCategory};
pub use user::{User, normalize_email};
