//! In-memory repositories - used when no database is configured and in tests.
//!
//! Note: Data is lost on process restart.

mod blog;
mod user;

pub use blog::InMemoryBlogRepository;
pub use user::InMemoryUserRepository;
