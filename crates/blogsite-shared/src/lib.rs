//! # Blogsite Shared
//!
//! Wire types shared between the API server and its clients.
//! Kept free of server dependencies so a frontend can compile it too.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
