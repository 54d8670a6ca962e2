//! # Blogsite Core
//!
//! The domain layer of the blogging platform.
//! This crate contains the blog aggregate rules and the ports infrastructure
//! must implement, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
