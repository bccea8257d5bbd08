//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! With `postgres` disabled only the in-memory store is built.

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogRepository, TimedBlogRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresBlogRepository};
