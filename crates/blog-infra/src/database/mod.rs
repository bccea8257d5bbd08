//! Blog storage: connection management and repository implementations.

mod connections;
mod memory;
mod timeout;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
pub use memory::InMemoryBlogRepository;
pub use timeout::TimedBlogRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresBlogRepository;
