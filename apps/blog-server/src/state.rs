//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogRepository;
use blog_infra::database::{InMemoryBlogRepository, TimedBlogRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresBlogRepository};

use crate::config::AppConfig;
use crate::views::Views;

/// Which store backs the blog repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub views: Arc<Views>,
    pub backend: StoreBackend,
}

impl AppState {
    /// Build the application state, connecting to the database once if one is configured.
    pub async fn new(config: &AppConfig, views: Views) -> Self {
        let (repo, backend) = Self::connect(config).await;

        tracing::info!(store = backend.as_str(), "Application state initialized");

        Self::with_repository(
            Arc::new(TimedBlogRepository::new(repo, config.store_timeout)),
            views,
            backend,
        )
    }

    /// Build state around an existing repository.
    pub fn with_repository(
        blogs: Arc<dyn BlogRepository>,
        views: Views,
        backend: StoreBackend,
    ) -> Self {
        Self {
            blogs,
            views: Arc::new(views),
            backend,
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &AppConfig) -> (Arc<dyn BlogRepository>, StoreBackend) {
        use migration::{Migrator, MigratorTrait};

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (Arc::new(InMemoryBlogRepository::new()), StoreBackend::Memory);
        };

        let connections = match DatabaseConnections::init(db_config).await {
            Ok(connections) => connections,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return (Arc::new(InMemoryBlogRepository::new()), StoreBackend::Memory);
            }
        };

        if config.auto_migrate {
            match Migrator::up(&connections.main, None).await {
                Ok(()) => tracing::info!("Database migrations applied"),
                Err(e) => tracing::error!("Failed to apply migrations: {}", e),
            }
        }

        (
            Arc::new(PostgresBlogRepository::new(connections.main)),
            StoreBackend::Postgres,
        )
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &AppConfig) -> (Arc<dyn BlogRepository>, StoreBackend) {
        tracing::info!("Running without postgres feature - using in-memory repository");
        (Arc::new(InMemoryBlogRepository::new()), StoreBackend::Memory)
    }
}
