//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use blog_core::ports::{AuthorRepository, PostRepository};
use blog_core::{AuthorUseCases, PostUseCases};
use blog_infra::database::InMemoryStore;
use blog_infra::seed_default_authors;

use crate::config::AppConfig;

/// Which repository implementation backs the running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    InMemory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::InMemory => "in-memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorUseCases,
    pub posts: PostUseCases,
    pub storage: StorageBackend,
}

type Repositories = (
    Arc<dyn AuthorRepository>,
    Arc<dyn PostRepository>,
    StorageBackend,
);

impl AppState {
    /// Build the application state with the repositories the configuration asks for,
    /// then seed default authors if enabled.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let (authors, posts, storage) = Self::repositories(config).await?;

        if config.seed_database {
            seed_default_authors(authors.as_ref())
                .await
                .context("seeding default authors")?;
        }

        tracing::info!(storage = storage.as_str(), "Application state initialized");
        Ok(Self::from_repositories(authors, posts, storage))
    }

    /// State backed by a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let (authors, posts, storage) = in_memory_repositories();
        Self::from_repositories(authors, posts, storage)
    }

    fn from_repositories(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        storage: StorageBackend,
    ) -> Self {
        Self {
            authors: AuthorUseCases::new(Arc::clone(&authors)),
            posts: PostUseCases::new(posts, authors),
            storage,
        }
    }

    #[cfg(feature = "postgres")]
    async fn repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
        use blog_infra::database::{PostgresAuthorRepository, PostgresPostRepository, connect};
        use migration::{Migrator, MigratorTrait};

        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(in_memory_repositories());
        };

        let conn = match connect(db_config).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Ok(in_memory_repositories());
            }
        };

        if config.run_migrations {
            Migrator::up(&conn, None)
                .await
                .context("applying schema migrations")?;
            tracing::info!("Schema migrations applied");
        }

        Ok((
            Arc::new(PostgresAuthorRepository::new(conn.clone())),
            Arc::new(PostgresPostRepository::new(conn)),
            StorageBackend::Postgres,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(_config: &AppConfig) -> anyhow::Result<Repositories> {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Ok(in_memory_repositories())
    }
}

fn in_memory_repositories() -> Repositories {
    let store = InMemoryStore::new();
    (
        Arc::new(store.author_repository()),
        Arc::new(store.post_repository()),
        StorageBackend::InMemory,
    )
}
