//! # Blog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - without `postgres`, only the in-memory repositories are built

pub mod database;
pub mod seed;

// Re-exports - In-Memory
pub use database::{InMemoryAuthorRepository, InMemoryPostRepository, InMemoryStore};
pub use seed::seed_default_authors;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
