use async_trait::async_trait;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Author persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find an author by id.
    async fn get_by_id(&self, id: i32) -> Result<Option<Author>, RepoError>;

    /// All authors, in repository order.
    async fn get_all(&self) -> Result<Vec<Author>, RepoError>;

    /// Insert a new author and return it with its assigned id.
    async fn add(&self, author: Author) -> Result<Author, RepoError>;

    /// Overwrite the stored state of an existing author.
    async fn update(&self, author: &Author) -> Result<(), RepoError>;

    /// Remove an author. Missing ids are a no-op.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Post persistence. `include_author` controls whether returned posts carry their author.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn get_by_id(&self, id: i32, include_author: bool) -> Result<Option<Post>, RepoError>;

    async fn list(&self, include_author: bool) -> Result<Vec<Post>, RepoError>;

    /// Insert a new post and return it with its assigned id.
    async fn add(&self, post: Post) -> Result<Post, RepoError>;

    async fn update(&self, post: &Post) -> Result<(), RepoError>;

    /// Remove a post. Its author is left in place; missing ids are a no-op.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
