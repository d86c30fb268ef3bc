use std::sync::Arc;

use crate::domain::Post;
use crate::error::{DomainError, DomainResult};
use crate::ports::{AuthorRepository, PostRepository};

/// Post operations exposed to the API layer.
#[derive(Clone)]
pub struct PostUseCases {
    posts: Arc<dyn PostRepository>,
    authors: Arc<dyn AuthorRepository>,
}

impl PostUseCases {
    pub fn new(posts: Arc<dyn PostRepository>, authors: Arc<dyn AuthorRepository>) -> Self {
        Self { posts, authors }
    }

    /// Create a post for an existing author.
    ///
    /// Fails with `NotFound` before any post is built or written when the author is missing.
    pub async fn create_post(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        author_id: i32,
    ) -> DomainResult<Post> {
        let author = self
            .authors
            .get_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::author_not_found(author_id))?;

        let post = Post::new(title, description, content, author)?;
        let saved = self.posts.add(post).await?;

        tracing::info!(post_id = saved.id(), author_id, "Post created");
        Ok(saved)
    }

    /// Fetch a post. A missing post is `Ok(None)`, not an error.
    pub async fn get_post(&self, id: i32, include_author: bool) -> DomainResult<Option<Post>> {
        Ok(self.posts.get_by_id(id, include_author).await?)
    }

    /// All posts, each with its author populated.
    pub async fn list_posts(&self) -> DomainResult<Vec<Post>> {
        Ok(self.posts.list(true).await?)
    }

    pub async fn update_post_content(
        &self,
        id: i32,
        new_content: impl Into<String>,
    ) -> DomainResult<()> {
        let mut post = self.existing_post(id).await?;
        post.update_content(new_content)?;
        self.posts.update(&post).await?;

        tracing::debug!(post_id = id, "Post content updated");
        Ok(())
    }

    pub async fn update_post_title(
        &self,
        id: i32,
        new_title: impl Into<String>,
    ) -> DomainResult<()> {
        let mut post = self.existing_post(id).await?;
        post.update_title(new_title)?;
        self.posts.update(&post).await?;

        tracing::debug!(post_id = id, "Post title updated");
        Ok(())
    }

    async fn existing_post(&self, id: i32) -> DomainResult<Post> {
        self.posts
            .get_by_id(id, false)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }
}
