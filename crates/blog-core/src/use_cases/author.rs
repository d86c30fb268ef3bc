use std::sync::Arc;

use crate::domain::Author;
use crate::error::DomainResult;
use crate::ports::AuthorRepository;

/// Author operations exposed to the API layer.
#[derive(Clone)]
pub struct AuthorUseCases {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorUseCases {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// Validate and persist a new author. Duplicate social security numbers are allowed.
    pub async fn create_author(
        &self,
        name: impl Into<String>,
        surname: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> DomainResult<Author> {
        let author = Author::new(name, surname, social_security_number)?;
        let saved = self.authors.add(author).await?;

        tracing::info!(author_id = saved.id(), "Author created");
        Ok(saved)
    }

    pub async fn list_authors(&self) -> DomainResult<Vec<Author>> {
        Ok(self.authors.get_all().await?)
    }
}
