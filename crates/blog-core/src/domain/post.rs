use chrono::{DateTime, Utc};

use super::author::Author;
use super::validation::{require_max_chars, require_not_blank};
use crate::error::DomainResult;

const TITLE_MAX_CHARS: usize = 200;

/// Post entity - represents a blog post written by an [`Author`].
///
/// Title and content are validated on construction and on every update. Description,
/// author and creation time are fixed once the post exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: i32,
    author_id: i32,
    title: String,
    description: String,
    content: String,
    created_at: DateTime<Utc>,
    author: Option<Author>,
}

/// Stored state of a post, as handed over by a repository.
///
/// `author` is only populated when the repository was asked to include it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<Author>,
}

impl Post {
    /// Create a new post for an already resolved author. `created_at` is stamped with the
    /// current UTC time.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        author: Author,
    ) -> DomainResult<Self> {
        let title = title.into();
        let content = content.into();

        validate_title(&title)?;
        validate_content(&content)?;

        Ok(Self {
            id: 0,
            author_id: author.id(),
            title,
            description: description.into(),
            content,
            created_at: Utc::now(),
            author: Some(author),
        })
    }

    /// Rebuild a post from persisted state without re-running validation.
    pub fn from_record(record: PostRecord) -> Self {
        Self {
            id: record.id,
            author_id: record.author_id,
            title: record.title,
            description: record.description,
            content: record.content,
            created_at: record.created_at,
            author: record.author,
        }
    }

    pub fn into_record(self) -> PostRecord {
        PostRecord {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            description: self.description,
            content: self.content,
            created_at: self.created_at,
            author: self.author,
        }
    }

    /// Replace the content. On failure the post is left untouched.
    pub fn update_content(&mut self, new_content: impl Into<String>) -> DomainResult<()> {
        let new_content = new_content.into();
        validate_content(&new_content)?;
        self.content = new_content;
        Ok(())
    }

    /// Replace the title. On failure the post is left untouched.
    pub fn update_title(&mut self, new_title: impl Into<String>) -> DomainResult<()> {
        let new_title = new_title.into();
        validate_title(&new_title)?;
        self.title = new_title;
        Ok(())
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn author_id(&self) -> i32 {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    require_not_blank(title, "Title cannot be empty")?;
    require_max_chars(
        title,
        TITLE_MAX_CHARS,
        "Title cannot be longer than 200 characters",
    )
}

fn validate_content(content: &str) -> DomainResult<()> {
    require_not_blank(content, "Content cannot be empty")
}
