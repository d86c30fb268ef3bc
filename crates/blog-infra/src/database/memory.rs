//! In-memory repositories - used when no database is configured, and in tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Author, AuthorRecord, Post, PostRecord};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};

/// Shared storage behind the in-memory author and post repositories.
///
/// Posts are stored without their author; it is joined back in on read when requested.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryStore {
    authors: RwLock<BTreeMap<i32, AuthorRecord>>,
    posts: RwLock<BTreeMap<i32, PostRecord>>,
    last_author_id: AtomicI32,
    last_post_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn author_repository(self: &Arc<Self>) -> InMemoryAuthorRepository {
        InMemoryAuthorRepository {
            store: Arc::clone(self),
        }
    }

    pub fn post_repository(self: &Arc<Self>) -> InMemoryPostRepository {
        InMemoryPostRepository {
            store: Arc::clone(self),
        }
    }

    async fn attach_author(&self, mut record: PostRecord, include_author: bool) -> Post {
        if include_author {
            let authors = self.authors.read().await;
            record.author = authors
                .get(&record.author_id)
                .cloned()
                .map(Author::from_record);
        }
        Post::from_record(record)
    }
}

/// In-memory author repository. Ids are assigned sequentially from 1.
pub struct InMemoryAuthorRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        let authors = self.store.authors.read().await;
        Ok(authors.get(&id).cloned().map(Author::from_record))
    }

    async fn get_all(&self) -> Result<Vec<Author>, RepoError> {
        let authors = self.store.authors.read().await;
        Ok(authors.values().cloned().map(Author::from_record).collect())
    }

    async fn add(&self, author: Author) -> Result<Author, RepoError> {
        let id = self.store.last_author_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = AuthorRecord {
            id,
            ..author.into_record()
        };

        self.store.authors.write().await.insert(id, record.clone());
        Ok(Author::from_record(record))
    }

    async fn update(&self, author: &Author) -> Result<(), RepoError> {
        let mut authors = self.store.authors.write().await;
        let slot = authors.get_mut(&author.id()).ok_or(RepoError::NotFound)?;
        *slot = author.clone().into_record();
        Ok(())
    }

    /// Removing an author also removes its posts, matching the cascading foreign key.
    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        // Lock order: authors before posts.
        let mut authors = self.store.authors.write().await;
        if authors.remove(&id).is_some() {
            let mut posts = self.store.posts.write().await;
            posts.retain(|_, post| post.author_id != id);
        }
        Ok(())
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn get_by_id(&self, id: i32, include_author: bool) -> Result<Option<Post>, RepoError> {
        let record = self.store.posts.read().await.get(&id).cloned();
        match record {
            Some(record) => Ok(Some(self.store.attach_author(record, include_author).await)),
            None => Ok(None),
        }
    }

    async fn list(&self, include_author: bool) -> Result<Vec<Post>, RepoError> {
        let records: Vec<PostRecord> = self.store.posts.read().await.values().cloned().collect();

        let mut posts = Vec::with_capacity(records.len());
        for record in records {
            posts.push(self.store.attach_author(record, include_author).await);
        }
        Ok(posts)
    }

    async fn add(&self, post: Post) -> Result<Post, RepoError> {
        let mut record = post.into_record();

        // Lock order: authors before posts. The authors guard spans the insert.
        let authors = self.store.authors.read().await;
        if !authors.contains_key(&record.author_id) {
            return Err(RepoError::Constraint(format!(
                "author {} does not exist",
                record.author_id
            )));
        }

        record.id = self.store.last_post_id.fetch_add(1, Ordering::SeqCst) + 1;
        let author = record.author.take();
        self.store
            .posts
            .write()
            .await
            .insert(record.id, record.clone());
        drop(authors);

        record.author = author;
        Ok(Post::from_record(record))
    }

    async fn update(&self, post: &Post) -> Result<(), RepoError> {
        let mut posts = self.store.posts.write().await;
        let slot = posts.get_mut(&post.id()).ok_or(RepoError::NotFound)?;

        let mut record = post.clone().into_record();
        record.author = None;
        *slot = record;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.store.posts.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with_author() -> (Arc<InMemoryStore>, Author) {
        let store = InMemoryStore::new();
        let author = store
            .author_repository()
            .add(Author::new("Ellen", "Sano", "12345678901").unwrap())
            .await
            .unwrap();
        (store, author)
    }

    #[tokio::test]
    async fn test_add_author_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let repo = store.author_repository();

        let first = repo
            .add(Author::new("Ellen", "Sano", "12345678901").unwrap())
            .await
            .unwrap();
        let second = repo
            .add(Author::new("Alexander", "Lystad", "12345678901").unwrap())
            .await
            .unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(repo.get_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_get_post_populates_author_only_on_request() {
        let (store, author) = store_with_author().await;
        let posts = store.post_repository();

        let post = Post::new("Test Post", "Test Description", "Test Content", author).unwrap();
        let saved = posts.add(post).await.unwrap();
        assert_eq!(saved.id(), 1);
        assert_eq!(saved.author().map(Author::name), Some("Ellen"));

        let with_author = posts.get_by_id(1, true).await.unwrap().unwrap();
        assert_eq!(with_author.author().map(Author::name), Some("Ellen"));

        let without_author = posts.get_by_id(1, false).await.unwrap().unwrap();
        assert!(without_author.author().is_none());
        assert_eq!(without_author.author_id(), 1);
    }

    #[tokio::test]
    async fn test_add_post_for_unknown_author_is_rejected() {
        let store = InMemoryStore::new();
        let orphan = Author::from_record(AuthorRecord {
            id: 999,
            name: "Ellen".to_string(),
            surname: "Sano".to_string(),
            social_security_number: "12345678901".to_string(),
        });
        let post = Post::new("Test Post", "", "Test Content", orphan).unwrap();

        let result = store.post_repository().add(post).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let (store, author) = store_with_author().await;
        let post = Post::new("Test Post", "", "Test Content", author).unwrap();

        let result = store.post_repository().update(&post).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_post_keeps_author() {
        let (store, author) = store_with_author().await;
        let posts = store.post_repository();
        let saved = posts
            .add(Post::new("Test Post", "", "Test Content", author.clone()).unwrap())
            .await
            .unwrap();

        posts.delete(saved.id()).await.unwrap();
        // Deleting twice is a no-op.
        posts.delete(saved.id()).await.unwrap();

        assert!(posts.get_by_id(saved.id(), true).await.unwrap().is_none());
        assert_eq!(
            store.author_repository().get_by_id(author.id()).await.unwrap(),
            Some(author)
        );
    }

    #[tokio::test]
    async fn test_delete_author_removes_its_posts() {
        let (store, author) = store_with_author().await;
        let posts = store.post_repository();
        posts
            .add(Post::new("Test Post", "", "Test Content", author.clone()).unwrap())
            .await
            .unwrap();

        store.author_repository().delete(author.id()).await.unwrap();

        assert!(posts.list(false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_author_delete_never_orphans_posts() {
        for _ in 0..50 {
            let (store, author) = store_with_author().await;
            let posts = store.post_repository();
            let authors = store.author_repository();
            let author_id = author.id();

            let add = tokio::spawn(async move {
                posts
                    .add(Post::new("Test Post", "", "Test Content", author).unwrap())
                    .await
            });
            let delete = tokio::spawn(async move { authors.delete(author_id).await });

            let added = add.await.unwrap();
            delete.await.unwrap().unwrap();

            // Either the insert lost the race and was rejected, or the cascade removed it.
            assert!(matches!(added, Ok(_) | Err(RepoError::Constraint(_))));
            assert!(store.post_repository().list(false).await.unwrap().is_empty());
        }
    }
}
