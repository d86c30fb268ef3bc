//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder};

use blog_core::domain::{Author, Post};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

fn write_error(err: DbErr) -> RepoError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }

    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") || err_str.contains("foreign key")
    {
        RepoError::Constraint(err_str)
    } else {
        query_error(err)
    }
}

/// PostgreSQL author repository.
pub struct PostgresAuthorRepository {
    db: DbConn,
}

impl PostgresAuthorRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        let result = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn get_all(&self) -> Result<Vec<Author>, RepoError> {
        let result = AuthorEntity::find()
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn add(&self, author: Author) -> Result<Author, RepoError> {
        let model = author::ActiveModel::from(author)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        tracing::debug!(author_id = model.id, "Inserted author");
        Ok(model.into())
    }

    async fn update(&self, author: &Author) -> Result<(), RepoError> {
        author::ActiveModel::from(author.clone())
            .update(&self.db)
            .await
            .map_err(write_error)?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = AuthorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(author_id = id, "Author already absent, nothing deleted");
        }

        Ok(())
    }
}

/// PostgreSQL post repository. Authors are joined in only when asked for.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn get_by_id(&self, id: i32, include_author: bool) -> Result<Option<Post>, RepoError> {
        let query = PostEntity::find_by_id(id);

        if include_author {
            let result = query
                .find_also_related(AuthorEntity)
                .one(&self.db)
                .await
                .map_err(query_error)?;

            Ok(result.map(|(post, author)| post.into_domain(author.map(Into::into))))
        } else {
            let result = query.one(&self.db).await.map_err(query_error)?;
            Ok(result.map(Into::into))
        }
    }

    async fn list(&self, include_author: bool) -> Result<Vec<Post>, RepoError> {
        let query = PostEntity::find().order_by_asc(post::Column::Id);

        if include_author {
            let result = query
                .find_also_related(AuthorEntity)
                .all(&self.db)
                .await
                .map_err(query_error)?;

            Ok(result
                .into_iter()
                .map(|(post, author)| post.into_domain(author.map(Into::into)))
                .collect())
        } else {
            let result = query.all(&self.db).await.map_err(query_error)?;
            Ok(result.into_iter().map(Into::into).collect())
        }
    }

    async fn add(&self, post: Post) -> Result<Post, RepoError> {
        let author = post.author().cloned();
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        tracing::debug!(post_id = model.id, author_id = model.author_id, "Inserted post");
        Ok(model.into_domain(author))
    }

    async fn update(&self, post: &Post) -> Result<(), RepoError> {
        post::ActiveModel::from(post.clone())
            .update(&self.db)
            .await
            .map_err(write_error)?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(())
    }
}
