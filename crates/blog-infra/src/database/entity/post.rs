//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{Author, Post, PostRecord};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert into a domain Post, attaching the author when it was loaded.
    pub fn into_domain(self, author: Option<Author>) -> Post {
        Post::from_record(PostRecord {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            description: self.description,
            content: self.content,
            created_at: self.created_at.into(),
            author,
        })
    }
}

/// Conversion from SeaORM Model to Domain Post, without its author.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        model.into_domain(None)
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        let record = post.into_record();
        Self {
            id: if record.id == 0 { NotSet } else { Set(record.id) },
            author_id: Set(record.author_id),
            title: Set(record.title),
            description: Set(record.description),
            content: Set(record.content),
            created_at: Set(record.created_at.into()),
        }
    }
}
