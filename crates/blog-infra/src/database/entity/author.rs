//! Author entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{Author, AuthorRecord};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub social_security_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author::from_record(AuthorRecord {
            id: model.id,
            name: model.name,
            surname: model.surname,
            social_security_number: model.social_security_number,
        })
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
/// An unpersisted author (id 0) leaves the key to the database sequence.
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        let record = author.into_record();
        Self {
            id: if record.id == 0 { NotSet } else { Set(record.id) },
            name: Set(record.name),
            surname: Set(record.surname),
            social_security_number: Set(record.social_security_number),
        }
    }
}
