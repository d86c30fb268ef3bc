//! Domain entities - the core business objects.

mod author;
mod post;
mod validation;

pub use author::{Author, AuthorRecord};
pub use post::{Post, PostRecord};
