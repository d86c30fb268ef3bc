//! Use cases - orchestration of entity construction and repository calls.
//!
//! Each operation is a short sequence of awaited repository calls. No lock is held between
//! a fetch and the following persist, so concurrent updates of the same post are
//! last-writer-wins.

mod author;
mod post;

pub use author::AuthorUseCases;
pub use post::PostUseCases;
