//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains entities, their validation rules, the repository ports and the
//! use cases that orchestrate them. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{DomainError, DomainResult, RepoError};
pub use use_cases::{AuthorUseCases, PostUseCases};
