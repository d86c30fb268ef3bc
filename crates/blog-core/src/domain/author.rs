use super::validation::{require_digits, require_exact_chars, require_max_chars, require_not_blank};
use crate::error::DomainResult;

const NAME_MAX_CHARS: usize = 100;
const SSN_LEN: usize = 11;

/// Author entity - represents a content creator.
///
/// Every field is validated by [`Author::new`]; the struct exposes read-only accessors so a
/// constructed author can never drift out of its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: i32,
    name: String,
    surname: String,
    social_security_number: String,
}

/// Stored state of an author, as handed over by a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub social_security_number: String,
}

impl Author {
    /// Create a new, not yet persisted author (id 0).
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let surname = surname.into();
        let social_security_number = social_security_number.into();

        require_not_blank(&name, "Name cannot be empty")?;
        require_max_chars(
            &name,
            NAME_MAX_CHARS,
            "Name cannot be longer than 100 characters",
        )?;

        require_not_blank(&surname, "Surname cannot be empty")?;
        require_max_chars(
            &surname,
            NAME_MAX_CHARS,
            "Surname cannot be longer than 100 characters",
        )?;

        require_not_blank(
            &social_security_number,
            "Social security number cannot be empty",
        )?;
        require_exact_chars(
            &social_security_number,
            SSN_LEN,
            "Social security number must be exactly 11 digits long",
        )?;
        require_digits(
            &social_security_number,
            "Social security number must contain only digits",
        )?;

        Ok(Self {
            id: 0,
            name,
            surname,
            social_security_number,
        })
    }

    /// Rebuild an author from persisted state. Validation is not re-run; the store only ever
    /// receives authors built through [`Author::new`].
    pub fn from_record(record: AuthorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            surname: record.surname,
            social_security_number: record.social_security_number,
        }
    }

    pub fn into_record(self) -> AuthorRecord {
        AuthorRecord {
            id: self.id,
            name: self.name,
            surname: self.surname,
            social_security_number: self.social_security_number,
        }
    }

    /// Identifier assigned by the repository, 0 until persisted.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn social_security_number(&self) -> &str {
        &self.social_security_number
    }
}
