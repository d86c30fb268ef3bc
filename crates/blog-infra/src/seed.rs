//! Default data for a fresh store.

use blog_core::DomainResult;
use blog_core::domain::Author;
use blog_core::ports::AuthorRepository;

const DEFAULT_AUTHORS: [(&str, &str, &str); 2] = [
    ("Ellen", "Sano", "12345678901"),
    ("Alexander", "Lystad", "98765432109"),
];

/// Insert the default authors when the author store is empty.
///
/// Returns how many authors were inserted.
pub async fn seed_default_authors(authors: &dyn AuthorRepository) -> DomainResult<usize> {
    if !authors.get_all().await?.is_empty() {
        tracing::debug!("Authors already present, skipping seed");
        return Ok(0);
    }

    for (name, surname, ssn) in DEFAULT_AUTHORS {
        authors.add(Author::new(name, surname, ssn)?).await?;
    }

    tracing::info!(count = DEFAULT_AUTHORS.len(), "Seeded default authors");
    Ok(DEFAULT_AUTHORS.len())
}
