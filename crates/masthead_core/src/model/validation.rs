//! Entity validation rules and the shared validation error.
//!
//! # Responsibility
//! - Define the single error kind raised by every entity write path.
//! - Keep the length/non-emptiness bounds in one place.
//!
//! # Invariants
//! - All length bounds count characters, not bytes.
//! - A constructor or setter either commits a fully valid value or returns
//!   `ValidationError` without touching existing state.

use crate::model::article::ArticleId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum magazine name length in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length in characters.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Result type used by entity constructors and setters.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Error raised synchronously at the point of an invariant violation.
///
/// Never recovered internally; always surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty.
    EmptyAuthorName,
    /// Magazine name length is outside the 2..=16 character range.
    MagazineNameLength { length: usize },
    /// Magazine category is empty.
    EmptyMagazineCategory,
    /// Article title length is outside the 5..=50 character range.
    TitleLength { length: usize },
    /// Article titles never change once set.
    ImmutableTitle,
    /// Caller-provided entity id is the nil UUID.
    NilEntityId,
    /// Wire input carries the same article reference more than once.
    DuplicateArticleRef(ArticleId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { length } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and \
                 {MAGAZINE_NAME_MAX_CHARS} characters, got {length}"
            ),
            Self::EmptyMagazineCategory => {
                write!(f, "magazine category must be a non-empty string")
            }
            Self::TitleLength { length } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} \
                 characters, got {length}"
            ),
            Self::ImmutableTitle => {
                write!(f, "article title cannot be changed once it is set")
            }
            Self::NilEntityId => write!(f, "entity id must not be the nil uuid"),
            Self::DuplicateArticleRef(uuid) => {
                write!(f, "article reference listed more than once: {uuid}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Validates an author name.
pub(crate) fn check_author_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Validates a magazine name against the character-length window.
pub(crate) fn check_magazine_name(name: &str) -> ValidationResult<()> {
    let length = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::MagazineNameLength { length });
    }
    Ok(())
}

/// Validates a magazine category.
pub(crate) fn check_magazine_category(category: &str) -> ValidationResult<()> {
    if category.is_empty() {
        return Err(ValidationError::EmptyMagazineCategory);
    }
    Ok(())
}

/// Validates an article title against the character-length window.
pub(crate) fn check_article_title(title: &str) -> ValidationResult<()> {
    let length = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&length) {
        return Err(ValidationError::TitleLength { length });
    }
    Ok(())
}

/// Rejects the nil UUID for caller-provided identities.
pub(crate) fn check_entity_id(uuid: uuid::Uuid) -> ValidationResult<()> {
    if uuid.is_nil() {
        return Err(ValidationError::NilEntityId);
    }
    Ok(())
}

/// Rejects duplicated article references in wire input.
pub(crate) fn check_article_refs(article_uuids: &[ArticleId]) -> ValidationResult<()> {
    for (index, uuid) in article_uuids.iter().enumerate() {
        if article_uuids[..index].contains(uuid) {
            return Err(ValidationError::DuplicateArticleRef(*uuid));
        }
    }
    Ok(())
}
