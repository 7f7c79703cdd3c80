//! Author domain model.
//!
//! # Responsibility
//! - Hold the validated author identity and name.
//! - Track which articles the author has written, in publication order.
//!
//! # Invariants
//! - `name` is non-empty and immutable after construction.
//! - The article list is append-only and never contains duplicates.

use crate::model::article::ArticleId;
use crate::model::validation::{
    check_article_refs, check_author_name, check_entity_id, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// A writer who contributes articles to magazines.
///
/// The article list is a non-owning secondary index of [`ArticleId`] handles;
/// the registry owns the articles themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorWire")]
pub struct Author {
    uuid: AuthorId,
    name: String,
    article_uuids: Vec<ArticleId>,
}

impl Author {
    /// Creates an author with a generated stable ID.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(uuid: AuthorId, name: impl Into<String>) -> ValidationResult<Self> {
        check_entity_id(uuid)?;
        let name = name.into();
        check_author_name(&name)?;
        Ok(Self {
            uuid,
            name,
            article_uuids: Vec::new(),
        })
    }

    /// Returns the stable author ID.
    pub fn uuid(&self) -> AuthorId {
        self.uuid
    }

    /// Returns the author's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the articles this author has written, in publication order.
    pub fn article_uuids(&self) -> &[ArticleId] {
        &self.article_uuids
    }

    /// Returns how many articles this author has written.
    pub fn article_count(&self) -> usize {
        self.article_uuids.len()
    }

    /// Returns whether the given article is already attributed to this author.
    pub fn has_article(&self, article_uuid: ArticleId) -> bool {
        self.article_uuids.contains(&article_uuid)
    }

    /// Attributes one article to this author.
    ///
    /// Idempotent: re-registering an already listed article is a no-op.
    /// Returns whether the list changed.
    pub fn register_article(&mut self, article_uuid: ArticleId) -> bool {
        if self.has_article(article_uuid) {
            return false;
        }
        self.article_uuids.push(article_uuid);
        true
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Author(name={})", self.name)
    }
}

/// Raw wire shape; converted through validation so deserialized input cannot
/// produce an invalid author.
#[derive(Deserialize)]
struct AuthorWire {
    uuid: AuthorId,
    name: String,
    #[serde(default)]
    article_uuids: Vec<ArticleId>,
}

impl TryFrom<AuthorWire> for Author {
    type Error = ValidationError;

    fn try_from(wire: AuthorWire) -> ValidationResult<Self> {
        let mut author = Author::with_id(wire.uuid, wire.name)?;
        check_article_refs(&wire.article_uuids)?;
        author.article_uuids = wire.article_uuids;
        Ok(author)
    }
}
