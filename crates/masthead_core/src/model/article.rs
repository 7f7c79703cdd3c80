//! Article domain model.
//!
//! # Responsibility
//! - Hold the validated, immutable article title.
//! - Reference exactly one author and one magazine by stable handle.
//!
//! # Invariants
//! - `title` is always 5..=50 characters and never changes once set.
//! - `author_uuid` and `magazine_uuid` are fixed at construction.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{
    check_article_title, check_entity_id, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// A published piece joining one author to one magazine.
///
/// Articles are the join entity of the model: authors and magazines point
/// back at them through non-owning handle lists, while the registry owns the
/// article records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleWire")]
pub struct Article {
    uuid: ArticleId,
    title: String,
    author_uuid: AuthorId,
    magazine_uuid: MagazineId,
}

impl Article {
    /// Creates an article with a generated stable ID.
    ///
    /// Construction validates the title only; referential checks against the
    /// registry happen at registration time.
    pub fn new(
        author_uuid: AuthorId,
        magazine_uuid: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::with_id(Uuid::new_v4(), author_uuid, magazine_uuid, title)
    }

    /// Creates an article with a caller-provided stable ID.
    pub fn with_id(
        uuid: ArticleId,
        author_uuid: AuthorId,
        magazine_uuid: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        check_entity_id(uuid)?;
        let title = title.into();
        check_article_title(&title)?;
        Ok(Self {
            uuid,
            title,
            author_uuid,
            magazine_uuid,
        })
    }

    /// Returns the stable article ID.
    pub fn uuid(&self) -> ArticleId {
        self.uuid
    }

    /// Returns the immutable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rejects any attempt to retitle a published article.
    ///
    /// Published titles are append-only content; this write path always
    /// fails and the stored title is retained.
    pub fn set_title(&mut self, _title: &str) -> ValidationResult<()> {
        Err(ValidationError::ImmutableTitle)
    }

    /// Returns the authoring author's handle.
    pub fn author_uuid(&self) -> AuthorId {
        self.author_uuid
    }

    /// Returns the publishing magazine's handle.
    pub fn magazine_uuid(&self) -> MagazineId {
        self.magazine_uuid
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Article(title={}, author={}, magazine={})",
            self.title, self.author_uuid, self.magazine_uuid
        )
    }
}

/// Raw wire shape; converted through validation so deserialized input cannot
/// produce an invalid article.
#[derive(Deserialize)]
struct ArticleWire {
    uuid: ArticleId,
    title: String,
    author_uuid: AuthorId,
    magazine_uuid: MagazineId,
}

impl TryFrom<ArticleWire> for Article {
    type Error = ValidationError;

    fn try_from(wire: ArticleWire) -> ValidationResult<Self> {
        Article::with_id(wire.uuid, wire.author_uuid, wire.magazine_uuid, wire.title)
    }
}
