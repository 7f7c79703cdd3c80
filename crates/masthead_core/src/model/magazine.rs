//! Magazine domain model.
//!
//! # Responsibility
//! - Hold the validated magazine name and category.
//! - Track which articles run under this magazine, in publication order.
//!
//! # Invariants
//! - `name` is always 2..=16 characters; `category` is always non-empty.
//! - Setters re-validate and keep the previous value on rejection.
//! - The article list is append-only and never contains duplicates.

use crate::model::article::ArticleId;
use crate::model::validation::{
    check_article_refs, check_entity_id, check_magazine_category, check_magazine_name,
    ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// A publication that runs articles under a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineWire")]
pub struct Magazine {
    uuid: MagazineId,
    name: String,
    category: String,
    article_uuids: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a magazine with a generated stable ID.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> ValidationResult<Self> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable ID.
    pub fn with_id(
        uuid: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        check_entity_id(uuid)?;
        let name = name.into();
        check_magazine_name(&name)?;
        let category = category.into();
        check_magazine_category(&category)?;
        Ok(Self {
            uuid,
            name,
            category,
            article_uuids: Vec::new(),
        })
    }

    /// Returns the stable magazine ID.
    pub fn uuid(&self) -> MagazineId {
        self.uuid
    }

    /// Returns the magazine name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the magazine category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the magazine.
    ///
    /// # Errors
    /// Returns `ValidationError` and keeps the current name when the new one
    /// is outside the 2..=16 character window.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        check_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Changes the magazine category.
    ///
    /// # Errors
    /// Returns `ValidationError` and keeps the current category when the new
    /// one is empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> ValidationResult<()> {
        let category = category.into();
        check_magazine_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Returns the articles run by this magazine, in publication order.
    pub fn article_uuids(&self) -> &[ArticleId] {
        &self.article_uuids
    }

    /// Returns how many articles run under this magazine.
    pub fn article_count(&self) -> usize {
        self.article_uuids.len()
    }

    /// Returns whether the given article already runs under this magazine.
    pub fn has_article(&self, article_uuid: ArticleId) -> bool {
        self.article_uuids.contains(&article_uuid)
    }

    /// Registers one article under this magazine.
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

impl Display for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Magazine(name={}, category={})", self.name, self.category)
    }
}

/// Raw wire shape; converted through validation so deserialized input cannot
/// produce an invalid magazine.
#[derive(Deserialize)]
struct MagazineWire {
    uuid: MagazineId,
    name: String,
    category: String,
    #[serde(default)]
    article_uuids: Vec<ArticleId>,
}

impl TryFrom<MagazineWire> for Magazine {
    type Error = ValidationError;

    fn try_from(wire: MagazineWire) -> ValidationResult<Self> {
        let mut magazine = Magazine::with_id(wire.uuid, wire.name, wire.category)?;
        check_article_refs(&wire.article_uuids)?;
        magazine.article_uuids = wire.article_uuids;
        Ok(magazine)
    }
}
