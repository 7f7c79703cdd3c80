//! Press registry contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide the caller-owned registry tracking every author, magazine and
//!   article created during its lifetime.
//! - Keep registration side effects (registry append + magazine index) inside
//!   one atomic publish operation.
//!
//! # Invariants
//! - Write paths validate before any registry mutation; a failed operation
//!   leaves no partial state behind.
//! - Registries preserve insertion order; there is no deletion path.
//! - Secondary article indexes on authors and magazines never hold
//!   duplicates.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Result type used by press registry operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Error for press registry registration and query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Entity input failed validation.
    Validation(ValidationError),
    /// Referenced author is not registered.
    AuthorNotFound(AuthorId),
    /// Referenced magazine is not registered.
    MagazineNotFound(MagazineId),
    /// Referenced article is not registered.
    ArticleNotFound(ArticleId),
    /// An entity with this id is already registered.
    DuplicateEntityId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(uuid) => write!(f, "author not found: {uuid}"),
            Self::MagazineNotFound(uuid) => write!(f, "magazine not found: {uuid}"),
            Self::ArticleNotFound(uuid) => write!(f, "article not found: {uuid}"),
            Self::DuplicateEntityId(uuid) => write!(f, "entity id already registered: {uuid}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Registry interface for press entities.
///
/// One implementation instance is one isolated "process lifetime": callers
/// own it, pass it where construction and queries happen, and drop it to
/// discard all state.
pub trait PressRepository {
    /// Registers a constructed author. Fails on a duplicate id.
    fn create_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    /// Registers a constructed magazine. Fails on a duplicate id.
    fn create_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    /// Creates and registers one article in a single atomic step.
    ///
    /// Validates the title, requires both referenced entities to exist, then
    /// appends the article to the article registry and to the magazine's
    /// index. The author index is left to [`attach_article_to_author`],
    /// keeping author-side registration an explicit, separate path.
    ///
    /// [`attach_article_to_author`]: PressRepository::attach_article_to_author
    fn publish_article(
        &mut self,
        author_uuid: AuthorId,
        magazine_uuid: MagazineId,
        title: &str,
    ) -> RepoResult<Article>;
    /// Attributes a registered article to a registered author.
    ///
    /// Idempotent; returns whether the author's index changed.
    fn attach_article_to_author(
        &mut self,
        author_uuid: AuthorId,
        article_uuid: ArticleId,
    ) -> RepoResult<bool>;
    /// Re-registers an article under a magazine.
    ///
    /// Idempotent; returns whether the magazine's index changed.
    fn attach_article_to_magazine(
        &mut self,
        magazine_uuid: MagazineId,
        article_uuid: ArticleId,
    ) -> RepoResult<bool>;
    /// Loads one author by id.
    fn get_author(&self, uuid: AuthorId) -> RepoResult<Option<Author>>;
    /// Loads one magazine by id.
    fn get_magazine(&self, uuid: MagazineId) -> RepoResult<Option<Magazine>>;
    /// Loads one article by id.
    fn get_article(&self, uuid: ArticleId) -> RepoResult<Option<Article>>;
    /// Lists all authors in registration order.
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    /// Lists all magazines in registration order.
    fn list_magazines(&self) -> RepoResult<Vec<Magazine>>;
    /// Lists all articles in publication order.
    fn list_articles(&self) -> RepoResult<Vec<Article>>;
    /// Renames one magazine with re-validation.
    fn rename_magazine(&mut self, uuid: MagazineId, name: &str) -> RepoResult<()>;
    /// Changes one magazine's category with re-validation.
    fn recategorize_magazine(&mut self, uuid: MagazineId, category: &str) -> RepoResult<()>;
}

/// In-memory press registry.
///
/// Plain `Vec` arenas in insertion order, mutated only through registration
/// calls under single-threaded access.
#[derive(Debug, Default)]
pub struct MemoryPressRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl MemoryPressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn author_index(&self, uuid: AuthorId) -> Option<usize> {
        self.authors.iter().position(|author| author.uuid() == uuid)
    }

    fn magazine_index(&self, uuid: MagazineId) -> Option<usize> {
        self.magazines
            .iter()
            .position(|magazine| magazine.uuid() == uuid)
    }

    fn article_index(&self, uuid: ArticleId) -> Option<usize> {
        self.articles
            .iter()
            .position(|article| article.uuid() == uuid)
    }
}

impl PressRepository for MemoryPressRepository {
    fn create_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        if self.author_index(author.uuid()).is_some() {
            return Err(RepoError::DuplicateEntityId(author.uuid()));
        }

        let uuid = author.uuid();
        self.authors.push(author);
        Ok(uuid)
    }

    fn create_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        if self.magazine_index(magazine.uuid()).is_some() {
            return Err(RepoError::DuplicateEntityId(magazine.uuid()));
        }

        let uuid = magazine.uuid();
        self.magazines.push(magazine);
        Ok(uuid)
    }

    fn publish_article(
        &mut self,
        author_uuid: AuthorId,
        magazine_uuid: MagazineId,
        title: &str,
    ) -> RepoResult<Article> {
        if self.author_index(author_uuid).is_none() {
            return Err(RepoError::AuthorNotFound(author_uuid));
        }
        let magazine_index = self
            .magazine_index(magazine_uuid)
            .ok_or(RepoError::MagazineNotFound(magazine_uuid))?;

        // Title validation happens before any registry mutation.
        let article = Article::new(author_uuid, magazine_uuid, title)?;

        self.articles.push(article.clone());
        self.magazines[magazine_index].register_article(article.uuid());
        Ok(article)
    }

    fn attach_article_to_author(
        &mut self,
        author_uuid: AuthorId,
        article_uuid: ArticleId,
    ) -> RepoResult<bool> {
        if self.article_index(article_uuid).is_none() {
            return Err(RepoError::ArticleNotFound(article_uuid));
        }
        let author_index = self
            .author_index(author_uuid)
            .ok_or(RepoError::AuthorNotFound(author_uuid))?;

        Ok(self.authors[author_index].register_article(article_uuid))
    }

    fn attach_article_to_magazine(
        &mut self,
        magazine_uuid: MagazineId,
        article_uuid: ArticleId,
    ) -> RepoResult<bool> {
        if self.article_index(article_uuid).is_none() {
            return Err(RepoError::ArticleNotFound(article_uuid));
        }
        let magazine_index = self
            .magazine_index(magazine_uuid)
            .ok_or(RepoError::MagazineNotFound(magazine_uuid))?;

        Ok(self.magazines[magazine_index].register_article(article_uuid))
    }

    fn get_author(&self, uuid: AuthorId) -> RepoResult<Option<Author>> {
        Ok(self.author_index(uuid).map(|index| self.authors[index].clone()))
    }

    fn get_magazine(&self, uuid: MagazineId) -> RepoResult<Option<Magazine>> {
        Ok(self
            .magazine_index(uuid)
            .map(|index| self.magazines[index].clone()))
    }

    fn get_article(&self, uuid: ArticleId) -> RepoResult<Option<Article>> {
        Ok(self
            .article_index(uuid)
            .map(|index| self.articles[index].clone()))
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        Ok(self.authors.clone())
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        Ok(self.magazines.clone())
    }

    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn rename_magazine(&mut self, uuid: MagazineId, name: &str) -> RepoResult<()> {
        let magazine_index = self
            .magazine_index(uuid)
            .ok_or(RepoError::MagazineNotFound(uuid))?;

        self.magazines[magazine_index].set_name(name)?;
        Ok(())
    }

    fn recategorize_magazine(&mut self, uuid: MagazineId, category: &str) -> RepoResult<()> {
        let magazine_index = self
            .magazine_index(uuid)
            .ok_or(RepoError::MagazineNotFound(uuid))?;

        self.magazines[magazine_index].set_category(category)?;
        Ok(())
    }
}
