//! Publishing use-case service.
//!
//! # Responsibility
//! - Provide creation entry points for authors, magazines and articles.
//! - Derive relationship queries (topic areas, contributors, top publisher)
//!   from registry state.
//!
//! # Invariants
//! - Service APIs never bypass registry validation/registration contracts.
//! - Derived queries are read-only and deterministic: distinct results keep
//!   first-seen order, set results are sorted.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::press_repo::{PressRepository, RepoError};
use log::info;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for publishing use-cases.
#[derive(Debug)]
pub enum PublishingError {
    /// Target author does not exist.
    AuthorNotFound(AuthorId),
    /// Target magazine does not exist.
    MagazineNotFound(MagazineId),
    /// Registry-layer failure.
    Repo(RepoError),
    /// A secondary index names an article the registry does not hold.
    InconsistentState(&'static str),
}

impl Display for PublishingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthorNotFound(uuid) => write!(f, "author not found: {uuid}"),
            Self::MagazineNotFound(uuid) => write!(f, "magazine not found: {uuid}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent registry state: {details}")
            }
        }
    }
}

impl Error for PublishingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PublishingError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AuthorNotFound(uuid) => Self::AuthorNotFound(uuid),
            RepoError::MagazineNotFound(uuid) => Self::MagazineNotFound(uuid),
            other => Self::Repo(other),
        }
    }
}

/// Publishing facade over registry implementations.
pub struct PublishingService<R: PressRepository> {
    repo: R,
}

impl<R: PressRepository> PublishingService<R> {
    /// Creates a service using the provided registry implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying registry.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Registers a new author by name.
    pub fn register_author(
        &mut self,
        name: impl Into<String>,
    ) -> Result<Author, PublishingError> {
        let author = Author::new(name).map_err(RepoError::from)?;
        let uuid = self.repo.create_author(author)?;
        info!("event=author_registered module=publishing status=ok uuid={uuid}");
        self.repo
            .get_author(uuid)?
            .ok_or(PublishingError::InconsistentState(
                "created author not found in read-back",
            ))
    }

    /// Launches a new magazine with a name and category.
    pub fn launch_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Magazine, PublishingError> {
        let magazine = Magazine::new(name, category).map_err(RepoError::from)?;
        let uuid = self.repo.create_magazine(magazine)?;
        info!("event=magazine_launched module=publishing status=ok uuid={uuid}");
        self.repo
            .get_magazine(uuid)?
            .ok_or(PublishingError::InconsistentState(
                "created magazine not found in read-back",
            ))
    }

    /// Publishes one article through the author-driven path.
    ///
    /// # Contract
    /// - Registers the article in the article registry and the magazine's
    ///   index, then attributes it to the author (idempotently).
    /// - Fails without side effects on an invalid title or unknown handle.
    pub fn publish_article(
        &mut self,
        author_uuid: AuthorId,
        magazine_uuid: MagazineId,
        title: &str,
    ) -> Result<Article, PublishingError> {
        let article = self
            .repo
            .publish_article(author_uuid, magazine_uuid, title)?;
        self.repo
            .attach_article_to_author(author_uuid, article.uuid())?;
        info!(
            "event=article_published module=publishing status=ok uuid={} magazine={magazine_uuid}",
            article.uuid()
        );
        Ok(article)
    }

    /// Renames one magazine with re-validation.
    pub fn rename_magazine(
        &mut self,
        magazine_uuid: MagazineId,
        name: &str,
    ) -> Result<(), PublishingError> {
        self.repo.rename_magazine(magazine_uuid, name)?;
        info!("event=magazine_renamed module=publishing status=ok uuid={magazine_uuid}");
        Ok(())
    }

    /// Changes one magazine's category with re-validation.
    pub fn recategorize_magazine(
        &mut self,
        magazine_uuid: MagazineId,
        category: &str,
    ) -> Result<(), PublishingError> {
        self.repo.recategorize_magazine(magazine_uuid, category)?;
        info!("event=magazine_recategorized module=publishing status=ok uuid={magazine_uuid}");
        Ok(())
    }

    /// Returns the articles one author has written, in publication order.
    pub fn author_articles(
        &self,
        author_uuid: AuthorId,
    ) -> Result<Vec<Article>, PublishingError> {
        let author = self.require_author(author_uuid)?;
        self.resolve_articles(author.article_uuids())
    }

    /// Returns the distinct magazines one author has published in, in
    /// first-publication order.
    pub fn author_magazines(
        &self,
        author_uuid: AuthorId,
    ) -> Result<Vec<Magazine>, PublishingError> {
        let articles = self.author_articles(author_uuid)?;
        let mut seen: Vec<MagazineId> = Vec::new();
        let mut magazines = Vec::new();
        for article in &articles {
            if seen.contains(&article.magazine_uuid()) {
                continue;
            }
            seen.push(article.magazine_uuid());
            let magazine = self.repo.get_magazine(article.magazine_uuid())?.ok_or(
                PublishingError::InconsistentState(
                    "article references unregistered magazine",
                ),
            )?;
            magazines.push(magazine);
        }
        Ok(magazines)
    }

    /// Returns the distinct categories one author has published under.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(
        &self,
        author_uuid: AuthorId,
    ) -> Result<Option<BTreeSet<String>>, PublishingError> {
        let magazines = self.author_magazines(author_uuid)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            magazines
                .iter()
                .map(|magazine| magazine.category().to_string())
                .collect(),
        ))
    }

    /// Returns the articles run by one magazine, in publication order.
    pub fn magazine_articles(
        &self,
        magazine_uuid: MagazineId,
    ) -> Result<Vec<Article>, PublishingError> {
        let magazine = self.require_magazine(magazine_uuid)?;
        self.resolve_articles(magazine.article_uuids())
    }

    /// Returns the titles run by one magazine, in publication order.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(
        &self,
        magazine_uuid: MagazineId,
    ) -> Result<Option<Vec<String>>, PublishingError> {
        let articles = self.magazine_articles(magazine_uuid)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        ))
    }

    /// Returns the distinct authors with at least one article in the
    /// magazine, in first-contribution order.
    pub fn contributors(
        &self,
        magazine_uuid: MagazineId,
    ) -> Result<Vec<Author>, PublishingError> {
        let articles = self.magazine_articles(magazine_uuid)?;
        let mut seen: Vec<AuthorId> = Vec::new();
        let mut authors = Vec::new();
        for article in &articles {
            if seen.contains(&article.author_uuid()) {
                continue;
            }
            seen.push(article.author_uuid());
            let author = self.repo.get_author(article.author_uuid())?.ok_or(
                PublishingError::InconsistentState("article references unregistered author"),
            )?;
            authors.push(author);
        }
        Ok(authors)
    }

    /// Returns the contributors with strictly more than two articles in the
    /// magazine, in first-contribution order.
    ///
    /// Returns `None` when no contributor crosses that bar.
    pub fn contributing_authors(
        &self,
        magazine_uuid: MagazineId,
    ) -> Result<Option<Vec<Author>>, PublishingError> {
        let articles = self.magazine_articles(magazine_uuid)?;
        let contributors = self.contributors(magazine_uuid)?;

        let frequent: Vec<Author> = contributors
            .into_iter()
            .filter(|author| {
                articles
                    .iter()
                    .filter(|article| article.author_uuid() == author.uuid())
                    .count()
                    > 2
            })
            .collect();

        if frequent.is_empty() {
            return Ok(None);
        }
        Ok(Some(frequent))
    }

    /// Returns the magazine with the most articles across the registry.
    ///
    /// Returns `None` when no magazines exist or every count is zero. Ties
    /// resolve to the first registered magazine with the maximum count.
    pub fn top_publisher(&self) -> Result<Option<Magazine>, PublishingError> {
        let magazines = self.repo.list_magazines()?;
        let mut best: Option<Magazine> = None;
        let mut best_count = 0usize;
        for magazine in magazines {
            // Strict comparison keeps the first-registered magazine on ties
            // and never selects an empty one.
            if magazine.article_count() > best_count {
                best_count = magazine.article_count();
                best = Some(magazine);
            }
        }
        Ok(best)
    }

    fn require_author(&self, author_uuid: AuthorId) -> Result<Author, PublishingError> {
        self.repo
            .get_author(author_uuid)?
            .ok_or(PublishingError::AuthorNotFound(author_uuid))
    }

    fn require_magazine(&self, magazine_uuid: MagazineId) -> Result<Magazine, PublishingError> {
        self.repo
            .get_magazine(magazine_uuid)?
            .ok_or(PublishingError::MagazineNotFound(magazine_uuid))
    }

    fn resolve_articles(
        &self,
        article_uuids: &[ArticleId],
    ) -> Result<Vec<Article>, PublishingError> {
        let mut articles = Vec::with_capacity(article_uuids.len());
        for uuid in article_uuids {
            let article = self.repo.get_article(*uuid)?.ok_or(
                PublishingError::InconsistentState("index names unregistered article"),
            )?;
            articles.push(article);
        }
        Ok(articles)
    }
}
