//! Regex-based headline search over the press registry.
//!
//! # Responsibility
//! - Provide keyword search over article titles.
//! - Return typed hits with stable IDs.
//!
//! # Invariants
//! - Result ordering follows publication order and is truncated to the
//!   query limit.
//! - Escaped-term mode never fails on user input; only raw patterns can be
//!   rejected.

use crate::model::article::ArticleId;
use crate::model::magazine::MagazineId;
use crate::repo::press_repo::{PressRepository, RepoError};
use regex::{Regex, RegexBuilder};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for pattern compilation and registry interaction.
#[derive(Debug)]
pub enum SearchError {
    /// User-provided raw pattern is not a valid regular expression.
    InvalidPattern { pattern: String, message: String },
    /// Registry-layer failure.
    Repo(RepoError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid headline pattern `{pattern}`: {message}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPattern { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SearchError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Search options for headline query behavior.
#[derive(Debug, Clone)]
pub struct HeadlineQuery {
    /// User query text.
    pub text: String,
    /// Optional magazine filter.
    pub magazine_uuid: Option<MagazineId>,
    /// Maximum number of hits to return.
    pub limit: u32,
    /// Whether to compile `text` directly as one regular expression.
    ///
    /// Default is `false`: terms are escaped so punctuation in titles cannot
    /// break type-as-you-search callers.
    pub raw_pattern: bool,
}

impl HeadlineQuery {
    /// Creates a query with default limit and no magazine filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            magazine_uuid: None,
            limit: 20,
            raw_pattern: false,
        }
    }
}

/// Single search hit returned by [`search_headlines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineHit {
    pub article_uuid: ArticleId,
    pub magazine_uuid: MagazineId,
    pub title: String,
}

/// Searches article titles and returns hits in publication order.
///
/// Returns an empty list for blank queries. In default mode every
/// whitespace-separated term must match the title (case-insensitive); in raw
/// mode the query text is compiled as one case-insensitive pattern.
pub fn search_headlines<R: PressRepository>(
    repo: &R,
    query: &HeadlineQuery,
) -> SearchResult<Vec<HeadlineHit>> {
    let Some(matchers) = build_matchers(query)? else {
        return Ok(Vec::new());
    };

    if query.limit == 0 {
        return Ok(Vec::new());
    }

    let mut hits = Vec::new();
    for article in repo.list_articles()? {
        if let Some(magazine_uuid) = query.magazine_uuid {
            if article.magazine_uuid() != magazine_uuid {
                continue;
            }
        }
        if !matchers.iter().all(|matcher| matcher.is_match(article.title())) {
            continue;
        }

        hits.push(HeadlineHit {
            article_uuid: article.uuid(),
            magazine_uuid: article.magazine_uuid(),
            title: article.title().to_string(),
        });
        if hits.len() as u32 == query.limit {
            break;
        }
    }

    Ok(hits)
}

/// Builds one matcher per required term, or `None` for blank queries.
fn build_matchers(query: &HeadlineQuery) -> SearchResult<Option<Vec<Regex>>> {
    let text = query.text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if query.raw_pattern {
        return compile_pattern(text).map(|matcher| Some(vec![matcher]));
    }

    let mut matchers = Vec::new();
    for term in text.split_whitespace() {
        matchers.push(compile_pattern(&regex::escape(term))?);
    }
    Ok(Some(matchers))
}

fn compile_pattern(pattern: &str) -> SearchResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|err| SearchError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}
