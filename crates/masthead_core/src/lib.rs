//! Core domain logic for Masthead.
//! This crate is the single source of truth for publishing invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::ValidationError;
pub use repo::press_repo::{MemoryPressRepository, PressRepository, RepoError, RepoResult};
pub use search::headline::{
    search_headlines, HeadlineHit, HeadlineQuery, SearchError, SearchResult,
};
pub use service::publishing_service::{PublishingError, PublishingService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
