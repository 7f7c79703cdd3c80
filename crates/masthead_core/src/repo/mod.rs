//! Registry layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the registry contract entity construction and queries run
//!   against.
//! - Isolate registry bookkeeping from service/business orchestration.
//!
//! # Invariants
//! - Registry writes enforce entity validation before any mutation.
//! - Registry APIs return semantic errors (`AuthorNotFound`,
//!   `MagazineNotFound`, `ArticleNotFound`) in addition to validation errors.

pub mod press_repo;
