//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Keep callers decoupled from registry bookkeeping details.

pub mod publishing_service;
