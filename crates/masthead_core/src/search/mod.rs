//! Search entry points over registry state.
//!
//! # Responsibility
//! - Provide read-only search APIs decoupled from registry bookkeeping.

pub mod headline;
