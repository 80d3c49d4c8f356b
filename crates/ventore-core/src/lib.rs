//! # ventore-core
//!
//! Core types for Ventore.
//!
//! This crate provides the foundational types shared across all Ventore crates:
//! - Entity structs for the reconciled model (investors, cap-table lines,
//!   compliance rows, the project/stage index, data-quality issues)
//! - Source, issue-kind and severity enums
//! - Cross-cutting error types
//!
//! Everything here is plain data. Parsing, identity resolution and model
//! construction live in `ventore-model`.

pub mod entities;
pub mod enums;
pub mod errors;

/// Canonical stage label for tokens without a recognizable stage.
pub const UNSPECIFIED_STAGE: &str = "Unspecified";

/// Display name used when a row carries neither a known nor a legal name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Identity key used when a row carries no record id and no name at all.
pub const UNKNOWN_KEY: &str = "unknown";
