//! # SchemaDraft Core
//!
//! Core types, traits, and error handling for SchemaDraft.
//!
//! This crate provides the foundational building blocks used throughout
//! the SchemaDraft workspace, including:
//!
//! - **Types**: identifier aliases and the [`SqlDialect`] enumeration
//! - **Traits**: common behaviors like `Validatable`
//! - **Errors**: unified error handling with `DraftError` and `DraftResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DraftError, DraftResult, ResultExt};
pub use traits::Validatable;
pub use types::{FieldId, RelationshipId, SqlDialect, TableId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
