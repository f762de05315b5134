//! # SchemaDraft Dialect Adapter
//!
//! The dialect adaptation boundary. The compiler core emits canonical,
//! dialect-neutral SQL; adapting that text to a specific database dialect
//! is delegated to an external text-generation service reached through the
//! [`DialectAdapter`] trait defined here.
//!
//! This crate specifies the boundary, it does not implement the network
//! call: real adapters (HTTP clients against a hosted model) live in the
//! embedding application. What lives here is:
//!
//! - the async [`DialectAdapter`] trait,
//! - the [`AdapterError`] type — a single opaque, non-retriable failure
//!   class; the caller's canonical SQL always remains valid as a fallback,
//! - the [`InstructionCatalog`] of per-dialect instruction payloads,
//! - a [`PassthroughAdapter`] reference implementation for tests and
//!   offline use.

pub mod instructions;

pub use instructions::InstructionCatalog;
pub use schemadraft_core::SqlDialect;

use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// AdapterError
// ============================================================================

/// Error raised by a dialect adapter.
///
/// Adaptation failures (network, timeout, quota, malformed response) are
/// deliberately collapsed into one opaque class: no partial output is
/// salvaged, and the failure is not retriable through this interface.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adaptation service failed to produce adapted SQL
    #[error("dialect adaptation failed: {0}")]
    AdaptationFailed(String),
}

impl AdapterError {
    /// Create an adaptation failure with the given reason
    pub fn failed(reason: impl Into<String>) -> Self {
        AdapterError::AdaptationFailed(reason.into())
    }
}

/// Result type alias using AdapterError
pub type AdapterResult<T> = Result<T, AdapterError>;

// ============================================================================
// DialectAdapter Trait
// ============================================================================

/// Asynchronous boundary to the dialect adaptation service.
///
/// Input is the canonical SQL produced by the compiler core plus the target
/// dialect; output is the adapted SQL text. Implementations own everything
/// about the transport: prompt assembly from an [`InstructionCatalog`],
/// timeouts, and retries all live behind this trait.
#[async_trait]
pub trait DialectAdapter: Send + Sync {
    /// Adapt canonical SQL to the given dialect.
    async fn adapt(&self, dialect: SqlDialect, canonical_sql: &str) -> AdapterResult<String>;
}

// ============================================================================
// PassthroughAdapter
// ============================================================================

/// Adapter that returns the canonical SQL unchanged.
///
/// Useful as an offline fallback and as a test double: the canonical
/// output is valid SQL in its own right, so passing it through is a
/// reasonable degraded mode when no adaptation service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAdapter;

impl PassthroughAdapter {
    /// Create a new passthrough adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DialectAdapter for PassthroughAdapter {
    async fn adapt(&self, dialect: SqlDialect, canonical_sql: &str) -> AdapterResult<String> {
        tracing::debug!(
            dialect = %dialect,
            bytes = canonical_sql.len(),
            "passthrough adapter returning canonical SQL unchanged"
        );
        Ok(canonical_sql.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that always fails, for exercising error propagation.
    struct BrokenAdapter;

    #[async_trait]
    impl DialectAdapter for BrokenAdapter {
        async fn adapt(&self, _dialect: SqlDialect, _canonical_sql: &str) -> AdapterResult<String> {
            Err(AdapterError::failed("service unreachable"))
        }
    }

    #[tokio::test]
    async fn test_passthrough_returns_input_unchanged() {
        let adapter = PassthroughAdapter::new();
        let sql = "CREATE TABLE users (\n  id integer NOT NULL PRIMARY KEY\n);\n\n";

        let adapted = adapter.adapt(SqlDialect::PostgreSql, sql).await.unwrap();
        assert_eq!(adapted, sql);
    }

    #[tokio::test]
    async fn test_failure_is_opaque_and_propagates() {
        let adapter = BrokenAdapter;
        let err = adapter
            .adapt(SqlDialect::Sqlite, "CREATE TABLE t (\n);\n\n")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "dialect adaptation failed: service unreachable"
        );
    }

    #[tokio::test]
    async fn test_trait_object_usage() {
        let adapter: Box<dyn DialectAdapter> = Box::new(PassthroughAdapter::new());
        let adapted = adapter.adapt(SqlDialect::MySql, "").await.unwrap();
        assert!(adapted.is_empty());
    }
}
