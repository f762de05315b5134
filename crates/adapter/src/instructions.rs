//! Dialect instruction catalog
//!
//! The instruction text handed to the text-generation service alongside the
//! canonical SQL is pure configuration, not compiler logic. This module
//! models it as a mapping from [`SqlDialect`] to an opaque payload, owned
//! by the adapter component. Payloads ship with built-in defaults and can
//! be overridden wholesale by the embedding application.

use schemadraft_core::SqlDialect;
use std::collections::HashMap;

// ============================================================================
// Built-in payloads
// ============================================================================

const POSTGRESQL_INSTRUCTIONS: &str = "\
Convert the following canonical SQL DDL to PostgreSQL. Use SERIAL or \
GENERATED ALWAYS AS IDENTITY for integer primary keys where appropriate, \
keep identifier casing as-is, prefer TEXT over unbounded VARCHAR, and map \
double to DOUBLE PRECISION. Emit only SQL, no commentary.";

const MYSQL_INSTRUCTIONS: &str = "\
Convert the following canonical SQL DDL to MySQL 8. Use InnoDB-compatible \
syntax, back-quote identifiers that collide with reserved words, use \
AUTO_INCREMENT for integer primary keys where appropriate, and keep \
constraint names unchanged. Emit only SQL, no commentary.";

const MARIADB_INSTRUCTIONS: &str = "\
Convert the following canonical SQL DDL to MariaDB. Use InnoDB-compatible \
syntax, back-quote identifiers that collide with reserved words, and keep \
constraint names unchanged. Emit only SQL, no commentary.";

const SQL_SERVER_INSTRUCTIONS: &str = "\
Convert the following canonical SQL DDL to Transact-SQL for SQL Server. \
Map varchar to NVARCHAR, double to FLOAT, and boolean to BIT; use IDENTITY \
for integer primary keys where appropriate; bracket-quote identifiers that \
collide with reserved words. Emit only SQL, no commentary.";

const SQLITE_INSTRUCTIONS: &str = "\
Convert the following canonical SQL DDL to SQLite. Fold column types onto \
SQLite's affinity system, inline foreign keys into the CREATE TABLE \
statements (SQLite cannot ADD CONSTRAINT via ALTER TABLE), and drop \
unsupported clauses rather than failing. Emit only SQL, no commentary.";

// ============================================================================
// InstructionCatalog
// ============================================================================

/// Mapping from dialect to the instruction payload sent to the adapter.
#[derive(Debug, Clone)]
pub struct InstructionCatalog {
    payloads: HashMap<SqlDialect, String>,
}

impl InstructionCatalog {
    /// Create a catalog preloaded with the built-in payloads for every
    /// supported dialect.
    pub fn new() -> Self {
        let mut payloads = HashMap::new();
        for dialect in SqlDialect::all() {
            payloads.insert(*dialect, builtin_instructions(*dialect).to_string());
        }
        Self { payloads }
    }

    /// Get the payload for a dialect.
    pub fn get(&self, dialect: SqlDialect) -> &str {
        self.payloads
            .get(&dialect)
            .map(String::as_str)
            .unwrap_or_else(|| builtin_instructions(dialect))
    }

    /// Replace the payload for a dialect.
    pub fn set(&mut self, dialect: SqlDialect, payload: impl Into<String>) {
        self.payloads.insert(dialect, payload.into());
    }

    /// Replace the payload for a dialect, builder style.
    pub fn with_payload(mut self, dialect: SqlDialect, payload: impl Into<String>) -> Self {
        self.set(dialect, payload);
        self
    }
}

impl Default for InstructionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in instruction payload for a dialect.
fn builtin_instructions(dialect: SqlDialect) -> &'static str {
    match dialect {
        SqlDialect::PostgreSql => POSTGRESQL_INSTRUCTIONS,
        SqlDialect::MySql => MYSQL_INSTRUCTIONS,
        SqlDialect::MariaDb => MARIADB_INSTRUCTIONS,
        SqlDialect::SqlServer => SQL_SERVER_INSTRUCTIONS,
        SqlDialect::Sqlite => SQLITE_INSTRUCTIONS,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_dialect() {
        let catalog = InstructionCatalog::new();
        for dialect in SqlDialect::all() {
            assert!(!catalog.get(*dialect).is_empty());
        }
    }

    #[test]
    fn test_payload_override() {
        let mut catalog = InstructionCatalog::new();
        catalog.set(SqlDialect::Sqlite, "custom payload");
        assert_eq!(catalog.get(SqlDialect::Sqlite), "custom payload");
        // Other dialects keep their defaults.
        assert_ne!(catalog.get(SqlDialect::MySql), "custom payload");
    }

    #[test]
    fn test_builder_override() {
        let catalog = InstructionCatalog::new().with_payload(SqlDialect::MySql, "p");
        assert_eq!(catalog.get(SqlDialect::MySql), "p");
    }
}
