//! # SchemaDraft Codegen
//!
//! The deterministic diagram-to-SQL compiler core.
//!
//! Two passes, applied in sequence:
//!
//! 1. **Type Unifier** ([`unify_types`]) — walks every relationship and
//!    widens the narrower of the two linked column types to match the wider
//!    one, mutating the diagram in place.
//! 2. **DDL Emitter** ([`emit_ddl`]) — walks tables (skipping views), then
//!    indexes, then relationships, producing ordered SQL statements as a
//!    single text blob.
//!
//! ## Pipeline
//!
//! ```text
//! Diagram
//!    │
//!    ├──► unify_types()  (mutates field types in place)
//!    │
//!    └──► emit_ddl()     → canonical SQL text
//! ```
//!
//! The emitter depends on the unifier having already run; there is no other
//! inter-pass dependency. The core raises no errors: unresolvable
//! references are skipped, and an empty diagram compiles to the empty
//! string. Dialect adaptation of the canonical output is a separate,
//! out-of-core concern (see the `schemadraft_adapter` crate).

// ============================================================================
// Modules
// ============================================================================

pub mod ddl;
pub mod unifier;

// ============================================================================
// Re-exports
// ============================================================================

pub use ddl::emit_ddl;
pub use unifier::{type_weight, unify_types};

use schemadraft_ir::Diagram;

// ============================================================================
// Compiler
// ============================================================================

/// Top-level compiler that runs the full diagram-to-SQL pipeline.
///
/// The `Compiler` is stateless; it exists so callers have one entry point
/// that applies the passes in the required order. Callers that want a
/// single pass can use [`unify_types`] or [`emit_ddl`] directly — but note
/// that emitting without unifying first skips the foreign-key type-width
/// normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler;

impl Compiler {
    /// Create a new compiler.
    pub fn new() -> Self {
        Self
    }

    /// Compile a diagram to canonical SQL.
    ///
    /// Runs the type unification pass (mutating the diagram's field types
    /// in place) and then emits the DDL document. Infallible: inconsistent
    /// diagrams yield best-effort SQL for their consistent parts, and an
    /// empty diagram yields the empty string.
    pub fn compile(&self, diagram: &mut Diagram) -> String {
        unify_types(diagram);
        let sql = emit_ddl(diagram);

        tracing::info!(
            diagram = %diagram.name,
            tables = diagram.table_count(),
            relationships = diagram.relationship_count(),
            bytes = sql.len(),
            "diagram compilation complete",
        );

        sql
    }
}

/// Compile a diagram to canonical SQL with a default [`Compiler`].
pub fn compile(diagram: &mut Diagram) -> String {
    Compiler::new().compile(diagram)
}

// ============================================================================
// Tests
// ============================================================================
