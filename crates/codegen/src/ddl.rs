//! # Canonical DDL Emission
//!
//! This module turns an (already type-unified) diagram into a single
//! dialect-neutral SQL text document. Emission is a pure function of the
//! diagram: no I/O, no mutation, deterministic output.
//!
//! Output ordering is fixed: every non-view table is emitted as a
//! `CREATE TABLE` block followed by its `CREATE INDEX` statements, in table
//! order, and all foreign-key `ALTER TABLE` statements come last, in
//! relationship order. That guarantees every referenced table exists by the
//! time its foreign keys are added, which matters for dialects without
//! forward references.
//!
//! Unresolvable references never fail the document: index entries that do
//! not resolve are dropped, indexes with zero resolvable fields emit
//! nothing, and relationships with a missing endpoint are skipped. A
//! partially-inconsistent diagram still yields best-effort SQL for its
//! consistent parts.

use schemadraft_core::{FieldId, TableId};
use schemadraft_ir::{Diagram, Field, Index, Table};

// ============================================================================
// Emitter
// ============================================================================

/// Emit the canonical SQL DDL document for a diagram.
///
/// Returns the empty string when the diagram holds no tables to emit
/// (views are excluded from emission entirely).
pub fn emit_ddl(diagram: &Diagram) -> String {
    // Views never appear in the emission set. Relationships are resolved
    // against this set too, so a relationship touching a view is skipped.
    let emitted: Vec<&Table> = diagram.tables.iter().filter(|t| !t.is_view).collect();

    let mut out = String::new();

    for table in &emitted {
        emit_create_table(&mut out, table);
        for index in &table.indexes {
            emit_create_index(&mut out, table, index);
        }
    }

    for relationship in &diagram.relationships {
        let Some((source_table, source_field)) = resolve(
            &emitted,
            relationship.source_table_id,
            relationship.source_field_id,
        ) else {
            tracing::debug!(
                relationship = %relationship.name,
                "skipping foreign key, source endpoint does not resolve"
            );
            continue;
        };
        let Some((target_table, target_field)) = resolve(
            &emitted,
            relationship.target_table_id,
            relationship.target_field_id,
        ) else {
            tracing::debug!(
                relationship = %relationship.name,
                "skipping foreign key, target endpoint does not resolve"
            );
            continue;
        };

        out.push_str(&format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({});\n",
            source_table, relationship.name, source_field, target_table, target_field,
        ));
    }

    out
}

// ============================================================================
// Statement builders
// ============================================================================

/// Append one `CREATE TABLE` block, closed with `);` and a blank line.
fn emit_create_table(out: &mut String, table: &Table) {
    out.push_str(&format!("CREATE TABLE {} (\n", table.name));

    let definitions: Vec<String> = table.fields.iter().map(field_definition).collect();
    if !definitions.is_empty() {
        out.push_str(&definitions.join(",\n"));
        out.push('\n');
    }

    out.push_str(");\n\n");
}

/// Build one column definition line (without the separating comma).
fn field_definition(field: &Field) -> String {
    let mut def = format!("  {} {}", field.name, field.data_type);

    // Length wins over precision/scale when both are present.
    if let Some(length) = field.character_maximum_length {
        def.push_str(&format!("({length})"));
    } else if let (Some(precision), Some(scale)) = (field.precision, field.scale) {
        def.push_str(&format!("({precision}, {scale})"));
    } else if let Some(precision) = field.precision {
        def.push_str(&format!("({precision})"));
    }

    if !field.nullable {
        def.push_str(" NOT NULL");
    }

    if let Some(default) = field.default_value.as_deref() {
        if !default.is_empty() {
            def.push_str(&format!(" DEFAULT {default}"));
        }
    }

    if field.primary_key {
        def.push_str(" PRIMARY KEY");
    }

    def
}

/// Append one `CREATE [UNIQUE] INDEX` statement, listing only the field
/// names that resolve within the owning table. An index with zero
/// resolvable fields emits nothing.
fn emit_create_index(out: &mut String, table: &Table, index: &Index) {
    let names: Vec<&str> = index
        .field_ids
        .iter()
        .filter_map(|id| table.field(*id))
        .map(|f| f.name.as_str())
        .collect();

    if names.is_empty() {
        tracing::debug!(
            index = %index.name,
            table = %table.name,
            "skipping index, no field ids resolve"
        );
        return;
    }

    let unique = if index.unique { "UNIQUE " } else { "" };
    out.push_str(&format!(
        "CREATE {}INDEX {} ON {} ({});\n",
        unique,
        index.name,
        table.name,
        names.join(", "),
    ));
}

/// Resolve a table/field id pair against the emission set, returning the
/// table and field names.
fn resolve<'a>(
    emitted: &[&'a Table],
    table_id: TableId,
    field_id: FieldId,
) -> Option<(&'a str, &'a str)> {
    let table = emitted.iter().find(|t| t.id == table_id)?;
    let field = table.field(field_id)?;
    Some((table.name.as_str(), field.name.as_str()))
}

// ============================================================================
// Tests
// ============================================================================
