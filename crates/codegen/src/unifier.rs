//! # Foreign-Key Type Unification
//!
//! Before DDL is emitted, every relationship in the diagram is walked once
//! and the narrower of the two linked column types is widened to match the
//! wider one. This keeps a foreign key and its referenced key on a
//! compatible storage width and avoids dialect-level type-mismatch errors
//! downstream.
//!
//! The pass is a single forward walk over the relationships in their stored
//! order: later relationships observe mutations made by earlier ones, and
//! no fixed-point iteration is performed. Transitively chained foreign keys
//! (A→B→C) are therefore unified pairwise in relationship order, not
//! globally.

use schemadraft_core::{FieldId, TableId};
use schemadraft_ir::{Diagram, Table};

// ============================================================================
// Type weights
// ============================================================================

/// Storage-width weight of a SQL scalar type name.
///
/// The weight is an integer proxy for storage width, used solely to decide
/// which of two related column types wins during unification. The lookup is
/// case-insensitive; any type not in the table weighs 0, so two unknown
/// types (e.g. `varchar`/`uuid`) never trigger a rewrite.
pub fn type_weight(data_type: &str) -> u32 {
    match data_type.to_ascii_lowercase().as_str() {
        "tinyint" => 1,
        "smallint" => 2,
        "mediumint" => 3,
        "int" | "integer" => 4,
        "bigint" => 8,
        "float" => 4,
        "double" => 8,
        "decimal" | "numeric" => 16,
        _ => 0,
    }
}

// ============================================================================
// Unification pass
// ============================================================================

/// Unify the column types across every relationship of the diagram.
///
/// For each relationship, both endpoints are resolved by id; if either side
/// is missing the relationship is skipped silently. When the weights of the
/// two types differ, the narrower field's `data_type` is overwritten with
/// the wider field's type, in place. Equal weights (including two unknown
/// types) leave both fields untouched, which also makes the pass
/// idempotent.
pub fn unify_types(diagram: &mut Diagram) {
    if diagram.tables.is_empty() || diagram.relationships.is_empty() {
        return;
    }

    let Diagram {
        tables,
        relationships,
        ..
    } = diagram;

    for relationship in relationships.iter() {
        let Some((source_table, source_field)) = locate(
            tables,
            relationship.source_table_id,
            relationship.source_field_id,
        ) else {
            tracing::debug!(
                relationship = %relationship.name,
                "skipping type unification, source endpoint does not resolve"
            );
            continue;
        };
        let Some((target_table, target_field)) = locate(
            tables,
            relationship.target_table_id,
            relationship.target_field_id,
        ) else {
            tracing::debug!(
                relationship = %relationship.name,
                "skipping type unification, target endpoint does not resolve"
            );
            continue;
        };

        let source_type = tables[source_table].fields[source_field].data_type.clone();
        let target_type = tables[target_table].fields[target_field].data_type.clone();

        let source_weight = type_weight(&source_type);
        let target_weight = type_weight(&target_type);

        if source_weight > target_weight {
            tracing::debug!(
                relationship = %relationship.name,
                from = %target_type,
                to = %source_type,
                "widening target field type"
            );
            tables[target_table].fields[target_field].data_type = source_type;
        } else if target_weight > source_weight {
            tracing::debug!(
                relationship = %relationship.name,
                from = %source_type,
                to = %target_type,
                "widening source field type"
            );
            tables[source_table].fields[source_field].data_type = target_type;
        }
    }
}

/// Resolve a table/field id pair to indices into the table vector.
///
/// Indices rather than references are returned so that the caller can write
/// back through a single mutable indexed access, without holding aliased
/// borrows into two tables at once.
fn locate(tables: &[Table], table_id: TableId, field_id: FieldId) -> Option<(usize, usize)> {
    let table_pos = tables.iter().position(|t| t.id == table_id)?;
    let field_pos = tables[table_pos]
        .fields
        .iter()
        .position(|f| f.id == field_id)?;
    Some((table_pos, field_pos))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemadraft_ir::{Field, Relationship, Table};
    use uuid::Uuid;

    fn diagram_with_link(source_type: &str, target_type: &str) -> Diagram {
        let source_field = Field::new("id", source_type);
        let source_field_id = source_field.id;
        let source = Table::new("users").with_field(source_field);
        let source_id = source.id;

        let target_field = Field::new("user_id", target_type);
        let target_field_id = target_field.id;
        let target = Table::new("orders").with_field(target_field);
        let target_id = target.id;

        let mut diagram = Diagram::new("shop");
        diagram.add_table(source);
        diagram.add_table(target);
        diagram.add_relationship(Relationship::new(
            "fk_orders_user",
            source_id,
            source_field_id,
            target_id,
            target_field_id,
        ));
        diagram
    }

    #[test]
    fn test_type_weights() {
        assert_eq!(type_weight("tinyint"), 1);
        assert_eq!(type_weight("smallint"), 2);
        assert_eq!(type_weight("mediumint"), 3);
        assert_eq!(type_weight("integer"), 4);
        assert_eq!(type_weight("bigint"), 8);
        assert_eq!(type_weight("float"), 4);
        assert_eq!(type_weight("double"), 8);
        assert_eq!(type_weight("decimal"), 16);
        assert_eq!(type_weight("numeric"), 16);
        assert_eq!(type_weight("varchar"), 0);
        assert_eq!(type_weight("uuid"), 0);
    }

    #[test]
    fn test_type_weight_is_case_insensitive() {
        assert_eq!(type_weight("BIGINT"), 8);
        assert_eq!(type_weight("Integer"), 4);
        assert_eq!(type_weight("Decimal"), 16);
    }

    #[test]
    fn test_wider_source_widens_target() {
        let mut diagram = diagram_with_link("integer", "smallint");
        unify_types(&mut diagram);

        assert_eq!(diagram.tables[0].fields[0].data_type, "integer");
        assert_eq!(diagram.tables[1].fields[0].data_type, "integer");
    }

    #[test]
    fn test_wider_target_widens_source() {
        let mut diagram = diagram_with_link("smallint", "bigint");
        unify_types(&mut diagram);

        assert_eq!(diagram.tables[0].fields[0].data_type, "bigint");
        assert_eq!(diagram.tables[1].fields[0].data_type, "bigint");
    }

    #[test]
    fn test_equal_weights_leave_both_untouched() {
        let mut diagram = diagram_with_link("integer", "float");
        unify_types(&mut diagram);

        assert_eq!(diagram.tables[0].fields[0].data_type, "integer");
        assert_eq!(diagram.tables[1].fields[0].data_type, "float");
    }

    #[test]
    fn test_two_non_numeric_types_are_untouched() {
        let mut diagram = diagram_with_link("varchar", "uuid");
        unify_types(&mut diagram);

        assert_eq!(diagram.tables[0].fields[0].data_type, "varchar");
        assert_eq!(diagram.tables[1].fields[0].data_type, "uuid");
    }

    #[test]
    fn test_unifier_is_idempotent() {
        let mut diagram = diagram_with_link("bigint", "tinyint");
        unify_types(&mut diagram);
        let after_first = diagram.clone();
        unify_types(&mut diagram);

        assert_eq!(
            diagram.tables[0].fields[0].data_type,
            after_first.tables[0].fields[0].data_type
        );
        assert_eq!(
            diagram.tables[1].fields[0].data_type,
            after_first.tables[1].fields[0].data_type
        );
    }

    #[test]
    fn test_unresolvable_endpoint_is_skipped() {
        let mut diagram = diagram_with_link("integer", "smallint");
        // Point the relationship source at a table that does not exist.
        diagram.relationships[0].source_table_id = Uuid::new_v4();
        unify_types(&mut diagram);

        assert_eq!(diagram.tables[1].fields[0].data_type, "smallint");
    }

    #[test]
    fn test_empty_diagram_is_a_noop() {
        let mut diagram = Diagram::new("empty");
        unify_types(&mut diagram);
        assert!(diagram.is_empty());
    }

    #[test]
    fn test_later_relationship_sees_earlier_mutation() {
        // a.id (bigint) -> b.ref (smallint), then b.ref -> c.ref (integer).
        // After the first relationship b.ref is bigint, so the second
        // relationship widens c.ref to bigint as well.
        let a_field = Field::new("id", "bigint");
        let a_field_id = a_field.id;
        let a = Table::new("a").with_field(a_field);
        let a_id = a.id;

        let b_field = Field::new("ref", "smallint");
        let b_field_id = b_field.id;
        let b = Table::new("b").with_field(b_field);
        let b_id = b.id;

        let c_field = Field::new("ref", "integer");
        let c_field_id = c_field.id;
        let c = Table::new("c").with_field(c_field);
        let c_id = c.id;

        let mut diagram = Diagram::new("chain");
        diagram.add_table(a);
        diagram.add_table(b);
        diagram.add_table(c);
        diagram.add_relationship(Relationship::new(
            "fk_ab", a_id, a_field_id, b_id, b_field_id,
        ));
        diagram.add_relationship(Relationship::new(
            "fk_bc", b_id, b_field_id, c_id, c_field_id,
        ));

        unify_types(&mut diagram);

        assert_eq!(diagram.tables[1].fields[0].data_type, "bigint");
        assert_eq!(diagram.tables[2].fields[0].data_type, "bigint");
    }

    #[test]
    fn test_self_referencing_relationship() {
        let field = Field::new("id", "integer");
        let field_id = field.id;
        let table = Table::new("nodes").with_field(field);
        let table_id = table.id;

        let mut diagram = Diagram::new("tree");
        diagram.add_table(table);
        diagram.add_relationship(Relationship::new(
            "fk_self", table_id, field_id, table_id, field_id,
        ));

        unify_types(&mut diagram);
        assert_eq!(diagram.tables[0].fields[0].data_type, "integer");
    }
}
