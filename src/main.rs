//! SchemaDraft
//!
//! Compiles an in-memory database diagram into canonical SQL DDL and runs
//! the result through the dialect adaptation boundary.
//!
//! This binary is a demonstration driver: it builds a small diagram
//! programmatically (diagram loading belongs to the embedding application,
//! not to this workspace), compiles it, and prints both the canonical SQL
//! and the adapted output of the built-in passthrough adapter.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use schemadraft_adapter::{DialectAdapter, InstructionCatalog, PassthroughAdapter, SqlDialect};
use schemadraft_codegen::Compiler;
use schemadraft_ir::{Diagram, Field, Index, Relationship, Table};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    let mut diagram = sample_diagram();

    let canonical = Compiler::new().compile(&mut diagram);
    println!("-- canonical DDL --------------------------------------------");
    println!("{canonical}");

    // Hand the canonical script to the adaptation boundary. The
    // passthrough adapter stands in for a hosted text-generation service;
    // the canonical output stays valid if adaptation ever fails.
    let dialect = SqlDialect::PostgreSql;
    let catalog = InstructionCatalog::new();
    tracing::info!(
        dialect = %dialect,
        instructions = catalog.get(dialect).len(),
        "adapting canonical SQL"
    );

    let adapted = PassthroughAdapter::new().adapt(dialect, &canonical).await?;
    println!("-- adapted for {} ------------------------------------", dialect);
    println!("{adapted}");

    Ok(())
}

/// Build the demonstration diagram: users and orders linked by a foreign
/// key whose column starts out narrower than the key it references.
fn sample_diagram() -> Diagram {
    let users_pk = Field::new("id", "integer").primary_key();
    let users_pk_id = users_pk.id;
    let email = Field::new("email", "varchar").with_length(255);
    let email_id = email.id;
    let users = Table::new("users")
        .with_field(users_pk)
        .with_field(email)
        .with_field(Field::new("created_at", "timestamp").with_default("CURRENT_TIMESTAMP"))
        .with_index(Index::new("idx_users_email").unique().with_field(email_id));
    let users_id = users.id;

    let order_user = Field::new("user_id", "smallint");
    let order_user_id = order_user.id;
    let orders = Table::new("orders")
        .with_field(Field::new("id", "integer").primary_key())
        .with_field(order_user)
        .with_field(
            Field::new("total", "decimal")
                .with_precision(10)
                .with_scale(2)
                .nullable(),
        )
        .with_index(Index::new("idx_orders_user").with_field(order_user_id));
    let orders_id = orders.id;

    let mut diagram = Diagram::new("shop");
    diagram.add_table(users);
    diagram.add_table(orders);
    diagram.add_relationship(Relationship::new(
        "fk_orders_user",
        orders_id,
        order_user_id,
        users_id,
        users_pk_id,
    ));
    diagram
}
