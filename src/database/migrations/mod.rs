//! SeaORM migrations for multi-database support
//!
//! Migrations are written against the sea-query schema builder so the same
//! definitions run on SQLite, PostgreSQL and MySQL.

use sea_orm_migration::prelude::*;

pub mod m20251016_000001_initial_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251016_000001_initial_schema::Migration)]
    }
}
