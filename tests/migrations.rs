//! Migration set guards

mod common;

use sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::MigratorTrait;
use std::collections::HashSet;

use media_channels::database::migrations::Migrator;

/// Names must be unique and follow mYYYYMMDD_NNNNNN_description
#[test]
fn migration_names_are_unique_and_well_formed() {
    let mut seen = HashSet::new();

    for migration in Migrator::migrations() {
        let name = migration.name().to_string();
        let parts: Vec<&str> = name.splitn(3, '_').collect();

        assert_eq!(parts.len(), 3, "malformed migration name: {name}");
        assert!(
            parts[0].len() == 9
                && parts[0].starts_with('m')
                && parts[0][1..].chars().all(|c| c.is_ascii_digit()),
            "bad date segment in {name}"
        );
        assert!(
            parts[1].len() == 6 && parts[1].chars().all(|c| c.is_ascii_digit()),
            "bad sequence segment in {name}"
        );
        assert!(
            !parts[2].is_empty()
                && parts[2]
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "bad description in {name}"
        );
        assert!(seen.insert(name.clone()), "duplicate migration name: {name}");
    }
}

#[tokio::test]
async fn schema_has_the_expected_tables_and_indexes() {
    let database = common::create_test_database().await;
    let connection = database.connection();

    let rows = connection
        .query_all(Statement::from_string(
            connection.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type IN ('table', 'index')",
        ))
        .await
        .unwrap();
    let names: HashSet<String> = rows
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect();

    for expected in [
        "channels",
        "posts",
        "publications",
        "idx_channels_title_username",
        "idx_publications_channel_id",
        "idx_publications_post_id",
    ] {
        assert!(names.contains(expected), "missing {expected}: {names:?}");
    }
}

#[tokio::test]
async fn migrations_roll_back_cleanly() {
    let database = common::create_test_database().await;
    let connection = database.connection();

    Migrator::down(&*connection, None).await.unwrap();

    let rows = connection
        .query_all(Statement::from_string(
            connection.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('channels', 'posts', 'publications')",
        ))
        .await
        .unwrap();
    assert!(rows.is_empty());
}
