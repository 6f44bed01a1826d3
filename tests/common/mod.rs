//! Shared fixtures for integration tests
//!
//! Every helper works against a private, migrated in-memory SQLite database.

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;

use media_channels::{
    config::DatabaseConfig,
    database::{Database, repositories::ChannelSeaOrmRepository},
    entities::{channels, posts, publications},
    web::{AppState, create_router},
};

/// Fresh migrated database
pub async fn create_test_database() -> Database {
    let database = Database::new(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to create test database");
    database.migrate().await.expect("Failed to run migrations");
    database
}

pub async fn create_test_repository() -> (Database, ChannelSeaOrmRepository) {
    let database = create_test_database().await;
    let repository = ChannelSeaOrmRepository::new(database.connection());
    (database, repository)
}

/// HTTP test server over the full router, plus the database behind it for
/// seeding and assertions
pub async fn create_test_server() -> (TestServer, Database) {
    let database = create_test_database().await;
    let app = create_router(AppState::new(database.clone()));
    let server = TestServer::new(app).expect("Failed to start test server");
    (server, database)
}

/// Inserts rows directly through the entities, bypassing the service
pub struct Fixtures {
    database: Database,
}

impl Fixtures {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
        }
    }

    fn connection(&self) -> Arc<sea_orm::DatabaseConnection> {
        self.database.connection()
    }

    pub async fn channel(&self, title: &str, username: &str) -> channels::Model {
        channels::ActiveModel {
            title: Set(title.to_string()),
            username: Set(username.to_string()),
            ..Default::default()
        }
        .insert(&*self.connection())
        .await
        .expect("Failed to insert channel")
    }

    pub async fn post(&self, title: &str) -> posts::Model {
        posts::ActiveModel {
            title: Set(title.to_string()),
            text: Set(format!("{title} body")),
            image: Set(None),
            ..Default::default()
        }
        .insert(&*self.connection())
        .await
        .expect("Failed to insert post")
    }

    /// Schedules a new post on the channel
    pub async fn publication(&self, channel_id: i32) -> publications::Model {
        let post = self.post("Launch announcement").await;
        publications::ActiveModel {
            channel_id: Set(channel_id),
            post_id: Set(post.id),
            date: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.connection())
        .await
        .expect("Failed to insert publication")
    }
}
