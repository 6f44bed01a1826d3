//! SeaORM-based Channel repository implementation
//!
//! This provides a database-agnostic repository for Channel operations using SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;

use crate::entities::{
    channels,
    prelude::{Channels, Publications},
    publications,
};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{
    Channel, ChannelCreateRequest, ChannelUpdateRequest, ChannelWithPublications, Publication,
};
use crate::repositories::ChannelRepository;

const TABLE: &str = "channels";

/// SeaORM-based repository for Channel operations
#[derive(Clone)]
pub struct ChannelSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl ChannelSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    /// Convert SeaORM model to domain model
    fn model_to_domain(model: channels::Model) -> Channel {
        Channel {
            id: model.id,
            title: model.title,
            username: model.username,
        }
    }

    fn publication_to_domain(model: publications::Model) -> Publication {
        Publication {
            id: model.id,
            channel_id: model.channel_id,
            post_id: model.post_id,
            date: model.date,
        }
    }
}

#[async_trait]
impl ChannelRepository for ChannelSeaOrmRepository {
    async fn create(&self, request: ChannelCreateRequest) -> RepositoryResult<Channel> {
        let active_model = channels::ActiveModel {
            title: Set(request.title),
            username: Set(request.username),
            ..Default::default()
        };

        let model = active_model.insert(&*self.connection).await?;
        debug!(channel_id = model.id, "Inserted channel row");

        Ok(Self::model_to_domain(model))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Channel>> {
        let models = Channels::find()
            .order_by_asc(channels::Column::Id)
            .all(&*self.connection)
            .await?;

        Ok(models.into_iter().map(Self::model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Channel>> {
        let model = Channels::find_by_id(id).one(&*self.connection).await?;
        Ok(model.map(Self::model_to_domain))
    }

    async fn find_by_title_and_username(
        &self,
        title: &str,
        username: &str,
    ) -> RepositoryResult<Option<Channel>> {
        let model = Channels::find()
            .filter(channels::Column::Title.eq(title))
            .filter(channels::Column::Username.eq(username))
            .one(&*self.connection)
            .await?;

        Ok(model.map(Self::model_to_domain))
    }

    async fn find_by_id_with_publications(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<ChannelWithPublications>> {
        let rows = Channels::find_by_id(id)
            .find_with_related(Publications)
            .all(&*self.connection)
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(channel, publications)| ChannelWithPublications {
                channel: Self::model_to_domain(channel),
                publications: publications
                    .into_iter()
                    .map(Self::publication_to_domain)
                    .collect(),
            }))
    }

    async fn update(&self, id: i32, request: ChannelUpdateRequest) -> RepositoryResult<Channel> {
        if request.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepositoryError::not_found(TABLE, id));
        }

        let mut active_model = channels::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(title) = request.title {
            active_model.title = Set(title);
        }
        if let Some(username) = request.username {
            active_model.username = Set(username);
        }

        let model = active_model
            .update(&*self.connection)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepositoryError::not_found(TABLE, id),
                other => RepositoryError::from(other),
            })?;
        debug!(channel_id = model.id, "Updated channel row");

        Ok(Self::model_to_domain(model))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = Channels::delete_by_id(id).exec(&*self.connection).await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(TABLE, id));
        }
        debug!(channel_id = id, "Deleted channel row");

        Ok(())
    }
}
