//! Channel service
//!
//! Guards the two invariants the channel store cannot explain on its own:
//! the (title, username) pair is unique, and a channel that still has
//! publications is never deleted.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{Channel, ChannelCreateRequest, ChannelUpdateRequest};
use crate::repositories::ChannelRepository;

const RESOURCE: &str = "channel";
pub const DUPLICATE_CHANNEL_MESSAGE: &str = "Media with this info already exists";
pub const CHANNEL_IN_USE_MESSAGE: &str =
    "cannot delete a channel with scheduled or published content";

/// Service for managing channels with business logic
#[derive(Clone)]
pub struct ChannelService {
    repository: Arc<dyn ChannelRepository>,
}

impl ChannelService {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    /// Create a channel unless another one already uses the same pair
    pub async fn create(&self, request: ChannelCreateRequest) -> AppResult<Channel> {
        request.validate()?;

        if let Some(existing) = self
            .repository
            .find_by_title_and_username(&request.title, &request.username)
            .await?
        {
            warn!(
                existing_id = existing.id,
                title = %request.title,
                username = %request.username,
                "Rejected duplicate channel"
            );
            return Err(AppError::conflict(RESOURCE, DUPLICATE_CHANNEL_MESSAGE));
        }

        let channel = self.repository.create(request).await?;
        info!(channel_id = channel.id, title = %channel.title, "Created channel");

        Ok(channel)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Channel>> {
        let channels = self.repository.find_all().await?;
        debug!(count = channels.len(), "Listed channels");
        Ok(channels)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Channel> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))
    }

    /// Apply a partial update, re-checking uniqueness against the pair the
    /// channel would hold afterwards. The channel itself never counts as a
    /// collision.
    pub async fn update(&self, id: i32, request: ChannelUpdateRequest) -> AppResult<Channel> {
        request.validate()?;

        let current = self.get_by_id(id).await?;

        let (title, username) = request.candidate_key(&current);
        if let Some(holder) = self
            .repository
            .find_by_title_and_username(title, username)
            .await?
            && holder.id != id
        {
            warn!(
                channel_id = id,
                holder_id = holder.id,
                "Rejected channel update colliding with another channel"
            );
            return Err(AppError::conflict(RESOURCE, DUPLICATE_CHANNEL_MESSAGE));
        }

        if request.is_empty() {
            debug!(channel_id = id, "Empty channel update, nothing to write");
            return Ok(current);
        }

        let channel = self.repository.update(id, request).await?;
        info!(channel_id = channel.id, title = %channel.title, "Updated channel");

        Ok(channel)
    }

    /// Delete a channel that has nothing scheduled or published on it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let channel = self
            .repository
            .find_by_id_with_publications(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE, id))?;

        if channel.has_publications() {
            warn!(
                channel_id = id,
                publications = channel.publications.len(),
                "Rejected delete of channel with publications"
            );
            return Err(AppError::forbidden(RESOURCE, CHANNEL_IN_USE_MESSAGE));
        }

        self.repository.delete(id).await?;
        info!(channel_id = id, "Deleted channel");

        Ok(())
    }
}
