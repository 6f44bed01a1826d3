//! Repository trait definitions
//!
//! This module defines the store interface for channels. The service layer only
//! ever talks to this trait, so the backing store is chosen once at startup.

use async_trait::async_trait;

use crate::errors::RepositoryResult;
use crate::models::{Channel, ChannelCreateRequest, ChannelUpdateRequest, ChannelWithPublications};

/// Durable CRUD access to channels, plus the one relationship-aware read the
/// delete guard needs.
///
/// # Examples
///
/// ```rust,ignore
/// use media_channels::repositories::ChannelRepository;
///
/// async fn example(repo: &dyn ChannelRepository) -> anyhow::Result<()> {
///     if let Some(channel) = repo.find_by_title_and_username("Facebook", "test@test.com").await? {
///         println!("already registered as #{}", channel.id);
///     }
///     Ok(())
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Insert a new channel
    ///
    /// # Returns
    ///
    /// * `Ok(Channel)` - Created channel with its generated id
    /// * `Err(RepositoryError::ConstraintViolation)` - The (title, username) pair is taken
    async fn create(&self, request: ChannelCreateRequest) -> RepositoryResult<Channel>;

    /// Every channel, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Channel>>;

    /// Find a channel by its id
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Channel))` - Channel found
    /// * `Ok(None)` - Channel not found
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Channel>>;

    /// Lookup against the composite uniqueness key
    async fn find_by_title_and_username(
        &self,
        title: &str,
        username: &str,
    ) -> RepositoryResult<Option<Channel>>;

    /// Find a channel together with the publications that reference it
    async fn find_by_id_with_publications(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<ChannelWithPublications>>;

    /// Apply a partial update
    ///
    /// # Returns
    ///
    /// * `Ok(Channel)` - Updated channel
    /// * `Err(RepositoryError::RecordNotFound)` - No channel with this id
    async fn update(&self, id: i32, request: ChannelUpdateRequest) -> RepositoryResult<Channel>;

    /// Delete a channel by id
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Channel deleted
    /// * `Err(RepositoryError::RecordNotFound)` - No channel with this id
    /// * `Err(RepositoryError::ConstraintViolation)` - Publications still reference it
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
