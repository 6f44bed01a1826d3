//! Domain models
//!
//! These types are what the service and web layers work with. They are kept
//! separate from the SeaORM entities so the store can change without leaking
//! persistence details upward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// A media account a post can be published to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Channel {
    pub id: i32,
    pub title: String,
    pub username: String,
}

/// A post scheduled for, or already published on, a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Publication {
    pub id: i32,
    pub channel_id: i32,
    pub post_id: i32,
    pub date: DateTime<Utc>,
}

/// A channel together with every publication that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelWithPublications {
    pub channel: Channel,
    pub publications: Vec<Publication>,
}

impl ChannelWithPublications {
    /// Whether anything is scheduled or published on this channel
    pub fn has_publications(&self) -> bool {
        !self.publications.is_empty()
    }
}

/// Request for channel creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCreateRequest {
    pub title: String,
    pub username: String,
}

impl ChannelCreateRequest {
    pub fn new<T: Into<String>, U: Into<String>>(title: T, username: U) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
        }
    }

    /// Both fields are required and must not be blank
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank("title", &self.title)?;
        require_non_blank("username", &self.username)
    }
}

/// Partial update of a channel; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelUpdateRequest {
    pub title: Option<String>,
    pub username: Option<String>,
}

impl ChannelUpdateRequest {
    /// Supplied fields must not be blank
    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            require_non_blank("title", title)?;
        }
        if let Some(username) = &self.username {
            require_non_blank("username", username)?;
        }
        Ok(())
    }

    /// True when the request would not change anything
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.username.is_none()
    }

    /// The (title, username) pair the channel would hold after this update
    pub fn candidate_key<'a>(&'a self, current: &'a Channel) -> (&'a str, &'a str) {
        (
            self.title.as_deref().unwrap_or(&current.title),
            self.username.as_deref().unwrap_or(&current.username),
        )
    }
}

fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_both_fields() {
        assert!(ChannelCreateRequest::new("Facebook", "test@test.com").validate().is_ok());
        assert!(matches!(
            ChannelCreateRequest::new("", "test@test.com").validate(),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            ChannelCreateRequest::new("Facebook", "   ").validate(),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn update_request_only_checks_supplied_fields() {
        let request = ChannelUpdateRequest {
            title: Some("Meta".to_string()),
            username: None,
        };
        assert!(request.validate().is_ok());

        let blank = ChannelUpdateRequest {
            title: None,
            username: Some(String::new()),
        };
        assert!(blank.validate().is_err());
        assert!(ChannelUpdateRequest::default().is_empty());
    }

    #[test]
    fn candidate_key_overlays_current_values() {
        let current = Channel {
            id: 1,
            title: "Facebook".to_string(),
            username: "test@test.com".to_string(),
        };
        let request = ChannelUpdateRequest {
            title: Some("Meta".to_string()),
            username: None,
        };

        assert_eq!(request.candidate_key(&current), ("Meta", "test@test.com"));
        assert_eq!(
            ChannelUpdateRequest::default().candidate_key(&current),
            ("Facebook", "test@test.com")
        );
    }
}
