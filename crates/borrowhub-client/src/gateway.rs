use async_trait::async_trait;

use borrowhub_core::{
    DeleteEnvelope, MutationEnvelope, NewNotification, NotificationEnvelope, NotificationPage,
};

use crate::error::ApiError;

/// Remote operations of the notification service.
///
/// The store only ever talks to the service through this trait, so tests
/// can substitute an in-memory implementation for the HTTP one.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch the full notification list and the server-computed unread count.
    async fn list(&self) -> Result<NotificationPage, ApiError>;

    /// Fetch a single notification by id.
    async fn get(&self, id: &str) -> Result<NotificationEnvelope, ApiError>;

    /// Create a notification; the server assigns id and creation time.
    async fn create(&self, new: &NewNotification) -> Result<MutationEnvelope, ApiError>;

    /// Mark a notification read; returns the updated record.
    async fn mark_read(&self, id: &str) -> Result<MutationEnvelope, ApiError>;

    /// Delete a notification.
    async fn delete(&self, id: &str) -> Result<DeleteEnvelope, ApiError>;
}
