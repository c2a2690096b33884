pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{
    DeleteEnvelope, MutationEnvelope, NewNotification, Notification, NotificationEnvelope,
    NotificationKind, NotificationPage,
};
