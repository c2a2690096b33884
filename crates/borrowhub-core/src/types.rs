use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

use crate::error::CoreError;

/// Notification classification tag.
///
/// Affects presentation (glyph/color) only; no behavioral branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Single-character marker used by terminal surfaces.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s.eq_ignore_ascii_case("info") => Ok(Self::Info),
            s if s.eq_ignore_ascii_case("success") => Ok(Self::Success),
            s if s.eq_ignore_ascii_case("warning") => Ok(Self::Warning),
            s if s.eq_ignore_ascii_case("error") => Ok(Self::Error),
            other => Err(CoreError::invalid_kind(other)),
        }
    }
}

/// One user-facing alert as stored by the remote service.
///
/// `id` and `created_at` are assigned server-side and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Creation payload — everything the server assigns is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
}

impl NewNotification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            is_read: false,
        }
    }
}

/// `GET /notifications` response: the full list plus the server-computed
/// unread count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub data: Vec<Notification>,
    pub unread_count: u32,
}

/// `GET /notifications/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    pub data: Notification,
}

/// Response to a mutation that returns the affected record
/// (`POST /notifications`, `PUT /notifications/{id}/read`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationEnvelope {
    pub data: Notification,
    pub message: String,
}

/// `DELETE /notifications/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEnvelope {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> Notification {
        Notification {
            id: "ntf-1".to_string(),
            title: "Overdue reminder".to_string(),
            message: "Your projector loan is due tomorrow".to_string(),
            kind: NotificationKind::Warning,
            is_read: false,
            created_at: datetime!(2024-03-01 09:30:00 UTC),
        }
    }

    #[test]
    fn test_kind_wire_strings() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Info).unwrap(),
            "\"Info\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationKind::Error).unwrap(),
            "\"Error\""
        );
        let kind: NotificationKind = serde_json::from_str("\"Warning\"").unwrap();
        assert_eq!(kind, NotificationKind::Warning);
    }

    #[test]
    fn test_kind_rejects_unknown_values() {
        // Closed enumeration: no catch-all variant
        assert!(serde_json::from_str::<NotificationKind>("\"Urgent\"").is_err());
        assert!(serde_json::from_str::<NotificationKind>("\"info\"").is_err());
    }

    #[test]
    fn test_kind_from_str_case_insensitive() {
        assert_eq!(
            "warning".parse::<NotificationKind>().unwrap(),
            NotificationKind::Warning
        );
        assert_eq!(
            "INFO".parse::<NotificationKind>().unwrap(),
            NotificationKind::Info
        );
        let err = "urgent".parse::<NotificationKind>().unwrap_err();
        assert!(err.to_string().contains("urgent"));
    }

    #[test]
    fn test_notification_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "ntf-1");
        assert_eq!(json["type"], "Warning");
        assert_eq!(json["isRead"], false);
        assert_eq!(json["createdAt"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn test_notification_deserialization() {
        let json = r#"{
            "id": "ntf-2",
            "title": "Reservation ready",
            "message": "Camera kit B is ready for pickup",
            "type": "Success",
            "isRead": true,
            "createdAt": "2024-03-02T10:00:00Z"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.id, "ntf-2");
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(n.is_read);
        assert_eq!(n.created_at, datetime!(2024-03-02 10:00:00 UTC));
    }

    #[test]
    fn test_notification_rejects_bad_timestamp() {
        let json = r#"{
            "id": "ntf-3",
            "title": "t",
            "message": "m",
            "type": "Info",
            "isRead": false,
            "createdAt": "yesterday"
        }"#;
        assert!(serde_json::from_str::<Notification>(json).is_err());
    }

    #[test]
    fn test_new_notification_defaults_unread() {
        let new = NewNotification::new("Fine posted", "EUR 2.50", NotificationKind::Error);
        assert!(!new.is_read);

        // isRead omitted on the wire also defaults to false
        let json = r#"{"title": "t", "message": "m", "type": "Info"}"#;
        let parsed: NewNotification = serde_json::from_str(json).unwrap();
        assert!(!parsed.is_read);
    }

    #[test]
    fn test_page_envelope() {
        let json = r#"{"data": [], "unreadCount": 0}"#;
        let page: NotificationPage = serde_json::from_str(json).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.unread_count, 0);
    }

    #[test]
    fn test_page_envelope_rejects_negative_count() {
        let json = r#"{"data": [], "unreadCount": -1}"#;
        assert!(serde_json::from_str::<NotificationPage>(json).is_err());
    }

    #[test]
    fn test_mutation_envelope() {
        let json = format!(
            r#"{{"data": {}, "message": "Notification marked as read"}}"#,
            serde_json::to_string(&sample()).unwrap()
        );
        let envelope: MutationEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope.data.id, "ntf-1");
        assert_eq!(envelope.message, "Notification marked as read");
    }

    #[test]
    fn test_kind_glyphs_distinct() {
        let glyphs = [
            NotificationKind::Info.glyph(),
            NotificationKind::Success.glyph(),
            NotificationKind::Warning.glyph(),
            NotificationKind::Error.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
