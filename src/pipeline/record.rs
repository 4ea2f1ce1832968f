//! Normalized notification records

use crate::discord::payload::WebhookPayload;
use chrono::{DateTime, Utc};

/// The two content streams tracked per course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Course stream announcements
    Announcement,
    /// Assignments and questions
    CourseWork,
}

impl FeedKind {
    /// Both feed kinds, in the order a course is processed
    pub const ALL: [FeedKind; 2] = [FeedKind::Announcement, FeedKind::CourseWork];

    /// Fragment used in the persisted watermark key for this feed
    pub fn key_fragment(&self) -> &'static str {
        match self {
            FeedKind::Announcement => "ANNOUNCEMENT",
            FeedKind::CourseWork => "COURSEWORK",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Announcement => write!(f, "announcement"),
            FeedKind::CourseWork => write!(f, "coursework"),
        }
    }
}

/// A sink-ready notification, immutable once built
///
/// Ordering key is `update_time`; records with equal timestamps keep their
/// detector emission order through the stable cross-feed merge.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    /// Course the item belongs to
    pub course_id: String,
    /// Feed the item came from
    pub kind: FeedKind,
    /// Source update time, the chronological ordering key
    pub update_time: DateTime<Utc>,
    /// Fully rendered webhook document
    pub payload: WebhookPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_fragments() {
        assert_eq!(FeedKind::Announcement.key_fragment(), "ANNOUNCEMENT");
        assert_eq!(FeedKind::CourseWork.key_fragment(), "COURSEWORK");
    }

    #[test]
    fn test_display() {
        assert_eq!(FeedKind::Announcement.to_string(), "announcement");
        assert_eq!(FeedKind::CourseWork.to_string(), "coursework");
    }

    #[test]
    fn test_all_order() {
        assert_eq!(
            FeedKind::ALL,
            [FeedKind::Announcement, FeedKind::CourseWork]
        );
    }
}
