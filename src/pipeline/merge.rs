//! Cross-feed chronological merge

use crate::pipeline::record::NotificationRecord;

/// Merge a course's newly detected records from both feeds into one
/// delivery sequence, ascending by update time.
///
/// The sort is stable: records with equal timestamps keep the order the
/// detectors emitted them in.
pub fn chronological(mut records: Vec<NotificationRecord>) -> Vec<NotificationRecord> {
    records.sort_by_key(|r| r.update_time);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::payload::{Embed, EmbedAuthor, WebhookPayload};
    use crate::pipeline::record::FeedKind;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, hour, 0, 0).unwrap()
    }

    fn record(kind: FeedKind, title: &str, hour: u32) -> NotificationRecord {
        NotificationRecord {
            course_id: "c1".to_string(),
            kind,
            update_time: at(hour),
            payload: WebhookPayload {
                username: "test".to_string(),
                avatar_url: String::new(),
                embeds: vec![Embed {
                    author: EmbedAuthor::classroom("test"),
                    title: title.to_string(),
                    description: String::new(),
                    url: String::new(),
                    timestamp: String::new(),
                    color: 0,
                    fields: vec![],
                }],
            },
        }
    }

    fn titles(records: &[NotificationRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.payload.embeds[0].title.clone())
            .collect()
    }

    #[test]
    fn test_interleaves_feeds_by_update_time() {
        let records = vec![
            record(FeedKind::Announcement, "a1", 1),
            record(FeedKind::Announcement, "a2", 4),
            record(FeedKind::CourseWork, "w1", 2),
            record(FeedKind::CourseWork, "w2", 3),
        ];

        let merged = chronological(records);
        assert_eq!(titles(&merged), vec!["a1", "w1", "w2", "a2"]);
    }

    #[test]
    fn test_output_is_non_decreasing() {
        let records = vec![
            record(FeedKind::CourseWork, "w", 9),
            record(FeedKind::Announcement, "a", 2),
            record(FeedKind::Announcement, "b", 7),
            record(FeedKind::CourseWork, "x", 2),
        ];

        let merged = chronological(records);
        for pair in merged.windows(2) {
            assert!(pair[0].update_time <= pair[1].update_time);
        }
    }

    #[test]
    fn test_equal_timestamps_keep_emission_order() {
        let records = vec![
            record(FeedKind::Announcement, "first", 5),
            record(FeedKind::CourseWork, "second", 5),
        ];

        let merged = chronological(records);
        assert_eq!(titles(&merged), vec!["first", "second"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(chronological(Vec::new()).is_empty());
    }
}
