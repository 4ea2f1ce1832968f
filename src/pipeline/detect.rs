//! Change detection against the stored watermark
//!
//! The source returns a bounded page in reverse-chronological order; the
//! detector walks it oldest-first and keeps the items strictly newer than
//! the watermark. With no watermark, everything in the page is new, so the
//! first run floods. Items beyond the fetched page are never seen: when more
//! unseen items than the page size accumulate between runs, the oldest
//! overflow is missed. Known limitation of the bounded window.

use crate::classroom::types::Timestamped;
use chrono::{DateTime, Utc};

/// Result of one detection pass over a feed page
#[derive(Debug, Clone)]
pub struct Detection<T> {
    /// Unseen items in chronological order, oldest first
    pub new_items: Vec<T>,
    /// Max update time among the new items; the next watermark when present
    pub candidate_watermark: Option<DateTime<Utc>>,
}

impl<T> Detection<T> {
    /// Whether the pass found anything new
    pub fn is_empty(&self) -> bool {
        self.new_items.is_empty()
    }
}

/// Detect unseen items in a reverse-chronological feed page
///
/// # Arguments
///
/// * `page` - fetched items, most recently updated first
/// * `watermark` - update time of the most recent already-delivered item,
///   or `None` when this (course, feed) pair has never been processed
///
/// Items with an update time equal to the watermark are excluded: the
/// boundary is strict, so re-fetching the watermarked item does not
/// re-notify it.
pub fn detect_new<T: Timestamped>(page: Vec<T>, watermark: Option<DateTime<Utc>>) -> Detection<T> {
    let mut new_items = Vec::new();
    let mut candidate = None;

    for item in page.into_iter().rev() {
        let updated = item.update_time();
        let is_new = match watermark {
            Some(mark) => updated > mark,
            None => true,
        };
        if !is_new {
            continue;
        }

        if candidate.map_or(true, |c| updated > c) {
            candidate = Some(updated);
        }
        new_items.push(item);
    }

    Detection {
        new_items,
        candidate_watermark: candidate,
    }
}
