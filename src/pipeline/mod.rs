//! Per-course pipeline: detection, normalization, and cross-feed merge

pub mod detect;
pub mod merge;
pub mod record;
pub mod render;

pub use detect::{detect_new, Detection};
pub use merge::chronological;
pub use record::{FeedKind, NotificationRecord};
pub use render::{format_due_date, render_announcement, render_course_work};
