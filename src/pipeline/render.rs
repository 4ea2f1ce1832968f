//! Item normalization: raw Classroom items to webhook payloads
//!
//! All functions here are pure; author resolution happens before rendering
//! so a lookup failure can degrade to a placeholder without reaching this
//! module.

use crate::classroom::types::{Announcement, Course, CourseWork, DueDate, Material, TimeOfDay};
use crate::discord::payload::{
    Embed, EmbedAuthor, EmbedField, WebhookPayload, CLASSROOM_ICON_URL,
};
use crate::pipeline::record::{FeedKind, NotificationRecord};

/// Discord embed description limit
const MAX_DESCRIPTION_CHARS: usize = 4000;
/// Discord embed field value limit, minus a small margin
const MAX_MATERIALS_CHARS: usize = 1020;
/// Embed title limit used for assignment titles
const MAX_TITLE_CHARS: usize = 250;

const ANNOUNCEMENT_COLOR: u32 = 0x20975A;
const COURSEWORK_COLOR: u32 = 0xFFA500;

/// Truncate to at most `max` characters, respecting char boundaries
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

/// Format a deadline for display
///
/// No date yields the no-deadline placeholder. A time component is appended
/// only when an hour is present; hour 0 is a real midnight deadline, and
/// absent minutes render as `00`.
pub fn format_due_date(date: Option<&DueDate>, time: Option<&TimeOfDay>) -> String {
    let date = match date {
        Some(d) => d,
        None => return "No deadline".to_string(),
    };

    let mut formatted = format!("{}/{:02}/{:02}", date.year, date.month, date.day);
    if let Some(hours) = time.and_then(|t| t.hours) {
        let minutes = time.and_then(|t| t.minutes).unwrap_or(0);
        formatted.push_str(&format!(" {:02}:{:02}", hours, minutes));
    }
    formatted
}

/// Resolve one material to a `[title](url)` markdown link
///
/// Priority: drive file, then plain link, then YouTube video, then a
/// placeholder for entries with no recognized branch.
fn material_link(material: &Material) -> String {
    if let Some(drive) = &material.drive_file {
        return format!(
            "[{}]({})",
            drive.drive_file.title, drive.drive_file.alternate_link
        );
    }
    if let Some(link) = &material.link {
        let title = link.title.as_deref().unwrap_or("Link");
        return format!("[{}]({})", title, link.url);
    }
    if let Some(video) = &material.youtube_video {
        return format!("[YouTube: {}]({})", video.title, video.alternate_link);
    }
    "[Unknown file](#)".to_string()
}

/// Render a material list as a newline-separated field value
///
/// Returns `None` for an empty list so the field is omitted entirely.
pub fn materials_field_value(materials: &[Material]) -> Option<String> {
    if materials.is_empty() {
        return None;
    }
    let joined = materials
        .iter()
        .map(material_link)
        .collect::<Vec<_>>()
        .join("\n");
    Some(truncate_chars(&joined, MAX_MATERIALS_CHARS))
}

/// Render an announcement into a sink-ready record
///
/// # Arguments
///
/// * `course` - the course the announcement belongs to
/// * `announcement` - the raw source item
/// * `author_name` - resolved author display name (placeholder on lookup
///   failure, resolved by the caller)
pub fn render_announcement(
    course: &Course,
    announcement: &Announcement,
    author_name: &str,
) -> NotificationRecord {
    let description = announcement
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("(no content)");

    let mut fields = Vec::new();
    if let Some(value) = materials_field_value(&announcement.materials) {
        fields.push(EmbedField::block("Attachments", value));
    }

    let embed = Embed {
        author: EmbedAuthor::classroom(format!("📢 New announcement in {}", course.name)),
        title: format!("Posted by: {}", author_name),
        description: truncate_chars(description, MAX_DESCRIPTION_CHARS),
        url: announcement.alternate_link.clone(),
        timestamp: announcement.update_time.to_rfc3339(),
        color: ANNOUNCEMENT_COLOR,
        fields,
    };

    NotificationRecord {
        course_id: course.id.clone(),
        kind: FeedKind::Announcement,
        update_time: announcement.update_time,
        payload: WebhookPayload {
            username: "Classroom Announcements".to_string(),
            avatar_url: CLASSROOM_ICON_URL.to_string(),
            embeds: vec![embed],
        },
    }
}

/// Render an assignment into a sink-ready record
pub fn render_course_work(course: &Course, work: &CourseWork) -> NotificationRecord {
    let title = work
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled assignment");
    let description = work
        .description
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("(no description)");

    let mut fields = vec![EmbedField::inline(
        "Due",
        format_due_date(work.due_date.as_ref(), work.due_time.as_ref()),
    )];

    if let Some(work_type) = &work.work_type {
        fields.push(EmbedField::inline(
            "Type",
            work_type.replace('_', " ").to_lowercase(),
        ));
    }
    if let Some(points) = work.max_points {
        fields.push(EmbedField::inline("Points", format!("{}", points)));
    }
    if let Some(value) = materials_field_value(&work.materials) {
        fields.push(EmbedField::block("Materials", value));
    }

    let embed = Embed {
        author: EmbedAuthor::classroom(format!("✏️ New assignment in {}", course.name)),
        title: truncate_chars(title, MAX_TITLE_CHARS),
        description: truncate_chars(description, MAX_DESCRIPTION_CHARS),
        url: work.alternate_link.clone(),
        timestamp: work.update_time.to_rfc3339(),
        color: COURSEWORK_COLOR,
        fields,
    };

    NotificationRecord {
        course_id: course.id.clone(),
        kind: FeedKind::CourseWork,
        update_time: work.update_time,
        payload: WebhookPayload {
            username: "Classroom Coursework".to_string(),
            avatar_url: CLASSROOM_ICON_URL.to_string(),
            embeds: vec![embed],
        },
    }
}
