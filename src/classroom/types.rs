//! Wire types for the Google Classroom REST API
//!
//! These structs mirror the JSON shapes returned by the `courses`,
//! `announcements`, `courseWork`, and `userProfiles` endpoints. Fields the
//! bridge does not render are simply not modeled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course visible to the invoking account
///
/// Courses are discovered fresh each run and never persisted. A course that
/// appears under both the teacher and student role is counted once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Opaque course identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Lifecycle state; only `ACTIVE` courses are processed
    #[serde(default)]
    pub course_state: String,
}

impl Course {
    /// Whether this course is in the `ACTIVE` state
    pub fn is_active(&self) -> bool {
        self.course_state == "ACTIVE"
    }
}

/// The role under which courses are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseRole {
    /// Courses the account teaches (`teacherId=me`)
    Teacher,
    /// Courses the account is enrolled in (`studentId=me`)
    Student,
}

impl CourseRole {
    /// Query parameter name for this role
    pub fn query_param(&self) -> &'static str {
        match self {
            CourseRole::Teacher => "teacherId",
            CourseRole::Student => "studentId",
        }
    }
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Teacher => write!(f, "teacher"),
            CourseRole::Student => write!(f, "student"),
        }
    }
}

/// An announcement posted to a course stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    /// Free-text body; may be absent for material-only posts
    #[serde(default)]
    pub text: Option<String>,
    /// Link to the announcement in the Classroom UI
    #[serde(default)]
    pub alternate_link: String,
    pub update_time: DateTime<Utc>,
    /// Author user id, resolved to a display name best-effort
    #[serde(default)]
    pub creator_user_id: Option<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// An assignment or question posted to a course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWork {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alternate_link: String,
    pub update_time: DateTime<Utc>,
    /// Due date in the course timezone; absent means no deadline
    #[serde(default)]
    pub due_date: Option<DueDate>,
    /// Time-of-day component of the deadline; hour 0 is a real value
    #[serde(default)]
    pub due_time: Option<TimeOfDay>,
    /// e.g. `ASSIGNMENT`, `SHORT_ANSWER_QUESTION`
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub max_points: Option<f64>,
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Calendar date of a deadline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DueDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Time-of-day of a deadline
///
/// The API omits zero-valued fields, so `hours: Some(0)` and `hours: None`
/// are distinct: the former is a midnight deadline, the latter means the
/// deadline carries no time component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct TimeOfDay {
    #[serde(default)]
    pub hours: Option<u32>,
    #[serde(default)]
    pub minutes: Option<u32>,
}

/// An attachment on an announcement or assignment
///
/// Exactly one of the branches is normally set; an entry with none set is
/// rendered with a placeholder title and link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default)]
    pub drive_file: Option<SharedDriveFile>,
    #[serde(default)]
    pub link: Option<LinkMaterial>,
    #[serde(default)]
    pub youtube_video: Option<YouTubeVideo>,
}

/// Drive attachment wrapper; the API nests the file one level down
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedDriveFile {
    pub drive_file: DriveFile,
}

/// A Google Drive file attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alternate_link: String,
}

/// A plain link attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkMaterial {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// A YouTube video attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alternate_link: String,
}

/// A user profile, fetched to resolve announcement authors
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<ProfileName>,
}

/// Name block of a user profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Anything carrying a source update timestamp
///
/// The change detector is generic over this so announcements and coursework
/// share one detection path.
pub trait Timestamped {
    /// The item's last-update time as reported by the source
    fn update_time(&self) -> DateTime<Utc>;
}

impl Timestamped for Announcement {
    fn update_time(&self) -> DateTime<Utc> {
        self.update_time
    }
}

impl Timestamped for CourseWork {
    fn update_time(&self) -> DateTime<Utc> {
        self.update_time
    }
}

/// Response shape of `courses.list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesResponse {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Response shape of `courses.announcements.list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementsResponse {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// Response shape of `courses.courseWork.list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWorkResponse {
    #[serde(default)]
    pub course_work: Vec<CourseWork>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_is_active() {
        let course = Course {
            id: "1".to_string(),
            name: "Algebra".to_string(),
            course_state: "ACTIVE".to_string(),
        };
        assert!(course.is_active());
    }

    #[test]
    fn test_course_archived_is_not_active() {
        let course = Course {
            id: "1".to_string(),
            name: "Algebra".to_string(),
            course_state: "ARCHIVED".to_string(),
        };
        assert!(!course.is_active());
    }

    #[test]
    fn test_course_role_query_params() {
        assert_eq!(CourseRole::Teacher.query_param(), "teacherId");
        assert_eq!(CourseRole::Student.query_param(), "studentId");
    }

    #[test]
    fn test_announcement_deserializes_camel_case() {
        let json = r#"{
            "id": "a1",
            "text": "Welcome back",
            "alternateLink": "https://classroom.google.com/c/1/p/a1",
            "updateTime": "2024-03-05T10:00:00Z",
            "creatorUserId": "u1"
        }"#;
        let a: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "a1");
        assert_eq!(a.creator_user_id.as_deref(), Some("u1"));
        assert!(a.materials.is_empty());
    }

    #[test]
    fn test_course_work_deserializes_due_date_and_time() {
        let json = r#"{
            "id": "w1",
            "title": "Essay",
            "alternateLink": "https://classroom.google.com/c/1/a/w1",
            "updateTime": "2024-03-05T10:00:00Z",
            "dueDate": {"year": 2024, "month": 3, "day": 5},
            "dueTime": {"minutes": 30},
            "workType": "ASSIGNMENT",
            "maxPoints": 100
        }"#;
        let w: CourseWork = serde_json::from_str(json).unwrap();
        let due = w.due_date.unwrap();
        assert_eq!((due.year, due.month, due.day), (2024, 3, 5));
        // proto3 JSON omits zero fields: hours absent, minutes present
        let time = w.due_time.unwrap();
        assert_eq!(time.hours, None);
        assert_eq!(time.minutes, Some(30));
    }

    #[test]
    fn test_material_branches_deserialize() {
        let json = r#"{
            "driveFile": {"driveFile": {"title": "Notes", "alternateLink": "https://drive/x"}}
        }"#;
        let m: Material = serde_json::from_str(json).unwrap();
        assert_eq!(m.drive_file.unwrap().drive_file.title, "Notes");
    }

    #[test]
    fn test_courses_response_defaults_empty() {
        let resp: CoursesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.courses.is_empty());
        assert!(resp.next_page_token.is_none());
    }
}
