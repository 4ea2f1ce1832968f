//! HTTP client for the Google Classroom API
//!
//! Defines the [`ClassroomSource`] trait the orchestrator consumes, plus the
//! reqwest-backed implementation. The client performs no retries: fetch and
//! enumeration failures are surfaced to the caller, which isolates them per
//! feed or per role.

use crate::classroom::types::{
    Announcement, AnnouncementsResponse, Course, CourseRole, CourseWork, CourseWorkResponse,
    CoursesResponse, UserProfile,
};
use crate::error::{ClasscordError, Result};
use async_trait::async_trait;

/// Placeholder author shown when a profile lookup fails or yields no name
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Read access to the Classroom source
///
/// This is the seam between the orchestrator and the external API, so tests
/// can substitute an in-memory source.
#[async_trait]
pub trait ClassroomSource: Send + Sync {
    /// List all courses visible under the given role, following pagination
    /// to exhaustion.
    async fn list_courses(&self, role: CourseRole) -> Result<Vec<Course>>;

    /// Fetch one page of announcements for a course, most recently updated
    /// first. No deeper pagination is performed.
    async fn list_announcements(&self, course_id: &str) -> Result<Vec<Announcement>>;

    /// Fetch one page of coursework for a course, most recently updated
    /// first. No deeper pagination is performed.
    async fn list_course_work(&self, course_id: &str) -> Result<Vec<CourseWork>>;

    /// Resolve a user id to a display name.
    ///
    /// Lookup failures degrade to [`UNKNOWN_AUTHOR`]; this call never errors.
    async fn author_name(&self, user_id: &str) -> String;
}

/// reqwest-backed Classroom API client
pub struct ClassroomClient {
    http: reqwest::Client,
    api_base: String,
    access_token: String,
    page_size: u32,
}

impl ClassroomClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `api_base` - API base URL (production default or a test mock)
    /// * `access_token` - OAuth bearer token attached to every request
    /// * `page_size` - feed page size for announcement/coursework fetches
    pub fn new(api_base: impl Into<String>, access_token: impl Into<String>, page_size: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            page_size,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, String> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("{} returned {}", url, status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("invalid response from {}: {}", url, e))
    }
}

#[async_trait]
impl ClassroomSource for ClassroomClient {
    async fn list_courses(&self, role: CourseRole) -> Result<Vec<Course>> {
        let url = format!("{}/v1/courses", self.api_base);
        let mut courses = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![
                (role.query_param(), "me".to_string()),
                ("pageSize", "100".to_string()),
            ];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let response: CoursesResponse = self
                .get_json(&url, &query)
                .await
                .map_err(ClasscordError::Enumeration)?;

            courses.extend(response.courses);
            page_token = response.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        tracing::debug!("Listed {} courses for role {}", courses.len(), role);
        Ok(courses)
    }

    async fn list_announcements(&self, course_id: &str) -> Result<Vec<Announcement>> {
        let url = format!("{}/v1/courses/{}/announcements", self.api_base, course_id);
        let query = vec![
            ("orderBy", "updateTime desc".to_string()),
            ("pageSize", self.page_size.to_string()),
        ];

        let response: AnnouncementsResponse = self
            .get_json(&url, &query)
            .await
            .map_err(ClasscordError::Fetch)?;
        Ok(response.announcements)
    }

    async fn list_course_work(&self, course_id: &str) -> Result<Vec<CourseWork>> {
        let url = format!("{}/v1/courses/{}/courseWork", self.api_base, course_id);
        let query = vec![
            ("orderBy", "updateTime desc".to_string()),
            ("pageSize", self.page_size.to_string()),
        ];

        let response: CourseWorkResponse = self
            .get_json(&url, &query)
            .await
            .map_err(ClasscordError::Fetch)?;
        Ok(response.course_work)
    }

    async fn author_name(&self, user_id: &str) -> String {
        let url = format!("{}/v1/userProfiles/{}", self.api_base, user_id);
        match self.get_json::<UserProfile>(&url, &[]).await {
            Ok(profile) => profile
                .name
                .and_then(|n| n.full_name)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            Err(e) => {
                tracing::warn!("Profile lookup for {} failed: {}", user_id, e);
                UNKNOWN_AUTHOR.to_string()
            }
        }
    }
}
