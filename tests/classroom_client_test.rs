//! Classroom client integration tests
//!
//! Exercises the reqwest-backed `ClassroomClient` against a `wiremock` mock
//! server: course list pagination, feed fetch parameters, error mapping, and
//! the profile lookup fallback.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use classcord::classroom::types::CourseRole;
use classcord::classroom::{ClassroomClient, ClassroomSource, UNKNOWN_AUTHOR};

fn client(server: &MockServer) -> ClassroomClient {
    ClassroomClient::new(server.uri(), "test-token", 10)
}

#[tokio::test]
async fn test_list_courses_follows_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("teacherId", "me"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": "c2", "name": "Biology", "courseState": "ACTIVE"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("teacherId", "me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": "c1", "name": "Algebra", "courseState": "ACTIVE"}],
            "nextPageToken": "page-2"
        })))
        .mount(&server)
        .await;

    let courses = client(&server)
        .list_courses(CourseRole::Teacher)
        .await
        .unwrap();

    let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
}

#[tokio::test]
async fn test_list_courses_uses_student_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .and(query_param("studentId", "me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": "c3", "name": "Chemistry", "courseState": "ACTIVE"}]
        })))
        .mount(&server)
        .await;

    let courses = client(&server)
        .list_courses(CourseRole::Student)
        .await
        .unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Chemistry");
}

#[tokio::test]
async fn test_list_courses_error_is_enumeration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_courses(CourseRole::Teacher)
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Enumeration error"), "got: {}", message);
    assert!(message.contains("403"), "got: {}", message);
}

#[tokio::test]
async fn test_list_announcements_requests_desc_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/c1/announcements"))
        .and(query_param("orderBy", "updateTime desc"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "announcements": [
                {
                    "id": "a2",
                    "text": "Newer",
                    "alternateLink": "https://classroom.google.com/c/c1/p/a2",
                    "updateTime": "2024-03-05T12:00:00Z"
                },
                {
                    "id": "a1",
                    "text": "Older",
                    "alternateLink": "https://classroom.google.com/c/c1/p/a1",
                    "updateTime": "2024-03-05T10:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let page = client(&server).list_announcements("c1").await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, "a2");
    assert!(page[0].update_time > page[1].update_time);
}

#[tokio::test]
async fn test_list_announcements_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/c1/announcements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let page = client(&server).list_announcements("c1").await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_list_course_work_error_is_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/c1/courseWork"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client(&server).list_course_work("c1").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Fetch error"), "got: {}", message);
}

#[tokio::test]
async fn test_list_course_work_parses_due_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/c1/courseWork"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courseWork": [{
                "id": "w1",
                "title": "Essay",
                "alternateLink": "https://classroom.google.com/c/c1/a/w1",
                "updateTime": "2024-03-05T12:00:00Z",
                "dueDate": {"year": 2024, "month": 3, "day": 12},
                "workType": "ASSIGNMENT",
                "maxPoints": 50
            }]
        })))
        .mount(&server)
        .await;

    let page = client(&server).list_course_work("c1").await.unwrap();
    assert_eq!(page.len(), 1);
    let due = page[0].due_date.unwrap();
    assert_eq!((due.year, due.month, due.day), (2024, 3, 12));
    assert_eq!(page[0].max_points, Some(50.0));
}

#[tokio::test]
async fn test_author_name_resolves_full_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/userProfiles/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": {"fullName": "Ada Lovelace"}
        })))
        .mount(&server)
        .await;

    let name = client(&server).author_name("u1").await;
    assert_eq!(name, "Ada Lovelace");
}

#[tokio::test]
async fn test_author_name_falls_back_on_lookup_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/userProfiles/u1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let name = client(&server).author_name("u1").await;
    assert_eq!(name, UNKNOWN_AUTHOR);
}

#[tokio::test]
async fn test_author_name_falls_back_on_missing_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/userProfiles/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let name = client(&server).author_name("u1").await;
    assert_eq!(name, UNKNOWN_AUTHOR);
}
