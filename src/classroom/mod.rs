//! Google Classroom source: wire types and the API client

pub mod client;
pub mod types;

pub use client::{ClassroomClient, ClassroomSource, UNKNOWN_AUTHOR};
pub use types::{
    Announcement, Course, CourseRole, CourseWork, DueDate, Material, TimeOfDay, Timestamped,
};
