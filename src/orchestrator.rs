//! Course orchestration: enumeration, filtering, and the per-course pipeline
//!
//! Drives one full run: discover courses under both roles, deduplicate,
//! apply the exclusion and activity filters, then fetch-detect-render-deliver
//! per course. Failures are isolated at the narrowest scope: a role listing
//! failure degrades to an empty list, a feed failure skips that feed only,
//! and a send failure skips that notification only.

use crate::classroom::client::{ClassroomSource, UNKNOWN_AUTHOR};
use crate::classroom::types::{Course, CourseRole};
use crate::discord::sink::{deliver_all, DeliveryReport, NotificationSink};
use crate::error::Result;
use crate::pacing::Pacing;
use crate::pipeline::record::{FeedKind, NotificationRecord};
use crate::pipeline::{chronological, detect_new, render_announcement, render_course_work};
use crate::watermark::WatermarkStore;
use std::collections::HashSet;

/// Outcome of one full run, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Unique courses discovered across both roles
    pub courses_discovered: usize,
    /// Courses that went through the pipeline
    pub courses_processed: usize,
    /// Courses skipped by exclusion or activity state
    pub courses_skipped: usize,
    /// Notifications the sink accepted
    pub sent: usize,
    /// Notifications that failed to send
    pub failed: usize,
}

/// Drives the poll-and-notify pipeline over all visible courses
pub struct Orchestrator<S, K> {
    source: S,
    sink: K,
    store: WatermarkStore,
    excluded: HashSet<String>,
    pacing: Pacing,
    dry_run: bool,
}

impl<S: ClassroomSource, K: NotificationSink> Orchestrator<S, K> {
    /// Create an orchestrator
    ///
    /// # Arguments
    ///
    /// * `source` - Classroom read access
    /// * `sink` - notification sink
    /// * `store` - watermark persistence
    /// * `excluded` - course ids that are never fetched
    /// * `pacing` - delays between sends and between courses
    pub fn new(
        source: S,
        sink: K,
        store: WatermarkStore,
        excluded: impl IntoIterator<Item = String>,
        pacing: Pacing,
    ) -> Self {
        Self {
            source,
            sink,
            store,
            excluded: excluded.into_iter().collect(),
            pacing,
            dry_run: false,
        }
    }

    /// Detect and log new items without writing watermarks or sending
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Perform one full run over all visible courses
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting check over all courses");
        let courses = self.discover_courses().await;
        tracing::info!("Discovered {} unique courses", courses.len());

        let mut summary = RunSummary {
            courses_discovered: courses.len(),
            ..RunSummary::default()
        };

        let mut first = true;
        for course in &courses {
            if self.excluded.contains(&course.id) {
                tracing::info!("Skipping excluded course {} ({})", course.name, course.id);
                summary.courses_skipped += 1;
                continue;
            }
            if !course.is_active() {
                tracing::info!(
                    "Skipping inactive course {} ({}, state {})",
                    course.name,
                    course.id,
                    course.course_state
                );
                summary.courses_skipped += 1;
                continue;
            }

            if !first {
                self.pacing.between_courses().await;
            }
            first = false;

            tracing::info!("Checking course {} ({})", course.name, course.id);
            let report = self.process_course(course).await;
            summary.courses_processed += 1;
            summary.sent += report.sent;
            summary.failed += report.failed;
        }

        tracing::info!(
            "Run complete: {} courses processed, {} skipped, {} sent, {} failed",
            summary.courses_processed,
            summary.courses_skipped,
            summary.sent,
            summary.failed
        );
        Ok(summary)
    }

    /// Enumerate courses under both roles, deduplicated by id
    ///
    /// A failure listing one role degrades that role to an empty list so
    /// the other role still gets processed.
    async fn discover_courses(&self) -> Vec<Course> {
        let mut courses = match self.source.list_courses(CourseRole::Teacher).await {
            Ok(courses) => courses,
            Err(e) => {
                tracing::warn!("Failed to list teacher courses: {}", e);
                Vec::new()
            }
        };

        let mut seen: HashSet<String> = courses.iter().map(|c| c.id.clone()).collect();

        match self.source.list_courses(CourseRole::Student).await {
            Ok(student_courses) => {
                for course in student_courses {
                    if seen.insert(course.id.clone()) {
                        courses.push(course);
                    }
                }
            }
            Err(e) => tracing::warn!("Failed to list student courses: {}", e),
        }

        courses
    }

    /// Run both feeds of one course and deliver the merged sequence
    async fn process_course(&self, course: &Course) -> DeliveryReport {
        let mut pending: Vec<NotificationRecord> = Vec::new();

        for kind in FeedKind::ALL {
            match self.process_feed(course, kind).await {
                Ok(mut records) => pending.append(&mut records),
                Err(e) => {
                    tracing::error!(
                        "Failed to process {} feed for course {} ({}): {}",
                        kind,
                        course.name,
                        course.id,
                        e
                    );
                }
            }
        }

        let ordered = chronological(pending);
        if ordered.is_empty() {
            return DeliveryReport::default();
        }

        if self.dry_run {
            tracing::info!(
                "Dry run: would send {} notifications for course {}",
                ordered.len(),
                course.id
            );
            return DeliveryReport::default();
        }

        deliver_all(&self.sink, &ordered, &self.pacing).await
    }

    /// Fetch one feed, detect new items, render them, and advance the
    /// watermark
    ///
    /// The watermark advances as soon as detection completes, before any
    /// delivery happens. A send failure later will not be retried on the
    /// next run; the design prefers a dropped notification over duplicates.
    async fn process_feed(&self, course: &Course, kind: FeedKind) -> Result<Vec<NotificationRecord>> {
        let watermark = self.store.read(&course.id, kind)?;

        let (records, detection_watermark, page_len) = match kind {
            FeedKind::Announcement => {
                let page = self.source.list_announcements(&course.id).await?;
                let page_len = page.len();
                let detection = detect_new(page, watermark);
                let mut records = Vec::with_capacity(detection.new_items.len());
                for announcement in &detection.new_items {
                    let author = match &announcement.creator_user_id {
                        Some(user_id) => self.source.author_name(user_id).await,
                        None => UNKNOWN_AUTHOR.to_string(),
                    };
                    records.push(render_announcement(course, announcement, &author));
                }
                (records, detection.candidate_watermark, page_len)
            }
            FeedKind::CourseWork => {
                let page = self.source.list_course_work(&course.id).await?;
                let page_len = page.len();
                let detection = detect_new(page, watermark);
                let records = detection
                    .new_items
                    .iter()
                    .map(|work| render_course_work(course, work))
                    .collect();
                (records, detection.candidate_watermark, page_len)
            }
        };

        if watermark.is_some() && page_len > 0 && records.len() == page_len {
            tracing::debug!(
                "Entire {} page for course {} is new; older items beyond the page may have been missed",
                kind,
                course.id
            );
        }

        if let Some(candidate) = detection_watermark {
            if self.dry_run {
                tracing::debug!(
                    "Dry run: not advancing {} watermark for course {} to {}",
                    kind,
                    course.id,
                    candidate.to_rfc3339()
                );
            } else {
                self.store.write(&course.id, kind, candidate)?;
                tracing::debug!(
                    "Advanced {} watermark for course {} to {}",
                    kind,
                    course.id,
                    candidate.to_rfc3339()
                );
            }
        }

        Ok(records)
    }
}
