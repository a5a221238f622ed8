use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, warn};

use crate::controller::courses::client::CourseSource;
use crate::error::{DocumentError, FetchError};
use crate::view::courses::render_outcome;
use crate::view::document::Document;

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000/api/golfcourses";
pub const DEFAULT_TARGET_ELEMENT_ID: &str = "courses-list";

/// What happens when a second render starts before the first one lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OverlapPolicy {
    /// Only the most recently started invocation may write; older responses
    /// are dropped on arrival.
    #[default]
    LatestWins,
    /// Every invocation writes when its response arrives.
    LastWriteWins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub endpoint_url: String,
    pub target_element_id: String,
    pub overlap: OverlapPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            target_element_id: DEFAULT_TARGET_ELEMENT_ID.to_string(),
            overlap: OverlapPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The list was written with this many items.
    List(usize),
    Empty,
    Error,
    /// A newer invocation owns the region; nothing was written.
    Superseded,
    /// The target element is not in the document.
    MissingRegion,
}

/// Receives the failure behind an error notice.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, err: &FetchError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, err: &FetchError) {
        error!("Error fetching data: {err}");
    }
}

pub struct CourseListRenderer {
    source: Arc<dyn CourseSource>,
    document: Arc<dyn Document>,
    diagnostics: Arc<dyn DiagnosticSink>,
    latest_ticket: AtomicU64,
    write_lock: Mutex<()>,
}

impl CourseListRenderer {
    #[must_use]
    pub fn new(source: Arc<dyn CourseSource>, document: Arc<dyn Document>) -> Self {
        Self::with_diagnostics(source, document, Arc::new(TracingDiagnostics))
    }

    #[must_use]
    pub fn with_diagnostics(
        source: Arc<dyn CourseSource>,
        document: Arc<dyn Document>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            source,
            document,
            diagnostics,
            latest_ticket: AtomicU64::new(0),
            write_lock: Mutex::new(()),
        }
    }

    /// Fetch the course list and replace the target region with the list,
    /// the empty notice, or the error notice. Failures end here; the caller
    /// only learns which outcome was reached.
    pub async fn render_course_list(&self, config: &RenderConfig) -> RenderOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.source.fetch_courses(&config.endpoint_url).await;

        // staleness check and write happen under one lock
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        if config.overlap == OverlapPolicy::LatestWins
            && self.latest_ticket.load(Ordering::SeqCst) != ticket
        {
            // the render is dropped, the failure behind it is not
            if let Err(err) = &result {
                self.diagnostics.report(err);
            }
            debug!(ticket, "discarding response from superseded render");
            return RenderOutcome::Superseded;
        }

        let outcome = match &result {
            Ok(courses) if courses.is_empty() => {
                debug!(endpoint = %config.endpoint_url, "origin returned no courses");
                RenderOutcome::Empty
            }
            Ok(courses) => RenderOutcome::List(courses.len()),
            Err(err) => {
                self.diagnostics.report(err);
                RenderOutcome::Error
            }
        };

        let markup = render_outcome(&result);
        match self
            .document
            .replace_inner_html(&config.target_element_id, markup.into_string())
        {
            Ok(()) => outcome,
            Err(DocumentError::MissingElement(id)) => {
                warn!(element_id = %id, "display region missing, nothing rendered");
                RenderOutcome::MissingRegion
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, CourseCollection};
    use crate::view::document::PageDocument;
    use async_trait::async_trait;

    struct Fixed(Vec<Course>);

    #[async_trait]
    impl CourseSource for Fixed {
        async fn fetch_courses(&self, _url: &str) -> Result<CourseCollection, FetchError> {
            Ok(CourseCollection::new(self.0.clone()))
        }
    }

    #[tokio::test]
    async fn list_outcome_reports_item_count() {
        let doc = Arc::new(PageDocument::with_element(DEFAULT_TARGET_ELEMENT_ID));
        let source = Fixed(vec![
            Course::new("Green Valley", 500, 18),
            Course::new("Lakeside", 300, 9),
        ]);
        let renderer = CourseListRenderer::new(Arc::new(source), doc.clone());

        let outcome = renderer.render_course_list(&RenderConfig::default()).await;
        assert_eq!(outcome, RenderOutcome::List(2));
        assert_eq!(doc.write_count(DEFAULT_TARGET_ELEMENT_ID), 1);
    }

    #[tokio::test]
    async fn missing_region_is_reported_not_panicked() {
        let doc = Arc::new(PageDocument::new());
        let renderer = CourseListRenderer::new(Arc::new(Fixed(vec![])), doc.clone());

        let outcome = renderer.render_course_list(&RenderConfig::default()).await;
        assert_eq!(outcome, RenderOutcome::MissingRegion);
    }
}
