pub mod client;
pub mod http_handlers;
pub mod once;
pub mod renderer;

pub use client::{CourseSource, HttpCourseSource, StatusPolicy};
pub use renderer::{
    CourseListRenderer, DiagnosticSink, OverlapPolicy, RenderConfig, RenderOutcome,
    TracingDiagnostics,
};
