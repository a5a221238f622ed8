pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod courses;
}
pub mod view {
    pub mod courses;
    pub mod document;
    pub mod index;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use controller::courses::{CourseListRenderer, RenderConfig, RenderOutcome};
pub use model::{Course, CourseCollection};
