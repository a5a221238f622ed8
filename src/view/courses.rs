use maud::{Markup, html};

use crate::error::FetchError;
use crate::model::CourseCollection;

pub const EMPTY_NOTICE: &str = "No courses available.";
pub const ERROR_NOTICE: &str = "Error loading courses.";
pub const CURRENCY_LABEL: &str = "Bath";

#[must_use]
pub fn render_course_items(courses: &CourseCollection) -> Markup {
    html! {
        ul {
            @for course in courses {
                li {
                    strong { (course.coursename) }
                    br;
                    "Price: " (course.price) " " (CURRENCY_LABEL)
                    br;
                    "Total Holes: " (course.totalhole)
                    br;
                }
            }
        }
    }
}

#[must_use]
pub fn render_empty_notice() -> Markup {
    html! {
        p { (EMPTY_NOTICE) }
    }
}

#[must_use]
pub fn render_error_notice() -> Markup {
    html! {
        p { (ERROR_NOTICE) }
    }
}

/// Markup for whatever the fetch produced: the list, the empty notice, or
/// the error notice. Never a mix of them.
#[must_use]
pub fn render_outcome(result: &Result<CourseCollection, FetchError>) -> Markup {
    match result {
        Ok(courses) if courses.is_empty() => render_empty_notice(),
        Ok(courses) => render_course_items(courses),
        Err(_) => render_error_notice(),
    }
}
