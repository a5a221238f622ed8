use maud::{Markup, html};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Golf Courses";

/// Host page. The course region starts empty and pulls its content once,
/// when the page loads.
#[must_use]
pub fn render_index_template(title: &str, target_element_id: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            script src=(HTMX_PATH) defer crossorigin="anonymous" {}
        }
        body {
            h1 { (title) }
            div id=(target_element_id) hx-get="courses" hx-trigger="load" hx-swap="innerHTML" {}
        }
    }
}
