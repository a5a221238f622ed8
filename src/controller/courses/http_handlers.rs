use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use std::sync::Arc;

use super::client::CourseSource;
use super::renderer::{CourseListRenderer, RenderConfig, RenderOutcome};
use crate::view::document::PageDocument;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};

/// Shared across workers; each request still gets its own document.
#[derive(Clone)]
pub struct AppState {
    pub config: RenderConfig,
    pub source: Arc<dyn CourseSource>,
}

pub async fn index(state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(DEFAULT_INDEX_TITLE, &state.config.target_element_id);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// One render into a fresh region; the region's content is the response.
pub async fn courses(state: Data<AppState>) -> impl Responder {
    let (outcome, html) = render_region(&state).await;
    match outcome {
        RenderOutcome::MissingRegion | RenderOutcome::Superseded => {
            HttpResponse::InternalServerError().finish()
        }
        _ => HttpResponse::Ok().content_type("text/html").body(html),
    }
}

/// Render the course region once and hand back its content. A failed fetch
/// still yields content: the error notice.
pub async fn render_region(state: &AppState) -> (RenderOutcome, String) {
    let target = state.config.target_element_id.as_str();
    let document = Arc::new(PageDocument::with_element(target));
    let renderer = CourseListRenderer::new(state.source.clone(), document.clone());
    let outcome = renderer.render_course_list(&state.config).await;
    (outcome, document.inner_html(target).unwrap_or_default())
}
