use maud::{PreEscaped, html};

use super::http_handlers::{AppState, render_region};
use super::renderer::RenderOutcome;

/// Render the region once, wrapped in its element, for printing.
pub async fn render_once(state: &AppState) -> (RenderOutcome, String) {
    let (outcome, inner) = render_region(state).await;
    let markup = html! {
        div id=(state.config.target_element_id) { (PreEscaped(inner)) }
    };
    (outcome, markup.into_string())
}

/// Whether a one-shot run should exit cleanly.
#[must_use]
pub fn once_succeeded(outcome: RenderOutcome) -> bool {
    !matches!(outcome, RenderOutcome::Error | RenderOutcome::MissingRegion)
}
