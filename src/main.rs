use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use anyhow::{Context, bail};
use golf_course_list::args;
use golf_course_list::controller::courses::HttpCourseSource;
use golf_course_list::controller::courses::http_handlers::{AppState, courses, health, index};
use golf_course_list::controller::courses::once::{once_succeeded, render_once};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = args::args_checks();

    let source = HttpCourseSource::with_timeout(args.request_timeout, args.status_policy)
        .context("building http client")?;
    let state = AppState {
        config: args.render.clone(),
        source: Arc::new(source),
    };

    if args.once {
        let (outcome, html) = render_once(&state).await;
        println!("{html}");
        if !once_succeeded(outcome) {
            bail!("could not load courses from {}", state.config.endpoint_url);
        }
        return Ok(());
    }

    info!(
        bind = %args.bind,
        endpoint = %state.config.endpoint_url,
        "serving course list page"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .route("/", web::get().to(index))
            .route("/courses", web::get().to(courses))
            .route("/health", web::get().to(health))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
