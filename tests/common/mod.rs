#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, HttpServer};
use async_trait::async_trait;
use golf_course_list::controller::courses::{CourseSource, DiagnosticSink};
use golf_course_list::error::FetchError;
use golf_course_list::model::CourseCollection;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const COURSES_PATH: &str = "/api/golfcourses";

#[derive(Clone)]
struct OriginReply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

async fn serve_courses(reply: Data<OriginReply>) -> HttpResponse {
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    HttpResponse::build(reply.status)
        .content_type("application/json")
        .body(reply.body.clone())
}

/// Stand-in for the golf course api, listening on an ephemeral port.
pub async fn spawn_origin(status: u16, body: &str) -> Result<String, Box<dyn std::error::Error>> {
    spawn_origin_with_delay(status, body, None).await
}

pub async fn spawn_origin_with_delay(
    status: u16,
    body: &str,
    delay: Option<Duration>,
) -> Result<String, Box<dyn std::error::Error>> {
    let reply = OriginReply {
        status: StatusCode::from_u16(status)?,
        body: body.to_string(),
        delay,
    };
    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(reply.clone()))
            .route(COURSES_PATH, web::get().to(serve_courses))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;
    let port = server.addrs()[0].port();
    tokio::spawn(server.run());
    Ok(format!("http://127.0.0.1:{port}{COURSES_PATH}"))
}

/// An address nothing listens on.
pub fn unreachable_endpoint() -> Result<String, Box<dyn std::error::Error>> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}{COURSES_PATH}"))
}

#[derive(Default)]
pub struct CountingDiagnostics {
    reports: Mutex<Vec<String>>,
}

impl CountingDiagnostics {
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CountingDiagnostics {
    fn report(&self, err: &FetchError) {
        self.reports.lock().unwrap().push(err.to_string());
    }
}

/// Replays canned json bodies, or fails, without touching the network.
pub struct CannedSource {
    body: Option<String>,
    pub calls: AtomicUsize,
}

impl CannedSource {
    pub fn json(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            body: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CourseSource for CannedSource {
    async fn fetch_courses(&self, _endpoint_url: &str) -> Result<CourseCollection, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => CourseCollection::from_json_slice(body.as_bytes()),
            None => Err(FetchError::Transport("connection refused".to_string())),
        }
    }
}

/// Client for the local fake origin; ignores any proxy set in the environment.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("building local reqwest client")
}
