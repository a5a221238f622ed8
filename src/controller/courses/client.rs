use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;
use crate::model::CourseCollection;

/// How a non-2xx answer from the origin is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusPolicy {
    /// Any non-2xx status is a failure, whatever the body holds.
    #[default]
    Strict,
    /// Ignore the status and decode the body anyway.
    Lenient,
}

#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn fetch_courses(&self, endpoint_url: &str) -> Result<CourseCollection, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpCourseSource {
    client: Client,
    status_policy: StatusPolicy,
}

impl HttpCourseSource {
    #[must_use]
    pub fn new(client: Client, status_policy: StatusPolicy) -> Self {
        Self {
            client,
            status_policy,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built
    pub fn with_timeout(
        timeout: Option<Duration>,
        status_policy: StatusPolicy,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::new(client, status_policy))
    }
}

#[async_trait]
impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self, endpoint_url: &str) -> Result<CourseCollection, FetchError> {
        let resp = self.client.get(endpoint_url).send().await?;
        let status = resp.status();
        debug!(%status, endpoint_url, "origin responded");

        if !status.is_success() && self.status_policy == StatusPolicy::Strict {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: endpoint_url.to_string(),
            });
        }

        let body = resp.bytes().await?;
        CourseCollection::from_json_slice(&body)
    }
}
