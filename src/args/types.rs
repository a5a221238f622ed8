use clap::Parser;
use std::time::Duration;

use crate::controller::courses::renderer::{DEFAULT_ENDPOINT_URL, DEFAULT_TARGET_ELEMENT_ID};
use crate::controller::courses::{OverlapPolicy, RenderConfig, StatusPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Origin endpoint returning the json array of golf courses.
    #[arg(
        short = 'e',
        long,
        value_name = "URL",
        default_value = DEFAULT_ENDPOINT_URL,
        value_parser = crate::args::validation::check_endpoint_url
    )]
    pub endpoint_url: String,
    /// Id of the element whose content is replaced with the course list.
    #[arg(
        short = 't',
        long,
        value_name = "ELEMENT_ID",
        default_value = DEFAULT_TARGET_ELEMENT_ID,
        value_parser = crate::args::validation::check_element_id
    )]
    pub target_element_id: String,
    /// strict: a non-2xx answer is a failure. lenient: decode the body regardless of status.
    #[arg(long, value_enum, default_value_t = StatusPolicy::Strict)]
    pub status_policy: StatusPolicy,
    /// What to do when renders overlap.
    #[arg(long, value_enum, default_value_t = OverlapPolicy::LatestWins)]
    pub overlap: OverlapPolicy,
    /// No timeout unless given.
    #[arg(long, value_name = "SECONDS")]
    pub request_timeout_secs: Option<u64>,
    #[arg(short = 'b', long, value_name = "ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
    /// Render once to stdout and exit instead of serving the page.
    #[arg(long)]
    pub once: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub render: RenderConfig,
    pub status_policy: StatusPolicy,
    pub request_timeout: Option<Duration>,
    pub bind: String,
    pub once: bool,
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        Self {
            render: RenderConfig {
                endpoint_url: args.endpoint_url,
                target_element_id: args.target_element_id,
                overlap: args.overlap,
            },
            status_policy: args.status_policy,
            request_timeout: args.request_timeout_secs.map(Duration::from_secs),
            bind: args.bind,
            once: args.once,
        }
    }
}
