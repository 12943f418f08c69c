// src/types.rs
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.hackertarget.com/hostsearch/";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub max_subdomains: usize,
    pub collect_delay: Duration,
    pub progress_steps: u64,
    pub progress_delay: Duration,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("PhantomEye/{}", env!("CARGO_PKG_VERSION")),
            max_subdomains: 20,
            collect_delay: Duration::from_secs(1),
            progress_steps: 8,
            progress_delay: Duration::from_millis(800),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Everything the PDF renderer needs for one invocation.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub domain: String,
    pub generated_at: DateTime<Local>,
    pub subdomains: Vec<String>,
    pub emails: Vec<String>,
}

/// Why a subdomain lookup did not produce data.
///
/// The collector never surfaces these to the user; they are logged and
/// replaced by the fallback list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    HttpError(u16),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum PhantomEyeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("PDF error: {0}")]
    PdfError(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),
}
