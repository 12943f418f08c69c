// src/sources/hackertarget.rs
use crate::session::Session;
use crate::sources::Source;
use crate::types::{CollectError, DEFAULT_ENDPOINT};
use async_trait::async_trait;
use regex::Regex;
use url::Url;

/// HackerTarget host search API
#[derive(Debug, Clone)]
pub struct HackerTargetSource {
    name: String,
    endpoint: String,
}

impl Default for HackerTargetSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl HackerTargetSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            name: "hackertarget".to_string(),
            endpoint: endpoint.into(),
        }
    }

    fn query_url(&self, domain: &str) -> Result<Url, CollectError> {
        Url::parse_with_params(&self.endpoint, &[("q", domain)])
            .map_err(|e| CollectError::Network(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }
}

/// Parses a `hostname,ip` per line response into the hostnames that contain `domain`.
pub fn parse_hostsearch(body: &str, domain: &str) -> Result<Vec<String>, CollectError> {
    let first = body.lines().map(str::trim).find(|line| !line.is_empty());
    if let Some(first) = first {
        // The API answers 200 with a plain message when it rejects the query
        if first.starts_with("error") || first.starts_with("API count exceeded") {
            return Err(CollectError::ParseError(format!("API message: {}", first)));
        }
    }

    let hostname = Regex::new(r"^[a-z0-9_*](?:[a-z0-9_.*-]*[a-z0-9])?$")
        .map_err(|e| CollectError::ParseError(format!("Regex error: {}", e)))?;

    let domain = domain.trim().to_lowercase();
    let mut results = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Any record that is not `host[,ip]` means the body is not a host list at all
        let host = line.split(',').next().unwrap_or_default().trim().to_lowercase();
        if !hostname.is_match(&host) {
            return Err(CollectError::ParseError(format!("Unexpected record: {}", line)));
        }
        if host.contains(&domain) {
            results.push(host);
        }
    }

    Ok(results)
}

#[async_trait]
impl Source for HackerTargetSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn enumerate(&self, domain: &str, session: &Session) -> Result<Vec<String>, CollectError> {
        let url = self.query_url(domain)?;
        let body = session.get_text(url.as_str()).await?;
        parse_hostsearch(&body, domain)
    }
}
