// src/session.rs
use crate::types::{CollectError, Config, PhantomEyeError};
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct Session {
    pub client: Client,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, PhantomEyeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| PhantomEyeError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Session { client })
    }

    /// Single GET, no retries. Returns the body of a 2xx response.
    pub async fn get_text(&self, url: &str) -> Result<String, CollectError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectError::HttpError(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                CollectError::Timeout
            } else {
                CollectError::ParseError(format!("Failed to read body: {}", e))
            }
        })
    }
}

fn classify(e: reqwest::Error) -> CollectError {
    if e.is_timeout() {
        CollectError::Timeout
    } else if let Some(status) = e.status() {
        CollectError::HttpError(status.as_u16())
    } else {
        CollectError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_text_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/hosts")
            .with_status(200)
            .with_body("www.example.com,93.184.216.34")
            .create_async()
            .await;

        let session = Session::new(&Config::default()).unwrap();
        let body = session.get_text(&format!("{}/hosts", server.url())).await.unwrap();

        assert_eq!(body, "www.example.com,93.184.216.34");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_text_classifies_status() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/hosts").with_status(503).create_async().await;

        let session = Session::new(&Config::default()).unwrap();
        let err = session.get_text(&format!("{}/hosts", server.url())).await.unwrap_err();

        assert_eq!(err, CollectError::HttpError(503));
    }

    #[tokio::test]
    async fn test_get_text_classifies_connection_failure() {
        let session = Session::new(&Config::default()).unwrap();
        let err = session.get_text("http://127.0.0.1:1/hosts").await.unwrap_err();

        assert!(matches!(err, CollectError::Network(_)));
    }
}
