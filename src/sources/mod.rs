// src/sources/mod.rs
use crate::session::Session;
use crate::types::CollectError;
use async_trait::async_trait;

mod hackertarget;

pub use hackertarget::HackerTargetSource;

/// A passive subdomain data source.
#[async_trait]
pub trait Source: Send + Sync {
    fn name(&self) -> &str;

    /// Hostnames reported for `domain`, in the order the source returned them.
    async fn enumerate(&self, domain: &str, session: &Session) -> Result<Vec<String>, CollectError>;
}
