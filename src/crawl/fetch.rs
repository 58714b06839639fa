// src/crawl/fetch.rs
// =============================================================================
// This module defines the fetch transport: how the crawl gets file content
// off the network.
//
// The pipeline doesn't talk to reqwest directly - it talks to the Fetcher
// trait. That keeps the crawl logic testable: production wires in the
// reqwest-backed HttpFetcher below, tests wire in a HashMap-backed fake
// and never touch the network.
//
// Error policy (important!): the crawl treats a transport error (timeout,
// connection refused) and an unsuccessful HTTP status (404, 500) exactly
// the same. Both come back as Err, neither is retried.
//
// Rust concepts:
// - async-trait: Traits can't have async methods natively (yet), the
//   #[async_trait] macro rewrites them into returning boxed futures
// - dyn Trait + Arc: The pipeline holds "some fetcher" without knowing
//   which concrete type it is
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The capability the crawl needs from the outside world: give me the
// content at this URL, or tell me you couldn't.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// Production fetcher backed by reqwest
//
// One instance (and one connection pool) is shared by every fetch in the
// crawl - reqwest's Client is designed to be cloned and reused.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // 10 second timeout per request; a hung download shouldn't stall
        // the whole mirror forever
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} for {}", response.status(), url));
        }

        let content = response.text().await?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }
}
