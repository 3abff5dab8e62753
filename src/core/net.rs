// src/core/net.rs
// Page fetching. Everything above this layer only sees response bodies.

use reqwest::blocking::Client;

use crate::config::options::FetchConfig;
use crate::error::{Error, Result};

/// Source of portal pages. Paths are site-relative (`/courses/...`).
pub trait Fetch: Send + Sync {
    fn get(&self, path: &str) -> Result<String>;
    fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<String>;
}

/// Blocking HTTP(S) fetcher. No cookie store: requests are anonymous.
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn body(url: String, resp: reqwest::blocking::Response) -> Result<String> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url });
        }
        Ok(resp.text()?)
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, path: &str) -> Result<String> {
        let url = self.config.url(path);
        logd!("GET {url}");
        let resp = self.client.get(&url).send()?;
        Self::body(url, resp)
    }

    fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<String> {
        let url = self.config.url(path);
        logd!("POST {url} ({} fields)", form.len());
        let resp = self.client.post(&url).form(form).send()?;
        Self::body(url, resp)
    }
}
