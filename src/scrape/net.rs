//! Blocking HTTP GET for the scraper.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

/// Anything that can hand back the HTML of a URL.
/// The live implementation is `Fetcher`; tests plug in fixture pages.
pub trait PageSource {
    fn fetch(&self, url: &str) -> AppResult<String>;
}

pub struct Fetcher {
    agent: Agent,
    user_agent: String,
}

impl Fetcher {
    pub fn new(cfg: &Config) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(cfg.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl PageSource for Fetcher {
    fn fetch(&self, url: &str) -> AppResult<String> {
        debug!(url, "GET");

        let response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| AppError::http(url, e))?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| AppError::http(url, e))
    }
}
