//! Synchronous client for the **GDP dataset** document.
//!
//! The document is a JSON object whose `data` field holds `[date, gdp]` pairs,
//! quarterly, oldest first. Only `data` is read.
//!
//! ### Notes
//! - Network timeouts use a sane default (30s) and can be adjusted by editing the client builder.
//! - One request per fetch. A network error or non-success status fails the fetch; nothing is retried.
//!
//! Typical usage:
//! ```no_run
//! # use gdp_chart::Client;
//! let client = Client::default();
//! let data = client.fetch_dataset()?;
//! println!("{} quarters", data.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::Dataset;
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// freeCodeCamp's copy of the FRED quarterly GDP series.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_url(DEFAULT_DATASET_URL)
    }
}

impl Client {
    /// Client for a dataset served somewhere other than the default URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("gdp_chart/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            url: url.into(),
            http,
        }
    }

    /// One GET; any non-success status is an error. Failures are not retried.
    fn get_text(&self, u: &str) -> Result<String> {
        let resp = self.http.get(u).send().context("send request")?;
        let status = resp.status();
        if !status.is_success() {
            bail!("request failed with HTTP {status}");
        }
        resp.text().context("read body")
    }

    /// Fetch and decode the dataset.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - Body is not `{ "data": [[string, number], ...] }`
    pub fn fetch_dataset(&self) -> Result<Dataset> {
        log::info!("fetching dataset from {}", self.url);
        let body = self
            .get_text(&self.url)
            .with_context(|| format!("GET {}", self.url))?;
        let data = Dataset::from_json_str(&body).context("parse dataset")?;
        log::info!("fetched {} observations", data.len());
        Ok(data)
    }
}
