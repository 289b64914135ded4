//! HTTP record source for the podcast preview API.

use crate::domain::error::{PodshelfError, Result};
use crate::domain::Record;
use crate::source::backend::RecordSource;
use crate::source::json::decode_records;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;

/// Default endpoint of the podcast preview API.
pub const DEFAULT_SOURCE_URL: &str = "https://podcast-api.netlify.app";

/// Blocking HTTP source.
///
/// Each fetch is a fresh GET; nothing is cached between refreshes.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Builds a source for `url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Http`] if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        tracing::debug!(url = %self.url, "fetching records");

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, concat!("podshelf/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %self.url, "record request rejected");
            return Err(PodshelfError::Supply(format!(
                "server responded with status {}",
                status.as_u16()
            )));
        }

        let body = response.text()?;
        let records = decode_records(&body)?;
        tracing::debug!(record_count = records.len(), "records fetched");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
