//! HTTP transport used by the fetch workers.
//!
//! Workers only need "GET this URL and give me the body", so the network sits behind
//! the `QuoteTransport` trait. `HttpTransport` is the blocking `reqwest` client used
//! by the binary; tests plug in in-memory implementations.
use log::debug;
use reqwest::blocking::Client;

pub use reqwest::Url;

use crate::error::MqError;
use crate::result::Result;

/// Fetches a URL and returns the response body as text.
pub trait QuoteTransport: Send + Sync {
    /// Performs one GET request. Non-success statuses are errors.
    fn get(&self, url: &Url) -> Result<String>;
}

/// Blocking `reqwest` transport shared by all worker threads.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the client's default settings.
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HttpTransport { client })
    }
}

impl QuoteTransport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        debug!("GET {} -> {}", url.path(), status);

        if !status.is_success() {
            return Err(MqError::HttpStatus {
                status: status.as_u16(),
                url: format!("{}{}", url.origin().ascii_serialization(), url.path()),
            });
        }
        Ok(response.text()?)
    }
}
