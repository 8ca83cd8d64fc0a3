//! Blocking HTTP GET behind a small trait so the fetch loop can run
//! against an in-memory transport in tests.
//!
//! The production transport uses the curl crate (libcurl easy handle).

use std::time::Duration;

use crate::config::FetchConfig;

const MAX_REDIRECTS: u32 = 10;

/// Why a single GET produced no body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    /// Curl reported an error (timeout, DNS, connection reset, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// One GET per call; returns the full response body.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Parse `url` and require http or https.
pub fn validate_url(url: &str) -> Result<url::Url, FetchError> {
    let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

/// libcurl-backed transport. Follows redirects; runs in the calling thread.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlTransport {
    pub fn new(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = validate_url(url)?;
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(parsed.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.useragent(concat!("fqa/", env!("CARGO_PKG_VERSION")))?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        tracing::debug!(url, status = code, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
