use std::time::Duration;

use url::Url;

/// Environment variable selecting the backend base URL.
pub const API_URL_ENV: &str = "RESUME_RANKER_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const UPLOAD_CHUNK_SIZE: usize = 16 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid backend url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("unsupported url scheme {0:?}; expected http or https")]
    UnsupportedScheme(String),
}

/// Read-only transport configuration, built once and handed to the transport.
#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub upload_chunk_size: usize,
}

impl TransportSettings {
    pub fn new(base_url: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            upload_chunk_size: UPLOAD_CHUNK_SIZE,
        })
    }

    /// Uses `RESUME_RANKER_API_URL` when set and non-empty, else the localhost default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let from_env = std::env::var(API_URL_ENV).ok();
        Self::new(resolve_base_url(from_env.as_deref()))
    }
}

fn resolve_base_url(from_env: Option<&str>) -> &str {
    from_env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

// A trailing slash keeps any path prefix when endpoint paths are joined on.
fn normalize_base_url(raw: &str) -> Result<Url, SettingsError> {
    let mut url = Url::parse(raw.trim()).map_err(|err| SettingsError::InvalidUrl {
        url: raw.to_string(),
        message: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SettingsError::UnsupportedScheme(url.scheme().to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
