use std::sync::Arc;

use bytes::Bytes;
use futures_util::stream;
use ranker_core::UploadFile;
use ranker_logging::{ranker_debug, ranker_trace};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::{FailureKind, TransportError, TransportSettings};

const MULTIPART_FIELD: &str = "file";
const MAX_SERVER_MESSAGE: usize = 200;

/// Receives upload progress as a whole percentage.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, percent: u8);
}

/// Discards progress.
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _percent: u8) {}
}

/// Single point of HTTP access. Implementations never retry.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError>;

    /// Streams `file` as multipart form data. `progress` sees non-decreasing
    /// values below 100 while bytes go out, then exactly one 100 once the
    /// server has answered with success.
    async fn post_multipart(
        &self,
        path: &str,
        file: UploadFile,
        progress: Arc<dyn ProgressSink>,
    ) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.settings
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, TransportError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        ranker_trace!("response status {} from {}", status, response.url());

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| status.to_string());
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }
        decode_json(&body)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url_for(path)?;
        ranker_debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        let url = self.url_for(path)?;
        ranker_debug!("POST {}", url);
        let request = self.client.post(url);
        let request = match body {
            Some(body) => request.json(&body),
            None => request,
        };
        self.send(request).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        file: UploadFile,
        progress: Arc<dyn ProgressSink>,
    ) -> Result<Value, TransportError> {
        let url = self.url_for(path)?;
        let UploadFile { name, bytes } = file;
        let total = bytes.len() as u64;
        ranker_debug!("POST {} multipart file={} bytes={}", url, name, total);

        let body = progress_body(
            Bytes::from(bytes),
            self.settings.upload_chunk_size,
            progress.clone(),
        );
        let part = Part::stream_with_length(body, total)
            .file_name(name.clone())
            .mime_str(content_type_for(&name))
            .map_err(map_reqwest_error)?;
        let form = Form::new().part(MULTIPART_FIELD, part);

        let value = self.send(self.client.post(url).multipart(form)).await?;
        progress.emit(100);
        Ok(value)
    }
}

/// Splits the payload into chunks and reports the share handed to the
/// connection so far. Capped at 99 until the server confirms.
fn progress_body(bytes: Bytes, chunk_size: usize, progress: Arc<dyn ProgressSink>) -> Body {
    let total = bytes.len() as u64;
    let chunk_size = chunk_size.max(1);
    let chunks: Vec<Bytes> = (0..bytes.len())
        .step_by(chunk_size)
        .map(|start| bytes.slice(start..(start + chunk_size).min(bytes.len())))
        .collect();

    let mut sent = 0u64;
    let stream = stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len() as u64;
        progress.emit(percent_of(sent, total).min(99));
        Ok::<Bytes, std::io::Error>(chunk)
    }));
    Body::wrap_stream(stream)
}

fn percent_of(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    (sent.min(total) * 100 / total) as u8
}

/// MIME type for the resume formats the backend understands.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

fn decode_json(body: &[u8]) -> Result<Value, TransportError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|err| TransportError::new(FailureKind::InvalidResponse, err.to_string()))
}

/// Pulls the human-readable part out of an error body (`detail` or `message`
/// field, else the raw text).
fn server_message(body: &[u8]) -> Option<String> {
    let message = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail").or_else(|| map.get("message")) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    };
    if message.is_empty() {
        return None;
    }
    Some(message.chars().take(MAX_SERVER_MESSAGE).collect())
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return TransportError::new(FailureKind::InvalidResponse, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
