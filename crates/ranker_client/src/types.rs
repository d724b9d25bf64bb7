use std::fmt;

use ranker_core::{Generation, ParsedResume, RankingRow, SkillFrequency};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UploadProgress {
        generation: Generation,
        percent: u8,
    },
    UploadCompleted {
        generation: Generation,
        result: Result<ParsedResume, TransportError>,
    },
    JobCreated {
        generation: Generation,
        result: Result<String, TransportError>,
    },
    RankingTriggered {
        generation: Generation,
        job_id: String,
        result: Result<String, TransportError>,
    },
    RankingsFetched {
        generation: Generation,
        job_id: String,
        result: Result<Vec<RankingRow>, TransportError>,
    },
    TopSkillsFetched {
        result: Result<Vec<SkillFrequency>, TransportError>,
    },
}

/// Uniform failure of any backend call. `message` carries the diagnostic
/// detail (server text, reqwest error); `kind` is safe to show to users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Short user-facing reason, e.g. `http status 404`.
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
