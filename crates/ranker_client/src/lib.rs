//! Resume ranker client: HTTP transport, typed backend API and the background
//! engine that executes requests for the state machine.
mod api;
mod engine;
mod settings;
mod transport;
mod types;
mod wire;

pub use api::{job_path, RankerApi, JOBS_PATH, TOP_SKILLS_PATH, UPLOAD_PATH};
pub use engine::{EngineCommand, EngineHandle};
pub use settings::{SettingsError, TransportSettings, API_URL_ENV, DEFAULT_API_URL};
pub use transport::{content_type_for, NullProgressSink, ProgressSink, ReqwestTransport, Transport};
pub use types::{EngineEvent, FailureKind, TransportError};
