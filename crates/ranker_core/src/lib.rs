//! Resume ranker core: pure state machine and view-model helpers.
mod analytics;
mod effect;
mod job_form;
mod msg;
mod ranking;
mod state;
mod types;
mod update;
mod upload;
mod view_model;

pub use analytics::Analytics;
pub use effect::Effect;
pub use job_form::{JobForm, JobFormStatus};
pub use msg::Msg;
pub use ranking::{RankingFailure, RankingRequest, RankingSnapshot, RankingStatus};
pub use state::AppState;
pub use types::{
    parse_skill_list, Generation, JobDraft, ParsedResume, RankingRow, SkillFrequency, UploadFile,
};
pub use update::update;
pub use upload::{UploadSession, UploadStatus};
pub use view_model::{
    format_score, AnalyticsView, AppViewModel, JobFormView, Notice, NoticeLevel, RankingRowView,
    RankingView, UploadView,
};
