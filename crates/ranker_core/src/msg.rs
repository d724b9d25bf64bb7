use crate::{Generation, ParsedResume, RankingRow, SkillFrequency, UploadFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a resume file.
    ResumeFileSelected(UploadFile),
    /// User submitted the upload form.
    UploadSubmitted,
    /// Transport progress for an upload attempt.
    UploadProgress { generation: Generation, percent: u8 },
    /// Backend accepted the upload and returned its extraction.
    UploadSucceeded {
        generation: Generation,
        parsed: ParsedResume,
    },
    /// Upload request failed; `reason` is a short, user-safe description.
    UploadFailed { generation: Generation, reason: String },
    /// User clicked Reset on the upload form.
    UploadReset,

    /// User edited the job id box.
    JobIdChanged(String),
    /// User clicked "Fetch Rankings".
    RankClicked,
    /// Trigger call returned; `status` is the backend's reported status.
    RankTriggerCompleted { generation: Generation, status: String },
    /// Trigger call failed at the transport level.
    RankTriggerFailed { generation: Generation, reason: String },
    /// Ranking list arrived, in backend order.
    RankingsFetched {
        generation: Generation,
        rows: Vec<RankingRow>,
    },
    /// Ranking list fetch failed.
    RankingsFetchFailed { generation: Generation, reason: String },

    /// Job form edits.
    JobTitleChanged(String),
    JobDescriptionChanged(String),
    JobSkillsChanged(String),
    /// User clicked "Create Job".
    CreateJobClicked,
    JobCreated { generation: Generation, job_id: String },
    JobCreateFailed { generation: Generation, reason: String },

    /// Dashboard became visible.
    DashboardMounted,
    TopSkillsLoaded(Vec<SkillFrequency>),
    TopSkillsFailed,

    /// UI/render tick to coalesce rendering.
    Tick,
}
