use crate::{Generation, JobDraft, UploadFile};

/// Requests the shell must perform on behalf of the state machine. Completions
/// come back as `Msg`s carrying the same generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    UploadResume {
        generation: Generation,
        file: UploadFile,
    },
    CreateJob {
        generation: Generation,
        draft: JobDraft,
    },
    TriggerRanking {
        generation: Generation,
        job_id: String,
    },
    FetchRankings {
        generation: Generation,
        job_id: String,
    },
    FetchTopSkills,
}
