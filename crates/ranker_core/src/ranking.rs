use crate::{Generation, RankingRow};

pub(crate) const TRIGGER_DONE: &str = "done";
pub(crate) const MISSING_JOB_ID_MESSAGE: &str = "Please enter a Job ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingStatus {
    #[default]
    Idle,
    Requesting,
    Fetching,
    Done,
    Failed,
}

/// Why the last request ended in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingFailure {
    /// The trigger call succeeded but the backend produced nothing.
    NoRankings,
    /// Network failure, timeout, or non-2xx status.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TriggerOutcome {
    Stale,
    Fetch { generation: Generation, job_id: String },
    NoRankings,
}

/// The last successfully fetched ranking list and the job it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingSnapshot {
    pub job_id: String,
    pub rows: Vec<RankingRow>,
}

/// "Rank candidates for job X": trigger, then fetch.
///
/// `rankings` is non-empty only in `Done`. A previous result survives a new
/// request until that request reaches `Fetching`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingRequest {
    generation: Generation,
    job_id_input: String,
    job_id: Option<String>,
    status: RankingStatus,
    rankings: Vec<RankingRow>,
    previous: Option<RankingSnapshot>,
    failure: Option<RankingFailure>,
    error: Option<String>,
    validation_error: Option<String>,
    notice: Option<String>,
}

impl RankingRequest {
    pub fn status(&self) -> RankingStatus {
        self.status
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn job_id_input(&self) -> &str {
        &self.job_id_input
    }

    /// Job id of the most recent accepted submission.
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn rankings(&self) -> &[RankingRow] {
        &self.rankings
    }

    pub fn previous(&self) -> Option<&RankingSnapshot> {
        self.previous.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn failure(&self) -> Option<RankingFailure> {
        self.failure
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(
            self.status,
            RankingStatus::Requesting | RankingStatus::Fetching
        )
    }

    pub(crate) fn set_input(&mut self, raw: String) -> bool {
        if self.job_id_input == raw {
            return false;
        }
        self.job_id_input = raw;
        true
    }

    /// Accepts the current input as a new request, superseding any in-flight one.
    /// Returns `None` without touching the workflow when the job id is blank.
    pub(crate) fn begin(&mut self) -> Option<(Generation, String)> {
        let job_id = self.job_id_input.trim().to_string();
        if job_id.is_empty() {
            self.validation_error = Some(MISSING_JOB_ID_MESSAGE.to_string());
            return None;
        }

        if self.status == RankingStatus::Done {
            if let Some(done_job) = self.job_id.take() {
                self.previous = Some(RankingSnapshot {
                    job_id: done_job,
                    rows: std::mem::take(&mut self.rankings),
                });
            }
        }
        self.rankings.clear();
        self.generation += 1;
        self.status = RankingStatus::Requesting;
        self.job_id = Some(job_id.clone());
        self.failure = None;
        self.error = None;
        self.validation_error = None;
        self.notice = None;
        Some((self.generation, job_id))
    }

    /// Inspects the trigger response; only `done` moves on to the fetch.
    pub(crate) fn apply_trigger(&mut self, generation: Generation, status: &str) -> TriggerOutcome {
        if !self.accepts(generation, RankingStatus::Requesting) {
            return TriggerOutcome::Stale;
        }
        let job_id = self.job_id.clone().unwrap_or_default();
        if status == TRIGGER_DONE {
            self.status = RankingStatus::Fetching;
            self.previous = None;
            TriggerOutcome::Fetch {
                generation: self.generation,
                job_id,
            }
        } else {
            self.status = RankingStatus::Failed;
            self.failure = Some(RankingFailure::NoRankings);
            self.error = Some(format!(
                "No rankings generated for Job ID {job_id} (backend status: {status})"
            ));
            TriggerOutcome::NoRankings
        }
    }

    pub(crate) fn apply_trigger_failure(&mut self, generation: Generation, reason: &str) -> bool {
        if !self.accepts(generation, RankingStatus::Requesting) {
            return false;
        }
        self.status = RankingStatus::Failed;
        self.failure = Some(RankingFailure::Transport);
        self.error = Some(transport_message(reason));
        true
    }

    pub(crate) fn apply_rankings(&mut self, generation: Generation, rows: Vec<RankingRow>) -> bool {
        if !self.accepts(generation, RankingStatus::Fetching) {
            return false;
        }
        let job_id = self.job_id.as_deref().unwrap_or_default();
        self.notice = Some(format!("Rankings generated for Job ID {job_id}"));
        self.status = RankingStatus::Done;
        self.rankings = rows;
        true
    }

    pub(crate) fn apply_fetch_failure(&mut self, generation: Generation, reason: &str) -> bool {
        if !self.accepts(generation, RankingStatus::Fetching) {
            return false;
        }
        self.status = RankingStatus::Failed;
        self.rankings.clear();
        self.previous = None;
        self.failure = Some(RankingFailure::Transport);
        self.error = Some(transport_message(reason));
        true
    }

    fn accepts(&self, generation: Generation, expected: RankingStatus) -> bool {
        generation == self.generation && self.status == expected
    }
}

fn transport_message(reason: &str) -> String {
    format!("Failed to fetch rankings ({reason}). Check backend logs.")
}
