use crate::{
    AppState, JobFormStatus, ParsedResume, RankingFailure, RankingRow, RankingStatus,
    SkillFrequency, UploadStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: &str) -> Self {
        Self {
            level,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub upload: UploadView,
    pub ranking: RankingView,
    pub job_form: JobFormView,
    pub analytics: AnalyticsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadView {
    pub status: UploadStatus,
    pub file_name: Option<String>,
    pub progress_percent: u8,
    pub parsed: Option<ParsedResume>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingView {
    pub job_id_input: String,
    pub status: RankingStatus,
    pub loading: bool,
    pub rows: Vec<RankingRowView>,
    /// Set when `rows` belong to an earlier job than the one last requested.
    pub rows_from_job: Option<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingRowView {
    /// 1-based rank in backend order.
    pub position: usize,
    pub ranking_id: u64,
    pub candidate_name: String,
    pub resume_id: u64,
    pub candidate_id: Option<u64>,
    pub score: f64,
    pub score_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFormView {
    pub title: String,
    pub description: String,
    pub skills_input: String,
    pub status: JobFormStatus,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyticsView {
    pub loaded: bool,
    pub skills: Vec<SkillFrequency>,
}

/// Scores are shown with three decimals.
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        Self {
            upload: upload_view(state),
            ranking: ranking_view(state),
            job_form: job_form_view(state),
            analytics: AnalyticsView {
                loaded: state.analytics().is_loaded(),
                skills: state.analytics().skills().to_vec(),
            },
        }
    }
}

fn upload_view(state: &AppState) -> UploadView {
    let upload = state.upload();
    let notice = match (upload.error(), upload.status()) {
        (Some(error), _) => Some(Notice::new(NoticeLevel::Error, error)),
        (None, UploadStatus::Done) => Some(Notice::new(
            NoticeLevel::Success,
            "Resume uploaded and parsed.",
        )),
        _ => None,
    };
    UploadView {
        status: upload.status(),
        file_name: upload.file().map(|file| file.name.clone()),
        progress_percent: upload.progress_percent(),
        parsed: upload.parsed().cloned(),
        notice,
    }
}

fn ranking_view(state: &AppState) -> RankingView {
    let ranking = state.ranking();
    let (rows, rows_from_job) = match (ranking.status(), ranking.previous()) {
        (RankingStatus::Done, _) => (ranking.rankings(), None),
        (_, Some(previous)) => (previous.rows.as_slice(), Some(previous.job_id.clone())),
        _ => (&[][..], None),
    };

    let notice = if let Some(message) = ranking.validation_error() {
        Some(Notice::new(NoticeLevel::Warning, message))
    } else if let Some(message) = ranking.error() {
        let level = match ranking.failure() {
            Some(RankingFailure::NoRankings) => NoticeLevel::Warning,
            _ => NoticeLevel::Error,
        };
        Some(Notice::new(level, message))
    } else {
        ranking
            .notice()
            .map(|message| Notice::new(NoticeLevel::Success, message))
    };

    RankingView {
        job_id_input: ranking.job_id_input().to_string(),
        status: ranking.status(),
        loading: ranking.is_in_flight(),
        rows: rows.iter().enumerate().map(row_view).collect(),
        rows_from_job,
        notice,
    }
}

fn row_view((index, row): (usize, &RankingRow)) -> RankingRowView {
    RankingRowView {
        position: index + 1,
        ranking_id: row.ranking_id,
        candidate_name: row.candidate_name.clone(),
        resume_id: row.resume_id,
        candidate_id: row.candidate_id,
        score: row.score,
        score_text: format_score(row.score),
    }
}

fn job_form_view(state: &AppState) -> JobFormView {
    let form = state.job_form();
    let notice = match (form.error(), form.status(), form.created_job_id()) {
        (Some(error), _, _) => Some(Notice::new(NoticeLevel::Error, error)),
        (None, JobFormStatus::Created, Some(job_id)) => Some(Notice::new(
            NoticeLevel::Success,
            &format!("Job created successfully (ID: {job_id})"),
        )),
        _ => None,
    };
    JobFormView {
        title: form.title().to_string(),
        description: form.description().to_string(),
        skills_input: form.skills_input().to_string(),
        status: form.status(),
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_uses_three_decimals() {
        assert_eq!(format_score(0.912), "0.912");
        assert_eq!(format_score(0.5), "0.500");
        assert_eq!(format_score(0.12345), "0.123");
    }
}
