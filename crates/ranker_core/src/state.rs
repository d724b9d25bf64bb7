use crate::view_model::AppViewModel;
use crate::{Analytics, JobForm, RankingRequest, UploadSession};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    upload: UploadSession,
    ranking: RankingRequest,
    job_form: JobForm,
    analytics: Analytics,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload(&self) -> &UploadSession {
        &self.upload
    }

    pub fn ranking(&self) -> &RankingRequest {
        &self.ranking
    }

    pub fn job_form(&self) -> &JobForm {
        &self.job_form
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// True while any workflow still waits for a completion message.
    pub fn is_busy(&self) -> bool {
        self.upload.is_uploading()
            || self.ranking.is_in_flight()
            || self.job_form.is_submitting()
            || self.analytics.is_pending()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn upload_mut(&mut self) -> &mut UploadSession {
        &mut self.upload
    }

    pub(crate) fn ranking_mut(&mut self) -> &mut RankingRequest {
        &mut self.ranking
    }

    pub(crate) fn job_form_mut(&mut self) -> &mut JobForm {
        &mut self.job_form
    }

    pub(crate) fn analytics_mut(&mut self) -> &mut Analytics {
        &mut self.analytics
    }

    pub(crate) fn mark_dirty_if(&mut self, changed: bool) {
        self.dirty |= changed;
    }
}
