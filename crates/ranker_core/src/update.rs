use crate::ranking::TriggerOutcome;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Completion messages are matched against the generation the workflow is
/// currently waiting on; anything else is a late answer to a superseded or
/// reset request and leaves the state untouched.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ResumeFileSelected(file) => {
            let changed = state.upload_mut().select(file);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::UploadSubmitted => {
            let had_error = state.upload().error().is_some();
            match state.upload_mut().begin() {
                Some((generation, file)) => {
                    state.mark_dirty_if(true);
                    vec![Effect::UploadResume { generation, file }]
                }
                None => {
                    // A missing file surfaces a validation message; a second
                    // submit while uploading is dropped silently.
                    let has_error = state.upload().error().is_some();
                    state.mark_dirty_if(has_error && !had_error);
                    Vec::new()
                }
            }
        }
        Msg::UploadProgress {
            generation,
            percent,
        } => {
            let changed = state.upload_mut().apply_progress(generation, percent);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::UploadSucceeded { generation, parsed } => {
            let changed = state.upload_mut().apply_success(generation, parsed);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::UploadFailed { generation, reason } => {
            let changed = state.upload_mut().apply_failure(generation, &reason);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::UploadReset => {
            let changed = state.upload_mut().reset();
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::JobIdChanged(raw) => {
            let changed = state.ranking_mut().set_input(raw);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::RankClicked => {
            // Either a new request or a fresh validation message; both re-render.
            state.mark_dirty_if(true);
            match state.ranking_mut().begin() {
                Some((generation, job_id)) => vec![Effect::TriggerRanking { generation, job_id }],
                None => Vec::new(),
            }
        }
        Msg::RankTriggerCompleted { generation, status } => {
            match state.ranking_mut().apply_trigger(generation, &status) {
                TriggerOutcome::Stale => Vec::new(),
                TriggerOutcome::NoRankings => {
                    state.mark_dirty_if(true);
                    Vec::new()
                }
                TriggerOutcome::Fetch { generation, job_id } => {
                    state.mark_dirty_if(true);
                    vec![Effect::FetchRankings { generation, job_id }]
                }
            }
        }
        Msg::RankTriggerFailed { generation, reason } => {
            let changed = state
                .ranking_mut()
                .apply_trigger_failure(generation, &reason);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::RankingsFetched { generation, rows } => {
            let changed = state.ranking_mut().apply_rankings(generation, rows);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::RankingsFetchFailed { generation, reason } => {
            let changed = state.ranking_mut().apply_fetch_failure(generation, &reason);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::JobTitleChanged(title) => {
            let changed = state.job_form_mut().set_title(title);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::JobDescriptionChanged(description) => {
            let changed = state.job_form_mut().set_description(description);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::JobSkillsChanged(skills) => {
            let changed = state.job_form_mut().set_skills(skills);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::CreateJobClicked => {
            let before = state.job_form().clone();
            let effects = match state.job_form_mut().begin() {
                Some((generation, draft)) => vec![Effect::CreateJob { generation, draft }],
                None => Vec::new(),
            };
            let changed = *state.job_form() != before;
            state.mark_dirty_if(changed);
            effects
        }
        Msg::JobCreated { generation, job_id } => {
            let changed = state.job_form_mut().apply_created(generation, job_id);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::JobCreateFailed { generation, reason } => {
            let changed = state.job_form_mut().apply_failure(generation, &reason);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::DashboardMounted => {
            if state.analytics_mut().mount() {
                vec![Effect::FetchTopSkills]
            } else {
                Vec::new()
            }
        }
        Msg::TopSkillsLoaded(skills) => {
            let changed = state.analytics_mut().apply_loaded(skills);
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::TopSkillsFailed => {
            let changed = state.analytics_mut().apply_failed();
            state.mark_dirty_if(changed);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
