use ranker_core::{update, AppState, Effect, JobDraft, JobFormStatus, Msg, NoticeLevel};

fn fill_form(state: AppState, title: &str, description: &str, skills: &str) -> AppState {
    let (state, _) = update(state, Msg::JobTitleChanged(title.to_string()));
    let (state, _) = update(state, Msg::JobDescriptionChanged(description.to_string()));
    let (state, _) = update(state, Msg::JobSkillsChanged(skills.to_string()));
    state
}

#[test]
fn create_job_sends_trimmed_draft() {
    let state = fill_form(
        AppState::new(),
        "  Backend Engineer ",
        "Build services",
        "rust, postgres , ,kafka",
    );
    let (mut state, effects) = update(state, Msg::CreateJobClicked);

    assert_eq!(
        effects,
        vec![Effect::CreateJob {
            generation: 1,
            draft: JobDraft {
                title: "Backend Engineer".to_string(),
                description: "Build services".to_string(),
                skills: vec![
                    "rust".to_string(),
                    "postgres".to_string(),
                    "kafka".to_string()
                ],
            },
        }]
    );
    assert_eq!(state.job_form().status(), JobFormStatus::Submitting);
    assert!(state.is_busy());
    assert!(state.consume_dirty());
}

#[test]
fn missing_title_or_description_is_a_validation_error() {
    for (title, description) in [("", "desc"), ("Title", "  "), ("", "")] {
        let state = fill_form(AppState::new(), title, description, "");
        let (state, effects) = update(state, Msg::CreateJobClicked);

        assert!(effects.is_empty());
        assert_eq!(state.job_form().status(), JobFormStatus::Editing);
        let notice = state.view().job_form.notice.expect("validation notice");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Please fill in title and description.");
    }
}

#[test]
fn created_job_reports_id() {
    let state = fill_form(AppState::new(), "Data Analyst", "SQL all day", "");
    let (state, _) = update(state, Msg::CreateJobClicked);
    let (state, _) = update(
        state,
        Msg::JobCreated {
            generation: 1,
            job_id: "12".to_string(),
        },
    );

    let view = state.view().job_form;
    assert_eq!(view.status, JobFormStatus::Created);
    assert_eq!(
        view.notice.map(|n| n.text),
        Some("Job created successfully (ID: 12)".to_string())
    );
    assert!(!state.is_busy());
}

#[test]
fn failed_creation_can_be_retried() {
    let state = fill_form(AppState::new(), "Data Analyst", "SQL all day", "");
    let (state, _) = update(state, Msg::CreateJobClicked);
    let (state, _) = update(
        state,
        Msg::JobCreateFailed {
            generation: 1,
            reason: "http status 422".to_string(),
        },
    );
    assert_eq!(state.job_form().status(), JobFormStatus::Failed);
    assert!(state.job_form().error().unwrap().contains("422"));

    let (state, effects) = update(state, Msg::CreateJobClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.job_form().status(), JobFormStatus::Submitting);
    assert!(state.job_form().error().is_none());

    // Late answer to the first attempt.
    let (state, _) = update(
        state,
        Msg::JobCreated {
            generation: 1,
            job_id: "99".to_string(),
        },
    );
    assert_eq!(state.job_form().status(), JobFormStatus::Submitting);
}
