use std::sync::Once;

use ranker_core::{update, AppState, Effect, Msg, ParsedResume, UploadFile, UploadStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ranker_logging::initialize_for_tests);
}

fn resume() -> UploadFile {
    UploadFile::new("jane_doe.docx", b"PK fake docx bytes".to_vec())
}

fn upload(state: AppState, file: UploadFile) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ResumeFileSelected(file));
    update(state, Msg::UploadSubmitted)
}

fn parsed() -> ParsedResume {
    ParsedResume {
        resume_id: Some(11),
        candidate_id: Some(4),
        name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        phone: None,
        skills: vec!["rust".to_string(), "sql".to_string()],
    }
}

#[test]
fn upload_emits_effect_and_starts_at_zero() {
    init_logging();
    let (mut state, effects) = upload(AppState::new(), resume());

    assert_eq!(
        effects,
        vec![Effect::UploadResume {
            generation: 1,
            file: resume(),
        }]
    );
    assert_eq!(state.upload().status(), UploadStatus::Uploading);
    assert_eq!(state.upload().progress_percent(), 0);
    assert!(state.is_busy());
    assert!(state.consume_dirty());
}

#[test]
fn successful_upload_ends_at_full_progress_with_parsed_result() {
    init_logging();
    let (state, _) = upload(AppState::new(), resume());
    let (state, _) = update(
        state,
        Msg::UploadProgress {
            generation: 1,
            percent: 60,
        },
    );
    let (state, _) = update(
        state,
        Msg::UploadSucceeded {
            generation: 1,
            parsed: parsed(),
        },
    );

    let view = state.view().upload;
    assert_eq!(view.status, UploadStatus::Done);
    assert_eq!(view.progress_percent, 100);
    assert_eq!(view.parsed, Some(parsed()));
    assert_eq!(view.file_name.as_deref(), Some("jane_doe.docx"));
    assert!(!state.is_busy());
}

#[test]
fn progress_is_monotonic_within_attempt_and_resets_for_next() {
    init_logging();
    let (state, _) = upload(AppState::new(), resume());
    let mut state = state;
    for percent in [10, 35, 20, 35, 80] {
        let (next, _) = update(
            state,
            Msg::UploadProgress {
                generation: 1,
                percent,
            },
        );
        state = next;
    }
    assert_eq!(state.upload().progress_percent(), 80);

    let (state, _) = update(
        state,
        Msg::UploadFailed {
            generation: 1,
            reason: "network error".to_string(),
        },
    );
    let (state, effects) = update(state, Msg::UploadSubmitted);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.upload().progress_percent(), 0);
    assert_eq!(state.upload().generation(), 2);
}

#[test]
fn failed_upload_clears_parsed_result_and_reports_reason() {
    init_logging();
    let (state, _) = upload(AppState::new(), resume());
    let (state, _) = update(
        state,
        Msg::UploadSucceeded {
            generation: 1,
            parsed: parsed(),
        },
    );
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, _) = update(
        state,
        Msg::UploadFailed {
            generation: 2,
            reason: "http status 400".to_string(),
        },
    );

    let view = state.view().upload;
    assert_eq!(view.status, UploadStatus::Failed);
    assert_eq!(view.parsed, None);
    let notice = view.notice.expect("error notice");
    assert!(notice.text.contains("http status 400"));
}

#[test]
fn second_submit_while_uploading_is_ignored() {
    init_logging();
    let (state, _) = upload(AppState::new(), resume());
    let (state, effects) = update(state, Msg::UploadSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.upload().generation(), 1);

    let (state, _) = update(
        state,
        Msg::ResumeFileSelected(UploadFile::new("other.pdf", b"%PDF".to_vec())),
    );
    assert_eq!(
        state.upload().file().map(|f| f.name.as_str()),
        Some("jane_doe.docx")
    );
}

#[test]
fn submit_without_file_makes_no_request() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::UploadSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.upload().status(), UploadStatus::Idle);
    assert!(state.upload().error().is_some());
    assert!(state.consume_dirty());
}

#[test]
fn reset_mid_upload_discards_late_completion() {
    init_logging();
    let (state, _) = upload(AppState::new(), resume());
    let (state, _) = update(state, Msg::UploadReset);
    assert_eq!(state.upload().status(), UploadStatus::Idle);
    assert!(state.upload().file().is_none());

    let (state, _) = update(
        state,
        Msg::UploadProgress {
            generation: 1,
            percent: 90,
        },
    );
    let (mut state, _) = update(
        state,
        Msg::UploadSucceeded {
            generation: 1,
            parsed: parsed(),
        },
    );

    assert_eq!(state.upload().status(), UploadStatus::Idle);
    assert_eq!(state.upload().progress_percent(), 0);
    assert!(state.upload().parsed().is_none());
    assert!(!state.is_busy());
    state.consume_dirty();
}

#[test]
fn reset_is_idempotent() {
    init_logging();
    let (state, _) = upload(AppState::new(), resume());
    let (state, _) = update(
        state,
        Msg::UploadSucceeded {
            generation: 1,
            parsed: parsed(),
        },
    );

    let (once, _) = update(state, Msg::UploadReset);
    let (twice, effects) = update(once.clone(), Msg::UploadReset);

    assert_eq!(once, twice);
    assert!(effects.is_empty());
    assert_eq!(twice.upload().status(), UploadStatus::Idle);
    assert!(twice.upload().parsed().is_none());
}
