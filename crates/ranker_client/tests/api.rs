use std::sync::Arc;

use pretty_assertions::assert_eq;
use ranker_client::{FailureKind, NullProgressSink, RankerApi, ReqwestTransport, TransportSettings};
use ranker_core::{JobDraft, ParsedResume, RankingRow, SkillFrequency, UploadFile};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> RankerApi {
    let settings = TransportSettings::new(&server.uri()).unwrap();
    RankerApi::new(Arc::new(ReqwestTransport::new(settings).unwrap()))
}

async fn upload_with_response(body: serde_json::Value) -> ParsedResume {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/resumes/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    api_for(&server)
        .upload_resume(
            UploadFile::new("cv.docx", b"docx".to_vec()),
            Arc::new(NullProgressSink),
        )
        .await
        .expect("upload ok")
}

#[tokio::test]
async fn upload_reads_nested_parsed_section_with_scored_skills() {
    let parsed = upload_with_response(json!({
        "resume_id": 21,
        "candidate_id": 5,
        "parsed": {
            "name": "Ann Lee",
            "email": "ann@example.com",
            "phone": null,
            "skills": [["python", 0.91], ["sql", 0.77]]
        }
    }))
    .await;

    assert_eq!(
        parsed,
        ParsedResume {
            resume_id: Some(21),
            candidate_id: Some(5),
            name: Some("Ann Lee".to_string()),
            email: Some("ann@example.com".to_string()),
            phone: None,
            skills: vec!["python".to_string(), "sql".to_string()],
        }
    );
}

#[tokio::test]
async fn upload_accepts_flat_partial_extraction() {
    let parsed = upload_with_response(json!({
        "email": "bo@example.com",
        "skills": ["rust"]
    }))
    .await;

    assert_eq!(parsed.name, None);
    assert_eq!(parsed.email.as_deref(), Some("bo@example.com"));
    assert_eq!(parsed.skills, vec!["rust".to_string()]);
    assert_eq!(parsed.resume_id, None);
}

#[tokio::test]
async fn upload_with_nothing_extracted_is_still_success() {
    let parsed = upload_with_response(json!({})).await;
    assert_eq!(parsed, ParsedResume::default());
}

#[tokio::test]
async fn create_job_posts_draft_and_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .and(body_json(json!({
            "title": "Backend Engineer",
            "description": "Services",
            "skills": ["rust", "sql"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"job_id": 14, "title": "Backend Engineer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let draft = JobDraft {
        title: "Backend Engineer".to_string(),
        description: "Services".to_string(),
        skills: vec!["rust".to_string(), "sql".to_string()],
    };
    let job_id = api_for(&server).create_job(&draft).await.unwrap();
    assert_eq!(job_id, "14");
}

#[tokio::test]
async fn trigger_returns_backend_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs/1/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "done", "ranked": 3})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/jobs/2/rank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ranked": 0})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert_eq!(api.trigger_ranking("1").await.unwrap(), "done");
    assert_eq!(api.trigger_ranking("2").await.unwrap(), "");
}

#[tokio::test]
async fn rankings_keep_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/1/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ranking_id": 7, "candidate_name": "Ann", "resume_id": 3, "candidate_id": 2, "score": 0.912},
            {"ranking_id": 4, "candidate_name": null, "resume_id": 9, "score": 0.95}
        ])))
        .mount(&server)
        .await;

    let rows = api_for(&server).fetch_rankings("1").await.unwrap();
    assert_eq!(
        rows,
        vec![
            RankingRow {
                ranking_id: 7,
                candidate_name: "Ann".to_string(),
                resume_id: 3,
                candidate_id: Some(2),
                score: 0.912,
            },
            RankingRow {
                ranking_id: 4,
                candidate_name: "Unknown".to_string(),
                resume_id: 9,
                candidate_id: None,
                score: 0.95,
            },
        ]
    );
}

#[tokio::test]
async fn job_id_is_encoded_as_single_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/a%2Fb/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = api_for(&server).fetch_rankings("a/b").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn top_skills_accept_matches_or_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/top-skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"skill_id": 1, "skill_name": "python", "matches": 12},
            {"skill_name": "sql", "count": 5}
        ])))
        .mount(&server)
        .await;

    let skills = api_for(&server).fetch_top_skills().await.unwrap();
    assert_eq!(
        skills,
        vec![
            SkillFrequency {
                skill_name: "python".to_string(),
                count: 12,
            },
            SkillFrequency {
                skill_name: "sql".to_string(),
                count: 5,
            },
        ]
    );
}

#[tokio::test]
async fn unexpected_shape_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/1/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_rankings("1").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}
