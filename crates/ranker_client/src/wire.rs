//! JSON shapes returned by the ranking backend.

use ranker_core::{ParsedResume, RankingRow, SkillFrequency};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

const UNKNOWN_CANDIDATE: &str = "Unknown";

/// Upload response. The backend nests the extraction under `parsed`; older
/// deployments return the fields at the top level.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(default)]
    resume_id: Option<u64>,
    #[serde(default)]
    candidate_id: Option<u64>,
    #[serde(default)]
    parsed: Option<ParsedFields>,
    #[serde(flatten)]
    top_level: ParsedFields,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ParsedFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    skills: Option<Vec<SkillEntry>>,
}

/// Skills arrive either as plain names or as `[name, confidence]` pairs. The
/// confidence is not shown anywhere and is skipped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SkillEntry {
    Name(String),
    Scored(String, IgnoredAny),
}

impl SkillEntry {
    fn into_name(self) -> String {
        match self {
            SkillEntry::Name(name) | SkillEntry::Scored(name, _) => name,
        }
    }
}

impl From<UploadResponse> for ParsedResume {
    fn from(response: UploadResponse) -> Self {
        let fields = response.parsed.unwrap_or(response.top_level);
        ParsedResume {
            resume_id: response.resume_id,
            candidate_id: response.candidate_id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            skills: fields
                .skills
                .unwrap_or_default()
                .into_iter()
                .map(SkillEntry::into_name)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateJobRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub skills: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateJobResponse {
    pub job_id: JobIdValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JobIdValue {
    Number(u64),
    Text(String),
}

impl From<JobIdValue> for String {
    fn from(value: JobIdValue) -> Self {
        match value {
            JobIdValue::Number(id) => id.to_string(),
            JobIdValue::Text(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankTriggerResponse {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankingRowRecord {
    ranking_id: u64,
    #[serde(default)]
    candidate_name: Option<String>,
    resume_id: u64,
    #[serde(default)]
    candidate_id: Option<u64>,
    score: f64,
}

impl From<RankingRowRecord> for RankingRow {
    fn from(record: RankingRowRecord) -> Self {
        RankingRow {
            ranking_id: record.ranking_id,
            candidate_name: record
                .candidate_name
                .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string()),
            resume_id: record.resume_id,
            candidate_id: record.candidate_id,
            score: record.score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopSkillRecord {
    #[serde(alias = "name")]
    skill_name: String,
    #[serde(alias = "count", default)]
    matches: u64,
}

impl From<TopSkillRecord> for SkillFrequency {
    fn from(record: TopSkillRecord) -> Self {
        SkillFrequency {
            skill_name: record.skill_name,
            count: record.matches,
        }
    }
}
