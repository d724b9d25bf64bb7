/// Monotonic request tag; a completion whose generation is not the workflow's
/// current one is discarded.
pub type Generation = u64;

/// A named binary blob selected for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Resumes can be megabytes; keep debug output to the metadata.
impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Structured extraction returned by the backend after a resume upload.
/// Every field is independently optional; the parser may find only some of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedResume {
    pub resume_id: Option<u64>,
    pub candidate_id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
}

/// One candidate's entry in a ranking list. Identity is `ranking_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub ranking_id: u64,
    pub candidate_name: String,
    pub resume_id: u64,
    pub candidate_id: Option<u64>,
    pub score: f64,
}

/// One bar of the top-skills chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFrequency {
    pub skill_name: String,
    pub count: u64,
}

/// A validated job posting ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Splits a comma separated skill list, trimming entries and dropping empty ones.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_list_drops_blank_entries() {
        assert_eq!(
            parse_skill_list(" rust, ,sql ,, python "),
            vec!["rust", "sql", "python"]
        );
        assert!(parse_skill_list("  ").is_empty());
    }

    #[test]
    fn upload_file_debug_omits_bytes() {
        let file = UploadFile::new("cv.pdf", vec![1u8; 4096]);
        let rendered = format!("{file:?}");
        assert!(rendered.contains("cv.pdf"));
        assert!(rendered.contains("4096"));
        assert!(!rendered.contains("[1, 1"));
    }
}
