use crate::{Generation, ParsedResume, UploadFile};

pub(crate) const NO_FILE_MESSAGE: &str = "Please choose a resume file first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Done,
    Failed,
}

/// Lifecycle of a single resume upload.
///
/// Invariants: `parsed` is `None` whenever the status is `Failed`, and
/// `progress_percent` never decreases within one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSession {
    generation: Generation,
    file: Option<UploadFile>,
    progress_percent: u8,
    status: UploadStatus,
    parsed: Option<ParsedResume>,
    error: Option<String>,
}

impl UploadSession {
    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn parsed(&self) -> Option<&ParsedResume> {
        self.parsed.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Replaces the selected file. Ignored while an upload is in flight.
    pub(crate) fn select(&mut self, file: UploadFile) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.file = Some(file);
        self.error = None;
        true
    }

    /// Starts a new attempt and returns the request to issue, or `None` when the
    /// submission is rejected (already uploading, or nothing selected).
    pub(crate) fn begin(&mut self) -> Option<(Generation, UploadFile)> {
        if self.is_uploading() {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return None;
        };
        self.generation += 1;
        self.status = UploadStatus::Uploading;
        self.progress_percent = 0;
        self.parsed = None;
        self.error = None;
        Some((self.generation, file))
    }

    pub(crate) fn apply_progress(&mut self, generation: Generation, percent: u8) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        let percent = percent.min(100);
        if percent <= self.progress_percent {
            return false;
        }
        self.progress_percent = percent;
        true
    }

    pub(crate) fn apply_success(&mut self, generation: Generation, parsed: ParsedResume) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        self.status = UploadStatus::Done;
        self.progress_percent = 100;
        self.parsed = Some(parsed);
        true
    }

    pub(crate) fn apply_failure(&mut self, generation: Generation, reason: &str) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        self.status = UploadStatus::Failed;
        self.parsed = None;
        self.error = Some(format!("Upload failed ({reason}). Check backend logs."));
        true
    }

    /// Clears everything back to the initial empty state. An in-flight request
    /// is not aborted; bumping the generation makes its completion a no-op.
    pub(crate) fn reset(&mut self) -> bool {
        let generation = if self.is_uploading() {
            self.generation + 1
        } else {
            self.generation
        };
        let cleared = Self {
            generation,
            ..Self::default()
        };
        if *self == cleared {
            return false;
        }
        *self = cleared;
        true
    }

    fn accepts(&self, generation: Generation) -> bool {
        self.is_uploading() && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected() -> UploadSession {
        let mut session = UploadSession::default();
        session.select(UploadFile::new("cv.docx", b"resume".to_vec()));
        session
    }

    #[test]
    fn begin_without_file_reports_validation_error() {
        let mut session = UploadSession::default();
        assert!(session.begin().is_none());
        assert_eq!(session.error(), Some(NO_FILE_MESSAGE));
        assert_eq!(session.status(), UploadStatus::Idle);
    }

    #[test]
    fn progress_ignores_regressions_and_clamps() {
        let mut session = selected();
        let (generation, _) = session.begin().unwrap();
        assert!(session.apply_progress(generation, 40));
        assert!(!session.apply_progress(generation, 20));
        assert_eq!(session.progress_percent(), 40);
        assert!(session.apply_progress(generation, 250));
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn failure_never_keeps_parsed_result() {
        let mut session = selected();
        let (generation, _) = session.begin().unwrap();
        assert!(session.apply_failure(generation, "timeout"));
        assert_eq!(session.status(), UploadStatus::Failed);
        assert!(session.parsed().is_none());
        assert!(session.error().unwrap().contains("timeout"));
    }

    #[test]
    fn reset_while_idle_keeps_generation() {
        let mut session = selected();
        let before = session.generation();
        assert!(session.reset());
        assert_eq!(session.generation(), before);
        assert!(!session.reset());
    }
}
