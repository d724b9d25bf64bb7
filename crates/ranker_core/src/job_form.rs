use crate::{parse_skill_list, Generation, JobDraft};

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Please fill in title and description.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobFormStatus {
    #[default]
    Editing,
    Submitting,
    Created,
    Failed,
}

/// The "create job posting" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobForm {
    generation: Generation,
    title: String,
    description: String,
    skills_input: String,
    status: JobFormStatus,
    created_job_id: Option<String>,
    error: Option<String>,
}

impl JobForm {
    pub fn status(&self) -> JobFormStatus {
        self.status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn skills_input(&self) -> &str {
        &self.skills_input
    }

    pub fn created_job_id(&self) -> Option<&str> {
        self.created_job_id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == JobFormStatus::Submitting
    }

    pub(crate) fn set_title(&mut self, title: String) -> bool {
        replace_if_changed(&mut self.title, title)
    }

    pub(crate) fn set_description(&mut self, description: String) -> bool {
        replace_if_changed(&mut self.description, description)
    }

    pub(crate) fn set_skills(&mut self, skills: String) -> bool {
        replace_if_changed(&mut self.skills_input, skills)
    }

    pub(crate) fn begin(&mut self) -> Option<(Generation, JobDraft)> {
        if self.is_submitting() {
            return None;
        }
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            return None;
        }
        let draft = JobDraft {
            title: title.to_string(),
            description: description.to_string(),
            skills: parse_skill_list(&self.skills_input),
        };
        self.generation += 1;
        self.status = JobFormStatus::Submitting;
        self.created_job_id = None;
        self.error = None;
        Some((self.generation, draft))
    }

    pub(crate) fn apply_created(&mut self, generation: Generation, job_id: String) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        self.status = JobFormStatus::Created;
        self.created_job_id = Some(job_id);
        true
    }

    pub(crate) fn apply_failure(&mut self, generation: Generation, reason: &str) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        self.status = JobFormStatus::Failed;
        self.error = Some(format!("Job creation failed ({reason}). Check backend logs."));
        true
    }

    fn accepts(&self, generation: Generation) -> bool {
        self.is_submitting() && generation == self.generation
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
