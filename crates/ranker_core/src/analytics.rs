use crate::SkillFrequency;

/// Top-skills chart data. Fetched once per dashboard lifetime; failures
/// degrade to an empty chart instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analytics {
    requested: bool,
    loaded: bool,
    skills: Vec<SkillFrequency>,
}

impl Analytics {
    pub fn skills(&self) -> &[SkillFrequency] {
        &self.skills
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_pending(&self) -> bool {
        self.requested && !self.loaded
    }

    /// Returns true on the first mount only.
    pub(crate) fn mount(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    pub(crate) fn apply_loaded(&mut self, skills: Vec<SkillFrequency>) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.skills = skills;
        self.loaded = true;
        true
    }

    pub(crate) fn apply_failed(&mut self) -> bool {
        self.apply_loaded(Vec::new())
    }
}
