/// Widest bar in the top-skills chart, in characters.
pub const CHART_BAR_WIDTH: usize = 40;
/// Skill labels longer than this are cut.
pub const CHART_LABEL_MAX: usize = 24;
pub const CHART_BAR_CHAR: char = '#';

pub const PROGRESS_BAR_WIDTH: usize = 20;

/// Candidate names longer than this are cut in the rankings table.
pub const NAME_COLUMN_MAX: usize = 32;

/// Placeholder for parsed fields the backend did not extract.
pub const MISSING_FIELD: &str = "—";
