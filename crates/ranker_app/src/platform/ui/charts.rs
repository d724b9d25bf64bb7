use ranker_core::SkillFrequency;

use super::constants::{CHART_BAR_CHAR, CHART_BAR_WIDTH, CHART_LABEL_MAX};

/// Horizontal bar chart, bars scaled to the largest count. Backend order is
/// kept.
pub fn bar_chart(skills: &[SkillFrequency]) -> Vec<String> {
    let max = skills.iter().map(|skill| skill.count).max().unwrap_or(0);
    let label_width = skills
        .iter()
        .map(|skill| skill.skill_name.chars().count().min(CHART_LABEL_MAX))
        .max()
        .unwrap_or(0);

    skills
        .iter()
        .map(|skill| {
            let label: String = skill.skill_name.chars().take(CHART_LABEL_MAX).collect();
            let bar: String =
                std::iter::repeat_n(CHART_BAR_CHAR, bar_len(skill.count, max)).collect();
            format!(
                "{label:<label_width$} | {bar} {count}",
                count = skill.count
            )
        })
        .collect()
}

fn bar_len(count: u64, max: u64) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = count.saturating_mul(CHART_BAR_WIDTH as u64) / max;
    (scaled as usize).max(1)
}
