//! Text views. Each function turns part of the view model into lines for
//! stdout; nothing here touches state.

use ranker_core::{
    AppViewModel, JobFormView, Notice, NoticeLevel, ParsedResume, RankingRowView, RankingView,
    UploadStatus, UploadView,
};

use super::charts;
use super::constants::{MISSING_FIELD, NAME_COLUMN_MAX, PROGRESS_BAR_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Table,
    Cards,
}

pub fn dashboard(view: &AppViewModel, style: RowStyle) -> Vec<String> {
    let mut lines = vec!["Resume Ranking Dashboard".to_string(), String::new()];
    lines.push("Top Matched Skills".to_string());
    if view.analytics.skills.is_empty() {
        lines.push("No skills data available yet.".to_string());
    } else {
        lines.extend(charts::bar_chart(&view.analytics.skills));
    }
    if !view.ranking.job_id_input.trim().is_empty() {
        lines.push(String::new());
        lines.extend(rankings(&view.ranking, style));
    }
    lines
}

pub fn upload_resume(view: &UploadView) -> Vec<String> {
    let mut lines = vec!["Upload Resume".to_string()];
    if let Some(name) = &view.file_name {
        lines.push(format!("File: {name}"));
    }
    if view.status != UploadStatus::Idle {
        lines.push(progress_line(view.progress_percent));
    }
    lines.extend(view.notice.as_ref().map(notice_line));
    lines.push(String::new());
    lines.push("Parsed Resume Data".to_string());
    match &view.parsed {
        Some(parsed) => lines.extend(parsed_fields(parsed)),
        None => lines.push("No parsed data yet.".to_string()),
    }
    lines
}

pub fn progress_line(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "Uploading: [{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn parsed_fields(parsed: &ParsedResume) -> Vec<String> {
    let skills = if parsed.skills.is_empty() {
        MISSING_FIELD.to_string()
    } else {
        parsed.skills.join(", ")
    };
    vec![
        format!("Name:   {}", or_missing(parsed.name.as_deref())),
        format!("Email:  {}", or_missing(parsed.email.as_deref())),
        format!("Phone:  {}", or_missing(parsed.phone.as_deref())),
        format!("Skills: {skills}"),
        format!(
            "Resume ID: {}",
            or_missing(parsed.resume_id.map(|id| id.to_string()).as_deref())
        ),
    ]
}

pub fn upload_job(view: &JobFormView) -> Vec<String> {
    let mut lines = vec![
        "Create New Job".to_string(),
        format!("Title:       {}", view.title),
        format!("Description: {}", view.description),
        format!("Skills:      {}", view.skills_input),
    ];
    lines.extend(view.notice.as_ref().map(notice_line));
    lines
}

pub fn rankings(view: &RankingView, style: RowStyle) -> Vec<String> {
    let mut lines = vec![format!("Rankings for Job ID {}", view.job_id_input.trim())];
    lines.extend(view.notice.as_ref().map(notice_line));
    if let Some(job_id) = &view.rows_from_job {
        lines.push(format!("Showing earlier rankings for Job ID {job_id}"));
    }
    if view.rows.is_empty() {
        lines.push("No rankings to show.".to_string());
        return lines;
    }
    match style {
        RowStyle::Table => lines.extend(ranking_table(&view.rows)),
        RowStyle::Cards => {
            for row in &view.rows {
                lines.extend(candidate_card(row));
            }
        }
    }
    lines
}

fn ranking_table(rows: &[RankingRowView]) -> Vec<String> {
    let name_width = rows
        .iter()
        .map(|row| row.candidate_name.chars().count().min(NAME_COLUMN_MAX))
        .max()
        .unwrap_or(0)
        .max("Candidate Name".len());

    let mut lines = vec![format!(
        "{:>3}  {:<name_width$}  {:>9}  {:>7}",
        "#", "Candidate Name", "Resume ID", "Score"
    )];
    lines.extend(rows.iter().map(|row| {
        let name: String = row.candidate_name.chars().take(NAME_COLUMN_MAX).collect();
        format!(
            "{:>3}  {:<name_width$}  {:>9}  {:>7}",
            row.position, name, row.resume_id, row.score_text
        )
    }));
    lines
}

pub fn candidate_card(row: &RankingRowView) -> Vec<String> {
    let mut ids = format!("Resume ID: {}", row.resume_id);
    if let Some(candidate_id) = row.candidate_id {
        ids.push_str(&format!(" | Candidate ID: {candidate_id}"));
    }
    vec![
        format!("#{} {}", row.position, row.candidate_name),
        format!("   {ids}"),
        format!("   Score: {}", row.score_text),
    ]
}

fn notice_line(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.text)
}

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => MISSING_FIELD,
    }
}
