use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "resume-ranker",
    version,
    about = "Upload resumes, post jobs and rank candidates against a resume-ranking backend"
)]
pub struct Cli {
    /// Backend base URL; overrides RESUME_RANKER_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Upload a resume (.pdf, .doc, .docx) and show the parsed fields.
    Upload { path: PathBuf },
    /// Create a job posting.
    CreateJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma separated list of required skills.
        #[arg(long, default_value = "")]
        skills: String,
    },
    /// Rank candidates for a job and list the results.
    Rank {
        job_id: String,
        /// Show candidate cards instead of a table.
        #[arg(long)]
        cards: bool,
    },
    /// Show the top-skills chart and, optionally, rankings for a job.
    Dashboard {
        #[arg(long)]
        job_id: Option<String>,
        #[arg(long)]
        cards: bool,
    },
}
