use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::Parser;
use ranker_client::{ReqwestTransport, TransportSettings};
use ranker_core::{
    update, AppState, AppViewModel, JobFormStatus, Msg, RankingStatus, UploadFile, UploadStatus,
};
use ranker_logging::{level_for_verbosity, ranker_debug, ranker_error, ranker_info};

use super::cli::{Cli, Command};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::render::{self, RowStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(75);
/// Extra wait on top of the request timeout before giving up on the engine.
const STALL_GRACE: Duration = Duration::from_secs(5);

pub fn run_app() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(
        LogDestination::from_option(cli.log_file.clone()),
        level_for_verbosity(cli.verbose),
    );

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            ranker_error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = match &cli.api_url {
        Some(url) => TransportSettings::new(url)?,
        None => TransportSettings::from_env()?,
    };
    ranker_info!("using backend {}", settings.base_url);
    let stall_limit = settings.request_timeout + STALL_GRACE;

    let transport = ReqwestTransport::new(settings).context("building HTTP client")?;
    let runner = EffectRunner::new(Arc::new(transport)).context("starting request engine")?;
    let mut session = Session::new(runner);

    for msg in initial_messages(&cli.command)? {
        session.dispatch(msg);
    }
    session.run_until_idle(stall_limit)?;

    let view = session.state.view();
    for line in final_lines(&cli.command, &view) {
        println!("{line}");
    }
    Ok(exit_code(&cli.command, &view))
}

/// The user actions each subcommand stands for.
fn initial_messages(command: &Command) -> anyhow::Result<Vec<Msg>> {
    let messages = match command {
        Command::Upload { path } => vec![
            Msg::ResumeFileSelected(read_resume(path)?),
            Msg::UploadSubmitted,
        ],
        Command::CreateJob {
            title,
            description,
            skills,
        } => vec![
            Msg::JobTitleChanged(title.clone()),
            Msg::JobDescriptionChanged(description.clone()),
            Msg::JobSkillsChanged(skills.clone()),
            Msg::CreateJobClicked,
        ],
        Command::Rank { job_id, .. } => {
            vec![Msg::JobIdChanged(job_id.clone()), Msg::RankClicked]
        }
        Command::Dashboard { job_id, .. } => {
            let mut messages = vec![Msg::DashboardMounted];
            if let Some(job_id) = job_id {
                messages.push(Msg::JobIdChanged(job_id.clone()));
                messages.push(Msg::RankClicked);
            }
            messages
        }
    };
    Ok(messages)
}

fn read_resume(path: &Path) -> anyhow::Result<UploadFile> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} is not a file", path.display()))?;
    Ok(UploadFile::new(name, bytes))
}

fn final_lines(command: &Command, view: &AppViewModel) -> Vec<String> {
    match command {
        Command::Upload { .. } => render::upload_resume(&view.upload),
        Command::CreateJob { .. } => render::upload_job(&view.job_form),
        Command::Rank { cards, .. } => render::rankings(&view.ranking, row_style(*cards)),
        Command::Dashboard { cards, .. } => render::dashboard(view, row_style(*cards)),
    }
}

fn row_style(cards: bool) -> RowStyle {
    if cards {
        RowStyle::Cards
    } else {
        RowStyle::Table
    }
}

fn exit_code(command: &Command, view: &AppViewModel) -> ExitCode {
    let failed = match command {
        Command::Upload { .. } => view.upload.status != UploadStatus::Done,
        Command::CreateJob { .. } => view.job_form.status != JobFormStatus::Created,
        Command::Rank { .. } => view.ranking.status != RankingStatus::Done,
        Command::Dashboard { job_id, .. } => {
            job_id.is_some() && view.ranking.status != RankingStatus::Done
        }
    };
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    last_progress: Option<u8>,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            last_progress: None,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        ranker_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if dirty {
            self.render_progress();
        }
    }

    /// Pumps completions until no workflow is waiting any more.
    fn run_until_idle(&mut self, stall_limit: Duration) -> anyhow::Result<()> {
        let mut last_event = Instant::now();
        while self.state.is_busy() {
            match self.runner.next_msg(TICK_INTERVAL) {
                Some(msg) => {
                    last_event = Instant::now();
                    self.dispatch(msg);
                }
                None if last_event.elapsed() > stall_limit => {
                    bail!("no answer from the request engine after {:?}", stall_limit);
                }
                None => self.dispatch(Msg::Tick),
            }
        }
        Ok(())
    }

    /// Upload progress is the only thing shown while requests run.
    fn render_progress(&mut self) {
        let upload = self.state.upload();
        if upload.status() != UploadStatus::Uploading {
            return;
        }
        let percent = upload.progress_percent();
        if self.last_progress != Some(percent) {
            self.last_progress = Some(percent);
            eprintln!("{}", render::progress_line(percent));
        }
    }
}
