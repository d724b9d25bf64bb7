use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use ranker_core::{Generation, JobDraft, UploadFile};
use ranker_logging::{ranker_debug, ranker_info};

use crate::{EngineEvent, ProgressSink, RankerApi, Transport};

/// One backend request for the engine to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    UploadResume {
        generation: Generation,
        file: UploadFile,
    },
    CreateJob {
        generation: Generation,
        draft: JobDraft,
    },
    TriggerRanking {
        generation: Generation,
        job_id: String,
    },
    FetchRankings {
        generation: Generation,
        job_id: String,
    },
    FetchTopSkills,
}

/// Runs requests on a background tokio runtime and reports completions as
/// `EngineEvent`s. Requests run concurrently; completion order is whatever the
/// network produces.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(transport: Arc<dyn Transport>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let api = RankerApi::new(transport);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("ranker-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(&api, command, event_tx).await;
                    });
                }
                ranker_debug!("engine command channel closed; shutting down runtime");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn execute(&self, command: EngineCommand) {
        ranker_debug!("engine command {:?}", command);
        let _ = self.cmd_tx.send(command);
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

struct ChannelProgressSink {
    generation: Generation,
    tx: mpsc::Sender<EngineEvent>,
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, percent: u8) {
        let _ = self.tx.send(EngineEvent::UploadProgress {
            generation: self.generation,
            percent,
        });
    }
}

async fn handle_command(
    api: &RankerApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::UploadResume { generation, file } => {
            ranker_info!("uploading {} ({} bytes)", file.name, file.len());
            let sink = Arc::new(ChannelProgressSink {
                generation,
                tx: event_tx.clone(),
            });
            let result = api.upload_resume(file, sink).await;
            EngineEvent::UploadCompleted { generation, result }
        }
        EngineCommand::CreateJob { generation, draft } => {
            ranker_info!("creating job {:?}", draft.title);
            let result = api.create_job(&draft).await;
            EngineEvent::JobCreated { generation, result }
        }
        EngineCommand::TriggerRanking { generation, job_id } => {
            ranker_info!("triggering ranking for job {}", job_id);
            let result = api.trigger_ranking(&job_id).await;
            EngineEvent::RankingTriggered {
                generation,
                job_id,
                result,
            }
        }
        EngineCommand::FetchRankings { generation, job_id } => {
            let result = api.fetch_rankings(&job_id).await;
            EngineEvent::RankingsFetched {
                generation,
                job_id,
                result,
            }
        }
        EngineCommand::FetchTopSkills => EngineEvent::TopSkillsFetched {
            result: api.fetch_top_skills().await,
        },
    };
    let _ = event_tx.send(event);
}
