use std::sync::Arc;
use std::time::Duration;

use ranker_client::{EngineCommand, EngineEvent, EngineHandle, Transport};
use ranker_core::{Effect, Msg};
use ranker_logging::{ranker_info, ranker_warn};

/// Turns core effects into engine commands and engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(transport: Arc<dyn Transport>) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(transport)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.engine.execute(command_for(effect));
        }
    }

    /// Waits up to `timeout` for the next completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(msg_for)
    }
}

pub(crate) fn command_for(effect: Effect) -> EngineCommand {
    match effect {
        Effect::UploadResume { generation, file } => {
            EngineCommand::UploadResume { generation, file }
        }
        Effect::CreateJob { generation, draft } => EngineCommand::CreateJob { generation, draft },
        Effect::TriggerRanking { generation, job_id } => {
            EngineCommand::TriggerRanking { generation, job_id }
        }
        Effect::FetchRankings { generation, job_id } => {
            EngineCommand::FetchRankings { generation, job_id }
        }
        Effect::FetchTopSkills => EngineCommand::FetchTopSkills,
    }
}

/// Failure detail goes to the log; the message only carries the short reason.
pub(crate) fn msg_for(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadProgress {
            generation,
            percent,
        } => Msg::UploadProgress {
            generation,
            percent,
        },
        EngineEvent::UploadCompleted { generation, result } => match result {
            Ok(parsed) => {
                ranker_info!("upload {} parsed resume {:?}", generation, parsed.resume_id);
                Msg::UploadSucceeded { generation, parsed }
            }
            Err(err) => {
                ranker_warn!("upload {} failed: {}", generation, err);
                Msg::UploadFailed {
                    generation,
                    reason: err.reason(),
                }
            }
        },
        EngineEvent::JobCreated { generation, result } => match result {
            Ok(job_id) => Msg::JobCreated { generation, job_id },
            Err(err) => {
                ranker_warn!("job creation failed: {}", err);
                Msg::JobCreateFailed {
                    generation,
                    reason: err.reason(),
                }
            }
        },
        EngineEvent::RankingTriggered {
            generation,
            job_id,
            result,
        } => match result {
            Ok(status) => Msg::RankTriggerCompleted { generation, status },
            Err(err) => {
                ranker_warn!("ranking trigger for job {} failed: {}", job_id, err);
                Msg::RankTriggerFailed {
                    generation,
                    reason: err.reason(),
                }
            }
        },
        EngineEvent::RankingsFetched {
            generation,
            job_id,
            result,
        } => match result {
            Ok(rows) => Msg::RankingsFetched { generation, rows },
            Err(err) => {
                ranker_warn!("fetching rankings for job {} failed: {}", job_id, err);
                Msg::RankingsFetchFailed {
                    generation,
                    reason: err.reason(),
                }
            }
        },
        EngineEvent::TopSkillsFetched { result } => match result {
            Ok(skills) => Msg::TopSkillsLoaded(skills),
            Err(err) => {
                ranker_warn!("top skills unavailable: {}", err);
                Msg::TopSkillsFailed
            }
        },
    }
}
