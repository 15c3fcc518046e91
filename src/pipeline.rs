use std::fmt;

use uuid::Uuid;

use crate::errors::PipelineError;
use crate::stages;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Summarize,
    Notify,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Summarize => "summarize",
            Stage::Notify => "notify",
        }
    }

    pub fn failure_tag(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch_failed",
            Stage::Summarize => "summarize_failed",
            Stage::Notify => "email_failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Received,
    Fetching,
    Summarizing,
    Notifying,
    Done,
    Failed(Stage),
}

impl PipelineState {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Fetching => Some(Stage::Fetch),
            PipelineState::Summarizing => Some(Stage::Summarize),
            PipelineState::Notifying => Some(Stage::Notify),
            _ => None,
        }
    }

    pub fn advance(self) -> Self {
        match self {
            PipelineState::Received => PipelineState::Fetching,
            PipelineState::Fetching => PipelineState::Summarizing,
            PipelineState::Summarizing => PipelineState::Notifying,
            PipelineState::Notifying => PipelineState::Done,
            terminal => terminal,
        }
    }

    pub fn fail(self) -> Self {
        match self.stage() {
            Some(stage) => PipelineState::Failed(stage),
            None => self,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Received => "received",
            PipelineState::Fetching => "fetching",
            PipelineState::Summarizing => "summarizing",
            PipelineState::Notifying => "notifying",
            PipelineState::Done => "done",
            PipelineState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub id: Uuid,
    pub state: PipelineState,
    pub history: Vec<PipelineState>,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: PipelineState::Received,
            history: vec![PipelineState::Received],
        }
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::info!(
            run_id = %self.id,
            from = self.state.as_str(),
            to = next.as_str(),
            "pipeline transition"
        );
        self.state = next;
        self.history.push(next);
    }

    pub fn failed_stage(&self) -> Option<Stage> {
        match self.state {
            PipelineState::Failed(stage) => Some(stage),
            _ => None,
        }
    }
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::new()
    }
}

// Runs share files under data_dir and are not serialized against each other.
pub async fn run_pipeline(state: &AppState) -> PipelineRun {
    let mut run = PipelineRun::new();
    run.transition(run.state.advance());

    while let Some(stage) = run.state.stage() {
        match run_stage(state, stage).await {
            Ok(()) => run.transition(run.state.advance()),
            Err(e) => {
                tracing::error!(run_id = %run.id, stage = %stage, error = %e, "pipeline stage failed");
                run.transition(run.state.fail());
            }
        }
    }

    run
}

async fn run_stage(state: &AppState, stage: Stage) -> Result<(), PipelineError> {
    match stage {
        Stage::Fetch => {
            stages::fetch_call_logs(state).await?;
        }
        Stage::Summarize => {
            stages::summarize_call_logs(state).await?;
        }
        Stage::Notify => {
            stages::send_latest_summary(state).await?;
        }
    }
    Ok(())
}
