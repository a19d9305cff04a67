use std::path::{Path, PathBuf};

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::args::PositiveUsize;
use crate::config::ProbeSettings;
use crate::error::{AppResult, OutputError, ValidationError};
use crate::http::{Transport, fetch_once};
use crate::output::OutputRotator;

use super::jitter::JitterWindow;
use super::random::{RandomSource, choose};
use super::record::StatRecord;

/// The part of the settings the loop itself consumes.
#[derive(Debug, Clone)]
pub struct ProbePlan {
    pub urls: Vec<String>,
    pub jitter: JitterWindow,
    pub batch_size: PositiveUsize,
    pub runs: PositiveUsize,
}

impl From<&ProbeSettings> for ProbePlan {
    fn from(settings: &ProbeSettings) -> Self {
        Self {
            urls: settings.urls.clone(),
            jitter: settings.jitter,
            batch_size: settings.batch_size,
            runs: settings.runs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Finished,
}

/// Loop counters. `records_in_batch` stays below the batch size between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerState {
    pub iterations: u64,
    pub records_in_batch: usize,
    pub rotations: usize,
}

/// Aggregate result of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub successes: u64,
    pub failures: u64,
    pub write_failures: u64,
    pub rotations: usize,
    /// Every result file opened during the run, in order.
    pub files: Vec<PathBuf>,
}

/// Drives probe iterations: pick a target, fetch it, persist the record,
/// rotate the output file at batch boundaries and stop after the configured
/// number of rotations.
///
/// Every record is also echoed to `echo`; failures there are ignored.
pub struct Scheduler<'transport, T, R, W>
where
    T: Transport + ?Sized,
    R: RandomSource,
    W: AsyncWrite + Unpin,
{
    plan: ProbePlan,
    transport: &'transport T,
    random: R,
    rotator: OutputRotator,
    echo: W,
    state: SchedulerState,
    summary: RunSummary,
    finished: bool,
}

impl<'transport, T, R, W> Scheduler<'transport, T, R, W>
where
    T: Transport + ?Sized,
    R: RandomSource,
    W: AsyncWrite + Unpin,
{
    #[must_use]
    pub fn new(
        plan: ProbePlan,
        transport: &'transport T,
        random: R,
        rotator: OutputRotator,
        echo: W,
    ) -> Self {
        let summary = RunSummary {
            files: rotator.current_path().map(Path::to_path_buf).into_iter().collect(),
            ..RunSummary::default()
        };
        Self {
            plan,
            transport,
            random,
            rotator,
            echo,
            state: SchedulerState::default(),
            summary,
            finished: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.rotator.current_path()
    }

    /// Runs one probe iteration.
    ///
    /// # Errors
    ///
    /// Returns an error when the plan has no targets or when the next output
    /// file cannot be opened after a batch boundary. Fetch and write failures
    /// are recorded and logged, never returned.
    pub async fn step(&mut self) -> AppResult<StepOutcome> {
        if self.finished {
            return Ok(StepOutcome::Finished);
        }
        self.state.iterations = self.state.iterations.saturating_add(1);
        info!("RUN [{}]", self.state.rotations);

        let url = choose(&mut self.random, &self.plan.urls)
            .cloned()
            .ok_or(ValidationError::UrlListEmpty)?;
        let outcome = fetch_once(self.transport, &url).await;
        if let Some(err) = &outcome.error {
            error!("{}", err);
        }

        let record = StatRecord::from_outcome(&url, &outcome);
        if record.success {
            self.summary.successes = self.summary.successes.saturating_add(1);
        } else {
            self.summary.failures = self.summary.failures.saturating_add(1);
        }
        self.persist(&record).await;

        self.state.records_in_batch = self.state.records_in_batch.saturating_add(1);
        if self.state.records_in_batch < self.plan.batch_size.get() {
            return Ok(StepOutcome::Continue);
        }

        self.state.records_in_batch = 0;
        self.state.rotations = self.state.rotations.saturating_add(1);
        if self.state.rotations >= self.plan.runs.get() {
            self.rotator.close().await;
            self.finished = true;
            info!("Finished after {} batches", self.state.rotations);
            return Ok(StepOutcome::Finished);
        }

        let path = self.rotator.rotate().await?;
        info!("Writing to {}", path.display());
        self.summary.files.push(path.to_path_buf());
        Ok(StepOutcome::Continue)
    }

    /// Steps until finished, sleeping a jittered delay after each iteration
    /// that continues.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Scheduler::step`].
    pub async fn run(mut self) -> AppResult<RunSummary> {
        while self.step().await? == StepOutcome::Continue {
            let delay = self.plan.jitter.delay(&mut self.random);
            debug!("Sleeping {} ms", delay.as_millis());
            tokio::time::sleep(delay).await;
        }
        self.summary.iterations = self.state.iterations;
        self.summary.rotations = self.state.rotations;
        Ok(self.summary)
    }

    async fn persist(&mut self, record: &StatRecord) {
        let line = match record.to_json_line() {
            Ok(line) => line,
            Err(source) => {
                self.summary.write_failures = self.summary.write_failures.saturating_add(1);
                error!("{}", OutputError::Serialize { source });
                return;
            }
        };
        if let Err(err) = self.rotator.write_line(&line).await {
            self.summary.write_failures = self.summary.write_failures.saturating_add(1);
            error!("{}", err);
        }
        let echoed = match self.echo.write_all(line.as_bytes()).await {
            Ok(()) => self.echo.flush().await,
            Err(err) => Err(err),
        };
        if let Err(err) = echoed {
            debug!("Echo failed: {}", err);
        }
    }
}
