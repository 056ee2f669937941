//! Bounded-parallelism batch driver and per-phase outcome reports.

use std::fmt;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::error::{Result, WorkflowError};

/// The three workflow phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Svg,
    Png,
    WebP,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::WebP => "webp",
        })
    }
}

/// A single item that failed during a phase.
#[derive(Debug)]
pub struct Failure {
    /// Human-readable item label (icon title or output path).
    pub item: String,
    pub error: WorkflowError,
}

/// Outcome of one phase.
#[derive(Debug)]
pub struct PhaseReport {
    pub phase: Phase,
    pub succeeded: usize,
    pub failures: Vec<Failure>,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of a full workflow run.
#[derive(Debug, Default)]
pub struct WorkflowReport {
    pub phases: Vec<PhaseReport>,
}

impl WorkflowReport {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|report| report.phase == phase)
    }

    pub fn total_failures(&self) -> usize {
        self.phases.iter().map(PhaseReport::failed).sum()
    }

    pub fn is_success(&self) -> bool {
        self.total_failures() == 0
    }
}

/// Runs `job` over every `(label, item)` pair with at most `concurrency`
/// jobs in flight.
///
/// Jobs run on the blocking pool. A failing job is logged and recorded; it
/// never stops the others. Completion order is unspecified.
pub async fn run_bounded<T, R, F, I>(
    phase: Phase,
    items: I,
    concurrency: usize,
    job: F,
) -> PhaseReport
where
    I: IntoIterator<Item = (String, T)>,
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Result<R> + Send + Sync + 'static,
{
    let job = Arc::new(job);

    let outcomes: Vec<(String, Result<R>)> = stream::iter(items)
        .map(|(label, item)| {
            let job = Arc::clone(&job);
            async move {
                let result = match tokio::task::spawn_blocking(move || job(item)).await {
                    Ok(result) => result,
                    Err(e) => Err(WorkflowError::from(e)),
                };
                (label, result)
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut report = PhaseReport::new(phase);
    for (item, result) in outcomes {
        match result {
            Ok(_) => report.succeeded += 1,
            Err(e) => {
                error!(phase = %phase, item = %item, error = %e, "Item failed");
                report.failures.push(Failure { item, error: e });
            }
        }
    }

    info!(
        phase = %phase,
        success = report.succeeded,
        failed = report.failed(),
        "Phase complete"
    );
    report
}
