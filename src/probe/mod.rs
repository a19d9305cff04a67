//! The probe loop: target selection, timed fetch, record building, batching
//! and jittered pacing.
mod jitter;
mod random;
mod record;
mod scheduler;

#[cfg(test)]
pub(crate) mod test_support;

pub use jitter::JitterWindow;
pub use random::{RandomSource, RngSource, choose};
pub use record::{StatRecord, speed_mib_per_sec};
pub use scheduler::{ProbePlan, RunSummary, Scheduler, SchedulerState, StepOutcome};
