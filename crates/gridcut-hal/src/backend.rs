//! Backend and counts-source capabilities.
//!
//! A [`Backend`] is anything that can execute the QAOA ansatz for a
//! `(graph, angles)` pair and hand back a measured distribution — the
//! built-in statevector simulator, an emulator, or remote hardware
//! behind a submit/poll/result job lifecycle. The optimizer and the
//! analysis layer never see which one they are talking to.
//!
//! A [`CountsSource`] is the smaller capability: anything that can
//! produce a bitstring distribution, whatever its origin. Cut analysis
//! accepts any of them uniformly.

use std::time::Duration;

use async_trait::async_trait;

use gridcut_core::{Angles, Distribution, Graph};

use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};

/// Trait for QAOA execution backends.
///
/// # Contract
///
/// - `max_qubits()` is synchronous and infallible; backends know their
///   ceiling at construction time.
/// - `submit()` MUST reject graphs larger than the ceiling with
///   [`HalError::ProblemTooLarge`]. Backends that execute synchronously
///   may return a job already in a terminal state.
/// - `result()` MUST only be called once `status()` is `Completed`.
/// - `wait()` has a default implementation (500 ms poll, 5 minute cap).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Name of this backend.
    fn name(&self) -> &str;

    /// Largest qubit count this backend accepts.
    fn max_qubits(&self) -> usize;

    /// Submit the ansatz for execution.
    ///
    /// `shots = 0` requests the exact distribution where the backend
    /// supports it; hardware backends reject it.
    async fn submit(&self, graph: &Graph, angles: &Angles, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the distribution produced by a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<Distribution>;

    /// Cancel a pending or running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its distribution.
    async fn wait(&self, job_id: &JobId) -> HalResult<Distribution> {
        let poll_interval = Duration::from_millis(500);
        let max_polls = 600; // 5 minutes

        for poll in 0..max_polls {
            match self.status(job_id).await? {
                JobStatus::Completed => {
                    tracing::debug!(%job_id, poll, "job completed");
                    return self.result(job_id).await;
                }
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    tokio::time::sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Anything that can produce a bitstring distribution.
///
/// Lets cut analysis consume the built-in sampler, a completed hardware
/// job, or hand-assembled counts through one interface.
pub trait CountsSource {
    /// Produce the distribution.
    fn distribution(&self) -> HalResult<Distribution>;
}

impl CountsSource for Distribution {
    fn distribution(&self) -> HalResult<Distribution> {
        Ok(self.clone())
    }
}

/// Raw per-bitstring counts from an external origin.
#[derive(Debug, Clone)]
pub struct RawCounts {
    /// Bitstring width.
    pub n_bits: usize,
    /// Observed counts per bitstring.
    pub counts: rustc_hash::FxHashMap<String, u64>,
}

impl CountsSource for RawCounts {
    fn distribution(&self) -> HalResult<Distribution> {
        Ok(Distribution::from_counts(self.n_bits, &self.counts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn distribution_is_its_own_counts_source() {
        let probs: FxHashMap<String, f64> = [("01".to_string(), 1.0)].into_iter().collect();
        let d = Distribution::from_probs(2, probs).unwrap();
        let again = d.distribution().unwrap();
        assert_eq!(again.probability("01"), 1.0);
    }

    #[test]
    fn raw_counts_normalize() {
        let counts: FxHashMap<String, u64> = [("00".to_string(), 3u64), ("11".to_string(), 1u64)]
            .into_iter()
            .collect();
        let source = RawCounts { n_bits: 2, counts };
        let d = source.distribution().unwrap();
        assert!((d.probability("00") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn malformed_raw_counts_surface_core_error() {
        let counts: FxHashMap<String, u64> = [("0".to_string(), 5u64)].into_iter().collect();
        let source = RawCounts { n_bits: 2, counts };
        assert!(matches!(
            source.distribution().unwrap_err(),
            HalError::Core(_)
        ));
    }
}
