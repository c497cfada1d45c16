//! Simulator backend implementation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

use gridcut_core::{Angles, Distribution, Graph};
use gridcut_hal::{Backend, HalError, HalResult, Job, JobId, JobStatus};
use gridcut_sim::{SimError, evolve, exact_distribution, sample_distribution};

/// Job record for the simulator.
struct SimJob {
    job: Job,
    result: Option<Distribution>,
}

/// Local statevector simulator backend.
///
/// Supports up to ~20 qubits (limited by the exponential amplitude
/// vector). Sampling is seeded per backend, so a fixed seed reproduces
/// an entire sequence of jobs.
pub struct SimulatorBackend {
    name: String,
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    max_qubits: usize,
    seed: u64,
    job_counter: AtomicU64,
}

impl SimulatorBackend {
    /// Create a simulator with the default 20-qubit ceiling.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with a custom qubit ceiling.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self {
            name: "simulator".to_string(),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
            seed: 0,
            job_counter: AtomicU64::new(0),
        }
    }

    /// Set the base seed for stochastic sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[instrument(skip(self, graph, angles))]
    fn run(&self, graph: &Graph, angles: &Angles, shots: u32) -> HalResult<Distribution> {
        let n = graph.num_nodes();
        debug!(
            graph = graph.id(),
            n_qubits = n,
            depth = angles.depth(),
            shots,
            "running simulation"
        );

        let hamiltonian = gridcut_core::CostHamiltonian::from_graph(graph);
        let state = evolve(&hamiltonian, n, angles, self.max_qubits).map_err(map_sim_error)?;

        if shots == 0 {
            exact_distribution(&state).map_err(map_sim_error)
        } else {
            let job_index = self.job_counter.fetch_add(1, Ordering::Relaxed);
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(job_index));
            sample_distribution(&state, shots, &mut rng).map_err(map_sim_error)
        }
    }
}

fn map_sim_error(err: SimError) -> HalError {
    match err {
        SimError::QubitLimitExceeded { .. } | SimError::QubitOutOfRange { .. } => {
            HalError::ProblemTooLarge(err.to_string())
        }
        SimError::InvalidShots(shots) => HalError::InvalidShots(shots.to_string()),
        SimError::Core(core) => HalError::Core(core),
        other => HalError::Backend(other.to_string()),
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    async fn submit(&self, graph: &Graph, angles: &Angles, shots: u32) -> HalResult<JobId> {
        if graph.num_nodes() > self.max_qubits {
            return Err(HalError::ProblemTooLarge(format!(
                "graph has {} nodes but the simulator ceiling is {} qubits",
                graph.num_nodes(),
                self.max_qubits
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        debug!(%job_id, "submitted simulation job");

        // Simulation is synchronous; the job lands in a terminal state
        // before submit returns.
        let (status, result) = match self.run(graph, angles, shots) {
            Ok(distribution) => (JobStatus::Completed, Some(distribution)),
            Err(err) => (JobStatus::Failed(err.to_string()), None),
        };

        let sim_job = SimJob {
            job: Job::new(job_id.clone(), shots, self.name.clone()).with_status(status),
            result,
        };

        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.insert(job_id.0.clone(), sim_job);

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<Distribution> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let sim_job = jobs
            .get(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        match (&sim_job.job.status, &sim_job.result) {
            (JobStatus::Completed, Some(distribution)) => Ok(distribution.clone()),
            (JobStatus::Failed(msg), _) => Err(HalError::JobFailed(msg.clone())),
            _ => Err(HalError::JobNotFound(job_id.0.clone())),
        }
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match jobs.get_mut(&job_id.0) {
            Some(sim_job) => {
                // Jobs complete synchronously, so cancel only applies to
                // ids that never reached a terminal state.
                if !sim_job.job.status.is_terminal() {
                    sim_job.job.status = JobStatus::Cancelled;
                }
                Ok(())
            }
            None => Err(HalError::JobNotFound(job_id.0.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_qubit_ceiling() {
        let backend = SimulatorBackend::with_max_qubits(12);
        assert_eq!(backend.max_qubits(), 12);
        assert_eq!(backend.name(), "simulator");
    }

    #[tokio::test]
    async fn job_lifecycle_completes() {
        let backend = SimulatorBackend::new().with_seed(11);
        let graph = Graph::grid(2, 2);
        let angles = Angles::new(vec![0.4], vec![0.3]).unwrap();

        let job_id = backend.submit(&graph, &angles, 1000).await.unwrap();
        assert!(backend.status(&job_id).await.unwrap().is_success());

        let distribution = backend.wait(&job_id).await.unwrap();
        let total: f64 = distribution.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn exact_mode_with_zero_shots() {
        let backend = SimulatorBackend::new();
        let graph = Graph::grid(1, 2);
        let angles = Angles::initial(1);

        let job_id = backend.submit(&graph, &angles, 0).await.unwrap();
        let distribution = backend.result(&job_id).await.unwrap();
        assert_eq!(distribution.n_bits(), 2);
    }

    #[tokio::test]
    async fn oversized_graph_rejected_at_submit() {
        let backend = SimulatorBackend::with_max_qubits(3);
        let graph = Graph::grid(2, 2);
        let angles = Angles::initial(1);

        let err = backend.submit(&graph, &angles, 100).await.unwrap_err();
        assert!(matches!(err, HalError::ProblemTooLarge(_)));
    }

    #[tokio::test]
    async fn unknown_job_id_not_found() {
        let backend = SimulatorBackend::new();
        let err = backend.status(&JobId::from("missing")).await.unwrap_err();
        assert!(matches!(err, HalError::JobNotFound(_)));
    }

    #[tokio::test]
    async fn fixed_seed_reproduces_distribution() {
        let graph = Graph::grid(2, 2);
        let angles = Angles::new(vec![0.5], vec![0.2]).unwrap();

        let mut runs = Vec::new();
        for _ in 0..2 {
            let backend = SimulatorBackend::new().with_seed(99);
            let job_id = backend.submit(&graph, &angles, 500).await.unwrap();
            runs.push(backend.result(&job_id).await.unwrap());
        }

        for (bitstring, p) in runs[0].iter() {
            assert!((runs[1].probability(bitstring) - p).abs() < 1e-12);
        }
    }
}
