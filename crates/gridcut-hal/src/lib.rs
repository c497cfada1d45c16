//! `gridcut-hal` — backend abstraction for QAOA execution.
//!
//! Keeps the optimization core backend-agnostic: anything implementing
//! [`Backend`] can run the ansatz for a `(graph, angles)` pair and return
//! a measured [`gridcut_core::Distribution`], whether it is the local
//! statevector simulator (`gridcut-adapter-sim`) or a remote submit/poll/
//! result job queue. [`CountsSource`] is the matching read-side
//! capability for anything that merely produces counts.

pub mod backend;
pub mod error;
pub mod job;

pub use backend::{Backend, CountsSource, RawCounts};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
