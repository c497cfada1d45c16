//! Local simulator backend.
//!
//! Runs the QAOA ansatz on the `gridcut-sim` statevector engine behind
//! the [`gridcut_hal::Backend`] job lifecycle, so callers wired against
//! the HAL can swap between this and a remote backend without changes.
//! Jobs execute synchronously at submit time and complete immediately.

mod simulator;

pub use simulator::SimulatorBackend;
