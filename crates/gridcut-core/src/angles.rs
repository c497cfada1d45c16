//! QAOA angle parameters.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The `2p` variational parameters of a depth-`p` ansatz: `p` cost angles
/// (gamma) and `p` mixer angles (beta).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    gammas: Vec<f64>,
    betas: Vec<f64>,
}

impl Angles {
    /// Create from gamma and beta vectors of equal length.
    pub fn new(gammas: Vec<f64>, betas: Vec<f64>) -> CoreResult<Self> {
        if gammas.len() != betas.len() {
            return Err(CoreError::ParameterCountMismatch {
                expected: gammas.len(),
                got: betas.len(),
            });
        }
        Ok(Self { gammas, betas })
    }

    /// The conventional initial guess: every angle set to 0.1.
    pub fn initial(p: usize) -> Self {
        Self {
            gammas: vec![0.1; p],
            betas: vec![0.1; p],
        }
    }

    /// Circuit depth `p`.
    pub fn depth(&self) -> usize {
        self.gammas.len()
    }

    /// Cost angles.
    pub fn gammas(&self) -> &[f64] {
        &self.gammas
    }

    /// Mixer angles.
    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    /// Flatten to `[gamma_1..gamma_p, beta_1..beta_p]` for the optimizer.
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = self.gammas.clone();
        flat.extend_from_slice(&self.betas);
        flat
    }

    /// Rebuild from a flat `2p`-element vector.
    pub fn from_flat(p: usize, flat: &[f64]) -> CoreResult<Self> {
        if flat.len() != 2 * p {
            return Err(CoreError::ParameterCountMismatch {
                expected: 2 * p,
                got: flat.len(),
            });
        }
        Ok(Self {
            gammas: flat[..p].to_vec(),
            betas: flat[p..].to_vec(),
        })
    }
}
