//! Bitstring probability distributions.
//!
//! # Bit convention
//!
//! This is the single place where the index↔bitstring mapping is defined:
//! **character `k` of a bitstring is bit `k` of the basis-state index is
//! the side assignment of graph node `k`** (least-significant bit first).
//! Every producer (exact or sampled measurement) and every consumer
//! (cut analysis) goes through [`index_to_bitstring`] /
//! [`bitstring_to_index`], so a mismatch between simulation bit order and
//! graph node order cannot creep in silently.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Allowed deviation of the total probability mass from 1.
pub const MASS_TOLERANCE: f64 = 1e-6;

/// Encode a basis-state index as a fixed-width bitstring.
///
/// Character `k` is bit `k` of `index` (LSB first).
pub fn index_to_bitstring(index: usize, n_bits: usize) -> String {
    (0..n_bits)
        .map(|k| if (index >> k) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Decode a bitstring back to a basis-state index.
pub fn bitstring_to_index(bitstring: &str, n_bits: usize) -> CoreResult<usize> {
    if bitstring.len() != n_bits {
        return Err(CoreError::MalformedBitstring {
            bitstring: bitstring.to_string(),
            expected_bits: n_bits,
        });
    }
    let mut index = 0usize;
    for (k, c) in bitstring.chars().enumerate() {
        match c {
            '0' => {}
            '1' => index |= 1 << k,
            _ => {
                return Err(CoreError::MalformedBitstring {
                    bitstring: bitstring.to_string(),
                    expected_bits: n_bits,
                });
            }
        }
    }
    Ok(index)
}

/// A probability distribution over fixed-width bitstrings.
///
/// Values are non-negative and sum to 1 within [`MASS_TOLERANCE`]; both
/// are checked at construction. Raw shot counts are normalized before
/// they become a `Distribution`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    n_bits: usize,
    probs: FxHashMap<String, f64>,
}

impl Distribution {
    /// Create from a bitstring → probability map, validating width,
    /// non-negativity and total mass.
    pub fn from_probs(n_bits: usize, probs: FxHashMap<String, f64>) -> CoreResult<Self> {
        let mut sum = 0.0;
        for (bitstring, &p) in &probs {
            bitstring_to_index(bitstring, n_bits)?;
            if p < 0.0 || !p.is_finite() {
                return Err(CoreError::InvalidDistribution {
                    sum: p,
                    tolerance: MASS_TOLERANCE,
                });
            }
            sum += p;
        }
        if (sum - 1.0).abs() > MASS_TOLERANCE {
            return Err(CoreError::InvalidDistribution {
                sum,
                tolerance: MASS_TOLERANCE,
            });
        }
        Ok(Self { n_bits, probs })
    }

    /// Create from raw per-bitstring counts, normalizing by the total.
    pub fn from_counts(n_bits: usize, counts: &FxHashMap<String, u64>) -> CoreResult<Self> {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(CoreError::InvalidDistribution {
                sum: 0.0,
                tolerance: MASS_TOLERANCE,
            });
        }
        let probs = counts
            .iter()
            .map(|(b, &c)| (b.clone(), c as f64 / total as f64))
            .collect();
        Self::from_probs(n_bits, probs)
    }

    /// Bitstring width.
    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    /// Probability of a bitstring (0 if absent).
    pub fn probability(&self, bitstring: &str) -> f64 {
        self.probs.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Iterate over `(bitstring, probability)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.probs.iter().map(|(b, &p)| (b.as_str(), p))
    }

    /// Number of bitstrings with recorded mass.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// True if no bitstring has recorded mass.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// The most probable bitstring, if any.
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        self.probs
            .iter()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(b, &p)| (b.as_str(), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dist(n_bits: usize, entries: &[(&str, f64)]) -> CoreResult<Distribution> {
        let probs = entries
            .iter()
            .map(|(b, p)| (b.to_string(), *p))
            .collect::<FxHashMap<_, _>>();
        Distribution::from_probs(n_bits, probs)
    }

    #[test]
    fn bitstring_is_lsb_first() {
        // Index 1 sets bit 0, which is the *first* character.
        assert_eq!(index_to_bitstring(1, 4), "1000");
        assert_eq!(index_to_bitstring(0b0110, 4), "0110");
        assert_eq!(index_to_bitstring(0, 3), "000");
    }

    #[test]
    fn decode_rejects_bad_keys() {
        assert!(bitstring_to_index("01", 3).is_err());
        assert!(bitstring_to_index("0x1", 3).is_err());
        assert_eq!(bitstring_to_index("110", 3).unwrap(), 0b011);
    }

    #[test]
    fn valid_distribution_accepted() {
        let d = dist(2, &[("00", 0.5), ("11", 0.5)]).unwrap();
        assert_eq!(d.probability("00"), 0.5);
        assert_eq!(d.probability("01"), 0.0);
    }

    #[test]
    fn mass_must_sum_to_one() {
        let err = dist(2, &[("00", 0.5), ("11", 0.6)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDistribution { .. }));
    }

    #[test]
    fn negative_mass_rejected() {
        let err = dist(2, &[("00", 1.5), ("11", -0.5)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDistribution { .. }));
    }

    #[test]
    fn counts_normalize() {
        let counts: FxHashMap<String, u64> =
            [("00".to_string(), 750u64), ("11".to_string(), 250u64)]
                .into_iter()
                .collect();
        let d = Distribution::from_counts(2, &counts).unwrap();
        assert!((d.probability("00") - 0.75).abs() < 1e-12);
        assert_eq!(d.most_likely().unwrap().0, "00");
    }

    proptest! {
        #[test]
        fn index_round_trip(index in 0usize..512, extra_bits in 0usize..4) {
            let n_bits = 9 + extra_bits;
            let bitstring = index_to_bitstring(index, n_bits);
            prop_assert_eq!(bitstring.len(), n_bits);
            prop_assert_eq!(bitstring_to_index(&bitstring, n_bits).unwrap(), index);
        }
    }
}
