// src/simulation/results.rs
use crate::core::QrelayError;
use std::collections::HashMap;
use std::fmt;

/// Outcome-frequency table of one circuit execution.
///
/// Maps each observed outcome bit-string (one character per classical bit,
/// in declaration order, space-free) to the number of shots that produced
/// it. The counts always sum to the requested number of shots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counts {
    counts: HashMap<String, u64>,
}

impl Counts {
    /// Creates an empty table. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Tallies one shot's outcome. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: String) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Count of shots that produced `outcome`; 0 if never observed.
    pub fn get(&self, outcome: &str) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of shots tallied.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Fraction of shots that produced `outcome`, in [0, 1].
    pub fn frequency(&self, outcome: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(outcome) as f64 / total as f64
    }

    /// The full outcome → count map.
    pub fn all_counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Collapses the table down to a single bit position, summing counts
    /// across all entries that agree there and discarding every other
    /// position. Used to isolate the equality-check bit or one
    /// teleportation-result bit from a multi-register outcome.
    ///
    /// # Errors
    /// [`QrelayError::BitIndexOutOfRange`] if `position` is not a valid
    /// index into every entry's bit-string.
    pub fn reduce_to_bit(&self, position: usize) -> Result<Counts, QrelayError> {
        self.reduce_to_bits(&[position])
    }

    /// Collapses the table down to the given bit positions, kept in the
    /// order supplied.
    ///
    /// # Errors
    /// [`QrelayError::BitIndexOutOfRange`] if any position is not a valid
    /// index into every entry's bit-string.
    pub fn reduce_to_bits(&self, positions: &[usize]) -> Result<Counts, QrelayError> {
        let mut reduced = Counts::new();
        for (outcome, count) in &self.counts {
            let bits: Vec<char> = outcome.chars().collect();
            let mut kept = String::with_capacity(positions.len());
            for &position in positions {
                let bit = bits.get(position).ok_or(QrelayError::BitIndexOutOfRange {
                    position,
                    width: bits.len(),
                })?;
                kept.push(*bit);
            }
            *reduced.counts.entry(kept).or_insert(0) += count;
        }
        Ok(reduced)
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counts ({} shots):", self.total())?;
        let mut sorted: Vec<_> = self.counts.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (outcome, count) in sorted {
            writeln!(f, "  {}: {}", outcome, count)?;
        }
        Ok(())
    }
}
