//! Inference statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters accumulated by a `KnowledgeEngine` over its lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceStats {
    /// Observations recorded.
    pub observations: u64,

    /// Fixpoint passes run (at least one per observation).
    pub passes: u64,

    /// Constraints derived by the subset rule.
    pub derived: u64,

    /// Cells newly confirmed safe or hazardous.
    pub facts_learned: u64,
}

impl InferenceStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_observation(&mut self) {
        self.observations = self.observations.saturating_add(1);
    }

    pub(crate) fn record_fact(&mut self) {
        self.facts_learned = self.facts_learned.saturating_add(1);
    }

    /// Fold in one completed fixpoint run.
    pub(crate) fn record_fixpoint(&mut self, passes: usize, derived: usize) {
        self.passes = self.passes.saturating_add(widen(passes));
        self.derived = self.derived.saturating_add(widen(derived));
    }

    /// Average fixpoint passes per observation.
    #[must_use]
    pub fn passes_per_observation(&self) -> f64 {
        if self.observations == 0 {
            0.0
        } else {
            self.passes as f64 / self.observations as f64
        }
    }
}

fn widen(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_saturate() {
        let mut stats = InferenceStats {
            observations: u64::MAX,
            passes: u64::MAX - 1,
            derived: 0,
            facts_learned: u64::MAX,
        };

        stats.record_observation();
        stats.record_fact();
        stats.record_fixpoint(5, usize::MAX);

        assert_eq!(stats.observations, u64::MAX);
        assert_eq!(stats.facts_learned, u64::MAX);
        assert_eq!(stats.passes, u64::MAX);
        assert_eq!(stats.derived, widen(usize::MAX));
    }

    #[test]
    fn test_passes_per_observation() {
        let mut stats = InferenceStats::new();
        assert_eq!(stats.passes_per_observation(), 0.0);

        stats.observations = 4;
        stats.passes = 10;
        assert!((stats.passes_per_observation() - 2.5).abs() < 1e-9);

        stats.reset();
        assert_eq!(stats, InferenceStats::default());
    }
}
