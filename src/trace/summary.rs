// Trace summary
// Aggregates a finished trace into the counters a player shows next to the bars

use serde::{Deserialize, Serialize};

use super::step::Trace;

/// Event counts for one trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSummary {
    pub name: String,

    /// Total recorded steps
    pub steps: usize,

    /// Steps tagged with `comparing`
    pub comparisons: usize,

    /// Steps tagged with `swapping`
    pub swaps: usize,

    /// Untagged snapshots (writes, split and gap markers)
    pub frames: usize,

    /// Steps tagged with `sorted`
    pub sorted_markings: usize,

    /// Number of distinct indices marked sorted at least once
    pub sorted_coverage: usize,
}

impl TraceSummary {
    pub fn from_trace(trace: &Trace) -> Self {
        let mut summary = TraceSummary {
            name: trace.name.clone(),
            steps: trace.len(),
            comparisons: 0,
            swaps: 0,
            frames: 0,
            sorted_markings: 0,
            sorted_coverage: trace.sorted_coverage().len(),
        };

        for step in &trace.steps {
            if step.is_comparison() {
                summary.comparisons += 1;
            }
            if step.is_swap() {
                summary.swaps += 1;
            }
            if !step.sorted.is_empty() {
                summary.sorted_markings += 1;
            }
            if step.is_bare() {
                summary.frames += 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepRecorder;

    #[test]
    fn test_counts_each_kind() {
        let mut recorder = StepRecorder::new();
        let array = [2, 1];
        recorder.compare(&array, &[0, 1]);
        recorder.swap(&array, 0, 1);
        recorder.frame(&[1, 2]);
        recorder.mark_sorted(&[1, 2], [1]);
        recorder.mark_sorted(&[1, 2], [0, 1]);

        let summary = TraceSummary::from_trace(&recorder.into_trace("Test"));

        assert_eq!(summary.steps, 5);
        assert_eq!(summary.comparisons, 1);
        assert_eq!(summary.swaps, 1);
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.sorted_markings, 2);
        assert_eq!(summary.sorted_coverage, 2);
    }
}
