// Trace data types
// Steps are value snapshots of the working array tagged with the indices involved

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single snapshot of an algorithm's working array
///
/// Index lists are always serialized (empty when not applicable) so renderers
/// never need to special-case missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step {
    /// Full copy of the working array at this instant
    pub array: Vec<i64>,

    /// Indices currently being compared, in the order the algorithm names them
    #[serde(default)]
    pub comparing: Vec<usize>,

    /// Indices whose values are being exchanged
    #[serde(default)]
    pub swapping: Vec<usize>,

    /// Indices now holding their final sorted value
    #[serde(default)]
    pub sorted: Vec<usize>,
}

impl Step {
    /// A step with no index tags, showing the array after a write
    pub fn is_bare(&self) -> bool {
        self.comparing.is_empty() && self.swapping.is_empty() && self.sorted.is_empty()
    }

    pub fn is_comparison(&self) -> bool {
        !self.comparing.is_empty()
    }

    pub fn is_swap(&self) -> bool {
        !self.swapping.is_empty()
    }

    /// True when this step marks every index of its array as sorted
    pub fn marks_all_sorted(&self) -> bool {
        let n = self.array.len();
        if n == 0 {
            return false;
        }
        let marked: BTreeSet<usize> = self.sorted.iter().copied().filter(|&i| i < n).collect();
        marked.len() == n
    }
}

/// The complete, ordered recording of one sort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<Step>,

    /// Human-readable algorithm name, display only
    pub name: String,
}

impl Trace {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Trace {
            steps,
            name: name.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Array shown by the last step, if any step was recorded
    pub fn final_array(&self) -> Option<&[i64]> {
        self.steps.last().map(|step| step.array.as_slice())
    }

    /// Union of every index ever marked sorted across the trace
    pub fn sorted_coverage(&self) -> BTreeSet<usize> {
        self.steps
            .iter()
            .flat_map(|step| step.sorted.iter().copied())
            .collect()
    }
}
