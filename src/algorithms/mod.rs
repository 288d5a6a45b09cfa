// Sort algorithm strategies
// Eight classical comparison sorts, each instrumented through the step recorder

pub mod bubble;
pub mod cocktail;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

use serde::{Deserialize, Serialize};

use crate::trace::{StepRecorder, Trace};

pub use bubble::BubbleSort;
pub use cocktail::CocktailShakerSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

/// An instrumented sort
///
/// Implementors only describe how to sort a working array in place while
/// reporting to the recorder; `run` owns the copy-in and trace assembly.
pub trait SortStrategy: Send + Sync {
    /// Display name carried by the produced trace
    fn name(&self) -> &'static str;

    /// Sort `array` in place, recording every meaningful event
    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder);

    /// Sort a private copy of `input` and return the named trace
    ///
    /// Inputs of length 0 or 1 produce a trace with no steps.
    fn run(&self, input: &[i64]) -> Trace {
        let mut working = input.to_vec();
        let mut recorder = StepRecorder::new();

        if working.len() > 1 {
            self.sort(&mut working, &mut recorder);
            recorder.seal(&working);
        }

        recorder.into_trace(self.name())
    }
}

/// The closed set of supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Shell,
    Cocktail,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Cocktail,
    ];

    /// Look up an algorithm by its case-sensitive identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "bubble" => Some(Algorithm::Bubble),
            "selection" => Some(Algorithm::Selection),
            "insertion" => Some(Algorithm::Insertion),
            "quick" => Some(Algorithm::Quick),
            "merge" => Some(Algorithm::Merge),
            "heap" => Some(Algorithm::Heap),
            "shell" => Some(Algorithm::Shell),
            "cocktail" => Some(Algorithm::Cocktail),
            _ => None,
        }
    }

    /// Identifier used by requests (e.g. "quick")
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
            Algorithm::Cocktail => "cocktail",
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        self.strategy().name()
    }

    pub fn strategy(&self) -> &'static dyn SortStrategy {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::Selection => &SelectionSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Merge => &MergeSort,
            Algorithm::Heap => &HeapSort,
            Algorithm::Shell => &ShellSort,
            Algorithm::Cocktail => &CocktailShakerSort,
        }
    }

    /// Catalog entry describing this algorithm
    pub fn info(&self) -> AlgorithmInfo {
        let (description, best_case, average_case, worst_case, space) = match self {
            Algorithm::Bubble => (
                "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                "O(n)", "O(n^2)", "O(n^2)", "O(1)",
            ),
            Algorithm::Selection => (
                "Grows a sorted prefix by repeatedly selecting the smallest remaining element and swapping it into place.",
                "O(n^2)", "O(n^2)", "O(n^2)", "O(1)",
            ),
            Algorithm::Insertion => (
                "Builds the sorted list one item at a time, shifting larger elements right to open a slot for each new one.",
                "O(n)", "O(n^2)", "O(n^2)", "O(1)",
            ),
            Algorithm::Quick => (
                "Divide and conquer: partitions around the last element as pivot, then sorts each side recursively.",
                "O(n log n)", "O(n log n)", "O(n^2)", "O(log n)",
            ),
            Algorithm::Merge => (
                "Splits the list in halves, sorts each half recursively and merges the sorted halves back together.",
                "O(n log n)", "O(n log n)", "O(n log n)", "O(n)",
            ),
            Algorithm::Heap => (
                "Arranges the list as a max-heap, then repeatedly moves the root to the end and restores the heap.",
                "O(n log n)", "O(n log n)", "O(n log n)", "O(1)",
            ),
            Algorithm::Shell => (
                "Insertion sort over shrinking gaps, letting far-apart elements move early before the final gap of one.",
                "O(n log n)", "O(n^1.5)", "O(n^2)", "O(1)",
            ),
            Algorithm::Cocktail => (
                "Bubble sort that alternates forward and backward passes, fixing one element at each end per round.",
                "O(n)", "O(n^2)", "O(n^2)", "O(1)",
            ),
        };

        AlgorithmInfo {
            id: self.id().to_string(),
            name: self.display_name().to_string(),
            description: description.to_string(),
            best_case: best_case.to_string(),
            average_case: average_case.to_string(),
            worst_case: worst_case.to_string(),
            space: space.to_string(),
        }
    }
}

/// Descriptive catalog entry shown alongside a visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
    pub space: String,
}

/// List every supported algorithm with its catalog entry
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    Algorithm::ALL.iter().map(|algorithm| algorithm.info()).collect()
}
