// Heap Sort
// Bottom-up max-heap build, then repeated root extraction to the shrinking tail

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct HeapSort;

impl SortStrategy for HeapSort {
    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        let n = array.len();

        for i in (0..n / 2).rev() {
            heapify(array, n, i, recorder);
        }

        for i in (1..n).rev() {
            recorder.swap(array, 0, i);
            array.swap(0, i);

            recorder.mark_sorted(array, (0..n - i).map(|j| n - 1 - j));

            heapify(array, i, 0, recorder);
        }
    }
}

/// Sift `array[i]` down within the heap prefix `array[..heap_len]`
fn heapify(array: &mut [i64], heap_len: usize, i: usize, recorder: &mut StepRecorder) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < heap_len {
        recorder.compare(array, &[left, largest]);
        if array[left] > array[largest] {
            largest = left;
        }
    }

    if right < heap_len {
        recorder.compare(array, &[right, largest]);
        if array[right] > array[largest] {
            largest = right;
        }
    }

    if largest != i {
        recorder.swap(array, i, largest);
        array.swap(i, largest);
        recorder.frame(array);

        heapify(array, heap_len, largest, recorder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{assert_sorts, assert_well_formed};
    use crate::trace::Step;

    #[test]
    fn test_heapify_compares_children_against_largest() {
        let trace = HeapSort.run(&[1, 3, 2]);

        // Build phase on the root: left child first, then right against the new largest
        assert_eq!(trace.steps[0].comparing, vec![1, 0]);
        assert_eq!(trace.steps[1].comparing, vec![2, 1]);
        assert_eq!(trace.steps[2].swapping, vec![0, 1]);
        assert!(trace.steps[3].is_bare());
        assert_eq!(trace.steps[3].array, vec![3, 1, 2]);
    }

    #[test]
    fn test_extraction_swaps_root_then_marks_suffix() {
        let trace = HeapSort.run(&[4, 1, 3, 2]);

        // Root swaps split into extractions (followed by a marker) and sift-downs (followed by a frame)
        let root_swaps: Vec<(&Step, &Step)> = trace
            .steps
            .windows(2)
            .filter(|pair| pair[0].is_swap() && pair[0].swapping[0] == 0)
            .map(|pair| (&pair[0], &pair[1]))
            .collect();
        let (extractions, sift_downs): (Vec<_>, Vec<_>) = root_swaps
            .into_iter()
            .partition(|(_, next)| !next.sorted.is_empty());

        assert_eq!(extractions.len(), 3);
        for (swap, marker) in &extractions {
            assert_eq!(marker.sorted.last(), Some(&swap.swapping[1]));
        }

        let sift_targets: Vec<&Vec<usize>> = sift_downs.iter().map(|(swap, _)| &swap.swapping).collect();
        assert_eq!(sift_targets, vec![&vec![0, 2], &vec![0, 1]]);
        assert!(sift_downs.iter().all(|(_, next)| next.is_bare()));
    }

    #[test]
    fn test_sorted_markers_grow_from_tail() {
        let trace = HeapSort.run(&[4, 1, 3, 2]);
        let markers: Vec<&Vec<usize>> = trace
            .steps
            .iter()
            .filter(|step| !step.sorted.is_empty())
            .map(|step| &step.sorted)
            .collect();

        assert_eq!(
            markers,
            vec![&vec![3], &vec![3, 2], &vec![3, 2, 1], &vec![0, 1, 2, 3]]
        );
        assert_sorts(&trace, &[4, 1, 3, 2]);
        assert_well_formed(&trace);
    }
}
