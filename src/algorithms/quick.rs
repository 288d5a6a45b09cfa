// Quick Sort
// Lomuto partitioning with the last element of each range as pivot

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        if array.len() < 2 {
            return;
        }
        let high = array.len() - 1;
        quick_sort_range(array, 0, high, recorder);
    }
}

/// Sort the inclusive range `low..=high`
fn quick_sort_range(array: &mut [i64], low: usize, high: usize, recorder: &mut StepRecorder) {
    if low >= high {
        return;
    }

    let pivot_idx = partition(array, low, high, recorder);
    if pivot_idx > low {
        quick_sort_range(array, low, pivot_idx - 1, recorder);
    }
    quick_sort_range(array, pivot_idx + 1, high, recorder);
}

/// Partition `low..=high` around `array[high]` and return the pivot's final index
fn partition(array: &mut [i64], low: usize, high: usize, recorder: &mut StepRecorder) -> usize {
    let pivot = array[high];
    // Next free slot left of the pivot
    let mut store = low;

    for j in low..high {
        recorder.compare(array, &[j, high]);

        if array[j] < pivot {
            if store != j {
                recorder.swap(array, store, j);
                array.swap(store, j);
            }
            store += 1;
        }
    }

    // Recorded even when `store == high`
    recorder.swap(array, store, high);
    array.swap(store, high);
    store
}
