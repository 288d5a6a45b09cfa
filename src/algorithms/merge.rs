// Merge Sort
// Top-down split, merging staged copies of both halves back into the working array

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        if array.len() < 2 {
            return;
        }
        let right = array.len() - 1;
        merge_sort_range(array, 0, right, recorder);
    }
}

/// Sort the inclusive range `left..=right`
fn merge_sort_range(array: &mut [i64], left: usize, right: usize, recorder: &mut StepRecorder) {
    if left >= right {
        return;
    }

    let middle = left + (right - left) / 2;
    recorder.frame(array);

    merge_sort_range(array, left, middle, recorder);
    merge_sort_range(array, middle + 1, right, recorder);
    merge(array, left, middle, right, recorder);
}

fn merge(array: &mut [i64], left: usize, middle: usize, right: usize, recorder: &mut StepRecorder) {
    let lhs = array[left..=middle].to_vec();
    let rhs = array[middle + 1..=right].to_vec();

    let range: Vec<usize> = (left..=right).collect();
    recorder.compare(array, &range);

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lhs.len() && j < rhs.len() {
        // Original positions of the two heads
        recorder.compare(array, &[left + i, middle + 1 + j]);

        // `<=` keeps equal values in input order
        if lhs[i] <= rhs[j] {
            array[k] = lhs[i];
            i += 1;
        } else {
            array[k] = rhs[j];
            j += 1;
        }
        recorder.frame(array);
        k += 1;
    }

    for &value in lhs[i..].iter().chain(rhs[j..].iter()) {
        array[k] = value;
        recorder.frame(array);
        k += 1;
    }

    recorder.mark_sorted(array, left..=right);
}
