// Selection Sort
// Scans the unsorted tail for its minimum and swaps it to the front

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct SelectionSort;

impl SortStrategy for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        let n = array.len();
        if n < 2 {
            return;
        }

        for i in 0..n - 1 {
            let mut min_idx = i;

            for j in i + 1..n {
                recorder.compare(array, &[min_idx, j]);
                if array[j] < array[min_idx] {
                    min_idx = j;
                }
            }

            if min_idx != i {
                recorder.swap(array, i, min_idx);
                array.swap(i, min_idx);
            }

            recorder.mark_sorted(array, 0..=i);
        }
    }
}
