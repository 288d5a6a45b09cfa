// Bubble Sort
// Adjacent-pair passes; each pass fixes the largest remaining value at the tail

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        let n = array.len();
        if n < 2 {
            return;
        }

        for i in 0..n - 1 {
            for j in 0..n - i - 1 {
                recorder.compare(array, &[j, j + 1]);

                if array[j] > array[j + 1] {
                    recorder.swap(array, j, j + 1);
                    array.swap(j, j + 1);
                }
            }

            // Suffix fixed so far, newest first
            recorder.mark_sorted(array, (0..=i).map(|k| n - 1 - k));
        }
    }
}
