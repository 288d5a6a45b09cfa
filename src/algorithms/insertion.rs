// Insertion Sort
// Shifts larger prefix values right and drops each new element into the gap

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct InsertionSort;

impl SortStrategy for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        let n = array.len();

        for i in 1..n {
            let key = array[i];

            // Lone index: "now inserting element i"
            recorder.compare(array, &[i]);

            // `hole` is the slot the key would land in; shifts are overwrites, not swaps
            let mut hole = i;
            while hole > 0 && array[hole - 1] > key {
                recorder.compare(array, &[hole - 1, hole]);
                array[hole] = array[hole - 1];
                hole -= 1;
            }
            array[hole] = key;

            recorder.mark_sorted(array, 0..=i);
        }
    }
}
