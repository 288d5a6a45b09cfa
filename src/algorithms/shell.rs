// Shell Sort
// Gapped insertion sort with the gap halving each pass down to 1

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct ShellSort;

impl SortStrategy for ShellSort {
    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        let n = array.len();
        let mut gap = n / 2;

        while gap > 0 {
            recorder.frame(array);

            for i in gap..n {
                let temp = array[i];
                let mut j = i;

                recorder.compare(array, &[j, j - gap]);

                while j >= gap && array[j - gap] > temp {
                    recorder.compare(array, &[j - gap, i]);
                    array[j] = array[j - gap];
                    recorder.frame(array);
                    j -= gap;
                }

                array[j] = temp;
                // No frame when the element stayed put
                if i != j {
                    recorder.frame(array);
                }
            }

            gap /= 2;
        }

        recorder.mark_sorted(array, 0..n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{assert_sorts, assert_well_formed};

    #[test]
    fn test_two_element_sequence() {
        let trace = ShellSort.run(&[2, 1]);
        let steps = &trace.steps;

        assert_eq!(steps.len(), 6);
        assert!(steps[0].is_bare());
        assert_eq!(steps[1].comparing, vec![1, 0]);
        assert_eq!(steps[2].comparing, vec![0, 1]);
        assert_eq!(steps[3].array, vec![2, 2]);
        assert_eq!(steps[4].array, vec![1, 2]);
        assert_eq!(steps[5].sorted, vec![0, 1]);
    }

    #[test]
    fn test_no_placement_frame_when_element_stays() {
        let trace = ShellSort.run(&[1, 2]);
        let steps = &trace.steps;

        // Gap frame, one comparison, final marker
        assert_eq!(steps.len(), 3);
        assert!(steps[0].is_bare());
        assert_eq!(steps[1].comparing, vec![1, 0]);
        assert_eq!(steps[2].sorted, vec![0, 1]);
    }

    #[test]
    fn test_one_frame_per_gap_pass() {
        let input = [1, 2, 3, 4, 5, 6, 7, 8];
        let trace = ShellSort.run(&input);

        // Gaps 4, 2, 1 and nothing moves
        let frames = trace.steps.iter().filter(|step| step.is_bare()).count();
        assert_eq!(frames, 3);
    }

    #[test]
    fn test_sorts_reverse_input() {
        let input = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        let trace = ShellSort.run(&input);
        assert_sorts(&trace, &input);
        assert_well_formed(&trace);
    }
}
