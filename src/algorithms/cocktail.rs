// Cocktail Shaker Sort
// Bidirectional bubble sort; each round fixes one value at the tail and one at the head

use super::SortStrategy;
use crate::trace::StepRecorder;

pub struct CocktailShakerSort;

impl SortStrategy for CocktailShakerSort {
    fn name(&self) -> &'static str {
        "Cocktail Shaker Sort"
    }

    fn sort(&self, array: &mut [i64], recorder: &mut StepRecorder) {
        let n = array.len();
        if n < 2 {
            return;
        }
        let mut start = 0;
        let mut end = n - 1;
        let mut swapped = true;

        while swapped {
            swapped = false;
            for i in start..end {
                swapped |= compare_and_swap(array, i, recorder);
            }
            if !swapped {
                break;
            }

            end -= 1;
            let mut fixed = vec![end + 1];
            fixed.extend(0..start);
            recorder.mark_sorted(array, fixed);

            swapped = false;
            for i in (start..end).rev() {
                swapped |= compare_and_swap(array, i, recorder);
            }

            start += 1;
            let mut fixed = vec![start - 1];
            fixed.extend((end + 1..n).rev());
            recorder.mark_sorted(array, fixed);
        }

        // Always closes with the full array, even if the last round already covered it
        recorder.mark_sorted(array, 0..n);
    }
}

/// Compare `array[i]` with its right neighbour and exchange them if inverted
fn compare_and_swap(array: &mut [i64], i: usize, recorder: &mut StepRecorder) -> bool {
    recorder.compare(array, &[i, i + 1]);
    if array[i] > array[i + 1] {
        recorder.swap(array, i, i + 1);
        array.swap(i, i + 1);
        recorder.frame(array);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{assert_sorts, assert_well_formed};

    #[test]
    fn test_sorted_input_stops_after_one_pass() {
        let trace = CocktailShakerSort.run(&[1, 2, 3]);
        let steps = &trace.steps;

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].comparing, vec![0, 1]);
        assert_eq!(steps[1].comparing, vec![1, 2]);
        assert_eq!(steps[2].sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_two_elements_keep_closing_marker() {
        let trace = CocktailShakerSort.run(&[2, 1]);
        let markers: Vec<&Vec<usize>> = trace
            .steps
            .iter()
            .filter(|step| !step.sorted.is_empty())
            .map(|step| &step.sorted)
            .collect();

        // Compare, swap, frame, tail marker, head marker, closing marker
        assert_eq!(trace.len(), 6);
        assert_eq!(markers, vec![&vec![1], &vec![0, 1], &vec![0, 1]]);
        assert_sorts(&trace, &[2, 1]);
    }

    #[test]
    fn test_swap_followed_by_post_swap_frame() {
        let trace = CocktailShakerSort.run(&[2, 1, 3]);
        let steps = &trace.steps;

        assert_eq!(steps[1].swapping, vec![0, 1]);
        assert_eq!(steps[1].array, vec![2, 1, 3]);
        assert!(steps[2].is_bare());
        assert_eq!(steps[2].array, vec![1, 2, 3]);
    }

    #[test]
    fn test_round_markers_combine_both_ends() {
        let trace = CocktailShakerSort.run(&[3, 4, 1, 2]);
        let markers: Vec<&Vec<usize>> = trace
            .steps
            .iter()
            .filter(|step| !step.sorted.is_empty())
            .map(|step| &step.sorted)
            .collect();

        // Round 1: tail 3, then head 0 with tail 3; round 2: tail 2 with head 0, then head 1 with tail 3 and 2
        assert_eq!(markers[0], &vec![3]);
        assert_eq!(markers[1], &vec![0, 3]);
        assert_eq!(markers[2], &vec![2, 0]);
        assert_eq!(markers[3], &vec![1, 3, 2]);
        assert_eq!(markers[4], &vec![0, 1, 2, 3]);
        assert_sorts(&trace, &[3, 4, 1, 2]);
        assert_well_formed(&trace);
    }

    #[test]
    fn test_backward_pass_walks_down() {
        let trace = CocktailShakerSort.run(&[2, 3, 1]);

        // Forward: [0,1], [1,2] swap; tail marker; backward starts at end-1
        let after_marker = trace
            .steps
            .iter()
            .skip_while(|step| step.sorted.is_empty())
            .nth(1)
            .unwrap();
        assert_eq!(after_marker.comparing, vec![0, 1]);
    }
}
