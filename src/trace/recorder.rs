// Step recorder
// Append-only sink the sort strategies call into while they mutate their working array

use super::step::{Step, Trace};

/// Collects steps for a single sort run
///
/// Every call copies the array it is handed, so later mutation of the working
/// array never reaches an already-recorded step.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Append one step with an owned snapshot of `array`
    pub fn record(&mut self, array: &[i64], comparing: &[usize], swapping: &[usize], sorted: &[usize]) {
        debug_assert!(
            comparing.is_empty() || swapping.is_empty(),
            "a step observes either a comparison or a swap"
        );

        self.steps.push(Step {
            array: array.to_vec(),
            comparing: comparing.to_vec(),
            swapping: swapping.to_vec(),
            sorted: sorted.to_vec(),
        });
    }

    /// Record a comparison of the given indices
    pub fn compare(&mut self, array: &[i64], indices: &[usize]) {
        self.record(array, indices, &[], &[]);
    }

    /// Record an exchange of `a` and `b`; call before performing it
    pub fn swap(&mut self, array: &[i64], a: usize, b: usize) {
        self.record(array, &[], &[a, b], &[]);
    }

    /// Record an untagged snapshot, typically right after a write
    pub fn frame(&mut self, array: &[i64]) {
        self.record(array, &[], &[], &[]);
    }

    /// Record a step marking `indices` as holding their final values
    pub fn mark_sorted<I>(&mut self, array: &[i64], indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let sorted: Vec<usize> = indices.into_iter().collect();
        self.record(array, &[], &[], &sorted);
    }

    /// Close the recording with a full-array sorted step
    ///
    /// Skipped when the last step already marks every index.
    pub fn seal(&mut self, array: &[i64]) {
        if array.is_empty() {
            return;
        }
        let already_sealed = self
            .steps
            .last()
            .map(|step| step.marks_all_sorted())
            .unwrap_or(false);
        if !already_sealed {
            self.mark_sorted(array, 0..array.len());
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Finish recording and hand the steps over as a named trace
    pub fn into_trace(self, name: impl Into<String>) -> Trace {
        Trace::new(name, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut recorder = StepRecorder::new();
        let mut working = vec![3, 1, 2];

        recorder.compare(&working, &[0, 1]);
        working.swap(0, 1);
        working[2] = 99;

        assert_eq!(recorder.steps()[0].array, vec![3, 1, 2]);
    }

    #[test]
    fn test_convenience_tags() {
        let mut recorder = StepRecorder::new();
        let array = [2, 1];

        recorder.compare(&array, &[0, 1]);
        recorder.swap(&array, 0, 1);
        recorder.frame(&array);
        recorder.mark_sorted(&array, [1]);

        let steps = recorder.steps();
        assert_eq!(steps[0].comparing, vec![0, 1]);
        assert_eq!(steps[1].swapping, vec![0, 1]);
        assert!(steps[1].comparing.is_empty());
        assert!(steps[2].is_bare());
        assert_eq!(steps[3].sorted, vec![1]);
    }

    #[test]
    fn test_seal_appends_full_marker() {
        let mut recorder = StepRecorder::new();
        let array = [1, 2, 3];
        recorder.mark_sorted(&array, [2]);
        recorder.seal(&array);

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.steps()[1].sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_seal_is_idempotent() {
        let mut recorder = StepRecorder::new();
        let array = [1, 2];
        recorder.seal(&array);
        recorder.seal(&array);

        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_seal_ignores_empty_array() {
        let mut recorder = StepRecorder::new();
        recorder.seal(&[]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_into_trace_keeps_order() {
        let mut recorder = StepRecorder::new();
        recorder.frame(&[1]);
        recorder.frame(&[2]);

        let trace = recorder.into_trace("Demo");
        assert_eq!(trace.name, "Demo");
        assert_eq!(trace.steps[0].array, vec![1]);
        assert_eq!(trace.steps[1].array, vec![2]);
    }
}
