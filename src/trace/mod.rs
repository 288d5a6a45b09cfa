// Trace recording module
// Step snapshots, the recorder strategies write into, summaries and JSONL export

pub mod recorder;
pub mod step;
pub mod storage;
pub mod summary;
pub mod writer;

pub use recorder::StepRecorder;
pub use step::{Step, Trace};
pub use storage::{calculate_input_sha256, get_trace_dir, ExportOptions, StorageError};
pub use summary::TraceSummary;
pub use writer::{read_trace_file, ExportedTrace, TraceError, TraceHeader, TraceLine, TraceWriter};
