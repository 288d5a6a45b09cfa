// SortScope - Instrumented Sort Engine
// Module declarations

pub mod algorithms;
pub mod commands;
pub mod engine;
pub mod generate;
pub mod trace;

pub use algorithms::{list_algorithms, Algorithm, AlgorithmInfo, SortStrategy};
pub use engine::{dispatch, run, try_dispatch, EngineError};
pub use generate::GenerateConfig;
pub use trace::{Step, StepRecorder, Trace, TraceSummary};
