// Request boundary
// Serde-shaped entry points a transport layer calls into; no HTTP handling lives here

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::algorithms::{self, AlgorithmInfo};
use crate::engine;
use crate::generate::{self, GenerateConfig};
use crate::trace::{storage, ExportOptions, Trace, TraceHeader, TraceSummary, TraceWriter};

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

// ==================== SORT COMMANDS ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortInput {
    pub array: Vec<i64>,

    /// Algorithm identifier; empty or unknown runs Bubble Sort
    #[serde(default)]
    pub algorithm: String,
}

/// Sort the requested array and return the full trace
pub fn sort_command(input: SortInput) -> CommandResult<Trace> {
    Ok(engine::dispatch(&input.algorithm, &input.array))
}

/// Decode a JSON sort request and encode the resulting trace as JSON
pub fn sort_json(body: &str) -> CommandResult<String> {
    let input: SortInput = serde_json::from_str(body).map_err(|e| CommandError {
        message: format!("Invalid sort request: {}", e),
    })?;

    let trace = sort_command(input)?;
    Ok(serde_json::to_string(&trace)?)
}

/// Sort the requested array and return only its event counts
pub fn summarize_command(input: SortInput) -> CommandResult<TraceSummary> {
    let trace = sort_command(input)?;
    Ok(TraceSummary::from_trace(&trace))
}

// ==================== GENERATE COMMANDS ====================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateInput {
    pub size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArray {
    pub array: Vec<i64>,
}

/// Generate a random array using the default bounds
pub fn generate_command(input: GenerateInput) -> CommandResult<GeneratedArray> {
    generate_with(&GenerateConfig::default(), input, &mut rand::thread_rng())
}

/// Generate a random array with explicit bounds and randomness source
pub fn generate_with<R: Rng + ?Sized>(
    config: &GenerateConfig,
    input: GenerateInput,
    rng: &mut R,
) -> CommandResult<GeneratedArray> {
    let size = generate::resolve_size(config, input.size);
    Ok(GeneratedArray {
        array: generate::generate_array(config, size, rng),
    })
}

// ==================== CATALOG COMMANDS ====================

pub fn list_algorithms_command() -> CommandResult<Vec<AlgorithmInfo>> {
    Ok(algorithms::list_algorithms())
}

// ==================== EXPORT COMMANDS ====================

#[derive(Debug, Clone, Deserialize)]
pub struct ExportTraceInput {
    pub array: Vec<i64>,

    #[serde(default)]
    pub algorithm: String,

    /// Target directory; the app data directory when omitted
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedTraceInfo {
    pub run_id: Uuid,
    pub path: String,
    pub algorithm: String,
    pub step_count: usize,
    pub input_sha256: String,
}

/// Sort the requested array and write the trace to a JSONL file
pub fn export_trace_command(input: ExportTraceInput) -> CommandResult<ExportedTraceInfo> {
    let algorithm = engine::resolve(&input.algorithm);
    let trace = engine::run(algorithm, &input.array);

    let options = ExportOptions {
        directory: input.directory.map(PathBuf::from),
    };
    let dir = options.resolve_dir()?;

    let header = TraceHeader::new(algorithm.id(), &input.array, &trace);
    let path = storage::trace_file_path(&dir, algorithm.id(), &header.run_id);

    TraceWriter::new(path.clone())
        .write(&header, &trace)
        .map_err(|e| CommandError {
            message: format!("Failed to export trace: {}", e),
        })?;

    Ok(ExportedTraceInfo {
        run_id: header.run_id,
        path: path.to_string_lossy().to_string(),
        algorithm: header.algorithm,
        step_count: header.step_count,
        input_sha256: header.input_sha256,
    })
}
