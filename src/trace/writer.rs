// Trace export
// Writes a finished trace as JSONL: one header line, then one line per step

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use super::step::{Step, Trace};
use super::storage::calculate_input_sha256;

/// Errors that can occur during trace export or import
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Trace file has no header line")]
    MissingHeader,

    #[error("Unexpected header on line {0}")]
    UnexpectedHeader(usize),

    #[error("Header lists {expected} steps but {found} were read")]
    StepCountMismatch { expected: usize, found: usize },
}

/// Metadata written as the first line of an exported trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceHeader {
    /// Unique identifier for this export
    pub run_id: Uuid,

    pub created_at: DateTime<Utc>,

    /// Algorithm identifier used for the run (e.g. "quick")
    pub algorithm: String,

    /// Display name carried by the trace
    pub name: String,

    /// The sequence the run started from
    pub input: Vec<i64>,

    /// SHA256 fingerprint of `input`
    pub input_sha256: String,

    pub step_count: usize,
}

impl TraceHeader {
    /// Describe a trace produced by `algorithm` from `input`
    pub fn new(algorithm: impl Into<String>, input: &[i64], trace: &Trace) -> Self {
        TraceHeader {
            run_id: Uuid::new_v4(),
            created_at: Utc::now(),
            algorithm: algorithm.into(),
            name: trace.name.clone(),
            input: input.to_vec(),
            input_sha256: calculate_input_sha256(input),
            step_count: trace.len(),
        }
    }
}

/// One line of an exported trace file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceLine {
    Header(TraceHeader),
    Step(Step),
}

impl TraceLine {
    /// Serialize to JSON line (with newline)
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{}\n", json))
    }
}

/// A trace read back from disk together with its header
#[derive(Debug, Clone)]
pub struct ExportedTrace {
    pub header: TraceHeader,
    pub trace: Trace,
}

/// Trace file writer
pub struct TraceWriter {
    file_path: PathBuf,
}

impl TraceWriter {
    pub fn new(file_path: PathBuf) -> Self {
        TraceWriter { file_path }
    }

    /// Write the header and every step, replacing any existing file
    pub fn write(&self, header: &TraceHeader, trace: &Trace) -> Result<(), TraceError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.file_path)?;
        let mut out = BufWriter::new(file);

        let header_line = TraceLine::Header(header.clone()).to_json_line()?;
        out.write_all(header_line.as_bytes())?;

        for step in &trace.steps {
            let json_line = TraceLine::Step(step.clone()).to_json_line()?;
            out.write_all(json_line.as_bytes())?;
        }

        out.flush()?;
        log::info!(
            "Exported {} steps of {} to {}",
            trace.len(),
            trace.name,
            self.file_path.display()
        );
        Ok(())
    }

    /// Get the trace file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Read an exported trace from a JSONL file
pub fn read_trace_file(path: &Path) -> Result<ExportedTrace, TraceError> {
    let contents = std::fs::read_to_string(path)?;
    let mut header: Option<TraceHeader> = None;
    let mut steps = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<TraceLine>(line)? {
            TraceLine::Header(h) => {
                if header.is_some() {
                    return Err(TraceError::UnexpectedHeader(line_no + 1));
                }
                header = Some(h);
            }
            TraceLine::Step(step) => {
                if header.is_none() {
                    return Err(TraceError::MissingHeader);
                }
                steps.push(step);
            }
        }
    }

    let header = header.ok_or(TraceError::MissingHeader)?;
    if steps.len() != header.step_count {
        return Err(TraceError::StepCountMismatch {
            expected: header.step_count,
            found: steps.len(),
        });
    }
    let trace = Trace::new(header.name.clone(), steps);
    Ok(ExportedTrace { header, trace })
}
