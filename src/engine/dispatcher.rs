// Engine dispatcher
// Resolves algorithm identifiers and runs the matching strategy

use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::trace::Trace;

/// Errors surfaced by strict dispatch
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Algorithm used when an identifier is not recognized
pub const FALLBACK_ALGORITHM: Algorithm = Algorithm::Bubble;

/// Run `algorithm` over a private copy of `input`
pub fn run(algorithm: Algorithm, input: &[i64]) -> Trace {
    let trace = algorithm.strategy().run(input);
    log::debug!(
        "{} over {} values recorded {} steps",
        trace.name,
        input.len(),
        trace.len()
    );
    trace
}

/// Resolve an identifier, falling back to Bubble Sort when it is unknown
pub fn resolve(algorithm_id: &str) -> Algorithm {
    Algorithm::from_id(algorithm_id).unwrap_or_else(|| {
        log::debug!(
            "Unknown algorithm '{}', falling back to {}",
            algorithm_id,
            FALLBACK_ALGORITHM.id()
        );
        FALLBACK_ALGORITHM
    })
}

/// Resolve an identifier, rejecting unknown ones
pub fn resolve_strict(algorithm_id: &str) -> EngineResult<Algorithm> {
    Algorithm::from_id(algorithm_id)
        .ok_or_else(|| EngineError::UnknownAlgorithm(algorithm_id.to_string()))
}

/// Sort `input` with the algorithm named by `algorithm_id`
///
/// Identifiers are case-sensitive. Unrecognized identifiers run Bubble Sort
/// instead of failing; use [`try_dispatch`] to reject them.
pub fn dispatch(algorithm_id: &str, input: &[i64]) -> Trace {
    run(resolve(algorithm_id), input)
}

/// Like [`dispatch`], but an unknown identifier is an error
pub fn try_dispatch(algorithm_id: &str, input: &[i64]) -> EngineResult<Trace> {
    Ok(run(resolve_strict(algorithm_id)?, input))
}
