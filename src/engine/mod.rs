// Sort engine
// Entry points mapping algorithm identifiers to instrumented runs

pub mod dispatcher;

pub use dispatcher::{
    dispatch, resolve, resolve_strict, run, try_dispatch, EngineError, EngineResult,
    FALLBACK_ALGORITHM,
};
