// Random input generation
// Produces arrays for the player within configurable size and value bounds

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bounds for generated arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Smallest accepted requested size
    pub min_size: usize,

    /// Largest accepted requested size
    pub max_size: usize,

    /// Size used when the request is missing or out of bounds
    pub default_size: usize,

    /// Inclusive lower bound for values
    pub min_value: i64,

    /// Inclusive upper bound for values
    pub max_value: i64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            min_size: 5,
            max_size: 50,
            default_size: 20,
            min_value: 1,
            max_value: 100,
        }
    }
}

/// Pick the array size for a request
///
/// Missing or out-of-range sizes use `default_size` rather than being clamped.
pub fn resolve_size(config: &GenerateConfig, requested: Option<i64>) -> usize {
    match requested {
        Some(size) if size >= config.min_size as i64 && size <= config.max_size as i64 => {
            size as usize
        }
        Some(size) => {
            log::warn!(
                "Requested size {} outside [{}, {}], using {}",
                size,
                config.min_size,
                config.max_size,
                config.default_size
            );
            config.default_size
        }
        None => config.default_size,
    }
}

/// Generate `size` values uniformly drawn from the configured value range
pub fn generate_array<R: Rng + ?Sized>(config: &GenerateConfig, size: usize, rng: &mut R) -> Vec<i64> {
    let (low, high) = if config.min_value <= config.max_value {
        (config.min_value, config.max_value)
    } else {
        (config.max_value, config.min_value)
    };

    (0..size).map(|_| rng.gen_range(low..=high)).collect()
}
