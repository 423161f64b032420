//! JSON batch configuration: which `Y_l^m` to evaluate and where.
//!
//! ```json
//! { "maxDegree": 4, "requests": [ { "degree": 2, "order": -1, "point": [1.0, 0.5, -0.2] } ] }
//! ```

use crate::domain::SphResult;
use crate::numerics::SphericalHarmonic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Degree the table is built to before the first request.
    #[serde(default)]
    pub max_degree: i32,
    #[serde(default)]
    pub requests: Vec<HarmonicRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HarmonicRequest {
    pub degree: i32,
    pub order: i32,
    pub point: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HarmonicResult {
    pub degree: i32,
    pub order: i32,
    pub point: [f64; 3],
    pub re: f64,
    pub im: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read batch config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse batch config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_batch_config(config_path: impl AsRef<Path>) -> Result<BatchConfig, ConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

impl BatchConfig {
    /// Evaluates every request in order with one shared evaluator.
    ///
    /// Stops at the first request with an invalid `(degree, order)` pair.
    pub fn evaluate(&self) -> SphResult<Vec<HarmonicResult>> {
        tracing::info!(
            max_degree = self.max_degree,
            requests = self.requests.len(),
            "evaluating spherical harmonic batch"
        );

        let mut harmonic = SphericalHarmonic::new(self.max_degree);
        self.requests
            .iter()
            .map(|request| {
                let value = harmonic.try_evaluate(request.degree, request.order, request.point)?;
                Ok(HarmonicResult {
                    degree: request.degree,
                    order: request.order,
                    point: request.point,
                    re: value.re,
                    im: value.im,
                })
            })
            .collect()
    }
}
