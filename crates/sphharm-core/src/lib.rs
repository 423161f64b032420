//! Symbolic associated Legendre polynomials and the complex spherical
//! harmonics built on them.

pub mod common;
pub mod config;
pub mod domain;
pub mod numerics;

pub use config::{BatchConfig, ConfigError, HarmonicRequest, HarmonicResult, load_batch_config};
pub use domain::{SphError, SphErrorCategory, SphResult};
pub use numerics::{
    CartesianHarmonicInput, LegendreEntry, LegendrePolynomial, LegendreTable, PolyTerm,
    SphericalHarmonic, SphericalHarmonicsApi,
};
