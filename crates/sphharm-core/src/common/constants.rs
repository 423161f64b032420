//! Numeric constants shared by the Legendre and spherical-harmonic kernels.

pub const PI: f64 = std::f64::consts::PI;
pub const FOUR_PI: f64 = 4.0 * PI;
pub const HALF_PI: f64 = 0.5 * PI;

/// Below this `|x0|` the azimuth is snapped to `±π/2` instead of using `atan2`.
pub const AZIMUTH_AXIS_TOLERANCE: f64 = 1.0e-8;
