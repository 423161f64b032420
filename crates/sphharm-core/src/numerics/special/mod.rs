pub mod harmonics;
pub mod legendre;

pub use harmonics::{
    CartesianHarmonicInput, SphericalHarmonic, SphericalHarmonicsApi, azimuth, cos_theta,
};
pub use legendre::{LegendreEntry, LegendrePolynomial, LegendreTable, PolyTerm};
