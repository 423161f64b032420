pub mod special;

pub use special::{
    CartesianHarmonicInput, LegendreEntry, LegendrePolynomial, LegendreTable, PolyTerm,
    SphericalHarmonic, SphericalHarmonicsApi,
};

/// Returns `numerator! / denominator!` as a bounded product, so that neither
/// factorial has to be formed on its own.
pub fn factorial_ratio(numerator: u32, denominator: u32) -> f64 {
    if numerator >= denominator {
        ((denominator + 1)..=numerator).fold(1.0, |ratio, term| ratio * f64::from(term))
    } else {
        ((numerator + 1)..=denominator).fold(1.0, |ratio, term| ratio / f64::from(term))
    }
}

pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value == f64::INFINITY {
        return "inf".to_string();
    }

    if value == f64::NEG_INFINITY {
        return "-inf".to_string();
    }

    format!("{value:.15E}")
}

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

pub fn stable_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut correction = 0.0;

    for value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}

#[cfg(test)]
pub(crate) fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

#[cfg(test)]
pub(crate) fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}
