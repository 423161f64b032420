use super::legendre::{LegendrePolynomial, LegendreTable};
use crate::common::constants::{AZIMUTH_AXIS_TOLERANCE, FOUR_PI, HALF_PI};
use crate::domain::{SphError, SphResult, validate_degree_order};
use crate::numerics::factorial_ratio;
use num_complex::Complex64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianHarmonicInput {
    pub degree: i32,
    pub order: i32,
    pub point: [f64; 3],
}

impl CartesianHarmonicInput {
    pub fn new(degree: i32, order: i32, point: [f64; 3]) -> Self {
        Self {
            degree,
            order,
            point,
        }
    }
}

pub trait SphericalHarmonicsApi {
    fn y_lm(&mut self, input: CartesianHarmonicInput) -> Complex64;
}

/// Evaluates `Y_l^m` at Cartesian points from the symbolic Legendre table.
///
/// The most recently used `P_l^m` is kept next to the table so that sweeping
/// one `(l, m)` over many points fetches the polynomial once.
#[derive(Debug, Clone)]
pub struct SphericalHarmonic {
    table: LegendreTable,
    current: Option<((i32, i32), LegendrePolynomial)>,
}

impl Default for SphericalHarmonic {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SphericalHarmonic {
    pub fn new(max_degree: i32) -> Self {
        let mut harmonic = Self {
            table: LegendreTable::new(max_degree),
            current: None,
        };
        harmonic.load_polynomial(0, 0);
        harmonic
    }

    pub fn table(&self) -> &LegendreTable {
        &self.table
    }

    pub fn cached_key(&self) -> Option<(i32, i32)> {
        self.current.as_ref().map(|(key, _)| *key)
    }

    /// Returns `Y_l^m(x)`, or zero when `x` is the origin.
    ///
    /// Only the direction of `x` enters the result; `|x|^l` is used solely to
    /// detect the origin, so `l = 0` stays the constant `Y_0^0` there.
    ///
    /// # Panics
    ///
    /// Panics when `degree < 0` or `|order| > degree`.
    pub fn evaluate(&mut self, degree: i32, order: i32, x0: f64, x1: f64, x2: f64) -> Complex64 {
        assert!(degree >= 0, "spherical harmonics requires degree >= 0");
        assert!(
            order.unsigned_abs() <= degree.unsigned_abs(),
            "spherical harmonics requires |order| <= degree"
        );

        let radius = x0.hypot(x1).hypot(x2);
        if degree > 0 && (radius.is_nan() || radius <= 0.0) {
            return Complex64::new(0.0, 0.0);
        }

        let normalization = (f64::from(2 * degree + 1) / FOUR_PI
            * factorial_ratio((degree - order) as u32, (degree + order) as u32))
        .sqrt();
        let cos_theta = cos_theta(x0, x1, x2);
        let phase = Complex64::from_polar(1.0, f64::from(order) * azimuth(x0, x1));

        let legendre = self.load_polynomial(degree, order).evaluate(cos_theta);
        phase * (normalization * legendre)
    }

    pub fn try_evaluate(
        &mut self,
        degree: i32,
        order: i32,
        point: [f64; 3],
    ) -> SphResult<Complex64> {
        validate_degree_order(degree, order)?;
        let value = self.evaluate(degree, order, point[0], point[1], point[2]);
        if !(value.re.is_finite() && value.im.is_finite()) {
            return Err(SphError::computation(
                "COMPUTE.NON_FINITE_HARMONIC",
                format!(
                    "Y({degree},{order}) at ({}, {}, {}) is not finite: ({}, {})",
                    point[0], point[1], point[2], value.re, value.im
                ),
            ));
        }
        Ok(value)
    }

    pub fn render_polynomial(&mut self, degree: i32, order: i32) -> String {
        self.table.get(degree, order).to_string()
    }

    fn load_polynomial(&mut self, degree: i32, order: i32) -> &LegendrePolynomial {
        let key = (degree, order);
        if self
            .current
            .as_ref()
            .is_some_and(|(current_key, _)| *current_key != key)
        {
            self.current = None;
        }

        let table = &mut self.table;
        let (_, polynomial) = self.current.get_or_insert_with(|| {
            tracing::trace!(degree, order, "loading Legendre polynomial");
            (key, table.get(degree, order))
        });
        polynomial
    }
}

impl SphericalHarmonicsApi for SphericalHarmonic {
    fn y_lm(&mut self, input: CartesianHarmonicInput) -> Complex64 {
        let [x0, x1, x2] = input.point;
        self.evaluate(input.degree, input.order, x0, x1, x2)
    }
}

/// `cos(theta)` of the direction of `(x0, x1, x2)`; NaN at the origin.
pub fn cos_theta(x0: f64, x1: f64, x2: f64) -> f64 {
    x2 / x0.hypot(x1).hypot(x2)
}

/// Azimuth of `(x0, x1)`, snapped to `sign(x1) * pi/2` when `x0` is numerically zero.
pub fn azimuth(x0: f64, x1: f64) -> f64 {
    if x0.abs() < AZIMUTH_AXIS_TOLERANCE {
        let sign = if x1 > 0.0 {
            1.0
        } else if x1 < 0.0 {
            -1.0
        } else {
            0.0
        };
        return sign * HALF_PI;
    }

    x1.atan2(x0)
}
