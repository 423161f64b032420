use super::polynomial::LegendrePolynomial;
use super::term::PolyTerm;
use crate::domain::{SphResult, validate_degree_order};
use crate::numerics::factorial_ratio;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendreEntry {
    pub degree: i32,
    pub order: i32,
    pub polynomial: LegendrePolynomial,
}

/// Append-only cache of `P_l^m` for every `|m| <= l <= max_degree`.
///
/// The entry for `(l, m)` lives at index `l*l + l - m`, so a complete degree
/// `l` occupies indices `l*l ..= l*l + 2l` with `m` running from `l` down to
/// `-l`. Degrees are added whole; `max_degree` only moves after every order of
/// the new degree has been appended.
#[derive(Debug, Clone)]
pub struct LegendreTable {
    entries: Vec<LegendreEntry>,
    max_degree: i32,
}

impl Default for LegendreTable {
    fn default() -> Self {
        Self::new(0)
    }
}

impl LegendreTable {
    pub fn new(max_degree: i32) -> Self {
        tracing::debug!(max_degree, "initializing associated Legendre table");

        let seed = LegendreEntry {
            degree: 0,
            order: 0,
            polynomial: LegendrePolynomial::new([PolyTerm::new(0, 0, 1.0)]),
        };
        let mut table = Self {
            entries: vec![seed],
            max_degree: 0,
        };
        table.grow_to(max_degree);
        table
    }

    pub const fn max_degree(&self) -> i32 {
        self.max_degree
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in storage order: degree ascending, order descending within a degree.
    pub fn entries(&self) -> impl Iterator<Item = &LegendreEntry> {
        self.entries.iter()
    }

    /// Returns a copy of `P_l^m`, building missing degrees first.
    ///
    /// # Panics
    ///
    /// Panics when `degree < 0` or `|order| > degree`.
    pub fn get(&mut self, degree: i32, order: i32) -> LegendrePolynomial {
        assert!(degree >= 0, "associated Legendre table requires degree >= 0");
        assert!(
            order.unsigned_abs() <= degree.unsigned_abs(),
            "associated Legendre table requires |order| <= degree"
        );

        self.grow_to(degree);
        self.polynomial(degree, order).clone()
    }

    /// Like [`LegendreTable::get`], but reports an invalid pair as an input error.
    pub fn try_get(&mut self, degree: i32, order: i32) -> SphResult<LegendrePolynomial> {
        validate_degree_order(degree, order)?;
        Ok(self.get(degree, order))
    }

    pub fn grow_to(&mut self, degree: i32) {
        while degree > self.max_degree {
            self.grow_to_next_degree();
        }
    }

    fn index(degree: i32, order: i32) -> usize {
        (degree * degree + degree - order) as usize
    }

    // Read-only handle for the recurrences; also reaches entries of the degree
    // currently being built.
    fn polynomial(&self, degree: i32, order: i32) -> &LegendrePolynomial {
        let index = Self::index(degree, order);
        debug_assert!(
            index < self.entries.len(),
            "P_{degree}^{order} has not been built yet"
        );
        &self.entries[index].polynomial
    }

    fn push(&mut self, degree: i32, order: i32, polynomial: LegendrePolynomial) {
        debug_assert_eq!(self.entries.len(), Self::index(degree, order));
        tracing::trace!(degree, order, terms = polynomial.len(), "appended Legendre entry");
        self.entries.push(LegendreEntry {
            degree,
            order,
            polynomial,
        });
    }

    fn grow_to_next_degree(&mut self) {
        let l = self.max_degree;
        tracing::debug!(degree = l + 1, "building associated Legendre polynomials");

        for m in (-(l + 1)..=(l + 1)).rev() {
            let polynomial = if m == l + 1 {
                self.top_order(l)
            } else if m >= 0 {
                self.raised_degree(l, m)
            } else {
                self.negative_order(l, m)
            };
            self.push(l + 1, m, polynomial);
        }

        self.max_degree += 1;
    }

    // P_{l+1}^{l+1} = -(2l+1) sqrt(1-z^2) P_l^l
    fn top_order(&self, l: i32) -> LegendrePolynomial {
        let mut polynomial = self.polynomial(l, l).shifted_by_q();
        polynomial.scale(-f64::from(2 * l + 1));
        polynomial
    }

    // (l-m+1) P_{l+1}^m = (2l+1) z P_l^m - (l+m) P_{l-1}^m, with P_{l-1}^l = 0
    fn raised_degree(&self, l: i32, m: i32) -> LegendrePolynomial {
        let denominator = f64::from(l - m + 1);

        let mut polynomial = self.polynomial(l, m).shifted_by_z();
        polynomial.scale(f64::from(2 * l + 1) / denominator);

        if m < l {
            let mut lower = self.polynomial(l - 1, m).clone();
            lower.scale(-f64::from(l + m) / denominator);
            polynomial.add_polynomial(&lower);
        }

        polynomial
    }

    // P_{l+1}^{m} = (l+1+m)! / (l+1-m)! * P_{l+1}^{-m} for m < 0
    fn negative_order(&self, l: i32, m: i32) -> LegendrePolynomial {
        let mut polynomial = self.polynomial(l + 1, -m).clone();
        polynomial.scale(factorial_ratio((l + 1 + m) as u32, (l + 1 - m) as u32));
        polynomial
    }
}

#[cfg(test)]
mod tests {
    use super::LegendreTable;
    use crate::domain::SphErrorCategory;
    use crate::numerics::{factorial_ratio, within_tolerance};

    const SAMPLE_Z: [f64; 4] = [-0.7, 0.0, 0.3, 0.95];

    fn assert_close(label: &str, expected: f64, actual: f64) {
        assert!(
            within_tolerance(expected, actual, 1.0e-12, 1.0e-10, 1.0),
            "{label}: expected {expected:.16e}, got {actual:.16e}"
        );
    }

    #[test]
    fn seed_is_constant_one() {
        let mut table = LegendreTable::new(0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.max_degree(), 0);

        let p00 = table.get(0, 0);
        for z in [-1.0, -0.5, 0.0, 0.25, 1.0] {
            assert_eq!(p00.evaluate(z), 1.0);
        }
    }

    #[test]
    fn eager_construction_fills_every_degree() {
        let table = LegendreTable::new(4);
        assert_eq!(table.max_degree(), 4);
        assert_eq!(table.len(), 25);

        for (index, entry) in table.entries().enumerate() {
            let l = entry.degree;
            let m = entry.order;
            assert!(m.abs() <= l);
            assert_eq!(index as i32, l * l + l - m);
        }
    }

    #[test]
    fn get_grows_lazily_one_degree_at_a_time() {
        let mut table = LegendreTable::new(1);
        assert_eq!(table.len(), 4);

        table.get(3, -2);
        assert_eq!(table.max_degree(), 3);
        assert_eq!(table.len(), 16);

        table.get(2, 2);
        assert_eq!(table.max_degree(), 3);
    }

    #[test]
    fn values_at_unit_argument_match_known_limits() {
        let mut table = LegendreTable::new(8);
        for l in 0..=8 {
            for m in -l..=l {
                let value = table.get(l, m).evaluate(1.0);
                let expected = if m == 0 { 1.0 } else { 0.0 };
                assert_close(&format!("P_{l}^{m}(1)"), expected, value);
            }
        }
    }

    #[test]
    fn low_degrees_match_closed_forms() {
        let mut table = LegendreTable::new(3);
        for z in SAMPLE_Z {
            let q = (1.0 - z * z).sqrt();
            assert_close("P_1^0", z, table.get(1, 0).evaluate(z));
            assert_close("P_1^1", -q, table.get(1, 1).evaluate(z));
            assert_close("P_2^0", 0.5 * (3.0 * z * z - 1.0), table.get(2, 0).evaluate(z));
            assert_close("P_2^1", -3.0 * z * q, table.get(2, 1).evaluate(z));
            assert_close("P_2^2", 3.0 * q * q, table.get(2, 2).evaluate(z));
            assert_close(
                "P_3^1",
                -1.5 * (5.0 * z * z - 1.0) * q,
                table.get(3, 1).evaluate(z),
            );
            assert_close("P_3^3", -15.0 * q * q * q, table.get(3, 3).evaluate(z));
        }
    }

    #[test]
    fn polynomials_follow_degree_recurrence() {
        let mut table = LegendreTable::new(7);
        for l in 1..=6 {
            for m in 0..=l {
                let next = table.get(l + 1, m);
                let current = table.get(l, m);
                let previous = (m < l).then(|| table.get(l - 1, m));

                for z in SAMPLE_Z {
                    let lhs = f64::from(l - m + 1) * next.evaluate(z);
                    let lower = previous.as_ref().map_or(0.0, |p| p.evaluate(z));
                    let rhs = f64::from(2 * l + 1) * z * current.evaluate(z)
                        - f64::from(l + m) * lower;
                    assert_close(&format!("recurrence l={l} m={m} z={z}"), rhs, lhs);
                }
            }
        }
    }

    #[test]
    fn negative_orders_follow_factorial_relation() {
        let mut table = LegendreTable::new(5);
        for (l, m) in [(3, 1), (3, 3), (4, 2), (5, 4)] {
            let positive = table.get(l, m);
            let negative = table.get(l, -m);
            // P_l^{-m} * (l+m)! == P_l^m * (l-m)!
            let ratio = factorial_ratio((l - m) as u32, (l + m) as u32);
            for z in SAMPLE_Z {
                assert_close(
                    &format!("P_{l}^-{m}"),
                    ratio * positive.evaluate(z),
                    negative.evaluate(z),
                );
            }
        }

        let p31 = table.get(3, 1);
        let p3m1 = table.get(3, -1);
        for z in SAMPLE_Z {
            assert_close("gamma form", 2.0 * p31.evaluate(z), 24.0 * p3m1.evaluate(z));
        }
    }

    #[test]
    fn repeated_gets_return_equal_independent_copies() {
        let mut table = LegendreTable::new(2);
        let mut first = table.get(2, 1);
        let second = table.get(2, 1);
        assert_eq!(first, second);

        first.scale(100.0);
        assert_eq!(table.get(2, 1), second);
    }

    #[test]
    fn result_does_not_depend_on_growth_path() {
        let mut eager = LegendreTable::new(5);
        let mut lazy = LegendreTable::new(0);
        for m in -3..=3 {
            assert_eq!(eager.get(3, m), lazy.get(3, m));
        }
        assert_eq!(lazy.max_degree(), 3);
    }

    #[test]
    fn try_get_reports_invalid_pairs() {
        let mut table = LegendreTable::default();
        let error = table.try_get(2, 3).expect_err("order above degree");
        assert_eq!(error.category(), SphErrorCategory::InputValidationError);
        assert_eq!(table.max_degree(), 0);

        assert!(table.try_get(-1, 0).is_err());
        assert!(table.try_get(2, -2).is_ok());
    }

    #[test]
    #[should_panic(expected = "|order| <= degree")]
    fn get_panics_on_order_outside_degree() {
        LegendreTable::new(0).get(1, 2);
    }

    #[test]
    #[should_panic(expected = "degree >= 0")]
    fn get_panics_on_negative_degree() {
        LegendreTable::new(0).get(-1, 0);
    }
}
