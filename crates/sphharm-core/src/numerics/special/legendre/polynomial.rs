use super::term::PolyTerm;
use crate::numerics::stable_sum;
use std::fmt::{Display, Formatter};

/// A sum of [`PolyTerm`]s with at most one term per `(zexp, qexp)` pair.
///
/// Equality ignores term order: two polynomials are equal when they hold the
/// same exponent pairs with the same factors.
#[derive(Debug, Clone, Default)]
pub struct LegendrePolynomial {
    terms: Vec<PolyTerm>,
}

impl LegendrePolynomial {
    pub fn new(terms: impl IntoIterator<Item = PolyTerm>) -> Self {
        let mut polynomial = Self::zero();
        for term in terms {
            polynomial.add_term(term);
        }
        polynomial
    }

    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn terms(&self) -> &[PolyTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Merges `term` into an existing term with the same exponents, or appends it.
    pub fn add_term(&mut self, term: PolyTerm) {
        match self
            .terms
            .iter_mut()
            .find(|existing| existing.same_exponents(&term))
        {
            Some(existing) => existing.add(term.fac()),
            None => self.terms.push(term),
        }
    }

    pub fn add_polynomial(&mut self, other: &LegendrePolynomial) {
        for term in &other.terms {
            self.add_term(*term);
        }
    }

    pub fn scale(&mut self, factor: f64) {
        for term in &mut self.terms {
            term.scale(factor);
        }
    }

    pub fn shifted_by_z(&self) -> Self {
        Self::new(self.terms.iter().map(PolyTerm::shifted_by_z))
    }

    pub fn shifted_by_q(&self) -> Self {
        Self::new(self.terms.iter().map(PolyTerm::shifted_by_q))
    }

    pub fn evaluate(&self, z: f64) -> f64 {
        stable_sum(self.terms.iter().map(|term| term.evaluate(z)))
    }
}

impl PartialEq for LegendrePolynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().all(|term| {
                other
                    .terms
                    .iter()
                    .any(|candidate| candidate.same_exponents(term) && candidate.fac() == term.fac())
            })
    }
}

impl Display for LegendrePolynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            let prefix = if index == 0 { "   " } else { " + " };
            writeln!(f, "{prefix}{term}")?;
        }
        Ok(())
    }
}
