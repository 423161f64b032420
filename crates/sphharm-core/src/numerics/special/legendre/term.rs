use std::fmt::{Display, Formatter};

/// One atom `fac * z^zexp * (1-z^2)^(qexp/2)` of a Legendre polynomial.
///
/// The exponent pair `(zexp, qexp)` identifies the term; only `fac` changes
/// once a term exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyTerm {
    zexp: u32,
    qexp: u32,
    fac: f64,
}

impl PolyTerm {
    pub fn new(zexp: u32, qexp: u32, fac: f64) -> Self {
        Self { zexp, qexp, fac }
    }

    pub const fn zexp(&self) -> u32 {
        self.zexp
    }

    pub const fn qexp(&self) -> u32 {
        self.qexp
    }

    pub const fn fac(&self) -> f64 {
        self.fac
    }

    pub(crate) fn same_exponents(&self, other: &Self) -> bool {
        self.zexp == other.zexp && self.qexp == other.qexp
    }

    pub fn scale(&mut self, factor: f64) {
        self.fac *= factor;
    }

    pub fn add(&mut self, amount: f64) {
        self.fac += amount;
    }

    pub fn shifted_by_z(&self) -> Self {
        Self::new(self.zexp + 1, self.qexp, self.fac)
    }

    pub fn shifted_by_q(&self) -> Self {
        Self::new(self.zexp, self.qexp + 1, self.fac)
    }

    /// Evaluates the term at `z`. Only meaningful for `z` in `[-1, 1]`.
    pub fn evaluate(&self, z: f64) -> f64 {
        let root = (1.0 - z * z).sqrt();
        self.fac * root.powi(self.qexp as i32) * z.powi(self.zexp as i32)
    }
}

impl Display for PolyTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.qexp > 0 {
            if self.qexp % 2 == 0 {
                write!(f, "(1-z^2)^{} * ", self.qexp / 2)?;
            } else {
                write!(f, "(1-z^2)^{}/2 * ", self.qexp)?;
            }
        }

        if self.zexp > 0 {
            write!(f, "z^{} * ", self.zexp)?;
        }

        write!(f, "{}", self.fac)
    }
}
