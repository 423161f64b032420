//! Associated Legendre functions `P_l^m(z)` kept as explicit symbolic sums of
//! `fac * z^a * (1-z^2)^(b/2)` terms.
//!
//! [`LegendreTable`] builds every `(l, m)` pair up to a degree from `P_0^0 = 1`
//! with three recurrences and caches the results; callers receive clones of the
//! cached [`LegendrePolynomial`] values.

mod polynomial;
mod table;
mod term;

pub use polynomial::LegendrePolynomial;
pub use table::{LegendreEntry, LegendreTable};
pub use term::PolyTerm;
