pub mod errors;

pub use errors::{ExitStatus, SphError, SphErrorCategory, SphResult};

/// Checks that `(degree, order)` names a valid associated Legendre function,
/// i.e. `degree >= 0` and `|order| <= degree`.
pub fn validate_degree_order(degree: i32, order: i32) -> SphResult<()> {
    if degree < 0 {
        return Err(SphError::input_validation(
            "INPUT.LEGENDRE_DEGREE",
            format!("degree must be non-negative, got {degree}"),
        ));
    }

    if order.unsigned_abs() > degree.unsigned_abs() {
        return Err(SphError::input_validation(
            "INPUT.LEGENDRE_ORDER",
            format!("order {order} exceeds degree {degree} in magnitude"),
        ));
    }

    Ok(())
}
