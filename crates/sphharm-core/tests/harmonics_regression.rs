use num_complex::Complex64;
use serde::Deserialize;
use sphharm_core::{
    CartesianHarmonicInput, LegendreTable, SphericalHarmonic, SphericalHarmonicsApi,
};
use std::fs;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReferenceFixtures {
    legendre_cases: Vec<LegendreCase>,
    harmonics_cases: Vec<HarmonicsCase>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ComplexValue {
    re: f64,
    im: f64,
}

impl ComplexValue {
    fn as_complex(self) -> Complex64 {
        Complex64::new(self.re, self.im)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegendreCase {
    id: String,
    degree: i32,
    order: i32,
    z: f64,
    expected: f64,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HarmonicsCase {
    id: String,
    degree: i32,
    order: i32,
    point: [f64; 3],
    expected: ComplexValue,
    abs_tol: f64,
    rel_tol: f64,
}

#[test]
fn legendre_fixtures_match_reference_outputs() {
    let fixtures = load_fixtures();
    let mut table = LegendreTable::default();

    for case in fixtures.legendre_cases {
        let actual = table.get(case.degree, case.order).evaluate(case.z);
        assert_scalar_close(&case.id, case.expected, actual, case.abs_tol, case.rel_tol);
    }
}

#[test]
fn harmonics_fixtures_match_reference_outputs() {
    let fixtures = load_fixtures();
    let mut harmonic = SphericalHarmonic::new(2);

    for case in fixtures.harmonics_cases {
        let input = CartesianHarmonicInput::new(case.degree, case.order, case.point);
        let actual = harmonic.y_lm(input);
        assert_complex_close(
            &case.id,
            case.expected.as_complex(),
            actual,
            case.abs_tol,
            case.rel_tol,
        );
    }
}

#[test]
fn shared_and_fresh_evaluators_agree() {
    let fixtures = load_fixtures();
    let mut shared = SphericalHarmonic::new(5);

    for case in fixtures.harmonics_cases.iter().rev() {
        let mut fresh = SphericalHarmonic::default();
        let [x0, x1, x2] = case.point;
        assert_eq!(
            shared.evaluate(case.degree, case.order, x0, x1, x2),
            fresh.evaluate(case.degree, case.order, x0, x1, x2),
            "{}",
            case.id
        );
    }
}

fn load_fixtures() -> ReferenceFixtures {
    let fixture_path = workspace_root().join("tasks/harmonics-reference-values.json");
    let source = fs::read_to_string(&fixture_path).unwrap_or_else(|error| {
        panic!(
            "fixture file {} should be readable: {}",
            fixture_path.display(),
            error
        )
    });

    serde_json::from_str(&source).unwrap_or_else(|error| {
        panic!(
            "fixture file {} should parse as JSON: {}",
            fixture_path.display(),
            error
        )
    })
}

fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
    let abs_diff = (actual - expected).abs();
    let rel_diff = abs_diff / expected.abs().max(1.0);

    assert!(
        abs_diff <= abs_tol || rel_diff <= rel_tol,
        "{} expected={:.15e} actual={:.15e} abs_diff={:.15e} rel_diff={:.15e}",
        label,
        expected,
        actual,
        abs_diff,
        rel_diff,
    );
}

fn assert_complex_close(
    label: &str,
    expected: Complex64,
    actual: Complex64,
    abs_tol: f64,
    rel_tol: f64,
) {
    let abs_diff = (actual - expected).norm();
    let rel_diff = abs_diff / expected.norm().max(1.0);

    assert!(
        abs_diff <= abs_tol || rel_diff <= rel_tol,
        "{} expected=({:.15e},{:.15e}) actual=({:.15e},{:.15e}) abs_diff={:.15e} rel_diff={:.15e}",
        label,
        expected.re,
        expected.im,
        actual.re,
        actual.im,
        abs_diff,
        rel_diff,
    );
}
