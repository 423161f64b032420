use super::CliError;
use super::helpers::{check_legendre_argument, write_json_output};
use anyhow::Context;
use sphharm_core::domain::{SphError, validate_degree_order};
use sphharm_core::numerics::{LegendreTable, SphericalHarmonic, format_numeric};
use sphharm_core::load_batch_config;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct LegendreArgs {
    /// Degree l
    #[arg(long, allow_negative_numbers = true)]
    degree: i32,

    /// Order m, with |m| <= l
    #[arg(long, allow_negative_numbers = true)]
    order: i32,

    /// Evaluate the polynomial at this z in [-1, 1] (repeatable)
    #[arg(long = "at", value_name = "Z", allow_negative_numbers = true)]
    at: Vec<f64>,
}

#[derive(clap::Args)]
pub(super) struct HarmonicArgs {
    /// Degree l
    #[arg(long, allow_negative_numbers = true)]
    degree: i32,

    /// Order m, with |m| <= l
    #[arg(long, allow_negative_numbers = true)]
    order: i32,

    /// Cartesian point x0 x1 x2
    #[arg(
        long,
        num_args = 3,
        value_names = ["X0", "X1", "X2"],
        allow_negative_numbers = true
    )]
    point: Vec<f64>,
}

#[derive(clap::Args)]
pub(super) struct TableArgs {
    /// Highest degree to build
    #[arg(long, allow_negative_numbers = true)]
    max_degree: i32,
}

#[derive(clap::Args)]
pub(super) struct BatchArgs {
    /// JSON batch config path
    #[arg(long)]
    input: PathBuf,

    /// JSON results path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(super) fn run_legendre_command(args: LegendreArgs) -> Result<i32, CliError> {
    let mut table = LegendreTable::default();
    let polynomial = table
        .try_get(args.degree, args.order)
        .map_err(CliError::Compute)?;
    let arguments = args
        .at
        .iter()
        .map(|z| check_legendre_argument(*z))
        .collect::<Result<Vec<_>, _>>()?;

    println!("P({},{}) =", args.degree, args.order);
    print!("{polynomial}");

    for z in arguments {
        println!(
            "P({},{})({}) = {}",
            args.degree,
            args.order,
            z,
            format_numeric(polynomial.evaluate(z))
        );
    }

    Ok(0)
}

pub(super) fn run_harmonic_command(args: HarmonicArgs) -> Result<i32, CliError> {
    let point: [f64; 3] = args.point.as_slice().try_into().map_err(|_| {
        CliError::Usage(format!(
            "--point expects exactly 3 values, got {}",
            args.point.len()
        ))
    })?;

    let mut harmonic = SphericalHarmonic::default();
    let value = harmonic
        .try_evaluate(args.degree, args.order, point)
        .map_err(CliError::Compute)?;

    println!(
        "Y({},{})({}, {}, {}) = ({}, {})",
        args.degree,
        args.order,
        point[0],
        point[1],
        point[2],
        format_numeric(value.re),
        format_numeric(value.im)
    );

    Ok(0)
}

pub(super) fn run_table_command(args: TableArgs) -> Result<i32, CliError> {
    validate_degree_order(args.max_degree, 0).map_err(CliError::Compute)?;

    let table = LegendreTable::new(args.max_degree);
    for entry in table.entries() {
        println!("l,m = {},{}", entry.degree, entry.order);
        println!("{}", entry.polynomial);
    }

    Ok(0)
}

pub(super) fn run_batch_command(args: BatchArgs) -> Result<i32, CliError> {
    let config = load_batch_config(&args.input)
        .with_context(|| format!("batch input '{}'", args.input.display()))?;
    if config.max_degree < 0 {
        return Err(CliError::Compute(SphError::input_validation(
            "INPUT.BATCH_MAX_DEGREE",
            format!("maxDegree must be non-negative, got {}", config.max_degree),
        )));
    }

    let results = config.evaluate().map_err(CliError::Compute)?;
    write_json_output(&results, args.output.as_deref())?;

    if let Some(output) = &args.output {
        println!(
            "Wrote {} spherical harmonic values to {}",
            results.len(),
            output.display()
        );
    }

    Ok(0)
}
