use super::CliError;
use anyhow::Context;
use serde::Serialize;
use sphharm_core::domain::SphError;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub(super) fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when `run` is called repeatedly in-process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(super) fn check_legendre_argument(z: f64) -> Result<f64, CliError> {
    if (-1.0..=1.0).contains(&z) {
        Ok(z)
    } else {
        Err(CliError::Compute(SphError::input_validation(
            "INPUT.LEGENDRE_ARGUMENT",
            format!("Legendre argument must lie in [-1, 1], got {z}"),
        )))
    }
}

pub(super) fn write_json_output<T: Serialize>(
    value: &T,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to serialize batch results")?;

    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory '{}'", parent.display())
                })?;
            }
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write results '{}'", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
