mod commands;
mod helpers;

use clap::Parser;
use sphharm_core::domain::SphError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_sph_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            eprintln!("{}", diagnostic.fatal_exit_line());
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("sphharm".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            helpers::init_logging(cli.verbose);
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "sphharm",
    version,
    about = "Symbolic associated Legendre polynomials and spherical harmonics"
)]
struct Cli {
    /// Log table construction at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Print P_l^m as a symbolic polynomial, optionally evaluated at points
    Legendre(commands::LegendreArgs),
    /// Evaluate Y_l^m at a Cartesian point
    Harmonic(commands::HarmonicArgs),
    /// Build the Legendre table to a degree and print every entry
    Table(commands::TableArgs),
    /// Evaluate a JSON batch of spherical harmonic requests
    Batch(commands::BatchArgs),
}

impl CliCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Legendre(_) => "legendre",
            Self::Harmonic(_) => "harmonic",
            Self::Table(_) => "table",
            Self::Batch(_) => "batch",
        }
    }
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    tracing::debug!(command = command.name(), "dispatching subcommand");

    match command {
        CliCommand::Legendre(args) => commands::run_legendre_command(args),
        CliCommand::Harmonic(args) => commands::run_harmonic_command(args),
        CliCommand::Table(args) => commands::run_table_command(args),
        CliCommand::Batch(args) => commands::run_batch_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(SphError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn as_sph_error(&self) -> SphError {
        match self {
            Self::Usage(message) => SphError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => SphError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
