use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use speckit_validator::{ValidationConfig, output, validate_paths};

use crate::logging;

pub const USAGE: &str = "Usage: speckit-validate <paths...>";

#[derive(Parser, Debug)]
#[command(
    name = "speckit-validate",
    version,
    about = "Check spec.md, plan.md and tasks.md against the spec kit heading and format rules"
)]
pub struct Cli {
    /// Files to validate; names other than spec.md, plan.md and tasks.md are skipped.
    /// Arguments starting with `-` that are not known options are taken as paths
    #[arg(allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Maximum size of a single file in bytes [default: unlimited]
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
    Usage,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Passed => Self::SUCCESS,
            RunStatus::Failed => Self::from(1_u8),
            RunStatus::Usage => Self::from(2_u8),
        }
    }
}

impl Cli {
    fn validation_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig::new(self.paths.clone());
        config.max_file_size = self.max_file_size;
        config
    }
}

/// Parse arguments, install logging and run the validation.
///
/// # Errors
///
/// Returns an error if a recognized file cannot be read or stdout cannot be written.
pub fn run() -> anyhow::Result<RunStatus> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Validate the requested files and write the report to `out`.
fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<RunStatus> {
    if cli.paths.is_empty() {
        writeln!(out, "{USAGE}")?;
        return Ok(RunStatus::Usage);
    }

    let report = validate_paths(&cli.validation_config()).context("validation aborted")?;

    match cli.format {
        OutputFormat::Human => output::write_human(&report, out)?,
        OutputFormat::Json => output::write_json(&report, out)?,
    }
    out.flush()?;

    Ok(if report.ok {
        RunStatus::Passed
    } else {
        RunStatus::Failed
    })
}
