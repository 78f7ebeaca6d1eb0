// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: the report contract is printed on stdout, failures on stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

mod cli;
mod logging;

fn main() -> ExitCode {
    match cli::run() {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            cli::RunStatus::Failed.into()
        }
    }
}
