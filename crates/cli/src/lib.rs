// crates/cli/src/lib.rs
//! Command-line front end for the MD5 demonstration.

use std::ffi::OsString;
use std::io::Write;

use checksums::ChecksumError;
use clap::Parser;
use tracing::error;

pub mod driver;
pub mod exit;
pub mod options;
pub mod version;

pub use driver::{DriverConfig, DriverError, DriverReport, DriverState, run_driver};
pub use exit::{ExitCode, exit_code_from_driver_error, exit_code_from_error_kind};
pub use options::{DemoOpts, cli_command};

pub fn parse_args<I, T>(args: I) -> Result<DemoOpts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    DemoOpts::try_parse_from(args)
}

/// Runs the digest driver with settings taken from `opts`, writing the
/// program output to `out`.
pub fn run<W: Write>(opts: &DemoOpts, out: &mut W) -> ExitCode {
    let cfg = DriverConfig::builder().hex_style(opts.hex_style()).build();
    match run_driver(&cfg, out) {
        Ok(_) => ExitCode::Ok,
        Err(e) => {
            // The lookup failure is already reported on stdout.
            if !matches!(
                e,
                DriverError::Checksum(ChecksumError::AlgorithmNotFound(_))
            ) {
                error!("{e}");
            }
            exit_code_from_driver_error(&e)
        }
    }
}
