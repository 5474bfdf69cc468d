// crates/cli/src/exit.rs

use checksums::ChecksumError;

use crate::driver::DriverError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    UnknownDigest = 1,
    SyntaxOrUsage = 2,
    DigestFailed = 3,
    FileIo = 11,
}

impl ExitCode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp | DisplayVersion => ExitCode::Ok,
        Io | Format => ExitCode::FileIo,
        _ => ExitCode::SyntaxOrUsage,
    }
}

pub fn exit_code_from_driver_error(e: &DriverError) -> ExitCode {
    match e {
        DriverError::Checksum(ChecksumError::AlgorithmNotFound(_)) => ExitCode::UnknownDigest,
        DriverError::Checksum(ChecksumError::OutputOverflow { .. }) => ExitCode::DigestFailed,
        DriverError::Io(_) => ExitCode::FileIo,
    }
}
