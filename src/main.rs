// src/main.rs
use std::io;
use std::process::ExitCode;

use md5_demo_cli::{exit_code_from_error_kind, parse_args};

fn main() -> ExitCode {
    let opts = match parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => {
            let code = exit_code_from_error_kind(e.kind());
            let _ = e.print();
            return code.into();
        }
    };
    if let Err(e) = logging::init(opts.subscriber_config()) {
        eprintln!("md5-demo: logging disabled: {e}");
    }
    tracing::debug!(?opts, "parsed options");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    md5_demo_cli::run(&opts, &mut out).into()
}
