// crates/logging/src/lib.rs

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod flags;
mod formatter;
mod json_format;

pub use flags::{LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::DemoFormatter;
pub use json_format::JsonFormatter;

pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Builds a subscriber that writes to `writer` instead of stderr.
pub fn subscriber_with_writer<W>(
    cfg: SubscriberConfig,
    writer: W,
) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let SubscriberConfig {
        format,
        verbose,
        quiet,
        colored,
        timestamps,
    } = cfg;
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let base = tracing_fmt::layer().with_writer(writer).with_ansi(colored);
    let fmt_layer = match format {
        LogFormat::Json => base.event_format(JsonFormatter::new(timestamps)).boxed(),
        LogFormat::Text => base.event_format(DemoFormatter::new(timestamps)).boxed(),
    };

    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);
    Ok(Box::new(registry))
}

pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    subscriber_with_writer(cfg, io::stderr)
}

pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
