// crates/cli/src/options.rs

use checksums::HexStyle;
use clap::{ArgAction, CommandFactory, Parser};
use logging::{LogFormat, SubscriberConfig};

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "md5-demo",
    about = "Print the digest library version and the MD5 of two fixed messages",
    long_about = None,
    disable_version_flag = true
)]
pub struct DemoOpts {
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
    #[arg(
        long = "log-format",
        value_enum,
        default_value_t = LogFormat::Text,
        value_name = "FORMAT",
        help_heading = "Output"
    )]
    pub log_format: LogFormat,
    #[arg(long = "no-color", help_heading = "Output")]
    pub no_color: bool,
    #[arg(long = "log-timestamps", help_heading = "Output")]
    pub log_timestamps: bool,
    #[arg(
        long = "zero-pad",
        help = "render every digest byte as two hex digits",
        help_heading = "Digest"
    )]
    pub zero_pad: bool,
}

impl DemoOpts {
    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .colored(!self.no_color)
            .timestamps(self.log_timestamps)
            .build()
    }

    pub fn hex_style(&self) -> HexStyle {
        if self.zero_pad {
            HexStyle::Padded
        } else {
            HexStyle::Unpadded
        }
    }
}

pub fn cli_command() -> clap::Command {
    DemoOpts::command()
}
