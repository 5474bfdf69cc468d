// crates/cli/src/driver.rs

use std::io::{self, Write};

use checksums::{
    ChecksumError, DigestContext, DigestOutput, DigestRegistry, HexStyle, format_hex,
};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::version::version_banner;

pub const DEFAULT_ALGORITHM: &str = "md5";
pub const FIRST_MESSAGE: &[u8] = b"Test Message\n";
pub const SECOND_MESSAGE: &[u8] = b"Hello World\n";
/// Reference digest of the two messages, as the reference output prints it.
pub const EXPECTED_DIGEST: &str = "ce73931d2b3da6e6bf18af27494c6cd";
pub const UNKNOWN_DIGEST_MESSAGE: &str = "Unknown message digest";

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Start,
    AlgorithmResolved,
    ContextCreated,
    /// Input buffer at this index has been fed.
    BufferFed(usize),
    Finalized,
    Printed,
    Terminated,
}

#[derive(Clone, Debug)]
pub struct DriverConfig {
    algorithm: String,
    inputs: Vec<Vec<u8>>,
    hex_style: HexStyle,
    expected: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            inputs: vec![FIRST_MESSAGE.to_vec(), SECOND_MESSAGE.to_vec()],
            hex_style: HexStyle::Unpadded,
            expected: EXPECTED_DIGEST.to_string(),
        }
    }
}

impl DriverConfig {
    pub fn builder() -> DriverConfigBuilder {
        DriverConfigBuilder::default()
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn inputs(&self) -> &[Vec<u8>] {
        &self.inputs
    }

    pub fn hex_style(&self) -> HexStyle {
        self.hex_style
    }
}

#[derive(Debug, Default)]
#[must_use]
pub struct DriverConfigBuilder {
    cfg: DriverConfig,
}

impl DriverConfigBuilder {
    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.cfg.algorithm = name.into();
        self
    }

    pub fn inputs<I, B>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        self.cfg.inputs = inputs.into_iter().map(|b| b.as_ref().to_vec()).collect();
        self
    }

    pub fn hex_style(mut self, style: HexStyle) -> Self {
        self.cfg.hex_style = style;
        self
    }

    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.cfg.expected = expected.into();
        self
    }

    pub fn build(self) -> DriverConfig {
        self.cfg
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct DriverReport {
    pub digest: DigestOutput,
    pub rendered: String,
    pub states: Vec<DriverState>,
}

struct StateLog {
    states: Vec<DriverState>,
}

impl StateLog {
    fn new() -> Self {
        Self {
            states: vec![DriverState::Start],
        }
    }

    fn advance(&mut self, next: DriverState) {
        debug!(target: "driver", from = ?self.current(), to = ?next, "state");
        self.states.push(next);
    }

    fn current(&self) -> DriverState {
        self.states
            .last()
            .copied()
            .unwrap_or(DriverState::Start)
    }
}

/// Prints the banner, hashes the configured inputs and prints the result.
///
/// Output written to `out`:
///
/// ```text
/// <library version>
/// Expected : <expected literal>
/// Generate : <digest hex>
/// ```
///
/// The last line carries no trailing newline. If the algorithm name does not
/// resolve, only the banner and `Unknown message digest` are written and
/// [`ChecksumError::AlgorithmNotFound`] is returned. The name is resolved
/// before any digest context exists.
pub fn run_driver<W: Write>(cfg: &DriverConfig, out: &mut W) -> Result<DriverReport> {
    let mut log = StateLog::new();
    writeln!(out, "{}", version_banner())?;

    let registry = DigestRegistry::load();
    let handle = match registry.digest_by_name(&cfg.algorithm) {
        Ok(handle) => handle,
        Err(err) => {
            writeln!(out, "{UNKNOWN_DIGEST_MESSAGE}")?;
            out.flush()?;
            log.advance(DriverState::Terminated);
            info!(target: "driver", algorithm = %cfg.algorithm, "digest lookup failed");
            return Err(err.into());
        }
    };
    log.advance(DriverState::AlgorithmResolved);
    info!(
        target: "driver",
        algorithm = handle.registered_as(),
        size = handle.output_size(),
        "digest resolved"
    );

    let mut ctx = DigestContext::new(handle);
    log.advance(DriverState::ContextCreated);
    for (idx, input) in cfg.inputs.iter().enumerate() {
        ctx.update(input);
        trace!(target: "driver", idx, len = input.len(), "fed buffer");
        log.advance(DriverState::BufferFed(idx));
    }
    let digest = ctx.finalize()?;
    log.advance(DriverState::Finalized);

    let rendered = format_hex(digest.as_bytes(), cfg.hex_style);
    write!(
        out,
        "Expected : {}\nGenerate : {}",
        cfg.expected, rendered
    )?;
    out.flush()?;
    log.advance(DriverState::Printed);
    info!(target: "driver", digest = %rendered, len = digest.len(), "digest computed");

    log.advance(DriverState::Terminated);
    Ok(DriverReport {
        digest,
        rendered,
        states: log.states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(cfg: &DriverConfig) -> (Result<DriverReport>, String) {
        let mut out = Vec::new();
        let res = run_driver(cfg, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_run_prints_three_lines() {
        let (res, out) = run_to_string(&DriverConfig::default());
        let report = res.unwrap();
        assert_eq!(
            out,
            format!(
                "{}\nExpected : ce73931d2b3da6e6bf18af27494c6cd\nGenerate : ce73931d2b3da6e6bf18af27494c6cd",
                checksums::VERSION_TEXT
            )
        );
        assert_eq!(report.rendered, EXPECTED_DIGEST);
        assert_eq!(report.digest.len(), 16);
    }

    #[test]
    fn states_follow_linear_order() {
        let (res, _) = run_to_string(&DriverConfig::default());
        assert_eq!(
            res.unwrap().states,
            vec![
                DriverState::Start,
                DriverState::AlgorithmResolved,
                DriverState::ContextCreated,
                DriverState::BufferFed(0),
                DriverState::BufferFed(1),
                DriverState::Finalized,
                DriverState::Printed,
                DriverState::Terminated,
            ]
        );
    }

    #[test]
    fn padded_style_keeps_leading_zero() {
        let cfg = DriverConfig::builder().hex_style(HexStyle::Padded).build();
        let (res, out) = run_to_string(&cfg);
        assert_eq!(res.unwrap().rendered, "ce73931d2b3da6e60bf18af27494c6cd");
        assert!(out.ends_with("Generate : ce73931d2b3da6e60bf18af27494c6cd"));
    }

    #[test]
    fn unknown_algorithm_stops_before_digest() {
        let cfg = DriverConfig::builder().algorithm("md6").build();
        let (res, out) = run_to_string(&cfg);
        match res {
            Err(DriverError::Checksum(ChecksumError::AlgorithmNotFound(name))) => {
                assert_eq!(name, "md6")
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(
            out,
            format!("{}\nUnknown message digest\n", checksums::VERSION_TEXT)
        );
        assert!(!out.contains("Generate"));
    }

    #[test]
    fn swapped_inputs_change_digest() {
        let cfg = DriverConfig::builder()
            .inputs([SECOND_MESSAGE, FIRST_MESSAGE])
            .hex_style(HexStyle::Padded)
            .build();
        let (res, _) = run_to_string(&cfg);
        assert_eq!(res.unwrap().rendered, "60833b315d7561eb19d220cb271430de");
    }

    #[test]
    fn builder_defaults() {
        let cfg = DriverConfig::builder().build();
        assert_eq!(cfg.algorithm(), "md5");
        assert_eq!(cfg.inputs().len(), 2);
        assert_eq!(cfg.inputs()[0], FIRST_MESSAGE);
        assert_eq!(cfg.hex_style(), HexStyle::Unpadded);
    }
}
