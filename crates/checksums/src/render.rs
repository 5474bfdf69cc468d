// crates/checksums/src/render.rs

use std::fmt::Write;

/// How digest bytes are rendered as hexadecimal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexStyle {
    /// Minimal-width lowercase hex per byte: `0x0a` renders as `a`.
    #[default]
    Unpadded,
    /// Two lowercase hex digits per byte.
    Padded,
}

pub fn format_hex(bytes: &[u8], style: HexStyle) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = match style {
            HexStyle::Unpadded => write!(out, "{b:x}"),
            HexStyle::Padded => write!(out, "{b:02x}"),
        };
    }
    out
}
