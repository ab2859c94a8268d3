//! Hex framing of encoded transport messages
//!
//! Lets encoded messages pass through text-only channels (terminals,
//! logs, fixtures). The hex text is exactly the wire bytes; nothing is
//! added around them.

use crate::error_ext::ErrorContext;
use mct_domain::error::Result;
use mct_domain::transport::{Readable, Writeable, from_bytes, to_bytes};
use tracing::debug;

/// Encode a message and render its bytes as lowercase hex
pub fn encode_hex<T: Writeable + ?Sized>(value: &T) -> Result<String> {
    let bytes = to_bytes(value)?;
    debug!(bytes = bytes.len(), "Encoded message");
    Ok(hex::encode(bytes))
}

/// Parse hex text and decode exactly one message from it
///
/// Surrounding whitespace is ignored. Malformed hex is an invalid argument;
/// well-formed hex holding a bad message is stream corruption.
pub fn decode_hex<T: Readable>(text: &str) -> Result<T> {
    let bytes = hex::decode(text.trim()).argument_context("Invalid hex message")?;
    debug!(bytes = bytes.len(), "Decoding message");
    from_bytes(&bytes)
}

/// Read hex text from a file and decode one message from it
pub fn decode_hex_file<T: Readable>(path: &std::path::Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .io_context(format!("Failed to read message file {}", path.display()))?;
    decode_hex(&text)
}
