//! Wire traits
//!
//! Types that travel between nodes implement [`Writeable`] and
//! [`Readable`]. The two are kept separate so that envelope and payload
//! codecs compose instead of inheriting from one another.

use super::stream::{StreamInput, StreamOutput};
use crate::error::{Error, Result};
use std::io::{Read, Write};

/// A value that can be written to a [`StreamOutput`]
pub trait Writeable {
    /// Write this value at the current cursor position
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()>;
}

/// A value that can be reconstructed from a [`StreamInput`]
pub trait Readable: Sized {
    /// Read a value starting at the current cursor position
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self>;
}

/// Encode a value into a fresh byte buffer
pub fn to_bytes<T: Writeable + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut out = StreamOutput::new(Vec::new());
    value.write_to(&mut out)?;
    Ok(out.into_inner())
}

/// Decode a value that must occupy `bytes` exactly
///
/// Trailing bytes are reported as corruption.
pub fn from_bytes<T: Readable>(bytes: &[u8]) -> Result<T> {
    let mut input = StreamInput::new(bytes);
    let value = T::read_from(&mut input)?;
    let consumed = input.position();
    let total = bytes.len() as u64;
    if consumed != total {
        return Err(Error::stream_corrupted(format!(
            "{} trailing bytes after message of {consumed} bytes",
            total - consumed
        )));
    }
    Ok(value)
}
