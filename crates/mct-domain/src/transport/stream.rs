//! Stream cursors
//!
//! [`StreamOutput`] and [`StreamInput`] wrap any [`Write`]/[`Read`] and
//! expose the primitive encodings every transport message is built from:
//!
//! | Primitive | Encoding |
//! |-----------|----------|
//! | bool | one byte, `0` or `1` |
//! | vint | 7 bits per byte, low group first, high bit marks continuation |
//! | long | eight bytes, big-endian |
//! | string | vint byte length followed by UTF-8 bytes |
//! | string array | vint count followed by each string |
//!
//! A read that runs out of bytes fails with [`Error::StreamCorrupted`];
//! any other I/O failure is surfaced as-is.

use crate::constants::{MAX_ARRAY_LENGTH, PREALLOC_LIMIT, VINT_MAX_BYTES, WIRE_FALSE, WIRE_TRUE};
use crate::error::{Error, Result};
use std::io::{ErrorKind, Read, Write};

/// Write cursor over a byte sink
#[derive(Debug)]
pub struct StreamOutput<W> {
    inner: W,
    position: u64,
}

impl<W: Write> StreamOutput<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes written so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    /// Write a single byte
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Write a boolean as one byte
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_byte(if value { WIRE_TRUE } else { WIRE_FALSE })
    }

    /// Write an unsigned variable-length integer
    pub fn write_vint(&mut self, mut value: u32) -> Result<()> {
        let mut buf = [0u8; VINT_MAX_BYTES];
        let mut len = 0;
        while value & !0x7F != 0 {
            buf[len] = (value & 0x7F) as u8 | 0x80;
            value >>= 7;
            len += 1;
        }
        buf[len] = value as u8;
        self.write_bytes(&buf[..=len])
    }

    /// Write a signed 64-bit integer, big-endian
    pub fn write_long(&mut self, value: i64) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_length(value.len())?;
        self.write_bytes(value.as_bytes())
    }

    /// Write a count followed by each string in order
    pub fn write_string_array<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        self.write_length(values.len())?;
        for value in values {
            self.write_string(value.as_ref())?;
        }
        Ok(())
    }

    fn write_length(&mut self, len: usize) -> Result<()> {
        let len = u32::try_from(len)
            .ok()
            .filter(|len| *len <= MAX_ARRAY_LENGTH)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "length {len} exceeds the wire limit of {MAX_ARRAY_LENGTH}"
                ))
            })?;
        self.write_vint(len)
    }
}

/// Read cursor over a byte source
#[derive(Debug)]
pub struct StreamInput<R> {
    inner: R,
    position: u64,
}

impl<R: Read> StreamInput<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read a single byte
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf, "byte")?;
        Ok(buf[0])
    }

    /// Read a boolean written by [`StreamOutput::write_bool`]
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_byte()? {
            WIRE_FALSE => Ok(false),
            WIRE_TRUE => Ok(true),
            other => Err(Error::stream_corrupted(format!(
                "unexpected byte [0x{other:02x}] for boolean at offset {}",
                self.position - 1
            ))),
        }
    }

    /// Read an unsigned variable-length integer
    pub fn read_vint(&mut self) -> Result<u32> {
        let mut value: u32 = 0;
        for index in 0..VINT_MAX_BYTES {
            let byte = self.read_byte()?;
            // Only the low four bits of the fifth byte fit in 32 bits.
            if index == VINT_MAX_BYTES - 1 && byte & 0xF0 != 0 {
                return Err(Error::stream_corrupted(format!(
                    "invalid vint: fifth byte [0x{byte:02x}] overflows 32 bits"
                )));
            }
            value |= u32::from(byte & 0x7F) << (7 * index);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::stream_corrupted("invalid vint: too many bytes"))
    }

    /// Read a signed 64-bit integer, big-endian
    pub fn read_long(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, "long")?;
        Ok(i64::from_be_bytes(buf))
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_length("string")?;
        let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        let read = self.inner.by_ref().take(len as u64).read_to_end(&mut bytes)?;
        self.position += read as u64;
        if read < len {
            return Err(Error::stream_corrupted(format!(
                "unexpected end of stream: string declared {len} bytes but only {read} remain"
            )));
        }
        String::from_utf8(bytes).map_err(|err| {
            Error::stream_corrupted(format!("string is not valid UTF-8: {err}"))
        })
    }

    /// Read a count followed by that many elements using `read_element`
    pub fn read_list<T, F>(&mut self, mut read_element: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let len = self.read_length("list")?;
        let mut items = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            items.push(read_element(self)?);
        }
        Ok(items)
    }

    /// Read a sequence written by [`StreamOutput::write_string_array`]
    pub fn read_string_array(&mut self) -> Result<Vec<String>> {
        self.read_list(Self::read_string)
    }

    fn read_length(&mut self, what: &str) -> Result<usize> {
        let len = self.read_vint()?;
        if len > MAX_ARRAY_LENGTH {
            return Err(Error::stream_corrupted(format!(
                "{what} length {len} exceeds the wire limit of {MAX_ARRAY_LENGTH}"
            )));
        }
        usize::try_from(len).map_err(|_| {
            Error::stream_corrupted(format!("{what} length {len} does not fit in memory"))
        })
    }

    fn fill(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                Err(Error::stream_corrupted(format!(
                    "unexpected end of stream reading {what} at offset {}",
                    self.position
                )))
            }
            Err(err) => Err(err.into()),
        }
    }
}
