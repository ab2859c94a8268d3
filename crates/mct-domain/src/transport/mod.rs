//! Transport layer primitives
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`stream`] | Byte cursors with the primitive encodings |
//! | [`wire`] | [`Writeable`] / [`Readable`] traits and byte helpers |
//! | [`envelope`] | Transport header and the [`Envelope`] wrapper |

/// Transport envelope and parent task identifiers
pub mod envelope;
/// Stream cursors
pub mod stream;
/// Wire traits
pub mod wire;

pub use envelope::{Envelope, TaskId, TransportHeader};
pub use stream::{StreamInput, StreamOutput};
pub use wire::{Readable, Writeable, from_bytes, to_bytes};
