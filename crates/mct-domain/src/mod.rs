//! # Domain Layer
//!
//! Transport requests exchanged between cluster nodes and the stream
//! primitives they are encoded with.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`transport`] | Stream cursors, wire traits and the transport envelope |
//! | [`value_objects`] | Immutable payload values such as [`ToolNames`] |
//! | [`requests`] | Node-addressed requests built on the above |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Wire-level constants |
//!
//! ## Example
//!
//! ```
//! use mct_domain::requests::NodeRemoveToolsRequest;
//! use mct_domain::transport::{from_bytes, to_bytes};
//!
//! let request = NodeRemoveToolsRequest::new(Some(vec!["search".into(), "reindex".into()]));
//! let bytes = to_bytes(&request).unwrap();
//! let decoded: NodeRemoveToolsRequest = from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, request);
//! ```

pub mod constants;
pub mod error;
pub mod requests;
pub mod transport;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use requests::{NodeRemoveToolsMessage, NodeRemoveToolsRequest};
pub use transport::{
    Envelope, Readable, StreamInput, StreamOutput, TaskId, TransportHeader, Writeable,
};
pub use value_objects::ToolNames;
