//! # MCP Cluster Tools
//!
//! Encode and inspect the node-level request that tells a cluster node to
//! remove MCP tools.
//!
//! ## Example
//!
//! ```
//! use mct::domain::requests::NodeRemoveToolsRequest;
//! use mct::infrastructure::wire::encode_hex;
//!
//! let request = NodeRemoveToolsRequest::builder().tool_name("search").build();
//! assert_eq!(encode_hex(&request.into_message()).unwrap(), "00010106736561726368");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Transport requests, stream primitives and domain errors
//! - `infrastructure` - Configuration, logging and hex framing
//! - `cli` - Command line front end

/// Command line interface
pub mod cli;

/// Domain layer - transport requests and codec
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mct_domain::*;
}

/// Infrastructure layer - config, logging, and wire framing
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mct_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;
