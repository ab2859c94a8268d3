//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ToolNames`] | Optional ordered list of tool identifiers |

/// Tool name list value object
pub mod tool_names;

pub use tool_names::ToolNames;
