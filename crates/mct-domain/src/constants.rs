//! Domain layer constants
//!
//! Wire-level constants shared by the stream primitives and the requests
//! built on top of them. Infrastructure-specific constants live in
//! `mct_infrastructure::constants`.

// ============================================================================
// WIRE ENCODING CONSTANTS
// ============================================================================

/// Byte written for boolean `false`
pub const WIRE_FALSE: u8 = 0;

/// Byte written for boolean `true`
pub const WIRE_TRUE: u8 = 1;

/// Maximum number of bytes a 32-bit variable-length integer may occupy
pub const VINT_MAX_BYTES: usize = 5;

/// Largest element count a length-prefixed sequence may declare
pub const MAX_ARRAY_LENGTH: u32 = i32::MAX as u32;

/// Upper bound on capacity reserved up front from an untrusted length prefix
pub const PREALLOC_LIMIT: usize = 1024;

// ============================================================================
// TRANSPORT ENVELOPE CONSTANTS
// ============================================================================

/// Separator between node id and task id in the textual task form
pub const TASK_ID_SEPARATOR: char = ':';

/// Textual form of a task id with no parent task
pub const TASK_ID_UNSET: &str = "unset";
