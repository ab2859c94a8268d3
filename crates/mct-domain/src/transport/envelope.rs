//! Transport envelope
//!
//! Every transport request is preceded by a [`TransportHeader`] naming
//! the parent task it was spawned from. [`Envelope`] pairs a header with
//! any payload: the header is written first and read first, and the
//! payload codec never sees it.

use super::stream::{StreamInput, StreamOutput};
use super::wire::{Readable, Writeable};
use crate::constants::{TASK_ID_SEPARATOR, TASK_ID_UNSET};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Identifier of a task running on a cluster node
///
/// An empty node id means "no task". Such an id always carries task number
/// `0`, since only the node id is transmitted for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTaskId")]
pub struct TaskId {
    node_id: String,
    id: i64,
}

#[derive(Deserialize)]
struct RawTaskId {
    node_id: String,
    id: i64,
}

impl From<RawTaskId> for TaskId {
    fn from(raw: RawTaskId) -> Self {
        Self::new(raw.node_id, raw.id)
    }
}

impl TaskId {
    /// Create a task id; an empty `node_id` yields [`TaskId::empty`]
    pub fn new(node_id: impl Into<String>, id: i64) -> Self {
        let node_id = node_id.into();
        if node_id.is_empty() {
            return Self::empty();
        }
        Self { node_id, id }
    }

    /// The "no task" marker
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this id names an actual task
    pub fn is_set(&self) -> bool {
        !self.node_id.is_empty()
    }

    /// Node the task runs on; empty when unset
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Node-local task number
    pub fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}{}{}", self.node_id, TASK_ID_SEPARATOR, self.id)
        } else {
            f.write_str(TASK_ID_UNSET)
        }
    }
}

impl FromStr for TaskId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == TASK_ID_UNSET {
            return Ok(Self::empty());
        }
        let (node_id, id) = s.rsplit_once(TASK_ID_SEPARATOR).ok_or_else(|| {
            Error::invalid_argument(format!(
                "malformed task id [{s}], expected [node{TASK_ID_SEPARATOR}id]"
            ))
        })?;
        if node_id.is_empty() {
            return Err(Error::invalid_argument(format!(
                "malformed task id [{s}], node id is empty"
            )));
        }
        let id = id.parse::<i64>().map_err(|err| {
            Error::invalid_argument(format!("malformed task id [{s}]: {err}"))
        })?;
        Ok(Self::new(node_id, id))
    }
}

impl Writeable for TaskId {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        out.write_string(&self.node_id)?;
        if self.is_set() {
            out.write_long(self.id)?;
        }
        Ok(())
    }
}

impl Readable for TaskId {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let node_id = input.read_string()?;
        if node_id.is_empty() {
            return Ok(Self::empty());
        }
        let id = input.read_long()?;
        Ok(Self { node_id, id })
    }
}

/// Generic fields carried by every transport request
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportHeader {
    /// Task that spawned this request, if any
    pub parent_task: TaskId,
}

impl TransportHeader {
    /// Header with the given parent task
    pub fn with_parent_task(parent_task: TaskId) -> Self {
        Self { parent_task }
    }
}

impl Writeable for TransportHeader {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        self.parent_task.write_to(out)
    }
}

impl Readable for TransportHeader {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        Ok(Self {
            parent_task: TaskId::read_from(input)?,
        })
    }
}

/// A payload wrapped in its transport header
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Generic transport fields
    pub header: TransportHeader,
    /// Request-specific payload
    pub body: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload with an empty header
    pub fn new(body: T) -> Self {
        Self {
            header: TransportHeader::default(),
            body,
        }
    }

    /// Set the parent task
    pub fn with_parent_task(mut self, parent_task: TaskId) -> Self {
        self.header.parent_task = parent_task;
        self
    }
}

impl<T: Writeable> Writeable for Envelope<T> {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        self.header.write_to(out)?;
        self.body.write_to(out)
    }
}

impl<T: Readable> Readable for Envelope<T> {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let header = TransportHeader::read_from(input)?;
        let body = T::read_from(input)?;
        Ok(Self { header, body })
    }
}
