//! Node-level request to remove MCP tools
//!
//! Sent to each node of the cluster to drop the named tools from that
//! node's MCP server. Only the payload is encoded here; the transport
//! header travels in an [`Envelope`] around it.

use crate::error::Result;
use crate::transport::{Envelope, Readable, StreamInput, StreamOutput, Writeable};
use crate::value_objects::ToolNames;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::trace;

/// A request sent to one node, naming the tools it should remove
///
/// # Example
///
/// ```
/// use mct_domain::requests::NodeRemoveToolsRequest;
///
/// let request = NodeRemoveToolsRequest::builder()
///     .tool_name("search")
///     .tool_name("reindex")
///     .build();
///
/// assert_eq!(
///     request.tool_names().as_slice(),
///     Some(&["search".to_string(), "reindex".to_string()][..])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRemoveToolsRequest {
    tool_names: ToolNames,
}

/// A [`NodeRemoveToolsRequest`] together with its transport header
pub type NodeRemoveToolsMessage = Envelope<NodeRemoveToolsRequest>;

impl NodeRemoveToolsRequest {
    /// Create a request; `None` means no tool list is attached
    pub fn new(tool_names: Option<Vec<String>>) -> Self {
        Self {
            tool_names: tool_names.into(),
        }
    }

    /// Start building a request
    pub fn builder() -> NodeRemoveToolsRequestBuilder {
        NodeRemoveToolsRequestBuilder::default()
    }

    /// Tools to remove
    pub fn tool_names(&self) -> &ToolNames {
        &self.tool_names
    }

    /// Take the tool list out of the request
    pub fn into_tool_names(self) -> ToolNames {
        self.tool_names
    }

    /// Wrap this request in a transport envelope
    pub fn into_message(self) -> NodeRemoveToolsMessage {
        Envelope::new(self)
    }
}

impl From<ToolNames> for NodeRemoveToolsRequest {
    fn from(tool_names: ToolNames) -> Self {
        Self { tool_names }
    }
}

impl Writeable for NodeRemoveToolsRequest {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        trace!(
            present = self.tool_names.is_present(),
            count = self.tool_names.len(),
            "Encoding node remove-tools request"
        );
        self.tool_names.write_to(out)
    }
}

impl Readable for NodeRemoveToolsRequest {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let tool_names = ToolNames::read_from(input)?;
        trace!(
            present = tool_names.is_present(),
            count = tool_names.len(),
            "Decoded node remove-tools request"
        );
        Ok(Self { tool_names })
    }
}

/// Builder for [`NodeRemoveToolsRequest`]
///
/// Without any calls the built request carries no tool list. Any of
/// [`tool_name`](Self::tool_name), [`tool_names`](Self::tool_names) or
/// [`empty`](Self::empty) makes the list present.
#[derive(Debug, Clone, Default)]
pub struct NodeRemoveToolsRequestBuilder {
    tool_names: Option<Vec<String>>,
}

impl NodeRemoveToolsRequestBuilder {
    /// Append one tool name
    pub fn tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_names.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Append several tool names in order
    pub fn tool_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_names
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Attach a tool list even if no names are added
    pub fn empty(mut self) -> Self {
        self.tool_names.get_or_insert_with(Vec::new);
        self
    }

    /// Finish the request
    pub fn build(self) -> NodeRemoveToolsRequest {
        NodeRemoveToolsRequest::new(self.tool_names)
    }
}
