//! Node-addressed transport requests

/// Tool removal request
pub mod remove_tools;

pub use remove_tools::{
    NodeRemoveToolsMessage, NodeRemoveToolsRequest, NodeRemoveToolsRequestBuilder,
};
