//! Local node configuration types

use crate::constants::DEFAULT_NODE_ID;
use serde::{Deserialize, Serialize};

/// Identity of the node this process runs as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Node identifier; used as the node of parent tasks this process creates
    pub node_id: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_id: DEFAULT_NODE_ID.to_string(),
        }
    }
}
