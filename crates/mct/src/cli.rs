//! Command line front end
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mct encode --tool search --tool reindex` | Print the hex of a remove-tools message |
//! | `mct encode --empty` | Message with an empty (but present) tool list |
//! | `mct decode <HEX>` | Print a hex message as JSON |

use clap::{Parser, Subcommand};
use mct_domain::error::{Error, Result};
use mct_domain::requests::{NodeRemoveToolsMessage, NodeRemoveToolsRequest};
use mct_domain::transport::TaskId;
use mct_domain::value_objects::ToolNames;
use mct_infrastructure::config::{AppConfig, ConfigLoader};
use mct_infrastructure::error_ext::ErrorContext;
use mct_infrastructure::wire::{decode_hex, decode_hex_file, encode_hex};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command line interface for MCP Cluster Tools
#[derive(Parser, Debug)]
#[command(name = "mct")]
#[command(about = "MCP Cluster Tools - node-level tool removal messages")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Encode a remove-tools message and print it as hex
    Encode {
        /// Tool to remove; repeat for several, order is kept
        #[arg(short, long = "tool", value_name = "NAME")]
        tools: Vec<String>,

        /// Attach a tool list even when no --tool is given
        #[arg(long)]
        empty: bool,

        /// Parent task number on the configured local node
        #[arg(long, value_name = "ID")]
        task_id: Option<i64>,
    },

    /// Decode a hex message and print it as JSON
    Decode {
        /// Hex text of the message
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        hex: Option<String>,

        /// Read the hex text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// JSON view of a decoded message
#[derive(Debug, Serialize)]
pub struct DecodedMessage {
    /// Parent task as `node:id`, or `unset`
    pub parent_task: String,
    /// Decoded tool list; `null` when absent
    pub tool_names: ToolNames,
}

impl From<NodeRemoveToolsMessage> for DecodedMessage {
    fn from(message: NodeRemoveToolsMessage) -> Self {
        Self {
            parent_task: message.header.parent_task.to_string(),
            tool_names: message.body.into_tool_names(),
        }
    }
}

/// Load configuration for a CLI run
///
/// With `--config` the file must exist; otherwise the default locations
/// are searched. Returns the file actually used alongside the config.
pub fn load_config(path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path);
    }
    loader.load_with_source()
}

/// Run a command and return what it prints
pub fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Encode {
            tools,
            empty,
            task_id,
        } => {
            let mut builder = NodeRemoveToolsRequest::builder();
            if !tools.is_empty() {
                builder = builder.tool_names(tools.iter().cloned());
            }
            if *empty {
                builder = builder.empty();
            }
            let request = builder.build();
            let parent_task = task_id
                .map(|id| TaskId::new(config.node.node_id.clone(), id))
                .unwrap_or_default();

            info!(
                parent_task = %parent_task,
                tools = request.tool_names().len(),
                present = request.tool_names().is_present(),
                "Encoding remove-tools message"
            );
            encode_hex(&request.into_message().with_parent_task(parent_task))
        }
        Command::Decode { hex, file } => {
            let message: NodeRemoveToolsMessage = match (hex, file) {
                (Some(text), _) => decode_hex(text)?,
                (None, Some(path)) => decode_hex_file(path)?,
                (None, None) => {
                    return Err(Error::invalid_argument(
                        "a hex message or --file is required",
                    ));
                }
            };
            info!(parent_task = %message.header.parent_task, "Decoded remove-tools message");
            serde_json::to_string_pretty(&DecodedMessage::from(message))
                .context("Failed to render decoded message")
        }
    }
}
