//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Wire-level constants are defined in `mct_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mct.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mct";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MCT";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// NODE CONSTANTS
// ============================================================================

/// Default local node identifier
pub const DEFAULT_NODE_ID: &str = "local";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MCT_LOG";

/// Default log file name stem
pub const LOG_FILE_STEM: &str = "mct";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
