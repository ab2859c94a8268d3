//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the domain layer.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Transport
//! | Module | Description |
//! |--------|-------------|
//! | [`wire`] | Hex framing of encoded transport messages |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod wire;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
