//! Configuration types module

pub mod app;
pub mod logging;
pub mod node;

// Re-export main types
pub use app::*;
