//! canvass-desktop library root.
//!
//! Re-exports internal modules so that examples and integration tests
//! can exercise them directly (e.g. the generation smoke flow) without
//! going through the Tauri command layer.

pub mod config;
