//! Concrete adapter implementations for ports.

pub mod console_render_adapter;
pub mod file_config_adapter;
