//! Port traits for the input and display collaborators.

pub mod config_port;
pub mod render_port;
