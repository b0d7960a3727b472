//! Terminal-facing output for status, warning, and error lines.

pub mod render;
