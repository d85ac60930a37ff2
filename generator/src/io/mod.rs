//! I/O helpers for generator commands.

pub mod global;
pub mod paths;
pub mod render;
pub mod store;
