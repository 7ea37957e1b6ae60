//! CLI library components for the inventory generator.

pub mod filter;
pub mod load;
pub mod logging;
pub mod render;
