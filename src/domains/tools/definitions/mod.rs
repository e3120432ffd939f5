//! Tool definitions module.
//!
//! Each category lives in its own file and exposes a single
//! `tools() -> Vec<ToolDescriptor>` function. The catalog concatenates
//! these lists in a fixed order; see `ToolCatalog::new()`.

mod common;

pub mod converter;
pub mod datetime;
pub mod encoding;
pub mod file;
pub mod hash;
pub mod math;
pub mod network;
pub mod random;
pub mod string;
pub mod text;
pub mod weather;
