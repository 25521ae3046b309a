//! Configuration for the `pxg` tool
//!
//! Provides types, discovery and loading for `pixgeom.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
