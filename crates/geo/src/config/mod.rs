//! Alignment configuration loading and schema definitions
//!
//! Declares which datum each data source speaks so the map layer can move
//! GPS fixes and POIs onto the tile provider's datum.

mod loader;
mod schema;

pub use schema::*;
