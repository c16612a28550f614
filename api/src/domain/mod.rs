//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: The calculation model and its identifiers
//! - `ports`: Trait definitions for the input surface and the side-effect boundaries

pub mod entities;
pub mod ports;
