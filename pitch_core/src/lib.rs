//! Conversion kick geometry for a rugby pitch
//!
//! Turns a click on the rendered pitch into the distance to the nearer goal
//! and the angle its posts subtend from the kick point.

pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod point;
pub mod result;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use point::*;
pub use result::*;
