//! Pure domain types with minimal dependencies
//!
//! Nothing here knows about events or painting; the widget and render
//! modules build on these types.

pub mod geometry;
pub mod layer;
pub mod transform;

pub use geometry::*;
pub use layer::*;
