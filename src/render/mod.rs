//! Picker rendering module
//!
//! This module contains:
//! - Geometry shared by the overlay strokes
//! - Thumbnail compositing of the workspace layers
//! - Overlay drawing (outline, crosshair, marker)
//! - Interop with the image crate for loading and saving

pub mod geometry;
pub mod image;
pub mod overlay;
pub mod thumbnail;
