//! Point picker widget
//!
//! A small toolkit-independent control that lets a user pick an offset from
//! the center of an image, drawn over a scaled thumbnail of the image's
//! visible layers. The host delivers pointer and layout events through
//! [`widget::PickerWidget`] and provides the image through
//! [`domain::Workspace`].

pub mod config;
pub mod domain;
pub mod render;
pub mod widget;

pub use config::PickerConfig;
pub use domain::{Allocation, Document, Layer, Point, Position, Size, Workspace};
pub use widget::{PickerEvent, PickerWidget, PointPicker};
