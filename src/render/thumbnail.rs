//! Scaled composite of the workspace layers
//!
//! The thumbnail is drawn once per allocation size and blitted on every
//! paint, so all layer scaling happens here.

use tiny_skia::{BlendMode, FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::domain::{Layer, Size};

/// Composite `layers` (bottom to top) into a new `target`-sized pixmap
///
/// Layers are scaled by `target / image_size` per axis. Returns `None` when
/// `target` has a zero dimension. A zero-sized image yields a transparent
/// thumbnail.
pub fn render_thumbnail(
    target: Size,
    image_size: Size,
    layers: &[&Layer],
    quality: FilterQuality,
) -> Option<Pixmap> {
    let Some(mut thumbnail) = Pixmap::new(target.width, target.height) else {
        log::warn!(
            "Cannot allocate {}x{} thumbnail",
            target.width,
            target.height
        );
        return None;
    };

    if image_size.is_empty() {
        log::warn!(
            "Image size {}x{} is empty, thumbnail left transparent",
            image_size.width,
            image_size.height
        );
        return Some(thumbnail);
    }

    let scale_x = target.width as f32 / image_size.width as f32;
    let scale_y = target.height as f32 / image_size.height as f32;

    for layer in layers {
        let paint = PixmapPaint {
            opacity: layer.opacity.clamp(0.0, 1.0),
            blend_mode: BlendMode::SourceOver,
            quality,
        };
        let (offset_x, offset_y) = layer.offset;
        thumbnail.draw_pixmap(
            offset_x,
            offset_y,
            layer.surface.as_ref(),
            &paint,
            Transform::from_scale(scale_x, scale_y),
            None,
        );
    }

    log::debug!(
        "Rendered {}x{} thumbnail from {} layers (scale {:.3}x{:.3})",
        target.width,
        target.height,
        layers.len(),
        scale_x,
        scale_y
    );

    Some(thumbnail)
}
