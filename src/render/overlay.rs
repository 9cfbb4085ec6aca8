//! Picker overlay drawing with tiny-skia
//!
//! Draws the cached thumbnail, the inset outline, the crosshair and the
//! point marker onto the host surface.

use tiny_skia::{Paint, Pixmap, PixmapPaint, Stroke, Transform};

use super::geometry::{self, OUTLINE_INSET};
use crate::config::{LineColor, PickerConfig};

fn solid_paint(color: LineColor) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Blit the thumbnail at the surface origin
pub fn draw_thumbnail(surface: &mut Pixmap, thumbnail: &Pixmap) {
    surface.draw_pixmap(
        0,
        0,
        thumbnail.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

/// Stroke the bounding rectangle inset from the surface edges
pub fn draw_outline(surface: &mut Pixmap, config: &PickerConfig) {
    let (x, y, w, h) = geometry::inset_rect(
        surface.width() as f32,
        surface.height() as f32,
        OUTLINE_INSET,
    );
    let Some(path) = geometry::build_rect_path(x, y, w, h) else {
        return;
    };

    let stroke = Stroke {
        width: config.line_width,
        ..Default::default()
    };
    surface.stroke_path(
        &path,
        &solid_paint(config.outline_color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Stroke full-width and full-height lines through (`x`, `y`)
pub fn draw_crosshair(surface: &mut Pixmap, x: f32, y: f32, config: &PickerConfig) {
    if !x.is_finite() || !y.is_finite() {
        log::debug!("Skipping crosshair at non-finite point ({x}, {y})");
        return;
    }
    let Some(path) =
        geometry::build_crosshair_path(x, y, surface.width() as f32, surface.height() as f32)
    else {
        return;
    };

    let stroke = Stroke {
        width: config.line_width,
        ..Default::default()
    };
    surface.stroke_path(
        &path,
        &solid_paint(config.crosshair_color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Stroke the small point marker centered on (`x`, `y`)
pub fn draw_marker(surface: &mut Pixmap, x: f32, y: f32, config: &PickerConfig) {
    if !x.is_finite() || !y.is_finite() {
        return;
    }
    let radius = config.marker_diameter / 2.0;
    let Some(path) = geometry::build_ellipse_path(x, y, radius, radius) else {
        return;
    };

    let stroke = Stroke {
        width: config.marker_stroke_width,
        ..Default::default()
    };
    surface.stroke_path(
        &path,
        &solid_paint(config.marker_color),
        &stroke,
        Transform::identity(),
        None,
    );
}
