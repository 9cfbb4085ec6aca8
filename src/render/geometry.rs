//! Shared geometry for the picker overlay
//!
//! Constants and small helpers used when stroking the outline, the
//! crosshair and the point marker with tiny-skia.

use tiny_skia::{Path, PathBuilder};

/// Inset of the bounding rectangle from the widget edges, in pixels
pub const OUTLINE_INSET: f32 = 1.0;

/// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
pub const BEZIER_K: f32 = 0.552_284_8;

/// Rectangle inset from a `width` x `height` surface, as (x, y, w, h)
#[inline]
pub fn inset_rect(width: f32, height: f32, inset: f32) -> (f32, f32, f32, f32) {
    (
        inset,
        inset,
        (width - 2.0 * inset).max(0.0),
        (height - 2.0 * inset).max(0.0),
    )
}

/// Build a closed rectangle outline path
pub fn build_rect_path(x: f32, y: f32, w: f32, h: f32) -> Option<Path> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let rect = tiny_skia::Rect::from_xywh(x, y, w, h)?;
    Some(PathBuilder::from_rect(rect))
}

/// Build the two crosshair lines through (`cx`, `cy`) spanning the surface
pub fn build_crosshair_path(cx: f32, cy: f32, width: f32, height: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();

    // Vertical line, full height
    pb.move_to(cx, 0.0);
    pb.line_to(cx, height);

    // Horizontal line, full width
    pb.move_to(0.0, cy);
    pb.line_to(width, cy);

    pb.finish()
}

/// Build an ellipse path using cubic bezier curves
pub fn build_ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<Path> {
    let kx = rx * BEZIER_K;
    let ky = ry * BEZIER_K;

    let mut pb = PathBuilder::new();
    pb.move_to(cx, cy - ry);
    pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
    pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_rect() {
        assert_eq!(inset_rect(50.0, 40.0, 1.0), (1.0, 1.0, 48.0, 38.0));
        assert_eq!(inset_rect(1.0, 1.0, 1.0), (1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ellipse_bounds() {
        let path = build_ellipse_path(10.0, 20.0, 1.0, 1.0).unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 9.0).abs() < 1e-4);
        assert!((bounds.right() - 11.0).abs() < 1e-4);
        assert!((bounds.top() - 19.0).abs() < 1e-4);
        assert!((bounds.bottom() - 21.0).abs() < 1e-4);
    }

    #[test]
    fn test_crosshair_spans_surface() {
        let path = build_crosshair_path(12.0, 7.0, 50.0, 30.0).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.right(), 50.0);
        assert_eq!(bounds.top(), 0.0);
        assert_eq!(bounds.bottom(), 30.0);
    }

    #[test]
    fn test_empty_rect_has_no_path() {
        assert!(build_rect_path(1.0, 1.0, 0.0, 0.0).is_none());
    }
}
