//! Mapping between client points and picker positions
//!
//! A position is an offset from the allocation center expressed in image
//! pixels. Both directions use the same per-axis factor `image / widget`:
//! the forward mapping multiplies by it and the inverse divides by it.

use super::geometry::{Allocation, Point, Position, Size};

/// Per-axis factor from widget pixels to image pixels
#[inline]
pub fn image_scale(allocation: &Allocation, image_size: Size) -> (f64, f64) {
    (
        image_size.width as f64 / allocation.width as f64,
        image_size.height as f64 / allocation.height as f64,
    )
}

/// Convert a client point into a position, truncating toward zero
pub fn point_to_position(point: Point, allocation: &Allocation, image_size: Size) -> Position {
    let delta = point - allocation.center();
    let (scale_x, scale_y) = image_scale(allocation, image_size);

    // `as` saturates and maps NaN to zero for degenerate sizes
    Position::new((delta.x * scale_x) as i32, (delta.y * scale_y) as i32)
}

/// Convert a position back into client coordinates
pub fn position_to_client_point(
    position: Position,
    allocation: &Allocation,
    image_size: Size,
) -> Point {
    let center = allocation.center();
    let (scale_x, scale_y) = image_scale(allocation, image_size);

    Point::new(
        center.x + position.x as f64 / scale_x,
        center.y + position.y as f64 / scale_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_right_of_center_doubles_offset() {
        let alloc = Allocation::new(0, 0, 100, 100);
        let pos = point_to_position(Point::new(75.0, 50.0), &alloc, Size::new(200, 200));
        assert_eq!(pos, Position::new(50, 0));
    }

    #[test]
    fn test_forward_truncates_toward_zero() {
        let alloc = Allocation::new(0, 0, 100, 100);
        let image = Size::new(150, 150);
        // delta 3 * 1.5 = 4.5 -> 4, delta -3 * 1.5 = -4.5 -> -4
        let pos = point_to_position(Point::new(53.0, 47.0), &alloc, image);
        assert_eq!(pos, Position::new(4, -4));
    }

    #[test]
    fn test_scale_is_independent_per_axis() {
        let alloc = Allocation::new(0, 0, 100, 50);
        let pos = point_to_position(Point::new(60.0, 35.0), &alloc, Size::new(400, 100));
        assert_eq!(pos, Position::new(40, 20));
    }

    #[test]
    fn test_inverse_maps_to_center_for_origin() {
        let alloc = Allocation::new(5, 5, 80, 60);
        let pt = position_to_client_point(Position::ORIGIN, &alloc, Size::new(800, 600));
        assert_eq!(pt, Point::new(45.0, 35.0));
    }

    #[test]
    fn test_round_trip_within_one_image_pixel() {
        let alloc = Allocation::new(0, 0, 100, 80);
        let image = Size::new(333, 177);
        for &(x, y) in &[(0.0, 0.0), (12.0, 70.0), (99.0, 1.0), (50.0, 40.0)] {
            let pos = point_to_position(Point::new(x, y), &alloc, image);
            let back = position_to_client_point(pos, &alloc, image);
            let (sx, sy) = image_scale(&alloc, image);
            assert!((back.x - x).abs() <= 1.0 / sx + 1e-9);
            assert!((back.y - y).abs() <= 1.0 / sy + 1e-9);
        }
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let alloc = Allocation::new(0, 0, 0, 0);
        let pos = point_to_position(Point::new(10.0, 10.0), &alloc, Size::new(100, 100));
        assert_eq!(pos, Position::new(i32::MAX, i32::MAX));

        let alloc = Allocation::new(0, 0, 100, 100);
        let pos = point_to_position(Point::new(10.0, 10.0), &alloc, Size::new(0, 0));
        assert_eq!(pos, Position::new(0, 0));
    }
}
