//! Widget layer: the picker and the interface the host drives it through

pub mod events;
pub mod point_picker;

pub use events::*;
pub use point_picker::{ListenerId, PointPicker};

use tiny_skia::Pixmap;

use crate::domain::{Allocation, Point, Requisition};

/// Capabilities a host event loop drives
pub trait PickerWidget {
    fn on_pointer_down(&mut self, event: &PointerEvent);
    fn on_pointer_up(&mut self, event: &PointerEvent);
    fn on_pointer_move(&mut self, point: Point);
    /// Preferred size; may drop size-dependent caches
    fn on_size_request(&mut self) -> Requisition;
    fn on_size_allocate(&mut self, allocation: Allocation);
    /// Paint onto `surface`, returning whether the paint was handled
    fn on_paint(&mut self, surface: &mut Pixmap) -> bool;
}

/// Route one host event to `widget`
///
/// Returns `true` when the event was consumed. Size requests are reported
/// through the returned requisition of `on_size_request` and always count
/// as consumed.
pub fn dispatch(widget: &mut dyn PickerWidget, event: HostEvent, surface: &mut Pixmap) -> bool {
    match event {
        HostEvent::PointerDown(ev) => {
            widget.on_pointer_down(&ev);
            true
        }
        HostEvent::PointerUp(ev) => {
            widget.on_pointer_up(&ev);
            true
        }
        HostEvent::PointerMove(point) => {
            widget.on_pointer_move(point);
            true
        }
        HostEvent::SizeRequest => {
            let req = widget.on_size_request();
            log::debug!("Size request answered with {}x{}", req.width, req.height);
            true
        }
        HostEvent::SizeAllocate(allocation) => {
            widget.on_size_allocate(allocation);
            true
        }
        HostEvent::Paint => widget.on_paint(surface),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Document, Position, Size};

    #[test]
    fn test_dispatch_drives_gesture_and_paint() {
        let mut picker = PointPicker::new(Document::new(Size::new(200, 200)));
        let mut surface = Pixmap::new(100, 100).unwrap();

        let events = [
            HostEvent::SizeRequest,
            HostEvent::SizeAllocate(Allocation::new(0, 0, 100, 100)),
            HostEvent::PointerDown(PointerEvent::left(50.0, 50.0)),
            HostEvent::PointerMove(Point::new(60.0, 40.0)),
            HostEvent::PointerUp(PointerEvent::left(75.0, 50.0)),
            HostEvent::Paint,
        ];
        for event in events {
            assert!(dispatch(&mut picker, event, &mut surface));
        }

        assert_eq!(picker.position(), Position::new(50, 0));
        assert!(picker.take_redraw_request());
        assert_eq!(picker.thumbnail().map(|t| t.width()), Some(100));
    }
}
