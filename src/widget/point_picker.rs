//! PointPicker widget: pick an offset from the image center over a thumbnail
//!
//! The widget keeps three pieces of state besides its configuration:
//! the current `Position`, the drag `GestureState`, and an optional cached
//! thumbnail sized to the allocation. Position changes notify callback
//! listeners and channel subscribers, and raise a redraw request the host
//! collects with `take_redraw_request`.

use crossbeam_channel::{Receiver, Sender};
use tiny_skia::Pixmap;

use super::PickerWidget;
use super::events::{GestureState, PickerEvent, PointerButton, PointerEvent};
use crate::config::PickerConfig;
use crate::domain::transform::{point_to_position, position_to_client_point};
use crate::domain::{Allocation, Point, Position, Requisition, Workspace};
use crate::render::{overlay, thumbnail};

/// Handle returned by `connect_position_changed`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut()>;

pub struct PointPicker<W: Workspace> {
    workspace: W,
    config: PickerConfig,
    allocation: Allocation,
    position: Position,
    gesture: GestureState,
    thumbnail: Option<Pixmap>,
    needs_redraw: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    subscribers: Vec<Sender<PickerEvent>>,
}

impl<W: Workspace> PointPicker<W> {
    pub fn new(workspace: W) -> Self {
        Self::with_config(workspace, PickerConfig::default())
    }

    pub fn with_config(workspace: W, config: PickerConfig) -> Self {
        Self {
            workspace,
            config,
            allocation: Allocation::default(),
            position: Position::ORIGIN,
            gesture: GestureState::Idle,
            thumbnail: None,
            needs_redraw: false,
            listeners: Vec::new(),
            next_listener: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn allocation(&self) -> Allocation {
        self.allocation
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture == GestureState::Tracking
    }

    /// Cached thumbnail, if one is currently held
    pub fn thumbnail(&self) -> Option<&Pixmap> {
        self.thumbnail.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Set the position, notifying listeners only if it changed
    pub fn set_position(&mut self, position: Position) {
        if self.position == position {
            return;
        }
        self.position = position;
        log::debug!("Position changed to ({}, {})", position.x, position.y);
        self.emit_position_changed();
        self.needs_redraw = true;
    }

    /// Move the point back to the image center
    pub fn reset_position(&mut self) {
        self.set_position(Position::ORIGIN);
    }

    /// Returns and clears the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Register a callback run after every position change
    pub fn connect_position_changed(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Receive picker events over a channel
    pub fn subscribe(&mut self) -> Receiver<PickerEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit_position_changed(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener();
        }
        self.subscribers
            .retain(|tx| tx.send(PickerEvent::PositionChanged).is_ok());
    }

    /// Rebuild the thumbnail for the current allocation
    pub fn regenerate_thumbnail(&mut self) {
        let layers = self.workspace.paintable_layers();
        self.thumbnail = thumbnail::render_thumbnail(
            self.allocation.size(),
            self.workspace.image_size(),
            &layers,
            self.config.thumbnail_quality.into(),
        );
    }

    /// Drop the cached thumbnail; the next paint rebuilds it
    pub fn invalidate_thumbnail(&mut self) {
        self.thumbnail = None;
    }

    fn thumbnail_is_current(&self) -> bool {
        self.thumbnail.as_ref().is_some_and(|thumb| {
            thumb.width() == self.allocation.width && thumb.height() == self.allocation.height
        })
    }

    /// Position under a client point
    pub fn point_to_position(&self, point: Point) -> Position {
        point_to_position(point, &self.allocation, self.workspace.image_size())
    }

    /// Client point for a position
    pub fn position_to_client_point(&self, position: Position) -> Point {
        position_to_client_point(position, &self.allocation, self.workspace.image_size())
    }
}

impl<W: Workspace> PickerWidget for PointPicker<W> {
    fn on_pointer_down(&mut self, event: &PointerEvent) {
        if event.button == PointerButton::Left {
            self.gesture = GestureState::Tracking;
        }
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) {
        if self.gesture != GestureState::Tracking {
            return;
        }
        if event.button == PointerButton::Left {
            let position = self.point_to_position(event.point);
            self.set_position(position);
        }
        self.gesture = GestureState::Idle;
    }

    fn on_pointer_move(&mut self, point: Point) {
        if self.gesture == GestureState::Tracking {
            let position = self.point_to_position(point);
            self.set_position(position);
        }
    }

    fn on_size_request(&mut self) -> Requisition {
        self.invalidate_thumbnail();
        Requisition {
            width: self.config.preferred_size,
            height: self.config.preferred_size,
        }
    }

    fn on_size_allocate(&mut self, allocation: Allocation) {
        self.allocation = allocation;
        self.regenerate_thumbnail();
    }

    fn on_paint(&mut self, surface: &mut Pixmap) -> bool {
        if !self.thumbnail_is_current() {
            self.regenerate_thumbnail();
        }
        if let Some(thumb) = &self.thumbnail {
            overlay::draw_thumbnail(surface, thumb);
        }

        overlay::draw_outline(surface, &self.config);

        // Paint in surface-local coordinates
        let client = self.position_to_client_point(self.position);
        let origin = self.allocation.origin();
        let x = (client.x - origin.x) as f32;
        let y = (client.y - origin.y) as f32;

        overlay::draw_crosshair(surface, x, y, &self.config);
        overlay::draw_marker(surface, x, y, &self.config);
        true
    }
}
