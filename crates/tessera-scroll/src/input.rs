//! Pointer input consumed by a scrollbar.

use glam::DVec2;

/// A pointer event, already routed to the scrollbar by the host.
///
/// Positions are local to the scrollbar; only the component along its axis
/// is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollInput {
    /// Button pressed over the thumb
    ThumbDown(DVec2),
    /// Pointer moved while the button may be held
    PointerMove(DVec2),
    PointerUp,
    /// Button released away from the thumb
    PointerUpOutside,
    /// Button pressed on the track, outside the thumb
    TrackDown(DVec2),
    /// Wheel delta in pixels
    Wheel(DVec2),
}

/// Thumb drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging; `offset` is the pointer position minus the thumb position
    /// captured when the drag started.
    Dragging { offset: f64 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
