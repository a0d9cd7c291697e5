//! Scrollbar state machine and the thumb/content mapping.
//!
//! The scrollbar moves a target element along one axis. Along that axis the
//! target's position is the content offset (0 at the top, negative when
//! scrolled) and its size is the content size. The thumb moves in
//! `[0, page_size - thumb_size]`; the two are related by
//!
//! ```text
//! offset = thumb / (page - thumb_size) * (page - content)
//! ```
//!
//! and its inverse. Either denominator reaching zero means there is nothing
//! to scroll.

use std::fmt;

use glam::DVec2;
use tessera_core::{same_element, Axis, ConfigError, ElementRef, Positionable, Rect};

use crate::config::ScrollbarConfig;
use crate::input::{DragState, ScrollInput};

/// Ranges at or below this length count as "no scroll range".
const EPSILON: f64 = 1e-9;

/// Clamp a content offset so the view never runs past either end.
fn clamp_offset(offset: f64, page: f64, content: f64) -> f64 {
    let lowest = (page - content).min(0.0);
    offset.min(0.0).max(lowest)
}

/// A single-axis scrollbar bound to a target element.
pub struct Scrollbar {
    config: ScrollbarConfig,
    x: f64,
    y: f64,
    thumb_size: f64,
    thumb_pos: f64,
    visible: bool,
    enabled: bool,
    drag: DragState,
    target: Option<ElementRef>,
    thumb: Option<ElementRef>,
}

impl fmt::Debug for Scrollbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollbar")
            .field("config", &self.config)
            .field("position", &(self.x, self.y))
            .field("thumb_size", &self.thumb_size)
            .field("thumb_pos", &self.thumb_pos)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("drag", &self.drag)
            .field("target", &self.target.is_some())
            .finish()
    }
}

impl Scrollbar {
    /// Create a scrollbar.
    ///
    /// An invalid configuration is logged and yields a disabled scrollbar:
    /// it stays hidden and ignores every operation.
    pub fn new(config: ScrollbarConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::error!(%err, "invalid scrollbar configuration; scrollbar disabled");
            return Self::build(config, false);
        }
        let mut bar = Self::build(config, true);
        bar.refresh();
        bar
    }

    /// Create a scrollbar, rejecting an invalid configuration.
    pub fn try_new(config: ScrollbarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    fn build(config: ScrollbarConfig, enabled: bool) -> Self {
        let thumb_size = config.thumb_size.unwrap_or_else(|| config.track_length());
        Self {
            config,
            x: 0.0,
            y: 0.0,
            thumb_size,
            thumb_pos: 0.0,
            visible: false,
            enabled,
            drag: DragState::Idle,
            target: None,
            thumb: None,
        }
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    pub fn page_size(&self) -> f64 {
        self.config.page_size
    }

    pub fn track_length(&self) -> f64 {
        self.config.track_length()
    }

    pub fn thumb_size(&self) -> f64 {
        self.thumb_size
    }

    /// Thumb position along the axis, local to the scrollbar.
    pub fn thumb_position(&self) -> f64 {
        self.thumb_pos
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// False when the configuration was rejected at construction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn target(&self) -> Option<&ElementRef> {
        self.target.as_ref()
    }

    pub fn thumb(&self) -> Option<&ElementRef> {
        self.thumb.as_ref()
    }

    /// Size of the target along the axis.
    pub fn content_size(&self) -> Option<f64> {
        let target = self.target.as_ref()?;
        let target = target.try_borrow().ok()?;
        Some(target.size_on(self.config.axis))
    }

    /// Set the viewport length and refresh.
    pub fn set_page_size(&mut self, page_size: f64) {
        if !self.enabled {
            return;
        }
        match ConfigError::check_length("page size", page_size) {
            Ok(page_size) => {
                self.config.page_size = page_size;
                self.refresh();
            }
            Err(err) => tracing::error!(%err, "ignoring page size"),
        }
    }

    /// Set the track length and refresh.
    ///
    /// The thumb still travels over `[0, page_size - thumb_size]`, so a
    /// track shorter than the page is shorter than the thumb's travel.
    pub fn set_axis_length(&mut self, length: f64) {
        if !self.enabled {
            return;
        }
        match ConfigError::check_length("axis length", length) {
            Ok(length) => {
                self.config.axis_length = Some(length);
                self.refresh();
            }
            Err(err) => tracing::error!(%err, "ignoring axis length"),
        }
    }

    /// Fix the thumb length, or size it from the content with `None`.
    pub fn set_thumb_size(&mut self, thumb_size: Option<f64>) {
        if !self.enabled {
            return;
        }
        if let Some(size) = thumb_size {
            if let Err(err) = ConfigError::check_length("thumb size", size) {
                tracing::error!(%err, "ignoring thumb size");
                return;
            }
            let track = self.config.track_length().min(self.config.page_size);
            if size > track {
                let err = ConfigError::ThumbExceedsTrack { thumb: size, track };
                tracing::error!(%err, "ignoring thumb size");
                return;
            }
        }
        self.config.thumb_size = thumb_size;
        self.refresh();
    }

    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.config.auto_hide = auto_hide;
        self.refresh();
    }

    /// Scroll `target` and refresh.
    pub fn set_target(&mut self, target: ElementRef) {
        if !self.enabled {
            return;
        }
        self.target = Some(target);
        self.drag = DragState::Idle;
        self.refresh();
    }

    /// Scroll `target` clipped by `mask`; the page size becomes the mask's
    /// extent along the axis.
    pub fn set_target_masked(&mut self, target: ElementRef, mask: Rect) {
        if !self.enabled {
            return;
        }
        self.config.page_size = mask.extent(self.config.axis).max(0.0);
        self.set_target(target);
    }

    /// Release the target. The scrollbar hides until a new one is set.
    pub fn detach(&mut self) {
        if self.target.take().is_some() {
            tracing::debug!("scroll target detached");
        }
        self.drag = DragState::Idle;
        self.hide("no target");
    }

    /// Element kept in sync with the thumb's position and size.
    pub fn set_thumb(&mut self, thumb: Option<ElementRef>) {
        self.thumb = thumb;
        self.sync_thumb();
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(&mut self, input: ScrollInput) {
        match input {
            ScrollInput::ThumbDown(pos) => self.start_drag(pos),
            ScrollInput::PointerMove(pos) => self.drag_to(pos),
            ScrollInput::PointerUp | ScrollInput::PointerUpOutside => self.end_drag(),
            ScrollInput::TrackDown(pos) => self.track_click(pos),
            ScrollInput::Wheel(delta) => self.wheel(delta),
        }
    }

    pub fn start_drag(&mut self, pointer: DVec2) {
        if !self.is_active() {
            return;
        }
        let offset = self.config.axis.component(pointer) - self.thumb_pos;
        self.drag = DragState::Dragging { offset };
    }

    /// Move the thumb under the pointer while dragging.
    pub fn drag_to(&mut self, pointer: DVec2) {
        let DragState::Dragging { offset } = self.drag else {
            return;
        };
        if !self.is_active() {
            return;
        }
        self.thumb_pos = self.config.axis.component(pointer) - offset;
        self.scroll();
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Move the thumb by a wheel delta.
    ///
    /// Vertical bars use the vertical delta. Horizontal bars use the
    /// horizontal delta, or the vertical one for plain wheels.
    pub fn wheel(&mut self, delta: DVec2) {
        if !self.is_active() {
            return;
        }
        let amount = match self.config.axis {
            Axis::Vertical => delta.y,
            Axis::Horizontal if delta.x != 0.0 => delta.x,
            Axis::Horizontal => delta.y,
        };
        self.thumb_pos += amount * self.config.wheel_scale;
        self.scroll();
    }

    /// Page towards the click when it lands on the track outside the thumb.
    pub fn track_click(&mut self, pointer: DVec2) {
        if !self.is_active() {
            return;
        }
        let at = self.config.axis.component(pointer);
        if at < self.thumb_pos {
            self.page_up();
        } else if at > self.thumb_pos + self.thumb_size {
            self.page_down();
        }
    }

    /// Wheel events reported by the host for `source`. Only the attached
    /// target is honored; returns whether the event was used.
    pub fn handle_target_wheel(&mut self, source: &ElementRef, delta: DVec2) -> bool {
        match &self.target {
            Some(target) if same_element(target, source) => {
                self.wheel(delta);
                true
            }
            _ => false,
        }
    }

    /// Scroll back one page, never past the start.
    pub fn page_up(&mut self) {
        let Some((offset, content)) = self.target_metrics() else {
            return;
        };
        let offset = (offset + self.config.page_size).min(0.0);
        self.apply_offset(offset, content);
    }

    /// Scroll forward one page, never past the end of the content.
    pub fn page_down(&mut self) {
        let Some((offset, content)) = self.target_metrics() else {
            return;
        };
        let lowest = (self.config.page_size - content).min(0.0);
        let offset = (offset - self.config.page_size).max(lowest);
        self.apply_offset(offset, content);
    }

    /// Current content offset, 0 without a target.
    pub fn target_value(&self) -> f64 {
        self.target_metrics().map_or(0.0, |(offset, _)| offset)
    }

    /// Move the target directly. Call [`refresh`](Self::refresh) to clamp
    /// it and update the thumb.
    pub fn set_target_value(&mut self, value: f64) {
        let Some(target) = &self.target else {
            return;
        };
        if let Ok(mut target) = target.try_borrow_mut() {
            target.set_position_on(self.config.axis, value);
        }
    }

    /// Resize the thumb, re-evaluate visibility and bring the content
    /// offset and the thumb back in sync.
    ///
    /// Safe to call re-entrantly: a target that is already borrowed is left
    /// alone.
    pub fn refresh(&mut self) {
        if !self.enabled {
            return;
        }
        self.update_thumb_size();

        let Some(target) = self.target.clone() else {
            self.hide("no target");
            return;
        };
        let mut target = match target.try_borrow_mut() {
            Ok(target) => target,
            Err(_) => {
                tracing::debug!("scroll target busy; refresh skipped");
                return;
            }
        };
        if !target.visible() {
            self.hide("target hidden");
            return;
        }

        let axis = self.config.axis;
        let page = self.config.page_size;
        let content = target.size_on(axis);
        if self.config.auto_hide && content <= page {
            self.hide("content fits in one page");
            return;
        }

        let offset = clamp_offset(target.position_on(axis), page, content);
        target.set_position_on(axis, offset);
        drop(target);

        self.visible = true;
        self.place_thumb(offset, content);
        tracing::trace!(offset, content, thumb = self.thumb_pos, "scrollbar refreshed");
    }

    /// Move the thumb to match the target's current offset.
    pub fn position_thumb(&mut self) {
        if let Some((offset, content)) = self.target_metrics() {
            self.place_thumb(offset, content);
        }
    }

    fn is_active(&self) -> bool {
        self.enabled && self.target.is_some()
    }

    fn target_metrics(&self) -> Option<(f64, f64)> {
        if !self.enabled {
            return None;
        }
        let target = self.target.as_ref()?.try_borrow().ok()?;
        let axis = self.config.axis;
        Some((target.position_on(axis), target.size_on(axis)))
    }

    /// A busy target keeps the current thumb size.
    fn update_thumb_size(&mut self) {
        let track = self.config.track_length();
        if let Some(size) = self.config.thumb_size {
            self.thumb_size = size;
            return;
        }
        let content = match &self.target {
            Some(target) => match target.try_borrow() {
                Ok(target) => target.size_on(self.config.axis),
                Err(_) => return,
            },
            None => 0.0,
        };
        self.thumb_size = if content > EPSILON {
            (track * self.config.page_size / content).min(track)
        } else {
            track
        };
    }

    /// Clamp the thumb into its range and scroll the target to match.
    fn scroll(&mut self) {
        let range = self.config.page_size - self.thumb_size;
        self.thumb_pos = self.thumb_pos.min(range).max(0.0);
        self.sync_thumb();

        if range <= EPSILON {
            return;
        }
        let Some(target) = &self.target else {
            return;
        };
        let Ok(mut target) = target.try_borrow_mut() else {
            tracing::debug!("scroll target busy; scroll skipped");
            return;
        };

        let axis = self.config.axis;
        let page = self.config.page_size;
        let content = target.size_on(axis);
        let offset = clamp_offset(self.thumb_pos / range * (page - content), page, content);
        target.set_position_on(axis, offset);
        tracing::trace!(thumb = self.thumb_pos, offset, "scrolled");
    }

    fn apply_offset(&mut self, offset: f64, content: f64) {
        self.set_target_value(offset);
        self.place_thumb(offset, content);
    }

    fn place_thumb(&mut self, offset: f64, content: f64) {
        let page = self.config.page_size;
        let span = page - content;
        let range = (page - self.thumb_size).max(0.0);
        self.thumb_pos = if span.abs() <= EPSILON {
            0.0
        } else {
            (offset * (page - self.thumb_size) / span).min(range).max(0.0)
        };
        self.sync_thumb();
    }

    fn hide(&mut self, reason: &'static str) {
        if self.visible {
            tracing::debug!(reason, "hiding scrollbar");
        }
        self.visible = false;
        self.sync_thumb();
    }

    fn sync_thumb(&self) {
        let Some(thumb) = &self.thumb else {
            return;
        };
        let Ok(mut thumb) = thumb.try_borrow_mut() else {
            return;
        };
        let axis = self.config.axis;
        let cross = axis.cross();
        thumb.set_position_on(axis, self.thumb_pos);
        thumb.set_size_on(axis, self.thumb_size);
        let centered = (self.config.thickness - thumb.size_on(cross)) / 2.0;
        thumb.set_position_on(cross, centered);
        thumb.set_visible(self.visible);
    }
}

impl Positionable for Scrollbar {
    fn x(&self) -> f64 {
        self.x
    }

    fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    fn width(&self) -> f64 {
        match self.config.axis {
            Axis::Horizontal => self.config.track_length(),
            Axis::Vertical => self.config.thickness,
        }
    }

    fn set_width(&mut self, width: f64) {
        match self.config.axis {
            Axis::Horizontal => self.set_axis_length(width),
            Axis::Vertical => self.config.thickness = width.max(0.0),
        }
    }

    fn height(&self) -> f64 {
        match self.config.axis {
            Axis::Horizontal => self.config.thickness,
            Axis::Vertical => self.config.track_length(),
        }
    }

    fn set_height(&mut self, height: f64) {
        match self.config.axis {
            Axis::Horizontal => self.config.thickness = height.max(0.0),
            Axis::Vertical => self.set_axis_length(height),
        }
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.sync_thumb();
    }
}
