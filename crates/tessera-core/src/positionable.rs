//! The minimal mutable-geometry contract every layout operates on.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{Axis, Rect};

/// Anything with a position, a size and a visibility flag.
///
/// Hosts implement this for their own element types; layouts only ever
/// read and write these fields.
pub trait Positionable {
    fn x(&self) -> f64;
    fn set_x(&mut self, x: f64);
    fn y(&self) -> f64;
    fn set_y(&mut self, y: f64);
    fn width(&self) -> f64;
    fn set_width(&mut self, width: f64);
    fn height(&self) -> f64;
    fn set_height(&mut self, height: f64);
    fn visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Current bounding box.
    fn bounds(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.set_x(x);
        self.set_y(y);
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.set_width(width);
        self.set_height(height);
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.set_position(bounds.x, bounds.y);
        self.set_size(bounds.width, bounds.height);
    }

    /// Position along `axis` (x or y).
    fn position_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x(),
            Axis::Vertical => self.y(),
        }
    }

    fn set_position_on(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.set_x(value),
            Axis::Vertical => self.set_y(value),
        }
    }

    /// Size along `axis` (width or height).
    fn size_on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    fn set_size_on(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.set_width(value),
            Axis::Vertical => self.set_height(value),
        }
    }
}

/// Shared handle to a host-owned element.
pub type ElementRef = Rc<RefCell<dyn Positionable>>;

/// Wrap an element in a shared handle.
///
/// The typed handle can be cloned into an [`ElementRef`] wherever a layout
/// needs one while the caller keeps typed access.
pub fn share<T: Positionable + 'static>(element: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(element))
}

/// Identity comparison of two handles (ignores vtables).
pub fn same_element(a: &ElementRef, b: &ElementRef) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// A plain geometry node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Optional name for debugging
    pub name: Option<String>,
    pub bounds: Rect,
    pub visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl Element {
    pub fn new(bounds: Rect) -> Self {
        Self {
            name: None,
            bounds,
            visible: true,
        }
    }

    /// Element of the given size at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl Positionable for Element {
    fn x(&self) -> f64 {
        self.bounds.x
    }

    fn set_x(&mut self, x: f64) {
        self.bounds.x = x;
    }

    fn y(&self) -> f64 {
        self.bounds.y
    }

    fn set_y(&mut self, y: f64) {
        self.bounds.y = y;
    }

    fn width(&self) -> f64 {
        self.bounds.width
    }

    fn set_width(&mut self, width: f64) {
        self.bounds.width = width;
    }

    fn height(&self) -> f64 {
        self.bounds.height
    }

    fn set_height(&mut self, height: f64) {
        self.bounds.height = height;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
