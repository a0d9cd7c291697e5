//! Parent/child collections.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glam::DVec2;

use crate::geometry::Rect;
use crate::positionable::{same_element, ElementRef, Positionable};

/// A collection that elements can be attached to.
pub trait ParentCollection {
    /// Append a child. Callers wanting idempotence use [`attach`](Self::attach).
    fn add_child(&mut self, child: ElementRef);

    /// Remove a child, returning whether it was present.
    fn remove_child(&mut self, child: &ElementRef) -> bool;

    /// Whether `child` is attached (by identity).
    fn contains(&self, child: &ElementRef) -> bool;

    /// Visit children in attachment order.
    fn for_each_child(&self, f: &mut dyn FnMut(&ElementRef));

    fn child_count(&self) -> usize {
        let mut count = 0;
        self.for_each_child(&mut |_| count += 1);
        count
    }

    /// Add `child` unless it is already attached. Returns true if added.
    fn attach(&mut self, child: &ElementRef) -> bool {
        if self.contains(child) {
            false
        } else {
            self.add_child(child.clone());
            true
        }
    }
}

/// Shared handle to a parent collection.
pub type ParentRef = Rc<RefCell<dyn ParentCollection>>;

/// A positionable group of children.
///
/// Without an explicit size, the container measures as the extent of its
/// visible children in local coordinates.
pub struct Container {
    x: f64,
    y: f64,
    size: Option<DVec2>,
    visible: bool,
    children: Vec<ElementRef>,
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("size", &self.size)
            .field("visible", &self.visible)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            size: None,
            visible: true,
            children: Vec::new(),
        }
    }

    /// Container with a fixed size instead of a measured one.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            size: Some(DVec2::new(width, height)),
            ..Self::new()
        }
    }

    /// Drop the explicit size and measure children again.
    pub fn clear_size(&mut self) {
        self.size = None;
    }

    /// Right-most and bottom-most edges of the visible children.
    ///
    /// Children that are mutably borrowed elsewhere are skipped.
    pub fn content_extent(&self) -> DVec2 {
        self.children
            .iter()
            .filter_map(|child| child.try_borrow().ok().filter(|c| c.visible()).map(|c| c.bounds()))
            .fold(DVec2::ZERO, |extent, b| extent.max(DVec2::new(b.right(), b.bottom())))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in attachment order.
    pub fn children(&self) -> &[ElementRef] {
        &self.children
    }

    pub fn child_at(&self, index: usize) -> Option<&ElementRef> {
        self.children.get(index)
    }

    pub fn remove_child_at(&mut self, index: usize) -> Option<ElementRef> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Bounds of the children in this container's local space.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_vecs(DVec2::ZERO, self.content_extent())
    }
}

impl ParentCollection for Container {
    fn add_child(&mut self, child: ElementRef) {
        self.children.push(child);
    }

    fn remove_child(&mut self, child: &ElementRef) -> bool {
        match self.children.iter().position(|c| same_element(c, child)) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, child: &ElementRef) -> bool {
        self.children.iter().any(|c| same_element(c, child))
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&ElementRef)) {
        for child in &self.children {
            f(child);
        }
    }
}

impl Positionable for Container {
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
        self.size.map_or_else(|| self.content_extent().x, |s| s.x)
    }

    fn set_width(&mut self, width: f64) {
        let height = self.height();
        self.size = Some(DVec2::new(width, height));
    }

    fn height(&self) -> f64 {
        self.size.map_or_else(|| self.content_extent().y, |s| s.y)
    }

    fn set_height(&mut self, height: f64) {
        let width = self.width();
        self.size = Some(DVec2::new(width, height));
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
