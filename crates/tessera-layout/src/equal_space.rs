//! Divide the available space evenly between items.

use std::fmt;

use tessera_core::{align_item, Align, Axis, ParentCollection, ParentRef, Positionable, Rect};

use crate::node::{attach, reborrow, Child, Layout};
use crate::placed::Placed;

/// Splits the rectangle into one equal slot per item along the main axis.
///
/// Nested nodes are laid out in their slot; concrete elements are moved to
/// the slot's leading edge. Every result is then aligned on the cross axis.
pub struct EqualSpace {
    items: Vec<Child>,
    axis: Axis,
    align: Align,
    parent: Option<ParentRef>,
}

impl fmt::Debug for EqualSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualSpace")
            .field("items", &self.items)
            .field("axis", &self.axis)
            .field("align", &self.align)
            .field("parent", &self.parent.is_some())
            .finish()
    }
}

impl EqualSpace {
    pub fn new(axis: Axis) -> Self {
        Self {
            items: Vec::new(),
            axis,
            align: Align::Center,
            parent: None,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Collection that receives every placed element on each pass.
    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.items.push(child.into());
        self
    }

    pub fn with_children<C: Into<Child>>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        self.items.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, child: impl Into<Child>) {
        self.items.push(child.into());
    }

    pub fn items(&self) -> &[Child] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn attach_to_own_parent(&self, placed: &Placed) {
        let Some(parent) = &self.parent else {
            return;
        };
        match parent.try_borrow_mut() {
            Ok(mut parent) => attach(&mut *parent, placed),
            Err(_) => tracing::debug!("equal-space parent is busy; skipping attachment"),
        }
    }
}

impl Layout for EqualSpace {
    fn layout(&self, rect: Rect, mut parent: Option<&mut dyn ParentCollection>) -> Placed {
        if self.items.is_empty() {
            return Placed::group(std::iter::empty());
        }

        let main = self.axis;
        let cross = main.cross();
        let slice = rect.extent(main) / self.items.len() as f64;
        tracing::trace!(?rect, items = self.items.len(), slice, "equal-space layout");

        let mut placed = Vec::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            let slot = rect.with_span(main, rect.start(main) + slice * i as f64, slice);

            let mut display = item.resolve(slot, reborrow(&mut parent));
            if !item.is_layout() {
                display.set_position(slot.x, slot.y);
            }
            align_item(&mut display, slot, cross, self.align);

            self.attach_to_own_parent(&display);
            placed.push(display);
        }

        Placed::group(placed)
    }
}
