//! Pack items one after another along an axis.

use tessera_core::{align_item, Align, Axis, ParentCollection, Positionable, Rect};

use crate::node::{reborrow, Child, Layout};
use crate::placed::Placed;

/// Places items in sequence, each consuming its own size plus `spacing`.
///
/// Overflow is not handled: items past the end of the rectangle are still
/// placed, and the space offered to later nested nodes bottoms out at zero.
/// Hidden elements are skipped.
#[derive(Debug)]
pub struct Flow {
    items: Vec<Child>,
    axis: Axis,
    spacing: f64,
    align: Align,
}

impl Flow {
    pub fn new(axis: Axis) -> Self {
        Self {
            items: Vec::new(),
            axis,
            spacing: 0.0,
            align: Align::Start,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set the gap between items.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
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

    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

impl Layout for Flow {
    fn layout(&self, rect: Rect, mut parent: Option<&mut dyn ParentCollection>) -> Placed {
        let main = self.axis;
        let cross = main.cross();

        let mut cursor = rect.start(main);
        let mut remaining = rect.extent(main);
        let mut placed = Vec::with_capacity(self.items.len());

        for item in self.items.iter().filter(|item| item.is_visible()) {
            let slot = rect.with_span(main, cursor, remaining);

            let mut display = item.resolve(slot, reborrow(&mut parent));
            display.set_position_on(main, cursor);
            align_item(&mut display, slot, cross, self.align);

            let advance = display.size_on(main) + self.spacing;
            cursor += advance;
            remaining = (remaining - advance).max(0.0);
            placed.push(display);
        }

        tracing::trace!(?rect, placed = placed.len(), end = cursor, "flow layout");
        Placed::group(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expand, SizedBox};
    use tessera_core::{share, Container, Element};

    #[test]
    fn test_items_advance_by_size_and_spacing() {
        let items: Vec<_> = [30.0, 20.0, 10.0]
            .into_iter()
            .map(|w| share(Element::sized(w, 10.0)))
            .collect();
        let node = Flow::horizontal()
            .with_spacing(5.0)
            .with_children(items.iter().cloned());

        node.layout(Rect::new(0.0, 0.0, 500.0, 10.0), None);

        let xs: Vec<f64> = items.iter().map(|i| i.borrow().x()).collect();
        assert_eq!(xs, vec![0.0, 35.0, 60.0]);
    }

    #[test]
    fn test_vertical_flow_with_cross_alignment() {
        let a = share(Element::sized(20.0, 10.0));
        let b = share(Element::sized(40.0, 30.0));
        let node = Flow::vertical()
            .with_spacing(2.0)
            .with_align(Align::End)
            .with_child(a.clone())
            .with_child(b.clone());

        node.layout(Rect::new(10.0, 10.0, 100.0, 100.0), None);

        assert_eq!(a.borrow().bounds(), Rect::new(90.0, 10.0, 20.0, 10.0));
        assert_eq!(b.borrow().bounds(), Rect::new(70.0, 22.0, 40.0, 30.0));
    }

    #[test]
    fn test_hidden_items_are_skipped() {
        let a = share(Element::sized(10.0, 10.0));
        let hidden = share(Element::sized(100.0, 10.0).hidden());
        let b = share(Element::sized(10.0, 10.0));
        let node = Flow::horizontal()
            .with_child(a.clone())
            .with_child(hidden.clone())
            .with_child(b.clone());

        let placed = node.layout(Rect::new(0.0, 0.0, 100.0, 10.0), None);

        assert!((b.borrow().x() - 10.0).abs() < 0.001);
        assert_eq!(placed.elements().len(), 2);
    }

    #[test]
    fn test_remaining_space_never_negative() {
        let wide = share(Element::sized(80.0, 10.0));
        let filler = share(Element::sized(1.0, 1.0));
        let node = Flow::horizontal()
            .with_spacing(10.0)
            .with_child(wide.clone())
            .with_child(Expand::new(filler.clone()));

        node.layout(Rect::new(0.0, 0.0, 50.0, 10.0), None);

        // The filler is offered a zero-width slot past the end.
        assert_eq!(filler.borrow().bounds(), Rect::new(90.0, 0.0, 0.0, 10.0));
    }

    #[test]
    fn test_nested_results_attach_to_parent() {
        let a = share(Element::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let b = share(Element::sized(10.0, 10.0));
        let node = Flow::horizontal()
            .with_child(SizedBox::new(a, Rect::new(0.0, 0.0, 40.0, 40.0)))
            .with_child(b);
        let mut parent = Container::new();

        node.layout(Rect::new(0.0, 0.0, 100.0, 100.0), Some(&mut parent));

        assert_eq!(parent.len(), 2);
    }
}
