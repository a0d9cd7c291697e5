//! Push two children to opposite edges.

use tessera_core::{align_item, Align, Axis, ParentCollection, Positionable, Rect};

use crate::node::{reborrow, Child, Layout};
use crate::placed::Placed;

/// Places `first` flush with the leading edge and `second` flush with the
/// trailing edge of the main axis. Both are aligned independently on the
/// cross axis.
#[derive(Debug)]
pub struct Separate {
    first: Child,
    second: Child,
    axis: Axis,
    align: Align,
}

impl Separate {
    /// Vertical separation, centered on the cross axis.
    pub fn new(first: impl Into<Child>, second: impl Into<Child>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            axis: Axis::Vertical,
            align: Align::Center,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn align(&self) -> Align {
        self.align
    }
}

impl Layout for Separate {
    fn layout(&self, rect: Rect, mut parent: Option<&mut dyn ParentCollection>) -> Placed {
        let main = self.axis;
        let cross = main.cross();

        let mut first = self.first.resolve(rect, reborrow(&mut parent));
        let mut second = self.second.resolve(rect, reborrow(&mut parent));

        first.set_position_on(main, rect.start(main));
        let trailing = rect.end(main) - second.size_on(main);
        second.set_position_on(main, trailing);

        align_item(&mut first, rect, cross, self.align);
        align_item(&mut second, rect, cross, self.align);

        Placed::group([first, second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{share, Container, Element};

    #[test]
    fn test_horizontal_separation() {
        let left = share(Element::sized(20.0, 10.0));
        let right = share(Element::sized(30.0, 40.0));
        let node = Separate::new(left.clone(), right.clone())
            .with_axis(Axis::Horizontal)
            .with_align(Align::End);

        let placed = node.layout(Rect::new(0.0, 0.0, 200.0, 50.0), None);

        assert_eq!(left.borrow().bounds(), Rect::new(0.0, 40.0, 20.0, 10.0));
        assert_eq!(right.borrow().bounds(), Rect::new(170.0, 10.0, 30.0, 40.0));
        assert_eq!(placed.as_group().map(|g| g.len()), Some(2));
    }

    #[test]
    fn test_vertical_default_centers_cross_axis() {
        let top = share(Element::sized(20.0, 10.0));
        let bottom = share(Element::sized(40.0, 10.0));
        let node = Separate::new(top.clone(), bottom.clone());

        node.layout(Rect::new(0.0, 0.0, 100.0, 300.0), None);

        assert_eq!(top.borrow().bounds(), Rect::new(40.0, 0.0, 20.0, 10.0));
        assert_eq!(bottom.borrow().bounds(), Rect::new(30.0, 290.0, 40.0, 10.0));
    }

    #[test]
    fn test_pair_moves_as_unit() {
        let a = share(Element::sized(10.0, 10.0));
        let b = share(Element::sized(10.0, 10.0));
        let node = Separate::new(a.clone(), b.clone()).with_axis(Axis::Horizontal);
        let mut parent = Container::new();

        let mut placed = node.layout(Rect::new(0.0, 0.0, 100.0, 10.0), Some(&mut parent));
        placed.set_y(25.0);

        assert_eq!(parent.len(), 2);
        assert!((a.borrow().y() - 25.0).abs() < 0.001);
        assert!((b.borrow().x() - 90.0).abs() < 0.001);
        assert!((b.borrow().y() - 25.0).abs() < 0.001);
    }
}
