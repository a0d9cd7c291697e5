//! Limit the available space to a fixed rectangle.

use tessera_core::{clamp_into, ParentCollection, Rect};

use crate::node::{Child, Layout};
use crate::placed::Placed;

/// Constrains its child to the overlap of a fixed rectangle and the
/// rectangle offered at layout time.
#[derive(Debug)]
pub struct SizedBox {
    bounds: Rect,
    child: Child,
}

impl SizedBox {
    pub fn new(child: impl Into<Child>, bounds: Rect) -> Self {
        Self {
            bounds,
            child: child.into(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn child(&self) -> &Child {
        &self.child
    }
}

impl Layout for SizedBox {
    fn layout(&self, rect: Rect, parent: Option<&mut dyn ParentCollection>) -> Placed {
        let constrain = self.bounds.intersect(&rect);

        match &self.child {
            Child::Node(node) => node.layout(constrain, parent),
            Child::Element(element) => {
                clamp_into(&mut *element.borrow_mut(), constrain);
                if let Some(parent) = parent {
                    parent.attach(element);
                }
                Placed::Element(element.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expand;
    use tessera_core::{share, Element, Positionable};

    #[test]
    fn test_node_receives_intersection() {
        let item = share(Element::sized(1.0, 1.0));
        let node = SizedBox::new(Expand::new(item.clone()), Rect::new(0.0, 0.0, 60.0, 60.0));

        node.layout(Rect::new(20.0, 40.0, 100.0, 100.0), None);

        assert_eq!(item.borrow().bounds(), Rect::new(20.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn test_concrete_child_clamped_into_constraint() {
        let item = share(Element::new(Rect::new(90.0, 0.0, 20.0, 20.0)));
        let node = SizedBox::new(item.clone(), Rect::new(0.0, 0.0, 50.0, 50.0));

        node.layout(Rect::new(0.0, 0.0, 200.0, 200.0), None);

        assert_eq!(item.borrow().bounds(), Rect::new(30.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_disjoint_rects_give_zero_space() {
        let item = share(Element::sized(1.0, 1.0));
        let node = SizedBox::new(Expand::new(item.clone()), Rect::new(0.0, 0.0, 10.0, 10.0));

        node.layout(Rect::new(50.0, 50.0, 10.0, 10.0), None);

        let bounds = item.borrow().bounds();
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 0.0);
    }
}
