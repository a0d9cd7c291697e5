//! Fill the available space.

use tessera_core::{fill, ParentCollection, Rect};

use crate::node::{Child, Layout};
use crate::placed::Placed;

/// Forces its child to exactly the available rectangle.
#[derive(Debug)]
pub struct Expand {
    child: Child,
}

impl Expand {
    pub fn new(child: impl Into<Child>) -> Self {
        Self { child: child.into() }
    }

    pub fn child(&self) -> &Child {
        &self.child
    }
}

impl Layout for Expand {
    fn layout(&self, rect: Rect, parent: Option<&mut dyn ParentCollection>) -> Placed {
        let mut placed = self.child.resolve(rect, parent);
        fill(&mut placed, rect);
        placed
    }
}
