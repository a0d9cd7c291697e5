//! Center a child within the available space.

use tessera_core::{center_in, ParentCollection, Rect};

use crate::node::{Child, Layout};
use crate::placed::Placed;

/// Centers its child, shrinking it first if it does not fit.
#[derive(Debug)]
pub struct Center {
    child: Child,
}

impl Center {
    pub fn new(child: impl Into<Child>) -> Self {
        Self { child: child.into() }
    }

    pub fn child(&self) -> &Child {
        &self.child
    }
}

impl Layout for Center {
    fn layout(&self, rect: Rect, parent: Option<&mut dyn ParentCollection>) -> Placed {
        let mut placed = self.child.resolve(rect, parent);
        center_in(&mut placed, rect);
        placed
    }
}
