//! The layout protocol.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tessera_core::{ElementRef, ParentCollection, Positionable, Rect};

use crate::placed::Placed;

/// A node that places its children within an available rectangle.
///
/// `rect` is read-only input. When `parent` is given, concrete elements the
/// node places are attached to it unless already present.
///
/// A pass writes element geometry through `borrow_mut`: no child element may
/// be borrowed while `layout` runs, or the pass panics. Parents and scroll
/// targets are different; they may be busy and are skipped when they are.
pub trait Layout {
    fn layout(&self, rect: Rect, parent: Option<&mut dyn ParentCollection>) -> Placed;
}

/// A layout child: either a nested node or a concrete element.
pub enum Child {
    Node(Box<dyn Layout>),
    Element(ElementRef),
}

impl Child {
    pub fn node<L: Layout + 'static>(node: L) -> Self {
        Child::Node(Box::new(node))
    }

    pub fn element<T: Positionable + 'static>(element: &Rc<RefCell<T>>) -> Self {
        let element: ElementRef = element.clone();
        Child::Element(element)
    }

    /// True when this child performs layout itself.
    pub fn is_layout(&self) -> bool {
        matches!(self, Child::Node(_))
    }

    pub fn as_layout(&self) -> Option<&dyn Layout> {
        match self {
            Child::Node(node) => Some(node.as_ref()),
            Child::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementRef> {
        match self {
            Child::Element(element) => Some(element),
            Child::Node(_) => None,
        }
    }

    /// Nodes always take part in layout; elements only while visible.
    pub fn is_visible(&self) -> bool {
        match self {
            Child::Node(_) => true,
            Child::Element(element) => element.try_borrow().map_or(true, |e| e.visible()),
        }
    }

    /// Lay out a nested node in `rect`, or attach an element and hand it
    /// back with its geometry untouched.
    pub fn resolve(&self, rect: Rect, parent: Option<&mut dyn ParentCollection>) -> Placed {
        match self {
            Child::Node(node) => node.layout(rect, parent),
            Child::Element(element) => {
                if let Some(parent) = parent {
                    parent.attach(element);
                }
                Placed::Element(element.clone())
            }
        }
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(_) => f.write_str("Child::Node(..)"),
            Child::Element(element) => match element.try_borrow() {
                Ok(e) => write!(f, "Child::Element({:?})", e.bounds()),
                Err(_) => f.write_str("Child::Element(<borrowed>)"),
            },
        }
    }
}

impl From<ElementRef> for Child {
    fn from(element: ElementRef) -> Self {
        Child::Element(element)
    }
}

impl<T: Positionable + 'static> From<Rc<RefCell<T>>> for Child {
    fn from(element: Rc<RefCell<T>>) -> Self {
        let element: ElementRef = element;
        Child::Element(element)
    }
}

impl From<Box<dyn Layout>> for Child {
    fn from(node: Box<dyn Layout>) -> Self {
        Child::Node(node)
    }
}

/// Implements `From<Node> for Child` for layout node types.
macro_rules! impl_into_child {
    ($($node:ty),* $(,)?) => {
        $(
            impl From<$node> for Child {
                fn from(node: $node) -> Self {
                    Child::node(node)
                }
            }
        )*
    };
}

impl_into_child!(
    crate::Center,
    crate::Expand,
    crate::Padding,
    crate::SizedBox,
    crate::Separate,
    crate::EqualSpace,
    crate::Flow,
);

/// Attach every concrete element in `placed` to `parent`.
pub fn attach(parent: &mut dyn ParentCollection, placed: &Placed) {
    placed.for_each_element(&mut |element| {
        parent.attach(element);
    });
}

/// Reborrow an optional parent for a nested call.
pub(crate) fn reborrow<'a>(
    parent: &'a mut Option<&mut dyn ParentCollection>,
) -> Option<&'a mut dyn ParentCollection> {
    match parent {
        Some(parent) => {
            let parent: &'a mut dyn ParentCollection = &mut **parent;
            Some(parent)
        }
        None => None,
    }
}
