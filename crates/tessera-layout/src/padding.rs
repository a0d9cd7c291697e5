//! Inset the available space.

use tessera_core::{clamp_into, ConfigError, ParentCollection, Rect};

use crate::node::{Child, Layout};
use crate::placed::Placed;

/// Space reserved on each side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    /// Same inset on every side.
    pub fn all(space: f64) -> Self {
        Self {
            left: space,
            right: space,
            top: space,
            bottom: space,
        }
    }

    /// One inset for left/right, another for top/bottom.
    pub fn sides(horizontal: f64, vertical: f64) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_length("left inset", self.left)?;
        ConfigError::check_length("right inset", self.right)?;
        ConfigError::check_length("top inset", self.top)?;
        ConfigError::check_length("bottom inset", self.bottom)?;
        Ok(())
    }

    /// The rectangle left after removing the insets from `rect`.
    ///
    /// An axis narrower than its combined insets collapses to zero size
    /// rather than going negative.
    pub fn shrink(&self, rect: Rect) -> Rect {
        let width = if rect.width > self.horizontal() {
            rect.width - self.horizontal()
        } else {
            0.0
        };
        let height = if rect.height > self.vertical() {
            rect.height - self.vertical()
        } else {
            0.0
        };
        Rect::new(rect.x + self.left, rect.y + self.top, width, height)
    }
}

/// Keeps a margin around its child.
///
/// Nested nodes are laid out in the inset rectangle. Concrete elements are
/// clamped into it instead of being centered.
#[derive(Debug)]
pub struct Padding {
    insets: Insets,
    child: Child,
}

impl Padding {
    pub fn new(insets: Insets, child: impl Into<Child>) -> Self {
        Self {
            insets,
            child: child.into(),
        }
    }

    pub fn all(space: f64, child: impl Into<Child>) -> Self {
        Self::new(Insets::all(space), child)
    }

    pub fn sides(horizontal: f64, vertical: f64, child: impl Into<Child>) -> Self {
        Self::new(Insets::sides(horizontal, vertical), child)
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn child(&self) -> &Child {
        &self.child
    }
}

impl Layout for Padding {
    fn layout(&self, rect: Rect, parent: Option<&mut dyn ParentCollection>) -> Placed {
        let inner = self.insets.shrink(rect);

        match &self.child {
            Child::Node(node) => node.layout(inner, parent),
            Child::Element(element) => {
                clamp_into(&mut *element.borrow_mut(), inner);
                if let Some(parent) = parent {
                    parent.attach(element);
                }
                Placed::Element(element.clone())
            }
        }
    }
}
