//! Layout results and the positionable aggregate.

use std::fmt;

use smallvec::SmallVec;
use tessera_core::{ElementRef, Positionable, Rect};

/// What a layout node placed.
///
/// Reading or moving a `Placed` borrows its elements, so it follows the
/// same rule as a layout pass: the elements must not be borrowed elsewhere.
#[derive(Clone)]
pub enum Placed {
    /// A single host element.
    Element(ElementRef),
    /// Several independently owned elements moved as one.
    Group(Box<Aggregate>),
}

impl Placed {
    /// Group `items` under an aggregate sized to enclose them.
    pub fn group(items: impl IntoIterator<Item = Placed>) -> Self {
        Placed::Group(Box::new(Aggregate::enclosing(items)))
    }

    pub fn as_element(&self) -> Option<&ElementRef> {
        match self {
            Placed::Element(element) => Some(element),
            Placed::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Aggregate> {
        match self {
            Placed::Group(group) => Some(group),
            Placed::Element(_) => None,
        }
    }

    /// Visit every concrete element, depth first.
    pub fn for_each_element(&self, f: &mut dyn FnMut(&ElementRef)) {
        match self {
            Placed::Element(element) => f(element),
            Placed::Group(group) => {
                for item in group.items() {
                    item.for_each_element(f);
                }
            }
        }
    }

    /// All concrete elements, flattened.
    pub fn elements(&self) -> Vec<ElementRef> {
        let mut elements = Vec::new();
        self.for_each_element(&mut |element| elements.push(element.clone()));
        elements
    }
}

impl fmt::Debug for Placed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placed::Element(element) => match element.try_borrow() {
                Ok(e) => f.debug_tuple("Element").field(&e.bounds()).finish(),
                Err(_) => f.write_str("Element(<borrowed>)"),
            },
            Placed::Group(group) => f.debug_tuple("Group").field(group).finish(),
        }
    }
}

impl Positionable for Placed {
    fn x(&self) -> f64 {
        match self {
            Placed::Element(e) => e.borrow().x(),
            Placed::Group(g) => g.x(),
        }
    }

    fn set_x(&mut self, x: f64) {
        match self {
            Placed::Element(e) => e.borrow_mut().set_x(x),
            Placed::Group(g) => g.set_x(x),
        }
    }

    fn y(&self) -> f64 {
        match self {
            Placed::Element(e) => e.borrow().y(),
            Placed::Group(g) => g.y(),
        }
    }

    fn set_y(&mut self, y: f64) {
        match self {
            Placed::Element(e) => e.borrow_mut().set_y(y),
            Placed::Group(g) => g.set_y(y),
        }
    }

    fn width(&self) -> f64 {
        match self {
            Placed::Element(e) => e.borrow().width(),
            Placed::Group(g) => g.width(),
        }
    }

    fn set_width(&mut self, width: f64) {
        match self {
            Placed::Element(e) => e.borrow_mut().set_width(width),
            Placed::Group(g) => g.set_width(width),
        }
    }

    fn height(&self) -> f64 {
        match self {
            Placed::Element(e) => e.borrow().height(),
            Placed::Group(g) => g.height(),
        }
    }

    fn set_height(&mut self, height: f64) {
        match self {
            Placed::Element(e) => e.borrow_mut().set_height(height),
            Placed::Group(g) => g.set_height(height),
        }
    }

    fn visible(&self) -> bool {
        match self {
            Placed::Element(e) => e.borrow().visible(),
            Placed::Group(g) => g.visible(),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            Placed::Element(e) => e.borrow_mut().set_visible(visible),
            Placed::Group(g) => g.set_visible(visible),
        }
    }
}

/// A virtual positionable over elements that need not share a parent.
///
/// Moving the aggregate shifts every item by the same delta. Resizing it only
/// changes the snapshot rectangle; items are never scaled.
#[derive(Debug, Clone)]
pub struct Aggregate {
    items: SmallVec<[Placed; 4]>,
    bounds: Rect,
    visible: bool,
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::new(std::iter::empty(), Rect::ZERO)
    }
}

impl Aggregate {
    /// Aggregate with an explicit bounding snapshot.
    pub fn new(items: impl IntoIterator<Item = Placed>, bounds: Rect) -> Self {
        let items: SmallVec<[Placed; 4]> = items.into_iter().collect();
        let visible = items.is_empty() || items.iter().any(|item| item.visible());
        Self { items, bounds, visible }
    }

    /// Aggregate whose snapshot is the union of its items' bounds.
    pub fn enclosing(items: impl IntoIterator<Item = Placed>) -> Self {
        let items: SmallVec<[Placed; 4]> = items.into_iter().collect();
        let bounds = items
            .iter()
            .map(|item| item.bounds())
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_default();
        Self::new(items, bounds)
    }

    pub fn items(&self) -> &[Placed] {
        &self.items
    }

    pub fn into_items(self) -> SmallVec<[Placed; 4]> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Positionable for Aggregate {
    fn x(&self) -> f64 {
        self.bounds.x
    }

    fn set_x(&mut self, x: f64) {
        let dx = x - self.bounds.x;
        for item in self.items.iter_mut() {
            let ix = item.x();
            item.set_x(ix + dx);
        }
        self.bounds.x = x;
    }

    fn y(&self) -> f64 {
        self.bounds.y
    }

    fn set_y(&mut self, y: f64) {
        let dy = y - self.bounds.y;
        for item in self.items.iter_mut() {
            let iy = item.y();
            item.set_y(iy + dy);
        }
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
        for item in self.items.iter_mut() {
            item.set_visible(visible);
        }
        self.visible = visible;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
