//! A clipped content area with scrollbars.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use tessera_core::{Axis, Container, ElementRef, ParentCollection, Positionable, Rect};
use tessera_layout::{Layout, Placed};

use crate::config::{ScrollAxes, ScrollPaneConfig};
use crate::scrollbar::Scrollbar;

/// Content container behind a mask, scrolled by up to two scrollbars.
///
/// Children live in the content container's local space. The pane is a
/// [`ParentCollection`]: attaching through it refreshes the scrollbars.
#[derive(Debug)]
pub struct ScrollPane {
    config: ScrollPaneConfig,
    x: f64,
    y: f64,
    visible: bool,
    content: Rc<RefCell<Container>>,
    vertical: Option<Scrollbar>,
    horizontal: Option<Scrollbar>,
}

impl Default for ScrollPane {
    fn default() -> Self {
        Self::new(ScrollPaneConfig::default())
    }
}

impl ScrollPane {
    pub fn new(config: ScrollPaneConfig) -> Self {
        let axes = config.axes;
        let mut pane = Self {
            config,
            x: 0.0,
            y: 0.0,
            visible: true,
            content: Rc::new(RefCell::new(Container::new())),
            vertical: None,
            horizontal: None,
        };
        pane.set_scrollbars(axes);
        pane
    }

    pub fn config(&self) -> &ScrollPaneConfig {
        &self.config
    }

    pub fn axes(&self) -> ScrollAxes {
        self.config.axes
    }

    pub fn content(&self) -> &Rc<RefCell<Container>> {
        &self.content
    }

    /// Visible region in pane space.
    pub fn mask(&self) -> Rect {
        Rect::new(0.0, 0.0, self.config.width, self.config.height)
    }

    /// Region left for content once the scrollbars are accounted for.
    pub fn viewport(&self) -> Rect {
        let mut width = self.config.width;
        let mut height = self.config.height;
        if let Some(bar) = &self.vertical {
            width -= bar.width() + self.config.gutter;
        }
        if let Some(bar) = &self.horizontal {
            height -= bar.height() + self.config.gutter;
        }
        Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0))
    }

    /// The vertical scrollbar if present, else the horizontal one.
    pub fn scrollbar(&self) -> Option<&Scrollbar> {
        self.vertical.as_ref().or(self.horizontal.as_ref())
    }

    pub fn scrollbar_mut(&mut self) -> Option<&mut Scrollbar> {
        self.vertical.as_mut().or(self.horizontal.as_mut())
    }

    pub fn vertical(&self) -> Option<&Scrollbar> {
        self.vertical.as_ref()
    }

    pub fn vertical_mut(&mut self) -> Option<&mut Scrollbar> {
        self.vertical.as_mut()
    }

    pub fn horizontal(&self) -> Option<&Scrollbar> {
        self.horizontal.as_ref()
    }

    pub fn horizontal_mut(&mut self) -> Option<&mut Scrollbar> {
        self.horizontal.as_mut()
    }

    /// Create or drop scrollbars to match `axes`.
    pub fn set_scrollbars(&mut self, axes: ScrollAxes) {
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let wanted = axes.has(axis);
            let present = self.bar(axis).is_some();
            if wanted && !present {
                let bar = self.make_bar(axis);
                *self.bar_slot(axis) = Some(bar);
            } else if !wanted {
                if let Some(mut bar) = self.bar_slot(axis).take() {
                    bar.detach();
                }
            }
        }
        self.config.axes = axes;
    }

    /// Resize the mask and fit the scrollbars to it.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.config.width = width.max(0.0);
        self.config.height = height.max(0.0);

        let mask = self.mask();
        let (gutter, pane_width, pane_height) = (self.config.gutter, self.config.width, self.config.height);
        for bar in [self.vertical.as_mut(), self.horizontal.as_mut()].into_iter().flatten() {
            let extent = mask.extent(bar.axis());
            bar.set_axis_length(extent);
            bar.set_page_size(extent);
            place_bar(bar, gutter, pane_width, pane_height);
        }
    }

    pub fn refresh(&mut self) {
        if let Some(bar) = self.vertical.as_mut() {
            bar.refresh();
        }
        if let Some(bar) = self.horizontal.as_mut() {
            bar.refresh();
        }
    }

    /// Lay `node` out into the content, then refresh once.
    pub fn layout_content(&mut self, node: &dyn Layout) -> Placed {
        let viewport = self.viewport();
        let placed = match self.content.try_borrow_mut() {
            Ok(mut content) => node.layout(viewport, Some(&mut *content)),
            Err(_) => {
                tracing::debug!("scroll content busy; laying out without attaching");
                node.layout(viewport, None)
            }
        };
        self.refresh();
        placed
    }

    /// Route a wheel delta to the primary scrollbar.
    pub fn handle_wheel(&mut self, delta: DVec2) -> bool {
        match self.scrollbar_mut() {
            Some(bar) => {
                bar.wheel(delta);
                true
            }
            None => false,
        }
    }

    /// Remove the child at `index` from the content.
    pub fn remove_child_at(&mut self, index: usize) -> Option<ElementRef> {
        let removed = self.content.try_borrow_mut().ok()?.remove_child_at(index);
        self.refresh();
        removed
    }

    fn bar(&self, axis: Axis) -> Option<&Scrollbar> {
        match axis {
            Axis::Vertical => self.vertical.as_ref(),
            Axis::Horizontal => self.horizontal.as_ref(),
        }
    }

    fn bar_slot(&mut self, axis: Axis) -> &mut Option<Scrollbar> {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    fn make_bar(&self, axis: Axis) -> Scrollbar {
        let mask = self.mask();
        let extent = mask.extent(axis);
        let config = self
            .config
            .scrollbar
            .clone()
            .with_axis(axis)
            .with_axis_length(extent)
            .with_page_size(extent);

        let mut bar = Scrollbar::new(config);
        let content: ElementRef = self.content.clone();
        bar.set_target_masked(content, mask);
        place_bar(&mut bar, self.config.gutter, self.config.width, self.config.height);
        bar
    }
}

/// Put a vertical bar along the right edge, a horizontal one along the
/// bottom.
fn place_bar(bar: &mut Scrollbar, gutter: f64, width: f64, height: f64) {
    match bar.axis() {
        Axis::Vertical => bar.set_position(width - bar.width() - gutter, 0.0),
        Axis::Horizontal => bar.set_position(0.0, height - bar.height() - gutter),
    }
}

impl ParentCollection for ScrollPane {
    fn add_child(&mut self, child: ElementRef) {
        match self.content.try_borrow_mut() {
            Ok(mut content) => content.add_child(child),
            Err(_) => {
                tracing::debug!("scroll content busy; child not added");
                return;
            }
        }
        self.refresh();
    }

    fn remove_child(&mut self, child: &ElementRef) -> bool {
        let removed = self
            .content
            .try_borrow_mut()
            .map_or(false, |mut content| content.remove_child(child));
        if removed {
            self.refresh();
        }
        removed
    }

    fn contains(&self, child: &ElementRef) -> bool {
        self.content
            .try_borrow()
            .map_or(false, |content| content.contains(child))
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&ElementRef)) {
        if let Ok(content) = self.content.try_borrow() {
            content.for_each_child(f);
        }
    }
}

impl Positionable for ScrollPane {
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
        self.config.width
    }

    fn set_width(&mut self, width: f64) {
        self.set_size(width, self.config.height);
    }

    fn height(&self) -> f64 {
        self.config.height
    }

    fn set_height(&mut self, height: f64) {
        self.set_size(self.config.width, height);
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{share, Align, Element};
    use tessera_layout::Flow;

    fn tall_child(height: f64) -> ElementRef {
        share(Element::sized(100.0, height))
    }

    #[test]
    fn test_default_pane_has_vertical_bar() {
        let pane = ScrollPane::default();
        let bar = pane.vertical().expect("vertical bar");

        assert!(pane.horizontal().is_none());
        assert!((bar.x() - 180.0).abs() < 0.001);
        assert!((bar.page_size() - 200.0).abs() < 0.001);
        assert_eq!(pane.viewport(), Rect::new(0.0, 0.0, 180.0, 200.0));
    }

    #[test]
    fn test_adding_children_refreshes() {
        let mut pane = ScrollPane::default();
        pane.add_child(tall_child(800.0));

        let bar = pane.scrollbar().expect("scrollbar");
        assert!(bar.visible());
        assert!((bar.thumb_size() - 50.0).abs() < 0.001);
        assert_eq!(pane.child_count(), 1);
    }

    #[test]
    fn test_wheel_scrolls_content() {
        let mut pane = ScrollPane::default();
        pane.add_child(tall_child(800.0));

        assert!(pane.handle_wheel(DVec2::new(0.0, 30.0)));
        assert!((pane.content().borrow().y() + 120.0).abs() < 0.001);
    }

    #[test]
    fn test_set_scrollbars() {
        let mut pane = ScrollPane::default();
        pane.set_scrollbars(ScrollAxes::BOTH);
        let horizontal = pane.horizontal().expect("horizontal bar");
        assert!((horizontal.y() - 180.0).abs() < 0.001);
        assert_eq!(pane.viewport(), Rect::new(0.0, 0.0, 180.0, 180.0));

        pane.set_scrollbars(ScrollAxes::HORIZONTAL);
        assert!(pane.vertical().is_none());
        assert!(pane.scrollbar().is_some_and(|bar| bar.axis() == Axis::Horizontal));

        pane.set_scrollbars(ScrollAxes::NONE);
        assert!(!pane.handle_wheel(DVec2::new(0.0, 10.0)));
    }

    #[test]
    fn test_layout_content_attaches_and_refreshes_once() {
        let mut pane = ScrollPane::default();
        let rows: Vec<_> = (0..10).map(|_| share(Element::sized(10.0, 50.0))).collect();
        let node = Flow::vertical()
            .with_align(Align::Stretch)
            .with_children(rows.iter().cloned());

        pane.layout_content(&node);

        assert_eq!(pane.content().borrow().len(), 10);
        assert!((rows[0].borrow().width() - 180.0).abs() < 0.001);
        let bar = pane.scrollbar().expect("scrollbar");
        assert!((bar.thumb_size() - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_two_bars_scroll_their_own_axis() {
        let mut pane = ScrollPane::new(ScrollPaneConfig::default().with_axes(ScrollAxes::BOTH));
        pane.add_child(share(Element::sized(800.0, 800.0)));

        if let Some(bar) = pane.horizontal_mut() {
            bar.page_down();
        }
        assert!((pane.content().borrow().x() + 200.0).abs() < 0.001);
        assert!(pane.content().borrow().y().abs() < 0.001);

        assert!(pane.handle_wheel(DVec2::new(0.0, 10.0)));
        assert!((pane.content().borrow().x() + 200.0).abs() < 0.001);
        assert!((pane.content().borrow().y() + 40.0).abs() < 0.001);

        if let Some(bar) = pane.horizontal_mut() {
            bar.page_up();
        }
        pane.refresh();
        assert!(pane.content().borrow().x().abs() < 0.001);
        assert!((pane.content().borrow().y() + 40.0).abs() < 0.001);
    }

    #[test]
    fn test_set_size_resizes_bars() {
        let mut pane = ScrollPane::default();
        pane.add_child(tall_child(400.0));
        pane.set_size(300.0, 100.0);

        let bar = pane.scrollbar().expect("scrollbar");
        assert!((bar.page_size() - 100.0).abs() < 0.001);
        assert!((bar.height() - 100.0).abs() < 0.001);
        assert!((bar.x() - 280.0).abs() < 0.001);
        assert!((bar.thumb_size() - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_removing_content_clamps_offset() {
        let mut pane = ScrollPane::default();
        let big = tall_child(800.0);
        pane.add_child(big.clone());
        pane.add_child(tall_child(100.0));
        if let Some(bar) = pane.scrollbar_mut() {
            bar.page_down();
            bar.page_down();
        }
        assert!((pane.content().borrow().y() + 400.0).abs() < 0.001);

        assert!(pane.remove_child(&big));
        assert!(pane.content().borrow().y().abs() < 0.001);
        assert!(!pane.contains(&big));
    }
}
