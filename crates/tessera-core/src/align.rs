//! Alignment primitives.
//!
//! Pure geometry on a single [`Positionable`]: none of these functions know
//! about layout nodes or parents.

use crate::geometry::{Align, Axis, Rect};
use crate::positionable::{ElementRef, Positionable};

/// Place `item` along `axis` within `rect` according to `align`.
///
/// Only the `axis` component of the item's geometry is touched.
pub fn align_item<P: Positionable + ?Sized>(item: &mut P, rect: Rect, axis: Axis, align: Align) {
    let start = rect.start(axis);
    let extent = rect.extent(axis);

    match align {
        Align::Start => item.set_position_on(axis, start),
        Align::Center => {
            let size = item.size_on(axis);
            item.set_position_on(axis, start + (extent - size) / 2.0);
        }
        Align::End => {
            let size = item.size_on(axis);
            item.set_position_on(axis, start + extent - size);
        }
        Align::Stretch => {
            item.set_position_on(axis, start);
            item.set_size_on(axis, extent);
        }
    }
}

/// Shrink `item` to fit `rect` if it is larger, then center it.
///
/// Items are never grown.
pub fn center_in<P: Positionable + ?Sized>(item: &mut P, rect: Rect) {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        shrink_on(item, axis, rect.extent(axis));
        align_item(item, rect, axis, Align::Center);
    }
}

/// Force `item` to exactly cover `rect`.
pub fn fill<P: Positionable + ?Sized>(item: &mut P, rect: Rect) {
    item.set_bounds(rect);
}

/// Shrink `item` to fit `rect` if it is larger, then move it the least
/// distance needed to lie inside `rect`.
pub fn clamp_into<P: Positionable + ?Sized>(item: &mut P, rect: Rect) {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        shrink_on(item, axis, rect.extent(axis));

        let start = rect.start(axis);
        let last = (rect.end(axis) - item.size_on(axis)).max(start);
        let pos = item.position_on(axis);
        if pos < start {
            item.set_position_on(axis, start);
        } else if pos > last {
            item.set_position_on(axis, last);
        }
    }
}

/// Center `item` over `target` without resizing it.
pub fn center_on<P: Positionable + ?Sized>(item: &mut P, target: Rect) {
    let (width, height) = (item.width(), item.height());
    item.set_position(
        target.x + 0.5 * (target.width - width),
        target.y + 0.5 * (target.height - height),
    );
}

/// Place each visible item after its predecessor along `axis`, leaving
/// `spacing` between them. The first item keeps its position.
pub fn order(axis: Axis, spacing: f64, items: &[ElementRef]) {
    let mut next: Option<f64> = None;

    for item in items {
        let mut item = item.borrow_mut();
        if !item.visible() {
            continue;
        }
        if let Some(pos) = next {
            item.set_position_on(axis, pos);
        }
        next = Some(item.position_on(axis) + item.size_on(axis) + spacing);
    }
}

fn shrink_on<P: Positionable + ?Sized>(item: &mut P, axis: Axis, extent: f64) {
    if item.size_on(axis) > extent {
        item.set_size_on(axis, extent.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positionable::{share, Element};

    fn at(x: f64, y: f64, w: f64, h: f64) -> Element {
        Element::new(Rect::new(x, y, w, h))
    }

    #[test]
    fn test_align_item_policies() {
        let rect = Rect::new(10.0, 0.0, 100.0, 50.0);

        let mut item = Element::sized(20.0, 10.0);
        align_item(&mut item, rect, Axis::Horizontal, Align::Start);
        assert!((item.x() - 10.0).abs() < 0.001);

        align_item(&mut item, rect, Axis::Horizontal, Align::Center);
        assert!((item.x() - 50.0).abs() < 0.001);

        align_item(&mut item, rect, Axis::Horizontal, Align::End);
        assert!((item.x() - 90.0).abs() < 0.001);

        align_item(&mut item, rect, Axis::Vertical, Align::Stretch);
        assert!((item.y() - 0.0).abs() < 0.001);
        assert!((item.height() - 50.0).abs() < 0.001);
        // Cross component untouched
        assert!((item.width() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_center_in_shrinks_but_never_grows() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);

        let mut big = at(0.0, 0.0, 150.0, 20.0);
        center_in(&mut big, rect);
        assert_eq!(big.bounds(), Rect::new(0.0, 10.0, 100.0, 20.0));

        let mut small = at(0.0, 0.0, 10.0, 10.0);
        center_in(&mut small, rect);
        assert_eq!(small.bounds(), Rect::new(45.0, 15.0, 10.0, 10.0));
    }

    #[test]
    fn test_clamp_into_moves_minimally() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        let mut left = at(-20.0, 30.0, 10.0, 10.0);
        clamp_into(&mut left, rect);
        assert_eq!(left.bounds(), Rect::new(0.0, 30.0, 10.0, 10.0));

        let mut overflowing = at(95.0, 95.0, 10.0, 10.0);
        clamp_into(&mut overflowing, rect);
        assert_eq!(overflowing.bounds(), Rect::new(90.0, 90.0, 10.0, 10.0));

        let mut inside = at(40.0, 40.0, 10.0, 10.0);
        clamp_into(&mut inside, rect);
        assert_eq!(inside.bounds(), Rect::new(40.0, 40.0, 10.0, 10.0));

        let mut wide = at(50.0, 0.0, 300.0, 10.0);
        clamp_into(&mut wide, rect);
        assert_eq!(wide.bounds(), Rect::new(0.0, 0.0, 100.0, 10.0));
    }

    #[test]
    fn test_center_on_target() {
        let mut item = Element::sized(10.0, 20.0);
        center_on(&mut item, Rect::new(100.0, 100.0, 50.0, 50.0));
        assert_eq!(item.bounds(), Rect::new(120.0, 115.0, 10.0, 20.0));
    }

    #[test]
    fn test_order_skips_hidden_items() {
        let a = share(at(5.0, 0.0, 30.0, 10.0));
        let hidden = share(at(0.0, 0.0, 100.0, 10.0).hidden());
        let b = share(at(0.0, 0.0, 20.0, 10.0));
        let items: [ElementRef; 3] = [a.clone(), hidden.clone(), b.clone()];

        order(Axis::Horizontal, 4.0, &items);

        assert!((a.borrow().x() - 5.0).abs() < 0.001);
        assert!((hidden.borrow().x() - 0.0).abs() < 0.001);
        assert!((b.borrow().x() - 39.0).abs() < 0.001);
    }
}
