//! Property tests for the layout nodes.

use proptest::prelude::*;
use tessera_core::{share, Element, Positionable, Rect};
use tessera_layout::{Center, EqualSpace, Expand, Flow, Layout, Padding, SizedBox};

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0..500.0f64, -500.0..500.0f64, 0.0..800.0f64, 0.0..800.0f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn size() -> impl Strategy<Value = (f64, f64)> {
    (0.0..1000.0f64, 0.0..1000.0f64)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

proptest! {
    #[test]
    fn center_fits_and_shares_center(r in rect(), (w, h) in size()) {
        let item = share(Element::sized(w, h));
        Center::new(item.clone()).layout(r, None);

        let b = item.borrow().bounds();
        prop_assert!(b.width <= r.width + 1e-9);
        prop_assert!(b.height <= r.height + 1e-9);
        prop_assert!(close(b.center_x(), r.center_x()));
        prop_assert!(close(b.center_y(), r.center_y()));
    }

    #[test]
    fn expand_matches_rect_exactly(r in rect(), (w, h) in size()) {
        let item = share(Element::sized(w, h));
        Expand::new(item.clone()).layout(r, None);
        prop_assert_eq!(item.borrow().bounds(), r);
    }

    #[test]
    fn zero_padding_is_identity(r in rect(), (w, h) in size()) {
        let padded = share(Element::sized(w, h));
        let direct = share(Element::sized(w, h));

        Padding::all(0.0, Center::new(padded.clone())).layout(r, None);
        Center::new(direct.clone()).layout(r, None);

        prop_assert_eq!(padded.borrow().bounds(), direct.borrow().bounds());
    }

    #[test]
    fn oversized_padding_collapses_width(r in rect(), extra in 0.0..100.0f64) {
        let item = share(Element::sized(1.0, 1.0));
        let p = r.width / 2.0 + extra;
        Padding::all(p, Expand::new(item.clone())).layout(r, None);
        prop_assert_eq!(item.borrow().width(), 0.0);
    }

    #[test]
    fn sized_box_intersection_commutes(a in rect(), b in rect()) {
        prop_assume!(a.overlaps(&b));
        let first = share(Element::sized(1.0, 1.0));
        let second = share(Element::sized(1.0, 1.0));

        SizedBox::new(Expand::new(first.clone()), a).layout(b, None);
        SizedBox::new(Expand::new(second.clone()), b).layout(a, None);

        prop_assert_eq!(first.borrow().bounds(), second.borrow().bounds());
    }

    #[test]
    fn equal_space_slots_cover_rect(r in rect(), n in 1usize..12) {
        let items: Vec<_> = (0..n).map(|_| share(Element::sized(1.0, 1.0))).collect();
        let node = items
            .iter()
            .fold(EqualSpace::horizontal(), |node, item| node.with_child(Expand::new(item.clone())));

        node.layout(r, None);

        let total: f64 = items.iter().map(|i| i.borrow().width()).sum();
        prop_assert!((total - r.width).abs() < 1e-6);
        for item in &items {
            prop_assert!(close(item.borrow().width(), r.width / n as f64));
        }
    }

    #[test]
    fn flow_positions_are_prefix_sums(widths in prop::collection::vec(0.0..100.0f64, 1..10), spacing in 0.0..20.0f64) {
        let items: Vec<_> = widths.iter().map(|&w| share(Element::sized(w, 5.0))).collect();
        let node = Flow::horizontal()
            .with_spacing(spacing)
            .with_children(items.iter().cloned());

        node.layout(Rect::new(0.0, 0.0, 50.0, 5.0), None);

        let mut expected = 0.0;
        for (item, w) in items.iter().zip(&widths) {
            prop_assert!(close(item.borrow().x(), expected));
            expected += w + spacing;
        }
    }
}
