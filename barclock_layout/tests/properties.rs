// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the layout engine.
//!
//! Symbols are generated from random Pharmacode and POSTNET payloads, and
//! views from random sizes and margins.

use barclock_layout::{
    FULL_SWEEP_DEGREES, PrimitiveShape, RenderHandle, ShapeMode, element_extents, layout,
};
use barclock_symbol::{BarKind, EncodedSymbol, encode_pharmacode, encode_postnet};
use kurbo::{Insets, Point, Rect};
use proptest::prelude::*;

fn any_symbol() -> impl Strategy<Value = EncodedSymbol> {
    prop_oneof![
        (3_u32..=131_070, any::<bool>())
            .prop_map(|(raw, trailing)| encode_pharmacode(raw, trailing).unwrap()),
        (0_u64..=999_999, any::<bool>())
            .prop_map(|(raw, check)| encode_postnet(raw, check).unwrap()),
    ]
}

fn any_handle(mode: ShapeMode) -> impl Strategy<Value = RenderHandle> {
    (
        100.0_f64..2000.0,
        100.0_f64..2000.0,
        0.0_f64..40.0,
        0.0_f64..40.0,
        0.0_f64..40.0,
        0.0_f64..40.0,
        any::<bool>(),
    )
        .prop_map(move |(w, h, left, top, right, bottom, full_width)| {
            let mut handle = RenderHandle::new(w, h)
                .with_shape_mode(mode)
                .with_margins(Insets::new(left, top, right, bottom));
            handle.full_width = full_width;
            handle
        })
}

/// Whether two angles in degrees point the same way.
fn same_direction(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(360.0);
    d < 1e-6 || d > 360.0 - 1e-6
}

fn union(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    let mut it = rects.into_iter();
    let first = it.next()?;
    Some(it.fold(first, |acc, r| acc.union(r)))
}

proptest! {
    #[test]
    fn linear_bars_are_centered(symbol in any_symbol(), handle in any_handle(ShapeMode::Linear)) {
        let out = layout(&symbol, &handle, None).unwrap();
        let bars = union(out.primitives.iter().map(|p| match p.shape {
            PrimitiveShape::Rect(r) => r,
            _ => unreachable!(),
        }))
        .unwrap();
        prop_assert!((bars.center().x - handle.view_width / 2.0).abs() <= 0.5);
        prop_assert!((out.content_bounds.center().y - handle.view_height / 2.0).abs() <= 0.5);
    }

    #[test]
    fn linear_bars_stay_inside_content(symbol in any_symbol(), handle in any_handle(ShapeMode::Linear)) {
        let out = layout(&symbol, &handle, None).unwrap();
        let content = out.content_bounds.inflate(1e-6, 1e-6);
        for p in &out.primitives {
            let b = p.shape.bounding_box();
            prop_assert!(b.x0 >= content.x0 && b.x1 <= content.x1);
            prop_assert!(b.y0 >= content.y0 && b.y1 <= content.y1);
        }
    }

    #[test]
    fn radial_spans_close_the_circle(symbol in any_symbol()) {
        let spans: f64 = element_extents(&symbol, FULL_SWEEP_DEGREES)
            .iter()
            .map(|r| r.end - r.start)
            .sum();
        prop_assert!((spans - 360.0).abs() < 1e-9);
    }

    #[test]
    fn radial_wedges_follow_unit_spans(
        symbol in any_symbol(),
        handle in any_handle(ShapeMode::Radial),
        start_angle in -720.0_f64..720.0,
    ) {
        let mut handle = handle;
        handle.start_angle = start_angle;
        let out = layout(&symbol, &handle, None).unwrap();

        let center = handle.target_center();
        let inner = handle.inner_radius();
        let outer = handle.outer_radius();
        let short_outer = (outer * handle.short_bar_scale()).max(inner);
        let total = f64::from(symbol.canonical_thickness());
        let span = |kind: BarKind| f64::from(kind.unit_width()) * 360.0 / total;
        let angle_of = |pt: Point| {
            let v = pt - center;
            v.y.atan2(v.x).to_degrees()
        };
        let elements = symbol.elements();

        // Walk the symbol in order: spaces between bars only advance the angle.
        let mut expected = start_angle;
        let mut next = 0;
        for p in &out.primitives {
            let PrimitiveShape::Wedge(quad) = p.shape else {
                unreachable!();
            };
            for gap in &elements[next..p.ordinal] {
                prop_assert!(gap.kind.is_space());
                expected += span(gap.kind);
            }
            let kind = elements[p.ordinal].kind;
            prop_assert!(same_direction(angle_of(quad.points[0]), expected));
            expected += span(kind);
            prop_assert!(same_direction(angle_of(quad.points[1]), expected));

            let want = if kind.is_short() { short_outer } else { outer };
            prop_assert!(((quad.points[2] - center).hypot() - want).abs() < 1e-6);
            prop_assert!(((quad.points[3] - center).hypot() - want).abs() < 1e-6);
            next = p.ordinal + 1;
        }
        for gap in &elements[next..] {
            prop_assert!(gap.kind.is_space());
            expected += span(gap.kind);
        }
        prop_assert!((expected - (start_angle + FULL_SWEEP_DEGREES)).abs() < 1e-6);
    }

    #[test]
    fn radial_wedges_lie_within_the_ring(symbol in any_symbol(), handle in any_handle(ShapeMode::Radial)) {
        let out = layout(&symbol, &handle, None).unwrap();
        let center = handle.target_center();
        let inner = handle.inner_radius();
        let outer = handle.outer_radius();
        prop_assert_eq!(out.primitives.len(), symbol.bar_count());
        for p in &out.primitives {
            let PrimitiveShape::Wedge(quad) = p.shape else {
                unreachable!();
            };
            for pt in quad.points {
                let r = (pt - center).hypot();
                prop_assert!(r >= inner - 1e-6 && r <= outer + 1e-6);
            }
        }
    }

    #[test]
    fn target_rings_fill_the_band(symbol in any_symbol(), handle in any_handle(ShapeMode::Target)) {
        let out = layout(&symbol, &handle, None).unwrap();
        let band = handle.target_band();
        let mut last_outer = 0.0_f64;
        for p in &out.primitives {
            let PrimitiveShape::Ring(ring) = p.shape else {
                unreachable!();
            };
            prop_assert!(ring.inner_radius >= last_outer - 1e-9);
            prop_assert!(ring.outer_radius <= band + 1e-9);
            last_outer = ring.outer_radius;
        }
    }

    #[test]
    fn layout_of_same_symbol_has_no_delta(symbol in any_symbol(), handle in any_handle(ShapeMode::Linear)) {
        let first = layout(&symbol, &handle, None).unwrap();
        let second = layout(&symbol, &handle, Some(first.barcode_map.as_slice())).unwrap();
        prop_assert_eq!(second.delta.as_ref().map(|d| d.changed_count()), Some(0));
        prop_assert!(second.primitives.iter().all(|p| !p.is_delta));
    }
}

#[test]
fn radial_start_angle_rotates_first_wedge() {
    let symbol = encode_pharmacode(6, true).unwrap();
    let mut handle = RenderHandle::new(200.0, 200.0)
        .with_shape_mode(ShapeMode::Radial)
        .with_radii(40.0, 80.0);
    handle.start_angle = 90.0;
    let out = layout(&symbol, &handle, None).unwrap();
    let PrimitiveShape::Wedge(quad) = out.primitives[0].shape else {
        panic!("expected a wedge");
    };
    // 90 degrees points down in y-down view coordinates.
    assert!((quad.points[0] - Point::new(100.0, 140.0)).hypot() < 1e-9);
}
