// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: symbol + handle to primitives.

use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};
use core::ops::Range;

use barclock_delta::{DeltaMask, compute_delta};
use barclock_symbol::{BarElement, BarKind, EncodedSymbol, PostnetBar};
use kurbo::{CircleSegment, Point, Rect, Vec2};

use crate::error::LayoutError;
use crate::extent::element_extents;
use crate::handle::{ColorToken, Effects, RenderHandle};
use crate::mode::ShapeMode;
use crate::primitive::{LayoutPrimitive, PrimitiveShape, Quad};

/// Full sweep of a radial layout, in degrees.
pub const FULL_SWEEP_DEGREES: f64 = 360.0;

/// Result of laying out one symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Mode the primitives were laid out in.
    pub mode: ShapeMode,
    /// One primitive per non-space element, in element order.
    pub primitives: Vec<LayoutPrimitive>,
    /// Kind codes of the symbol; retain as the previous map for the next
    /// tick.
    pub barcode_map: Vec<i8>,
    /// Changes against the previous map, if it was comparable.
    pub delta: Option<DeltaMask>,
    /// Bounds of the drawn content: the bar group in linear mode, the square
    /// around the outermost radius in round modes.
    pub content_bounds: Rect,
    /// Border to draw, when the handle asks for one.
    pub border: Option<Rect>,
    /// Effect levels for the renderer.
    pub effects: Effects,
}

impl Layout {
    /// Primitives whose element changed since the previous symbol.
    pub fn changed(&self) -> impl Iterator<Item = &LayoutPrimitive> + '_ {
        self.primitives.iter().filter(|p| p.is_delta)
    }
}

/// Lays out `symbol` according to `handle`.
///
/// `previous_map` is the [`Layout::barcode_map`] of the previous tick, if
/// any; each primitive's `is_delta` flag comes from comparing it with the
/// new map (see [`compute_delta`]). The engine keeps no state between calls.
///
/// # Errors
///
/// Returns [`LayoutError::EmptySymbol`] if the symbol has no elements.
///
/// # Example
///
/// ```
/// use barclock_layout::{PrimitiveShape, RenderHandle, layout};
/// use barclock_symbol::encode_pharmacode;
///
/// let handle = RenderHandle::new(120.0, 40.0);
/// let first = layout(&encode_pharmacode(12, false).unwrap(), &handle, None).unwrap();
/// assert_eq!(first.primitives.len(), 3);
/// assert!(first.delta.is_none());
///
/// let second = layout(
///     &encode_pharmacode(10, false).unwrap(),
///     &handle,
///     Some(first.barcode_map.as_slice()),
/// )
/// .unwrap();
/// let changed: Vec<usize> = second.changed().map(|p| p.ordinal).collect();
/// assert_eq!(changed, [0, 2]);
/// assert!(matches!(second.primitives[0].shape, PrimitiveShape::Rect(_)));
/// ```
pub fn layout(
    symbol: &EncodedSymbol,
    handle: &RenderHandle,
    previous_map: Option<&[i8]>,
) -> Result<Layout, LayoutError> {
    if symbol.is_empty() || symbol.canonical_thickness() == 0 {
        return Err(LayoutError::EmptySymbol);
    }

    let barcode_map = symbol.barcode_map();
    let delta = compute_delta(&barcode_map, previous_map);

    let (shapes, content_bounds) = match handle.shape_mode {
        ShapeMode::Linear => linear(symbol, handle),
        ShapeMode::Radial => radial(symbol, handle),
        ShapeMode::Target => target(symbol, handle),
    };

    let primitives = shapes
        .into_iter()
        .map(|(element, shape)| {
            let is_delta = delta.as_ref().is_some_and(|d| d.is_changed(element.ordinal));
            let emphasized = element.kind.is_emphasized();
            LayoutPrimitive {
                ordinal: element.ordinal,
                shape,
                emphasized,
                is_delta,
                color: resolve_color(handle, emphasized, is_delta),
            }
        })
        .collect();

    Ok(Layout {
        mode: handle.shape_mode,
        primitives,
        barcode_map,
        delta,
        content_bounds,
        border: handle.show_border.then_some(content_bounds),
        effects: handle.effects,
    })
}

fn resolve_color(handle: &RenderHandle, emphasized: bool, is_delta: bool) -> ColorToken {
    let palette = &handle.palette;
    if is_delta && handle.effects.highlights() {
        palette.highlight
    } else if handle.vary_color_by_length {
        if emphasized {
            palette.long
        } else {
            palette.short
        }
    } else {
        palette.foreground
    }
}

/// Pairs each drawable element with its extent, skipping spaces.
fn bars_with_extents<'a>(
    symbol: &'a EncodedSymbol,
    extent: f64,
) -> impl Iterator<Item = (BarElement, Range<f64>)> + 'a {
    symbol
        .elements()
        .iter()
        .copied()
        .zip(element_extents(symbol, extent))
        .filter(|(element, _)| !element.kind.is_space())
}

type Shapes = Vec<(BarElement, PrimitiveShape)>;

fn linear(symbol: &EncodedSymbol, handle: &RenderHandle) -> (Shapes, Rect) {
    let margins = handle.linear_margins();
    let available = (handle.view_width - margins.x0 - margins.x1).max(0.0);
    let bar_height = handle.bar_height();
    let short_height = bar_height * handle.short_bar_scale();

    // Spaces scale the bars but only the bars are centered, so leading or
    // trailing spaces do not shift the group.
    let bars: Vec<_> = bars_with_extents(symbol, available).collect();
    let span = match (bars.first(), bars.last()) {
        (Some((_, first)), Some((_, last))) => first.start..last.end,
        _ => 0.0..0.0,
    };
    let x0 = (handle.view_width - (span.end - span.start)) * 0.5;
    let y0 = (handle.view_height - bar_height) * 0.5;
    let shift = x0 - span.start;
    let content = Rect::new(shift + span.start, y0, shift + span.end, y0 + bar_height);

    let shapes = bars
        .into_iter()
        .map(|(element, range)| {
            let top = if element.kind == BarKind::Postnet(PostnetBar::Low) {
                content.y1 - short_height
            } else {
                content.y0
            };
            let rect = Rect::new(shift + range.start, top, shift + range.end, content.y1);
            (element, PrimitiveShape::Rect(rect))
        })
        .collect();
    (shapes, content)
}

fn polar(center: Point, radius: f64, degrees: f64) -> Point {
    center + Vec2::from_angle(degrees * PI / 180.0) * radius
}

fn radial(symbol: &EncodedSymbol, handle: &RenderHandle) -> (Shapes, Rect) {
    let center = handle.target_center();
    let inner = handle.inner_radius();
    let outer = handle.outer_radius();
    let short_outer = (outer * handle.short_bar_scale()).max(inner);

    let shapes = bars_with_extents(symbol, FULL_SWEEP_DEGREES)
        .map(|(element, range)| {
            let start = handle.start_angle + range.start;
            let end = handle.start_angle + range.end;
            let r = if element.kind.is_short() {
                short_outer
            } else {
                outer
            };
            let quad = Quad {
                points: [
                    polar(center, inner, start),
                    polar(center, inner, end),
                    polar(center, r, end),
                    polar(center, r, start),
                ],
            };
            (element, PrimitiveShape::Wedge(quad))
        })
        .collect();
    (shapes, square_around(center, outer))
}

fn target(symbol: &EncodedSymbol, handle: &RenderHandle) -> (Shapes, Rect) {
    let center = handle.target_center();
    let band = handle.target_band();

    let shapes = bars_with_extents(symbol, band)
        .map(|(element, range)| {
            let ring = CircleSegment::new(center, range.end, range.start, 0.0, TAU);
            (element, PrimitiveShape::Ring(ring))
        })
        .collect();
    (shapes, square_around(center, band))
}

fn square_around(center: Point, radius: f64) -> Rect {
    Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}
