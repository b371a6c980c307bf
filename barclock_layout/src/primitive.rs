// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives produced by the layout engine.

use kurbo::{BezPath, CircleSegment, Point, Rect};

use crate::handle::ColorToken;

/// A quadrilateral wedge of a ring.
///
/// Corners are stored in drawing order: inner arc start, inner arc end,
/// outer arc end, outer arc start. Edges between the arc points are straight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Corner points in drawing order.
    pub points: [Point; 4],
}

impl Quad {
    /// Closed path through the four corners.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let [a, b, c, d] = self.points;
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.line_to(d);
        path.close_path();
        path
    }

    /// Axis-aligned bounds of the corners.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let [a, b, c, d] = self.points;
        Rect::from_points(a, b).union_pt(c).union_pt(d)
    }
}

/// Geometry of one primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveShape {
    /// Axis-aligned bar (linear layouts).
    Rect(Rect),
    /// Ring wedge (radial layouts).
    Wedge(Quad),
    /// Full annulus (target layouts).
    Ring(CircleSegment),
}

impl PrimitiveShape {
    /// Axis-aligned bounds of the shape.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::Wedge(quad) => quad.bounding_box(),
            Self::Ring(ring) => {
                let r = ring.outer_radius;
                Rect::new(
                    ring.center.x - r,
                    ring.center.y - r,
                    ring.center.x + r,
                    ring.center.y + r,
                )
            }
        }
    }
}

/// One drawable bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPrimitive {
    /// Ordinal of the element this primitive draws.
    pub ordinal: usize,
    /// Geometry in view coordinates.
    pub shape: PrimitiveShape,
    /// Thick (Pharmacode) or High (POSTNET) bar.
    pub emphasized: bool,
    /// The element's kind changed since the previous symbol.
    pub is_delta: bool,
    /// Resolved color token.
    pub color: ColorToken,
}
