// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render configuration threaded through the layout engine.

use barclock_symbol::EncodeOptions;
use kurbo::{Insets, Point};

use crate::mode::ShapeMode;

/// Default outer radius of short bars, as a fraction of the full outer radius
/// (radial) or bar height (linear).
pub const DEFAULT_SHORT_BAR_SCALE: f64 = 0.65;

/// Opaque reference to a color owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ColorToken(pub u32);

/// Color tokens used to style primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Regular bar color.
    pub foreground: ColorToken,
    /// Color of changed bars when highlighting is on.
    pub highlight: ColorToken,
    /// Thin/Low bars when coloring by length.
    pub short: ColorToken,
    /// Thick/High bars when coloring by length.
    pub long: ColorToken,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: ColorToken(0),
            highlight: ColorToken(1),
            short: ColorToken(2),
            long: ColorToken(3),
        }
    }
}

/// Effect levels passed through to the renderer.
///
/// The layout engine does not animate anything; it only carries these along.
/// A level of `0` means off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Effects {
    /// Wave animation strength.
    pub wave_level: u8,
    /// Drop shadow strength.
    pub shadow_level: u8,
    /// Highlight style for changed bars.
    pub highlight_style: u8,
}

impl Effects {
    /// Returns `true` if changed bars should be highlighted.
    #[must_use]
    pub fn highlights(&self) -> bool {
        self.highlight_style > 0
    }
}

/// Layout and style parameters for one clock.
///
/// A handle is always fully initialized: [`RenderHandle::new`] takes the view
/// size and defaults everything else. Settings layers may then overwrite any
/// public field in place between ticks; the layout engine only reads it.
///
/// Fields left as `None` are derived from the view size when read through the
/// matching accessor, so they follow view resizes.
///
/// # Example
///
/// ```
/// use barclock_layout::{RenderHandle, ShapeMode};
/// use kurbo::{Insets, Point};
///
/// let mut handle = RenderHandle::new(300.0, 200.0)
///     .with_shape_mode(ShapeMode::Radial)
///     .with_margins(Insets::uniform(10.0));
/// assert_eq!(handle.target_center(), Point::new(150.0, 100.0));
/// assert_eq!(handle.bar_height(), 180.0);
///
/// handle.view_width = 400.0;
/// assert_eq!(handle.target_center(), Point::new(200.0, 100.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderHandle {
    /// Layout mode.
    pub shape_mode: ShapeMode,
    /// View width in pixels.
    pub view_width: f64,
    /// View height in pixels.
    pub view_height: f64,
    /// Margins: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub margins: Insets,
    /// Ring inner radius; `None` means a quarter of the smaller view side.
    pub inner_radius: Option<f64>,
    /// Ring outer radius; `None` means 45% of the smaller view side.
    pub outer_radius: Option<f64>,
    /// Linear bar height; `None` means the view height minus vertical margins.
    pub bar_height: Option<f64>,
    /// Center of the round layouts; `None` means the view center.
    pub target_center: Option<Point>,
    /// Angle in degrees at which the radial sweep starts.
    pub start_angle: f64,
    /// Relative length of Thin/Low bars. Read through
    /// [`RenderHandle::short_bar_scale`], which clamps it to `0.0..=1.0`.
    pub short_bar_scale: f64,
    /// Long-axis mode: linear layouts ignore margins and use the full width.
    pub full_width: bool,
    /// Encode a check digit where the symbology supports one.
    pub include_check_digit: bool,
    /// End Pharmacode symbols with a space.
    pub include_trailing_space: bool,
    /// Color Thick/High and Thin/Low bars differently.
    pub vary_color_by_length: bool,
    /// Emit a border rectangle around the content.
    pub show_border: bool,
    /// Effect levels for the renderer.
    pub effects: Effects,
    /// Color tokens.
    pub palette: Palette,
}

impl RenderHandle {
    /// Creates a linear handle for a view of the given size with default
    /// styling.
    #[must_use]
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            shape_mode: ShapeMode::default(),
            view_width,
            view_height,
            margins: Insets::ZERO,
            inner_radius: None,
            outer_radius: None,
            bar_height: None,
            target_center: None,
            start_angle: 0.0,
            short_bar_scale: DEFAULT_SHORT_BAR_SCALE,
            full_width: false,
            include_check_digit: false,
            include_trailing_space: true,
            vary_color_by_length: false,
            show_border: false,
            effects: Effects::default(),
            palette: Palette::default(),
        }
    }

    /// Sets the layout mode.
    #[must_use]
    pub fn with_shape_mode(mut self, mode: ShapeMode) -> Self {
        self.shape_mode = mode;
        self
    }

    /// Sets the margins.
    #[must_use]
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Sets explicit inner and outer ring radii.
    #[must_use]
    pub fn with_radii(mut self, inner: f64, outer: f64) -> Self {
        self.inner_radius = Some(inner);
        self.outer_radius = Some(outer);
        self
    }

    /// Sets an explicit linear bar height.
    #[must_use]
    pub fn with_bar_height(mut self, height: f64) -> Self {
        self.bar_height = Some(height);
        self
    }

    /// Sets an explicit center for the round layouts.
    #[must_use]
    pub fn with_target_center(mut self, center: Point) -> Self {
        self.target_center = Some(center);
        self
    }

    /// Sets the color tokens.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the effect levels.
    #[must_use]
    pub fn with_effects(mut self, effects: Effects) -> Self {
        self.effects = effects;
        self
    }

    /// Smaller side of the view, never negative.
    fn min_side(&self) -> f64 {
        self.view_width.min(self.view_height).max(0.0)
    }

    /// Resolved ring inner radius.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius.unwrap_or(self.min_side() * 0.25)
    }

    /// Resolved ring outer radius.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius.unwrap_or(self.min_side() * 0.45)
    }

    /// Resolved linear bar height.
    #[must_use]
    pub fn bar_height(&self) -> f64 {
        self.bar_height
            .unwrap_or(self.view_height - self.margins.y0 - self.margins.y1)
            .max(0.0)
    }

    /// Resolved center of the round layouts.
    #[must_use]
    pub fn target_center(&self) -> Point {
        self.target_center
            .unwrap_or(Point::new(self.view_width * 0.5, self.view_height * 0.5))
    }

    /// Resolved relative length of short bars, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn short_bar_scale(&self) -> f64 {
        self.short_bar_scale.clamp(0.0, 1.0)
    }

    /// Margins in effect for linear layouts.
    ///
    /// Zero in long-axis (full width) mode.
    #[must_use]
    pub fn linear_margins(&self) -> Insets {
        if self.full_width {
            Insets::ZERO
        } else {
            self.margins
        }
    }

    /// Radial band available to target layouts: half the view height minus
    /// the vertical margins.
    #[must_use]
    pub fn target_band(&self) -> f64 {
        ((self.view_height - self.margins.y0 - self.margins.y1) * 0.5).max(0.0)
    }

    /// Encoder options implied by this handle.
    #[must_use]
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            include_check_digit: self.include_check_digit,
            include_trailing_space: self.include_trailing_space,
        }
    }
}
