// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A barcode encoding scheme supported by the encoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// Laetus Pharmacode: thick and thin bars, value in `3..=131070`.
    Pharmacode,
    /// USPS POSTNET: tall and short bars, five per decimal digit.
    Postnet,
}

impl Symbology {
    /// Parses a symbology name as used by settings layers.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("pharmacode") {
            Some(Self::Pharmacode)
        } else if name.eq_ignore_ascii_case("postnet") {
            Some(Self::Postnet)
        } else {
            None
        }
    }

    /// Returns the lowercase name accepted by [`Symbology::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pharmacode => "pharmacode",
            Self::Postnet => "postnet",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element kinds of a Pharmacode symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PharmacodeBar {
    /// Wide bar, three units.
    Thick,
    /// Narrow bar, one unit.
    Thin,
    /// Gap between bars, two units.
    Space,
}

/// Element kinds of a POSTNET symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostnetBar {
    /// Full-height bar.
    High,
    /// Half-height bar.
    Low,
    /// Gap between bars.
    Space,
}

/// The kind of one element, tagged by the symbology that produced it.
///
/// Encoders never mix kinds from different symbologies within one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarKind {
    /// A Pharmacode element.
    Pharmacode(PharmacodeBar),
    /// A POSTNET element.
    Postnet(PostnetBar),
}

impl BarKind {
    /// Width of this element in symbology units.
    ///
    /// Pharmacode uses Thick = 3, Thin = 1 and Space = 2; every POSTNET
    /// element is one unit wide.
    #[must_use]
    pub fn unit_width(self) -> u32 {
        match self {
            Self::Pharmacode(PharmacodeBar::Thick) => 3,
            Self::Pharmacode(PharmacodeBar::Thin) => 1,
            Self::Pharmacode(PharmacodeBar::Space) => 2,
            Self::Postnet(_) => 1,
        }
    }

    /// Returns `true` for gaps, which take up room but are never drawn.
    #[must_use]
    pub fn is_space(self) -> bool {
        matches!(
            self,
            Self::Pharmacode(PharmacodeBar::Space) | Self::Postnet(PostnetBar::Space)
        )
    }

    /// Returns `true` for Thick and High bars.
    #[must_use]
    pub fn is_emphasized(self) -> bool {
        matches!(
            self,
            Self::Pharmacode(PharmacodeBar::Thick) | Self::Postnet(PostnetBar::High)
        )
    }

    /// Returns `true` for Thin and Low bars.
    #[must_use]
    pub fn is_short(self) -> bool {
        matches!(
            self,
            Self::Pharmacode(PharmacodeBar::Thin) | Self::Postnet(PostnetBar::Low)
        )
    }

    /// Small integer code used in barcode maps for delta comparison.
    ///
    /// Thick/High map to `1`, Thin/Low to `0` and Space to `-1`.
    #[must_use]
    pub fn map_code(self) -> i8 {
        if self.is_space() {
            -1
        } else if self.is_emphasized() {
            1
        } else {
            0
        }
    }

    /// The symbology this kind belongs to.
    #[must_use]
    pub fn symbology(self) -> Symbology {
        match self {
            Self::Pharmacode(_) => Symbology::Pharmacode,
            Self::Postnet(_) => Symbology::Postnet,
        }
    }
}

impl From<PharmacodeBar> for BarKind {
    fn from(bar: PharmacodeBar) -> Self {
        Self::Pharmacode(bar)
    }
}

impl From<PostnetBar> for BarKind {
    fn from(bar: PostnetBar) -> Self {
        Self::Postnet(bar)
    }
}
