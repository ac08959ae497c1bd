// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Bound, RangeBounds};

use text_primitives::{
    FontStretch, FontStyle, FontVariant, FontWeight, Gravity, GravityHint, Language,
};

use crate::value::{AttrColor, AttrType, AttrValue, Overline, ShapeRects, ShowFlags, Underline};
use crate::FontDescription;

/// The exclusive end of an attribute range.
///
/// `Unbounded` extends to the end of any text, and sorts after every index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeEnd {
    /// Ends at the given byte index.
    At(usize),
    /// Extends to the end of the text.
    Unbounded,
}

impl RangeEnd {
    /// The end index, or `None` when unbounded.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::At(index) => Some(index),
            Self::Unbounded => None,
        }
    }

    /// The end index clamped to `limit`.
    #[must_use]
    pub fn min_index(self, limit: usize) -> usize {
        match self {
            Self::At(index) => index.min(limit),
            Self::Unbounded => limit,
        }
    }

    /// Adds `len`, turning overflow into `Unbounded`.
    #[must_use]
    pub fn saturating_add(self, len: usize) -> Self {
        match self {
            Self::At(index) => index.checked_add(len).map_or(Self::Unbounded, Self::At),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl From<usize> for RangeEnd {
    fn from(index: usize) -> Self {
        Self::At(index)
    }
}

impl PartialEq<usize> for RangeEnd {
    fn eq(&self, other: &usize) -> bool {
        *self == Self::At(*other)
    }
}

impl PartialOrd<usize> for RangeEnd {
    fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
        Some(self.cmp(&Self::At(*other)))
    }
}

impl fmt::Display for RangeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(index) => write!(f, "{index}"),
            Self::Unbounded => f.write_str("∞"),
        }
    }
}

/// A value applied to a half-open byte range of text.
///
/// ```
/// use text_primitives::FontWeight;
/// use weft_attrs::{Attribute, RangeEnd};
///
/// let bold = Attribute::weight(FontWeight::BOLD).with_range(10..20);
/// assert_eq!(bold.start(), 10);
/// assert_eq!(bold.end(), RangeEnd::At(20));
/// assert_eq!(bold.to_string(), "[10,20)weight=Bold");
///
/// let everywhere = Attribute::size(12.0);
/// assert_eq!(everywhere.end(), RangeEnd::Unbounded);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    value: AttrValue,
    start: usize,
    end: RangeEnd,
}

impl Attribute {
    /// Creates an attribute covering all text.
    #[must_use]
    pub fn new(value: AttrValue) -> Self {
        Self {
            value,
            start: 0,
            end: RangeEnd::Unbounded,
        }
    }

    /// Returns the attribute restricted to `range`.
    ///
    /// An end before the start is raised to the start, leaving an empty attribute.
    #[must_use]
    pub fn with_range(mut self, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(n) => *n,
            Bound::Excluded(n) => n.saturating_add(1),
        };
        let end = match range.end_bound() {
            Bound::Unbounded => RangeEnd::Unbounded,
            Bound::Included(n) => RangeEnd::At(*n).saturating_add(1),
            Bound::Excluded(n) => RangeEnd::At(*n),
        };
        self.start = start;
        self.end = end.max(RangeEnd::At(start));
        self
    }

    /// The first byte covered.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end of the covered range.
    #[must_use]
    pub fn end(&self) -> RangeEnd {
        self.end
    }

    /// The covered range as `(start, end)`.
    #[must_use]
    pub fn range(&self) -> (usize, RangeEnd) {
        (self.start, self.end)
    }

    pub(crate) fn set_start(&mut self, start: usize) {
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: RangeEnd) {
        self.end = end;
    }

    /// The value.
    #[must_use]
    pub fn value(&self) -> &AttrValue {
        &self.value
    }

    /// The kind of the value.
    #[must_use]
    pub fn kind(&self) -> AttrType {
        self.value.kind()
    }

    /// Returns true if both attributes carry the same value, ignoring their ranges.
    #[must_use]
    pub fn equal_value(&self, other: &Self) -> bool {
        self.value == other.value
    }

    /// Returns true if the attribute covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

macro_rules! constructors {
    ($($(#[$meta:meta])* $name:ident($ty:ty) => $variant:ident;)*) => {
        impl Attribute {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $name(value: $ty) -> Self {
                    Self::new(AttrValue::$variant(value))
                }
            )*
        }
    };
}

constructors! {
    /// A language attribute.
    language(Language) => Language;
    /// A font style attribute.
    style(FontStyle) => Style;
    /// A font weight attribute.
    weight(FontWeight) => Weight;
    /// A font variant attribute.
    variant(FontVariant) => Variant;
    /// A font stretch attribute.
    stretch(FontStretch) => Stretch;
    /// A font size attribute, in points.
    size(f32) => Size;
    /// A font size attribute, in device units.
    absolute_size(f32) => AbsoluteSize;
    /// A font description attribute.
    font_desc(FontDescription) => FontDesc;
    /// A foreground color attribute.
    foreground(AttrColor) => Foreground;
    /// A background color attribute.
    background(AttrColor) => Background;
    /// An underline attribute.
    underline(Underline) => Underline;
    /// An underline color attribute.
    underline_color(AttrColor) => UnderlineColor;
    /// A strikethrough attribute.
    strikethrough(bool) => Strikethrough;
    /// A strikethrough color attribute.
    strikethrough_color(AttrColor) => StrikethroughColor;
    /// An overline attribute.
    overline(Overline) => Overline;
    /// An overline color attribute.
    overline_color(AttrColor) => OverlineColor;
    /// A baseline rise attribute.
    rise(i32) => Rise;
    /// A shape attribute.
    shape(ShapeRects) => Shape;
    /// A font scale attribute.
    scale(f64) => Scale;
    /// A font fallback attribute.
    fallback(bool) => Fallback;
    /// A letter spacing attribute.
    letter_spacing(i32) => LetterSpacing;
    /// A gravity attribute.
    gravity(Gravity) => Gravity;
    /// A gravity hint attribute.
    gravity_hint(GravityHint) => GravityHint;
    /// A foreground alpha attribute.
    foreground_alpha(u16) => ForegroundAlpha;
    /// A background alpha attribute.
    background_alpha(u16) => BackgroundAlpha;
    /// An attribute that allows or forbids line breaks.
    allow_breaks(bool) => AllowBreaks;
    /// An attribute selecting invisible characters to show.
    show(ShowFlags) => Show;
    /// An attribute controlling hyphen insertion.
    insert_hyphens(bool) => InsertHyphens;
}

impl Attribute {
    /// A font family attribute.
    #[must_use]
    pub fn family(family: &str) -> Self {
        Self::new(AttrValue::Family(Arc::from(family)))
    }

    /// A font features attribute, such as `"kern 0, liga"`.
    #[must_use]
    pub fn font_features(features: &str) -> Self {
        Self::new(AttrValue::FontFeatures(Arc::from(features)))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}){}={}",
            self.start,
            self.end,
            self.kind().name(),
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use text_primitives::FontWeight;

    use super::{Attribute, RangeEnd};

    #[test]
    fn range_end_ordering() {
        assert!(RangeEnd::At(usize::MAX) < RangeEnd::Unbounded);
        assert!(RangeEnd::At(4) > 3);
        assert!(RangeEnd::Unbounded > usize::MAX);
        assert_eq!(RangeEnd::At(usize::MAX).saturating_add(1), RangeEnd::Unbounded);
        assert_eq!(RangeEnd::Unbounded.min_index(7), 7);
    }

    #[test]
    fn with_range_variants() {
        let attr = Attribute::weight(FontWeight::BOLD);
        assert_eq!(attr.clone().with_range(3..=5).range(), (3, RangeEnd::At(6)));
        assert_eq!(attr.clone().with_range(3..).range(), (3, RangeEnd::Unbounded));
        assert_eq!(attr.clone().with_range(..4).range(), (0, RangeEnd::At(4)));
        let (start, end) = (8, 2);
        let inverted = attr.with_range(start..end);
        assert!(inverted.is_empty());
        assert_eq!(inverted.range(), (8, RangeEnd::At(8)));
    }

    #[test]
    fn display() {
        assert_eq!(Attribute::size(10.0).to_string(), "[0,∞)size=10");
        assert_eq!(
            Attribute::family("Times").with_range(1..2).to_string(),
            "[1,2)family=Times"
        );
    }
}
