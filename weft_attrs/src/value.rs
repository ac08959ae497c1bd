// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use bitflags::bitflags;
use text_primitives::{
    FontStretch, FontStyle, FontVariant, FontWeight, Gravity, GravityHint, Language,
};

use crate::FontDescription;

/// The value carried by an [`Attribute`](crate::Attribute).
///
/// Each variant is one attribute kind; [`AttrValue::kind`] gives the matching [`AttrType`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Language of the text.
    Language(Language),
    /// Font family name list, as a comma separated string.
    Family(Arc<str>),
    /// Font slant.
    Style(FontStyle),
    /// Font weight.
    Weight(FontWeight),
    /// Capitalization variant.
    Variant(FontVariant),
    /// Font width.
    Stretch(FontStretch),
    /// Font size in points.
    Size(f32),
    /// Font size in device units.
    AbsoluteSize(f32),
    /// A complete or partial font description.
    FontDesc(FontDescription),
    /// Text color.
    Foreground(AttrColor),
    /// Background color.
    Background(AttrColor),
    /// Underline style.
    Underline(Underline),
    /// Underline color.
    UnderlineColor(AttrColor),
    /// Whether the text is struck through.
    Strikethrough(bool),
    /// Strikethrough color.
    StrikethroughColor(AttrColor),
    /// Overline style.
    Overline(Overline),
    /// Overline color.
    OverlineColor(AttrColor),
    /// Baseline displacement, in 1/1024ths of a point.
    Rise(i32),
    /// Replaces the glyphs of the range with a shape of the given extents.
    Shape(ShapeRects),
    /// Font size scale factor.
    Scale(f64),
    /// Whether fallback to other fonts is enabled.
    Fallback(bool),
    /// Extra space between graphemes, in 1/1024ths of a point.
    LetterSpacing(i32),
    /// Glyph orientation.
    Gravity(Gravity),
    /// How per-script gravity is derived in vertical text.
    GravityHint(GravityHint),
    /// OpenType feature settings, in CSS syntax.
    FontFeatures(Arc<str>),
    /// Foreground alpha.
    ForegroundAlpha(u16),
    /// Background alpha.
    BackgroundAlpha(u16),
    /// Whether line breaks are allowed.
    AllowBreaks(bool),
    /// Which invisible characters are rendered visibly.
    Show(ShowFlags),
    /// Whether hyphens are inserted at intra-word line breaks.
    InsertHyphens(bool),
}

impl AttrValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> AttrType {
        match self {
            Self::Language(_) => AttrType::Language,
            Self::Family(_) => AttrType::Family,
            Self::Style(_) => AttrType::Style,
            Self::Weight(_) => AttrType::Weight,
            Self::Variant(_) => AttrType::Variant,
            Self::Stretch(_) => AttrType::Stretch,
            Self::Size(_) => AttrType::Size,
            Self::AbsoluteSize(_) => AttrType::AbsoluteSize,
            Self::FontDesc(_) => AttrType::FontDesc,
            Self::Foreground(_) => AttrType::Foreground,
            Self::Background(_) => AttrType::Background,
            Self::Underline(_) => AttrType::Underline,
            Self::UnderlineColor(_) => AttrType::UnderlineColor,
            Self::Strikethrough(_) => AttrType::Strikethrough,
            Self::StrikethroughColor(_) => AttrType::StrikethroughColor,
            Self::Overline(_) => AttrType::Overline,
            Self::OverlineColor(_) => AttrType::OverlineColor,
            Self::Rise(_) => AttrType::Rise,
            Self::Shape(_) => AttrType::Shape,
            Self::Scale(_) => AttrType::Scale,
            Self::Fallback(_) => AttrType::Fallback,
            Self::LetterSpacing(_) => AttrType::LetterSpacing,
            Self::Gravity(_) => AttrType::Gravity,
            Self::GravityHint(_) => AttrType::GravityHint,
            Self::FontFeatures(_) => AttrType::FontFeatures,
            Self::ForegroundAlpha(_) => AttrType::ForegroundAlpha,
            Self::BackgroundAlpha(_) => AttrType::BackgroundAlpha,
            Self::AllowBreaks(_) => AttrType::AllowBreaks,
            Self::Show(_) => AttrType::Show,
            Self::InsertHyphens(_) => AttrType::InsertHyphens,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language(language) => write!(f, "{language}"),
            Self::Family(family) | Self::FontFeatures(family) => f.write_str(family),
            Self::Style(style) => write!(f, "{style}"),
            Self::Weight(weight) => write!(f, "{weight}"),
            Self::Variant(variant) => write!(f, "{variant}"),
            Self::Stretch(stretch) => write!(f, "{stretch}"),
            Self::Size(size) | Self::AbsoluteSize(size) => write!(f, "{size}"),
            Self::FontDesc(desc) => write!(f, "\"{desc}\""),
            Self::Foreground(color)
            | Self::Background(color)
            | Self::UnderlineColor(color)
            | Self::StrikethroughColor(color)
            | Self::OverlineColor(color) => write!(f, "{color}"),
            Self::Underline(underline) => write!(f, "{underline:?}"),
            Self::Overline(overline) => write!(f, "{overline:?}"),
            Self::Strikethrough(value)
            | Self::Fallback(value)
            | Self::AllowBreaks(value)
            | Self::InsertHyphens(value) => write!(f, "{value}"),
            Self::Rise(value) | Self::LetterSpacing(value) => write!(f, "{value}"),
            Self::Shape(rects) => write!(f, "shape {:?} {:?}", rects.ink, rects.logical),
            Self::Scale(scale) => write!(f, "{scale}"),
            Self::Gravity(gravity) => write!(f, "{gravity:?}"),
            Self::GravityHint(hint) => write!(f, "{hint:?}"),
            Self::ForegroundAlpha(alpha) | Self::BackgroundAlpha(alpha) => write!(f, "{alpha}"),
            Self::Show(flags) => write!(f, "{}", flags.bits()),
        }
    }
}

/// The kind of an attribute, without its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "Each kind mirrors the documented `AttrValue` variant.")]
pub enum AttrType {
    Language,
    Family,
    Style,
    Weight,
    Variant,
    Stretch,
    Size,
    AbsoluteSize,
    FontDesc,
    Foreground,
    Background,
    Underline,
    UnderlineColor,
    Strikethrough,
    StrikethroughColor,
    Overline,
    OverlineColor,
    Rise,
    Shape,
    Scale,
    Fallback,
    LetterSpacing,
    Gravity,
    GravityHint,
    FontFeatures,
    ForegroundAlpha,
    BackgroundAlpha,
    AllowBreaks,
    Show,
    InsertHyphens,
}

impl AttrType {
    /// The snake case name of the kind, as used when printing attribute lists.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Family => "family",
            Self::Style => "style",
            Self::Weight => "weight",
            Self::Variant => "variant",
            Self::Stretch => "stretch",
            Self::Size => "size",
            Self::AbsoluteSize => "absolute-size",
            Self::FontDesc => "font-desc",
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Underline => "underline",
            Self::UnderlineColor => "underline-color",
            Self::Strikethrough => "strikethrough",
            Self::StrikethroughColor => "strikethrough-color",
            Self::Overline => "overline",
            Self::OverlineColor => "overline-color",
            Self::Rise => "rise",
            Self::Shape => "shape",
            Self::Scale => "scale",
            Self::Fallback => "fallback",
            Self::LetterSpacing => "letter-spacing",
            Self::Gravity => "gravity",
            Self::GravityHint => "gravity-hint",
            Self::FontFeatures => "font-features",
            Self::ForegroundAlpha => "foreground-alpha",
            Self::BackgroundAlpha => "background-alpha",
            Self::AllowBreaks => "allow-breaks",
            Self::Show => "show",
            Self::InsertHyphens => "insert-hyphens",
        }
    }
}

/// A 16 bit per channel RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttrColor {
    /// Red channel.
    pub red: u16,
    /// Green channel.
    pub green: u16,
    /// Blue channel.
    pub blue: u16,
}

impl AttrColor {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for AttrColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04x}{:04x}{:04x}", self.red, self.green, self.blue)
    }
}

/// Underline styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Underline {
    /// No underline.
    #[default]
    None,
    /// A single line.
    Single,
    /// A double line.
    Double,
    /// A single line placed below the descenders.
    Low,
    /// A wavy line marking an error.
    Error,
    /// A single line that spans whitespace between runs.
    SingleLine,
    /// A double line that spans whitespace between runs.
    DoubleLine,
    /// An error line that spans whitespace between runs.
    ErrorLine,
}

/// Overline styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overline {
    /// No overline.
    #[default]
    None,
    /// A single line.
    Single,
}

/// A rectangle in integer units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "Field names are self-explanatory.")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Ink and logical extents of a shape attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShapeRects {
    /// Ink rectangle.
    pub ink: Rect,
    /// Logical rectangle.
    pub logical: Rect,
}

bitflags! {
    /// Invisible characters that should be shown.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ShowFlags: u8 {
        /// Show spaces.
        const SPACES = 1;
        /// Show line breaks.
        const LINE_BREAKS = 2;
        /// Show default ignorables.
        const IGNORABLES = 4;
    }
}
