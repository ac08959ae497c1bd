// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use text_primitives::{FontStretch, FontStyle, FontVariant, FontWeight, Gravity};

bitflags! {
    /// Set of fields of a [`FontDescription`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontMask: u16 {
        /// The family list.
        const FAMILY = 1 << 0;
        /// The style.
        const STYLE = 1 << 1;
        /// The variant.
        const VARIANT = 1 << 2;
        /// The weight.
        const WEIGHT = 1 << 3;
        /// The stretch.
        const STRETCH = 1 << 4;
        /// The size, in points or device units.
        const SIZE = 1 << 5;
        /// The gravity.
        const GRAVITY = 1 << 6;
        /// The variation settings.
        const VARIATIONS = 1 << 7;
    }
}

/// A font size, either in points or in device units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    /// Size in points.
    Points(f32),
    /// Size in device units.
    Absolute(f32),
}

impl FontSize {
    /// The numeric size, regardless of unit.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Self::Points(size) | Self::Absolute(size) => size,
        }
    }

    /// Returns true for sizes in device units.
    #[must_use]
    pub fn is_absolute(self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    /// Multiplies the size by `factor`, keeping the unit.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Scaled font sizes stay well within f32 range."
    )]
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |size: f32| (f64::from(size) * factor) as f32;
        match self {
            Self::Points(size) => Self::Points(scale(size)),
            Self::Absolute(size) => Self::Absolute(scale(size)),
        }
    }
}

/// A partial description of a font.
///
/// Every field is optional. Unset fields are filled in by merging with another description,
/// which is how attributes layer on top of a base font.
///
/// Descriptions can be parsed from and printed as strings of the form
/// `"[FAMILY-LIST] [STYLE-OPTIONS] [SIZE] [@VARIATIONS]"`:
///
/// ```
/// use text_primitives::FontStretch;
/// use weft_attrs::{FontDescription, FontSize};
///
/// let desc = FontDescription::parse("Times Condensed 10");
/// assert_eq!(desc.family(), Some("Times"));
/// assert_eq!(desc.stretch(), Some(FontStretch::Condensed));
/// assert_eq!(desc.size(), Some(FontSize::Points(10.0)));
/// assert_eq!(desc.to_string(), "Times Condensed 10");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontDescription {
    family: Option<Arc<str>>,
    style: Option<FontStyle>,
    variant: Option<FontVariant>,
    weight: Option<FontWeight>,
    stretch: Option<FontStretch>,
    size: Option<FontSize>,
    gravity: Option<Gravity>,
    variations: Option<Arc<str>>,
}

impl FontDescription {
    /// Creates an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a description string. Words that are not recognized become part of the family.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut desc = Self::new();
        let mut rest = s.trim();

        if let Some((head, word)) = split_last_word(rest) {
            if let Some(variations) = word.strip_prefix('@') {
                desc.variations = Some(variations.into());
                rest = head;
            }
        }
        if let Some((head, word)) = split_last_word(rest) {
            if let Some(size) = parse_size(word) {
                desc.size = Some(size);
                rest = head;
            }
        }
        while let Some((head, word)) = split_last_word(rest) {
            if !desc.apply_style_word(word) {
                break;
            }
            rest = head;
        }

        let family = rest.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
        if !family.is_empty() {
            desc.family = Some(family.into());
        }
        desc
    }

    fn apply_style_word(&mut self, word: &str) -> bool {
        if word.eq_ignore_ascii_case("Normal") {
            return true;
        }
        if let Some(style) = FontStyle::parse(word) {
            self.style = Some(style);
        } else if let Some(variant) = FontVariant::parse(word) {
            self.variant = Some(variant);
        } else if let Some(stretch) = FontStretch::parse(word) {
            self.stretch = Some(stretch);
        } else if let Some(gravity) = parse_gravity(word) {
            self.gravity = Some(gravity);
        } else if !word.starts_with(|c: char| c.is_ascii_digit()) {
            match FontWeight::parse(word) {
                Some(weight) => self.weight = Some(weight),
                None => return false,
            }
        } else {
            return false;
        }
        true
    }

    /// The fields that are set.
    #[must_use]
    pub fn set_fields(&self) -> FontMask {
        let mut mask = FontMask::empty();
        let fields = [
            (self.family.is_some(), FontMask::FAMILY),
            (self.style.is_some(), FontMask::STYLE),
            (self.variant.is_some(), FontMask::VARIANT),
            (self.weight.is_some(), FontMask::WEIGHT),
            (self.stretch.is_some(), FontMask::STRETCH),
            (self.size.is_some(), FontMask::SIZE),
            (self.gravity.is_some(), FontMask::GRAVITY),
            (self.variations.is_some(), FontMask::VARIATIONS),
        ];
        for (set, field) in fields {
            mask.set(field, set);
        }
        mask
    }

    /// Clears the fields in `mask`.
    pub fn unset_fields(&mut self, mask: FontMask) {
        if mask.contains(FontMask::FAMILY) {
            self.family = None;
        }
        if mask.contains(FontMask::STYLE) {
            self.style = None;
        }
        if mask.contains(FontMask::VARIANT) {
            self.variant = None;
        }
        if mask.contains(FontMask::WEIGHT) {
            self.weight = None;
        }
        if mask.contains(FontMask::STRETCH) {
            self.stretch = None;
        }
        if mask.contains(FontMask::SIZE) {
            self.size = None;
        }
        if mask.contains(FontMask::GRAVITY) {
            self.gravity = None;
        }
        if mask.contains(FontMask::VARIATIONS) {
            self.variations = None;
        }
    }

    /// Copies the fields that are set in `other`.
    ///
    /// Fields already set in `self` are only overwritten when `replace_existing` is true.
    pub fn merge(&mut self, other: &Self, replace_existing: bool) {
        fn merge_field<T: Clone>(dst: &mut Option<T>, src: &Option<T>, replace: bool) {
            if let Some(value) = src {
                if replace || dst.is_none() {
                    *dst = Some(value.clone());
                }
            }
        }
        merge_field(&mut self.family, &other.family, replace_existing);
        merge_field(&mut self.style, &other.style, replace_existing);
        merge_field(&mut self.variant, &other.variant, replace_existing);
        merge_field(&mut self.weight, &other.weight, replace_existing);
        merge_field(&mut self.stretch, &other.stretch, replace_existing);
        merge_field(&mut self.size, &other.size, replace_existing);
        merge_field(&mut self.gravity, &other.gravity, replace_existing);
        merge_field(&mut self.variations, &other.variations, replace_existing);
    }

    /// The comma separated family list.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Sets the family list.
    pub fn set_family(&mut self, family: impl Into<Arc<str>>) {
        self.family = Some(family.into());
    }

    /// The style.
    #[must_use]
    pub fn style(&self) -> Option<FontStyle> {
        self.style
    }

    /// Sets the style.
    pub fn set_style(&mut self, style: FontStyle) {
        self.style = Some(style);
    }

    /// The variant.
    #[must_use]
    pub fn variant(&self) -> Option<FontVariant> {
        self.variant
    }

    /// Sets the variant.
    pub fn set_variant(&mut self, variant: FontVariant) {
        self.variant = Some(variant);
    }

    /// The weight.
    #[must_use]
    pub fn weight(&self) -> Option<FontWeight> {
        self.weight
    }

    /// Sets the weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = Some(weight);
    }

    /// The stretch.
    #[must_use]
    pub fn stretch(&self) -> Option<FontStretch> {
        self.stretch
    }

    /// Sets the stretch.
    pub fn set_stretch(&mut self, stretch: FontStretch) {
        self.stretch = Some(stretch);
    }

    /// The size.
    #[must_use]
    pub fn size(&self) -> Option<FontSize> {
        self.size
    }

    /// Sets the size.
    pub fn set_size(&mut self, size: FontSize) {
        self.size = Some(size);
    }

    /// The gravity.
    #[must_use]
    pub fn gravity(&self) -> Option<Gravity> {
        self.gravity
    }

    /// Sets the gravity.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = Some(gravity);
    }

    /// The font variation settings, such as `wght=200,wdth=80`.
    #[must_use]
    pub fn variations(&self) -> Option<&str> {
        self.variations.as_deref()
    }

    /// Sets the font variation settings.
    pub fn set_variations(&mut self, variations: impl Into<Arc<str>>) {
        self.variations = Some(variations.into());
    }
}

impl FromStr for FontDescription {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<String> = Vec::new();
        if let Some(family) = self.family.as_deref() {
            words.push(family.into());
        }
        if let Some(weight) = self.weight.filter(|w| *w != FontWeight::NORMAL) {
            words.push(alloc::format!("{weight}"));
        }
        if let Some(style) = self.style.filter(|s| *s != FontStyle::Normal) {
            words.push(style.keyword().into());
        }
        if let Some(stretch) = self.stretch.filter(|s| *s != FontStretch::Normal) {
            words.push(stretch.keyword().into());
        }
        if let Some(variant) = self.variant.filter(|v| *v != FontVariant::Normal) {
            words.push(variant.keyword().into());
        }
        if let Some(gravity) = self.gravity.and_then(gravity_keyword) {
            words.push(gravity.into());
        }
        if words.is_empty() {
            words.push("Normal".into());
        }
        match self.size {
            Some(FontSize::Points(size)) => words.push(alloc::format!("{size}")),
            Some(FontSize::Absolute(size)) => words.push(alloc::format!("{size}px")),
            None => {}
        }
        if let Some(variations) = self.variations.as_deref() {
            words.push(alloc::format!("@{variations}"));
        }
        f.write_str(&words.join(" "))
    }
}

const GRAVITY_KEYWORDS: &[(&str, Gravity)] = &[
    ("Not-Rotated", Gravity::South),
    ("South", Gravity::South),
    ("Upside-Down", Gravity::North),
    ("North", Gravity::North),
    ("Rotated-Left", Gravity::East),
    ("East", Gravity::East),
    ("Rotated-Right", Gravity::West),
    ("West", Gravity::West),
];

fn parse_gravity(word: &str) -> Option<Gravity> {
    GRAVITY_KEYWORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|(_, gravity)| *gravity)
}

fn gravity_keyword(gravity: Gravity) -> Option<&'static str> {
    if matches!(gravity, Gravity::South | Gravity::Auto) {
        return None;
    }
    GRAVITY_KEYWORDS
        .iter()
        .find(|(_, g)| *g == gravity)
        .map(|(name, _)| *name)
}

fn split_last_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
    if s.is_empty() {
        return None;
    }
    let at = s
        .rfind(|c: char| c == ',' || c.is_whitespace())
        .map_or(0, |i| i + 1);
    Some((&s[..at], &s[at..]))
}

fn parse_size(word: &str) -> Option<FontSize> {
    let (number, absolute) = match word.strip_suffix("px") {
        Some(number) => (number, true),
        None => (word, false),
    };
    if !number.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let size: f32 = number.parse().ok()?;
    if !size.is_finite() {
        return None;
    }
    Some(if absolute {
        FontSize::Absolute(size)
    } else {
        FontSize::Points(size)
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use text_primitives::{FontStretch, FontStyle, FontWeight, Gravity};

    use super::{FontDescription, FontMask, FontSize};

    #[test]
    fn parse_family_styles_and_size() {
        let desc = FontDescription::parse("Sans Bold Italic 12");
        assert_eq!(desc.family(), Some("Sans"));
        assert_eq!(desc.weight(), Some(FontWeight::BOLD));
        assert_eq!(desc.style(), Some(FontStyle::Italic));
        assert_eq!(desc.size(), Some(FontSize::Points(12.0)));
        assert_eq!(desc.to_string(), "Sans Bold Italic 12");
    }

    #[test]
    fn parse_family_list_and_absolute_size() {
        let desc = FontDescription::parse("DejaVu Sans, Noto Sans, 16px");
        assert_eq!(desc.family(), Some("DejaVu Sans, Noto Sans"));
        assert_eq!(desc.size(), Some(FontSize::Absolute(16.0)));
    }

    #[test]
    fn parse_gravity_and_variations() {
        let desc = FontDescription::parse("Serif Rotated-Left 9 @wght=300");
        assert_eq!(desc.gravity(), Some(Gravity::East));
        assert_eq!(desc.variations(), Some("wght=300"));
        assert_eq!(desc.to_string(), "Serif Rotated-Left 9 @wght=300");
    }

    #[test]
    fn normal_words_set_nothing() {
        let desc = FontDescription::parse("Normal");
        assert_eq!(desc.set_fields(), FontMask::empty());
        assert_eq!(desc.to_string(), "Normal");
        assert_eq!(FontDescription::new().to_string(), "Normal");
    }

    #[test]
    fn merge_respects_existing_fields() {
        let mut base = FontDescription::parse("Times 10");
        let overlay = FontDescription::parse("Sans Condensed 14");

        let mut kept = base.clone();
        kept.merge(&overlay, false);
        assert_eq!(kept.family(), Some("Times"));
        assert_eq!(kept.stretch(), Some(FontStretch::Condensed));
        assert_eq!(kept.size(), Some(FontSize::Points(10.0)));

        base.merge(&overlay, true);
        assert_eq!(base.to_string(), "Sans Condensed 14");
    }

    #[test]
    fn unset_fields_clears_only_mask() {
        let mut desc = FontDescription::parse("Sans Bold 12");
        desc.unset_fields(FontMask::WEIGHT | FontMask::SIZE);
        assert_eq!(desc.set_fields(), FontMask::FAMILY);
    }

    #[test]
    fn unset_all_but_family() {
        let mut desc = FontDescription::parse("Sans Italic Bold 12 @wght=300");
        assert_eq!(desc.set_fields().iter().count(), 5);
        desc.unset_fields(!FontMask::FAMILY);
        assert_eq!(desc.set_fields(), FontMask::FAMILY);
        assert_eq!(desc.to_string(), "Sans");
        assert_eq!(!FontMask::all(), FontMask::empty());
    }

    #[test]
    fn scaled_size_keeps_unit() {
        assert_eq!(FontSize::Points(10.0).scaled(1.5), FontSize::Points(15.0));
        assert_eq!(FontSize::Absolute(8.0).scaled(0.5), FontSize::Absolute(4.0));
    }
}
