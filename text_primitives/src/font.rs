// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Weight class of a font, on the OpenType scale from 100 to 1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const ULTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 350.
    pub const SEMI_LIGHT: Self = Self(350);

    /// Weight value of 380.
    pub const BOOK: Self = Self(380);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const ULTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const HEAVY: Self = Self(900);

    /// Weight value of 1000.
    pub const ULTRA_HEAVY: Self = Self(1000);

    const KEYWORDS: &[(&str, Self)] = &[
        ("Thin", Self::THIN),
        ("Ultra-Light", Self::ULTRA_LIGHT),
        ("Extra-Light", Self::ULTRA_LIGHT),
        ("Light", Self::LIGHT),
        ("Semi-Light", Self::SEMI_LIGHT),
        ("Demi-Light", Self::SEMI_LIGHT),
        ("Book", Self::BOOK),
        ("Normal", Self::NORMAL),
        ("Regular", Self::NORMAL),
        ("Medium", Self::MEDIUM),
        ("Semi-Bold", Self::SEMI_BOLD),
        ("Demi-Bold", Self::SEMI_BOLD),
        ("Bold", Self::BOLD),
        ("Ultra-Bold", Self::ULTRA_BOLD),
        ("Extra-Bold", Self::ULTRA_BOLD),
        ("Heavy", Self::HEAVY),
        ("Black", Self::HEAVY),
        ("Ultra-Heavy", Self::ULTRA_HEAVY),
        ("Ultra-Black", Self::ULTRA_HEAVY),
    ];

    /// Creates a new weight value.
    #[must_use]
    pub const fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses a weight keyword (such as `bold` or `Semi-Light`) or a number.
    ///
    /// Keywords are matched case-insensitively.
    ///
    /// ```
    /// use text_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("Demi-Bold"), Some(FontWeight::SEMI_BOLD));
    /// assert_eq!(FontWeight::parse("850"), Some(FontWeight::new(850)));
    /// assert_eq!(FontWeight::parse("Italic"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        keyword(Self::KEYWORDS, s).or_else(|| s.parse().ok().map(Self))
    }

    /// The canonical keyword for the weight, if it has one.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        Self::KEYWORDS
            .iter()
            .find(|(_, weight)| *weight == self)
            .map(|(name, _)| *name)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.keyword() {
            Some(keyword) => f.write_str(keyword),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Slant of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Slanted, but in a roman style.
    Oblique,
    /// Slanted, in an italic style.
    Italic,
}

/// Capitalization variant of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontVariant {
    /// Normal capitals and lowercase.
    #[default]
    Normal,
    /// Lowercase letters are replaced by small capitals.
    SmallCaps,
    /// All letters are small capitals.
    AllSmallCaps,
    /// Lowercase letters are replaced by petite capitals.
    PetiteCaps,
    /// All letters are petite capitals.
    AllPetiteCaps,
    /// Uppercase letters are replaced by small capitals, lowercase is kept.
    Unicase,
    /// Capitals designed for titles.
    TitleCaps,
}

/// Width of a font, relative to its normal width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FontStretch {
    /// 50% of normal.
    UltraCondensed,
    /// 62.5% of normal.
    ExtraCondensed,
    /// 75% of normal.
    Condensed,
    /// 87.5% of normal.
    SemiCondensed,
    /// The normal width.
    #[default]
    Normal,
    /// 112.5% of normal.
    SemiExpanded,
    /// 125% of normal.
    Expanded,
    /// 150% of normal.
    ExtraExpanded,
    /// 200% of normal.
    UltraExpanded,
}

impl FontStretch {
    /// Returns the width as a ratio, with `1.0` being the normal width.
    #[must_use]
    pub fn ratio(self) -> f32 {
        match self {
            Self::UltraCondensed => 0.5,
            Self::ExtraCondensed => 0.625,
            Self::Condensed => 0.75,
            Self::SemiCondensed => 0.875,
            Self::Normal => 1.0,
            Self::SemiExpanded => 1.125,
            Self::Expanded => 1.25,
            Self::ExtraExpanded => 1.5,
            Self::UltraExpanded => 2.0,
        }
    }
}

macro_rules! keywords {
    ($ty:ident { $($variant:ident => $name:literal),* $(,)? }) => {
        impl $ty {
            const KEYWORDS: &[(&str, Self)] = &[$(($name, Self::$variant)),*];

            /// Parses the keyword for a value, case-insensitively.
            pub fn parse(s: &str) -> Option<Self> {
                keyword(Self::KEYWORDS, s.trim())
            }

            /// The keyword for the value, as used in font descriptions.
            #[must_use]
            pub fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

keywords!(FontStyle {
    Normal => "Normal",
    Oblique => "Oblique",
    Italic => "Italic",
});

keywords!(FontVariant {
    Normal => "Normal",
    SmallCaps => "Small-Caps",
    AllSmallCaps => "All-Small-Caps",
    PetiteCaps => "Petite-Caps",
    AllPetiteCaps => "All-Petite-Caps",
    Unicase => "Unicase",
    TitleCaps => "Title-Caps",
});

keywords!(FontStretch {
    UltraCondensed => "Ultra-Condensed",
    ExtraCondensed => "Extra-Condensed",
    Condensed => "Condensed",
    SemiCondensed => "Semi-Condensed",
    Normal => "Normal",
    SemiExpanded => "Semi-Expanded",
    Expanded => "Expanded",
    ExtraExpanded => "Extra-Expanded",
    UltraExpanded => "Ultra-Expanded",
});

fn keyword<T: Copy>(table: &[(&str, T)], s: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, value)| *value)
}
