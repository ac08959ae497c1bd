// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::{Direction, Gravity, Language};

/// An ISO 15924 script identifier (four ASCII letters).
///
/// This type stores the canonical `Titlecase` form (e.g. `Latn`, `Cyrl`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script {
    raw: [u8; 4],
}

macro_rules! scripts {
    ($($(#[$meta:meta])* $name:ident = $code:literal;)*) => {
        impl Script {
            $(
                $(#[$meta])*
                pub const $name: Self = Self::from_str_unchecked($code);
            )*
        }
    };
}

scripts! {
    /// The “unknown” script (`Zzzz`), for unassigned code points.
    UNKNOWN = "Zzzz";
    /// The “common” script (`Zyyy`), shared by punctuation, digits and symbols.
    COMMON = "Zyyy";
    /// The “inherited” script (`Zinh`), which takes the script of the preceding character.
    INHERITED = "Zinh";
    /// Arabic (`Arab`).
    ARABIC = "Arab";
    /// Armenian (`Armn`).
    ARMENIAN = "Armn";
    /// Bengali (`Beng`).
    BENGALI = "Beng";
    /// Bopomofo (`Bopo`).
    BOPOMOFO = "Bopo";
    /// Unified Canadian Aboriginal Syllabics (`Cans`).
    CANADIAN_ABORIGINAL = "Cans";
    /// Cherokee (`Cher`).
    CHEROKEE = "Cher";
    /// Coptic (`Copt`).
    COPTIC = "Copt";
    /// Cyrillic (`Cyrl`).
    CYRILLIC = "Cyrl";
    /// Devanagari (`Deva`).
    DEVANAGARI = "Deva";
    /// Ethiopic (`Ethi`).
    ETHIOPIC = "Ethi";
    /// Georgian (`Geor`).
    GEORGIAN = "Geor";
    /// Greek (`Grek`).
    GREEK = "Grek";
    /// Gujarati (`Gujr`).
    GUJARATI = "Gujr";
    /// Gurmukhi (`Guru`).
    GURMUKHI = "Guru";
    /// Han (`Hani`).
    HAN = "Hani";
    /// Hangul (`Hang`).
    HANGUL = "Hang";
    /// Hebrew (`Hebr`).
    HEBREW = "Hebr";
    /// Hiragana (`Hira`).
    HIRAGANA = "Hira";
    /// Kannada (`Knda`).
    KANNADA = "Knda";
    /// Katakana (`Kana`).
    KATAKANA = "Kana";
    /// Khmer (`Khmr`).
    KHMER = "Khmr";
    /// Lao (`Laoo`).
    LAO = "Laoo";
    /// Latin (`Latn`).
    LATIN = "Latn";
    /// Malayalam (`Mlym`).
    MALAYALAM = "Mlym";
    /// Mongolian (`Mong`).
    MONGOLIAN = "Mong";
    /// Myanmar (`Mymr`).
    MYANMAR = "Mymr";
    /// N’Ko (`Nkoo`).
    NKO = "Nkoo";
    /// Ogham (`Ogam`).
    OGHAM = "Ogam";
    /// Oriya (`Orya`).
    ORIYA = "Orya";
    /// Phags-pa (`Phag`).
    PHAGS_PA = "Phag";
    /// Sinhala (`Sinh`).
    SINHALA = "Sinh";
    /// Syriac (`Syrc`).
    SYRIAC = "Syrc";
    /// Tagalog (`Tglg`).
    TAGALOG = "Tglg";
    /// Tamil (`Taml`).
    TAMIL = "Taml";
    /// Telugu (`Telu`).
    TELUGU = "Telu";
    /// Thaana (`Thaa`).
    THAANA = "Thaa";
    /// Thai (`Thai`).
    THAI = "Thai";
    /// Tibetan (`Tibt`).
    TIBETAN = "Tibt";
    /// Yi (`Yiii`).
    YI = "Yiii";
}

impl Script {
    /// Creates a `Script` from raw ISO 15924 bytes.
    ///
    /// The input must be four ASCII bytes in canonical form. This function does not validate.
    #[must_use]
    #[inline(always)]
    pub const fn from_bytes(raw: [u8; 4]) -> Self {
        Self { raw }
    }

    /// Creates a `Script` from a 4-byte string literal, for `const` construction.
    ///
    /// Inputs shorter than four bytes are padded with `z`.
    #[must_use]
    pub const fn from_str_unchecked(s: &str) -> Self {
        let bytes = s.as_bytes();
        let mut raw = *b"zzzz";
        let mut i = 0;
        while i < 4 && i < bytes.len() {
            raw[i] = bytes[i];
            i += 1;
        }
        Self { raw }
    }

    /// Returns the raw ISO 15924 bytes.
    #[must_use]
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.raw
    }

    /// Returns the canonical string form (e.g. `Latn`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.raw).unwrap_or("Zzzz")
    }

    /// Parses an ISO 15924 script identifier, case-insensitively.
    #[inline(always)]
    pub fn parse(s: &str) -> Result<Self, ParseScriptError> {
        s.parse()
    }

    /// Returns `true` for scripts that identify an actual writing system.
    ///
    /// Common, Inherited and Unknown never start a run of their own; they take the script of
    /// their neighbours.
    #[must_use]
    pub fn is_real(self) -> bool {
        self != Self::COMMON && self != Self::INHERITED && self != Self::UNKNOWN
    }

    /// Returns a language that is representative of the script, if there is one.
    ///
    /// This is what a run gets tagged with when the language in effect has nothing to say
    /// about its script.
    #[must_use]
    pub fn sample_language(self) -> Option<Language> {
        SAMPLE_LANGUAGES
            .binary_search_by(|(script, _)| script.cmp(&self))
            .ok()
            .map(|ix| SAMPLE_LANGUAGES[ix].1)
    }

    /// The direction the script is written in horizontally.
    #[must_use]
    pub fn horizontal_direction(self) -> Direction {
        self.properties().horizontal
    }

    /// The direction the script is written in when set vertically.
    #[must_use]
    pub fn vertical_direction(self) -> VerticalDirection {
        self.properties().vertical
    }

    /// The gravity that fits the script best when the base gravity is [`Gravity::Auto`].
    #[must_use]
    pub fn preferred_gravity(self) -> Gravity {
        self.properties().gravity
    }

    /// Whether the script is set upright in vertical text, independent of per-character width.
    #[must_use]
    pub fn is_wide(self) -> bool {
        self.properties().wide
    }

    fn properties(self) -> ScriptProperties {
        SCRIPT_PROPERTIES
            .binary_search_by(|(script, _)| script.cmp(&self))
            .map(|ix| SCRIPT_PROPERTIES[ix].1)
            .unwrap_or(ScriptProperties::DEFAULT)
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::COMMON
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Script").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[a, b, c, d] = s.as_bytes() else {
            return Err(ParseScriptError::InvalidLength);
        };
        let raw = [a, b, c, d];
        if !raw.iter().all(u8::is_ascii_alphabetic) {
            return Err(ParseScriptError::InvalidBytes);
        }
        Ok(Self {
            raw: [
                a.to_ascii_uppercase(),
                b.to_ascii_lowercase(),
                c.to_ascii_lowercase(),
                d.to_ascii_lowercase(),
            ],
        })
    }
}

/// An error returned from parsing a [`Script`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseScriptError {
    /// The input was not exactly four bytes.
    InvalidLength,
    /// The input contained bytes that are not ASCII letters.
    InvalidBytes,
}

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("script codes are four letters long"),
            Self::InvalidBytes => f.write_str("script codes may only contain ASCII letters"),
        }
    }
}

impl core::error::Error for ParseScriptError {}

/// The direction a script progresses in when set vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalDirection {
    /// The script has no native vertical form.
    #[default]
    None,
    /// Top to bottom.
    TopToBottom,
    /// Bottom to top.
    BottomToTop,
}

#[derive(Clone, Copy, Debug)]
struct ScriptProperties {
    horizontal: Direction,
    vertical: VerticalDirection,
    gravity: Gravity,
    wide: bool,
}

impl ScriptProperties {
    const DEFAULT: Self = Self {
        horizontal: Direction::Ltr,
        vertical: VerticalDirection::None,
        gravity: Gravity::South,
        wide: false,
    };

    const RTL: Self = Self {
        horizontal: Direction::Rtl,
        ..Self::DEFAULT
    };

    const CJK: Self = Self {
        vertical: VerticalDirection::TopToBottom,
        wide: true,
        ..Self::DEFAULT
    };

    const VERTICAL_WEST: Self = Self {
        vertical: VerticalDirection::TopToBottom,
        gravity: Gravity::West,
        ..Self::DEFAULT
    };
}

/// Scripts that differ from left-to-right, horizontal-only, south-gravity defaults.
///
/// Sorted by script code.
const SCRIPT_PROPERTIES: &[(Script, ScriptProperties)] = &[
    (Script::from_str_unchecked("Adlm"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Arab"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Armi"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Avst"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Bopo"), ScriptProperties::CJK),
    (Script::from_str_unchecked("Chrs"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Cprt"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Elym"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Hang"), ScriptProperties::CJK),
    (Script::from_str_unchecked("Hani"), ScriptProperties::CJK),
    (Script::from_str_unchecked("Hatr"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Hebr"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Hira"), ScriptProperties::CJK),
    (Script::from_str_unchecked("Hung"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Kana"), ScriptProperties::CJK),
    (Script::from_str_unchecked("Khar"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Lydi"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Mand"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Mani"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Mend"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Merc"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Mero"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Mong"), ScriptProperties::VERTICAL_WEST),
    (Script::from_str_unchecked("Narb"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Nbat"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Nkoo"), ScriptProperties::RTL),
    (
        Script::from_str_unchecked("Ogam"),
        ScriptProperties {
            vertical: VerticalDirection::BottomToTop,
            ..ScriptProperties::DEFAULT
        },
    ),
    (Script::from_str_unchecked("Orkh"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Palm"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Phag"), ScriptProperties::VERTICAL_WEST),
    (Script::from_str_unchecked("Phli"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Phlp"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Phnx"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Prti"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Rohg"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Samr"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Sarb"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Sogd"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Sogo"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Syrc"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Thaa"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Yezi"), ScriptProperties::RTL),
    (Script::from_str_unchecked("Yiii"), ScriptProperties::CJK),
];

/// Sorted by script code.
const SAMPLE_LANGUAGES: &[(Script, Language)] = &[
    (Script::from_str_unchecked("Arab"), Language::from_static("ar")),
    (Script::from_str_unchecked("Armn"), Language::from_static("hy")),
    (Script::from_str_unchecked("Beng"), Language::from_static("bn")),
    (Script::from_str_unchecked("Bopo"), Language::from_static("zh-tw")),
    (Script::from_str_unchecked("Bugi"), Language::from_static("bug")),
    (Script::from_str_unchecked("Buhd"), Language::from_static("bku")),
    (Script::from_str_unchecked("Cans"), Language::from_static("iu")),
    (Script::from_str_unchecked("Cher"), Language::from_static("chr")),
    (Script::from_str_unchecked("Copt"), Language::from_static("cop")),
    (Script::from_str_unchecked("Cyrl"), Language::from_static("ru")),
    (Script::from_str_unchecked("Deva"), Language::from_static("hi")),
    (Script::from_str_unchecked("Ethi"), Language::from_static("am")),
    (Script::from_str_unchecked("Geor"), Language::from_static("ka")),
    (Script::from_str_unchecked("Grek"), Language::from_static("el")),
    (Script::from_str_unchecked("Gujr"), Language::from_static("gu")),
    (Script::from_str_unchecked("Guru"), Language::from_static("pa")),
    (Script::from_str_unchecked("Hang"), Language::from_static("ko")),
    (Script::from_str_unchecked("Hani"), Language::from_static("zh-cn")),
    (Script::from_str_unchecked("Hano"), Language::from_static("hnn")),
    (Script::from_str_unchecked("Hebr"), Language::from_static("he")),
    (Script::from_str_unchecked("Hira"), Language::from_static("ja")),
    (Script::from_str_unchecked("Kana"), Language::from_static("ja")),
    (Script::from_str_unchecked("Khmr"), Language::from_static("km")),
    (Script::from_str_unchecked("Knda"), Language::from_static("kn")),
    (Script::from_str_unchecked("Laoo"), Language::from_static("lo")),
    (Script::from_str_unchecked("Latn"), Language::from_static("en")),
    (Script::from_str_unchecked("Mlym"), Language::from_static("ml")),
    (Script::from_str_unchecked("Mong"), Language::from_static("mn")),
    (Script::from_str_unchecked("Mymr"), Language::from_static("my")),
    (Script::from_str_unchecked("Nkoo"), Language::from_static("nqo")),
    (Script::from_str_unchecked("Orya"), Language::from_static("or")),
    (Script::from_str_unchecked("Osma"), Language::from_static("so")),
    (Script::from_str_unchecked("Sinh"), Language::from_static("si")),
    (Script::from_str_unchecked("Sylo"), Language::from_static("syl")),
    (Script::from_str_unchecked("Syrc"), Language::from_static("syr")),
    (Script::from_str_unchecked("Tagb"), Language::from_static("tbw")),
    (Script::from_str_unchecked("Taml"), Language::from_static("ta")),
    (Script::from_str_unchecked("Telu"), Language::from_static("te")),
    (Script::from_str_unchecked("Tglg"), Language::from_static("tl")),
    (Script::from_str_unchecked("Thaa"), Language::from_static("dv")),
    (Script::from_str_unchecked("Thai"), Language::from_static("th")),
    (Script::from_str_unchecked("Tibt"), Language::from_static("bo")),
    (Script::from_str_unchecked("Ugar"), Language::from_static("uga")),
    (Script::from_str_unchecked("Xpeo"), Language::from_static("peo")),
];
