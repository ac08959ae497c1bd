// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::Script;

/// A compact, zero-allocation language tag.
///
/// Tags are stored in a canonical form: ASCII lowercase, with `-` between subtags (`_` is
/// accepted on input). Two languages are the same exactly when their canonical forms are equal,
/// so `"ja_JP"` and `"ja-jp"` compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    bytes: [u8; Self::MAX_LEN],
    len: u8,
}

impl Language {
    /// The maximum length of a canonical tag.
    pub const MAX_LEN: usize = 15;

    /// A tag that no font database associates with anything (`xx`).
    ///
    /// Runs whose script has no representative language are tagged with this, so that the
    /// language plays no part in font ordering.
    pub const PLACEHOLDER: Self = Self::from_static("xx");

    /// Parses a language tag.
    #[inline(always)]
    pub fn parse(s: &str) -> Result<Self, ParseLanguageError> {
        s.parse()
    }

    /// Creates a language from a canonical tag, for `const` construction.
    ///
    /// The input is expected to be lowercase and `-` separated already. It is not validated, and
    /// anything beyond [`Self::MAX_LEN`] bytes is dropped.
    #[must_use]
    pub const fn from_static(s: &str) -> Self {
        let src = s.as_bytes();
        let mut bytes = [0_u8; Self::MAX_LEN];
        let mut len = 0;
        while len < src.len() && len < Self::MAX_LEN {
            bytes[len] = src[len];
            len += 1;
        }
        Self {
            bytes,
            #[expect(
                clippy::cast_possible_truncation,
                reason = "`len` is bounded by `MAX_LEN`."
            )]
            len: len as u8,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    /// Returns the primary language subtag, e.g. `zh` for `zh-tw`.
    #[must_use]
    pub fn primary(&self) -> &str {
        let s = self.as_str();
        s.split('-').next().unwrap_or(s)
    }

    /// Returns the explicit script subtag of the tag, if it carries one.
    #[must_use]
    pub fn script_subtag(&self) -> Option<Script> {
        self.as_str()
            .split('-')
            .skip(1)
            .find(|subtag| subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
            .and_then(|subtag| Script::parse(subtag).ok())
    }

    /// Checks the language against a list of language ranges.
    ///
    /// Ranges are separated by `;`, `:`, `,` or whitespace. The range `*` matches any language;
    /// any other range matches when it equals the tag or is a prefix of it that ends at a subtag
    /// boundary, so `zh` matches `zh-tw` but not `zha`.
    #[must_use]
    pub fn matches(&self, range_list: &str) -> bool {
        let tag = self.as_str();
        range_list
            .split(|c: char| matches!(c, ';' | ':' | ',') || c.is_ascii_whitespace())
            .filter(|range| !range.is_empty())
            .any(|range| {
                if range == "*" {
                    return true;
                }
                if range.len() > tag.len() || !tag[..range.len()].eq_ignore_ascii_case(range) {
                    return false;
                }
                range.len() == tag.len() || tag.as_bytes()[range.len()] == b'-'
            })
    }

    /// Returns the scripts the language is customarily written in, if known.
    ///
    /// The full tag is looked up first, then its primary subtag.
    #[must_use]
    pub fn scripts(&self) -> Option<&'static [Script]> {
        lookup_scripts(self.as_str()).or_else(|| lookup_scripts(self.primary()))
    }

    /// Determines whether text in `script` can be tagged with this language.
    ///
    /// Scripts that are not real (Common, Inherited, Unknown) are compatible with every language,
    /// and so is every script when nothing is known about the language. An explicit script
    /// subtag takes precedence over the table; `Hans` and `Hant` both count as Han.
    #[must_use]
    pub fn includes_script(&self, script: Script) -> bool {
        if !script.is_real() {
            return true;
        }
        if let Some(explicit) = self.script_subtag() {
            let explicit = match explicit.as_str() {
                "Hans" | "Hant" => Script::HAN,
                _ => explicit,
            };
            return explicit == script;
        }
        match self.scripts() {
            Some(scripts) => scripts.contains(&script),
            None => true,
        }
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Language").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseLanguageError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(ParseLanguageError::TooLong);
        }
        let mut bytes = [0_u8; Self::MAX_LEN];
        for (index, (dst, src)) in bytes.iter_mut().zip(s.bytes()).enumerate() {
            *dst = match src {
                b'-' | b'_' => b'-',
                b if b.is_ascii_alphanumeric() => b.to_ascii_lowercase(),
                _ => return Err(ParseLanguageError::InvalidCharacter { index }),
            };
        }
        Ok(Self {
            bytes,
            #[expect(
                clippy::cast_possible_truncation,
                reason = "The length was checked against `MAX_LEN` above."
            )]
            len: s.len() as u8,
        })
    }
}

/// An error returned from parsing a [`Language`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseLanguageError {
    /// The input was empty.
    Empty,
    /// The input was longer than [`Language::MAX_LEN`] bytes.
    TooLong,
    /// The input contained a byte that is neither alphanumeric nor a separator.
    InvalidCharacter {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty language tag"),
            Self::TooLong => write!(
                f,
                "language tag longer than {} bytes",
                Language::MAX_LEN
            ),
            Self::InvalidCharacter { index } => {
                write!(f, "invalid character in language tag at byte {index}")
            }
        }
    }
}

impl core::error::Error for ParseLanguageError {}

fn lookup_scripts(tag: &str) -> Option<&'static [Script]> {
    LANGUAGE_SCRIPTS
        .binary_search_by(|(lang, _)| (*lang).cmp(tag))
        .ok()
        .map(|ix| LANGUAGE_SCRIPTS[ix].1)
}

const ARAB: &[Script] = &[Script::ARABIC];
const CYRL: &[Script] = &[Script::CYRILLIC];
const DEVA: &[Script] = &[Script::DEVANAGARI];
const LATN: &[Script] = &[Script::LATIN];

/// Sorted by tag.
const LANGUAGE_SCRIPTS: &[(&str, &[Script])] = &[
    ("af", LATN),
    ("am", &[Script::ETHIOPIC]),
    ("ar", ARAB),
    ("as", &[Script::BENGALI]),
    ("az", LATN),
    ("az-ir", ARAB),
    ("be", CYRL),
    ("bg", CYRL),
    ("bn", &[Script::BENGALI]),
    ("bo", &[Script::TIBETAN]),
    ("br", LATN),
    ("bs", LATN),
    ("ca", LATN),
    ("chr", &[Script::CHEROKEE]),
    ("cop", &[Script::COPTIC]),
    ("cs", LATN),
    ("cy", LATN),
    ("da", LATN),
    ("de", LATN),
    ("dv", &[Script::THAANA]),
    ("dz", &[Script::TIBETAN]),
    ("el", &[Script::GREEK]),
    ("en", LATN),
    ("eo", LATN),
    ("es", LATN),
    ("et", LATN),
    ("eu", LATN),
    ("fa", ARAB),
    ("fi", LATN),
    ("fo", LATN),
    ("fr", LATN),
    ("ga", LATN),
    ("gd", LATN),
    ("gl", LATN),
    ("gu", &[Script::GUJARATI]),
    ("he", &[Script::HEBREW]),
    ("hi", DEVA),
    ("hr", LATN),
    ("hu", LATN),
    ("hy", &[Script::ARMENIAN]),
    ("id", LATN),
    ("is", LATN),
    ("it", LATN),
    ("iu", &[Script::CANADIAN_ABORIGINAL]),
    ("ja", &[Script::HAN, Script::HIRAGANA, Script::KATAKANA]),
    ("ka", &[Script::GEORGIAN]),
    ("kk", CYRL),
    ("km", &[Script::KHMER]),
    ("kn", &[Script::KANNADA]),
    ("ko", &[Script::HANGUL, Script::HAN]),
    ("ku", LATN),
    ("ky", CYRL),
    ("la", LATN),
    ("lo", &[Script::LAO]),
    ("lt", LATN),
    ("lv", LATN),
    ("mk", CYRL),
    ("ml", &[Script::MALAYALAM]),
    ("mn", &[Script::MONGOLIAN]),
    ("mr", DEVA),
    ("ms", LATN),
    ("mt", LATN),
    ("my", &[Script::MYANMAR]),
    ("nb", LATN),
    ("ne", DEVA),
    ("nl", LATN),
    ("nn", LATN),
    ("no", LATN),
    ("nqo", &[Script::NKO]),
    ("or", &[Script::ORIYA]),
    ("pa", &[Script::GURMUKHI]),
    ("pl", LATN),
    ("ps", ARAB),
    ("pt", LATN),
    ("ro", LATN),
    ("ru", CYRL),
    ("sa", DEVA),
    ("si", &[Script::SINHALA]),
    ("sk", LATN),
    ("sl", LATN),
    ("so", LATN),
    ("sq", LATN),
    ("sr", CYRL),
    ("sv", LATN),
    ("sw", LATN),
    ("syr", &[Script::SYRIAC]),
    ("ta", &[Script::TAMIL]),
    ("te", &[Script::TELUGU]),
    ("tg", CYRL),
    ("th", &[Script::THAI]),
    ("ti", &[Script::ETHIOPIC]),
    ("tk", LATN),
    ("tl", LATN),
    ("tr", LATN),
    ("tt", CYRL),
    ("ug", ARAB),
    ("uk", CYRL),
    ("ur", ARAB),
    ("uz", LATN),
    ("vi", LATN),
    ("yi", &[Script::HEBREW]),
    ("zh", &[Script::HAN]),
    ("zh-hk", &[Script::HAN, Script::BOPOMOFO]),
    ("zh-tw", &[Script::HAN, Script::BOPOMOFO]),
];
