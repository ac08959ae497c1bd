// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Splits text into runs of characters that stay upright in vertical text, and runs that are
/// rotated with the line.
///
/// Characters that extend a sequence (zero width joiners and the character after one,
/// variation selectors, tag characters and emoji modifiers) never start a new run.
///
/// ```
/// use weft::WidthIter;
///
/// let mut iter = WidthIter::new("ab漢字c");
/// assert_eq!((iter.start(), iter.end(), iter.is_upright()), (0, 2, false));
/// assert!(iter.advance());
/// assert_eq!((iter.start(), iter.end(), iter.is_upright()), (2, 8, true));
/// assert!(iter.advance());
/// assert_eq!((iter.start(), iter.end(), iter.is_upright()), (8, 9, false));
/// assert!(!iter.advance());
/// ```
#[derive(Clone, Debug)]
pub struct WidthIter<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    upright: bool,
}

const ZERO_WIDTH_JOINER: char = '\u{200D}';

impl<'a> WidthIter<'a> {
    /// Creates an iterator positioned on the first run of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut iter = Self {
            text,
            start: 0,
            end: 0,
            upright: false,
        };
        iter.advance();
        iter
    }

    /// The start of the current run.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end of the current run.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns true if the current run is set upright in vertical text.
    #[must_use]
    pub fn is_upright(&self) -> bool {
        self.upright
    }

    /// Stretches the current run to at least `end`, so the next run starts there.
    pub(crate) fn extend_to(&mut self, end: usize) {
        let end = end.min(self.text.len());
        if end > self.end && self.text.is_char_boundary(end) {
            self.end = end;
        }
    }

    /// Moves to the next run. Returns false at the end of the text.
    pub fn advance(&mut self) -> bool {
        let text = self.text;
        let rest = &text[self.end..];
        let Some(first) = rest.chars().next() else {
            return false;
        };
        self.start = self.end;
        self.upright = is_upright(first);

        let mut met_joiner = false;
        for ch in rest.chars() {
            if ch == ZERO_WIDTH_JOINER {
                met_joiner = true;
            } else if met_joiner {
                met_joiner = false;
            } else if !extends_sequence(ch) && is_upright(ch) != self.upright {
                break;
            }
            self.end += ch.len_utf8();
        }
        true
    }
}

/// Variation selectors 15 and 16, tags and emoji modifiers.
fn extends_sequence(ch: char) -> bool {
    matches!(ch, '\u{FE0E}' | '\u{FE0F}' | '\u{E0020}'..='\u{E007F}' | '\u{1F3FB}'..='\u{1F3FF}')
}

/// Returns true if `ch` has a `U` or `Tu` vertical orientation.
pub(crate) fn is_upright(ch: char) -> bool {
    let cp = u32::from(ch);
    UPRIGHT
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                core::cmp::Ordering::Less
            } else if lo > cp {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Ranges of the `U` and `Tu` values of the Unicode 11 `Vertical_Orientation` property.
#[rustfmt::skip]
const UPRIGHT: &[(u32, u32)] = &[
    (0x00A7, 0x00A7), (0x00A9, 0x00A9), (0x00AE, 0x00AE), (0x00B1, 0x00B1),
    (0x00BC, 0x00BE), (0x00D7, 0x00D7), (0x00F7, 0x00F7), (0x02EA, 0x02EB),
    (0x1100, 0x11FF), (0x1401, 0x167F), (0x18B0, 0x18FF), (0x2016, 0x2016),
    (0x2020, 0x2021), (0x2030, 0x2031), (0x203B, 0x203C), (0x2042, 0x2042),
    (0x2047, 0x2049), (0x2051, 0x2051), (0x2065, 0x2065), (0x20DD, 0x20E0),
    (0x20E2, 0x20E4), (0x2100, 0x2101), (0x2103, 0x2109), (0x210F, 0x210F),
    (0x2113, 0x2114), (0x2116, 0x2117), (0x211E, 0x2123), (0x2125, 0x2125),
    (0x2127, 0x2127), (0x2129, 0x2129), (0x212E, 0x212E), (0x2135, 0x213F),
    (0x2145, 0x214A), (0x214C, 0x214D), (0x214F, 0x2189), (0x218C, 0x218F),
    (0x221E, 0x221E), (0x2234, 0x2235), (0x2300, 0x2307), (0x230C, 0x231F),
    (0x2324, 0x2328), (0x232B, 0x232B), (0x237D, 0x239A), (0x23BE, 0x23CD),
    (0x23CF, 0x23CF), (0x23D1, 0x23DB), (0x23E2, 0x2422), (0x2424, 0x24FF),
    (0x25A0, 0x2619), (0x2620, 0x2767), (0x2776, 0x2793), (0x2B12, 0x2B2F),
    (0x2B50, 0x2B59), (0x2BB8, 0x2BD1), (0x2BD3, 0x2BEB), (0x2BF0, 0x2BFF),
    (0x2E80, 0x3007), (0x3012, 0x3013), (0x3020, 0x302F), (0x3031, 0x309F),
    (0x30A1, 0x30FB), (0x30FD, 0xA4CF), (0xA960, 0xA97F), (0xAC00, 0xD7FF),
    (0xE000, 0xFAFF), (0xFE10, 0xFE1F), (0xFE30, 0xFE48), (0xFE50, 0xFE57),
    (0xFE5F, 0xFE62), (0xFE67, 0xFE6F), (0xFF01, 0xFF07), (0xFF0A, 0xFF0C),
    (0xFF0E, 0xFF19), (0xFF1F, 0xFF3A), (0xFF3C, 0xFF3C), (0xFF3E, 0xFF3E),
    (0xFF40, 0xFF5A), (0xFFE0, 0xFFE2), (0xFFE4, 0xFFE7), (0xFFF0, 0xFFF8),
    (0xFFFC, 0xFFFD), (0x10980, 0x1099F), (0x11580, 0x115FF), (0x11A00, 0x11AAF),
    (0x13000, 0x1342F), (0x14400, 0x1467F), (0x16FE0, 0x18AFF), (0x1B000, 0x1B12F),
    (0x1B170, 0x1B2FF), (0x1D000, 0x1D1FF), (0x1D2E0, 0x1D37F), (0x1D800, 0x1DAAF),
    (0x1F000, 0x1F7FF), (0x1F900, 0x1FA6F), (0x20000, 0x2FFFD), (0x30000, 0x3FFFD),
    (0xF0000, 0xFFFFD), (0x100000, 0x10FFFD),
];

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{is_upright, WidthIter, UPRIGHT};

    fn runs(text: &str) -> Vec<(usize, usize, bool)> {
        let mut iter = WidthIter::new(text);
        let mut runs = Vec::new();
        if text.is_empty() {
            return runs;
        }
        loop {
            runs.push((iter.start(), iter.end(), iter.is_upright()));
            if !iter.advance() {
                return runs;
            }
        }
    }

    #[test]
    fn table_is_sorted() {
        assert!(UPRIGHT.windows(2).all(|w| w[0].1 < w[1].0));
        assert!(UPRIGHT.iter().all(|(lo, hi)| lo <= hi));
    }

    #[test]
    fn classification() {
        assert!(is_upright('漢'));
        assert!(is_upright('한'));
        assert!(is_upright('©'));
        assert!(is_upright('\u{10FFFD}'));
        assert!(!is_upright('a'));
        assert!(!is_upright('\u{A8}'));
    }

    #[test]
    fn empty_text() {
        let mut iter = WidthIter::new("");
        assert_eq!((iter.start(), iter.end()), (0, 0));
        assert!(!iter.advance());
    }

    #[test]
    fn joiner_absorbs_next_character() {
        // "a", ZWJ, "漢", "b": the joined ideograph stays in the first run.
        assert_eq!(runs("a\u{200D}漢b"), [(0, 8, false)]);
    }

    #[test]
    fn selectors_and_modifiers_do_not_split() {
        assert_eq!(runs("漢\u{FE0F}字"), [(0, 9, true)]);
        assert_eq!(runs("a\u{1F3FB}b"), [(0, 6, false)]);
        assert_eq!(runs("漢\u{E0041}a"), [(0, 7, true), (7, 8, false)]);
    }

    #[test]
    fn extended_run_resumes_after_extension() {
        let mut iter = WidthIter::new("ab漢字c");
        iter.extend_to(4);
        assert_eq!(iter.end(), 2, "not a character boundary");
        iter.extend_to(5);
        assert_eq!((iter.start(), iter.end(), iter.is_upright()), (0, 5, false));
        assert!(iter.advance());
        assert_eq!((iter.start(), iter.end(), iter.is_upright()), (5, 8, true));
        iter.extend_to(100);
        assert_eq!(iter.end(), 9);
        assert!(!iter.advance());
    }
}
