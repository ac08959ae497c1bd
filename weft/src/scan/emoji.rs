// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::{
    Emoji, EmojiModifier, EmojiModifierBase, EmojiPresentation, ExtendedPictographic,
    RegionalIndicator,
};
use icu_properties::CodePointSetData;

/// Splits text into runs that are presented as emoji and runs presented as text.
///
/// Presentation is decided per emoji sequence: characters with default emoji presentation,
/// anything followed by VS16, keycaps, flags (regional indicator pairs), modifier sequences, tag
/// sequences and zero width joiner sequences are emoji. VS15 forces text presentation.
///
/// ```
/// use weft::EmojiIter;
///
/// let mut iter = EmojiIter::new("hi 👋🏽!");
/// assert_eq!((iter.start(), iter.end(), iter.is_emoji()), (0, 3, false));
/// assert!(iter.advance());
/// assert_eq!((iter.start(), iter.end(), iter.is_emoji()), (3, 11, true));
/// assert!(iter.advance());
/// assert_eq!((iter.start(), iter.end(), iter.is_emoji()), (11, 12, false));
/// assert!(!iter.advance());
/// ```
#[derive(Clone, Debug)]
pub struct EmojiIter<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    is_emoji: bool,
}

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const VS15: char = '\u{FE0E}';
const VS16: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';
const CANCEL_TAG: char = '\u{E007F}';

impl<'a> EmojiIter<'a> {
    /// Creates an iterator positioned on the first run of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut iter = Self {
            text,
            start: 0,
            end: 0,
            is_emoji: false,
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

    /// Returns true if the current run is presented as emoji.
    #[must_use]
    pub fn is_emoji(&self) -> bool {
        self.is_emoji
    }

    /// Moves to the next run. Returns false at the end of the text.
    pub fn advance(&mut self) -> bool {
        let Some((len, is_emoji)) = scan_sequence(&self.text[self.end..]) else {
            return false;
        };
        self.start = self.end;
        self.end += len;
        self.is_emoji = is_emoji;
        while let Some((len, is_emoji)) = scan_sequence(&self.text[self.end..]) {
            if is_emoji != self.is_emoji {
                break;
            }
            self.end += len;
        }
        true
    }
}

/// Scans the emoji sequence or single character at the start of `text`, returning its length
/// and whether it is presented as emoji.
fn scan_sequence(text: &str) -> Option<(usize, bool)> {
    let (mut len, mut is_emoji) = scan_element(text)?;
    // Joined elements form one emoji sequence.
    while is_emoji || is_pictographic(text[..len].chars().next()) {
        let Some(after) = text[len..].strip_prefix(ZERO_WIDTH_JOINER) else {
            break;
        };
        match scan_element(after) {
            Some((next_len, _)) if is_pictographic(after.chars().next()) => {
                len += ZERO_WIDTH_JOINER.len_utf8() + next_len;
                is_emoji = true;
            }
            _ => break,
        }
    }
    Some((len, is_emoji))
}

/// Scans one emoji element: a character with its presentation selector, modifier, keycap or
/// tag suffix.
fn scan_element(text: &str) -> Option<(usize, bool)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let mut len = first.len_utf8();
    let next = chars.next();

    if set_contains::<RegionalIndicator>(first) {
        return Some(match next {
            Some(second) if set_contains::<RegionalIndicator>(second) => {
                (len + second.len_utf8(), true)
            }
            _ => (len, false),
        });
    }

    if matches!(first, '0'..='9' | '#' | '*') {
        return Some(match (next, chars.next()) {
            (Some(COMBINING_KEYCAP), _) => (len + COMBINING_KEYCAP.len_utf8(), true),
            (Some(VS16), Some(COMBINING_KEYCAP)) => {
                (len + VS16.len_utf8() + COMBINING_KEYCAP.len_utf8(), true)
            }
            _ => (len, false),
        });
    }

    let mut is_emoji = set_contains::<EmojiPresentation>(first);
    match next {
        Some(VS16) if set_contains::<Emoji>(first) => {
            len += VS16.len_utf8();
            is_emoji = true;
        }
        Some(VS15) if set_contains::<Emoji>(first) => {
            len += VS15.len_utf8();
            is_emoji = false;
        }
        Some(modifier)
            if set_contains::<EmojiModifier>(modifier)
                && set_contains::<EmojiModifierBase>(first) =>
        {
            len += modifier.len_utf8();
            is_emoji = true;
        }
        _ => {}
    }

    if is_pictographic(Some(first)) {
        let tags = text[len..]
            .chars()
            .take_while(|ch| matches!(ch, '\u{E0020}'..='\u{E007E}'))
            .map(char::len_utf8)
            .sum::<usize>();
        if tags > 0 && text[len + tags..].starts_with(CANCEL_TAG) {
            len += tags + CANCEL_TAG.len_utf8();
            is_emoji = true;
        }
    }

    Some((len, is_emoji))
}

fn is_pictographic(ch: Option<char>) -> bool {
    ch.is_some_and(|ch| set_contains::<ExtendedPictographic>(ch) || set_contains::<Emoji>(ch))
        && !matches!(ch, Some('0'..='9' | '#' | '*'))
}

fn set_contains<P: icu_properties::props::BinaryProperty>(ch: char) -> bool {
    CodePointSetData::new::<P>().contains(ch)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::EmojiIter;

    fn runs(text: &str) -> Vec<(usize, usize, bool)> {
        let mut iter = EmojiIter::new(text);
        let mut runs = Vec::new();
        if text.is_empty() {
            return runs;
        }
        loop {
            runs.push((iter.start(), iter.end(), iter.is_emoji()));
            if !iter.advance() {
                return runs;
            }
        }
    }

    #[test]
    fn plain_text() {
        assert_eq!(runs("hello"), [(0, 5, false)]);
        assert_eq!(runs(""), []);
    }

    #[test]
    fn presentation_selectors() {
        // U+263A has text presentation by default.
        assert_eq!(runs("\u{263A}"), [(0, 3, false)]);
        assert_eq!(runs("\u{263A}\u{FE0F}"), [(0, 6, true)]);
        // U+1F600 has emoji presentation by default.
        assert_eq!(runs("\u{1F600}\u{FE0E}a"), [(0, 8, false)]);
    }

    #[test]
    fn keycaps_and_digits() {
        assert_eq!(runs("1\u{20E3}2"), [(0, 4, true), (4, 5, false)]);
        assert_eq!(runs("#\u{FE0F}\u{20E3}"), [(0, 7, true)]);
        assert_eq!(runs("42"), [(0, 2, false)]);
    }

    #[test]
    fn flags() {
        // Regional indicators F and R.
        assert_eq!(runs("a\u{1F1EB}\u{1F1F7}"), [(0, 1, false), (1, 9, true)]);
        assert_eq!(runs("\u{1F1EB}a"), [(0, 5, false)]);
    }

    #[test]
    fn joiner_sequence() {
        // Woman, ZWJ, laptop.
        assert_eq!(runs("\u{1F469}\u{200D}\u{1F4BB}x"), [(0, 11, true), (11, 12, false)]);
    }

    #[test]
    fn tag_sequence() {
        // Black flag with the tags for "gbsct" and cancel tag.
        let flag = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
        assert_eq!(runs(flag), [(0, flag.len(), true)]);
    }
}
