// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::Script as IcuScript;
use icu_properties::{CodePointMapData, PropertyNamesShort};
use smallvec::SmallVec;
use text_primitives::Script;

/// Splits text into runs of a single script.
///
/// Characters of the Common and Inherited scripts join the run around them. Paired punctuation
/// takes the script of the text it opened in, so the closing parenthesis in `(ab) אב` belongs to
/// the Latin run.
///
/// ```
/// use text_primitives::Script;
/// use weft::ScriptIter;
///
/// let mut iter = ScriptIter::new("abc αβγ");
/// assert_eq!((iter.start(), iter.end(), iter.script()), (0, 4, Script::LATIN));
/// assert!(iter.advance());
/// assert_eq!((iter.start(), iter.end(), iter.script()), (4, 10, Script::GREEK));
/// assert!(!iter.advance());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptIter<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    script: Script,
    parens: SmallVec<[Paren; 16]>,
}

#[derive(Clone, Copy, Debug)]
struct Paren {
    pair_index: usize,
    script: Script,
}

const MAX_PAREN_DEPTH: usize = 128;

impl<'a> ScriptIter<'a> {
    /// Creates an iterator positioned on the first run of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut iter = Self {
            text,
            start: 0,
            end: 0,
            script: Script::COMMON,
            parens: SmallVec::new(),
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

    /// The script of the current run.
    ///
    /// A run made only of Common characters reports [`Script::COMMON`].
    #[must_use]
    pub fn script(&self) -> Script {
        self.script
    }

    /// Moves to the next run. Returns false at the end of the text.
    pub fn advance(&mut self) -> bool {
        if self.end >= self.text.len() {
            return false;
        }
        // Open parens at or above this depth were pushed before the run's script was known.
        let mut resolved_depth = self.parens.len();
        self.start = self.end;
        self.script = Script::COMMON;

        let text = self.text;
        for ch in text[self.start..].chars() {
            let mut script = char_script(ch);
            let pair_index = pair_index(ch);
            if let Some(pair_index) = pair_index {
                if is_open(pair_index) {
                    if self.parens.len() >= MAX_PAREN_DEPTH {
                        self.parens.clear();
                    }
                    self.parens.push(Paren {
                        pair_index,
                        script: self.script,
                    });
                } else if !self.parens.is_empty() {
                    let open = pair_index & !1;
                    while self.parens.last().is_some_and(|p| p.pair_index != open) {
                        self.parens.pop();
                    }
                    resolved_depth = resolved_depth.min(self.parens.len());
                    if let Some(paren) = self.parens.last() {
                        script = paren.script;
                    }
                }
            }

            if !same_script(self.script, script) {
                break;
            }
            if !self.script.is_real() && script.is_real() {
                self.script = script;
                for paren in &mut self.parens[resolved_depth..] {
                    paren.script = script;
                }
                resolved_depth = self.parens.len();
            }
            if pair_index.is_some_and(|ix| !is_open(ix)) && self.parens.pop().is_some() {
                resolved_depth = resolved_depth.min(self.parens.len());
            }
            self.end += ch.len_utf8();
        }
        true
    }
}

fn same_script(a: Script, b: Script) -> bool {
    !a.is_real() || !b.is_real() || a == b
}

/// The Unicode script of `ch`.
fn char_script(ch: char) -> Script {
    let script = CodePointMapData::<IcuScript>::new().get(ch);
    PropertyNamesShort::<IcuScript>::new()
        .get_locale_script(script)
        .map_or(Script::UNKNOWN, |script| Script::from_bytes(script.into_raw()))
}

fn is_open(pair_index: usize) -> bool {
    pair_index & 1 == 0
}

fn pair_index(ch: char) -> Option<usize> {
    PAIRED_CHARS.binary_search(&u32::from(ch)).ok()
}

/// Bracket pairs, sorted, each opening character directly followed by its closing one.
#[rustfmt::skip]
const PAIRED_CHARS: &[u32] = &[
    0x0028, 0x0029, 0x003C, 0x003E, 0x005B, 0x005D, 0x007B, 0x007D,
    0x00AB, 0x00BB, 0x0F3A, 0x0F3B, 0x0F3C, 0x0F3D, 0x169B, 0x169C,
    0x2018, 0x2019, 0x201C, 0x201D, 0x2039, 0x203A, 0x2045, 0x2046,
    0x207D, 0x207E, 0x208D, 0x208E, 0x27E6, 0x27E7, 0x27E8, 0x27E9,
    0x27EA, 0x27EB, 0x27EC, 0x27ED, 0x27EE, 0x27EF, 0x2983, 0x2984,
    0x2985, 0x2986, 0x2987, 0x2988, 0x2989, 0x298A, 0x298B, 0x298C,
    0x298D, 0x298E, 0x298F, 0x2990, 0x2991, 0x2992, 0x2993, 0x2994,
    0x2995, 0x2996, 0x2997, 0x2998, 0x29FC, 0x29FD, 0x2E02, 0x2E03,
    0x2E04, 0x2E05, 0x2E09, 0x2E0A, 0x2E0C, 0x2E0D, 0x2E1C, 0x2E1D,
    0x2E20, 0x2E21, 0x2E22, 0x2E23, 0x2E24, 0x2E25, 0x2E26, 0x2E27,
    0x2E28, 0x2E29, 0x3008, 0x3009, 0x300A, 0x300B, 0x300C, 0x300D,
    0x300E, 0x300F, 0x3010, 0x3011, 0x3014, 0x3015, 0x3016, 0x3017,
    0x3018, 0x3019, 0x301A, 0x301B, 0xFE59, 0xFE5A, 0xFE5B, 0xFE5C,
    0xFE5D, 0xFE5E, 0xFF08, 0xFF09, 0xFF3B, 0xFF3D, 0xFF5B, 0xFF5D,
    0xFF5F, 0xFF60, 0xFF62, 0xFF63,
];

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use text_primitives::Script;

    use super::{char_script, ScriptIter, PAIRED_CHARS};

    fn runs(text: &str) -> Vec<(usize, usize, Script)> {
        let mut iter = ScriptIter::new(text);
        let mut runs = Vec::new();
        if text.is_empty() {
            return runs;
        }
        loop {
            runs.push((iter.start(), iter.end(), iter.script()));
            if !iter.advance() {
                return runs;
            }
        }
    }

    #[test]
    fn pairs_are_sorted() {
        assert_eq!(PAIRED_CHARS.len() % 2, 0);
        assert!(PAIRED_CHARS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn char_scripts() {
        assert_eq!(char_script('a'), Script::LATIN);
        assert_eq!(char_script('ب'), Script::ARABIC);
        assert_eq!(char_script('1'), Script::COMMON);
        assert_eq!(char_script('\u{301}'), Script::INHERITED);
    }

    #[test]
    fn common_only() {
        assert_eq!(runs("12 !"), [(0, 4, Script::COMMON)]);
    }

    #[test]
    fn leading_common_joins_first_run() {
        assert_eq!(runs("1. αβ"), [(0, 7, Script::GREEK)]);
    }

    #[test]
    fn closing_paren_follows_opener() {
        // "(ab" opens in Latin; the Hebrew inside the parens starts a new run, but ")" closes
        // the Latin paren and so belongs to a Latin run again.
        assert_eq!(
            runs("(ab אב) c"),
            [
                (0, 4, Script::LATIN),
                (4, 8, Script::HEBREW),
                (8, 11, Script::LATIN),
            ]
        );
    }

    #[test]
    fn unmatched_close() {
        assert_eq!(runs("a) b"), [(0, 4, Script::LATIN)]);
    }

    #[test]
    fn empty_text() {
        let mut iter = ScriptIter::new("");
        assert_eq!((iter.start(), iter.end(), iter.script()), (0, 0, Script::COMMON));
        assert!(!iter.advance());
    }
}
