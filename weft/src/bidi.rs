// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional embedding levels.

use alloc::vec::Vec;

use icu_properties::props::BidiClass;
use icu_properties::CodePointMapData;
use text_primitives::Direction;
use unicode_bidi::{BidiInfo, Level};

/// The strong direction of `ch`, or [`Direction::Neutral`] if it has none.
#[must_use]
pub fn unichar_direction(ch: char) -> Direction {
    match CodePointMapData::<BidiClass>::new().get(ch) {
        BidiClass::LeftToRight
        | BidiClass::LeftToRightEmbedding
        | BidiClass::LeftToRightOverride => Direction::Ltr,
        BidiClass::RightToLeft
        | BidiClass::ArabicLetter
        | BidiClass::RightToLeftEmbedding
        | BidiClass::RightToLeftOverride => Direction::Rtl,
        _ => Direction::Neutral,
    }
}

/// The direction of the first strongly directional character of `text`.
///
/// Returns [`Direction::Neutral`] if there is none.
#[must_use]
pub fn find_base_dir(text: &str) -> Direction {
    text.chars()
        .map(unichar_direction)
        .find(|dir| *dir != Direction::Neutral)
        .unwrap_or(Direction::Neutral)
}

/// Computes the embedding level of every byte of `text`.
///
/// Weak and neutral base directions are resolved from the first strong character of the text.
/// The returned direction is the resolved one, [`Direction::Ltr`] or [`Direction::Rtl`].
#[must_use]
pub fn embedding_levels(text: &str, base_dir: Direction) -> (Vec<u8>, Direction) {
    let resolved = match base_dir {
        Direction::Ltr | Direction::Rtl => base_dir,
        Direction::WeakLtr | Direction::WeakRtl | Direction::Neutral => {
            match find_base_dir(text) {
                Direction::Neutral if base_dir == Direction::WeakRtl => Direction::Rtl,
                Direction::Neutral => Direction::Ltr,
                found => found,
            }
        }
    };
    if text.is_empty() {
        return (Vec::new(), resolved);
    }
    let level = if resolved == Direction::Rtl {
        Level::rtl()
    } else {
        Level::ltr()
    };
    let data_source = CodePointMapData::<BidiClass>::new();
    let levels = BidiInfo::new_with_data_source(&data_source, text, Some(level))
        .levels
        .iter()
        .map(|level| level.number())
        .collect();
    (levels, resolved)
}

#[cfg(test)]
mod tests {
    use text_primitives::Direction;

    use super::{embedding_levels, find_base_dir};

    #[test]
    fn base_dir() {
        assert_eq!(find_base_dir("123 abc"), Direction::Ltr);
        assert_eq!(find_base_dir("123 שלום"), Direction::Rtl);
        assert_eq!(find_base_dir("123 !"), Direction::Neutral);
    }

    #[test]
    fn levels_per_byte() {
        let (levels, dir) = embedding_levels("ab שׁ", Direction::WeakLtr);
        assert_eq!(dir, Direction::Ltr);
        assert_eq!(levels.len(), "ab שׁ".len());
        assert_eq!(&levels[..3], &[0, 0, 0]);
        assert!(levels[3..].iter().all(|level| *level == 1));
    }

    #[test]
    fn weak_direction_falls_back() {
        let (levels, dir) = embedding_levels("123", Direction::WeakRtl);
        assert_eq!(dir, Direction::Rtl);
        assert_eq!(levels, [2, 2, 2]);
        let (_, dir) = embedding_levels("שלום", Direction::WeakLtr);
        assert_eq!(dir, Direction::Rtl);
    }

    #[test]
    fn strong_direction_wins() {
        let (levels, dir) = embedding_levels("abc", Direction::Rtl);
        assert_eq!(dir, Direction::Rtl);
        assert_eq!(levels, [2, 2, 2]);
    }
}
