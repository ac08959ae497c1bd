// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use proptest::prelude::*;
use text_primitives::FontWeight;
use weft_attrs::Attribute;

use crate::tests::utils::TestEnv;
use crate::{Axis, Item, RunBoundaries};

const ALPHABET: &[char] = &[
    'a', 'Z', '1', ' ', '\t', '(', ')', 'é', 'α', 'ש', 'م', '漢', 'か', '\u{0E01}', '\u{2028}',
    '\u{200D}', '\u{FE0F}', '\u{1F600}', '\u{1F3FD}',
];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..32)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Checks that the items cover `text[range]` in order, without gaps or empty items.
fn check_tiling(
    text: &str,
    range: core::ops::Range<usize>,
    items: &[Item],
) -> Result<(), TestCaseError> {
    let mut pos = range.start;
    for item in items {
        prop_assert_eq!(item.offset, pos);
        prop_assert!(item.length > 0, "empty item at {}", pos);
        let Some(item_text) = text.get(item.range()) else {
            return Err(TestCaseError::fail(format!(
                "item {:?} splits a character",
                item.range()
            )));
        };
        prop_assert_eq!(item.num_chars, item_text.chars().count());
        pos = item.range().end;
    }
    prop_assert_eq!(pos, range.end);
    Ok(())
}

proptest! {
    #[test]
    fn items_tile_the_text(
        text in text(),
        family_start in 0_usize..40,
        family_len in 0_usize..20,
        bold_start in 0_usize..40,
    ) {
        let mut env = TestEnv::new("items_tile_the_text");
        env.attr(Attribute::family("sans").with_range(family_start..family_start + family_len));
        env.attr(Attribute::weight(FontWeight::BOLD).with_range(bold_start..));
        let items = env.itemize(&text);
        check_tiling(&text, 0..text.len(), &items)?;
    }

    #[test]
    fn ranges_itemize_like_the_whole(text in text(), split in 0_usize..32) {
        let env = TestEnv::new("ranges_itemize_like_the_whole");
        let split = text
            .char_indices()
            .map(|(i, _)| i)
            .nth(split)
            .unwrap_or(text.len());
        let head = env.itemize_range(&text, 0..split);
        let tail = env.itemize_range(&text, split..text.len());
        check_tiling(&text, 0..split, &head)?;
        check_tiling(&text, split..text.len(), &tail)?;
    }

    #[test]
    fn run_end_is_the_nearest_boundary(ends in prop::array::uniform5(0_usize..100)) {
        let mut bounds = RunBoundaries::new(100);
        for (axis, end) in Axis::ALL.into_iter().zip(ends) {
            bounds.set(axis, end);
        }
        let nearest = ends.into_iter().min().unwrap();
        prop_assert_eq!(bounds.run_end(), nearest);
        prop_assert!(Axis::ALL.into_iter().any(|axis| bounds.ends_at(axis, nearest)));
    }
}
