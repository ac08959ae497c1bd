// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_primitives::{Direction, Gravity, Language, Script};
use weft_attrs::{AttrColor, AttrValue, Attribute, FontDescription};

use crate::{itemize, itemize_with_base_dir, itemize_with_font, testenv, AnalysisFlags, Context};

#[test]
fn plain_latin() {
    let env = testenv!();
    let items = env.itemize("Hello world");
    env.check_runs(&items, &[(0..11, "serif")]);

    let item = &items[0];
    assert_eq!(item.num_chars, 11);
    assert_eq!(item.analysis.level, 0);
    assert_eq!(item.analysis.script, Script::LATIN);
    assert_eq!(item.analysis.language, Language::from_static("en"));
    assert_eq!(item.analysis.gravity, Gravity::South);
    assert!(item.analysis.extra_attrs.is_empty());
    assert!(!item
        .analysis
        .flags
        .contains(AnalysisFlags::CENTERED_BASELINE));
}

#[test]
fn family_attribute_splits() {
    let mut env = testenv!();
    env.attr(Attribute::family("sans").with_range(6..11));
    let items = env.itemize("Hello world");
    env.check_runs(&items, &[(0..6, "serif"), (6..11, "sans")]);
}

#[test]
fn mixed_direction() {
    let env = testenv!();
    let items = env.itemize("abc مرحبا");
    env.check_runs(&items, &[(0..4, "serif"), (4..14, "arabic")]);

    let levels: Vec<_> = items.iter().map(|item| item.analysis.level).collect();
    assert_eq!(levels, [0, 1]);
    let scripts: Vec<_> = items.iter().map(|item| item.analysis.script).collect();
    assert_eq!(scripts, [Script::LATIN, Script::ARABIC]);
    let languages: Vec<_> = items.iter().map(|item| item.analysis.language).collect();
    assert_eq!(
        languages,
        [Language::from_static("en"), Language::from_static("ar")]
    );
}

#[test]
fn rtl_base_direction() {
    let env = testenv!();
    let items = itemize_with_base_dir(env.context(), Direction::Rtl, "abc", 0..3, None, None);
    env.check_runs(&items, &[(0..3, "serif")]);
    assert_eq!(items[0].analysis.level, 2);
}

#[test]
fn forced_breaks() {
    let env = testenv!();
    let items = env.itemize("a\tb");
    env.check_runs(&items, &[(0..1, "serif"), (1..2, "serif"), (2..3, "serif")]);

    let items = env.itemize("a\t\tb");
    env.check_runs(
        &items,
        &[
            (0..1, "serif"),
            (1..2, "serif"),
            (2..3, "serif"),
            (3..4, "serif"),
        ],
    );

    let items = env.itemize("a\u{2028}b");
    env.check_runs(&items, &[(0..1, "serif"), (1..4, "serif"), (4..5, "serif")]);
}

#[test]
fn spaces_take_a_neighbouring_font() {
    let env = testenv!();
    env.check_runs(&env.itemize(" "), &[(0..1, "serif")]);
    // The space has no font of its own and takes the font found after it.
    env.check_runs(&env.itemize(" é"), &[(0..3, "sans")]);
    env.check_runs(&env.itemize("é é"), &[(0..5, "sans")]);
}

#[test]
fn fallback_per_character() {
    let env = testenv!();
    let items = env.itemize("héllo");
    env.check_runs(&items, &[(0..1, "serif"), (1..3, "sans"), (3..6, "serif")]);
    let chars: Vec<_> = items.iter().map(|item| item.num_chars).collect();
    assert_eq!(chars, [1, 1, 3]);
}

#[test]
fn fallback_disabled() {
    let mut env = testenv!();
    env.attr(Attribute::fallback(false));
    let items = env.itemize("aéb");
    env.check_runs(&items, &[(0..4, "serif")]);
    assert_eq!(items[0].num_chars, 3);
}

#[test]
fn no_font_map() {
    let mut context = Context::new();
    context.set_language(Language::from_static("en"));
    let items = itemize(&context, "abc def", 0..7, None, None);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].range(), 0..7);
    assert!(items[0].analysis.font.is_none());
}

#[test]
fn emoji_gets_the_emoji_font() {
    let env = testenv!();
    let items = env.itemize("a\u{1F600}b");
    env.check_runs(&items, &[(0..1, "serif"), (1..5, "emoji"), (5..6, "serif")]);
    assert!(items
        .iter()
        .all(|item| item.analysis.script == Script::LATIN));
}

#[test]
fn extra_attributes_are_carried() {
    let red = AttrColor::new(0xffff, 0, 0);
    let mut env = testenv!();
    env.attr(Attribute::foreground(red).with_range(2..4));
    let items = env.itemize("abcdef");
    env.check_runs(&items, &[(0..2, "serif"), (2..4, "serif"), (4..6, "serif")]);

    let extra_counts: Vec<_> = items
        .iter()
        .map(|item| item.analysis.extra_attrs.len())
        .collect();
    assert_eq!(extra_counts, [0, 1, 0]);
    assert_eq!(
        items[1].analysis.extra_attrs[0].value(),
        &AttrValue::Foreground(red)
    );
}

#[test]
fn language_is_derived_per_script() {
    let mut env = testenv!();
    env.attr(Attribute::language(Language::from_static("ja")));
    let items = env.itemize("ab漢字");
    env.check_runs(&items, &[(0..2, "serif"), (2..8, "cjk")]);
    let languages: Vec<_> = items.iter().map(|item| item.analysis.language).collect();
    assert_eq!(
        languages,
        [Language::from_static("en"), Language::from_static("ja")]
    );
}

#[test]
fn subrange() {
    let mut env = testenv!();
    env.attr(Attribute::family("sans").with_range(0..8));
    let items = env.itemize_range("Hello world", 6..11);
    env.check_runs(&items, &[(6..8, "sans"), (8..11, "serif")]);
    let chars: Vec<_> = items.iter().map(|item| item.num_chars).collect();
    assert_eq!(chars, [2, 3]);
}

#[test]
fn invalid_ranges() {
    let env = testenv!();
    assert!(env.itemize_range("abc", 3..20).is_empty());
    let end = "abc".len();
    assert!(env.itemize_range("abc", end..1).is_empty());
    assert!(env.itemize_range("é", 0..1).is_empty());
    assert!(env.itemize_range("abc", 1..1).is_empty());
}

#[test]
fn cached_iterator() {
    let mut env = testenv!();
    env.attr(Attribute::family("sans").with_range(0..3));
    let text = "abcdef";
    let mut iter = env.attrs().iterator();

    let first = itemize(env.context(), text, 0..3, None, Some(&mut iter));
    let second = itemize(env.context(), text, 3..6, None, Some(&mut iter));
    env.check_runs(&first, &[(0..3, "sans")]);
    env.check_runs(&second, &[(3..6, "serif")]);
}

#[test]
fn stale_cached_iterator() {
    let mut env = testenv!();
    env.attr(Attribute::family("sans").with_range(0..3));
    let mut iter = env.attrs().iterator();
    assert!(iter.advance());

    // The iterator is already past the range: it is used as is.
    let items = itemize(env.context(), "abcdef", 0..3, None, Some(&mut iter));
    env.check_runs(&items, &[(0..3, "serif")]);
}

#[test]
fn attribute_inside_a_character() {
    let mut env = testenv!();
    env.attr(Attribute::family("sans").with_range(0..2));
    // The attribute ends inside "é", which stays in one piece.
    let items = env.itemize("aéb");
    env.check_runs(&items, &[(0..3, "sans"), (3..4, "serif")]);
}

#[test]
fn font_override() {
    let env = testenv!();
    let desc = FontDescription::parse("sans 10");
    let items = itemize_with_font(env.context(), "aé", 0..3, &desc);
    env.check_runs(&items, &[(0..3, "sans")]);
}
