// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_primitives::{Gravity, GravityHint, Matrix};
use weft_attrs::{Attribute, FontDescription};

use crate::{testenv, AnalysisFlags, Item};

fn gravities(items: &[Item]) -> Vec<Gravity> {
    items.iter().map(|item| item.analysis.gravity).collect()
}

fn levels(items: &[Item]) -> Vec<u8> {
    items.iter().map(|item| item.analysis.level).collect()
}

fn all_centered(items: &[Item]) -> bool {
    items.iter().all(|item| {
        item.analysis
            .flags
            .contains(AnalysisFlags::CENTERED_BASELINE)
    })
}

#[test]
fn vertical_text() {
    let mut env = testenv!();
    env.context_mut().set_base_gravity(Gravity::West);
    let items = env.itemize("漢字ab");
    env.check_runs(&items, &[(0..6, "cjk"), (6..8, "serif")]);
    // Ideographs stay upright, Latin is rotated with the line.
    assert_eq!(gravities(&items), [Gravity::West, Gravity::South]);
    assert_eq!(levels(&items), [1, 0]);
    assert!(all_centered(&items));
}

#[test]
fn east_gravity_makes_levels_even() {
    let mut env = testenv!();
    env.context_mut().set_base_gravity(Gravity::East);
    env.context_mut().set_gravity_hint(GravityHint::Strong);
    let items = env.itemize("ab مرحبا");
    env.check_runs(&items, &[(0..3, "serif"), (3..13, "arabic")]);
    assert_eq!(gravities(&items), [Gravity::East, Gravity::East]);
    assert_eq!(levels(&items), [0, 2]);
}

#[test]
fn font_description_gravity_wins() {
    let mut desc = FontDescription::new();
    desc.set_gravity(Gravity::North);
    let mut env = testenv!();
    env.context_mut().set_base_gravity(Gravity::East);
    env.attr(Attribute::font_desc(desc));
    let items = env.itemize("abc");
    assert_eq!(gravities(&items), [Gravity::North]);
    assert_eq!(levels(&items), [1]);
    assert!(all_centered(&items));
}

#[test]
fn gravity_attribute() {
    let mut env = testenv!();
    env.attr(Attribute::gravity(Gravity::North).with_range(3..6));
    let items = env.itemize("abcdef");
    env.check_runs(&items, &[(0..3, "serif"), (3..6, "serif")]);
    assert_eq!(gravities(&items), [Gravity::South, Gravity::North]);
    assert_eq!(levels(&items), [0, 1]);
    assert!(!items.iter().any(|item| item
        .analysis
        .flags
        .contains(AnalysisFlags::CENTERED_BASELINE)));
}

#[test]
fn gravity_from_matrix() {
    let mut env = testenv!();
    env.context_mut().set_base_gravity(Gravity::Auto);
    env.context_mut().set_matrix(Some(Matrix {
        xx: 0.0,
        xy: 1.0,
        yx: -1.0,
        yy: 0.0,
        ..Matrix::IDENTITY
    }));
    let items = env.itemize("漢");
    assert_eq!(gravities(&items), [Gravity::West]);
    assert_eq!(levels(&items), [1]);
    assert!(all_centered(&items));
}
