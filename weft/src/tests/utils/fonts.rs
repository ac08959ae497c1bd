// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use text_primitives::Language;
use weft_attrs::FontDescription;

use crate::{Context, Font, FontMap, FontRef, Fontset};

const SERIF: &[RangeInclusive<char>] = &[' '..='~'];
const SANS: &[RangeInclusive<char>] = &[
    ' '..='~',
    '\u{00A0}'..='\u{024F}',
    '\u{0370}'..='\u{03FF}',
    '\u{0590}'..='\u{05FF}',
];
const ARABIC: &[RangeInclusive<char>] = &[' '..=' ', '\u{0600}'..='\u{06FF}'];
const CJK: &[RangeInclusive<char>] = &['\u{3000}'..='\u{9FFF}', '\u{FF00}'..='\u{FFEF}'];
const EMOJI: &[RangeInclusive<char>] = &[
    '\u{2600}'..='\u{27BF}',
    '\u{FE0F}'..='\u{FE0F}',
    '\u{1F000}'..='\u{1FAFF}',
];

/// A font covering fixed character ranges.
#[derive(Debug)]
pub(crate) struct TestFont {
    family: &'static str,
    coverage: &'static [RangeInclusive<char>],
}

impl Font for TestFont {
    fn has_char(&self, ch: char) -> bool {
        self.coverage.iter().any(|range| range.contains(&ch))
    }

    fn describe(&self) -> FontDescription {
        let mut desc = FontDescription::new();
        desc.set_family(self.family);
        desc
    }
}

#[derive(Debug)]
struct TestFontset {
    fonts: Vec<FontRef>,
}

impl Fontset for TestFontset {
    fn foreach(&self, f: &mut dyn FnMut(&FontRef) -> bool) {
        for font in &self.fonts {
            if f(font) {
                break;
            }
        }
    }
}

/// Serves the families `serif`, `sans`, `arabic`, `cjk` and `emoji`.
///
/// A fontset starts with the requested family and falls back to the others in that order.
/// Unknown families get `serif`.
#[derive(Debug)]
pub(crate) struct TestFontMap {
    fonts: Vec<FontRef>,
    fontset_loads: AtomicUsize,
}

impl TestFontMap {
    pub(crate) fn new() -> Self {
        let fonts = [
            ("serif", SERIF),
            ("sans", SANS),
            ("arabic", ARABIC),
            ("cjk", CJK),
            ("emoji", EMOJI),
        ]
        .into_iter()
        .map(|(family, coverage)| Arc::new(TestFont { family, coverage }) as FontRef)
        .collect();
        Self {
            fonts,
            fontset_loads: AtomicUsize::new(0),
        }
    }

    /// How many fontsets were loaded so far.
    pub(crate) fn fontset_loads(&self) -> usize {
        self.fontset_loads.load(Ordering::Relaxed)
    }

    fn primary(&self, desc: &FontDescription) -> &FontRef {
        let family = desc
            .family()
            .and_then(|families| families.split(',').next())
            .map(str::trim)
            .unwrap_or_default();
        self.fonts
            .iter()
            .find(|font| font.describe().family() == Some(family))
            .unwrap_or(&self.fonts[0])
    }
}

impl FontMap for TestFontMap {
    fn load_font(&self, _context: &Context, desc: &FontDescription) -> Option<FontRef> {
        Some(self.primary(desc).clone())
    }

    fn load_fontset(
        &self,
        _context: &Context,
        desc: &FontDescription,
        _language: Language,
    ) -> Option<Arc<dyn Fontset>> {
        self.fontset_loads.fetch_add(1, Ordering::Relaxed);
        let primary = self.primary(desc).clone();
        let mut fonts = vec![primary.clone()];
        fonts.extend(
            self.fonts
                .iter()
                .filter(|font| !Arc::ptr_eq(font, &primary))
                .cloned(),
        );
        Some(Arc::new(TestFontset { fonts }))
    }
}

/// The family of the item's font, or `<none>`.
pub(crate) fn font_name(item: &crate::Item) -> String {
    item.analysis
        .font
        .as_ref()
        .and_then(|font| font.describe().family().map(str::to_owned))
        .unwrap_or_else(|| "<none>".to_owned())
}
