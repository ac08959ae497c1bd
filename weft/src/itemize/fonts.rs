// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use hashbrown::HashMap;
use text_primitives::Language;
use weft_attrs::FontDescription;

use crate::font::{FontRef, Fontset};
use crate::lru_cache::{LookupKey, LruCache};
use crate::Context;

const MAX_FONTSETS: usize = 8;

#[derive(Debug)]
struct FontsetId {
    desc: FontDescription,
    language: Language,
}

struct FontsetKey<'a> {
    desc: &'a FontDescription,
    language: Language,
}

impl LookupKey<FontsetId> for FontsetKey<'_> {
    fn eq(&self, other: &FontsetId) -> bool {
        self.language == other.language && *self.desc == other.desc
    }

    fn to_id(self) -> FontsetId {
        FontsetId {
            desc: self.desc.clone(),
            language: self.language,
        }
    }
}

/// A loaded fontset and the font it picked for each character seen so far.
#[derive(Debug)]
struct FontsetEntry {
    fontset: Option<Arc<dyn Fontset>>,
    fonts: HashMap<char, Option<FontRef>>,
}

/// The fonts used during one itemization.
#[derive(Debug)]
pub(crate) struct FontCache {
    fontsets: LruCache<FontsetId, FontsetEntry>,
    current: Option<usize>,
    /// The font loaded for the current description, used when fallback is disabled.
    base_font: Option<Option<FontRef>>,
}

impl FontCache {
    pub(crate) fn new() -> Self {
        Self {
            fontsets: LruCache::new(MAX_FONTSETS),
            current: None,
            base_font: None,
        }
    }

    pub(crate) fn has_fontset(&self) -> bool {
        self.current.is_some()
    }

    /// Makes the fontset for `desc` in `language` current, loading it if needed.
    pub(crate) fn select_fontset(
        &mut self,
        context: &Context,
        desc: &FontDescription,
        language: Language,
    ) {
        let slot = self.fontsets.slot(FontsetKey { desc, language }, || FontsetEntry {
            fontset: context.load_fontset(desc, language),
            fonts: HashMap::new(),
        });
        self.current = Some(slot);
    }

    pub(crate) fn clear_fontset(&mut self) {
        self.current = None;
    }

    pub(crate) fn clear_base_font(&mut self) {
        self.base_font = None;
    }

    /// The first font of the current fontset that covers `ch`.
    pub(crate) fn font_for_char(&mut self, ch: char) -> Option<FontRef> {
        let entry = self.fontsets.get_mut(self.current?)?;
        if let Some(font) = entry.fonts.get(&ch) {
            return font.clone();
        }
        let font = entry
            .fontset
            .as_ref()
            .and_then(|fontset| fontset.font_for_char(ch));
        entry.fonts.insert(ch, font.clone());
        font
    }

    /// The single font for `desc`, whether or not it covers the text.
    pub(crate) fn base_font(
        &mut self,
        context: &Context,
        desc: &FontDescription,
    ) -> Option<FontRef> {
        self.base_font
            .get_or_insert_with(|| context.load_font(desc))
            .clone()
    }
}
