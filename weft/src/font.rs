// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font capabilities itemization relies on.
//!
//! Weft does not load or match fonts itself. A [`FontMap`] supplied through the
//! [`Context`] answers font lookups, and the fonts it returns only need to report which
//! characters they cover.

use alloc::sync::Arc;
use core::fmt::Debug;

use text_primitives::Language;
use weft_attrs::FontDescription;

use crate::Context;

/// A shared handle to a font.
///
/// Items compare fonts by identity, so a font map should hand out clones of the same handle for
/// the same face.
pub type FontRef = Arc<dyn Font>;

/// A loaded font.
pub trait Font: Debug + Send + Sync {
    /// Returns true if the font has a glyph for `ch`.
    fn has_char(&self, ch: char) -> bool;

    /// Describes the font.
    fn describe(&self) -> FontDescription;
}

/// An ordered set of fonts to search for a character, best match first.
pub trait Fontset: Debug + Send + Sync {
    /// Calls `f` for each font in fallback order until it returns true.
    fn foreach(&self, f: &mut dyn FnMut(&FontRef) -> bool);

    /// The first font of the set that covers `ch`.
    fn font_for_char(&self, ch: char) -> Option<FontRef> {
        let mut found = None;
        self.foreach(&mut |font| {
            if font.has_char(ch) {
                found = Some(font.clone());
                true
            } else {
                false
            }
        });
        found
    }
}

/// Resolves font descriptions to fonts.
pub trait FontMap: Debug + Send + Sync {
    /// Loads the single font that best matches `desc`.
    fn load_font(&self, context: &Context, desc: &FontDescription) -> Option<FontRef>;

    /// Loads the fonts that may be used for `desc` text in `language`, in fallback order.
    fn load_fontset(
        &self,
        context: &Context,
        desc: &FontDescription,
        language: Language,
    ) -> Option<Arc<dyn Fontset>>;
}

/// Returns true if both are absent or both are the same font.
pub(crate) fn same_font(a: Option<&FontRef>, b: Option<&FontRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
