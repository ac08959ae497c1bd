// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Itemization defaults.

use alloc::sync::Arc;

use text_primitives::{
    Direction, FontStretch, FontStyle, FontVariant, FontWeight, Gravity, GravityHint, Language,
    Matrix,
};
use weft_attrs::{FontDescription, FontSize};

use crate::font::{FontMap, FontRef, Fontset};

/// The defaults and font map used by itemization.
///
/// Every setter bumps [`Context::serial`], so callers can tell whether results computed with a
/// context are stale.
#[derive(Clone, Debug)]
pub struct Context {
    serial: u32,
    base_dir: Direction,
    base_gravity: Gravity,
    resolved_gravity: Gravity,
    gravity_hint: GravityHint,
    language: Language,
    font_description: FontDescription,
    matrix: Option<Matrix>,
    font_map: Option<Arc<dyn FontMap>>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with no font map.
    ///
    /// The base direction is [`Direction::WeakLtr`], the gravity is [`Gravity::South`] and the
    /// language is [`default_language`]. The font is 12pt `serif`.
    #[must_use]
    pub fn new() -> Self {
        let mut font_description = FontDescription::new();
        font_description.set_family("serif");
        font_description.set_style(FontStyle::Normal);
        font_description.set_variant(FontVariant::Normal);
        font_description.set_weight(FontWeight::NORMAL);
        font_description.set_stretch(FontStretch::Normal);
        font_description.set_size(FontSize::Points(12.0));
        Self {
            serial: 1,
            base_dir: Direction::WeakLtr,
            base_gravity: Gravity::South,
            resolved_gravity: Gravity::South,
            gravity_hint: GravityHint::Natural,
            language: default_language(),
            font_description,
            matrix: None,
            font_map: None,
        }
    }

    /// A number that changes whenever the context does.
    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }

    fn changed(&mut self) {
        self.serial = self.serial.wrapping_add(1);
        if self.serial == 0 {
            self.serial = 1;
        }
    }

    /// The base direction of paragraphs.
    #[must_use]
    pub fn base_dir(&self) -> Direction {
        self.base_dir
    }

    /// Sets the base direction of paragraphs.
    pub fn set_base_dir(&mut self, direction: Direction) {
        self.base_dir = direction;
        self.changed();
    }

    /// The base gravity as set, possibly [`Gravity::Auto`].
    #[must_use]
    pub fn base_gravity(&self) -> Gravity {
        self.base_gravity
    }

    /// Sets the base gravity. [`Gravity::Auto`] derives it from the matrix.
    pub fn set_base_gravity(&mut self, gravity: Gravity) {
        self.base_gravity = gravity;
        self.update_resolved_gravity();
        self.changed();
    }

    /// The resolved base gravity. Never [`Gravity::Auto`].
    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.resolved_gravity
    }

    /// The gravity hint.
    #[must_use]
    pub fn gravity_hint(&self) -> GravityHint {
        self.gravity_hint
    }

    /// Sets how runs of vertical text derive their gravity.
    pub fn set_gravity_hint(&mut self, hint: GravityHint) {
        self.gravity_hint = hint;
        self.changed();
    }

    /// The default language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Sets the language assumed for text without a language attribute.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.changed();
    }

    /// The default font description.
    #[must_use]
    pub fn font_description(&self) -> &FontDescription {
        &self.font_description
    }

    /// Sets the default font description.
    pub fn set_font_description(&mut self, desc: FontDescription) {
        self.font_description = desc;
        self.changed();
    }

    /// The rendering transform, if any.
    #[must_use]
    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    /// Sets the rendering transform. `None` is the identity.
    pub fn set_matrix(&mut self, matrix: Option<Matrix>) {
        self.matrix = matrix;
        self.update_resolved_gravity();
        self.changed();
    }

    /// The font map.
    #[must_use]
    pub fn font_map(&self) -> Option<&Arc<dyn FontMap>> {
        self.font_map.as_ref()
    }

    /// Sets the font map used to look up fonts.
    pub fn set_font_map(&mut self, font_map: Option<Arc<dyn FontMap>>) {
        let same = match (&self.font_map, &font_map) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        self.font_map = font_map;
        self.changed();
    }

    /// Loads the font that best matches `desc`.
    #[must_use]
    pub fn load_font(&self, desc: &FontDescription) -> Option<FontRef> {
        self.font_map.as_ref()?.load_font(self, desc)
    }

    /// Loads the fontset for `desc` in `language`.
    #[must_use]
    pub fn load_fontset(
        &self,
        desc: &FontDescription,
        language: Language,
    ) -> Option<Arc<dyn Fontset>> {
        self.font_map.as_ref()?.load_fontset(self, desc, language)
    }

    fn update_resolved_gravity(&mut self) {
        self.resolved_gravity = if self.base_gravity == Gravity::Auto {
            Gravity::for_matrix(self.matrix.as_ref())
        } else {
            self.base_gravity
        };
    }
}

const FALLBACK_LANGUAGE: Language = Language::from_static("en");

/// The language of the user's locale.
///
/// This reads `LC_ALL`, `LC_CTYPE` and `LANG`, in that order. Without the `std` feature, or
/// when none is set, the language is English.
#[must_use]
pub fn default_language() -> Language {
    #[cfg(feature = "std")]
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(locale) = std::env::var(var) {
            if !locale.is_empty() {
                return language_from_locale(&locale);
            }
        }
    }
    FALLBACK_LANGUAGE
}

/// Converts a POSIX locale name such as `de_AT.UTF-8@euro` to a language.
fn language_from_locale(locale: &str) -> Language {
    let tag = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    if tag == "C" || tag == "POSIX" {
        return FALLBACK_LANGUAGE;
    }
    Language::parse(tag).unwrap_or(FALLBACK_LANGUAGE)
}
