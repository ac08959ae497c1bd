// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use bitflags::bitflags;
use text_primitives::{Gravity, Language, Script};
use weft_attrs::Attribute;

use crate::font::FontRef;

bitflags! {
    /// Boolean properties of an [`Analysis`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AnalysisFlags: u8 {
        /// The run should be shifted to center around the baseline, as in vertical text.
        const CENTERED_BASELINE = 1 << 0;
        /// The run holds an ellipsis.
        const IS_ELLIPSIS = 1 << 1;
        /// A hyphen should be added at the end of the run when shaping.
        const NEED_HYPHEN = 1 << 2;
    }
}

/// The resolved properties of an [`Item`].
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The font, or `None` if no font covers the text.
    pub font: Option<FontRef>,
    /// The bidirectional embedding level, adjusted for the gravity.
    pub level: u8,
    /// The gravity of the glyphs.
    pub gravity: Gravity,
    /// Flags.
    pub flags: AnalysisFlags,
    /// The script.
    pub script: Script,
    /// The language, consistent with the script.
    pub language: Language,
    /// The attributes that do not select the font, such as colors and decorations.
    pub extra_attrs: Arc<[Attribute]>,
}

/// A run of text with uniform direction, script, font and attributes.
#[derive(Clone, Debug)]
pub struct Item {
    /// Byte offset of the start of the item in the text.
    pub offset: usize,
    /// Length of the item in bytes.
    pub length: usize,
    /// Number of characters in the item.
    pub num_chars: usize,
    /// The properties of the run.
    pub analysis: Analysis,
}

impl Item {
    /// The byte range of the item.
    #[must_use]
    pub fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.offset + self.length
    }

    /// Splits off the first `index` bytes (`chars` characters) of the item.
    ///
    /// The item keeps the remainder and the first part is returned. Returns `None`, leaving the
    /// item unchanged, unless `index` is strictly inside the item and `chars` strictly less
    /// than its character count.
    pub fn split(&mut self, index: usize, chars: usize) -> Option<Self> {
        if index == 0 || index >= self.length || chars == 0 || chars >= self.num_chars {
            return None;
        }
        let head = Self {
            offset: self.offset,
            length: index,
            num_chars: chars,
            analysis: self.analysis.clone(),
        };
        self.offset += index;
        self.length -= index;
        self.num_chars -= chars;
        Some(head)
    }
}
