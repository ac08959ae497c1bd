// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weft splits attributed text into items.
//!
//! An [`Item`] is a maximal run of text that can be shaped as one unit: its bidi embedding
//! level, script, language, gravity, font and non-font attributes are all uniform. Itemization
//! is the step between styled text and shaping.
//!
//! Weft does not load fonts. A [`Context`] carries the layout defaults (base direction,
//! gravity, language and font description) and an optional [`FontMap`], which is asked for
//! fontsets and answers which font covers a character. Attributes come from a
//! [`weft_attrs::AttrList`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Links the standard library and reads the default language from
//!   the environment. Without it the crate is `no_std` and only needs `alloc`.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{FontWeight, Script};
//! use weft::{itemize, Context};
//! use weft_attrs::{AttrList, Attribute};
//!
//! let context = Context::new();
//! let text = "Hello مرحبا";
//!
//! let mut attrs = AttrList::new();
//! attrs.insert(Attribute::weight(FontWeight::BOLD).with_range(0..5));
//!
//! let items = itemize(&context, text, 0..text.len(), Some(&attrs), None);
//! let runs: Vec<_> = items
//!     .iter()
//!     .map(|item| (item.range(), item.analysis.script, item.analysis.level))
//!     .collect();
//! assert_eq!(
//!     runs,
//!     [
//!         (0..5, Script::LATIN, 0),
//!         (5..6, Script::LATIN, 0),
//!         (6..16, Script::ARABIC, 1),
//!     ]
//! );
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod bidi;
mod context;
mod font;
mod item;
mod itemize;
mod lru_cache;
mod scan;

#[cfg(test)]
mod tests;

pub use crate::bidi::{embedding_levels, find_base_dir, unichar_direction};
pub use crate::context::{default_language, Context};
pub use crate::font::{Font, FontMap, FontRef, Fontset};
pub use crate::item::{Analysis, AnalysisFlags, Item};
pub use crate::itemize::{
    itemize, itemize_with_base_dir, itemize_with_font, Axis, ItemizeState, RunBoundaries,
};
pub use crate::scan::{EmojiIter, ScriptIter, WidthIter};
