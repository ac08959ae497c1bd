// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranged text attributes.
//!
//! An [`AttrList`] holds [`Attribute`]s: typed values such as a font weight or a language, each
//! applied to a half-open byte range of some text. Lists are edited with plain insertion or with
//! [`AttrList::change`], which reconciles the new value with overlapping ones of the same kind.
//!
//! An [`AttrIterator`] walks a list as a sequence of maximal runs over which the active set of
//! attributes is constant, and resolves the font related attributes of each run into a
//! [`FontDescription`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Links the standard library. Without it the crate is `no_std` and
//!   only needs `alloc`.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{FontStyle, FontWeight};
//! use weft_attrs::{AttrList, Attribute, FontDescription, RangeEnd};
//!
//! let mut list = AttrList::new();
//! list.insert(Attribute::family("Sans"));
//! list.change(Attribute::weight(FontWeight::BOLD).with_range(0..5));
//! list.change(Attribute::style(FontStyle::Italic).with_range(3..8));
//!
//! let mut iter = list.iterator();
//! let mut fonts = Vec::new();
//! loop {
//!     let mut desc = FontDescription::new();
//!     iter.font(&mut desc);
//!     fonts.push((iter.range(), desc.to_string()));
//!     if !iter.advance() {
//!         break;
//!     }
//! }
//! assert_eq!(
//!     fonts,
//!     [
//!         ((0, RangeEnd::At(3)), "Sans Bold".to_string()),
//!         ((3, RangeEnd::At(5)), "Sans Bold Italic".to_string()),
//!         ((5, RangeEnd::At(8)), "Sans Italic".to_string()),
//!         ((8, RangeEnd::Unbounded), "Sans".to_string()),
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

mod attribute;
mod error;
mod font_description;
mod iterator;
mod list;
mod value;

pub use crate::attribute::{Attribute, RangeEnd};
pub use crate::error::AdvanceError;
pub use crate::font_description::{FontDescription, FontMask, FontSize};
pub use crate::iterator::{AttrIterator, FontAttrs};
pub use crate::list::AttrList;
pub use crate::value::{
    AttrColor, AttrType, AttrValue, Overline, Rect, ShapeRects, ShowFlags, Underline,
};
