// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental text property types.
//!
//! This crate is a small, `no_std` vocabulary layer shared by the attribute and itemization
//! crates: scripts and languages, directions, glyph gravity, and the enumerated font properties
//! that attributes and font descriptions carry.
//!
//! It also carries the Unicode-adjacent tables those types need: per-script writing direction and
//! vertical behavior, the scripts each language is written in, and a representative language for
//! each script.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{Gravity, GravityHint, Language, Script};
//!
//! let lang = Language::parse("ja_JP").unwrap();
//! assert_eq!(lang.as_str(), "ja-jp");
//! assert!(lang.includes_script(Script::KATAKANA));
//! assert!(!lang.includes_script(Script::ARABIC));
//!
//! // Narrow Latin text in a vertical layout is turned to lie along the line.
//! let gravity = Gravity::for_script_and_width(
//!     Script::LATIN,
//!     false,
//!     Gravity::East,
//!     GravityHint::Natural,
//! );
//! assert_eq!(gravity, Gravity::South);
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
#![no_std]

mod direction;
mod font;
mod gravity;
mod language;
mod script;

pub use direction::Direction;
pub use font::{FontStretch, FontStyle, FontVariant, FontWeight};
pub use gravity::{Gravity, GravityHint, Matrix};
pub use language::{Language, ParseLanguageError};
pub use script::{ParseScriptError, Script, VerticalDirection};
