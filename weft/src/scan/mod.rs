// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary scanners.
//!
//! Each scanner walks a string as a sequence of runs that are constant along one axis (script,
//! upright orientation or emoji presentation). A scanner is created positioned on its first run
//! and moved forward with `advance`, like an [`AttrIterator`](weft_attrs::AttrIterator).

mod emoji;
mod script;
mod width;

pub use emoji::EmojiIter;
pub use script::ScriptIter;
pub use width::WidthIter;
