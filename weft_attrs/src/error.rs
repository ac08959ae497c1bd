// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`AttrIterator::advance_to`](crate::AttrIterator::advance_to).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceError {
    /// The iterator ran out of runs before reaching `index`.
    Exhausted {
        /// The requested byte index.
        index: usize,
    },
    /// The current run already starts after `index`.
    AlreadyPast {
        /// The requested byte index.
        index: usize,
        /// The start of the current run.
        start: usize,
    },
}

impl fmt::Display for AdvanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { index } => {
                write!(f, "attribute iterator exhausted before index {index}")
            }
            Self::AlreadyPast { index, start } => write!(
                f,
                "attribute iterator is already at {start}, past index {index}"
            ),
        }
    }
}

impl core::error::Error for AdvanceError {}
