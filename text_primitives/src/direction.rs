// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The direction of a paragraph or a run of text.
///
/// The weak directions request a direction only for text that has no strong characters of its
/// own; otherwise the first strong character decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Strongly left-to-right.
    #[default]
    Ltr,
    /// Strongly right-to-left.
    Rtl,
    /// Left-to-right unless the text says otherwise.
    WeakLtr,
    /// Right-to-left unless the text says otherwise.
    WeakRtl,
    /// No direction.
    Neutral,
}

impl Direction {
    /// Returns `true` for [`Direction::Ltr`] and [`Direction::Rtl`].
    #[must_use]
    pub fn is_strong(self) -> bool {
        matches!(self, Self::Ltr | Self::Rtl)
    }

    /// Returns `true` if the direction leans right-to-left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl | Self::WeakRtl)
    }
}
