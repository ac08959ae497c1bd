// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An axis along which itemized text can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Bidirectional embedding level.
    Embedding,
    /// The set of active attributes.
    Attributes,
    /// Script.
    Script,
    /// Emoji presentation.
    Emoji,
    /// Upright or rotated orientation in vertical text.
    Width,
}

impl Axis {
    /// Every axis, in the order axes are advanced at a shared boundary.
    ///
    /// Emoji comes before width because a new emoji run may extend the width run.
    pub const ALL: [Self; 5] = [
        Self::Embedding,
        Self::Attributes,
        Self::Script,
        Self::Emoji,
        Self::Width,
    ];

    fn index(self) -> usize {
        match self {
            Self::Embedding => 0,
            Self::Attributes => 1,
            Self::Script => 2,
            Self::Emoji => 3,
            Self::Width => 4,
        }
    }
}

/// The next change point along each [`Axis`].
///
/// The current run always ends at the nearest change point.
///
/// ```
/// use weft::{Axis, RunBoundaries};
///
/// let mut bounds = RunBoundaries::new(10);
/// bounds.set(Axis::Script, 4);
/// bounds.set(Axis::Attributes, 7);
/// assert_eq!(bounds.run_end(), 4);
/// assert!(bounds.ends_at(Axis::Script, 4));
///
/// bounds.set(Axis::Script, 7);
/// assert_eq!(bounds.run_end(), 7);
/// assert!(bounds.ends_at(Axis::Attributes, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunBoundaries {
    ends: [usize; 5],
}

impl RunBoundaries {
    /// Creates boundaries with every axis ending at `end`.
    #[must_use]
    pub fn new(end: usize) -> Self {
        Self { ends: [end; 5] }
    }

    /// The next change point along `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis) -> usize {
        self.ends[axis.index()]
    }

    /// Sets the next change point along `axis`.
    pub fn set(&mut self, axis: Axis, end: usize) {
        self.ends[axis.index()] = end;
    }

    /// Moves the change point along `axis` to at least `end`.
    pub fn extend(&mut self, axis: Axis, end: usize) {
        let slot = &mut self.ends[axis.index()];
        *slot = (*slot).max(end);
    }

    /// The end of the current run: the nearest change point.
    #[must_use]
    pub fn run_end(&self) -> usize {
        self.ends.iter().copied().min().unwrap_or_default()
    }

    /// Returns true if `axis` changes at `pos`.
    #[must_use]
    pub fn ends_at(&self, axis: Axis, pos: usize) -> bool {
        self.get(axis) == pos
    }
}
