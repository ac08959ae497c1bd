// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use smallvec::{SmallVec, smallvec};

use crate::{AttrIterator, Attribute, RangeEnd};

/// An ordered collection of attributes.
///
/// Attributes are kept sorted by start index. Among attributes with the same start, later
/// insertions take priority over earlier ones, unless inserted with
/// [`insert_before`](Self::insert_before).
///
/// Cloning a list is cheap: the storage is shared until one of the copies is modified.
#[derive(Clone, Debug, Default)]
pub struct AttrList {
    attrs: Arc<Vec<Attribute>>,
}

impl AttrList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The attributes, in list order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attrs
    }

    /// The number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns true if the list has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Returns an iterator over the runs of constant attributes.
    #[must_use]
    pub fn iterator(&self) -> AttrIterator {
        AttrIterator::new(self.attrs.clone())
    }

    /// Inserts `attr` after all attributes with the same start.
    pub fn insert(&mut self, attr: Attribute) {
        self.insert_internal(attr, false);
    }

    /// Inserts `attr` before all attributes with the same start.
    pub fn insert_before(&mut self, attr: Attribute) {
        self.insert_internal(attr, true);
    }

    fn insert_internal(&mut self, attr: Attribute, before: bool) {
        let attrs = Arc::make_mut(&mut self.attrs);
        let start = attr.start();
        let append = match attrs.last() {
            None => true,
            Some(last) => last.start() < start || (!before && last.start() == start),
        };
        if append {
            attrs.push(attr);
            return;
        }
        let position = attrs
            .iter()
            .position(|cur| cur.start() > start || (before && cur.start() == start));
        match position {
            Some(i) => attrs.insert(i, attr),
            None => attrs.push(attr),
        }
    }

    /// Applies `attr` to its range, replacing conflicting values of the same kind.
    ///
    /// Attributes of the same kind with an equal value that overlap or touch `attr` are merged
    /// with it. Attributes of the same kind with a different value are trimmed or split so that
    /// `attr` takes effect over its range. Empty attributes are ignored.
    ///
    /// An attribute of the same kind and a different value that starts exactly at `attr`'s start
    /// is replaced outright, and later attributes of that kind inside the range are then left
    /// untouched. Trimming the start of a later attribute does not move it, so the list can end
    /// up out of start order.
    ///
    /// ```
    /// use text_primitives::FontWeight;
    /// use weft_attrs::{AttrList, Attribute};
    ///
    /// let mut list = AttrList::new();
    /// list.insert(Attribute::weight(FontWeight::BOLD).with_range(0..30));
    /// list.change(Attribute::weight(FontWeight::LIGHT).with_range(10..20));
    /// assert_eq!(
    ///     list.to_string(),
    ///     "[0,10)weight=Bold\n[10,20)weight=Light\n[20,30)weight=Bold"
    /// );
    /// ```
    pub fn change(&mut self, attr: Attribute) {
        let start = attr.start();
        let end = attr.end();
        if end == start {
            return;
        }
        if self.attrs.is_empty() {
            self.insert(attr);
            return;
        }

        let kind = attr.kind();
        let mut pending = Some(attr);
        let mut attr_pos = 0;
        let mut i = 0;
        while i < self.attrs.len() {
            let tmp = &self.attrs[i];
            if tmp.start() > start {
                if let Some(attr) = pending.take() {
                    Arc::make_mut(&mut self.attrs).insert(i, attr);
                }
                attr_pos = i;
                break;
            }
            if tmp.kind() != kind || tmp.end() < start {
                i += 1;
                continue;
            }
            let Some(attr) = pending.as_ref() else {
                break;
            };
            if tmp.equal_value(attr) {
                // The value is already in effect from before `start`.
                if tmp.end() >= end {
                    return;
                }
                Arc::make_mut(&mut self.attrs)[i].set_end(end);
                pending = None;
                attr_pos = i;
                break;
            }

            let tmp_start = tmp.start();
            let tmp_end = tmp.end();
            if tmp_end > end {
                let mut tail = tmp.clone();
                tail.set_start(end.index().unwrap_or(usize::MAX));
                self.insert(tail);
            }
            if tmp_start == start {
                Arc::make_mut(&mut self.attrs).remove(i);
                break;
            }
            Arc::make_mut(&mut self.attrs)[i].set_end(RangeEnd::At(start));
            i += 1;
        }

        if let Some(attr) = pending {
            self.insert(attr);
            return;
        }

        // Merge or trim the attributes of the same kind that follow the one just placed.
        let attrs = Arc::make_mut(&mut self.attrs);
        let mut i = attr_pos + 1;
        while i < attrs.len() {
            let tmp = &attrs[i];
            if RangeEnd::At(tmp.start()) > end {
                break;
            }
            if tmp.kind() != kind {
                i += 1;
                continue;
            }
            let placed_end = attrs[attr_pos].end();
            if tmp.end() <= placed_end || tmp.equal_value(&attrs[attr_pos]) {
                let merged_end = placed_end.max(tmp.end());
                attrs[attr_pos].set_end(merged_end);
                attrs.remove(i);
                continue;
            }
            // `placed_end` is bounded here: an unbounded end would have absorbed `tmp`.
            let trimmed_start = placed_end.index().unwrap_or(usize::MAX);
            attrs[i].set_start(trimmed_start);
            i += 1;
        }
    }

    /// Returns true if both lists hold the same attributes, regardless of order.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.attrs, &other.attrs) {
            return true;
        }
        if self.attrs.len() != other.attrs.len() {
            return false;
        }
        let mut matched: SmallVec<[bool; 64]> = smallvec![false; other.attrs.len()];
        'outer: for attr in self.attrs.iter() {
            for (j, other_attr) in other.attrs.iter().enumerate() {
                if matched[j] {
                    continue;
                }
                if attr.range() == other_attr.range() && attr.equal_value(other_attr) {
                    matched[j] = true;
                    continue 'outer;
                }
            }
            return false;
        }
        true
    }

    /// Removes the attributes matching `predicate` and returns them as a new list.
    ///
    /// The relative order of the attributes is kept in both lists.
    pub fn filter(&mut self, mut predicate: impl FnMut(&Attribute) -> bool) -> Self {
        if !self.attrs.iter().any(&mut predicate) {
            return Self::new();
        }
        let attrs = core::mem::take(Arc::make_mut(&mut self.attrs));
        let (taken, kept): (Vec<_>, Vec<_>) = attrs.into_iter().partition(|a| predicate(a));
        self.attrs = Arc::new(kept);
        Self {
            attrs: Arc::new(taken),
        }
    }

    /// Adjusts the attribute ranges for an edit of the text.
    ///
    /// `remove` bytes at `pos` were replaced by `add` new bytes. Attributes inside the removed
    /// bytes are dropped, and attributes after them are shifted. Attributes starting at zero
    /// stay anchored to the start of the text.
    pub fn update(&mut self, pos: usize, remove: usize, add: usize) {
        let removed_end = pos.saturating_add(remove);
        let attrs = Arc::make_mut(&mut self.attrs);
        attrs.retain_mut(|attr| {
            if attr.start() >= pos && attr.end() < RangeEnd::At(removed_end) {
                return false;
            }

            if attr.start() != 0 {
                if attr.start() >= pos && attr.start() < removed_end {
                    attr.set_start(pos.saturating_add(add));
                } else if attr.start() >= removed_end {
                    attr.set_start((attr.start() - remove).saturating_add(add));
                }
            }

            if let RangeEnd::At(end) = attr.end() {
                if end >= pos && end < removed_end {
                    attr.set_end(RangeEnd::At(pos));
                } else if end >= removed_end {
                    attr.set_end(RangeEnd::At(end - remove).saturating_add(add));
                }
            }
            true
        });
    }

    /// Inserts the attributes of `other` as if `len` bytes of text were inserted at `pos`.
    ///
    /// Attributes of `self` that span `pos` are extended over the inserted text. Those after
    /// it are shifted by `len`. The attributes of `other` are then shifted to `pos` and
    /// applied with [`change`](Self::change).
    pub fn splice(&mut self, other: &Self, pos: usize, len: usize) {
        if len > 0 {
            let attrs = Arc::make_mut(&mut self.attrs);
            for attr in attrs.iter_mut() {
                if attr.start() <= pos {
                    if attr.end() > pos {
                        attr.set_end(attr.end().saturating_add(len));
                    }
                } else {
                    attr.set_start(attr.start().saturating_add(len));
                    attr.set_end(attr.end().saturating_add(len));
                }
            }
        }

        for attr in other.attrs.iter() {
            let mut attr = attr.clone();
            attr.set_start(attr.start().saturating_add(pos));
            attr.set_end(attr.end().saturating_add(pos));
            self.change(attr);
        }
    }
}

impl PartialEq for AttrList {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl FromIterator<Attribute> for AttrList {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut list = Self::new();
        for attr in iter {
            list.insert(attr);
        }
        list
    }
}

impl Extend<Attribute> for AttrList {
    fn extend<T: IntoIterator<Item = Attribute>>(&mut self, iter: T) {
        for attr in iter {
            self.insert(attr);
        }
    }
}

impl fmt::Display for AttrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}
