// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use smallvec::SmallVec;
use text_primitives::Language;

use crate::{
    AdvanceError, AttrType, AttrValue, Attribute, FontDescription, FontMask, FontSize, RangeEnd,
};

/// Walks an [`AttrList`](crate::AttrList) as a sequence of maximal runs over which the set of
/// active attributes does not change.
///
/// The iterator starts positioned on the first run, which always begins at zero. The last run
/// extends to [`RangeEnd::Unbounded`].
///
/// The iterator holds a snapshot of the list it was created from, so later changes to the list
/// are not observed.
///
/// ```
/// use text_primitives::FontWeight;
/// use weft_attrs::{AttrList, Attribute, RangeEnd};
///
/// let mut list = AttrList::new();
/// list.insert(Attribute::weight(FontWeight::BOLD).with_range(2..5));
///
/// let mut iter = list.iterator();
/// assert_eq!(iter.range(), (0, RangeEnd::At(2)));
/// assert!(iter.advance());
/// assert_eq!(iter.range(), (2, RangeEnd::At(5)));
/// assert!(iter.advance());
/// assert_eq!(iter.range(), (5, RangeEnd::Unbounded));
/// assert!(!iter.advance());
/// ```
#[derive(Clone, Debug)]
pub struct AttrIterator {
    attrs: Arc<Vec<Attribute>>,
    /// Index of the next attribute of the list to become active.
    next_attr: usize,
    /// Indices of the active attributes, in activation order.
    stack: SmallVec<[usize; 16]>,
    start: usize,
    end: RangeEnd,
}

/// The font related values resolved by [`AttrIterator::font`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontAttrs {
    /// The highest priority language attribute, if any.
    pub language: Option<Language>,
    /// Active attributes that neither affect the font nor the language.
    ///
    /// There is at most one attribute of each kind, except for font features, which
    /// accumulate. They are ordered from lowest to highest priority.
    pub extra_attrs: Vec<Attribute>,
}

impl AttrIterator {
    pub(crate) fn new(attrs: Arc<Vec<Attribute>>) -> Self {
        let mut iter = Self {
            attrs,
            next_attr: 0,
            stack: SmallVec::new(),
            start: 0,
            end: RangeEnd::At(0),
        };
        if !iter.advance() {
            iter.end = RangeEnd::Unbounded;
        }
        iter
    }

    /// The current run as `(start, end)`.
    #[must_use]
    pub fn range(&self) -> (usize, RangeEnd) {
        (self.start, self.end)
    }

    /// The start of the current run.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end of the current run.
    #[must_use]
    pub fn end(&self) -> RangeEnd {
        self.end
    }

    /// Moves to the next run. Returns false once the run extending to the end of the text has
    /// been reached.
    pub fn advance(&mut self) -> bool {
        if self.next_attr >= self.attrs.len() && self.stack.is_empty() {
            return false;
        }
        let RangeEnd::At(start) = self.end else {
            self.stack.clear();
            return false;
        };
        self.start = start;
        self.end = RangeEnd::Unbounded;

        let attrs = &self.attrs;
        let mut end = RangeEnd::Unbounded;
        self.stack.retain(|&mut ix| {
            let attr_end = attrs[ix].end();
            if attr_end <= start {
                false
            } else {
                end = end.min(attr_end);
                true
            }
        });

        while let Some(attr) = attrs.get(self.next_attr) {
            if attr.start() > start {
                end = end.min(RangeEnd::At(attr.start()));
                break;
            }
            if attr.end() > start {
                self.stack.push(self.next_attr);
                end = end.min(attr.end());
            }
            self.next_attr += 1;
        }
        self.end = end;
        true
    }

    /// Advances until the current run contains `index`.
    ///
    /// Fails if the iterator is already past `index`, which happens when it is reused for text
    /// that is not after the text it was last used for.
    pub fn advance_to(&mut self, index: usize) -> Result<(), AdvanceError> {
        while self.end <= index {
            if !self.advance() {
                return Err(AdvanceError::Exhausted { index });
            }
        }
        if self.start > index {
            return Err(AdvanceError::AlreadyPast {
                index,
                start: self.start,
            });
        }
        Ok(())
    }

    /// The highest priority active attribute of the given kind.
    #[must_use]
    pub fn get(&self, kind: AttrType) -> Option<&Attribute> {
        self.active().rev().find(|attr| attr.kind() == kind)
    }

    /// The active attributes, one per kind, from lowest to highest priority.
    #[must_use]
    pub fn attributes(&self) -> Vec<&Attribute> {
        let mut attrs: Vec<&Attribute> = Vec::new();
        for attr in self.active().rev() {
            if !attrs.iter().any(|a| a.kind() == attr.kind()) {
                attrs.push(attr);
            }
        }
        attrs.reverse();
        attrs
    }

    /// Resolves the font related attributes of the current run.
    ///
    /// Font fields set by active attributes are written into `desc`. For each field, the highest
    /// priority attribute setting it wins. A scale attribute is applied to the resulting size.
    /// Everything that is not about the font or the language is returned in
    /// [`FontAttrs::extra_attrs`].
    pub fn font(&self, desc: &mut FontDescription) -> FontAttrs {
        let mut mask = FontMask::empty();
        let mut language = None;
        let mut scale = None;
        let mut extra_attrs: Vec<Attribute> = Vec::new();

        for attr in self.active().rev() {
            match attr.value() {
                AttrValue::FontDesc(attr_desc) => {
                    let new_fields = attr_desc.set_fields() & !mask;
                    mask |= new_fields;
                    desc.unset_fields(new_fields);
                    desc.merge(attr_desc, false);
                }
                AttrValue::Family(family) => {
                    if claim(&mut mask, FontMask::FAMILY) {
                        desc.set_family(family.clone());
                    }
                }
                AttrValue::Style(style) => {
                    if claim(&mut mask, FontMask::STYLE) {
                        desc.set_style(*style);
                    }
                }
                AttrValue::Variant(variant) => {
                    if claim(&mut mask, FontMask::VARIANT) {
                        desc.set_variant(*variant);
                    }
                }
                AttrValue::Weight(weight) => {
                    if claim(&mut mask, FontMask::WEIGHT) {
                        desc.set_weight(*weight);
                    }
                }
                AttrValue::Stretch(stretch) => {
                    if claim(&mut mask, FontMask::STRETCH) {
                        desc.set_stretch(*stretch);
                    }
                }
                AttrValue::Size(size) => {
                    if claim(&mut mask, FontMask::SIZE) {
                        desc.set_size(FontSize::Points(*size));
                    }
                }
                AttrValue::AbsoluteSize(size) => {
                    if claim(&mut mask, FontMask::SIZE) {
                        desc.set_size(FontSize::Absolute(*size));
                    }
                }
                AttrValue::Scale(factor) => {
                    scale.get_or_insert(*factor);
                }
                AttrValue::Language(lang) => {
                    language.get_or_insert(*lang);
                }
                _ => {
                    let kind = attr.kind();
                    if kind == AttrType::FontFeatures
                        || !extra_attrs.iter().any(|a| a.kind() == kind)
                    {
                        extra_attrs.push(attr.clone());
                    }
                }
            }
        }

        if let (Some(factor), Some(size)) = (scale, desc.size()) {
            desc.set_size(size.scaled(factor));
        }
        extra_attrs.reverse();
        FontAttrs {
            language,
            extra_attrs,
        }
    }

    fn active(&self) -> impl DoubleEndedIterator<Item = &Attribute> {
        self.stack.iter().map(|&ix| &self.attrs[ix])
    }
}

/// Marks `field` as set, returning true if it was not set before.
fn claim(mask: &mut FontMask, field: FontMask) -> bool {
    let unclaimed = !mask.contains(field);
    *mask |= field;
    unclaimed
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use text_primitives::{FontStretch, FontWeight, Language};

    use crate::{
        AdvanceError, AttrList, AttrType, AttrValue, Attribute, FontDescription, FontSize,
        RangeEnd,
    };

    fn runs(list: &AttrList) -> Vec<(usize, RangeEnd)> {
        let mut iter = list.iterator();
        let mut runs = alloc::vec![iter.range()];
        while iter.advance() {
            runs.push(iter.range());
        }
        runs
    }

    fn test_list() -> AttrList {
        let mut list = AttrList::new();
        list.insert(Attribute::size(10.0));
        list.insert(Attribute::stretch(FontStretch::Condensed).with_range(10..30));
        list.insert(Attribute::weight(FontWeight::BOLD).with_range(20..));
        list
    }

    #[test]
    fn empty_list_is_one_run() {
        let mut iter = AttrList::new().iterator();
        assert_eq!(iter.range(), (0, RangeEnd::Unbounded));
        assert!(iter.attributes().is_empty());
        assert!(!iter.advance());
        assert_eq!(iter.range(), (0, RangeEnd::Unbounded));
    }

    #[test]
    fn runs_cover_every_boundary() {
        assert_eq!(
            runs(&test_list()),
            [
                (0, RangeEnd::At(10)),
                (10, RangeEnd::At(20)),
                (20, RangeEnd::At(30)),
                (30, RangeEnd::Unbounded),
            ]
        );
    }

    #[test]
    fn runs_before_first_attribute() {
        let list: AttrList = [Attribute::size(10.0).with_range(5..8)].into_iter().collect();
        assert_eq!(
            runs(&list),
            [
                (0, RangeEnd::At(5)),
                (5, RangeEnd::At(8)),
                (8, RangeEnd::Unbounded),
            ]
        );
    }

    #[test]
    fn get_returns_highest_priority() {
        let mut list = test_list();
        list.insert(Attribute::size(20.0).with_range(10..15));
        let mut iter = list.iterator();

        let size = |iter: &super::AttrIterator| match iter.get(AttrType::Size).map(|a| a.value()) {
            Some(AttrValue::Size(size)) => Some(*size),
            _ => None,
        };
        assert_eq!(size(&iter), Some(10.0));
        assert!(iter.get(AttrType::Stretch).is_none());

        iter.advance();
        assert_eq!(iter.range(), (10, RangeEnd::At(15)));
        assert_eq!(size(&iter), Some(20.0));
        assert!(iter.get(AttrType::Stretch).is_some());

        iter.advance();
        assert_eq!(size(&iter), Some(10.0));
        assert!(iter.get(AttrType::Weight).is_none());
    }

    #[test]
    fn attributes_one_per_kind() {
        let mut list = test_list();
        list.insert(Attribute::size(20.0).with_range(10..15));
        let mut iter = list.iterator();
        iter.advance();
        let kinds: Vec<_> = iter.attributes().iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, [AttrType::Stretch, AttrType::Size]);
        assert_eq!(iter.attributes()[1].value(), &AttrValue::Size(20.0));
    }

    #[test]
    fn font_resolves_description_and_extras() {
        let mut list = AttrList::new();
        list.insert(Attribute::size(10.0));
        list.insert(Attribute::family("Times"));
        list.insert(Attribute::stretch(FontStretch::Condensed).with_range(5..15));
        list.insert(Attribute::language(Language::parse("ja-JP").unwrap()).with_range(5..15));
        list.insert(Attribute::rise(100).with_range(5..15));
        list.insert(Attribute::fallback(false).with_range(5..15));
        list.insert(Attribute::rise(50).with_range(8..10));

        let mut iter = list.iterator();
        let mut desc = FontDescription::new();
        let attrs = iter.font(&mut desc);
        assert_eq!(desc.to_string(), "Times 10");
        assert_eq!(attrs.language, None);
        assert!(attrs.extra_attrs.is_empty());

        iter.advance();
        let mut desc = FontDescription::new();
        let attrs = iter.font(&mut desc);
        assert_eq!(desc.to_string(), "Times Condensed 10");
        assert_eq!(attrs.language.map(|l| l.to_string()), Some("ja-jp".into()));
        let extras: Vec<_> = attrs.extra_attrs.iter().map(|a| a.value().clone()).collect();
        assert_eq!(extras, [AttrValue::Rise(100), AttrValue::Fallback(false)]);

        iter.advance();
        assert_eq!(iter.range(), (8, RangeEnd::At(10)));
        let attrs = iter.font(&mut FontDescription::new());
        let extras: Vec<_> = attrs.extra_attrs.iter().map(|a| a.value().clone()).collect();
        assert_eq!(extras, [AttrValue::Fallback(false), AttrValue::Rise(50)]);
    }

    #[test]
    fn font_desc_attribute_fills_unclaimed_fields() {
        let mut list = AttrList::new();
        list.insert(Attribute::font_desc(FontDescription::parse("Sans Bold 14")));
        list.insert(Attribute::weight(FontWeight::LIGHT));
        list.insert(Attribute::scale(1.5));

        let mut desc = FontDescription::parse("Serif Italic 12");
        list.iterator().font(&mut desc);
        assert_eq!(desc.family(), Some("Sans"));
        assert_eq!(desc.weight(), Some(FontWeight::LIGHT));
        assert_eq!(desc.size(), Some(FontSize::Points(21.0)));
        assert_eq!(desc.to_string(), "Sans Light Italic 21");
    }

    #[test]
    fn font_features_accumulate() {
        let mut list = AttrList::new();
        list.insert(Attribute::font_features("kern 0"));
        list.insert(Attribute::font_features("liga"));
        let attrs = list.iterator().font(&mut FontDescription::new());
        assert_eq!(attrs.extra_attrs.len(), 2);
    }

    #[test]
    fn advance_to_index() {
        let mut iter = test_list().iterator();
        assert_eq!(iter.advance_to(25), Ok(()));
        assert_eq!(iter.range(), (20, RangeEnd::At(30)));
        assert_eq!(iter.advance_to(1000), Ok(()));
        assert_eq!(iter.range(), (30, RangeEnd::Unbounded));
        assert_eq!(
            iter.advance_to(5),
            Err(AdvanceError::AlreadyPast {
                index: 5,
                start: 30
            })
        );
    }

    #[test]
    fn snapshot_is_not_affected_by_changes() {
        let mut list = test_list();
        let iter = list.iterator();
        list.change(Attribute::size(20.0).with_range(0..5));
        assert_eq!(iter.range(), (0, RangeEnd::At(10)));
        assert_eq!(
            iter.get(AttrType::Size).map(|a| a.value()),
            Some(&AttrValue::Size(10.0))
        );
    }
}
