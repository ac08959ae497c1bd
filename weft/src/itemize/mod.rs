// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text into [`Item`]s.
//!
//! Itemization walks the text once, tracking the next change point along each [`Axis`]. Each
//! stretch between change points is a run over which the bidi level, attributes, script, emoji
//! presentation and orientation are all constant. Within a run, characters are grouped by the
//! font that covers them.

mod boundaries;
mod fonts;

pub use boundaries::{Axis, RunBoundaries};

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use bitflags::bitflags;
use icu_properties::props::GeneralCategory;
use icu_properties::CodePointMapData;
use smallvec::SmallVec;
use text_primitives::{Direction, Gravity, GravityHint, Language, Script};
use weft_attrs::{AttrIterator, AttrList, AttrValue, Attribute, FontAttrs, FontDescription};

use crate::bidi::embedding_levels;
use crate::font::{same_font, FontRef};
use crate::scan::{EmojiIter, ScriptIter, WidthIter};
use crate::{Analysis, AnalysisFlags, Context, Item};

use fonts::FontCache;

const LINE_SEPARATOR: char = '\u{2028}';
const OGHAM_SPACE_MARK: char = '\u{1680}';

const EMOJI_FAMILY: &str = "emoji";

bitflags! {
    /// Which per-run inputs changed at the start of the current run.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct Changed: u8 {
        const EMBEDDING = 1 << 0;
        const SCRIPT = 1 << 1;
        const LANG = 1 << 2;
        const FONT = 1 << 3;
        const DERIVED_LANG = 1 << 4;
        const WIDTH = 1 << 5;
        const EMOJI = 1 << 6;
    }
}

#[derive(Debug)]
enum AttrIterSlot<'a> {
    Owned(AttrIterator),
    Borrowed(&'a mut AttrIterator),
}

impl AttrIterSlot<'_> {
    fn get(&self) -> &AttrIterator {
        match self {
            Self::Owned(iter) => iter,
            Self::Borrowed(iter) => iter,
        }
    }

    fn get_mut(&mut self) -> &mut AttrIterator {
        match self {
            Self::Owned(iter) => iter,
            Self::Borrowed(iter) => iter,
        }
    }
}

/// The state of one itemization.
///
/// Most callers want [`itemize`]. Driving the state by hand exposes the runs as they are
/// found:
///
/// ```
/// use text_primitives::Direction;
/// use weft::{Context, ItemizeState};
///
/// let context = Context::new();
/// let text = "one two";
/// let mut state =
///     ItemizeState::new(&context, text, Direction::Ltr, 0..text.len(), None, None, None)
///         .unwrap();
/// loop {
///     assert_eq!(state.run_range(), 0..7);
///     state.process_run();
///     if !state.advance() {
///         break;
///     }
/// }
/// let items = state.finish();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].num_chars, 7);
/// ```
#[derive(Debug)]
pub struct ItemizeState<'a> {
    context: &'a Context,
    text: &'a str,
    start: usize,
    end: usize,
    run_start: usize,
    run_end: usize,
    bounds: RunBoundaries,
    changed: Changed,

    /// Embedding level of each byte from `start`.
    embedding_levels: Vec<u8>,
    embedding: u8,

    attr_iter: Option<AttrIterSlot<'a>>,
    font_desc: FontDescription,
    emoji_font_desc: Option<FontDescription>,
    lang: Language,
    extra_attrs: Arc<[Attribute]>,
    enable_fallback: bool,

    gravity: Gravity,
    gravity_hint: GravityHint,
    resolved_gravity: Gravity,
    font_desc_gravity: Gravity,
    centered_baseline: bool,

    script_iter: ScriptIter<'a>,
    script: Script,
    derived_lang: Option<Language>,
    width_iter: WidthIter<'a>,
    emoji_iter: EmojiIter<'a>,

    fonts: FontCache,
    warned_scripts: SmallVec<[Script; 4]>,

    items: Vec<Item>,
    /// Whether the last item still takes characters.
    item_open: bool,
}

impl<'a> ItemizeState<'a> {
    /// Prepares to itemize `text[range]`, positioned on the first run.
    ///
    /// Attributes come from `cached_iter` when given, or else from `attrs`. A cached iterator
    /// is advanced to the start of the range. Without attributes, `desc` (or the context's font
    /// description) applies to the whole range.
    ///
    /// Returns `None` if `range` is not a valid range of `text`.
    pub fn new(
        context: &'a Context,
        text: &'a str,
        base_dir: Direction,
        range: Range<usize>,
        attrs: Option<&AttrList>,
        cached_iter: Option<&'a mut AttrIterator>,
        desc: Option<&FontDescription>,
    ) -> Option<Self> {
        let sub = text.get(range.clone())?;
        let Range { start, end } = range;
        let (embedding_levels, _) = embedding_levels(sub, base_dir);

        let mut state = Self {
            context,
            text,
            start,
            end,
            run_start: start,
            run_end: start,
            bounds: RunBoundaries::new(end),
            changed: Changed::all(),
            embedding_levels,
            embedding: 0,
            attr_iter: None,
            font_desc: desc.unwrap_or(context.font_description()).clone(),
            emoji_font_desc: None,
            lang: context.language(),
            extra_attrs: Arc::from([]),
            enable_fallback: true,
            gravity: Gravity::Auto,
            gravity_hint: context.gravity_hint(),
            resolved_gravity: Gravity::Auto,
            font_desc_gravity: Gravity::Auto,
            centered_baseline: context.gravity().is_vertical(),
            script_iter: ScriptIter::new(sub),
            script: Script::COMMON,
            derived_lang: None,
            width_iter: WidthIter::new(sub),
            emoji_iter: EmojiIter::new(sub),
            fonts: FontCache::new(),
            warned_scripts: SmallVec::new(),
            items: Vec::new(),
            item_open: false,
        };

        state.bounds.set(Axis::Embedding, start);
        state.update_embedding_end();

        let attr_iter = match cached_iter {
            Some(iter) => Some(AttrIterSlot::Borrowed(iter)),
            None => attrs
                .filter(|attrs| !attrs.is_empty())
                .map(|attrs| AttrIterSlot::Owned(attrs.iterator())),
        };
        if let Some(mut iter) = attr_iter {
            if let Err(err) = iter.get_mut().advance_to(start) {
                log::warn!("{err}; itemizing with the attributes at its position");
            }
            state.attr_iter = Some(iter);
            state.update_attr_iterator();
        }
        state.font_desc_gravity = state.font_desc.gravity().unwrap_or(Gravity::Auto);

        state.script = state.script_iter.script();
        state
            .bounds
            .set(Axis::Script, start + state.script_iter.end());
        state.bounds.set(Axis::Width, start + state.width_iter.end());
        state.bounds.set(Axis::Emoji, start + state.emoji_iter.end());
        if state.emoji_iter.is_emoji() {
            state.extend_width_to_emoji();
        }

        state.run_end = state.bounds.run_end();
        state.changed = Changed::all();
        Some(state)
    }

    /// The byte range of the current run.
    #[must_use]
    pub fn run_range(&self) -> Range<usize> {
        self.run_start..self.run_end
    }

    /// Moves to the next run. Returns false, without moving, at the end of the range.
    pub fn advance(&mut self) -> bool {
        if self.run_end >= self.end {
            return false;
        }
        self.changed = Changed::empty();
        self.run_start = self.run_end;
        for axis in Axis::ALL {
            if self.bounds.ends_at(axis, self.run_start) {
                self.advance_axis(axis);
            }
        }
        self.run_end = self.bounds.run_end();
        log::trace!(
            "run {}..{} script {} level {}",
            self.run_start,
            self.run_end,
            self.script,
            self.embedding
        );
        true
    }

    /// Adds the characters of the current run to the items.
    pub fn process_run(&mut self) {
        if self.run_start >= self.run_end {
            return;
        }
        self.update_for_new_run();

        let text = self.text;
        let Some(run_text) = text.get(self.run_start..self.run_end) else {
            return;
        };
        let categories = CodePointMapData::<GeneralCategory>::new();
        let mut last_was_forced_break = false;
        for (i, ch) in run_text.char_indices() {
            let is_forced_break = ch == '\t' || ch == LINE_SEPARATOR;
            let font = if is_font_neutral(categories.get(ch), ch) {
                None
            } else {
                self.font_for_char(ch)
            };
            self.add_character(
                font,
                is_forced_break || last_was_forced_break,
                self.run_start + i,
            );
            last_was_forced_break = is_forced_break;
        }

        // Close the last item of the run.
        if self.item_open {
            let run_end = self.run_end;
            let missing_font = match self.items.last_mut() {
                Some(item) => {
                    item.length = run_end - item.offset;
                    item.analysis.font.is_none()
                }
                None => false,
            };
            if missing_font {
                let font = self.font_for_char(' ');
                if font.is_none() {
                    self.warn_missing_font();
                }
                self.fill_font(font);
            }
        }
        self.item_open = false;
    }

    /// Returns the items.
    #[must_use]
    pub fn finish(self) -> Vec<Item> {
        self.items
    }

    fn advance_axis(&mut self, axis: Axis) {
        match axis {
            Axis::Embedding => self.update_embedding_end(),
            Axis::Attributes => {
                if let Some(iter) = self.attr_iter.as_mut() {
                    if let Err(err) = iter.get_mut().advance_to(self.run_start) {
                        log::warn!("{err}");
                    }
                }
                self.update_attr_iterator();
            }
            Axis::Script => {
                self.script_iter.advance();
                self.script = self.script_iter.script();
                self.bounds
                    .set(Axis::Script, self.start + self.script_iter.end());
                self.changed |= Changed::SCRIPT;
            }
            Axis::Emoji => {
                self.emoji_iter.advance();
                self.bounds
                    .set(Axis::Emoji, self.start + self.emoji_iter.end());
                if self.emoji_iter.is_emoji() {
                    self.extend_width_to_emoji();
                }
                self.changed |= Changed::EMOJI;
            }
            Axis::Width => {
                self.width_iter.advance();
                self.bounds
                    .set(Axis::Width, self.start + self.width_iter.end());
                self.changed |= Changed::WIDTH;
            }
        }
    }

    /// Emoji are never split by orientation.
    fn extend_width_to_emoji(&mut self) {
        self.width_iter.extend_to(self.emoji_iter.end());
        self.bounds
            .extend(Axis::Width, self.start + self.width_iter.end());
    }

    /// Finds where the embedding level of the byte at the embedding boundary changes.
    fn update_embedding_end(&mut self) {
        let mut end = self.bounds.get(Axis::Embedding);
        let level_at = |pos: usize| self.embedding_levels.get(pos - self.start).copied();
        self.embedding = level_at(end).unwrap_or(0);
        while end < self.end && level_at(end) == Some(self.embedding) {
            end += 1;
        }
        self.bounds.set(Axis::Embedding, end);
        self.changed |= Changed::EMBEDDING;
    }

    fn update_attr_iterator(&mut self) {
        let Some(iter) = self.attr_iter.as_ref().map(AttrIterSlot::get) else {
            return;
        };

        let mut attr_end = iter.end().min_index(self.end);
        while !self.text.is_char_boundary(attr_end) {
            attr_end += 1;
        }
        self.bounds.set(Axis::Attributes, attr_end);

        let old_lang = self.lang;
        self.font_desc = self.context.font_description().clone();
        let FontAttrs {
            language,
            extra_attrs,
        } = iter.font(&mut self.font_desc);
        self.emoji_font_desc = None;
        self.font_desc_gravity = self.font_desc.gravity().unwrap_or(Gravity::Auto);
        self.lang = language.unwrap_or(self.context.language());

        self.enable_fallback = true;
        self.gravity = Gravity::Auto;
        self.gravity_hint = self.context.gravity_hint();
        for attr in &extra_attrs {
            match attr.value() {
                AttrValue::Fallback(enable) => self.enable_fallback = *enable,
                AttrValue::Gravity(gravity) => self.gravity = *gravity,
                AttrValue::GravityHint(hint) => self.gravity_hint = *hint,
                _ => {}
            }
        }
        self.extra_attrs = Arc::from(extra_attrs);

        self.changed |= Changed::FONT;
        if self.lang != old_lang {
            self.changed |= Changed::LANG;
        }
    }

    fn update_for_new_run(&mut self) {
        if self
            .changed
            .intersects(Changed::FONT | Changed::SCRIPT | Changed::WIDTH)
        {
            self.resolved_gravity = if self.font_desc_gravity == Gravity::Auto {
                let base = if self.gravity == Gravity::Auto {
                    self.context.gravity()
                } else {
                    self.gravity
                };
                Gravity::for_script_and_width(
                    self.script,
                    self.width_iter.is_upright(),
                    base,
                    self.gravity_hint,
                )
            } else {
                self.font_desc_gravity
            };
            if self.font_desc_gravity != self.resolved_gravity {
                self.font_desc.set_gravity(self.resolved_gravity);
                self.emoji_font_desc = None;
                self.changed |= Changed::FONT;
            }
        }

        if self.changed.intersects(Changed::SCRIPT | Changed::LANG) {
            let derived_lang = derived_language(self.lang, self.script);
            if self.derived_lang != Some(derived_lang) {
                self.derived_lang = Some(derived_lang);
                self.changed |= Changed::DERIVED_LANG;
            }
        }

        if self.changed.intersects(Changed::EMOJI) {
            self.changed |= Changed::FONT;
        }
        if self
            .changed
            .intersects(Changed::FONT | Changed::DERIVED_LANG)
        {
            self.fonts.clear_fontset();
        }
        if !self.fonts.has_fontset() {
            let desc = if self.emoji_iter.is_emoji() {
                &*self.emoji_font_desc.get_or_insert_with(|| {
                    let mut desc = self.font_desc.clone();
                    desc.set_family(EMOJI_FAMILY);
                    desc
                })
            } else {
                &self.font_desc
            };
            let language = self.derived_lang.unwrap_or(self.lang);
            self.fonts.select_fontset(self.context, desc, language);
        }
        if self.changed.intersects(Changed::FONT) {
            self.fonts.clear_base_font();
        }
    }

    fn font_for_char(&mut self, ch: char) -> Option<FontRef> {
        if self.enable_fallback {
            self.fonts.font_for_char(ch)
        } else {
            self.fonts.base_font(self.context, &self.font_desc)
        }
    }

    fn add_character(&mut self, font: Option<FontRef>, force_break: bool, pos: usize) {
        let mut font = font;
        if self.item_open {
            let current_font = self.items.last().and_then(|item| item.analysis.font.clone());
            if current_font.is_none() && font.is_some() {
                self.fill_font(font.clone());
            } else if font.is_none() {
                font = current_font;
            }

            if let Some(item) = self.items.last_mut() {
                if !force_break && same_font(item.analysis.font.as_ref(), font.as_ref()) {
                    item.num_chars += 1;
                    return;
                }
                item.length = pos - item.offset;
            }
        }

        let mut level = self.embedding;
        match self.resolved_gravity {
            Gravity::North => level = level.saturating_add(1),
            Gravity::East => level = level.saturating_add(1) & !1,
            Gravity::West => level |= 1,
            _ => {}
        }
        let flags = if self.centered_baseline {
            AnalysisFlags::CENTERED_BASELINE
        } else {
            AnalysisFlags::empty()
        };
        self.items.push(Item {
            offset: pos,
            length: 0,
            num_chars: 1,
            analysis: Analysis {
                font,
                level,
                gravity: self.resolved_gravity,
                flags,
                script: self.script,
                language: self.derived_lang.unwrap_or(self.lang),
                extra_attrs: self.extra_attrs.clone(),
            },
        });
        self.item_open = true;
    }

    /// Gives `font` to the trailing items that have none.
    fn fill_font(&mut self, font: Option<FontRef>) {
        for item in self.items.iter_mut().rev() {
            if item.analysis.font.is_some() {
                break;
            }
            item.analysis.font.clone_from(&font);
        }
    }

    fn warn_missing_font(&mut self) {
        if !self.warned_scripts.contains(&self.script) {
            self.warned_scripts.push(self.script);
            log::warn!(
                "failed to choose a font for script {}, expect missing glyphs",
                self.script
            );
        }
    }
}

/// The language to use for `script` text tagged as `lang`.
fn derived_language(lang: Language, script: Script) -> Language {
    if lang.includes_script(script) {
        lang
    } else {
        script.sample_language().unwrap_or(Language::PLACEHOLDER)
    }
}

/// Characters that never select a font of their own.
fn is_font_neutral(category: GeneralCategory, ch: char) -> bool {
    match category {
        GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => true,
        GeneralCategory::SpaceSeparator => ch != OGHAM_SPACE_MARK,
        _ => matches!(ch, '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}'),
    }
}

/// Splits `text[range]` into items, using the context's base direction.
///
/// Attributes come from `cached_iter` when given, which lets a caller itemize consecutive
/// ranges of one text without restarting the attribute walk. Otherwise they come from
/// `attrs`.
///
/// An invalid range logs a warning and gives no items.
pub fn itemize(
    context: &Context,
    text: &str,
    range: Range<usize>,
    attrs: Option<&AttrList>,
    cached_iter: Option<&mut AttrIterator>,
) -> Vec<Item> {
    itemize_with_base_dir(context, context.base_dir(), text, range, attrs, cached_iter)
}

/// Splits `text[range]` into items, with an explicit base direction.
///
/// See [`itemize`].
pub fn itemize_with_base_dir(
    context: &Context,
    base_dir: Direction,
    text: &str,
    range: Range<usize>,
    attrs: Option<&AttrList>,
    cached_iter: Option<&mut AttrIterator>,
) -> Vec<Item> {
    run_state(ItemizeState::new(
        context,
        text,
        base_dir,
        range.clone(),
        attrs,
        cached_iter,
        None,
    ))
    .unwrap_or_else(|| {
        log::warn!("invalid range {range:?} for text of length {}", text.len());
        Vec::new()
    })
}

/// Splits `text[range]` into items, all using `desc` instead of the context's font.
pub fn itemize_with_font(
    context: &Context,
    text: &str,
    range: Range<usize>,
    desc: &FontDescription,
) -> Vec<Item> {
    run_state(ItemizeState::new(
        context,
        text,
        context.base_dir(),
        range.clone(),
        None,
        None,
        Some(desc),
    ))
    .unwrap_or_else(|| {
        log::warn!("invalid range {range:?} for text of length {}", text.len());
        Vec::new()
    })
}

fn run_state(state: Option<ItemizeState<'_>>) -> Option<Vec<Item>> {
    let mut state = state?;
    if state.start == state.end {
        return Some(Vec::new());
    }
    loop {
        state.process_run();
        if !state.advance() {
            break;
        }
    }
    Some(state.finish())
}
