// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;
use std::sync::Arc;

use text_primitives::Language;
use weft_attrs::{AttrList, Attribute};

use crate::tests::utils::fonts::{font_name, TestFontMap};
use crate::{itemize, Context, FontMap, Item};

// Creates a new instance of TestEnv and put current function name in constructor
#[macro_export]
macro_rules! testenv {
    () => {{
        // Get name of the current function
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        let name = &name[name.rfind(':').map(|x| x + 1).unwrap_or(0)..];

        // Create test env
        $crate::tests::utils::TestEnv::new(name)
    }};
}

/// A context with English as its language and [`TestFontMap`] as its font map, and an
/// attribute list to itemize with.
pub(crate) struct TestEnv {
    test_name: String,
    context: Context,
    font_map: Arc<TestFontMap>,
    attrs: AttrList,
}

impl TestEnv {
    pub(crate) fn new(test_name: &str) -> Self {
        let font_map = Arc::new(TestFontMap::new());
        let shared: Arc<dyn FontMap> = font_map.clone();
        let mut context = Context::new();
        context.set_language(Language::from_static("en"));
        context.set_font_map(Some(shared));
        Self {
            test_name: test_name.to_string(),
            context,
            font_map,
            attrs: AttrList::new(),
        }
    }

    pub(crate) fn context(&self) -> &Context {
        &self.context
    }

    pub(crate) fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub(crate) fn font_map(&self) -> &TestFontMap {
        &self.font_map
    }

    pub(crate) fn attrs(&self) -> &AttrList {
        &self.attrs
    }

    pub(crate) fn attr(&mut self, attr: Attribute) -> &mut Self {
        self.attrs.insert(attr);
        self
    }

    pub(crate) fn itemize(&self, text: &str) -> Vec<Item> {
        self.itemize_range(text, 0..text.len())
    }

    pub(crate) fn itemize_range(&self, text: &str, range: Range<usize>) -> Vec<Item> {
        itemize(&self.context, text, range, Some(&self.attrs), None)
    }

    /// Checks the range and font family of each item.
    pub(crate) fn check_runs(&self, items: &[Item], expected: &[(Range<usize>, &str)]) {
        let actual: Vec<(Range<usize>, String)> = items
            .iter()
            .map(|item| (item.range(), font_name(item)))
            .collect();
        let expected: Vec<(Range<usize>, String)> = expected
            .iter()
            .map(|(range, family)| (range.clone(), (*family).to_owned()))
            .collect();
        assert_eq!(actual, expected, "{}: runs mismatch", self.test_name);
    }
}
