// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod env;
mod fonts;

pub(crate) use env::TestEnv;
pub(crate) use fonts::font_name;
