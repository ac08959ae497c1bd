// Copyright 2026 the Weft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_gravity;
mod test_invariants;
mod test_itemize;
mod utils;
