// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where texts and keywords come from.
//!
//! Both sources resolve their argument once, before any table is built or
//! scan started, and report failures with their own error variants.

mod keywords;
mod text;

pub use keywords::{KeywordSource, parse_delimited, parse_lines};
pub use text::{TextSource, is_url};
