// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Terminal cell widths for Unicode code points and strings.
//!
//! Every code point occupies −1 (unprintable), 0, 1 or 2 columns in a
//! monospaced terminal grid. The answers are bit-exact with the classic
//! `wcwidth(3)` fixed-advance model: combining marks and format controls
//! are zero, C0/C1 controls are unprintable, East Asian Wide/Fullwidth
//! blocks are two columns and everything unknown defaults to one so that
//! future Unicode versions degrade gracefully.
//!
//! Lookups go through a three-stage table that is built once per process
//! and answers in constant time regardless of the code point value. The
//! table and the property bitsets it is derived from are generated from
//! one pinned UCD version by `tools/width-table-gen`.
//!
//! ```
//! assert_eq!(cellwidth::wcwidth('a'), 1);
//! assert_eq!(cellwidth::wcwidth('好'), 2);
//! assert_eq!(cellwidth::wcswidth("안녕하세요", None), 10);
//! // East-Asian-Ambiguous code points score 2 in CJK-legacy mode only.
//! assert_eq!(cellwidth::wcswidth("°C", None), 2);
//! assert_eq!(cellwidth::wcswidth_cjk("°C", None), 3);
//! ```

pub mod bitset;
pub mod table;
mod tables;
mod utf8;
mod width;

pub use utf8::ScalarChars;
pub use width::{
    Width, classify, classify_cjk, classify_with, wcswidth, wcswidth_bytes, wcswidth_bytes_cjk,
    wcswidth_cjk, wcwidth, wcwidth_cjk,
};
