// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Generated property tables.
//!
//! Do not edit by hand. Both modules are emitted together by
//! `width-table-gen` (see `tools/width-table-gen`) from one pinned UCD
//! version; regenerating one without the other is a consistency violation.

mod ambiguous;
mod zero_width;

pub(crate) use ambiguous::AMBIGUOUS;
pub(crate) use zero_width::ZERO_WIDTH;
