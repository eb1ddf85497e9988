// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Parsing of the plain-text UCD property tables.
//!
//! Every input file uses the standard line format
//! `start[..end] ; value [; ...] # comment`. Anything malformed aborts the
//! run; a generation pipeline must fail before it can emit artifacts.

use std::path::Path;

use anyhow::{Context, bail};

pub const MAX_CP: u32 = 0x10FFFF;

/// An immutable set of code points: sorted, coalesced, inclusive ranges.
#[derive(Clone, Debug, Default)]
pub struct CodepointSet {
    ranges: Vec<(u32, u32)>,
}

impl CodepointSet {
    pub fn from_ranges(mut ranges: Vec<(u32, u32)>) -> Self {
        ranges.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
        for (first, last) in ranges {
            match merged.last_mut() {
                // Adjacent or overlapping ranges coalesce.
                Some((_, prev_last)) if first <= prev_last.saturating_add(1) => {
                    *prev_last = (*prev_last).max(last);
                }
                _ => merged.push((first, last)),
            }
        }
        Self { ranges: merged }
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.ranges
            .binary_search_by(|&(first, last)| {
                if last < cp {
                    std::cmp::Ordering::Less
                } else if first > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut ranges = self.ranges.clone();
        ranges.extend_from_slice(&other.ranges);
        Self::from_ranges(ranges)
    }

    /// Removes `first..=last` from the set.
    pub fn remove_range(&self, first: u32, last: u32) -> Self {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        for &(a, b) in &self.ranges {
            if b < first || a > last {
                ranges.push((a, b));
                continue;
            }
            if a < first {
                ranges.push((a, first - 1));
            }
            if b > last {
                ranges.push((last + 1, b));
            }
        }
        Self { ranges }
    }

}

/// Which lines of a property file belong to the extracted set.
#[derive(Clone, Copy)]
pub enum Filter {
    /// The first value field equals this property value.
    Value(&'static str),
    /// The first value field is a nonzero number (combining class).
    NonZero,
}

impl Filter {
    fn matches(self, value: &str) -> anyhow::Result<bool> {
        match self {
            Filter::Value(wanted) => Ok(value == wanted),
            Filter::NonZero => {
                let ccc: u32 = value.parse().with_context(|| format!("bad number {value:?}"))?;
                Ok(ccc != 0)
            }
        }
    }
}

/// Parses one UCD table, keeping the code points whose value matches.
pub fn parse(text: &str, filter: Filter) -> anyhow::Result<CodepointSet> {
    let mut ranges = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let err = || format!("line {}: malformed entry {line:?}", index + 1);

        let mut fields = line.split(';').map(str::trim);
        let cps = fields.next().with_context(err)?;
        let value = fields.next().with_context(err)?;

        let (first, last) = match cps.split_once("..") {
            Some((first, last)) => {
                (parse_cp(first).with_context(err)?, parse_cp(last).with_context(err)?)
            }
            None => {
                let cp = parse_cp(cps).with_context(err)?;
                (cp, cp)
            }
        };
        if first > last || last > MAX_CP {
            bail!("line {}: bad range {first:04X}..{last:04X}", index + 1);
        }

        if filter.matches(value).with_context(err)? {
            ranges.push((first, last));
        }
    }

    Ok(CodepointSet::from_ranges(ranges))
}

fn parse_cp(s: &str) -> anyhow::Result<u32> {
    u32::from_str_radix(s, 16).with_context(|| format!("bad code point {s:?}"))
}

/// Reads a property file from the UCD directory, trying the flat layout
/// first and the `extracted/` subdirectory second.
pub fn load(dir: &Path, name: &str) -> anyhow::Result<String> {
    let mut tried = Vec::new();
    for candidate in [dir.join(name), dir.join("extracted").join(name)] {
        match std::fs::read_to_string(&candidate) {
            Ok(text) => return Ok(text),
            Err(_) => tried.push(candidate),
        }
    }
    bail!("cannot read {name} (tried {tried:?})")
}

/// The UCD version, from the `# <Name>-<version>.txt` header comment.
pub fn detect_version(text: &str) -> Option<String> {
    let line = text.lines().next()?.trim_start_matches('#').trim();
    let stem = line.strip_suffix(".txt")?;
    let (_, version) = stem.rsplit_once('-')?;
    version.chars().all(|c| c.is_ascii_digit() || c == '.').then(|| version.to_string())
}
