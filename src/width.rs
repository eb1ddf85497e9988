// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Width classification and string aggregation.
//!
//! Every code point maps to exactly one of four classes: unprintable (−1),
//! zero columns, one column or two columns. Classification is a pure
//! function of the code point and the chosen mode; the CJK mode exists for
//! legacy East-Asian terminal emulation and additionally scores
//! East-Asian-Ambiguous code points as two columns. It is opt-in, never
//! the default.

use crate::table;
use crate::tables::{AMBIGUOUS, ZERO_WIDTH};
use crate::utf8::ScalarChars;

/// The width class of a single code point.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// Unprintable in a terminal cell: controls, DEL, invalid scalars.
    Invalid = -1,
    /// Occupies no column (combining marks, format controls).
    Zero = 0,
    Narrow = 1,
    Wide = 2,
}

impl Width {
    /// The column count, with −1 for [`Width::Invalid`].
    pub fn columns(self) -> isize {
        self as i8 as isize
    }

    /// The single-byte table representation (0xFF for invalid).
    pub fn table_byte(self) -> u8 {
        match self {
            Width::Invalid => table::SENTINEL,
            w => w as i8 as u8,
        }
    }

    pub fn from_table_byte(byte: u8) -> Self {
        match byte {
            0 => Width::Zero,
            1 => Width::Narrow,
            2 => Width::Wide,
            _ => Width::Invalid,
        }
    }
}

// Blocks that render two columns wide, on top of the Hangul Jamo and
// CJK Radicals..Yi Radicals rules below: Hangul syllables, compatibility
// ideographs, vertical/compatibility/fullwidth forms and the East Asian
// Wide blocks above the BMP (Tangut, Kana, ideograph extensions and the
// wide emoji presentation ranges, per UAX #11).
#[rustfmt::skip]
const WIDE: &[(u32, u32)] = &[
    (0x231A, 0x231B), (0x23E9, 0x23EC), (0x23F0, 0x23F0), (0x23F3, 0x23F3),
    (0x25FD, 0x25FE), (0x2614, 0x2615), (0x2630, 0x2637), (0x2648, 0x2653),
    (0x267F, 0x267F), (0x268A, 0x268F), (0x2693, 0x2693), (0x26A1, 0x26A1),
    (0x26AA, 0x26AB), (0x26BD, 0x26BE), (0x26C4, 0x26C5), (0x26CE, 0x26CE),
    (0x26D4, 0x26D4), (0x26EA, 0x26EA), (0x26F2, 0x26F3), (0x26F5, 0x26F5),
    (0x26FA, 0x26FA), (0x26FD, 0x26FD), (0x2705, 0x2705), (0x270A, 0x270B),
    (0x2728, 0x2728), (0x274C, 0x274C), (0x274E, 0x274E), (0x2753, 0x2755),
    (0x2757, 0x2757), (0x2795, 0x2797), (0x27B0, 0x27B0), (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C), (0x2B50, 0x2B50), (0x2B55, 0x2B55),
    (0xA960, 0xA97F), (0xAC00, 0xD7A3), (0xF900, 0xFAFF), (0xFE10, 0xFE19),
    (0xFE30, 0xFE6F), (0xFF00, 0xFF60), (0xFFE0, 0xFFE6),
    (0x16FE0, 0x16FE4), (0x16FF0, 0x16FF1), (0x17000, 0x187F7),
    (0x18800, 0x18CD5), (0x18D00, 0x18D08), (0x1AFF0, 0x1AFF3),
    (0x1AFF5, 0x1AFFB), (0x1AFFD, 0x1AFFE), (0x1B000, 0x1B122),
    (0x1B132, 0x1B132), (0x1B150, 0x1B152), (0x1B155, 0x1B155),
    (0x1B164, 0x1B167), (0x1B170, 0x1B2FB), (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF), (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A),
    (0x1F200, 0x1F202), (0x1F210, 0x1F23B), (0x1F240, 0x1F248),
    (0x1F250, 0x1F251), (0x1F260, 0x1F265), (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335), (0x1F337, 0x1F37C), (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3), (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E), (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D), (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567), (0x1F57A, 0x1F57A), (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F), (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2), (0x1F6D5, 0x1F6D7),
    (0x1F6DC, 0x1F6DF), (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB), (0x1F7F0, 0x1F7F0), (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945), (0x1F947, 0x1F9FF), (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA88), (0x1FA90, 0x1FABD), (0x1FABF, 0x1FAC5),
    (0x1FACE, 0x1FADB), (0x1FAE0, 0x1FAE8), (0x1FAF0, 0x1FAF8),
    (0x20000, 0x2FFFD), (0x30000, 0x3FFFD),
];

fn in_ranges(ranges: &[(u32, u32)], cp: u32) -> bool {
    ranges
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

/// The rule chain, evaluated against an arbitrary zero-width membership
/// test. Rules are ordered and the first match is definitive. This is the
/// reference procedure the lookup table is compiled from; `width-table-gen`
/// runs it against freshly extracted UCD data.
pub fn classify_with(cp: u32, is_zero_width: impl Fn(u32) -> bool) -> Width {
    if cp > table::MAX_CP || (0xD800..=0xDFFF).contains(&cp) {
        return Width::Invalid;
    }
    if cp == 0 {
        return Width::Zero;
    }
    // C0 and C1 controls plus DEL. U+00A0 (NBSP) prints.
    if cp < 0x20 || (0x7F..0xA0).contains(&cp) {
        return Width::Invalid;
    }
    if is_zero_width(cp) {
        return Width::Zero;
    }
    if cp < 0x1100 {
        return Width::Narrow;
    }
    // Hangul Jamo leading consonants, and the angle brackets that have
    // rendered double width in terminals since DEC times.
    if cp <= 0x115F || cp == 0x2329 || cp == 0x232A {
        return Width::Wide;
    }
    // HANGUL FILLER sits inside the CJK range but prints narrow.
    if cp == 0x3164 {
        return Width::Narrow;
    }
    // CJK Radicals Supplement through Yi Radicals.
    if (0x2E80..=0xA4CF).contains(&cp) && cp != 0x303F {
        return Width::Wide;
    }
    if in_ranges(WIDE, cp) { Width::Wide } else { Width::Narrow }
}

/// Rule-chain classification against the generated zero-width bitset.
pub(crate) fn rules(cp: u32) -> Width {
    classify_with(cp, |cp| ZERO_WIDTH.contains(cp))
}

#[inline]
fn scalar_width(cp: u32, cjk: bool) -> Width {
    if cjk && AMBIGUOUS.contains(cp) {
        return Width::Wide;
    }
    Width::from_table_byte(table::lookup(table::shared(), cp))
}

/// Classifies one scalar value under the default policy.
pub fn classify(ch: char) -> Width {
    scalar_width(ch as u32, false)
}

/// Classifies one scalar value with East-Asian-Ambiguous scored wide.
pub fn classify_cjk(ch: char) -> Width {
    scalar_width(ch as u32, true)
}

/// The number of terminal columns `ch` occupies: −1, 0, 1 or 2.
pub fn wcwidth(ch: char) -> isize {
    classify(ch).columns()
}

/// As [`wcwidth`], but East-Asian-Ambiguous code points occupy 2 columns.
pub fn wcwidth_cjk(ch: char) -> isize {
    classify_cjk(ch).columns()
}

/// The total number of columns occupied by the first `n` code points of
/// `s` (all of them if `n` is `None`), or −1 as soon as any of them is
/// unprintable.
pub fn wcswidth(s: &str, n: Option<usize>) -> isize {
    str_width(s, n, false)
}

/// The CJK-legacy counterpart of [`wcswidth`].
pub fn wcswidth_cjk(s: &str, n: Option<usize>) -> isize {
    str_width(s, n, true)
}

/// As [`wcswidth`], for bytes that are not known to be valid UTF-8.
///
/// A malformed sequence is unprintable and the result is −1, matching the
/// aggregator's contract for invalid scalars. `n` counts decoded scalar
/// values, not bytes.
pub fn wcswidth_bytes(bytes: &[u8], n: Option<usize>) -> isize {
    bytes_width(bytes, n, false)
}

/// The CJK-legacy counterpart of [`wcswidth_bytes`].
pub fn wcswidth_bytes_cjk(bytes: &[u8], n: Option<usize>) -> isize {
    bytes_width(bytes, n, true)
}

fn str_width(s: &str, n: Option<usize>, cjk: bool) -> isize {
    let limit = n.unwrap_or(usize::MAX);
    let mut total = 0;
    for ch in s.chars().take(limit) {
        match scalar_width(ch as u32, cjk) {
            Width::Invalid => return -1,
            w => total += w.columns(),
        }
    }
    total
}

fn bytes_width(bytes: &[u8], n: Option<usize>, cjk: bool) -> isize {
    let limit = n.unwrap_or(usize::MAX);
    let mut total = 0;
    for decoded in ScalarChars::new(bytes).take(limit) {
        let ch = match decoded {
            Some(ch) => ch,
            None => return -1,
        };
        match scalar_width(ch as u32, cjk) {
            Width::Invalid => return -1,
            w => total += w.columns(),
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_are_unprintable() {
        for cp in 1..=0x1F {
            assert_eq!(rules(cp), Width::Invalid, "U+{cp:04X}");
        }
        for cp in 0x7F..=0x9F {
            assert_eq!(rules(cp), Width::Invalid, "U+{cp:04X}");
        }
        assert_eq!(wcwidth('\u{A0}'), 1);
    }

    #[test]
    fn test_nul_is_zero() {
        assert_eq!(wcwidth('\0'), 0);
    }

    #[test]
    fn test_combining_marks_are_zero() {
        for ch in ['\u{0300}', '\u{036F}', '\u{0591}', '\u{0E34}', '\u{200B}', '\u{200D}',
                   '\u{2060}', '\u{FE0F}', '\u{FEFF}', '\u{1D167}', '\u{E0020}'] {
            assert_eq!(wcwidth(ch), 0, "U+{:04X}", ch as u32);
        }
        // Hangul Jamo vowels and trailing consonants conjoin into the
        // preceding syllable block.
        assert_eq!(wcwidth('\u{1160}'), 0);
        assert_eq!(wcwidth('\u{11FF}'), 0);
        assert_eq!(wcwidth('\u{D7B0}'), 0);
    }

    #[test]
    fn test_zero_width_carve_outs() {
        // The format-control properties over-include characters terminals
        // must render; each carve-out keeps its documented width.
        assert_eq!(wcwidth('\u{00AD}'), 1); // SOFT HYPHEN
        assert_eq!(wcwidth('\u{115F}'), 2); // HANGUL CHOSEONG FILLER
        assert_eq!(wcwidth('\u{3164}'), 1); // HANGUL FILLER
        assert_eq!(wcwidth('\u{FFA0}'), 1); // HALFWIDTH HANGUL FILLER
        for cp in 0xFFF9..=0xFFFBu32 {
            assert_eq!(rules(cp), Width::Narrow, "U+{cp:04X}");
        }
        for cp in 0x13430..=0x1343Fu32 {
            assert_eq!(rules(cp), Width::Narrow, "U+{cp:04X}");
        }
    }

    #[test]
    fn test_wide_blocks() {
        assert_eq!(wcwidth('\u{1100}'), 2); // Hangul Jamo lead
        assert_eq!(wcwidth('\u{2329}'), 2);
        assert_eq!(wcwidth('\u{232A}'), 2);
        assert_eq!(wcwidth('\u{3000}'), 2); // ideographic space
        assert_eq!(wcwidth('\u{303F}'), 1); // half-fill space exception
        assert_eq!(wcwidth('好'), 2);
        assert_eq!(wcwidth('\u{AC00}'), 2); // Hangul syllable
        assert_eq!(wcwidth('\u{FF01}'), 2); // fullwidth form
        assert_eq!(wcwidth('\u{20000}'), 2); // CJK extension B
        assert_eq!(wcwidth('\u{3FFFD}'), 2); // CJK extension G
        assert_eq!(wcwidth('😊'), 2);
    }

    #[test]
    fn test_narrow_fallback() {
        assert_eq!(wcwidth('a'), 1);
        assert_eq!(wcwidth('°'), 1);
        assert_eq!(wcwidth('\u{10FFFF}'), 1); // unclassified, narrow default
        assert_eq!(wcwidth('\u{E01F0}'), 1);
    }

    #[test]
    fn test_lone_surrogates_are_invalid() {
        for cp in [0xD800u32, 0xDBFF, 0xDC00, 0xDFFF] {
            assert_eq!(rules(cp), Width::Invalid);
            assert_eq!(table::lookup(table::shared(), cp), table::SENTINEL);
        }
    }

    #[test]
    fn test_table_agrees_with_rules() {
        let table = table::shared();
        for cp in 0..=table::MAX_CP {
            let expected = rules(cp);
            let actual = Width::from_table_byte(table::lookup(table, cp));
            assert_eq!(actual, expected, "U+{cp:04X}");
        }
    }

    #[test]
    fn test_cjk_overlay() {
        assert_eq!(wcwidth_cjk('°'), 2);
        assert_eq!(wcwidth_cjk('\u{0391}'), 2); // Greek capital alpha
        assert_eq!(wcwidth_cjk('\u{2500}'), 2); // box drawings light horizontal
        assert_eq!(wcwidth_cjk('\u{FFFD}'), 2);
        assert_eq!(wcwidth_cjk('\u{E000}'), 2); // private use
        // Non-ambiguous code points keep their default width.
        for ch in ['a', '好', '\u{0300}', '\u{1100}', '😊', '\u{10FFFF}'] {
            assert_eq!(wcwidth_cjk(ch), wcwidth(ch), "U+{:04X}", ch as u32);
        }
    }

    #[test]
    fn test_wcswidth() {
        assert_eq!(wcswidth("", None), 0);
        assert_eq!(wcswidth("hi", None), 2);
        assert_eq!(wcswidth("안녕하세요", None), 10);
        assert_eq!(wcswidth("😊こんにちは", None), 12);
        assert_eq!(wcswidth("cafe\u{0301}", None), 4);
        assert_eq!(wcswidth("°C", None), 2);
        assert_eq!(wcswidth_cjk("°C", None), 3);
    }

    #[test]
    fn test_wcswidth_short_circuits() {
        assert_eq!(wcswidth("a\u{7}b", None), -1);
        assert_eq!(wcswidth("\u{1B}[2J", None), -1);
        // The limit cuts off before the control is reached.
        assert_eq!(wcswidth("ab\u{7}", Some(2)), 2);
    }

    #[test]
    fn test_wcswidth_limit_counts_scalars() {
        assert_eq!(wcswidth("안녕하세요", Some(0)), 0);
        assert_eq!(wcswidth("안녕하세요", Some(2)), 4);
        assert_eq!(wcswidth("😊abc", Some(1)), 2);
        assert_eq!(wcswidth("ab", Some(100)), 2);
        assert_eq!(wcswidth("\u{7}", Some(0)), 0);
    }

    #[test]
    fn test_wcswidth_matches_sum() {
        let s = "The quick — 素早い茶色の狐 — 🦊 über den faulen Hund.";
        let sum: isize = s.chars().map(wcwidth).sum();
        assert_eq!(wcswidth(s, None), sum);
        let sum_cjk: isize = s.chars().map(wcwidth_cjk).sum();
        assert_eq!(wcswidth_cjk(s, None), sum_cjk);
    }

    #[test]
    fn test_wcswidth_bytes() {
        assert_eq!(wcswidth_bytes(b"hi", None), 2);
        assert_eq!(wcswidth_bytes("😊".as_bytes(), None), 2);
        assert_eq!(wcswidth_bytes(&[b'a', 0x80, b'b'], None), -1);
        assert_eq!(wcswidth_bytes(&[0xE3, 0x81], None), -1); // truncated
        assert_eq!(wcswidth_bytes(&[b'a', 0x80], Some(1)), 1);
        assert_eq!(wcswidth_bytes_cjk("°C".as_bytes(), None), 3);
    }

    #[test]
    fn test_classification_is_pure() {
        for ch in ['a', '好', '\u{0300}', '😊'] {
            assert_eq!(wcwidth(ch), wcwidth(ch));
            assert_eq!(wcwidth_cjk(ch), wcwidth_cjk(ch));
        }
    }
}
