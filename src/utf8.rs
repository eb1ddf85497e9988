use std::iter;

/// Iterates the Unicode scalar values of a byte slice.
///
/// Unlike `str::chars` this accepts arbitrary bytes: a malformed sequence
/// yields `Some(None)` instead of being replaced with U+FFFD, so callers
/// can treat undecodable input as its own condition. Iteration is always
/// by decoded scalar value, never by individual code unit.
#[derive(Clone, Copy)]
pub struct ScalarChars<'a> {
    source: &'a [u8],
    offset: usize,
}

impl<'a> ScalarChars<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, offset: 0 }
    }

    /// Offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    // See: https://datatracker.ietf.org/doc/html/rfc3629
    // as well as ICU's `utf8.h` for the bitmask approach.
    #[cold]
    fn next_slow(&mut self, c: u8) -> Option<char> {
        if self.offset >= self.source.len() {
            return None;
        }

        let mut cp = c as u32;

        if cp < 0xE0 {
            // UTF8-2 = %xC2-DF UTF8-tail

            if cp < 0xC2 {
                return None;
            }

            // The lead byte is 110xxxxx
            // -> Strip off the 110 prefix
            cp &= !0xE0;
        } else if cp < 0xF0 {
            // UTF8-3 =
            //   %xE0    %xA0-BF   UTF8-tail
            //   %xE1-EC UTF8-tail UTF8-tail
            //   %xED    %x80-9F   UTF8-tail
            //   %xEE-EF UTF8-tail UTF8-tail
            const BITS_80_9F: u8 = 1 << 0b100; // 0x80-9F, aka 0b100xxxxx
            const BITS_A0_BF: u8 = 1 << 0b101; // 0xA0-BF, aka 0b101xxxxx
            const BITS_BOTH: u8 = BITS_80_9F | BITS_A0_BF;
            const LEAD_TRAIL1_BITS: [u8; 16] = [
                //             v-- lead byte
                BITS_A0_BF, // 0xE0
                BITS_BOTH,  // 0xE1
                BITS_BOTH,  // 0xE2
                BITS_BOTH,  // 0xE3
                BITS_BOTH,  // 0xE4
                BITS_BOTH,  // 0xE5
                BITS_BOTH,  // 0xE6
                BITS_BOTH,  // 0xE7
                BITS_BOTH,  // 0xE8
                BITS_BOTH,  // 0xE9
                BITS_BOTH,  // 0xEA
                BITS_BOTH,  // 0xEB
                BITS_BOTH,  // 0xEC
                BITS_80_9F, // 0xED
                BITS_BOTH,  // 0xEE
                BITS_BOTH,  // 0xEF
            ];

            // The lead byte is 1110xxxx
            // -> Strip off the 1110 prefix
            cp &= !0xF0;

            let t = self.source[self.offset] as u32;
            if LEAD_TRAIL1_BITS[cp as usize] & (1 << (t >> 5)) == 0 {
                return None;
            }
            cp = (cp << 6) | (t & 0x3F);

            self.offset += 1;
            if self.offset >= self.source.len() {
                return None;
            }
        } else {
            // UTF8-4 =
            //   %xF0    %x90-BF   UTF8-tail UTF8-tail
            //   %xF1-F3 UTF8-tail UTF8-tail UTF8-tail
            //   %xF4    %x80-8F   UTF8-tail UTF8-tail

            // Same trick, but with the indices flipped: the trail byte is
            // the index and the lead byte mask is the value, because the
            // split at 0x90 doesn't fit into a u8 the other way around.
            const TRAIL1_LEAD_BITS: [u8; 16] = [
                // +------ 0xF4 lead
                // |+----- 0xF3 lead
                // ||+---- 0xF2 lead
                // |||+--- 0xF1 lead
                // ||||+-- 0xF0 lead
                // vvvvv
                0b_00000, //
                0b_00000, //
                0b_00000, //
                0b_00000, //
                0b_00000, //
                0b_00000, //
                0b_00000, // trail bytes:
                0b_00000, //
                0b_11110, // 0x80-8F -> 0x80-8F can be preceded by 0xF1-F4
                0b_01111, // 0x90-9F -v
                0b_01111, // 0xA0-AF -> 0x90-BF can be preceded by 0xF0-F3
                0b_01111, // 0xB0-BF -^
                0b_00000, //
                0b_00000, //
                0b_00000, //
                0b_00000, //
            ];

            // The lead byte *may* be 11110xxx, but could also be e.g.
            // 11111xxx. -> Only strip off the 1111 prefix
            cp &= !0xF0;

            // Now we can verify if it's actually <= 0xF4.
            if cp > 4 {
                return None;
            }

            let t = self.source[self.offset] as u32;
            if TRAIL1_LEAD_BITS[(t >> 4) as usize] & (1 << cp) == 0 {
                return None;
            }
            cp = (cp << 6) | (t & 0x3F);

            self.offset += 1;
            if self.offset >= self.source.len() {
                return None;
            }

            // UTF8-tail = %x80-BF
            let t = (self.source[self.offset] as u32).wrapping_sub(0x80);
            if t > 0x3F {
                return None;
            }
            cp = (cp << 6) | t;

            self.offset += 1;
            if self.offset >= self.source.len() {
                return None;
            }
        }

        // UTF8-tail = %x80-BF
        let t = (self.source[self.offset] as u32).wrapping_sub(0x80);
        if t > 0x3F {
            return None;
        }
        cp = (cp << 6) | t;

        self.offset += 1;

        // Overlong forms and surrogates were rejected above, so `cp` is a
        // valid scalar value by construction.
        char::from_u32(cp)
    }
}

impl Iterator for ScalarChars<'_> {
    /// `Some(None)` marks a malformed sequence at the current position.
    type Item = Option<char>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.source.len() {
            return None;
        }

        let c = self.source[self.offset];
        self.offset += 1;

        // Fast-passing ASCII keeps this function trivially inlineable,
        // the full decoder is a little too large for that.
        if (c & 0x80) == 0 {
            // UTF8-1 = %x00-7F
            Some(Some(c as char))
        } else {
            Some(self.next_slow(c))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Lower bound: All remaining bytes are 4-byte sequences.
        // Upper bound: All remaining bytes are ASCII.
        let remaining = self.source.len() - self.offset;
        (remaining / 4, Some(remaining))
    }
}

impl iter::FusedIterator for ScalarChars<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(source: &[u8]) -> Vec<Option<char>> {
        ScalarChars::new(source).collect()
    }

    #[test]
    fn test_valid_matches_chars() {
        let s = "a\u{00B0}\u{1160}\u{597D}\u{1F60A}";
        let decoded: Vec<_> = ScalarChars::new(s.as_bytes()).collect();
        let expected: Vec<_> = s.chars().map(Some).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_lone_continuation() {
        assert_eq!(decode(&[0x80]), vec![None]);
        assert_eq!(decode(&[b'a', 0xBF, b'b']), vec![Some('a'), None, Some('b')]);
    }

    #[test]
    fn test_overlong() {
        assert_eq!(decode(&[0xC0, 0x80]), vec![None, None]);
        assert_eq!(decode(&[0xC1, 0xBF]), vec![None, None]);
    }

    #[test]
    fn test_encoded_surrogate() {
        // U+D800 as three bytes. The second byte fails the trail check and
        // is left for the next iteration, like the lossy decoder does.
        let decoded = decode(&[0xED, 0xA0, 0x80]);
        assert_eq!(decoded[0], None);
        assert!(decoded.iter().all(Option::is_none));
    }

    #[test]
    fn test_truncated_tail() {
        assert_eq!(decode(&[0xE3, 0x81]), vec![None]);
        assert_eq!(decode(&[0xF0, 0x9F, 0x98]), vec![None]);
    }

    #[test]
    fn test_out_of_range_lead() {
        assert_eq!(decode(&[0xF5, 0x80, 0x80, 0x80]).first(), Some(&None));
        assert_eq!(decode(&[0xFF]), vec![None]);
    }
}
