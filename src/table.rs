// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The three-stage width lookup table.
//!
//! The table is a single flat buffer: a 20 byte header, a coarse stage-1
//! offset array, a pool of stage-2 offset rows and a pool of stage-3 value
//! rows. All offsets are absolute byte positions within the same buffer,
//! which makes it a relocatable blob that needs no deserialization.
//! A lookup is three indexed loads plus two shift/mask pairs, independent
//! of the code point value.
//!
//! Layout, little endian throughout:
//!
//! ```text
//! u32 shift1   bits consumed by stage 1          (11)
//! u32 bound1   length of the stage-1 array       (544)
//! u32 shift2   bits consumed by stage 2          (5)
//! u32 mask2    stage-2 index mask                (0x3F)
//! u32 mask3    stage-3 index mask                (0x1F)
//! u32 stage1[bound1]
//! u32 stage2[..]   deduplicated rows of mask2+1 offsets
//! u8  stage3[..]   deduplicated rows of mask3+1 classification bytes
//! ```
//!
//! A zero offset in stage 1 or stage 2 means "unclassified", as does the
//! 0xFF value byte. Offset 0 can never collide with real data because real
//! offsets point past the header.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const MAX_CP: u32 = 0x10FFFF;

/// The classification byte for invalid scalar values.
pub const SENTINEL: u8 = 0xFF;

const SHIFT1: u32 = 11;
const SHIFT2: u32 = 5;
const MASK2: u32 = (1 << (SHIFT1 - SHIFT2)) - 1;
const MASK3: u32 = (1 << SHIFT2) - 1;
const BOUND1: u32 = (MAX_CP >> SHIFT1) + 1;

const HEADER_LEN: usize = 5 * 4;
const ROW2_LEN: usize = (MASK2 + 1) as usize; // offsets per stage-2 row
const ROW3_LEN: usize = (MASK3 + 1) as usize; // bytes per stage-3 row

/// Builds the table from a total classification function over
/// `0..=MAX_CP`. `classify` must return [`SENTINEL`] for code points it
/// considers invalid.
///
/// Identical stage-2 and stage-3 rows are stored once; rows that classify
/// nothing are not stored at all. The space is scanned in ascending order,
/// so identical inputs produce byte-identical buffers.
pub fn build(classify: impl Fn(u32) -> u8) -> Vec<u8> {
    let mut rows3: Vec<[u8; ROW3_LEN]> = Vec::new();
    let mut rows3_idx: HashMap<[u8; ROW3_LEN], u32> = HashMap::new();
    let mut rows2: Vec<[u32; ROW2_LEN]> = Vec::new();
    let mut rows2_idx: HashMap<[u32; ROW2_LEN], u32> = HashMap::new();

    // Stage 1 entries hold 1-based stage-2 row ids for now; stage 2 rows
    // hold 1-based stage-3 row ids. Both turn into byte offsets below.
    let mut stage1 = [0u32; BOUND1 as usize];

    for (i1, slot1) in stage1.iter_mut().enumerate() {
        let mut row2 = [0u32; ROW2_LEN];

        for (i2, slot2) in row2.iter_mut().enumerate() {
            let base = ((i1 as u32) << SHIFT1) | ((i2 as u32) << SHIFT2);
            let mut row3 = [SENTINEL; ROW3_LEN];
            for (i3, value) in row3.iter_mut().enumerate() {
                *value = classify(base + i3 as u32);
            }

            if row3 != [SENTINEL; ROW3_LEN] {
                let next = rows3.len() as u32;
                let id = *rows3_idx.entry(row3).or_insert_with(|| {
                    rows3.push(row3);
                    next
                });
                *slot2 = id + 1;
            }
        }

        if row2 != [0u32; ROW2_LEN] {
            let next = rows2.len() as u32;
            let id = *rows2_idx.entry(row2).or_insert_with(|| {
                rows2.push(row2);
                next
            });
            *slot1 = id + 1;
        }
    }

    let stage2_base = HEADER_LEN + stage1.len() * 4;
    let stage3_base = stage2_base + rows2.len() * ROW2_LEN * 4;
    let row2_offset = |id: u32| stage2_base as u32 + (id - 1) * (ROW2_LEN as u32) * 4;
    let row3_offset = |id: u32| stage3_base as u32 + (id - 1) * ROW3_LEN as u32;

    let mut buf = Vec::with_capacity(stage3_base + rows3.len() * ROW3_LEN);
    for v in [SHIFT1, BOUND1, SHIFT2, MASK2, MASK3] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    for &id in &stage1 {
        let off = if id == 0 { 0 } else { row2_offset(id) };
        buf.extend_from_slice(&off.to_le_bytes());
    }
    for row in &rows2 {
        for &id in row {
            let off = if id == 0 { 0 } else { row3_offset(id) };
            buf.extend_from_slice(&off.to_le_bytes());
        }
    }
    for row in &rows3 {
        buf.extend_from_slice(row);
    }
    buf
}

/// Looks up the classification byte for `cp`.
///
/// Returns [`SENTINEL`] for code points the table does not classify,
/// which includes everything above the table's coverage. A truncated or
/// otherwise corrupt buffer also answers [`SENTINEL`] rather than panic.
pub fn lookup(table: &[u8], cp: u32) -> u8 {
    let [shift1, bound1, shift2, mask2, mask3] = match read_header(table) {
        Some(header) => header,
        None => return SENTINEL,
    };

    let index1 = cp >> shift1;
    if index1 >= bound1 {
        return SENTINEL;
    }
    let offset2 = match read_u32(table, HEADER_LEN + index1 as usize * 4) {
        Some(0) | None => return SENTINEL,
        Some(off) => off,
    };

    let index2 = (cp >> shift2) & mask2;
    let offset3 = match read_u32(table, offset2 as usize + index2 as usize * 4) {
        Some(0) | None => return SENTINEL,
        Some(off) => off,
    };

    let index3 = cp & mask3;
    match table.get(offset3 as usize + index3 as usize) {
        Some(&value) => value,
        None => SENTINEL,
    }
}

/// The process-wide table, built once from the rule classifier on first
/// use and immutable afterwards. Concurrent readers share it without
/// locking.
pub fn shared() -> &'static [u8] {
    static TABLE: OnceLock<Vec<u8>> = OnceLock::new();
    TABLE.get_or_init(|| build(|cp| crate::width::rules(cp).table_byte()))
}

fn read_header(table: &[u8]) -> Option<[u32; 5]> {
    let mut header = [0u32; 5];
    for (i, field) in header.iter_mut().enumerate() {
        *field = read_u32(table, i * 4)?;
    }
    Some(header)
}

fn read_u32(table: &[u8], offset: usize) -> Option<u32> {
    let bytes = table.get(offset..offset + 4)?;
    Some(u32::from_le_bytes(bytes.try_into().unwrap()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // A toy classifier: even code points below 0x2000 are 1, odd ones 0,
    // everything else unclassified.
    fn toy(cp: u32) -> u8 {
        if cp < 0x2000 { (cp & 1) as u8 ^ 1 } else { SENTINEL }
    }

    #[test]
    fn test_round_trip() {
        let table = build(toy);
        for cp in 0..0x3000 {
            assert_eq!(lookup(&table, cp), toy(cp), "U+{cp:04X}");
        }
    }

    #[test]
    fn test_header_fields() {
        let table = build(toy);
        let fields: Vec<u32> =
            (0..5).map(|i| u32::from_le_bytes(table[i * 4..i * 4 + 4].try_into().unwrap())).collect();
        assert_eq!(fields, [11, 544, 5, 0x3F, 0x1F]);
    }

    #[test]
    fn test_out_of_bounds_is_sentinel() {
        let table = build(toy);
        assert_eq!(lookup(&table, MAX_CP + 1), SENTINEL);
        assert_eq!(lookup(&table, u32::MAX), SENTINEL);
    }

    #[test]
    fn test_corrupt_buffer_is_sentinel() {
        let table = build(toy);
        assert_eq!(lookup(&table[..HEADER_LEN], 0x41), SENTINEL);
        assert_eq!(lookup(&[], 0x41), SENTINEL);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build(toy), build(toy));
        assert_eq!(
            build(|cp| crate::width::rules(cp).table_byte()),
            build(|cp| crate::width::rules(cp).table_byte()),
        );
    }

    #[test]
    fn test_dedup_shrinks_identical_blocks() {
        // Everything narrow: one stage-3 row and one stage-2 row suffice.
        let table = build(|_| 1);
        assert_eq!(table.len(), HEADER_LEN + 544 * 4 + 64 * 4 + 32);
    }
}
