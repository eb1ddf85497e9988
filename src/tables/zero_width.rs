// BEGIN: Generated by width-table-gen from UCD 16.0.0, with --out=src/tables, 222 blocks + 6 dense runs
use crate::bitset::{CodepointBitset, DenseRun};

/// Code points that occupy no terminal column: combining marks, format
/// controls, variation selectors, default-ignorables and the conjoining
/// Hangul jamo, minus the glibc carve-outs.
#[rustfmt::skip]
pub const ZERO_WIDTH: CodepointBitset = CodepointBitset {
    dense: &[
        DenseRun { first: 0x18, last: 0x1a, except: &[] }, // 0300..035F
        DenseRun { first: 0x8b, last: 0x8f, except: &[] }, // 1160..11FF
        DenseRun { first: 0xee, last: 0xef, except: &[] }, // 1DC0..1DFF
        DenseRun { first: 0xed0, last: 0xed2, except: &[0xed1] }, // 1DA00..1DA5F
        DenseRun { first: 0x7001, last: 0x7003, except: &[] }, // E0020..E007F
        DenseRun { first: 0x7008, last: 0x700e, except: &[] }, // E0100..E01DF
    ],
    blocks: &[
        (0x001b, 0x0000ffff), // 0360..036F
        (0x0024, 0x000003f8), // 0483..0489
        (0x002c, 0xfffe0000), // 0591..059F
        (0x002d, 0xbfffffff), // 05A0..05BF
        (0x002e, 0x000000b6), // 05C1..05C7
        (0x0030, 0x17ff003f), // 0600..061C
        (0x0032, 0xfffff800), // 064B..065F
        (0x0033, 0x00010000), // 0670..0670
        (0x0036, 0xbfc00000), // 06D6..06DF
        (0x0037, 0x00003d9f), // 06E0..06ED
        (0x0038, 0x00028000), // 070F..0711
        (0x0039, 0xffff0000), // 0730..073F
        (0x003a, 0x000007ff), // 0740..074A
        (0x003d, 0x0001ffc0), // 07A6..07B0
        (0x003f, 0x200ff800), // 07EB..07FD
        (0x0040, 0xfbc00000), // 0816..081F
        (0x0041, 0x00003eef), // 0820..082D
        (0x0042, 0x0e000000), // 0859..085B
        (0x0044, 0xff830000), // 0890..089F
        (0x0046, 0xfffffc00), // 08CA..08DF
        (0x0047, 0xffffffff), // 08E0..08FF
        (0x0048, 0x00000007), // 0900..0902
        (0x0049, 0x14000000), // 093A..093C
        (0x004a, 0x00fe21fe), // 0941..0957
        (0x004b, 0x0000000c), // 0962..0963
        (0x004c, 0x00000002), // 0981..0981
        (0x004d, 0x10000000), // 09BC..09BC
        (0x004e, 0x0000201e), // 09C1..09CD
        (0x004f, 0x4000000c), // 09E2..09FE
        (0x0050, 0x00000006), // 0A01..0A02
        (0x0051, 0x10000000), // 0A3C..0A3C
        (0x0052, 0x00023986), // 0A41..0A51
        (0x0053, 0x00230000), // 0A70..0A75
        (0x0054, 0x00000006), // 0A81..0A82
        (0x0055, 0x10000000), // 0ABC..0ABC
        (0x0056, 0x000021be), // 0AC1..0ACD
        (0x0057, 0xfc00000c), // 0AE2..0AFF
        (0x0058, 0x00000002), // 0B01..0B01
        (0x0059, 0x90000000), // 0B3C..0B3F
        (0x005a, 0x0060201e), // 0B41..0B56
        (0x005b, 0x0000000c), // 0B62..0B63
        (0x005c, 0x00000004), // 0B82..0B82
        (0x005e, 0x00002001), // 0BC0..0BCD
        (0x0060, 0x00000011), // 0C00..0C04
        (0x0061, 0xd0000000), // 0C3C..0C3F
        (0x0062, 0x00603dc1), // 0C40..0C56
        (0x0063, 0x0000000c), // 0C62..0C63
        (0x0064, 0x00000002), // 0C81..0C81
        (0x0065, 0x90000000), // 0CBC..0CBF
        (0x0066, 0x00003040), // 0CC6..0CCD
        (0x0067, 0x0000000c), // 0CE2..0CE3
        (0x0068, 0x00000003), // 0D00..0D01
        (0x0069, 0x18000000), // 0D3B..0D3C
        (0x006a, 0x0000201e), // 0D41..0D4D
        (0x006b, 0x0000000c), // 0D62..0D63
        (0x006c, 0x00000002), // 0D81..0D81
        (0x006e, 0x005c0400), // 0DCA..0DD6
        (0x0071, 0x07f20000), // 0E31..0E3A
        (0x0072, 0x00007f80), // 0E47..0E4E
        (0x0075, 0x1ff20000), // 0EB1..0EBC
        (0x0076, 0x00007f00), // 0EC8..0ECE
        (0x0078, 0x03000000), // 0F18..0F19
        (0x0079, 0x02a00000), // 0F35..0F39
        (0x007b, 0x7ffe0000), // 0F71..0F7E
        (0x007c, 0xfeffe0df), // 0F80..0F9F
        (0x007d, 0x1fffffff), // 0FA0..0FBC
        (0x007e, 0x00000040), // 0FC6..0FC6
        (0x0081, 0x66fde000), // 102D..103E
        (0x0082, 0xc3000000), // 1058..105F
        (0x0083, 0x001e0001), // 1060..1074
        (0x0084, 0x20002064), // 1082..109D
        (0x009a, 0xe0000000), // 135D..135F
        (0x00b8, 0x001c0000), // 1712..1714
        (0x00b9, 0x000c0000), // 1732..1733
        (0x00ba, 0x000c0000), // 1752..1753
        (0x00bb, 0x000c0000), // 1772..1773
        (0x00bd, 0x3fb00000), // 17B4..17BD
        (0x00be, 0x200ffe40), // 17C6..17DD
        (0x00c0, 0x0000f800), // 180B..180F
        (0x00c4, 0x00000060), // 1885..1886
        (0x00c5, 0x00000200), // 18A9..18A9
        (0x00c9, 0x0e040187), // 1920..193B
        (0x00d0, 0x09800000), // 1A17..1A1B
        (0x00d2, 0x7f400000), // 1A56..1A5E
        (0x00d3, 0x9ff81fe5), // 1A60..1A7F
        (0x00d5, 0xffff0000), // 1AB0..1ABF
        (0x00d6, 0x00007fff), // 1AC0..1ACE
        (0x00d8, 0x0000000f), // 1B00..1B03
        (0x00d9, 0x17d00000), // 1B34..1B3C
        (0x00da, 0x00000004), // 1B42..1B42
        (0x00db, 0x000ff800), // 1B6B..1B73
        (0x00dc, 0x00000003), // 1B80..1B81
        (0x00dd, 0x00003b3c), // 1BA2..1BAD
        (0x00df, 0x0003a340), // 1BE6..1BF1
        (0x00e1, 0x00cff000), // 1C2C..1C37
        (0x00e6, 0xfff70000), // 1CD0..1CDF
        (0x00e7, 0x031021fd), // 1CE0..1CF9
        (0x0100, 0x0000f800), // 200B..200F
        (0x0101, 0x00007c00), // 202A..202E
        (0x0103, 0x0000ffdf), // 2060..206F
        (0x0106, 0xffff0000), // 20D0..20DF
        (0x0107, 0x0001ffff), // 20E0..20F0
        (0x0167, 0x00038000), // 2CEF..2CF1
        (0x016b, 0x80000000), // 2D7F..2D7F
        (0x016f, 0xffffffff), // 2DE0..2DFF
        (0x0181, 0x00003c00), // 302A..302D
        (0x0184, 0x06000000), // 3099..309A
        (0x0533, 0x3ff78000), // A66F..A67D
        (0x0534, 0xc0000000), // A69E..A69F
        (0x0537, 0x00030000), // A6F0..A6F1
        (0x0540, 0x00000844), // A802..A80B
        (0x0541, 0x00001060), // A825..A82C
        (0x0546, 0x00000030), // A8C4..A8C5
        (0x0547, 0x8003ffff), // A8E0..A8FF
        (0x0549, 0x00003fc0), // A926..A92D
        (0x054a, 0x0003ff80), // A947..A951
        (0x054c, 0x00000007), // A980..A982
        (0x054d, 0x33c80000), // A9B3..A9BD
        (0x054f, 0x00000020), // A9E5..A9E5
        (0x0551, 0x00667e00), // AA29..AA36
        (0x0552, 0x00001008), // AA43..AA4C
        (0x0553, 0x10000000), // AA7C..AA7C
        (0x0555, 0xc19d0000), // AAB0..AABF
        (0x0556, 0x00000002), // AAC1..AAC1
        (0x0557, 0x00403000), // AAEC..AAF6
        (0x055f, 0x00002120), // ABE5..ABED
        (0x06bd, 0xffff0000), // D7B0..D7BF
        (0x06be, 0xfffff87f), // D7C0..D7DF
        (0x06bf, 0x0fffffff), // D7E0..D7FB
        (0x07d8, 0x40000000), // FB1E..FB1E
        (0x07f0, 0x0000ffff), // FE00..FE0F
        (0x07f1, 0x0000ffff), // FE20..FE2F
        (0x07f7, 0x80000000), // FEFF..FEFF
        (0x080f, 0x20000000), // 101FD..101FD
        (0x0817, 0x00000001), // 102E0..102E0
        (0x081b, 0x07c00000), // 10376..1037A
        (0x0850, 0x0000f06e), // 10A01..10A0F
        (0x0851, 0x87000000), // 10A38..10A3F
        (0x0857, 0x00000060), // 10AE5..10AE6
        (0x0869, 0x000000f0), // 10D24..10D27
        (0x0875, 0x00001800), // 10EAB..10EAC
        (0x087a, 0x0001ffc0), // 10F46..10F50
        (0x0880, 0x00000002), // 11001..11001
        (0x0881, 0xff000000), // 11038..1103F
        (0x0882, 0x0000007f), // 11040..11046
        (0x0883, 0x80190000), // 11070..1107F
        (0x0884, 0x00000003), // 11080..11081
        (0x0885, 0x26780000), // 110B3..110BD
        (0x0886, 0x00002004), // 110C2..110CD
        (0x0888, 0x00000007), // 11100..11102
        (0x0889, 0x001fef80), // 11127..11134
        (0x088b, 0x00080000), // 11173..11173
        (0x088c, 0x00000003), // 11180..11181
        (0x088d, 0x7fc00000), // 111B6..111BE
        (0x088e, 0x00009e00), // 111C9..111CF
        (0x0891, 0x40d38000), // 1122F..1123E
        (0x0892, 0x00000002), // 11241..11241
        (0x0896, 0x80000000), // 112DF..112DF
        (0x0897, 0x000007f8), // 112E3..112EA
        (0x0898, 0x00000003), // 11300..11301
        (0x0899, 0x18000000), // 1133B..1133C
        (0x089a, 0x00000001), // 11340..11340
        (0x089b, 0x001f1fc0), // 11366..11374
        (0x08a1, 0xff000000), // 11438..1143F
        (0x08a2, 0x4000005c), // 11442..1145E
        (0x08a5, 0x85f80000), // 114B3..114BF
        (0x08a6, 0x0000000d), // 114C0..114C3
        (0x08ad, 0xb03c0000), // 115B2..115BF
        (0x08ae, 0x30000000), // 115DC..115DD
        (0x08b1, 0xa7f80000), // 11633..1163F
        (0x08b2, 0x00000001), // 11640..11640
        (0x08b5, 0x00bf2800), // 116AB..116B7
        (0x08b8, 0xe0000000), // 1171D..1171F
        (0x08b9, 0x00000fbc), // 11722..1172B
        (0x08c1, 0x06ff8000), // 1182F..1183A
        (0x08c9, 0x58000000), // 1193B..1193E
        (0x08ca, 0x00000008), // 11943..11943
        (0x08ce, 0x0cf00000), // 119D4..119DB
        (0x08cf, 0x00000001), // 119E0..119E0
        (0x08d0, 0x000007fe), // 11A01..11A0A
        (0x08d1, 0x79f80000), // 11A33..11A3E
        (0x08d2, 0x0e7e0080), // 11A47..11A5B
        (0x08d4, 0x037ffc00), // 11A8A..11A99
        (0x08e1, 0xbf7f0000), // 11C30..11C3F
        (0x08e4, 0xfffc0000), // 11C92..11C9F
        (0x08e5, 0x006dfcff), // 11CA0..11CB6
        (0x08e9, 0xb47e0000), // 11D31..11D3F
        (0x08ea, 0x000000bf), // 11D40..11D47
        (0x08ec, 0x00a30000), // 11D90..11D97
        (0x08f7, 0x00180000), // 11EF3..11EF4
        (0x08f8, 0x00000003), // 11F00..11F01
        (0x08f9, 0x07c00000), // 11F36..11F3A
        (0x08fa, 0x00000005), // 11F40..11F42
        (0x09a2, 0x003fff81), // 13440..13455
        (0x0b57, 0x001f0000), // 16AF0..16AF4
        (0x0b59, 0x007f0000), // 16B30..16B36
        (0x0b7a, 0x00008000), // 16F4F..16F4F
        (0x0b7c, 0x00078000), // 16F8F..16F92
        (0x0b7f, 0x00000010), // 16FE4..16FE4
        (0x0de4, 0x60000000), // 1BC9D..1BC9E
        (0x0de5, 0x0000000f), // 1BCA0..1BCA3
        (0x0e78, 0xffffffff), // 1CF00..1CF1F
        (0x0e79, 0xffff3fff), // 1CF20..1CF3F
        (0x0e7a, 0x0000007f), // 1CF40..1CF46
        (0x0e8b, 0xffffe3e0), // 1D165..1D17F
        (0x0e8c, 0x00000fe7), // 1D180..1D18B
        (0x0e8d, 0x00003c00), // 1D1AA..1D1AD
        (0x0e92, 0x0000001c), // 1D242..1D244
        (0x0ed1, 0xf87fffff), // 1DA20..1DA3F
        (0x0ed3, 0x00201fff), // 1DA60..1DA75
        (0x0ed4, 0xf8000010), // 1DA84..1DA9F
        (0x0ed5, 0x0000fffe), // 1DAA1..1DAAF
        (0x0f00, 0xf9ffff7f), // 1E000..1E01F
        (0x0f01, 0x000007db), // 1E020..1E02A
        (0x0f09, 0x007f0000), // 1E130..1E136
        (0x0f15, 0x00004000), // 1E2AE..1E2AE
        (0x0f17, 0x0000f000), // 1E2EC..1E2EF
        (0x0f27, 0x0000f000), // 1E4EC..1E4EF
        (0x0f46, 0x007f0000), // 1E8D0..1E8D6
        (0x0f4a, 0x000007f0), // 1E944..1E94A
        (0x7000, 0x00000002), // E0001..E0001
        (0x700f, 0x0000ffff), // E01E0..E01EF
    ],
};
// END: Generated by width-table-gen
