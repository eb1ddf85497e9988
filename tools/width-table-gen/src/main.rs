// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod bitset;
mod ucd;

use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::PathBuf;

use anyhow::{Context, bail, ensure};
use cellwidth::{classify_with, table};
use indoc::writedoc;
use rayon::prelude::*;

use crate::bitset::CompiledBitset;
use crate::ucd::{CodepointSet, Filter};

const HELP: &str = "\
Usage: width-table-gen [options...] <ucd-dir>
  -h, --help        Prints help information
  --out=<dir>       Write the generated bitset modules into <dir>
                    (default: print them to stdout)
  --table=<path>    Also write the binary multi-level width table

<ucd-dir> must contain these plain-text UCD tables, either flat or in the
layout of the published zip (extracted/ subdirectory):
  DerivedGeneralCategory.txt   DerivedCoreProperties.txt   PropList.txt
  HangulSyllableType.txt       EastAsianWidth.txt          DerivedCombiningClass.txt

Download them at: https://www.unicode.org/Public/UCD/latest/ucd/
";

// The format-control and ignorable properties over-include characters
// that terminals must still render with nonzero width. Permanent policy,
// matching glibc's wcwidth.
const CARVE_OUTS: [(u32, u32); 6] = [
    (0x00AD, 0x00AD), // SOFT HYPHEN
    (0x115F, 0x115F), // HANGUL CHOSEONG FILLER
    (0x3164, 0x3164), // HANGUL FILLER
    (0xFFA0, 0xFFA0), // HALFWIDTH HANGUL FILLER
    (0xFFF9, 0xFFFB), // INTERLINEAR ANNOTATION ANCHOR..TERMINATOR
    (0x13430, 0x1343F), // EGYPTIAN HIEROGLYPH VERTICAL JOINER..END WALLED ENCLOSURE
];

fn main() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        eprint!("{HELP}");
        return Ok(());
    }

    let arg_out: Option<PathBuf> =
        args.opt_value_from_os_str("--out", |s| -> Result<PathBuf, &'static str> { Ok(s.into()) })?;
    let arg_table: Option<PathBuf> = args
        .opt_value_from_os_str("--table", |s| -> Result<PathBuf, &'static str> { Ok(s.into()) })?;
    let arg_ucd =
        args.free_from_os_str(|s| -> Result<PathBuf, &'static str> { Ok(s.into()) })?;
    let arg_remaining = args.finish();
    if !arg_remaining.is_empty() {
        bail!("unrecognized arguments: {:?}", arg_remaining);
    }

    let mut args_desc = String::new();
    if let Some(dir) = &arg_out {
        _ = write!(args_desc, "--out={}", dir.display());
    }
    if let Some(path) = &arg_table {
        if !args_desc.is_empty() {
            args_desc.push(' ');
        }
        _ = write!(args_desc, "--table={}", path.display());
    }
    if args_desc.is_empty() {
        args_desc.push_str("defaults");
    }

    // Load everything up front so a missing file fails before any work,
    // and so the pinned Unicode version can be cross-checked.
    let gc = ucd::load(&arg_ucd, "DerivedGeneralCategory.txt")?;
    let core = ucd::load(&arg_ucd, "DerivedCoreProperties.txt")?;
    let props = ucd::load(&arg_ucd, "PropList.txt")?;
    let hangul = ucd::load(&arg_ucd, "HangulSyllableType.txt")?;
    let east_asian = ucd::load(&arg_ucd, "EastAsianWidth.txt")?;
    let ccc = ucd::load(&arg_ucd, "DerivedCombiningClass.txt")?;

    let version = consistent_version(&[&gc, &core, &props, &hangul, &east_asian, &ccc])?;

    // The extractions are independent of each other.
    let jobs: [(&str, &str, Filter); 8] = [
        ("gc=Cf", &gc, Filter::Value("Cf")),
        ("Grapheme_Extend", &core, Filter::Value("Grapheme_Extend")),
        ("Default_Ignorable_Code_Point", &core, Filter::Value("Default_Ignorable_Code_Point")),
        ("Variation_Selector", &props, Filter::Value("Variation_Selector")),
        ("hst=V", &hangul, Filter::Value("V")),
        ("hst=T", &hangul, Filter::Value("T")),
        ("ea=A", &east_asian, Filter::Value("A")),
        ("ccc>0", &ccc, Filter::NonZero),
    ];
    let sets = jobs
        .par_iter()
        .map(|&(what, text, filter)| {
            let set = ucd::parse(text, filter).with_context(|| format!("extracting {what}"))?;
            ensure!(!set.is_empty(), "extracting {what}: empty result");
            Ok(set)
        })
        .collect::<anyhow::Result<Vec<CodepointSet>>>()?;
    let [cf, grapheme_extend, ignorable, selectors, hangul_v, hangul_t, ambiguous, combining] =
        <[CodepointSet; 8]>::try_from(sets).unwrap();

    // The zero-width set: everything the terminal advances zero columns
    // over, minus the carve-outs above.
    let mut zero_width = cf
        .union(&grapheme_extend)
        .union(&ignorable)
        .union(&selectors)
        .union(&hangul_v)
        .union(&hangul_t)
        .union(&combining);
    for (first, last) in CARVE_OUTS {
        zero_width = zero_width.remove_range(first, last);
    }

    let zero_width_bits = bitset::compile(&zero_width);
    let ambiguous_bits = bitset::compile(&ambiguous);

    // The dense-range collapse is a size optimization only; prove that
    // membership survived it before emitting anything.
    for cp in 0..=ucd::MAX_CP {
        if zero_width_bits.contains(cp) != zero_width.contains(cp) {
            bail!("zero-width bitset diverges at U+{cp:04X}");
        }
        if ambiguous_bits.contains(cp) != ambiguous.contains(cp) {
            bail!("ambiguous bitset diverges at U+{cp:04X}");
        }
    }

    // The lookup table is compiled from the freshly extracted data, not
    // from the bitsets shipped with the library, so that all artifacts of
    // one run describe the same UCD version.
    let classify = |cp: u32| classify_with(cp, |cp| zero_width.contains(cp)).table_byte();
    let width_table = table::build(classify);
    for cp in 0..=ucd::MAX_CP {
        if table::lookup(&width_table, cp) != classify(cp) {
            bail!("table sanity check failed for U+{cp:04X}");
        }
    }
    if table::lookup(&width_table, ucd::MAX_CP + 1) != table::SENTINEL {
        bail!("table sanity check failed past the code point space");
    }

    let zero_width_src = generate_bitset(
        "ZERO_WIDTH",
        "/// Code points that occupy no terminal column: combining marks, format\n\
         /// controls, variation selectors, default-ignorables and the conjoining\n\
         /// Hangul jamo, minus the glibc carve-outs.",
        &zero_width_bits,
        &version,
        &args_desc,
    );
    let ambiguous_src = generate_bitset(
        "AMBIGUOUS",
        "/// East Asian Width category \"A\": one column by default, two columns\n\
         /// under the CJK-legacy policy.",
        &ambiguous_bits,
        &version,
        &args_desc,
    );

    match &arg_out {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            std::fs::write(dir.join("zero_width.rs"), &zero_width_src)?;
            std::fs::write(dir.join("ambiguous.rs"), &ambiguous_src)?;
            eprintln!("wrote {}/{{zero_width,ambiguous}}.rs", dir.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(zero_width_src.as_bytes())?;
            out.write_all(b"\n")?;
            out.write_all(ambiguous_src.as_bytes())?;
        }
    }

    if let Some(path) = &arg_table {
        std::fs::write(path, &width_table)?;
        eprintln!("wrote {} ({} bytes)", path.display(), width_table.len());
    }

    Ok(())
}

/// All inputs must carry the same `# <Name>-<version>.txt` header;
/// artifacts from mixed UCD versions must never be generated.
fn consistent_version(texts: &[&str]) -> anyhow::Result<String> {
    let mut versions: Vec<String> = texts.iter().filter_map(|t| ucd::detect_version(t)).collect();
    versions.sort();
    versions.dedup();
    match versions.as_slice() {
        [] => bail!("no UCD version header found in any input"),
        [version] => Ok(version.clone()),
        _ => bail!("mixed UCD versions: {versions:?}"),
    }
}

fn generate_bitset(
    name: &str,
    doc: &str,
    compiled: &CompiledBitset,
    version: &str,
    args: &str,
) -> String {
    let mut buf = String::new();

    _ = writeln!(
        buf,
        "// BEGIN: Generated by width-table-gen from UCD {}, with {}, {} blocks + {} dense runs",
        version,
        args,
        compiled.blocks.len(),
        compiled.dense.len(),
    );
    buf.push_str("use crate::bitset::{CodepointBitset, DenseRun};\n\n");
    buf.push_str(doc);
    buf.push('\n');

    _ = writedoc!(
        buf,
        "
        #[rustfmt::skip]
        pub const {name}: CodepointBitset = CodepointBitset {{
            dense: &[
        "
    );
    for run in &compiled.dense {
        let except: Vec<String> = run.except.iter().map(|b| format!("{b:#x}")).collect();
        _ = writeln!(
            buf,
            "        DenseRun {{ first: {:#x}, last: {:#x}, except: &[{}] }}, // {:04X}..{:04X}",
            run.first,
            run.last,
            except.join(", "),
            run.first << 5,
            (run.last << 5) | 31,
        );
    }
    buf.push_str("    ],\n    blocks: &[\n");
    for &(block, mask) in &compiled.blocks {
        _ = writeln!(
            buf,
            "        ({:#06x}, {:#010x}), // {:04X}..{:04X}",
            block,
            mask,
            (block << 5) | mask.trailing_zeros(),
            (block << 5) | (31 - mask.leading_zeros()),
        );
    }
    buf.push_str("    ],\n};\n// END: Generated by width-table-gen\n");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_module_shape() {
        let compiled = CompiledBitset {
            dense: vec![bitset::DenseRun { first: 0x18, last: 0x1b, except: vec![] }],
            blocks: vec![(0x24, 0x3f8)],
        };
        let src = generate_bitset("ZERO_WIDTH", "/// Test.", &compiled, "16.0.0", "defaults");
        let expected = "\
// BEGIN: Generated by width-table-gen from UCD 16.0.0, with defaults, 1 blocks + 1 dense runs
use crate::bitset::{CodepointBitset, DenseRun};

/// Test.
#[rustfmt::skip]
pub const ZERO_WIDTH: CodepointBitset = CodepointBitset {
    dense: &[
        DenseRun { first: 0x18, last: 0x1b, except: &[] }, // 0300..037F
    ],
    blocks: &[
        (0x0024, 0x000003f8), // 0483..0489
    ],
};
// END: Generated by width-table-gen
";
        assert_eq!(src, expected);
    }

    #[test]
    fn test_consistent_version() {
        let a = "# DerivedGeneralCategory-16.0.0.txt";
        let b = "# EastAsianWidth-16.0.0.txt";
        let c = "# EastAsianWidth-15.1.0.txt";
        assert_eq!(consistent_version(&[a, b]).unwrap(), "16.0.0");
        assert!(consistent_version(&[a, c]).is_err());
        assert!(consistent_version(&["no header"]).is_err());
    }

    #[test]
    fn test_carve_outs_are_narrow() {
        for (first, last) in CARVE_OUTS {
            for cp in first..=last {
                // Nothing zero-width left after removal; all carve-outs
                // print one column except the choseong filler.
                let width = classify_with(cp, |_| false);
                let expected = if cp == 0x115F { 2 } else { 1 };
                assert_eq!(width.columns(), expected, "U+{cp:04X}");
            }
        }
    }
}
