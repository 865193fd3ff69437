use anyhow::{Context, Result};
use log::debug;
use regex::RegexBuilder;

use crate::{
    blocks::build_insn_blocks,
    citations::CitationTable,
    decode::{DecodeContext, Decoded},
    insn::{Entry, InsnBlock},
    instructions::Operation,
    SuperhVersion,
};

// A 32-bit DSP operation starts with `111110`; the remaining ten bits of its
// first halfword are the X/Y transfer fields of a `111100` transfer word.
const PARALLEL_MASK: u16 = 0xfc00;
const PARALLEL_OP: u16 = 0xf800;
const XY_TRANSFER: u16 = 0xf000;

/// The complete instruction table with citations attached.
#[derive(Clone, Debug)]
pub struct Isa {
    blocks: Vec<InsnBlock>,
}

impl Isa {
    /// Builds the table with the built-in citations.
    pub fn new() -> Result<Isa> {
        Isa::with_citations(&CitationTable::builtin()?)
    }

    pub fn with_citations(citations: &CitationTable) -> Result<Isa> {
        Ok(Isa {
            blocks: build_insn_blocks(citations)?,
        })
    }

    pub fn blocks(&self) -> &[InsnBlock] {
        &self.blocks
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().flat_map(|block| block.entries.iter())
    }

    pub fn for_version(&self, version: SuperhVersion) -> impl Iterator<Item = &Entry> {
        self.entries().filter(move |entry| entry.supports(version))
    }

    /// Entries whose format matches `pattern`, case-insensitively.
    pub fn find(&self, pattern: &str) -> Result<Vec<&Entry>> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("bad search pattern `{pattern}`"))?;

        Ok(self
            .entries()
            .filter(|entry| re.is_match(entry.insn.format))
            .collect())
    }

    /// Every entry matching the instruction at the start of `words`, 16-bit
    /// forms first. DSP double transfers match one X and one Y entry, and a
    /// 32-bit DSP operation carries its parallel transfers in `parallel`.
    pub fn decode(&self, words: &[u16], ctx: &DecodeContext) -> Vec<Decoded<'_>> {
        let Some(&first) = words.first() else {
            return vec![];
        };
        let long = words
            .get(1)
            .map(|&second| ((first as u32) << 16) | second as u32);

        let mut decoded = vec![];
        for entry in self.for_version(ctx.version) {
            if !entry.insn.mode.accepts(ctx.fpscr_sz, ctx.fpscr_pr) {
                continue;
            }
            let word = match (entry.encoding.size(), long) {
                (2, _) => first as u32,
                (_, Some(long)) => long,
                (_, None) => continue,
            };
            if !entry.encoding.matches(word) {
                continue;
            }

            match Decoded::new(entry, word, ctx.address) {
                Ok(mut insn) => {
                    if insn.size == 4 && first & PARALLEL_MASK == PARALLEL_OP {
                        insn.parallel = self.parallel_transfers(first, ctx);
                    }
                    decoded.push(insn);
                }
                Err(err) => debug!("{} does not apply to {word:#x}: {err:#}", entry.insn.format),
            }
        }

        decoded.sort_by_key(|insn| insn.size);
        decoded
    }

    /// The MOVX/MOVY half of a DSP operation's first halfword. Idle buses
    /// (NOPX/NOPY) are left out.
    fn parallel_transfers(&self, first: u16, ctx: &DecodeContext) -> Vec<Decoded<'_>> {
        let word = (XY_TRANSFER | (first & !PARALLEL_MASK)) as u32;

        self.for_version(ctx.version)
            .filter(|entry| {
                matches!(entry.mnemonic.operation, Operation::Movx | Operation::Movy)
                    && entry.encoding.matches(word)
            })
            .filter_map(|entry| Decoded::new(entry, word, ctx.address).ok())
            .collect()
    }

    /// Pairs of entries one CPU of `version` cannot tell apart.
    pub fn ambiguities(&self, version: SuperhVersion) -> Vec<(&Entry, &Entry)> {
        let entries = self.for_version(version).collect::<Vec<_>>();
        let mut pairs = vec![];

        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if (a.insn.environments & b.insn.environments & version).is_empty()
                    || !a.encoding.overlaps(&b.encoding)
                    || a.insn.mode.excludes(&b.insn.mode)
                    || is_xy_pair(a, b)
                {
                    continue;
                }
                pairs.push((*a, *b));
            }
        }

        pairs
    }
}

/// X and Y memory transfers are decoded side by side from one word.
fn is_xy_pair(a: &Entry, b: &Entry) -> bool {
    let x = |entry: &Entry| matches!(entry.mnemonic.operation, Operation::Movx | Operation::Nopx);
    let y = |entry: &Entry| matches!(entry.mnemonic.operation, Operation::Movy | Operation::Nopy);
    (x(a) && y(b)) || (y(a) && x(b))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::{citations::Manual, insn::FpscrMode};

    const CPUS: [SuperhVersion; 9] = [
        SuperhVersion::SH1,
        SuperhVersion::SH2,
        SuperhVersion::SH2E,
        SuperhVersion::SH2A,
        SuperhVersion::SH3,
        SuperhVersion::SH3E,
        SuperhVersion::SH4,
        SuperhVersion::SH4A,
        SuperhVersion::DSP,
    ];

    fn text(decoded: &Decoded) -> String {
        decoded.to_string().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn decode(isa: &Isa, words: &[u16], ctx: DecodeContext) -> Vec<String> {
        isa.decode(words, &ctx).iter().map(text).collect()
    }

    #[test]
    fn test_decode_sh4_words() {
        let isa = Isa::new().unwrap();
        let ctx = DecodeContext::new(SuperhVersion::SH4);

        assert_eq!(decode(&isa, &[0x6033], ctx), vec!["mov r3, r0"]);
        assert_eq!(decode(&isa, &[0x000b], ctx), vec!["rts"]);
        assert_eq!(decode(&isa, &[0x4f22], ctx), vec!["sts.l pr, @-r15"]);
        assert_eq!(decode(&isa, &[0xe0ff], ctx), vec!["mov #-1, r0"]);
        assert_eq!(decode(&isa, &[0x0009], ctx), vec!["nop"]);
    }

    #[test]
    fn test_version_filtering() {
        let isa = Isa::new().unwrap();
        // shad r1,r2 only exists from SH-3 on.
        assert!(isa
            .decode(&[0x421c], &DecodeContext::new(SuperhVersion::SH1))
            .is_empty());
        assert_eq!(
            decode(&isa, &[0x421c], DecodeContext::new(SuperhVersion::SH3)),
            vec!["shad r1, r2"]
        );
    }

    #[test]
    fn test_fpscr_size_selects_fmov_form() {
        let isa = Isa::new().unwrap();
        let mut ctx = DecodeContext::new(SuperhVersion::SH4);

        assert_eq!(decode(&isa, &[0xf24c], ctx), vec!["fmov fr4, fr2"]);
        ctx.fpscr_sz = true;
        assert_eq!(decode(&isa, &[0xf24c], ctx), vec!["fmov dr4, dr2"]);
    }

    #[test]
    fn test_dsp_double_transfer_matches_both_sides() {
        let isa = Isa::new().unwrap();
        let decoded = isa.decode(&[0xf000], &DecodeContext::new(SuperhVersion::DSP));
        let ops = decoded
            .iter()
            .map(|insn| insn.entry.mnemonic.operation)
            .collect::<Vec<_>>();
        assert_eq!(ops, vec![Operation::Nopx, Operation::Nopy]);
    }

    #[test]
    fn test_dsp_conditional_operations() {
        let isa = Isa::new().unwrap();
        let ctx = DecodeContext::new(SuperhVersion::DSP);

        assert_eq!(decode(&isa, &[0xf800, 0xda07], ctx), vec!["dct pcopy x0, a0"]);
        assert_eq!(decode(&isa, &[0xf800, 0xdb07], ctx), vec!["dcf pcopy x0, a0"]);
        assert_eq!(decode(&isa, &[0xf800, 0x9207], ctx), vec!["dct psha x0, y0, a0"]);
        assert_eq!(decode(&isa, &[0xf800, 0xef07], ctx), vec!["dcf plds a0, mach"]);
    }

    #[test]
    fn test_dsp_operation_with_parallel_transfer() {
        let isa = Isa::new().unwrap();
        let ctx = DecodeContext::new(SuperhVersion::DSP);

        // movx.w @r4+,x0 next to padd x0,y0,a0
        let decoded = isa.decode(&[0xf808, 0xb107], &ctx);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].parallel.len(), 1);
        assert_eq!(
            decoded[0].parallel[0].entry.mnemonic.operation,
            Operation::Movx
        );
        assert_eq!(text(&decoded[0]), "padd x0, y0, a0 movx.w @r4+, x0");

        // Both buses: movx.w @r4,x0 and movy.w @r6,y0.
        assert_eq!(
            decode(&isa, &[0xf805, 0xb107], ctx),
            vec!["padd x0, y0, a0 movx.w @r4, x0 movy.w @r6, y0"]
        );

        // NOPX and NOPY leave nothing to print.
        let decoded = isa.decode(&[0xf800, 0xb107], &ctx);
        assert!(decoded[0].parallel.is_empty());
        assert_eq!(text(&decoded[0]), "padd x0, y0, a0");
    }

    #[test]
    fn test_sh4a_saved_general_register_loads() {
        let isa = Isa::new().unwrap();
        let ctx = DecodeContext::new(SuperhVersion::SH4A);

        assert_eq!(decode(&isa, &[0x413a], ctx), vec!["ldc r1, sgr"]);
        assert_eq!(decode(&isa, &[0x4136], ctx), vec!["ldc.l @r1+, sgr"]);
        assert!(isa
            .decode(&[0x413a], &DecodeContext::new(SuperhVersion::SH4))
            .is_empty());
    }

    #[test]
    fn test_sh2a_32bit_decode() {
        let isa = Isa::new().unwrap();
        let ctx = DecodeContext::new(SuperhVersion::SH2A);

        // movi20 #0x12345,r1
        let decoded = isa.decode(&[0x0110, 0x2345], &ctx);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].size, 4);
        assert_eq!(text(&decoded[0]), "movi20 #0x12345, r1");

        // The second halfword is needed.
        assert!(isa.decode(&[0x0110], &ctx).is_empty());
    }

    #[test]
    fn test_no_ambiguities_per_cpu() {
        let isa = Isa::new().unwrap();
        for cpu in CPUS {
            let pairs = isa.ambiguities(cpu);
            assert!(
                pairs.is_empty(),
                "{cpu}: {:?}",
                pairs
                    .iter()
                    .map(|(a, b)| (a.insn.format, b.insn.format))
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_fpscr_modes_split_overlapping_encodings() {
        let isa = Isa::new().unwrap();
        let entries = isa.for_version(SuperhVersion::SH4).collect::<Vec<_>>();
        let split = |a: FpscrMode, b: FpscrMode| {
            entries.iter().any(|x| {
                x.insn.mode == a
                    && entries
                        .iter()
                        .any(|y| y.insn.mode == b && x.encoding.overlaps(&y.encoding))
            })
        };
        assert!(split(FpscrMode::Sz0, FpscrMode::Sz1));
        assert!(split(FpscrMode::Pr0, FpscrMode::Pr1));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let isa = Isa::new().unwrap();
        let found = isa.find(r"^dmuls\.l").unwrap();
        assert_eq!(found.len(), 1);
        assert!(isa.find("(").is_err());
    }

    #[test]
    fn test_builtin_citations_attached() {
        let isa = Isa::new().unwrap();
        let dmuls = isa.find(r"^DMULS\.L ").unwrap()[0];
        let manuals = dmuls
            .citations
            .iter()
            .map(|citation| citation.manual)
            .collect::<Vec<_>>();
        assert!(manuals.contains(&Manual::Sh4));
        assert!(manuals.contains(&Manual::Sh1Sh2));

        // SH-2A only, so only the SH-2A manual applies.
        let movi20 = isa.find(r"^MOVI20 ").unwrap()[0];
        assert!(!movi20.citations.is_empty());
        assert!(movi20
            .citations
            .iter()
            .all(|citation| citation.manual == Manual::Sh2a));
    }

    #[test]
    fn test_every_entry_is_cited() {
        let isa = Isa::new().unwrap();
        for entry in isa.entries() {
            assert!(!entry.citations.is_empty(), "{}", entry.insn.format);
        }
    }

    #[test]
    fn test_every_operation_has_a_record() {
        let isa = Isa::new().unwrap();
        let seen = isa
            .entries()
            .flat_map(|entry| entry.mnemonics().map(|mnemonic| mnemonic.operation))
            .collect::<HashSet<_>>();
        for op in Operation::iter() {
            assert!(seen.contains(&op), "{op} has no record");
        }
    }

    #[test]
    fn test_without_citations() {
        let isa = Isa::with_citations(&CitationTable::default()).unwrap();
        assert!(isa.entries().all(|entry| entry.citations.is_empty()));
        assert_eq!(isa.blocks().len(), 11);
    }
}
