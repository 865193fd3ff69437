//! The instruction tables, one static array per block.

use anyhow::{Context, Result};
use log::trace;

use crate::{
    citations::CitationTable,
    insn::{Entry, Exception, Insn, InsnBlock},
    SuperhVersion,
};

mod arithmetic;
mod bit_manipulation;
mod branch;
mod data_transfer;
mod dsp_arithmetic;
mod dsp_transfer;
mod fpu;
mod fpu_system;
mod logic;
mod shift;
mod system;

// Shorthands shared by the tables.
use crate::flags::TBit;
use crate::insn::{Cycles, FpscrMode, IssueGroup::*};

const SH2_UP: SuperhVersion = SuperhVersion::SH2_UP;
const SH3_UP: SuperhVersion = SuperhVersion::SH3_UP;
const SH4_UP: SuperhVersion = SuperhVersion::SH4_UP;
const SH4A: SuperhVersion = SuperhVersion::SH4A;
const SH2A: SuperhVersion = SuperhVersion::SH2A;
const DSP: SuperhVersion = SuperhVersion::DSP;
const FPU: SuperhVersion = SuperhVersion::FPU;
const DOUBLE_FPU: SuperhVersion = SuperhVersion::DOUBLE_FPU;
/// SH-3 and later plus SH-2A, for SHAD/SHLD and friends.
const SH3_UP_SH2A: SuperhVersion = SH3_UP.union(SH2A);
/// SH-1 and SH-2 class cores, for their timing overrides.
const SH1_SH2: SuperhVersion = SuperhVersion::SH1
    .union(SuperhVersion::SH2)
    .union(SuperhVersion::SH2E)
    .union(DSP);

use Exception::*;

const LOAD: &[Exception] = &[DataTlbMissRead, DataTlbProtectionRead, DataAddressErrorRead];
const STORE: &[Exception] = &[
    DataTlbMissWrite,
    DataTlbProtectionWrite,
    InitialPageWrite,
    DataAddressErrorWrite,
];
const LOAD_STORE: &[Exception] = &[
    DataTlbMissRead,
    DataTlbProtectionRead,
    DataAddressErrorRead,
    DataTlbMissWrite,
    DataTlbProtectionWrite,
    InitialPageWrite,
    DataAddressErrorWrite,
];
const SLOT: &[Exception] = &[SlotIllegalInstruction];
const PRIVILEGED: &[Exception] = &[GeneralIllegalInstruction, SlotIllegalInstruction];
const PRIVILEGED_LOAD: &[Exception] = &[
    GeneralIllegalInstruction,
    SlotIllegalInstruction,
    DataTlbMissRead,
    DataTlbProtectionRead,
    DataAddressErrorRead,
];
const PRIVILEGED_STORE: &[Exception] = &[
    GeneralIllegalInstruction,
    SlotIllegalInstruction,
    DataTlbMissWrite,
    DataTlbProtectionWrite,
    InitialPageWrite,
    DataAddressErrorWrite,
];
const FPU_DISABLE: &[Exception] = &[FpuDisable, SlotFpuDisable];
const FPU_LOAD: &[Exception] = &[
    FpuDisable,
    SlotFpuDisable,
    DataTlbMissRead,
    DataTlbProtectionRead,
    DataAddressErrorRead,
];
const FPU_STORE: &[Exception] = &[
    FpuDisable,
    SlotFpuDisable,
    DataTlbMissWrite,
    DataTlbProtectionWrite,
    InitialPageWrite,
    DataAddressErrorWrite,
];
const FPU_ARITH: &[Exception] = &[
    FpuDisable,
    SlotFpuDisable,
    FpuInvalidOperation,
    FpuOverflow,
    FpuUnderflow,
    FpuInexact,
    FpuError,
];
const FPU_DIVIDE: &[Exception] = &[
    FpuDisable,
    SlotFpuDisable,
    FpuInvalidOperation,
    FpuDivisionByZero,
    FpuOverflow,
    FpuUnderflow,
    FpuInexact,
    FpuError,
];
const FPU_INVALID: &[Exception] = &[FpuDisable, SlotFpuDisable, FpuInvalidOperation, FpuError];

/// Builds every block and runs the citation pass over the result.
pub fn build_insn_blocks(citations: &CitationTable) -> Result<Vec<InsnBlock>> {
    let tables: [(&'static str, &'static [Insn]); 11] = [
        ("Data Transfer Instructions", data_transfer::INSNS),
        ("Arithmetic Operation Instructions", arithmetic::INSNS),
        ("Logic Operation Instructions", logic::INSNS),
        ("Shift Instructions", shift::INSNS),
        ("Branch Instructions", branch::INSNS),
        ("System Control Instructions", system::INSNS),
        ("Floating-Point Instructions", fpu::INSNS),
        ("FPU-Related CPU Instructions", fpu_system::INSNS),
        ("Bit Manipulation Instructions", bit_manipulation::INSNS),
        ("DSP Data Transfer Instructions", dsp_transfer::INSNS),
        ("DSP Operation Instructions", dsp_arithmetic::INSNS),
    ];

    let mut blocks = vec![];
    for (name, insns) in tables {
        trace!("Building {name} ({} records)", insns.len());
        let entries = insns
            .iter()
            .map(Entry::new)
            .collect::<Result<Vec<Entry>>>()
            .with_context(|| format!("in block `{name}`"))?;
        blocks.push(InsnBlock { name, entries });
    }

    for entry in blocks.iter_mut().flat_map(|block| block.entries.iter_mut()) {
        citations.cite(entry);
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn blocks() -> Vec<InsnBlock> {
        build_insn_blocks(&CitationTable::default()).unwrap()
    }

    #[test]
    fn test_every_record_builds() {
        let blocks = blocks();
        assert_eq!(blocks.len(), 11);
        assert!(blocks.iter().all(|block| !block.entries.is_empty()));
    }

    #[test]
    fn test_formats_are_unique_per_environment() {
        let mut seen = HashSet::new();
        for entry in blocks().iter().flat_map(|block| block.entries.iter()) {
            for tag in entry.insn.environments.tags() {
                assert!(
                    seen.insert((entry.insn.format, entry.insn.mode, tag)),
                    "{} listed twice for {tag}",
                    entry.insn.format
                );
            }
        }
    }

    #[test]
    fn test_records_are_documented() {
        for entry in blocks().iter().flat_map(|block| block.entries.iter()) {
            assert!(!entry.insn.abstr.is_empty(), "{}", entry.insn.format);
            assert!(!entry.insn.description.is_empty(), "{}", entry.insn.format);
            assert!(!entry.insn.environments.is_empty(), "{}", entry.insn.format);
            assert!(!entry.insn.operation.is_empty(), "{}", entry.insn.format);
            assert!(!entry.insn.example.is_empty(), "{}", entry.insn.format);
        }
    }

    #[test]
    fn test_fpu_timing_differs_per_cpu() {
        let blocks = blocks();
        let fdiv = blocks
            .iter()
            .flat_map(|block| block.entries.iter())
            .find(|entry| entry.insn.format == "FDIV FRm,FRn")
            .unwrap();

        assert_eq!(fdiv.insn.cycles_on(SuperhVersion::SH4), ("1", "12/13"));
        assert_eq!(fdiv.insn.cycles_on(SuperhVersion::SH2E), ("13", "14"));
        assert_eq!(fdiv.insn.cycles_on(SuperhVersion::SH3E), ("13", "14"));
        assert_eq!(fdiv.insn.cycles_on(SuperhVersion::SH2A), ("10", "12"));
        assert_eq!(fdiv.insn.cycles_on(SuperhVersion::SH4A), ("1", "14"));
    }

    #[test]
    fn test_t_bit_of_tests_and_conditional_branches() {
        use crate::{flags::TBit, instructions::Operation};

        for entry in blocks().iter().flat_map(|block| block.entries.iter()) {
            match entry.mnemonic.operation {
                Operation::Tst | Operation::Cmp | Operation::Tas => {
                    assert!(entry.insn.t_bit.writes(), "{}", entry.insn.format)
                }
                Operation::Bt | Operation::Bf => {
                    assert_eq!(entry.insn.t_bit, TBit::Tested, "{}", entry.insn.format)
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_delay_slot_instructions_raise_slot_illegal() {
        for entry in blocks().iter().flat_map(|block| block.entries.iter()) {
            if entry.insn.delay_slot {
                assert!(
                    entry.insn.exceptions.contains(&SlotIllegalInstruction),
                    "{}",
                    entry.insn.format
                );
            }
        }
    }

    #[test]
    fn test_no_citations_without_table() {
        assert!(blocks()
            .iter()
            .flat_map(|block| block.entries.iter())
            .all(|entry| entry.citations.is_empty()));
    }
}
