use std::fmt;

use anyhow::{bail, Context, Result};

use crate::{
    citations::Citation,
    encoding::Encoding,
    flags::TBit,
    instructions::Mnemonic,
    operands::{parse_format, FormatPart},
    SuperhVersion,
};

/// SH-4 issue group, used for the dual-issue pairing rules.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IssueGroup {
    Mt,
    Ex,
    Br,
    Ls,
    Fe,
    Co,
}

impl fmt::Display for IssueGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IssueGroup::Mt => "MT",
            IssueGroup::Ex => "EX",
            IssueGroup::Br => "BR",
            IssueGroup::Ls => "LS",
            IssueGroup::Fe => "FE",
            IssueGroup::Co => "CO",
        })
    }
}

/// The FPSCR setting an encoding is decoded under.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FpscrMode {
    #[default]
    Any,
    Sz0,
    Sz1,
    Pr0,
    Pr1,
}

impl FpscrMode {
    pub fn accepts(&self, fpscr_sz: bool, fpscr_pr: bool) -> bool {
        match self {
            FpscrMode::Any => true,
            FpscrMode::Sz0 => !fpscr_sz,
            FpscrMode::Sz1 => fpscr_sz,
            FpscrMode::Pr0 => !fpscr_pr,
            FpscrMode::Pr1 => fpscr_pr,
        }
    }

    /// Two modes that can never hold at the same time.
    pub fn excludes(&self, other: &FpscrMode) -> bool {
        matches!(
            (self, other),
            (FpscrMode::Sz0, FpscrMode::Sz1)
                | (FpscrMode::Sz1, FpscrMode::Sz0)
                | (FpscrMode::Pr0, FpscrMode::Pr1)
                | (FpscrMode::Pr1, FpscrMode::Pr0)
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Exception {
    SlotIllegalInstruction,
    GeneralIllegalInstruction,
    DataTlbMissRead,
    DataTlbMissWrite,
    DataTlbProtectionRead,
    DataTlbProtectionWrite,
    InitialPageWrite,
    DataAddressErrorRead,
    DataAddressErrorWrite,
    InstructionTlbMiss,
    InstructionAddressError,
    FpuDisable,
    SlotFpuDisable,
    FpuInvalidOperation,
    FpuDivisionByZero,
    FpuOverflow,
    FpuUnderflow,
    FpuInexact,
    FpuError,
    IntegerDivisionByZero,
    IntegerOverflow,
    UnconditionalTrap,
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Exception::SlotIllegalInstruction => "Slot illegal instruction",
            Exception::GeneralIllegalInstruction => "General illegal instruction",
            Exception::DataTlbMissRead => "Data TLB miss exception (read)",
            Exception::DataTlbMissWrite => "Data TLB miss exception (write)",
            Exception::DataTlbProtectionRead => "Data TLB protection violation exception (read)",
            Exception::DataTlbProtectionWrite => "Data TLB protection violation exception (write)",
            Exception::InitialPageWrite => "Initial page write exception",
            Exception::DataAddressErrorRead => "Data address error (read)",
            Exception::DataAddressErrorWrite => "Data address error (write)",
            Exception::InstructionTlbMiss => "Instruction TLB miss exception",
            Exception::InstructionAddressError => "Instruction address error",
            Exception::FpuDisable => "FPU disable exception",
            Exception::SlotFpuDisable => "Slot FPU disable exception",
            Exception::FpuInvalidOperation => "FPU invalid operation",
            Exception::FpuDivisionByZero => "FPU division by zero",
            Exception::FpuOverflow => "FPU overflow",
            Exception::FpuUnderflow => "FPU underflow",
            Exception::FpuInexact => "FPU inexact",
            Exception::FpuError => "FPU error",
            Exception::IntegerDivisionByZero => "Integer division by zero",
            Exception::IntegerOverflow => "Integer overflow",
            Exception::UnconditionalTrap => "Unconditional trap",
        })
    }
}

/// Timing on a subset of the CPUs that differs from the record's default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cycles {
    pub cpus: SuperhVersion,
    pub issue: &'static str,
    pub latency: &'static str,
}

impl Cycles {
    pub const fn on(cpus: SuperhVersion, issue: &'static str, latency: &'static str) -> Cycles {
        Cycles {
            cpus,
            issue,
            latency,
        }
    }
}

/// One instruction form as listed in the tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Insn {
    pub format: &'static str,
    pub abstr: &'static str,
    pub code: &'static str,
    pub environments: SuperhVersion,
    pub t_bit: TBit,
    pub group: Option<IssueGroup>,
    pub issue: &'static str,
    pub latency: &'static str,
    pub timing: &'static [Cycles],
    pub mode: FpscrMode,
    pub privileged: bool,
    pub delay_slot: bool,
    pub description: &'static str,
    pub note: &'static str,
    pub operation: &'static str,
    pub example: &'static str,
    pub exceptions: &'static [Exception],
}

impl Insn {
    pub const fn new(format: &'static str, code: &'static str, abstr: &'static str) -> Insn {
        Insn {
            format,
            abstr,
            code,
            environments: SuperhVersion::ANY,
            t_bit: TBit::Unchanged,
            group: None,
            issue: "1",
            latency: "1",
            timing: &[],
            mode: FpscrMode::Any,
            privileged: false,
            delay_slot: false,
            description: "",
            note: "",
            operation: "",
            example: "",
            exceptions: &[],
        }
    }

    pub const fn on(mut self, environments: SuperhVersion) -> Insn {
        self.environments = environments;
        self
    }

    pub const fn t(mut self, t_bit: TBit) -> Insn {
        self.t_bit = t_bit;
        self
    }

    pub const fn group(mut self, group: IssueGroup) -> Insn {
        self.group = Some(group);
        self
    }

    pub const fn cycles(mut self, issue: &'static str, latency: &'static str) -> Insn {
        self.issue = issue;
        self.latency = latency;
        self
    }

    pub const fn timing(mut self, timing: &'static [Cycles]) -> Insn {
        self.timing = timing;
        self
    }

    pub const fn mode(mut self, mode: FpscrMode) -> Insn {
        self.mode = mode;
        self
    }

    pub const fn privileged(mut self) -> Insn {
        self.privileged = true;
        self
    }

    pub const fn delayed(mut self) -> Insn {
        self.delay_slot = true;
        self
    }

    pub const fn describe(mut self, description: &'static str) -> Insn {
        self.description = description;
        self
    }

    pub const fn note(mut self, note: &'static str) -> Insn {
        self.note = note;
        self
    }

    pub const fn operation(mut self, operation: &'static str) -> Insn {
        self.operation = operation;
        self
    }

    pub const fn example(mut self, example: &'static str) -> Insn {
        self.example = example;
        self
    }

    pub const fn exceptions(mut self, exceptions: &'static [Exception]) -> Insn {
        self.exceptions = exceptions;
        self
    }

    /// The first word of the format, e.g. `MOV.L` for `MOV.L @(disp,Rm),Rn`.
    pub fn mnemonic(&self) -> &'static str {
        self.format.split_whitespace().next().unwrap_or(self.format)
    }

    /// Issue and latency cycles on `cpu`.
    pub fn cycles_on(&self, cpu: SuperhVersion) -> (&'static str, &'static str) {
        self.timing
            .iter()
            .find(|cycles| cycles.cpus.intersects(cpu))
            .map(|cycles| (cycles.issue, cycles.latency))
            .unwrap_or((self.issue, self.latency))
    }
}

/// An instruction record after its encoding and mnemonic have been parsed
/// and its citations attached.
#[derive(Clone, Debug)]
pub struct Entry {
    pub insn: &'static Insn,
    pub encoding: Encoding,
    pub mnemonic: Mnemonic,
    pub syntax: Vec<FormatPart>,
    pub citations: Vec<Citation>,
}

impl Entry {
    pub fn new(insn: &'static Insn) -> Result<Entry> {
        let encoding = Encoding::parse(insn.code)
            .with_context(|| format!("bad encoding for `{}`", insn.format))?;
        let mnemonic = insn
            .mnemonic()
            .parse()
            .with_context(|| format!("bad mnemonic for `{}`", insn.format))?;
        let syntax = parse_format(insn.format)?;

        for part in &syntax {
            let FormatPart::Operands(operands) = part else {
                continue;
            };
            for name in operands.iter().flat_map(|operand| operand.fields()) {
                if encoding.field(name).is_none() {
                    bail!("`{}` uses field `{name}` missing from `{}`", insn.format, insn.code);
                }
            }
        }

        Ok(Entry {
            insn,
            encoding,
            mnemonic,
            syntax,
            citations: vec![],
        })
    }

    /// Mnemonics of the format, more than one for the DSP parallel forms.
    pub fn mnemonics(&self) -> impl Iterator<Item = &Mnemonic> {
        self.syntax.iter().filter_map(|part| match part {
            FormatPart::Mnemonic(mnemonic) => Some(mnemonic),
            FormatPart::Operands(_) => None,
        })
    }

    pub fn supports(&self, version: SuperhVersion) -> bool {
        self.insn.environments.intersects(version)
    }
}

#[derive(Clone, Debug)]
pub struct InsnBlock {
    pub name: &'static str,
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD: Insn = Insn::new("ADD Rm,Rn", "0011nnnnmmmm1100", "Rn + Rm -> Rn")
        .group(IssueGroup::Ex)
        .timing(&[Cycles::on(SuperhVersion::SH2A, "1", "0")]);

    #[test]
    fn test_builder_defaults() {
        assert_eq!(ADD.environments, SuperhVersion::ANY);
        assert_eq!(ADD.t_bit, TBit::Unchanged);
        assert_eq!(ADD.mnemonic(), "ADD");
        assert_eq!(ADD.cycles_on(SuperhVersion::SH4), ("1", "1"));
        assert_eq!(ADD.cycles_on(SuperhVersion::SH2A), ("1", "0"));
    }

    #[test]
    fn test_entry_parses_record() {
        static MOV: Insn = Insn::new("MOV.L @(disp,Rm),Rn", "0101nnnnmmmmdddd", "");
        let entry = Entry::new(&MOV).unwrap();
        assert_eq!(entry.mnemonic.size(), Some(4));
        assert!(entry.encoding.matches(0x5123));
        assert!(entry.citations.is_empty());
    }

    #[test]
    fn test_entry_rejects_bad_records() {
        static BAD: Insn = Insn::new("MOV Rm,Rn", "0110nnnnmmmm001", "");
        assert!(Entry::new(&BAD).is_err());
        static UNKNOWN: Insn = Insn::new("FROB Rn", "0110nnnnmmmm0011", "");
        assert!(Entry::new(&UNKNOWN).is_err());
        static NO_DISP: Insn = Insn::new("MOV.L @(disp,Rm),Rn", "0101nnnnmmmm0000", "");
        assert!(Entry::new(&NO_DISP).is_err());
    }

    #[test]
    fn test_entry_mnemonics() {
        static PARALLEL: Insn = Insn::new(
            "PADD Sx,Sy,Du PMULS Se,Sf,Dg",
            "111110**********0111eeffxxyygguu",
            "",
        );
        let entry = Entry::new(&PARALLEL).unwrap();
        let names = entry.mnemonics().map(|m| m.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["padd", "pmuls"]);
    }

    #[test]
    fn test_fpscr_modes() {
        assert!(FpscrMode::Any.accepts(true, false));
        assert!(FpscrMode::Sz1.accepts(true, false));
        assert!(!FpscrMode::Pr1.accepts(true, false));
        assert!(FpscrMode::Sz0.excludes(&FpscrMode::Sz1));
        assert!(!FpscrMode::Sz0.excludes(&FpscrMode::Pr1));
    }
}
