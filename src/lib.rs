use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

pub mod blocks;
pub mod citations;
pub mod decode;
pub mod encoding;
pub mod flags;
pub mod insn;
pub mod instructions;
pub mod isa;
pub mod operands;
pub mod registers;

pub use blocks::build_insn_blocks;
pub use citations::{Citation, CitationRule, CitationTable, Manual};
pub use decode::{decode_bytes, BranchInfo, DecodeContext, Decoded, Endianness, Token, TokenKind};
pub use insn::{Entry, Insn, InsnBlock};
pub use isa::Isa;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct SuperhVersion: u16 {
        const SH1 = 0b0000_0000_0001;
        const SH2 = 0b0000_0000_0010;
        const SH2E = 0b0000_0000_0100;
        const SH2A = 0b0000_0000_1000;
        const SH3 = 0b0000_0001_0000;
        const SH3E = 0b0000_0010_0000;
        const SH4 = 0b0000_0100_0000;
        const SH4A = 0b0000_1000_0000;
        const DSP = 0b0001_0000_0000;
    }
}

const VERSION_TAGS: [(SuperhVersion, &str); 9] = [
    (SuperhVersion::SH1, "sh1"),
    (SuperhVersion::SH2, "sh2"),
    (SuperhVersion::SH2E, "sh2e"),
    (SuperhVersion::SH2A, "sh2a"),
    (SuperhVersion::SH3, "sh3"),
    (SuperhVersion::SH3E, "sh3e"),
    (SuperhVersion::SH4, "sh4"),
    (SuperhVersion::SH4A, "sh4a"),
    (SuperhVersion::DSP, "sh_dsp"),
];

impl SuperhVersion {
    /// Every CPU of the family.
    pub const ANY: SuperhVersion = SuperhVersion::all();

    /// Everything that kept the SH-2 additions (BSRF, DT, MUL.L, ...).
    pub const SH2_UP: SuperhVersion = SuperhVersion::from_bits_retain(
        SuperhVersion::ANY.bits() & !SuperhVersion::SH1.bits(),
    );

    pub const SH3_UP: SuperhVersion = SuperhVersion::from_bits_retain(
        SuperhVersion::SH3.bits()
            | SuperhVersion::SH3E.bits()
            | SuperhVersion::SH4.bits()
            | SuperhVersion::SH4A.bits(),
    );

    pub const SH4_UP: SuperhVersion =
        SuperhVersion::from_bits_retain(SuperhVersion::SH4.bits() | SuperhVersion::SH4A.bits());

    /// CPUs with a floating-point unit.
    pub const FPU: SuperhVersion = SuperhVersion::from_bits_retain(
        SuperhVersion::SH2E.bits()
            | SuperhVersion::SH2A.bits()
            | SuperhVersion::SH3E.bits()
            | SuperhVersion::SH4.bits()
            | SuperhVersion::SH4A.bits(),
    );

    /// CPUs whose FPU also handles double precision.
    pub const DOUBLE_FPU: SuperhVersion = SuperhVersion::from_bits_retain(
        SuperhVersion::SH2A.bits() | SuperhVersion::SH4.bits() | SuperhVersion::SH4A.bits(),
    );

    pub fn tag(&self) -> Option<&'static str> {
        VERSION_TAGS
            .iter()
            .find(|(version, _)| version == self)
            .map(|(_, tag)| *tag)
    }

    pub fn tags(&self) -> Vec<&'static str> {
        VERSION_TAGS
            .iter()
            .filter(|(version, _)| self.contains(*version))
            .map(|(_, tag)| *tag)
            .collect()
    }
}

impl FromStr for SuperhVersion {
    type Err = anyhow::Error;

    /// Parses a comma separated list of environment tags, e.g. `sh2a,sh4`.
    fn from_str(s: &str) -> Result<Self> {
        let mut versions = SuperhVersion::empty();

        for tag in s.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
            let tag = tag.to_ascii_lowercase();
            let version = match tag.as_str() {
                "dsp" | "sh-dsp" => SuperhVersion::DSP,
                "all" | "any" => SuperhVersion::ANY,
                _ => match VERSION_TAGS.iter().find(|(_, name)| *name == tag) {
                    Some((version, _)) => *version,
                    None => bail!("unknown SuperH environment tag `{tag}`"),
                },
            };
            versions |= version;
        }

        if versions.is_empty() {
            bail!("empty SuperH environment list");
        }

        Ok(versions)
    }
}

impl fmt::Display for SuperhVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bits_are_distinct() {
        let mut seen = SuperhVersion::empty();
        for (version, _) in VERSION_TAGS {
            assert!(!seen.intersects(version));
            seen |= version;
        }
        assert_eq!(seen, SuperhVersion::ANY);
    }

    #[test]
    fn test_parse_tags() {
        let versions: SuperhVersion = "sh2a, SH4,sh_dsp".parse().unwrap();
        assert_eq!(
            versions,
            SuperhVersion::SH2A | SuperhVersion::SH4 | SuperhVersion::DSP
        );
        assert_eq!(versions.to_string(), "sh2a,sh4,sh_dsp");
        assert_eq!("dsp".parse::<SuperhVersion>().unwrap(), SuperhVersion::DSP);
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        assert!("sh5".parse::<SuperhVersion>().is_err());
        assert!("".parse::<SuperhVersion>().is_err());
    }

    #[test]
    fn test_groups() {
        assert!(SuperhVersion::SH2_UP.contains(SuperhVersion::DSP));
        assert!(!SuperhVersion::SH2_UP.contains(SuperhVersion::SH1));
        assert!(SuperhVersion::FPU.contains(SuperhVersion::DOUBLE_FPU));
        assert_eq!(SuperhVersion::SH4.tag(), Some("sh4"));
        assert_eq!(SuperhVersion::SH4_UP.tag(), None);
    }
}
