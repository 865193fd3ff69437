use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Operation {
    Add,
    Addc,
    Addv,
    And,
    Band,
    Bandnot,
    Bclr,
    Bf,
    Bld,
    Bldnot,
    Bor,
    Bornot,
    Bra,
    Braf,
    Bset,
    Bsr,
    Bsrf,
    Bst,
    Bt,
    Bxor,
    Clips,
    Clipu,
    Clrmac,
    Clrs,
    Clrt,
    Cmp,
    Dcf,
    Dct,
    Div0s,
    Div0u,
    Div1,
    Divs,
    Divu,
    Dmuls,
    Dmulu,
    Dt,
    Exts,
    Extu,
    Fabs,
    Fadd,
    Fcmp,
    Fcnvds,
    Fcnvsd,
    Fdiv,
    Fipr,
    Fldi0,
    Fldi1,
    Flds,
    Float,
    Fmac,
    Fmov,
    Fmul,
    Fneg,
    Fpchg,
    Frchg,
    Fsca,
    Fschg,
    Fsqrt,
    Fsrra,
    Fsts,
    Fsub,
    Ftrc,
    Ftrv,
    Icbi,
    Jmp,
    Jsr,
    Ldbank,
    Ldc,
    Ldre,
    Ldrs,
    Lds,
    Ldtlb,
    Mac,
    Mov,
    Mova,
    Movca,
    Movco,
    Movi20,
    Movi20s,
    Movli,
    Movml,
    Movmu,
    Movrt,
    Movs,
    Movt,
    Movu,
    Movua,
    Movx,
    Movy,
    Mul,
    Mulr,
    Muls,
    Mulu,
    Neg,
    Negc,
    Nop,
    Nopx,
    Nopy,
    Not,
    Nott,
    Ocbi,
    Ocbp,
    Ocbwb,
    Or,
    Pabs,
    Padd,
    Paddc,
    Pand,
    Pclr,
    Pcmp,
    Pcopy,
    Pdec,
    Pdmsb,
    Pinc,
    Plds,
    Pmuls,
    Pneg,
    Por,
    Pref,
    Prefi,
    Prnd,
    Psha,
    Pshl,
    Psts,
    Psub,
    Psubc,
    Pxor,
    Resbank,
    Rotcl,
    Rotcr,
    Rotl,
    Rotr,
    Rte,
    Rts,
    Rtv,
    Setrc,
    Sets,
    Sett,
    Shad,
    Shal,
    Shar,
    Shld,
    Shll,
    Shll16,
    Shll2,
    Shll8,
    Shlr,
    Shlr16,
    Shlr2,
    Shlr8,
    Sleep,
    Stbank,
    Stc,
    Sts,
    Sub,
    Subc,
    Subv,
    Swap,
    Synco,
    Tas,
    Trapa,
    Tst,
    Xor,
    Xtrct,
}

impl Operation {
    /// Immediates of these operations are sign-extended.
    pub fn signed_immediate(&self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Mov
                | Operation::Cmp
                | Operation::Movi20
                | Operation::Movi20s
                | Operation::Psha
                | Operation::Pshl
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LengthSuffix {
    Byte,
    Word,
    Long,
    Single,
    Double,
}

impl LengthSuffix {
    pub fn size(&self) -> usize {
        match *self {
            LengthSuffix::Byte => 1,
            LengthSuffix::Word => 2,
            LengthSuffix::Long => 4,
            LengthSuffix::Single => 4,
            LengthSuffix::Double => 8,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LengthSuffix::Byte => ".b",
            LengthSuffix::Word => ".w",
            LengthSuffix::Long => ".l",
            LengthSuffix::Single => ".s",
            LengthSuffix::Double => ".d",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Conditional {
    Eq,
    Ge,
    Gt,
    Hi,
    Hs,
    Pl,
    Pz,
    Str,
}

impl Conditional {
    fn as_str(&self) -> &'static str {
        match self {
            Conditional::Eq => "/eq",
            Conditional::Ge => "/ge",
            Conditional::Gt => "/gt",
            Conditional::Hi => "/hi",
            Conditional::Hs => "/hs",
            Conditional::Pl => "/pl",
            Conditional::Pz => "/pz",
            Conditional::Str => "/str",
        }
    }
}

/// A mnemonic split into its root operation and suffixes, e.g. `BT/S` or `MOV.L`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Mnemonic {
    pub operation: Operation,
    pub length_suffix: Option<LengthSuffix>,
    pub cond: Option<Conditional>,
    // "/s": the delayed form of a conditional branch.
    pub delayed: bool,
    // "/n": the SH-2A forms without a delay slot.
    pub no_delay: bool,
}

impl Mnemonic {
    pub fn size(&self) -> Option<usize> {
        self.length_suffix.map(|suffix| suffix.size())
    }
}

impl FromStr for Mnemonic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let split = s.find(['.', '/']).unwrap_or(s.len());
        let (root, mut rest) = s.split_at(split);

        let Ok(operation) = Operation::from_str(root) else {
            bail!("unknown mnemonic `{s}`");
        };

        let mut mnemonic = Mnemonic {
            operation,
            length_suffix: None,
            cond: None,
            delayed: false,
            no_delay: false,
        };

        while let Some(sep) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '/']).unwrap_or(body.len());
            let part = body[..end].to_ascii_uppercase();
            rest = &body[end..];

            match (sep, part.as_str()) {
                ('.', "B") => mnemonic.length_suffix = Some(LengthSuffix::Byte),
                ('.', "W") => mnemonic.length_suffix = Some(LengthSuffix::Word),
                ('.', "L") => mnemonic.length_suffix = Some(LengthSuffix::Long),
                ('.', "S") => mnemonic.length_suffix = Some(LengthSuffix::Single),
                ('.', "D") => mnemonic.length_suffix = Some(LengthSuffix::Double),
                ('/', "EQ") => mnemonic.cond = Some(Conditional::Eq),
                ('/', "GE") => mnemonic.cond = Some(Conditional::Ge),
                ('/', "GT") => mnemonic.cond = Some(Conditional::Gt),
                ('/', "HI") => mnemonic.cond = Some(Conditional::Hi),
                ('/', "HS") => mnemonic.cond = Some(Conditional::Hs),
                ('/', "PL") => mnemonic.cond = Some(Conditional::Pl),
                ('/', "PZ") => mnemonic.cond = Some(Conditional::Pz),
                ('/', "STR") => mnemonic.cond = Some(Conditional::Str),
                ('/', "S") => mnemonic.delayed = true,
                ('/', "N") => mnemonic.no_delay = true,
                _ => bail!("unknown suffix `{sep}{part}` in mnemonic `{s}`"),
            }
        }

        Ok(mnemonic)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation.to_string().to_lowercase())?;

        if let Some(suffix) = &self.length_suffix {
            f.write_str(suffix.as_str())?;
        }
        if let Some(cond) = &self.cond {
            f.write_str(cond.as_str())?;
        }
        if self.delayed {
            f.write_str("/s")?;
        }
        if self.no_delay {
            f.write_str("/n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let m: Mnemonic = "SHLL16".parse().unwrap();
        assert_eq!(m.operation, Operation::Shll16);
        assert_eq!(m.length_suffix, None);
        assert_eq!(m.to_string(), "shll16");
    }

    #[test]
    fn test_parse_suffixes() {
        let m: Mnemonic = "MOV.L".parse().unwrap();
        assert_eq!(m.operation, Operation::Mov);
        assert_eq!(m.size(), Some(4));

        let m: Mnemonic = "CMP/STR".parse().unwrap();
        assert_eq!(m.cond, Some(Conditional::Str));

        let m: Mnemonic = "BT/S".parse().unwrap();
        assert!(m.delayed);
        assert_eq!(m.length_suffix, None);

        let m: Mnemonic = "FMOV.S".parse().unwrap();
        assert_eq!(m.length_suffix, Some(LengthSuffix::Single));

        let m: Mnemonic = "JSR/N".parse().unwrap();
        assert!(m.no_delay);
        assert_eq!(m.to_string(), "jsr/n");
    }

    #[test]
    fn test_parse_errors() {
        assert!("FOO".parse::<Mnemonic>().is_err());
        assert!("MOV.Q".parse::<Mnemonic>().is_err());
    }

    #[test]
    fn test_signed_immediates() {
        assert!(Operation::Add.signed_immediate());
        assert!(!Operation::Trapa.signed_immediate());
    }
}
