//! Operand syntax of the format strings and its resolution against decoded
//! encoding fields.

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::{
    encoding::Fields,
    instructions::{Mnemonic, Operation},
    registers::SuperhRegister,
};

/// How a register operand picks its register from an encoding field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegClass {
    Gpr,
    Bank,
    Fr,
    Dr,
    Xd,
    Fv,
    // DSP operand fields.
    Ax,
    Ay,
    Dx,
    Dy,
    Da,
    As,
    Ds,
    Sx,
    Sy,
    Dz,
    Se,
    Sf,
    Dg,
    Du,
}

use SuperhRegister::*;

const DSP_AX: [SuperhRegister; 2] = [R4, R5];
const DSP_AY: [SuperhRegister; 2] = [R6, R7];
const DSP_DX: [SuperhRegister; 2] = [X0, X1];
const DSP_DY: [SuperhRegister; 2] = [Y0, Y1];
const DSP_DA: [SuperhRegister; 2] = [A0, A1];
const DSP_AS: [SuperhRegister; 4] = [R4, R5, R2, R3];
const DSP_SX: [SuperhRegister; 4] = [X0, X1, A0, A1];
const DSP_SY: [SuperhRegister; 4] = [Y0, Y1, M0, M1];
const DSP_SE: [SuperhRegister; 4] = [X0, X1, Y0, A1];
const DSP_SF: [SuperhRegister; 4] = [Y0, Y1, X0, A1];
const DSP_DG: [SuperhRegister; 4] = [M0, M1, A0, A1];
const DSP_DU: [SuperhRegister; 4] = [X0, Y0, A0, A1];
// Zero slots are reserved encodings.
const DSP_DS: [Option<SuperhRegister>; 16] = [
    None,
    None,
    None,
    None,
    None,
    Some(A1),
    None,
    Some(A0),
    Some(X0),
    Some(X1),
    Some(Y0),
    Some(Y1),
    Some(M0),
    Some(A1g),
    Some(M1),
    Some(A0g),
];
const DSP_DZ: [Option<SuperhRegister>; 16] = [
    None,
    None,
    None,
    None,
    None,
    Some(A1),
    None,
    Some(A0),
    Some(X0),
    Some(X1),
    Some(Y0),
    Some(Y1),
    Some(M0),
    None,
    Some(M1),
    None,
];

impl RegClass {
    pub fn register(&self, value: u32) -> Option<SuperhRegister> {
        let id = value as usize;
        match self {
            RegClass::Gpr => SuperhRegister::new_gpr(id),
            RegClass::Bank => SuperhRegister::new_bank(id),
            RegClass::Fr => SuperhRegister::new_fr(id),
            RegClass::Dr => SuperhRegister::new_dr(id),
            RegClass::Xd => SuperhRegister::new_xd(id),
            RegClass::Fv => SuperhRegister::new_fv(id),
            RegClass::Ax => DSP_AX.get(id).copied(),
            RegClass::Ay => DSP_AY.get(id).copied(),
            RegClass::Dx => DSP_DX.get(id).copied(),
            RegClass::Dy => DSP_DY.get(id).copied(),
            RegClass::Da => DSP_DA.get(id).copied(),
            RegClass::As => DSP_AS.get(id).copied(),
            RegClass::Ds => DSP_DS.get(id).copied().flatten(),
            RegClass::Sx => DSP_SX.get(id).copied(),
            RegClass::Sy => DSP_SY.get(id).copied(),
            RegClass::Dz => DSP_DZ.get(id).copied().flatten(),
            RegClass::Se => DSP_SE.get(id).copied(),
            RegClass::Sf => DSP_SF.get(id).copied(),
            RegClass::Dg => DSP_DG.get(id).copied(),
            RegClass::Du => DSP_DU.get(id).copied(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegRef {
    Fixed(SuperhRegister),
    Field(char, RegClass),
}

impl RegRef {
    pub fn field(&self) -> Option<char> {
        match self {
            RegRef::Fixed(_) => None,
            RegRef::Field(name, _) => Some(*name),
        }
    }

    fn resolve(&self, fields: &Fields) -> Result<SuperhRegister> {
        match *self {
            RegRef::Fixed(reg) => Ok(reg),
            RegRef::Field(name, class) => {
                let Some(field) = fields.get(name) else {
                    bail!("no `{name}` field in encoding");
                };
                match class.register(field.value) {
                    Some(reg) => Ok(reg),
                    None => bail!("reserved {class:?} register field {:#x}", field.value),
                }
            }
        }
    }
}

impl FromStr for RegRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let reg = match s {
            "Rn" => RegRef::Field('n', RegClass::Gpr),
            "Rm" => RegRef::Field('m', RegClass::Gpr),
            "Rn_BANK" => RegRef::Field('n', RegClass::Bank),
            "Rm_BANK" => RegRef::Field('m', RegClass::Bank),
            "FRn" => RegRef::Field('n', RegClass::Fr),
            "FRm" => RegRef::Field('m', RegClass::Fr),
            "DRn" => RegRef::Field('n', RegClass::Dr),
            "DRm" => RegRef::Field('m', RegClass::Dr),
            "XDn" => RegRef::Field('n', RegClass::Xd),
            "XDm" => RegRef::Field('m', RegClass::Xd),
            "FVn" => RegRef::Field('n', RegClass::Fv),
            "FVm" => RegRef::Field('m', RegClass::Fv),
            "Ax" => RegRef::Field('a', RegClass::Ax),
            "Ay" => RegRef::Field('a', RegClass::Ay),
            "Dx" => RegRef::Field('r', RegClass::Dx),
            "Dy" => RegRef::Field('r', RegClass::Dy),
            "Da" => RegRef::Field('r', RegClass::Da),
            "As" => RegRef::Field('a', RegClass::As),
            "Ds" => RegRef::Field('s', RegClass::Ds),
            "Sx" => RegRef::Field('x', RegClass::Sx),
            "Sy" => RegRef::Field('y', RegClass::Sy),
            "Dz" => RegRef::Field('z', RegClass::Dz),
            "Se" => RegRef::Field('e', RegClass::Se),
            "Sf" => RegRef::Field('f', RegClass::Sf),
            "Dg" => RegRef::Field('g', RegClass::Dg),
            "Du" => RegRef::Field('u', RegClass::Du),
            "Ix" | "Is" => RegRef::Fixed(R8),
            "Iy" => RegRef::Fixed(R9),
            _ => RegRef::Fixed(
                SuperhRegister::from_str(s).with_context(|| format!("unknown register `{s}`"))?,
            ),
        };

        Ok(reg)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandFlag {
    PreDec,
    PostInc,
    None,
}

/// One operand as written in a format string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandSyntax {
    // "Rn", "FR0", "GBR"
    Reg(RegRef),
    // "#imm", "#imm3", "#imm20"
    Imm,
    // "label"
    Label,
    // "@Rn", "@Rm+", "@-Rn"
    Deref(RegRef, OperandFlag),
    // "@(R0,Rm)", "@(R0,GBR)"
    DerefIndexed(RegRef, RegRef),
    // "@Ax+Ix"
    DerefPostIndex(RegRef, RegRef),
    // "@(disp,Rm)", "@(disp12,Rn)", "@(disp,GBR)", "@(disp,PC)"
    DerefDisp(RegRef),
    // "@@(disp8,TBR)"
    DerefDispIndirect(RegRef),
}

impl OperandSyntax {
    /// Encoding fields the operand reads.
    pub fn fields(&self) -> Vec<char> {
        match self {
            OperandSyntax::Reg(reg) | OperandSyntax::Deref(reg, _) => reg.field().into_iter().collect(),
            OperandSyntax::Imm => vec!['i'],
            OperandSyntax::Label => vec!['d'],
            OperandSyntax::DerefIndexed(a, b) | OperandSyntax::DerefPostIndex(a, b) => {
                a.field().into_iter().chain(b.field()).collect()
            }
            OperandSyntax::DerefDisp(reg) | OperandSyntax::DerefDispIndirect(reg) => {
                std::iter::once('d').chain(reg.field()).collect()
            }
        }
    }
}

impl FromStr for OperandSyntax {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('#') {
            return Ok(OperandSyntax::Imm);
        }
        if s == "label" {
            return Ok(OperandSyntax::Label);
        }
        if let Some(inner) = s.strip_prefix("@@(").and_then(|s| s.strip_suffix(')')) {
            let Some(("disp8", base)) = inner.split_once(',') else {
                bail!("bad double indirect operand `{s}`");
            };
            return Ok(OperandSyntax::DerefDispIndirect(base.parse()?));
        }
        if let Some(inner) = s.strip_prefix("@(").and_then(|s| s.strip_suffix(')')) {
            let Some((index, base)) = inner.split_once(',') else {
                bail!("bad indexed operand `{s}`");
            };
            return Ok(if index.starts_with("disp") {
                OperandSyntax::DerefDisp(base.parse()?)
            } else {
                OperandSyntax::DerefIndexed(index.parse()?, base.parse()?)
            });
        }
        if let Some(reg) = s.strip_prefix("@-") {
            return Ok(OperandSyntax::Deref(reg.parse()?, OperandFlag::PreDec));
        }
        if let Some(inner) = s.strip_prefix('@') {
            return Ok(match inner.split_once('+') {
                Some((reg, "")) => OperandSyntax::Deref(reg.parse()?, OperandFlag::PostInc),
                Some((reg, index)) => OperandSyntax::DerefPostIndex(reg.parse()?, index.parse()?),
                None => OperandSyntax::Deref(inner.parse()?, OperandFlag::None),
            });
        }

        Ok(OperandSyntax::Reg(s.parse()?))
    }
}

/// A whitespace separated piece of a format string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatPart {
    Mnemonic(Mnemonic),
    Operands(Vec<OperandSyntax>),
}

/// Splits a format such as `MOV.L @(disp,Rm),Rn` or the DSP parallel form
/// `PADD Sx,Sy,Du PMULS Se,Sf,Dg` into mnemonics and operand lists.
pub fn parse_format(format: &str) -> Result<Vec<FormatPart>> {
    let mut parts = vec![];

    for (i, token) in format.split_whitespace().enumerate() {
        match token.parse::<Mnemonic>() {
            Ok(mnemonic) => parts.push(FormatPart::Mnemonic(mnemonic)),
            Err(err) if i == 0 => return Err(err),
            Err(_) => {
                let operands = split_operands(token)
                    .map(str::parse)
                    .collect::<Result<Vec<OperandSyntax>>>()
                    .with_context(|| format!("in format `{format}`"))?;
                parts.push(FormatPart::Operands(operands));
            }
        }
    }

    Ok(parts)
}

/// Splits on the commas outside of parentheses.
fn split_operands(text: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0;
    let mut start = 0;
    let mut pieces = vec![];

    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);

    pieces.into_iter()
}

/// An operand with its encoding fields filled in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand {
    Reg(SuperhRegister),
    Imm(i32),
    // Branch targets and PC-relative loads.
    Address(u32),
    // "@r0"
    DerefReg(SuperhRegister, OperandFlag),
    // "@(r0,gbr)"
    DerefRegReg(SuperhRegister, SuperhRegister),
    // "@r4+r8"
    DerefPostIndex(SuperhRegister, SuperhRegister),
    // "@(4,gbr)"
    DerefRegImm(SuperhRegister, u32),
    // "@@(8,tbr)"
    DerefIndirect(SuperhRegister, u32),
}

impl OperandSyntax {
    /// `mnemonic` is the mnemonic the operand list belongs to and `address`
    /// the address of the instruction.
    pub fn resolve(&self, mnemonic: &Mnemonic, fields: &Fields, address: u32) -> Result<Operand> {
        let disp = || fields.get('d').context("no displacement field in encoding");

        Ok(match self {
            OperandSyntax::Reg(reg) => Operand::Reg(reg.resolve(fields)?),
            OperandSyntax::Imm => {
                let Some(imm) = fields.get('i') else {
                    bail!("no immediate field in encoding");
                };
                match mnemonic.operation {
                    Operation::Movi20s => Operand::Imm(imm.signed() << 8),
                    op if op.signed_immediate() => Operand::Imm(imm.signed()),
                    _ => Operand::Imm(imm.value as i32),
                }
            }
            OperandSyntax::Label => {
                let disp = disp()?;
                match disp.width {
                    8 => Operand::Address(disp8(disp.value as u8, address)),
                    12 => Operand::Address(disp12(disp.value as u16, address)),
                    width => bail!("unsupported {width}-bit branch displacement"),
                }
            }
            OperandSyntax::Deref(reg, flag) => Operand::DerefReg(reg.resolve(fields)?, *flag),
            OperandSyntax::DerefIndexed(index, base) => {
                Operand::DerefRegReg(index.resolve(fields)?, base.resolve(fields)?)
            }
            OperandSyntax::DerefPostIndex(base, index) => {
                Operand::DerefPostIndex(base.resolve(fields)?, index.resolve(fields)?)
            }
            OperandSyntax::DerefDisp(RegRef::Fixed(SuperhRegister::PC)) => {
                let disp = disp()?.value;
                Operand::Address(match pc_relative_scale(mnemonic) {
                    4 => (address & 0xffff_fffc).wrapping_add(4).wrapping_add(disp << 2),
                    scale => address.wrapping_add(4).wrapping_add(disp * scale),
                })
            }
            OperandSyntax::DerefDisp(base) => {
                let scale = mnemonic.size().unwrap_or(1) as u32;
                Operand::DerefRegImm(base.resolve(fields)?, disp()?.value * scale)
            }
            OperandSyntax::DerefDispIndirect(base) => {
                Operand::DerefIndirect(base.resolve(fields)?, disp()?.value << 2)
            }
        })
    }
}

fn pc_relative_scale(mnemonic: &Mnemonic) -> u32 {
    match mnemonic.operation {
        Operation::Mova => 4,
        _ => mnemonic.size().unwrap_or(2) as u32,
    }
}

/// Handles calculation of a 8-bit sign extension.
#[inline]
fn disp8(disp: u8, address: u32) -> u32 {
    let mut disp = disp as u32;
    if (disp & 0x80) != 0 {
        disp |= 0xffff_ff00;
    }
    address.wrapping_add((disp << 1).wrapping_add(4))
}

/// Handles calculation of a 12-bit sign extension for BRA and BSR instructions.
#[inline]
fn disp12(disp: u16, address: u32) -> u32 {
    let mut disp = (disp & 0x0fff) as u32;
    if (disp & 0x800) != 0 {
        disp |= 0xffff_f000;
    }
    address.wrapping_add((disp << 1).wrapping_add(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;

    fn resolve(format: &str, code: &str, word: u32, address: u32) -> Vec<Operand> {
        let parts = parse_format(format).unwrap();
        let FormatPart::Mnemonic(mnemonic) = parts[0] else {
            panic!("format must start with a mnemonic");
        };
        let fields = Encoding::parse(code).unwrap().extract(word);
        match &parts[1] {
            FormatPart::Operands(operands) => operands
                .iter()
                .map(|op| op.resolve(&mnemonic, &fields, address).unwrap())
                .collect(),
            FormatPart::Mnemonic(_) => panic!("expected operands"),
        }
    }

    #[test]
    fn test_parse_operand_syntax() {
        assert_eq!(
            "@(disp,GBR)".parse::<OperandSyntax>().unwrap(),
            OperandSyntax::DerefDisp(RegRef::Fixed(Gbr))
        );
        assert_eq!(
            "@(R0,Rm)".parse::<OperandSyntax>().unwrap(),
            OperandSyntax::DerefIndexed(RegRef::Fixed(R0), RegRef::Field('m', RegClass::Gpr))
        );
        assert_eq!(
            "@-Rn".parse::<OperandSyntax>().unwrap(),
            OperandSyntax::Deref(RegRef::Field('n', RegClass::Gpr), OperandFlag::PreDec)
        );
        assert_eq!(
            "@Ax+Ix".parse::<OperandSyntax>().unwrap(),
            OperandSyntax::DerefPostIndex(RegRef::Field('a', RegClass::Ax), RegRef::Fixed(R8))
        );
        assert_eq!(
            "@@(disp8,TBR)".parse::<OperandSyntax>().unwrap(),
            OperandSyntax::DerefDispIndirect(RegRef::Fixed(Tbr))
        );
        assert!("@(disp,Rq)".parse::<OperandSyntax>().is_err());
    }

    #[test]
    fn test_parse_format_parts() {
        let parts = parse_format("PADD Sx,Sy,Du PMULS Se,Sf,Dg").unwrap();
        assert_eq!(parts.len(), 4);
        assert!(matches!(parts[2], FormatPart::Mnemonic(m) if m.operation == Operation::Pmuls));

        let parts = parse_format("NOP").unwrap();
        assert_eq!(parts.len(), 1);

        assert!(parse_format("FROB Rn").is_err());
    }

    #[test]
    fn test_operand_fields() {
        let OperandSyntax::DerefDisp(_) = "@(disp,Rm)".parse::<OperandSyntax>().unwrap() else {
            panic!("expected displacement operand");
        };
        assert_eq!(
            "@(disp,Rm)".parse::<OperandSyntax>().unwrap().fields(),
            vec!['d', 'm']
        );
        assert_eq!("#imm".parse::<OperandSyntax>().unwrap().fields(), vec!['i']);
        assert!("FPUL".parse::<OperandSyntax>().unwrap().fields().is_empty());
    }

    #[test]
    fn test_resolve_displacement_scaling() {
        // mov.l @(3,r2),r1 -> byte offset 12
        assert_eq!(
            resolve("MOV.L @(disp,Rm),Rn", "0101nnnnmmmmdddd", 0x5123, 0),
            vec![Operand::DerefRegImm(R2, 12), Operand::Reg(R1)]
        );
        assert_eq!(
            resolve("MOV.W R0,@(disp,GBR)", "11000001dddddddd", 0xc105, 0),
            vec![Operand::Reg(R0), Operand::DerefRegImm(Gbr, 10)]
        );
    }

    #[test]
    fn test_resolve_pc_relative() {
        assert_eq!(
            resolve("MOV.L @(disp,PC),Rn", "1101nnnndddddddd", 0xd102, 0x1002),
            vec![Operand::Address(0x100c), Operand::Reg(R1)]
        );
        assert_eq!(
            resolve("MOV.W @(disp,PC),Rn", "1001nnnndddddddd", 0x9102, 0x1002),
            vec![Operand::Address(0x100a), Operand::Reg(R1)]
        );
        assert_eq!(
            resolve("MOVA @(disp,PC),R0", "11000111dddddddd", 0xc701, 0x1002),
            vec![Operand::Address(0x1008), Operand::Reg(R0)]
        );
    }

    #[test]
    fn test_resolve_branch_targets() {
        assert_eq!(
            resolve("BT label", "10001001dddddddd", 0x89fe, 0x1000),
            vec![Operand::Address(0x1000)]
        );
        assert_eq!(
            resolve("BRA label", "1010dddddddddddd", 0xa800, 0x1000),
            vec![Operand::Address(4)]
        );
    }

    #[test]
    fn test_resolve_immediates() {
        assert_eq!(
            resolve("MOV #imm,Rn", "1110nnnniiiiiiii", 0xe3ff, 0),
            vec![Operand::Imm(-1), Operand::Reg(R3)]
        );
        assert_eq!(
            resolve("AND #imm,R0", "11001001iiiiiiii", 0xc9ff, 0),
            vec![Operand::Imm(255), Operand::Reg(R0)]
        );
    }

    #[test]
    fn test_resolve_fpu_and_dsp_registers() {
        assert_eq!(
            resolve("FMOV DRm,XDn", "1111nnn1mmm01100", 0xf3ac, 0),
            vec![Operand::Reg(Dr10), Operand::Reg(Xd2)]
        );
        assert_eq!(
            resolve("FIPR FVm,FVn", "1111nnmm11101101", 0xf6ed, 0),
            vec![Operand::Reg(Fv8), Operand::Reg(Fv4)]
        );
        assert_eq!(
            resolve("MOVS.W @As+,Ds", "111101aassss1000", 0xf678, 0),
            vec![Operand::DerefReg(R2, OperandFlag::PostInc), Operand::Reg(A0)]
        );
    }

    #[test]
    fn test_reserved_dsp_register() {
        let parts = parse_format("MOVS.W @As,Ds").unwrap();
        let (FormatPart::Mnemonic(mnemonic), FormatPart::Operands(operands)) = (&parts[0], &parts[1])
        else {
            panic!("unexpected format parts");
        };
        let fields = Encoding::parse("111101aassss0100").unwrap().extract(0xf404);
        assert!(operands[1].resolve(mnemonic, &fields, 0).is_err());
    }

    #[test]
    fn test_disp_helpers() {
        assert_eq!(disp8(0x02, 0x1000), 0x1008);
        assert_eq!(disp8(0xff, 0x1000), 0x1002);
        assert_eq!(disp12(0x7ff, 0), 0x1002);
        assert_eq!(disp12(0x800, 0x2000), 0x1004);
    }
}
