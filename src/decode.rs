use std::fmt;

use anyhow::{bail, Result};
use log::warn;

use crate::{
    encoding::Fields,
    insn::Entry,
    instructions::{Mnemonic, Operation},
    isa::Isa,
    operands::{FormatPart, Operand, OperandFlag},
    SuperhVersion,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// CPU state a word is decoded under.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeContext {
    pub version: SuperhVersion,
    pub address: u32,
    pub fpscr_sz: bool,
    pub fpscr_pr: bool,
}

impl DecodeContext {
    pub fn new(version: SuperhVersion) -> DecodeContext {
        DecodeContext {
            version,
            address: 0,
            fpscr_sz: false,
            fpscr_pr: false,
        }
    }

    pub fn at(self, address: u32) -> DecodeContext {
        DecodeContext { address, ..self }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BranchInfo {
    Unconditional(u32),
    Call(u32),
    True(u32),
    False(u32),
    Indirect,
    FunctionReturn,
    SystemCall,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Instruction,
    Text,
    Register,
    Integer(i64),
    PossibleAddress(u32),
    CodeRelativeAddress(u32),
    BeginMemoryOperand,
    EndMemoryOperand,
    OperandSeparator,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: &str, kind: TokenKind) -> Token {
        Token {
            text: text.to_owned(),
            kind,
        }
    }
}

/// A table entry matched against an instruction word.
#[derive(Clone, Debug)]
pub struct Decoded<'a> {
    pub entry: &'a Entry,
    pub fields: Fields,
    pub address: u32,
    /// Length in bytes.
    pub size: usize,
    /// X/Y memory transfers executed alongside a DSP operation.
    pub parallel: Vec<Decoded<'a>>,
    parts: Vec<(Mnemonic, Vec<Operand>)>,
}

impl<'a> Decoded<'a> {
    /// `word` holds the first halfword in its upper 16 bits for 32-bit entries.
    pub fn new(entry: &'a Entry, word: u32, address: u32) -> Result<Decoded<'a>> {
        let fields = entry.encoding.extract(word);
        let mut parts: Vec<(Mnemonic, Vec<Operand>)> = vec![];

        for part in &entry.syntax {
            match part {
                FormatPart::Mnemonic(mnemonic) => parts.push((*mnemonic, vec![])),
                FormatPart::Operands(syntax) => {
                    let Some((mnemonic, operands)) = parts.last_mut() else {
                        bail!("operands before mnemonic in `{}`", entry.insn.format);
                    };
                    for operand in syntax {
                        operands.push(operand.resolve(mnemonic, &fields, address)?);
                    }
                }
            }
        }

        Ok(Decoded {
            entry,
            fields,
            address,
            size: entry.encoding.size(),
            parallel: vec![],
            parts,
        })
    }

    /// Each mnemonic of the instruction with its resolved operands.
    pub fn parts(&self) -> &[(Mnemonic, Vec<Operand>)] {
        &self.parts
    }

    pub fn operands(&self) -> impl Iterator<Item = &Operand> {
        self.parts.iter().flat_map(|(_, operands)| operands.iter())
    }

    pub fn delay_slot(&self) -> bool {
        self.entry.insn.delay_slot
    }

    /// Control flow leaving this instruction. JSR and BSRF do not end a
    /// basic block and report nothing.
    pub fn branch(&self) -> Vec<BranchInfo> {
        let next = self.address.wrapping_add(self.size as u32);
        let target = self.operands().find_map(|operand| match operand {
            Operand::Address(address) => Some(*address),
            _ => None,
        });

        match (self.entry.mnemonic.operation, target) {
            (Operation::Bra, Some(target)) => vec![BranchInfo::Unconditional(target)],
            (Operation::Braf | Operation::Jmp, _) => vec![BranchInfo::Indirect],
            (Operation::Bsr, Some(target)) => vec![BranchInfo::Call(target)],
            (Operation::Bf | Operation::Bt, Some(target)) => {
                vec![BranchInfo::False(next), BranchInfo::True(target)]
            }
            (Operation::Rts | Operation::Rtv | Operation::Rte, _) => {
                vec![BranchInfo::FunctionReturn]
            }
            (Operation::Trapa, _) => vec![BranchInfo::SystemCall],
            _ => vec![],
        }
    }

    pub fn disassemble(&self) -> Vec<Token> {
        let mut tokens = vec![];

        for (i, (mnemonic, operands)) in self.parts.iter().enumerate() {
            if i > 0 {
                tokens.push(Token::new(" ", TokenKind::Text));
            }

            let text = mnemonic.to_string();
            let pad_len = 10usize.saturating_sub(text.len());
            tokens.push(Token::new(&text, TokenKind::Instruction));

            if !operands.is_empty() {
                tokens.push(Token::new(&format!("{:1$}", " ", pad_len), TokenKind::Text));
            }

            for (j, operand) in operands.iter().enumerate() {
                render_operand(&mut tokens, mnemonic, operand);
                if j != operands.len() - 1 {
                    tokens.push(Token::new(", ", TokenKind::OperandSeparator));
                }
            }
        }

        for transfer in &self.parallel {
            tokens.push(Token::new(" ", TokenKind::Text));
            tokens.extend(transfer.disassemble());
        }

        tokens
    }
}

fn render_operand(tokens: &mut Vec<Token>, mnemonic: &Mnemonic, operand: &Operand) {
    match operand {
        Operand::Reg(reg) => tokens.push(Token::new(&reg.name(), TokenKind::Register)),
        Operand::Imm(imm) => {
            let i = *imm;
            let text = if i < -9 {
                format!("-{:#x}", -(i as i64))
            } else if i < 0 {
                format!("-{}", -i)
            } else if i < 10 {
                format!("{i}")
            } else {
                format!("{i:#x}")
            };
            tokens.push(Token::new("#", TokenKind::Text));
            tokens.push(Token::new(&text, TokenKind::Integer(i as i64)));
        }
        Operand::Address(addr) => {
            let kind = match mnemonic.operation {
                Operation::Bf
                | Operation::Bt
                | Operation::Bra
                | Operation::Bsr
                | Operation::Ldrs
                | Operation::Ldre => TokenKind::CodeRelativeAddress(*addr),
                _ => TokenKind::PossibleAddress(*addr),
            };
            tokens.push(Token::new(&format!("{addr:#x}"), kind));
        }
        Operand::DerefReg(reg, flag) => {
            tokens.push(Token::new("@", TokenKind::BeginMemoryOperand));
            if *flag == OperandFlag::PreDec {
                tokens.push(Token::new("-", TokenKind::Text));
            }
            tokens.push(Token::new(&reg.name(), TokenKind::Register));
            if *flag == OperandFlag::PostInc {
                tokens.push(Token::new("+", TokenKind::Text));
            }
        }
        Operand::DerefRegReg(rn, rm) => tokens.extend([
            Token::new("@(", TokenKind::BeginMemoryOperand),
            Token::new(&rn.name(), TokenKind::Register),
            Token::new(",", TokenKind::OperandSeparator),
            Token::new(&rm.name(), TokenKind::Register),
            Token::new(")", TokenKind::EndMemoryOperand),
        ]),
        Operand::DerefPostIndex(base, index) => tokens.extend([
            Token::new("@", TokenKind::BeginMemoryOperand),
            Token::new(&base.name(), TokenKind::Register),
            Token::new("+", TokenKind::Text),
            Token::new(&index.name(), TokenKind::Register),
        ]),
        Operand::DerefRegImm(reg, imm) => tokens.extend([
            Token::new("@(", TokenKind::BeginMemoryOperand),
            Token::new(&format!("{imm}"), TokenKind::Integer(*imm as i64)),
            Token::new(",", TokenKind::OperandSeparator),
            Token::new(&reg.name(), TokenKind::Register),
            Token::new(")", TokenKind::EndMemoryOperand),
        ]),
        Operand::DerefIndirect(reg, imm) => tokens.extend([
            Token::new("@@(", TokenKind::BeginMemoryOperand),
            Token::new(&format!("{imm}"), TokenKind::Integer(*imm as i64)),
            Token::new(",", TokenKind::OperandSeparator),
            Token::new(&reg.name(), TokenKind::Register),
            Token::new(")", TokenKind::EndMemoryOperand),
        ]),
    }
}

impl fmt::Display for Decoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.disassemble() {
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

/// Decodes the instruction at the start of `data`. A 32-bit entry is only
/// tried when `data` holds a second halfword.
pub fn decode_bytes<'a>(
    isa: &'a Isa,
    data: &[u8],
    endianness: Endianness,
    ctx: &DecodeContext,
) -> Vec<Decoded<'a>> {
    if data.len() < 2 {
        warn!(
            "Data passed to decode_bytes is not large enough: address = {:08x}, len = {}",
            ctx.address,
            data.len()
        );
        return vec![];
    }

    let words = data
        .chunks_exact(2)
        .take(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            match endianness {
                Endianness::Little => u16::from_le_bytes(pair),
                Endianness::Big => u16::from_be_bytes(pair),
            }
        })
        .collect::<Vec<u16>>();

    let decoded = isa.decode(&words, ctx);
    if decoded.is_empty() {
        warn!(
            "No {} instruction matches {:04x} at {:08x}",
            ctx.version, words[0], ctx.address
        );
    }

    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{insn::Insn, registers::SuperhRegister};

    fn text(decoded: &Decoded) -> String {
        decoded.to_string().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_disassemble_tokens() {
        static MOV: Insn = Insn::new("MOV.L Rm,@-Rn", "0010nnnnmmmm0110", "");
        let entry = Entry::new(&MOV).unwrap();
        let decoded = Decoded::new(&entry, 0x2f36, 0).unwrap();

        let tokens = decoded.disassemble();
        assert_eq!(tokens[0], Token::new("mov.l", TokenKind::Instruction));
        assert_eq!(tokens[1].kind, TokenKind::Text);
        assert_eq!(tokens[2], Token::new("r3", TokenKind::Register));
        assert_eq!(tokens[3].kind, TokenKind::OperandSeparator);
        assert_eq!(tokens[4].kind, TokenKind::BeginMemoryOperand);
        assert_eq!(decoded.to_string(), "mov.l     r3, @-r15");
        assert_eq!(
            decoded.operands().copied().collect::<Vec<_>>(),
            vec![
                Operand::Reg(SuperhRegister::R3),
                Operand::DerefReg(SuperhRegister::R15, OperandFlag::PreDec)
            ]
        );
    }

    #[test]
    fn test_negative_immediate() {
        static ADD: Insn = Insn::new("ADD #imm,Rn", "0111nnnniiiiiiii", "");
        let entry = Entry::new(&ADD).unwrap();
        assert_eq!(text(&Decoded::new(&entry, 0x7ffc, 0).unwrap()), "add #-4, r15");
        assert_eq!(text(&Decoded::new(&entry, 0x7f80, 0).unwrap()), "add #-0x80, r15");
        assert_eq!(text(&Decoded::new(&entry, 0x7f20, 0).unwrap()), "add #0x20, r15");
    }

    #[test]
    fn test_conditional_branch_info() {
        static BT: Insn = Insn::new("BT label", "10001001dddddddd", "");
        let entry = Entry::new(&BT).unwrap();
        let decoded = Decoded::new(&entry, 0x8902, 0x1000).unwrap();
        assert_eq!(
            decoded.branch(),
            vec![BranchInfo::False(0x1002), BranchInfo::True(0x1008)]
        );
        assert!(decoded
            .disassemble()
            .iter()
            .any(|token| token.kind == TokenKind::CodeRelativeAddress(0x1008)));
    }

    #[test]
    fn test_other_branch_info() {
        static BSR: Insn = Insn::new("BSR label", "1011dddddddddddd", "").delayed();
        static JMP: Insn = Insn::new("JMP @Rm", "0100mmmm00101011", "").delayed();
        static RTS: Insn = Insn::new("RTS", "0000000000001011", "").delayed();
        static TRAPA: Insn = Insn::new("TRAPA #imm", "11000011iiiiiiii", "");
        static JSR: Insn = Insn::new("JSR @Rm", "0100mmmm00001011", "").delayed();

        let branch = |insn: &'static Insn, word: u32| {
            let entry = Entry::new(insn).unwrap();
            let decoded = Decoded::new(&entry, word, 0x100).unwrap();
            decoded.branch()
        };

        assert_eq!(branch(&BSR, 0xb010), vec![BranchInfo::Call(0x124)]);
        assert_eq!(branch(&JMP, 0x432b), vec![BranchInfo::Indirect]);
        assert_eq!(branch(&RTS, 0x000b), vec![BranchInfo::FunctionReturn]);
        assert_eq!(branch(&TRAPA, 0xc320), vec![BranchInfo::SystemCall]);
        assert!(branch(&JSR, 0x430b).is_empty());
    }

    #[test]
    fn test_pc_relative_load_is_possible_address() {
        static MOV: Insn = Insn::new("MOV.L @(disp,PC),Rn", "1101nnnndddddddd", "");
        let entry = Entry::new(&MOV).unwrap();
        let decoded = Decoded::new(&entry, 0xd102, 0x1002).unwrap();
        assert_eq!(text(&decoded), "mov.l 0x100c, r1");
        assert!(decoded
            .disassemble()
            .iter()
            .any(|token| token.kind == TokenKind::PossibleAddress(0x100c)));
    }

    #[test]
    fn test_parallel_form_renders_both_mnemonics() {
        static PSUB: Insn = Insn::new(
            "PSUB Sx,Sy,Du PMULS Se,Sf,Dg",
            "111110**********0110eeffxxyygguu",
            "",
        );
        let entry = Entry::new(&PSUB).unwrap();
        // Sx=X1 Sy=Y0 Du=A0, Se=X0 Sf=Y0 Dg=M0
        let decoded = Decoded::new(&entry, 0xf800_6042, 0).unwrap();
        assert_eq!(decoded.size, 4);
        assert_eq!(decoded.parts().len(), 2);
        assert_eq!(text(&decoded), "psub x1, y0, a0 pmuls x0, y0, m0");
    }

    #[test]
    fn test_decode_bytes_endianness() {
        let isa = Isa::new().unwrap();
        let ctx = DecodeContext::new(SuperhVersion::SH4).at(0x8c00_0000);

        let little = decode_bytes(&isa, &[0x33, 0x60], Endianness::Little, &ctx);
        assert_eq!(little.len(), 1);
        assert_eq!(text(&little[0]), "mov r3, r0");
        assert_eq!(little[0].address, 0x8c00_0000);

        let big = decode_bytes(&isa, &[0x60, 0x33], Endianness::Big, &ctx);
        assert_eq!(text(&big[0]), "mov r3, r0");

        assert!(decode_bytes(&isa, &[0x33], Endianness::Little, &ctx).is_empty());
    }
}
