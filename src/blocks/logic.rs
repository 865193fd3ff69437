use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("AND Rm,Rn", "0010nnnnmmmm1001", "Rn & Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("ANDs Rm into Rn.")
        .operation("R[n] &= R[m];")
        .example("AND R0,R1 ; R0 = H'AAAAAAAA, R1 = H'55555555 gives R1 = 0"),
    Insn::new("AND #imm,R0", "11001001iiiiiiii", "R0 & (zero extend)imm -> R0")
        .group(Ex)
        .cycles("1", "1")
        .describe("ANDs the zero-extended 8-bit immediate into R0.")
        .operation("R[0] &= zero_extend_8(imm);")
        .example("AND #H'0F,R0 ; R0 = H'FFFFFFFF gives R0 = H'0000000F"),
    Insn::new("AND.B #imm,@(R0,GBR)", "11001101iiiiiiii", "(R0 + GBR) & (zero extend)imm -> (R0 + GBR)")
        .group(Co)
        .cycles("4", "4")
        .timing(&[Cycles::on(SH1_SH2, "3", "3")])
        .describe("ANDs the immediate into the byte at GBR plus R0.")
        .operation("addr = GBR + R[0];\nwrite_8(addr, read_8(addr) & imm);")
        .example("AND.B #H'80,@(R0,GBR) ; keep only bit 7 of the byte at GBR + R0")
        .exceptions(LOAD_STORE),
    Insn::new("NOT Rm,Rn", "0110nnnnmmmm0111", "~Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Stores the one's complement of Rm in Rn.")
        .operation("R[n] = ~R[m];")
        .example("NOT R0,R1 ; R0 = H'AAAAAAAA gives R1 = H'55555555"),
    Insn::new("OR Rm,Rn", "0010nnnnmmmm1011", "Rn | Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("ORs Rm into Rn.")
        .operation("R[n] |= R[m];")
        .example("OR R0,R1 ; R0 = H'AAAA5555, R1 = H'55550000 gives R1 = H'FFFF5555"),
    Insn::new("OR #imm,R0", "11001011iiiiiiii", "R0 | (zero extend)imm -> R0")
        .group(Ex)
        .cycles("1", "1")
        .describe("ORs the zero-extended 8-bit immediate into R0.")
        .operation("R[0] |= zero_extend_8(imm);")
        .example("OR #H'F0,R0 ; R0 = H'00000008 gives R0 = H'000000F8"),
    Insn::new("OR.B #imm,@(R0,GBR)", "11001111iiiiiiii", "(R0 + GBR) | (zero extend)imm -> (R0 + GBR)")
        .group(Co)
        .cycles("4", "4")
        .timing(&[Cycles::on(SH1_SH2, "3", "3")])
        .describe("ORs the immediate into the byte at GBR plus R0.")
        .operation("addr = GBR + R[0];\nwrite_8(addr, read_8(addr) | imm);")
        .example("OR.B #H'50,@(R0,GBR) ; byte H'A5 at GBR + R0 becomes H'F5")
        .exceptions(LOAD_STORE),
    Insn::new("TAS.B @Rn", "0100nnnn00011011", "If (Rn) = 0: 1 -> T\nElse: 0 -> T\n1 -> MSB of (Rn)")
        .t(TBit::Result)
        .group(Co)
        .cycles("5", "5")
        .timing(&[Cycles::on(SH1_SH2, "4", "4")])
        .describe(
            "Reads the byte at Rn, sets T if it is zero and writes it back with bit 7 \
             set. The bus is locked for the read-modify-write.",
        )
        .operation("tmp = read_8(R[n]);\nT = tmp == 0;\nwrite_8(R[n], tmp | 0x80);")
        .example("loop:\nTAS.B @R7 ; T = 1 if the lock byte was 0\nBF loop")
        .exceptions(LOAD_STORE),
    Insn::new("TST Rm,Rn", "0010nnnnmmmm1000", "If Rn & Rm = 0: 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("ANDs Rm and Rn and sets T when the result is zero. Neither register changes.")
        .operation("T = (R[n] & R[m]) == 0;")
        .example("TST R0,R0 ; T = R0 == 0"),
    Insn::new("TST #imm,R0", "11001000iiiiiiii", "If R0 & (zero extend)imm = 0: 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Tests R0 against the zero-extended immediate.")
        .operation("T = (R[0] & zero_extend_8(imm)) == 0;")
        .example("TST #H'80,R0 ; T = bit 7 of R0 is clear"),
    Insn::new("TST.B #imm,@(R0,GBR)", "11001100iiiiiiii", "If (R0 + GBR) & (zero extend)imm = 0: 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Co)
        .cycles("3", "3")
        .describe("Tests the byte at GBR plus R0 against the immediate.")
        .operation("T = (read_8(GBR + R[0]) & imm) == 0;")
        .example("TST.B #H'A5,@(R0,GBR) ; T = 1 if the byte has none of bits 7, 5, 2, 0")
        .exceptions(LOAD),
    Insn::new("XOR Rm,Rn", "0010nnnnmmmm1010", "Rn ^ Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Exclusive-ORs Rm into Rn.")
        .operation("R[n] ^= R[m];")
        .example("XOR R0,R1 ; R0 = H'AAAAAAAA, R1 = H'55555555 gives R1 = H'FFFFFFFF"),
    Insn::new("XOR #imm,R0", "11001010iiiiiiii", "R0 ^ (zero extend)imm -> R0")
        .group(Ex)
        .cycles("1", "1")
        .describe("Exclusive-ORs the zero-extended 8-bit immediate into R0.")
        .operation("R[0] ^= zero_extend_8(imm);")
        .example("XOR #H'F0,R0 ; R0 = H'FFFFFFFF gives R0 = H'FFFFFF0F"),
    Insn::new("XOR.B #imm,@(R0,GBR)", "11001110iiiiiiii", "(R0 + GBR) ^ (zero extend)imm -> (R0 + GBR)")
        .group(Co)
        .cycles("4", "4")
        .timing(&[Cycles::on(SH1_SH2, "3", "3")])
        .describe("Exclusive-ORs the immediate into the byte at GBR plus R0.")
        .operation("addr = GBR + R[0];\nwrite_8(addr, read_8(addr) ^ imm);")
        .example("XOR.B #H'A5,@(R0,GBR) ; byte H'A5 at GBR + R0 becomes H'00")
        .exceptions(LOAD_STORE),
];
