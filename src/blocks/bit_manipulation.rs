use super::*;

const BIT_LOAD: &[Exception] = &[SlotIllegalInstruction, DataAddressErrorRead];
const BIT_STORE: &[Exception] = &[
    SlotIllegalInstruction,
    DataAddressErrorRead,
    DataAddressErrorWrite,
];

pub(super) static INSNS: &[Insn] = &[
    Insn::new("BAND.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010100dddddddddddd", "(imm of (disp + Rn)) & T -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("ANDs the selected bit of the byte at Rn plus disp into T.")
        .operation("T &= (read_8(R[n] + disp) >> imm) & 1;")
        .example("BAND.B #3,@(4,R1) ; T &= bit 3 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
    Insn::new("BANDNOT.B #imm3,@(disp12,Rn)", "0011nnnn0iii10011100dddddddddddd", "~(imm of (disp + Rn)) & T -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("ANDs the inverse of the selected bit into T.")
        .operation("T &= ~(read_8(R[n] + disp) >> imm) & 1;")
        .example("BANDNOT.B #3,@(4,R1) ; T &= !bit 3 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
    Insn::new("BCLR #imm3,Rn", "10000110nnnn0iii", "0 -> imm of Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Clears bit imm of Rn.")
        .operation("R[n] &= ~(1 << imm);")
        .example("BCLR #7,R0 ; R0 = H'000000FF gives R0 = H'0000007F"),
    Insn::new("BCLR.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010000dddddddddddd", "0 -> (imm of (disp + Rn))")
        .on(SH2A)
        .cycles("3", "2")
        .describe("Clears the selected bit of the byte at Rn plus disp.")
        .operation("addr = R[n] + disp;\nwrite_8(addr, read_8(addr) & ~(1 << imm));")
        .example("BCLR.B #7,@(4,R1) ; clear bit 7 of the byte at R1 + 4")
        .exceptions(BIT_STORE),
    Insn::new("BLD #imm3,Rn", "10000111nnnn1iii", "imm of Rn -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("1", "1")
        .describe("Copies bit imm of Rn to T.")
        .operation("T = (R[n] >> imm) & 1;")
        .example("BLD #0,R0 ; T = bit 0 of R0"),
    Insn::new("BLD.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010011dddddddddddd", "(imm of (disp + Rn)) -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("Copies the selected bit of the byte at Rn plus disp to T.")
        .operation("T = (read_8(R[n] + disp) >> imm) & 1;")
        .example("BLD.B #0,@(4,R1) ; T = bit 0 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
    Insn::new("BLDNOT.B #imm3,@(disp12,Rn)", "0011nnnn0iii10011011dddddddddddd", "~(imm of (disp + Rn)) -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("Copies the inverse of the selected bit to T.")
        .operation("T = ~(read_8(R[n] + disp) >> imm) & 1;")
        .example("BLDNOT.B #0,@(4,R1) ; T = !bit 0 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
    Insn::new("BOR.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010101dddddddddddd", "(imm of (disp + Rn)) | T -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("ORs the selected bit into T.")
        .operation("T |= (read_8(R[n] + disp) >> imm) & 1;")
        .example("BOR.B #3,@(4,R1) ; T |= bit 3 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
    Insn::new("BORNOT.B #imm3,@(disp12,Rn)", "0011nnnn0iii10011101dddddddddddd", "~(imm of (disp + Rn)) | T -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("ORs the inverse of the selected bit into T.")
        .operation("T |= ~(read_8(R[n] + disp) >> imm) & 1;")
        .example("BORNOT.B #3,@(4,R1) ; T |= !bit 3 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
    Insn::new("BSET #imm3,Rn", "10000110nnnn1iii", "1 -> imm of Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Sets bit imm of Rn.")
        .operation("R[n] |= 1 << imm;")
        .example("BSET #7,R0 ; R0 = H'00000000 gives R0 = H'00000080"),
    Insn::new("BSET.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010001dddddddddddd", "1 -> (imm of (disp + Rn))")
        .on(SH2A)
        .cycles("3", "2")
        .describe("Sets the selected bit of the byte at Rn plus disp.")
        .operation("addr = R[n] + disp;\nwrite_8(addr, read_8(addr) | (1 << imm));")
        .example("BSET.B #7,@(4,R1) ; set bit 7 of the byte at R1 + 4")
        .exceptions(BIT_STORE),
    Insn::new("BST #imm3,Rn", "10000111nnnn0iii", "T -> imm of Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Copies T to bit imm of Rn.")
        .operation("R[n] = (R[n] & ~(1 << imm)) | (T << imm);")
        .example("SETT\nBST #4,R0 ; R0 = H'00000000 gives R0 = H'00000010"),
    Insn::new("BST.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010010dddddddddddd", "T -> (imm of (disp + Rn))")
        .on(SH2A)
        .cycles("3", "2")
        .describe("Copies T to the selected bit of the byte at Rn plus disp.")
        .operation("addr = R[n] + disp;\nwrite_8(addr, (read_8(addr) & ~(1 << imm)) | (T << imm));")
        .example("SETT\nBST.B #4,@(4,R1) ; set bit 4 of the byte at R1 + 4")
        .exceptions(BIT_STORE),
    Insn::new("BXOR.B #imm3,@(disp12,Rn)", "0011nnnn0iii10010110dddddddddddd", "(imm of (disp + Rn)) ^ T -> T")
        .on(SH2A)
        .t(TBit::Result)
        .cycles("3", "3")
        .describe("Exclusive-ORs the selected bit into T.")
        .operation("T ^= (read_8(R[n] + disp) >> imm) & 1;")
        .example("BXOR.B #3,@(4,R1) ; T ^= bit 3 of the byte at R1 + 4")
        .exceptions(BIT_LOAD),
];
