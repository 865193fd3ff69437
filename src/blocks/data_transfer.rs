use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("MOV #imm,Rn", "1110nnnniiiiiiii", "imm -> sign extension -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe(
            "Stores an immediate value, sign-extended to longword, in general register Rn.",
        )
        .operation("R[n] = sign_extend_8(imm);")
        .example("MOV #H'80,R1 ; R1 = H'FFFFFF80"),
    Insn::new("MOVA @(disp,PC),R0", "11000111dddddddd", "(disp*4) + (PC & 0xFFFFFFFC) + 4 -> R0")
        .group(Ex)
        .cycles("1", "1")
        .describe(
            "Stores the effective address of the source operand into general register R0. \
             The 8-bit displacement is zero-extended and quadrupled and added to the \
             longword-aligned address of this instruction plus 4.",
        )
        .note("Executed in a delay slot, PC is the branch destination address plus 2.")
        .operation("R[0] = (PC & 0xFFFFFFFC) + 4 + (zero_extend_8(disp) << 2);")
        .example("MOVA table,R0 ; R0 = address of table\n.align 4\ntable: .long 1,2,3")
        .exceptions(SLOT),
    Insn::new("MOV.W @(disp,PC),Rn", "1001nnnndddddddd", "(disp*2 + PC + 4) -> sign extension -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe(
            "Loads a word from the PC-relative address and sign-extends it into Rn. \
             The displacement is zero-extended and doubled.",
        )
        .operation("R[n] = sign_extend_16(read_16(PC + 4 + (zero_extend_8(disp) << 1)));")
        .example("MOV.W value,R1 ; R1 = H'FFFF8000\n...\nvalue: .word H'8000")
        .exceptions(&[SlotIllegalInstruction, DataTlbMissRead, DataAddressErrorRead]),
    Insn::new("MOV.L @(disp,PC),Rn", "1101nnnndddddddd", "(disp*4 + (PC & 0xFFFFFFFC) + 4) -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe(
            "Loads a longword from the PC-relative address into Rn. The displacement is \
             zero-extended and quadrupled; the lower two bits of PC are masked off.",
        )
        .operation("R[n] = read_32((PC & 0xFFFFFFFC) + 4 + (zero_extend_8(disp) << 2));")
        .example("MOV.L value,R1 ; R1 = H'12345678\n...\n.align 4\nvalue: .long H'12345678")
        .exceptions(&[SlotIllegalInstruction, DataTlbMissRead, DataAddressErrorRead]),
    Insn::new("MOV Rm,Rn", "0110nnnnmmmm0011", "Rm -> Rn")
        .group(Mt)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .describe("Transfers the contents of general register Rm to Rn.")
        .operation("R[n] = R[m];")
        .example("MOV R0,R1 ; R1 = R0"),
    Insn::new("MOV.B Rm,@Rn", "0010nnnnmmmm0000", "Rm -> (Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lowest byte of Rm at the address in Rn.")
        .operation("write_8(R[n], R[m]);")
        .example("MOV.B R0,@R1 ; byte at R1 = low byte of R0")
        .exceptions(STORE),
    Insn::new("MOV.W Rm,@Rn", "0010nnnnmmmm0001", "Rm -> (Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lower word of Rm at the address in Rn.")
        .operation("write_16(R[n], R[m]);")
        .example("MOV.W R0,@R1 ; word at R1 = low word of R0")
        .exceptions(STORE),
    Insn::new("MOV.L Rm,@Rn", "0010nnnnmmmm0010", "Rm -> (Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores Rm at the address in Rn.")
        .operation("write_32(R[n], R[m]);")
        .example("MOV.L R0,@R1 ; long at R1 = R0")
        .exceptions(STORE),
    Insn::new("MOV.B @Rm,Rn", "0110nnnnmmmm0000", "(Rm) -> sign extension -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a byte from the address in Rm and sign-extends it into Rn.")
        .operation("R[n] = sign_extend_8(read_8(R[m]));")
        .example("MOV.B @R0,R1 ; byte H'80 loads as R1 = H'FFFFFF80")
        .exceptions(LOAD),
    Insn::new("MOV.W @Rm,Rn", "0110nnnnmmmm0001", "(Rm) -> sign extension -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a word from the address in Rm and sign-extends it into Rn.")
        .operation("R[n] = sign_extend_16(read_16(R[m]));")
        .example("MOV.W @R0,R1 ; word H'8000 loads as R1 = H'FFFF8000")
        .exceptions(LOAD),
    Insn::new("MOV.L @Rm,Rn", "0110nnnnmmmm0010", "(Rm) -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a longword from the address in Rm into Rn.")
        .operation("R[n] = read_32(R[m]);")
        .example("MOV.L @R0,R1 ; R1 = long at R0")
        .exceptions(LOAD),
    Insn::new("MOV.B Rm,@-Rn", "0010nnnnmmmm0100", "Rn-1 -> Rn, Rm -> (Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Decrements Rn by 1 and stores the lowest byte of Rm at the new address.")
        .operation("R[n] -= 1;\nwrite_8(R[n], R[m]);")
        .example("MOV.B R1,@-R0 ; R0 -= 1, byte at R0 = R1")
        .exceptions(STORE),
    Insn::new("MOV.W Rm,@-Rn", "0010nnnnmmmm0101", "Rn-2 -> Rn, Rm -> (Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Decrements Rn by 2 and stores the lower word of Rm at the new address.")
        .operation("R[n] -= 2;\nwrite_16(R[n], R[m]);")
        .example("MOV.W R1,@-R0 ; R0 -= 2, word at R0 = R1")
        .exceptions(STORE),
    Insn::new("MOV.L Rm,@-Rn", "0010nnnnmmmm0110", "Rn-4 -> Rn, Rm -> (Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Decrements Rn by 4 and stores Rm at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], R[m]);")
        .example("MOV.L R0,@-R15 ; push R0")
        .exceptions(STORE),
    Insn::new("MOV.B @Rm+,Rn", "0110nnnnmmmm0100", "(Rm) -> sign extension -> Rn, Rm+1 -> Rm")
        .group(Ls)
        .cycles("1", "2")
        .describe(
            "Loads a sign-extended byte from the address in Rm, then increments Rm by 1. \
             When n equals m the loaded value wins.",
        )
        .operation("R[n] = sign_extend_8(read_8(R[m]));\nif (n != m) R[m] += 1;")
        .example("MOV.B @R0+,R1 ; R1 = byte at R0, R0 += 1")
        .exceptions(LOAD),
    Insn::new("MOV.W @Rm+,Rn", "0110nnnnmmmm0101", "(Rm) -> sign extension -> Rn, Rm+2 -> Rm")
        .group(Ls)
        .cycles("1", "2")
        .describe(
            "Loads a sign-extended word from the address in Rm, then increments Rm by 2.",
        )
        .operation("R[n] = sign_extend_16(read_16(R[m]));\nif (n != m) R[m] += 2;")
        .example("MOV.W @R0+,R1 ; R1 = word at R0, R0 += 2")
        .exceptions(LOAD),
    Insn::new("MOV.L @Rm+,Rn", "0110nnnnmmmm0110", "(Rm) -> Rn, Rm+4 -> Rm")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a longword from the address in Rm, then increments Rm by 4.")
        .operation("R[n] = read_32(R[m]);\nif (n != m) R[m] += 4;")
        .example("MOV.L @R15+,R14 ; pop R14")
        .exceptions(LOAD),
    Insn::new("MOV.B R0,@(disp,Rn)", "10000000nnnndddd", "R0 -> (disp + Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe(
            "Stores the lowest byte of R0 at Rn plus the zero-extended 4-bit displacement.",
        )
        .operation("write_8(R[n] + zero_extend_4(disp), R[0]);")
        .example("MOV.B R0,@(2,R1) ; byte at R1 + 2 = R0")
        .exceptions(STORE),
    Insn::new("MOV.W R0,@(disp,Rn)", "10000001nnnndddd", "R0 -> (disp*2 + Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lower word of R0 at Rn plus the doubled 4-bit displacement.")
        .operation("write_16(R[n] + (zero_extend_4(disp) << 1), R[0]);")
        .example("MOV.W R0,@(4,R1) ; word at R1 + 4 = R0")
        .exceptions(STORE),
    Insn::new("MOV.L Rm,@(disp,Rn)", "0001nnnnmmmmdddd", "Rm -> (disp*4 + Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores Rm at Rn plus the quadrupled 4-bit displacement.")
        .operation("write_32(R[n] + (zero_extend_4(disp) << 2), R[m]);")
        .example("MOV.L R2,@(8,R1) ; long at R1 + 8 = R2")
        .exceptions(STORE),
    Insn::new("MOV.B @(disp,Rm),R0", "10000100mmmmdddd", "(disp + Rm) -> sign extension -> R0")
        .group(Ls)
        .cycles("1", "2")
        .describe(
            "Loads a sign-extended byte from Rm plus the zero-extended 4-bit displacement \
             into R0.",
        )
        .operation("R[0] = sign_extend_8(read_8(R[m] + zero_extend_4(disp)));")
        .example("MOV.B @(2,R1),R0 ; R0 = byte at R1 + 2")
        .exceptions(LOAD),
    Insn::new("MOV.W @(disp,Rm),R0", "10000101mmmmdddd", "(disp*2 + Rm) -> sign extension -> R0")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a sign-extended word from Rm plus the doubled displacement into R0.")
        .operation("R[0] = sign_extend_16(read_16(R[m] + (zero_extend_4(disp) << 1)));")
        .example("MOV.W @(4,R1),R0 ; R0 = word at R1 + 4")
        .exceptions(LOAD),
    Insn::new("MOV.L @(disp,Rm),Rn", "0101nnnnmmmmdddd", "(disp*4 + Rm) -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a longword from Rm plus the quadrupled displacement into Rn.")
        .operation("R[n] = read_32(R[m] + (zero_extend_4(disp) << 2));")
        .example("MOV.L @(8,R1),R2 ; R2 = long at R1 + 8")
        .exceptions(LOAD),
    Insn::new("MOV.B Rm,@(R0,Rn)", "0000nnnnmmmm0100", "Rm -> (R0 + Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lowest byte of Rm at R0 plus Rn.")
        .operation("write_8(R[n] + R[0], R[m]);")
        .example("MOV.B R1,@(R0,R2) ; byte at R2 + R0 = R1")
        .exceptions(STORE),
    Insn::new("MOV.W Rm,@(R0,Rn)", "0000nnnnmmmm0101", "Rm -> (R0 + Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lower word of Rm at R0 plus Rn.")
        .operation("write_16(R[n] + R[0], R[m]);")
        .example("MOV.W R1,@(R0,R2) ; word at R2 + R0 = R1")
        .exceptions(STORE),
    Insn::new("MOV.L Rm,@(R0,Rn)", "0000nnnnmmmm0110", "Rm -> (R0 + Rn)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores Rm at R0 plus Rn.")
        .operation("write_32(R[n] + R[0], R[m]);")
        .example("MOV.L R1,@(R0,R2) ; long at R2 + R0 = R1")
        .exceptions(STORE),
    Insn::new("MOV.B @(R0,Rm),Rn", "0000nnnnmmmm1100", "(R0 + Rm) -> sign extension -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a sign-extended byte from R0 plus Rm into Rn.")
        .operation("R[n] = sign_extend_8(read_8(R[m] + R[0]));")
        .example("MOV.B @(R0,R2),R1 ; R1 = byte at R2 + R0")
        .exceptions(LOAD),
    Insn::new("MOV.W @(R0,Rm),Rn", "0000nnnnmmmm1101", "(R0 + Rm) -> sign extension -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a sign-extended word from R0 plus Rm into Rn.")
        .operation("R[n] = sign_extend_16(read_16(R[m] + R[0]));")
        .example("MOV.W @(R0,R2),R1 ; R1 = word at R2 + R0")
        .exceptions(LOAD),
    Insn::new("MOV.L @(R0,Rm),Rn", "0000nnnnmmmm1110", "(R0 + Rm) -> Rn")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a longword from R0 plus Rm into Rn.")
        .operation("R[n] = read_32(R[m] + R[0]);")
        .example("MOV.L @(R0,R2),R1 ; R1 = long at R2 + R0")
        .exceptions(LOAD),
    Insn::new("MOV.B R0,@(disp,GBR)", "11000000dddddddd", "R0 -> (disp + GBR)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lowest byte of R0 at GBR plus the zero-extended displacement.")
        .operation("write_8(GBR + zero_extend_8(disp), R[0]);")
        .example("MOV.B R0,@(1,GBR) ; byte at GBR + 1 = R0")
        .exceptions(STORE),
    Insn::new("MOV.W R0,@(disp,GBR)", "11000001dddddddd", "R0 -> (disp*2 + GBR)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores the lower word of R0 at GBR plus the doubled displacement.")
        .operation("write_16(GBR + (zero_extend_8(disp) << 1), R[0]);")
        .example("MOV.W R0,@(2,GBR) ; word at GBR + 2 = R0")
        .exceptions(STORE),
    Insn::new("MOV.L R0,@(disp,GBR)", "11000010dddddddd", "R0 -> (disp*4 + GBR)")
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores R0 at GBR plus the quadrupled displacement.")
        .operation("write_32(GBR + (zero_extend_8(disp) << 2), R[0]);")
        .example("MOV.L R0,@(4,GBR) ; long at GBR + 4 = R0")
        .exceptions(STORE),
    Insn::new("MOV.B @(disp,GBR),R0", "11000100dddddddd", "(disp + GBR) -> sign extension -> R0")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a sign-extended byte from GBR plus the displacement into R0.")
        .operation("R[0] = sign_extend_8(read_8(GBR + zero_extend_8(disp)));")
        .example("MOV.B @(1,GBR),R0 ; R0 = byte at GBR + 1")
        .exceptions(LOAD),
    Insn::new("MOV.W @(disp,GBR),R0", "11000101dddddddd", "(disp*2 + GBR) -> sign extension -> R0")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a sign-extended word from GBR plus the doubled displacement into R0.")
        .operation("R[0] = sign_extend_16(read_16(GBR + (zero_extend_8(disp) << 1)));")
        .example("MOV.W @(2,GBR),R0 ; R0 = word at GBR + 2")
        .exceptions(LOAD),
    Insn::new("MOV.L @(disp,GBR),R0", "11000110dddddddd", "(disp*4 + GBR) -> R0")
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads a longword from GBR plus the quadrupled displacement into R0.")
        .operation("R[0] = read_32(GBR + (zero_extend_8(disp) << 2));")
        .example("MOV.L @(4,GBR),R0 ; R0 = long at GBR + 4")
        .exceptions(LOAD),
    Insn::new("MOVCA.L R0,@Rn", "0000nnnn11000011", "R0 -> (Rn) (without fetching cache block)")
        .on(SH4_UP)
        .group(Ls)
        .cycles("1", "3-7")
        .describe(
            "Stores R0 at the address in Rn. On a cache miss the line is allocated \
             without reading it from memory first.",
        )
        .operation("write_32(R[n], R[0]); // allocate on write, no line fill")
        .example("MOVCA.L R0,@R1 ; allocate the line without reading memory")
        .exceptions(STORE),
    Insn::new("MOVCO.L R0,@Rn", "0000nnnn01110011", "LDST -> T, if (T == 1) R0 -> (Rn), 0 -> LDST")
        .on(SH4A)
        .t(TBit::Result)
        .group(Co)
        .cycles("1", "1")
        .describe(
            "Conditional store paired with MOVLI.L. Stores R0 only if the LDST flag is \
             still set, copies LDST to T and clears LDST.",
        )
        .operation("T = LDST;\nif (T) write_32(R[n], R[0]);\nLDST = 0;")
        .example("retry:\nMOVLI.L @R1,R0\nADD #1,R0\nMOVCO.L R0,@R1 ; T = 1 if the store happened\nBF retry")
        .exceptions(STORE),
    Insn::new("MOVLI.L @Rm,R0", "0000mmmm01100011", "1 -> LDST, (Rm) -> R0")
        .on(SH4A)
        .group(Co)
        .cycles("1", "1")
        .describe("Load-linked: loads a longword into R0 and sets the LDST flag.")
        .operation("LDST = 1;\nR[0] = read_32(R[m]);")
        .example("retry:\nMOVLI.L @R1,R0 ; R0 = long at R1, LDST = 1\nADD #1,R0\nMOVCO.L R0,@R1\nBF retry")
        .exceptions(LOAD),
    Insn::new("MOVUA.L @Rm,R0", "0100mmmm10101001", "(Rm) -> R0 (load non-aligned data)")
        .on(SH4A)
        .group(Ls)
        .cycles("2", "2")
        .describe("Loads a longword from any address, aligned or not, into R0.")
        .operation("R[0] = read_unaligned_32(R[m]);")
        .example("MOVUA.L @R1,R0 ; R0 = long at R1, R1 = H'8C000001")
        .exceptions(&[DataTlbMissRead, DataTlbProtectionRead]),
    Insn::new("MOVUA.L @Rm+,R0", "0100mmmm11101001", "(Rm) -> R0, Rm + 4 -> Rm (load non-aligned data)")
        .on(SH4A)
        .group(Ls)
        .cycles("2", "2")
        .describe("Loads an unaligned longword into R0 and increments Rm by 4.")
        .operation("R[0] = read_unaligned_32(R[m]);\nif (m != 0) R[m] += 4;")
        .example("MOVUA.L @R1+,R0 ; R0 = long at R1, R1 += 4")
        .exceptions(&[DataTlbMissRead, DataTlbProtectionRead]),
    Insn::new("MOVI20 #imm20,Rn", "0000nnnniiii0000iiiiiiiiiiiiiiii", "imm -> sign extension -> Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores a 20-bit immediate, sign-extended to longword, in Rn.")
        .operation("R[n] = sign_extend_20(imm);")
        .example("MOVI20 #H'12345,R1 ; R1 = H'00012345")
        .exceptions(SLOT),
    Insn::new("MOVI20S #imm20,Rn", "0000nnnniiii0001iiiiiiiiiiiiiiii", "imm << 8 -> sign extension -> Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe(
            "Shifts a 20-bit immediate left by eight bits, sign-extends it to longword \
             and stores it in Rn. Together with OR #imm,R0 this loads any 28-bit constant.",
        )
        .operation("R[n] = sign_extend_28(imm << 8);")
        .example("MOVI20S #H'12345,R1 ; R1 = H'01234500")
        .exceptions(SLOT),
    Insn::new("MOV.B Rm,@(disp12,Rn)", "0011nnnnmmmm00010000dddddddddddd", "Rm -> (disp + Rn)")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores the lowest byte of Rm at Rn plus a zero-extended 12-bit displacement.")
        .operation("write_8(R[n] + zero_extend_12(disp), R[m]);")
        .example("MOV.B R0,@(H'100,R1) ; byte at R1 + H'100 = R0")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("MOV.W Rm,@(disp12,Rn)", "0011nnnnmmmm00010001dddddddddddd", "Rm -> (disp*2 + Rn)")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores the lower word of Rm at Rn plus the doubled 12-bit displacement.")
        .operation("write_16(R[n] + (zero_extend_12(disp) << 1), R[m]);")
        .example("MOV.W R0,@(H'200,R1) ; word at R1 + H'200 = R0")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("MOV.L Rm,@(disp12,Rn)", "0011nnnnmmmm00010010dddddddddddd", "Rm -> (disp*4 + Rn)")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores Rm at Rn plus the quadrupled 12-bit displacement.")
        .operation("write_32(R[n] + (zero_extend_12(disp) << 2), R[m]);")
        .example("MOV.L R0,@(H'400,R1) ; long at R1 + H'400 = R0")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("MOV.B @(disp12,Rm),Rn", "0011nnnnmmmm00010100dddddddddddd", "(disp + Rm) -> sign extension -> Rn")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Loads a sign-extended byte from Rm plus a 12-bit displacement into Rn.")
        .operation("R[n] = sign_extend_8(read_8(R[m] + zero_extend_12(disp)));")
        .example("MOV.B @(H'100,R1),R0 ; R0 = sign-extended byte at R1 + H'100")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOV.W @(disp12,Rm),Rn", "0011nnnnmmmm00010101dddddddddddd", "(disp*2 + Rm) -> sign extension -> Rn")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Loads a sign-extended word from Rm plus the doubled displacement into Rn.")
        .operation("R[n] = sign_extend_16(read_16(R[m] + (zero_extend_12(disp) << 1)));")
        .example("MOV.W @(H'200,R1),R0 ; R0 = sign-extended word at R1 + H'200")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOV.L @(disp12,Rm),Rn", "0011nnnnmmmm00010110dddddddddddd", "(disp*4 + Rm) -> Rn")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Loads a longword from Rm plus the quadrupled 12-bit displacement into Rn.")
        .operation("R[n] = read_32(R[m] + (zero_extend_12(disp) << 2));")
        .example("MOV.L @(H'400,R1),R0 ; R0 = long at R1 + H'400")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOVU.B @(disp12,Rm),Rn", "0011nnnnmmmm00011000dddddddddddd", "(disp + Rm) -> zero extension -> Rn")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Loads a zero-extended byte from Rm plus a 12-bit displacement into Rn.")
        .operation("R[n] = zero_extend_8(read_8(R[m] + zero_extend_12(disp)));")
        .example("MOVU.B @(2,R1),R0 ; byte H'80 loads as R0 = H'00000080")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOVU.W @(disp12,Rm),Rn", "0011nnnnmmmm00011001dddddddddddd", "(disp*2 + Rm) -> zero extension -> Rn")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Loads a zero-extended word from Rm plus the doubled displacement into Rn.")
        .operation("R[n] = zero_extend_16(read_16(R[m] + (zero_extend_12(disp) << 1)));")
        .example("MOVU.W @(4,R1),R0 ; word H'8000 loads as R0 = H'00008000")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOV.B R0,@Rn+", "0100nnnn10001011", "R0 -> (Rn), Rn+1 -> Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores the lowest byte of R0 at the address in Rn, then increments Rn by 1.")
        .operation("write_8(R[n], R[0]);\nR[n] += 1;")
        .example("MOV.B R0,@R1+ ; byte at R1 = R0, R1 += 1")
        .exceptions(&[DataAddressErrorWrite]),
    Insn::new("MOV.W R0,@Rn+", "0100nnnn10011011", "R0 -> (Rn), Rn+2 -> Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores the lower word of R0 at the address in Rn, then increments Rn by 2.")
        .operation("write_16(R[n], R[0]);\nR[n] += 2;")
        .example("MOV.W R0,@R1+ ; word at R1 = R0, R1 += 2")
        .exceptions(&[DataAddressErrorWrite]),
    Insn::new("MOV.L R0,@Rn+", "0100nnnn10101011", "R0 -> (Rn), Rn+4 -> Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores R0 at the address in Rn, then increments Rn by 4.")
        .operation("write_32(R[n], R[0]);\nR[n] += 4;")
        .example("MOV.L R0,@R1+ ; long at R1 = R0, R1 += 4")
        .exceptions(&[DataAddressErrorWrite]),
    Insn::new("MOV.B @-Rm,R0", "0100mmmm11001011", "Rm-1 -> Rm, (Rm) -> sign extension -> R0")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Decrements Rm by 1, then loads a sign-extended byte from it into R0.")
        .operation("R[m] -= 1;\nR[0] = sign_extend_8(read_8(R[m]));")
        .example("MOV.B @-R1,R0 ; R1 -= 1, R0 = byte at R1")
        .exceptions(&[DataAddressErrorRead]),
    Insn::new("MOV.W @-Rm,R0", "0100mmmm11011011", "Rm-2 -> Rm, (Rm) -> sign extension -> R0")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Decrements Rm by 2, then loads a sign-extended word from it into R0.")
        .operation("R[m] -= 2;\nR[0] = sign_extend_16(read_16(R[m]));")
        .example("MOV.W @-R1,R0 ; R1 -= 2, R0 = word at R1")
        .exceptions(&[DataAddressErrorRead]),
    Insn::new("MOV.L @-Rm,R0", "0100mmmm11101011", "Rm-4 -> Rm, (Rm) -> R0")
        .on(SH2A)
        .cycles("1", "2")
        .describe("Decrements Rm by 4, then loads a longword from it into R0.")
        .operation("R[m] -= 4;\nR[0] = read_32(R[m]);")
        .example("MOV.L @-R1,R0 ; R1 -= 4, R0 = long at R1")
        .exceptions(&[DataAddressErrorRead]),
    Insn::new("MOVML.L Rm,@-R15", "0100mmmm11110001", "R15-4 -> R15, Rm -> (R15) ... R0 -> (R15)")
        .on(SH2A)
        .cycles("1-16", "1-16")
        .describe(
            "Pushes registers Rm down to R0 onto the stack. When m is 15, PR is pushed \
             in place of R15.",
        )
        .operation("for (i = m; i >= 0; i--) {\n  R[15] -= 4;\n  write_32(R[15], i == 15 ? PR : R[i]);\n}")
        .example("MOVML.L R3,@-R15 ; push PR, R3, R2, R1, R0")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("MOVML.L @R15+,Rn", "0100nnnn11110101", "(R15) -> R0 ... (R15) -> Rn, R15+4 -> R15")
        .on(SH2A)
        .cycles("1-16", "2-17")
        .describe(
            "Pops registers R0 up to Rn from the stack. When n is 15, PR is restored \
             in place of R15.",
        )
        .operation("for (i = 0; i <= n; i++) {\n  if (i == 15) PR = read_32(R[15]); else R[i] = read_32(R[15]);\n  R[15] += 4;\n}")
        .example("MOVML.L @R15+,R3 ; pop R0, R1, R2, R3, PR")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOVMU.L Rm,@-R15", "0100mmmm11110000", "R15-4 -> R15, PR -> (R15) ... Rm -> (R15)")
        .on(SH2A)
        .cycles("1-16", "1-16")
        .describe("Pushes PR and then registers R14 down to Rm onto the stack.")
        .operation("for (i = 15; i >= m; i--) {\n  R[15] -= 4;\n  write_32(R[15], i == 15 ? PR : R[i]);\n}")
        .example("MOVMU.L R12,@-R15 ; push PR, R14, R13, R12")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("MOVMU.L @R15+,Rn", "0100nnnn11110100", "(R15) -> Rn ... (R15) -> PR, R15+4 -> R15")
        .on(SH2A)
        .cycles("1-16", "2-17")
        .describe("Pops registers Rn up to R14 and then PR from the stack.")
        .operation("for (i = n; i <= 15; i++) {\n  if (i == 15) PR = read_32(R[15]); else R[i] = read_32(R[15]);\n  R[15] += 4;\n}")
        .example("MOVMU.L @R15+,R12 ; pop R12, R13, R14, PR")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("MOVRT Rn", "0000nnnn00111001", "~T -> Rn")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Stores the inverse of the T bit in Rn.")
        .operation("R[n] = T ^ 1;")
        .example("SETT\nMOVRT R0 ; R0 = 0"),
    Insn::new("MOVT Rn", "0000nnnn00101001", "T -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Stores the T bit in Rn.")
        .operation("R[n] = T;")
        .example("CMP/EQ R1,R2\nMOVT R0 ; R0 = 1 if R1 == R2"),
    Insn::new("NOTT", "0000000001101000", "~T -> T")
        .on(SH2A)
        .t(TBit::Other)
        .cycles("1", "1")
        .describe("Inverts the T bit.")
        .operation("T ^= 1;")
        .example("SETT\nNOTT ; T = 0"),
    Insn::new("SWAP.B Rm,Rn", "0110nnnnmmmm1000", "Rm -> swap lower 2 bytes -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Swaps the upper and lower bytes of the lower word of Rm into Rn.")
        .operation("R[n] = (R[m] & 0xFFFF0000) | ((R[m] & 0xFF) << 8) | ((R[m] >> 8) & 0xFF);")
        .example("SWAP.B R0,R1 ; R0 = H'12345678 gives R1 = H'12347856"),
    Insn::new("SWAP.W Rm,Rn", "0110nnnnmmmm1001", "Rm -> swap upper/lower words -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Swaps the upper and lower words of Rm into Rn.")
        .operation("R[n] = (R[m] >> 16) | (R[m] << 16);")
        .example("SWAP.W R0,R1 ; R0 = H'12345678 gives R1 = H'56781234"),
    Insn::new("XTRCT Rm,Rn", "0010nnnnmmmm1101", "Rm:Rn middle 32 bits -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe(
            "Extracts the middle 32 bits of the 64-bit value Rm:Rn and stores them in Rn.",
        )
        .operation("R[n] = (R[n] >> 16) | (R[m] << 16);")
        .example("XTRCT R0,R1 ; R0 = H'01234567, R1 = H'89ABCDEF gives R1 = H'456789AB"),
];
