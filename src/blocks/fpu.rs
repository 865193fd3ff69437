use super::*;

use FpscrMode::{Pr0, Pr1, Sz0, Sz1};

/// Forms that only exist on the SH-4 family, which has the XD bank.
const XD_BANK: SuperhVersion = SH4_UP;

/// The single-precision FPUs.
const SH2E_SH3E: SuperhVersion = SuperhVersion::SH2E.union(SuperhVersion::SH3E);
const SH3E: SuperhVersion = SuperhVersion::SH3E;

pub(super) static INSNS: &[Insn] = &[
    // Transfers with FPSCR.SZ = 0.
    Insn::new("FMOV FRm,FRn", "1111nnnnmmmm1100", "FRm -> FRn")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Copies single-precision register FRm to FRn.")
        .operation("FR[n] = FR[m];")
        .example("FMOV FR1,FR2 ; FR2 = FR1")
        .exceptions(FPU_DISABLE),
    Insn::new("FMOV.S @Rm,FRn", "1111nnnnmmmm1000", "(Rm) -> FRn")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads FRn from the address in Rm.")
        .operation("FR[n] = read_32(R[m]);")
        .example("FMOV.S @R1,FR2 ; FR2 = float at R1")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.S @(R0,Rm),FRn", "1111nnnnmmmm0110", "(R0 + Rm) -> FRn")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads FRn from R0 plus Rm.")
        .operation("FR[n] = read_32(R[0] + R[m]);")
        .example("FMOV.S @(R0,R1),FR2 ; FR2 = float at R1 + R0")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.S @Rm+,FRn", "1111nnnnmmmm1001", "(Rm) -> FRn, Rm+4 -> Rm")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "1/2")
        .describe("Loads FRn from the address in Rm and increments Rm by 4.")
        .operation("FR[n] = read_32(R[m]);\nR[m] += 4;")
        .example("FMOV.S @R15+,FR2 ; pop FR2")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.S FRm,@Rn", "1111nnnnmmmm1010", "FRm -> (Rn)")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores FRm at the address in Rn.")
        .operation("write_32(R[n], FR[m]);")
        .example("FMOV.S FR2,@R1 ; float at R1 = FR2")
        .exceptions(FPU_STORE),
    Insn::new("FMOV.S FRm,@-Rn", "1111nnnnmmmm1011", "Rn-4 -> Rn, FRm -> (Rn)")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "1/1")
        .describe("Decrements Rn by 4 and stores FRm at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], FR[m]);")
        .example("FMOV.S FR2,@-R15 ; push FR2")
        .exceptions(FPU_STORE),
    Insn::new("FMOV.S FRm,@(R0,Rn)", "1111nnnnmmmm0111", "FRm -> (R0 + Rn)")
        .on(FPU)
        .mode(Sz0)
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores FRm at R0 plus Rn.")
        .operation("write_32(R[0] + R[n], FR[m]);")
        .example("FMOV.S FR2,@(R0,R1) ; float at R1 + R0 = FR2")
        .exceptions(FPU_STORE),
    // Transfers with FPSCR.SZ = 1.
    Insn::new("FMOV DRm,DRn", "1111nnn0mmm01100", "DRm -> DRn")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "0")
        .describe("Copies register pair DRm to DRn.")
        .operation("DR[n] = DR[m];")
        .example("FSCHG ; SZ = 1\nFMOV DR2,DR4 ; DR4 = DR2")
        .exceptions(FPU_DISABLE),
    Insn::new("FMOV.D @Rm,DRn", "1111nnn0mmmm1000", "(Rm) -> DRn")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "2")
        .timing(&[Cycles::on(SH2A, "2", "3")])
        .describe("Loads register pair DRn from the address in Rm.")
        .operation("DR[n] = read_64(R[m]);")
        .example("FMOV.D @R1,DR2 ; DR2 = double at R1")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.D @(R0,Rm),DRn", "1111nnn0mmmm0110", "(R0 + Rm) -> DRn")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "2")
        .timing(&[Cycles::on(SH2A, "2", "3")])
        .describe("Loads register pair DRn from R0 plus Rm.")
        .operation("DR[n] = read_64(R[0] + R[m]);")
        .example("FMOV.D @(R0,R1),DR2 ; DR2 = double at R1 + R0")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.D @Rm+,DRn", "1111nnn0mmmm1001", "(Rm) -> DRn, Rm+8 -> Rm")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1/2")
        .timing(&[Cycles::on(SH2A, "2", "3")])
        .describe("Loads register pair DRn from the address in Rm and increments Rm by 8.")
        .operation("DR[n] = read_64(R[m]);\nR[m] += 8;")
        .example("FMOV.D @R15+,DR2 ; pop FR2 and FR3 together")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.D DRm,@Rn", "1111nnnnmmm01010", "DRm -> (Rn)")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1")
        .timing(&[Cycles::on(SH2A, "2", "0")])
        .describe("Stores register pair DRm at the address in Rn.")
        .operation("write_64(R[n], DR[m]);")
        .example("FMOV.D DR2,@R1 ; double at R1 = DR2")
        .exceptions(FPU_STORE),
    Insn::new("FMOV.D DRm,@-Rn", "1111nnnnmmm01011", "Rn-8 -> Rn, DRm -> (Rn)")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1/1")
        .timing(&[Cycles::on(SH2A, "2", "0")])
        .describe("Decrements Rn by 8 and stores register pair DRm at the new address.")
        .operation("R[n] -= 8;\nwrite_64(R[n], DR[m]);")
        .example("FMOV.D DR2,@-R15 ; push FR2 and FR3 together")
        .exceptions(FPU_STORE),
    Insn::new("FMOV.D DRm,@(R0,Rn)", "1111nnnnmmm00111", "DRm -> (R0 + Rn)")
        .on(DOUBLE_FPU)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1")
        .timing(&[Cycles::on(SH2A, "2", "0")])
        .describe("Stores register pair DRm at R0 plus Rn.")
        .operation("write_64(R[0] + R[n], DR[m]);")
        .example("FMOV.D DR2,@(R0,R1) ; double at R1 + R0 = DR2")
        .exceptions(FPU_STORE),
    Insn::new("FMOV XDm,DRn", "1111nnn0mmm11100", "XDm -> DRn")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "0")
        .describe("Copies pair XDm of the back bank to DRn.")
        .operation("DR[n] = XD[m];")
        .example("FMOV XD2,DR4 ; DR4 = XD2 from the other bank")
        .exceptions(FPU_DISABLE),
    Insn::new("FMOV DRm,XDn", "1111nnn1mmm01100", "DRm -> XDn")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "0")
        .describe("Copies DRm to pair XDn of the back bank.")
        .operation("XD[n] = DR[m];")
        .example("FMOV DR4,XD2 ; XD2 in the other bank = DR4")
        .exceptions(FPU_DISABLE),
    Insn::new("FMOV XDm,XDn", "1111nnn1mmm11100", "XDm -> XDn")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "0")
        .describe("Copies back bank pair XDm to XDn.")
        .operation("XD[n] = XD[m];")
        .example("FMOV XD2,XD4 ; XD4 = XD2, both in the other bank")
        .exceptions(FPU_DISABLE),
    Insn::new("FMOV.D @Rm,XDn", "1111nnn1mmmm1000", "(Rm) -> XDn")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads back bank pair XDn from the address in Rm.")
        .operation("XD[n] = read_64(R[m]);")
        .example("FMOV.D @R1,XD2 ; XD2 = double at R1")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.D @Rm+,XDn", "1111nnn1mmmm1001", "(Rm) -> XDn, Rm+8 -> Rm")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1/2")
        .describe("Loads back bank pair XDn from the address in Rm and increments Rm by 8.")
        .operation("XD[n] = read_64(R[m]);\nR[m] += 8;")
        .example("FMOV.D @R15+,XD2 ; pop XD2")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.D @(R0,Rm),XDn", "1111nnn1mmmm0110", "(R0 + Rm) -> XDn")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "2")
        .describe("Loads back bank pair XDn from R0 plus Rm.")
        .operation("XD[n] = read_64(R[0] + R[m]);")
        .example("FMOV.D @(R0,R1),XD2 ; XD2 = double at R1 + R0")
        .exceptions(FPU_LOAD),
    Insn::new("FMOV.D XDm,@Rn", "1111nnnnmmm11010", "XDm -> (Rn)")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores back bank pair XDm at the address in Rn.")
        .operation("write_64(R[n], XD[m]);")
        .example("FMOV.D XD2,@R1 ; double at R1 = XD2")
        .exceptions(FPU_STORE),
    Insn::new("FMOV.D XDm,@-Rn", "1111nnnnmmm11011", "Rn-8 -> Rn, XDm -> (Rn)")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1/1")
        .describe("Decrements Rn by 8 and stores back bank pair XDm at the new address.")
        .operation("R[n] -= 8;\nwrite_64(R[n], XD[m]);")
        .example("FMOV.D XD2,@-R15 ; push XD2")
        .exceptions(FPU_STORE),
    Insn::new("FMOV.D XDm,@(R0,Rn)", "1111nnnnmmm10111", "XDm -> (R0 + Rn)")
        .on(XD_BANK)
        .mode(Sz1)
        .group(Ls)
        .cycles("1", "1")
        .describe("Stores back bank pair XDm at R0 plus Rn.")
        .operation("write_64(R[0] + R[n], XD[m]);")
        .example("FMOV.D XD2,@(R0,R1) ; double at R1 + R0 = XD2")
        .exceptions(FPU_STORE),
    // SH-2A displacement forms.
    Insn::new("FMOV.S FRm,@(disp12,Rn)", "0011nnnnmmmm00010011dddddddddddd", "FRm -> (disp*4 + Rn)")
        .on(SH2A)
        .mode(Sz0)
        .cycles("1", "0")
        .describe("Stores FRm at Rn plus the quadrupled 12-bit displacement.")
        .operation("write_32(R[n] + (zero_extend_12(disp) << 2), FR[m]);")
        .example("FMOV.S FR2,@(H'100,R1) ; float at R1 + H'100 = FR2")
        .exceptions(&[FpuDisable, SlotFpuDisable, SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("FMOV.D DRm,@(disp12,Rn)", "0011nnnnmmm000010011dddddddddddd", "DRm -> (disp*8 + Rn)")
        .on(SH2A)
        .mode(Sz1)
        .cycles("2", "0")
        .describe("Stores register pair DRm at Rn plus the 12-bit displacement times eight.")
        .operation("write_64(R[n] + (zero_extend_12(disp) << 3), DR[m]);")
        .example("FMOV.D DR2,@(H'100,R1) ; double at R1 + H'100 = DR2")
        .exceptions(&[FpuDisable, SlotFpuDisable, SlotIllegalInstruction, DataAddressErrorWrite]),
    Insn::new("FMOV.S @(disp12,Rm),FRn", "0011nnnnmmmm00010111dddddddddddd", "(disp*4 + Rm) -> FRn")
        .on(SH2A)
        .mode(Sz0)
        .cycles("1", "2")
        .describe("Loads FRn from Rm plus the quadrupled 12-bit displacement.")
        .operation("FR[n] = read_32(R[m] + (zero_extend_12(disp) << 2));")
        .example("FMOV.S @(H'100,R1),FR2 ; FR2 = float at R1 + H'100")
        .exceptions(&[FpuDisable, SlotFpuDisable, SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("FMOV.D @(disp12,Rm),DRn", "0011nnn0mmmm00010111dddddddddddd", "(disp*8 + Rm) -> DRn")
        .on(SH2A)
        .mode(Sz1)
        .cycles("2", "3")
        .describe("Loads register pair DRn from Rm plus the 12-bit displacement times eight.")
        .operation("DR[n] = read_64(R[m] + (zero_extend_12(disp) << 3));")
        .example("FMOV.D @(H'100,R1),DR2 ; DR2 = double at R1 + H'100")
        .exceptions(&[FpuDisable, SlotFpuDisable, SlotIllegalInstruction, DataAddressErrorRead]),
    // Constants and FPUL transfers.
    Insn::new("FLDI0 FRn", "1111nnnn10001101", "0x00000000 -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Loads single-precision 0.0 into FRn.")
        .operation("FR[n] = 0.0f;")
        .example("FLDI0 FR1 ; FR1 = H'00000000 (0.0)")
        .exceptions(FPU_DISABLE),
    Insn::new("FLDI1 FRn", "1111nnnn10011101", "0x3F800000 -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Loads single-precision 1.0 into FRn.")
        .operation("FR[n] = 1.0f;")
        .example("FLDI1 FR1 ; FR1 = H'3F800000 (1.0)")
        .exceptions(FPU_DISABLE),
    Insn::new("FLDS FRm,FPUL", "1111mmmm00011101", "FRm -> FPUL")
        .on(FPU)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Copies FRm to the FPU communication register.")
        .operation("FPUL = FR[m];")
        .example("FLDS FR1,FPUL ; FPUL = FR1\nSTS FPUL,R0 ; R0 = bits of FR1")
        .exceptions(FPU_DISABLE),
    Insn::new("FSTS FPUL,FRn", "1111nnnn00001101", "FPUL -> FRn")
        .on(FPU)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Copies FPUL to FRn.")
        .operation("FR[n] = FPUL;")
        .example("LDS R0,FPUL\nFSTS FPUL,FR1 ; FR1 = bits of R0")
        .exceptions(FPU_DISABLE),
    // Single-precision arithmetic, FPSCR.PR = 0.
    Insn::new("FABS FRn", "1111nnnn01011101", "FRn & 0x7FFFFFFF -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Clears the sign bit of FRn.")
        .operation("FR[n] = fabsf(FR[n]);")
        .example("FABS FR1 ; FR1 = -2.5 gives FR1 = 2.5")
        .exceptions(FPU_DISABLE),
    Insn::new("FNEG FRn", "1111nnnn01001101", "FRn ^ 0x80000000 -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Ls)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1")])
        .describe("Inverts the sign bit of FRn.")
        .operation("FR[n] = -FR[n];")
        .example("FNEG FR1 ; FR1 = 2.5 gives FR1 = -2.5")
        .exceptions(FPU_DISABLE),
    Insn::new("FADD FRm,FRn", "1111nnnnmmmm0000", "FRn + FRm -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "2"), Cycles::on(SH2A, "1", "3")])
        .describe("Adds FRm to FRn in single precision.")
        .operation("FR[n] += FR[m];")
        .example("FADD FR1,FR2 ; FR1 = 1.5, FR2 = 2.0 gives FR2 = 3.5")
        .exceptions(FPU_ARITH),
    Insn::new("FSUB FRm,FRn", "1111nnnnmmmm0001", "FRn - FRm -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "2"), Cycles::on(SH2A, "1", "3")])
        .describe("Subtracts FRm from FRn in single precision.")
        .operation("FR[n] -= FR[m];")
        .example("FSUB FR1,FR2 ; FR1 = 1.5, FR2 = 2.0 gives FR2 = 0.5")
        .exceptions(FPU_ARITH),
    Insn::new("FMUL FRm,FRn", "1111nnnnmmmm0010", "FRn * FRm -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "2"), Cycles::on(SH2A, "1", "3")])
        .describe("Multiplies FRn by FRm in single precision.")
        .operation("FR[n] *= FR[m];")
        .example("FMUL FR1,FR2 ; FR1 = 1.5, FR2 = 2.0 gives FR2 = 3.0")
        .exceptions(FPU_ARITH),
    Insn::new("FDIV FRm,FRn", "1111nnnnmmmm0011", "FRn / FRm -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "12/13")
        .timing(&[
            Cycles::on(SH2E_SH3E, "13", "14"),
            Cycles::on(SH2A, "10", "12"),
            Cycles::on(SH4A, "1", "14"),
        ])
        .describe("Divides FRn by FRm in single precision.")
        .operation("FR[n] /= FR[m];")
        .example("FDIV FR1,FR2 ; FR1 = 4.0, FR2 = 2.0 gives FR2 = 0.5")
        .exceptions(FPU_DIVIDE),
    Insn::new("FMAC FR0,FRm,FRn", "1111nnnnmmmm1110", "FR0 * FRm + FRn -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "2"), Cycles::on(SH2A, "1", "3")])
        .describe("Multiplies FR0 by FRm and adds the product to FRn.")
        .operation("FR[n] = FR[0] * FR[m] + FR[n];")
        .example("FMAC FR0,FR1,FR2 ; FR0 = 2.0, FR1 = 3.0, FR2 = 1.0 gives FR2 = 7.0")
        .exceptions(FPU_ARITH),
    Insn::new("FSQRT FRn", "1111nnnn01101101", "sqrt(FRn) -> FRn")
        .on(SH3E.union(DOUBLE_FPU))
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "11/12")
        .timing(&[
            Cycles::on(SH3E, "13", "14"),
            Cycles::on(SH2A, "9", "11"),
            Cycles::on(SH4A, "1", "30"),
        ])
        .describe("Takes the square root of FRn in single precision.")
        .operation("FR[n] = sqrtf(FR[n]);")
        .example("FSQRT FR1 ; FR1 = 9.0 gives FR1 = 3.0")
        .exceptions(&[FpuDisable, SlotFpuDisable, FpuInvalidOperation, FpuInexact, FpuError]),
    Insn::new("FCMP/EQ FRm,FRn", "1111nnnnmmmm0100", "If FRn = FRm: 1 -> T\nElse: 0 -> T")
        .on(FPU)
        .mode(Pr0)
        .t(TBit::Result)
        .group(Fe)
        .cycles("1", "2/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1"), Cycles::on(SH2A, "1", "2")])
        .describe("Sets T when FRn equals FRm.")
        .operation("T = FR[n] == FR[m];")
        .example("FCMP/EQ FR1,FR2 ; T = FR2 == FR1\nBT equal")
        .exceptions(FPU_INVALID),
    Insn::new("FCMP/GT FRm,FRn", "1111nnnnmmmm0101", "If FRn > FRm: 1 -> T\nElse: 0 -> T")
        .on(FPU)
        .mode(Pr0)
        .t(TBit::Result)
        .group(Fe)
        .cycles("1", "2/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "1"), Cycles::on(SH2A, "1", "2")])
        .describe("Sets T when FRn is greater than FRm.")
        .operation("T = FR[n] > FR[m];")
        .example("FCMP/GT FR1,FR2 ; T = FR2 > FR1\nBT greater")
        .exceptions(FPU_INVALID),
    Insn::new("FLOAT FPUL,FRn", "1111nnnn00101101", "(float)FPUL -> FRn")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "2"), Cycles::on(SH2A, "1", "3")])
        .describe("Converts the signed integer in FPUL to single precision.")
        .operation("FR[n] = (float)(int32)FPUL;")
        .example("MOV #-3,R0\nLDS R0,FPUL\nFLOAT FPUL,FR1 ; FR1 = -3.0")
        .exceptions(&[FpuDisable, SlotFpuDisable, FpuInexact]),
    Insn::new("FTRC FRm,FPUL", "1111mmmm00111101", "(long)FRm -> FPUL")
        .on(FPU)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3/4")
        .timing(&[Cycles::on(SH2E_SH3E, "1", "2"), Cycles::on(SH2A, "1", "3")])
        .describe("Converts FRm to a signed integer, rounding toward zero.")
        .operation("FPUL = (int32)FR[m];")
        .example("FTRC FR1,FPUL ; FR1 = -3.75 gives FPUL = -3\nSTS FPUL,R0")
        .exceptions(FPU_INVALID),
    Insn::new("FIPR FVm,FVn", "1111nnmm11101101", "inner_product(FVm, FVn) -> FR[n+3]")
        .on(SH4_UP)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "4/5")
        .describe("Computes the inner product of two four-element vectors into the last element of FVn.")
        .operation("FR[n+3] = FR[m]*FR[n] + FR[m+1]*FR[n+1] + FR[m+2]*FR[n+2] + FR[m+3]*FR[n+3];")
        .example("FIPR FV0,FV4 ; FR7 = dot product of FV0 and FV4")
        .exceptions(FPU_ARITH),
    Insn::new("FTRV XMTRX,FVn", "1111nn0111111101", "transform_vector(XMTRX, FVn) -> FVn")
        .on(SH4_UP)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "5/8")
        .describe("Multiplies FVn by the 4x4 matrix in the back bank.")
        .operation("FV[n] = XMTRX * FV[n];")
        .example("FRCHG ; load the matrix into XF0-XF15 first\nFRCHG\nFTRV XMTRX,FV4 ; FV4 = XMTRX * FV4")
        .exceptions(FPU_ARITH),
    Insn::new("FSCA FPUL,DRn", "1111nnn011111101", "sin(FPUL) -> FRn, cos(FPUL) -> FR[n+1]")
        .on(SH4A)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "3")
        .describe(
            "Computes the sine and cosine of the fixed-point angle in FPUL, where \
             0x10000 is one full turn.",
        )
        .operation("angle = (FPUL & 0xFFFF) * 2 * pi / 0x10000;\nFR[n] = sinf(angle);\nFR[n+1] = cosf(angle);")
        .example("MOV.L angle,R0 ; H'4000 is a quarter turn\nLDS R0,FPUL\nFSCA FPUL,DR2 ; FR2 = sin = 1.0, FR3 = cos = 0.0")
        .exceptions(&[FpuDisable, SlotFpuDisable, FpuInexact]),
    Insn::new("FSRRA FRn", "1111nnnn01111101", "1/sqrt(FRn) -> FRn")
        .on(SH4A)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "1")
        .describe("Approximates the reciprocal square root of FRn.")
        .operation("FR[n] = 1.0f / sqrtf(FR[n]);")
        .example("FSRRA FR1 ; FR1 = 4.0 gives FR1 = 0.5")
        .exceptions(&[FpuDisable, SlotFpuDisable, FpuInvalidOperation, FpuInexact]),
    // Double-precision arithmetic, FPSCR.PR = 1.
    Insn::new("FABS DRn", "1111nnn001011101", "DRn & 0x7FFFFFFFFFFFFFFF -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Ls)
        .cycles("1", "0")
        .describe("Clears the sign bit of DRn.")
        .operation("DR[n] = fabs(DR[n]);")
        .example("FABS DR2 ; DR2 = -2.5 gives DR2 = 2.5")
        .exceptions(FPU_DISABLE),
    Insn::new("FNEG DRn", "1111nnn001001101", "DRn ^ 0x8000000000000000 -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Ls)
        .cycles("1", "0")
        .describe("Inverts the sign bit of DRn.")
        .operation("DR[n] = -DR[n];")
        .example("FNEG DR2 ; DR2 = 2.5 gives DR2 = -2.5")
        .exceptions(FPU_DISABLE),
    Insn::new("FADD DRm,DRn", "1111nnn0mmm00000", "DRn + DRm -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("1", "7/9")
        .timing(&[Cycles::on(SH2A, "1", "5")])
        .describe("Adds DRm to DRn in double precision.")
        .operation("DR[n] += DR[m];")
        .example("FADD DR2,DR4 ; DR2 = 1.5, DR4 = 2.0 gives DR4 = 3.5")
        .exceptions(FPU_ARITH),
    Insn::new("FSUB DRm,DRn", "1111nnn0mmm00001", "DRn - DRm -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("1", "7/9")
        .timing(&[Cycles::on(SH2A, "1", "5")])
        .describe("Subtracts DRm from DRn in double precision.")
        .operation("DR[n] -= DR[m];")
        .example("FSUB DR2,DR4 ; DR2 = 1.5, DR4 = 2.0 gives DR4 = 0.5")
        .exceptions(FPU_ARITH),
    Insn::new("FMUL DRm,DRn", "1111nnn0mmm00010", "DRn * DRm -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("1", "7/9")
        .timing(&[Cycles::on(SH2A, "3", "7")])
        .describe("Multiplies DRn by DRm in double precision.")
        .operation("DR[n] *= DR[m];")
        .example("FMUL DR2,DR4 ; DR2 = 1.5, DR4 = 2.0 gives DR4 = 3.0")
        .exceptions(FPU_ARITH),
    Insn::new("FDIV DRm,DRn", "1111nnn0mmm00011", "DRn / DRm -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("1", "24/26")
        .timing(&[Cycles::on(SH2A, "23", "25")])
        .describe("Divides DRn by DRm in double precision.")
        .operation("DR[n] /= DR[m];")
        .example("FDIV DR2,DR4 ; DR2 = 4.0, DR4 = 2.0 gives DR4 = 0.5")
        .exceptions(FPU_DIVIDE),
    Insn::new("FSQRT DRn", "1111nnn001101101", "sqrt(DRn) -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("1", "23/25")
        .timing(&[Cycles::on(SH2A, "22", "24")])
        .describe("Takes the square root of DRn in double precision.")
        .operation("DR[n] = sqrt(DR[n]);")
        .example("FSQRT DR2 ; DR2 = 2.25 gives DR2 = 1.5")
        .exceptions(&[FpuDisable, SlotFpuDisable, FpuInvalidOperation, FpuInexact, FpuError]),
    Insn::new("FCMP/EQ DRm,DRn", "1111nnn0mmm00100", "If DRn = DRm: 1 -> T\nElse: 0 -> T")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .t(TBit::Result)
        .group(Fe)
        .cycles("2", "3/5")
        .timing(&[Cycles::on(SH2A, "2", "3")])
        .describe("Sets T when DRn equals DRm.")
        .operation("T = DR[n] == DR[m];")
        .example("FCMP/EQ DR2,DR4 ; T = DR4 == DR2")
        .exceptions(FPU_INVALID),
    Insn::new("FCMP/GT DRm,DRn", "1111nnn0mmm00101", "If DRn > DRm: 1 -> T\nElse: 0 -> T")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .t(TBit::Result)
        .group(Fe)
        .cycles("2", "3/5")
        .timing(&[Cycles::on(SH2A, "2", "3")])
        .describe("Sets T when DRn is greater than DRm.")
        .operation("T = DR[n] > DR[m];")
        .example("FCMP/GT DR2,DR4 ; T = DR4 > DR2")
        .exceptions(FPU_INVALID),
    Insn::new("FLOAT FPUL,DRn", "1111nnn000101101", "(double)FPUL -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("1", "3/5")
        .timing(&[Cycles::on(SH2A, "1", "4")])
        .describe("Converts the signed integer in FPUL to double precision.")
        .operation("DR[n] = (double)(int32)FPUL;")
        .example("LDS R0,FPUL\nFLOAT FPUL,DR2 ; DR2 = (double)R0")
        .exceptions(FPU_DISABLE),
    Insn::new("FTRC DRm,FPUL", "1111mmm000111101", "(long)DRm -> FPUL")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("2", "4/5")
        .timing(&[Cycles::on(SH2A, "1", "4")])
        .describe("Converts DRm to a signed integer, rounding toward zero.")
        .operation("FPUL = (int32)DR[m];")
        .example("FTRC DR2,FPUL ; DR2 = 7.9 gives FPUL = 7")
        .exceptions(FPU_INVALID),
    Insn::new("FCNVDS DRm,FPUL", "1111mmm010111101", "double_to_float(DRm) -> FPUL")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("2", "4/5")
        .timing(&[Cycles::on(SH2A, "1", "4")])
        .describe("Converts DRm to single precision and stores the bit pattern in FPUL.")
        .operation("FPUL = float_bits((float)DR[m]);")
        .example("FCNVDS DR2,FPUL ; FPUL = DR2 rounded to single\nFSTS FPUL,FR4")
        .exceptions(FPU_ARITH),
    Insn::new("FCNVSD FPUL,DRn", "1111nnn010101101", "float_to_double(FPUL) -> DRn")
        .on(DOUBLE_FPU)
        .mode(Pr1)
        .group(Fe)
        .cycles("2", "3/5")
        .timing(&[Cycles::on(SH2A, "1", "4")])
        .describe("Converts the single-precision bit pattern in FPUL to double precision.")
        .operation("DR[n] = (double)float_from_bits(FPUL);")
        .example("FLDS FR4,FPUL\nFCNVSD FPUL,DR2 ; DR2 = (double)FR4")
        .exceptions(&[FpuDisable, SlotFpuDisable, FpuInvalidOperation, FpuError]),
    // FPSCR bit toggles.
    Insn::new("FRCHG", "1111101111111101", "~FPSCR.FR -> FPSCR.FR")
        .on(SH4_UP)
        .mode(Pr0)
        .group(Fe)
        .cycles("1", "1/4")
        .describe("Swaps the front and back floating-point register banks.")
        .operation("FPSCR ^= FPSCR_FR;")
        .example("FRCHG ; swap FR0-FR15 with XF0-XF15")
        .exceptions(FPU_DISABLE),
    Insn::new("FSCHG", "1111001111111101", "~FPSCR.SZ -> FPSCR.SZ")
        .on(DOUBLE_FPU)
        .group(Fe)
        .cycles("1", "1/4")
        .describe("Toggles the transfer size bit, switching FMOV between single and pair moves.")
        .operation("FPSCR ^= FPSCR_SZ;")
        .example("FSCHG ; SZ = !SZ, FMOV now moves pairs")
        .exceptions(FPU_DISABLE),
    Insn::new("FPCHG", "1111011111111101", "~FPSCR.PR -> FPSCR.PR")
        .on(SH4A)
        .group(Fe)
        .cycles("1", "1")
        .describe("Toggles the precision bit.")
        .operation("FPSCR ^= FPSCR_PR;")
        .example("FPCHG ; PR = !PR, switch to double precision")
        .exceptions(FPU_DISABLE),
];
