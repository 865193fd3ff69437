use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("LDS Rm,FPSCR", "0100mmmm01101010", "Rm -> FPSCR")
        .on(FPU)
        .group(Co)
        .cycles("1", "4")
        .describe(
            "Copies Rm to the FPU status and control register. Changing SZ or PR \
             changes how later FPU instructions decode.",
        )
        .operation("FPSCR = R[m] & FPSCR_MASK;")
        .example("LDS R0,FPSCR ; FPSCR = R0")
        .exceptions(FPU_DISABLE),
    Insn::new("LDS Rm,FPUL", "0100mmmm01011010", "Rm -> FPUL")
        .on(FPU)
        .group(Ls)
        .cycles("1", "1")
        .describe("Copies Rm to the FPU communication register.")
        .operation("FPUL = R[m];")
        .example("LDS R0,FPUL ; FPUL = R0")
        .exceptions(FPU_DISABLE),
    Insn::new("LDS.L @Rm+,FPSCR", "0100mmmm01100110", "(Rm) -> FPSCR, Rm+4 -> Rm")
        .on(FPU)
        .group(Co)
        .cycles("1", "3")
        .describe("Loads FPSCR from the address in Rm and increments Rm by 4.")
        .operation("FPSCR = read_32(R[m]) & FPSCR_MASK;\nR[m] += 4;")
        .example("LDS.L @R15+,FPSCR ; pop FPSCR")
        .exceptions(FPU_LOAD),
    Insn::new("LDS.L @Rm+,FPUL", "0100mmmm01010110", "(Rm) -> FPUL, Rm+4 -> Rm")
        .on(FPU)
        .group(Co)
        .cycles("1", "2")
        .describe("Loads FPUL from the address in Rm and increments Rm by 4.")
        .operation("FPUL = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,FPUL ; pop FPUL")
        .exceptions(FPU_LOAD),
    Insn::new("STS FPSCR,Rn", "0000nnnn01101010", "FPSCR -> Rn")
        .on(FPU)
        .group(Co)
        .cycles("1", "3")
        .describe("Copies FPSCR to Rn.")
        .operation("R[n] = FPSCR;")
        .example("STS FPSCR,R0 ; R0 = FPSCR")
        .exceptions(FPU_DISABLE),
    Insn::new("STS FPUL,Rn", "0000nnnn01011010", "FPUL -> Rn")
        .on(FPU)
        .group(Ls)
        .cycles("1", "3")
        .describe("Copies FPUL to Rn.")
        .operation("R[n] = FPUL;")
        .example("STS FPUL,R0 ; R0 = FPUL")
        .exceptions(FPU_DISABLE),
    Insn::new("STS.L FPSCR,@-Rn", "0100nnnn01100010", "Rn-4 -> Rn, FPSCR -> (Rn)")
        .on(FPU)
        .group(Co)
        .cycles("1", "1")
        .describe("Decrements Rn by 4 and stores FPSCR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], FPSCR);")
        .example("STS.L FPSCR,@-R15 ; push FPSCR")
        .exceptions(FPU_STORE),
    Insn::new("STS.L FPUL,@-Rn", "0100nnnn01010010", "Rn-4 -> Rn, FPUL -> (Rn)")
        .on(FPU)
        .group(Co)
        .cycles("1", "1")
        .describe("Decrements Rn by 4 and stores FPUL at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], FPUL);")
        .example("STS.L FPUL,@-R15 ; push FPUL")
        .exceptions(FPU_STORE),
];
