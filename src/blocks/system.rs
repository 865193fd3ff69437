use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("CLRMAC", "0000000000101000", "0 -> MACH, 0 -> MACL")
        .group(Ex)
        .describe("Clears MACH and MACL.")
        .operation("MACH = MACL = 0;")
        .example("CLRMAC ; MACH = MACL = 0\nMAC.W @R0+,@R1+"),
    Insn::new("CLRS", "0000000001001000", "0 -> S")
        .on(SH3_UP)
        .group(Co)
        .describe("Clears the S bit.")
        .operation("S = 0;")
        .example("CLRS ; S = 0, MAC results wrap"),
    Insn::new("CLRT", "0000000000001000", "0 -> T")
        .t(TBit::Clear)
        .group(Mt)
        .describe("Clears the T bit.")
        .operation("T = 0;")
        .example("CLRT ; T = 0\nADDC R3,R1"),
    Insn::new("SETS", "0000000001011000", "1 -> S")
        .on(SH3_UP)
        .group(Co)
        .describe("Sets the S bit.")
        .operation("S = 1;")
        .example("SETS ; S = 1, MAC results saturate"),
    Insn::new("SETT", "0000000000011000", "1 -> T")
        .t(TBit::Set)
        .group(Mt)
        .describe("Sets the T bit.")
        .operation("T = 1;")
        .example("SETT ; T = 1\nSUBC R3,R1"),
    Insn::new("LDBANK @Rm,R0", "0100mmmm11100101", "(Specified register bank entry) -> R0")
        .on(SH2A)
        .cycles("6", "5")
        .describe(
            "Loads into R0 the register bank entry selected by the bank number and \
             entry number encoded in the address in Rm.",
        )
        .operation("R[0] = register_bank(R[m]);")
        .example("MOV.L bank_addr,R1\nLDBANK @R1,R0 ; R0 = saved register from the bank"),
    Insn::new("STBANK R0,@Rn", "0100nnnn11100001", "R0 -> (specified register bank entry)")
        .on(SH2A)
        .cycles("7", "7")
        .describe("Stores R0 into the register bank entry selected by the address in Rn.")
        .operation("register_bank(R[n]) = R[0];")
        .example("MOV.L bank_addr,R1\nSTBANK R0,@R1 ; bank entry = R0"),
    Insn::new("RESBANK", "0000000001011011", "Bank -> R0 to R14, GBR, MACH, MACL, PR")
        .on(SH2A)
        .cycles("9/19", "8/20")
        .describe(
            "Restores the registers saved to the register bank by the last interrupt, \
             or pops them from the stack when the bank overflowed.",
        )
        .operation("restore_register_bank();")
        .example("RESBANK ; restore R0-R14, GBR, MACH, MACL, PR from the bank\nRTE\nNOP")
        .exceptions(SLOT),
    Insn::new("LDC Rm,SR", "0100mmmm00001110", "Rm -> SR")
        .t(TBit::Other)
        .group(Co)
        .cycles("4", "4")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .privileged()
        .describe("Copies Rm to the status register. Privileged on CPUs with an MMU.")
        .operation("SR = R[m] & SR_MASK;")
        .example("STC SR,R0\nOR #H'F0,R0 ; mask all interrupts\nLDC R0,SR")
        .exceptions(PRIVILEGED),
    Insn::new("LDC Rm,GBR", "0100mmmm00011110", "Rm -> GBR")
        .group(Co)
        .cycles("3", "3")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .describe("Copies Rm to the global base register.")
        .operation("GBR = R[m];")
        .example("LDC R0,GBR ; GBR = R0"),
    Insn::new("LDC Rm,VBR", "0100mmmm00101110", "Rm -> VBR")
        .group(Co)
        .cycles("1", "3")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .privileged()
        .describe("Copies Rm to the vector base register.")
        .operation("VBR = R[m];")
        .example("LDC R0,VBR ; VBR = R0")
        .exceptions(PRIVILEGED),
    Insn::new("LDC Rm,TBR", "0100mmmm01001010", "Rm -> TBR")
        .on(SH2A)
        .describe("Copies Rm to the jump table base register.")
        .operation("TBR = R[m];")
        .example("MOV.L table,R0\nLDC R0,TBR ; TBR = jump table base"),
    Insn::new("LDC Rm,SSR", "0100mmmm00111110", "Rm -> SSR")
        .on(SH3_UP)
        .group(Co)
        .cycles("1", "3")
        .privileged()
        .describe("Copies Rm to the saved status register.")
        .operation("SSR = R[m];")
        .example("LDC R0,SSR ; SSR = R0")
        .exceptions(PRIVILEGED),
    Insn::new("LDC Rm,SPC", "0100mmmm01001110", "Rm -> SPC")
        .on(SH3_UP)
        .group(Co)
        .cycles("1", "3")
        .privileged()
        .describe("Copies Rm to the saved program counter.")
        .operation("SPC = R[m];")
        .example("LDC R0,SPC ; SPC = R0")
        .exceptions(PRIVILEGED),
    Insn::new("LDC Rm,DBR", "0100mmmm11111010", "Rm -> DBR")
        .on(SH4_UP)
        .group(Co)
        .cycles("1", "3")
        .privileged()
        .describe("Copies Rm to the debug base register.")
        .operation("DBR = R[m];")
        .example("LDC R0,DBR ; DBR = R0")
        .exceptions(PRIVILEGED),
    Insn::new("LDC Rm,SGR", "0100mmmm00111010", "Rm -> SGR")
        .on(SH4A)
        .group(Co)
        .cycles("4", "4")
        .privileged()
        .describe("Copies Rm to the saved general register 15.")
        .operation("SGR = R[m];")
        .example("LDC R0,SGR ; SGR = R0")
        .exceptions(PRIVILEGED),
    Insn::new("LDC Rm,Rn_BANK", "0100mmmm1nnn1110", "Rm -> Rn_BANK (n = 0-7)")
        .on(SH3_UP)
        .group(Co)
        .cycles("1", "3")
        .privileged()
        .describe("Copies Rm to register n of the bank not currently selected by SR.RB.")
        .operation("R_BANK[n] = R[m];")
        .example("LDC R0,R7_BANK ; R7 of the other bank = R0")
        .exceptions(PRIVILEGED),
    Insn::new("LDC.L @Rm+,SR", "0100mmmm00000111", "(Rm) -> SR, Rm+4 -> Rm")
        .t(TBit::Other)
        .group(Co)
        .cycles("4", "4/4")
        .timing(&[Cycles::on(SH1_SH2, "3", "3")])
        .privileged()
        .describe("Loads SR from the address in Rm and increments Rm by 4.")
        .operation("SR = read_32(R[m]) & SR_MASK;\nR[m] += 4;")
        .example("LDC.L @R15+,SR ; pop SR")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("LDC.L @Rm+,GBR", "0100mmmm00010111", "(Rm) -> GBR, Rm+4 -> Rm")
        .group(Co)
        .cycles("3", "3/3")
        .describe("Loads GBR from the address in Rm and increments Rm by 4.")
        .operation("GBR = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,GBR ; pop GBR")
        .exceptions(LOAD),
    Insn::new("LDC.L @Rm+,VBR", "0100mmmm00100111", "(Rm) -> VBR, Rm+4 -> Rm")
        .group(Co)
        .cycles("1", "1/3")
        .privileged()
        .describe("Loads VBR from the address in Rm and increments Rm by 4.")
        .operation("VBR = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,VBR ; pop VBR")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("LDC.L @Rm+,SSR", "0100mmmm00110111", "(Rm) -> SSR, Rm+4 -> Rm")
        .on(SH3_UP)
        .group(Co)
        .cycles("1", "1/3")
        .privileged()
        .describe("Loads SSR from the address in Rm and increments Rm by 4.")
        .operation("SSR = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,SSR ; pop SSR")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("LDC.L @Rm+,SPC", "0100mmmm01000111", "(Rm) -> SPC, Rm+4 -> Rm")
        .on(SH3_UP)
        .group(Co)
        .cycles("1", "1/3")
        .privileged()
        .describe("Loads SPC from the address in Rm and increments Rm by 4.")
        .operation("SPC = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,SPC ; pop SPC")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("LDC.L @Rm+,DBR", "0100mmmm11110110", "(Rm) -> DBR, Rm+4 -> Rm")
        .on(SH4_UP)
        .group(Co)
        .cycles("1", "1/3")
        .privileged()
        .describe("Loads DBR from the address in Rm and increments Rm by 4.")
        .operation("DBR = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,DBR ; pop DBR")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("LDC.L @Rm+,SGR", "0100mmmm00110110", "(Rm) -> SGR, Rm+4 -> Rm")
        .on(SH4A)
        .group(Co)
        .cycles("4", "4")
        .privileged()
        .describe("Loads SGR from the address in Rm and increments Rm by 4.")
        .operation("SGR = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,SGR ; pop SGR")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("LDC.L @Rm+,Rn_BANK", "0100mmmm1nnn0111", "(Rm) -> Rn_BANK, Rm+4 -> Rm")
        .on(SH3_UP)
        .group(Co)
        .cycles("1", "1/3")
        .privileged()
        .describe("Loads banked register n from the address in Rm and increments Rm by 4.")
        .operation("R_BANK[n] = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,R7_BANK ; pop R7 of the other bank")
        .exceptions(PRIVILEGED_LOAD),
    Insn::new("STC SR,Rn", "0000nnnn00000010", "SR -> Rn")
        .group(Co)
        .cycles("2", "2")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .privileged()
        .describe("Copies the status register to Rn.")
        .operation("R[n] = SR;")
        .example("STC SR,R0 ; R0 = SR")
        .exceptions(PRIVILEGED),
    Insn::new("STC GBR,Rn", "0000nnnn00010010", "GBR -> Rn")
        .group(Co)
        .cycles("2", "2")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .describe("Copies GBR to Rn.")
        .operation("R[n] = GBR;")
        .example("STC GBR,R0 ; R0 = GBR"),
    Insn::new("STC VBR,Rn", "0000nnnn00100010", "VBR -> Rn")
        .group(Co)
        .cycles("2", "2")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .privileged()
        .describe("Copies VBR to Rn.")
        .operation("R[n] = VBR;")
        .example("STC VBR,R0 ; R0 = VBR")
        .exceptions(PRIVILEGED),
    Insn::new("STC TBR,Rn", "0000nnnn01001010", "TBR -> Rn")
        .on(SH2A)
        .describe("Copies TBR to Rn.")
        .operation("R[n] = TBR;")
        .example("STC TBR,R0 ; R0 = TBR"),
    Insn::new("STC SSR,Rn", "0000nnnn00110010", "SSR -> Rn")
        .on(SH3_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Copies SSR to Rn.")
        .operation("R[n] = SSR;")
        .example("STC SSR,R0 ; R0 = SSR")
        .exceptions(PRIVILEGED),
    Insn::new("STC SPC,Rn", "0000nnnn01000010", "SPC -> Rn")
        .on(SH3_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Copies SPC to Rn.")
        .operation("R[n] = SPC;")
        .example("STC SPC,R0 ; R0 = SPC")
        .exceptions(PRIVILEGED),
    Insn::new("STC SGR,Rn", "0000nnnn00111010", "SGR -> Rn")
        .on(SH4_UP)
        .group(Co)
        .cycles("3", "3")
        .privileged()
        .describe("Copies the saved general register 15 to Rn.")
        .operation("R[n] = SGR;")
        .example("STC SGR,R0 ; R0 = SGR")
        .exceptions(PRIVILEGED),
    Insn::new("STC DBR,Rn", "0000nnnn11111010", "DBR -> Rn")
        .on(SH4_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Copies DBR to Rn.")
        .operation("R[n] = DBR;")
        .example("STC DBR,R0 ; R0 = DBR")
        .exceptions(PRIVILEGED),
    Insn::new("STC Rm_BANK,Rn", "0000nnnn1mmm0010", "Rm_BANK -> Rn (m = 0-7)")
        .on(SH3_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Copies register m of the inactive bank to Rn.")
        .operation("R[n] = R_BANK[m];")
        .example("STC R7_BANK,R0 ; R0 = R7 of the other bank")
        .exceptions(PRIVILEGED),
    Insn::new("STC.L SR,@-Rn", "0100nnnn00000011", "Rn-4 -> Rn, SR -> (Rn)")
        .group(Co)
        .cycles("2", "2")
        .timing(&[Cycles::on(SH1_SH2, "2", "2")])
        .privileged()
        .describe("Decrements Rn by 4 and stores SR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], SR);")
        .example("STC.L SR,@-R15 ; push SR")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("STC.L GBR,@-Rn", "0100nnnn00010011", "Rn-4 -> Rn, GBR -> (Rn)")
        .group(Co)
        .cycles("2", "2")
        .describe("Decrements Rn by 4 and stores GBR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], GBR);")
        .example("STC.L GBR,@-R15 ; push GBR")
        .exceptions(STORE),
    Insn::new("STC.L VBR,@-Rn", "0100nnnn00100011", "Rn-4 -> Rn, VBR -> (Rn)")
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Decrements Rn by 4 and stores VBR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], VBR);")
        .example("STC.L VBR,@-R15 ; push VBR")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("STC.L SSR,@-Rn", "0100nnnn00110011", "Rn-4 -> Rn, SSR -> (Rn)")
        .on(SH3_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Decrements Rn by 4 and stores SSR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], SSR);")
        .example("STC.L SSR,@-R15 ; push SSR")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("STC.L SPC,@-Rn", "0100nnnn01000011", "Rn-4 -> Rn, SPC -> (Rn)")
        .on(SH3_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Decrements Rn by 4 and stores SPC at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], SPC);")
        .example("STC.L SPC,@-R15 ; push SPC")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("STC.L SGR,@-Rn", "0100nnnn00110010", "Rn-4 -> Rn, SGR -> (Rn)")
        .on(SH4_UP)
        .group(Co)
        .cycles("3", "3")
        .privileged()
        .describe("Decrements Rn by 4 and stores SGR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], SGR);")
        .example("STC.L SGR,@-R15 ; push SGR")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("STC.L DBR,@-Rn", "0100nnnn11110010", "Rn-4 -> Rn, DBR -> (Rn)")
        .on(SH4_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Decrements Rn by 4 and stores DBR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], DBR);")
        .example("STC.L DBR,@-R15 ; push DBR")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("STC.L Rm_BANK,@-Rn", "0100nnnn1mmm0011", "Rn-4 -> Rn, Rm_BANK -> (Rn) (m = 0-7)")
        .on(SH3_UP)
        .group(Co)
        .cycles("2", "2")
        .privileged()
        .describe("Decrements Rn by 4 and stores banked register m at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], R_BANK[m]);")
        .example("STC.L R7_BANK,@-R15 ; push R7 of the other bank")
        .exceptions(PRIVILEGED_STORE),
    Insn::new("LDS Rm,MACH", "0100mmmm00001010", "Rm -> MACH")
        .group(Co)
        .describe("Copies Rm to MACH.")
        .operation("MACH = R[m];")
        .example("LDS R0,MACH ; MACH = R0"),
    Insn::new("LDS Rm,MACL", "0100mmmm00011010", "Rm -> MACL")
        .group(Co)
        .describe("Copies Rm to MACL.")
        .operation("MACL = R[m];")
        .example("LDS R0,MACL ; MACL = R0"),
    Insn::new("LDS Rm,PR", "0100mmmm00101010", "Rm -> PR")
        .group(Co)
        .cycles("2", "3")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .describe("Copies Rm to the procedure register.")
        .operation("PR = R[m];")
        .example("LDS R0,PR ; PR = R0\nRTS\nNOP"),
    Insn::new("LDS.L @Rm+,MACH", "0100mmmm00000110", "(Rm) -> MACH, Rm+4 -> Rm")
        .group(Co)
        .describe("Loads MACH from the address in Rm and increments Rm by 4.")
        .operation("MACH = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,MACH ; pop MACH")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,MACL", "0100mmmm00010110", "(Rm) -> MACL, Rm+4 -> Rm")
        .group(Co)
        .describe("Loads MACL from the address in Rm and increments Rm by 4.")
        .operation("MACL = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,MACL ; pop MACL")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,PR", "0100mmmm00100110", "(Rm) -> PR, Rm+4 -> Rm")
        .group(Co)
        .cycles("2", "2/3")
        .describe("Loads PR from the address in Rm and increments Rm by 4.")
        .operation("PR = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,PR ; restore return address")
        .exceptions(LOAD),
    Insn::new("STS MACH,Rn", "0000nnnn00001010", "MACH -> Rn")
        .group(Co)
        .describe("Copies MACH to Rn.")
        .operation("R[n] = MACH;")
        .example("STS MACH,R0 ; R0 = MACH"),
    Insn::new("STS MACL,Rn", "0000nnnn00011010", "MACL -> Rn")
        .group(Co)
        .describe("Copies MACL to Rn.")
        .operation("R[n] = MACL;")
        .example("STS MACL,R0 ; R0 = MACL"),
    Insn::new("STS PR,Rn", "0000nnnn00101010", "PR -> Rn")
        .group(Co)
        .cycles("2", "2")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .describe("Copies PR to Rn.")
        .operation("R[n] = PR;")
        .example("STS PR,R0 ; R0 = return address"),
    Insn::new("STS.L MACH,@-Rn", "0100nnnn00000010", "Rn-4 -> Rn, MACH -> (Rn)")
        .group(Co)
        .describe("Decrements Rn by 4 and stores MACH at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], MACH);")
        .example("STS.L MACH,@-R15 ; push MACH")
        .exceptions(STORE),
    Insn::new("STS.L MACL,@-Rn", "0100nnnn00010010", "Rn-4 -> Rn, MACL -> (Rn)")
        .group(Co)
        .describe("Decrements Rn by 4 and stores MACL at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], MACL);")
        .example("STS.L MACL,@-R15 ; push MACL")
        .exceptions(STORE),
    Insn::new("STS.L PR,@-Rn", "0100nnnn00100010", "Rn-4 -> Rn, PR -> (Rn)")
        .group(Co)
        .cycles("2", "2")
        .describe("Decrements Rn by 4 and stores PR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], PR);")
        .example("STS.L PR,@-R15 ; save return address")
        .exceptions(STORE),
    Insn::new("LDTLB", "0000000000111000", "PTEH/PTEL -> TLB")
        .on(SH3_UP)
        .group(Co)
        .privileged()
        .describe("Loads the page table entry registers into the TLB entry selected by MMUCR.")
        .operation("load_tlb_entry(PTEH, PTEL);")
        .example("MOV.L pteh,R0\nLDC R0,PTEH\n...\nLDTLB ; load PTEH/PTEL into the TLB")
        .exceptions(PRIVILEGED),
    Insn::new("NOP", "0000000000001001", "No operation")
        .group(Mt)
        .cycles("1", "0")
        .timing(&[Cycles::on(SH1_SH2, "1", "1")])
        .describe("Does nothing for one cycle.")
        .operation("PC += 2;")
        .example("NOP ; one idle cycle"),
    Insn::new("OCBI @Rn", "0000nnnn10010011", "Invalidate operand cache block")
        .on(SH4_UP)
        .group(Ls)
        .cycles("1", "1")
        .describe("Invalidates the operand cache line containing the address in Rn without writing it back.")
        .operation("invalidate_operand_cache_block(R[n]);")
        .example("OCBI @R0 ; drop the cache line holding R0 without writing it back")
        .exceptions(&[DataTlbMissWrite, DataTlbProtectionWrite, InitialPageWrite]),
    Insn::new("OCBP @Rn", "0000nnnn10100011", "Write back and invalidate operand cache block")
        .on(SH4_UP)
        .group(Ls)
        .cycles("1", "1-5")
        .describe("Writes back the dirty operand cache line at Rn and invalidates it.")
        .operation("purge_operand_cache_block(R[n]);")
        .example("OCBP @R0 ; write back and invalidate the line holding R0")
        .exceptions(&[DataTlbMissRead, DataTlbProtectionRead]),
    Insn::new("OCBWB @Rn", "0000nnnn10110011", "Write back operand cache block")
        .on(SH4_UP)
        .group(Ls)
        .cycles("1", "1-5")
        .describe("Writes back the dirty operand cache line at Rn, leaving it valid.")
        .operation("write_back_operand_cache_block(R[n]);")
        .example("OCBWB @R0 ; write back the line holding R0")
        .exceptions(&[DataTlbMissRead, DataTlbProtectionRead]),
    Insn::new("PREF @Rn", "0000nnnn10000011", "(Rn) -> operand cache")
        .on(SH3_UP_SH2A)
        .group(Ls)
        .cycles("1", "1")
        .describe(
            "Prefetches the cache line at Rn. On the SH-4 an address in the store queue \
             area flushes a store queue instead.",
        )
        .operation("prefetch_operand_cache_block(R[n]);")
        .example("PREF @R0 ; start loading the line holding R0\nMOV.L @R0,R1")
        .exceptions(&[DataTlbMissRead]),
    Insn::new("ICBI @Rn", "0000nnnn11100011", "Invalidate instruction cache block")
        .on(SH4A)
        .group(Co)
        .cycles("8", "8")
        .describe("Invalidates the instruction cache line containing the address in Rn.")
        .operation("invalidate_instruction_cache_block(R[n]);")
        .example("ICBI @R0 ; invalidate the instruction cache line holding R0")
        .exceptions(&[InstructionTlbMiss, InstructionAddressError, SlotIllegalInstruction]),
    Insn::new("PREFI @Rn", "0000nnnn11010011", "Prefetch instruction cache block")
        .on(SH4A)
        .group(Co)
        .cycles("13", "13")
        .describe("Prefetches the instruction cache line at Rn.")
        .operation("prefetch_instruction_cache_block(R[n]);")
        .example("PREFI @R0 ; prefetch instructions at R0 into the cache")
        .exceptions(SLOT),
    Insn::new("SYNCO", "0000000010101011", "Synchronize data operation")
        .on(SH4A)
        .group(Co)
        .cycles("Undefined", "Undefined")
        .describe("Waits until all preceding data accesses have completed.")
        .operation("synchronize_data_operations();")
        .example("MOV.L R0,@R1\nSYNCO ; the store completes before what follows")
        .exceptions(SLOT),
    Insn::new("RTE", "0000000000101011", "SSR -> SR, SPC -> PC\n(Delayed branch)")
        .t(TBit::Other)
        .group(Co)
        .cycles("5", "5")
        .timing(&[Cycles::on(SH1_SH2, "4", "4")])
        .privileged()
        .delayed()
        .describe(
            "Returns from an exception handler. SR and PC are restored from SSR and SPC \
             after the delay slot; on the SH-1 and SH-2 they are popped from the stack.",
        )
        .operation("target = SPC;\ndelay_slot(PC + 2);\nSR = SSR;\nPC = target;")
        .example("RTE ; PC = SPC, SR = SSR\nNOP")
        .exceptions(PRIVILEGED),
    Insn::new("SLEEP", "0000000000011011", "Sleep or standby")
        .group(Co)
        .cycles("4", "4")
        .timing(&[Cycles::on(SH1_SH2, "3", "3")])
        .privileged()
        .describe("Enters the power-down mode selected by the standby control register.")
        .operation("enter_sleep_mode();")
        .example("SLEEP ; wait for an interrupt")
        .exceptions(PRIVILEGED),
    Insn::new("TRAPA #imm", "11000011iiiiiiii", "PC + 2 -> SPC, SR -> SSR, imm << 2 -> TRA, 0x160 -> EXPEVT, VBR + 0x100 -> PC")
        .group(Co)
        .cycles("7", "7")
        .timing(&[Cycles::on(SH1_SH2, "8", "8")])
        .describe(
            "Raises an unconditional trap with the zero-extended immediate as the trap \
             number.",
        )
        .operation("TRA = imm << 2;\nraise_trap();")
        .example("TRAPA #H'20 ; system call")
        .exceptions(&[UnconditionalTrap, SlotIllegalInstruction]),
    Insn::new("SETRC #imm", "10000010iiiiiiii", "imm -> RC (of SR)")
        .on(DSP)
        .describe("Sets the repeat counter field of SR from the 8-bit immediate.")
        .operation("SR.RC = zero_extend_8(imm);")
        .example("LDRS start,R0\nLDRE end,R0\nSETRC #8 ; repeat start..end 8 times"),
    Insn::new("SETRC Rm", "0100mmmm00010100", "Rm[11:0] -> RC (of SR)")
        .on(DSP)
        .describe("Sets the repeat counter field of SR from the low 12 bits of Rm.")
        .operation("SR.RC = R[m] & 0xFFF;")
        .example("MOV #8,R0\nSETRC R0 ; repeat count = 8"),
    Insn::new("LDRS @(disp,PC)", "10001100dddddddd", "disp*2 + PC + 4 -> RS")
        .on(DSP)
        .describe("Loads the repeat start register with a PC-relative address.")
        .operation("RS = PC + 4 + (sign_extend_8(disp) << 1);")
        .example("LDRS start ; RS = address of start\nLDRE end\nSETRC #4")
        .exceptions(SLOT),
    Insn::new("LDRE @(disp,PC)", "10001110dddddddd", "disp*2 + PC + 4 -> RE")
        .on(DSP)
        .describe("Loads the repeat end register with a PC-relative address.")
        .operation("RE = PC + 4 + (sign_extend_8(disp) << 1);")
        .example("LDRS start\nLDRE end ; RE = address of end\nSETRC #4")
        .exceptions(SLOT),
    Insn::new("LDC Rm,MOD", "0100mmmm01011110", "Rm -> MOD")
        .on(DSP)
        .cycles("3", "3")
        .describe("Copies Rm to the modulo addressing register.")
        .operation("MOD = R[m];")
        .example("LDC R0,MOD ; MOD = R0"),
    Insn::new("LDC Rm,RE", "0100mmmm01111110", "Rm -> RE")
        .on(DSP)
        .cycles("3", "3")
        .describe("Copies Rm to the repeat end register.")
        .operation("RE = R[m];")
        .example("LDC R0,RE ; RE = R0"),
    Insn::new("LDC Rm,RS", "0100mmmm01101110", "Rm -> RS")
        .on(DSP)
        .cycles("3", "3")
        .describe("Copies Rm to the repeat start register.")
        .operation("RS = R[m];")
        .example("LDC R0,RS ; RS = R0"),
    Insn::new("LDC.L @Rm+,MOD", "0100mmmm01010111", "(Rm) -> MOD, Rm+4 -> Rm")
        .on(DSP)
        .cycles("5", "5")
        .describe("Loads MOD from the address in Rm and increments Rm by 4.")
        .operation("MOD = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,MOD ; pop MOD")
        .exceptions(LOAD),
    Insn::new("LDC.L @Rm+,RE", "0100mmmm01110111", "(Rm) -> RE, Rm+4 -> Rm")
        .on(DSP)
        .cycles("5", "5")
        .describe("Loads RE from the address in Rm and increments Rm by 4.")
        .operation("RE = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,RE ; pop RE")
        .exceptions(LOAD),
    Insn::new("LDC.L @Rm+,RS", "0100mmmm01100111", "(Rm) -> RS, Rm+4 -> Rm")
        .on(DSP)
        .cycles("5", "5")
        .describe("Loads RS from the address in Rm and increments Rm by 4.")
        .operation("RS = read_32(R[m]);\nR[m] += 4;")
        .example("LDC.L @R15+,RS ; pop RS")
        .exceptions(LOAD),
    Insn::new("STC MOD,Rn", "0000nnnn01010010", "MOD -> Rn")
        .on(DSP)
        .describe("Copies MOD to Rn.")
        .operation("R[n] = MOD;")
        .example("STC MOD,R0 ; R0 = MOD"),
    Insn::new("STC RE,Rn", "0000nnnn01110010", "RE -> Rn")
        .on(DSP)
        .describe("Copies RE to Rn.")
        .operation("R[n] = RE;")
        .example("STC RE,R0 ; R0 = RE"),
    Insn::new("STC RS,Rn", "0000nnnn01100010", "RS -> Rn")
        .on(DSP)
        .describe("Copies RS to Rn.")
        .operation("R[n] = RS;")
        .example("STC RS,R0 ; R0 = RS"),
    Insn::new("STC.L MOD,@-Rn", "0100nnnn01010011", "Rn-4 -> Rn, MOD -> (Rn)")
        .on(DSP)
        .cycles("2", "2")
        .describe("Decrements Rn by 4 and stores MOD at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], MOD);")
        .example("STC.L MOD,@-R15 ; push MOD")
        .exceptions(STORE),
    Insn::new("STC.L RE,@-Rn", "0100nnnn01110011", "Rn-4 -> Rn, RE -> (Rn)")
        .on(DSP)
        .cycles("2", "2")
        .describe("Decrements Rn by 4 and stores RE at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], RE);")
        .example("STC.L RE,@-R15 ; push RE")
        .exceptions(STORE),
    Insn::new("STC.L RS,@-Rn", "0100nnnn01100011", "Rn-4 -> Rn, RS -> (Rn)")
        .on(DSP)
        .cycles("2", "2")
        .describe("Decrements Rn by 4 and stores RS at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], RS);")
        .example("STC.L RS,@-R15 ; push RS")
        .exceptions(STORE),
    Insn::new("LDS Rm,DSR", "0100mmmm01101010", "Rm -> DSR")
        .on(DSP)
        .describe("Copies Rm to the DSP status register.")
        .operation("DSR = R[m] & 0xF;")
        .example("LDS R0,DSR ; DSR = R0"),
    Insn::new("LDS Rm,A0", "0100mmmm01111010", "Rm -> A0")
        .on(DSP)
        .describe("Copies Rm to A0, sign-extending into the guard bits A0G.")
        .operation("A0 = R[m];\nA0G = R[m] >> 31 ? 0xFF : 0;")
        .example("LDS R0,A0 ; A0 = R0"),
    Insn::new("LDS Rm,X0", "0100mmmm10001010", "Rm -> X0")
        .on(DSP)
        .describe("Copies Rm to X0.")
        .operation("X0 = R[m];")
        .example("LDS R0,X0 ; X0 = R0"),
    Insn::new("LDS Rm,X1", "0100mmmm10011010", "Rm -> X1")
        .on(DSP)
        .describe("Copies Rm to X1.")
        .operation("X1 = R[m];")
        .example("LDS R0,X1 ; X1 = R0"),
    Insn::new("LDS Rm,Y0", "0100mmmm10101010", "Rm -> Y0")
        .on(DSP)
        .describe("Copies Rm to Y0.")
        .operation("Y0 = R[m];")
        .example("LDS R0,Y0 ; Y0 = R0"),
    Insn::new("LDS Rm,Y1", "0100mmmm10111010", "Rm -> Y1")
        .on(DSP)
        .describe("Copies Rm to Y1.")
        .operation("Y1 = R[m];")
        .example("LDS R0,Y1 ; Y1 = R0"),
    Insn::new("LDS.L @Rm+,DSR", "0100mmmm01100110", "(Rm) -> DSR, Rm+4 -> Rm")
        .on(DSP)
        .describe("Loads DSR from the address in Rm and increments Rm by 4.")
        .operation("DSR = read_32(R[m]) & 0xF;\nR[m] += 4;")
        .example("LDS.L @R15+,DSR ; pop DSR")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,A0", "0100mmmm01110110", "(Rm) -> A0, Rm+4 -> Rm")
        .on(DSP)
        .describe("Loads A0 from the address in Rm and increments Rm by 4.")
        .operation("A0 = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,A0 ; pop A0")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,X0", "0100mmmm10000110", "(Rm) -> X0, Rm+4 -> Rm")
        .on(DSP)
        .describe("Loads X0 from the address in Rm and increments Rm by 4.")
        .operation("X0 = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,X0 ; pop X0")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,X1", "0100mmmm10010110", "(Rm) -> X1, Rm+4 -> Rm")
        .on(DSP)
        .describe("Loads X1 from the address in Rm and increments Rm by 4.")
        .operation("X1 = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,X1 ; pop X1")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,Y0", "0100mmmm10100110", "(Rm) -> Y0, Rm+4 -> Rm")
        .on(DSP)
        .describe("Loads Y0 from the address in Rm and increments Rm by 4.")
        .operation("Y0 = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,Y0 ; pop Y0")
        .exceptions(LOAD),
    Insn::new("LDS.L @Rm+,Y1", "0100mmmm10110110", "(Rm) -> Y1, Rm+4 -> Rm")
        .on(DSP)
        .describe("Loads Y1 from the address in Rm and increments Rm by 4.")
        .operation("Y1 = read_32(R[m]);\nR[m] += 4;")
        .example("LDS.L @R15+,Y1 ; pop Y1")
        .exceptions(LOAD),
    Insn::new("STS DSR,Rn", "0000nnnn01101010", "DSR -> Rn")
        .on(DSP)
        .describe("Copies the DSP status register to Rn.")
        .operation("R[n] = DSR;")
        .example("STS DSR,R0 ; R0 = DSR"),
    Insn::new("STS A0,Rn", "0000nnnn01111010", "A0 -> Rn")
        .on(DSP)
        .describe("Copies A0 to Rn.")
        .operation("R[n] = A0;")
        .example("STS A0,R0 ; R0 = A0"),
    Insn::new("STS X0,Rn", "0000nnnn10001010", "X0 -> Rn")
        .on(DSP)
        .describe("Copies X0 to Rn.")
        .operation("R[n] = X0;")
        .example("STS X0,R0 ; R0 = X0"),
    Insn::new("STS X1,Rn", "0000nnnn10011010", "X1 -> Rn")
        .on(DSP)
        .describe("Copies X1 to Rn.")
        .operation("R[n] = X1;")
        .example("STS X1,R0 ; R0 = X1"),
    Insn::new("STS Y0,Rn", "0000nnnn10101010", "Y0 -> Rn")
        .on(DSP)
        .describe("Copies Y0 to Rn.")
        .operation("R[n] = Y0;")
        .example("STS Y0,R0 ; R0 = Y0"),
    Insn::new("STS Y1,Rn", "0000nnnn10111010", "Y1 -> Rn")
        .on(DSP)
        .describe("Copies Y1 to Rn.")
        .operation("R[n] = Y1;")
        .example("STS Y1,R0 ; R0 = Y1"),
    Insn::new("STS.L DSR,@-Rn", "0100nnnn01100010", "Rn-4 -> Rn, DSR -> (Rn)")
        .on(DSP)
        .describe("Decrements Rn by 4 and stores DSR at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], DSR);")
        .example("STS.L DSR,@-R15 ; push DSR")
        .exceptions(STORE),
    Insn::new("STS.L A0,@-Rn", "0100nnnn01110010", "Rn-4 -> Rn, A0 -> (Rn)")
        .on(DSP)
        .describe("Decrements Rn by 4 and stores A0 at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], A0);")
        .example("STS.L A0,@-R15 ; push A0")
        .exceptions(STORE),
    Insn::new("STS.L X0,@-Rn", "0100nnnn10000010", "Rn-4 -> Rn, X0 -> (Rn)")
        .on(DSP)
        .describe("Decrements Rn by 4 and stores X0 at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], X0);")
        .example("STS.L X0,@-R15 ; push X0")
        .exceptions(STORE),
    Insn::new("STS.L X1,@-Rn", "0100nnnn10010010", "Rn-4 -> Rn, X1 -> (Rn)")
        .on(DSP)
        .describe("Decrements Rn by 4 and stores X1 at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], X1);")
        .example("STS.L X1,@-R15 ; push X1")
        .exceptions(STORE),
    Insn::new("STS.L Y0,@-Rn", "0100nnnn10100010", "Rn-4 -> Rn, Y0 -> (Rn)")
        .on(DSP)
        .describe("Decrements Rn by 4 and stores Y0 at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], Y0);")
        .example("STS.L Y0,@-R15 ; push Y0")
        .exceptions(STORE),
    Insn::new("STS.L Y1,@-Rn", "0100nnnn10110010", "Rn-4 -> Rn, Y1 -> (Rn)")
        .on(DSP)
        .describe("Decrements Rn by 4 and stores Y1 at the new address.")
        .operation("R[n] -= 4;\nwrite_32(R[n], Y1);")
        .example("STS.L Y1,@-R15 ; push Y1")
        .exceptions(STORE),
];
