use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("BF label", "10001011dddddddd", "If T = 0: disp*2 + PC + 4 -> PC\nElse: nop")
        .t(TBit::Tested)
        .group(Br)
        .cycles("1", "1/3")
        .describe(
            "Branches to the PC-relative target when T is clear. The 8-bit displacement \
             is sign-extended and doubled, giving a range of -256 to +254 bytes.",
        )
        .operation("if (T == 0) PC = PC + 4 + (sign_extend_8(disp) << 1);\nelse PC += 2;")
        .example("CLRT ; T = 0\nBT target_t ; not taken\nBF target_f ; taken, T = 0")
        .exceptions(SLOT),
    Insn::new("BF/S label", "10001111dddddddd", "If T = 0: disp*2 + PC + 4 -> PC\nElse: nop\n(Delayed branch)")
        .on(SH2_UP)
        .t(TBit::Tested)
        .group(Br)
        .cycles("1", "1/2")
        .delayed()
        .describe(
            "Delayed form of BF: the instruction in the delay slot executes before the \
             branch is taken.",
        )
        .operation("if (T == 0) delay_slot(PC + 2), PC = PC + 4 + (sign_extend_8(disp) << 1);\nelse PC += 2;")
        .example("CLRT\nBF/S target ; taken after the slot\nADD R0,R1 ; delay slot, executed first")
        .exceptions(SLOT),
    Insn::new("BT label", "10001001dddddddd", "If T = 1: disp*2 + PC + 4 -> PC\nElse: nop")
        .t(TBit::Tested)
        .group(Br)
        .cycles("1", "1/3")
        .describe("Branches to the PC-relative target when T is set.")
        .operation("if (T == 1) PC = PC + 4 + (sign_extend_8(disp) << 1);\nelse PC += 2;")
        .example("SETT ; T = 1\nBF target_f ; not taken\nBT target_t ; taken, T = 1")
        .exceptions(SLOT),
    Insn::new("BT/S label", "10001101dddddddd", "If T = 1: disp*2 + PC + 4 -> PC\nElse: nop\n(Delayed branch)")
        .on(SH2_UP)
        .t(TBit::Tested)
        .group(Br)
        .cycles("1", "1/2")
        .delayed()
        .describe("Delayed form of BT.")
        .operation("if (T == 1) delay_slot(PC + 2), PC = PC + 4 + (sign_extend_8(disp) << 1);\nelse PC += 2;")
        .example("SETT\nBT/S target ; taken after the slot\nADD R0,R1 ; delay slot, executed first")
        .exceptions(SLOT),
    Insn::new("BRA label", "1010dddddddddddd", "disp*2 + PC + 4 -> PC\n(Delayed branch)")
        .group(Br)
        .cycles("1", "2")
        .delayed()
        .describe(
            "Unconditional delayed branch. The 12-bit displacement is sign-extended and \
             doubled, giving a range of -4096 to +4094 bytes.",
        )
        .operation("delay_slot(PC + 2);\nPC = PC + 4 + (sign_extend_12(disp) << 1);")
        .example("BRA target ; PC = target\nADD R0,R1 ; delay slot")
        .exceptions(SLOT),
    Insn::new("BRAF Rm", "0000mmmm00100011", "Rm + PC + 4 -> PC\n(Delayed branch)")
        .on(SH2_UP)
        .group(Co)
        .cycles("2", "3")
        .delayed()
        .describe("Unconditional delayed branch to PC plus 4 plus Rm.")
        .operation("target = PC + 4 + R[m];\ndelay_slot(PC + 2);\nPC = target;")
        .example("MOV.L #(target-base),R0\nBRAF R0 ; PC = base + R0\nNOP\nbase:")
        .exceptions(SLOT),
    Insn::new("BSR label", "1011dddddddddddd", "PC + 4 -> PR, disp*2 + PC + 4 -> PC\n(Delayed branch)")
        .group(Br)
        .cycles("1", "2")
        .delayed()
        .describe("Delayed subroutine call. The return address PC plus 4 is saved in PR.")
        .operation("PR = PC + 4;\ndelay_slot(PC + 2);\nPC = PC + 4 + (sign_extend_12(disp) << 1);")
        .example("BSR func ; PR = return address\nMOV R3,R4 ; delay slot\n...\nfunc: RTS")
        .exceptions(SLOT),
    Insn::new("BSRF Rm", "0000mmmm00000011", "PC + 4 -> PR, Rm + PC + 4 -> PC\n(Delayed branch)")
        .on(SH2_UP)
        .group(Co)
        .cycles("2", "3")
        .delayed()
        .describe("Delayed subroutine call to PC plus 4 plus Rm.")
        .operation("PR = PC + 4;\ntarget = PC + 4 + R[m];\ndelay_slot(PC + 2);\nPC = target;")
        .example("MOV.L #(func-base),R0\nBSRF R0 ; call func\nNOP\nbase:")
        .exceptions(SLOT),
    Insn::new("JMP @Rm", "0100mmmm00101011", "Rm -> PC\n(Delayed branch)")
        .group(Co)
        .cycles("2", "3")
        .delayed()
        .describe("Unconditional delayed jump to the address in Rm.")
        .operation("target = R[m];\ndelay_slot(PC + 2);\nPC = target;")
        .example("MOV.L @(4,PC),R0\nJMP @R0 ; PC = R0\nNOP")
        .exceptions(SLOT),
    Insn::new("JSR @Rm", "0100mmmm00001011", "PC + 4 -> PR, Rm -> PC\n(Delayed branch)")
        .group(Co)
        .cycles("2", "3")
        .delayed()
        .describe("Delayed subroutine call to the address in Rm.")
        .operation("PR = PC + 4;\ntarget = R[m];\ndelay_slot(PC + 2);\nPC = target;")
        .example("MOV.L func_addr,R0\nJSR @R0 ; PR = return address\nNOP")
        .exceptions(SLOT),
    Insn::new("JSR/N @Rm", "0100mmmm01001011", "PC + 2 -> PR, Rm -> PC")
        .on(SH2A)
        .cycles("3", "3")
        .describe("Subroutine call to the address in Rm without a delay slot.")
        .operation("PR = PC + 2;\nPC = R[m];")
        .example("MOV.L func_addr,R0\nJSR/N @R0 ; call without a delay slot")
        .exceptions(SLOT),
    Insn::new("JSR/N @@(disp8,TBR)", "10000011dddddddd", "PC + 2 -> PR, (disp*4 + TBR) -> PC")
        .on(SH2A)
        .cycles("5", "5")
        .describe(
            "Calls the subroutine whose address is stored in the function table at TBR \
             plus the quadrupled displacement. No delay slot.",
        )
        .operation("PR = PC + 2;\nPC = read_32(TBR + (zero_extend_8(disp) << 2));")
        .example("LDC R1,TBR ; R1 = function table\nJSR/N @@(8,TBR) ; call table entry 2")
        .exceptions(&[SlotIllegalInstruction, DataAddressErrorRead]),
    Insn::new("RTS", "0000000000001011", "PR -> PC\n(Delayed branch)")
        .group(Co)
        .cycles("2", "3")
        .delayed()
        .describe("Returns from a subroutine to the address in PR.")
        .operation("target = PR;\ndelay_slot(PC + 2);\nPC = target;")
        .example("RTS ; PC = PR\nMOV #0,R0 ; delay slot, return value")
        .exceptions(SLOT),
    Insn::new("RTS/N", "0000000001101011", "PR -> PC")
        .on(SH2A)
        .cycles("3", "3")
        .describe("Returns from a subroutine without a delay slot.")
        .operation("PC = PR;")
        .example("RTS/N ; PC = PR, no delay slot")
        .exceptions(SLOT),
    Insn::new("RTV/N Rm", "0000mmmm01111011", "Rm -> R0, PR -> PC")
        .on(SH2A)
        .cycles("3", "3")
        .describe("Copies the return value from Rm to R0 and returns without a delay slot.")
        .operation("R[0] = R[m];\nPC = PR;")
        .example("RTV/N R1 ; R0 = R1, PC = PR")
        .exceptions(SLOT),
];
