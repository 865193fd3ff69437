//! X and Y memory transfers share one word: bits 9, 7, 5 and 3-2 belong to
//! the X side and bits 8, 6, 4 and 1-0 to the Y side, so a double transfer
//! decodes to one MOVX/NOPX and one MOVY/NOPY record.

use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("NOPX", "1111000*0*0*00**", "No X memory access")
        .on(DSP)
        .cycles("1", "1")
        .describe("No operation on the X memory bus.")
        .operation("/* X bus idle */")
        .example("NOPX MOVY.W @R6+,Y0 ; Y transfer only"),
    Insn::new("MOVX.W @Ax,Dx", "111100a*r*0*01**", "(Ax) -> MSW of Dx, 0 -> LSW of Dx")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at Ax into the upper half of Dx and clears the lower half.")
        .operation("Dx = read_16(Ax) << 16;")
        .example("MOVX.W @R4,X0 ; (R4) -> MSW of X0, 0 -> LSW of X0"),
    Insn::new("MOVX.W @Ax+,Dx", "111100a*r*0*10**", "(Ax) -> MSW of Dx, 0 -> LSW of Dx, Ax+2 -> Ax")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at Ax into Dx and increments Ax by 2.")
        .operation("Dx = read_16(Ax) << 16;\nAx += 2;")
        .example("MOVX.W @R4+,X0 ; (R4) -> MSW of X0, 0 -> LSW of X0, R4+2 -> R4"),
    Insn::new("MOVX.W @Ax+Ix,Dx", "111100a*r*0*11**", "(Ax) -> MSW of Dx, 0 -> LSW of Dx, Ax+Ix -> Ax")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at Ax into Dx and adds the index register R8 to Ax.")
        .operation("Dx = read_16(Ax) << 16;\nAx += R[8];")
        .example("MOVX.W @R4+R8,X0 ; (R4) -> MSW of X0, 0 -> LSW of X0, R4+R8 -> R4"),
    Insn::new("MOVX.W Da,@Ax", "111100a*r*1*01**", "MSW of Da -> (Ax)")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of accumulator Da at Ax.")
        .operation("write_16(Ax, Da >> 16);")
        .example("MOVX.W A0,@R4 ; MSW of A0 -> (R4)"),
    Insn::new("MOVX.W Da,@Ax+", "111100a*r*1*10**", "MSW of Da -> (Ax), Ax+2 -> Ax")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Da at Ax and increments Ax by 2.")
        .operation("write_16(Ax, Da >> 16);\nAx += 2;")
        .example("MOVX.W A0,@R4+ ; MSW of A0 -> (R4), R4+2 -> R4"),
    Insn::new("MOVX.W Da,@Ax+Ix", "111100a*r*1*11**", "MSW of Da -> (Ax), Ax+Ix -> Ax")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Da at Ax and adds R8 to Ax.")
        .operation("write_16(Ax, Da >> 16);\nAx += R[8];")
        .example("MOVX.W A0,@R4+R8 ; MSW of A0 -> (R4), R4+R8 -> R4"),
    Insn::new("NOPY", "111100*0*0*0**00", "No Y memory access")
        .on(DSP)
        .cycles("1", "1")
        .describe("No operation on the Y memory bus.")
        .operation("/* Y bus idle */")
        .example("MOVX.W @R4+,X0 NOPY ; X transfer only"),
    Insn::new("MOVY.W @Ay,Dy", "111100*a*r*0**01", "(Ay) -> MSW of Dy, 0 -> LSW of Dy")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at Ay into the upper half of Dy and clears the lower half.")
        .operation("Dy = read_16(Ay) << 16;")
        .example("MOVY.W @R6,Y0 ; (R6) -> MSW of Y0, 0 -> LSW of Y0"),
    Insn::new("MOVY.W @Ay+,Dy", "111100*a*r*0**10", "(Ay) -> MSW of Dy, 0 -> LSW of Dy, Ay+2 -> Ay")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at Ay into Dy and increments Ay by 2.")
        .operation("Dy = read_16(Ay) << 16;\nAy += 2;")
        .example("MOVY.W @R6+,Y0 ; (R6) -> MSW of Y0, 0 -> LSW of Y0, R6+2 -> R6"),
    Insn::new("MOVY.W @Ay+Iy,Dy", "111100*a*r*0**11", "(Ay) -> MSW of Dy, 0 -> LSW of Dy, Ay+Iy -> Ay")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at Ay into Dy and adds the index register R9 to Ay.")
        .operation("Dy = read_16(Ay) << 16;\nAy += R[9];")
        .example("MOVY.W @R6+R9,Y0 ; (R6) -> MSW of Y0, 0 -> LSW of Y0, R6+R9 -> R6"),
    Insn::new("MOVY.W Da,@Ay", "111100*a*r*1**01", "MSW of Da -> (Ay)")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of accumulator Da at Ay.")
        .operation("write_16(Ay, Da >> 16);")
        .example("MOVY.W A0,@R6 ; MSW of A0 -> (R6)"),
    Insn::new("MOVY.W Da,@Ay+", "111100*a*r*1**10", "MSW of Da -> (Ay), Ay+2 -> Ay")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Da at Ay and increments Ay by 2.")
        .operation("write_16(Ay, Da >> 16);\nAy += 2;")
        .example("MOVY.W A0,@R6+ ; MSW of A0 -> (R6), R6+2 -> R6"),
    Insn::new("MOVY.W Da,@Ay+Iy", "111100*a*r*1**11", "MSW of Da -> (Ay), Ay+Iy -> Ay")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Da at Ay and adds R9 to Ay.")
        .operation("write_16(Ay, Da >> 16);\nAy += R[9];")
        .example("MOVY.W A0,@R6+R9 ; MSW of A0 -> (R6), R6+R9 -> R6"),
    // Single transfers: bits 3-2 pick the addressing mode, bits 1-0 the direction and size.
    Insn::new("MOVS.W @-As,Ds", "111101aassss0000", "As-2 -> As, (As) -> MSW of Ds, 0 -> LSW of Ds")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements As by 2 and loads the word at the new address into Ds.")
        .operation("As -= 2;\nDs = read_16(As) << 16;")
        .example("MOVS.W @-R2,A1 ; R2-2 -> R2, (R2) -> MSW of A1, 0 -> LSW of A1")
        .exceptions(LOAD),
    Insn::new("MOVS.W @As,Ds", "111101aassss0100", "(As) -> MSW of Ds, 0 -> LSW of Ds")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at As into the upper half of Ds.")
        .operation("Ds = read_16(As) << 16;")
        .example("MOVS.W @R2,A1 ; (R2) -> MSW of A1, 0 -> LSW of A1")
        .exceptions(LOAD),
    Insn::new("MOVS.W @As+,Ds", "111101aassss1000", "(As) -> MSW of Ds, 0 -> LSW of Ds, As+2 -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at As into Ds and increments As by 2.")
        .operation("Ds = read_16(As) << 16;\nAs += 2;")
        .example("MOVS.W @R2+,A1 ; (R2) -> MSW of A1, 0 -> LSW of A1, R2+2 -> R2")
        .exceptions(LOAD),
    Insn::new("MOVS.W @As+Is,Ds", "111101aassss1100", "(As) -> MSW of Ds, 0 -> LSW of Ds, As+Is -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the word at As into Ds and adds the index register R8 to As.")
        .operation("Ds = read_16(As) << 16;\nAs += R[8];")
        .example("MOVS.W @R2+R8,A1 ; (R2) -> MSW of A1, 0 -> LSW of A1, R2+R8 -> R2")
        .exceptions(LOAD),
    Insn::new("MOVS.W Ds,@-As", "111101aassss0001", "As-2 -> As, MSW of Ds -> (As)")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements As by 2 and stores the upper word of Ds there.")
        .operation("As -= 2;\nwrite_16(As, Ds >> 16);")
        .example("MOVS.W A1,@-R2 ; R2-2 -> R2, MSW of A1 -> (R2)")
        .exceptions(STORE),
    Insn::new("MOVS.W Ds,@As", "111101aassss0101", "MSW of Ds -> (As)")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Ds at As.")
        .operation("write_16(As, Ds >> 16);")
        .example("MOVS.W A1,@R2 ; MSW of A1 -> (R2)")
        .exceptions(STORE),
    Insn::new("MOVS.W Ds,@As+", "111101aassss1001", "MSW of Ds -> (As), As+2 -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Ds at As and increments As by 2.")
        .operation("write_16(As, Ds >> 16);\nAs += 2;")
        .example("MOVS.W A1,@R2+ ; MSW of A1 -> (R2), R2+2 -> R2")
        .exceptions(STORE),
    Insn::new("MOVS.W Ds,@As+Is", "111101aassss1101", "MSW of Ds -> (As), As+Is -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the upper word of Ds at As and adds R8 to As.")
        .operation("write_16(As, Ds >> 16);\nAs += R[8];")
        .example("MOVS.W A1,@R2+R8 ; MSW of A1 -> (R2), R2+R8 -> R2")
        .exceptions(STORE),
    Insn::new("MOVS.L @-As,Ds", "111101aassss0010", "As-4 -> As, (As) -> Ds")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements As by 4 and loads the longword at the new address into Ds.")
        .operation("As -= 4;\nDs = read_32(As);")
        .example("MOVS.L @-R2,A1 ; R2-4 -> R2, (R2) -> A1")
        .exceptions(LOAD),
    Insn::new("MOVS.L @As,Ds", "111101aassss0110", "(As) -> Ds")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the longword at As into Ds.")
        .operation("Ds = read_32(As);")
        .example("MOVS.L @R2,A1 ; (R2) -> A1")
        .exceptions(LOAD),
    Insn::new("MOVS.L @As+,Ds", "111101aassss1010", "(As) -> Ds, As+4 -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the longword at As into Ds and increments As by 4.")
        .operation("Ds = read_32(As);\nAs += 4;")
        .example("MOVS.L @R2+,A1 ; (R2) -> A1, R2+4 -> R2")
        .exceptions(LOAD),
    Insn::new("MOVS.L @As+Is,Ds", "111101aassss1110", "(As) -> Ds, As+Is -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Loads the longword at As into Ds and adds R8 to As.")
        .operation("Ds = read_32(As);\nAs += R[8];")
        .example("MOVS.L @R2+R8,A1 ; (R2) -> A1, R2+R8 -> R2")
        .exceptions(LOAD),
    Insn::new("MOVS.L Ds,@-As", "111101aassss0011", "As-4 -> As, Ds -> (As)")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements As by 4 and stores Ds at the new address.")
        .operation("As -= 4;\nwrite_32(As, Ds);")
        .example("MOVS.L A1,@-R2 ; R2-4 -> R2, A1 -> (R2)")
        .exceptions(STORE),
    Insn::new("MOVS.L Ds,@As", "111101aassss0111", "Ds -> (As)")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores Ds at As.")
        .operation("write_32(As, Ds);")
        .example("MOVS.L A1,@R2 ; A1 -> (R2)")
        .exceptions(STORE),
    Insn::new("MOVS.L Ds,@As+", "111101aassss1011", "Ds -> (As), As+4 -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores Ds at As and increments As by 4.")
        .operation("write_32(As, Ds);\nAs += 4;")
        .example("MOVS.L A1,@R2+ ; A1 -> (R2), R2+4 -> R2")
        .exceptions(STORE),
    Insn::new("MOVS.L Ds,@As+Is", "111101aassss1111", "Ds -> (As), As+Is -> As")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores Ds at As and adds R8 to As.")
        .operation("write_32(As, Ds);\nAs += R[8];")
        .example("MOVS.L A1,@R2+R8 ; A1 -> (R2), R2+R8 -> R2")
        .exceptions(STORE),
];
