//! Parallel-processing operations. The first halfword is `111110` followed by
//! the fields of an X/Y transfer that runs alongside the operation. Those bits
//! are don't-care here; `Isa::decode` matches them against the transfer table.

use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("PABS Sx,Dz", "111110**********10001000xx00zzzz", "If Sx >= 0: Sx -> Dz\nElse: 0 - Sx -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the absolute value of Sx in Dz and updates DSR.DC.")
        .operation("Dz = Sx < 0 ? -Sx : Sx;")
        .example("PABS X0,A0 ; If X0 >= 0: X0 -> A0, else: 0 - X0 -> A0"),
    Insn::new("PABS Sy,Dz", "111110**********1010100000yyzzzz", "If Sy >= 0: Sy -> Dz\nElse: 0 - Sy -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the absolute value of Sy in Dz and updates DSR.DC.")
        .operation("Dz = Sy < 0 ? -Sy : Sy;")
        .example("PABS Y0,A0 ; If Y0 >= 0: Y0 -> A0, else: 0 - Y0 -> A0"),
    Insn::new("PADD Sx,Sy,Dz", "111110**********10110001xxyyzzzz", "Sx + Sy -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Adds Sx and Sy into Dz and updates DSR.DC.")
        .operation("Dz = Sx + Sy;")
        .example("PADD X0,Y0,A0 ; X0 + Y0 -> A0"),
    Insn::new("DCT PADD Sx,Sy,Dz", "111110**********10110010xxyyzzzz", "If DC = 1: Sx + Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Adds Sx and Sy into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = Sx + Sy;")
        .example("PCMP X0,Y0\nDCT PADD X0,Y0,A0 ; If DC = 1: X0 + Y0 -> A0"),
    Insn::new("DCF PADD Sx,Sy,Dz", "111110**********10110011xxyyzzzz", "If DC = 0: Sx + Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Adds Sx and Sy into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = Sx + Sy;")
        .example("PCMP X0,Y0\nDCF PADD X0,Y0,A0 ; If DC = 0: X0 + Y0 -> A0"),
    Insn::new("PADD Sx,Sy,Du PMULS Se,Sf,Dg", "111110**********0111eeffxxyygguu", "Sx + Sy -> Du\nMSW of Se * MSW of Sf -> Dg")
        .on(DSP)
        .cycles("1", "1")
        .describe("Adds Sx and Sy into Du while multiplying the upper words of Se and Sf into Dg.")
        .operation("Du = Sx + Sy;\nDg = (int16)(Se >> 16) * (int16)(Sf >> 16) << 1;")
        .example("PADD X0,Y0,A1 PMULS X1,Y1,M0 ; X0 + Y0 -> A1, MSW of X1 * MSW of Y1 -> M0"),
    Insn::new("PADDC Sx,Sy,Dz", "111110**********10110000xxyyzzzz", "Sx + Sy + DC -> Dz, carry -> DC")
        .on(DSP)
        .cycles("1", "1")
        .describe("Adds Sx, Sy and the DC bit into Dz, leaving the carry in DC.")
        .operation("Dz = Sx + Sy + DC;\nDC = carry;")
        .example("PADDC X0,Y0,A0 ; X0 + Y0 + DC -> A0, carry -> DC"),
    Insn::new("PAND Sx,Sy,Dz", "111110**********10010101xxyyzzzz", "Sx & Sy -> Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("ANDs the upper words of Sx and Sy into Dz.")
        .operation("Dz = (Sx & Sy) & 0xFFFF0000;")
        .example("PAND X0,Y0,A0 ; X0 & Y0 -> A0, clear LSW of A0"),
    Insn::new("DCT PAND Sx,Sy,Dz", "111110**********10010110xxyyzzzz", "If DC = 1: Sx & Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Conditional PAND, executed when DSR.DC is set.")
        .operation("if (DC) Dz = (Sx & Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PAND X0,Y0,A0 ; If DC = 1: X0 & Y0 -> A0"),
    Insn::new("DCF PAND Sx,Sy,Dz", "111110**********10010111xxyyzzzz", "If DC = 0: Sx & Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Conditional PAND, executed when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sx & Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PAND X0,Y0,A0 ; If DC = 0: X0 & Y0 -> A0"),
    Insn::new("PCLR Dz", "111110**********100011010000zzzz", "0x00000000 -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Clears Dz.")
        .operation("Dz = 0;")
        .example("PCLR A0 ; 0x00000000 -> A0"),
    Insn::new("DCT PCLR Dz", "111110**********100011100000zzzz", "If DC = 1: 0x00000000 -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Clears Dz when DSR.DC is set.")
        .operation("if (DC) Dz = 0;")
        .example("PCMP X0,Y0\nDCT PCLR A0 ; If DC = 1: 0x00000000 -> A0"),
    Insn::new("DCF PCLR Dz", "111110**********100011110000zzzz", "If DC = 0: 0x00000000 -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Clears Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = 0;")
        .example("PCMP X0,Y0\nDCF PCLR A0 ; If DC = 0: 0x00000000 -> A0"),
    Insn::new("PCMP Sx,Sy", "111110**********10000100xxyy0000", "Sx - Sy")
        .on(DSP)
        .cycles("1", "1")
        .describe("Subtracts Sy from Sx, updating DSR.DC without storing the result.")
        .operation("DC = compare(Sx, Sy);")
        .example("PCMP X0,Y0 ; DC follows X0 - Y0\nDCT PCOPY X0,A0"),
    Insn::new("PCOPY Sx,Dz", "111110**********11011001xx00zzzz", "Sx -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Sx to Dz.")
        .operation("Dz = Sx;")
        .example("PCOPY X0,A0 ; X0 -> A0"),
    Insn::new("DCT PCOPY Sx,Dz", "111110**********11011010xx00zzzz", "If DC = 1: Sx -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Sx to Dz when DSR.DC is set.")
        .operation("if (DC) Dz = Sx;")
        .example("PCMP X0,Y0\nDCT PCOPY X0,A0 ; If DC = 1: X0 -> A0"),
    Insn::new("DCF PCOPY Sx,Dz", "111110**********11011011xx00zzzz", "If DC = 0: Sx -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Sx to Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = Sx;")
        .example("PCMP X0,Y0\nDCF PCOPY X0,A0 ; If DC = 0: X0 -> A0"),
    Insn::new("PCOPY Sy,Dz", "111110**********1111100100yyzzzz", "Sy -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Sy to Dz.")
        .operation("Dz = Sy;")
        .example("PCOPY Y0,A0 ; Y0 -> A0"),
    Insn::new("DCT PCOPY Sy,Dz", "111110**********1111101000yyzzzz", "If DC = 1: Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Sy to Dz when DSR.DC is set.")
        .operation("if (DC) Dz = Sy;")
        .example("PCMP X0,Y0\nDCT PCOPY Y0,A0 ; If DC = 1: Y0 -> A0"),
    Insn::new("DCF PCOPY Sy,Dz", "111110**********1111101100yyzzzz", "If DC = 0: Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Sy to Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = Sy;")
        .example("PCMP X0,Y0\nDCF PCOPY Y0,A0 ; If DC = 0: Y0 -> A0"),
    Insn::new("PDEC Sx,Dz", "111110**********10001001xx00zzzz", "MSW of Sx - 1 -> MSW of Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements the upper word of Sx into Dz.")
        .operation("Dz = (Sx - 0x10000) & 0xFFFF0000;")
        .example("PDEC X0,A0 ; MSW of X0 - 1 -> MSW of A0, clear LSW of A0"),
    Insn::new("DCT PDEC Sx,Dz", "111110**********10001010xx00zzzz", "If DC = 1: MSW of Sx - 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements the upper word of Sx into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = (Sx - 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PDEC X0,A0 ; If DC = 1: MSW of X0 - 1 -> MSW of A0"),
    Insn::new("DCF PDEC Sx,Dz", "111110**********10001011xx00zzzz", "If DC = 0: MSW of Sx - 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements the upper word of Sx into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sx - 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PDEC X0,A0 ; If DC = 0: MSW of X0 - 1 -> MSW of A0"),
    Insn::new("PDEC Sy,Dz", "111110**********1010100100yyzzzz", "MSW of Sy - 1 -> MSW of Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements the upper word of Sy into Dz.")
        .operation("Dz = (Sy - 0x10000) & 0xFFFF0000;")
        .example("PDEC Y0,A0 ; MSW of Y0 - 1 -> MSW of A0, clear LSW of A0"),
    Insn::new("DCT PDEC Sy,Dz", "111110**********1010101000yyzzzz", "If DC = 1: MSW of Sy - 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements the upper word of Sy into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = (Sy - 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PDEC Y0,A0 ; If DC = 1: MSW of Y0 - 1 -> MSW of A0"),
    Insn::new("DCF PDEC Sy,Dz", "111110**********1010101100yyzzzz", "If DC = 0: MSW of Sy - 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Decrements the upper word of Sy into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sy - 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PDEC Y0,A0 ; If DC = 0: MSW of Y0 - 1 -> MSW of A0"),
    Insn::new("PDMSB Sx,Dz", "111110**********10011101xx00zzzz", "Sx data MSB position -> MSW of Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Finds the normalisation shift count of Sx and stores it in the upper word of Dz.")
        .operation("Dz = msb_position(Sx) << 16;")
        .example("PDMSB X0,A0 ; X0 data MSB position -> MSW of A0, clear LSW of A0"),
    Insn::new("DCT PDMSB Sx,Dz", "111110**********10011110xx00zzzz", "If DC = 1: Sx data MSB position -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the MSB position of Sx in Dz when DSR.DC is set.")
        .operation("if (DC) Dz = msb_position(Sx) << 16;")
        .example("PCMP X0,Y0\nDCT PDMSB X0,A0 ; If DC = 1: X0 data MSB position -> MSW of A0"),
    Insn::new("DCF PDMSB Sx,Dz", "111110**********10011111xx00zzzz", "If DC = 0: Sx data MSB position -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the MSB position of Sx in Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = msb_position(Sx) << 16;")
        .example("PCMP X0,Y0\nDCF PDMSB X0,A0 ; If DC = 0: X0 data MSB position -> MSW of A0"),
    Insn::new("PDMSB Sy,Dz", "111110**********1011110100yyzzzz", "Sy data MSB position -> MSW of Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Finds the normalisation shift count of Sy and stores it in the upper word of Dz.")
        .operation("Dz = msb_position(Sy) << 16;")
        .example("PDMSB Y0,A0 ; Y0 data MSB position -> MSW of A0, clear LSW of A0"),
    Insn::new("DCT PDMSB Sy,Dz", "111110**********1011111000yyzzzz", "If DC = 1: Sy data MSB position -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the MSB position of Sy in Dz when DSR.DC is set.")
        .operation("if (DC) Dz = msb_position(Sy) << 16;")
        .example("PCMP X0,Y0\nDCT PDMSB Y0,A0 ; If DC = 1: Y0 data MSB position -> MSW of A0"),
    Insn::new("DCF PDMSB Sy,Dz", "111110**********1011111100yyzzzz", "If DC = 0: Sy data MSB position -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Stores the MSB position of Sy in Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = msb_position(Sy) << 16;")
        .example("PCMP X0,Y0\nDCF PDMSB Y0,A0 ; If DC = 0: Y0 data MSB position -> MSW of A0"),
    Insn::new("PINC Sx,Dz", "111110**********10011001xx00zzzz", "MSW of Sx + 1 -> MSW of Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Increments the upper word of Sx into Dz.")
        .operation("Dz = (Sx + 0x10000) & 0xFFFF0000;")
        .example("PINC X0,A0 ; MSW of X0 + 1 -> MSW of A0, clear LSW of A0"),
    Insn::new("DCT PINC Sx,Dz", "111110**********10011010xx00zzzz", "If DC = 1: MSW of Sx + 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Increments the upper word of Sx into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = (Sx + 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PINC X0,A0 ; If DC = 1: MSW of X0 + 1 -> MSW of A0"),
    Insn::new("DCF PINC Sx,Dz", "111110**********10011011xx00zzzz", "If DC = 0: MSW of Sx + 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Increments the upper word of Sx into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sx + 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PINC X0,A0 ; If DC = 0: MSW of X0 + 1 -> MSW of A0"),
    Insn::new("PINC Sy,Dz", "111110**********1011100100yyzzzz", "MSW of Sy + 1 -> MSW of Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Increments the upper word of Sy into Dz.")
        .operation("Dz = (Sy + 0x10000) & 0xFFFF0000;")
        .example("PINC Y0,A0 ; MSW of Y0 + 1 -> MSW of A0, clear LSW of A0"),
    Insn::new("DCT PINC Sy,Dz", "111110**********1011101000yyzzzz", "If DC = 1: MSW of Sy + 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Increments the upper word of Sy into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = (Sy + 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PINC Y0,A0 ; If DC = 1: MSW of Y0 + 1 -> MSW of A0"),
    Insn::new("DCF PINC Sy,Dz", "111110**********1011101100yyzzzz", "If DC = 0: MSW of Sy + 1 -> MSW of Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Increments the upper word of Sy into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sy + 0x10000) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PINC Y0,A0 ; If DC = 0: MSW of Y0 + 1 -> MSW of A0"),
    Insn::new("PLDS Dz,MACH", "111110**********111011010000zzzz", "Dz -> MACH")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Dz to MACH.")
        .operation("MACH = Dz;")
        .example("PLDS A0,MACH ; A0 -> MACH"),
    Insn::new("DCT PLDS Dz,MACH", "111110**********111011100000zzzz", "If DC = 1: Dz -> MACH\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Dz to MACH when DSR.DC is set.")
        .operation("if (DC) MACH = Dz;")
        .example("PCMP X0,Y0\nDCT PLDS A0,MACH ; If DC = 1: A0 -> MACH"),
    Insn::new("DCF PLDS Dz,MACH", "111110**********111011110000zzzz", "If DC = 0: Dz -> MACH\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Dz to MACH when DSR.DC is clear.")
        .operation("if (!DC) MACH = Dz;")
        .example("PCMP X0,Y0\nDCF PLDS A0,MACH ; If DC = 0: A0 -> MACH"),
    Insn::new("PLDS Dz,MACL", "111110**********111111010000zzzz", "Dz -> MACL")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Dz to MACL.")
        .operation("MACL = Dz;")
        .example("PLDS A0,MACL ; A0 -> MACL"),
    Insn::new("DCT PLDS Dz,MACL", "111110**********111111100000zzzz", "If DC = 1: Dz -> MACL\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Dz to MACL when DSR.DC is set.")
        .operation("if (DC) MACL = Dz;")
        .example("PCMP X0,Y0\nDCT PLDS A0,MACL ; If DC = 1: A0 -> MACL"),
    Insn::new("DCF PLDS Dz,MACL", "111110**********111111110000zzzz", "If DC = 0: Dz -> MACL\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies Dz to MACL when DSR.DC is clear.")
        .operation("if (!DC) MACL = Dz;")
        .example("PCMP X0,Y0\nDCF PLDS A0,MACL ; If DC = 0: A0 -> MACL"),
    Insn::new("PMULS Se,Sf,Dg", "111110**********0100eeff0000gg00", "MSW of Se * MSW of Sf -> Dg")
        .on(DSP)
        .cycles("1", "1")
        .describe("Multiplies the signed upper words of Se and Sf as fixed-point values into Dg.")
        .operation("Dg = (int16)(Se >> 16) * (int16)(Sf >> 16) << 1;")
        .example("PMULS X1,Y1,M0 ; MSW of X1 * MSW of Y1 -> M0"),
    Insn::new("PNEG Sx,Dz", "111110**********11001001xx00zzzz", "0 - Sx -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Negates Sx into Dz.")
        .operation("Dz = -Sx;")
        .example("PNEG X0,A0 ; 0 - X0 -> A0"),
    Insn::new("DCT PNEG Sx,Dz", "111110**********11001010xx00zzzz", "If DC = 1: 0 - Sx -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Negates Sx into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = -Sx;")
        .example("PCMP X0,Y0\nDCT PNEG X0,A0 ; If DC = 1: 0 - X0 -> A0"),
    Insn::new("DCF PNEG Sx,Dz", "111110**********11001011xx00zzzz", "If DC = 0: 0 - Sx -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Negates Sx into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = -Sx;")
        .example("PCMP X0,Y0\nDCF PNEG X0,A0 ; If DC = 0: 0 - X0 -> A0"),
    Insn::new("PNEG Sy,Dz", "111110**********1110100100yyzzzz", "0 - Sy -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Negates Sy into Dz.")
        .operation("Dz = -Sy;")
        .example("PNEG Y0,A0 ; 0 - Y0 -> A0"),
    Insn::new("DCT PNEG Sy,Dz", "111110**********1110101000yyzzzz", "If DC = 1: 0 - Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Negates Sy into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = -Sy;")
        .example("PCMP X0,Y0\nDCT PNEG Y0,A0 ; If DC = 1: 0 - Y0 -> A0"),
    Insn::new("DCF PNEG Sy,Dz", "111110**********1110101100yyzzzz", "If DC = 0: 0 - Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Negates Sy into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = -Sy;")
        .example("PCMP X0,Y0\nDCF PNEG Y0,A0 ; If DC = 0: 0 - Y0 -> A0"),
    Insn::new("POR Sx,Sy,Dz", "111110**********10110101xxyyzzzz", "Sx | Sy -> Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("ORs the upper words of Sx and Sy into Dz.")
        .operation("Dz = (Sx | Sy) & 0xFFFF0000;")
        .example("POR X0,Y0,A0 ; X0 | Y0 -> A0, clear LSW of A0"),
    Insn::new("DCT POR Sx,Sy,Dz", "111110**********10110110xxyyzzzz", "If DC = 1: Sx | Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Conditional POR, executed when DSR.DC is set.")
        .operation("if (DC) Dz = (Sx | Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT POR X0,Y0,A0 ; If DC = 1: X0 | Y0 -> A0"),
    Insn::new("DCF POR Sx,Sy,Dz", "111110**********10110111xxyyzzzz", "If DC = 0: Sx | Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Conditional POR, executed when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sx | Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF POR X0,Y0,A0 ; If DC = 0: X0 | Y0 -> A0"),
    Insn::new("PRND Sx,Dz", "111110**********10011000xx00zzzz", "Sx + 0x00008000 -> Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Rounds Sx to its upper word.")
        .operation("Dz = (Sx + 0x8000) & 0xFFFF0000;")
        .example("PRND X0,A0 ; X0 + 0x00008000 -> A0, clear LSW of A0"),
    Insn::new("PRND Sy,Dz", "111110**********1011100000yyzzzz", "Sy + 0x00008000 -> Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Rounds Sy to its upper word.")
        .operation("Dz = (Sy + 0x8000) & 0xFFFF0000;")
        .example("PRND Y0,A0 ; Y0 + 0x00008000 -> A0, clear LSW of A0"),
    Insn::new("PSHA Sx,Sy,Dz", "111110**********10010001xxyyzzzz", "If Sy >= 0: Sx << Sy -> Dz\nIf Sy < 0: Sx >> Sy -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts Sx arithmetically by the signed amount in the upper word of Sy.")
        .operation("s = (int16)(Sy >> 16);\nDz = s >= 0 ? Sx << s : (int64)Sx >> -s;")
        .example("PSHA X0,Y0,A0 ; If Y0 >= 0: X0 << Y0 -> A0, if Y0 < 0: X0 >> Y0 -> A0"),
    Insn::new("DCT PSHA Sx,Sy,Dz", "111110**********10010010xxyyzzzz", "If DC = 1: Sx shifted arithmetically by Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts Sx arithmetically by the amount in Sy into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = Sy >= 0 ? Sx << Sy : Sx >> -Sy;")
        .example("PCMP X0,Y0\nDCT PSHA X0,Y0,A0 ; If DC = 1: X0 shifted arithmetically by Y0 -> A0"),
    Insn::new("DCF PSHA Sx,Sy,Dz", "111110**********10010011xxyyzzzz", "If DC = 0: Sx shifted arithmetically by Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts Sx arithmetically by the amount in Sy into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = Sy >= 0 ? Sx << Sy : Sx >> -Sy;")
        .example("PCMP X0,Y0\nDCF PSHA X0,Y0,A0 ; If DC = 0: X0 shifted arithmetically by Y0 -> A0"),
    Insn::new("PSHA #imm,Dz", "111110**********00010iiiiiiizzzz", "If imm >= 0: Dz << imm -> Dz\nIf imm < 0: Dz >> imm -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts Dz arithmetically by the signed 7-bit immediate (-32 to +32).")
        .operation("Dz = imm >= 0 ? Dz << imm : (int64)Dz >> -imm;")
        .example("PSHA #-4,A0 ; A0 >> 4 -> A0"),
    Insn::new("PSHL Sx,Sy,Dz", "111110**********10000001xxyyzzzz", "If Sy >= 0: Sx << Sy -> Dz, clear LSW of Dz\nIf Sy < 0: Sx >> Sy -> Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts the upper word of Sx logically by the signed amount in Sy.")
        .operation("s = (int16)(Sy >> 16);\nDz = (s >= 0 ? Sx << s : Sx >> -s) & 0xFFFF0000;")
        .example("PSHL X0,Y0,A0 ; If Y0 >= 0: X0 << Y0 -> A0, clear LSW of A0, if Y0 < 0: X0 >> Y0 -> A0, clear LSW of A0"),
    Insn::new("DCT PSHL Sx,Sy,Dz", "111110**********10000010xxyyzzzz", "If DC = 1: Sx shifted logically by Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts the upper word of Sx logically by Sy into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = (Sy >= 0 ? Sx << Sy : (uint32)Sx >> -Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PSHL X0,Y0,A0 ; If DC = 1: X0 shifted logically by Y0 -> A0"),
    Insn::new("DCF PSHL Sx,Sy,Dz", "111110**********10000011xxyyzzzz", "If DC = 0: Sx shifted logically by Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts the upper word of Sx logically by Sy into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sy >= 0 ? Sx << Sy : (uint32)Sx >> -Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PSHL X0,Y0,A0 ; If DC = 0: X0 shifted logically by Y0 -> A0"),
    Insn::new("PSHL #imm,Dz", "111110**********00000iiiiiiizzzz", "If imm >= 0: Dz << imm -> Dz, clear LSW of Dz\nIf imm < 0: Dz >> imm, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Shifts the upper word of Dz logically by the signed 7-bit immediate (-16 to +16).")
        .operation("Dz = (imm >= 0 ? Dz << imm : Dz >> -imm) & 0xFFFF0000;")
        .example("PSHL #8,A0 ; MSW of A0 << 8 -> A0"),
    Insn::new("PSTS MACH,Dz", "111110**********110011010000zzzz", "MACH -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies MACH to Dz.")
        .operation("Dz = MACH;")
        .example("PSTS MACH,A0 ; MACH -> A0"),
    Insn::new("DCT PSTS MACH,Dz", "111110**********110011100000zzzz", "If DC = 1: MACH -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies MACH to Dz when DSR.DC is set.")
        .operation("if (DC) Dz = MACH;")
        .example("PCMP X0,Y0\nDCT PSTS MACH,A0 ; If DC = 1: MACH -> A0"),
    Insn::new("DCF PSTS MACH,Dz", "111110**********110011110000zzzz", "If DC = 0: MACH -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies MACH to Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = MACH;")
        .example("PCMP X0,Y0\nDCF PSTS MACH,A0 ; If DC = 0: MACH -> A0"),
    Insn::new("PSTS MACL,Dz", "111110**********110111010000zzzz", "MACL -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies MACL to Dz.")
        .operation("Dz = MACL;")
        .example("PSTS MACL,A0 ; MACL -> A0"),
    Insn::new("DCT PSTS MACL,Dz", "111110**********110111100000zzzz", "If DC = 1: MACL -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies MACL to Dz when DSR.DC is set.")
        .operation("if (DC) Dz = MACL;")
        .example("PCMP X0,Y0\nDCT PSTS MACL,A0 ; If DC = 1: MACL -> A0"),
    Insn::new("DCF PSTS MACL,Dz", "111110**********110111110000zzzz", "If DC = 0: MACL -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Copies MACL to Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = MACL;")
        .example("PCMP X0,Y0\nDCF PSTS MACL,A0 ; If DC = 0: MACL -> A0"),
    Insn::new("PSUB Sx,Sy,Dz", "111110**********10100001xxyyzzzz", "Sx - Sy -> Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Subtracts Sy from Sx into Dz and updates DSR.DC.")
        .operation("Dz = Sx - Sy;")
        .example("PSUB X0,Y0,A0 ; X0 - Y0 -> A0"),
    Insn::new("DCT PSUB Sx,Sy,Dz", "111110**********10100010xxyyzzzz", "If DC = 1: Sx - Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Subtracts Sy from Sx into Dz when DSR.DC is set.")
        .operation("if (DC) Dz = Sx - Sy;")
        .example("PCMP X0,Y0\nDCT PSUB X0,Y0,A0 ; If DC = 1: X0 - Y0 -> A0"),
    Insn::new("DCF PSUB Sx,Sy,Dz", "111110**********10100011xxyyzzzz", "If DC = 0: Sx - Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Subtracts Sy from Sx into Dz when DSR.DC is clear.")
        .operation("if (!DC) Dz = Sx - Sy;")
        .example("PCMP X0,Y0\nDCF PSUB X0,Y0,A0 ; If DC = 0: X0 - Y0 -> A0"),
    Insn::new("PSUB Sx,Sy,Du PMULS Se,Sf,Dg", "111110**********0110eeffxxyygguu", "Sx - Sy -> Du\nMSW of Se * MSW of Sf -> Dg")
        .on(DSP)
        .cycles("1", "1")
        .describe("Subtracts Sy from Sx into Du while multiplying the upper words of Se and Sf into Dg.")
        .operation("Du = Sx - Sy;\nDg = (int16)(Se >> 16) * (int16)(Sf >> 16) << 1;")
        .example("PSUB X0,Y0,A1 PMULS X1,Y1,M0 ; X0 - Y0 -> A1, MSW of X1 * MSW of Y1 -> M0"),
    Insn::new("PSUBC Sx,Sy,Dz", "111110**********10100000xxyyzzzz", "Sx - Sy - DC -> Dz, borrow -> DC")
        .on(DSP)
        .cycles("1", "1")
        .describe("Subtracts Sy and the DC bit from Sx into Dz, leaving the borrow in DC.")
        .operation("Dz = Sx - Sy - DC;\nDC = borrow;")
        .example("PSUBC X0,Y0,A0 ; X0 - Y0 - DC -> A0, borrow -> DC"),
    Insn::new("PXOR Sx,Sy,Dz", "111110**********10100101xxyyzzzz", "Sx ^ Sy -> Dz, clear LSW of Dz")
        .on(DSP)
        .cycles("1", "1")
        .describe("Exclusive-ORs the upper words of Sx and Sy into Dz.")
        .operation("Dz = (Sx ^ Sy) & 0xFFFF0000;")
        .example("PXOR X0,Y0,A0 ; X0 ^ Y0 -> A0, clear LSW of A0"),
    Insn::new("DCT PXOR Sx,Sy,Dz", "111110**********10100110xxyyzzzz", "If DC = 1: Sx ^ Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Conditional PXOR, executed when DSR.DC is set.")
        .operation("if (DC) Dz = (Sx ^ Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCT PXOR X0,Y0,A0 ; If DC = 1: X0 ^ Y0 -> A0"),
    Insn::new("DCF PXOR Sx,Sy,Dz", "111110**********10100111xxyyzzzz", "If DC = 0: Sx ^ Sy -> Dz\nElse: nop")
        .on(DSP)
        .cycles("1", "1")
        .describe("Conditional PXOR, executed when DSR.DC is clear.")
        .operation("if (!DC) Dz = (Sx ^ Sy) & 0xFFFF0000;")
        .example("PCMP X0,Y0\nDCF PXOR X0,Y0,A0 ; If DC = 0: X0 ^ Y0 -> A0"),
];
