use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("ADD Rm,Rn", "0011nnnnmmmm1100", "Rn + Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Adds Rm and Rn and stores the result in Rn.")
        .operation("R[n] += R[m];")
        .example("ADD R0,R1 ; R0 = H'7FFFFFFF, R1 = H'00000001 gives R1 = H'80000000"),
    Insn::new("ADD #imm,Rn", "0111nnnniiiiiiii", "Rn + imm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Adds the sign-extended 8-bit immediate to Rn.")
        .operation("R[n] += sign_extend_8(imm);")
        .example("ADD #-2,R1 ; R1 -= 2"),
    Insn::new("ADDC Rm,Rn", "0011nnnnmmmm1110", "Rn + Rm + T -> Rn, carry -> T")
        .t(TBit::Carry)
        .group(Ex)
        .cycles("1", "1")
        .describe(
            "Adds Rm, Rn and the T bit, storing the sum in Rn and the carry in T. \
             Used for additions wider than 32 bits.",
        )
        .operation("tmp = R[n] + R[m];\nT = tmp < R[n];\nR[n] = tmp + T_old;\nT |= R[n] < tmp;")
        .example("CLRT\nADDC R3,R1 ; R0:R1 += R2:R3\nADDC R2,R0"),
    Insn::new("ADDV Rm,Rn", "0011nnnnmmmm1111", "Rn + Rm -> Rn, overflow -> T")
        .t(TBit::Overflow)
        .group(Ex)
        .cycles("1", "1")
        .describe("Adds Rm to Rn treating both as signed and sets T on overflow.")
        .operation("R[n] += R[m];\nT = signed_overflow;")
        .example("ADDV R0,R1 ; R0 = H'00000001, R1 = H'7FFFFFFF gives R1 = H'80000000, T = 1"),
    Insn::new("CMP/EQ #imm,R0", "10001000iiiiiiii", "If R0 = imm: 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Compares R0 with the sign-extended 8-bit immediate for equality.")
        .operation("T = R[0] == sign_extend_8(imm);")
        .example("CMP/EQ #1,R0 ; T = R0 == 1\nBT equal"),
    Insn::new("CMP/EQ Rm,Rn", "0011nnnnmmmm0000", "If Rn = Rm: 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn equals Rm.")
        .operation("T = R[n] == R[m];")
        .example("CMP/EQ R0,R1 ; T = R1 == R0\nBT equal"),
    Insn::new("CMP/HS Rm,Rn", "0011nnnnmmmm0010", "If Rn >= Rm (unsigned): 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn is greater than or equal to Rm as unsigned values.")
        .operation("T = R[n] >= R[m];")
        .example("CMP/HS R0,R1 ; R0 = H'00000001, R1 = H'FFFFFFFF gives T = 1"),
    Insn::new("CMP/GE Rm,Rn", "0011nnnnmmmm0011", "If Rn >= Rm (signed): 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn is greater than or equal to Rm as signed values.")
        .operation("T = (int32)R[n] >= (int32)R[m];")
        .example("CMP/GE R0,R1 ; R0 = H'00000001, R1 = H'FFFFFFFF gives T = 0"),
    Insn::new("CMP/HI Rm,Rn", "0011nnnnmmmm0110", "If Rn > Rm (unsigned): 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn is greater than Rm as unsigned values.")
        .operation("T = R[n] > R[m];")
        .example("CMP/HI R0,R1 ; T = R1 > R0 unsigned\nBT above"),
    Insn::new("CMP/GT Rm,Rn", "0011nnnnmmmm0111", "If Rn > Rm (signed): 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn is greater than Rm as signed values.")
        .operation("T = (int32)R[n] > (int32)R[m];")
        .example("CMP/GT R0,R1 ; T = R1 > R0 signed\nBT greater"),
    Insn::new("CMP/PL Rn", "0100nnnn00010101", "If Rn > 0 (signed): 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn is greater than zero.")
        .operation("T = (int32)R[n] > 0;")
        .example("CMP/PL R0 ; T = R0 > 0\nBT positive"),
    Insn::new("CMP/PZ Rn", "0100nnnn00010001", "If Rn >= 0 (signed): 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe("Sets T when Rn is greater than or equal to zero.")
        .operation("T = (int32)R[n] >= 0;")
        .example("CMP/PZ R0 ; T = R0 >= 0\nBF negative"),
    Insn::new("CMP/STR Rm,Rn", "0010nnnnmmmm1100", "If any byte of Rn equals the same byte of Rm: 1 -> T\nElse: 0 -> T")
        .t(TBit::Result)
        .group(Mt)
        .cycles("1", "1")
        .describe(
            "Sets T when any of the four bytes of Rn equals the byte in the same \
             position of Rm. Useful for scanning strings a word at a time.",
        )
        .operation("tmp = R[n] ^ R[m];\nT = !(tmp & 0xFF000000) || !(tmp & 0xFF0000) || !(tmp & 0xFF00) || !(tmp & 0xFF);")
        .example("MOV #0,R0\nCMP/STR R0,R1 ; T = 1 if R1 holds a zero byte"),
    Insn::new("CLIPS.B Rn", "0100nnnn10010001", "If Rn > 127: 127 -> Rn, 1 -> CS\nIf Rn < -128: -128 -> Rn, 1 -> CS")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Saturates Rn to the signed byte range, setting the CS bit when clipped.")
        .operation("if ((int32)R[n] > 127) { R[n] = 127; CS = 1; }\nelse if ((int32)R[n] < -128) { R[n] = -128; CS = 1; }")
        .example("CLIPS.B R1 ; R1 = H'00000123 gives R1 = H'0000007F, CS = 1"),
    Insn::new("CLIPS.W Rn", "0100nnnn10010101", "If Rn > 32767: 32767 -> Rn, 1 -> CS\nIf Rn < -32768: -32768 -> Rn, 1 -> CS")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Saturates Rn to the signed word range, setting the CS bit when clipped.")
        .operation("if ((int32)R[n] > 32767) { R[n] = 32767; CS = 1; }\nelse if ((int32)R[n] < -32768) { R[n] = -32768; CS = 1; }")
        .example("CLIPS.W R1 ; R1 = H'FFFF0000 gives R1 = H'FFFF8000, CS = 1"),
    Insn::new("CLIPU.B Rn", "0100nnnn10000001", "If Rn > 255: 255 -> Rn, 1 -> CS")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Saturates Rn to the unsigned byte range, setting the CS bit when clipped.")
        .operation("if (R[n] > 255) { R[n] = 255; CS = 1; }")
        .example("CLIPU.B R1 ; R1 = H'00000123 gives R1 = H'000000FF, CS = 1"),
    Insn::new("CLIPU.W Rn", "0100nnnn10000101", "If Rn > 65535: 65535 -> Rn, 1 -> CS")
        .on(SH2A)
        .cycles("1", "1")
        .describe("Saturates Rn to the unsigned word range, setting the CS bit when clipped.")
        .operation("if (R[n] > 65535) { R[n] = 65535; CS = 1; }")
        .example("CLIPU.W R1 ; R1 = H'00012345 gives R1 = H'0000FFFF, CS = 1"),
    Insn::new("DIV0S Rm,Rn", "0010nnnnmmmm0111", "MSB of Rn -> Q, MSB of Rm -> M, M ^ Q -> T")
        .t(TBit::Result)
        .group(Ex)
        .cycles("1", "1")
        .describe("Initialises the M, Q and T bits for a signed division step sequence.")
        .operation("Q = R[n] >> 31;\nM = R[m] >> 31;\nT = M ^ Q;")
        .example("DIV0S R0,R1 ; set up a signed R1 / R0\n.rept 16\nDIV1 R0,R1\n.endr"),
    Insn::new("DIV0U", "0000000000011001", "0 -> M, 0 -> Q, 0 -> T")
        .t(TBit::Clear)
        .group(Ex)
        .cycles("1", "1")
        .describe("Clears M, Q and T before an unsigned division step sequence.")
        .operation("M = Q = T = 0;")
        .example("DIV0U ; M = Q = T = 0\n.rept 16\nDIV1 R0,R1\n.endr"),
    Insn::new("DIV1 Rm,Rn", "0011nnnnmmmm0100", "1-step division (Rn / Rm)")
        .t(TBit::Result)
        .group(Ex)
        .cycles("1", "1")
        .describe(
            "Performs one step of a non-restoring division of Rn by Rm, producing one \
             quotient bit in T. Repeat for each bit of the quotient.",
        )
        .operation("old_q = Q;\nQ = R[n] >> 31;\nR[n] = (R[n] << 1) | T;\nif (old_q == M) R[n] -= R[m]; else R[n] += R[m];\n/* Q updated from the borrow or carry */\nT = (Q == M);")
        .example("DIV0U\n.rept 32\nROTCL R1\nDIV1 R3,R2\n.endr"),
    Insn::new("DIVS R0,Rn", "0100nnnn10010100", "Signed, Rn / R0 -> Rn")
        .on(SH2A)
        .cycles("36", "36")
        .describe("Divides Rn by R0 as signed values and stores the quotient in Rn.")
        .operation("R[n] = (int32)R[n] / (int32)R[0];")
        .example("MOV #-7,R1\nMOV #2,R0\nDIVS R0,R1 ; R1 = -3")
        .exceptions(&[IntegerDivisionByZero, IntegerOverflow]),
    Insn::new("DIVU R0,Rn", "0100nnnn10000100", "Unsigned, Rn / R0 -> Rn")
        .on(SH2A)
        .cycles("34", "34")
        .describe("Divides Rn by R0 as unsigned values and stores the quotient in Rn.")
        .operation("R[n] = R[n] / R[0];")
        .example("MOV #7,R1\nMOV #2,R0\nDIVU R0,R1 ; R1 = 3")
        .exceptions(&[IntegerDivisionByZero]),
    Insn::new("DMULS.L Rm,Rn", "0011nnnnmmmm1101", "Signed, Rn * Rm -> MACH:MACL, 32 * 32 -> 64 bits")
        .on(SH2_UP)
        .group(Co)
        .cycles("1", "4/4")
        .timing(&[Cycles::on(SH1_SH2, "2", "2-4")])
        .describe("Multiplies Rn by Rm as signed values and stores the 64-bit product in MACH:MACL.")
        .operation("MACH:MACL = (int64)(int32)R[n] * (int32)R[m];")
        .example("DMULS.L R0,R1 ; R0 = H'FFFFFFFE, R1 = H'00005555 gives MACH = H'FFFFFFFF, MACL = H'FFFF5556"),
    Insn::new("DMULU.L Rm,Rn", "0011nnnnmmmm0101", "Unsigned, Rn * Rm -> MACH:MACL, 32 * 32 -> 64 bits")
        .on(SH2_UP)
        .group(Co)
        .cycles("1", "4/4")
        .timing(&[Cycles::on(SH1_SH2, "2", "2-4")])
        .describe("Multiplies Rn by Rm as unsigned values and stores the 64-bit product in MACH:MACL.")
        .operation("MACH:MACL = (uint64)R[n] * R[m];")
        .example("DMULU.L R0,R1 ; R0 = H'FFFFFFFE, R1 = H'00005555 gives MACH = H'00005554, MACL = H'FFFF5556"),
    Insn::new("DT Rn", "0100nnnn00010000", "Rn-1 -> Rn\nIf Rn = 0: 1 -> T\nElse: 0 -> T")
        .on(SH2_UP)
        .t(TBit::Result)
        .group(Ex)
        .cycles("1", "1")
        .describe("Decrements Rn and sets T when the result is zero. Used to close loops.")
        .operation("R[n] -= 1;\nT = R[n] == 0;")
        .example("loop:\n  ...\n  DT R5\n  BF loop"),
    Insn::new("EXTS.B Rm,Rn", "0110nnnnmmmm1110", "Rm sign-extended from byte -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Sign-extends the lowest byte of Rm into Rn.")
        .operation("R[n] = sign_extend_8(R[m]);")
        .example("EXTS.B R0,R1 ; R0 = H'00000080 gives R1 = H'FFFFFF80"),
    Insn::new("EXTS.W Rm,Rn", "0110nnnnmmmm1111", "Rm sign-extended from word -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Sign-extends the lower word of Rm into Rn.")
        .operation("R[n] = sign_extend_16(R[m]);")
        .example("EXTS.W R0,R1 ; R0 = H'00008000 gives R1 = H'FFFF8000"),
    Insn::new("EXTU.B Rm,Rn", "0110nnnnmmmm1100", "Rm zero-extended from byte -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Zero-extends the lowest byte of Rm into Rn.")
        .operation("R[n] = R[m] & 0xFF;")
        .example("EXTU.B R0,R1 ; R0 = H'FFFFFF80 gives R1 = H'00000080"),
    Insn::new("EXTU.W Rm,Rn", "0110nnnnmmmm1101", "Rm zero-extended from word -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Zero-extends the lower word of Rm into Rn.")
        .operation("R[n] = R[m] & 0xFFFF;")
        .example("EXTU.W R0,R1 ; R0 = H'FFFF8000 gives R1 = H'00008000"),
    Insn::new("MAC.L @Rm+,@Rn+", "0000nnnnmmmm1111", "Signed, (Rn) * (Rm) + MAC -> MAC, Rn+4 -> Rn, Rm+4 -> Rm")
        .on(SH2_UP)
        .group(Co)
        .cycles("2", "2/5")
        .timing(&[Cycles::on(SH1_SH2, "2", "2-4")])
        .describe(
            "Multiplies the signed longwords at Rn and Rm, adds the 64-bit product to \
             MACH:MACL and increments both pointers by 4. With the S bit set the sum \
             saturates to 48 bits.",
        )
        .operation("MAC += (int64)(int32)read_32(R[n]) * (int32)read_32(R[m]);\nR[n] += 4;\nR[m] += 4;\nif (S) saturate_48(MAC);")
        .example("CLRMAC\nMAC.L @R0+,@R1+ ; MAC += long at R0 * long at R1\nMAC.L @R0+,@R1+\nSTS MACL,R2")
        .exceptions(LOAD),
    Insn::new("MAC.W @Rm+,@Rn+", "0100nnnnmmmm1111", "Signed, (Rn) * (Rm) + MAC -> MAC, Rn+2 -> Rn, Rm+2 -> Rm")
        .group(Co)
        .cycles("2", "2/4")
        .timing(&[Cycles::on(SH1_SH2, "2", "2-3")])
        .describe(
            "Multiplies the signed words at Rn and Rm, adds the product to MACH:MACL and \
             increments both pointers by 2. With the S bit set the sum saturates to \
             32 bits in MACL.",
        )
        .operation("MAC += (int32)(int16)read_16(R[n]) * (int16)read_16(R[m]);\nR[n] += 2;\nR[m] += 2;\nif (S) saturate_32(MACL);")
        .example("CLRMAC\nMAC.W @R0+,@R1+ ; MAC += word at R0 * word at R1\nMAC.W @R0+,@R1+\nSTS MACL,R2")
        .exceptions(LOAD),
    Insn::new("MUL.L Rm,Rn", "0000nnnnmmmm0111", "Rn * Rm -> MACL, 32 * 32 -> 32 bits")
        .on(SH2_UP)
        .group(Co)
        .cycles("2", "4/4")
        .timing(&[Cycles::on(SH1_SH2, "2", "2-4")])
        .describe("Multiplies Rn by Rm and stores the low 32 bits of the product in MACL.")
        .operation("MACL = R[n] * R[m];")
        .example("MUL.L R0,R1 ; R0 = H'FFFFFFFE, R1 = H'00005555 gives MACL = H'FFFF5556"),
    Insn::new("MULR R0,Rn", "0100nnnn10000000", "R0 * Rn -> Rn, 32 * 32 -> 32 bits")
        .on(SH2A)
        .cycles("2", "4")
        .describe("Multiplies R0 by Rn and stores the low 32 bits of the product in Rn.")
        .operation("R[n] = R[0] * R[n];")
        .example("MOV #3,R0\nMOV #5,R1\nMULR R0,R1 ; R1 = 15"),
    Insn::new("MULS.W Rm,Rn", "0010nnnnmmmm1111", "Signed, Rn * Rm -> MACL, 16 * 16 -> 32 bits")
        .group(Co)
        .cycles("2", "4/4")
        .timing(&[Cycles::on(SH1_SH2, "1", "1-3")])
        .describe("Multiplies the lower words of Rn and Rm as signed values into MACL.")
        .operation("MACL = (int32)(int16)R[n] * (int16)R[m];")
        .example("MULS.W R0,R1 ; R0 = H'FFFFFFFE, R1 = H'00005555 gives MACL = H'FFFF5556"),
    Insn::new("MULU.W Rm,Rn", "0010nnnnmmmm1110", "Unsigned, Rn * Rm -> MACL, 16 * 16 -> 32 bits")
        .group(Co)
        .cycles("2", "4/4")
        .timing(&[Cycles::on(SH1_SH2, "1", "1-3")])
        .describe("Multiplies the lower words of Rn and Rm as unsigned values into MACL.")
        .operation("MACL = (uint32)(uint16)R[n] * (uint16)R[m];")
        .example("MULU.W R0,R1 ; R0 = H'00000002, R1 = H'FFFFAAAA gives MACL = H'00015554"),
    Insn::new("NEG Rm,Rn", "0110nnnnmmmm1011", "0 - Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Stores the two's complement of Rm in Rn.")
        .operation("R[n] = -R[m];")
        .example("NEG R0,R1 ; R0 = H'00000001 gives R1 = H'FFFFFFFF"),
    Insn::new("NEGC Rm,Rn", "0110nnnnmmmm1010", "0 - Rm - T -> Rn, borrow -> T")
        .t(TBit::Borrow)
        .group(Ex)
        .cycles("1", "1")
        .describe("Subtracts Rm and T from zero, storing the result in Rn and the borrow in T.")
        .operation("tmp = 0 - R[m];\nR[n] = tmp - T;\nT = (0 < tmp) || (tmp < R[n]);")
        .example("CLRT\nNEGC R1,R1 ; negate R0:R1\nNEGC R0,R0"),
    Insn::new("SUB Rm,Rn", "0011nnnnmmmm1000", "Rn - Rm -> Rn")
        .group(Ex)
        .cycles("1", "1")
        .describe("Subtracts Rm from Rn and stores the result in Rn.")
        .operation("R[n] -= R[m];")
        .example("SUB R0,R1 ; R0 = H'00000001, R1 = H'80000000 gives R1 = H'7FFFFFFF"),
    Insn::new("SUBC Rm,Rn", "0011nnnnmmmm1010", "Rn - Rm - T -> Rn, borrow -> T")
        .t(TBit::Borrow)
        .group(Ex)
        .cycles("1", "1")
        .describe("Subtracts Rm and T from Rn, storing the borrow in T.")
        .operation("tmp = R[n] - R[m];\nT_new = R[n] < tmp;\nR[n] = tmp - T;\nT = T_new || (tmp < R[n]);")
        .example("CLRT\nSUBC R3,R1 ; R0:R1 -= R2:R3\nSUBC R2,R0"),
    Insn::new("SUBV Rm,Rn", "0011nnnnmmmm1011", "Rn - Rm -> Rn, underflow -> T")
        .t(TBit::Underflow)
        .group(Ex)
        .cycles("1", "1")
        .describe("Subtracts Rm from Rn as signed values and sets T on underflow.")
        .operation("R[n] -= R[m];\nT = signed_underflow;")
        .example("SUBV R0,R1 ; R0 = H'00000002, R1 = H'80000001 gives R1 = H'7FFFFFFF, T = 1"),
];
