use super::*;

pub(super) static INSNS: &[Insn] = &[
    Insn::new("ROTL Rn", "0100nnnn00000100", "T <- Rn <- MSB")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Rotates Rn left by one bit. The bit rotated out goes to T.")
        .operation("T = R[n] >> 31;\nR[n] = (R[n] << 1) | T;")
        .example("ROTL R0 ; R0 = H'80000000 gives R0 = H'00000001, T = 1"),
    Insn::new("ROTR Rn", "0100nnnn00000101", "LSB -> Rn -> T")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Rotates Rn right by one bit. The bit rotated out goes to T.")
        .operation("T = R[n] & 1;\nR[n] = (R[n] >> 1) | (T << 31);")
        .example("ROTR R0 ; R0 = H'00000001 gives R0 = H'80000000, T = 1"),
    Insn::new("ROTCL Rn", "0100nnnn00100100", "T <- Rn <- T")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Rotates Rn left by one bit through the T bit.")
        .operation("tmp = R[n] >> 31;\nR[n] = (R[n] << 1) | T;\nT = tmp;")
        .example("CLRT\nROTCL R0 ; R0 = H'80000000 gives R0 = 0, T = 1"),
    Insn::new("ROTCR Rn", "0100nnnn00100101", "T -> Rn -> T")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Rotates Rn right by one bit through the T bit.")
        .operation("tmp = R[n] & 1;\nR[n] = (R[n] >> 1) | (T << 31);\nT = tmp;")
        .example("SETT\nROTCR R0 ; R0 = H'00000001 gives R0 = H'80000000, T = 1"),
    Insn::new("SHAD Rm,Rn", "0100nnnnmmmm1100", "If Rm >= 0: Rn << Rm -> Rn\nIf Rm < 0: Rn >> |Rm| -> [MSB -> Rn]")
        .on(SH3_UP_SH2A)
        .group(Ex)
        .describe(
            "Shifts Rn arithmetically. A positive Rm shifts left, a negative Rm shifts \
             right by the low five bits of its magnitude.",
        )
        .operation("s = R[m] & 0x1F;\nif ((int32)R[m] >= 0) R[n] <<= s;\nelse if (s == 0) R[n] = (int32)R[n] >> 31;\nelse R[n] = (int32)R[n] >> (32 - s);")
        .example("MOV #-2,R0\nSHAD R0,R1 ; R1 = H'80180000 gives R1 = H'E0060000"),
    Insn::new("SHAL Rn", "0100nnnn00100000", "T <- Rn <- 0")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Shifts Rn left by one bit arithmetically. The MSB goes to T.")
        .operation("T = R[n] >> 31;\nR[n] <<= 1;")
        .example("SHAL R0 ; R0 = H'80000001 gives R0 = H'00000002, T = 1"),
    Insn::new("SHAR Rn", "0100nnnn00100001", "MSB -> Rn -> T")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Shifts Rn right by one bit arithmetically. The LSB goes to T.")
        .operation("T = R[n] & 1;\nR[n] = (int32)R[n] >> 1;")
        .example("SHAR R0 ; R0 = H'80000001 gives R0 = H'C0000000, T = 1"),
    Insn::new("SHLD Rm,Rn", "0100nnnnmmmm1101", "If Rm >= 0: Rn << Rm -> Rn\nIf Rm < 0: Rn >> |Rm| -> [0 -> Rn]")
        .on(SH3_UP_SH2A)
        .group(Ex)
        .describe(
            "Shifts Rn logically. A positive Rm shifts left, a negative Rm shifts right \
             by the low five bits of its magnitude.",
        )
        .operation("s = R[m] & 0x1F;\nif ((int32)R[m] >= 0) R[n] <<= s;\nelse if (s == 0) R[n] = 0;\nelse R[n] >>= (32 - s);")
        .example("MOV #-2,R0\nSHLD R0,R1 ; R1 = H'80180000 gives R1 = H'20060000"),
    Insn::new("SHLL Rn", "0100nnnn00000000", "T <- Rn <- 0")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Shifts Rn left by one bit. The MSB goes to T.")
        .operation("T = R[n] >> 31;\nR[n] <<= 1;")
        .example("SHLL R0 ; R0 = H'80000001 gives R0 = H'00000002, T = 1"),
    Insn::new("SHLL2 Rn", "0100nnnn00001000", "Rn << 2 -> Rn")
        .group(Ex)
        .describe("Shifts Rn left by two bits.")
        .operation("R[n] <<= 2;")
        .example("SHLL2 R0 ; R0 = H'12345678 gives R0 = H'48D159E0"),
    Insn::new("SHLL8 Rn", "0100nnnn00011000", "Rn << 8 -> Rn")
        .group(Ex)
        .describe("Shifts Rn left by eight bits.")
        .operation("R[n] <<= 8;")
        .example("SHLL8 R0 ; R0 = H'12345678 gives R0 = H'34567800"),
    Insn::new("SHLL16 Rn", "0100nnnn00101000", "Rn << 16 -> Rn")
        .group(Ex)
        .describe("Shifts Rn left by sixteen bits.")
        .operation("R[n] <<= 16;")
        .example("SHLL16 R0 ; R0 = H'12345678 gives R0 = H'56780000"),
    Insn::new("SHLR Rn", "0100nnnn00000001", "0 -> Rn -> T")
        .t(TBit::ShiftOut)
        .group(Ex)
        .describe("Shifts Rn right by one bit logically. The LSB goes to T.")
        .operation("T = R[n] & 1;\nR[n] >>= 1;")
        .example("SHLR R0 ; R0 = H'80000001 gives R0 = H'40000000, T = 1"),
    Insn::new("SHLR2 Rn", "0100nnnn00001001", "Rn >> 2 -> [0 -> Rn]")
        .group(Ex)
        .describe("Shifts Rn right by two bits logically.")
        .operation("R[n] >>= 2;")
        .example("SHLR2 R0 ; R0 = H'12345678 gives R0 = H'048D159E"),
    Insn::new("SHLR8 Rn", "0100nnnn00011001", "Rn >> 8 -> [0 -> Rn]")
        .group(Ex)
        .describe("Shifts Rn right by eight bits logically.")
        .operation("R[n] >>= 8;")
        .example("SHLR8 R0 ; R0 = H'12345678 gives R0 = H'00123456"),
    Insn::new("SHLR16 Rn", "0100nnnn00101001", "Rn >> 16 -> [0 -> Rn]")
        .group(Ex)
        .describe("Shifts Rn right by sixteen bits logically.")
        .operation("R[n] >>= 16;")
        .example("SHLR16 R0 ; R0 = H'12345678 gives R0 = H'00001234"),
];
