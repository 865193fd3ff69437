use strum_macros::{Display, EnumIter, EnumString, FromRepr};

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
pub enum SuperhRegister {
    // General-purpose registers.
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    // Banked registers, as seen from the inactive bank.
    #[strum(serialize = "R0_BANK")]
    R0Bank,
    #[strum(serialize = "R1_BANK")]
    R1Bank,
    #[strum(serialize = "R2_BANK")]
    R2Bank,
    #[strum(serialize = "R3_BANK")]
    R3Bank,
    #[strum(serialize = "R4_BANK")]
    R4Bank,
    #[strum(serialize = "R5_BANK")]
    R5Bank,
    #[strum(serialize = "R6_BANK")]
    R6Bank,
    #[strum(serialize = "R7_BANK")]
    R7Bank,
    // Control registers.
    SR,
    Ssr,
    Spc,
    Gbr,
    Vbr,
    Sgr,
    Dbr,
    Tbr,
    // System registers.
    Mach,
    Macl,
    PR,
    PC,
    Fpscr,
    Fpul,
    // Floating-point registers (single).
    Fr0,
    Fr1,
    Fr2,
    Fr3,
    Fr4,
    Fr5,
    Fr6,
    Fr7,
    Fr8,
    Fr9,
    Fr10,
    Fr11,
    Fr12,
    Fr13,
    Fr14,
    Fr15,
    // Floating-point registers (double).
    Dr0,
    Dr2,
    Dr4,
    Dr6,
    Dr8,
    Dr10,
    Dr12,
    Dr14,
    // Floating-point registers (double, other bank).
    Xd0,
    Xd2,
    Xd4,
    Xd6,
    Xd8,
    Xd10,
    Xd12,
    Xd14,
    // Floating-point vectors and the back bank matrix.
    Fv0,
    Fv4,
    Fv8,
    Fv12,
    Xmtrx,
    // DSP registers.
    A0,
    A1,
    A0g,
    A1g,
    M0,
    M1,
    X0,
    X1,
    Y0,
    Y1,
    Dsr,
    Mod,
    Rs,
    Re,
}

const BANK_OFFSET: usize = SuperhRegister::R0Bank as usize;
const FR_OFFSET: usize = SuperhRegister::Fr0 as usize;
const DR_OFFSET: usize = SuperhRegister::Dr0 as usize;
const XD_OFFSET: usize = SuperhRegister::Xd0 as usize;
const FV_OFFSET: usize = SuperhRegister::Fv0 as usize;

impl SuperhRegister {
    pub fn new_gpr(id: usize) -> Option<SuperhRegister> {
        (id < 16).then(|| SuperhRegister::from_repr(id)).flatten()
    }

    pub fn new_bank(id: usize) -> Option<SuperhRegister> {
        (id < 8)
            .then(|| SuperhRegister::from_repr(id + BANK_OFFSET))
            .flatten()
    }

    pub fn new_fr(id: usize) -> Option<SuperhRegister> {
        (id < 16)
            .then(|| SuperhRegister::from_repr(id + FR_OFFSET))
            .flatten()
    }

    /// `id` is the 3-bit field from the encoding, so DR(2 * id).
    pub fn new_dr(id: usize) -> Option<SuperhRegister> {
        (id < 8)
            .then(|| SuperhRegister::from_repr(id + DR_OFFSET))
            .flatten()
    }

    /// `id` is the 3-bit field from the encoding, so XD(2 * id).
    pub fn new_xd(id: usize) -> Option<SuperhRegister> {
        (id < 8)
            .then(|| SuperhRegister::from_repr(id + XD_OFFSET))
            .flatten()
    }

    /// `id` is the 2-bit field from the encoding, so FV(4 * id).
    pub fn new_fv(id: usize) -> Option<SuperhRegister> {
        (id < 4)
            .then(|| SuperhRegister::from_repr(id + FV_OFFSET))
            .flatten()
    }

    pub fn name(&self) -> String {
        self.to_string().to_lowercase()
    }

    pub fn size(&self) -> usize {
        match self {
            SuperhRegister::Dr0
            | SuperhRegister::Dr2
            | SuperhRegister::Dr4
            | SuperhRegister::Dr6
            | SuperhRegister::Dr8
            | SuperhRegister::Dr10
            | SuperhRegister::Dr12
            | SuperhRegister::Dr14
            | SuperhRegister::Xd0
            | SuperhRegister::Xd2
            | SuperhRegister::Xd4
            | SuperhRegister::Xd6
            | SuperhRegister::Xd8
            | SuperhRegister::Xd10
            | SuperhRegister::Xd12
            | SuperhRegister::Xd14 => 8,
            SuperhRegister::Fv0
            | SuperhRegister::Fv4
            | SuperhRegister::Fv8
            | SuperhRegister::Fv12 => 16,
            SuperhRegister::Xmtrx => 64,
            // Guard bits of the DSP accumulators.
            SuperhRegister::A0g | SuperhRegister::A1g => 1,
            _ => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_field_constructors() {
        assert_eq!(SuperhRegister::new_gpr(15), Some(SuperhRegister::R15));
        assert_eq!(SuperhRegister::new_gpr(16), None);
        assert_eq!(SuperhRegister::new_bank(3), Some(SuperhRegister::R3Bank));
        assert_eq!(SuperhRegister::new_fr(0), Some(SuperhRegister::Fr0));
        assert_eq!(SuperhRegister::new_dr(7), Some(SuperhRegister::Dr14));
        assert_eq!(SuperhRegister::new_xd(1), Some(SuperhRegister::Xd2));
        assert_eq!(SuperhRegister::new_fv(3), Some(SuperhRegister::Fv12));
        assert_eq!(SuperhRegister::new_fv(4), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(SuperhRegister::R3Bank.name(), "r3_bank");
        assert_eq!(SuperhRegister::Fpul.name(), "fpul");
        assert_eq!("gbr".parse::<SuperhRegister>(), Ok(SuperhRegister::Gbr));
        assert_eq!("R7_BANK".parse::<SuperhRegister>(), Ok(SuperhRegister::R7Bank));
        assert_eq!("XMTRX".parse::<SuperhRegister>(), Ok(SuperhRegister::Xmtrx));
        assert_eq!(SuperhRegister::Dr4.size(), 8);
    }

    #[test]
    fn test_names_parse_back() {
        for reg in SuperhRegister::iter() {
            assert_eq!(reg.name().parse::<SuperhRegister>(), Ok(reg));
        }
    }
}
