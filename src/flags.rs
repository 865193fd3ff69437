use std::fmt;

/// How an instruction leaves the T bit.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TBit {
    #[default]
    Unchanged,
    Result,
    Carry,
    Borrow,
    Overflow,
    Underflow,
    /// The bit shifted or rotated out of the operand.
    ShiftOut,
    /// T is read as a branch condition but not written.
    Tested,
    Clear,
    Set,
    Other,
}

impl TBit {
    pub fn writes(&self) -> bool {
        !matches!(self, TBit::Unchanged | TBit::Tested)
    }
}

impl fmt::Display for TBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TBit::Unchanged | TBit::Tested => "-",
            TBit::Result => "Result",
            TBit::Carry => "Carry",
            TBit::Borrow => "Borrow",
            TBit::Overflow => "Overflow",
            TBit::Underflow => "Underflow",
            TBit::ShiftOut => "MSB/LSB",
            TBit::Clear => "0",
            TBit::Set => "1",
            TBit::Other => "*",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_bit_display() {
        assert_eq!(TBit::Unchanged.to_string(), "-");
        assert_eq!(TBit::Set.to_string(), "1");
        assert!(!TBit::Tested.writes());
        assert!(TBit::Carry.writes());
    }
}
