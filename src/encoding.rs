//! Bit-pattern encodings.
//!
//! An encoding is written as a 16 or 32 character string, most significant
//! bit first: `0`/`1` are fixed bits, `*` is a don't-care bit and any
//! lower-case letter names an operand field, e.g. `0110nnnnmmmm0011`.
//! A field may be split across the word (`0000nnnniiii0000iiiiiiiiiiiiiiii`);
//! its value is the concatenation of its bits in order.

use anyhow::{bail, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    pub name: char,
    /// Bit positions, most significant first.
    positions: Vec<u8>,
}

impl Field {
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    fn extract(&self, word: u32) -> u32 {
        self.positions
            .iter()
            .fold(0, |value, &bit| (value << 1) | ((word >> bit) & 1))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoding {
    bits: usize,
    mask: u32,
    expected: u32,
    fields: Vec<Field>,
}

impl Encoding {
    pub fn parse(code: &str) -> Result<Encoding> {
        let bits = code.len();
        if bits != 16 && bits != 32 {
            bail!("encoding `{code}` is {bits} bits long, expected 16 or 32");
        }

        let mut mask = 0;
        let mut expected = 0;
        let mut fields: Vec<Field> = vec![];

        for (i, c) in code.chars().enumerate() {
            let bit = (bits - 1 - i) as u8;
            match c {
                '0' => mask |= 1 << bit,
                '1' => {
                    mask |= 1 << bit;
                    expected |= 1 << bit;
                }
                '*' => {}
                'a'..='z' => match fields.iter_mut().find(|field| field.name == c) {
                    Some(field) => field.positions.push(bit),
                    None => fields.push(Field {
                        name: c,
                        positions: vec![bit],
                    }),
                },
                _ => bail!("invalid character `{c}` in encoding `{code}`"),
            }
        }

        Ok(Encoding {
            bits,
            mask,
            expected,
            fields,
        })
    }

    /// Instruction length in bytes.
    pub fn size(&self) -> usize {
        self.bits / 8
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn expected(&self) -> u32 {
        self.expected
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: char) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// For 32-bit encodings `word` holds the first halfword in its upper 16 bits.
    pub fn matches(&self, word: u32) -> bool {
        (word & self.mask) == self.expected
    }

    pub fn extract(&self, word: u32) -> Fields {
        Fields(
            self.fields
                .iter()
                .map(|field| FieldValue {
                    name: field.name,
                    value: field.extract(word),
                    width: field.width(),
                })
                .collect(),
        )
    }

    /// Whether some word of the same length is matched by both encodings.
    pub fn overlaps(&self, other: &Encoding) -> bool {
        self.bits == other.bits && ((self.expected ^ other.expected) & self.mask & other.mask) == 0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldValue {
    pub name: char,
    pub value: u32,
    pub width: usize,
}

impl FieldValue {
    pub fn signed(&self) -> i32 {
        let shift = 32 - self.width as u32;
        ((self.value << shift) as i32) >> shift
    }
}

/// Field values pulled out of one instruction word.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fields(Vec<FieldValue>);

impl Fields {
    pub fn get(&self, name: char) -> Option<FieldValue> {
        self.0.iter().find(|field| field.name == name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValue> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_and_fields() {
        let enc = Encoding::parse("0110nnnnmmmm0011").unwrap();
        assert_eq!(enc.mask(), 0xf00f);
        assert_eq!(enc.expected(), 0x6003);
        assert_eq!(enc.size(), 2);
        assert!(enc.matches(0x6143));
        assert!(!enc.matches(0x6142));

        let fields = enc.extract(0x6143);
        assert_eq!(fields.get('n').map(|f| f.value), Some(1));
        assert_eq!(fields.get('m').map(|f| f.value), Some(4));
        assert_eq!(fields.get('d'), None);
    }

    #[test]
    fn test_split_field() {
        let enc = Encoding::parse("0000nnnniiii0000iiiiiiiiiiiiiiii").unwrap();
        assert_eq!(enc.size(), 4);
        assert_eq!(enc.field('i').map(Field::width), Some(20));

        let word = 0x0_3_8_0_1234;
        assert!(enc.matches(word));
        let imm = enc.extract(word).get('i').unwrap();
        assert_eq!(imm.value, 0x81234);
        assert_eq!(imm.signed(), 0x81234 - 0x10_0000);
    }

    #[test]
    fn test_dont_care() {
        let enc = Encoding::parse("111100a*r*0*01**").unwrap();
        assert!(enc.matches(0xf004));
        assert!(enc.matches(0xf0ff & !0x0028));
        assert_eq!(enc.extract(0xf204).get('a').map(|f| f.value), Some(1));
    }

    #[test]
    fn test_signed_field() {
        let enc = Encoding::parse("1110nnnniiiiiiii").unwrap();
        let imm = enc.extract(0xe1ff).get('i').unwrap();
        assert_eq!(imm.value, 0xff);
        assert_eq!(imm.signed(), -1);
    }

    #[test]
    fn test_overlaps() {
        let mov = Encoding::parse("0110nnnnmmmm0011").unwrap();
        let neg = Encoding::parse("0110nnnnmmmm1011").unwrap();
        let any = Encoding::parse("0110nnnnmmmmxxxx").unwrap();
        assert!(!mov.overlaps(&neg));
        assert!(mov.overlaps(&any));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Encoding::parse("0110").is_err());
        assert!(Encoding::parse("0110nnnnmmmm001X").is_err());
    }
}
