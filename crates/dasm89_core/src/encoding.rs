/*
    marty_dasm89
    https://github.com/dbalsom/marty_dasm89

    Copyright 2022-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    dasm89_core::encoding.rs

    Bit-pattern compiler for the 8089 instruction table.

    Instruction encodings are authored as strings of whitespace-separated
    8-character byte groups, e.g. "rrr00aa1 100000mm". '0' and '1' are fixed
    bits; any other character tags the bit position as part of a named field.
    A '/' marks the start of the second operand group used by the
    dual-memory-operand forms, where the a/m/o field letters recur and must
    map to distinct field slots.

    Compilation produces the fixed-bit and mask byte arrays used for
    structural matching, plus a per-field, per-byte bitmask table used for
    field extraction. All arrays are sized to MAX_INSTRUCTION_LENGTH so the
    extraction loop never needs a bounds check.

*/

use std::fmt;
use std::fmt::Display;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountDerive, EnumIter};
use thiserror::Error;

/// The longest 8089 instruction (LPDI) is 6 bytes.
pub const MAX_INSTRUCTION_LENGTH: usize = 6;

/// A named group of bit positions within an instruction encoding, carrying
/// one operand's raw value. The A2/M2/O2 variants are the memory-reference
/// fields of the second operand group in dual-memory-operand forms.
#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumCountDerive, EnumIter)]
pub enum Field {
    R,  // rrr - general register
    P,  // ppp - pointer register
    B,  // bbb - bit index 0-7
    A,  // aa  - addressing mode
    M,  // mm  - base register
    O,  // oooooooo - offset byte
    I,  // immediate, 8 or 16 bits
    J,  // branch displacement, 8 or 16 bits
    S,  // LPDI segment word, or WID source width bit
    D,  // WID destination width bit
    A2, // aa of the second operand group
    M2, // mm of the second operand group
    O2, // offset byte of the second operand group
}

impl Field {
    /// Map a pattern tag character to its field slot. `second_group` is true
    /// once the '/' separator has been consumed.
    pub fn from_tag(tag: char, second_group: bool) -> Option<Field> {
        match (tag, second_group) {
            ('r', false) => Some(Field::R),
            ('p', false) => Some(Field::P),
            ('b', false) => Some(Field::B),
            ('a', false) => Some(Field::A),
            ('m', false) => Some(Field::M),
            ('o', false) => Some(Field::O),
            ('i', false) => Some(Field::I),
            ('j', false) => Some(Field::J),
            ('s', false) => Some(Field::S),
            ('d', false) => Some(Field::D),
            ('a', true) => Some(Field::A2),
            ('m', true) => Some(Field::M2),
            ('o', true) => Some(Field::O2),
            _ => None,
        }
    }

    /// Immediates and branch displacements are two's complement when exactly
    /// 8 bits wide; all other fields are unsigned.
    #[inline]
    pub fn sign_rebias(&self) -> bool {
        matches!(self, Field::I | Field::J)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::R => "r",
            Field::P => "p",
            Field::B => "b",
            Field::A => "a",
            Field::M => "m",
            Field::O => "o",
            Field::I => "i",
            Field::J => "j",
            Field::S => "s",
            Field::D => "d",
            Field::A2 => "a2",
            Field::M2 => "m2",
            Field::O2 => "o2",
        };
        f.pad(name)
    }
}

/// Extracted field values for one decoded instruction. A fixed slot per
/// field kind plus a presence bitmap; no dynamic map in the decode path.
#[derive(Copy, Clone, Default, PartialEq)]
pub struct FieldValues {
    values:  [u16; Field::COUNT],
    present: u16,
}

impl FieldValues {
    #[inline]
    pub fn set(&mut self, field: Field, value: u16) {
        self.values[field as usize] = value;
        self.present |= 1 << field as usize;
    }

    #[inline]
    pub fn get(&self, field: Field) -> Option<u16> {
        if self.present & (1 << field as usize) != 0 {
            Some(self.values[field as usize])
        }
        else {
            None
        }
    }

    /// Remove and return a field's value. The renderer consumes fields as it
    /// emits operands so that leftovers can be detected afterward.
    #[inline]
    pub fn take(&mut self, field: Field) -> Option<u16> {
        let value = self.get(field);
        self.present &= !(1 << field as usize);
        value
    }

    #[inline]
    pub fn contains(&self, field: Field) -> bool {
        self.present & (1 << field as usize) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.present == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, u16)> + '_ {
        Field::iter().filter_map(|f| self.get(f).map(|v| (f, v)))
    }
}

impl fmt::Debug for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(k, v)| (k.to_string(), v))).finish()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("encoding pattern is not a sequence of 8-bit groups: '{0}'")]
    PatternLength(String),
    #[error("encoding pattern is longer than {MAX_INSTRUCTION_LENGTH} bytes: '{0}'")]
    PatternTooLong(String),
    #[error("encoding pattern is shorter than 2 bytes: '{0}'")]
    PatternTooShort(String),
    #[error("unknown field tag '{0}' in encoding pattern '{1}'")]
    UnknownFieldTag(char, String),
}

/// One compiled instruction encoding. `bits` holds the fixed bit values,
/// `mask` is set where a bit is fixed, and `field_masks` records which bits
/// of each byte belong to each field. Every bit of every byte is covered by
/// exactly one of `mask` or a single field's mask, and `bits & !mask == 0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Encoding {
    len: usize,
    bits: [u8; MAX_INSTRUCTION_LENGTH],
    mask: [u8; MAX_INSTRUCTION_LENGTH],
    field_masks: [[u8; MAX_INSTRUCTION_LENGTH]; Field::COUNT],
    field_set: u16,
}

impl Encoding {
    /// Compile a pattern string. Definitions are authored once and compiled
    /// eagerly at table-build time; a malformed pattern is a configuration
    /// error and can never surface during decode.
    pub fn compile(pattern: &str) -> Result<Encoding, TableError> {
        let mut enc = Encoding::default();
        let stripped: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();

        let mut rest = stripped.as_str();
        let mut second_group = false;
        let mut idx = 0;

        while !rest.is_empty() {
            if let Some(r) = rest.strip_prefix('/') {
                second_group = true;
                rest = r;
                continue;
            }
            if rest.len() < 8 {
                return Err(TableError::PatternLength(pattern.to_string()));
            }
            if idx >= MAX_INSTRUCTION_LENGTH {
                return Err(TableError::PatternTooLong(pattern.to_string()));
            }
            let (byte_str, r) = rest.split_at(8);
            rest = r;

            for (pos, c) in byte_str.chars().enumerate() {
                let bit = 7 - pos;
                match c {
                    '0' => {
                        enc.mask[idx] |= 1 << bit;
                    }
                    '1' => {
                        enc.bits[idx] |= 1 << bit;
                        enc.mask[idx] |= 1 << bit;
                    }
                    tag => {
                        let field = Field::from_tag(tag, second_group)
                            .ok_or_else(|| TableError::UnknownFieldTag(tag, pattern.to_string()))?;
                        enc.field_masks[field as usize][idx] |= 1 << bit;
                        enc.field_set |= 1 << field as usize;
                    }
                }
            }
            idx += 1;
        }

        // The opcode bucket key is derived from the second byte, so every
        // instruction must encode at least two.
        if idx < 2 {
            return Err(TableError::PatternTooShort(pattern.to_string()));
        }

        enc.len = idx;
        Ok(enc)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bits(&self) -> &[u8; MAX_INSTRUCTION_LENGTH] {
        &self.bits
    }

    #[inline]
    pub fn mask(&self) -> &[u8; MAX_INSTRUCTION_LENGTH] {
        &self.mask
    }

    #[inline]
    pub fn field_mask(&self, field: Field) -> &[u8; MAX_INSTRUCTION_LENGTH] {
        &self.field_masks[field as usize]
    }

    /// Iterate the fields this encoding declares, in `Field` order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::iter().filter(|f| self.field_set & (1 << *f as usize) != 0)
    }

    #[inline]
    pub fn has_field(&self, field: Field) -> bool {
        self.field_set & (1 << field as usize) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_fixed_pattern() {
        let enc = Encoding::compile("00100000 01001000").unwrap();
        assert_eq!(enc.len(), 2);
        assert_eq!(enc.bits()[0], 0x20);
        assert_eq!(enc.bits()[1], 0x48);
        assert_eq!(enc.mask()[0], 0xFF);
        assert_eq!(enc.mask()[1], 0xFF);
        assert_eq!(enc.fields().count(), 0);
    }

    #[test]
    fn compile_jump_pattern() {
        let enc = Encoding::compile("10001000 00100000 jjjjjjjj").unwrap();
        assert_eq!(enc.len(), 3);
        assert_eq!(enc.bits()[0], 0x88);
        assert_eq!(enc.bits()[1], 0x20);
        // The displacement byte is entirely variable.
        assert_eq!(enc.mask()[2], 0x00);
        assert_eq!(enc.field_mask(Field::J)[2], 0xFF);
        // Field masks are zero-padded across the whole length.
        assert_eq!(enc.field_mask(Field::J)[0], 0x00);
        assert_eq!(enc.field_mask(Field::J)[1], 0x00);
        assert!(enc.has_field(Field::J));
    }

    #[test]
    fn compile_register_memory_pattern() {
        let enc = Encoding::compile("rrr00aa1 100000mm").unwrap();
        assert_eq!(enc.len(), 2);
        assert_eq!(enc.field_mask(Field::R)[0], 0b1110_0000);
        assert_eq!(enc.field_mask(Field::A)[0], 0b0000_0110);
        assert_eq!(enc.field_mask(Field::M)[1], 0b0000_0011);
        assert_eq!(enc.mask()[0], 0b0001_1001);
        assert_eq!(enc.bits()[0], 0b0000_0001);
        assert_eq!(enc.mask()[1], 0b1111_1100);
        assert_eq!(enc.bits()[1], 0b1000_0000);
    }

    #[test]
    fn second_group_fields_are_distinct() {
        let enc = Encoding::compile("00000aa1 100100mm/00000aa1 110011mm").unwrap();
        assert_eq!(enc.len(), 4);
        assert_eq!(enc.field_mask(Field::A)[0], 0b0000_0110);
        assert_eq!(enc.field_mask(Field::M)[1], 0b0000_0011);
        assert_eq!(enc.field_mask(Field::A2)[2], 0b0000_0110);
        assert_eq!(enc.field_mask(Field::M2)[3], 0b0000_0011);
        // First-group masks stay clear over the second group's bytes.
        assert_eq!(enc.field_mask(Field::A)[2], 0x00);
        assert_eq!(enc.field_mask(Field::M)[3], 0x00);
    }

    #[test]
    fn bad_pattern_length_is_rejected() {
        assert!(matches!(
            Encoding::compile("1000100"),
            Err(TableError::PatternLength(_))
        ));
        assert!(matches!(
            Encoding::compile("10001000 0010000"),
            Err(TableError::PatternLength(_))
        ));
    }

    #[test]
    fn short_and_long_patterns_are_rejected() {
        assert!(matches!(
            Encoding::compile("10001000"),
            Err(TableError::PatternTooShort(_))
        ));
        let seven = "00000000 ".repeat(7);
        assert!(matches!(
            Encoding::compile(&seven),
            Err(TableError::PatternTooLong(_))
        ));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            Encoding::compile("xxx00000 00000000"),
            Err(TableError::UnknownFieldTag('x', _))
        ));
        // 'r' is only a first-group letter.
        assert!(matches!(
            Encoding::compile("00000001 00000000/rrr00000 00000000"),
            Err(TableError::UnknownFieldTag('r', _))
        ));
    }

    #[test]
    fn field_values_take_and_leftovers() {
        let mut fields = FieldValues::default();
        fields.set(Field::R, 5);
        fields.set(Field::J, 0xFF80);
        assert!(fields.contains(Field::R));
        assert_eq!(fields.get(Field::J), Some(0xFF80));
        assert_eq!(fields.take(Field::R), Some(5));
        assert_eq!(fields.take(Field::R), None);
        assert!(!fields.is_empty());
        assert_eq!(fields.take(Field::J), Some(0xFF80));
        assert!(fields.is_empty());
    }
}
