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

    dasm89_core::decode.rs

    Instruction matching and field extraction.

    decode() reads the primary opcode key from the second instruction byte,
    walks the key's bucket of candidate forms in table order, and returns the
    first form whose fixed bits all agree with the buffer. A candidate that
    would run past the end of the buffer is treated as a structural mismatch;
    the buffer is never read out of bounds.

*/

use thiserror::Error;

use crate::{
    encoding::{Encoding, Field, FieldValues},
    instruction::Instruction,
    table::{InstForm, INSTRUCTION_SET, OPCODE_KEY_MASK},
};

#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum DecodeError {
    /// No table entry matches the bytes at this address. Recoverable: the
    /// caller emits one byte of raw data and resumes at the next address.
    #[error("no instruction matches the bytes at address {0:04x}")]
    BadInstruction(u16),
}

/// Match one instruction at `pc` against the compiled table.
pub fn decode(buf: &[u8], pc: usize) -> Result<Instruction, DecodeError> {
    let bad = DecodeError::BadInstruction(pc as u16);

    // The opcode key lives in the second byte; a buffer that ends before it
    // cannot hold any instruction.
    let key_byte = *buf.get(pc + 1).ok_or(bad)?;
    let key = key_byte & OPCODE_KEY_MASK;

    let Some(bucket) = INSTRUCTION_SET.bucket(key) else {
        log::trace!("addr {:04x}: opcode key {:02x} not in table", pc, key);
        return Err(bad);
    };

    for &idx in bucket {
        let form = INSTRUCTION_SET.form(idx);
        if let Some(fields) = match_form(form, buf, pc) {
            return Ok(Instruction {
                address: pc as u16,
                size: form.encoding.len(),
                mnemonic: form.mnemonic,
                operands: form.operands,
                fields,
            });
        }
    }

    log::trace!(
        "addr {:04x}: bytes {:02x} {:02x} matched no form in bucket {:02x}",
        pc,
        buf[pc],
        key_byte,
        key
    );
    Err(bad)
}

/// Compare one form's fixed bits against the buffer and extract its fields
/// on success.
fn match_form(form: &InstForm, buf: &[u8], pc: usize) -> Option<FieldValues> {
    let enc = &form.encoding;
    let len = enc.len();

    // A truncated slice can never match a longer form.
    if pc + len > buf.len() {
        return None;
    }
    let inst = &buf[pc..pc + len];

    for i in 0..len {
        if inst[i] & enc.mask()[i] != enc.bits()[i] & enc.mask()[i] {
            return None;
        }
    }

    let mut fields = FieldValues::default();
    for field in enc.fields() {
        fields.set(field, extract_field(enc, inst, field));
    }

    // The jump field is relative to the address of the next instruction;
    // resolve it to an absolute 16-bit address here so both passes see the
    // same value.
    if let Some(j) = fields.get(Field::J) {
        fields.set(Field::J, j.wrapping_add((pc + len) as u16));
    }

    Some(fields)
}

/// Accumulate a field's bits, most-significant tagged position first: bytes
/// from last to first, bits from high to low within each byte. 8-bit
/// immediates and displacements above 127 are rebiased so they format as
/// negative 16-bit quantities.
fn extract_field(enc: &Encoding, inst: &[u8], field: Field) -> u16 {
    let fmask = enc.field_mask(field);
    let mut value: u16 = 0;
    let mut width = 0;

    for i in (0..enc.len()).rev() {
        if fmask[i] == 0 {
            continue;
        }
        for bit in (0..8).rev() {
            if fmask[i] & (1 << bit) != 0 {
                value = (value << 1) | ((inst[i] >> bit) & 1) as u16;
                width += 1;
            }
        }
    }

    if width == 8 && value > 127 && field.sign_rebias() {
        value = value.wrapping_add(0xFF00);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mnemonic::Mnemonic, operands::OperandTemplate};

    #[test]
    fn nop_decodes_as_two_zero_bytes() {
        let inst = decode(&[0x00, 0x00], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::NOP);
        assert_eq!(inst.size, 2);
        assert!(inst.fields.is_empty());
    }

    #[test]
    fn hlt_decodes() {
        let inst = decode(&[0x20, 0x48], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::HLT);
        assert_eq!(inst.size, 2);
        assert!(inst.fields.is_empty());
    }

    #[test]
    fn short_jump_resolves_relative_target() {
        // Displacement is relative to the next instruction: 0x05 + 0 + 3.
        let inst = decode(&[0x88, 0x20, 0x05], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::JMP);
        assert_eq!(inst.size, 3);
        assert_eq!(inst.fields.get(Field::J), Some(0x0008));
    }

    #[test]
    fn jmp_wins_over_addbi_on_shared_key() {
        // 0x88 is also a valid ADDBI first byte (rrr=100); the earlier,
        // fully-fixed JMP row must take the bucket.
        let inst = decode(&[0x88, 0x20, 0x05], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::JMP);

        // A different rrr misses JMP's fixed bits and falls through to ADDBI.
        let inst = decode(&[0x28, 0x20, 0x05], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::ADDBI);
        assert_eq!(inst.fields.get(Field::R), Some(1));
        assert_eq!(inst.fields.get(Field::I), Some(0x05));
    }

    #[test]
    fn backward_jump_wraps_to_16_bits() {
        // Displacement 0xfb = -5; target = -5 + 0 + 3 = -2 = 0xfffe.
        let inst = decode(&[0x88, 0x20, 0xFB], 0).unwrap();
        assert_eq!(inst.fields.get(Field::J), Some(0xFFFE));
    }

    #[test]
    fn eight_bit_immediate_sign_rebias() {
        // ADDBI ga,0x80: raw byte over 127 maps to 0xff80.
        let inst = decode(&[0x08, 0x20, 0x80], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::ADDBI);
        assert_eq!(inst.fields.get(Field::I), Some(0xFF80));
    }

    #[test]
    fn sixteen_bit_immediate_is_unsigned() {
        // MOVI ga,0x80 as a word immediate keeps its raw value.
        let inst = decode(&[0x11, 0x30, 0x80, 0x00], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::MOVI);
        assert_eq!(inst.size, 4);
        assert_eq!(inst.fields.get(Field::I), Some(0x0080));
    }

    #[test]
    fn word_immediate_is_little_endian() {
        let inst = decode(&[0x11, 0x30, 0x34, 0x12], 0).unwrap();
        assert_eq!(inst.fields.get(Field::I), Some(0x1234));
    }

    #[test]
    fn lpdi_extracts_segment_and_offset() {
        // LPDI gb: offset 0x5678, segment 0x1234.
        let inst = decode(&[0x31, 0x08, 0x78, 0x56, 0x34, 0x12], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::LPDI);
        assert_eq!(inst.size, 6);
        assert_eq!(inst.fields.get(Field::P), Some(1));
        assert_eq!(inst.fields.get(Field::I), Some(0x5678));
        assert_eq!(inst.fields.get(Field::S), Some(0x1234));
    }

    #[test]
    fn unknown_opcode_key_is_bad_instruction() {
        // No form's second byte has its top six bits all set.
        assert_eq!(decode(&[0xFF, 0xFF], 0), Err(DecodeError::BadInstruction(0)));
    }

    #[test]
    fn key_byte_out_of_bounds_is_bad_instruction() {
        assert_eq!(decode(&[0x00], 0), Err(DecodeError::BadInstruction(0)));
        assert_eq!(decode(&[], 0), Err(DecodeError::BadInstruction(0)));
    }

    #[test]
    fn truncated_buffer_never_matches_a_longer_form() {
        // A valid 3-byte JMP start, but only two bytes present. ADDBI and
        // friends in the bucket are also longer than the buffer.
        assert!(decode(&[0x88, 0x20], 0).is_err());
    }

    #[test]
    fn dual_memory_move_uses_both_field_groups() {
        // MOV [ga],[gb+ix]: first group aa=10 mm=01, second group aa=00 mm=00.
        let inst = decode(&[0x05, 0x91, 0x01, 0xCC], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::MOV);
        assert_eq!(inst.size, 4);
        assert_eq!(
            inst.operands,
            &[OperandTemplate::Mem2, OperandTemplate::Mem]
        );
        assert_eq!(inst.fields.get(Field::A), Some(2));
        assert_eq!(inst.fields.get(Field::M), Some(1));
        assert_eq!(inst.fields.get(Field::A2), Some(0));
        assert_eq!(inst.fields.get(Field::M2), Some(0));
    }

    #[test]
    fn register_form_extracts_rrr() {
        // INC tp: rrr=100.
        let inst = decode(&[0x80, 0x38], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::INC);
        assert_eq!(inst.fields.get(Field::R), Some(4));
    }
}
