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

    dasm89_core::table.rs

    The 8089 instruction set and the compiled dispatch table.

    Instructions are authored as flat rows of (mnemonic, operand kinds,
    encoding pattern), one row per form, and compiled once at first use into
    an InstructionSet: forms bucketed by the primary opcode key (second
    instruction byte with the low two bits cleared), plus a mnemonic index.

    Row order is load-bearing. Forms sharing an opcode bucket are tried in
    authored order and the first structural match wins, which is how the
    overlapping encodings below are disambiguated.

*/

use std::io;
use std::io::Write;

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use log::debug;

use crate::{
    encoding::{Encoding, TableError},
    mnemonic::{mnemonic_to_str, Mnemonic},
    operands::OperandTemplate,
};

/// The primary opcode key is the second instruction byte with the mm bits
/// masked off.
pub const OPCODE_KEY_MASK: u8 = 0xFC;

/// One raw instruction-form row as authored.
struct InstDef {
    mnemonic: Mnemonic,
    operands: &'static [OperandTemplate],
    pattern:  &'static str,
}

/// One compiled instruction form.
pub struct InstForm {
    pub mnemonic: Mnemonic,
    pub operands: &'static [OperandTemplate],
    pub encoding: Encoding,
}

type Ot = OperandTemplate;

macro_rules! inst {
    ($m:ident, [$($ot:ident),*], $pattern:literal) => {
        InstDef {
            mnemonic: Mnemonic::$m,
            operands: &[$(Ot::$ot),*],
            pattern:  $pattern,
        }
    };
}

#[rustfmt::skip]
const INSTRUCTION_DEFS: &[InstDef] = &[
    // JMP is ADDBI with rrr=100 (TP); it must be registered before ADDBI so
    // the fully-fixed form wins the bucket.
    inst!(JMP,    [BranchTarget],                        "10001000 00100000 jjjjjjjj"),

    // LJMP is ADDI with rrr=100 (TP); registered before ADDI for the same reason.
    inst!(LJMP,   [BranchTarget],                        "10010001 00100000 jjjjjjjj jjjjjjjj"),

    inst!(MOV,    [Register, MemOffset],                 "rrr00011 100000mm oooooooo"),
    inst!(MOV,    [Register, Mem],                       "rrr00aa1 100000mm"),
    inst!(MOV,    [MemOffset, Register],                 "rrr00011 100001mm oooooooo"),
    inst!(MOV,    [Mem, Register],                       "rrr00aa1 100001mm"),
    inst!(MOV,    [MemOffset2, MemOffset],               "00000011 100100mm oooooooo/00000011 110011mm oooooooo"),
    inst!(MOV,    [Mem2, MemOffset],                     "00000011 100100mm oooooooo/00000aa1 110011mm"),
    inst!(MOV,    [MemOffset2, Mem],                     "00000aa1 100100mm/00000011 110011mm oooooooo"),
    inst!(MOV,    [Mem2, Mem],                           "00000aa1 100100mm/00000aa1 110011mm"),

    inst!(MOVB,   [Register, MemOffset],                 "rrr00010 100000mm oooooooo"),
    inst!(MOVB,   [Register, Mem],                       "rrr00aa0 100000mm"),
    inst!(MOVB,   [MemOffset, Register],                 "rrr00010 100001mm oooooooo"),
    inst!(MOVB,   [Mem, Register],                       "rrr00aa0 100001mm"),
    inst!(MOVB,   [MemOffset2, MemOffset],               "00000010 100100mm oooooooo/00000010 110011mm oooooooo"),
    inst!(MOVB,   [Mem2, MemOffset],                     "00000010 100100mm oooooooo/00000aa0 110011mm"),
    inst!(MOVB,   [MemOffset2, Mem],                     "00000aa0 100100mm/00000010 110011mm oooooooo"),
    inst!(MOVB,   [Mem2, Mem],                           "00000aa0 100100mm/00000aa0 110011mm"),

    inst!(MOVBI,  [Register, Immediate],                 "rrr01000 00110000 iiiiiiii"),
    inst!(MOVBI,  [MemOffset, Immediate],                "00001010 010011mm oooooooo iiiiiiii"),
    inst!(MOVBI,  [Mem, Immediate],                      "00001aa0 010011mm iiiiiiii"),

    inst!(MOVI,   [Register, Immediate],                 "rrr10001 00110000 iiiiiiii iiiiiiii"),
    inst!(MOVI,   [MemOffset, Immediate],                "00010011 010011mm oooooooo iiiiiiii iiiiiiii"),
    inst!(MOVI,   [Mem, Immediate],                      "00010aa1 010011mm iiiiiiii iiiiiiii"),

    inst!(MOVP,   [PointerRegister, MemOffset],          "ppp00011 100011mm oooooooo"),
    inst!(MOVP,   [PointerRegister, Mem],                "ppp00aa1 100011mm"),
    inst!(MOVP,   [MemOffset, PointerRegister],          "ppp00011 100110mm oooooooo"),
    inst!(MOVP,   [Mem, PointerRegister],                "ppp00aa1 100110mm"),

    inst!(LPD,    [PointerRegister, MemOffset],          "ppp00011 100010mm oooooooo"),
    inst!(LPD,    [PointerRegister, Mem],                "ppp00aa1 100010mm"),

    inst!(LPDI,   [PointerRegister, SegmentOffset],      "ppp10001 00001000 iiiiiiii iiiiiiii ssssssss ssssssss"),

    inst!(ADD,    [Register, MemOffset],                 "rrr00011 101000mm oooooooo"),
    inst!(ADD,    [Register, Mem],                       "rrr00aa1 101000mm"),
    inst!(ADD,    [MemOffset, Register],                 "rrr00011 110100mm oooooooo"),
    inst!(ADD,    [Mem, Register],                       "rrr00aa1 110100mm"),

    // The ADDB encodings printed in the 8089 assembler manual (p3-12) carry
    // the wrong W bit; these are the working ones.
    inst!(ADDB,   [Register, MemOffset],                 "rrr00010 101000mm oooooooo"),
    inst!(ADDB,   [Register, Mem],                       "rrr00aa0 101000mm"),
    inst!(ADDB,   [MemOffset, Register],                 "rrr00010 110100mm oooooooo"),
    inst!(ADDB,   [Mem, Register],                       "rrr00aa0 110100mm"),

    inst!(ADDI,   [Register, Immediate],                 "rrr10001 00100000 iiiiiiii iiiiiiii"),
    inst!(ADDI,   [MemOffset, Immediate],                "00010011 110000mm oooooooo iiiiiiii iiiiiiii"),
    inst!(ADDI,   [Mem, Immediate],                      "00010aa1 110000mm iiiiiiii iiiiiiii"),

    inst!(ADDBI,  [Register, Immediate],                 "rrr01000 00100000 iiiiiiii"),
    inst!(ADDBI,  [MemOffset, Immediate],                "00001010 110000mm oooooooo iiiiiiii"),
    inst!(ADDBI,  [Mem, Immediate],                      "00001aa0 110000mm iiiiiiii"),

    inst!(INC,    [Register],                            "rrr00000 00111000"),
    inst!(INC,    [MemOffset],                           "00000011 111010mm oooooooo"),
    inst!(INC,    [Mem],                                 "00000aa1 111010mm"),

    inst!(INCB,   [MemOffset],                           "00000010 111010mm oooooooo"),
    inst!(INCB,   [Mem],                                 "00000aa0 111010mm"),

    inst!(DEC,    [Register],                            "rrr00000 00111100"),
    inst!(DEC,    [MemOffset],                           "00000011 111011mm oooooooo"),
    inst!(DEC,    [Mem],                                 "00000aa1 111011mm"),

    inst!(DECB,   [MemOffset],                           "00000010 111011mm oooooooo"),
    inst!(DECB,   [Mem],                                 "00000aa0 111011mm"),

    inst!(AND,    [Register, MemOffset],                 "rrr00011 101010mm oooooooo"),
    inst!(AND,    [Register, Mem],                       "rrr00aa1 101010mm"),
    inst!(AND,    [MemOffset, Register],                 "rrr00011 110110mm oooooooo"),
    inst!(AND,    [Mem, Register],                       "rrr00aa1 110110mm"),

    inst!(ANDB,   [Register, MemOffset],                 "rrr00010 101010mm oooooooo"),
    inst!(ANDB,   [Register, Mem],                       "rrr00aa0 101010mm"),
    inst!(ANDB,   [MemOffset, Register],                 "rrr00010 110110mm oooooooo"),
    inst!(ANDB,   [Mem, Register],                       "rrr00aa0 110110mm"),

    inst!(ANDI,   [Register, Immediate],                 "rrr10001 00101000 iiiiiiii iiiiiiii"),
    inst!(ANDI,   [MemOffset, Immediate],                "00010011 110010mm oooooooo iiiiiiii iiiiiiii"),
    inst!(ANDI,   [Mem, Immediate],                      "00010aa1 110010mm iiiiiiii iiiiiiii"),

    inst!(ANDBI,  [Register, Immediate],                 "rrr01000 00101000 iiiiiiii"),
    inst!(ANDBI,  [MemOffset, Immediate],                "00001010 110010mm oooooooo iiiiiiii"),
    inst!(ANDBI,  [Mem, Immediate],                      "00001aa0 110010mm iiiiiiii"),

    inst!(OR,     [Register, MemOffset],                 "rrr00011 101001mm oooooooo"),
    inst!(OR,     [Register, Mem],                       "rrr00aa1 101001mm"),
    inst!(OR,     [MemOffset, Register],                 "rrr00011 110101mm oooooooo"),
    inst!(OR,     [Mem, Register],                       "rrr00aa1 110101mm"),

    inst!(ORB,    [Register, MemOffset],                 "rrr00010 101001mm oooooooo"),
    inst!(ORB,    [Register, Mem],                       "rrr00aa0 101001mm"),
    inst!(ORB,    [MemOffset, Register],                 "rrr00010 110101mm oooooooo"),
    inst!(ORB,    [Mem, Register],                       "rrr00aa0 110101mm"),

    inst!(ORI,    [Register, Immediate],                 "rrr10001 00100100 iiiiiiii iiiiiiii"),
    inst!(ORI,    [MemOffset, Immediate],                "00010011 110001mm oooooooo iiiiiiii iiiiiiii"),
    inst!(ORI,    [Mem, Immediate],                      "00010aa1 110001mm iiiiiiii iiiiiiii"),

    inst!(ORBI,   [Register, Immediate],                 "rrr01000 00100100 iiiiiiii"),
    inst!(ORBI,   [MemOffset, Immediate],                "00001010 110001mm oooooooo iiiiiiii"),
    inst!(ORBI,   [Mem, Immediate],                      "00001aa0 110001mm iiiiiiii"),

    inst!(NOT,    [Register],                            "rrr00000 00101100"),
    inst!(NOT,    [MemOffset],                           "00000011 110111mm oooooooo"),
    inst!(NOT,    [Mem],                                 "00000aa1 110111mm"),
    inst!(NOT,    [Register, MemOffset],                 "rrr00011 101011mm oooooooo"),
    inst!(NOT,    [Register, Mem],                       "rrr00aa1 101011mm"),

    inst!(NOTB,   [MemOffset],                           "00000010 110111mm oooooooo"),
    inst!(NOTB,   [Mem],                                 "00000aa0 110111mm"),
    inst!(NOTB,   [Register, MemOffset],                 "rrr00010 101011mm oooooooo"),
    inst!(NOTB,   [Register, Mem],                       "rrr00aa0 101011mm"),

    inst!(SETB,   [MemOffset, BitIndex],                 "bbb00010 111101mm oooooooo"),
    inst!(SETB,   [Mem, BitIndex],                       "bbb00aa0 111101mm"),

    inst!(CLR,    [MemOffset, BitIndex],                 "bbb00010 111110mm oooooooo"),
    inst!(CLR,    [Mem, BitIndex],                       "bbb00aa0 111110mm"),

    inst!(CALL,   [MemOffset, BranchTarget],             "10001011 100111mm oooooooo jjjjjjjj"),
    inst!(CALL,   [Mem, BranchTarget],                   "10001aa1 100111mm jjjjjjjj"),

    inst!(LCALL,  [MemOffset, BranchTarget],             "10010011 100111mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LCALL,  [Mem, BranchTarget],                   "10010aa1 100111mm jjjjjjjj jjjjjjjj"),

    inst!(JZ,     [Register, BranchTarget],              "rrr01000 01000100 jjjjjjjj"),
    inst!(JZ,     [MemOffset, BranchTarget],             "00001011 111001mm oooooooo jjjjjjjj"),
    inst!(JZ,     [Mem, BranchTarget],                   "00001aa1 111001mm jjjjjjjj"),

    inst!(LJZ,    [Register, BranchTarget],              "rrr10000 01000100 jjjjjjjj jjjjjjjj"),
    inst!(LJZ,    [MemOffset, BranchTarget],             "00010011 111001mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJZ,    [Mem, BranchTarget],                   "00010aa1 111001mm jjjjjjjj jjjjjjjj"),

    inst!(JZB,    [MemOffset, BranchTarget],             "00001010 111001mm oooooooo jjjjjjjj"),
    inst!(JZB,    [Mem, BranchTarget],                   "00001aa0 111001mm jjjjjjjj"),

    inst!(LJZB,   [MemOffset, BranchTarget],             "00010010 111001mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJZB,   [Mem, BranchTarget],                   "00010aa0 111001mm jjjjjjjj jjjjjjjj"),

    inst!(JNZ,    [Register, BranchTarget],              "rrr01000 01000000 jjjjjjjj"),
    inst!(JNZ,    [MemOffset, BranchTarget],             "00001011 111000mm oooooooo jjjjjjjj"),
    inst!(JNZ,    [Mem, BranchTarget],                   "00001aa1 111000mm jjjjjjjj"),

    inst!(LJNZ,   [Register, BranchTarget],              "rrr10000 01000000 jjjjjjjj jjjjjjjj"),
    inst!(LJNZ,   [MemOffset, BranchTarget],             "00010011 111000mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJNZ,   [Mem, BranchTarget],                   "00010aa1 111000mm jjjjjjjj jjjjjjjj"),

    inst!(JNZB,   [MemOffset, BranchTarget],             "00001010 111000mm oooooooo jjjjjjjj"),
    inst!(JNZB,   [Mem, BranchTarget],                   "00001aa0 111000mm jjjjjjjj"),

    inst!(LJNZB,  [MemOffset, BranchTarget],             "00010010 111000mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJNZB,  [Mem, BranchTarget],                   "00010aa0 111000mm jjjjjjjj jjjjjjjj"),

    inst!(JMCE,   [MemOffset, BranchTarget],             "00001010 101100mm oooooooo jjjjjjjj"),
    inst!(JMCE,   [Mem, BranchTarget],                   "00001aa0 101100mm jjjjjjjj"),

    inst!(LJMCE,  [MemOffset, BranchTarget],             "00010010 101100mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJMCE,  [Mem, BranchTarget],                   "00010aa0 101100mm jjjjjjjj jjjjjjjj"),

    inst!(JMCNE,  [MemOffset, BranchTarget],             "00001010 101101mm oooooooo jjjjjjjj"),
    inst!(JMCNE,  [Mem, BranchTarget],                   "00001aa0 101101mm jjjjjjjj"),

    inst!(LJMCNE, [MemOffset, BranchTarget],             "00010010 101101mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJMCNE, [Mem, BranchTarget],                   "00010aa0 101101mm jjjjjjjj jjjjjjjj"),

    inst!(JBT,    [MemOffset, BitIndex, BranchTarget],   "bbb01010 101111mm oooooooo jjjjjjjj"),
    inst!(JBT,    [Mem, BitIndex, BranchTarget],         "bbb01aa0 101111mm jjjjjjjj"),

    inst!(LJBT,   [MemOffset, BitIndex, BranchTarget],   "bbb10010 101111mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJBT,   [Mem, BitIndex, BranchTarget],         "bbb10aa0 101111mm jjjjjjjj jjjjjjjj"),

    inst!(JNBT,   [MemOffset, BitIndex, BranchTarget],   "bbb01010 101110mm oooooooo jjjjjjjj"),
    inst!(JNBT,   [Mem, BitIndex, BranchTarget],         "bbb01aa0 101110mm jjjjjjjj"),

    inst!(LJNBT,  [MemOffset, BitIndex, BranchTarget],   "bbb10010 101110mm oooooooo jjjjjjjj jjjjjjjj"),
    inst!(LJNBT,  [Mem, BitIndex, BranchTarget],         "bbb10aa0 101110mm jjjjjjjj jjjjjjjj"),

    inst!(TSL,    [MemOffset, Immediate, BranchTarget],  "00011010 100101mm oooooooo iiiiiiii jjjjjjjj"),
    inst!(TSL,    [Mem, Immediate, BranchTarget],        "00011aa0 100101mm iiiiiiii jjjjjjjj"),

    inst!(WID,    [SourceWidth, DestWidth],              "1sd00000 00000000"),

    inst!(XFER,   [],                                    "01100000 00000000"),

    inst!(SINTR,  [],                                    "01000000 00000000"),

    inst!(HLT,    [],                                    "00100000 01001000"),

    inst!(NOP,    [],                                    "00000000 00000000"),
];

/// The compiled instruction set: every form, bucketed by primary opcode key,
/// plus a mnemonic index for symbol-side lookups. Built once and never
/// mutated afterward, so it can be shared across threads without locking.
pub struct InstructionSet {
    forms: Vec<InstForm>,
    by_opcode: FxHashMap<u8, Vec<usize>>,
    by_mnemonic: FxHashMap<Mnemonic, Vec<usize>>,
}

impl InstructionSet {
    fn build() -> Result<InstructionSet, TableError> {
        let mut forms = Vec::with_capacity(INSTRUCTION_DEFS.len());
        let mut by_opcode: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        let mut by_mnemonic: FxHashMap<Mnemonic, Vec<usize>> = FxHashMap::default();

        for def in INSTRUCTION_DEFS {
            let encoding = Encoding::compile(def.pattern)?;
            let key = encoding.bits()[1] & OPCODE_KEY_MASK;
            let idx = forms.len();

            by_opcode.entry(key).or_default().push(idx);
            by_mnemonic.entry(def.mnemonic).or_default().push(idx);
            forms.push(InstForm {
                mnemonic: def.mnemonic,
                operands: def.operands,
                encoding,
            });
        }

        debug!(
            "compiled {} instruction forms into {} opcode buckets",
            forms.len(),
            by_opcode.len()
        );

        Ok(InstructionSet {
            forms,
            by_opcode,
            by_mnemonic,
        })
    }

    /// Candidate forms for an opcode key, in authored order.
    #[inline]
    pub fn bucket(&self, key: u8) -> Option<&[usize]> {
        self.by_opcode.get(&key).map(|v| v.as_slice())
    }

    #[inline]
    pub fn form(&self, idx: usize) -> &InstForm {
        &self.forms[idx]
    }

    /// All forms of a mnemonic, in authored order. Decode never needs this;
    /// it exists for symbol-side tooling.
    pub fn mnemonic_search(&self, mnemonic: Mnemonic) -> Option<Vec<&InstForm>> {
        self.by_mnemonic
            .get(&mnemonic)
            .map(|v| v.iter().map(|&idx| &self.forms[idx]).collect())
    }

    /// Dump the compiled dispatch table, bucket by bucket.
    pub fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        let mut keys: Vec<u8> = self.by_opcode.keys().copied().collect();
        keys.sort_unstable();
        for key in keys {
            for &idx in &self.by_opcode[&key] {
                let form = &self.forms[idx];
                let len = form.encoding.len();
                writeln!(
                    out,
                    "{:02x}: {:<6} {:?} bits {:02x?} mask {:02x?}",
                    key,
                    mnemonic_to_str(form.mnemonic),
                    form.operands,
                    &form.encoding.bits()[..len],
                    &form.encoding.mask()[..len],
                )?;
            }
        }
        Ok(())
    }
}

lazy_static! {
    /// The compiled 8089 instruction set. Compilation failures here are
    /// authoring errors and abort at first use rather than during decode.
    pub static ref INSTRUCTION_SET: InstructionSet =
        InstructionSet::build().expect("8089 instruction table failed to compile");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Field;

    #[test]
    fn table_compiles() {
        assert_eq!(INSTRUCTION_SET.forms.len(), INSTRUCTION_DEFS.len());
    }

    #[test]
    fn jmp_precedes_addbi_in_shared_bucket() {
        // Both hang off key 0x20; declaration order decides the winner.
        let bucket = INSTRUCTION_SET.bucket(0x20).unwrap();
        let jmp_pos = bucket
            .iter()
            .position(|&i| INSTRUCTION_SET.form(i).mnemonic == Mnemonic::JMP)
            .unwrap();
        let addbi_pos = bucket
            .iter()
            .position(|&i| INSTRUCTION_SET.form(i).mnemonic == Mnemonic::ADDBI)
            .unwrap();
        assert!(jmp_pos < addbi_pos);

        let ljmp_pos = bucket
            .iter()
            .position(|&i| INSTRUCTION_SET.form(i).mnemonic == Mnemonic::LJMP)
            .unwrap();
        let addi_pos = bucket
            .iter()
            .position(|&i| INSTRUCTION_SET.form(i).mnemonic == Mnemonic::ADDI)
            .unwrap();
        assert!(ljmp_pos < addi_pos);
    }

    #[test]
    fn nop_bucket_contains_fixed_forms() {
        let bucket = INSTRUCTION_SET.bucket(0x00).unwrap();
        let mnemonics: Vec<Mnemonic> = bucket.iter().map(|&i| INSTRUCTION_SET.form(i).mnemonic).collect();
        assert_eq!(
            mnemonics,
            vec![Mnemonic::WID, Mnemonic::XFER, Mnemonic::SINTR, Mnemonic::NOP]
        );
    }

    #[test]
    fn lpdi_is_the_longest_form() {
        let forms = INSTRUCTION_SET.mnemonic_search(Mnemonic::LPDI).unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].encoding.len(), 6);
        assert!(forms[0].encoding.has_field(Field::S));
        assert!(forms[0].encoding.has_field(Field::I));
        assert!(forms[0].encoding.has_field(Field::P));
    }

    #[test]
    fn mnemonic_search_misses_nothing_in_the_table() {
        assert_eq!(INSTRUCTION_SET.mnemonic_search(Mnemonic::MOV).unwrap().len(), 8);
        assert_eq!(INSTRUCTION_SET.mnemonic_search(Mnemonic::NOT).unwrap().len(), 5);
        assert_eq!(INSTRUCTION_SET.mnemonic_search(Mnemonic::NOP).unwrap().len(), 1);
    }

    #[test]
    fn dump_is_well_formed() {
        let mut out = Vec::new();
        INSTRUCTION_SET.dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().count() >= INSTRUCTION_DEFS.len());
        assert!(text.contains("20: jmp"));
    }
}
