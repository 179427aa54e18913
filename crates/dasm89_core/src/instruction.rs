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

    dasm89_core::instruction.rs

    The decoded Instruction type and operand rendering.

    Rendering consumes fields from the instruction's field table as each
    operand is emitted. A field left over afterward (or a field an operand
    needs but the encoding never declared) means the operand signature and
    the encoding disagree; that is an instruction-table bug, so it panics
    rather than producing a silently wrong listing.

*/

use crate::{
    disassembler::SymbolTable,
    encoding::{Field, FieldValues},
    mnemonic::{mnemonic_to_str, Mnemonic},
    operands::OperandTemplate,
    registers::{BaseReg, Register},
};

/// One decoded instruction: where it was, how many bytes it consumed, and
/// the raw field values its encoding carried.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub address: u16,
    pub size: usize,
    pub mnemonic: Mnemonic,
    pub operands: &'static [OperandTemplate],
    pub fields: FieldValues,
}

/// Format a value as ASM89 hexadecimal: lowercase, 'h' suffix, and a
/// leading zero whenever the first digit would be a letter.
pub fn ihex(value: u16) -> String {
    let s = format!("{:x}h", value);
    if s.as_bytes()[0].is_ascii_alphabetic() {
        format!("0{}", s)
    }
    else {
        s
    }
}

impl Instruction {
    /// Render the operand list, in order, consuming each operand's fields.
    pub fn operand_strings(&self, symtab: &SymbolTable) -> Vec<String> {
        let mut fields = self.fields;
        let mut strings = Vec::with_capacity(self.operands.len());

        for template in self.operands {
            let s = match template {
                OperandTemplate::Register => {
                    Register::from_bits(take(&mut fields, Field::R, self.mnemonic)).name().to_string()
                }
                OperandTemplate::PointerRegister => {
                    let reg = Register::from_bits(take(&mut fields, Field::P, self.mnemonic));
                    if reg.is_pointer() {
                        reg.name().to_string()
                    }
                    else {
                        // A ppp value outside the pointer subset is a
                        // malformed encoding; keep it visible in the listing
                        // instead of aborting the run.
                        format!("{}_bad", reg.name())
                    }
                }
                OperandTemplate::BranchTarget => {
                    let target = take(&mut fields, Field::J, self.mnemonic);
                    match symtab.get(&target) {
                        Some(label) => label.clone(),
                        None => ihex(target),
                    }
                }
                OperandTemplate::Immediate => ihex(take(&mut fields, Field::I, self.mnemonic)),
                OperandTemplate::SegmentOffset => {
                    let segment = take(&mut fields, Field::S, self.mnemonic);
                    let offset = take(&mut fields, Field::I, self.mnemonic);
                    format!("{}:{}", ihex(segment), ihex(offset))
                }
                OperandTemplate::BitIndex => format!("{}", take(&mut fields, Field::B, self.mnemonic)),
                OperandTemplate::SourceWidth => width_str(take(&mut fields, Field::S, self.mnemonic)),
                OperandTemplate::DestWidth => width_str(take(&mut fields, Field::D, self.mnemonic)),
                OperandTemplate::Mem => self.mem_operand(&mut fields, false, false),
                OperandTemplate::MemOffset => self.mem_operand(&mut fields, false, true),
                OperandTemplate::Mem2 => self.mem_operand(&mut fields, true, false),
                OperandTemplate::MemOffset2 => self.mem_operand(&mut fields, true, true),
            };
            strings.push(s);
        }

        if !fields.is_empty() {
            panic!(
                "leftover fields {:?} after rendering operands of {}",
                fields,
                mnemonic_to_str(self.mnemonic)
            );
        }
        strings
    }

    /// Render one memory-reference operand. Offset-bearing forms fix the
    /// addressing mode to 1 in their encoding instead of carrying an aa
    /// field.
    fn mem_operand(&self, fields: &mut FieldValues, second_group: bool, implied_offset: bool) -> String {
        let (a, m, o) = if second_group {
            (Field::A2, Field::M2, Field::O2)
        }
        else {
            (Field::A, Field::M, Field::O)
        };

        let mode = if implied_offset {
            1
        }
        else {
            take(fields, a, self.mnemonic)
        };
        let base = BaseReg::from_bits(take(fields, m, self.mnemonic));

        match mode {
            0 => format!("[{}]", base),
            1 => format!("[{}].{}", base, ihex(take(fields, o, self.mnemonic))),
            2 => format!("[{}+ix]", base),
            _ => format!("[{}+ix+]", base),
        }
    }

    /// The full instruction text: mnemonic padded to the operand column,
    /// operands comma-joined, branch targets drawn from the symbol table.
    pub fn text(&self, symtab: &SymbolTable) -> String {
        format!(
            "{:<6}{}",
            mnemonic_to_str(self.mnemonic),
            self.operand_strings(symtab).join(",")
        )
    }
}

fn width_str(bit: u16) -> String {
    match bit {
        0 => "8".to_string(),
        _ => "16".to_string(),
    }
}

fn take(fields: &mut FieldValues, field: Field, mnemonic: Mnemonic) -> u16 {
    fields.take(field).unwrap_or_else(|| {
        panic!(
            "operand of {} needs field '{}' but the encoding never declared it",
            mnemonic_to_str(mnemonic),
            field
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode::decode, disassembler::SymbolTable};

    fn no_symbols() -> SymbolTable {
        SymbolTable::default()
    }

    #[test]
    fn ihex_prepends_zero_before_letter_digits() {
        assert_eq!(ihex(0x05), "5h");
        assert_eq!(ihex(0x1C), "1ch");
        assert_eq!(ihex(0xA0), "0a0h");
        assert_eq!(ihex(0xFF80), "0ff80h");
        assert_eq!(ihex(0), "0h");
    }

    #[test]
    fn zero_operand_instruction_renders_bare() {
        let inst = decode(&[0x00, 0x00], 0).unwrap();
        assert!(inst.operand_strings(&no_symbols()).is_empty());
        assert_eq!(inst.text(&no_symbols()), "nop   ");
    }

    #[test]
    fn register_and_memory_operands() {
        // MOV gb,[gb+ix]: rrr=001 aa=10 w=1, mm=01.
        let inst = decode(&[0x25, 0x81], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::MOV);
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["gb", "[gb+ix]"]);
    }

    #[test]
    fn memory_modes_render_all_four_shapes() {
        // MOV ga,[ga]: aa=00.
        let inst = decode(&[0x01, 0x80], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["ga", "[ga]"]);

        // MOV ga,[ga].1ch: offset form.
        let inst = decode(&[0x03, 0x80, 0x1C], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["ga", "[ga].1ch"]);

        // MOV ga,[ga+ix]: aa=10.
        let inst = decode(&[0x05, 0x80], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["ga", "[ga+ix]"]);

        // MOV ga,[ga+ix+]: aa=11.
        let inst = decode(&[0x07, 0x80], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["ga", "[ga+ix+]"]);
    }

    #[test]
    fn dual_memory_operands_use_their_own_groups() {
        // MOV [pp].2h,[gc+ix+]: first group aa=11 mm=10, second group fixed
        // offset form mm=11 o=0x02.
        let inst = decode(&[0x07, 0x92, 0x03, 0xCF, 0x02], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::MOV);
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["[pp].2h", "[gc+ix+]"]);
    }

    #[test]
    fn pointer_register_out_of_subset_gets_suffix() {
        // MOVP [ga],bc: ppp=011 is not a pointer register.
        let inst = decode(&[0x61, 0x98], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::MOVP);
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["[ga]", "bc_bad"]);
    }

    #[test]
    fn pointer_register_in_subset_renders_plain() {
        // LPD tp,[ga]: ppp=100.
        let inst = decode(&[0x81, 0x88], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::LPD);
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["tp", "[ga]"]);
    }

    #[test]
    fn branch_target_prefers_symbol_table() {
        let inst = decode(&[0x88, 0x20, 0x05], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["8h"]);

        let mut symtab = SymbolTable::default();
        symtab.insert(0x0008, "x0008".to_string());
        assert_eq!(inst.operand_strings(&symtab), vec!["x0008"]);
        assert_eq!(inst.text(&symtab), "jmp   x0008");
    }

    #[test]
    fn segment_offset_pair_renders_colon_joined() {
        let inst = decode(&[0x31, 0x08, 0x78, 0x56, 0x34, 0x12], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["gb", "1234h:5678h"]);
    }

    #[test]
    fn wid_renders_width_selectors() {
        // 1sd00000: s=1, d=0.
        let inst = decode(&[0xC0, 0x00], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::WID);
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["16", "8"]);

        let inst = decode(&[0xA0, 0x00], 0).unwrap();
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["8", "16"]);
    }

    #[test]
    fn bit_index_renders_decimal() {
        // SETB [gb].3h,5: bbb=101, mm=01, o=3.
        let inst = decode(&[0xA2, 0xF5, 0x03], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::SETB);
        assert_eq!(inst.operand_strings(&no_symbols()), vec!["[gb].3h", "5"]);
    }

    #[test]
    fn tsl_renders_three_operands() {
        // TSL [ga].4h,55h,<target>.
        let inst = decode(&[0x1A, 0x94, 0x04, 0x55, 0x02], 0).unwrap();
        assert_eq!(inst.mnemonic, Mnemonic::TSL);
        assert_eq!(inst.size, 5);
        assert_eq!(
            inst.operand_strings(&no_symbols()),
            vec!["[ga].4h", "55h", "7h"]
        );
    }

    #[test]
    fn negative_immediate_renders_as_16_bit() {
        let inst = decode(&[0x08, 0x20, 0x80], 0).unwrap();
        assert_eq!(inst.text(&no_symbols()), "addbi ga,0ff80h");
    }

    #[test]
    #[should_panic(expected = "leftover fields")]
    fn leftover_fields_panic() {
        let mut inst = decode(&[0x88, 0x20, 0x05], 0).unwrap();
        // An operand signature that fails to account for the jump field.
        inst.operands = &[];
        inst.operand_strings(&no_symbols());
    }
}
