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

    dasm89_core::lib.rs

    Disassembly library for the Intel 8089 I/O processor.

    The 8089's variable-length, bit-packed encodings are authored as
    declarative patterns in table.rs, compiled once into an opcode-keyed
    dispatch table, and matched structurally against a firmware image. The
    disassembler walks the image twice so branch-target labels are known
    before the lines referencing them are rendered.

*/

pub mod decode;
pub mod disassembler;
pub mod encoding;
pub mod instruction;
pub mod mnemonic;
pub mod operands;
pub mod registers;
pub mod table;

pub use decode::{decode, DecodeError};
pub use disassembler::{disassemble, pass1, pass2, ListingOptions, SymbolTable};
pub use encoding::{Encoding, Field, FieldValues, TableError, MAX_INSTRUCTION_LENGTH};
pub use instruction::{ihex, Instruction};
pub use mnemonic::{mnemonic_to_str, Mnemonic};
pub use operands::OperandTemplate;
pub use registers::{BaseReg, Register};
pub use table::{InstForm, InstructionSet, INSTRUCTION_SET, OPCODE_KEY_MASK};
