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

    dasm89_core::disassembler.rs

    The two-pass disassembly driver.

    Branch targets are scattered arbitrarily forward and backward through a
    firmware image, so label names cannot be known on a single forward walk.
    Matching is cheap and table-driven, so instead of deferred patching the
    buffer is simply walked twice: pass 1 harvests every branch target into
    the symbol table, pass 2 renders the listing with labels resolved.

    Bytes that match no table entry are emitted as one-byte db directives and
    the walk resumes at the next address; embedded data or a misaligned
    stretch never aborts the run.

*/

use std::io;
use std::io::Write;

use fxhash::FxHashMap;
use log::trace;

use crate::{
    decode::decode,
    encoding::Field,
    instruction::ihex,
};

/// Absolute address to synthesized label name.
pub type SymbolTable = FxHashMap<u16, String>;

/// Raw byte columns shown in listing mode; no instruction is longer.
pub const LISTING_BYTE_COLUMNS: usize = 6;

#[derive(Copy, Clone, Debug, Default)]
pub struct ListingOptions {
    /// Prefix each line with its address and raw instruction bytes.
    pub show_object: bool,
}

fn label_for(addr: u16) -> String {
    format!("x{:04x}", addr)
}

/// Pass 1: walk the buffer collecting every branch target. The last two
/// bytes can never start an instruction; the matcher needs its two-byte
/// lookahead.
pub fn pass1(buf: &[u8]) -> SymbolTable {
    let mut symtab = SymbolTable::default();
    let mut pc = 0;

    while pc + 2 < buf.len() {
        let size = match decode(buf, pc) {
            Ok(inst) => {
                if let Some(target) = inst.fields.get(Field::J) {
                    symtab.insert(target, label_for(target));
                }
                inst.size
            }
            Err(_) => 1,
        };
        pc += size;
    }

    trace!("pass 1 collected {} branch targets", symtab.len());
    symtab
}

/// Pass 2: the same walk again, rendering one line per decoded unit.
pub fn pass2(buf: &[u8], symtab: &SymbolTable, options: &ListingOptions, out: &mut impl Write) -> io::Result<()> {
    let mut pc = 0;

    while pc + 2 < buf.len() {
        let (size, text) = match decode(buf, pc) {
            Ok(inst) => (inst.size, inst.text(symtab)),
            Err(_) => (1, format!("{:<6}{}", "db", ihex(buf[pc] as u16))),
        };

        let mut line = String::new();
        if options.show_object {
            line.push_str(&format!("{:04x}: ", pc));
            for i in 0..LISTING_BYTE_COLUMNS {
                if i < size {
                    line.push_str(&format!("{:02x} ", buf[pc + i]));
                }
                else {
                    line.push_str("   ");
                }
            }
        }

        let label = match symtab.get(&(pc as u16)) {
            Some(name) => format!("{}:", name),
            None => String::new(),
        };
        line.push_str(&format!("{:<8}{}", label, text));

        writeln!(out, "{}", line)?;
        pc += size;
    }
    Ok(())
}

/// Disassemble a firmware image: resolve labels, then emit the listing.
pub fn disassemble(buf: &[u8], options: &ListingOptions, out: &mut impl Write) -> io::Result<()> {
    let symtab = pass1(buf);
    pass2(buf, &symtab, options, out)
}
