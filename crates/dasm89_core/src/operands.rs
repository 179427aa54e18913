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

    dasm89_core::operands.rs

    Operand kind templates. Each instruction form pairs one encoding with an
    ordered tuple of these; operand order follows the ASM89 convention of
    destination before source.

*/

/// The operand kinds an instruction form can declare. `Mem2`/`MemOffset2`
/// are the second-operand-group variants used by the dual-memory-operand
/// forms, drawing from the A2/M2/O2 field slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OperandTemplate {
    /// General register, rrr field.
    Register,
    /// Pointer register, ppp field. Legal values are GA, GB, GC and TP.
    PointerRegister,
    /// Branch target, j field, resolved to an absolute address at decode.
    BranchTarget,
    /// Immediate value, i field, 8 or 16 bits per the encoding.
    Immediate,
    /// LPDI segment:offset pair from the s and i fields.
    SegmentOffset,
    /// Bit index 0-7, b field.
    BitIndex,
    /// WID source width, s bit: 8 or 16.
    SourceWidth,
    /// WID destination width, d bit: 8 or 16.
    DestWidth,
    /// Memory reference without trailing offset byte (a/m fields).
    Mem,
    /// Memory reference with trailing offset byte (m/o fields, mode fixed).
    MemOffset,
    /// Second-group memory reference without offset (a2/m2 fields).
    Mem2,
    /// Second-group memory reference with offset (m2/o2 fields, mode fixed).
    MemOffset2,
}
