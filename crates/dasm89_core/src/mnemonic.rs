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

    dasm89_core::mnemonic.rs

    The 8089 mnemonic set, in ASM89 spelling.

*/

use std::fmt;
use std::fmt::Display;

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Mnemonic {
    JMP,
    LJMP,
    MOV,
    MOVB,
    MOVBI,
    MOVI,
    MOVP,
    LPD,
    LPDI,
    ADD,
    ADDB,
    ADDI,
    ADDBI,
    INC,
    INCB,
    DEC,
    DECB,
    AND,
    ANDB,
    ANDI,
    ANDBI,
    OR,
    ORB,
    ORI,
    ORBI,
    NOT,
    NOTB,
    SETB,
    CLR,
    CALL,
    LCALL,
    JZ,
    LJZ,
    JZB,
    LJZB,
    JNZ,
    LJNZ,
    JNZB,
    LJNZB,
    JMCE,
    LJMCE,
    JMCNE,
    LJMCNE,
    JBT,
    LJBT,
    JNBT,
    LJNBT,
    TSL,
    WID,
    XFER,
    SINTR,
    HLT,
    NOP,
}

pub fn mnemonic_to_str(mnemonic: Mnemonic) -> &'static str {
    match mnemonic {
        Mnemonic::JMP => "jmp",
        Mnemonic::LJMP => "ljmp",
        Mnemonic::MOV => "mov",
        Mnemonic::MOVB => "movb",
        Mnemonic::MOVBI => "movbi",
        Mnemonic::MOVI => "movi",
        Mnemonic::MOVP => "movp",
        Mnemonic::LPD => "lpd",
        Mnemonic::LPDI => "lpdi",
        Mnemonic::ADD => "add",
        Mnemonic::ADDB => "addb",
        Mnemonic::ADDI => "addi",
        Mnemonic::ADDBI => "addbi",
        Mnemonic::INC => "inc",
        Mnemonic::INCB => "incb",
        Mnemonic::DEC => "dec",
        Mnemonic::DECB => "decb",
        Mnemonic::AND => "and",
        Mnemonic::ANDB => "andb",
        Mnemonic::ANDI => "andi",
        Mnemonic::ANDBI => "andbi",
        Mnemonic::OR => "or",
        Mnemonic::ORB => "orb",
        Mnemonic::ORI => "ori",
        Mnemonic::ORBI => "orbi",
        Mnemonic::NOT => "not",
        Mnemonic::NOTB => "notb",
        Mnemonic::SETB => "setb",
        Mnemonic::CLR => "clr",
        Mnemonic::CALL => "call",
        Mnemonic::LCALL => "lcall",
        Mnemonic::JZ => "jz",
        Mnemonic::LJZ => "ljz",
        Mnemonic::JZB => "jzb",
        Mnemonic::LJZB => "ljzb",
        Mnemonic::JNZ => "jnz",
        Mnemonic::LJNZ => "ljnz",
        Mnemonic::JNZB => "jnzb",
        Mnemonic::LJNZB => "ljnzb",
        Mnemonic::JMCE => "jmce",
        Mnemonic::LJMCE => "ljmce",
        Mnemonic::JMCNE => "jmcne",
        Mnemonic::LJMCNE => "ljmcne",
        Mnemonic::JBT => "jbt",
        Mnemonic::LJBT => "ljbt",
        Mnemonic::JNBT => "jnbt",
        Mnemonic::LJNBT => "ljnbt",
        Mnemonic::TSL => "tsl",
        Mnemonic::WID => "wid",
        Mnemonic::XFER => "xfer",
        Mnemonic::SINTR => "sintr",
        Mnemonic::HLT => "hlt",
        Mnemonic::NOP => "nop",
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(mnemonic_to_str(*self))
    }
}
