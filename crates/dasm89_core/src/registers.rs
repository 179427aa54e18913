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

    dasm89_core::registers.rs

    Register files of the 8089 I/O processor.

*/

use std::fmt;
use std::fmt::Display;

/// The eight general registers selected by an rrr or ppp field.
///
/// GA, GB, GC and TP are 20-bit tagged pointer registers and are the only
/// legal values of a ppp field. BC, IX, CC and MC are 16-bit registers,
/// legal for rrr only.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Register {
    GA = 0,
    GB = 1,
    GC = 2,
    BC = 3,
    TP = 4,
    IX = 5,
    CC = 6,
    MC = 7,
}

impl Register {
    pub fn from_bits(bits: u16) -> Register {
        match bits & 0x07 {
            0 => Register::GA,
            1 => Register::GB,
            2 => Register::GC,
            3 => Register::BC,
            4 => Register::TP,
            5 => Register::IX,
            6 => Register::CC,
            _ => Register::MC,
        }
    }

    /// True for the tagged pointer registers, the legal subset of a ppp
    /// field.
    #[inline]
    pub fn is_pointer(&self) -> bool {
        matches!(self, Register::GA | Register::GB | Register::GC | Register::TP)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Register::GA => "ga",
            Register::GB => "gb",
            Register::GC => "gc",
            Register::BC => "bc",
            Register::TP => "tp",
            Register::IX => "ix",
            Register::CC => "cc",
            Register::MC => "mc",
        }
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The four base registers selectable by an mm field of a memory reference.
/// PP is the parameter-block pointer loaded by channel program dispatch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BaseReg {
    GA = 0,
    GB = 1,
    GC = 2,
    PP = 3,
}

impl BaseReg {
    pub fn from_bits(bits: u16) -> BaseReg {
        match bits & 0x03 {
            0 => BaseReg::GA,
            1 => BaseReg::GB,
            2 => BaseReg::GC,
            _ => BaseReg::PP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseReg::GA => "ga",
            BaseReg::GB => "gb",
            BaseReg::GC => "gc",
            BaseReg::PP => "pp",
        }
    }
}

impl Display for BaseReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
