//! The ALU's sixteen operations.
//!
//! The opcode field occupies the top four bits of the EEPROM address
//! (see the [`address`](crate::address) module), so every 4-bit value
//! selects a defined operation and decoding is total.  Six of the
//! operations (the increments, decrements, additions and
//! subtractions) are arithmetic in the sense that they drive the
//! carry-out and overflow flags; the rest always leave those flags
//! clear.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use super::nibble::Unsigned4Bit;

/// One of the sixteen ALU behaviors.  The discriminants are the
/// opcode field values as wired on the address bus.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize)]
pub enum Opcode {
    /// `f <= b`; passes operand `b` through unchanged.
    Pass = 0b0000,
    /// `f <= ~a`.
    Not = 0b0001,
    /// `f <= a & b`.
    And = 0b0010,
    /// `f <= a | b`.
    Or = 0b0011,
    /// `f <= a ^ b`.
    Xor = 0b0100,
    /// `f <= a << b`; amounts of 4 or more yield 0.
    Shl = 0b0101,
    /// `f <= a >> b`; amounts of 4 or more yield 0.
    Shr = 0b0110,
    /// `f <= a + 1`, setting carry-out and overflow.
    Inc = 0b0111,
    /// `f <= a - 1`, setting carry-out and overflow.
    Dec = 0b1000,
    /// `f <= a + b`, setting carry-out and overflow.
    Add = 0b1001,
    /// `f <= a + b + c0`, setting carry-out and overflow.
    Adc = 0b1010,
    /// `f <= a - b`, setting carry-out and overflow.
    Sub = 0b1011,
    /// `f <= a - b - c0`, setting carry-out and overflow.
    Sbc = 0b1100,
    /// `f <= (a * b) & 0xF`; the low nibble of the 8-bit product.
    MulLo = 0b1101,
    /// `f <= (a * b) >> 4`; the high nibble of the 8-bit product.
    MulHi = 0b1110,
    /// `f <= a / b`, or 0 when `b` is 0.
    Div = 0b1111,
}

impl Opcode {
    /// Whether this operation drives the carry-out and overflow
    /// flags.  Logic, shift, multiply and divide operations never
    /// touch them.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Opcode::Inc | Opcode::Dec | Opcode::Add | Opcode::Adc | Opcode::Sub | Opcode::Sbc
        )
    }

    #[must_use]
    pub const fn all_opcodes() -> [Opcode; 16] {
        [
            Opcode::Pass,
            Opcode::Not,
            Opcode::And,
            Opcode::Or,
            Opcode::Xor,
            Opcode::Shl,
            Opcode::Shr,
            Opcode::Inc,
            Opcode::Dec,
            Opcode::Add,
            Opcode::Adc,
            Opcode::Sub,
            Opcode::Sbc,
            Opcode::MulLo,
            Opcode::MulHi,
            Opcode::Div,
        ]
    }
}

/// Every nibble is a valid opcode, so this conversion is total.
impl From<Unsigned4Bit> for Opcode {
    fn from(n: Unsigned4Bit) -> Opcode {
        match u8::from(n) {
            0b0000 => Opcode::Pass,
            0b0001 => Opcode::Not,
            0b0010 => Opcode::And,
            0b0011 => Opcode::Or,
            0b0100 => Opcode::Xor,
            0b0101 => Opcode::Shl,
            0b0110 => Opcode::Shr,
            0b0111 => Opcode::Inc,
            0b1000 => Opcode::Dec,
            0b1001 => Opcode::Add,
            0b1010 => Opcode::Adc,
            0b1011 => Opcode::Sub,
            0b1100 => Opcode::Sbc,
            0b1101 => Opcode::MulLo,
            0b1110 => Opcode::MulHi,
            0b1111 => Opcode::Div,
            _ => unreachable!(),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op as u8
    }
}

impl From<Opcode> for Unsigned4Bit {
    fn from(op: Opcode) -> Unsigned4Bit {
        Unsigned4Bit::truncating(op as u8)
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Opcode::Pass => "PASS",
            Opcode::Not => "NOT",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Add => "ADD",
            Opcode::Adc => "ADC",
            Opcode::Sub => "SUB",
            Opcode::Sbc => "SBC",
            Opcode::MulLo => "MULLO",
            Opcode::MulHi => "MULHI",
            Opcode::Div => "DIV",
        })
    }
}
