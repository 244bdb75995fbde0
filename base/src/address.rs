//! The EEPROM address space and its decomposition into ALU inputs.
//!
//! The device's address bus is 13 bits wide and every line carries
//! one bit of ALU input, so the address space is exactly the set of
//! possible input combinations.  The layout, most significant bit
//! first, is:
//!
//! |Opcode |Carry-in|Operand b|Operand a|
//! |-------|--------|---------|---------|
//! |4 bits |1 bit   |4 bits   |4 bits   |
//! |(9-12) |(8)     |(4-7)    |(0-3)    |
//!
//! There are no unused address lines and the fields do not overlap,
//! so decoding is total and [`AluInputs::encode`] is its exact
//! inverse.

use std::fmt::{self, Debug, Display, Formatter, LowerHex, Octal, UpperHex};

use serde::Serialize;

use super::error::ConversionFailed;
use super::nibble::Unsigned4Bit;
use super::opcode::Opcode;

/// A 13-bit EEPROM address in the range [0, 0o17777].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Address {
    bits: u16,
}

impl Address {
    pub const ZERO: Address = Address { bits: 0 };
    pub const MAX: Address = Address { bits: 0x1FFF };

    /// The number of distinct addresses, and hence the size in bytes
    /// of the lookup table.
    pub const SPACE_SIZE: usize = 1 << 13;

    /// Iterate over the whole address space in ascending order.
    pub fn all() -> impl Iterator<Item = Address> {
        (0..=Address::MAX.bits).map(|bits| Address { bits })
    }

    /// Split the address into the four ALU input fields.
    pub fn decode(&self) -> AluInputs {
        AluInputs {
            a: Unsigned4Bit::truncating(self.bits as u8),
            b: Unsigned4Bit::truncating((self.bits >> 4) as u8),
            c0: (self.bits >> 8) & 1 != 0,
            op: Opcode::from(Unsigned4Bit::truncating((self.bits >> 9) as u8)),
        }
    }
}

impl From<Address> for u16 {
    fn from(addr: Address) -> u16 {
        addr.bits
    }
}

impl From<Address> for usize {
    fn from(addr: Address) -> usize {
        usize::from(addr.bits)
    }
}

impl TryFrom<u16> for Address {
    type Error = ConversionFailed;
    fn try_from(n: u16) -> Result<Address, ConversionFailed> {
        if n <= Address::MAX.bits {
            Ok(Address { bits: n })
        } else {
            Err(ConversionFailed::TooLarge)
        }
    }
}

impl TryFrom<usize> for Address {
    type Error = ConversionFailed;
    fn try_from(n: usize) -> Result<Address, ConversionFailed> {
        match u16::try_from(n) {
            Ok(bits) => Address::try_from(bits),
            Err(_) => Err(ConversionFailed::TooLarge),
        }
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Address({:#06x})", self.bits)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Display::fmt(&self.bits, f)
    }
}

impl Octal for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Octal::fmt(&self.bits, f)
    }
}

impl LowerHex for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        LowerHex::fmt(&self.bits, f)
    }
}

impl UpperHex for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        UpperHex::fmt(&self.bits, f)
    }
}

/// The decoded ALU input fields for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AluInputs {
    /// Operand `a`, address bits 0-3.
    pub a: Unsigned4Bit,
    /// Operand `b`, address bits 4-7.
    pub b: Unsigned4Bit,
    /// Carry-in, address bit 8.
    pub c0: bool,
    /// Operation selector, address bits 9-12.
    pub op: Opcode,
}

impl AluInputs {
    /// Reassemble the address these fields were decoded from.  This
    /// is the exact inverse of [`Address::decode`].
    pub fn encode(&self) -> Address {
        let bits = u16::from(self.a)
            | (u16::from(self.b) << 4)
            | (u16::from(u8::from(self.c0)) << 8)
            | (u16::from(u8::from(self.op)) << 9);
        Address { bits }
    }
}
