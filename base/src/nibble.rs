//! A 4-bit unsigned value ("nibble").  The ALU's operands, its
//! result and its opcode field are all nibbles, so this is the
//! fundamental word size of the whole device.
//!
//! The representation is a plain binary `u8` of which only the low
//! four bits may be set; construction enforces this, so arithmetic
//! on the wider native type can always be performed by converting
//! out, computing, and converting (or masking) back in.

use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use serde::Serialize;

use super::error::ConversionFailed;

/// An unsigned value in the range [0, 15].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Unsigned4Bit {
    pub(crate) bits: u8,
}

impl Unsigned4Bit {
    pub const ZERO: Unsigned4Bit = Unsigned4Bit { bits: 0 };
    pub const ONE: Unsigned4Bit = Unsigned4Bit { bits: 1 };
    pub const MAX: Unsigned4Bit = Unsigned4Bit { bits: 0b1111 };

    /// Form a nibble from a compile-time constant.  Use via the
    /// [`u4!`](crate::u4) macro; out-of-range constants fail to
    /// compile.
    pub const fn new<const N: u8>() -> Unsigned4Bit {
        assert!(N <= 0b1111);
        Unsigned4Bit { bits: N }
    }

    /// Keep the low four bits of `n`, discarding the rest.  This is
    /// the truncation the real device performs on the output of its
    /// (wider) intermediate arithmetic.
    pub const fn truncating(n: u8) -> Unsigned4Bit {
        Unsigned4Bit { bits: n & 0b1111 }
    }

    /// True if bit 3, the sign position of a two's-complement
    /// reading of the nibble, is set.
    pub const fn high_bit(&self) -> bool {
        self.bits & 0b1000 != 0
    }
}

impl From<Unsigned4Bit> for u8 {
    fn from(n: Unsigned4Bit) -> u8 {
        n.bits
    }
}

impl From<Unsigned4Bit> for u16 {
    fn from(n: Unsigned4Bit) -> u16 {
        u16::from(n.bits)
    }
}

impl From<Unsigned4Bit> for u32 {
    fn from(n: Unsigned4Bit) -> u32 {
        u32::from(n.bits)
    }
}

impl From<Unsigned4Bit> for usize {
    fn from(n: Unsigned4Bit) -> usize {
        usize::from(n.bits)
    }
}

impl TryFrom<u8> for Unsigned4Bit {
    type Error = ConversionFailed;
    fn try_from(n: u8) -> Result<Unsigned4Bit, ConversionFailed> {
        if n <= 0b1111 {
            Ok(Unsigned4Bit { bits: n })
        } else {
            Err(ConversionFailed::TooLarge)
        }
    }
}

impl TryFrom<u16> for Unsigned4Bit {
    type Error = ConversionFailed;
    fn try_from(n: u16) -> Result<Unsigned4Bit, ConversionFailed> {
        match u8::try_from(n) {
            Ok(byte) => Unsigned4Bit::try_from(byte),
            Err(_) => Err(ConversionFailed::TooLarge),
        }
    }
}

impl TryFrom<i32> for Unsigned4Bit {
    type Error = ConversionFailed;
    fn try_from(n: i32) -> Result<Unsigned4Bit, ConversionFailed> {
        if n < 0 {
            Err(ConversionFailed::TooSmall)
        } else {
            match u8::try_from(n) {
                Ok(byte) => Unsigned4Bit::try_from(byte),
                Err(_) => Err(ConversionFailed::TooLarge),
            }
        }
    }
}

impl BitAnd for Unsigned4Bit {
    type Output = Unsigned4Bit;
    fn bitand(self, rhs: Unsigned4Bit) -> Unsigned4Bit {
        Unsigned4Bit {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for Unsigned4Bit {
    type Output = Unsigned4Bit;
    fn bitor(self, rhs: Unsigned4Bit) -> Unsigned4Bit {
        Unsigned4Bit {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitXor for Unsigned4Bit {
    type Output = Unsigned4Bit;
    fn bitxor(self, rhs: Unsigned4Bit) -> Unsigned4Bit {
        Unsigned4Bit {
            bits: self.bits ^ rhs.bits,
        }
    }
}

impl Not for Unsigned4Bit {
    type Output = Unsigned4Bit;
    fn not(self) -> Unsigned4Bit {
        Unsigned4Bit {
            bits: !self.bits & 0b1111,
        }
    }
}

/// Shifts take the shift amount as a full nibble because that is what
/// the decoded `b` operand is; amounts of 4 or more shift every bit
/// out and yield zero.
impl Shl<Unsigned4Bit> for Unsigned4Bit {
    type Output = Unsigned4Bit;
    fn shl(self, rhs: Unsigned4Bit) -> Unsigned4Bit {
        Unsigned4Bit::truncating((u16::from(self.bits) << rhs.bits) as u8)
    }
}

impl Shr<Unsigned4Bit> for Unsigned4Bit {
    type Output = Unsigned4Bit;
    fn shr(self, rhs: Unsigned4Bit) -> Unsigned4Bit {
        Unsigned4Bit::truncating((u16::from(self.bits) >> rhs.bits) as u8)
    }
}

impl Debug for Unsigned4Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Unsigned4Bit({:#06b})", self.bits)
    }
}

impl Display for Unsigned4Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Display::fmt(&self.bits, f)
    }
}

impl Octal for Unsigned4Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Octal::fmt(&self.bits, f)
    }
}

impl Binary for Unsigned4Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Binary::fmt(&self.bits, f)
    }
}

impl LowerHex for Unsigned4Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        LowerHex::fmt(&self.bits, f)
    }
}

impl UpperHex for Unsigned4Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        UpperHex::fmt(&self.bits, f)
    }
}
