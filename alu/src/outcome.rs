//! The ALU's outputs for one input combination, and their packed
//! representation as a single EEPROM data byte.
//!
//! The device's 8-bit data bus carries the result nibble on its low
//! four lines and the four status flags on its high four lines:
//!
//! |Equal|Overflow|Zero |Carry-out|Result f|
//! |-----|--------|-----|---------|--------|
//! |1 bit|1 bit   |1 bit|1 bit    |4 bits  |
//! |(7)  |(6)     |(5)  |(4)      |(0-3)   |

use serde::Serialize;

use base::prelude::Unsigned4Bit;

/// Data-bus bit carrying the carry-out flag.
pub const FLAG_C4: u8 = 1 << 4;
/// Data-bus bit carrying the zero flag.
pub const FLAG_Z: u8 = 1 << 5;
/// Data-bus bit carrying the overflow flag.
pub const FLAG_OV: u8 = 1 << 6;
/// Data-bus bit carrying the equality flag.
pub const FLAG_EQ: u8 = 1 << 7;

/// The result and flags the ALU produces for one input combination.
///
/// Two of the flags are unconditional: `z` is set exactly when `f`
/// is zero, and `eq` is set exactly when the operands were equal,
/// whatever the operation.  `c4` and `ov` are driven only by the
/// arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AluOutcome {
    /// The 4-bit result.
    pub f: Unsigned4Bit,
    /// Carry out of bit 3.
    pub c4: bool,
    /// Result is zero.
    pub z: bool,
    /// Signed overflow, per the device's heuristic.
    pub ov: bool,
    /// The operands were equal.
    pub eq: bool,
}

impl AluOutcome {
    /// Pack the outcome into the byte stored in the EEPROM.
    #[must_use]
    pub fn pack(&self) -> u8 {
        (u8::from(self.eq) << 7)
            | (u8::from(self.ov) << 6)
            | (u8::from(self.z) << 5)
            | (u8::from(self.c4) << 4)
            | u8::from(self.f)
    }

    /// Recover the outcome from a stored byte.  This is the exact
    /// inverse of [`AluOutcome::pack`] and is what a reader of the
    /// programmed image (such as the trace logger) uses.
    #[must_use]
    pub fn unpack(byte: u8) -> AluOutcome {
        AluOutcome {
            f: Unsigned4Bit::truncating(byte),
            c4: byte & FLAG_C4 != 0,
            z: byte & FLAG_Z != 0,
            ov: byte & FLAG_OV != 0,
            eq: byte & FLAG_EQ != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::u4;

    #[test]
    fn test_pack_layout() {
        let outcome = AluOutcome {
            f: u4!(0b1010),
            c4: true,
            z: false,
            ov: false,
            eq: true,
        };
        assert_eq!(outcome.pack(), 0b1001_1010);
    }

    #[test]
    fn test_pack_all_flags_clear() {
        let outcome = AluOutcome {
            f: u4!(0b0110),
            c4: false,
            z: false,
            ov: false,
            eq: false,
        };
        assert_eq!(outcome.pack(), 0b0000_0110);
    }

    #[test]
    fn test_unpack_is_inverse_of_pack() {
        // Not every byte is a *valid* outcome (z must agree with f)
        // but unpack is still a bit-exact inverse over all of them.
        for byte in 0..=u8::MAX {
            assert_eq!(AluOutcome::unpack(byte).pack(), byte);
        }
    }
}
