//! The table builder: enumerates the whole address space and packs
//! the core's outcome for each address into the lookup table that
//! gets burned into the EEPROM.

use std::ops::Index;

use tracing::{event, Level};

use base::prelude::Address;

use super::core::evaluate;
use super::outcome::AluOutcome;

/// The complete lookup table: one packed byte per address, in
/// address order.  Immutable once built; byte offset 0 in the
/// programmed image is address 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut {
    entries: Vec<u8>,
}

impl Lut {
    /// The table bytes in address order, ready to be written
    /// verbatim to the image file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.entries
    }

    /// The packed outcome stored for `addr`.
    pub fn get(&self, addr: Address) -> u8 {
        self.entries[usize::from(addr)]
    }

    /// The outcome stored for `addr`, unpacked.
    pub fn outcome(&self, addr: Address) -> AluOutcome {
        AluOutcome::unpack(self.get(addr))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<Address> for Lut {
    type Output = u8;
    fn index(&self, addr: Address) -> &u8 {
        &self.entries[usize::from(addr)]
    }
}

/// Build the complete lookup table.
///
/// Every address is visited exactly once, in ascending order (the
/// trace log's determinism depends on that order).  Building cannot
/// fail: decoding is total and the core is defined for every input.
pub fn build_lut() -> Lut {
    let mut entries = Vec::with_capacity(Address::SPACE_SIZE);
    for addr in Address::all() {
        entries.push(evaluate(addr.decode()).pack());
    }
    event!(
        Level::DEBUG,
        "built lookup table with {} entries",
        entries.len()
    );
    Lut { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_the_whole_address_space() {
        let lut = build_lut();
        assert_eq!(lut.len(), Address::SPACE_SIZE);
        assert_eq!(lut.len(), 8192);
        assert!(!lut.is_empty());
    }

    #[test]
    fn test_table_agrees_with_the_core_everywhere() {
        let lut = build_lut();
        for addr in Address::all() {
            assert_eq!(
                lut[addr],
                evaluate(addr.decode()).pack(),
                "table disagrees with the core at {addr:#06x}"
            );
        }
    }

    // Address 0 decodes to a=0, b=0, c0=0, PASS: the result is zero
    // and the operands are equal, so only z (bit 5) and eq (bit 7)
    // are set.
    #[test]
    fn test_first_entry() {
        let lut = build_lut();
        assert_eq!(lut.get(Address::ZERO), 0b1010_0000);
    }

    // Address 0x1FFF decodes to a=15, b=15, c0=1, DIV: 15 / 15 = 1
    // with equal operands and no other flags.
    #[test]
    fn test_last_entry() {
        let lut = build_lut();
        assert_eq!(lut.get(Address::MAX), 0b1000_0001);
    }

    // An independent oracle: recompute every entry from the raw
    // address bits and the operation table, without going through
    // the decoder, the core or the packing code.  Catches any layer
    // drifting from the documented bit layouts.
    #[test]
    fn test_table_matches_independent_oracle() {
        fn add_flags(a: u8, raw: u8) -> (u8, u8, u8) {
            (
                raw & 0x0F,
                u8::from(raw & 0x10 != 0),
                u8::from(raw & 0x08 != 0 && !a & 0x08 != 0),
            )
        }
        fn sub_flags(a: u8, raw: u8) -> (u8, u8, u8) {
            (
                raw & 0x0F,
                u8::from(raw & 0x10 != 0),
                u8::from(!raw & 0x08 != 0 && a & 0x08 != 0),
            )
        }
        fn oracle(addr: u16) -> u8 {
            let a = (addr & 0x000F) as u8;
            let b = ((addr & 0x00F0) >> 4) as u8;
            let c0 = ((addr & 0x0100) >> 8) as u8;
            let op = ((addr & 0x1E00) >> 9) as u8;

            let (f, c4, ov) = match op {
                0b0000 => (b, 0, 0),
                0b0001 => (!a & 0x0F, 0, 0),
                0b0010 => (a & b, 0, 0),
                0b0011 => (a | b, 0, 0),
                0b0100 => ((a ^ b) & 0x0F, 0, 0),
                0b0101 => ((((u16::from(a)) << b) & 0x0F) as u8, 0, 0),
                0b0110 => ((((u16::from(a)) >> b) & 0x0F) as u8, 0, 0),
                0b0111 => add_flags(a, a + 1),
                0b1000 => sub_flags(a, a.wrapping_sub(1)),
                0b1001 => add_flags(a, a + b),
                0b1010 => add_flags(a, a + b + c0),
                0b1011 => sub_flags(a, a.wrapping_sub(b)),
                0b1100 => sub_flags(a, a.wrapping_sub(b).wrapping_sub(c0)),
                0b1101 => ((a * b) & 0x0F, 0, 0),
                0b1110 => (((a * b) & 0xF0) >> 4, 0, 0),
                0b1111 => (if b != 0 { (a / b) & 0x0F } else { 0 }, 0, 0),
                _ => unreachable!(),
            };
            let z = u8::from(f == 0);
            let eq = u8::from(a == b);
            (eq << 7) | (ov << 6) | (z << 5) | (c4 << 4) | f
        }

        let lut = build_lut();
        for addr in Address::all() {
            assert_eq!(
                lut[addr],
                oracle(u16::from(addr)),
                "table disagrees with the oracle at {addr:#06x}"
            );
        }
        assert_eq!(oracle(0), 0b1010_0000);
    }

    #[test]
    fn test_unpacked_outcome_matches_stored_byte() {
        let lut = build_lut();
        for addr in Address::all().step_by(0o31) {
            assert_eq!(lut.outcome(addr).pack(), lut.get(addr));
        }
    }
}
