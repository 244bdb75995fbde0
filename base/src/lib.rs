//! The `base` crate defines the things which describe the 4-bit
//! processor's ALU at the bit level and which are useful both to the
//! table generator and to other associated tools.  The idea is that
//! a tool which inspects an already-programmed EEPROM image would
//! depend on the base crate but would not need to depend on the
//! generator itself.

pub mod address;
pub mod error;
pub mod nibble;
pub mod opcode;
pub mod prelude;

#[macro_export]
macro_rules! u4 {
    ($n:expr) => {
        $crate::prelude::Unsigned4Bit::new::<{ $n }>()
    };
}

#[test]
fn test_u4() {
    use prelude::Unsigned4Bit;
    let m: Unsigned4Bit = u4!(9);
    let n: Unsigned4Bit = Unsigned4Bit::try_from(9u8).expect("test data should be in range");
    assert_eq!(m, n);

    let p: Unsigned4Bit = u4!(0b1111);
    assert_eq!(p, Unsigned4Bit::MAX);
}
