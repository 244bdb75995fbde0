pub use crate::address::{Address, AluInputs};
pub use crate::error::ConversionFailed;
pub use crate::nibble::Unsigned4Bit;
pub use crate::opcode::Opcode;
pub use crate::u4;
