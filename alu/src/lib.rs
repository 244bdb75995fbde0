//! ALU truth-table computation for the 4-bit processor project.
//!
//! The processor's arithmetic logic unit is not built from gates;
//! it is an EEPROM whose address lines carry the ALU inputs and
//! whose data lines carry the result and flags.  This crate computes
//! the contents of that EEPROM: [`evaluate`] is the combinational
//! function for a single input combination, and [`build_lut`] folds
//! it over the whole 8192-entry address space.
//!
//! Writing the table to a file, and the human-readable trace of it,
//! are the `cli` crate's business; nothing in here performs I/O.

mod core;
mod outcome;
mod table;

pub use crate::core::evaluate;
pub use crate::outcome::{AluOutcome, FLAG_C4, FLAG_EQ, FLAG_OV, FLAG_Z};
pub use crate::table::{build_lut, Lut};
