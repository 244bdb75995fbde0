//! The combinational core: the pure function from decoded inputs to
//! result and flags which the EEPROM replaces with a lookup.
//!
//! The arithmetic operations derive their carry-out and overflow
//! flags from the *raw* intermediate result, before it is truncated
//! to four bits, so the intermediates here are computed at 8-bit
//! width.  Subtraction wraps at 8 bits, which is what makes a
//! borrow out of bit 3 visible in bit 4 (for example `0 - 1 = 0xFF`
//! sets `c4`).
//!
//! The overflow heuristic is asymmetric on purpose: additive
//! operations test bit 3 of the raw sum against bit 3 of `~a`, while
//! subtractive operations test bit 3 of the *complemented* raw
//! difference against bit 3 of `a`.  This matches the device as
//! built and is reproduced bit-for-bit.

use base::prelude::{AluInputs, Opcode, Unsigned4Bit};

use super::outcome::AluOutcome;

const BIT3: u8 = 1 << 3;
const BIT4: u8 = 1 << 4;

fn logical(f: u8) -> (Unsigned4Bit, bool, bool) {
    (Unsigned4Bit::truncating(f), false, false)
}

/// Flags for increment and the additions, from the raw pre-mask
/// sum: overflow is bit 3 of the raw sum together with bit 3 of
/// `~a`.
fn additive(a: Unsigned4Bit, raw: u8) -> (Unsigned4Bit, bool, bool) {
    let c4 = raw & BIT4 != 0;
    let ov = raw & BIT3 != 0 && !a.high_bit();
    (Unsigned4Bit::truncating(raw), c4, ov)
}

/// Flags for decrement and the subtractions, from the raw wrapped
/// pre-mask difference: overflow is bit 3 of the *complemented*
/// raw difference together with bit 3 of `a`.
fn subtractive(a: Unsigned4Bit, raw: u8) -> (Unsigned4Bit, bool, bool) {
    let c4 = raw & BIT4 != 0;
    let ov = !raw & BIT3 != 0 && a.high_bit();
    (Unsigned4Bit::truncating(raw), c4, ov)
}

/// Evaluate the ALU for one input combination.
///
/// The zero and equality flags are unconditional: `z` is set exactly
/// when the returned `f` is zero and `eq` exactly when `a == b`,
/// whatever the operation.  Division by zero yields 0 with no flags;
/// this is the device's defined behavior, not an error.
pub fn evaluate(inputs: AluInputs) -> AluOutcome {
    let a = u8::from(inputs.a);
    let b = u8::from(inputs.b);
    let carry_in = u8::from(inputs.c0);
    let eq = inputs.a == inputs.b;

    let (f, c4, ov) = match inputs.op {
        Opcode::Pass => logical(b),
        Opcode::Not => logical(!a),
        Opcode::And => logical(a & b),
        Opcode::Or => logical(a | b),
        Opcode::Xor => logical(a ^ b),
        Opcode::Shl => logical(u8::from(inputs.a << inputs.b)),
        Opcode::Shr => logical(u8::from(inputs.a >> inputs.b)),
        Opcode::Inc => additive(inputs.a, a + 1),
        Opcode::Dec => subtractive(inputs.a, a.wrapping_sub(1)),
        Opcode::Add => additive(inputs.a, a + b),
        Opcode::Adc => additive(inputs.a, a + b + carry_in),
        Opcode::Sub => subtractive(inputs.a, a.wrapping_sub(b)),
        Opcode::Sbc => subtractive(inputs.a, a.wrapping_sub(b).wrapping_sub(carry_in)),
        Opcode::MulLo => logical(a * b),
        Opcode::MulHi => logical((a * b) >> 4),
        Opcode::Div => logical(if b == 0 { 0 } else { a / b }),
    };

    AluOutcome {
        f,
        c4,
        z: f == Unsigned4Bit::ZERO,
        ov,
        eq,
    }
}
