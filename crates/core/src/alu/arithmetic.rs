//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, unsigned division, and
//! increment/decrement on 32-bit operands. Addition and subtraction share a
//! single full-adder primitive that derives the carry and overflow wires;
//! no other operation drives them.
//!
//! Subtraction reuses the adder through the two's-complement identity
//! `a - b - borrow = a + !b + (1 - borrow)`: the `b` port is complemented
//! and the adder's carry input receives the complement of the borrow. The
//! carry-out is therefore set exactly when no borrow occurred, and the
//! overflow rule evaluated on the transformed operands `(a, !b)` is the
//! signed overflow of the subtraction itself.

use crate::flags::AluOutput;
use crate::op::AluOp;

/// Width of the result bus; bit [`WORD_BITS`] of the widened sum is carry-out.
const WORD_BITS: u32 = 32;

/// Mask selecting the sign bit of a 32-bit word.
const SIGN_BIT: u32 = 0x8000_0000;

/// Result of an unsigned division by zero.
///
/// Hardware has no exception path; the quotient bus is driven to all ones
/// instead. Callers that must distinguish a fault from a genuine quotient
/// of `0xFFFF_FFFF` are responsible for checking the divisor.
pub const DIV_BY_ZERO: u32 = 0xFFFF_FFFF;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op`       - The operation to perform (must be an arithmetic variant).
/// * `a`        - First operand (32-bit value).
/// * `b`        - Second operand (32-bit value).
/// * `carry_in` - Carry (Add) or borrow (Sub) input; ignored by the rest.
///
/// # Returns
///
/// The result bundle. Only Add and Sub drive carry and overflow; Mul, Div,
/// Inc, and Dec wrap mod 2^32 with those wires clear. Returns the no-op
/// output for non-arithmetic selectors.
pub fn execute(op: AluOp, a: u32, b: u32, carry_in: bool) -> AluOutput {
    match op {
        AluOp::Add => full_add(a, b, carry_in),
        // carry_in is the borrow; the adder sees its complement.
        AluOp::Sub => full_add(a, !b, !carry_in),
        AluOp::Mul => AluOutput::new(a.wrapping_mul(b)),
        AluOp::Div => {
            if b == 0 {
                AluOutput::new(DIV_BY_ZERO)
            } else {
                AluOutput::new(a / b)
            }
        }
        AluOp::Inc => AluOutput::new(a.wrapping_add(1)),
        AluOp::Dec => AluOutput::new(a.wrapping_sub(1)),
        _ => AluOutput::default(),
    }
}

/// The 32-bit full adder: widens to a 33-bit sum, takes carry-out from bit
/// 32, and flags signed overflow when both operands share a sign the result
/// does not.
fn full_add(a: u32, b: u32, carry_in: bool) -> AluOutput {
    let sum = a as u64 + b as u64 + carry_in as u64;
    let result = sum as u32;
    let carry = (sum >> WORD_BITS) != 0;
    let overflow = (a & SIGN_BIT) == (b & SIGN_BIT) && (result & SIGN_BIT) != (a & SIGN_BIT);
    AluOutput::with_flags(result, carry, overflow)
}
