//! Shift operations.
//!
//! The shift amount comes from the low five bits of the second operand, so
//! distances of 32 or more wrap around exactly like a hardware barrel
//! shifter fed a 5-bit count. Both directions shift in zeros.

use crate::op::AluOp;

/// Only the low five bits of the shift operand reach the shifter.
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation, returning the result bus.
///
/// Returns `0` for selectors that do not belong to this unit.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a.wrapping_shl(shamt),
        AluOp::Srl => a.wrapping_shr(shamt),
        _ => 0,
    }
}
