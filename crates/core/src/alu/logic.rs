//! Bitwise and comparison operations.
//!
//! Pure combinational logic: the carry input never participates and the
//! carry/overflow wires stay clear. Comparisons produce `1` or `0` on the
//! result bus. `Slt` compares the operands as signed two's-complement
//! values; `Equal` compares the raw bit patterns.

use crate::op::AluOp;

/// Executes a bitwise or comparison operation, returning the result bus.
///
/// `Not` ignores the second operand. Returns `0` for selectors that do not
/// belong to this unit.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Equal => (a == b) as u32,
        _ => 0,
    }
}
