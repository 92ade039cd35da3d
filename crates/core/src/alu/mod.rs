//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational ALU core: operation dispatch
//! plus the per-operation bit-exact semantics, including carry and overflow
//! derivation for the add/subtract class. It is a pure function of its
//! inputs; no state survives a call.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not, Slt, Equal
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract, multiply, divide, ±1).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, not, slt, equal).
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use tracing::trace;

use crate::flags::AluOutput;
use crate::op::AluOp;

/// Arithmetic Logic Unit for 32-bit integer operations.
///
/// Models the single dispatch-and-compute step of a datapath ALU: two
/// operand ports, an operation selector, a carry-in wire, and a
/// result-plus-flags output bundle.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes one ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation. The
    /// match is exhaustive over [`AluOp`], so a new operation cannot be
    /// added without this site being updated.
    ///
    /// # Arguments
    ///
    /// * `op`       - The operation to perform
    /// * `a`        - First operand (32-bit value)
    /// * `b`        - Second operand (32-bit value, also used as shift amount)
    /// * `carry_in` - Carry (ADD) or borrow (SUB) input; ignored by all
    ///   other operations
    ///
    /// # Returns
    ///
    /// The [`AluOutput`] bundle: the 32-bit result, carry-out, overflow,
    /// and the zero flag. Carry and overflow are clear for every operation
    /// outside the add/subtract class; zero is always `result == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::{Alu, AluOp};
    ///
    /// // Plain addition
    /// let out = Alu::execute(AluOp::Add, 15, 5, false);
    /// assert_eq!(out.result, 20);
    /// assert!(!out.flags.carry && !out.flags.overflow && !out.flags.zero);
    ///
    /// // Unsigned wraparound raises carry; the zero result raises zero
    /// let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1, false);
    /// assert_eq!(out.result, 0);
    /// assert!(out.flags.carry && out.flags.zero);
    ///
    /// // Subtraction with no borrow-in; carry-out set means "no borrow"
    /// let out = Alu::execute(AluOp::Sub, 15, 5, false);
    /// assert_eq!(out.result, 10);
    /// assert!(out.flags.carry);
    ///
    /// // Signed comparison
    /// let out = Alu::execute(AluOp::Slt, (-5_i32) as u32, 10, false);
    /// assert_eq!(out.result, 1);
    ///
    /// // Division by zero yields the sentinel, never a fault
    /// let out = Alu::execute(AluOp::Div, 10, 0, false);
    /// assert_eq!(out.result, alusim_core::DIV_BY_ZERO);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32, carry_in: bool) -> AluOutput {
        let out = match op {
            // Arithmetic: the only class that reads carry_in or drives
            // carry/overflow (and then only for Add/Sub).
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div | AluOp::Inc | AluOp::Dec => {
                arithmetic::execute(op, a, b, carry_in)
            }

            // Logic / comparisons: and, or, xor, not, slt, equal
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not | AluOp::Slt | AluOp::Equal => {
                AluOutput::new(logic::execute(op, a, b))
            }

            // Shifts: sll, srl
            AluOp::Sll | AluOp::Srl => AluOutput::new(shifts::execute(op, a, b)),
        };

        trace!(
            %op,
            a,
            b,
            carry_in,
            result = out.result,
            carry = out.flags.carry,
            overflow = out.flags.overflow,
            zero = out.flags.zero,
            "execute"
        );

        out
    }

    /// Executes from a raw selector value.
    ///
    /// This preserves the open-coded hardware contract: a code outside the
    /// selector table is not an error, it selects the no-op default (result
    /// 0, carry and overflow clear, zero set). Callers that want strict
    /// validation instead should go through `AluOp::try_from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::Alu;
    ///
    /// assert_eq!(Alu::execute_code(0x00, 15, 5, false).result, 20);
    ///
    /// let out = Alu::execute_code(0x63, 15, 5, false);
    /// assert_eq!(out.result, 0);
    /// assert!(out.flags.zero && !out.flags.carry && !out.flags.overflow);
    /// ```
    pub fn execute_code(code: u8, a: u32, b: u32, carry_in: bool) -> AluOutput {
        match AluOp::from_code(code) {
            Some(op) => Self::execute(op, a, b, carry_in),
            None => {
                trace!(code, "unrecognized selector, forcing the no-op output");
                AluOutput::default()
            }
        }
    }
}
