//! Condition flags and the result bundle.
//!
//! Flags are plain booleans, one per wire. The zero flag is a universal
//! post-condition (`result == 0`, whatever the operation), so both types
//! derive it in their constructors instead of trusting call sites to.

use serde::Serialize;

/// The three condition flags driven alongside every result.
///
/// Carry and overflow are meaningful only for the add/subtract class; every
/// other operation leaves them clear. Zero is always `result == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// Carry-out: bit 32 of the widened sum (for SUB, set iff no borrow).
    pub carry: bool,
    /// Signed two's-complement overflow of the add primitive.
    pub overflow: bool,
    /// The result is zero.
    pub zero: bool,
}

impl Flags {
    /// Flags for an operation outside the add/subtract class: carry and
    /// overflow clear, zero derived from the result.
    #[inline]
    pub const fn for_result(result: u32) -> Self {
        Self {
            carry: false,
            overflow: false,
            zero: result == 0,
        }
    }

    /// Flags for an add/subtract result; zero is still derived, never passed.
    #[inline]
    pub const fn arithmetic(result: u32, carry: bool, overflow: bool) -> Self {
        Self {
            carry,
            overflow,
            zero: result == 0,
        }
    }
}

/// One ALU invocation's complete output: the 32-bit result plus flags.
///
/// A single multi-value return in place of C-style out-parameters; the
/// whole bundle fits in registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AluOutput {
    /// The 32-bit result bus.
    pub result: u32,
    /// Condition flags for this result.
    pub flags: Flags,
}

impl AluOutput {
    /// Output with carry and overflow clear (every operation except ADD/SUB).
    #[inline]
    pub const fn new(result: u32) -> Self {
        Self {
            result,
            flags: Flags::for_result(result),
        }
    }

    /// Output of the add primitive, carrying its carry and overflow wires.
    #[inline]
    pub const fn with_flags(result: u32, carry: bool, overflow: bool) -> Self {
        Self {
            result,
            flags: Flags::arithmetic(result, carry, overflow),
        }
    }
}

impl Default for AluOutput {
    /// The no-op output: zero result, zero flag set, carry and overflow clear.
    fn default() -> Self {
        Self::new(0)
    }
}
