//! Flag-accurate model of a 32-bit datapath ALU.
//!
//! The crate is organised into three modules:
//!
//! 1. **[`op`]:** The operation selector: the [`AluOp`] enum, its 8-bit
//!    encoding table, and the strict decode paths for selector codes and
//!    mnemonics.
//! 2. **[`alu`]:** The execution units (arithmetic, logic, shifts) and the
//!    [`Alu`] dispatcher that routes a selector to them.
//! 3. **[`flags`]:** The result bundle: the 32-bit result bus plus the
//!    carry, overflow, and zero wires.
//!
//! # Examples
//!
//! ```
//! use alusim_core::{Alu, AluOp};
//!
//! let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1, false);
//! assert_eq!(out.result, 0);
//! assert!(out.flags.carry);
//! assert!(out.flags.zero);
//! ```

pub mod alu;
pub mod flags;
pub mod op;

pub use alu::Alu;
pub use alu::arithmetic::DIV_BY_ZERO;
pub use flags::{AluOutput, Flags};
pub use op::{AluOp, OpDecodeError};
