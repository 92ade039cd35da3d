//! Operation selectors and their raw encodings.
//!
//! This module defines the ALU operation set. It provides:
//! 1. **Selector Type:** The closed [`AluOp`] enumeration over the 14 operations.
//! 2. **Raw Encoding:** The numeric selector table ([`codes`]) with total
//!    conversions in both directions.
//! 3. **Text Forms:** Mnemonic parsing and display for drivers and vector files.
//!
//! [`AluOp::from_code`] is the permissive decoder used by the raw dispatch
//! path (unknown codes select the no-op default there); the [`TryFrom`] and
//! [`FromStr`] implementations are the strict constructors and surface
//! [`OpDecodeError`] instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw selector values, as wired on the operation-select port.
///
/// These match the switch cases of the classic open-coded dispatch; any
/// 8-bit value outside this table selects the no-op default.
pub mod codes {
    /// Add with carry-in.
    pub const ADD: u8 = 0x00;
    /// Subtract with borrow-in.
    pub const SUB: u8 = 0x01;
    /// Bitwise AND.
    pub const AND: u8 = 0x02;
    /// Bitwise OR.
    pub const OR: u8 = 0x03;
    /// Bitwise XOR.
    pub const XOR: u8 = 0x04;
    /// Shift left logical.
    pub const SLL: u8 = 0x05;
    /// Shift right logical.
    pub const SRL: u8 = 0x06;
    /// Set less than (signed).
    pub const SLT: u8 = 0x07;
    /// Multiply (low 32 bits).
    pub const MUL: u8 = 0x08;
    /// Divide (unsigned).
    pub const DIV: u8 = 0x09;
    /// Increment.
    pub const INC: u8 = 0x0A;
    /// Decrement.
    pub const DEC: u8 = 0x0B;
    /// Bitwise complement.
    pub const NOT: u8 = 0x0C;
    /// Equality comparison.
    pub const EQUAL: u8 = 0x0D;
}

/// ALU operation selector.
///
/// The variant order follows the raw encoding table in [`codes`]; the set is
/// closed, so every dispatch over it is checked for exhaustiveness at
/// compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AluOp {
    /// Addition: `a + b + carry_in`, mod 2^32. Sets carry and overflow.
    #[default]
    Add,

    /// Subtraction: `a - b - borrow`, computed on the add primitive as
    /// `a + !b + !borrow`. Sets carry (= no borrow) and overflow.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Shift left logical; only the low 5 bits of `b` are wired.
    Sll,

    /// Shift right logical; only the low 5 bits of `b` are wired.
    Srl,

    /// Set less than, signed: 1 if `a < b` as two's-complement, else 0.
    Slt,

    /// Multiplication, low 32 bits of the product.
    Mul,

    /// Unsigned division; division by zero yields the all-ones sentinel.
    Div,

    /// Increment `a` by one, mod 2^32. `b` is ignored.
    Inc,

    /// Decrement `a` by one, mod 2^32. `b` is ignored.
    Dec,

    /// Bitwise complement of `a`. `b` is ignored.
    Not,

    /// Equality: 1 if `a == b`, else 0.
    Equal,
}

impl AluOp {
    /// Every operation, in raw encoding order.
    pub const ALL: [Self; 14] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Sll,
        Self::Srl,
        Self::Slt,
        Self::Mul,
        Self::Div,
        Self::Inc,
        Self::Dec,
        Self::Not,
        Self::Equal,
    ];

    /// Decodes a raw selector value.
    ///
    /// Returns `None` for values outside the table; the raw dispatch path
    /// maps that to the no-op default rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::AluOp;
    ///
    /// assert_eq!(AluOp::from_code(0x01), Some(AluOp::Sub));
    /// assert_eq!(AluOp::from_code(0x63), None);
    /// ```
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            codes::ADD => Some(Self::Add),
            codes::SUB => Some(Self::Sub),
            codes::AND => Some(Self::And),
            codes::OR => Some(Self::Or),
            codes::XOR => Some(Self::Xor),
            codes::SLL => Some(Self::Sll),
            codes::SRL => Some(Self::Srl),
            codes::SLT => Some(Self::Slt),
            codes::MUL => Some(Self::Mul),
            codes::DIV => Some(Self::Div),
            codes::INC => Some(Self::Inc),
            codes::DEC => Some(Self::Dec),
            codes::NOT => Some(Self::Not),
            codes::EQUAL => Some(Self::Equal),
            _ => None,
        }
    }

    /// The raw selector value of this operation.
    pub const fn code(self) -> u8 {
        match self {
            Self::Add => codes::ADD,
            Self::Sub => codes::SUB,
            Self::And => codes::AND,
            Self::Or => codes::OR,
            Self::Xor => codes::XOR,
            Self::Sll => codes::SLL,
            Self::Srl => codes::SRL,
            Self::Slt => codes::SLT,
            Self::Mul => codes::MUL,
            Self::Div => codes::DIV,
            Self::Inc => codes::INC,
            Self::Dec => codes::DEC,
            Self::Not => codes::NOT,
            Self::Equal => codes::EQUAL,
        }
    }

    /// Lowercase mnemonic, as printed by drivers and accepted in vector files.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Slt => "slt",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Inc => "inc",
            Self::Dec => "dec",
            Self::Not => "not",
            Self::Equal => "equal",
        }
    }

    /// True for the add/subtract class, the only operations that consume
    /// carry-in and drive the carry and overflow flags.
    pub const fn is_arithmetic_flagged(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

/// Errors produced by the strict selector constructors.
///
/// The compute path itself never fails: [`crate::Alu::execute_code`] maps
/// unknown codes to the no-op default. These errors exist for callers that
/// treat an out-of-table selector as a caller bug, such as the command-line
/// driver validating user input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OpDecodeError {
    /// The raw value is outside the selector table.
    #[error("operation code {0:#04x} is outside the selector table (0x00-0x0d)")]
    UnknownCode(u8),

    /// The mnemonic names no operation.
    #[error("unknown operation mnemonic `{0}`")]
    UnknownMnemonic(String),
}

impl TryFrom<u8> for AluOp {
    type Error = OpDecodeError;

    /// Strict form of [`AluOp::from_code`]: unknown codes are an error
    /// instead of the no-op default.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(OpDecodeError::UnknownCode(code))
    }
}

impl FromStr for AluOp {
    type Err = OpDecodeError;

    /// Parses a mnemonic, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::AluOp;
    ///
    /// assert_eq!("add".parse(), Ok(AluOp::Add));
    /// assert_eq!("SLL".parse(), Ok(AluOp::Sll));
    /// assert!("adc".parse::<AluOp>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            "xor" => Ok(Self::Xor),
            "sll" => Ok(Self::Sll),
            "srl" => Ok(Self::Srl),
            "slt" => Ok(Self::Slt),
            "mul" => Ok(Self::Mul),
            "div" => Ok(Self::Div),
            "inc" => Ok(Self::Inc),
            "dec" => Ok(Self::Dec),
            "not" => Ok(Self::Not),
            "equal" => Ok(Self::Equal),
            _ => Err(OpDecodeError::UnknownMnemonic(s.to_string())),
        }
    }
}
