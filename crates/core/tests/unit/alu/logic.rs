//! ALU Logic & Comparison Operation Tests
//!
//! Deterministic edge-case tests for bitwise logic (AND, OR, XOR, NOT) and
//! comparisons (SLT, EQUAL). Each operation group covers:
//!   - Identity / annihilation laws
//!   - Alternating and single-bit patterns
//!   - Sign boundaries for the signed comparison
//!
//! Note: these operations never read carry-in and never drive carry or
//! overflow. Comparisons put 1 or 0 on the result bus, so the zero flag
//! reports on the bus value, not on whether the comparison held.

use alusim_core::{Alu, AluOp};

// ─── Constants ───────────────────────────────────────────────────────────────

const ZERO: u32 = 0;
const ONE: u32 = 1;

const I32_MAX: u32 = i32::MAX as u32; // 0x7FFF_FFFF
const I32_MIN: u32 = i32::MIN as u32; // 0x8000_0000
const U32_MAX: u32 = u32::MAX;

const ALTERNATING_A: u32 = 0xAAAA_AAAA;
const ALTERNATING_5: u32 = 0x5555_5555;

// ─── Helper ──────────────────────────────────────────────────────────────────

/// Execute and keep only the result bus; logic operations carry no flags
/// beyond the derived zero.
fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b, false).result
}

// ═════════════════════════════════════════════════════════════════════════════
//  AND
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn and_identity_with_all_ones() {
    assert_eq!(alu(AluOp::And, 0xDEAD_BEEF, U32_MAX), 0xDEAD_BEEF);
}

#[test]
fn and_annihilates_with_zero() {
    let out = Alu::execute(AluOp::And, 0xDEAD_BEEF, ZERO, false);
    assert_eq!(out.result, 0);
    assert!(out.flags.zero);
}

#[test]
fn and_masks_bytes() {
    assert_eq!(alu(AluOp::And, 0xFF00_FF00, 0x0F0F_0F0F), 0x0F00_0F00);
}

#[test]
fn and_disjoint_patterns() {
    assert_eq!(alu(AluOp::And, ALTERNATING_A, ALTERNATING_5), 0);
}

#[test]
fn and_idempotent() {
    assert_eq!(alu(AluOp::And, 0xCAFE_F00D, 0xCAFE_F00D), 0xCAFE_F00D);
}

// ═════════════════════════════════════════════════════════════════════════════
//  OR
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn or_identity_with_zero() {
    assert_eq!(alu(AluOp::Or, 0xDEAD_BEEF, ZERO), 0xDEAD_BEEF);
}

#[test]
fn or_saturates_with_all_ones() {
    assert_eq!(alu(AluOp::Or, 0xDEAD_BEEF, U32_MAX), U32_MAX);
}

#[test]
fn or_merges_halves() {
    assert_eq!(alu(AluOp::Or, 0xF0F0_0000, 0x0000_F0F0), 0xF0F0_F0F0);
}

#[test]
fn or_alternating_covers_word() {
    assert_eq!(alu(AluOp::Or, ALTERNATING_A, ALTERNATING_5), U32_MAX);
}

// ═════════════════════════════════════════════════════════════════════════════
//  XOR
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn xor_self_cancels() {
    let out = Alu::execute(AluOp::Xor, 0xDEAD_BEEF, 0xDEAD_BEEF, false);
    assert_eq!(out.result, 0);
    assert!(out.flags.zero);
}

#[test]
fn xor_identity_with_zero() {
    assert_eq!(alu(AluOp::Xor, 0xDEAD_BEEF, ZERO), 0xDEAD_BEEF);
}

#[test]
fn xor_alternating_fills() {
    assert_eq!(alu(AluOp::Xor, ALTERNATING_A, ALTERNATING_5), U32_MAX);
}

#[test]
fn xor_with_all_ones_is_complement() {
    assert_eq!(alu(AluOp::Xor, 0xDEAD_BEEF, U32_MAX), !0xDEAD_BEEF_u32);
}

// ═════════════════════════════════════════════════════════════════════════════
//  NOT
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn not_inverts_zero() {
    assert_eq!(alu(AluOp::Not, ZERO, ZERO), U32_MAX);
}

#[test]
fn not_inverts_all_ones() {
    let out = Alu::execute(AluOp::Not, U32_MAX, ZERO, false);
    assert_eq!(out.result, 0);
    assert!(out.flags.zero);
}

#[test]
fn not_alternating() {
    assert_eq!(alu(AluOp::Not, ALTERNATING_A, ZERO), ALTERNATING_5);
}

#[test]
fn not_ignores_second_operand() {
    for b in [ZERO, 42, U32_MAX] {
        assert_eq!(alu(AluOp::Not, 0xDEAD_BEEF, b), !0xDEAD_BEEF_u32);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  SLT (Set Less Than, signed)
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn slt_negative_below_positive() {
    assert_eq!(alu(AluOp::Slt, -5_i32 as u32, 10), 1);
}

#[test]
fn slt_positive_not_below_negative() {
    assert_eq!(alu(AluOp::Slt, 10, -5_i32 as u32), 0);
}

#[test]
fn slt_equal_is_not_less() {
    let out = Alu::execute(AluOp::Slt, 7, 7, false);
    assert_eq!(out.result, 0);
    assert!(out.flags.zero);
}

#[test]
fn slt_min_below_max() {
    assert_eq!(alu(AluOp::Slt, I32_MIN, I32_MAX), 1);
    assert_eq!(alu(AluOp::Slt, I32_MAX, I32_MIN), 0);
}

/// The comparison is signed: 0xFFFF_FFFF is -1, not the largest value.
#[test]
fn slt_compares_signed_not_unsigned() {
    assert_eq!(alu(AluOp::Slt, U32_MAX, ZERO), 1);
    assert_eq!(alu(AluOp::Slt, ZERO, U32_MAX), 0);
}

#[test]
fn slt_adjacent_values() {
    assert_eq!(alu(AluOp::Slt, 5, 6), 1);
    assert_eq!(alu(AluOp::Slt, 6, 5), 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  EQUAL
// ═════════════════════════════════════════════════════════════════════════════

/// A successful comparison puts 1 on the bus, so the zero flag is clear.
#[test]
fn equal_same_value() {
    let out = Alu::execute(AluOp::Equal, 7, 7, false);
    assert_eq!(out.result, 1);
    assert!(!out.flags.zero);
}

/// A failed comparison puts 0 on the bus, which raises the zero flag.
#[test]
fn equal_different_values() {
    let out = Alu::execute(AluOp::Equal, 7, 9, false);
    assert_eq!(out.result, 0);
    assert!(out.flags.zero);
}

#[test]
fn equal_boundary_values() {
    assert_eq!(alu(AluOp::Equal, U32_MAX, U32_MAX), 1);
    assert_eq!(alu(AluOp::Equal, I32_MIN, I32_MIN), 1);
    assert_eq!(alu(AluOp::Equal, ZERO, ZERO), 1);
}

#[test]
fn equal_single_bit_difference() {
    assert_eq!(alu(AluOp::Equal, I32_MIN, ZERO), 0);
    assert_eq!(alu(AluOp::Equal, ONE, ZERO), 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  CROSS-CUTTING: flag isolation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn logic_unit_never_drives_carry_or_overflow() {
    let ops = [
        AluOp::And,
        AluOp::Or,
        AluOp::Xor,
        AluOp::Not,
        AluOp::Slt,
        AluOp::Equal,
    ];
    let operands: [(u32, u32); 4] = [
        (ZERO, ZERO),
        (U32_MAX, U32_MAX),
        (I32_MIN, I32_MAX),
        (0xDEAD_BEEF, 0x1234_5678),
    ];
    for op in ops {
        for (a, b) in operands {
            let out = Alu::execute(op, a, b, false);
            assert!(
                !out.flags.carry && !out.flags.overflow,
                "{op:?} with a={a:#x}, b={b:#x} drove an adder flag"
            );
        }
    }
}
