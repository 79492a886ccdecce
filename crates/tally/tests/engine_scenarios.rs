//! End-to-end engine scenarios driven through the public API.

#![allow(clippy::unwrap_used)]

use tally::prelude::*;

/// Feeds a compact script to a fresh engine: digits, `.`, `+-*/`, `=`,
/// `n` (negate), `<` (backspace), `C` (clear), `%rsvp` (unary functions).
fn run(script: &str) -> Engine {
    let mut engine = Engine::new();
    for c in script.chars() {
        let token = match c {
            '0'..='9' => Token::Digit(c as u8 - b'0'),
            '.' => Token::Decimal,
            '+' => Token::Op(BinaryOp::Add),
            '-' => Token::Op(BinaryOp::Subtract),
            '*' => Token::Op(BinaryOp::Multiply),
            '/' => Token::Op(BinaryOp::Divide),
            '=' => Token::Equals,
            'n' => Token::Negate,
            '<' => Token::Backspace,
            'C' => Token::Clear,
            '%' => Token::Unary(UnaryOp::Percent),
            'r' => Token::Unary(UnaryOp::Reciprocal),
            's' => Token::Unary(UnaryOp::Square),
            'v' => Token::Unary(UnaryOp::Sqrt),
            'p' => Token::Unary(UnaryOp::Pi),
            _ => continue,
        };
        engine.apply(token);
    }
    engine
}

// ===== Arithmetic sessions =====

#[test]
fn addition_session() {
    assert_eq!(run("12+34=").display(), "46");
}

#[test]
fn subtraction_below_zero() {
    assert_eq!(run("3-10=").display(), "-7");
}

#[test]
fn multiplication_with_decimals() {
    assert_eq!(run("2.5*4=").display(), "10");
}

#[test]
fn division_produces_fraction() {
    assert_eq!(run("7/2=").display(), "3.5");
}

#[test]
fn left_to_right_without_precedence() {
    assert_eq!(run("2+3*4=").display(), "20");
    assert_eq!(run("10-4/2=").display(), "3");
}

#[test]
fn long_chain_resolves_incrementally() {
    let engine = run("1+2+3+4+");
    assert_eq!(engine.display(), "10");
    assert_eq!(engine.pending_operand(), Some(10.0));
}

#[test]
fn result_seeds_next_calculation() {
    assert_eq!(run("6*7=-2=").display(), "40");
}

#[test]
fn operator_swap_before_new_number() {
    // second operator replaces the first without computing
    assert_eq!(run("8*+2=").display(), "10");
}

// ===== Number entry =====

#[test]
fn fractional_entry_and_renormalisation() {
    assert_eq!(run("0.50=").display(), "0.5");
    assert_eq!(run("5.=").display(), "5");
}

#[test]
fn repeated_decimal_ignored() {
    assert_eq!(run("1.2.3").display(), "1.23");
}

#[test]
fn typing_replaces_result_after_equals() {
    assert_eq!(run("5+3=9").display(), "9");
}

#[test]
fn backspace_edits_entry_mid_calculation() {
    assert_eq!(run("12<+3=").display(), "4");
}

#[test]
fn negate_then_operate() {
    assert_eq!(run("5n+3=").display(), "-2");
}

// ===== Unary functions =====

#[test]
fn percent_scales_display() {
    assert_eq!(run("200%").display(), "2");
}

#[test]
fn square_then_sqrt_round_trip() {
    assert_eq!(run("9sv").display(), "9");
}

#[test]
fn reciprocal_twice_restores_value() {
    assert_eq!(run("8rr").display(), "8");
}

#[test]
fn pi_as_operand() {
    let engine = run("p*2=");
    let value: f64 = engine.display().parse().unwrap();
    assert!((value - 2.0 * std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn unary_applies_to_right_operand_in_flight() {
    assert_eq!(run("10+16v=").display(), "14");
}

// ===== Error handling =====

#[test]
fn division_by_zero_enters_error_state() {
    let engine = run("1/0=");
    assert!(engine.is_error());
    assert_eq!(engine.display(), ERROR_DISPLAY);
}

#[test]
fn error_state_swallows_operators_and_equals() {
    assert_eq!(run("1/0=+5*2=").display(), "10");
    assert_eq!(run("1/0==").display(), ERROR_DISPLAY);
}

#[test]
fn fresh_number_recovers_from_error() {
    assert_eq!(run("1/0=42+1=").display(), "43");
}

#[test]
fn decimal_recovers_from_error() {
    assert_eq!(run("1/0=.5").display(), "0.5");
}

#[test]
fn clear_recovers_from_error() {
    let engine = run("1/0=C");
    assert!(!engine.is_error());
    assert_eq!(engine.display(), "0");
}

#[test]
fn sqrt_of_negative_is_error() {
    assert!(run("4nv").is_error());
}

#[test]
fn reciprocal_of_zero_is_error() {
    assert!(run("0r").is_error());
}

// ===== Tape =====

#[test]
fn tape_records_session() {
    let mut tape = Tape::new();
    let mut engine = Engine::new();

    for &(script, expr) in &[("5+3=", "5 + 3"), ("2*8=", "2 * 8")] {
        engine.apply(Token::Clear);
        for c in script.chars() {
            let token = match c {
                '0'..='9' => Token::Digit(c as u8 - b'0'),
                '+' => Token::Op(BinaryOp::Add),
                '*' => Token::Op(BinaryOp::Multiply),
                '=' => Token::Equals,
                _ => continue,
            };
            engine.apply(token);
        }
        tape.record(expr, engine.display().parse().unwrap());
    }

    assert_eq!(tape.len(), 2);
    assert_eq!(tape.last().unwrap().display(), "2 * 8 = 16");

    let json = tape.to_json().unwrap();
    let restored = Tape::from_json(&json).unwrap();
    assert_eq!(restored.last().unwrap().result, 16.0);
}

// ===== Display formatting =====

#[test]
fn binary_fractions_render_cleanly() {
    assert_eq!(run("0.1+0.2=").display(), "0.3");
}

#[test]
fn integral_results_have_no_fraction() {
    assert_eq!(run("2.5+2.5=").display(), "5");
}
