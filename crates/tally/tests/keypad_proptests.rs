//! Property-based tests for the keypad grid and keyboard mapping.

#![cfg(feature = "tui")]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use ratatui::layout::Rect;

use tally::prelude::*;
use tally::tui::{InputHandler, KeyAction, Keypad};

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn binary_op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Subtract),
        Just(BinaryOp::Multiply),
        Just(BinaryOp::Divide),
    ]
}

fn unary_op_strategy() -> impl Strategy<Value = UnaryOp> {
    prop_oneof![
        Just(UnaryOp::Percent),
        Just(UnaryOp::Reciprocal),
        Just(UnaryOp::Square),
        Just(UnaryOp::Sqrt),
        Just(UnaryOp::Pi),
    ]
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        digit_strategy().prop_map(Token::Digit),
        Just(Token::Decimal),
        binary_op_strategy().prop_map(Token::Op),
        unary_op_strategy().prop_map(Token::Unary),
        Just(Token::Equals),
        Just(Token::Negate),
        Just(Token::Backspace),
        Just(Token::Clear),
    ]
}

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..6usize, 0usize..4usize)
}

// ===== Grid properties =====

proptest! {
    /// Every valid grid position holds a button.
    #[test]
    fn prop_button_at_valid_position_exists((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// Positions outside the grid hold nothing.
    #[test]
    fn prop_button_outside_grid_missing(row in 6usize..100usize, col in 4usize..100usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, 0).is_none());
        prop_assert!(keypad.get_button_at(0, col).is_none());
    }

    /// Every engine token has exactly one button.
    #[test]
    fn prop_every_token_has_one_button(token in token_strategy()) {
        let keypad = Keypad::new();
        let count = keypad.buttons().filter(|b| b.token == token).count();
        prop_assert_eq!(count, 1);
    }

    /// No two buttons share a label.
    #[test]
    fn prop_labels_unique(_seed in any::<u32>()) {
        let keypad = Keypad::new();
        let mut labels = std::collections::HashSet::new();
        for btn in keypad.buttons() {
            prop_assert!(labels.insert(btn.label), "duplicate label {}", btn.label);
        }
    }
}

// ===== Highlight properties =====

proptest! {
    /// Highlighting any token presses exactly one button.
    #[test]
    fn prop_highlight_presses_exactly_one(token in token_strategy()) {
        let mut keypad = Keypad::new();
        keypad.highlight(token);
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        prop_assert_eq!(pressed.len(), 1);
        prop_assert_eq!(pressed[0].token, token);
    }

    /// Successive highlights never accumulate.
    #[test]
    fn prop_highlights_do_not_accumulate(tokens in prop::collection::vec(token_strategy(), 1..20)) {
        let mut keypad = Keypad::new();
        for &t in &tokens {
            keypad.highlight(t);
        }
        prop_assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
    }
}

// ===== Hit-test properties =====

proptest! {
    /// Any hit inside the rendered area maps to a real button token.
    #[test]
    fn prop_hit_test_returns_real_buttons(x in 0u16..40u16, y in 0u16..20u16) {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 14);
        if let Some(token) = keypad.hit_test(area, x, y) {
            prop_assert!(keypad.find_button(token).is_some());
        }
    }

    /// Points outside the area never hit.
    #[test]
    fn prop_hit_test_outside_is_none(x in 30u16..100u16, y in 20u16..100u16) {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 14);
        prop_assert!(keypad.hit_test(area, x, y).is_none());
        prop_assert!(keypad.hit_test(area, x, 5).is_none());
        prop_assert!(keypad.hit_test(area, 5, y).is_none());
    }
}

// ===== Keyboard mapping properties =====

proptest! {
    /// Digit keys always map to the matching digit token.
    #[test]
    fn prop_digit_keys_map_to_digit_tokens(d in digit_strategy()) {
        let c = char::from_digit(u32::from(d), 10).unwrap();
        prop_assert_eq!(
            InputHandler::map_char(c),
            KeyAction::Input(Token::Digit(d))
        );
    }

    /// Every keyboard-mapped token has a keypad button, so the two input
    /// paths cover the same surface.
    #[test]
    fn prop_mapped_tokens_have_buttons(c in any::<char>()) {
        if let KeyAction::Input(token) = InputHandler::map_char(c) {
            let keypad = Keypad::new();
            prop_assert!(keypad.find_button(token).is_some());
        }
    }
}

// ===== Invariants =====

#[test]
fn invariant_keypad_is_6_by_4() {
    let keypad = Keypad::new();
    assert_eq!(keypad.dimensions(), (6, 4));
    assert_eq!(keypad.button_count(), 24);
}

#[test]
fn invariant_keypad_covers_all_digits() {
    let keypad = Keypad::new();
    for d in 0..=9 {
        assert!(keypad.find_button(Token::Digit(d)).is_some(), "missing {d}");
    }
}

#[test]
fn invariant_keypad_covers_control_tokens() {
    let keypad = Keypad::new();
    for token in [
        Token::Equals,
        Token::Clear,
        Token::Backspace,
        Token::Negate,
        Token::Decimal,
    ] {
        assert!(keypad.find_button(token).is_some(), "missing {token:?}");
    }
}
