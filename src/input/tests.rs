use super::*;
use crate::keycodes::{
    KEYCODE_DELETE, KEYCODE_DONE, KEYCODE_SHIFT, KEYCODE_SWITCH_LAYOUT, SystemKey,
};
use crate::layout::LayoutId;

fn qwerty_state() -> InterpreterState {
    InterpreterState::new()
}

fn state_in(layout: LayoutId) -> InterpreterState {
    InterpreterState {
        layout,
        ..InterpreterState::new()
    }
}

#[test]
fn test_printable_codes_commit_verbatim_without_shift() {
    for c in "abcxyz0189 .,!?".chars() {
        let (next, action) = interpret(qwerty_state(), c as i32);
        assert_eq!(action, Action::CommitText(c));
        assert_eq!(next, qwerty_state());
    }
}

#[test]
fn test_shift_upper_cases_alphabetic_and_stays_sticky() {
    let mut state = qwerty_state();
    state.shift.toggle();

    for c in 'a'..='z' {
        let (next, action) = interpret(state, c as i32);
        assert_eq!(action, Action::CommitText(c.to_ascii_uppercase()));
        // Sticky: committing a character does not clear the flag.
        assert!(next.shift.active);
    }
}

#[test]
fn test_shift_does_not_touch_non_alphabetic() {
    let mut state = qwerty_state();
    state.shift.toggle();

    let (_, action) = interpret(state, '5' as i32);
    assert_eq!(action, Action::CommitText('5'));
}

#[test]
fn test_delete_emits_single_backward_delete() {
    let (next, action) = interpret(qwerty_state(), KEYCODE_DELETE);
    assert_eq!(action, Action::DeleteBackward(1));
    assert_eq!(next, qwerty_state());
}

#[test]
fn test_done_emits_enter() {
    let (next, action) = interpret(qwerty_state(), KEYCODE_DONE);
    assert_eq!(action, Action::SendKey(SystemKey::Enter));
    assert_eq!(next, qwerty_state());
}

#[test]
fn test_shift_then_letter_scenario() {
    let (state, action) = interpret(qwerty_state(), KEYCODE_SHIFT);
    assert_eq!(action, Action::ToggleShift);
    assert!(state.shift.active);

    let (state, action) = interpret(state, 'a' as i32);
    assert_eq!(action, Action::CommitText('A'));
    assert!(state.shift.active);
}

#[test]
fn test_shift_toggles_even_outside_qwerty() {
    // The flag flips in every layout; only QWERTY reads it.
    let (state, action) = interpret(state_in(LayoutId::Numeric), KEYCODE_SHIFT);
    assert_eq!(action, Action::ToggleShift);
    assert!(state.shift.active);

    // Numeric commits are never case-transformed.
    let (_, action) = interpret(state, 'a' as i32);
    assert_eq!(action, Action::CommitText('a'));
}

#[test]
fn test_switch_layout_cycles_with_period_three() {
    for start in [LayoutId::Qwerty, LayoutId::Numeric, LayoutId::Commands] {
        let mut state = state_in(start);
        for _ in 0..3 {
            let (next, action) = interpret(state, KEYCODE_SWITCH_LAYOUT);
            assert_eq!(action, Action::SwitchLayout(next.layout));
            state = next;
        }
        assert_eq!(state.layout, start);
    }
}

#[test]
fn test_switch_layout_preserves_shift_flag() {
    let mut state = qwerty_state();
    state.shift.toggle();

    let (state, _) = interpret(state, KEYCODE_SWITCH_LAYOUT);
    assert_eq!(state.layout, LayoutId::Numeric);
    assert!(state.shift.active);
}

#[test]
fn test_command_sentinels_send_ctrl_sequences() {
    let state = state_in(LayoutId::Commands);
    for code in 101..=109 {
        let (next, action) = interpret(state, code);
        assert_eq!(
            action,
            Action::SendControlSequence {
                ctrl: SystemKey::CtrlLeft,
                digit: (code - 100) as u8,
            }
        );
        assert_eq!(next, state);
    }
}

#[test]
fn test_command_sentinels_inert_outside_commands_layout() {
    // 101 is 'e' as a character code; QWERTY commits it as text.
    let (_, action) = interpret(qwerty_state(), 101);
    assert_eq!(action, Action::CommitText('e'));
}

#[test]
fn test_sentinel_100_falls_through_to_plain_commit() {
    // No Ctrl+0 macro exists; 100 commits as the character 'd'.
    let (_, action) = interpret(state_in(LayoutId::Commands), 100);
    assert_eq!(action, Action::CommitText('d'));
}

#[test]
fn test_unknown_codes_echo_verbatim() {
    let (_, action) = interpret(qwerty_state(), '~' as i32);
    assert_eq!(action, Action::CommitText('~'));
}
