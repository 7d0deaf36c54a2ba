// Host-side checks that the page-facing identifiers stay exactly as the markup
// expects them.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn markup_identifiers() {
    assert_eq!(TOGGLE_CONTROL_ID, "toggleCodeButton");
    assert_eq!(CODE_BLOCK_CLASS, "language-python");
}

#[test]
fn labels_and_display_values() {
    assert_eq!(LABEL_SHOW_CODE, "Show Code");
    assert_eq!(LABEL_HIDE_CODE, "Hide Code");
    assert_eq!(DISPLAY_PROPERTY, "display");
    assert_eq!(DISPLAY_BLOCK, "block");
    assert_eq!(DISPLAY_NONE, "none");
}

#[test]
fn labels_are_distinct() {
    assert_ne!(LABEL_SHOW_CODE, LABEL_HIDE_CODE);
    assert_ne!(DISPLAY_BLOCK, DISPLAY_NONE);
}
