//! Shared test utilities for driving the conversion menus

#![allow(dead_code)]

use std::io::Cursor;

use basics::menu::{ConversionMenu, DisplayConfig, MenuKind};

/// Join input lines the way a user would type them
pub fn input_of(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

/// Run a built-in menu over raw input bytes and capture its output
pub fn run_menu_bytes(kind: MenuKind, input: &[u8]) -> String {
    let menu = ConversionMenu::builtin(kind).unwrap();
    let mut input = Cursor::new(input.to_vec());
    let mut output = Vec::new();
    menu.run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Run a built-in menu over the given input lines and capture its output
pub fn run_menu(kind: MenuKind, lines: &[&str]) -> String {
    run_menu_with(kind, DisplayConfig::default(), lines)
}

/// Same as `run_menu` with explicit display settings
pub fn run_menu_with(kind: MenuKind, display: DisplayConfig, lines: &[&str]) -> String {
    let menu = ConversionMenu::builtin(kind).unwrap().with_display(display);
    let mut input = Cursor::new(input_of(lines).into_bytes());
    let mut output = Vec::new();
    menu.run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Number of non-overlapping occurrences of `needle`
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert `first` occurs in `output` and `second` occurs after it
pub fn assert_ordered(output: &str, first: &str, second: &str) {
    let a = output
        .find(first)
        .unwrap_or_else(|| panic!("Missing '{}' in output:\n{}", first, output));
    let b = output
        .rfind(second)
        .unwrap_or_else(|| panic!("Missing '{}' in output:\n{}", second, output));
    assert!(
        a < b,
        "Expected '{}' before '{}' in output:\n{}",
        first,
        second,
        output
    );
}
