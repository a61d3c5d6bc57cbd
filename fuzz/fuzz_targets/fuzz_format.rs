//! Fuzz target for grouping.
//!
//! Tests that formatting never panics, is idempotent and clamps its length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use payfield::format::{format_card_number, strip_separator};
use payfield::GroupingStyle;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    separator: &'a str,
    group_sizes: Vec<u8>,
    fixed: bool,
    maximum_length: u8,
}

fuzz_target!(|input: Input<'_>| {
    let _ = format_card_number(input.text);

    let maximum_length = usize::from(input.maximum_length);
    let style = if input.fixed {
        let size = input.group_sizes.first().copied().unwrap_or(4);
        GroupingStyle::fixed(usize::from(size), maximum_length)
    } else {
        let sizes: Vec<usize> = input.group_sizes.iter().map(|&s| usize::from(s)).collect();
        GroupingStyle::variable(sizes, maximum_length)
    };

    let formatted = style.format(input.text, input.separator);
    assert!(strip_separator(&formatted, input.separator).chars().count() <= maximum_length);

    // idempotent as long as the grouped characters cannot form a separator
    let content = strip_separator(input.text, input.separator);
    if !content.chars().any(|c| input.separator.contains(c)) {
        assert_eq!(style.format(&formatted, input.separator), formatted);
    }
});
