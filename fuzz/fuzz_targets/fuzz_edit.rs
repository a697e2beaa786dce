//! Fuzz target for fields.
//!
//! Replays arbitrary edit sequences and checks that the text stays
//! canonical and the cursor stays inside it.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cc_input_mask::{format, DateField, NumberField, Snapshot};

#[derive(Debug, Arbitrary)]
enum Op {
    Type(String),
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Select(u8, u8),
    Host { text: String, start: u8, end: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut number = NumberField::default();
    let mut date = DateField::default();

    for op in &ops {
        match op {
            Op::Type(text) => {
                let _ = number.type_text(text);
                let _ = date.type_text(text);
            }
            Op::Paste(text) => {
                let _ = number.paste(text);
                let _ = date.paste(text);
            }
            Op::Backspace => {
                let _ = number.delete_backward();
                let _ = date.delete_backward();
            }
            Op::Delete => {
                let _ = number.delete_forward();
                let _ = date.delete_forward();
            }
            Op::Left => {
                number.move_left();
                date.move_left();
            }
            Op::Right => {
                number.move_right();
                date.move_right();
            }
            Op::Select(start, end) => {
                let _ = number.set_selection(usize::from(*start), usize::from(*end));
                let _ = date.set_selection(usize::from(*start), usize::from(*end));
            }
            Op::Host { text, start, end } => {
                // Hosts may report anything; errors are fine, panics are not
                let after = Snapshot::new(text.as_str(), usize::from(*start), usize::from(*end));
                if number.begin_edit(number.snapshot()).is_ok() {
                    let _ = number.end_edit(after.clone());
                }
                if date.begin_edit(date.snapshot()).is_ok() {
                    let _ = date.end_edit(after);
                }
                continue;
            }
        }

        assert!(number.cursor() <= number.len());
        assert!(date.cursor() <= date.len());
        assert_eq!(number.text(), format::format_card_number(&number.digits()));
        assert_eq!(date.text(), format::format_date(&date.digits()));
    }
});
