//! # cc_input_mask
//!
//! Masked input engine for credit card forms.
//!
//! ## Features
//!
//! - Card number field grouped by brand (`4242 4242 4242 4242`,
//!   `3782 822463 10005`), regrouped on every keystroke
//! - Expiry date field (`MM/YY`) that refuses impossible months
//! - Cursor kept on the same digit across every reformat
//! - Backspace over a separator removes the digit before it
//! - One change notification per completed edit
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_input_mask::{CardBrand, NumberField};
//!
//! let mut field = NumberField::default();
//! field.add_listener(|number: &cc_input_mask::CardNumber| {
//!     // Safe for logging - Debug never exposes the full number
//!     println!("{:?}", number);
//! });
//!
//! field.paste("424211102222").unwrap();
//! assert_eq!(field.text(), "4242 1110 2222");
//! assert_eq!(field.cursor(), 14);
//! assert_eq!(field.brand(), CardBrand::Visa);
//! ```
//!
//! ## Expiry Dates
//!
//! ```rust
//! use cc_input_mask::DateField;
//!
//! let mut field = DateField::default();
//! field.type_text("0125").unwrap();
//! assert_eq!(field.text(), "01/25");
//! assert_eq!(field.date().month(), "01");
//!
//! // "13" is not a month: the second digit is refused
//! field.set_text("13").unwrap();
//! assert_eq!(field.text(), "1");
//! ```
//!
//! ## Hosts That Own the Text
//!
//! Widgets that apply keystrokes themselves report the state around each
//! edit and display the correction they get back.
//!
//! ```rust
//! use cc_input_mask::{NumberField, Snapshot};
//!
//! let mut field = NumberField::default();
//! field.begin_edit(Snapshot::collapsed("4242", 4)).unwrap();
//! let correction = field.end_edit(Snapshot::collapsed("42421", 5)).unwrap();
//!
//! let correction = correction.unwrap();
//! assert_eq!(correction.text, "4242 1");
//! assert_eq!(correction.cursor, 6);
//! ```
//!
//! ## Building Blocks
//!
//! ```rust
//! use cc_input_mask::{detect, filter, format};
//! use cc_input_mask::mask::NumberMask;
//! use cc_input_mask::CardBrand;
//!
//! assert_eq!(detect::classify("37"), CardBrand::AmericanExpress);
//! assert_eq!(format::format_card_number("378282246310005"), "3782 822463 10005");
//!
//! // the key filter admits a space only on a separator position
//! let mask = NumberMask::new();
//! assert_eq!(filter::filter(&mask, " ", "4242", 4..4).unwrap(), " ");
//! assert_eq!(filter::filter(&mask, " ", "424", 3..3).unwrap(), "");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length | Groups |
//! |-------|--------|--------|--------|
//! | Visa | 4 | 13-16 | 4-4-4-4 |
//! | Mastercard | 51-55 | 16 | 4-4-4-4 |
//! | American Express | 34, 37 | 15 | 4-6-5 |
//! | JCB | 35 | 16 | 4-4-4-4 |
//! | Diners Club | 30, 36, 38, 39 | 14 | 4-6-4 |
//! | Unknown | anything else | 8-19 | none |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for values, snapshots and edits |
//! | `json` | `serde` plus `serde_json` |
//! | `cli` | Command-line tool (`ccmask`) |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! This library is designed with PCI-DSS compliance in mind:
//!
//! - Automatic memory zeroization of field text and card numbers on drop
//! - `Debug` output and log lines show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod date;
pub mod detect;
pub mod edit;
pub mod error;
pub mod field;
pub mod filter;
pub mod format;
pub mod mask;
pub mod notify;
pub mod redact;
pub mod script;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardBrand, CardNumber, Format};
pub use date::CardDate;
pub use edit::{transform, Correction, Outcome, Snapshot};
pub use error::EditError;
pub use field::{CycleState, DateField, MaskedField, NumberField};
pub use mask::{DateMask, InputMask, NumberMask};
pub use notify::{ChangeListener, ChangeNotifier, ListenerId};
