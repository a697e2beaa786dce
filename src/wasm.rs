//! WebAssembly bindings for the masked card inputs.
//!
//! This module exposes the two fields as JavaScript classes. A page keeps
//! one instance per `<input>` and forwards its `beforeinput`/`input` events.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardNumberInput } from 'cc_input_mask';
//!
//! await init();
//!
//! const field = new CardNumberInput();
//! field.addListener((number, brand) => console.log(brand));
//!
//! input.addEventListener('beforeinput', (e) => {
//!     const { selectionStart: start, selectionEnd: end } = input;
//!     if (e.data !== null && field.filter(e.data, input.value, start, end) === '') {
//!         e.preventDefault();
//!         return;
//!     }
//!     field.beginEdit(input.value, start, end);
//! });
//! input.addEventListener('input', () => {
//!     if (field.endEdit(input.value, input.selectionStart, input.selectionEnd)) {
//!         input.value = field.text;
//!         input.setSelectionRange(field.cursor, field.cursor);
//!     }
//! });
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::edit::Snapshot;
use crate::field::{DateField, MaskedField, NumberField};
use crate::filter::admit;
use crate::mask::InputMask;
use crate::notify::ListenerId;

fn to_js(err: crate::EditError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn offset(value: u32) -> usize {
    value as usize
}

/// Hands `id` to JavaScript, or unregisters the listener if the id does not
/// fit in a `u32`.
fn js_listener_id<M: InputMask>(field: &mut MaskedField<M>, id: ListenerId) -> Result<u32, JsValue> {
    match u32::try_from(id) {
        Ok(raw) => Ok(raw),
        Err(_) => {
            field.remove_listener(id);
            Err(JsValue::from_str("listener ids exhausted"))
        }
    }
}

/// Card number input, returned to JavaScript.
#[wasm_bindgen]
pub struct CardNumberInput {
    field: NumberField,
}

#[wasm_bindgen]
impl CardNumberInput {
    /// Creates an empty number input.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardNumberInput {
        CardNumberInput {
            field: NumberField::default(),
        }
    }

    /// Records the input state right before an edit.
    #[wasm_bindgen(js_name = beginEdit)]
    pub fn begin_edit(&mut self, text: &str, start: u32, end: u32) -> Result<(), JsValue> {
        self.field
            .begin_edit(Snapshot::new(text, offset(start), offset(end)))
            .map_err(to_js)
    }

    /// Completes an edit. Returns true if the input must show `text` and
    /// `cursor` instead of what the browser applied.
    #[wasm_bindgen(js_name = endEdit)]
    pub fn end_edit(&mut self, text: &str, start: u32, end: u32) -> Result<bool, JsValue> {
        self.field
            .end_edit(Snapshot::new(text, offset(start), offset(end)))
            .map(|correction| correction.is_some())
            .map_err(to_js)
    }

    /// Returns the part of `source` admitted in place of `dest[start..end]`.
    pub fn filter(&self, source: &str, dest: &str, start: u32, end: u32) -> String {
        admit(self.field.mask(), source, dest, offset(start)..offset(end))
    }

    /// Replaces the whole text.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.field.set_text(text).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.field.text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> u32 {
        self.field.cursor() as u32
    }

    /// Digits without separators.
    #[wasm_bindgen(getter)]
    pub fn number(&self) -> String {
        self.field.digits()
    }

    /// Brand tag (`VISA`, `MASTER_CARD`, ...).
    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.field.brand().tag().to_string()
    }

    /// Registers `listener(number, brand)`; returns its id, or throws once
    /// ids no longer fit in 32 bits.
    #[wasm_bindgen(js_name = addListener)]
    pub fn add_listener(&mut self, listener: js_sys::Function) -> Result<u32, JsValue> {
        let id = self.field.add_listener(move |value: &crate::CardNumber| {
            let _ = listener.call2(
                &JsValue::NULL,
                &JsValue::from_str(value.number()),
                &JsValue::from_str(value.brand().tag()),
            );
        });
        js_listener_id(&mut self.field, id)
    }

    /// Unregisters a listener; returns false for an unknown id.
    #[wasm_bindgen(js_name = removeListener)]
    pub fn remove_listener(&mut self, id: u32) -> bool {
        self.field.remove_listener(ListenerId::from_raw(u64::from(id)))
    }
}

/// Expiry date input, returned to JavaScript.
#[wasm_bindgen]
pub struct CardDateInput {
    field: DateField,
}

#[wasm_bindgen]
impl CardDateInput {
    /// Creates an empty date input.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardDateInput {
        CardDateInput {
            field: DateField::default(),
        }
    }

    /// Records the input state right before an edit.
    #[wasm_bindgen(js_name = beginEdit)]
    pub fn begin_edit(&mut self, text: &str, start: u32, end: u32) -> Result<(), JsValue> {
        self.field
            .begin_edit(Snapshot::new(text, offset(start), offset(end)))
            .map_err(to_js)
    }

    /// Completes an edit. Returns true if the input must show `text` and
    /// `cursor` instead of what the browser applied.
    #[wasm_bindgen(js_name = endEdit)]
    pub fn end_edit(&mut self, text: &str, start: u32, end: u32) -> Result<bool, JsValue> {
        self.field
            .end_edit(Snapshot::new(text, offset(start), offset(end)))
            .map(|correction| correction.is_some())
            .map_err(to_js)
    }

    /// Returns the part of `source` admitted in place of `dest[start..end]`.
    pub fn filter(&self, source: &str, dest: &str, start: u32, end: u32) -> String {
        admit(self.field.mask(), source, dest, offset(start)..offset(end))
    }

    /// Replaces the whole text.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.field.set_text(text).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.field.text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> u32 {
        self.field.cursor() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn month(&self) -> String {
        self.field.date().month().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn year(&self) -> String {
        self.field.date().year().to_string()
    }

    /// Registers `listener(month, year)`; returns its id, or throws once
    /// ids no longer fit in 32 bits.
    #[wasm_bindgen(js_name = addListener)]
    pub fn add_listener(&mut self, listener: js_sys::Function) -> Result<u32, JsValue> {
        let id = self.field.add_listener(move |value: &crate::CardDate| {
            let _ = listener.call2(
                &JsValue::NULL,
                &JsValue::from_str(value.month()),
                &JsValue::from_str(value.year()),
            );
        });
        js_listener_id(&mut self.field, id)
    }

    /// Unregisters a listener; returns false for an unknown id.
    #[wasm_bindgen(js_name = removeListener)]
    pub fn remove_listener(&mut self, id: u32) -> bool {
        self.field.remove_listener(ListenerId::from_raw(u64::from(id)))
    }
}

impl Default for CardNumberInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for CardDateInput {
    fn default() -> Self {
        Self::new()
    }
}
