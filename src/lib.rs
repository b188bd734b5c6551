//! Progressive enhancement for the login and registration pages.
//!
//! Pages work without this module: forms post natively. When loaded it
//! adds password visibility toggles and sends verification codes in the
//! background with a resend cooldown.

pub mod conf;
pub mod cooldown;
pub mod dom;
pub mod error;
pub mod send_code;
pub mod toggle;
pub mod view;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    dom::on_ready(|| {
        bind_password_toggles();
        setup_send_code();
    });
}

/// Binds the password toggle buttons, returning how many were found.
#[wasm_bindgen]
pub fn bind_password_toggles() -> u32 {
    dom::toggle::bind_password_toggles()
}

/// Enhances the verification-code form; `false` when the page has none.
#[wasm_bindgen]
pub fn setup_send_code() -> bool {
    dom::send_code::setup_send_code()
}
