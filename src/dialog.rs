//! JavaScript interop for the browser's blocking message box.
//! Validation errors and confirmations share this one channel.

use log::debug;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = alert)]
    fn window_alert(message: &str);
}

/// Show `message` and block until the user dismisses it.
pub fn notify(message: &str) {
    debug!("Dialog: {}", message);
    window_alert(message);
}

/// Report a validation failure through the same dialog.
pub fn notify_error(error: &group_trip::FormError) {
    notify(&error.to_string());
}
