use chrono::{Local, NaiveDate};
use group_trip::format_input_date;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};

/// Read the value of the `<input>` or `<textarea>` that fired `event`.
pub fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Path of the page currently loaded, e.g. `/planejamento.html`.
pub fn current_path() -> String {
    gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_default()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date as a date-input value, used as the initial `min` of both trip dates.
pub fn today_input_value() -> String {
    format_input_date(today())
}
