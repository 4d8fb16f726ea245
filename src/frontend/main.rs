use wasm_bindgen::prelude::*;

mod app;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Mounting AI Tutor Platform".into());
    leptos::mount::mount_to_body(app::App);
}
