pub mod app;
pub mod links;
pub mod navigation;
pub mod notice;
pub mod scroll;
pub mod size;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
