use wasm_bindgen::prelude::*;

mod app;
mod components;
mod config;
mod delay;
mod modals;
mod pages;
mod router;
mod storage;

use app::App;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "develop")] {
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
            console_error_panic_hook::set_once();
        }
    }

    let app = App::new();
    App::start(&app);
    dominator::append_dom(&dominator::body(), App::render(app));
    Ok(())
}
