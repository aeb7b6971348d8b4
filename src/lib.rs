mod app;
mod draw_canvas;
mod grid_panel;
mod notes_panel;
mod palette_panel;
mod sectors_panel;
mod types;
mod utils;

pub mod board;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
