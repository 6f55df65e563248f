// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod logic;
pub mod narration;
pub mod systems;

pub use app::game_app::TarotApp;
pub use error::TarotError;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("Panic hook and console logger ready");
}
