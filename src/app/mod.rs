// src/app/mod.rs
//! TarotApp (JS から見える入口) と、その内部処理を役割ごとに分けて置くモジュールだよ！

use std::sync::{Mutex, MutexGuard};

pub mod browser_event_manager;
pub mod game_app;
pub mod layout_calculator;
pub mod renderer;
pub mod starry_background;
pub mod state_getter;

/// Mutex をロックする。どこかでパニックして poison されていても中身はそのまま使う。
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Mutex was poisoned, recovering inner state");
            poisoned.into_inner()
        }
    }
}
