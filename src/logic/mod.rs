// src/logic/mod.rs
//! 画面に依存しない占いのロジック。ここにあるものは全部ネイティブでテストできるよ。

pub mod deck;
pub mod presentation;
pub mod scheduler;
pub mod session;
pub mod starfield;
