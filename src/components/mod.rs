// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod game_state;
pub mod position;
pub mod preferences;

pub use card::{CardDefinition, DeckCard};
pub use game_state::GamePhase;
pub use position::{Placement, Viewport};
pub use preferences::{BackgroundMode, DrawEffect, Language, Preferences};
