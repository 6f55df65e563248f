// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// 占いの流れの今の段階を表す列挙型だよ！🔮
///
/// intro → shuffling → drawing → revealing → reading、
/// reading からやり直すと shuffling に戻る。
/// `Error` はカードのカタログが読めなかった時だけ入る行き止まり。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Intro,
    Shuffling,
    Drawing,
    Revealing,
    Reading,
    Error,
}

impl GamePhase {
    /// カードが円形に並んでくるくる回るフェーズかどうか
    pub fn is_spinning(self) -> bool {
        matches!(self, GamePhase::Drawing | GamePhase::Revealing | GamePhase::Reading)
    }

    /// カードが表向きになっているフェーズ
    pub fn shows_faces(self) -> bool {
        matches!(self, GamePhase::Revealing | GamePhase::Reading)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Intro => "intro",
            GamePhase::Shuffling => "shuffling",
            GamePhase::Drawing => "drawing",
            GamePhase::Revealing => "revealing",
            GamePhase::Reading => "reading",
            GamePhase::Error => "error",
        }
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Intro
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinning_phases() {
        assert!(!GamePhase::Intro.is_spinning());
        assert!(!GamePhase::Shuffling.is_spinning());
        assert!(GamePhase::Drawing.is_spinning());
        assert!(GamePhase::Revealing.is_spinning());
        assert!(GamePhase::Reading.is_spinning());
        assert!(!GamePhase::Error.is_spinning());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&GamePhase::Revealing).unwrap();
        assert_eq!(json, "\"revealing\"");
        assert_eq!(GamePhase::Revealing.as_str(), "revealing");
    }
}
