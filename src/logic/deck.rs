// src/logic/deck.rs

use rand::Rng;

use crate::components::card::{CardDefinition, DeckCard};
use crate::data::catalog::SPREAD_SIZE;

/// カタログからデッキを作る関数だよ！🃏
///
/// カタログの1枚につきデッキにも1枚。`unique_id` は並び順で `deck-0`, `deck-1`, ... と振って、
/// 向き (正位置/逆位置) はここで1回だけコイントスして決める。
pub fn build_deck<R: Rng + ?Sized>(catalog: &[CardDefinition], rng: &mut R) -> Vec<DeckCard> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, definition)| DeckCard::new(definition.clone(), index, rng.gen_bool(0.5)))
        .collect()
}

/// Fisher–Yates でその場でシャッフルする。
///
/// i を末尾から 1 まで下げながら、[0, i] から一様に選んだ j と入れ替える。
/// 要素は並べ替えるだけで、増えたり減ったり変わったりはしない。
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// まだ選ばれていないカードから1枚を一様に選んで、選択の末尾に足したものを返す。
///
/// すでに3枚ある (か、残りがない) ときは何もせずにそのまま返すよ。
/// 呼ぶ側でガードする前提なので、エラーにはしない。
pub fn draw_next<R: Rng + ?Sized>(
    deck: &[DeckCard],
    selection: &[DeckCard],
    rng: &mut R,
) -> Vec<DeckCard> {
    let mut next = selection.to_vec();
    if selection.len() >= SPREAD_SIZE {
        return next;
    }

    let available: Vec<&DeckCard> = deck
        .iter()
        .filter(|card| !selection.iter().any(|s| s.unique_id == card.unique_id))
        .collect();
    if available.is_empty() {
        return next;
    }

    let picked = available[rng.gen_range(0..available.len())];
    next.push(picked.clone());
    next
}
