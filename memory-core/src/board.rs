//! Board construction and per-tile state.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::constants::SYMBOLS;

/// Face state of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileFace {
    Hidden,
    Revealed,
    Matched,
}

/// One card slot on the board. Exactly one other tile carries the same
/// symbol.
#[derive(Clone, Debug)]
pub struct Tile {
    pub symbol: &'static str,
    pub face: TileFace,
}

impl Tile {
    pub fn is_matched(&self) -> bool {
        self.face == TileFace::Matched
    }
}

/// Deal a board of `2 * pairs` face-down tiles using the first `pairs`
/// palette symbols, each duplicated, in uniformly random order
/// (Fisher-Yates via `SliceRandom`).
pub fn deal<R: Rng>(pairs: usize, rng: &mut R) -> Vec<Tile> {
    let picked = &SYMBOLS[..pairs.min(SYMBOLS.len())];
    let mut symbols: Vec<&'static str> = Vec::with_capacity(pairs * 2);
    symbols.extend_from_slice(picked);
    symbols.extend_from_slice(picked);
    symbols.shuffle(rng);
    symbols
        .into_iter()
        .map(|symbol| Tile {
            symbol,
            face: TileFace::Hidden,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn symbols_of(board: &[Tile]) -> Vec<&'static str> {
        board.iter().map(|t| t.symbol).collect()
    }

    #[test]
    fn deal_builds_two_of_each_symbol_face_down() {
        let mut rng = SmallRng::seed_from_u64(7);
        for pairs in [2, 4, 6] {
            let board = deal(pairs, &mut rng);
            assert_eq!(board.len(), pairs * 2);
            assert!(board.iter().all(|t| t.face == TileFace::Hidden));
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for t in &board {
                *counts.entry(t.symbol).or_insert(0) += 1;
            }
            assert_eq!(counts.len(), pairs);
            assert!(counts.values().all(|&c| c == 2));
        }
    }

    #[test]
    fn deal_is_a_permutation_not_a_fixed_order() {
        let reference = symbols_of(&deal(6, &mut SmallRng::seed_from_u64(0)));
        let mut differing = 0;
        for seed in 1..=50 {
            let order = symbols_of(&deal(6, &mut SmallRng::seed_from_u64(seed)));
            let mut a = reference.clone();
            let mut b = order.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "shuffle must preserve the symbol multiset");
            if order != reference {
                differing += 1;
            }
        }
        // 12! orderings; seeing the reference order repeat would be absurd.
        assert!(differing >= 45, "only {differing}/50 deals differed");
    }

    #[test]
    fn deal_spreads_symbols_across_the_first_slot() {
        // Loose uniformity check: over many seeds every symbol should land
        // in slot 0 a healthy number of times (expected 100 each).
        let mut first_slot: HashMap<&str, usize> = HashMap::new();
        for seed in 0..600 {
            let board = deal(6, &mut SmallRng::seed_from_u64(seed));
            *first_slot.entry(board[0].symbol).or_insert(0) += 1;
        }
        assert_eq!(first_slot.len(), 6);
        for (symbol, n) in first_slot {
            assert!((40..=220).contains(&n), "{symbol} hit slot 0 {n} times");
        }
    }

    #[test]
    fn deal_is_reproducible_for_a_seed() {
        let a = symbols_of(&deal(4, &mut SmallRng::seed_from_u64(9)));
        let b = symbols_of(&deal(4, &mut SmallRng::seed_from_u64(9)));
        assert_eq!(a, b);
    }
}
