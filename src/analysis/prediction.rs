use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::constants::SUGGESTED_LINE_COUNT;
use crate::domain::Market;

/// One generated suggestion: sorted distinct main numbers plus sorted
/// distinct secondary numbers, sized to the market shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionLine {
    pub main: Vec<u8>,
    pub extras: Vec<u8>,
}

/// The standard prediction batch for the dashboard, on a fresh RNG.
pub fn suggested_lines(market: &Market) -> Vec<PredictionLine> {
    generate_lines(market, SUGGESTED_LINE_COUNT, &mut rand::rng())
}

/// Sample `count` lines from the market's hot/cold/overdue pools plus a
/// uniform fallback. Purely in-memory; never touches the network. Duplicate
/// lines within a batch are allowed.
pub fn generate_lines(market: &Market, count: usize, rng: &mut impl Rng) -> Vec<PredictionLine> {
    (0..count).map(|_| generate_line(market, rng)).collect()
}

fn generate_line(market: &Market, rng: &mut impl Rng) -> PredictionLine {
    debug_assert!(usize::from(market.range) >= market.main_count);

    let mut main: Vec<u8> = Vec::with_capacity(market.main_count);

    // Weighted seeding: 2 hot picks, 1 cold, 1 overdue. Short pools give
    // what they have; picks past a full line are dropped.
    pick_from(&market.hot, 2, market.main_count, &mut main, rng);
    pick_from(&market.cold, 1, market.main_count, &mut main, rng);
    pick_from(&market.overdue, 1, market.main_count, &mut main, rng);

    // Uniform fill guarantees a complete line even when the pools
    // under-delivered or overlapped.
    while main.len() < market.main_count {
        let candidate = rng.random_range(1..=market.range);
        if !main.contains(&candidate) {
            main.push(candidate);
        }
    }
    main.sort_unstable();

    let mut extras: Vec<u8> = Vec::new();
    if let Some(extra) = market.extra {
        while extras.len() < extra.count {
            let candidate = rng.random_range(1..=extra.range);
            if !extras.contains(&candidate) {
                extras.push(candidate);
            }
        }
        extras.sort_unstable();
    }

    PredictionLine { main, extras }
}

fn pick_from(pool: &[u8], want: usize, cap: usize, picked: &mut Vec<u8>, rng: &mut impl Rng) {
    for &num in pool.choose_multiple(rng, want) {
        if picked.len() < cap && !picked.contains(&num) {
            picked.push(num);
        }
    }
}
