use std::collections::HashMap;

use crate::domain::{DrawRecord, FrequencyEntry};

/// Hot/cold/overdue classification plus the full frequency ranking derived
/// from a draw history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub hot: Vec<u8>,
    pub cold: Vec<u8>,
    pub overdue: Vec<u8>,
    pub frequency: Vec<FrequencyEntry>,
}

/// Reduce a draw history (most recent first) into derived number statistics.
///
/// Each pool holds at most `main_count` numbers and is shorter only when the
/// history carries fewer distinct numbers. An empty history yields empty
/// pools; this function never fails.
pub fn compute_stats(history: &[DrawRecord], main_count: usize) -> DrawStats {
    if history.is_empty() || main_count == 0 {
        return DrawStats::default();
    }

    // Encounter order doubles as the tie-break for equal counts and equal
    // recency gaps, keeping the ranking stable across calls.
    let mut order: Vec<u8> = Vec::new();
    let mut counts: HashMap<u8, u32> = HashMap::new();
    let mut last_seen: HashMap<u8, usize> = HashMap::new();

    for (idx, draw) in history.iter().enumerate() {
        for &num in &draw.main {
            if !counts.contains_key(&num) {
                order.push(num);
            }
            *counts.entry(num).or_insert(0) += 1;
            // Index 0 is the most recent draw; the first sighting wins.
            last_seen.entry(num).or_insert(idx);
        }
    }

    let mut ranked: Vec<FrequencyEntry> = order
        .iter()
        .map(|&num| FrequencyEntry {
            num,
            count: counts[&num],
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let hot: Vec<u8> = ranked.iter().take(main_count).map(|e| e.num).collect();
    // Tail of the ranking, least frequent first.
    let cold: Vec<u8> = ranked.iter().rev().take(main_count).map(|e| e.num).collect();

    let mut by_gap: Vec<(u8, usize)> = order.iter().map(|&num| (num, last_seen[&num])).collect();
    by_gap.sort_by(|a, b| b.1.cmp(&a.1));
    let overdue: Vec<u8> = by_gap
        .into_iter()
        .take(main_count)
        .map(|(num, _)| num)
        .collect();

    DrawStats {
        hot,
        cold,
        overdue,
        frequency: ranked,
    }
}
