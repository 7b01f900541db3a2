use crate::domain::{DrawRecord, ExtraPool, FrequencyEntry, Market, MarketId};

fn freq(entries: &[(u8, u32)]) -> Vec<FrequencyEntry> {
    entries
        .iter()
        .map(|&(num, count)| FrequencyEntry { num, count })
        .collect()
}

/// The predefined market catalogue with its seed statistics. The live fields
/// (most_drawn, hot/cold/overdue, frequency, last_draw) are replaced by the
/// first successful synchronization; everything else is immutable.
pub fn seed_markets() -> Vec<Market> {
    vec![
        Market {
            id: MarketId::EuroMillions,
            name: "EuroMillions",
            region: "Pan-European",
            code: "EU_EM_LT",
            jackpot: "€17,000,000",
            odds: "1 in 139,838,160",
            range: 50,
            main_count: 5,
            extra: Some(ExtraPool {
                name: "Stars",
                count: 2,
                range: 12,
            }),
            most_drawn: vec![23, 44, 19, 21, 17],
            hot: vec![44, 17, 26, 21, 35],
            cold: vec![33, 4, 48, 12, 9],
            overdue: vec![5, 12, 49],
            frequency: freq(&[(23, 182), (44, 178), (19, 175), (21, 172), (17, 170)]),
            last_draw: DrawRecord::new(vec![11, 26, 29, 34, 44], vec![1, 10], None),
        },
        Market {
            id: MarketId::UkLotto,
            name: "UK Lotto",
            region: "United Kingdom",
            code: "GB_GB_LT",
            jackpot: "£5,300,000",
            odds: "1 in 45,057,474",
            range: 59,
            main_count: 6,
            extra: None,
            most_drawn: vec![52, 58, 27, 39, 8],
            hot: vec![52, 8, 38, 27, 15],
            cold: vec![48, 30, 57, 2, 44],
            overdue: vec![14, 22, 41],
            frequency: freq(&[(52, 104), (58, 99), (27, 95), (39, 92), (8, 89)]),
            last_draw: DrawRecord::new(vec![20, 36, 40, 43, 51, 55], vec![], None),
        },
        Market {
            id: MarketId::IrishLotto,
            name: "Irish Lotto",
            region: "Ireland",
            code: "IE_IE_LT",
            jackpot: "€4,500,000",
            odds: "1 in 10,737,573",
            range: 47,
            main_count: 6,
            extra: None,
            most_drawn: vec![27, 42, 29, 38, 10],
            hot: vec![27, 10, 42, 38, 9],
            cold: vec![34, 3, 11, 45, 16],
            overdue: vec![1, 18, 45],
            frequency: freq(&[(27, 157), (42, 144), (29, 143), (38, 139), (10, 139)]),
            last_draw: DrawRecord::new(vec![11, 19, 20, 34, 36, 42], vec![], None),
        },
        Market {
            id: MarketId::SuperEnalotto,
            name: "Italian Lotto",
            region: "Italy",
            code: "IT_IT_SL",
            jackpot: "€98,500,000",
            odds: "1 in 622,614,630",
            range: 90,
            main_count: 6,
            extra: None,
            most_drawn: vec![85, 77, 90, 81, 82],
            hot: vec![85, 90, 12, 77, 6],
            cold: vec![60, 18, 5, 41, 88],
            overdue: vec![7, 33, 54],
            frequency: freq(&[(85, 261), (77, 255), (90, 253), (81, 249), (82, 248)]),
            last_draw: DrawRecord::new(vec![36, 38, 45, 61, 79, 83], vec![], None),
        },
        Market {
            id: MarketId::LaPrimitiva,
            name: "Spanish Lotto",
            region: "Spain",
            code: "ES_ES_RJ",
            jackpot: "€13,500,000",
            odds: "1 in 13,983,816",
            range: 49,
            main_count: 6,
            extra: Some(ExtraPool {
                name: "Reintegro",
                count: 1,
                range: 9,
            }),
            most_drawn: vec![47, 3, 40, 38, 7],
            hot: vec![47, 43, 2, 10, 22],
            cold: vec![11, 14, 20, 35, 48],
            overdue: vec![9, 25, 31],
            frequency: freq(&[(47, 531), (3, 522), (40, 518), (38, 512), (7, 509)]),
            last_draw: DrawRecord::new(vec![2, 16, 28, 38, 41, 47], vec![8], None),
        },
    ]
}
