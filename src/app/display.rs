use itertools::Itertools;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analysis::PredictionLine;
use crate::config::constants::FREQUENCY_DISPLAY_COUNT;
use crate::domain::Market;

#[derive(Tabled)]
struct PoolRow {
    #[tabled(rename = "Pool")]
    pool: &'static str,
    #[tabled(rename = "Numbers")]
    numbers: String,
}

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "Number")]
    number: u8,
    #[tabled(rename = "Draw Count")]
    count: u32,
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Line")]
    index: usize,
    #[tabled(rename = "Main")]
    main: String,
    #[tabled(rename = "Extras")]
    extras: String,
}

fn join(numbers: &[u8]) -> String {
    numbers.iter().join(", ")
}

/// Render the market record as the text dashboard: header, error banner,
/// latest verified draw, hot/cold/overdue pools and the frequency ranking.
pub fn render_market(market: &Market, last_updated: &str, error: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({})  |  Jackpot {}  |  Odds {}  |  Sync: {}\n",
        market.name, market.region, market.jackpot, market.odds, last_updated
    ));

    if let Some(message) = error {
        out.push_str(&format!("API Notification: {}\n", message));
    }

    out.push_str(&format!(
        "Latest verified draw: {}\n\n",
        market.last_draw_display()
    ));

    let pools = vec![
        PoolRow {
            pool: "Most Drawn",
            numbers: join(&market.most_drawn),
        },
        PoolRow {
            pool: "Hot",
            numbers: join(&market.hot),
        },
        PoolRow {
            pool: "Cold",
            numbers: join(&market.cold),
        },
        PoolRow {
            pool: "Overdue",
            numbers: join(&market.overdue),
        },
    ];
    out.push_str(&Table::new(pools).with(Style::rounded()).to_string());
    out.push('\n');

    let frequency: Vec<FrequencyRow> = market
        .frequency
        .iter()
        .take(FREQUENCY_DISPLAY_COUNT)
        .map(|entry| FrequencyRow {
            number: entry.num,
            count: entry.count,
        })
        .collect();
    if !frequency.is_empty() {
        out.push('\n');
        out.push_str(&Table::new(frequency).with(Style::rounded()).to_string());
        out.push('\n');
    }

    out
}

/// Render the prediction batch, one row per suggested line.
pub fn render_lines(market: &Market, lines: &[PredictionLine]) -> String {
    let rows: Vec<LineRow> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| LineRow {
            index: idx + 1,
            main: join(&line.main),
            extras: if line.extras.is_empty() {
                "-".to_string()
            } else {
                format!("{}: {}", market.extra_name(), join(&line.extras))
            },
        })
        .collect();

    format!(
        "Suggested lines for the next {} draw:\n{}\n",
        market.name,
        Table::new(rows).with(Style::rounded())
    )
}
