use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

use lotto_radar::app::{render_lines, render_market};
use lotto_radar::{Cli, DashboardSession, MarketId, RapidApiProvider, SyncCoordinator,
                  generate_lines};

#[tokio::main]
async fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("lotto_radar"), my_code_level)
        .init();

    let args = Cli::parse();

    let Ok(market_id) = MarketId::from_str(&args.market) else {
        bail!(
            "Unknown market '{}'. Known markets: {}",
            args.market,
            MarketId::iter().map(|m| m.to_string()).join(", ")
        );
    };

    let provider = Arc::new(RapidApiProvider::from_env()?);
    let coordinator = SyncCoordinator::new(provider);
    let mut session = DashboardSession::new(coordinator);

    session.select_market(market_id).await;
    if args.offline {
        session.cancel_pending();
    } else if args.force {
        session.cancel_pending();
        if let Err(err) = session.refresh(true).await {
            log::warn!("Manual sync failed: {}", err);
        }
    } else {
        // Let the debounced selection sync run its course.
        session.settle().await;
    }

    let market = session.market().await;
    let last_updated = session.last_updated().await;
    let error = session.last_error().await;

    println!("{}", render_market(&market, &last_updated, error.as_deref()));

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let lines = generate_lines(&market, args.lines, &mut rng);
    println!("{}", render_lines(&market, &lines));

    Ok(())
}
