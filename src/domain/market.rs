use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::{DrawRecord, FrequencyEntry};

/// The predefined lottery markets the dashboard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum MarketId {
    #[strum(serialize = "EuroMillions")]
    EuroMillions,
    #[strum(serialize = "UK Lotto")]
    UkLotto,
    #[strum(serialize = "Irish Lotto")]
    IrishLotto,
    #[strum(serialize = "SuperEnalotto")]
    SuperEnalotto,
    #[strum(serialize = "La Primitiva")]
    LaPrimitiva,
}

/// Secondary number pool definition (stars, reintegro, ...). Markets whose
/// bonus number is machine-drawn rather than player-picked have no pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraPool {
    pub name: &'static str,
    pub count: usize,
    pub range: u8,
}

/// A lottery product definition plus its live, synchronization-owned fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub id: MarketId,
    pub name: &'static str,
    pub region: &'static str,
    /// Provider code used to key all API requests for this market.
    pub code: &'static str,
    pub jackpot: &'static str,
    pub odds: &'static str,
    /// Main numbers are drawn from `[1, range]`.
    pub range: u8,
    pub main_count: usize,
    pub extra: Option<ExtraPool>,

    // Live fields, replaced atomically by a successful synchronization.
    pub most_drawn: Vec<u8>,
    pub hot: Vec<u8>,
    pub cold: Vec<u8>,
    pub overdue: Vec<u8>,
    pub frequency: Vec<FrequencyEntry>,
    pub last_draw: DrawRecord,
}

impl Market {
    pub fn extra_count(&self) -> usize {
        self.extra.map_or(0, |e| e.count)
    }

    pub fn extra_name(&self) -> &'static str {
        self.extra.map_or("", |e| e.name)
    }

    /// The last draw rendered for display, e.g. `"11, 26, 29 | Stars: 1, 10"`.
    pub fn last_draw_display(&self) -> String {
        self.last_draw.format(self.extra_name())
    }
}
