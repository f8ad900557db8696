//! The board — owned state for the world clock and converter.
//!
//! `Board` holds the watch list, the converter inputs, and the derived
//! conversion display value. Every input mutation funnels through one
//! recompute step, so the derived value can never go stale. The TUI
//! reads this state; it never computes times itself.

pub mod convert;
pub mod error;
pub mod registry;
pub mod watchlist;

use chrono::{DateTime, Local};
use tracing::warn;

use crate::clock::Clock;
use crate::config::BoardConfig;

pub use convert::{convert, format_zone_time, TimeOfDay};
pub use error::{BoardError, BoardResult};
pub use registry::TimezoneEntry;
pub use watchlist::WatchList;

/// Placeholder shown when a conversion cannot be computed.
pub const INVALID_TIME_PLACEHOLDER: &str = "Invalid time format";

/// Placeholder shown on a board row whose zone id does not resolve.
pub const INVALID_ZONE_PLACEHOLDER: &str = "--:--:--";

/// The derived converter display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// No time entered — nothing to show, not an error.
    Empty,
    /// A formatted time in the target zone.
    Time(String),
    /// A user-visible placeholder for a failed conversion.
    Invalid(String),
}

/// One rendered watch-list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRow {
    /// Curated label, or the raw id when the zone is not in the table.
    pub label: String,
    /// The zone id as stored in the watch list.
    pub id: String,
    /// Current time in that zone, or [`INVALID_ZONE_PLACEHOLDER`].
    pub time: String,
}

/// Owned session state: watch list + converter inputs + derived value.
pub struct Board {
    clock: Box<dyn Clock>,
    watchlist: WatchList,
    source: String,
    target: String,
    time_input: String,
    conversion: Conversion,
}

impl Board {
    /// Build a board seeded from config, with nothing entered yet.
    pub fn new(clock: Box<dyn Clock>, config: &BoardConfig) -> Self {
        Self {
            clock,
            watchlist: WatchList::from_zones(config.zones.iter().cloned()),
            source: config.source.clone(),
            target: config.target.clone(),
            time_input: String::new(),
            conversion: Conversion::Empty,
        }
    }

    /// Current instant from the board's clock.
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn watchlist(&self) -> &WatchList {
        &self.watchlist
    }

    /// Add a zone to the watch list. Empty or duplicate ids are no-ops.
    pub fn add_zone(&mut self, id: &str) -> bool {
        self.watchlist.add(id)
    }

    /// Remove a zone from the watch list. Absent ids are no-ops.
    pub fn remove_zone(&mut self, id: &str) -> bool {
        self.watchlist.remove(id)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn time_input(&self) -> &str {
        &self.time_input
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    pub fn set_source(&mut self, id: String) {
        self.source = id;
        self.recompute();
    }

    pub fn set_target(&mut self, id: String) {
        self.target = id;
        self.recompute();
    }

    pub fn set_time_input(&mut self, input: String) {
        self.time_input = input;
        self.recompute();
    }

    /// Recompute the derived conversion from the current inputs.
    ///
    /// Empty input is the Empty state, never an error. A parse or
    /// formatting failure becomes the user-visible placeholder and a
    /// warn log; it never propagates.
    fn recompute(&mut self) {
        if self.time_input.is_empty() {
            self.conversion = Conversion::Empty;
            return;
        }
        let result = self
            .time_input
            .parse::<TimeOfDay>()
            .and_then(|time| convert(self.clock.now(), time, &self.source, &self.target));
        self.conversion = match result {
            Ok(formatted) => Conversion::Time(formatted),
            Err(e) => {
                warn!("conversion failed: {e}");
                Conversion::Invalid(INVALID_TIME_PLACEHOLDER.to_string())
            }
        };
    }

    /// Render the watch list at the current instant: one row per zone,
    /// insertion order. A zone id that does not resolve degrades to a
    /// placeholder instead of failing the whole view.
    pub fn zone_rows(&self) -> Vec<ZoneRow> {
        let now = self.clock.now();
        self.watchlist
            .iter()
            .map(|id| ZoneRow {
                label: registry::lookup_label(id).to_string(),
                id: id.to_string(),
                time: format_zone_time(now, id).unwrap_or_else(|e| {
                    warn!("cannot display zone: {e}");
                    INVALID_ZONE_PLACEHOLDER.to_string()
                }),
            })
            .collect()
    }
}
