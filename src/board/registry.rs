//! Curated timezone table — read-only reference data.
//!
//! Maps human-readable labels to IANA zone ids for the add picker and
//! the converter's source/target selectors. The table is a convenience
//! subset, not a validity constraint: the watch list accepts any zone
//! id, and display of an id outside the table falls back to the id
//! itself.

/// One curated label/id pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub label: &'static str,
    pub id: &'static str,
}

/// The curated table, in picker order. Ids are unique.
const CURATED: &[TimezoneEntry] = &[
    TimezoneEntry { label: "United States (New York)", id: "America/New_York" },
    TimezoneEntry { label: "United States (Los Angeles)", id: "America/Los_Angeles" },
    TimezoneEntry { label: "United Kingdom (London)", id: "Europe/London" },
    TimezoneEntry { label: "Germany (Berlin)", id: "Europe/Berlin" },
    TimezoneEntry { label: "Japan (Tokyo)", id: "Asia/Tokyo" },
    TimezoneEntry { label: "China (Shanghai)", id: "Asia/Shanghai" },
    TimezoneEntry { label: "India (Kolkata)", id: "Asia/Kolkata" },
    TimezoneEntry { label: "Australia (Sydney)", id: "Australia/Sydney" },
    TimezoneEntry { label: "Brazil (Sao Paulo)", id: "America/Sao_Paulo" },
    TimezoneEntry { label: "South Africa (Johannesburg)", id: "Africa/Johannesburg" },
    TimezoneEntry { label: "Iran (Tehran)", id: "Asia/Tehran" },
    TimezoneEntry { label: "Netherlands (Amsterdam)", id: "Europe/Amsterdam" },
    TimezoneEntry { label: "Switzerland (Zurich)", id: "Europe/Zurich" },
    TimezoneEntry { label: "Bangladesh (Dhaka)", id: "Asia/Dhaka" },
    TimezoneEntry { label: "North Macedonia (Skopje)", id: "Europe/Skopje" },
    TimezoneEntry { label: "Romania (Bucharest)", id: "Europe/Bucharest" },
    TimezoneEntry { label: "Canada (Toronto)", id: "America/Toronto" },
    TimezoneEntry { label: "Mexico (Mexico City)", id: "America/Mexico_City" },
    TimezoneEntry { label: "France (Paris)", id: "Europe/Paris" },
    TimezoneEntry { label: "Italy (Rome)", id: "Europe/Rome" },
    TimezoneEntry { label: "Russia (Moscow)", id: "Europe/Moscow" },
    TimezoneEntry { label: "Egypt (Cairo)", id: "Africa/Cairo" },
    TimezoneEntry { label: "New Zealand (Auckland)", id: "Pacific/Auckland" },
    TimezoneEntry { label: "Argentina (Buenos Aires)", id: "America/Argentina/Buenos_Aires" },
    TimezoneEntry { label: "Singapore", id: "Asia/Singapore" },
    TimezoneEntry { label: "United Arab Emirates (Dubai)", id: "Asia/Dubai" },
];

/// The full curated table, in display order.
pub fn entries() -> &'static [TimezoneEntry] {
    CURATED
}

/// Curated label for a zone id, or the id itself when not in the table.
/// Total — never fails, never returns an empty string for a non-empty id.
pub fn lookup_label(id: &str) -> &str {
    CURATED
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.label)
        .unwrap_or(id)
}
