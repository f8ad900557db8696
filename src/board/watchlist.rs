//! WatchList — the ordered, duplicate-free set of zone ids on display.
//!
//! Session state only: seeded at startup, mutated by add/remove, never
//! persisted.

/// Zones shown when no config file provides a seed list.
pub const SEED_ZONES: &[&str] = &[
    "Asia/Tehran",
    "Africa/Johannesburg",
    "Europe/Zurich",
    "Europe/Amsterdam",
    "Asia/Dhaka",
    "Europe/Skopje",
    "Europe/Bucharest",
    "America/New_York",
];

/// Ordered sequence of zone ids, duplicates disallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchList {
    zones: Vec<String>,
}

impl Default for WatchList {
    fn default() -> Self {
        Self::from_zones(SEED_ZONES.iter().map(|z| (*z).to_string()))
    }
}

impl WatchList {
    /// Empty watch list.
    pub fn empty() -> Self {
        Self { zones: Vec::new() }
    }

    /// Build from an iterator, dropping empties and duplicates while
    /// preserving first-seen order.
    pub fn from_zones(zones: impl IntoIterator<Item = String>) -> Self {
        let mut list = Self::empty();
        for zone in zones {
            list.add(&zone);
        }
        list
    }

    /// Append a zone id. No-op when the id is empty or already present.
    /// Returns true if the list changed.
    pub fn add(&mut self, id: &str) -> bool {
        if id.is_empty() || self.contains(id) {
            return false;
        }
        self.zones.push(id.to_string());
        true
    }

    /// Remove all occurrences of a zone id. Absent id is a no-op.
    /// Returns true if the list changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.zones.len();
        self.zones.retain(|z| z != id);
        self.zones.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.zones.iter().any(|z| z == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
