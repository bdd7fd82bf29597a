//! Food log models
//!
//! A `LogEntry` is a snapshot of one food eaten: name, grams and the nutrients
//! derived for that quantity at logging time. Entries are grouped per local
//! calendar date into a `DailyLog`, and the `History` maps dates to days.

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::EntryId;
use super::nutrients::Nutrients;
use super::profile::Profile;

/// One logged portion of food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier (assigned on load for records written without one)
    #[serde(default)]
    pub id: EntryId,

    /// Food name at the time of logging
    pub name: String,

    /// Grams eaten
    pub grams: f64,

    /// Nutrients for `grams` of the food
    #[serde(flatten)]
    pub nutrients: Nutrients,

    /// When the entry was logged, stored as epoch milliseconds
    #[serde(
        rename = "ts",
        with = "chrono::serde::ts_milliseconds",
        default = "Utc::now"
    )]
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(name: impl Into<String>, grams: f64, nutrients: Nutrients) -> Self {
        Self {
            id: EntryId::new(),
            name: name.into(),
            grams,
            nutrients,
            // Millisecond precision survives the storage round trip
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Entries for one calendar date, in logging order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyLog(Vec<LogEntry>);

impl DailyLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Entries in logging order
    pub fn entries(&self) -> &[LogEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.0.push(entry);
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Resolve a user reference to an entry id
    ///
    /// Accepts a 1-based position in logging order, a full UUID, or the short
    /// `ent-xxxxxxxx` form (any unambiguous prefix). A bare number is always a
    /// position; an all-digit id prefix needs the `ent-` prefix.
    pub fn resolve(&self, reference: &str) -> Option<EntryId> {
        let reference = reference.trim();

        if let Ok(position) = reference.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| self.0.get(index))
                .map(|entry| entry.id);
        }

        let mut matches = self.0.iter().filter(|e| e.id.matches(reference));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Some(entry.id),
            _ => None,
        }
    }

    /// Remove the entry with `id`, returning it
    pub fn remove(&mut self, id: EntryId) -> Option<LogEntry> {
        let index = self.0.iter().position(|e| e.id == id)?;
        Some(self.0.remove(index))
    }
}

impl From<Vec<LogEntry>> for DailyLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self(entries)
    }
}

/// Daily logs keyed by ISO date, oldest first; retention is unbounded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(BTreeMap<NaiveDate, DailyLog>);

impl History {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The log for `date`, if anything was ever recorded for it
    pub fn day(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.0.get(&date)
    }

    /// The log for `date`, created empty if missing
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DailyLog {
        self.0.entry(date).or_default()
    }

    /// Entries for `date`, empty if none
    pub fn entries_for(&self, date: NaiveDate) -> &[LogEntry] {
        self.day(date).map(DailyLog::entries).unwrap_or(&[])
    }

    /// Iterate days in date order
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyLog)> {
        self.0.iter()
    }

    /// Number of dates with a stored log
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything persisted for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub history: History,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kcal: f64) -> LogEntry {
        LogEntry::new(name, 100.0, Nutrients::new(kcal, 0.0, 0.0, 0.0))
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve_by_position() {
        let mut log = DailyLog::new();
        log.push(entry("Apple", 52.0));
        log.push(entry("Banana", 96.0));

        assert_eq!(log.resolve("2"), Some(log.entries()[1].id));
        assert_eq!(log.resolve("0"), None);
        assert_eq!(log.resolve("3"), None);
    }

    #[test]
    fn test_resolve_by_id() {
        let mut log = DailyLog::new();
        log.push(entry("Apple", 52.0));
        let id = log.entries()[0].id;

        assert_eq!(log.resolve(&id.to_string()), Some(id));
        assert_eq!(log.resolve(&id.as_uuid().to_string()), Some(id));
        assert_eq!(log.resolve("ent-zzzz"), None);
    }

    #[test]
    fn test_numeric_reference_is_only_a_position() {
        let mut first = entry("Apple", 52.0);
        first.id = "3a0e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let mut second = entry("Banana", 96.0);
        second.id = "12345678-e29b-41d4-a716-446655440000".parse().unwrap();

        let log = DailyLog::from(vec![first.clone(), second.clone()]);

        // Out of range, even though the first id starts with "3"
        assert_eq!(log.resolve("3"), None);
        assert_eq!(log.resolve("12345678"), None);
        assert_eq!(log.resolve("ent-12345678"), Some(second.id));
        assert_eq!(log.resolve("ent-3a0e"), Some(first.id));
        assert_eq!(log.resolve("1"), Some(first.id));
    }

    #[test]
    fn test_remove() {
        let mut log = DailyLog::new();
        log.push(entry("Apple", 52.0));
        log.push(entry("Banana", 96.0));
        let id = log.entries()[0].id;

        let removed = log.remove(id).unwrap();
        assert_eq!(removed.name, "Apple");
        assert_eq!(log.len(), 1);
        assert!(log.remove(id).is_none());
    }

    #[test]
    fn test_history_day_mut_creates_day() {
        let mut history = History::new();
        assert!(history.day(date("2025-03-01")).is_none());

        history.day_mut(date("2025-03-01")).push(entry("Apple", 52.0));
        assert_eq!(history.entries_for(date("2025-03-01")).len(), 1);
        assert!(history.entries_for(date("2025-03-02")).is_empty());
    }

    #[test]
    fn test_history_serializes_iso_keys() {
        let mut history = History::new();
        history.day_mut(date("2025-03-01")).push(entry("Apple", 52.0));

        let json = serde_json::to_value(&history).unwrap();
        assert!(json.get("2025-03-01").is_some());
        assert_eq!(json["2025-03-01"][0]["name"], "Apple");
        assert_eq!(json["2025-03-01"][0]["kcal"], 52.0);
    }

    #[test]
    fn test_entry_without_id_gets_one() {
        let raw = r#"{"name":"Банан","grams":120,"kcal":115.2,"p":1.44,"f":0.36,"c":26.16,"ts":1735732800000}"#;
        let entry: LogEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.name, "Банан");
        assert_eq!(entry.grams, 120.0);
        assert_eq!(entry.nutrients.kcal, 115.2);
        assert_eq!(entry.created_at.timestamp_millis(), 1_735_732_800_000);
        assert!(!entry.id.as_uuid().is_nil());
    }

    #[test]
    fn test_user_state_round_trip() {
        let mut state = UserState::default();
        state.profile.weight = 81.0;
        state.history.day_mut(date("2025-03-01")).push(entry("Apple", 52.0));

        let json = serde_json::to_string(&state).unwrap();
        let loaded: UserState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, state);
    }
}
