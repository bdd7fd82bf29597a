//! Tracker service
//!
//! Owns one user's state (profile and history) for the duration of a command
//! and implements the user-facing actions on top of the accounting engine:
//! profile updates, logging and removing foods, day resets, fit-portion
//! sizing, and the daily summary.

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::accounting::{aggregate, estimate_target, find_food, portion_for_budget, remaining, scale};
use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::error::{FitcoachError, FitcoachResult};
use crate::lookup::FoodLookup;
use crate::models::{
    FoodItem, History, LogEntry, Nutrients, Profile, ProfileUpdate, UserState,
};
use crate::storage::{FoodTableSource, Storage};

/// Where a resolved food came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodOrigin {
    /// The reference table
    Table,
    /// The external lookup
    Lookup,
}

/// Target, intake and what is left for one day
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub target: i64,
    pub eaten: Nutrients,
    pub remaining: i64,
    pub entries: Vec<LogEntry>,
}

/// Result of sizing a portion to a calorie budget
#[derive(Debug, Clone)]
pub struct FitPortion {
    pub food: FoodItem,
    /// Budget the portion was sized against
    pub budget: f64,
    /// True when the caller's override was used instead of today's remaining
    pub from_override: bool,
    /// Zero when there is no room left
    pub grams: u32,
}

/// Energy eaten on one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub kcal: f64,
    pub entry_count: usize,
}

/// Longest period `daily_totals` accepts
pub const MAX_STATS_DAYS: u32 = 3660;

/// Service for one user's tracking state
pub struct TrackerService<'a> {
    storage: &'a Storage,
    user_id: String,
    state: UserState,
    foods: Vec<FoodItem>,
    food_source: FoodTableSource,
    lookup: Option<Box<dyn FoodLookup + 'a>>,
}

impl<'a> TrackerService<'a> {
    /// Load the user's state and the food table
    ///
    /// A missing or unreadable state record starts the user from the default
    /// profile and an empty history; this is never reported as an error.
    pub fn open(
        storage: &'a Storage,
        user_id: impl Into<String>,
        lookup: Option<Box<dyn FoodLookup + 'a>>,
    ) -> Self {
        let user_id = user_id.into();

        let state = match storage.users.load(&user_id) {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!(user = %user_id, "no stored state, using defaults");
                UserState::default()
            }
            Err(e) => {
                warn!(user = %user_id, error = %e, "stored state unreadable, using defaults");
                UserState::default()
            }
        };

        let (foods, food_source) = storage.foods.load_or_builtin();

        Self {
            storage,
            user_id,
            state,
            foods,
            food_source,
            lookup,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn profile(&self) -> &Profile {
        &self.state.profile
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// The reference food table in lookup order
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn food_source(&self) -> &FoodTableSource {
        &self.food_source
    }

    /// Today's calorie target for the current profile
    pub fn target(&self) -> i64 {
        estimate_target(&self.state.profile)
    }

    /// Apply a partial profile update
    ///
    /// Nothing changes when validation fails.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> FitcoachResult<Profile> {
        let before = self.state.profile.clone();
        let after = before
            .apply(update)
            .map_err(|e| FitcoachError::Validation(e.to_string()))?;

        self.state.profile = after.clone();
        self.save()?;

        let diff = match (serde_json::to_value(&before), serde_json::to_value(&after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        info!(user = %self.user_id, changes = diff.as_deref().unwrap_or("none"), "profile updated");

        self.storage.log_audit(&AuditEntry::update(
            &self.user_id,
            EntityType::Profile,
            self.user_id.clone(),
            &before,
            &after,
            diff,
        ))?;

        Ok(after)
    }

    /// Resolve a food name: the table first, then the external lookup
    pub fn resolve_food(&self, name: &str) -> FitcoachResult<(FoodItem, FoodOrigin)> {
        if let Some(food) = find_food(name, &self.foods) {
            return Ok((food.clone(), FoodOrigin::Table));
        }

        if name.trim().is_empty() {
            return Err(FitcoachError::food_not_found(name));
        }

        if let Some(lookup) = &self.lookup {
            match lookup.search(name) {
                Ok(candidates) => {
                    if let Some(food) = candidates.into_iter().find(|f| f.kcal100 > 0.0) {
                        debug!(query = name, found = %food.name, "resolved via lookup");
                        return Ok((food, FoodOrigin::Lookup));
                    }
                }
                Err(e) => warn!(query = name, error = %e, "food lookup failed"),
            }
        }

        Err(FitcoachError::food_not_found(name))
    }

    /// Search the table and the lookup for candidates without logging anything
    pub fn search_foods(&self, query: &str) -> Vec<(FoodItem, FoodOrigin)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<(FoodItem, FoodOrigin)> = self
            .foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .map(|f| (f.clone(), FoodOrigin::Table))
            .collect();

        if let Some(lookup) = &self.lookup {
            match lookup.search(query) {
                Ok(found) => results.extend(found.into_iter().map(|f| (f, FoodOrigin::Lookup))),
                Err(e) => warn!(query, error = %e, "food lookup failed"),
            }
        }

        results
    }

    /// Log `grams` of the named food on `date`
    pub fn log_food(
        &mut self,
        name: &str,
        grams: f64,
        date: NaiveDate,
    ) -> FitcoachResult<(LogEntry, FoodOrigin)> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(FitcoachError::InvalidQuantity(
                "grams must be greater than zero".into(),
            ));
        }

        let (food, origin) = self.resolve_food(name)?;
        let entry = LogEntry::new(food.name.clone(), grams, scale(&food, grams));

        self.state.history.day_mut(date).push(entry.clone());
        self.save()?;

        info!(user = %self.user_id, %date, food = %entry.name, grams, kcal = entry.nutrients.kcal, "logged food");
        self.storage.log_audit(&AuditEntry::create(
            &self.user_id,
            EntityType::LogEntry,
            entry.id.to_string(),
            Some(entry.name.clone()),
            &entry,
        ))?;

        Ok((entry, origin))
    }

    /// Remove one entry from `date`'s log
    ///
    /// `reference` is a 1-based position or an entry id (full or short form).
    pub fn remove_log_entry(&mut self, date: NaiveDate, reference: &str) -> FitcoachResult<LogEntry> {
        let id = self
            .state
            .history
            .day(date)
            .and_then(|day| day.resolve(reference))
            .ok_or_else(|| FitcoachError::entry_not_found(reference))?;

        let removed = self
            .state
            .history
            .day_mut(date)
            .remove(id)
            .ok_or_else(|| FitcoachError::entry_not_found(reference))?;
        self.save()?;

        info!(user = %self.user_id, %date, food = %removed.name, "removed log entry");
        self.storage.log_audit(&AuditEntry::delete(
            &self.user_id,
            EntityType::LogEntry,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        ))?;

        Ok(removed)
    }

    /// Empty `date`'s log, returning how many entries were removed
    pub fn reset_day(&mut self, date: NaiveDate) -> FitcoachResult<usize> {
        let day = self.state.history.day_mut(date);
        let before = day.clone();
        day.clear();
        self.save()?;

        info!(user = %self.user_id, %date, removed = before.len(), "day reset");
        self.storage.log_audit(&AuditEntry::delete(
            &self.user_id,
            EntityType::DailyLog,
            date.to_string(),
            None,
            &before,
        ))?;

        Ok(before.len())
    }

    /// Largest portion of the named food that fits the budget
    ///
    /// The override budget is used only when it is positive; otherwise the
    /// portion is sized against what is left of `date`'s target.
    pub fn compute_fit_portion(
        &self,
        name: &str,
        budget_override: Option<f64>,
        date: NaiveDate,
    ) -> FitcoachResult<FitPortion> {
        let (food, _) = self.resolve_food(name)?;

        let (budget, from_override) = match budget_override {
            Some(budget) if budget > 0.0 => (budget, true),
            _ => (self.summary(date).remaining as f64, false),
        };

        let grams = portion_for_budget(&food, budget);
        Ok(FitPortion {
            food,
            budget,
            from_override,
            grams,
        })
    }

    /// Target, totals and remaining budget for `date`
    pub fn summary(&self, date: NaiveDate) -> DaySummary {
        let entries = self.state.history.entries_for(date).to_vec();
        let eaten = aggregate(&entries);
        let target = self.target();

        DaySummary {
            date,
            target,
            eaten,
            remaining: remaining(target, eaten.kcal),
            entries,
        }
    }

    /// Energy per day for the `days` days ending at `end`, oldest first
    ///
    /// Days without entries are included with zero. The window stops early at
    /// the start of the calendar.
    pub fn daily_totals(&self, end: NaiveDate, days: u32) -> FitcoachResult<Vec<DayTotal>> {
        if days > MAX_STATS_DAYS {
            return Err(FitcoachError::Validation(format!(
                "stats period must be at most {} days, got {}",
                MAX_STATS_DAYS, days
            )));
        }

        let mut totals: Vec<DayTotal> = (0..u64::from(days))
            .map_while(|offset| end.checked_sub_days(Days::new(offset)))
            .map(|date| {
                let entries = self.state.history.entries_for(date);
                DayTotal {
                    date,
                    kcal: aggregate(entries).kcal,
                    entry_count: entries.len(),
                }
            })
            .collect();
        totals.reverse();

        Ok(totals)
    }

    fn save(&self) -> FitcoachResult<()> {
        self.storage.users.save(&self.user_id, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FitcoachPaths;
    use crate::lookup::InMemoryLookup;
    use crate::models::Goal;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FitcoachPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone(), paths.foods_file()).unwrap();
        (temp_dir, storage)
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn yogurt_lookup() -> Option<Box<dyn FoodLookup>> {
        Some(Box::new(InMemoryLookup::new(vec![FoodItem::new(
            "Greek yogurt 2%",
            73.0,
            10.0,
            2.0,
            3.6,
        )
        .unwrap()])))
    }

    #[test]
    fn test_open_defaults() {
        let (_temp, storage) = create_test_storage();
        let tracker = TrackerService::open(&storage, "guest", None);

        assert_eq!(tracker.profile(), &Profile::default());
        assert!(tracker.history().is_empty());
        assert_eq!(tracker.food_source(), &FoodTableSource::Builtin);
        assert_eq!(tracker.target(), 1674);
    }

    #[test]
    fn test_open_corrupt_state_uses_defaults() {
        let (_temp, storage) = create_test_storage();
        let path = storage.users.path_for("guest");
        std::fs::write(&path, "{ broken").unwrap();

        let tracker = TrackerService::open(&storage, "guest", None);
        assert_eq!(tracker.profile(), &Profile::default());
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn test_log_food_persists() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");

        let mut tracker = TrackerService::open(&storage, "guest", None);
        let (entry, origin) = tracker.log_food("грудка", 150.0, date).unwrap();

        assert_eq!(origin, FoodOrigin::Table);
        assert_eq!(entry.name, "Куриная грудка, варёная");
        assert_eq!(entry.nutrients.kcal, 247.5);

        let reopened = TrackerService::open(&storage, "guest", None);
        assert_eq!(reopened.history().entries_for(date), &[entry]);
    }

    #[test]
    fn test_log_food_invalid_quantity() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let mut tracker = TrackerService::open(&storage, "guest", None);

        for grams in [0.0, -10.0, f64::NAN] {
            let err = tracker.log_food("Банан", grams, date).unwrap_err();
            assert!(matches!(err, FitcoachError::InvalidQuantity(_)));
        }
        assert!(tracker.history().entries_for(date).is_empty());
        assert!(!storage.users.exists("guest"));
    }

    #[test]
    fn test_log_food_not_found() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let mut tracker = TrackerService::open(&storage, "guest", None);

        let err = tracker.log_food("пицца", 100.0, date).unwrap_err();
        assert!(matches!(err, FitcoachError::FoodNotFound(_)));
        assert!(tracker.history().day(date).is_none());
    }

    #[test]
    fn test_log_food_via_lookup() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let mut tracker = TrackerService::open(&storage, "guest", yogurt_lookup());

        let (entry, origin) = tracker.log_food("yogurt", 200.0, date).unwrap();
        assert_eq!(origin, FoodOrigin::Lookup);
        assert_eq!(entry.name, "Greek yogurt 2%");
        assert_eq!(entry.nutrients.kcal, 146.0);
    }

    #[test]
    fn test_lookup_failure_is_not_found() {
        let (_temp, storage) = create_test_storage();
        let mut tracker = TrackerService::open(
            &storage,
            "guest",
            Some(Box::new(InMemoryLookup::unavailable())),
        );

        let err = tracker.log_food("yogurt", 200.0, day("2025-03-01")).unwrap_err();
        assert!(matches!(err, FitcoachError::FoodNotFound(_)));
    }

    #[test]
    fn test_remove_log_entry() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let mut tracker = TrackerService::open(&storage, "guest", None);

        tracker.log_food("Банан", 120.0, date).unwrap();
        let (apple, _) = tracker.log_food("Яблоко", 200.0, date).unwrap();

        let removed = tracker.remove_log_entry(date, "1").unwrap();
        assert_eq!(removed.name, "Банан");

        let removed = tracker.remove_log_entry(date, &apple.id.to_string()).unwrap();
        assert_eq!(removed.id, apple.id);

        assert!(tracker.history().entries_for(date).is_empty());
        let err = tracker.remove_log_entry(date, "1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_from_unknown_day() {
        let (_temp, storage) = create_test_storage();
        let mut tracker = TrackerService::open(&storage, "guest", None);
        assert!(tracker.remove_log_entry(day("2025-03-01"), "1").is_err());
    }

    #[test]
    fn test_reset_day_only_touches_that_day() {
        let (_temp, storage) = create_test_storage();
        let mut tracker = TrackerService::open(&storage, "guest", None);

        tracker.log_food("Банан", 120.0, day("2025-03-01")).unwrap();
        tracker.log_food("Банан", 120.0, day("2025-03-02")).unwrap();
        tracker.log_food("Яблоко", 100.0, day("2025-03-02")).unwrap();

        assert_eq!(tracker.reset_day(day("2025-03-02")).unwrap(), 2);
        assert!(tracker.history().entries_for(day("2025-03-02")).is_empty());
        assert_eq!(tracker.history().entries_for(day("2025-03-01")).len(), 1);
    }

    #[test]
    fn test_update_profile_changes_target() {
        let (_temp, storage) = create_test_storage();
        let mut tracker = TrackerService::open(&storage, "guest", None);

        let update = ProfileUpdate {
            goal: Some(Goal::Gain),
            ..Default::default()
        };
        tracker.update_profile(&update).unwrap();
        assert_eq!(tracker.target(), 1925);

        let reopened = TrackerService::open(&storage, "guest", None);
        assert_eq!(reopened.profile().goal, Goal::Gain);

        let audit = storage.audit().read_recent(1, Some("guest")).unwrap();
        assert_eq!(audit[0].entity_type, EntityType::Profile);
        assert!(audit[0].diff_summary.as_deref().unwrap().contains("goal"));
    }

    #[test]
    fn test_update_profile_rejects_invalid() {
        let (_temp, storage) = create_test_storage();
        let mut tracker = TrackerService::open(&storage, "guest", None);

        let update = ProfileUpdate {
            weight: Some(0.0),
            goal: Some(Goal::Lose),
            ..Default::default()
        };
        let err = tracker.update_profile(&update).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tracker.profile(), &Profile::default());
    }

    #[test]
    fn test_summary() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let mut tracker = TrackerService::open(&storage, "guest", None);

        tracker.log_food("грудка", 150.0, date).unwrap();
        let summary = tracker.summary(date);

        assert_eq!(summary.target, 1674);
        assert_eq!(summary.eaten.kcal, 247.5);
        assert_eq!(summary.remaining, 1427);
        assert_eq!(summary.entries.len(), 1);
    }

    #[test]
    fn test_fit_portion_uses_remaining() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let tracker = TrackerService::open(&storage, "guest", None);

        let fit = tracker.compute_fit_portion("грудка", None, date).unwrap();
        assert!(!fit.from_override);
        assert_eq!(fit.budget, 1674.0);
        assert_eq!(fit.grams, 1014);
    }

    #[test]
    fn test_fit_portion_override_precedence() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let tracker = TrackerService::open(&storage, "guest", None);

        let fit = tracker.compute_fit_portion("грудка", Some(500.0), date).unwrap();
        assert!(fit.from_override);
        assert_eq!(fit.grams, 303);

        // Non-positive override falls back to the remaining budget
        for value in [0.0, -100.0] {
            let fit = tracker.compute_fit_portion("грудка", Some(value), date).unwrap();
            assert!(!fit.from_override);
            assert_eq!(fit.budget, 1674.0);
        }
    }

    #[test]
    fn test_fit_portion_exhausted() {
        let (_temp, storage) = create_test_storage();
        let date = day("2025-03-01");
        let mut tracker = TrackerService::open(&storage, "guest", None);

        tracker.log_food("Арахисовая паста", 400.0, date).unwrap();
        let fit = tracker.compute_fit_portion("Банан", None, date).unwrap();
        assert_eq!(fit.budget, 0.0);
        assert_eq!(fit.grams, 0);
    }

    #[test]
    fn test_daily_totals_zero_fill() {
        let (_temp, storage) = create_test_storage();
        let mut tracker = TrackerService::open(&storage, "guest", None);

        tracker.log_food("Банан", 100.0, day("2025-03-05")).unwrap();
        tracker.log_food("Яблоко", 100.0, day("2025-03-07")).unwrap();
        tracker.log_food("Яблоко", 100.0, day("2025-02-01")).unwrap();

        let totals = tracker.daily_totals(day("2025-03-07"), 7).unwrap();
        assert_eq!(totals.len(), 7);
        assert_eq!(totals[0].date, day("2025-03-01"));
        assert_eq!(totals[6].date, day("2025-03-07"));
        assert_eq!(totals[4].kcal, 96.0);
        assert_eq!(totals[5].kcal, 0.0);
        assert_eq!(totals[6].kcal, 52.0);
        assert_eq!(totals.iter().map(|t| t.entry_count).sum::<usize>(), 2);
    }

    #[test]
    fn test_daily_totals_rejects_huge_period() {
        let (_temp, storage) = create_test_storage();
        let tracker = TrackerService::open(&storage, "guest", None);

        let err = tracker
            .daily_totals(day("2025-03-01"), 200_000_000)
            .unwrap_err();
        assert!(err.is_validation());

        let totals = tracker.daily_totals(day("2025-03-01"), MAX_STATS_DAYS).unwrap();
        assert_eq!(totals.len(), MAX_STATS_DAYS as usize);
        assert_eq!(totals.last().unwrap().date, day("2025-03-01"));
    }

    #[test]
    fn test_daily_totals_stops_at_calendar_start() {
        let (_temp, storage) = create_test_storage();
        let tracker = TrackerService::open(&storage, "guest", None);

        let end = NaiveDate::MIN.checked_add_days(Days::new(2)).unwrap();
        let totals = tracker.daily_totals(end, 7).unwrap();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].date, NaiveDate::MIN);
        assert_eq!(totals[2].date, end);
    }

    #[test]
    fn test_search_foods_combines_sources() {
        let (_temp, storage) = create_test_storage();
        let tracker = TrackerService::open(&storage, "guest", yogurt_lookup());

        let results = tracker.search_foods("рис");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, FoodOrigin::Table);

        let results = tracker.search_foods("yogurt");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, FoodOrigin::Lookup);
    }
}
