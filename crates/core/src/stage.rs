//! Stage status set and the date transition engine.
//!
//! A project is broken into named stages, each carrying a status and an
//! optional start/end date pair. Whenever a stage changes status, the engine
//! decides what happens to its dates. It is a pure function over
//! (old status, new status, current dates, today) so it can be exercised
//! without a database.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stage lifecycle status.
///
/// Discriminants match the 1-based seed order of the `stage_statuses` lookup
/// table. The serde names are the human-readable labels carried on the wire;
/// anything outside this set fails deserialization.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    #[serde(rename = "Not Started")]
    NotStarted = 1,
    Ongoing = 2,
    Completed = 3,
    #[serde(rename = "On Hold")]
    OnHold = 4,
    Delayed = 5,
}

impl StageStatus {
    /// Return the database status ID.
    pub fn id(self) -> i16 {
        self as i16
    }

    /// Look up a status by its database ID.
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::NotStarted),
            2 => Some(Self::Ongoing),
            3 => Some(Self::Completed),
            4 => Some(Self::OnHold),
            5 => Some(Self::Delayed),
            _ => None,
        }
    }

    /// Human-readable label, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Delayed => "Delayed",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage's start/end date pair. `None` means "not yet determined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageDates {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl StageDates {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

/// Compute the date pair a stage should carry after a status change.
///
/// `old` is `None` for a brand-new stage, in which case the dates are derived
/// from the new status alone. For existing stages only the transitions below
/// touch the dates; every other combination keeps `current` as-is. A stage
/// that has reached `Completed` is terminal: any attempt to move it elsewhere
/// is rejected with a conflict so the surrounding transaction rolls back.
///
/// Invariants upheld: `end` is only set when the new status is `Completed`,
/// and `start` is never cleared once the stage has been worked on (except by
/// the explicit `Not Started -> On Hold/Delayed` reset, which happens before
/// any work started).
pub fn next_stage_dates(
    old: Option<StageStatus>,
    new: StageStatus,
    current: StageDates,
    today: NaiveDate,
) -> Result<StageDates, CoreError> {
    use StageStatus::*;

    let Some(old) = old else {
        // Brand-new stage: no history, dates come from the status alone.
        return Ok(match new {
            NotStarted | OnHold | Delayed => StageDates::default(),
            Ongoing => StageDates::new(Some(today), None),
            Completed => StageDates::new(Some(today), Some(today)),
        });
    };

    if old == Completed && new != Completed {
        return Err(CoreError::Conflict(format!(
            "Stage is already Completed and cannot move to {new}"
        )));
    }

    Ok(match (old, new) {
        (NotStarted, Ongoing) => StageDates::new(Some(today), None),
        (NotStarted, Completed) => StageDates::new(Some(today), Some(today)),
        (NotStarted, OnHold | Delayed) => StageDates::default(),
        (Ongoing, Completed) => StageDates::new(current.start, Some(today)),
        (Ongoing, OnHold | Delayed) => StageDates::new(current.start, None),
        (OnHold | Delayed, Ongoing) => StageDates::new(current.start.or(Some(today)), None),
        (OnHold | Delayed, Completed) => {
            StageDates::new(current.start.or(Some(today)), Some(today))
        }
        // Same-status updates and unlisted transitions keep the dates.
        _ => current,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn dates(start: Option<&str>, end: Option<&str>) -> StageDates {
        StageDates::new(start.map(d), end.map(d))
    }

    const TODAY: &str = "2024-03-01";

    #[test]
    fn status_ids_match_seed_data() {
        assert_eq!(StageStatus::NotStarted.id(), 1);
        assert_eq!(StageStatus::Ongoing.id(), 2);
        assert_eq!(StageStatus::Completed.id(), 3);
        assert_eq!(StageStatus::OnHold.id(), 4);
        assert_eq!(StageStatus::Delayed.id(), 5);
        assert_eq!(StageStatus::from_id(4), Some(StageStatus::OnHold));
        assert_eq!(StageStatus::from_id(0), None);
    }

    #[test]
    fn status_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&StageStatus::OnHold).unwrap();
        assert_eq!(json, "\"On Hold\"");
        let back: StageStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StageStatus::OnHold);
    }

    #[test]
    fn unknown_status_label_is_rejected() {
        let result: Result<StageStatus, _> = serde_json::from_str("\"Finished\"");
        assert!(result.is_err());
    }

    #[test]
    fn new_stage_not_started_has_no_dates() {
        let result =
            next_stage_dates(None, StageStatus::NotStarted, StageDates::default(), d(TODAY))
                .unwrap();
        assert_eq!(result, dates(None, None));
    }

    #[test]
    fn new_stage_on_hold_and_delayed_have_no_dates() {
        for status in [StageStatus::OnHold, StageStatus::Delayed] {
            let result = next_stage_dates(None, status, StageDates::default(), d(TODAY)).unwrap();
            assert_eq!(result, dates(None, None));
        }
    }

    #[test]
    fn new_stage_ongoing_starts_today() {
        let result =
            next_stage_dates(None, StageStatus::Ongoing, StageDates::default(), d(TODAY)).unwrap();
        assert_eq!(result, dates(Some(TODAY), None));
    }

    #[test]
    fn new_stage_completed_starts_and_ends_today() {
        let result =
            next_stage_dates(None, StageStatus::Completed, StageDates::default(), d(TODAY))
                .unwrap();
        assert_eq!(result, dates(Some(TODAY), Some(TODAY)));
    }

    #[test]
    fn not_started_to_completed_sets_both_dates() {
        let result = next_stage_dates(
            Some(StageStatus::NotStarted),
            StageStatus::Completed,
            StageDates::default(),
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, dates(Some(TODAY), Some(TODAY)));
    }

    #[test]
    fn not_started_to_on_hold_clears_dates() {
        let result = next_stage_dates(
            Some(StageStatus::NotStarted),
            StageStatus::OnHold,
            StageDates::default(),
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, dates(None, None));
    }

    #[test]
    fn ongoing_to_completed_keeps_start_sets_end() {
        let result = next_stage_dates(
            Some(StageStatus::Ongoing),
            StageStatus::Completed,
            dates(Some("2024-01-01"), None),
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, dates(Some("2024-01-01"), Some(TODAY)));
    }

    #[test]
    fn ongoing_to_paused_keeps_start_clears_end() {
        for status in [StageStatus::OnHold, StageStatus::Delayed] {
            let result = next_stage_dates(
                Some(StageStatus::Ongoing),
                status,
                dates(Some("2024-01-01"), Some("2024-02-01")),
                d(TODAY),
            )
            .unwrap();
            assert_eq!(result, dates(Some("2024-01-01"), None));
        }
    }

    #[test]
    fn on_hold_to_ongoing_backfills_missing_start() {
        let result = next_stage_dates(
            Some(StageStatus::OnHold),
            StageStatus::Ongoing,
            StageDates::default(),
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, dates(Some(TODAY), None));
    }

    #[test]
    fn on_hold_to_ongoing_preserves_existing_start() {
        let result = next_stage_dates(
            Some(StageStatus::OnHold),
            StageStatus::Ongoing,
            dates(Some("2024-01-05"), None),
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, dates(Some("2024-01-05"), None));
    }

    #[test]
    fn delayed_to_completed_backfills_start_and_sets_end() {
        let result = next_stage_dates(
            Some(StageStatus::Delayed),
            StageStatus::Completed,
            StageDates::default(),
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, dates(Some(TODAY), Some(TODAY)));
    }

    #[test]
    fn same_status_is_a_noop() {
        let current = dates(Some("2024-01-01"), None);
        let first = next_stage_dates(
            Some(StageStatus::Ongoing),
            StageStatus::Ongoing,
            current,
            d(TODAY),
        )
        .unwrap();
        let second = next_stage_dates(
            Some(StageStatus::Ongoing),
            StageStatus::Ongoing,
            first,
            d(TODAY),
        )
        .unwrap();
        assert_eq!(first, current);
        assert_eq!(second, current);
    }

    #[test]
    fn completed_to_completed_keeps_both_dates() {
        let current = dates(Some("2024-01-01"), Some("2024-02-01"));
        let result = next_stage_dates(
            Some(StageStatus::Completed),
            StageStatus::Completed,
            current,
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, current);
    }

    #[test]
    fn completed_stage_rejects_regression() {
        for target in [
            StageStatus::NotStarted,
            StageStatus::Ongoing,
            StageStatus::OnHold,
            StageStatus::Delayed,
        ] {
            let result = next_stage_dates(
                Some(StageStatus::Completed),
                target,
                dates(Some("2024-01-01"), Some("2024-02-01")),
                d(TODAY),
            );
            assert_matches!(result, Err(CoreError::Conflict(_)));
        }
    }

    #[test]
    fn unlisted_transition_leaves_dates_unchanged() {
        // Ongoing -> Not Started is not in the table; dates stay put.
        let current = dates(Some("2024-01-01"), None);
        let result = next_stage_dates(
            Some(StageStatus::Ongoing),
            StageStatus::NotStarted,
            current,
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, current);

        // On Hold <-> Delayed likewise.
        let result = next_stage_dates(
            Some(StageStatus::OnHold),
            StageStatus::Delayed,
            current,
            d(TODAY),
        )
        .unwrap();
        assert_eq!(result, current);
    }
}
