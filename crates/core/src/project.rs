//! Project status set and field validation rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Project lifecycle status.
///
/// Discriminants match the 1-based seed order of the `project_statuses`
/// lookup table. Mirrors the stage status set plus `Cancelled`, which only
/// applies at the project level.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    NotStarted = 1,
    Ongoing = 2,
    Completed = 3,
    #[serde(rename = "On Hold")]
    OnHold = 4,
    Delayed = 5,
    Cancelled = 6,
}

impl ProjectStatus {
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
            6 => Some(Self::Cancelled),
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
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status a newly created project starts in: `Ongoing` if its start date is
/// today or earlier, otherwise `Not Started`.
pub fn initial_status(start_date: NaiveDate, today: NaiveDate) -> ProjectStatus {
    if start_date <= today {
        ProjectStatus::Ongoing
    } else {
        ProjectStatus::NotStarted
    }
}

/// Borrowed view of the scalar fields shared by project create and update
/// payloads, used for validation.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFields<'a> {
    pub name: Option<&'a str>,
    pub location: Option<&'a str>,
    pub responsible_person: Option<&'a str>,
    pub category_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub expected_completion: Option<NaiveDate>,
    pub budget: Option<f64>,
}

/// Collect every rule violation for the scalar fields.
///
/// Violations accumulate rather than short-circuiting so one round trip
/// reports everything that is wrong with the submission.
pub fn field_violations(fields: &ProjectFields<'_>) -> Vec<String> {
    let mut violations = Vec::new();

    if fields.name.map_or(true, |n| n.trim().is_empty()) {
        violations.push("name is required".to_string());
    }
    if fields.location.map_or(true, |l| l.trim().is_empty()) {
        violations.push("location is required".to_string());
    }
    if fields
        .responsible_person
        .map_or(true, |p| p.trim().is_empty())
    {
        violations.push("responsible person is required".to_string());
    }
    if fields.category_id.is_none() {
        violations.push("category is required".to_string());
    }

    match (fields.start_date, fields.expected_completion) {
        (None, _) => violations.push("start date is required".to_string()),
        (_, None) => violations.push("expected completion date is required".to_string()),
        (Some(start), Some(expected)) if start >= expected => {
            violations.push("start date must be before the expected completion date".to_string());
        }
        _ => {}
    }

    if let Some(budget) = fields.budget {
        if !budget.is_finite() || budget < 0.0 {
            violations.push("budget must be a non-negative amount".to_string());
        }
    }

    violations
}

/// Collect violations for a list of stage names, 1-indexed in messages.
pub fn stage_name_violations<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .enumerate()
        .filter(|(_, name)| name.trim().is_empty())
        .map(|(i, _)| format!("stage {} needs a name", i + 1))
        .collect()
}

/// Turn an accumulated violation list into a single aggregated error.
pub fn ensure_valid(violations: Vec<String>) -> Result<(), CoreError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(violations.join("; ")))
    }
}
