//! Project entity model and DTOs.

use chrono::NaiveDate;
use lingkod_core::project::{ProjectFields, ProjectStatus};
use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::ProjectImage;
use crate::models::stage::{ExistingStage, NewStage};
use crate::models::status::StatusId;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub category_id: DbId,
    pub responsible_person: String,
    pub funding_source: Option<String>,
    pub budget: Option<f64>,
    pub start_date: NaiveDate,
    pub expected_completion: NaiveDate,
    pub actual_completion: Option<NaiveDate>,
    pub status_id: StatusId,
    pub progress_percentage: i16,
    pub cancelled_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row joined with its category name, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub category_id: DbId,
    pub category_name: String,
    pub start_date: NaiveDate,
    pub expected_completion: NaiveDate,
    pub status_id: StatusId,
    pub progress_percentage: i16,
    pub image_count: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Required fields are `Option` so validation can report every missing field
/// in one aggregated message instead of failing at deserialization. The
/// project's initial status is derived from `start_date`, never supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<DbId>,
    pub responsible_person: Option<String>,
    pub funding_source: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub expected_completion: Option<NaiveDate>,
    #[serde(default)]
    pub stages: Vec<NewStage>,
}

impl CreateProject {
    /// Borrowed view of the scalar fields for validation.
    pub fn fields(&self) -> ProjectFields<'_> {
        ProjectFields {
            name: self.name.as_deref(),
            location: self.location.as_deref(),
            responsible_person: self.responsible_person.as_deref(),
            category_id: self.category_id,
            start_date: self.start_date,
            expected_completion: self.expected_completion,
            budget: self.budget,
        }
    }
}

/// DTO for the full-replace project update.
///
/// Scalars are a complete replacement set, `existing_stages` and `new_stages`
/// partition the incoming stage list, and `remove_image_ids` names image rows
/// to drop. Unknown payload members (including any client-side progress
/// figure) are ignored; the persisted progress is always recomputed from the
/// stage statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<DbId>,
    pub responsible_person: Option<String>,
    pub funding_source: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub expected_completion: Option<NaiveDate>,
    pub actual_completion: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub existing_stages: Vec<ExistingStage>,
    #[serde(default)]
    pub new_stages: Vec<NewStage>,
    #[serde(default)]
    pub remove_image_ids: Vec<DbId>,
}

impl UpdateProject {
    /// Borrowed view of the scalar fields for validation.
    pub fn fields(&self) -> ProjectFields<'_> {
        ProjectFields {
            name: self.name.as_deref(),
            location: self.location.as_deref(),
            responsible_person: self.responsible_person.as_deref(),
            category_id: self.category_id,
            start_date: self.start_date,
            expected_completion: self.expected_completion,
            budget: self.budget,
        }
    }

    /// Iterate over every incoming stage name, existing first then new.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.existing_stages
            .iter()
            .map(|s| s.name.as_str())
            .chain(self.new_stages.iter().map(|s| s.name.as_str()))
    }
}

/// DTO for cancelling a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelProject {
    pub reason: String,
}

/// Result of a committed project update: the final row plus the image diff.
#[derive(Debug, Clone)]
pub struct ProjectUpdateOutcome {
    pub project: Project,
    pub added_images: Vec<ProjectImage>,
    pub removed_images: Vec<ProjectImage>,
}
