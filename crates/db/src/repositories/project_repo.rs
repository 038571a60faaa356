//! Repository for the `projects` table and the full-replace update flow.

use chrono::NaiveDate;
use lingkod_core::error::CoreError;
use lingkod_core::progress::progress_percentage;
use lingkod_core::project::{initial_status, ProjectStatus};
use lingkod_core::stage::{next_stage_dates, StageDates, StageStatus};
use lingkod_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::image::{NewImageFile, ProjectImage};
use crate::models::project::{
    CreateProject, Project, ProjectSummary, ProjectUpdateOutcome, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, location, category_id, responsible_person, \
    funding_source, budget, start_date, expected_completion, actual_completion, \
    status_id, progress_percentage, cancelled_reason, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, project_id, file_name, original_name, file_size_bytes, created_at";

/// Failure modes of the multi-step project writes.
///
/// Everything funnels through here so a single rollback path covers domain
/// conflicts (stage regressions), referential problems, and plain database
/// errors alike.
#[derive(Debug, thiserror::Error)]
pub enum ProjectWriteError {
    #[error("Project with id {0} not found")]
    ProjectNotFound(DbId),

    #[error("Stage with id {0} does not belong to this project")]
    StageNotFound(DbId),

    #[error("Category with id {0} does not exist")]
    UnknownCategory(DbId),

    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides CRUD and the transactional update flow for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    // ── Reads ────────────────────────────────────────────────────────

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects with their category name and image count,
    /// newest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT p.id, p.name, p.location, p.category_id, c.name AS category_name, \
                    p.start_date, p.expected_completion, p.status_id, p.progress_percentage, \
                    COUNT(i.id) AS image_count, p.created_at \
             FROM projects p \
             JOIN categories c ON c.id = p.category_id \
             LEFT JOIN project_images i ON i.project_id = p.id \
             GROUP BY p.id, c.name \
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Create a project together with its initial stage list.
    ///
    /// The project's status is derived from its start date (`Ongoing` when
    /// already started, `Not Started` otherwise) and its progress from the
    /// supplied stage statuses. Stage dates come from the transition engine
    /// with no prior status.
    pub async fn create_with_stages(
        pool: &PgPool,
        input: &CreateProject,
        today: NaiveDate,
    ) -> Result<Project, ProjectWriteError> {
        let start = input
            .start_date
            .ok_or_else(|| CoreError::Validation("start date is required".to_string()))?;
        let category_id = input
            .category_id
            .ok_or_else(|| CoreError::Validation("category is required".to_string()))?;

        let status = initial_status(start, today);
        let statuses: Vec<StageStatus> = input.stages.iter().map(|s| s.status).collect();
        let progress = progress_percentage(&statuses);

        let mut tx = pool.begin().await?;

        ensure_category_exists(&mut tx, category_id).await?;

        let query = format!(
            "INSERT INTO projects \
                (name, description, location, category_id, responsible_person, \
                 funding_source, budget, start_date, expected_completion, status_id, \
                 progress_percentage) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(category_id)
            .bind(&input.responsible_person)
            .bind(&input.funding_source)
            .bind(input.budget)
            .bind(start)
            .bind(input.expected_completion)
            .bind(status.id())
            .bind(progress)
            .fetch_one(&mut *tx)
            .await?;

        for stage in &input.stages {
            let dates = next_stage_dates(None, stage.status, StageDates::default(), today)?;
            insert_stage(
                &mut tx,
                project.id,
                &stage.name,
                stage.status,
                dates,
                stage.sort_order,
            )
            .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Apply a full project edit in one transaction: scalar replacement,
    /// image row diff, stage reconciliation, and progress recomputation.
    ///
    /// `new_images` describes files the caller has already written to disk;
    /// only their rows are created here. On any error the transaction rolls
    /// back and nothing from this call remains visible; cleaning up the
    /// already-written files is the caller's job.
    ///
    /// Steps, in order:
    /// 1. Lock the project row (fails with `ProjectNotFound` if absent).
    /// 2. Check the category reference.
    /// 3. Delete removed image rows, insert rows for `new_images`.
    /// 4. Delete stage rows absent from `existing_stages`, run the
    ///    transition engine over each kept stage, insert `new_stages`.
    /// 5. Recompute progress from the post-update status set.
    /// 6. Persist the scalar fields and commit.
    pub async fn apply_update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        new_images: &[NewImageFile],
        today: NaiveDate,
    ) -> Result<ProjectUpdateOutcome, ProjectWriteError> {
        let category_id = input
            .category_id
            .ok_or_else(|| CoreError::Validation("category is required".to_string()))?;
        let status = input
            .status
            .ok_or_else(|| CoreError::Validation("status is required".to_string()))?;

        let mut tx = pool.begin().await?;

        // Lock the row so concurrent edits to the same project serialize.
        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Err(ProjectWriteError::ProjectNotFound(id));
        }

        ensure_category_exists(&mut tx, category_id).await?;

        // Image diff. Ids not attached to this project are skipped.
        let remove_query = format!(
            "DELETE FROM project_images WHERE project_id = $1 AND id = ANY($2) \
             RETURNING {IMAGE_COLUMNS}"
        );
        let removed_images = sqlx::query_as::<_, ProjectImage>(&remove_query)
            .bind(id)
            .bind(&input.remove_image_ids)
            .fetch_all(&mut *tx)
            .await?;

        let insert_query = format!(
            "INSERT INTO project_images (project_id, file_name, original_name, file_size_bytes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {IMAGE_COLUMNS}"
        );
        let mut added_images = Vec::with_capacity(new_images.len());
        for file in new_images {
            let image = sqlx::query_as::<_, ProjectImage>(&insert_query)
                .bind(id)
                .bind(&file.file_name)
                .bind(&file.original_name)
                .bind(file.file_size_bytes)
                .fetch_one(&mut *tx)
                .await?;
            added_images.push(image);
        }

        // Full-replace stage reconciliation: anything not in the incoming
        // "existing" list is gone.
        let keep_ids: Vec<DbId> = input.existing_stages.iter().map(|s| s.id).collect();
        sqlx::query("DELETE FROM project_stages WHERE project_id = $1 AND NOT (id = ANY($2))")
            .bind(id)
            .bind(&keep_ids)
            .execute(&mut *tx)
            .await?;

        let mut statuses = Vec::with_capacity(input.existing_stages.len() + input.new_stages.len());
        for stage in &input.existing_stages {
            let row: Option<(i16, Option<NaiveDate>, Option<NaiveDate>)> = sqlx::query_as(
                "SELECT status_id, start_date, end_date FROM project_stages \
                 WHERE id = $1 AND project_id = $2",
            )
            .bind(stage.id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
            let (old_id, start, end) = row.ok_or(ProjectWriteError::StageNotFound(stage.id))?;
            let old_status = StageStatus::from_id(old_id).ok_or_else(|| {
                CoreError::Internal(format!(
                    "stage {} carries unknown status id {old_id}",
                    stage.id
                ))
            })?;

            let dates = next_stage_dates(
                Some(old_status),
                stage.status,
                StageDates::new(start, end),
                today,
            )?;

            sqlx::query(
                "UPDATE project_stages SET name = $2, status_id = $3, start_date = $4, \
                 end_date = $5, sort_order = $6 WHERE id = $1",
            )
            .bind(stage.id)
            .bind(&stage.name)
            .bind(stage.status.id())
            .bind(dates.start)
            .bind(dates.end)
            .bind(stage.sort_order)
            .execute(&mut *tx)
            .await?;

            statuses.push(stage.status);
        }

        for stage in &input.new_stages {
            let dates = next_stage_dates(None, stage.status, StageDates::default(), today)?;
            insert_stage(&mut tx, id, &stage.name, stage.status, dates, stage.sort_order).await?;
            statuses.push(stage.status);
        }

        let progress = progress_percentage(&statuses);

        let update_query = format!(
            "UPDATE projects SET \
                name = $2, description = $3, location = $4, category_id = $5, \
                responsible_person = $6, funding_source = $7, budget = $8, \
                start_date = $9, expected_completion = $10, actual_completion = $11, \
                status_id = $12, progress_percentage = $13 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(category_id)
            .bind(&input.responsible_person)
            .bind(&input.funding_source)
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.expected_completion)
            .bind(input.actual_completion)
            .bind(status.id())
            .bind(progress)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ProjectUpdateOutcome {
            project,
            added_images,
            removed_images,
        })
    }

    /// Mark a project cancelled with a reason. Projects are never hard-deleted.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn cancel(
        pool: &PgPool,
        id: DbId,
        reason: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET status_id = $2, cancelled_reason = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(ProjectStatus::Cancelled.id())
            .bind(reason)
            .fetch_optional(pool)
            .await
    }
}

async fn ensure_category_exists(
    tx: &mut Transaction<'_, Postgres>,
    category_id: DbId,
) -> Result<(), ProjectWriteError> {
    let found: Option<(DbId,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
        .bind(category_id)
        .fetch_optional(&mut **tx)
        .await?;
    if found.is_none() {
        return Err(ProjectWriteError::UnknownCategory(category_id));
    }
    Ok(())
}

async fn insert_stage(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
    name: &str,
    status: StageStatus,
    dates: StageDates,
    sort_order: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO project_stages (project_id, name, status_id, start_date, end_date, sort_order) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(project_id)
    .bind(name)
    .bind(status.id())
    .bind(dates.start)
    .bind(dates.end)
    .bind(sort_order)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
