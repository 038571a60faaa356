//! Handlers for the `/projects` resource.
//!
//! The update endpoint is multipart: a `payload` JSON field carrying the
//! scalar fields, stage partition, and image ids to remove, plus repeated
//! `images` file parts. Filesystem work brackets the database transaction:
//! directory migration and file writes happen before it, physical deletion
//! of removed files after commit, and a failed transaction triggers
//! best-effort cleanup of everything written.

use std::path::{Path as FsPath, PathBuf};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use lingkod_core::error::CoreError;
use lingkod_core::project::{ensure_valid, field_violations, stage_name_violations};
use lingkod_core::types::DbId;
use lingkod_db::models::category::Category;
use lingkod_db::models::image::{NewImageFile, ProjectImage};
use lingkod_db::models::project::{
    CancelProject, CreateProject, Project, ProjectSummary, UpdateProject,
};
use lingkod_db::models::stage::Stage;
use lingkod_db::repositories::{CategoryRepo, ImageRepo, ProjectRepo, StageRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads;

/// Supported image file extensions for upload.
const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Full project detail: the row plus its category, ordered stages, and images.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub category: Option<Category>,
    pub stages: Vec<Stage>,
    pub images: Vec<ProjectImage>,
}

/// Response body for the multipart update endpoint.
#[derive(Debug, Serialize)]
pub struct UpdateProjectResponse {
    pub success: bool,
    pub message: String,
    pub project: Project,
    pub progress_percentage: i16,
    pub added_images: Vec<ProjectImage>,
    pub removed_image_ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// CRUD handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
///
/// Validates the submission as a whole (every violation in one message),
/// derives the initial status from the start date, and inserts the project
/// together with its initial stages.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let mut violations = field_violations(&input.fields());
    violations.extend(stage_name_violations(
        input.stages.iter().map(|s| s.name.as_str()),
    ));
    ensure_valid(violations)?;

    let today = Utc::now().date_naive();
    let project = ProjectRepo::create_with_stages(&state.pool, &input, today).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = ProjectRepo::list_summaries(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let category = CategoryRepo::find_by_id(&state.pool, project.category_id).await?;
    let stages = StageRepo::list_by_project(&state.pool, id).await?;
    let images = ImageRepo::list_by_project(&state.pool, id).await?;

    Ok(Json(ProjectDetail {
        project,
        category,
        stages,
        images,
    }))
}

/// PUT /api/v1/projects/{id}
///
/// Multipart update. Validation happens before any side effect; filesystem
/// preparation (directory migration on rename, writing new uploads) happens
/// before the transaction and is undone if the transaction fails.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<UpdateProjectResponse>> {
    let (payload, files) = read_multipart(&mut multipart).await?;
    let payload =
        payload.ok_or_else(|| AppError::BadRequest("Missing required 'payload' field".into()))?;
    let input: UpdateProject = serde_json::from_str(&payload)
        .map_err(|e| AppError::BadRequest(format!("Invalid payload: {e}")))?;

    check_image_extensions(&files)?;

    // Everything wrong with the submission reports in one round trip.
    let mut violations = field_violations(&input.fields());
    violations.extend(stage_name_violations(input.stage_names()));
    if input.status.is_none() {
        violations.push("status is required".to_string());
    }
    ensure_valid(violations)?;

    let current = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    // Validation guarantees the name is present.
    let new_name = input.name.clone().unwrap_or_default();
    let root = state.config.upload_root.clone();

    // Filesystem preparation.
    let migrated = uploads::migrate_project_dir(&root, &current.name, &new_name).await?;

    let mut new_files: Vec<NewImageFile> = Vec::with_capacity(files.len());
    let mut written: Vec<PathBuf> = Vec::with_capacity(files.len());
    for file in &files {
        match uploads::store_image(&root, &new_name, &file.original_name, &file.data).await {
            Ok((meta, path)) => {
                new_files.push(meta);
                written.push(path);
            }
            Err(err) => {
                rollback_fs(&root, &current.name, &new_name, migrated, &written).await;
                return Err(err.into());
            }
        }
    }

    let today = Utc::now().date_naive();
    let outcome = match ProjectRepo::apply_update(&state.pool, id, &input, &new_files, today).await
    {
        Ok(outcome) => outcome,
        Err(err) => {
            rollback_fs(&root, &current.name, &new_name, migrated, &written).await;
            return Err(err.into());
        }
    };

    // The transaction committed; removing the replaced files can no longer
    // orphan database rows.
    for image in &outcome.removed_images {
        uploads::remove_file(&uploads::image_path(&root, &new_name, &image.file_name)).await;
    }

    let progress_percentage = outcome.project.progress_percentage;
    let removed_image_ids = outcome.removed_images.iter().map(|i| i.id).collect();
    Ok(Json(UpdateProjectResponse {
        success: true,
        message: "Project updated successfully".to_string(),
        project: outcome.project,
        progress_percentage,
        added_images: outcome.added_images,
        removed_image_ids,
    }))
}

/// POST /api/v1/projects/{id}/cancel
///
/// Projects are never deleted; cancellation records the reason and parks the
/// project in the Cancelled status.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CancelProject>,
) -> AppResult<Json<Project>> {
    if input.reason.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "a cancellation reason is required".to_string(),
        )));
    }

    let project = ProjectRepo::cancel(&state.pool, id, &input.reason)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

// ---------------------------------------------------------------------------
// Image handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/images
///
/// Standalone multipart upload of one or more `images` parts.
pub async fn upload_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Vec<ProjectImage>>)> {
    let (_, files) = read_multipart(&mut multipart).await?;
    if files.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required 'images' field".into(),
        ));
    }
    check_image_extensions(&files)?;

    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let root = state.config.upload_root.clone();
    let mut new_files = Vec::with_capacity(files.len());
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        match uploads::store_image(&root, &project.name, &file.original_name, &file.data).await {
            Ok((meta, path)) => {
                new_files.push(meta);
                written.push(path);
            }
            Err(err) => {
                remove_written(&written).await;
                return Err(err.into());
            }
        }
    }

    match ImageRepo::add_files(&state.pool, id, &new_files).await {
        Ok(images) => Ok((StatusCode::CREATED, Json(images))),
        Err(err) => {
            remove_written(&written).await;
            Err(err.into())
        }
    }
}

/// DELETE /api/v1/projects/{id}/images/{image_id}
///
/// Removes the database row first, then the physical file, so a failure in
/// between leaves a stray file rather than a dangling row.
pub async fn delete_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let removed = ImageRepo::remove(&state.pool, id, image_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id: image_id,
        }))?;

    let root = state.config.upload_root.as_path();
    uploads::remove_file(&uploads::image_path(root, &project.name, &removed.file_name)).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Multipart parsing
// ---------------------------------------------------------------------------

/// An uploaded file part: original filename plus raw bytes.
struct UploadedFile {
    original_name: String,
    data: Vec<u8>,
}

/// Drain a multipart stream into its `payload` JSON text (if any) and
/// `images` file parts. Unknown fields are ignored.
async fn read_multipart(
    multipart: &mut Multipart,
) -> AppResult<(Option<String>, Vec<UploadedFile>)> {
    let mut payload = None;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "payload" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                payload = Some(text);
            }
            "images" => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                files.push(UploadedFile {
                    original_name,
                    data: data.to_vec(),
                });
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok((payload, files))
}

/// Reject any upload whose extension is not a supported image format.
fn check_image_extensions(files: &[UploadedFile]) -> AppResult<()> {
    for file in files {
        let ext = uploads::file_extension(&file.original_name).unwrap_or_default();
        if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unsupported image format '{}'. Supported: .png, .jpg, .jpeg, .webp, .gif",
                file.original_name
            )));
        }
    }
    Ok(())
}

/// Undo filesystem preparation after a failed update: delete freshly written
/// uploads and move the image directory back under its old name.
async fn rollback_fs(
    root: &FsPath,
    old_name: &str,
    new_name: &str,
    migrated: bool,
    written: &[PathBuf],
) {
    remove_written(written).await;
    if migrated {
        if let Err(err) = uploads::migrate_project_dir(root, new_name, old_name).await {
            tracing::warn!(error = %err, "Failed to restore image directory after rollback");
        }
    }
}

async fn remove_written(written: &[PathBuf]) {
    for path in written {
        uploads::remove_file(path).await;
    }
}
