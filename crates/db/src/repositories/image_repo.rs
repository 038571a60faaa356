//! Repository for the `project_images` table.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{NewImageFile, ProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, file_name, original_name, file_size_bytes, created_at";

pub struct ImageRepo;

impl ImageRepo {
    /// List a project's images, oldest upload first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_images WHERE project_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Insert rows for files already written to disk, all-or-nothing.
    pub async fn add_files(
        pool: &PgPool,
        project_id: DbId,
        files: &[NewImageFile],
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (project_id, file_name, original_name, file_size_bytes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut images = Vec::with_capacity(files.len());
        for file in files {
            let image = sqlx::query_as::<_, ProjectImage>(&query)
                .bind(project_id)
                .bind(&file.file_name)
                .bind(&file.original_name)
                .bind(file.file_size_bytes)
                .fetch_one(&mut *tx)
                .await?;
            images.push(image);
        }
        tx.commit().await?;
        Ok(images)
    }

    /// Delete one image row scoped to its project, returning it for file
    /// cleanup. `None` if the image does not exist under that project.
    pub async fn remove(
        pool: &PgPool,
        project_id: DbId,
        image_id: DbId,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!(
            "DELETE FROM project_images WHERE id = $1 AND project_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(image_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
