//! Repository for the `project_stages` table.
//!
//! Stage writes happen inside `ProjectRepo`'s transactions; this repo only
//! serves reads.

use lingkod_core::types::DbId;
use sqlx::PgPool;

use crate::models::stage::Stage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, status_id, start_date, end_date, sort_order, created_at, updated_at";

pub struct StageRepo;

impl StageRepo {
    /// List a project's stages in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Stage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_stages \
             WHERE project_id = $1 \
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Stage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
