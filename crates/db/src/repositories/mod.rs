//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step writes (project
//! updates, badge awards) open their own transaction internally so callers
//! never juggle transaction handles.

pub mod announcement_repo;
pub mod badge_repo;
pub mod category_repo;
pub mod complaint_repo;
pub mod document_request_repo;
pub mod image_repo;
pub mod official_repo;
pub mod project_repo;
pub mod resident_repo;
pub mod stage_repo;

pub use announcement_repo::AnnouncementRepo;
pub use badge_repo::BadgeRepo;
pub use category_repo::CategoryRepo;
pub use complaint_repo::ComplaintRepo;
pub use document_request_repo::DocumentRequestRepo;
pub use image_repo::ImageRepo;
pub use official_repo::OfficialRepo;
pub use project_repo::{ProjectRepo, ProjectWriteError};
pub use resident_repo::ResidentRepo;
pub use stage_repo::StageRepo;
