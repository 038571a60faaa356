//! Integration tests for the simpler entity repositories.
//!
//! Exercises officials, announcements, complaints, document requests,
//! residents, and badges against a real database to verify that:
//! - Unique constraints surface as database unique violations
//! - Partial updates leave unspecified fields untouched
//! - Workflow timestamps (`resolved_at`, `released_at`) track status moves
//! - Badge awards and revocations move resident points transactionally

use sqlx::PgPool;

use lingkod_db::models::announcement::CreateAnnouncement;
use lingkod_db::models::badge::{CreateBadge, UpdateBadge};
use lingkod_db::models::complaint::CreateComplaint;
use lingkod_db::models::document_request::CreateDocumentRequest;
use lingkod_db::models::official::{CreateOfficial, UpdateOfficial};
use lingkod_db::models::resident::CreateResident;
use lingkod_db::models::status::{ComplaintStatus, DocumentRequestStatus};
use lingkod_db::repositories::{
    AnnouncementRepo, BadgeRepo, CategoryRepo, ComplaintRepo, DocumentRequestRepo, OfficialRepo,
    ResidentRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_official(name: &str, email: Option<&str>) -> CreateOfficial {
    CreateOfficial {
        full_name: name.to_string(),
        position: "Kagawad".to_string(),
        email: email.map(str::to_string),
        phone: None,
    }
}

fn new_announcement(title: &str) -> CreateAnnouncement {
    CreateAnnouncement {
        title: title.to_string(),
        body: "Details to follow.".to_string(),
        posted_by: Some("Secretary".to_string()),
    }
}

fn new_complaint(subject: &str) -> CreateComplaint {
    CreateComplaint {
        complainant_name: "Juan dela Cruz".to_string(),
        contact: Some("0917 000 0000".to_string()),
        subject: subject.to_string(),
        details: "Happens every night.".to_string(),
    }
}

fn new_resident(name: &str) -> CreateResident {
    CreateResident {
        full_name: name.to_string(),
        address: Some("Purok 3".to_string()),
    }
}

fn new_badge(name: &str, points: i32) -> CreateBadge {
    CreateBadge {
        name: name.to_string(),
        description: None,
        icon: None,
        points,
    }
}

fn assert_unique_violation(err: sqlx::Error) {
    match err {
        sqlx::Error::Database(db) => {
            assert!(db.is_unique_violation(), "expected unique violation, got {db:?}")
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: seeded lookup tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categories_are_seeded(pool: PgPool) {
    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.len(), 7);
    // Alphabetical listing.
    assert_eq!(categories[0].name, "Education");
    assert!(categories.iter().any(|c| c.name == "Infrastructure"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_types_are_seeded(pool: PgPool) {
    let types = DocumentRequestRepo::list_types(&pool).await.unwrap();
    assert_eq!(types.len(), 4);
    assert_eq!(types[0].name, "Barangay Clearance");
    assert_eq!(types[0].fee, Some(50.0));

    let indigency = types
        .iter()
        .find(|t| t.name == "Certificate of Indigency")
        .unwrap();
    assert_eq!(indigency.fee, None);
}

// ---------------------------------------------------------------------------
// Test: officials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_official_starts_active(pool: PgPool) {
    let official = OfficialRepo::create(&pool, &new_official("Maria Santos", None))
        .await
        .unwrap();
    assert!(official.is_active);
    assert_eq!(official.position, "Kagawad");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_official_email_must_be_unique(pool: PgPool) {
    OfficialRepo::create(&pool, &new_official("First", Some("captain@brgy.ph")))
        .await
        .unwrap();

    let err = OfficialRepo::create(&pool, &new_official("Second", Some("captain@brgy.ph")))
        .await
        .unwrap_err();
    assert_unique_violation(err);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_official_partial_update_keeps_other_fields(pool: PgPool) {
    let official = OfficialRepo::create(&pool, &new_official("Pedro Reyes", Some("pedro@brgy.ph")))
        .await
        .unwrap();

    let update = UpdateOfficial {
        full_name: None,
        position: Some("Barangay Captain".to_string()),
        email: None,
        phone: None,
        is_active: None,
    };
    let updated = OfficialRepo::update(&pool, official.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.full_name, "Pedro Reyes");
    assert_eq!(updated.position, "Barangay Captain");
    assert_eq!(updated.email.as_deref(), Some("pedro@brgy.ph"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_official_list_hides_inactive_by_default(pool: PgPool) {
    let active = OfficialRepo::create(&pool, &new_official("Active", None))
        .await
        .unwrap();
    let retired = OfficialRepo::create(&pool, &new_official("Retired", None))
        .await
        .unwrap();
    let deactivate = UpdateOfficial {
        full_name: None,
        position: None,
        email: None,
        phone: None,
        is_active: Some(false),
    };
    OfficialRepo::update(&pool, retired.id, &deactivate)
        .await
        .unwrap();

    let visible = OfficialRepo::list(&pool, false).await.unwrap();
    assert!(visible.iter().any(|o| o.id == active.id));
    assert!(!visible.iter().any(|o| o.id == retired.id));

    let all = OfficialRepo::list(&pool, true).await.unwrap();
    assert_eq!(all.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: announcements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_pagination_is_newest_first(pool: PgPool) {
    for title in ["First", "Second", "Third"] {
        AnnouncementRepo::create(&pool, &new_announcement(title))
            .await
            .unwrap();
    }

    let page_one = AnnouncementRepo::list(&pool, 2, 0).await.unwrap();
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_one[0].title, "Third");
    assert_eq!(page_one[1].title, "Second");

    let page_two = AnnouncementRepo::list(&pool, 2, 2).await.unwrap();
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].title, "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_delete(pool: PgPool) {
    let posted = AnnouncementRepo::create(&pool, &new_announcement("Ephemeral"))
        .await
        .unwrap();

    assert!(AnnouncementRepo::delete(&pool, posted.id).await.unwrap());
    assert!(!AnnouncementRepo::delete(&pool, posted.id).await.unwrap());
    assert!(AnnouncementRepo::find_by_id(&pool, posted.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: complaints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complaint_starts_pending(pool: PgPool) {
    let complaint = ComplaintRepo::create(&pool, &new_complaint("Loud videoke"))
        .await
        .unwrap();
    assert_eq!(complaint.status_id, ComplaintStatus::Pending.id());
    assert!(complaint.resolved_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complaint_resolved_at_tracks_status(pool: PgPool) {
    let complaint = ComplaintRepo::create(&pool, &new_complaint("Blocked drainage"))
        .await
        .unwrap();

    let resolved = ComplaintRepo::update_status(&pool, complaint.id, ComplaintStatus::Resolved)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.status_id, ComplaintStatus::Resolved.id());
    let first_resolution = resolved.resolved_at.expect("resolved_at should be set");

    // Re-resolving keeps the original timestamp.
    let again = ComplaintRepo::update_status(&pool, complaint.id, ComplaintStatus::Resolved)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.resolved_at, Some(first_resolution));

    // Reopening clears it.
    let reopened = ComplaintRepo::update_status(&pool, complaint.id, ComplaintStatus::InProgress)
        .await
        .unwrap()
        .unwrap();
    assert!(reopened.resolved_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complaint_list_filters_by_status(pool: PgPool) {
    let open = ComplaintRepo::create(&pool, &new_complaint("Stray dogs"))
        .await
        .unwrap();
    let closed = ComplaintRepo::create(&pool, &new_complaint("Potholes"))
        .await
        .unwrap();
    ComplaintRepo::update_status(&pool, closed.id, ComplaintStatus::Resolved)
        .await
        .unwrap();

    let pending = ComplaintRepo::list(&pool, Some(ComplaintStatus::Pending.id()), 50, 0)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, open.id);

    let everything = ComplaintRepo::list(&pool, None, 50, 0).await.unwrap();
    assert_eq!(everything.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: document requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_request_released_at_tracks_status(pool: PgPool) {
    let input = CreateDocumentRequest {
        requester_name: "Ana Lim".to_string(),
        contact: None,
        document_type_id: 1,
        purpose: "Employment requirement".to_string(),
    };
    let request = DocumentRequestRepo::create(&pool, &input).await.unwrap();
    assert_eq!(request.status_id, DocumentRequestStatus::Pending.id());
    assert!(request.released_at.is_none());

    let released = DocumentRequestRepo::update_status(
        &pool,
        request.id,
        DocumentRequestStatus::Released,
        Some("Claimed in person"),
    )
    .await
    .unwrap()
    .unwrap();
    assert!(released.released_at.is_some());
    assert_eq!(released.remarks.as_deref(), Some("Claimed in person"));

    // Moving back off Released clears the timestamp but keeps remarks.
    let reverted = DocumentRequestRepo::update_status(
        &pool,
        request.id,
        DocumentRequestStatus::Processing,
        None,
    )
    .await
    .unwrap()
    .unwrap();
    assert!(reverted.released_at.is_none());
    assert_eq!(reverted.remarks.as_deref(), Some("Claimed in person"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_request_update_missing_returns_none(pool: PgPool) {
    let updated = DocumentRequestRepo::update_status(
        &pool,
        999_999,
        DocumentRequestStatus::Processing,
        None,
    )
    .await
    .unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Test: badges and resident points
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_badge_award_adds_points(pool: PgPool) {
    let resident = ResidentRepo::create(&pool, &new_resident("Liza Cruz"))
        .await
        .unwrap();
    assert_eq!(resident.points, 0);
    let badge = BadgeRepo::create(&pool, &new_badge("Clean-up Drive", 50))
        .await
        .unwrap();

    let awarded = ResidentRepo::award_badge(&pool, resident.id, badge.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(awarded.points, 50);

    let held = ResidentRepo::badges_for(&pool, resident.id).await.unwrap();
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].badge_id, badge.id);
    assert_eq!(held[0].points_awarded, 50);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_badge_cannot_be_awarded_twice(pool: PgPool) {
    let resident = ResidentRepo::create(&pool, &new_resident("Marco Tan"))
        .await
        .unwrap();
    let badge = BadgeRepo::create(&pool, &new_badge("Blood Donor", 30))
        .await
        .unwrap();

    ResidentRepo::award_badge(&pool, resident.id, badge.id)
        .await
        .unwrap();
    let err = ResidentRepo::award_badge(&pool, resident.id, badge.id)
        .await
        .unwrap_err();
    assert_unique_violation(err);

    // The failed second award must not have touched points.
    let reloaded = ResidentRepo::find_by_id(&pool, resident.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.points, 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_award_of_missing_badge_commits_nothing(pool: PgPool) {
    let resident = ResidentRepo::create(&pool, &new_resident("Nina Uy"))
        .await
        .unwrap();

    let outcome = ResidentRepo::award_badge(&pool, resident.id, 999_999)
        .await
        .unwrap();
    assert!(outcome.is_none());

    let reloaded = ResidentRepo::find_by_id(&pool, resident.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.points, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_subtracts_the_snapshotted_points(pool: PgPool) {
    let resident = ResidentRepo::create(&pool, &new_resident("Ramon Sy"))
        .await
        .unwrap();
    let badge = BadgeRepo::create(&pool, &new_badge("Tree Planting", 50))
        .await
        .unwrap();
    ResidentRepo::award_badge(&pool, resident.id, badge.id)
        .await
        .unwrap();

    // Re-value the badge after the award. The revocation must subtract the
    // 50 points that were actually granted, not the new value.
    let revalue = UpdateBadge {
        name: None,
        description: None,
        icon: None,
        points: Some(100),
    };
    BadgeRepo::update(&pool, badge.id, &revalue).await.unwrap();

    let revoked = ResidentRepo::revoke_badge(&pool, resident.id, badge.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(revoked.points, 0);

    // A second revocation finds nothing to remove.
    let missing = ResidentRepo::revoke_badge(&pool, resident.id, badge.id)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_badge_delete_blocked_while_awarded(pool: PgPool) {
    let resident = ResidentRepo::create(&pool, &new_resident("Holder"))
        .await
        .unwrap();
    let badge = BadgeRepo::create(&pool, &new_badge("Volunteer", 10))
        .await
        .unwrap();
    ResidentRepo::award_badge(&pool, resident.id, badge.id)
        .await
        .unwrap();

    let err = BadgeRepo::delete(&pool, badge.id).await.unwrap_err();
    match err {
        sqlx::Error::Database(db) => assert!(db.is_foreign_key_violation()),
        other => panic!("expected database error, got {other:?}"),
    }

    ResidentRepo::revoke_badge(&pool, resident.id, badge.id)
        .await
        .unwrap();
    assert!(BadgeRepo::delete(&pool, badge.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: leaderboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_ranks_by_points_then_name(pool: PgPool) {
    let ana = ResidentRepo::create(&pool, &new_resident("Ana")).await.unwrap();
    let ben = ResidentRepo::create(&pool, &new_resident("Ben")).await.unwrap();
    let carla = ResidentRepo::create(&pool, &new_resident("Carla"))
        .await
        .unwrap();

    let cleanup = BadgeRepo::create(&pool, &new_badge("Clean-up", 30))
        .await
        .unwrap();
    let donor = BadgeRepo::create(&pool, &new_badge("Donor", 20)).await.unwrap();

    ResidentRepo::award_badge(&pool, ben.id, cleanup.id).await.unwrap();
    ResidentRepo::award_badge(&pool, carla.id, cleanup.id).await.unwrap();
    ResidentRepo::award_badge(&pool, carla.id, donor.id).await.unwrap();

    let board = ResidentRepo::leaderboard(&pool, 10).await.unwrap();
    assert_eq!(board.len(), 3);

    assert_eq!(board[0].rank, 1);
    assert_eq!(board[0].id, carla.id);
    assert_eq!(board[0].points, 50);
    assert_eq!(board[0].badge_count, 2);

    assert_eq!(board[1].rank, 2);
    assert_eq!(board[1].id, ben.id);
    assert_eq!(board[1].badge_count, 1);

    assert_eq!(board[2].rank, 3);
    assert_eq!(board[2].id, ana.id);
    assert_eq!(board[2].points, 0);
    assert_eq!(board[2].badge_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_respects_limit(pool: PgPool) {
    for name in ["One", "Two", "Three"] {
        ResidentRepo::create(&pool, &new_resident(name)).await.unwrap();
    }

    let board = ResidentRepo::leaderboard(&pool, 2).await.unwrap();
    assert_eq!(board.len(), 2);
}
