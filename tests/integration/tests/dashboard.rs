//! End-to-end tests of the dashboard services: auth/session, campaign CRUD,
//! calendar view, role-based access, and uploads.

use integration_tests::{date, draft_campaign, harness, TEST_PASSWORD};

use gallery_core::traits::{CampaignQuery, UploadedFile};
use gallery_core::{CampaignId, CampaignStatus, Role};
use gallery_service::dto::{CreateCampaignRequest, SignInRequest, UpdateCampaignRequest};
use gallery_service::{AuthService, CampaignService, ServiceError, UploadService};

fn create_request(title: &str) -> CreateCampaignRequest {
    CreateCampaignRequest {
        title: title.to_string(),
        description: None,
        budget: 1000.0,
        starts_on: date(2025, 6, 1),
        ends_on: date(2025, 6, 30),
        channels: vec!["web".to_string()],
        links: vec![],
    }
}

fn png(size: usize) -> UploadedFile {
    UploadedFile {
        file_name: "cover.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0u8; size],
    }
}

// ============================================================================
// Auth / session
// ============================================================================

#[tokio::test]
async fn sign_in_derives_user_and_role_from_the_token() {
    let h = harness();
    let user = h.sign_in("editor@example.com", Role::Editor).await;

    assert_eq!(user.role, Role::Editor);
    assert_eq!(user.email.as_deref(), Some("editor@example.com"));
    assert_eq!(h.ctx.session().current_user(), Some(user));
    assert!(h.ctx.session().access_token().is_some());
}

#[tokio::test]
async fn sign_in_with_wrong_password_fails_without_a_session() {
    let h = harness();
    h.identity.register("someone@example.com", TEST_PASSWORD, Role::Viewer);

    let err = AuthService::new(&h.ctx)
        .sign_in(SignInRequest {
            email: "someone@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "AUTH_ERROR");
    assert!(h.ctx.session().current_user().is_none());
}

#[tokio::test]
async fn sign_out_clears_the_session() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;

    AuthService::new(&h.ctx).sign_out().await.unwrap();
    assert!(h.ctx.session().current_user().is_none());
    assert!(h.ctx.session().access_token().is_none());
}

// ============================================================================
// Campaign CRUD
// ============================================================================

#[tokio::test]
async fn editor_creates_a_campaign_they_own() {
    let h = harness();
    let user = h.sign_in("editor@example.com", Role::Editor).await;

    let created = CampaignService::new(&h.ctx)
        .create(create_request("Summer sale"))
        .await
        .unwrap();

    assert_eq!(created.title, "Summer sale");
    assert_eq!(created.status, CampaignStatus::Draft);
    assert_eq!(created.owner_id, Some(user.id.to_string()));
    assert_eq!(h.campaigns.len(), 1);
}

#[tokio::test]
async fn viewer_cannot_create_campaigns() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;

    let err = CampaignService::new(&h.ctx)
        .create(create_request("Nope"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "MISSING_PERMISSIONS");
    assert!(h.campaigns.is_empty());
}

#[tokio::test]
async fn listing_requires_a_signed_in_user() {
    let h = harness();
    let err = CampaignService::new(&h.ctx)
        .list(CampaignQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AuthRequired));
}

#[tokio::test]
async fn create_rejects_negative_budget() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;

    let mut request = create_request("Bad budget");
    request.budget = -1.0;
    let err = CampaignService::new(&h.ctx).create(request).await.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_rejects_inverted_flight_period() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;

    let mut request = create_request("Backwards");
    request.starts_on = date(2025, 6, 30);
    request.ends_on = date(2025, 6, 1);
    let err = CampaignService::new(&h.ctx).create(request).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_FLIGHT_PERIOD");
}

#[tokio::test]
async fn update_patches_only_the_given_fields() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;
    let mut seeded = draft_campaign("c1", date(2025, 6, 1), date(2025, 6, 30));
    seeded.budget = 500.0;
    seeded.description = Some("Original".to_string());
    h.campaigns.seed(seeded);

    let updated = CampaignService::new(&h.ctx)
        .update(
            &CampaignId::new("c1"),
            UpdateCampaignRequest {
                title: Some("Renamed".to_string()),
                budget: Some(900.0),
                ..UpdateCampaignRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.budget, 900.0);
    // Untouched fields keep their stored values.
    assert_eq!(updated.description.as_deref(), Some("Original"));
    assert_eq!(updated.starts_on, date(2025, 6, 1));
}

#[tokio::test]
async fn update_requires_both_flight_dates_together() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;
    h.campaigns.seed(draft_campaign("c1", date(2025, 6, 1), date(2025, 6, 30)));

    let err = CampaignService::new(&h.ctx)
        .update(
            &CampaignId::new("c1"),
            UpdateCampaignRequest {
                starts_on: Some(date(2025, 7, 1)),
                ..UpdateCampaignRequest::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_with_no_fields_is_rejected() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;
    h.campaigns.seed(draft_campaign("c1", date(2025, 6, 1), date(2025, 6, 30)));

    let err = CampaignService::new(&h.ctx)
        .update(&CampaignId::new("c1"), UpdateCampaignRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn get_unknown_campaign_is_not_found() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;

    let err = CampaignService::new(&h.ctx)
        .get(&CampaignId::new("missing"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn status_changes_require_the_manage_permission() {
    let h = harness();
    h.campaigns.seed(draft_campaign("c1", date(2025, 6, 1), date(2025, 6, 30)));

    h.sign_in("editor@example.com", Role::Editor).await;
    let err = CampaignService::new(&h.ctx)
        .set_status(&CampaignId::new("c1"), CampaignStatus::Active)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "MISSING_PERMISSIONS");

    h.sign_in("admin@example.com", Role::Admin).await;
    let updated = CampaignService::new(&h.ctx)
        .set_status(&CampaignId::new("c1"), CampaignStatus::Active)
        .await
        .unwrap();
    assert_eq!(updated.status, CampaignStatus::Active);
}

#[tokio::test]
async fn list_filters_by_status_and_search() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;

    let mut summer = draft_campaign("c1", date(2025, 6, 1), date(2025, 6, 30));
    summer.title = "Summer sale".to_string();
    summer.status = CampaignStatus::Active;
    h.campaigns.seed(summer);
    let mut winter = draft_campaign("c2", date(2025, 12, 1), date(2025, 12, 31));
    winter.title = "Winter launch".to_string();
    h.campaigns.seed(winter);

    let service = CampaignService::new(&h.ctx);

    let active = service
        .list(CampaignQuery {
            status: Some(CampaignStatus::Active),
            ..CampaignQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, CampaignId::new("c1"));

    let found = service
        .list(CampaignQuery {
            search: Some("winter".to_string()),
            ..CampaignQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, CampaignId::new("c2"));
}

// ============================================================================
// Calendar view
// ============================================================================

#[tokio::test]
async fn calendar_groups_campaigns_by_day() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;
    h.campaigns.seed(draft_campaign("early", date(2025, 6, 1), date(2025, 6, 10)));
    h.campaigns.seed(draft_campaign("spanning", date(2025, 6, 5), date(2025, 7, 5)));
    h.campaigns.seed(draft_campaign("july", date(2025, 7, 1), date(2025, 7, 31)));

    let month = CampaignService::new(&h.ctx).calendar(2025, 6).await.unwrap();

    assert_eq!(month.days.len(), 30);
    assert_eq!(month.campaigns.len(), 2);

    let day = |d: u32| {
        month
            .days
            .iter()
            .find(|day| day.date == date(2025, 6, d))
            .unwrap()
    };
    assert_eq!(day(1).campaign_ids, vec![CampaignId::new("early")]);
    assert_eq!(day(7).campaign_ids.len(), 2);
    assert_eq!(day(20).campaign_ids, vec![CampaignId::new("spanning")]);
}

#[tokio::test]
async fn calendar_rejects_invalid_month() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;

    let err = CampaignService::new(&h.ctx).calendar(2025, 13).await.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn upload_returns_a_public_url() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;

    let url = UploadService::new(&h.ctx).upload_image(&png(1024)).await.unwrap();
    assert!(url.starts_with("https://cdn.test/covers/"));
    assert!(url.ends_with(".png"));
    assert_eq!(h.files.uploads().len(), 1);
}

#[tokio::test]
async fn upload_rejects_oversized_files_before_any_network_call() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;

    let err = UploadService::new(&h.ctx)
        .upload_image(&png(6 * 1024 * 1024))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "FILE_TOO_LARGE");
    assert!(h.files.uploads().is_empty());
}

#[tokio::test]
async fn upload_rejects_non_image_content() {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;

    let err = UploadService::new(&h.ctx)
        .upload_image(&UploadedFile {
            file_name: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; 128],
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_CONTENT_TYPE");
    assert!(h.files.uploads().is_empty());
}

#[tokio::test]
async fn viewer_cannot_upload() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;

    let err = UploadService::new(&h.ctx).upload_image(&png(64)).await.unwrap_err();
    assert_eq!(err.error_code(), "MISSING_PERMISSIONS");
}
