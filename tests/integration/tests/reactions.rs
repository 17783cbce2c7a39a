//! End-to-end tests of the reactions subsystem: optimistic toggles,
//! rollback, stale-response discard, and bulk refetch reconciliation.

use std::time::Duration;

use integration_tests::{harness, TestHarness};

use gallery_core::{CampaignId, CampaignReactions, ReactionCounts, ReactionKind, Role, UserId};
use gallery_service::{ServiceError, ToggleOutcome};
use uuid::Uuid;

fn campaign(id: &str) -> CampaignId {
    CampaignId::new(id)
}

fn other_user(n: u128) -> UserId {
    UserId::new(Uuid::from_u128(n))
}

/// Hydrated harness: signed-in editor, campaign "c1" tracked and refetched
async fn hydrated() -> TestHarness {
    let h = harness();
    h.sign_in("editor@example.com", Role::Editor).await;
    h.controller.add_campaign(&campaign("c1"));
    h.controller.refetch(None).await.expect("hydrate");
    h
}

#[tokio::test]
async fn unloaded_campaign_reads_as_not_loaded_not_zero() {
    let h = harness();
    h.controller.add_campaign(&campaign("c1"));

    // Tracked but never fetched: no snapshot at all.
    assert!(h.controller.summary(&campaign("c1")).is_none());

    // After a refetch against an empty store the campaign is loaded with
    // genuinely zero reactions - an observably different state.
    h.controller.refetch(None).await.expect("refetch");
    let summary = h.controller.summary(&campaign("c1")).expect("loaded");
    assert!(summary.counts.is_empty());
    assert_eq!(summary.own, None);
}

#[tokio::test]
async fn double_toggle_returns_to_baseline_with_server_confirmation() {
    let h = hydrated().await;
    let id = campaign("c1");
    let me = h.ctx.session().current_user_id().unwrap();

    let outcome = h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Committed);
    let summary = h.controller.summary(&id).unwrap();
    assert_eq!(summary.counts.get(ReactionKind::Like), 1);
    assert_eq!(summary.own, Some(ReactionKind::Like));
    assert_eq!(h.reactions.kind_for(&id, me), Some(ReactionKind::Like));

    let outcome = h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Committed);
    let summary = h.controller.summary(&id).unwrap();
    assert_eq!(summary.counts.get(ReactionKind::Like), 0);
    assert_eq!(summary.own, None);
    assert_eq!(h.reactions.kind_for(&id, me), None);
}

#[tokio::test]
async fn toggling_a_different_kind_shifts_one_count_to_the_other() {
    let h = harness();
    let id = campaign("c1");
    h.reactions.seed(&id, other_user(100), ReactionKind::Like);
    h.sign_in("editor@example.com", Role::Editor).await;
    h.controller.add_campaign(&id);
    h.controller.refetch(None).await.unwrap();

    h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap();
    let summary = h.controller.summary(&id).unwrap();
    assert_eq!(summary.counts.get(ReactionKind::Like), 2);

    // Same campaign, different kind: like loses my reaction, dislike gains it.
    let outcome = h
        .controller
        .toggle_reaction(&id, ReactionKind::Dislike)
        .await
        .unwrap();
    assert_eq!(outcome, ToggleOutcome::Committed);
    let summary = h.controller.summary(&id).unwrap();
    assert_eq!(summary.counts.get(ReactionKind::Like), 1);
    assert_eq!(summary.counts.get(ReactionKind::Dislike), 1);
    assert_eq!(summary.own, Some(ReactionKind::Dislike));
}

#[tokio::test]
async fn stale_response_cannot_overwrite_newer_toggle() {
    let h = hydrated().await;
    let id = campaign("c1");

    // Park both mutations at gates so the test controls response order.
    let gate1 = h.reactions.gate_next_mutation();
    let gate2 = h.reactions.gate_next_mutation();

    let controller = h.controller.clone();
    let id1 = id.clone();
    let t1 = tokio::spawn(async move {
        controller.toggle_reaction(&id1, ReactionKind::Like).await
    });
    gate1.entered.await.expect("t1 parked");

    let controller = h.controller.clone();
    let id2 = id.clone();
    let t2 = tokio::spawn(async move {
        controller.toggle_reaction(&id2, ReactionKind::Like).await
    });
    gate2.entered.await.expect("t2 parked");

    // T2 (the newer toggle) completes first...
    let _ = gate2.release.send(());
    let outcome2 = t2.await.unwrap().unwrap();
    assert_eq!(outcome2, ToggleOutcome::Committed);

    // ...then T1's response arrives late and must be discarded as stale.
    let _ = gate1.release.send(());
    let outcome1 = t1.await.unwrap().unwrap();
    assert_eq!(outcome1, ToggleOutcome::Superseded);

    // The cache ends in T2's state: like toggled on, then off again.
    let summary = h.controller.summary(&id).unwrap();
    assert_eq!(summary.counts.get(ReactionKind::Like), 0);
    assert_eq!(summary.own, None);
}

#[tokio::test]
async fn failed_mutation_rolls_back_to_exact_pre_state() {
    let h = harness();
    let id = campaign("c1");
    h.reactions.seed(&id, other_user(7), ReactionKind::Heart);
    h.sign_in("viewer@example.com", Role::Viewer).await;
    h.controller.add_campaign(&id);
    h.controller.refetch(None).await.unwrap();

    let before = h.controller.summary(&id).unwrap();
    h.reactions.set_fail_mutations(true);

    let outcome = h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap();
    assert!(matches!(outcome, ToggleOutcome::RolledBack { .. }));

    // Numerically identical to the state immediately before the optimistic
    // application.
    assert_eq!(h.controller.summary(&id).unwrap(), before);
}

#[tokio::test]
async fn failed_toggle_on_unloaded_campaign_leaves_it_unloaded() {
    let h = harness();
    let id = campaign("c1");
    h.sign_in("viewer@example.com", Role::Viewer).await;
    h.controller.add_campaign(&id);
    h.reactions.set_fail_mutations(true);

    let outcome = h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap();
    assert!(matches!(outcome, ToggleOutcome::RolledBack { .. }));
    assert!(h.controller.summary(&id).is_none());
}

#[tokio::test]
async fn refetch_sets_cache_exactly_regardless_of_prior_guesses() {
    let h = hydrated().await;
    let c1 = campaign("c1");
    let c2 = campaign("c2");

    // A prior committed toggle leaves a local guess for c1.
    h.controller.toggle_reaction(&c1, ReactionKind::Heart).await.unwrap();
    assert_eq!(h.controller.summary(&c1).unwrap().own, Some(ReactionKind::Heart));

    // The server now says: c1 has like:3 dislike:1 (none of them mine),
    // c2 has no reactions at all.
    h.reactions.replace_all(
        &c1,
        vec![
            (other_user(1), ReactionKind::Like),
            (other_user(2), ReactionKind::Like),
            (other_user(3), ReactionKind::Like),
            (other_user(4), ReactionKind::Dislike),
        ],
    );
    h.controller.add_campaign(&c2);

    let targets = [c1.clone(), c2.clone()];
    let report = h.controller.refetch(Some(&targets)).await.unwrap();
    assert_eq!(report.refreshed.len(), 2);
    assert!(report.failure.is_none());

    let summary = h.controller.summary(&c1).unwrap();
    assert_eq!(
        summary.counts,
        ReactionCounts::from_pairs([(ReactionKind::Like, 3), (ReactionKind::Dislike, 1)])
    );
    assert_eq!(summary.own, None);

    // c2 is loaded-empty, not "not loaded".
    let summary = h.controller.summary(&c2).unwrap();
    assert_eq!(
        CampaignReactions {
            counts: summary.counts.clone(),
            own: summary.own,
        },
        CampaignReactions::default()
    );
}

#[tokio::test]
async fn refetch_failure_keeps_stale_values_intact() {
    let h = harness();
    let id = campaign("c1");
    h.reactions.seed(&id, other_user(9), ReactionKind::Like);
    h.sign_in("viewer@example.com", Role::Viewer).await;
    h.controller.add_campaign(&id);
    h.controller.refetch(None).await.unwrap();
    let before = h.controller.summary(&id).unwrap();

    h.reactions.set_fail_fetches(true);
    let report = h.controller.refetch(None).await.unwrap();
    assert!(report.failure.is_some());
    assert!(report.refreshed.is_empty());

    // Stale-but-present beats gone.
    assert_eq!(h.controller.summary(&id).unwrap(), before);
}

#[tokio::test]
async fn toggle_without_sign_in_is_refused_before_any_optimistic_change() {
    let h = harness();
    let id = campaign("c1");
    h.controller.add_campaign(&id);

    let err = h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap_err();
    assert!(matches!(err, ServiceError::AuthRequired));

    // The refusal happened before the cache was touched.
    assert!(h.controller.summary(&id).is_none());
}

#[tokio::test]
async fn toggle_on_untracked_campaign_is_refused() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;

    let err = h
        .controller
        .toggle_reaction(&campaign("nope"), ReactionKind::Like)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "CAMPAIGN_NOT_TRACKED");
}

#[tokio::test]
async fn refetch_defaults_to_the_registry_set() {
    let h = harness();
    h.sign_in("viewer@example.com", Role::Viewer).await;
    h.controller.add_campaign(&campaign("c1"));
    h.controller.add_campaign(&campaign("c2"));
    h.controller.add_campaign(&campaign("c2")); // duplicate registration

    let report = h.controller.refetch(None).await.unwrap();
    let mut refreshed = report.refreshed.clone();
    refreshed.sort();
    assert_eq!(refreshed, vec![campaign("c1"), campaign("c2")]);
}

#[tokio::test]
async fn session_change_re_derives_own_state() {
    let h = hydrated().await;
    let id = campaign("c1");

    // The sync task follows the session stream for the controller.
    let controller = h.controller.clone();
    tokio::spawn(async move { controller.run_session_sync().await });

    h.controller.toggle_reaction(&id, ReactionKind::Like).await.unwrap();
    assert_eq!(h.controller.summary(&id).unwrap().own, Some(ReactionKind::Like));

    // A different user signs in; their own-state must be re-derived (they
    // never reacted), while the aggregate keeps the first user's like.
    h.sign_in("other@example.com", Role::Viewer).await;

    let mut converged = false;
    for _ in 0..200 {
        if let Some(summary) = h.controller.summary(&id) {
            if summary.own.is_none() && summary.counts.get(ReactionKind::Like) == 1 {
                converged = true;
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(converged, "own-state was not re-derived after session change");
}
