//! Integration tests for the goal lifecycle service.
//!
//! These run the service against the in-memory store and the mock
//! resolver, so every path from credential to stored row is exercised:
//! 1. Owner isolation for list, update and delete
//! 2. Full-replace update semantics
//! 3. Existence-before-ownership ordering
//! 4. Version-checked writes under concurrency

use std::sync::Arc;

use goal_keeper::adapters::auth::MockIdentityResolver;
use goal_keeper::adapters::storage::InMemoryGoalStore;
use goal_keeper::application::GoalLifecycleService;
use goal_keeper::domain::foundation::{AuthError, CallerCredential, GoalId, OwnedBy, OwnerId};
use goal_keeper::domain::goal::{CompletionState, GoalError, GoalInterval, GoalPayload};
use goal_keeper::ports::GoalStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    service: GoalLifecycleService,
    store: Arc<InMemoryGoalStore>,
}

fn fixture() -> Fixture {
    let store = Arc::new(InMemoryGoalStore::new());
    let resolver = MockIdentityResolver::new()
        .with_owner("u1", 1)
        .with_owner("u2", 2)
        .with_owner("u3", 3);
    Fixture {
        service: GoalLifecycleService::new(Arc::new(resolver), store.clone()),
        store,
    }
}

fn u1() -> CallerCredential {
    CallerCredential::new("u1")
}

fn u2() -> CallerCredential {
    CallerCredential::new("u2")
}

fn u3() -> CallerCredential {
    CallerCredential::new("u3")
}

fn run_5k() -> GoalPayload {
    GoalPayload {
        title: Some("Run 5k".to_string()),
        interval: Some("weekly".to_string()),
        task_unit_count: Some(0),
        ..GoalPayload::default()
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

#[tokio::test]
async fn owner_walkthrough_create_reject_update_delete() {
    let f = fixture();

    let created = f.service.create_goal(&u1(), run_5k()).await.unwrap();
    assert!(created.id().as_i64() > 0);
    assert_eq!(created.owner_id(), OwnerId::new(1).unwrap());
    assert_eq!(created.details().interval(), Some(GoalInterval::Weekly));

    let err = f
        .service
        .update_goal(&u2(), created.id(), GoalPayload::titled("Hijacked"))
        .await
        .unwrap_err();
    assert!(matches!(err, GoalError::Forbidden(id) if id == created.id()));

    let goals = f.service.get_goals_by_owner(&u1()).await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].details().title(), "Run 5k");

    let update = GoalPayload {
        title: Some("Run 10k".to_string()),
        task_unit_count: Some(1),
        ..GoalPayload::default()
    };
    f.service
        .update_goal(&u1(), created.id(), update)
        .await
        .unwrap();

    let goals = f.service.get_goals_by_owner(&u1()).await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id(), created.id());
    assert_eq!(goals[0].owner_id(), created.owner_id());
    assert_eq!(goals[0].details().title(), "Run 10k");
    assert_eq!(goals[0].details().task_unit_count(), 1);

    let snapshot = f.service.delete_goal(&u1(), created.id()).await.unwrap();
    assert_eq!(snapshot.details().title(), "Run 10k");
    assert_eq!(snapshot.id(), created.id());

    let err = f
        .service
        .delete_goal(&u1(), created.id())
        .await
        .unwrap_err();
    assert!(matches!(err, GoalError::NotFound(id) if id == created.id()));
}

// =============================================================================
// Isolation
// =============================================================================

#[tokio::test]
async fn listing_only_returns_the_callers_goals() {
    let f = fixture();
    let a = f.service.create_goal(&u1(), GoalPayload::titled("a")).await.unwrap();
    let b = f.service.create_goal(&u2(), GoalPayload::titled("b")).await.unwrap();
    let c = f.service.create_goal(&u1(), GoalPayload::titled("c")).await.unwrap();

    let mine: Vec<GoalId> = f
        .service
        .get_goals_by_owner(&u1())
        .await
        .unwrap()
        .iter()
        .map(|g| g.id())
        .collect();
    let theirs: Vec<GoalId> = f
        .service
        .get_goals_by_owner(&u2())
        .await
        .unwrap()
        .iter()
        .map(|g| g.id())
        .collect();

    assert_eq!(mine, vec![a.id(), c.id()]);
    assert_eq!(theirs, vec![b.id()]);
}

#[tokio::test]
async fn owner_without_goals_gets_empty_list() {
    let f = fixture();
    f.service.create_goal(&u1(), GoalPayload::titled("a")).await.unwrap();

    let goals = f.service.get_goals_by_owner(&u3()).await.unwrap();

    assert!(goals.is_empty());
}

#[tokio::test]
async fn non_owner_delete_leaves_goal_in_place() {
    let f = fixture();
    let goal = f.service.create_goal(&u1(), GoalPayload::titled("keep")).await.unwrap();

    let err = f.service.delete_goal(&u2(), goal.id()).await.unwrap_err();

    assert!(matches!(err, GoalError::Forbidden(_)));
    let stored = f.store.find_by_id(goal.id()).await.unwrap().unwrap();
    assert_eq!(stored, goal);
}

#[tokio::test]
async fn missing_goal_is_not_found_for_any_caller() {
    let f = fixture();
    let missing = GoalId::new(404);

    let update = f
        .service
        .update_goal(&u2(), missing, GoalPayload::titled("x"))
        .await
        .unwrap_err();
    let delete = f.service.delete_goal(&u2(), missing).await.unwrap_err();

    assert!(matches!(update, GoalError::NotFound(_)));
    assert!(matches!(delete, GoalError::NotFound(_)));
}

#[tokio::test]
async fn deleted_goal_is_absent_from_store() {
    let f = fixture();
    let goal = f.service.create_goal(&u1(), GoalPayload::titled("gone")).await.unwrap();

    f.service.delete_goal(&u1(), goal.id()).await.unwrap();

    assert!(f.store.find_by_id(goal.id()).await.unwrap().is_none());
    let err = f.service.delete_goal(&u2(), goal.id()).await.unwrap_err();
    assert!(matches!(err, GoalError::NotFound(_)));
}

// =============================================================================
// Ownership assignment
// =============================================================================

#[tokio::test]
async fn payload_cannot_choose_owner() {
    let f = fixture();
    let payload: GoalPayload =
        serde_json::from_str(r#"{"title":"Mine","ownerId":2}"#).unwrap();

    let goal = f.service.create_goal(&u1(), payload).await.unwrap();

    assert_eq!(goal.owner_id(), OwnerId::new(1).unwrap());
    assert!(f.service.get_goals_by_owner(&u2()).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_never_changes_owner() {
    let f = fixture();
    let goal = f.service.create_goal(&u1(), GoalPayload::titled("a")).await.unwrap();
    let payload: GoalPayload =
        serde_json::from_str(r#"{"title":"b","ownerId":2,"id":99}"#).unwrap();

    let updated = f.service.update_goal(&u1(), goal.id(), payload).await.unwrap();

    assert_eq!(updated.id(), goal.id());
    assert_eq!(updated.owner_id(), goal.owner_id());
}

// =============================================================================
// Full replace
// =============================================================================

#[tokio::test]
async fn omitted_fields_reset_on_update() {
    let f = fixture();
    let full: GoalPayload = serde_json::from_str(
        r##"{
            "title": "Save",
            "description": "every month",
            "interval": "monthly",
            "dueDate": "2030-01-01T00:00:00Z",
            "taskUnitCount": 12,
            "pledgeAmount": 50.5,
            "labelColor": "#00ff00",
            "completionState": "in_progress"
        }"##,
    )
    .unwrap();
    let goal = f.service.create_goal(&u1(), full).await.unwrap();
    assert_eq!(goal.details().task_unit_count(), 12);
    assert!(goal.details().due_date().is_some());

    let updated = f
        .service
        .update_goal(&u1(), goal.id(), GoalPayload::titled("Save more"))
        .await
        .unwrap();

    let d = updated.details();
    assert_eq!(d.title(), "Save more");
    assert_eq!(d.description(), "");
    assert_eq!(d.interval(), None);
    assert!(d.due_date().is_none());
    assert_eq!(d.task_unit_count(), 0);
    assert_eq!(d.pledge_amount(), None);
    assert_eq!(d.label_color(), "");
    assert_eq!(d.completion_state(), CompletionState::NotStarted);
    assert!(updated.version() > goal.version());
}

// =============================================================================
// Failure ordering
// =============================================================================

#[tokio::test]
async fn unauthenticated_caller_touches_nothing() {
    let f = fixture();
    let goal = f.service.create_goal(&u1(), GoalPayload::titled("a")).await.unwrap();
    let stranger = CallerCredential::new("nobody");

    let create = f
        .service
        .create_goal(&stranger, GoalPayload::titled("b"))
        .await
        .unwrap_err();
    let list = f.service.get_goals_by_owner(&CallerCredential::anonymous()).await.unwrap_err();
    let delete = f.service.delete_goal(&stranger, GoalId::new(9999)).await.unwrap_err();

    assert!(matches!(create, GoalError::Unauthenticated(AuthError::InvalidToken)));
    assert!(matches!(list, GoalError::Unauthenticated(AuthError::MissingCredential)));
    assert!(matches!(delete, GoalError::Unauthenticated(_)));
    assert_eq!(f.store.len().await, 1);
    assert_eq!(f.store.find_by_id(goal.id()).await.unwrap().unwrap(), goal);
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_store_access() {
    let f = fixture();

    let err = f
        .service
        .create_goal(
            &u1(),
            GoalPayload {
                title: Some("  ".to_string()),
                ..GoalPayload::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, GoalError::InvalidInput { ref field, .. } if field == "title"));
    assert!(f.store.is_empty().await);
}

#[tokio::test]
async fn negative_unit_count_is_invalid_on_update() {
    let f = fixture();
    let goal = f.service.create_goal(&u1(), GoalPayload::titled("a")).await.unwrap();
    let payload = GoalPayload {
        title: Some("a".to_string()),
        task_unit_count: Some(-1),
        ..GoalPayload::default()
    };

    let err = f.service.update_goal(&u1(), goal.id(), payload).await.unwrap_err();

    assert!(matches!(err, GoalError::InvalidInput { .. }));
    assert_eq!(f.store.find_by_id(goal.id()).await.unwrap().unwrap(), goal);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn concurrent_updates_never_lose_a_write_silently() {
    let f = fixture();
    let service = Arc::new(f.service);
    let goal = service.create_goal(&u1(), GoalPayload::titled("start")).await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        let id = goal.id();
        tasks.push(tokio::spawn(async move {
            service
                .update_goal(&u1(), id, GoalPayload::titled(format!("writer {i}")))
                .await
        }));
    }

    let mut applied = 0u64;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => applied += 1,
            Err(GoalError::Conflict(id)) => assert_eq!(id, goal.id()),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    let stored = f.store.find_by_id(goal.id()).await.unwrap().unwrap();
    assert!(applied >= 1);
    assert_eq!(stored.version(), goal.version() + applied);
}

#[tokio::test]
async fn concurrent_deletes_succeed_once() {
    let f = fixture();
    let service = Arc::new(f.service);
    let goal = service.create_goal(&u1(), GoalPayload::titled("once")).await.unwrap();

    let caller = u1();
    let (a, b) = tokio::join!(
        service.delete_goal(&caller, goal.id()),
        service.delete_goal(&caller, goal.id())
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
    for result in [a, b] {
        if let Err(err) = result {
            assert!(matches!(err, GoalError::NotFound(_) | GoalError::Conflict(_)));
        }
    }
    assert!(f.store.is_empty().await);
}
