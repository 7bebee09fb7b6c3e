//! MatchRepository against a real PostgreSQL
//!
//! Each test starts its own container, so these are ignored by default.
//! Run them with `cargo test -p infra_db -- --ignored`.

use std::sync::Arc;

use core_kernel::MatchId;
use domain_match::{MatchEvent, MatchService};
use infra_db::MatchRepository;
use test_utils::*;

async fn database() -> TestDatabase {
    TestDatabase::start().await.expect("test database should start")
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_then_get() {
    let db = database().await;
    let repo = db.repository();

    let id = repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();
    assert_eq!(id, MatchId::new(1));

    let stored = repo.get_match(id).await.unwrap();
    assert_eq!(stored.home_team, "Barcelona");
    assert_eq!(stored.away_team, "Real Madrid");
    assert_eq!(stored.match_date, DateFixtures::clasico());
    assert_fresh(&stored);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_each_mutator_touches_only_its_column() {
    let db = database().await;
    let repo = db.repository();
    let id = repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();

    repo.increment_goals(id).await.unwrap();
    repo.increment_goals(id).await.unwrap();
    repo.increment_yellow_cards(id).await.unwrap();
    repo.increment_red_cards(id).await.unwrap();
    repo.set_extra_time(id).await.unwrap();
    repo.set_extra_time(id).await.unwrap();

    let stored = repo.get_match(id).await.unwrap();
    assert_tally(
        &stored,
        &EventTally {
            goals: 2,
            yellow_cards: 1,
            red_cards: 1,
            extra_time: true,
        },
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_keeps_counters() {
    let db = database().await;
    let repo = db.repository();
    let id = repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();
    repo.increment_yellow_cards(id).await.unwrap();

    let replacement = TestMatchInputBuilder::new()
        .with_home_team("Girona")
        .with_away_team("Valencia")
        .with_date(DateFixtures::sevilla_derby())
        .build_details();
    repo.update_match(id, &replacement).await.unwrap();

    let stored = repo.get_match(id).await.unwrap();
    assert_eq!(stored.details(), replacement);
    assert_eq!(stored.yellow_cards, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_ids_are_not_found() {
    let db = database().await;
    let repo = db.repository();
    let missing = MatchId::new(42);
    let details = MatchFixtures::clasico_details();

    assert_not_found(repo.get_match(missing).await, missing);
    assert_not_found(repo.update_match(missing, &details).await, missing);
    assert_not_found(repo.delete_match(missing).await, missing);
    assert_not_found(repo.increment_goals(missing).await, missing);
    assert_not_found(repo.increment_yellow_cards(missing).await, missing);
    assert_not_found(repo.increment_red_cards(missing).await, missing);
    assert_not_found(repo.set_extra_time(missing).await, missing);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_removes_the_row() {
    let db = database().await;
    let repo = db.repository();
    let id = repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();

    repo.delete_match(id).await.unwrap();

    assert_not_found(repo.get_match(id).await, id);
    assert!(repo.list_matches().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_is_ordered_by_id() {
    let db = database().await;
    let repo = db.repository();

    let mut created = Vec::new();
    for _ in 0..5 {
        let details = MatchFixtures::random().into_details().unwrap();
        created.push(repo.create_match(&details).await.unwrap());
    }

    let listed: Vec<MatchId> = repo.list_matches().await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(listed, created);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires Docker"]
async fn test_concurrent_increments_are_not_lost() {
    let db = database().await;
    let repo = db.repository();
    let id = repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();

    let handles: Vec<_> = (0..40)
        .map(|n| {
            let repo = repo.clone();
            let event = if n % 2 == 0 { MatchEvent::Goal } else { MatchEvent::YellowCard };
            tokio::spawn(async move {
                match event {
                    MatchEvent::Goal => repo.increment_goals(id).await,
                    _ => repo.increment_yellow_cards(id).await,
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = repo.get_match(id).await.unwrap();
    assert_eq!(stored.goals, 20);
    assert_eq!(stored.yellow_cards, 20);
    assert_eq!(stored.red_cards, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_over_repository() {
    let db = database().await;
    let service = MatchService::new(Arc::new(db.repository()));

    let id = service.create_match(MatchFixtures::sevilla_derby()).await.unwrap();
    service.increment_red_cards(id).await.unwrap();

    assert_eq!(service.get_match(id).await.unwrap().red_cards, 1);
    assert!(service.health_check().await.is_healthy());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_clear_data_restarts_ids() {
    let db = database().await;
    let repo = db.repository();
    repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();
    repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();

    db.clear_data().await.unwrap();

    let id = repo.create_match(&MatchFixtures::clasico_details()).await.unwrap();
    assert_eq!(id, MatchId::new(1));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_initialize_reconnects_with_the_same_config() {
    let db = database().await;

    let pool = infra_db::initialize(&db.config).await.unwrap();
    let repo = MatchRepository::new(pool);
    assert!(repo.list_matches().await.unwrap().is_empty());
}
