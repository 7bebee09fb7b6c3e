//! Match service behaviour against the in-memory port
//!
//! These tests cover the service contract without a database: validation
//! short-circuits, not-found reporting, and counter arithmetic.

use std::sync::Arc;

use proptest::prelude::*;

use core_kernel::MatchId;
use domain_match::ports::mock::MockMatchPort;
use domain_match::{MatchEvent, MatchInput, MatchService};
use test_utils::*;

fn service() -> (MatchService, Arc<MockMatchPort>) {
    let port = Arc::new(MockMatchPort::new());
    (MatchService::new(port.clone()), port)
}

async fn record(service: &MatchService, id: MatchId, event: MatchEvent) {
    let result = match event {
        MatchEvent::Goal => service.increment_goals(id).await,
        MatchEvent::YellowCard => service.increment_yellow_cards(id).await,
        MatchEvent::RedCard => service.increment_red_cards(id).await,
        MatchEvent::ExtraTime => service.set_extra_time(id).await,
    };
    result.unwrap();
}

#[tokio::test]
async fn test_create_then_get_returns_fresh_match() {
    let (service, _) = service();
    let id = service.create_match(MatchFixtures::clasico()).await.unwrap();

    let stored = service.get_match(id).await.unwrap();
    assert_eq!(stored.home_team, "Barcelona");
    assert_eq!(stored.away_team, "Real Madrid");
    assert_eq!(stored.match_date, DateFixtures::clasico());
    assert_fresh(&stored);
}

#[tokio::test]
async fn test_two_goals() {
    let (service, _) = service();
    let id = service.create_match(MatchFixtures::clasico()).await.unwrap();

    service.increment_goals(id).await.unwrap();
    service.increment_goals(id).await.unwrap();

    let stored = service.get_match(id).await.unwrap();
    assert_tally(&stored, &EventTally { goals: 2, ..EventTally::default() });
}

#[tokio::test]
async fn test_extra_time_is_idempotent() {
    let (service, _) = service();
    let id = service.create_match(MatchFixtures::sevilla_derby()).await.unwrap();

    service.set_extra_time(id).await.unwrap();
    service.set_extra_time(id).await.unwrap();

    let stored = service.get_match(id).await.unwrap();
    assert_tally(&stored, &EventTally { extra_time: true, ..EventTally::default() });
}

#[tokio::test]
async fn test_update_keeps_counters() {
    let (service, _) = service();
    let id = service.create_match(MatchFixtures::clasico()).await.unwrap();
    service.increment_red_cards(id).await.unwrap();

    let replacement = TestMatchInputBuilder::new()
        .with_home_team("  Girona ")
        .with_away_team("Valencia")
        .with_raw_date("2025-06-01")
        .build();
    service.update_match(id, replacement).await.unwrap();

    let stored = service.get_match(id).await.unwrap();
    assert_eq!(stored.home_team, "Girona");
    assert_eq!(stored.away_team, "Valencia");
    assert_tally(&stored, &EventTally { red_cards: 1, ..EventTally::default() });
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (service, _) = service();
    let id = service.create_match(MatchFixtures::random()).await.unwrap();

    service.delete_match(id).await.unwrap();

    assert_not_found(service.get_match(id).await, id);
    assert_not_found(service.delete_match(id).await, id);
}

#[tokio::test]
async fn test_every_id_operation_reports_missing_match() {
    let (service, _) = service();
    let missing = MatchId::new(999);

    assert_not_found(service.get_match(missing).await, missing);
    assert_not_found(service.update_match(missing, MatchFixtures::clasico()).await, missing);
    assert_not_found(service.delete_match(missing).await, missing);
    assert_not_found(service.increment_goals(missing).await, missing);
    assert_not_found(service.increment_yellow_cards(missing).await, missing);
    assert_not_found(service.increment_red_cards(missing).await, missing);
    assert_not_found(service.set_extra_time(missing).await, missing);
}

#[tokio::test]
async fn test_validation_names_the_offending_field() {
    let (service, port) = service();

    assert_validation_error(service.create_match(MatchFixtures::blank_home_team()).await, "homeTeam");
    assert_validation_error(service.create_match(MatchFixtures::empty_away_team()).await, "awayTeam");
    assert_validation_error(service.create_match(MatchFixtures::slash_date()).await, "matchDate");
    assert_validation_error(service.create_match(MatchFixtures::impossible_date()).await, "matchDate");

    assert_eq!(port.write_count(), 0);
    assert!(service.list_matches().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (service, _) = service();
    let first = service.create_match(MatchFixtures::clasico()).await.unwrap();
    let second = service.create_match(MatchFixtures::sevilla_derby()).await.unwrap();
    let third = service.create_match(MatchFixtures::atletico_athletic()).await.unwrap();
    service.delete_match(second).await.unwrap();

    let ids: Vec<MatchId> = service
        .list_matches()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![first, third]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_goals_are_all_counted() {
    let (service, _) = service();
    let id = service.create_match(MatchFixtures::clasico()).await.unwrap();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.increment_goals(id).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.get_match(id).await.unwrap().goals, 50);
}

#[tokio::test]
async fn test_health_reports_port_status() {
    let (service, _) = service();
    assert!(service.health_check().await.is_healthy());
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn replayed_events_match_their_tally(events in event_sequence_strategy(40)) {
        let stored = runtime().block_on(async {
            let (service, _) = service();
            let id = service.create_match(MatchFixtures::clasico()).await.unwrap();
            for event in &events {
                record(&service, id, *event).await;
            }
            service.get_match(id).await.unwrap()
        });

        assert_tally(&stored, &EventTally::from_events(&events));
    }

    #[test]
    fn events_on_one_match_leave_others_untouched(events in event_sequence_strategy(20)) {
        let (target, bystander) = runtime().block_on(async {
            let (service, _) = service();
            let target = service.create_match(MatchFixtures::clasico()).await.unwrap();
            let bystander = service.create_match(MatchFixtures::sevilla_derby()).await.unwrap();
            for event in &events {
                record(&service, target, *event).await;
            }
            (
                service.get_match(target).await.unwrap(),
                service.get_match(bystander).await.unwrap(),
            )
        });

        assert_tally(&target, &EventTally::from_events(&events));
        assert_fresh(&bystander);
    }

    #[test]
    fn valid_input_round_trips_through_the_store(input in valid_input_strategy()) {
        let expected = input.clone();
        let stored = runtime().block_on(async {
            let (service, _) = service();
            let id = service.create_match(input).await.unwrap();
            service.get_match(id).await.unwrap()
        });

        prop_assert_eq!(stored.home_team, expected.home_team);
        prop_assert_eq!(stored.away_team, expected.away_team);
        prop_assert_eq!(core_kernel::format_match_date(stored.match_date), expected.match_date);
    }

    #[test]
    fn malformed_dates_never_reach_the_store(date in malformed_date_strategy()) {
        let (result, writes) = runtime().block_on(async {
            let (service, port) = service();
            let result = service
                .create_match(MatchInput::new("Barcelona", "Real Madrid", date))
                .await;
            (result, port.write_count())
        });

        prop_assert!(result.unwrap_err().is_validation());
        prop_assert_eq!(writes, 0);
    }

    #[test]
    fn blank_team_names_are_rejected(blank in blank_team_name_strategy()) {
        let result = runtime().block_on(async {
            let (service, _) = service();
            service.create_match(MatchInput::new(blank, "Real Madrid", "2025-04-01")).await
        });

        assert_validation_error(result, "homeTeam");
    }
}
