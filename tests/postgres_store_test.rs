//! Runs against a real Postgres database. Set `DATABASE_URL` (directly or in
//! `.env`) to enable; without it every test returns early.

use std::env;
use std::sync::Arc;

use chrono::{Duration, DurationRound, Utc};
use polls::{
    database::{
        pool::{create_pool, run_migrations},
        postgres::PgStore,
        repository::{ChoiceRepository, QuestionRepository},
    },
    utils::time::FixedClock,
    AppState,
};

async fn setup_store() -> Option<PgStore> {
    dotenvy::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping Postgres store test");
        return None;
    };
    let pool = create_pool(&database_url, 5).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    Some(PgStore::new(pool))
}

fn unique(label: &str) -> String {
    format!("{} {}", label, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn create_list_and_get_round_trip() {
    let Some(store) = setup_store().await else {
        return;
    };
    // Postgres keeps microseconds.
    let now = Utc::now().duration_trunc(Duration::microseconds(1)).unwrap();
    let pub_date = now - Duration::days(2);
    let text = unique("pg question");

    let created = store.create(&text, pub_date).await.expect("create");
    assert!(created.id > 0);
    assert_eq!(created.question_text, text);
    assert_eq!(created.pub_date, pub_date);

    let fetched = store.get_by_id(created.id).await.expect("get");
    assert_eq!(fetched, Some(created.clone()));

    let all = store.list_all().await.expect("list");
    assert!(all.contains(&created));

    assert_eq!(store.get_by_id(-1).await.expect("get missing"), None);
}

#[tokio::test]
async fn choices_come_back_in_creation_order() {
    let Some(store) = setup_store().await else {
        return;
    };
    let question = store
        .create(&unique("pg ordering"), Utc::now())
        .await
        .expect("create");

    let first = store.create_choice(question.id, "first").await.unwrap();
    let second = store.create_choice(question.id, "second").await.unwrap();
    let third = store.create_choice(question.id, "third").await.unwrap();

    let ids: Vec<i64> = store
        .list_choices(question.id)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert!([first.votes, second.votes, third.votes].iter().all(|v| *v == 0));
}

#[tokio::test]
async fn votes_only_count_for_the_owning_question() {
    let Some(store) = setup_store().await else {
        return;
    };
    let owner = store.create(&unique("pg owner"), Utc::now()).await.unwrap();
    let other = store.create(&unique("pg other"), Utc::now()).await.unwrap();
    let choice = store.create_choice(owner.id, "yes").await.unwrap();

    assert!(!store.increment_votes(other.id, choice.id).await.unwrap());
    assert!(store.increment_votes(owner.id, choice.id).await.unwrap());
    assert!(store.increment_votes(owner.id, choice.id).await.unwrap());
    assert!(!store.increment_votes(owner.id, -1).await.unwrap());

    let choices = store.list_choices(owner.id).await.unwrap();
    assert_eq!(choices[0].votes, 2);
    assert!(store.list_choices(other.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_votes_are_all_counted() {
    let Some(store) = setup_store().await else {
        return;
    };
    let store = Arc::new(store);
    let question = store.create(&unique("pg race"), Utc::now()).await.unwrap();
    let choice = store.create_choice(question.id, "busy").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.increment_votes(question.id, choice.id).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let choices = store.list_choices(question.id).await.unwrap();
    assert_eq!(choices[0].votes, 20);
}

#[tokio::test]
async fn service_hides_pending_questions_stored_in_postgres() {
    let Some(store) = setup_store().await else {
        return;
    };
    let now = Utc::now();
    let state = AppState::new(Arc::new(store.clone()), Arc::new(FixedClock(now)));
    let pending = store
        .create(&unique("pg pending"), now + Duration::days(1))
        .await
        .unwrap();

    let latest = state.question_service.latest().await.unwrap();
    assert!(latest.iter().all(|q| q.id != pending.id));
    assert!(state.question_service.get_visible(pending.id).await.is_err());
    let added = state.question_service.add_choice(pending.id, "too early").await;
    assert!(added.is_err());
}
