mod common;

use common::{assert_quiet, drain, Weather};
use futures_core::Stream;
use shared_state::state::{KeyedStore, PublishedValue, SharedStateError};
use std::pin::Pin;
use std::sync::Arc;
use std::thread;

#[test]
fn read_before_write_is_none() {
    let store = KeyedStore::<Weather>::new();
    assert_eq!(store.read(Weather::TEMPERATURE).unwrap(), None);
    let view = store.read_only(Weather::TEMPERATURE).unwrap();
    assert_eq!(view.current_value(), PublishedValue::NotPublished);
}

#[test]
fn read_after_write_returns_value() {
    let store = KeyedStore::<Weather>::new();
    store.write(Weather::TEMPERATURE, 18).unwrap();
    assert_eq!(store.read(Weather::TEMPERATURE).unwrap(), Some(18));
}

#[test]
fn subscribe_after_write_replays_latest() {
    let store = KeyedStore::<Weather>::new();
    store.write(Weather::TEMPERATURE, 1).unwrap();
    store.write(Weather::TEMPERATURE, 2).unwrap();

    let mut sub = store.subscribe(Weather::TEMPERATURE).unwrap();
    assert_eq!(drain(&mut sub), vec![2]);
}

#[tokio::test]
async fn subscription_sees_every_write_in_order() {
    let store = KeyedStore::<Weather>::new();
    let mut sub = store.subscribe(Weather::COUNT).unwrap();
    let writer = store.write_only(Weather::COUNT).unwrap();

    for value in 1..=100 {
        writer.write(value);
    }

    let mut received = Vec::new();
    for _ in 0..100 {
        received.push(sub.next().await.unwrap());
    }
    assert_eq!(received, (1..=100).collect::<Vec<u64>>());
    assert_eq!(sub.try_next(), None);
}

#[tokio::test]
async fn subscriptions_are_independent() {
    let store = KeyedStore::<Weather>::new();
    let writer = store.write_only(Weather::TEMPERATURE).unwrap();
    let reader = store.read_only(Weather::TEMPERATURE).unwrap();

    // Early subscriber never consumes until the end.
    let mut slow = reader.subscribe();
    writer.write(1);
    writer.write(2);

    let mut late = reader.subscribe();
    assert_eq!(late.next().await, Some(2));
    writer.write(3);
    assert_eq!(late.next().await, Some(3));

    assert_eq!(drain(&mut slow), vec![1, 2, 3]);
    assert_eq!(drain(&mut late), Vec::<i32>::new());
}

#[test]
fn writes_do_not_leak_between_fields_of_same_type() {
    let store = KeyedStore::<Weather>::new();
    let mut humidity = store.subscribe(Weather::HUMIDITY).unwrap();

    store.write(Weather::TEMPERATURE, 30).unwrap();

    assert_eq!(store.read(Weather::HUMIDITY).unwrap(), None);
    assert_eq!(drain(&mut humidity), Vec::<i32>::new());
}

#[test]
fn same_key_resolves_to_same_cell() {
    let store = KeyedStore::<Weather>::new();
    let first = store.cell_for(Weather::TEMPERATURE).unwrap();
    let second = store.cell_for(Weather::TEMPERATURE).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    store.write_only(Weather::TEMPERATURE).unwrap().write(42);
    assert_eq!(first.read(), Some(42));
}

#[test]
fn mismatched_value_type_is_rejected() {
    let store = KeyedStore::<Weather>::new();
    store.write(Weather::TEMPERATURE, 1).unwrap();

    let as_text: shared_state::state::Field<Weather, String> =
        shared_state::state::Field::new("temperature");
    match store.read_only(as_text) {
        Err(SharedStateError::TypeMismatch {
            key,
            expected,
            found,
        }) => {
            assert_eq!(key.to_string(), "Weather.temperature");
            assert_eq!(expected, "i32");
            assert_eq!(found, std::any::type_name::<String>());
        }
        Ok(_) => panic!("expected a type mismatch"),
    }
}

#[tokio::test]
async fn temperature_scenario() {
    let store = KeyedStore::<Weather>::new();
    let writer = store.write_only(Weather::TEMPERATURE).unwrap();
    writer.write(5);
    writer.write(12);

    let mut sub = store.read_only(Weather::TEMPERATURE).unwrap().subscribe();
    assert_eq!(sub.next().await, Some(12));
    assert_quiet(&mut sub).await;

    writer.write(20);
    assert_eq!(sub.next().await, Some(20));
}

#[tokio::test]
async fn greeting_scenario() {
    let store = KeyedStore::<Weather>::new();
    let mut sub = store.read_only(Weather::GREETING).unwrap().subscribe();
    assert_quiet(&mut sub).await;

    store
        .write_only(Weather::GREETING)
        .unwrap()
        .write("hi".to_string());
    assert_eq!(sub.next().await.as_deref(), Some("hi"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_writers_last_write_wins() {
    let store = KeyedStore::<Weather>::new();
    let mut sub = store.subscribe(Weather::COUNT).unwrap();

    let tasks: Vec<_> = [1u64, 2]
        .into_iter()
        .map(|value| {
            let writer = store.write_only(Weather::COUNT).unwrap();
            tokio::spawn(async move { writer.write(value) })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let first = sub.next().await.unwrap();
    let second = sub.next().await.unwrap();
    let mut seen = vec![first, second];
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2]);
    assert_eq!(store.read(Weather::COUNT).unwrap(), Some(second));
}

#[test]
fn subscribe_racing_writer_has_no_gaps_or_duplicates() {
    let store = KeyedStore::<Weather>::new();
    let cell = store.cell_for(Weather::COUNT).unwrap();
    let writer_cell = Arc::clone(&cell);

    let writer = thread::spawn(move || {
        for value in 0..20_000u64 {
            writer_cell.write(value);
        }
    });
    // Attach while the writer is (most likely) mid-flight.
    while cell.read().is_none() {
        thread::yield_now();
    }
    let mut sub = cell.subscribe();
    writer.join().unwrap();

    let received = drain(&mut sub);
    assert!(!received.is_empty());
    for pair in received.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
    assert_eq!(received.last(), Some(&19_999));
}

#[tokio::test]
async fn subscription_is_a_stream() {
    let store = KeyedStore::<Weather>::new();
    store.write(Weather::HUMIDITY, 60).unwrap();
    let mut sub = store.subscribe(Weather::HUMIDITY).unwrap();

    let first = std::future::poll_fn(|cx| Pin::new(&mut sub).poll_next(cx)).await;
    assert_eq!(first, Some(60));

    sub.cancel();
    let after_cancel = std::future::poll_fn(|cx| Pin::new(&mut sub).poll_next(cx)).await;
    assert_eq!(after_cancel, None);
}

#[tokio::test]
async fn cancelled_subscription_is_released() {
    let store = KeyedStore::<Weather>::new();
    let cell = store.cell_for(Weather::GREETING).unwrap();

    let mut sub = cell.subscribe();
    let waiting = tokio::spawn(async move {
        let value = sub.next().await;
        (sub, value)
    });
    while cell.subscriber_count() == 0 {
        tokio::task::yield_now().await;
    }
    waiting.abort();
    assert!(waiting.await.unwrap_err().is_cancelled());
    assert_eq!(cell.subscriber_count(), 0);

    // Writing with nobody listening still updates the value.
    cell.write("later".to_string());
    assert_eq!(cell.read().as_deref(), Some("later"));
}
