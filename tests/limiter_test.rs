//! Tests for the FIFO concurrency limiter on upstream requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use pantry::RequestLimiter;
use tokio::sync::mpsc;

#[tokio::test(start_paused = true)]
async fn never_exceeds_limit() {
    let limiter = RequestLimiter::new(2);
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let limiter = limiter.clone();
        let in_flight = Arc::clone(&in_flight);
        let peak = Arc::clone(&peak);
        handles.push(tokio::spawn(async move {
            let _permit = limiter.acquire().await.unwrap();
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    assert_eq!(peak.load(Ordering::SeqCst), 2);
    assert_eq!(limiter.available(), 2);
}

#[tokio::test(start_paused = true)]
async fn waiters_are_served_in_arrival_order() {
    let limiter = RequestLimiter::new(2);
    let first = limiter.acquire().await.unwrap();
    let _second = limiter.acquire().await.unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    for id in 1..=3 {
        let limiter = limiter.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let permit = limiter.acquire().await.unwrap();
            tx.send(id).unwrap();
            permit.release();
        });
        // let the waiter reach the queue before spawning the next one
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    drop(tx);
    assert_eq!(limiter.available(), 0);

    // A single freed permit is handed down the queue one waiter at a time.
    first.release();

    let mut order = Vec::new();
    while let Some(id) = rx.recv().await {
        order.push(id);
    }
    assert_eq!(order, vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn released_permit_goes_to_waiter_not_newcomer() {
    let limiter = RequestLimiter::new(1);
    let held = limiter.acquire().await.unwrap();

    let waiter = {
        let limiter = limiter.clone();
        tokio::spawn(async move {
            let _permit = limiter.acquire().await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;

    held.release();
    // The waiter already owns the freed permit, so a newcomer cannot take it.
    assert!(limiter.try_acquire().is_none());

    waiter.await.unwrap();
    assert!(limiter.try_acquire().is_some());
}

#[tokio::test(start_paused = true)]
async fn abandoned_holder_releases_permit() {
    let limiter = RequestLimiter::new(1);

    let holder = {
        let limiter = limiter.clone();
        tokio::spawn(async move {
            let _permit = limiter.acquire().await.unwrap();
            tokio::time::sleep(Duration::from_secs(3600)).await;
        })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(limiter.available(), 0);

    holder.abort();
    let _ = holder.await;
    assert_eq!(limiter.available(), 1);
}

#[test]
fn default_limit_is_two() {
    assert_eq!(RequestLimiter::default().limit(), 2);
}
