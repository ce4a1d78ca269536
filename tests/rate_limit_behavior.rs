//! Behavior-driven tests for debounce, throttle and the refresh poller
//!
//! These tests verify WHEN wrapped callbacks actually run, using paused Tokio
//! time and a fake governor clock so no test waits on the wall clock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use governor::clock::FakeRelativeClock;
use stockdesk_core::{debounce, throttle_with_clock, RefreshPoller, DEFAULT_REFRESH_INTERVAL};
use tokio::time::sleep;

// =============================================================================
// Debounce: Search As You Type
// =============================================================================

#[tokio::test(start_paused = true)]
async fn when_user_types_quickly_only_final_query_is_searched() {
    // Given: A search box debounced at 300ms
    let searched = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&searched);
    let search = debounce(
        move |query: String| sink.lock().expect("sink lock").push(query),
        Duration::from_millis(300),
    );

    // When: Four keystrokes arrive 100ms apart
    for query in ["a", "ap", "app", "appl"] {
        search.call(String::from(query));
        sleep(Duration::from_millis(100)).await;
    }

    // Then: Nothing has fired while typing continues
    assert!(searched.lock().expect("sink lock").is_empty());

    // And: Only the last query fires once the user pauses
    sleep(Duration::from_millis(250)).await;
    assert_eq!(*searched.lock().expect("sink lock"), vec!["appl"]);
}

#[tokio::test(start_paused = true)]
async fn when_calls_are_spaced_beyond_wait_each_one_fires() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let debounced = debounce(
        move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_millis(50),
    );

    debounced.call(());
    sleep(Duration::from_millis(60)).await;
    debounced.call(());
    sleep(Duration::from_millis(60)).await;

    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn when_pending_call_is_cancelled_it_never_fires() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let debounced = debounce(
        move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_millis(50),
    );

    debounced.call(());
    assert!(debounced.is_pending());
    assert!(debounced.cancel());

    sleep(Duration::from_millis(200)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(!debounced.cancel());
}

// =============================================================================
// Throttle: Refresh Button
// =============================================================================

#[test]
fn when_refresh_is_clicked_repeatedly_only_first_click_in_window_runs() {
    // Given: A refresh action throttled to once per second
    let clock = FakeRelativeClock::default();
    let refresh = throttle_with_clock(|click: u32| click, Duration::from_secs(1), &clock);

    // When: The user clicks three times in quick succession
    let outcomes: Vec<Option<u32>> = (1..=3).map(|click| refresh.call(click)).collect();

    // Then: Only the first click ran and returned its result
    assert_eq!(outcomes, vec![Some(1), None, None]);

    // When: The window has passed
    clock.advance(Duration::from_secs(1));

    // Then: The next click runs again
    assert_eq!(refresh.call(4), Some(4));
    assert_eq!(refresh.call(5), None);
}

#[test]
fn when_two_throttles_wrap_same_action_windows_are_independent() {
    let clock = FakeRelativeClock::default();
    let runs = AtomicUsize::new(0);
    let action = |()| runs.fetch_add(1, Ordering::SeqCst);

    let first = throttle_with_clock(action, Duration::from_secs(5), &clock);
    let second = throttle_with_clock(action, Duration::from_secs(5), &clock);

    assert!(first.call(()).is_some());
    assert!(second.call(()).is_some());
    assert!(first.call(()).is_none());
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Poller: Portfolio Auto-Refresh
// =============================================================================

#[tokio::test(start_paused = true)]
async fn when_portfolio_page_is_open_it_refreshes_every_thirty_seconds() {
    // Given: A poller on the default interval
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let poller = RefreshPoller::spawn(DEFAULT_REFRESH_INTERVAL, move || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        }
    });

    // When: Two minutes pass
    sleep(Duration::from_secs(121)).await;

    // Then: Four refreshes ran and stopping reports them
    assert_eq!(count.load(Ordering::SeqCst), 4);
    assert_eq!(poller.stop().await, 4);
}
