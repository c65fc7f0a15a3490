//! Target lock state machine behavior under paused tokio time.

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use approx::assert_abs_diff_eq;
use common::{init_logging, star, star_store, test_location};
use reticle::{
    Attitude, LockPhase, SharedObserver, TargetTracker, ToggleOutcome, TrackerConfig,
    TrackerError, TrackerEvent,
};

const WAIT: Duration = Duration::from_secs(10);

fn tracker_setup() -> (TargetTracker, SharedObserver, Arc<Mutex<Vec<TrackerEvent>>>) {
    init_logging();
    let observer = SharedObserver::new();
    let tracker = TargetTracker::new(
        TrackerConfig { realign_wait: WAIT },
        observer.clone(),
    );

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    tracker.register_callback(move |event| {
        sink.lock().unwrap().push(event.clone());
    });

    (tracker, observer, events)
}

fn aim_observer(observer: &SharedObserver) {
    observer.update_location(test_location());
    observer.update_attitude(Attitude {
        yaw_deg: 20.0,
        pitch_deg: -40.0,
    });
}

#[tokio::test(start_paused = true)]
async fn search_commits_after_the_wait() {
    let (tracker, observer, events) = tracker_setup();
    aim_observer(&observer);
    let store = star_store(vec![star(32349, "Sirius", 101.28, -16.71)], Vec::new());

    let outcome = tracker.toggle(&store).unwrap();
    assert_eq!(
        outcome,
        ToggleOutcome::SearchStarted {
            target: "Sirius".to_string()
        }
    );
    assert_eq!(tracker.phase(), LockPhase::Searching);
    assert!(tracker.active_offset().is_none());

    // Paused time auto-advances past the re-aim window.
    tokio::time::sleep(WAIT + Duration::from_secs(1)).await;

    assert!(tracker.is_locked());
    assert_eq!(tracker.locked_target().unwrap().name, "Sirius");

    // offset = target alt/az minus the device attitude at commit time.
    let offset = tracker.active_offset().unwrap();
    let (attitude, location) = observer.sample();
    let horizontal = sky_math::ra_dec_to_alt_az(
        101.28,
        -16.71,
        location.unwrap().latitude_deg,
        location.unwrap().longitude_deg,
        time::OffsetDateTime::now_utc(),
    );
    assert_abs_diff_eq!(
        offset.yaw_deg,
        horizontal.az_deg - attitude.unwrap().yaw_deg,
        epsilon = 1e-3
    );
    assert_abs_diff_eq!(
        offset.pitch_deg,
        horizontal.alt_deg - attitude.unwrap().pitch_deg,
        epsilon = 1e-3
    );

    let events = events.lock().unwrap();
    assert!(matches!(events[0], TrackerEvent::SearchStarted { .. }));
    assert!(matches!(events[1], TrackerEvent::Locked { .. }));
}

#[tokio::test(start_paused = true)]
async fn unlock_toggle_clears_everything_atomically() {
    let (tracker, observer, events) = tracker_setup();
    aim_observer(&observer);
    let store = star_store(vec![star(32349, "Sirius", 101.28, -16.71)], Vec::new());

    tracker.toggle(&store).unwrap();
    tokio::time::sleep(WAIT + Duration::from_secs(1)).await;
    assert!(tracker.is_locked());

    let outcome = tracker.toggle(&store).unwrap();
    assert_eq!(outcome, ToggleOutcome::LockCleared);
    assert_eq!(tracker.phase(), LockPhase::Unlocked);
    assert!(tracker.active_offset().is_none());
    assert!(tracker.locked_target().is_none());
    assert!(events
        .lock()
        .unwrap()
        .contains(&TrackerEvent::LockCleared));
}

#[tokio::test(start_paused = true)]
async fn cancel_during_wait_prevents_the_commit() {
    let (tracker, observer, events) = tracker_setup();
    aim_observer(&observer);
    let store = star_store(vec![star(32349, "Sirius", 101.28, -16.71)], Vec::new());

    tracker.toggle(&store).unwrap();
    let outcome = tracker.toggle(&store).unwrap();
    assert_eq!(outcome, ToggleOutcome::SearchCancelled);
    assert_eq!(tracker.phase(), LockPhase::Unlocked);

    // Let the stale task's wait elapse; its commit must be discarded.
    tokio::time::sleep(WAIT * 2).await;

    assert!(!tracker.is_locked());
    assert_eq!(tracker.phase(), LockPhase::Unlocked);
    let events = events.lock().unwrap();
    assert!(events.contains(&TrackerEvent::SearchCancelled));
    assert!(!events
        .iter()
        .any(|e| matches!(e, TrackerEvent::Locked { .. })));
}

#[tokio::test(start_paused = true)]
async fn a_new_search_supersedes_a_cancelled_one() {
    let (tracker, observer, events) = tracker_setup();
    aim_observer(&observer);
    let store = star_store(vec![star(32349, "Sirius", 101.28, -16.71)], Vec::new());

    tracker.toggle(&store).unwrap();
    tracker.toggle(&store).unwrap();
    let outcome = tracker.toggle(&store).unwrap();
    assert!(matches!(outcome, ToggleOutcome::SearchStarted { .. }));

    tokio::time::sleep(WAIT * 3).await;

    // Only the second search commits, exactly once.
    assert!(tracker.is_locked());
    let events = events.lock().unwrap();
    let locks = events
        .iter()
        .filter(|e| matches!(e, TrackerEvent::Locked { .. }))
        .count();
    assert_eq!(locks, 1);
}

#[tokio::test(start_paused = true)]
async fn motion_loss_during_wait_aborts_the_lock() {
    let (tracker, observer, events) = tracker_setup();
    aim_observer(&observer);
    let store = star_store(vec![star(32349, "Sirius", 101.28, -16.71)], Vec::new());

    tracker.toggle(&store).unwrap();
    observer.clear_attitude();

    tokio::time::sleep(WAIT + Duration::from_secs(1)).await;

    assert_eq!(tracker.phase(), LockPhase::Unlocked);
    assert!(events.lock().unwrap().iter().any(|e| matches!(
        e,
        TrackerEvent::SearchAborted {
            reason: reticle::AbortReason::MotionDataLost
        }
    )));
}

#[tokio::test(start_paused = true)]
async fn search_requires_sensors_and_candidates() {
    let (tracker, observer, _events) = tracker_setup();
    let store = star_store(Vec::new(), Vec::new());

    // No fixes at all.
    assert_eq!(tracker.toggle(&store), Err(TrackerError::SensorNotReady));

    // Location alone is not enough.
    observer.update_location(test_location());
    assert_eq!(tracker.toggle(&store), Err(TrackerError::SensorNotReady));

    // Both fixes but an empty catalog.
    observer.update_attitude(Attitude {
        yaw_deg: 0.0,
        pitch_deg: 0.0,
    });
    assert_eq!(tracker.toggle(&store), Err(TrackerError::NoCandidates));
    assert_eq!(tracker.phase(), LockPhase::Unlocked);
}
