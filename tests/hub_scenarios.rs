//! End-to-end notification scenarios against the public hub API.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio_test::assert_ok;
use weather_hub::device::DisplayDevice;
use weather_hub::error::SubscriberError;
use weather_hub::hub::{NotificationHub, Reading, Subscriber};

type Log = Arc<Mutex<Vec<(&'static str, Reading)>>>;

/// Subscriber that appends `(name, reading)` to a log shared with the test.
struct Recorder {
    name: &'static str,
    log: Log,
}

impl Recorder {
    fn new(name: &'static str, log: &Log) -> Arc<Self> {
        Arc::new(Self {
            name,
            log: log.clone(),
        })
    }
}

impl Subscriber for Recorder {
    fn on_update(&self, reading: &Reading) -> Result<(), SubscriberError> {
        self.log.lock().push((self.name, *reading));
        Ok(())
    }
}

fn drain(log: &Log) -> Vec<(&'static str, Reading)> {
    std::mem::take(&mut *log.lock())
}

#[test]
fn test_subscribe_unsubscribe_publish_scenario() {
    let log: Log = Arc::default();
    let hub = NotificationHub::new();
    let a = Recorder::new("A", &log);
    let b = Recorder::new("B", &log);
    let c = Recorder::new("C", &log);

    hub.subscribe(a.clone());
    hub.subscribe(b.clone());
    hub.subscribe(c.clone());

    let first = Reading::new(21.0, 40.0);
    assert_ok!(hub.publish(first));
    assert_eq!(drain(&log), vec![("A", first), ("B", first), ("C", first)]);

    assert!(hub.unsubscribe(&b));
    let second = Reading::new(22.0, 41.0);
    assert_ok!(hub.publish(second));
    assert_eq!(drain(&log), vec![("A", second), ("C", second)]);
    assert_eq!(hub.latest(), Some(second));
}

#[test]
fn test_duplicate_subscription_notified_twice() {
    let log: Log = Arc::default();
    let hub = NotificationHub::new();
    let a = Recorder::new("A", &log);
    hub.subscribe(a.clone());
    hub.subscribe(a.clone());

    let reading = Reading::new(18.0, 60.0);
    assert_ok!(hub.publish(reading));
    assert_eq!(drain(&log), vec![("A", reading), ("A", reading)]);
}

#[test]
fn test_duplicates_keep_fifo_position() {
    let log: Log = Arc::default();
    let hub = NotificationHub::new();
    let a = Recorder::new("A", &log);
    let b = Recorder::new("B", &log);
    hub.subscribe(a.clone());
    hub.subscribe(b.clone());
    hub.subscribe(a.clone());

    let reading = Reading::new(20.0, 50.0);
    assert_ok!(hub.publish(reading));
    let order: Vec<_> = drain(&log).into_iter().map(|(name, _)| name).collect();
    assert_eq!(order, vec!["A", "B", "A"]);
}

#[test]
fn test_unsubscribe_unknown_leaves_list_unchanged() {
    let log: Log = Arc::default();
    let hub = NotificationHub::new();
    let a = Recorder::new("A", &log);
    let b = Recorder::new("B", &log);
    hub.subscribe(a.clone());

    assert!(!hub.unsubscribe(&b));
    assert!(!hub.unsubscribe(&b));
    assert_eq!(hub.len(), 1);

    assert_ok!(hub.publish(Reading::new(20.0, 50.0)));
    let names: Vec<_> = drain(&log).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn test_identical_readings_are_not_suppressed() {
    let log: Log = Arc::default();
    let hub = NotificationHub::new();
    hub.subscribe(Recorder::new("A", &log));

    let reading = Reading::new(25.0, 35.0);
    assert_ok!(hub.publish(reading));
    assert_ok!(hub.publish(reading));
    assert_eq!(drain(&log).len(), 2);
    assert_eq!(hub.version(), 2);
}

#[test]
fn test_notified_set_matches_list_at_publish_time() {
    let log: Log = Arc::default();
    let hub = NotificationHub::new();
    let names = ["A", "B", "C", "D"];
    let recorders: Vec<_> = names.iter().map(|&n| Recorder::new(n, &log)).collect();

    for (round, recorder) in recorders.iter().enumerate() {
        hub.subscribe(recorder.clone());
        assert_ok!(hub.publish(Reading::new(round as f32, 0.0)));
        let notified: Vec<_> = drain(&log).into_iter().map(|(name, _)| name).collect();
        assert_eq!(notified, names[..=round].to_vec());
    }

    for (removed, recorder) in recorders.iter().enumerate() {
        hub.unsubscribe(recorder);
        assert_ok!(hub.publish(Reading::new(0.0, 0.0)));
        let notified: Vec<_> = drain(&log).into_iter().map(|(name, _)| name).collect();
        assert_eq!(notified, names[removed + 1..].to_vec());
    }
}

#[test]
fn test_displays_render_every_reading() {
    let hub = NotificationHub::new();
    let phone = Arc::new(DisplayDevice::new("Phone Display"));
    let tv = Arc::new(DisplayDevice::new("TV Display"));
    hub.subscribe(phone.clone());
    hub.subscribe(tv.clone());

    assert_ok!(hub.publish(Reading::new(30.5, 65.0)));
    assert_eq!(
        tv.last_rendered().as_deref(),
        Some("TV Display received Update: Temperature = 31°C || Humidity = 65%")
    );

    hub.unsubscribe(&tv);
    assert_ok!(hub.publish(Reading::new(26.2, 38.7)));
    assert_eq!(phone.updates(), 2);
    assert_eq!(tv.updates(), 1);
    assert_eq!(
        phone.last_rendered().as_deref(),
        Some("Phone Display received Update: Temperature = 26°C || Humidity = 39%")
    );
}

#[test]
fn test_hub_shared_across_threads() {
    let hub = Arc::new(NotificationHub::new());
    let display = Arc::new(DisplayDevice::new("Web Dashboard"));
    hub.subscribe(display.clone());

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let hub = hub.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    hub.publish(Reading::new(20.0 + i as f32, 40.0)).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(display.updates(), 100);
    assert_eq!(hub.version(), 100);
}
